pub mod admin_key;
pub mod validated_json;

pub use admin_key::AdminKey;
pub use validated_json::ValidatedJson;
