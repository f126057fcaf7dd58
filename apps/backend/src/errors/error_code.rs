//! Error codes for the Fairway API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that
//! appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the Fairway API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication & Authorization
    /// Missing or incorrect admin key
    Unauthorized,
    /// Score editing is not configured on this server
    AdminEditingDisabled,

    // Request Validation
    /// Body is not a usable score update payload
    InvalidPayload,
    /// Player is not on the round's season roster
    InvalidPlayerId,
    /// Gross or net outside the accepted stroke range
    InvalidStrokeCount,
    /// General bad request error
    BadRequest,

    // Resource Not Found
    SeasonNotFound,
    PlayerNotFound,
    RoundNotFound,
    /// General not found error
    NotFound,

    // System Errors
    /// Backing store failed or is unreachable
    StoreUnavailable,
    /// Database error
    DbError,
    /// Stored data violates an expected shape
    DataCorruption,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::AdminEditingDisabled => "ADMIN_EDITING_DISABLED",

            Self::InvalidPayload => "INVALID_PAYLOAD",
            Self::InvalidPlayerId => "INVALID_PLAYER_ID",
            Self::InvalidStrokeCount => "INVALID_STROKE_COUNT",
            Self::BadRequest => "BAD_REQUEST",

            Self::SeasonNotFound => "SEASON_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::RoundNotFound => "ROUND_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::StoreUnavailable => "STORE_UNAVAILABLE",
            Self::DbError => "DB_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
