//! Validation of score update batches.
//!
//! A batch is checked in full before anything is written; the first invalid
//! entry rejects the whole batch.

use std::collections::HashSet;

use serde::{Deserialize, Deserializer};
use serde_json::Number;

use crate::domain::league::{Player, ScoreUpdate};
use crate::errors::domain::{DomainError, ValidationKind};

pub const MIN_STROKES: i64 = 40;
pub const MAX_STROKES: i64 = 200;

/// Request body of a score update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoresPayload {
    #[serde(default)]
    pub scores: Option<Vec<ScoreEntry>>,
}

/// One unvalidated entry of a score update.
///
/// Numbers are kept as JSON numbers so fractional or huge values reach
/// validation instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreEntry {
    #[serde(default)]
    pub player_id: String,
    #[serde(default)]
    pub gross: Option<Number>,
    /// `None` when the key is absent, `Some(None)` for an explicit `null`.
    #[serde(default, deserialize_with = "present")]
    pub net: Option<Option<Number>>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Option<Number>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Number>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub kind: ValidationKind,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid(Vec<ScoreUpdate>),
    Invalid(Rejection),
}

impl ValidationResult {
    fn invalid(kind: ValidationKind, detail: impl Into<String>) -> Self {
        ValidationResult::Invalid(Rejection {
            kind,
            detail: detail.into(),
        })
    }

    pub fn into_result(self) -> Result<Vec<ScoreUpdate>, DomainError> {
        match self {
            ValidationResult::Valid(updates) => Ok(updates),
            ValidationResult::Invalid(r) => Err(DomainError::validation(r.kind, r.detail)),
        }
    }
}

/// Integer stroke count in `[MIN_STROKES, MAX_STROKES]`.
///
/// Integral floats such as `83.0` are accepted.
pub fn stroke_count(value: &Number) -> Option<i32> {
    let whole = if let Some(i) = value.as_i64() {
        i
    } else {
        let f = value.as_f64()?;
        if f.fract() != 0.0 || !f.is_finite() {
            return None;
        }
        f as i64
    };
    if (MIN_STROKES..=MAX_STROKES).contains(&whole) {
        i32::try_from(whole).ok()
    } else {
        None
    }
}

/// Validate a payload against the round's season roster.
pub fn validate_score_updates(payload: &ScoresPayload, roster: &[Player]) -> ValidationResult {
    let entries = match payload.scores.as_deref() {
        Some(entries) if !entries.is_empty() => entries,
        _ => return ValidationResult::invalid(ValidationKind::InvalidPayload, "Invalid payload"),
    };

    let roster_ids: HashSet<&str> = roster.iter().map(|p| p.id.as_str()).collect();
    let mut updates = Vec::with_capacity(entries.len());

    for entry in entries {
        if !roster_ids.contains(entry.player_id.as_str()) {
            return ValidationResult::invalid(
                ValidationKind::UnknownPlayer,
                format!("Invalid player id: {}", entry.player_id),
            );
        }

        let Some(gross) = entry.gross.as_ref().and_then(stroke_count) else {
            return ValidationResult::invalid(
                ValidationKind::StrokeCountOutOfRange,
                format!("Invalid gross score for player {}", entry.player_id),
            );
        };

        // Net must be sent: a stroke count or an explicit null.
        let net = match entry.net.as_ref().map(|n| n.as_ref().map(stroke_count)) {
            Some(None) => None,
            Some(Some(Some(v))) => Some(v),
            _ => {
                return ValidationResult::invalid(
                    ValidationKind::StrokeCountOutOfRange,
                    format!("Invalid net score for player {}", entry.player_id),
                )
            }
        };

        updates.push(ScoreUpdate {
            player_id: entry.player_id.clone(),
            gross,
            net,
        });
    }

    ValidationResult::Valid(updates)
}
