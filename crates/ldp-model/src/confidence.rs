//! Confidence tiers reported by the parsing service.
//!
//! The service self-reports how certain it is about each mapped value as
//! one of three tiers. The wire format carries the tier as a plain string
//! ([`ParsedRecord::confidence`](crate::ParsedRecord)), so classification
//! into this enum happens at display time via [`Confidence::from_wire`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The service's self-reported trust level for a single parsed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// The mapping is almost certainly correct.
    High,
    /// The mapping is plausible but should be reviewed.
    Medium,
    /// The mapping is a guess.
    Low,
}

impl Confidence {
    /// Returns the tier name as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        }
    }

    /// Classify a raw wire string into a tier.
    ///
    /// Total mapping: anything outside the three recognized tiers falls
    /// back to [`Confidence::Low`], the lowest-trust tier, so a misbehaving
    /// service can never crash the renderer.
    pub fn from_wire(raw: &str) -> Self {
        raw.parse().unwrap_or(Confidence::Low)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Confidence {
    type Err = UnknownConfidence;

    /// Parse a tier string (case-insensitive, surrounding whitespace ignored).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Confidence::High),
            "medium" => Ok(Confidence::Medium),
            "low" => Ok(Confidence::Low),
            _ => Err(UnknownConfidence(s.to_string())),
        }
    }
}

/// A confidence string outside the three recognized tiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown confidence tier: {0:?}")]
pub struct UnknownConfidence(pub String);
