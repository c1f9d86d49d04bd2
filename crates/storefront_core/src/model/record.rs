//! Record domain model.
//!
//! # Responsibility
//! - Define the canonical listing record displayed on one card.
//! - Convert between wire values (`int32` sentinels, raw text) and typed fields.
//!
//! # Invariants
//! - `name` and `author` hold at most `MAX_NAME_BYTES` bytes.
//! - `description` holds at most `MAX_DESCRIPTION_BYTES` bytes.
//! - Truncation always lands on a UTF-8 character boundary.

use serde::{Deserialize, Serialize};

/// Byte limit for `name` (device buffer of 64 minus terminator).
pub const MAX_NAME_BYTES: usize = 63;
/// Byte limit for `author` (device buffer of 64 minus terminator).
pub const MAX_AUTHOR_BYTES: usize = 63;
/// Byte limit for `description` (device buffer of 128 minus terminator).
pub const MAX_DESCRIPTION_BYTES: usize = 127;

/// Wire sentinel for an unknown release age.
pub const UNKNOWN_AGE_WIRE: i32 = -1;

/// Release age of a listing, in whole days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Age {
    /// Release date was missing or unparsable upstream.
    Unknown,
    /// Released this many days ago (`0` = today).
    Days(u32),
}

impl Age {
    /// Maps a wire value to an age; every negative value means unknown.
    pub fn from_wire(value: i32) -> Self {
        u32::try_from(value).map_or(Self::Unknown, Self::Days)
    }

    /// Maps this age back to its wire value.
    pub fn to_wire(self) -> i32 {
        match self {
            Self::Unknown => UNKNOWN_AGE_WIRE,
            Self::Days(days) => i32::try_from(days).unwrap_or(i32::MAX),
        }
    }

    /// Returns whether the listing was released within `window_days` days.
    pub fn is_within(self, window_days: u32) -> bool {
        matches!(self, Self::Days(days) if days <= window_days)
    }
}

/// One displayable listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub author: String,
    pub description: String,
    /// Popularity counter; negative wire values are clamped to zero.
    pub hearts: u32,
    pub age: Age,
}

impl Record {
    /// Builds a record, truncating text to device buffer limits.
    pub fn new(
        name: impl Into<String>,
        author: impl Into<String>,
        description: impl Into<String>,
        hearts: u32,
        age: Age,
    ) -> Self {
        Self {
            name: bounded_text(name.into(), MAX_NAME_BYTES),
            author: bounded_text(author.into(), MAX_AUTHOR_BYTES),
            description: bounded_text(description.into(), MAX_DESCRIPTION_BYTES),
            hearts,
            age,
        }
    }

    /// Builds a record from raw `int32` wire values.
    pub fn from_wire(
        name: &str,
        author: &str,
        description: &str,
        hearts: i32,
        days_ago: i32,
    ) -> Self {
        Self::new(
            name,
            author,
            description,
            u32::try_from(hearts).unwrap_or(0),
            Age::from_wire(days_ago),
        )
    }
}

/// Truncates `value` to at most `max_bytes` bytes on a char boundary.
pub fn bounded_text(mut value: String, max_bytes: usize) -> String {
    if value.len() <= max_bytes {
        return value;
    }
    let mut cut = max_bytes;
    while !value.is_char_boundary(cut) {
        cut -= 1;
    }
    value.truncate(cut);
    value
}

#[cfg(test)]
mod tests {
    use super::{bounded_text, Age, Record, MAX_DESCRIPTION_BYTES, MAX_NAME_BYTES};

    #[test]
    fn age_wire_mapping_treats_negatives_as_unknown() {
        assert_eq!(Age::from_wire(-1), Age::Unknown);
        assert_eq!(Age::from_wire(-30), Age::Unknown);
        assert_eq!(Age::from_wire(0), Age::Days(0));
        assert_eq!(Age::Unknown.to_wire(), -1);
        assert_eq!(Age::Days(12).to_wire(), 12);
    }

    #[test]
    fn bounded_text_respects_char_boundaries() {
        // "é" is two bytes; a 3-byte cap must not split the second one.
        assert_eq!(bounded_text("éé".to_string(), 3), "é");
        assert_eq!(bounded_text("short".to_string(), 63), "short");
    }

    #[test]
    fn record_new_truncates_long_fields() {
        let record = Record::new("n".repeat(100), "a", "d".repeat(300), 3, Age::Days(1));
        assert_eq!(record.name.len(), MAX_NAME_BYTES);
        assert_eq!(record.description.len(), MAX_DESCRIPTION_BYTES);
    }

    #[test]
    fn from_wire_clamps_negative_hearts() {
        let record = Record::from_wire("n", "a", "d", -5, 2);
        assert_eq!(record.hearts, 0);
        assert_eq!(record.age, Age::Days(2));
    }
}
