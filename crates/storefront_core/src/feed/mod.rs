//! Companion-side batch encoding.
//!
//! # Responsibility
//! - Decode the app store listing payload fetched by the companion.
//! - Encode listings as the channel messages the viewer consumes.
//!
//! # Invariants
//! - At most `CAPACITY` record messages are produced, indexed from 0.
//! - A batch always ends with exactly one `DATA_COMPLETE` message.

use crate::model::record::Age;
use crate::protocol::load::DATA_COMPLETE_SUCCESS;
use crate::protocol::message::ChannelMessage;
use crate::store::record_store::CAPACITY;
use chrono::{DateTime, NaiveDate};
use serde::Deserialize;

/// Descriptions are cut to this many words before sending.
pub const DESCRIPTION_MAX_WORDS: usize = 6;
/// `DATA_COMPLETE` value sent when the fetch or decode failed.
pub const DATA_COMPLETE_FAILURE: i32 = 0;

const UNKNOWN_TEXT: &str = "Unknown";

/// Top-level listing payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedResponse {
    #[serde(default)]
    pub data: Vec<FeedListing>,
}

/// One listing as returned by the store API; every field may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedListing {
    pub title: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub hearts: Option<i64>,
    pub created_at: Option<String>,
}

/// Keeps the first `max_words` words, appending "..." when anything was cut.
pub fn truncate_description(text: &str, max_words: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= max_words {
        return text.to_string();
    }
    format!("{}...", words[..max_words].join(" "))
}

/// Whole days between `created_at` and `today`.
///
/// Accepts RFC 3339 timestamps or bare `YYYY-MM-DD` dates. Missing,
/// unparsable or future dates are `Age::Unknown`.
pub fn days_since(created_at: Option<&str>, today: NaiveDate) -> Age {
    let Some(raw) = created_at.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Age::Unknown;
    };
    let released = DateTime::parse_from_rfc3339(raw)
        .map(|at| at.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));
    match released {
        Ok(date) => {
            let days = today.signed_duration_since(date).num_days();
            u32::try_from(days).map_or(Age::Unknown, Age::Days)
        }
        Err(_) => Age::Unknown,
    }
}

/// Encodes one listing as a record message at `index`.
pub fn encode_listing(index: i32, listing: &FeedListing, today: NaiveDate) -> ChannelMessage {
    let description = listing
        .description
        .as_deref()
        .map(|text| truncate_description(text, DESCRIPTION_MAX_WORDS))
        .unwrap_or_default();
    let hearts = listing
        .hearts
        .map_or(0, |hearts| i32::try_from(hearts.max(0)).unwrap_or(i32::MAX));
    let days_ago = days_since(listing.created_at.as_deref(), today).to_wire();

    ChannelMessage::record(
        index,
        non_empty_or_unknown(listing.title.as_deref()),
        non_empty_or_unknown(listing.author.as_deref()),
        description,
        hearts,
        days_ago,
    )
}

/// Encodes a whole batch followed by the success completion signal.
pub fn encode_batch(response: &FeedResponse, today: NaiveDate) -> Vec<ChannelMessage> {
    let mut messages: Vec<ChannelMessage> = (0_i32..)
        .zip(response.data.iter().take(CAPACITY))
        .map(|(index, listing)| encode_listing(index, listing, today))
        .collect();
    messages.push(ChannelMessage::completion(DATA_COMPLETE_SUCCESS));
    messages
}

/// Completion signal reporting a failed fetch.
pub fn failure_message() -> ChannelMessage {
    ChannelMessage::completion(DATA_COMPLETE_FAILURE)
}

fn non_empty_or_unknown(value: Option<&str>) -> String {
    value
        .filter(|value| !value.is_empty())
        .unwrap_or(UNKNOWN_TEXT)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::{days_since, truncate_description};
    use crate::model::record::Age;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 21).expect("valid date")
    }

    #[test]
    fn truncate_keeps_short_text_verbatim() {
        assert_eq!(truncate_description("A  tiny app", 6), "A  tiny app");
        assert_eq!(
            truncate_description("one two three four five six seven", 6),
            "one two three four five six..."
        );
    }

    #[test]
    fn days_since_handles_timestamps_dates_and_garbage() {
        assert_eq!(
            days_since(Some("2026-10-21T08:15:00Z"), today()),
            Age::Days(0)
        );
        assert_eq!(days_since(Some("2026-10-20"), today()), Age::Days(1));
        assert_eq!(days_since(Some("2026-10-01"), today()), Age::Days(20));
        assert_eq!(days_since(Some("not a date"), today()), Age::Unknown);
        assert_eq!(days_since(Some("2026-11-01"), today()), Age::Unknown);
        assert_eq!(days_since(None, today()), Age::Unknown);
    }
}
