//! Card text formatting.

use crate::model::record::Age;
use crate::store::record_store::RecordStore;

/// Human phrase for a release age.
pub fn format_age(age: Age) -> String {
    match age {
        Age::Unknown => "Unknown".to_string(),
        Age::Days(0) => "Today".to_string(),
        Age::Days(1) => "Yesterday".to_string(),
        Age::Days(days) => format!("{days} days ago"),
    }
}

/// Bottom line: `"❤ <hearts>  •  <age>"`.
pub fn hearts_line(hearts: u32, age: Age) -> String {
    format!("❤ {hearts}  •  {}", format_age(age))
}

/// Status bar pagination: one-based index over capacity.
pub fn pagination_text(index: usize, capacity: usize) -> String {
    format!("{}/{capacity}", index + 1)
}

/// Text for every region of one card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardText {
    pub name: String,
    pub author: String,
    pub description: String,
    pub hearts: String,
    pub pagination: String,
}

impl CardText {
    /// Builds the card for `index`; an unwritten slot keeps empty regions.
    ///
    /// The watch firmware draws an unwritten slot as a zeroed record
    /// (`"❤ 0  •  Today"`); here its hearts line stays empty instead, so a
    /// missing record never reads as a new app with no hearts.
    pub fn for_slot(store: &RecordStore, index: usize) -> Self {
        let pagination = pagination_text(index, store.capacity());
        let slot = i64::try_from(index).ok();
        match slot.and_then(|slot| store.read(slot)) {
            Some(record) => Self {
                name: record.name.clone(),
                author: record.author.clone(),
                description: record.description.clone(),
                hearts: hearts_line(record.hearts, record.age),
                pagination,
            },
            None => Self {
                pagination,
                ..Self::default()
            },
        }
    }
}
