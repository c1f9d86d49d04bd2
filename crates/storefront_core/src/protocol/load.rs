//! Incremental batch load protocol.
//!
//! # Responsibility
//! - Validate inbound channel messages and write records into the store.
//! - Detect the explicit batch-complete signal.
//! - Observe transport notifications without mutating state.
//!
//! # Invariants
//! - A record message missing any of its six fields writes nothing.
//! - A completion message is handled before (and instead of) record fields.
//! - Failure signals never retry and never change state.

use crate::logging::sanitize_for_log;
use crate::model::record::Record;
use crate::protocol::message::{ChannelMessage, MessageKey, TupleValue};
use crate::store::record_store::RecordStore;
use log::{debug, error, info, warn};

/// `DATA_COMPLETE` value meaning success.
pub const DATA_COMPLETE_SUCCESS: i32 = 1;

/// Why a message was dropped without touching the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// A required record field is absent.
    Incomplete { missing: MessageKey },
    /// A field is present with the wrong value type.
    WrongType { key: MessageKey },
    /// `APP_INDEX` is outside the store capacity.
    OutOfRange { index: i32 },
}

impl DropReason {
    fn code(self) -> &'static str {
        match self {
            Self::Incomplete { .. } => "incomplete_message",
            Self::WrongType { .. } => "wrong_type",
            Self::OutOfRange { .. } => "out_of_range",
        }
    }
}

/// Decision taken for one inbound message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Success signal; `first` is false when the batch was already loaded.
    BatchComplete { first: bool },
    /// Failure signal; loading UI keeps its last progress.
    BatchFailed { status: i32 },
    /// Record written at `index`; `progress` is the new loading percentage.
    Stored { index: usize, progress: u8 },
    Dropped(DropReason),
}

/// Transport notifications that are observed but never acted upon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportEvent {
    InboxDropped { reason: i32 },
    OutboxFailed { reason: i32 },
    OutboxSent,
}

/// Consumes channel messages one at a time.
#[derive(Debug, Default)]
pub struct LoadProtocol {
    dropped: usize,
}

impl LoadProtocol {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of messages dropped so far.
    pub fn dropped_count(&self) -> usize {
        self.dropped
    }

    /// Applies one message to `store`.
    pub fn apply(&mut self, store: &mut RecordStore, message: &ChannelMessage) -> LoadOutcome {
        if let Some(value) = message.get(MessageKey::DataComplete) {
            return self.apply_completion(store, value);
        }

        let outcome = match decode_record(message) {
            Ok((index, record)) => self.store_record(store, index, record),
            Err(reason) => LoadOutcome::Dropped(reason),
        };
        if let LoadOutcome::Dropped(reason) = outcome {
            self.dropped += 1;
            warn!(
                "event=message_dropped module=protocol status=dropped error_code={} detail={:?}",
                reason.code(),
                reason
            );
        }
        outcome
    }

    /// Logs a transport notification; never mutates state.
    pub fn observe(&self, event: &TransportEvent) {
        match event {
            TransportEvent::InboxDropped { reason } => {
                error!("event=inbox_dropped module=protocol status=error reason={reason}");
            }
            TransportEvent::OutboxFailed { reason } => {
                error!("event=outbox_failed module=protocol status=error reason={reason}");
            }
            TransportEvent::OutboxSent => {
                info!("event=outbox_sent module=protocol status=ok");
            }
        }
    }

    fn apply_completion(&mut self, store: &mut RecordStore, value: &TupleValue) -> LoadOutcome {
        match value {
            TupleValue::Int32(DATA_COMPLETE_SUCCESS) => {
                let first = store.mark_loaded();
                info!(
                    "event=batch_complete module=protocol status=ok first={} received={}",
                    first,
                    store.received_count()
                );
                LoadOutcome::BatchComplete { first }
            }
            TupleValue::Int32(status) => {
                warn!(
                    "event=batch_failed module=protocol status=error signal={} progress={}",
                    status,
                    store.progress_percent()
                );
                LoadOutcome::BatchFailed { status: *status }
            }
            TupleValue::Text(_) => {
                self.dropped += 1;
                let reason = DropReason::WrongType {
                    key: MessageKey::DataComplete,
                };
                warn!(
                    "event=message_dropped module=protocol status=dropped error_code={}",
                    reason.code()
                );
                LoadOutcome::Dropped(reason)
            }
        }
    }

    fn store_record(&mut self, store: &mut RecordStore, index: i32, record: Record) -> LoadOutcome {
        let name = sanitize_for_log(&record.name);
        match store.write(i64::from(index), record) {
            Ok(()) => {
                let progress = store.progress_percent();
                info!(
                    "event=record_received module=protocol status=ok index={} name={} progress={}",
                    index, name, progress
                );
                // `write` succeeded, so the index is a valid slot.
                let slot = usize::try_from(index).unwrap_or_default();
                LoadOutcome::Stored {
                    index: slot,
                    progress,
                }
            }
            Err(err) => {
                debug!("event=record_rejected module=protocol status=dropped error={err}");
                LoadOutcome::Dropped(DropReason::OutOfRange { index })
            }
        }
    }
}

fn decode_record(message: &ChannelMessage) -> Result<(i32, Record), DropReason> {
    // Presence of all six keys is checked before any type check so that an
    // incomplete message always reports `Incomplete`.
    for key in [
        MessageKey::AppIndex,
        MessageKey::AppName,
        MessageKey::AppAuthor,
        MessageKey::AppDescription,
        MessageKey::AppHearts,
        MessageKey::AppDaysAgo,
    ] {
        if !message.contains(key) {
            return Err(DropReason::Incomplete { missing: key });
        }
    }

    let index = int_field(message, MessageKey::AppIndex)?;
    let name = text_field(message, MessageKey::AppName)?;
    let author = text_field(message, MessageKey::AppAuthor)?;
    let description = text_field(message, MessageKey::AppDescription)?;
    let hearts = int_field(message, MessageKey::AppHearts)?;
    let days_ago = int_field(message, MessageKey::AppDaysAgo)?;

    Ok((
        index,
        Record::from_wire(name, author, description, hearts, days_ago),
    ))
}

fn int_field(message: &ChannelMessage, key: MessageKey) -> Result<i32, DropReason> {
    match message.get(key) {
        Some(TupleValue::Int32(value)) => Ok(*value),
        Some(TupleValue::Text(_)) => Err(DropReason::WrongType { key }),
        None => Err(DropReason::Incomplete { missing: key }),
    }
}

fn text_field(message: &ChannelMessage, key: MessageKey) -> Result<&str, DropReason> {
    match message.get(key) {
        Some(TupleValue::Text(value)) => Ok(value.as_str()),
        Some(TupleValue::Int32(_)) => Err(DropReason::WrongType { key }),
        None => Err(DropReason::Incomplete { missing: key }),
    }
}
