use storefront_core::{
    Age, ChannelMessage, DropReason, LoadOutcome, LoadProtocol, MessageKey, Record, RecordStore,
    TransportEvent, TupleValue, CAPACITY,
};

const RECORD_KEYS: [MessageKey; 6] = [
    MessageKey::AppIndex,
    MessageKey::AppName,
    MessageKey::AppAuthor,
    MessageKey::AppDescription,
    MessageKey::AppHearts,
    MessageKey::AppDaysAgo,
];

fn message_for(index: i32) -> ChannelMessage {
    ChannelMessage::record(
        index,
        format!("App {index}"),
        "Rebble",
        format!("Does thing number {index}"),
        index * 3,
        index - 1,
    )
}

#[test]
fn record_message_is_stored_and_reports_progress() {
    let mut store = RecordStore::new();
    let mut protocol = LoadProtocol::new();

    let outcome = protocol.apply(&mut store, &message_for(2));

    assert_eq!(
        outcome,
        LoadOutcome::Stored {
            index: 2,
            progress: 10
        }
    );
    assert_eq!(
        store.read(2),
        Some(&Record::new("App 2", "Rebble", "Does thing number 2", 6, Age::Days(1)))
    );
}

#[test]
fn message_missing_any_field_is_dropped_without_partial_write() {
    for key in RECORD_KEYS {
        let mut store = RecordStore::new();
        let mut protocol = LoadProtocol::new();

        let outcome = protocol.apply(&mut store, &message_for(0).without(key));

        assert_eq!(
            outcome,
            LoadOutcome::Dropped(DropReason::Incomplete { missing: key })
        );
        assert_eq!(store.received_count(), 0);
        assert!(store.read(0).is_none());
        assert_eq!(protocol.dropped_count(), 1);
    }
}

#[test]
fn out_of_range_index_is_dropped() {
    let mut store = RecordStore::new();
    let mut protocol = LoadProtocol::new();

    for index in [-1, 10, 250] {
        let outcome = protocol.apply(&mut store, &message_for(index));
        assert_eq!(
            outcome,
            LoadOutcome::Dropped(DropReason::OutOfRange { index })
        );
    }
    assert_eq!(store.received_count(), 0);
}

#[test]
fn failure_signal_changes_nothing() {
    let mut store = RecordStore::new();
    let mut protocol = LoadProtocol::new();
    protocol.apply(&mut store, &message_for(0));

    let outcome = protocol.apply(&mut store, &ChannelMessage::completion(0));

    assert_eq!(outcome, LoadOutcome::BatchFailed { status: 0 });
    assert!(!store.is_loaded());
    assert_eq!(store.progress_percent(), 10);

    let outcome = protocol.apply(&mut store, &ChannelMessage::completion(7));
    assert_eq!(outcome, LoadOutcome::BatchFailed { status: 7 });
    assert!(!store.is_loaded());
}

#[test]
fn repeated_success_signal_is_idempotent() {
    let mut store = RecordStore::new();
    let mut protocol = LoadProtocol::new();

    assert_eq!(
        protocol.apply(&mut store, &ChannelMessage::completion(1)),
        LoadOutcome::BatchComplete { first: true }
    );
    assert_eq!(
        protocol.apply(&mut store, &ChannelMessage::completion(1)),
        LoadOutcome::BatchComplete { first: false }
    );
    assert!(store.is_loaded());
}

#[test]
fn reverse_order_delivery_then_completion_loads_everything() {
    let mut store = RecordStore::new();
    let mut protocol = LoadProtocol::new();

    for index in (0..10).rev() {
        assert!(matches!(
            protocol.apply(&mut store, &message_for(index)),
            LoadOutcome::Stored { .. }
        ));
    }
    protocol.apply(&mut store, &ChannelMessage::completion(1));

    assert!(store.is_loaded());
    assert_eq!(store.progress_percent(), 100);
    for index in 0..10 {
        let record = store.read(i64::from(index)).unwrap();
        assert_eq!(record.name, format!("App {index}"));
        assert_eq!(record.hearts, u32::try_from(index * 3).unwrap());
        assert_eq!(record.age, Age::from_wire(index - 1));
    }
    assert_eq!(store.iter().count(), CAPACITY);
}

#[test]
fn transport_notifications_do_not_mutate_state() {
    let mut store = RecordStore::new();
    let mut protocol = LoadProtocol::new();
    protocol.apply(&mut store, &message_for(5));

    for event in [
        TransportEvent::InboxDropped { reason: 8 },
        TransportEvent::OutboxFailed { reason: 2 },
        TransportEvent::OutboxSent,
    ] {
        protocol.observe(&event);
    }

    assert_eq!(store.received_count(), 1);
    assert!(!store.is_loaded());
    assert_eq!(protocol.dropped_count(), 0);
}

#[test]
fn long_text_is_truncated_to_device_buffers() {
    let mut store = RecordStore::new();
    let mut protocol = LoadProtocol::new();
    let message = ChannelMessage::record(0, "N".repeat(80), "A".repeat(80), "D".repeat(200), 1, 0);

    protocol.apply(&mut store, &message);

    let record = store.read(0).unwrap();
    assert_eq!(record.name.len(), 63);
    assert_eq!(record.author.len(), 63);
    assert_eq!(record.description.len(), 127);
}

#[test]
fn messages_decode_from_wire_json() {
    let value = serde_json::json!({
        "APP_INDEX": 1,
        "APP_NAME": "Timely",
        "APP_AUTHOR": "Someone",
        "APP_DESCRIPTION": "A clock",
        "APP_HEARTS": 120,
        "APP_DAYS_AGO": -1
    });

    let message: ChannelMessage = serde_json::from_value(value).unwrap();

    assert_eq!(
        message.get(MessageKey::AppName),
        Some(&TupleValue::Text("Timely".to_string()))
    );
    let mut store = RecordStore::new();
    let outcome = LoadProtocol::new().apply(&mut store, &message);
    assert_eq!(
        outcome,
        LoadOutcome::Stored {
            index: 1,
            progress: 10
        }
    );
    assert_eq!(store.read(1).unwrap().age, Age::Unknown);
}
