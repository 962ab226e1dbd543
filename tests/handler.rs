use solace_consumer::handler::{payload_display, MessageCounter};
use solace_consumer::message::InboundMessage;
use solace_consumer::meta::DeliveryMeta;
use std::collections::BTreeMap;

fn message(destination: &str, payload: &[u8]) -> InboundMessage {
    InboundMessage {
        destination: destination.to_string(),
        payload: payload.to_vec(),
        text_payload: false,
        redelivered: false,
        meta: DeliveryMeta::default(),
    }
}

#[test]
fn counter_matches_the_number_of_messages() {
    let handler = MessageCounter::new(true, true);
    for _ in 0..5 {
        handler.on_message(&message("a/b/c", b"hello"));
    }
    assert_eq!(handler.count(), 5);
}

#[test]
fn render_numbers_messages_from_one() {
    let handler = MessageCounter::new(true, false);
    let rendered = handler.render(1, &message("a/b/c", b"hello"));
    assert!(rendered.contains("Message #1"));
    assert!(rendered.contains("Destination: a/b/c"));
    assert!(rendered.contains("Payload: hello"));
    assert!(rendered.contains("Total messages received: 1"));
}

#[test]
fn payload_resolution_is_total() {
    // empty payload renders as the sentinel.
    assert_eq!(payload_display(b"", false), "[empty]");
    // clean utf-8 decodes.
    assert_eq!(payload_display(b"hello", false), "hello");
    // a text-flagged payload is decoded even when not clean utf-8.
    assert_eq!(payload_display(b"ok", true), "ok");
    assert_eq!(payload_display(&[0x68, 0xff], true), "h\u{fffd}");
    // anything else falls back to the literal byte representation.
    assert_eq!(payload_display(&[0xff, 0xfe], false), "[255, 254]");
}

#[test]
fn headers_hidden_when_flag_is_off() {
    let handler = MessageCounter::new(true, false);
    let mut msg = message("a/b/c", b"hello");
    msg.meta = DeliveryMeta {
        delivery_id: 1,
        application_message_id: Some("id-1".to_string()),
        correlation_id: Some("corr-1".to_string()),
        priority: Some(3),
        ..Default::default()
    };
    msg.redelivered = true;
    let rendered = handler.render(1, &msg);
    assert!(!rendered.contains("Application Message Id"));
    assert!(!rendered.contains("Correlation Id"));
    assert!(!rendered.contains("Priority"));
    assert!(!rendered.contains("Redelivered"));
}

#[test]
fn present_headers_are_printed_absent_headers_are_omitted() {
    let handler = MessageCounter::new(true, true);
    let mut msg = message("a/b/c", b"hello");
    let mut user_properties = BTreeMap::new();
    user_properties.insert("region".to_string(), "eu".to_string());
    msg.meta = DeliveryMeta {
        delivery_id: 9,
        application_message_id: Some("id-9".to_string()),
        sender_timestamp: Some(1_700_000_000_000),
        sequence_number: Some(42),
        user_properties,
        ..Default::default()
    };
    let rendered = handler.render(1, &msg);
    assert!(rendered.contains("Application Message Id: id-9"));
    assert!(rendered.contains("Send Timestamp: 1700000000000"));
    assert!(rendered.contains("Sequence Number: 42"));
    assert!(rendered.contains("User Property region: eu"));
    // absent fields do not appear, not even as empty lines.
    assert!(!rendered.contains("Correlation Id"));
    assert!(!rendered.contains("Expiration"));
    assert!(!rendered.contains("Redelivered"));
}

#[test]
fn redelivered_flag_is_printed_when_set() {
    let handler = MessageCounter::new(false, true);
    let mut msg = message("a/b/c", b"hello");
    msg.redelivered = true;
    let rendered = handler.render(1, &msg);
    assert!(rendered.contains("Redelivered: true"));
    // payload display is off for this handler.
    assert!(!rendered.contains("Payload:"));
}

#[test]
fn payload_hidden_when_flag_is_off() {
    let handler = MessageCounter::new(false, false);
    let rendered = handler.render(3, &message("a/b/c", b"secret"));
    assert!(!rendered.contains("secret"));
    assert!(rendered.contains("Message #3"));
    assert!(rendered.contains("Total messages received: 3"));
}
