//! The per-message callback: counts, formats and prints each delivery.

use crate::config::ConsumerConfig;
use crate::message::InboundMessage;
use std::fmt::Write as _;
use std::sync::atomic::{AtomicU64, Ordering};

const SEPARATOR_WIDTH: usize = 60;

/// Message handler that counts and displays messages.
///
/// invoked once per delivery from the receive loop; the count is atomic so
/// the final summary can be read from the main task after the loop has
/// finished.
#[derive(Debug)]
pub struct MessageCounter {
    count: AtomicU64,
    show_payload: bool,
    show_headers: bool,
}

impl MessageCounter {
    pub fn new(show_payload: bool, show_headers: bool) -> MessageCounter {
        MessageCounter {
            count: AtomicU64::new(0),
            show_payload,
            show_headers,
        }
    }

    pub fn from_config(config: &ConsumerConfig) -> MessageCounter {
        MessageCounter::new(config.show_payload, config.show_headers)
    }

    /// messages handled so far.
    pub fn count(&self) -> u64 {
        self.count.load(Ordering::SeqCst)
    }

    /// Callback for one received message; must never fail.
    pub fn on_message(&self, message: &InboundMessage) {
        let n = self.count.fetch_add(1, Ordering::SeqCst) + 1;
        println!("{}", self.render(n, message));
    }

    /// builds the output block for the n-th message.
    pub fn render(&self, n: u64, message: &InboundMessage) -> String {
        let separator = "=".repeat(SEPARATOR_WIDTH);
        let mut out = String::new();
        let _ = writeln!(out);
        let _ = writeln!(out, "{separator}");
        let _ = writeln!(out, "Message #{n}");
        let _ = writeln!(out, "Destination: {}", message.destination);
        if self.show_headers {
            out.push_str(&render_headers(message));
        }
        if self.show_payload {
            let _ = writeln!(
                out,
                "Payload: {}",
                payload_display(&message.payload, message.text_payload)
            );
        }
        let _ = writeln!(out, "{separator}");
        let _ = write!(out, "Total messages received: {n}");
        out
    }
}

/// one line per optional header field, absent fields omitted.
fn render_headers(message: &InboundMessage) -> String {
    let meta = &message.meta;
    let mut out = String::new();
    if let Some(id) = &meta.application_message_id {
        let _ = writeln!(out, "Application Message Id: {id}");
    }
    if let Some(msg_type) = &meta.application_message_type {
        let _ = writeln!(out, "Application Message Type: {msg_type}");
    }
    if let Some(id) = &meta.correlation_id {
        let _ = writeln!(out, "Correlation Id: {id}");
    }
    if let Some(id) = &meta.sender_id {
        let _ = writeln!(out, "Sender Id: {id}");
    }
    if let Some(timestamp) = meta.sender_timestamp {
        let _ = writeln!(out, "Send Timestamp: {timestamp}");
    }
    if let Some(priority) = meta.priority {
        let _ = writeln!(out, "Priority: {priority}");
    }
    if let Some(expiration) = meta.expiration {
        let _ = writeln!(out, "Expiration: {expiration}");
    }
    if let Some(sequence) = meta.sequence_number {
        let _ = writeln!(out, "Sequence Number: {sequence}");
    }
    if message.redelivered {
        let _ = writeln!(out, "Redelivered: true");
    }
    for (name, value) in &meta.user_properties {
        let _ = writeln!(out, "User Property {name}: {value}");
    }
    out
}

/// total payload resolution: text, utf-8 decoded, `[empty]` sentinel or a
/// literal byte representation; never fails.
pub fn payload_display(payload: &[u8], text: bool) -> String {
    if payload.is_empty() {
        return "[empty]".to_string();
    }
    if text {
        // the broker marked it as text; decode lossily rather than fall back.
        return String::from_utf8_lossy(payload).to_string();
    }
    match std::str::from_utf8(payload) {
        Ok(text) => text.to_string(),
        Err(_) => format!("{payload:?}"),
    }
}
