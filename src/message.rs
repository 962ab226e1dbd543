use log::warn;
use solace_consumer_message::frame::Frame;
use solace_consumer_message::meta::DeliveryMeta;

/// one delivered message, as handed to the handler.
///
/// lives for the duration of a single handler invocation.
#[derive(Debug, Clone)]
pub struct InboundMessage {
    /// the topic or queue the message arrived on.
    pub destination: String,
    pub payload: Vec<u8>,
    /// the broker marked the payload as text.
    pub text_payload: bool,
    pub redelivered: bool,
    pub meta: DeliveryMeta,
}

impl InboundMessage {
    /// builds an `InboundMessage` from a DELIVER frame.
    ///
    /// a malformed metadata section is logged and treated as absent so that
    /// the delivery still reaches the handler.
    pub fn from_frame(frame: &Frame) -> InboundMessage {
        let meta = match frame.delivery_meta() {
            Ok(meta) => meta,
            Err(e) => {
                warn!("could not decode delivery metadata: {e}");
                DeliveryMeta::default()
            }
        };
        InboundMessage {
            destination: frame.destination.clone(),
            payload: frame.payload.clone(),
            text_payload: frame.header.text_payload(),
            redelivered: frame.header.redelivered(),
            meta,
        }
    }
}
