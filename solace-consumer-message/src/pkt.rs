use crate::constants::*;
use crate::error::FrameError;
use std::fmt::Display;

/// Packet type
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PktType {
    /// open a session (vpn and credentials in the metadata)
    CONNECT = CONNECT,
    /// subscribe to a topic pattern
    SUBSCRIBE = SUBSCRIBE,
    /// bind to a named queue
    BIND = BIND,
    /// a message delivered by the broker
    DELIVER = DELIVER,
    /// acknowledge a delivered message
    ACK = ACK,
    /// remove a topic subscription
    UNSUBSCRIBE = UNSUBSCRIBE,
    /// close the session
    DISCONNECT = DISCONNECT,
    /// acknowledgement to connect
    CONNECTACK = CONNECTACK,
    /// acknowledgement to subscribe
    SUBSCRIBEACK = SUBSCRIBEACK,
    /// acknowledgement to bind
    BINDACK = BINDACK,
    /// acknowledgement to unsubscribe
    UNSUBSCRIBEACK = UNSUBSCRIBEACK,
    /// broker-side failure of the preceding request
    ERROR = ERROR,
}

impl PktType {
    /// returns the byte for the given type of packet
    /// ```
    /// use solace_consumer_message::pkt::PktType;
    /// let deliver_byte = PktType::DELIVER.byte();
    /// assert_eq!(deliver_byte, solace_consumer_message::constants::DELIVER);
    /// ```
    pub fn byte(&self) -> u8 {
        match self {
            PktType::CONNECT => CONNECT,
            PktType::SUBSCRIBE => SUBSCRIBE,
            PktType::BIND => BIND,
            PktType::DELIVER => DELIVER,
            PktType::ACK => ACK,
            PktType::UNSUBSCRIBE => UNSUBSCRIBE,
            PktType::DISCONNECT => DISCONNECT,
            PktType::CONNECTACK => CONNECTACK,
            PktType::SUBSCRIBEACK => SUBSCRIBEACK,
            PktType::BINDACK => BINDACK,
            PktType::UNSUBSCRIBEACK => UNSUBSCRIBEACK,
            PktType::ERROR => ERROR,
        }
    }

    /// the acknowledgement packet type answering this request, if any.
    pub fn response_type(&self) -> Option<PktType> {
        match self {
            PktType::CONNECT => Some(PktType::CONNECTACK),
            PktType::SUBSCRIBE => Some(PktType::SUBSCRIBEACK),
            PktType::BIND => Some(PktType::BINDACK),
            PktType::UNSUBSCRIBE => Some(PktType::UNSUBSCRIBEACK),
            _ => None,
        }
    }
}

impl TryFrom<u8> for PktType {
    type Error = FrameError;

    fn try_from(byte: u8) -> Result<PktType, FrameError> {
        match byte {
            CONNECT => Ok(PktType::CONNECT),
            SUBSCRIBE => Ok(PktType::SUBSCRIBE),
            BIND => Ok(PktType::BIND),
            DELIVER => Ok(PktType::DELIVER),
            ACK => Ok(PktType::ACK),
            UNSUBSCRIBE => Ok(PktType::UNSUBSCRIBE),
            DISCONNECT => Ok(PktType::DISCONNECT),
            CONNECTACK => Ok(PktType::CONNECTACK),
            SUBSCRIBEACK => Ok(PktType::SUBSCRIBEACK),
            BINDACK => Ok(PktType::BINDACK),
            UNSUBSCRIBEACK => Ok(PktType::UNSUBSCRIBEACK),
            ERROR => Ok(PktType::ERROR),
            b => Err(FrameError::InvalidPacketType(b)),
        }
    }
}

impl Display for PktType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let pkt = match self {
            PktType::CONNECT => "CONNECT",
            PktType::SUBSCRIBE => "SUBSCRIBE",
            PktType::BIND => "BIND",
            PktType::DELIVER => "DELIVER",
            PktType::ACK => "ACK",
            PktType::UNSUBSCRIBE => "UNSUBSCRIBE",
            PktType::DISCONNECT => "DISCONNECT",
            PktType::CONNECTACK => "CONNECT_ACK",
            PktType::SUBSCRIBEACK => "SUBSCRIBE_ACK",
            PktType::BINDACK => "BIND_ACK",
            PktType::UNSUBSCRIBEACK => "UNSUBSCRIBE_ACK",
            PktType::ERROR => "ERROR",
        };
        write!(f, "{}", pkt)
    }
}
