pub mod error;
pub mod frame;
pub mod header;
pub mod meta;
pub mod pkt;
pub use pkt::PktType;

pub mod constants {

    /// supported versions for the consumer wire format.
    pub const SUPPORTED_VERSIONS: [[u8; 2]; 1] = [[0x00, 0x01]];

    /// default version for the consumer wire format.
    pub const DEFAULT_VERSION: [u8; 2] = [0x00, 0x01];

    /// the header length
    pub const HEADER_LEN: usize = 12;

    /// flag bit: the message was redelivered by the broker.
    pub const FLAG_REDELIVERED: u8 = 0b0000_0001;
    /// flag bit: the payload is a text payload.
    pub const FLAG_TEXT_PAYLOAD: u8 = 0b0000_0010;

    /// Packet Type Connect
    pub const CONNECT: u8 = 0x01;
    /// Packet Type Subscribe (topic pattern)
    pub const SUBSCRIBE: u8 = 0x02;
    /// Packet Type Bind (named queue)
    pub const BIND: u8 = 0x03;
    /// Packet Type Deliver (broker to client)
    pub const DELIVER: u8 = 0x04;
    /// Packet Type Acknowledge (client to broker)
    pub const ACK: u8 = 0x05;
    /// Packet Type Unsubscribe
    pub const UNSUBSCRIBE: u8 = 0x06;
    /// Packet Type Disconnect
    pub const DISCONNECT: u8 = 0x07;
    /// Packet Type Connect Acknowledgement
    pub const CONNECTACK: u8 = 0x0A;
    /// Packet Type Subscribe Acknowledgement
    pub const SUBSCRIBEACK: u8 = 0x0B;
    /// Packet Type Bind Acknowledgement
    pub const BINDACK: u8 = 0x0C;
    /// Packet Type Unsubscribe Acknowledgement
    pub const UNSUBSCRIBEACK: u8 = 0x0D;
    /// Packet Type Error response
    pub const ERROR: u8 = 0x0E;
}

#[cfg(test)]
mod tests {
    use log::info;

    use crate::header::Header;

    #[test]
    fn header_parse_pass() {
        // Header { header: 15, version: [0, 1], pkt_type: DELIVER, flags: 0,
        //          destination_length: 3, meta_length: 0, payload_length: 12 }
        assert!(Header::try_from(
            vec![
                15, // `HEADER_BYTE`
                0, 1, // `VERSION_BYTE_0`, `VERSION_BYTE_1`
                4, // `PktType`
                0, // `FLAGS_BYTE`
                3, // `DESTINATION_LENGTH_BYTE`
                0, 0, // `META_LENGTH_BYTE_0`, `META_LENGTH_BYTE_1`
                0, 12, // `PAYLOAD_LENGTH_BYTE_0`, `PAYLOAD_LENGTH_BYTE_1`
                0, // `RESERVED_BYTE`
                0, // `PADDING_BYTE`
            ]
            .as_slice()
        )
        .is_ok());
    }

    #[test]
    fn header_parse_bad_marker() {
        assert!(Header::try_from(
            vec![16, 0, 1, 4, 0, 3, 0, 0, 0, 12, 0, 0].as_slice()
        )
        .is_err());
    }

    #[test]
    fn header_parse_bad_version() {
        assert!(Header::try_from(
            vec![15, 0, 9, 4, 0, 3, 0, 0, 0, 12, 0, 0].as_slice()
        )
        .is_err());
    }

    #[test]
    fn header_parse_bad_length() {
        assert!(Header::try_from(vec![15, 0, 1, 4, 0].as_slice()).is_err());
    }

    #[test]
    fn frame_parse_pass() {
        use crate::frame::Frame;
        use crate::PktType;

        let frame = Frame::new(PktType::DELIVER, "abc".to_string(), None, b"test message".to_vec())
            .unwrap();
        let buf = frame.bytes();
        let parsed = Frame::try_from(buf.as_slice());
        info!("{:?}", parsed);
        assert!(parsed.is_ok());
        assert_eq!(parsed.unwrap(), frame);
    }

    #[test]
    fn frame_parse_truncated() {
        use crate::frame::Frame;
        use crate::PktType;

        env_logger::init();
        let frame = Frame::new(PktType::DELIVER, "abc".to_string(), None, b"test message".to_vec())
            .unwrap();
        let mut buf = frame.bytes();
        buf.pop();
        assert!(Frame::try_from(buf.as_slice()).is_err());
    }

    #[test]
    fn frame_rejects_oversized_sections() {
        use crate::frame::Frame;
        use crate::PktType;

        assert!(Frame::subscribe("a/".repeat(150)).is_err());
        assert!(Frame::new(
            PktType::DELIVER,
            "a/b/c".to_string(),
            None,
            vec![0u8; u16::MAX as usize + 1],
        )
        .is_err());
        assert!(Frame::new(
            PktType::DELIVER,
            "a/b/c".to_string(),
            Some(vec![b'{'; u16::MAX as usize + 1]),
            vec![],
        )
        .is_err());
    }
}
