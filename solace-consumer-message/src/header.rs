/// Header of the solace_consumer_message frame
use crate::{
    constants::{self, *},
    error::FrameError,
    PktType,
};
use anyhow::{bail, Result};

/// byte at index 0
/// indicates the start of the header
const HEADER_START: usize = 0;

/// byte at index 11
/// indicates the end of the header
const HEADER_END: usize = 11;

/// version is indicated using two bytes,
/// first byte of the version
/// byte at index 1
const VERSION_BYTE_0: usize = 1;

/// version is indicated using two bytes,
/// second byte of the version
/// byte at index 2
const VERSION_BYTE_1: usize = 2;

/// byte that indicates the packet type
/// byte at index 3
const PACKET_BYTE: usize = 3;

/// byte that carries the delivery flags
/// byte at index 4
const FLAGS_BYTE: usize = 4;

/// byte that indicates the destination length
/// byte at index 5
const DESTINATION_LENGTH_BYTE: usize = 5;

/// first byte of the metadata length (big endian)
/// byte at index 6
const META_LENGTH_BYTE_0: usize = 6;

/// second byte of the metadata length (big endian)
/// byte at index 7
const META_LENGTH_BYTE_1: usize = 7;

/// first byte of the payload length (big endian)
/// byte at index 8
const PAYLOAD_LENGTH_BYTE_0: usize = 8;

/// second byte of the payload length (big endian)
/// byte at index 9
const PAYLOAD_LENGTH_BYTE_1: usize = 9;

/// reserved byte, always 0x00
/// byte at index 10
const RESERVED_BYTE: usize = 10;

/// start of the header
/// value: 0x0F
const HEADER_BYTE: u8 = 0x0F;

/// end of the header
/// value: 0x00
const PADDING_BYTE: u8 = 0x00;

/// Header for the consumer wire frame
/// total length 12 bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    /// start byte of the frame, default value: 0x0F
    pub header: u8,
    /// wire format version: two bytes.
    pub version: [u8; 2],
    /// packet type: `PktType`
    pub pkt_type: PktType,
    /// delivery flags (`FLAG_REDELIVERED`, `FLAG_TEXT_PAYLOAD`).
    pub flags: u8,
    /// length of the topic pattern or queue name.
    pub destination_length: u8,
    /// length of the json metadata section.
    pub meta_length: u16,
    /// payload length.
    pub payload_length: u16,
    /// padding/end of the header: 0x00
    pub padding: u8,
}

impl Header {
    /// creates a new `Header` with the given data.
    /// ```
    /// use solace_consumer_message::header::Header;
    /// use solace_consumer_message::PktType;
    /// Header::new(PktType::DELIVER, 0, 8, 0, 20);
    /// ```
    pub fn new(
        pkt_type: PktType,
        flags: u8,
        destination_len: u8,
        meta_len: u16,
        payload_len: u16,
    ) -> Header {
        Header {
            header: HEADER_BYTE,
            version: DEFAULT_VERSION,
            pkt_type,
            flags,
            destination_length: destination_len,
            meta_length: meta_len,
            payload_length: payload_len,
            padding: PADDING_BYTE,
        }
    }

    /// true when the redelivered flag bit is set.
    pub fn redelivered(&self) -> bool {
        self.flags & FLAG_REDELIVERED != 0
    }

    /// true when the text payload flag bit is set.
    pub fn text_payload(&self) -> bool {
        self.flags & FLAG_TEXT_PAYLOAD != 0
    }

    /// total length of the body following the header.
    pub fn body_length(&self) -> usize {
        self.destination_length as usize + self.meta_length as usize + self.payload_length as usize
    }

    /// returns the bytes for `Header`.
    /// ```
    /// use solace_consumer_message::header::Header;
    /// use solace_consumer_message::PktType;
    /// let header = Header::new(PktType::DELIVER, 0, 8, 0, 20);
    /// header.bytes();
    /// ```
    pub fn bytes(&self) -> [u8; 12] {
        let meta_length_bytes = self.meta_length.to_be_bytes();
        let payload_length_bytes = self.payload_length.to_be_bytes();
        [
            self.header,
            self.version[0],
            self.version[1],
            self.pkt_type.byte(),
            self.flags,
            self.destination_length,
            meta_length_bytes[0],
            meta_length_bytes[1],
            payload_length_bytes[0],
            payload_length_bytes[1],
            PADDING_BYTE,
            self.padding,
        ]
    }
}

impl TryFrom<&[u8]> for Header {
    type Error = anyhow::Error;

    /// Parses a `Header` from a `&[u8]`
    /// ```
    /// use solace_consumer_message::header::Header;
    /// Header::try_from([
    ///        15,    // `HEADER_BYTE`
    ///        0, 1,  // `VERSION_BYTE_0`, `VERSION_BYTE_1`
    ///        4,     // `PktType`
    ///        0,     // `FLAGS_BYTE`
    ///        3,     // `DESTINATION_LENGTH_BYTE`
    ///        0, 0,  // `META_LENGTH_BYTE_0`, `META_LENGTH_BYTE_1`
    ///        0, 12, // `PAYLOAD_LENGTH_BYTE_0`, `PAYLOAD_LENGTH_BYTE_1`
    ///        0,     // `RESERVED_BYTE`
    ///        0,     // `PADDING_BYTE`
    /// ].as_ref());
    /// ```
    fn try_from(bytes: &[u8]) -> Result<Header> {
        if bytes.len() != constants::HEADER_LEN {
            bail!(FrameError::InvalidHeaderBufferLength);
        }

        if !(bytes[HEADER_START] == HEADER_BYTE
            && bytes[RESERVED_BYTE] == PADDING_BYTE
            && bytes[HEADER_END] == PADDING_BYTE)
        {
            bail!(FrameError::InvalidHeadOrTail);
        }

        if !SUPPORTED_VERSIONS.contains(&[bytes[VERSION_BYTE_0], bytes[VERSION_BYTE_1]]) {
            bail!(FrameError::UnsupportedVersion);
        }

        let pkt_type = PktType::try_from(bytes[PACKET_BYTE])?;

        Ok(Header {
            header: bytes[HEADER_START],
            version: [bytes[VERSION_BYTE_0], bytes[VERSION_BYTE_1]],
            pkt_type,
            flags: bytes[FLAGS_BYTE],
            destination_length: bytes[DESTINATION_LENGTH_BYTE],
            meta_length: u16::from_be_bytes([bytes[META_LENGTH_BYTE_0], bytes[META_LENGTH_BYTE_1]]),
            payload_length: u16::from_be_bytes([
                bytes[PAYLOAD_LENGTH_BYTE_0],
                bytes[PAYLOAD_LENGTH_BYTE_1],
            ]),
            padding: bytes[HEADER_END],
        })
    }
}

impl TryFrom<Vec<u8>> for Header {
    type Error = anyhow::Error;

    fn try_from(bytes: Vec<u8>) -> Result<Header> {
        Header::try_from(bytes.as_slice())
    }
}
