use crate::constants::{FLAG_REDELIVERED, FLAG_TEXT_PAYLOAD, HEADER_LEN};
use crate::error::FrameError;
use crate::header::Header;
use crate::meta::{AckInfo, BindInfo, ConnectInfo, DeliveryMeta};
use crate::PktType;
use anyhow::{bail, Result};
use log::trace;

/// structure containing the complete information about one wire frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// `Header`: the header of the frame.
    pub header: Header,
    /// the topic pattern or queue name the frame refers to.
    pub destination: String,
    /// the json metadata section, raw bytes.
    pub meta: Vec<u8>,
    /// the actual payload, bytes.
    pub payload: Vec<u8>,
}

impl Frame {
    /// Creates a new `Frame` with the given data.
    ///
    /// Fails when a section does not fit its header length field.
    /// ```
    /// use solace_consumer_message::frame::Frame;
    /// use solace_consumer_message::PktType;
    /// let frame = Frame::new(PktType::DELIVER, "a/b/c".to_string(), None, b"the message".to_vec());
    /// assert!(frame.is_ok());
    /// ```
    pub fn new(
        pkt_type: PktType,
        destination: String,
        meta: Option<Vec<u8>>,
        payload: Vec<u8>,
    ) -> Result<Frame> {
        let meta = meta.unwrap_or_default();
        if destination.len() > u8::MAX as usize {
            bail!(FrameError::SectionTooLong(destination.len()));
        }
        if meta.len() > u16::MAX as usize {
            bail!(FrameError::SectionTooLong(meta.len()));
        }
        if payload.len() > u16::MAX as usize {
            bail!(FrameError::SectionTooLong(payload.len()));
        }
        Ok(Frame {
            header: Header::new(
                pkt_type,
                0,
                destination.len() as u8,
                meta.len() as u16,
                payload.len() as u16,
            ),
            destination,
            meta,
            payload,
        })
    }

    /// a `CONNECT` frame carrying the session parameters.
    pub fn connect(info: &ConnectInfo) -> Result<Frame> {
        let meta = serde_json::to_vec(info)?;
        Frame::new(PktType::CONNECT, String::new(), Some(meta), vec![])
    }

    /// a `SUBSCRIBE` frame for the given topic pattern.
    pub fn subscribe(pattern: String) -> Result<Frame> {
        Frame::new(PktType::SUBSCRIBE, pattern, None, vec![])
    }

    /// an `UNSUBSCRIBE` frame for the given topic pattern.
    pub fn unsubscribe(pattern: String) -> Result<Frame> {
        Frame::new(PktType::UNSUBSCRIBE, pattern, None, vec![])
    }

    /// a `BIND` frame for the given queue.
    pub fn bind(queue: String, info: &BindInfo) -> Result<Frame> {
        let meta = serde_json::to_vec(info)?;
        Frame::new(PktType::BIND, queue, Some(meta), vec![])
    }

    /// an `ACK` frame for the given delivery.
    pub fn ack(delivery_id: u64) -> Result<Frame> {
        let meta = serde_json::to_vec(&AckInfo { delivery_id })?;
        Frame::new(PktType::ACK, String::new(), Some(meta), vec![])
    }

    /// a `DISCONNECT` frame.
    pub fn disconnect() -> Frame {
        Frame {
            header: Header::new(PktType::DISCONNECT, 0, 0, 0, 0),
            destination: String::new(),
            meta: vec![],
            payload: vec![],
        }
    }

    /// a `DELIVER` frame for the given destination and payload.
    pub fn deliver(
        destination: String,
        meta: &DeliveryMeta,
        payload: Vec<u8>,
        text_payload: bool,
        redelivered: bool,
    ) -> Result<Frame> {
        let meta = serde_json::to_vec(meta)?;
        let mut frame = Frame::new(PktType::DELIVER, destination, Some(meta), payload)?;
        if text_payload {
            frame.header.flags |= FLAG_TEXT_PAYLOAD;
        }
        if redelivered {
            frame.header.flags |= FLAG_REDELIVERED;
        }
        Ok(frame)
    }

    /// decodes the metadata section of a `DELIVER` frame.
    pub fn delivery_meta(&self) -> Result<DeliveryMeta> {
        if self.meta.is_empty() {
            return Ok(DeliveryMeta::default());
        }
        match serde_json::from_slice(&self.meta) {
            Ok(meta) => Ok(meta),
            Err(e) => bail!(FrameError::InvalidMetadata(e.to_string())),
        }
    }

    /// decodes the metadata section of a `CONNECT` frame.
    pub fn connect_info(&self) -> Result<ConnectInfo> {
        match serde_json::from_slice(&self.meta) {
            Ok(info) => Ok(info),
            Err(e) => bail!(FrameError::InvalidMetadata(e.to_string())),
        }
    }

    /// decodes the metadata section of a `BIND` frame.
    pub fn bind_info(&self) -> Result<BindInfo> {
        match serde_json::from_slice(&self.meta) {
            Ok(info) => Ok(info),
            Err(e) => bail!(FrameError::InvalidMetadata(e.to_string())),
        }
    }

    /// decodes the metadata section of an `ACK` frame.
    pub fn ack_info(&self) -> Result<AckInfo> {
        match serde_json::from_slice(&self.meta) {
            Ok(info) => Ok(info),
            Err(e) => bail!(FrameError::InvalidMetadata(e.to_string())),
        }
    }

    /// generates the response `Frame` answering this request.
    /// ```
    /// use solace_consumer_message::frame::Frame;
    /// let frame = Frame::subscribe("a/b/>".to_string()).unwrap();
    /// let response = frame.response_frame();
    /// assert!(response.is_ok());
    /// ```
    pub fn response_frame(&self) -> Result<Frame> {
        let Some(resp_type) = self.header.pkt_type.response_type() else {
            bail!(FrameError::InvalidPacketType(self.header.pkt_type.byte()));
        };
        Frame::new(resp_type, self.destination.clone(), None, vec![])
    }

    /// an `ERROR` frame carrying the broker diagnostic as payload.
    pub fn error(diagnostic: String) -> Result<Frame> {
        Frame::new(PktType::ERROR, String::new(), None, diagnostic.into_bytes())
    }

    /// returns bytes for the `Frame` that can be sent to the stream.
    /// ```
    /// use solace_consumer_message::frame::Frame;
    /// use solace_consumer_message::PktType;
    /// let frame = Frame::new(PktType::DELIVER, "a/b/c".to_string(), None, b"the message".to_vec()).unwrap();
    /// let bytes = frame.bytes();
    /// ```
    pub fn bytes(&self) -> Vec<u8> {
        let mut buffer: Vec<u8> = self.header.bytes().to_vec();
        buffer.extend(self.destination.as_bytes());
        buffer.extend(&self.meta);
        buffer.extend(&self.payload);
        trace!("the generated buffer is: {:?}", buffer);
        buffer
    }
}

impl TryFrom<&[u8]> for Frame {
    type Error = anyhow::Error;

    /// Parses a complete `Frame` from a `&[u8]`.
    fn try_from(bytes: &[u8]) -> Result<Frame> {
        if bytes.len() < HEADER_LEN {
            bail!(FrameError::InvalidHeaderBufferLength);
        }
        let header = Header::try_from(&bytes[..HEADER_LEN])?;
        let body = &bytes[HEADER_LEN..];
        if body.len() < header.body_length() {
            bail!(FrameError::InvalidFrameLength(body.len()));
        }

        let dest_end = header.destination_length as usize;
        let meta_end = dest_end + header.meta_length as usize;
        let payload_end = meta_end + header.payload_length as usize;

        let destination = match String::from_utf8(body[..dest_end].to_vec()) {
            Ok(destination) => destination,
            Err(_) => bail!(FrameError::InvalidDestination),
        };

        Ok(Frame {
            header,
            destination,
            meta: body[dest_end..meta_end].to_vec(),
            payload: body[meta_end..payload_end].to_vec(),
        })
    }
}
