use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrameError {
    /// invalid header buffer length
    #[error("Invalid header buffer length")]
    InvalidHeaderBufferLength,
    /// invalid header marker or padding
    #[error("Invalid header marker or padding")]
    InvalidHeadOrTail,
    /// unsupported version of the packet
    #[error("Unsupported version of the packet")]
    UnsupportedVersion,
    /// invalid packet type
    #[error("Invalid packet type: `{0}`")]
    InvalidPacketType(u8),
    /// the frame body is shorter than the header claims
    #[error("Invalid frame length: `{0}`")]
    InvalidFrameLength(usize),
    /// a frame section does not fit its length field
    #[error("Frame section too long: `{0}` bytes")]
    SectionTooLong(usize),
    /// the destination is not valid utf-8
    #[error("Destination is not valid utf-8")]
    InvalidDestination,
    /// the metadata section could not be decoded
    #[error("Invalid metadata section: `{0}`")]
    InvalidMetadata(String),
}
