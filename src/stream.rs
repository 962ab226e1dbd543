use anyhow::{Context, Result};
use log::{debug, trace};
use solace_consumer_message::constants::HEADER_LEN;
use solace_consumer_message::frame::Frame;
use solace_consumer_message::header::Header;
use tokio::io::AsyncReadExt;

/// reads one complete frame from the stream.
pub async fn read_frame<S>(s: &mut S) -> Result<Frame>
where
    S: AsyncReadExt + Unpin + Send,
{
    let mut header_buf = [0u8; HEADER_LEN];
    s.read_exact(&mut header_buf)
        .await
        .context("error while reading the frame header from the socket")?;
    debug!("incoming frame header: {:?}", header_buf);

    let header = Header::try_from(header_buf.as_ref()).context("could not parse header")?;
    trace!("{:?}", header);

    let mut body = vec![0u8; header.body_length()];
    if !body.is_empty() {
        s.read_exact(&mut body)
            .await
            .context("error while reading the frame body from the socket")?;
    }

    let mut buf = header_buf.to_vec();
    buf.extend(body);
    Frame::try_from(buf.as_slice())
}
