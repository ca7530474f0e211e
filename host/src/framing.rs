//! Length-prefixed frame codec
//!
//! One frame is a 4-byte little-endian unsigned length followed by
//! exactly that many payload bytes. A closed stream - including a
//! short read mid-frame - is reported as `None`, never as an error.

use std::io;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Read one frame, or `None` once the stream is closed.
pub async fn read_frame<R>(reader: &mut R) -> io::Result<Option<Vec<u8>>>
where
    R: AsyncRead + Unpin,
{
    let mut len_buf = [0u8; 4];
    if let Err(err) = reader.read_exact(&mut len_buf).await {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            return Ok(None);
        }
        return Err(err);
    }

    let len = u32::from_le_bytes(len_buf) as usize;
    let mut payload = vec![0u8; len];
    if let Err(err) = reader.read_exact(&mut payload).await {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            // Truncated payload is treated the same as stream closure.
            return Ok(None);
        }
        return Err(err);
    }

    Ok(Some(payload))
}

/// Write one frame and flush it before the caller goes back to reading.
pub async fn write_frame<W>(writer: &mut W, payload: &[u8]) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let len = u32::try_from(payload.len())
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "payload exceeds u32 length"))?;
    writer.write_all(&len.to_le_bytes()).await?;
    writer.write_all(payload).await?;
    writer.flush().await
}
