use std::io::{self, Read};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("read failed while reading {context}")]
    Io {
        context: &'static str,
        #[source]
        source: io::Error,
    },
    #[error("stream ended while reading {context}: wanted {wanted} bytes, got {got}")]
    Truncated {
        context: &'static str,
        wanted: usize,
        got: usize,
    },
}

/// Read exactly `wanted` bytes or fail. A single read call may return
/// fewer bytes than requested even when more data remains, so keep
/// filling the buffer until the source is confirmed exhausted.
pub(crate) fn read_bytes<R: Read>(
    reader: &mut R,
    wanted: usize,
    context: &'static str,
) -> Result<Vec<u8>, ParseError> {
    let mut buf = vec![0; wanted];
    let mut got = 0;
    while got < wanted {
        match reader.read(&mut buf[got..]) {
            Ok(0) => return Err(ParseError::Truncated { context, wanted, got }),
            Ok(n) => got += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(ParseError::Io { context, source: e }),
        }
    }
    Ok(buf)
}

pub(crate) fn read_be_u32<R: Read>(
    reader: &mut R,
    context: &'static str,
) -> Result<u32, ParseError> {
    let buf = read_bytes(reader, 4, context)?;
    let bytes: [u8; 4] = buf.try_into().expect("4 bytes should have been read");
    Ok(u32::from_be_bytes(bytes))
}
