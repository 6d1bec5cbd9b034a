use std::io::Read;

use crate::source::{read_bytes, ParseError};

/// A PNG file must start with these 8 bytes.
pub const SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    bytes: [u8; 8],
}

impl Signature {
    pub fn is_valid(&self) -> bool {
        self.bytes == SIGNATURE
    }

    pub fn bytes(&self) -> &[u8; 8] {
        &self.bytes
    }
}

/// Consume the signature from the front of the stream. A mismatch is
/// reported through [`Signature::is_valid`], not as an error; the stream
/// is left positioned at the first chunk either way.
pub fn check_signature<R: Read>(reader: &mut R) -> Result<Signature, ParseError> {
    let buf = read_bytes(reader, 8, "file signature")?;
    let bytes: [u8; 8] = buf.try_into().expect("8 bytes should have been read");
    log::debug!("signature bytes: {:?}", bytes);
    Ok(Signature { bytes })
}
