use std::io::Read;

use crate::source::{read_be_u32, read_bytes, ParseError};

pub(crate) const HEADER_TAG: &[u8; 4] = b"IHDR";
pub(crate) const DATA_TAG: &[u8; 4] = b"IDAT";
pub(crate) const END_TAG: &[u8; 4] = b"IEND";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkKind {
    Header,
    Data,
    End,
    Other,
}

impl ChunkKind {
    pub fn from_tag(tag: &[u8; 4]) -> Self {
        match tag {
            HEADER_TAG => Self::Header,
            DATA_TAG => Self::Data,
            END_TAG => Self::End,
            _ => Self::Other,
        }
    }
}

/// One framed chunk: the tag verbatim, its classification, the declared
/// payload length, the payload itself, and the trailing checksum field.
/// The checksum is captured as stored, never recomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub tag: [u8; 4],
    pub kind: ChunkKind,
    pub length: u32,
    pub data: Vec<u8>,
    pub crc: u32,
}

impl Chunk {
    pub fn tag_lossy(&self) -> String {
        String::from_utf8_lossy(&self.tag).into_owned()
    }
}

pub fn iter_chunks<R: Read>(source: R) -> ChunkReader<R> {
    ChunkReader::new(source)
}

pub struct ChunkReader<R: Read> {
    inner: R,
    finished: bool,
}

impl<R: Read> ChunkReader<R> {
    pub fn new(reader: R) -> Self {
        ChunkReader {
            inner: reader,
            finished: false,
        }
    }

    fn read_chunk(&mut self) -> Result<Chunk, ParseError> {
        let length = read_be_u32(&mut self.inner, "chunk length")?;
        let tag: [u8; 4] = read_bytes(&mut self.inner, 4, "chunk type")?
            .try_into()
            .expect("4 bytes should have been read");
        let kind = ChunkKind::from_tag(&tag);
        let data = read_bytes(&mut self.inner, length as usize, "chunk data")?;
        let crc = read_be_u32(&mut self.inner, "chunk crc")?;
        log::debug!(
            "framed {} chunk with a {} byte payload",
            String::from_utf8_lossy(&tag),
            length
        );
        Ok(Chunk {
            tag,
            kind,
            length,
            data,
            crc,
        })
    }
}

impl<R: Read> Iterator for ChunkReader<R> {
    type Item = Result<Chunk, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.read_chunk() {
            Ok(chunk) => {
                if chunk.kind == ChunkKind::End {
                    self.finished = true;
                }
                Some(Ok(chunk))
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}
