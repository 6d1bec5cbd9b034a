use serde_json::{json, Value};

use crate::chunks::Chunk;
use crate::signature::Signature;

/// Labelled block describing one chunk, one field per line.
pub fn chunk_block(chunk: &Chunk) -> String {
    format!(
        "Type        : {}\n\
         Kind        : {:?}\n\
         Size        : {}\n\
         Crc         : {:#010x}\n\
         --------------------",
        chunk.tag_lossy(),
        chunk.kind,
        chunk.length,
        chunk.crc,
    )
}

pub fn signature_line(file_name: &str, signature: &Signature) -> String {
    if signature.is_valid() {
        format!("{file_name} is a valid png file!")
    } else {
        format!("{file_name} is not a png file!")
    }
}

pub fn chunk_json(chunk: &Chunk) -> Value {
    json!({
        "type": chunk.tag_lossy(),
        "kind": format!("{:?}", chunk.kind),
        "size": chunk.length,
        "crc": chunk.crc,
    })
}
