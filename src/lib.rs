mod chunks;
pub mod report;
mod signature;
mod source;

pub use chunks::{iter_chunks, Chunk, ChunkKind, ChunkReader};
pub use signature::{check_signature, Signature, SIGNATURE};
pub use source::ParseError;
