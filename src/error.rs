// Typed failures reported by the encode and decode operations

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HuffError {
    #[error("cannot encode an empty message")]
    EmptyInput,
    #[error("frequency table contains no symbols")]
    DegenerateAlphabet,
    #[error("no code for symbol {0:#04x}")]
    UnknownSymbol(u8),
    #[error("corrupt tree file: {0}")]
    CorruptTreeFile(String),
    #[error("malformed bitstream: {0}")]
    MalformedBitstream(String),
    #[error("bitstream ended in the middle of a code")]
    TruncatedStream,
}
