use thiserror::Error;

use crate::Symbol;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HuffmanError {
    #[error("cannot build a code tree from an empty input")]
    EmptyInput,

    #[error("symbol {0:?} is not encodable with this code tree")]
    SymbolNotEncodable(Symbol),

    #[error("symbol {0:?} appears in more than one leaf")]
    DuplicateSymbol(Symbol),

    #[error("malformed bit stream at bit {position}: {reason}")]
    MalformedBitstream {
        position: usize,
        reason: &'static str,
    },

    #[error("invalid bit character {0:?}, expected '0' or '1'")]
    InvalidBit(char),
}

pub type Result<T> = std::result::Result<T, HuffmanError>;
