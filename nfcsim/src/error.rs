// nfcsim-rs/nfcsim/src/error.rs

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("pattern window out of bounds: compare length {length} exceeds pattern size {available}")]
    PatternWindow { length: usize, available: usize },

    #[error("invalid hex input: {0}")]
    InvalidHex(String),
}

pub type Result<T> = std::result::Result<T, Error>;
