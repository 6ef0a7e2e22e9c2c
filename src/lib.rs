use thiserror::Error;

const VERSION: Option<&'static str> = option_env!("CARGO_PKG_VERSION");
// unwrap_or as a const fn is not stable yet
const DEFAULT_VERSION: &str = "none";

pub mod incremental_hash;
pub mod reader_checksum;
pub mod running_checksum;
pub mod streaming_checksum;

pub type Result<T> = std::result::Result<T, ChecksumError>;

#[derive(Error, Debug)]
pub enum ChecksumError {
    #[error("window of {length} bytes at offset {offset} does not fit in a buffer of {buffer_len} bytes")]
    InvalidArgument {
        offset: usize,
        length: usize,
        buffer_len: usize,
    },
    #[error("chunk size must be greater than zero")]
    ZeroChunkSize,
    #[error("failed to read input")]
    Io(#[from] std::io::Error),
}

pub fn version() -> &'static str {
    VERSION.unwrap_or(DEFAULT_VERSION)
}
