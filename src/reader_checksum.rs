use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

use log::{debug, info};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use crate::incremental_hash::IncrementalHash;
use crate::streaming_checksum::{Crc32Checksum, Crc32cChecksum};
use crate::{ChecksumError, Result};

pub const DEFAULT_CHUNK_SIZE: usize = 64 << 10;

#[derive(clap::ArgEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    Crc32,
    Crc32c,
}

impl Algorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Crc32 => "crc32",
            Algorithm::Crc32c => "crc32c",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChecksum {
    pub path: PathBuf,
    pub algorithm: Algorithm,
    pub little_endian: [u8; 4],
    pub big_endian: [u8; 4],
}

impl FileChecksum {
    pub fn value(&self) -> u32 {
        u32::from_le_bytes(self.little_endian)
    }
}

///
/// Feeds everything `reader` yields into `hash`, `chunk_size` bytes at a time
///
/// ```
/// use streaming_crc::reader_checksum::checksum_reader;
/// use streaming_crc::streaming_checksum::Crc32Checksum;
///
/// let checksum = checksum_reader(&b"123456789"[..], 4, Crc32Checksum::new()).unwrap();
/// assert_eq!(checksum.value(), 0xCBF43926);
/// ```
pub fn checksum_reader<T, H>(mut reader: T, chunk_size: usize, mut hash: H) -> Result<H>
where
    T: Read,
    H: IncrementalHash,
{
    if chunk_size == 0 {
        return Err(ChecksumError::ZeroChunkSize);
    }
    let mut chunk = vec![0; chunk_size];
    let mut total = 0;
    loop {
        match reader.read(&mut chunk) {
            Ok(0) => break,
            Ok(read_bytes) => {
                hash.append(&chunk, 0, read_bytes)?;
                total += read_bytes;
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    debug!("consumed {} bytes in chunks of {}", total, chunk_size);
    Ok(hash)
}

pub fn checksum_file(path: &Path, algorithm: Algorithm, chunk_size: usize) -> Result<FileChecksum> {
    let file = File::open(path)?;
    let (little_endian, big_endian) = match algorithm {
        Algorithm::Crc32 => digests(checksum_reader(file, chunk_size, Crc32Checksum::new())?),
        Algorithm::Crc32c => digests(checksum_reader(file, chunk_size, Crc32cChecksum::new())?),
    };
    Ok(FileChecksum {
        path: path.to_path_buf(),
        algorithm,
        little_endian,
        big_endian,
    })
}

fn digests<H: IncrementalHash>(hash: H) -> ([u8; 4], [u8; 4]) {
    (hash.digest_little_endian(), hash.digest_big_endian())
}

/// Checksums every file independently in parallel; results keep the order of `paths`.
pub fn checksum_files(
    paths: &[PathBuf],
    algorithm: Algorithm,
    chunk_size: usize,
) -> Vec<Result<FileChecksum>> {
    info!(
        "computing {:?} of {} files with chunk size {}",
        algorithm,
        paths.len(),
        chunk_size
    );
    paths
        .par_iter()
        .map(|path| checksum_file(path, algorithm, chunk_size))
        .collect()
}
