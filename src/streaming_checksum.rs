use std::io::Write;

use log::debug;

use crate::incremental_hash::IncrementalHash;
use crate::running_checksum::crc32::Crc32;
use crate::running_checksum::crc32c::Crc32c;
use crate::running_checksum::RunningChecksum;
use crate::{ChecksumError, Result};

pub type Crc32Checksum = StreamingChecksum<Crc32>;
pub type Crc32cChecksum = StreamingChecksum<Crc32c>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChecksumState {
    /// Nothing appended since creation or the last reset.
    Fresh,
    Accumulating,
}

/// Turns a resumable one-shot [`RunningChecksum`] into a multi-call stream.
///
/// Reset is lazy: [`reset`](IncrementalHash::reset) only raises a flag and the running value
/// is zeroed once the next non-empty chunk arrives. While the flag is raised every digest
/// read reports the checksum of empty input.
///
/// ```
/// use streaming_crc::incremental_hash::IncrementalHash;
/// use streaming_crc::streaming_checksum::Crc32cChecksum;
///
/// let mut checksum = Crc32cChecksum::new();
/// checksum.append(b"1234", 0, 4).unwrap();
/// checksum.append(b"xx56789", 2, 5).unwrap();
/// assert_eq!(checksum.value(), 0xE3069283);
/// assert_eq!(checksum.digest_big_endian(), [0xE3, 0x06, 0x92, 0x83]);
/// ```
#[derive(Clone, Debug)]
pub struct StreamingChecksum<R> {
    strategy: R,
    current_value: u32,
    pending_reset: bool,
}

impl<R> StreamingChecksum<R>
where
    R: RunningChecksum + Default,
{
    pub fn new() -> Self {
        Self::with_strategy(R::default())
    }
}

impl<R> Default for StreamingChecksum<R>
where
    R: RunningChecksum + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<R> StreamingChecksum<R>
where
    R: RunningChecksum,
{
    pub fn with_strategy(strategy: R) -> Self {
        StreamingChecksum {
            strategy,
            current_value: 0,
            pending_reset: true,
        }
    }

    pub fn name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn state(&self) -> ChecksumState {
        if self.pending_reset {
            ChecksumState::Fresh
        } else {
            ChecksumState::Accumulating
        }
    }

    /// The running checksum of everything appended since the last reset.
    pub fn value(&self) -> u32 {
        if self.pending_reset {
            0
        } else {
            self.current_value
        }
    }

    /// Little endian digest of the running value; the stream stays open.
    pub fn finalize(&self) -> [u8; 4] {
        self.value().to_le_bytes()
    }
}

impl<R> IncrementalHash for StreamingChecksum<R>
where
    R: RunningChecksum,
{
    fn reset(&mut self) {
        self.pending_reset = true;
    }

    fn append(&mut self, buffer: &[u8], offset: usize, length: usize) -> Result<()> {
        let end = offset
            .checked_add(length)
            .filter(|end| *end <= buffer.len())
            .ok_or(ChecksumError::InvalidArgument {
                offset,
                length,
                buffer_len: buffer.len(),
            })?;
        if length == 0 {
            return Ok(());
        }

        if self.pending_reset {
            self.current_value = 0;
            self.pending_reset = false;
        }

        self.current_value = if offset == 0 {
            self.strategy
                .compute_running(buffer, length, self.current_value)
        } else {
            // the primitive only reads from index 0 so the window gets its own buffer
            let window = buffer[offset..end].to_vec();
            self.strategy
                .compute_running(&window, length, self.current_value)
        };
        debug!(
            "{} appended {} bytes at offset {} -> {:#010x}",
            self.strategy.name(),
            length,
            offset,
            self.current_value
        );
        Ok(())
    }

    fn digest_little_endian(&self) -> [u8; 4] {
        self.finalize()
    }
}

impl<R> Write for StreamingChecksum<R>
where
    R: RunningChecksum,
{
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.update(buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
