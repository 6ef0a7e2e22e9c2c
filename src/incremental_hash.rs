use crate::Result;

/// An incremental hash over appended byte chunks, producing a 4 byte digest.
pub trait IncrementalHash {
    /// The next appended chunk starts a fresh accumulation.
    fn reset(&mut self);

    /// Feeds `buffer[offset..offset + length]` into the running value.
    ///
    /// Fails with [`crate::ChecksumError::InvalidArgument`] without touching the
    /// running value when the window does not fit in `buffer`.
    fn append(&mut self, buffer: &[u8], offset: usize, length: usize) -> Result<()>;

    fn digest_little_endian(&self) -> [u8; 4];

    /// Reading the digest does not end the stream; more chunks may follow.
    fn digest_big_endian(&self) -> [u8; 4] {
        let mut digest = self.digest_little_endian();
        digest.reverse();
        digest
    }

    fn update(&mut self, data: &[u8]) -> Result<()> {
        self.append(data, 0, data.len())
    }
}
