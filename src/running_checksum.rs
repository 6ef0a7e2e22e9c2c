pub mod crc32;
pub mod crc32c;

/// A one-shot checksum routine that can be resumed from a previous result.
///
/// `compute_running` processes the first `length` bytes of `data`, starting at index 0,
/// seeded with `previous` (0 for a fresh computation) and returns the updated value.
pub trait RunningChecksum {
    fn name(&self) -> &'static str;

    fn compute_running(&self, data: &[u8], length: usize, previous: u32) -> u32;
}

pub type RunningChecksumFn = fn(&[u8], usize, u32) -> u32;

/// Injects a plain function with the `(data, length, previous) -> updated` shape.
#[derive(Clone, Copy)]
pub struct FnRunningChecksum {
    name: &'static str,
    compute: RunningChecksumFn,
}

impl FnRunningChecksum {
    pub fn new(name: &'static str, compute: RunningChecksumFn) -> Self {
        FnRunningChecksum { name, compute }
    }
}

impl std::fmt::Debug for FnRunningChecksum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnRunningChecksum")
            .field("name", &self.name)
            .finish()
    }
}

impl RunningChecksum for FnRunningChecksum {
    fn name(&self) -> &'static str {
        self.name
    }

    fn compute_running(&self, data: &[u8], length: usize, previous: u32) -> u32 {
        (self.compute)(data, length, previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn byte_sum(data: &[u8], length: usize, previous: u32) -> u32 {
        data[..length]
            .iter()
            .fold(previous, |acc, b| acc.wrapping_add(*b as u32))
    }

    #[test]
    fn test_fn_running_checksum_delegates() {
        let strategy = FnRunningChecksum::new("byte-sum", byte_sum);

        assert_eq!(strategy.name(), "byte-sum");
        assert_eq!(strategy.compute_running(&[1, 2, 3, 100], 3, 10), 16);
    }
}
