use super::RunningChecksum;

/// Castagnoli CRC32c (iSCSI). `crc32c` picks SSE4.2/ARMv8 instructions when the CPU has them.
#[derive(Clone, Copy, Debug, Default)]
pub struct Crc32c {}

impl RunningChecksum for Crc32c {
    fn name(&self) -> &'static str {
        "crc32c"
    }

    fn compute_running(&self, data: &[u8], length: usize, previous: u32) -> u32 {
        crc32c::crc32c_append(previous, &data[..length])
    }
}
