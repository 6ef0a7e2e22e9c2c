use super::RunningChecksum;

/// CRC32 (Ethernet, gzip, zlib), hardware accelerated by `crc32fast` where available.
#[derive(Clone, Copy, Debug, Default)]
pub struct Crc32 {}

impl RunningChecksum for Crc32 {
    fn name(&self) -> &'static str {
        "crc32"
    }

    fn compute_running(&self, data: &[u8], length: usize, previous: u32) -> u32 {
        let mut actual = crc32fast::Hasher::new_with_initial(previous);
        actual.update(&data[..length]);
        actual.finalize()
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(b"123456789", 0xCBF43926; "check value")]
    #[test_case(&[0; 32], 0x190A55AD; "thirty two zeroes")]
    #[test_case(b"", 0; "empty input")]
    fn test_known_crc32(input: &[u8], expected: u32) {
        assert_eq!(Crc32 {}.compute_running(input, input.len(), 0), expected);
    }

    #[test]
    fn test_resume_from_previous() {
        let data = b"123456789";
        let head = Crc32 {}.compute_running(data, 4, 0);
        let resumed = Crc32 {}.compute_running(&data[4..], 5, head);
        assert_eq!(resumed, 0xCBF43926);
    }

    #[test]
    fn test_only_length_bytes_are_read() {
        let data = b"123456789garbage";
        assert_eq!(Crc32 {}.compute_running(data, 9, 0), 0xCBF43926);
    }
}
