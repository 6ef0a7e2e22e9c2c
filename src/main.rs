use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;
use env_logger::Env;
use log::{error, info};

use streaming_crc::reader_checksum::{
    checksum_file, checksum_files, Algorithm, FileChecksum, DEFAULT_CHUNK_SIZE,
};

#[derive(Parser, Debug)]
#[clap(version, about)]
/// Streaming CRC32 / CRC32c checksums of files, read chunk by chunk
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Prints the checksum of every <FILES> as "<digest hex> <value hex> <path>"
    Sum {
        #[clap(long, arg_enum, default_value = "crc32c")]
        /// The checksum algorithm
        algorithm: Algorithm,
        #[clap(long, default_value_t = DEFAULT_CHUNK_SIZE)]
        /// How many bytes are read and appended at a time
        chunk_size: usize,
        #[clap(long)]
        /// Print the digest bytes in big endian (network) order instead of little endian
        big_endian: bool,
        #[clap(required = true)]
        files: Vec<PathBuf>,
    },
    /// Verifies that <FILE> has the checksum --expected=<EXPECTED>, exits with an error otherwise
    Check {
        #[clap(long, arg_enum, default_value = "crc32c")]
        /// The checksum algorithm
        algorithm: Algorithm,
        #[clap(long, default_value_t = DEFAULT_CHUNK_SIZE)]
        /// How many bytes are read and appended at a time
        chunk_size: usize,
        #[clap(long, parse(try_from_str = parse_hex_u32))]
        /// The expected checksum value in hex, e.g. 0xE3069283
        expected: u32,
        file: PathBuf,
    },
}

fn parse_hex_u32(s: &str) -> Result<u32, std::num::ParseIntError> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    u32::from_str_radix(digits, 16)
}

fn hex(bytes: &[u8; 4]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

fn print_checksum(checksum: &FileChecksum, big_endian: bool) {
    let digest = if big_endian {
        &checksum.big_endian
    } else {
        &checksum.little_endian
    };
    println!(
        "{} {:#010x} {}",
        hex(digest),
        checksum.value(),
        checksum.path.display()
    );
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli: Cli = Cli::parse();
    info!("streaming-crc {}", streaming_crc::version());

    return match cli.command {
        Commands::Sum {
            algorithm,
            chunk_size,
            big_endian,
            files,
        } => {
            let mut failures = 0;
            for result in checksum_files(&files, algorithm, chunk_size) {
                match result {
                    Ok(checksum) => print_checksum(&checksum, big_endian),
                    Err(e) => {
                        error!("{}", e);
                        failures += 1;
                    }
                }
            }
            if failures > 0 {
                bail!("{} of {} files could not be checksummed", failures, files.len());
            }
            Ok(())
        }
        Commands::Check {
            algorithm,
            chunk_size,
            expected,
            file,
        } => {
            let checksum = checksum_file(&file, algorithm, chunk_size)?;
            if checksum.value() != expected {
                bail!(
                    "{} mismatch for {}: expected {:#010x}, got {:#010x}",
                    checksum.algorithm.name(),
                    file.display(),
                    expected,
                    checksum.value()
                );
            }
            info!(
                "{} of {} matches {:#010x}",
                checksum.algorithm.name(),
                file.display(),
                expected
            );
            Ok(())
        }
    };
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("0xE3069283", 0xE3069283; "prefixed")]
    #[test_case("cbf43926", 0xCBF43926; "bare lowercase")]
    #[test_case("0X0", 0; "upper prefix")]
    fn test_parse_hex_u32(input: &str, expected: u32) {
        assert_eq!(parse_hex_u32(input).unwrap(), expected);
    }

    #[test]
    fn test_hex_keeps_byte_order() {
        assert_eq!(hex(&[0xE3, 0x06, 0x92, 0x83]), "e3069283");
    }

    #[test]
    fn test_cli_parses_sum() {
        let cli = Cli::try_parse_from([
            "streaming-crc",
            "sum",
            "--algorithm",
            "crc32",
            "--big-endian",
            "a.bin",
            "b.bin",
        ])
        .unwrap();
        match cli.command {
            Commands::Sum {
                algorithm,
                chunk_size,
                big_endian,
                files,
            } => {
                assert_eq!(algorithm, Algorithm::Crc32);
                assert_eq!(chunk_size, DEFAULT_CHUNK_SIZE);
                assert!(big_endian);
                assert_eq!(files.len(), 2);
            }
            _ => panic!("expected the sum command"),
        }
    }
}
