use crate::utils::Result;
use flate2::read::MultiGzDecoder;
use std::fs::{self, File};
use std::io::Read as ioRead;
use std::path::Path;

/// Reads a sequence file into a trimmed string, transparently decoding
/// gzipped input.
pub fn read_sequence(path: &Path) -> Result<String> {
    fn is_gzipped(path: &Path) -> bool {
        let path_str = path.to_string_lossy().to_lowercase();
        path_str.ends_with(".gz") || path_str.ends_with(".gzip")
    }

    let contents = if is_gzipped(path) {
        let file = File::open(path).map_err(|e| format!("File {}: {}", path.display(), e))?;
        let mut gz_decoder = MultiGzDecoder::new(file);
        if gz_decoder.header().is_none() {
            return Err(format!("Invalid gzip header: {}", path.display()));
        }
        let mut decoded = String::new();
        gz_decoder
            .read_to_string(&mut decoded)
            .map_err(|e| format!("File {}: {}", path.display(), e))?;
        decoded
    } else {
        fs::read_to_string(path).map_err(|e| format!("File {}: {}", path.display(), e))?
    };

    Ok(contents.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn plain_sequence_is_trimmed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("father.txt");
        fs::write(&path, "  ACGT acgt-+\n").unwrap();
        assert_eq!(read_sequence(&path).unwrap(), "ACGT acgt-+");
    }

    #[test]
    fn gzipped_sequence_is_decoded() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mother.txt.gz");
        let mut encoder = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        encoder.write_all(b"ACGTACGT\n").unwrap();
        encoder.finish().unwrap();
        assert_eq!(read_sequence(&path).unwrap(), "ACGTACGT");
    }

    #[test]
    fn plain_text_with_gz_extension_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bogus.gz");
        fs::write(&path, "ACGT\n").unwrap();
        assert!(read_sequence(&path).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.txt");
        assert!(read_sequence(&path).is_err());
    }
}
