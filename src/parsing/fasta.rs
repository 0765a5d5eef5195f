//! Opening FASTA input for line-oriented scanning.
//!
//! Supported extensions:
//! - `.fa`, `.fasta`, `.fna`, `.ffn`, `.faa` (uncompressed)
//! - any of the above with `.gz` or `.bgz` (gzip/bgzip compressed)
//!
//! Unknown extensions are read as uncompressed text.

use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::filter::FilterError;

/// Path that selects standard input
pub const STDIN_PATH: &str = "-";

/// Check if the path has a FASTA extension
pub fn is_fasta_file(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    let stem = path_str
        .strip_suffix(".gz")
        .or_else(|| path_str.strip_suffix(".bgz"))
        .unwrap_or(&path_str);

    matches!(
        Path::new(stem).extension().and_then(OsStr::to_str),
        Some("fa" | "fasta" | "fna" | "ffn" | "faa")
    )
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Open `path` for buffered line reading, decompressing when needed.
///
/// bgzip output is a series of gzip members, so every member is decoded.
///
/// # Errors
///
/// Returns `FilterError::InputNotFound` if the path does not exist or is not a
/// regular file, or `FilterError::Io` if it cannot be opened.
pub fn open_input(path: &Path) -> Result<Box<dyn BufRead>, FilterError> {
    if path.as_os_str() == STDIN_PATH {
        return Ok(Box::new(BufReader::new(io::stdin().lock())));
    }

    if path.is_dir() {
        return Err(FilterError::InputNotFound(path.to_path_buf()));
    }

    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => FilterError::InputNotFound(path.to_path_buf()),
        _ => FilterError::Io(e),
    })?;

    if is_gzipped(path) {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_is_fasta_file() {
        assert!(is_fasta_file(Path::new("test.fa")));
        assert!(is_fasta_file(Path::new("test.fasta")));
        assert!(is_fasta_file(Path::new("test.fna")));
        assert!(is_fasta_file(Path::new("test.fa.gz")));
        assert!(is_fasta_file(Path::new("test.fasta.gz")));
        assert!(is_fasta_file(Path::new("test.fna.bgz")));
        assert!(is_fasta_file(Path::new("/path/to/SILVA.FASTA")));

        assert!(!is_fasta_file(Path::new("test.txt")));
        assert!(!is_fasta_file(Path::new("test.gz")));
        assert!(!is_fasta_file(Path::new("test.fai")));
    }

    #[test]
    fn test_open_plain() {
        let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
        temp.write_all(b">chr1\nACGT\n").unwrap();
        temp.flush().unwrap();

        let lines: Vec<String> = open_input(temp.path())
            .unwrap()
            .lines()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(lines, vec![">chr1", "ACGT"]);
    }

    #[test]
    fn test_open_gzipped_multi_member() {
        let mut temp = NamedTempFile::with_suffix(".fa.gz").unwrap();
        for chunk in [&b">chr1\nAC\n"[..], &b">chr2\nGT\n"[..]] {
            let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
            encoder.write_all(chunk).unwrap();
            temp.write_all(&encoder.finish().unwrap()).unwrap();
        }
        temp.flush().unwrap();

        let lines: Vec<String> = open_input(temp.path())
            .unwrap()
            .lines()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(lines, vec![">chr1", "AC", ">chr2", "GT"]);
    }

    #[test]
    fn test_open_missing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.fa");
        assert!(matches!(
            open_input(&missing),
            Err(FilterError::InputNotFound(_))
        ));
    }

    #[test]
    fn test_open_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            open_input(dir.path()),
            Err(FilterError::InputNotFound(_))
        ));
    }
}
