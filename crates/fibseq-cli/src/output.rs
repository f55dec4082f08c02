//! Sequence output: space-separated decimal text, streamed one number at a time.

use std::borrow::Borrow;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use num_bigint::BigUint;

/// Write `values` as decimal text separated by single spaces, then flush.
///
/// Nothing is written after the last value. Each number is formatted and
/// written on its own, so the full text is never held in memory.
/// Returns how many values were written.
///
/// # Errors
///
/// Returns the first I/O error raised by `out`.
pub fn write_sequence<W, I>(out: &mut W, values: I) -> io::Result<usize>
where
    W: Write + ?Sized,
    I: IntoIterator,
    I::Item: Borrow<BigUint>,
{
    let mut written = 0;
    for value in values {
        if written > 0 {
            out.write_all(b" ")?;
        }
        let value: &BigUint = value.borrow();
        write!(out, "{value}")?;
        written += 1;
    }
    out.flush()?;
    Ok(written)
}

/// Write `values` to a freshly created (or truncated) file at `path`.
///
/// The file handle is closed before this returns, whether or not the write
/// succeeded. A partially written file is left in place on failure.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file<I>(path: &Path, values: I) -> io::Result<usize>
where
    I: IntoIterator,
    I::Item: Borrow<BigUint>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    let written = write_sequence(&mut writer, values)?;
    tracing::debug!(path = %path.display(), written, "sequence file flushed");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fibseq_core::FibIterator;

    fn render(count: usize) -> String {
        let mut buf = Vec::new();
        write_sequence(&mut buf, FibIterator::new().take(count)).unwrap();
        String::from_utf8(buf).unwrap()
    }

    /// Fails after accepting `budget` bytes.
    struct FailingWriter {
        budget: usize,
    }

    impl Write for FailingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.budget < buf.len() {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
            }
            self.budget -= buf.len();
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn single_value_has_no_separator() {
        assert_eq!(render(1), "0");
    }

    #[test]
    fn first_ten_space_separated() {
        assert_eq!(render(10), "0 1 1 2 3 5 8 13 21 34");
    }

    #[test]
    fn no_trailing_space() {
        let text = render(50);
        assert!(!text.ends_with(' '));
        assert_eq!(text.split(' ').count(), 50);
    }

    #[test]
    fn accepts_borrowed_values() {
        let values = fibseq_core::generate(5).unwrap();
        let mut buf = Vec::new();
        let written = write_sequence(&mut buf, &values).unwrap();
        assert_eq!(written, 5);
        assert_eq!(buf, b"0 1 1 2 3");
    }

    #[test]
    fn empty_input_writes_nothing() {
        let mut buf = Vec::new();
        let written = write_sequence(&mut buf, std::iter::empty::<BigUint>()).unwrap();
        assert_eq!(written, 0);
        assert!(buf.is_empty());
    }

    #[test]
    fn propagates_write_errors() {
        let mut out = FailingWriter { budget: 4 };
        let err = write_sequence(&mut out, FibIterator::new().take(100)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn writes_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("fibs-12.txt");
        let written = write_to_file(&path, FibIterator::new().take(12)).unwrap();
        assert_eq!(written, 12);
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "0 1 1 2 3 5 8 13 21 34 55 89");
    }

    #[test]
    fn overwrites_existing_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("fibs-3.txt");
        std::fs::write(&path, "stale content that is longer").unwrap();
        write_to_file(&path, FibIterator::new().take(3)).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "0 1 1");
    }

    #[test]
    fn missing_directory_is_an_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("missing").join("fibs-3.txt");
        assert!(write_to_file(&path, FibIterator::new().take(3)).is_err());
    }
}
