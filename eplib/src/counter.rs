//! Word counting for listing mode.
//!
//! A word is a maximal run of non-whitespace characters. Content is decoded
//! lossily, so invalid UTF-8 sequences count as part of a word rather than
//! failing the count.

use std::fs;
use std::path::Path;

use crate::error::EpError;
use crate::Result;

/// Count whitespace-separated words in raw content.
///
/// ```
/// assert_eq!(eplib::count_words(b"  hello\n\tworld  "), 2);
/// assert_eq!(eplib::count_words(b""), 0);
/// ```
pub fn count_words(content: &[u8]) -> usize {
    String::from_utf8_lossy(content).split_whitespace().count()
}

/// Read a file and count its words.
pub fn count_file_words(path: impl AsRef<Path>) -> Result<usize> {
    let path = path.as_ref();
    let content = fs::read(path).map_err(|source| EpError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(count_words(&content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_count_words_collapses_whitespace_runs() {
        assert_eq!(count_words(b"one two  three\n\nfour\r\n"), 4);
        assert_eq!(count_words(b"   \n\t "), 0);
    }

    #[test]
    fn test_count_words_unicode_whitespace() {
        // U+3000 ideographic space separates words
        assert_eq!(count_words("a\u{3000}b".as_bytes()), 2);
    }

    #[test]
    fn test_count_words_invalid_utf8() {
        assert_eq!(count_words(&[b'a', 0xff, b' ', b'b']), 2);
    }

    #[test]
    fn test_count_file_words() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("a.txt");
        fs::write(&path, "fn main() {\n    println!(\"hi\");\n}\n").unwrap();

        assert_eq!(count_file_words(&path).unwrap(), 5);
    }

    #[test]
    fn test_count_file_words_missing() {
        let result = count_file_words("/nonexistent/file.txt");

        assert!(matches!(result, Err(EpError::FileRead { .. })));
        assert!(result.unwrap_err().is_not_found());
    }
}
