use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IoError {
    #[error("File not found: {0}")]
    FileNotFound(String),
    #[error("Permission denied: {0}")]
    PermissionDenied(String),
    #[error("Input is not valid UTF-8: {0}")]
    InvalidUtf8(String),
    #[error("I/O error: {0}")]
    GenericIo(#[from] io::Error),
}

/// Path argument meaning "read standard input".
pub const STDIN_PATH: &str = "-";

/// Reads the whole input, from `path` or from stdin when `path` is `None`
/// or `-`.
pub fn read_input(path: Option<&Path>) -> Result<String, IoError> {
    match path {
        Some(path) if path != Path::new(STDIN_PATH) => read_file(path),
        _ => read_from(io::stdin().lock(), "<stdin>"),
    }
}

fn read_file(path: &Path) -> Result<String, IoError> {
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => IoError::FileNotFound(path.display().to_string()),
        io::ErrorKind::PermissionDenied => IoError::PermissionDenied(path.display().to_string()),
        _ => IoError::GenericIo(e),
    })?;
    log::debug!("read {} bytes from {}", bytes.len(), path.display());
    String::from_utf8(bytes).map_err(|_| IoError::InvalidUtf8(path.display().to_string()))
}

/// Reads everything from `reader` as UTF-8. `name` is only used in errors.
pub fn read_from<R: Read>(mut reader: R, name: &str) -> Result<String, IoError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    String::from_utf8(bytes).map_err(|_| IoError::InvalidUtf8(name.to_string()))
}

/// Writes each line followed by a newline.
pub fn write_lines<W: Write, S: AsRef<str>>(writer: W, lines: &[S]) -> Result<(), IoError> {
    let mut writer = BufWriter::new(writer);
    for line in lines {
        writer.write_all(line.as_ref().as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?; // Ensure all buffered content is written
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_from_rejects_invalid_utf8() {
        let result = read_from(&[0xff, 0xfe][..], "bytes");
        assert!(matches!(result, Err(IoError::InvalidUtf8(name)) if name == "bytes"));
    }

    #[test]
    fn test_write_lines_appends_newlines() {
        let mut out = Vec::new();
        write_lines(&mut out, &["one", "", "two"]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "one\n\ntwo\n");
    }

    #[test]
    fn test_missing_file_is_reported() {
        let result = read_input(Some(Path::new("does/not/exist.txt")));
        assert!(matches!(result, Err(IoError::FileNotFound(_))));
    }
}
