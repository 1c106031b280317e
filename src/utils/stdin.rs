use std::io::{self, Read};

/// Drain a reader until end-of-stream into one string
///
/// # Errors
/// Returns the underlying IO error, including invalid UTF-8 input.
pub fn read_to_end<R: Read>(reader: &mut R) -> io::Result<String> {
    let mut buffer = String::new();
    reader.read_to_string(&mut buffer)?;
    Ok(buffer)
}

/// Read everything the process receives on standard input
pub fn read_stdin() -> io::Result<String> {
    read_to_end(&mut io::stdin().lock())
}
