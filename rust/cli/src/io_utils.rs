//! Line input for the interactive commands.

use std::io::{self, BufRead};

/// Reads one line and trims surrounding whitespace.
///
/// Returns `Ok(None)` once the input is closed. Read failures are passed on so
/// that a broken pipe is not mistaken for a deliberate end of input.
///
/// ```rust
/// use std::io::Cursor;
/// # use videopoker_cli::io_utils::read_line;
///
/// let mut input = Cursor::new("  1 3 5 \r\nall\n");
/// assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("1 3 5"));
/// assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("all"));
/// assert_eq!(read_line(&mut input).unwrap(), None);
/// ```
pub fn read_line(input: &mut dyn BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
