//  EMIT.rs
//    by Lut99
//
//  Created:
//    14 Oct 2026, 11:48:19
//  Last edited:
//    16 Oct 2026, 16:20:54
//  Auto updated?
//    Yes
//
//  Description:
//!   Formats and writes a single admitted log line.
//

use std::fmt::Arguments;
use std::io::{self, Write};

use crate::level::Level;


/***** CONSTANTS *****/
/// The width to which the location label is padded (or truncated).
pub const LABEL_WIDTH: usize = 30;

/// The width to which the line number is padded.
pub const LINE_WIDTH: usize = 4;





/***** LIBRARY *****/
/// Describes where a log call was made.
///
/// Built by the logging macros from `file!()` and `line!()` for every emission, and then thrown
/// away again.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CallSite {
    /// The source file of the call.
    pub file:  &'static str,
    /// The line of the call in `file`.
    pub line:  u32,
    /// The level at which the call was made.
    pub level: Level,
}
impl CallSite {
    /// Constructor for the CallSite.
    ///
    /// # Arguments
    /// - `file`: The source file of the call.
    /// - `line`: The line of the call in `file`.
    /// - `level`: The level at which the call was made.
    ///
    /// # Returns
    /// A new CallSite.
    #[inline]
    pub const fn new(file: &'static str, line: u32, level: Level) -> Self { Self { file, line, level } }
}



/// Writes one log line to the given writer.
///
/// The line has the layout:
/// ```plain
/// [<file, padded/truncated to 30>: <line, padded to 4>] <message>
/// ```
///
/// # Arguments
/// - `writer`: The [`Write`]r to write to.
/// - `site`: The [`CallSite`] that produced the message.
/// - `message`: The already captured message to write.
///
/// # Errors
/// This function errors if we failed to write to the `writer`.
pub fn write_line<W: ?Sized + Write>(writer: &mut W, site: &CallSite, message: Arguments) -> Result<(), io::Error> {
    writeln!(writer, "[{:<lw$.lw$}: {:<nw$}] {message}", site.file, site.line, lw = LABEL_WIDTH, nw = LINE_WIDTH)
}

/// Writes one log line to stdout.
///
/// The line is written in one go while holding the lock on stdout, so concurrent calls never
/// interleave within a line. Failures to write are ignored.
///
/// # Arguments
/// - `site`: The [`CallSite`] that produced the message.
/// - `message`: The already captured message to write.
#[inline]
pub fn emit(site: &CallSite, message: Arguments) {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    let _ = write_line(&mut lock, site, message);
}





/***** TESTS *****/
#[cfg(test)]
mod tests {
    use super::*;

    /// Runs [`write_line()`] and returns what it wrote.
    fn render(site: &CallSite, message: Arguments) -> String {
        let mut buf: Vec<u8> = Vec::new();
        write_line(&mut buf, site, message).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_write_line_layout() {
        let site = CallSite::new("mod.c", 50, Level::Fatal);
        assert_eq!(render(&site, format_args!("Log test of module!")), "[mod.c                         : 50  ] Log test of module!\n");
    }

    #[test]
    fn test_write_line_arguments() {
        let site = CallSite::new("src/main.rs", 7, Level::Info);
        assert_eq!(render(&site, format_args!("Hello debug level {}", 3)), "[src/main.rs                   : 7   ] Hello debug level 3\n");
    }

    #[test]
    fn test_write_line_exact_width() {
        let file: &'static str = "abcdefghijklmnopqrstuvwxyz0123";
        assert_eq!(file.len(), LABEL_WIDTH);
        let site = CallSite::new(file, 1234, Level::Debug);
        assert_eq!(render(&site, format_args!("x")), "[abcdefghijklmnopqrstuvwxyz0123: 1234] x\n");
    }

    #[test]
    fn test_write_line_truncates_label() {
        let site = CallSite::new("a/very/long/path/to/some/source/file.rs", 1, Level::Error);
        let line: String = render(&site, format_args!("msg"));
        assert_eq!(line, "[a/very/long/path/to/some/sourc: 1   ] msg\n");
        assert_eq!(line.find(':'), Some(1 + LABEL_WIDTH));
    }

    #[test]
    fn test_write_line_long_line_number() {
        // The line number is padded, never truncated
        let site = CallSite::new("big.rs", 123456, Level::Warning);
        assert_eq!(render(&site, format_args!("")), "[big.rs                        : 123456] \n");
    }

    #[test]
    fn test_write_line_single_terminator() {
        let site = CallSite::new("lib.rs", 3, Level::Info);
        let line: String = render(&site, format_args!("two\nlines"));
        assert!(line.ends_with("lines\n"));
        assert_eq!(line.matches('\n').count(), 2);
    }
}
