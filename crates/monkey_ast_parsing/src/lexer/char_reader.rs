//! A utf-8 decoding reader with a single character of push back

use log::error;
use std::fmt::{Debug, Formatter};
use std::io;
use std::io::{BufRead, BufReader, ErrorKind, Read};

const DEFAULT_BUF_SIZE: usize = 256;

/// Decodes characters one at a time from a [Read] obj.
///
/// At most one character can be pushed back with [CharReader::unread]. Invalid utf-8
/// sequences decode to [char::REPLACEMENT_CHARACTER]. Once the underlying reader is
/// exhausted or fails, every further read returns `None`.
pub struct CharReader<R> {
    inner: BufReader<R>,
    pending: Option<char>,
    exhausted: bool,
    error: Option<io::Error>,
}

impl<R: Read> CharReader<R> {
    /// Creates a reader
    pub fn new(reader: R) -> Self {
        Self::with_capacity(reader, DEFAULT_BUF_SIZE)
    }

    /// Creates a new char reader with a given buffer size
    pub fn with_capacity(reader: R, capacity: usize) -> Self {
        Self {
            inner: BufReader::with_capacity(capacity, reader),
            pending: None,
            exhausted: false,
            error: None,
        }
    }

    /// Reads the next character, or `None` at the end of input.
    pub fn read(&mut self) -> Option<char> {
        if let Some(c) = self.pending.take() {
            return Some(c);
        }
        if self.exhausted {
            return None;
        }
        match self.decode_next() {
            Ok(Some(c)) => Some(c),
            Ok(None) => {
                self.exhausted = true;
                None
            }
            Err(e) => {
                error!("reading source failed, treating it as the end of input: {e}");
                self.exhausted = true;
                self.error = Some(e);
                None
            }
        }
    }

    /// Pushes a character back so that the next [read](CharReader::read) returns it.
    ///
    /// Only one character may be pending at a time.
    pub fn unread(&mut self, c: char) {
        debug_assert!(
            self.pending.is_none(),
            "only one character can be pushed back"
        );
        self.pending = Some(c);
    }

    /// Gets the next character without consuming it
    pub fn peek(&mut self) -> Option<char> {
        let c = self.read()?;
        self.unread(c);
        Some(c)
    }

    /// Takes the error that ended the input, if there was one
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    fn peek_byte(&mut self) -> io::Result<Option<u8>> {
        loop {
            match self.inner.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let byte = self.peek_byte()?;
        if byte.is_some() {
            self.inner.consume(1);
        }
        Ok(byte)
    }

    fn decode_next(&mut self) -> io::Result<Option<char>> {
        let Some(lead) = self.read_byte()? else {
            return Ok(None);
        };
        let width = match lead {
            0x00..=0x7F => return Ok(Some(lead as char)),
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            _ => return Ok(Some(char::REPLACEMENT_CHARACTER)),
        };
        let mut bytes = [lead, 0, 0, 0];
        for slot in bytes.iter_mut().take(width).skip(1) {
            match self.peek_byte()? {
                Some(b @ 0x80..=0xBF) => {
                    self.inner.consume(1);
                    *slot = b;
                }
                // truncated sequence, the offending byte starts the next character
                _ => return Ok(Some(char::REPLACEMENT_CHARACTER)),
            }
        }
        let c = std::str::from_utf8(&bytes[..width])
            .ok()
            .and_then(|s| s.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        Ok(Some(c))
    }
}

impl<R> Debug for CharReader<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CharReader")
            .field("pending", &self.pending)
            .field("exhausted", &self.exhausted)
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn read_all<R: Read>(reader: &mut CharReader<R>) -> String {
        std::iter::from_fn(|| reader.read()).collect()
    }

    #[test]
    fn test_read_chars() {
        let mut reader = CharReader::new("let é = 1;".as_bytes());
        assert_eq!(read_all(&mut reader), "let é = 1;");
        assert_eq!(reader.read(), None);
        assert_eq!(reader.read(), None);
    }

    #[test]
    fn test_peek_is_repeatable() {
        let mut reader = CharReader::new("ab".as_bytes());
        assert_eq!(reader.peek(), Some('a'));
        assert_eq!(reader.peek(), Some('a'));
        assert_eq!(reader.read(), Some('a'));
        assert_eq!(reader.peek(), Some('b'));
        assert_eq!(reader.read(), Some('b'));
        assert_eq!(reader.peek(), None);
    }

    #[test]
    fn test_unread() {
        let mut reader = CharReader::new("xy".as_bytes());
        let x = reader.read().unwrap();
        reader.unread(x);
        assert_eq!(read_all(&mut reader), "xy");
    }

    #[test]
    fn test_multibyte_across_small_buffer() {
        let mut reader = CharReader::with_capacity("añ€😀".as_bytes(), 1);
        assert_eq!(read_all(&mut reader), "añ€😀");
    }

    #[test]
    fn test_invalid_utf8() {
        let bytes: &[u8] = &[b'a', 0xFF, b'b', 0xE2, 0x82, b'c'];
        let mut reader = CharReader::new(bytes);
        assert_eq!(
            read_all(&mut reader),
            format!(
                "a{0}b{0}c",
                char::REPLACEMENT_CHARACTER
            )
        );
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(ErrorKind::BrokenPipe, "pipe closed"))
        }
    }

    #[test]
    fn test_error_ends_input() {
        let mut reader = CharReader::new(FailingReader);
        assert_eq!(reader.read(), None);
        assert_eq!(reader.read(), None);
        let error = reader.take_error().expect("error should be kept");
        assert_eq!(error.kind(), ErrorKind::BrokenPipe);
        assert!(reader.take_error().is_none());
    }
}
