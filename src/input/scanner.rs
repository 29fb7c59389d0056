//! Bounded line scanner.
//!
//! Splits a buffered stream on `\n`, dropping the terminator and a single
//! `\r` before it. A line longer than the configured limit is an error
//! rather than being truncated or split.

use std::io::{BufRead, Read};

use crate::error::InputError;

/// Reads lines from `R`, rejecting any longer than `max_line_len` bytes.
///
/// Yields `Err` at most once; the scanner is exhausted afterwards.
pub struct LineScanner<R> {
    reader: R,
    max_line_len: usize,
    line_no: usize,
    done: bool,
}

impl<R: BufRead> LineScanner<R> {
    /// Creates a scanner over `reader`.
    pub fn new(reader: R, max_line_len: usize) -> Self {
        Self {
            reader,
            max_line_len,
            line_no: 0,
            done: false,
        }
    }

    /// Number of lines returned so far, counting a failing line.
    #[must_use]
    pub const fn line_no(&self) -> usize {
        self.line_no
    }

    fn read_line(&mut self) -> Result<Option<Vec<u8>>, InputError> {
        // Two bytes over the limit leave room for a `\r\n` terminator.
        let budget = u64::try_from(self.max_line_len)
            .unwrap_or(u64::MAX)
            .saturating_add(2);

        let mut line = Vec::new();
        let read = (&mut self.reader)
            .take(budget)
            .read_until(b'\n', &mut line)?;
        if read == 0 {
            return Ok(None);
        }
        self.line_no += 1;

        if line.last() == Some(&b'\n') {
            line.pop();
        }
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        if line.len() > self.max_line_len {
            return Err(InputError::LineTooLong {
                line: self.line_no,
                limit: self.max_line_len,
            });
        }
        Ok(Some(line))
    }
}

impl<R: BufRead> Iterator for LineScanner<R> {
    type Item = Result<Vec<u8>, InputError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.read_line() {
            Ok(Some(line)) => Some(Ok(line)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn scan(input: &[u8], limit: usize) -> Vec<Result<Vec<u8>, InputError>> {
        LineScanner::new(Cursor::new(input.to_vec()), limit).collect()
    }

    fn lines(input: &[u8]) -> Vec<Vec<u8>> {
        scan(input, 1024)
            .into_iter()
            .map(Result::unwrap)
            .collect()
    }

    #[test]
    fn splits_on_newline() {
        assert_eq!(lines(b"a\nb\nc\n"), vec![b"a".to_vec(), b"b".to_vec(), b"c".to_vec()]);
    }

    #[test]
    fn final_line_without_newline() {
        assert_eq!(lines(b"a\nb"), vec![b"a".to_vec(), b"b".to_vec()]);
    }

    #[test]
    fn trailing_newline_adds_no_empty_line() {
        assert_eq!(lines(b"a\n"), vec![b"a".to_vec()]);
        assert!(lines(b"").is_empty());
    }

    #[test]
    fn keeps_interior_empty_lines() {
        assert_eq!(lines(b"\n\na\n"), vec![Vec::new(), Vec::new(), b"a".to_vec()]);
    }

    #[test]
    fn strips_carriage_return() {
        assert_eq!(lines(b"a\r\nb\r"), vec![b"a".to_vec(), b"b".to_vec()]);
        assert_eq!(lines(b"a\r\r\n"), vec![b"a\r".to_vec()]);
    }

    #[test]
    fn line_at_limit_is_accepted() {
        let results = scan(b"abcd\nxyz", 4);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].as_ref().unwrap(), b"abcd");
        let results = scan(b"abcd", 4);
        assert_eq!(results[0].as_ref().unwrap(), b"abcd");
    }

    #[test]
    fn crlf_terminator_does_not_count_against_limit() {
        let results = scan(b"abcd\r\nefgh\r", 4);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].as_ref().unwrap(), b"abcd");
        assert_eq!(results[1].as_ref().unwrap(), b"efgh");

        let results = scan(b"abcde\r\n", 4);
        assert!(matches!(results[0], Err(InputError::LineTooLong { line: 1, limit: 4 })));
        let results = scan(b"abcd\rX\n", 4);
        assert!(matches!(results[0], Err(InputError::LineTooLong { line: 1, limit: 4 })));
    }

    #[test]
    fn line_over_limit_is_an_error() {
        let mut scanner = LineScanner::new(Cursor::new(b"ok\ntoolong\nafter\n".to_vec()), 4);
        assert_eq!(scanner.next().unwrap().unwrap(), b"ok");
        match scanner.next() {
            Some(Err(InputError::LineTooLong { line, limit })) => {
                assert_eq!(line, 2);
                assert_eq!(limit, 4);
            }
            other => panic!("expected LineTooLong, got {other:?}"),
        }
        assert!(scanner.next().is_none());
        assert_eq!(scanner.line_no(), 2);
    }

    #[test]
    fn read_error_is_reported_once() {
        struct Failing;
        impl Read for Failing {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("disk on fire"))
            }
        }
        let mut scanner = LineScanner::new(std::io::BufReader::new(Failing), 16);
        assert!(matches!(scanner.next(), Some(Err(InputError::Read(_)))));
        assert!(scanner.next().is_none());
    }
}
