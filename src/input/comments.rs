//! Wordlist comment stripping.

/// Strips wordlist comments from a line.
///
/// Returns `None` when the whole line is a comment, that is when it starts
/// with `#` after leading spaces are skipped. Otherwise the line is cut at
/// the first `" #"` and the part before it is returned; a `#` with no space
/// in front of it is ordinary text.
///
/// Only U+0020 counts as a space here; tabs are kept.
#[must_use]
pub fn strip_comments(line: &[u8]) -> Option<&[u8]> {
    let start = line.iter().position(|&b| b != b' ').unwrap_or(line.len());
    if line[start..].first() == Some(&b'#') {
        return None;
    }

    match line.windows(2).position(|pair| pair == b" #") {
        Some(index) => Some(&line[..index]),
        None => Some(line),
    }
}
