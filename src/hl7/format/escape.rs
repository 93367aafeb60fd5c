//! Escape sequence and formatted-text substitution.
//!
//! An escape sequence is a code enclosed between two escape characters,
//! `\F\` for example. Supported codes:
//!
//! | Code                  | Output                                   |
//! |-----------------------|------------------------------------------|
//! | `H`, `N`, `.fi`, `.nf`| nothing (highlight and fill mode markers)|
//! | `F` `S` `T` `R` `E`   | the message's field, component, sub-component, repetition and escape character |
//! | `.br`, `.ce`          | a line break                             |
//! | `.spN`                | a line break followed by N spaces        |
//! | `.skN`, `.tiN`, `.inN`| N spaces                                 |
//!
//! A missing or non-numeric N counts as zero. Any other code is copied to the
//! output unchanged.

use memchr::memchr;

use crate::hl7::types::models::{Delimiters, LF};

/// Applies escape substitution to `raw` using the given delimiter set.
pub fn unescape(raw: &[u8], delimiters: &Delimiters) -> String {
    let escape = delimiters.escape;
    if memchr(escape, raw).is_none() {
        return String::from_utf8_lossy(raw).into_owned();
    }

    let mut out = Vec::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(open) = memchr(escape, rest) {
        out.extend_from_slice(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = memchr(escape, after) else {
            // Unterminated: the remainder is literal text.
            out.extend_from_slice(&rest[open..]);
            rest = &[];
            break;
        };
        let code = &after[..close];
        if expand(code, delimiters, &mut out) {
            rest = &after[close + 1..];
        } else {
            // The closing escape may open the next sequence.
            out.push(escape);
            out.extend_from_slice(code);
            rest = &after[close..];
        }
    }
    out.extend_from_slice(rest);
    String::from_utf8_lossy(&out).into_owned()
}

/// Applies escape substitution to `text` assuming the conventional `|^~\&`
/// delimiters.
///
/// # Example
/// ```
/// use hl7_reader::format_text;
///
/// assert_eq!(format_text(r"Hello\F\world"), "Hello|world");
/// assert_eq!(format_text(r"Hello\.sp2\world"), "Hello\n  world");
/// ```
pub fn format_text(text: &str) -> String {
    unescape(text.as_bytes(), &Delimiters::default())
}

/// Parses the repetition count of a formatting directive.
///
/// Only a plain run of ASCII digits is a count; anything else, including an
/// empty string or a value above [`MAX_REPETITION`], yields zero.
pub fn parse_repetition(count: &str) -> usize {
    repetition(count.as_bytes())
}

/// Largest count a formatting directive may expand to.
pub const MAX_REPETITION: usize = 1024;

fn repetition(digits: &[u8]) -> usize {
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return 0;
    }
    std::str::from_utf8(digits)
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .filter(|&n| n <= MAX_REPETITION)
        .unwrap_or(0)
}

/// Writes the expansion of one escape code. Returns `false` for codes that
/// are not recognised, leaving `out` untouched.
fn expand(code: &[u8], delimiters: &Delimiters, out: &mut Vec<u8>) -> bool {
    match code {
        b"H" | b"N" | b".fi" | b".nf" => {}
        b"F" => out.push(delimiters.field),
        b"S" => out.push(delimiters.component),
        b"T" => out.push(delimiters.sub_component),
        b"R" => out.push(delimiters.repetition),
        b"E" => out.push(delimiters.escape),
        b".br" | b".ce" => out.push(LF),
        _ => return expand_directive(code, out),
    }
    true
}

/// `.sp`, `.sk`, `.ti` and `.in`, each with an optional count.
fn expand_directive(code: &[u8], out: &mut Vec<u8>) -> bool {
    if code.len() < 3 || code[0] != b'.' {
        return false;
    }
    let (name, count) = code[1..].split_at(2);
    let spaces = repetition(count);
    match name {
        b"sp" => out.push(LF),
        b"sk" | b"ti" | b"in" => {}
        _ => return false,
    }
    out.extend(std::iter::repeat(b' ').take(spaces));
    true
}
