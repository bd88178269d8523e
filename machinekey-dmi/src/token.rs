//! Line tokenizer for `dmidecode` output.
//!
//! Every record block is a header line, a display-name line and a body of
//! tab-indented lines. The body is lexed with one bit of context: whether
//! the parser is currently inside an array block, because a double-tab line
//! is only a continuation while a block is open. Outside a block the same
//! line is lexed as an ordinary field.

use std::sync::LazyLock;

use regex::Regex;

// `\s` is spelled out as the ASCII set so that matching does not depend on
// Unicode whitespace classes.
static HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^Handle[\t\n\f\r ]+(.+),[\t\n\f\r ]+DMI[\t\n\f\r ]+type[\t\n\f\r ]+([0-9]+),[\t\n\f\r ]+([0-9]+)[\t\n\f\r ]+bytes$",
    )
    .expect("valid header pattern")
});

// Field and array-header patterns are deliberately unanchored at the start:
// the match begins at the first tab of the line.
static FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\t(.+):[\t\n\f\r ]+(.+)$").expect("valid field pattern")
});

static ARRAY_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\t(.+):$").expect("valid array header pattern"));

static CONTINUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\t\t(.+)$").expect("valid continuation pattern"));

/// A parsed `Handle <id>, DMI type <n>, <size> bytes` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header<'a> {
    /// Opaque record handle, e.g. `0x0001`.
    pub handle: &'a str,
    /// SMBIOS structure type.
    pub type_code: u8,
    /// Structure length in bytes.
    pub size: u32,
}

/// One lexed line of a record body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// `\t<key>: <value>`
    Field { key: &'a str, value: &'a str },
    /// `\t<key>:` opening an array block.
    ArrayHeader { key: &'a str },
    /// `\t\t<value>` inside an open array block.
    ArrayContinuation { value: &'a str },
    /// An empty line.
    Blank,
    /// Anything else; carries the raw line.
    Unrecognized(&'a str),
}

/// Lexes a record's first line.
///
/// Returns `None` when the line is not a header or when the type code or
/// size do not fit their SMBIOS widths.
pub fn header(line: &str) -> Option<Header<'_>> {
    let caps = HEADER.captures(line)?;
    let handle = caps.get(1)?.as_str();
    let type_code = caps.get(2)?.as_str().parse().ok()?;
    let size = caps.get(3)?.as_str().parse().ok()?;

    Some(Header {
        handle,
        type_code,
        size,
    })
}

/// Lexes one body line.
///
/// `in_block` selects whether a double-tab continuation is recognised; a
/// line that is not a continuation falls through to the field rules.
pub fn body(line: &str, in_block: bool) -> Token<'_> {
    if in_block {
        if let Some(caps) = CONTINUATION.captures(line) {
            if let Some(value) = caps.get(1) {
                return Token::ArrayContinuation {
                    value: value.as_str(),
                };
            }
        }
    }

    if let Some(caps) = FIELD.captures(line) {
        if let (Some(key), Some(value)) = (caps.get(1), caps.get(2)) {
            return Token::Field {
                key: key.as_str(),
                value: value.as_str(),
            };
        }
    }

    if let Some(caps) = ARRAY_HEADER.captures(line) {
        if let Some(key) = caps.get(1) {
            return Token::ArrayHeader { key: key.as_str() };
        }
    }

    if line.is_empty() {
        Token::Blank
    } else {
        Token::Unrecognized(line)
    }
}
