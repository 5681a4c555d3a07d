//! Escape processing for string literal content.
//!
//! Recognized escapes: `\n` `\t` `\r` `\0`, and `\xHH` with exactly two
//! hex digits. Any other backslash-prefixed character stands for itself,
//! so `\"` is a quote and `\\` a backslash.

use rf_ir::Span;

use crate::lex_error::{LexError, LexErrorKind};

/// Unescape the content between the quotes of a string literal.
///
/// `base_offset` is the source offset of `content`, used to locate errors.
pub(crate) fn cook_string(content: &str, base_offset: u32) -> Result<String, LexError> {
    if !content.contains('\\') {
        return Ok(content.to_owned());
    }

    let mut result = String::with_capacity(content.len());
    let mut chars = content.char_indices();

    while let Some((i, c)) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some((_, 'n')) => result.push('\n'),
            Some((_, 't')) => result.push('\t'),
            Some((_, 'r')) => result.push('\r'),
            Some((_, '0')) => result.push('\0'),
            Some((j, 'x')) => {
                let digits_start = j + 1;
                let digits = content
                    .get(digits_start..digits_start + 2)
                    .filter(|d| d.bytes().all(|b| b.is_ascii_hexdigit()));
                let Some(digits) = digits else {
                    let end = content[digits_start..]
                        .char_indices()
                        .nth(2)
                        .map_or(content.len(), |(k, _)| digits_start + k);
                    return Err(LexError::new(
                        LexErrorKind::InvalidHexEscape(content[i..end].to_owned()),
                        span_of(base_offset, i, end),
                    ));
                };
                let code = u8::from_str_radix(digits, 16).map_err(|_| {
                    LexError::new(
                        LexErrorKind::InvalidHexEscape(content[i..digits_start + 2].to_owned()),
                        span_of(base_offset, i, digits_start + 2),
                    )
                })?;
                result.push(char::from(code));
                // Skip the two digits.
                chars.next();
                chars.next();
            }
            Some((_, other)) => result.push(other),
            // The literal's regex never lets a backslash end the content.
            None => result.push('\\'),
        }
    }

    Ok(result)
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "the lexer rejects sources whose offsets exceed u32::MAX"
)]
fn span_of(base_offset: u32, start: usize, end: usize) -> Span {
    Span::new(base_offset + start as u32, base_offset + end as u32)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
