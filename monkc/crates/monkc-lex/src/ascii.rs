//! ASCII character classes for the Monkey lexer.
//!
//! The lexer works on raw bytes. Only ASCII bytes can start or continue a
//! lexeme; every other byte, including each byte of a multi-byte UTF-8
//! sequence, falls through to the illegal-token rule.

/// Sentinel byte reported by the cursor once the buffer is exhausted.
pub const EOF_BYTE: u8 = 0;

/// Checks if a byte can start or continue an identifier.
///
/// Identifiers are made of ASCII letters and underscores only. Digits are
/// not accepted anywhere in an identifier, so `x1` lexes as `x` followed
/// by the integer `1`.
///
/// # Example
///
/// ```
/// use monkc_lex::ascii::is_letter;
///
/// assert!(is_letter(b'a'));
/// assert!(is_letter(b'Z'));
/// assert!(is_letter(b'_'));
/// assert!(!is_letter(b'1'));
/// assert!(!is_letter(0xC3));
/// ```
#[inline]
pub fn is_letter(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

/// Checks if a byte is an ASCII decimal digit.
///
/// ```
/// use monkc_lex::ascii::is_digit;
///
/// assert!(is_digit(b'0'));
/// assert!(is_digit(b'9'));
/// assert!(!is_digit(b'a'));
/// ```
#[inline]
pub fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// Checks if a byte is whitespace skipped between tokens.
///
/// Only space, tab, newline and carriage return qualify. Form feed and
/// vertical tab are not whitespace here and lex as illegal bytes.
///
/// ```
/// use monkc_lex::ascii::is_whitespace;
///
/// assert!(is_whitespace(b' '));
/// assert!(is_whitespace(b'\r'));
/// assert!(!is_whitespace(0x0C));
/// ```
#[inline]
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_cover_ascii_alpha_and_underscore() {
        for b in b'a'..=b'z' {
            assert!(is_letter(b));
        }
        for b in b'A'..=b'Z' {
            assert!(is_letter(b));
        }
        assert!(is_letter(b'_'));
    }

    #[test]
    fn test_classes_are_disjoint() {
        for b in 0..=u8::MAX {
            let classes = [is_letter(b), is_digit(b), is_whitespace(b)];
            assert!(
                classes.iter().filter(|&&c| c).count() <= 1,
                "byte {:#04x} is in more than one class",
                b
            );
        }
    }

    #[test]
    fn test_non_ascii_bytes_belong_to_no_class() {
        for b in 0x80..=u8::MAX {
            assert!(!is_letter(b));
            assert!(!is_digit(b));
            assert!(!is_whitespace(b));
        }
    }

    #[test]
    fn test_sentinel_is_not_whitespace() {
        assert!(!is_whitespace(EOF_BYTE));
        assert!(!is_letter(EOF_BYTE));
    }

    #[test]
    fn test_other_whitespace_is_rejected() {
        assert!(!is_whitespace(0x0B));
        assert!(!is_whitespace(0x0C));
    }
}
