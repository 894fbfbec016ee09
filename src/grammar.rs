//! Character classification helpers for the small subset of the mail
//! grammar this crate validates against.
//!
//! Only the us-ascii rules are included, there is no internationalized
//! mail path in this crate.

/// ftext as defined by RFC 5322
///
/// which is: printable US-ASCII characters not including `:`
///  => 0x21-0x39 / 0x3B-0x7E
#[inline(always)]
pub fn is_ftext(ch: char) -> bool {
    let bch = ch as u32;
    bch > 32 && bch < 127 && ch != ':'
}

/// WSP as defined by RFC 5234 (SP / HTAB)
#[inline(always)]
pub fn is_ws(ch: char) -> bool {
    ch == ' ' || ch == '\t'
}

/// True if `ch` is us-ascii (i.e. <128)
#[inline(always)]
pub fn is_ascii(ch: char) -> bool {
    (ch as u32) < 128
}

/// True if `ch` is ascii and "visible"/"printable".
///
/// This is the case for any char in the (decimal)
/// range 33..=126 which is '!'..='~'.
#[inline(always)]
pub fn is_ascii_vchar(ch: char) -> bool {
    let u32_ch = ch as u32;
    32 < u32_ch && u32_ch <= 126
}

/// atext as defined by RFC 5322
///
/// alphanumeric or one of the printable symbols which do not
/// act as specials in an address.
#[inline(always)]
pub fn is_atext(ch: char) -> bool {
    match ch {
        'a'..='z' | 'A'..='Z' | '0'..='9' => true,
        '!' | '#' | '$' | '%' | '&' | '\'' | '*' | '+' | '-' | '/' | '=' | '?' | '^' | '_'
        | '`' | '{' | '|' | '}' | '~' => true,
        _ => false,
    }
}

/// dtext as defined by RFC 5322
///
/// printable us-ascii without `[`, `]` and `\`, used inside
/// a domain literal like `[127.0.0.1]`.
#[inline(always)]
pub fn is_dtext(ch: char) -> bool {
    match ch {
        '!'..='Z' | '^'..='~' => true,
        _ => false,
    }
}

/// True if `input` is non-empty `dot-atom-text`.
///
/// I.e. one or more atext runs separated by single dots, with
/// no leading, trailing or doubled dot.
pub fn is_dot_atom_text(input: &str) -> bool {
    let mut prev_was_dot = true;
    for ch in input.chars() {
        if ch == '.' {
            if prev_was_dot {
                return false;
            }
            prev_was_dot = true;
        } else if is_atext(ch) {
            prev_was_dot = false;
        } else {
            return false;
        }
    }
    // also false for "" and a trailing dot
    !prev_was_dot
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ftext_excludes_colon_and_space() {
        assert!(is_ftext('X'));
        assert!(is_ftext('-'));
        assert!(!is_ftext(':'));
        assert!(!is_ftext(' '));
        assert!(!is_ftext('\x7f'));
    }

    #[test]
    fn atext_excludes_specials() {
        assert!(is_atext('a'));
        assert!(is_atext('~'));
        assert!(!is_atext('@'));
        assert!(!is_atext('.'));
        assert!(!is_atext('<'));
    }

    #[test]
    fn dot_atom_text_dots() {
        assert!(is_dot_atom_text("a.b.c"));
        assert!(is_dot_atom_text("abc"));
        assert!(!is_dot_atom_text(""));
        assert!(!is_dot_atom_text(".a"));
        assert!(!is_dot_atom_text("a."));
        assert!(!is_dot_atom_text("a..b"));
    }
}
