use std::fmt::{self, Display};

use error::ComponentCreationError;
use grammar::{is_ascii_vchar, is_ws};

/// Represents a "phrase" as it is used in the `Mailbox` type for the display name.
///
/// # Error
///
/// There are only two cases in which creating a `Phrase` can fail:
///
/// 1. If the input is empty (a phrase can not be empty).
/// 2. If the input contains an illegal character (any char which is
///    not "visible" us-ascii and not `' '` or `'\t'`, e.g. CTRL chars
///    but also `'\r'` and `'\n'`).
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Phrase(String);

impl Phrase {
    pub fn new<I>(input: I) -> Result<Self, ComponentCreationError>
    where
        I: Into<String>,
    {
        let input = input.into();
        if input.is_empty() || !input.chars().all(|ch| is_ascii_vchar(ch) || is_ws(ch)) {
            return Err(ComponentCreationError::new_with_str("Phrase", input));
        }
        Ok(Phrase(input))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Phrase {
    fn fmt(&self, fter: &mut fmt::Formatter) -> fmt::Result {
        fter.write_str(self.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn accepts_words_with_spaces() {
        let phrase = assert_ok!(Phrase::new("ay ya"));
        assert_eq!("ay ya", phrase.as_str());
    }

    #[test]
    fn rejects_empty_input() {
        assert_err!(Phrase::new(""));
    }

    #[test]
    fn rejects_ctrl_chars() {
        assert_err!(Phrase::new("ay\rya"));
        assert_err!(Phrase::new("ay\nya"));
        assert_err!(Phrase::new("ay\0ya"));
    }
}
