use std::fmt::{self, Display};
use std::str::FromStr;

use error::ComponentCreationError;
use grammar::{is_dot_atom_text, is_dtext, is_ws};

/// an email of the form `local-part@domain`
///
/// corresponds to RFC 5322 addr-spec, so `<`, `>` padding is _not_
/// part of this Email type (but of the Mailbox type instead)
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct Email {
    pub local_part: LocalPart,
    pub domain: Domain,
}

#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct LocalPart(String);

#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct Domain(String);

impl Email {
    pub fn new<I>(email: I) -> Result<Self, ComponentCreationError>
    where
        I: Into<String>,
    {
        let email = email.into();
        let index = match email.find('@') {
            Some(index) => index,
            None => return Err(ComponentCreationError::new_with_str("Email", email)),
        };

        let local_part = LocalPart::new(&email[..index])
            .map_err(|err| err.with_str_context(email.clone()))?;
        // index+1 is ok as '@'.len_utf8() == 1
        let domain =
            Domain::new(&email[index + 1..]).map_err(|err| err.with_str_context(email.clone()))?;

        Ok(Email { local_part, domain })
    }

    pub fn local_part(&self) -> &LocalPart {
        &self.local_part
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }
}

impl Display for Email {
    fn fmt(&self, fter: &mut fmt::Formatter) -> fmt::Result {
        write!(fter, "{}@{}", self.local_part.as_str(), self.domain.as_str())
    }
}

impl FromStr for Email {
    type Err = ComponentCreationError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Email::new(input)
    }
}

impl LocalPart {
    /// create a `LocalPart` from the text before the `@`
    ///
    /// The input has to be `dot-atom-text`, the quoted form of
    /// a local part is not supported by this crate.
    pub fn new<I>(input: I) -> Result<Self, ComponentCreationError>
    where
        I: Into<String>,
    {
        let input = input.into();
        if !is_dot_atom_text(&input) {
            return Err(ComponentCreationError::new_with_str("LocalPart", input));
        }
        Ok(LocalPart(input))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Domain {
    /// create a `Domain` from the text behind the `@`
    ///
    /// The input has to be either `dot-atom-text` (`example.com`)
    /// or a domain literal (`[127.0.0.1]`).
    pub fn new<I>(input: I) -> Result<Self, ComponentCreationError>
    where
        I: Into<String>,
    {
        let input = input.into();
        let ok = if input.starts_with('[') && input.ends_with(']') {
            input[1..input.len() - 1]
                .chars()
                .all(|ch| is_dtext(ch) || is_ws(ch))
        } else {
            is_dot_atom_text(&input)
        };

        if !ok {
            return Err(ComponentCreationError::new_with_str("Domain", input));
        }
        Ok(Domain(input))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_simple_address() {
        let email = assert_ok!(Email::new("affen@haus"));
        assert_eq!("affen", email.local_part().as_str());
        assert_eq!("haus", email.domain().as_str());
        assert_eq!("affen@haus", email.to_string());
    }

    #[test]
    fn parses_dotted_parts() {
        let email = assert_ok!(Email::new("some.one@mail.example.com"));
        assert_eq!("some.one", email.local_part().as_str());
        assert_eq!("mail.example.com", email.domain().as_str());
    }

    #[test]
    fn parses_domain_literal() {
        let email = assert_ok!(Email::new("root@[127.0.0.1]"));
        assert_eq!("[127.0.0.1]", email.domain().as_str());
    }

    #[test]
    fn rejects_missing_at() {
        let err = assert_err!(Email::new("no-at-sign"));
        assert_eq!(Some("no-at-sign"), err.str_context());
    }

    #[test]
    fn rejects_empty_parts() {
        assert_err!(Email::new("@example.com"));
        assert_err!(Email::new("someone@"));
        assert_err!(Email::new("@"));
    }

    #[test]
    fn rejects_bad_dots() {
        assert_err!(Email::new(".a@example.com"));
        assert_err!(Email::new("a.@example.com"));
        assert_err!(Email::new("a..b@example.com"));
        assert_err!(Email::new("a@example..com"));
    }

    #[test]
    fn rejects_specials_in_local_part() {
        assert_err!(Email::new("a b@example.com"));
        assert_err!(Email::new("a<b@example.com"));
    }

    #[test]
    fn from_str_works() {
        let email: Email = assert_ok!("me@example.com".parse());
        assert_eq!("me", email.local_part().as_str());
    }
}
