use std::fmt::{self, Display};

use error::ComponentCreationError;

use super::{Email, Phrase};

/// A mailbox, i.e. an address with an optional display name.
#[derive(Debug, Hash, Eq, PartialEq, Clone)]
pub struct Mailbox {
    pub display_name: Option<Phrase>,
    pub email: Email,
}

impl Mailbox {
    /// create a `Mailbox` by parsing an address and a display name
    pub fn from_parts<A, N>(address: A, display_name: N) -> Result<Self, ComponentCreationError>
    where
        A: Into<String>,
        N: Into<String>,
    {
        let email = Email::new(address)?;
        let display_name = Some(Phrase::new(display_name)?);
        Ok(Mailbox {
            display_name,
            email,
        })
    }

    pub fn display_name(&self) -> Option<&Phrase> {
        self.display_name.as_ref()
    }

    pub fn email(&self) -> &Email {
        &self.email
    }
}

impl From<Email> for Mailbox {
    fn from(email: Email) -> Self {
        Mailbox {
            email,
            display_name: None,
        }
    }
}

impl From<(Option<Phrase>, Email)> for Mailbox {
    fn from(pair: (Option<Phrase>, Email)) -> Self {
        let (display_name, email) = pair;
        Mailbox {
            display_name,
            email,
        }
    }
}

impl Display for Mailbox {
    fn fmt(&self, fter: &mut fmt::Formatter) -> fmt::Result {
        //this always uses the "<user@do.main>" form even if no display-name is given
        if let Some(ref display_name) = self.display_name {
            write!(fter, "{} ", display_name)?;
        }
        write!(fter, "<{}>", self.email)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn email_only() {
        let mailbox = Mailbox::from(assert_ok!(Email::new("affen@haus")));
        assert_eq!(None, mailbox.display_name());
        assert_eq!("<affen@haus>", mailbox.to_string());
    }

    #[test]
    fn with_display_name() {
        let mailbox = assert_ok!(Mailbox::from_parts("affen@haus", "ay ya"));
        assert_eq!("ay ya", mailbox.display_name().unwrap().as_str());
        assert_eq!("ay ya <affen@haus>", mailbox.to_string());
    }

    #[test]
    fn bad_address_fails() {
        assert_err!(Mailbox::from_parts("not an address", "name"));
    }

    #[test]
    fn bad_display_name_fails() {
        assert_err!(Mailbox::from_parts("a@b.c", ""));
    }
}
