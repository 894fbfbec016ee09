use std::fmt;

use soft_ascii_string::{SoftAsciiStr, SoftAsciiString};

use error::HeaderInsertionError;
use grammar::is_ftext;

/// The name of a header field, e.g. `X-Test-Header`.
///
/// Names are compared and looked up _case-sensitive_, `X-Id` and
/// `X-ID` are two different names for this crate.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct HeaderName {
    name: SoftAsciiString,
}

impl HeaderName {
    /// validates and creates a header name
    ///
    /// Fails with `HeaderInsertionError::EmptyName` on empty input and
    /// with `HeaderInsertionError::InvalidName` if any char is not
    /// `ftext` (printable us-ascii without `:`). Validation happens
    /// here, synchronously, never at build time.
    pub fn new<I>(name: I) -> Result<Self, HeaderInsertionError>
    where
        I: Into<String>,
    {
        let name = name.into();
        if name.is_empty() {
            return Err(HeaderInsertionError::EmptyName);
        }
        if !name.chars().all(is_ftext) {
            return Err(HeaderInsertionError::InvalidName { name });
        }
        // all ftext chars are us-ascii
        Ok(HeaderName {
            name: SoftAsciiString::from_unchecked(name),
        })
    }

    #[inline(always)]
    pub fn as_ascii_str(&self) -> &SoftAsciiStr {
        &self.name
    }

    #[inline(always)]
    pub fn as_str(&self) -> &str {
        self.name.as_str()
    }
}

impl fmt::Display for HeaderName {
    fn fmt(&self, fter: &mut fmt::Formatter) -> fmt::Result {
        write!(fter, "{}", self.as_str())
    }
}

impl PartialEq<str> for HeaderName {
    fn eq(&self, other: &str) -> bool {
        self.name.as_str() == other
    }
}

impl<'a> PartialEq<&'a str> for HeaderName {
    fn eq(&self, other: &&'a str) -> bool {
        self.name.as_str() == *other
    }
}
