//! module contains the errors emitted by this crate
use std::fmt::{self, Display};

use failure::{Backtrace, Fail};

/// Creating a (header field) component from the given data failed
///
/// A good example is converting a string to a mailbox by parsing it,
/// or more concretely failing to do so because it's not a valid
/// mail address.
#[derive(Debug)]
pub struct ComponentCreationError {
    component: &'static str,
    backtrace: Backtrace,
    str_context: Option<String>,
}

impl ComponentCreationError {
    /// creates a new `ComponentCreationError` based on the components name
    ///
    /// The name is normally the type name, for example `Email`, `Phrase` etc.
    pub fn new(component: &'static str) -> Self {
        ComponentCreationError {
            component,
            backtrace: Backtrace::new(),
            str_context: None,
        }
    }

    /// creates a new `ComponentCreationError` based on the components name with a str_context
    ///
    /// The `str_context` is a snippet of text which can help a human to identify the
    /// invalid parts, e.g. for parsing an email it would be the invalid address.
    pub fn new_with_str<I>(component: &'static str, str_context: I) -> Self
    where
        I: Into<String>,
    {
        ComponentCreationError {
            component,
            backtrace: Backtrace::new(),
            str_context: Some(str_context.into()),
        }
    }

    /// the name of the component which could not be created
    pub fn component(&self) -> &'static str {
        self.component
    }

    pub fn str_context(&self) -> Option<&str> {
        self.str_context.as_ref().map(|s| &**s)
    }

    pub fn set_str_context<I>(&mut self, ctx: I)
    where
        I: Into<String>,
    {
        self.str_context = Some(ctx.into());
    }

    pub fn with_str_context<I>(mut self, ctx: I) -> Self
    where
        I: Into<String>,
    {
        self.set_str_context(ctx);
        self
    }
}

impl Fail for ComponentCreationError {
    fn backtrace(&self) -> Option<&Backtrace> {
        Some(&self.backtrace)
    }
}

impl Display for ComponentCreationError {
    fn fmt(&self, fter: &mut fmt::Formatter) -> fmt::Result {
        if let Some(ref ctx) = self.str_context {
            write!(
                fter,
                "creating component {} from {:?} failed",
                self.component, ctx
            )
        } else {
            write!(fter, "creating component {} failed", self.component)
        }
    }
}

/// Error returned when inserting a header field is rejected.
///
/// All variants are raised synchronously by the inserting call
/// (`MailDraft::add_header`), they are never deferred to the build
/// step.
#[derive(Clone, Debug, Fail, PartialEq, Eq, Hash)]
pub enum HeaderInsertionError {
    #[fail(display = "empty header field name")]
    EmptyName,

    #[fail(display = "empty value for header field {:?}", name)]
    EmptyValue { name: String },

    #[fail(display = "{:?} is not a valid header field name", name)]
    InvalidName { name: String },
}

/// Error returned when a mail session can not be created.
#[derive(Clone, Debug, Fail, PartialEq, Eq, Hash)]
pub enum SessionError {
    #[fail(display = "can not create a mail session without a host name")]
    MissingHostName,
}

/// Error returned when building the mime message fails.
///
/// These are recoverable validation failures: a failed build leaves
/// the draft unchanged, the caller can fix the missing state and
/// build again.
#[derive(Clone, Debug, Fail, PartialEq, Eq, Hash)]
pub enum MailBuildError {
    #[fail(display = "can not build a mail without a From address")]
    MissingFrom,

    #[fail(display = "can not build a mail without any To, Cc or Bcc recipient")]
    NoRecipients,

    #[fail(display = "{}", _0)]
    Session(#[cause] SessionError),
}

impl From<SessionError> for MailBuildError {
    fn from(err: SessionError) -> Self {
        MailBuildError::Session(err)
    }
}
