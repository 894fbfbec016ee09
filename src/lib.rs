//! Composition of mail send data into a frozen mime message.
//!
//! This crate provides the data side of creating a mail: a [`MailDraft`]
//! accumulates sender, recipients, headers, subject and body in any order
//! and then, through a one-shot build step, produces an immutable
//! [`MimeMessage`] which a sender (not part of this crate) can consume.
//!
//! It contains:
//!
//! - `MailDraft`, the mutable message-in-progress and its build step
//!   (`build_mime_message`), which validates that a `From` address and at
//!   last one `To`/`Cc`/`Bcc` recipient are present before assembling
//!   the message.
//! - `MimeMessage`, the frozen result, exposing recipients by role,
//!   headers, subject, body and sent date.
//! - a number of components which are used to represent parts of a
//!   mail e.g. `Email`, `Mailbox` or `DateTime`. They are placed in
//!   the `header_components` module.
//! - `HeaderName` and `HeaderMap` for additional user supplied header
//!   fields.
//! - `Session`, a property bag describing the smtp transport a message
//!   is bound to (`mail.host`, `mail.smtp.port`, ...).
//!
//! ## Example
//!
//! ```
//! use mail_compose::{MailDraft, RecipientType};
//!
//! # fn main() {
//! let mut draft = MailDraft::new();
//! draft.set_host_name("mail.example.com");
//! draft.set_from("me@example.com").unwrap();
//! draft.add_to("you@example.com").unwrap();
//! draft.set_subject("Who are you?");
//! draft.set_plain_text("Just wondering.");
//!
//! let message = draft.build_mime_message().unwrap();
//! assert_eq!(1, message.recipients(RecipientType::To).len());
//! # }
//! ```
//!
//! ## What this crate is not
//!
//! There is no wire codec in here, no smtp client and no delivery logic.
//! The `MimeMessage` is an in-memory representation only; encoding it and
//! handing it to a transport is the job of other crates.
//!
//! ## Thread safety
//!
//! A `MailDraft` is not meant for concurrent mutation, confine one
//! instance to one thread/task. All mutation goes through `&mut self`,
//! so the compiler enforces this for safe code.

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;
extern crate chrono;
extern crate soft_ascii_string;
extern crate vec1;

#[macro_use]
mod macros;
pub mod error;
pub mod grammar;
pub mod header_components;
pub mod headers;
pub mod session;
mod draft;
mod mime_message;

pub use self::draft::{MailDraft, DEFAULT_SMTP_PORT, DEFAULT_SOCKET_TIMEOUT};
pub use self::header_components::{DateTime, Email, Mailbox, MailboxList, OptMailboxList, Phrase};
pub use self::headers::{HeaderMap, HeaderName};
pub use self::mime_message::{MimeMessage, RecipientType};
pub use self::session::Session;
