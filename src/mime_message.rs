use header_components::{DateTime, Mailbox, MailboxList, OptMailboxList};
use headers::HeaderMap;
use session::Session;

/// The role a recipient appears under in a message.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RecipientType {
    To,
    Cc,
    Bcc,
}

/// The frozen result of building a `MailDraft`.
///
/// A `MimeMessage` can not be changed anymore, it is an in-memory
/// representation meant to be consumed by a sender/encoder. It is
/// only created by `MailDraft::build_mime_message`, which guarantees
/// that a `From` address and at last one recipient are present.
#[derive(Debug, Clone)]
pub struct MimeMessage {
    pub(crate) from: Mailbox,
    pub(crate) to: OptMailboxList,
    pub(crate) cc: OptMailboxList,
    pub(crate) bcc: OptMailboxList,
    pub(crate) reply_to: OptMailboxList,
    pub(crate) envelope: MailboxList,
    pub(crate) headers: HeaderMap,
    pub(crate) subject: Option<String>,
    pub(crate) content: Option<String>,
    pub(crate) content_type: Option<String>,
    pub(crate) charset: Option<String>,
    pub(crate) sent_date: DateTime,
    pub(crate) session: Session,
}

impl MimeMessage {
    pub fn from(&self) -> &Mailbox {
        &self.from
    }

    /// the recipients of the given role, in insertion order
    pub fn recipients(&self, recipient_type: RecipientType) -> &[Mailbox] {
        match recipient_type {
            RecipientType::To => self.to.as_slice(),
            RecipientType::Cc => self.cc.as_slice(),
            RecipientType::Bcc => self.bcc.as_slice(),
        }
    }

    /// all recipients in to, cc, bcc order
    ///
    /// This is the list a sender would issue smtp `RCPT` commands for.
    /// By build invariant it contains at last one mailbox.
    pub fn envelope(&self) -> &MailboxList {
        &self.envelope
    }

    pub fn reply_to(&self) -> &[Mailbox] {
        self.reply_to.as_slice()
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// look up a user supplied header field, case-sensitive
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    pub fn subject(&self) -> Option<&str> {
        self.subject.as_ref().map(|s| &**s)
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_ref().map(|s| &**s)
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_ref().map(|s| &**s)
    }

    pub fn charset(&self) -> Option<&str> {
        self.charset.as_ref().map(|s| &**s)
    }

    /// the sent date, defaulted to the build time if none was set
    pub fn sent_date(&self) -> &DateTime {
        &self.sent_date
    }

    /// the session this message was built against
    pub fn session(&self) -> &Session {
        &self.session
    }
}
