use std::time::Duration;

use error::{ComponentCreationError, HeaderInsertionError, MailBuildError, SessionError};
use header_components::{DateTime, Email, Mailbox, MailboxList, OptMailboxList, Phrase};
use headers::{HeaderMap, HeaderName};
use mime_message::MimeMessage;
use session::{self, Session};

/// the smtp port used if none is configured
pub const DEFAULT_SMTP_PORT: u16 = 25;

/// the socket (connection) timeout used if none is configured
pub const DEFAULT_SOCKET_TIMEOUT: Duration = Duration::from_millis(60_000);

/// The message-in-progress.
///
/// A draft accumulates sender, recipients, headers, subject, body and
/// transport configuration through setter/adder calls in any order and
/// is then turned into a frozen [`MimeMessage`] by a _one-shot_ call
/// to [`MailDraft::build_mime_message`].
///
/// Lifecycle: created empty, mutable until the build succeeds, frozen
/// afterwards. A failed build does not change any state, the draft
/// stays mutable and can be fixed and built again. A second build
/// after a successful one is a programming error and panics.
///
/// Not thread-safe by design: confine one instance to one thread/task.
#[derive(Debug, Default)]
pub struct MailDraft {
    from: Option<Mailbox>,
    to: OptMailboxList,
    cc: OptMailboxList,
    bcc: OptMailboxList,
    reply_to: OptMailboxList,
    headers: HeaderMap,
    subject: Option<String>,
    content: Option<String>,
    content_type: Option<String>,
    charset: Option<String>,
    sent_date: Option<DateTime>,
    host_name: Option<String>,
    smtp_port: Option<u16>,
    socket_connection_timeout: Option<Duration>,
    socket_timeout: Option<Duration>,
    session: Option<Session>,
    mime_message: Option<MimeMessage>,
}

impl MailDraft {
    pub fn new() -> Self {
        Default::default()
    }

    /// set the sender address, overwriting any previously set one
    pub fn set_from<A>(&mut self, address: A) -> Result<&mut Self, ComponentCreationError>
    where
        A: Into<String>,
    {
        self.from = Some(Mailbox::from(Email::new(address)?));
        Ok(self)
    }

    /// append a `To` recipient
    pub fn add_to<A>(&mut self, address: A) -> Result<&mut Self, ComponentCreationError>
    where
        A: Into<String>,
    {
        self.to.push(Mailbox::from(Email::new(address)?));
        Ok(self)
    }

    /// append a `Cc` recipient
    pub fn add_cc<A>(&mut self, address: A) -> Result<&mut Self, ComponentCreationError>
    where
        A: Into<String>,
    {
        self.cc.push(Mailbox::from(Email::new(address)?));
        Ok(self)
    }

    /// append a `Bcc` recipient
    pub fn add_bcc<A>(&mut self, address: A) -> Result<&mut Self, ComponentCreationError>
    where
        A: Into<String>,
    {
        self.bcc.push(Mailbox::from(Email::new(address)?));
        Ok(self)
    }

    /// append a `Reply-To` address without a display name
    pub fn add_reply_to<A>(&mut self, address: A) -> Result<&mut Self, ComponentCreationError>
    where
        A: Into<String>,
    {
        self.reply_to.push(Mailbox::from(Email::new(address)?));
        Ok(self)
    }

    /// append a `Reply-To` address with a display name
    pub fn add_reply_to_with_name<A, N>(
        &mut self,
        address: A,
        display_name: N,
    ) -> Result<&mut Self, ComponentCreationError>
    where
        A: Into<String>,
        N: Into<String>,
    {
        self.reply_to.push(Mailbox::from_parts(address, display_name)?);
        Ok(self)
    }

    /// add a header field, replacing the value of an already present name
    ///
    /// Both name and value are validated here, at call time: an empty
    /// name, an invalid name or an empty value is rejected immediately
    /// and nothing is deferred to the build step.
    pub fn add_header<N, V>(&mut self, name: N, value: V) -> Result<&mut Self, HeaderInsertionError>
    where
        N: Into<String>,
        V: Into<String>,
    {
        let name = HeaderName::new(name)?;
        self.headers.insert(name, value)?;
        Ok(self)
    }

    pub fn set_subject<I: Into<String>>(&mut self, subject: I) -> &mut Self {
        self.subject = Some(subject.into());
        self
    }

    /// set the body together with its content type
    pub fn set_content<C, T>(&mut self, content: C, content_type: T) -> &mut Self
    where
        C: Into<String>,
        T: Into<String>,
    {
        self.content = Some(content.into());
        self.content_type = Some(content_type.into());
        self
    }

    /// set a `text/plain` body, using the configured charset (if any)
    pub fn set_plain_text<C: Into<String>>(&mut self, content: C) -> &mut Self {
        self.set_content(content, "text/plain")
    }

    pub fn set_charset<I: Into<String>>(&mut self, charset: I) -> &mut Self {
        self.charset = Some(charset.into());
        self
    }

    /// set the sent date explicitly, if unset the build step uses "now"
    pub fn set_sent_date<D: Into<DateTime>>(&mut self, date: D) -> &mut Self {
        self.sent_date = Some(date.into());
        self
    }

    pub fn set_host_name<I: Into<String>>(&mut self, host_name: I) -> &mut Self {
        self.host_name = Some(host_name.into());
        self
    }

    pub fn set_smtp_port(&mut self, port: u16) -> &mut Self {
        self.smtp_port = Some(port);
        self
    }

    pub fn set_socket_connection_timeout(&mut self, timeout: Duration) -> &mut Self {
        self.socket_connection_timeout = Some(timeout);
        self
    }

    pub fn set_socket_timeout(&mut self, timeout: Duration) -> &mut Self {
        self.socket_timeout = Some(timeout);
        self
    }

    /// attach an existing mail session
    pub fn set_mail_session(&mut self, session: Session) -> &mut Self {
        self.session = Some(session);
        self
    }

    pub fn from(&self) -> Option<&Mailbox> {
        self.from.as_ref()
    }

    pub fn to(&self) -> &[Mailbox] {
        self.to.as_slice()
    }

    pub fn cc(&self) -> &[Mailbox] {
        self.cc.as_slice()
    }

    pub fn bcc(&self) -> &[Mailbox] {
        self.bcc.as_slice()
    }

    pub fn reply_to(&self) -> &[Mailbox] {
        self.reply_to.as_slice()
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
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

    pub fn sent_date(&self) -> Option<&DateTime> {
        self.sent_date.as_ref()
    }

    pub fn smtp_port(&self) -> u16 {
        self.smtp_port.unwrap_or(DEFAULT_SMTP_PORT)
    }

    pub fn socket_connection_timeout(&self) -> Duration {
        self.socket_connection_timeout
            .unwrap_or(DEFAULT_SOCKET_TIMEOUT)
    }

    pub fn socket_timeout(&self) -> Duration {
        self.socket_timeout.unwrap_or(DEFAULT_SOCKET_TIMEOUT)
    }

    /// the host name of the mail server
    ///
    /// The explicitly set host name wins. If none is set but a session
    /// is attached the `mail.host` property of that session is used.
    /// Fallback-to-absent policy: the session lookup is infallible by
    /// construction, missing information of any kind results in `None`
    /// and never in an error. Do not imitate this for other accessors,
    /// it exists to keep the observable behavior of this one stable.
    pub fn host_name(&self) -> Option<&str> {
        if let Some(ref host_name) = self.host_name {
            return Some(host_name);
        }
        self.session
            .as_ref()
            .and_then(|session| session.property(session::MAIL_HOST))
    }

    /// the mail session, creating and attaching a default one if none is set
    ///
    /// The default session is bound to the configured host/port and
    /// timeouts. Fails with `SessionError::MissingHostName` if no host
    /// name is configured.
    pub fn mail_session(&mut self) -> Result<&Session, SessionError> {
        if self.session.is_none() {
            let host_name = match self.host_name {
                Some(ref host_name) => host_name.clone(),
                None => return Err(SessionError::MissingHostName),
            };
            debug!(
                "creating default mail session for {}:{}",
                host_name,
                self.smtp_port()
            );
            self.session = Some(Session::for_transport(
                &host_name,
                self.smtp_port(),
                self.socket_connection_timeout(),
                self.socket_timeout(),
            ));
        }
        // filled in right above if it was none
        self.session.as_ref().ok_or(SessionError::MissingHostName)
    }

    /// the frozen message, `None` if `build_mime_message` did not run yet
    pub fn mime_message(&self) -> Option<&MimeMessage> {
        self.mime_message.as_ref()
    }

    /// build the frozen mime message, freezing this draft
    ///
    /// Validates _before_ committing any state:
    ///
    /// - a `From` address has to be present (`MailBuildError::MissingFrom`)
    /// - at last one `To`, `Cc` or `Bcc` recipient has to be present
    ///   (`MailBuildError::NoRecipients`)
    ///
    /// On success the message (subject, body with content type and
    /// charset, all header fields, reply-to addresses and the sent
    /// date, defaulted to "now" if unset) is assembled, bound to the
    /// mail session (creating a default one if none is attached) and
    /// stored; the draft is frozen.
    ///
    /// # Panics
    ///
    /// Panics if the mime message was already built. This is a one-shot
    /// violation, i.e. a programming error, and deliberately not a
    /// `Result` variant: it is not meant to be caught and retried.
    pub fn build_mime_message(&mut self) -> Result<&MimeMessage, MailBuildError> {
        if self.mime_message.is_some() {
            panic!("the mime message was already built");
        }

        let from = match self.from {
            Some(ref mailbox) => mailbox.clone(),
            None => return Err(MailBuildError::MissingFrom),
        };

        let mut all_recipients =
            Vec::with_capacity(self.to.len() + self.cc.len() + self.bcc.len());
        all_recipients.extend(self.to.iter().cloned());
        all_recipients.extend(self.cc.iter().cloned());
        all_recipients.extend(self.bcc.iter().cloned());
        let envelope = MailboxList::try_from_vec(all_recipients)
            .map_err(|_| MailBuildError::NoRecipients)?;

        let session = self.mail_session()?.clone();
        let sent_date = self.sent_date.clone().unwrap_or_else(DateTime::now);

        debug!(
            "building mime message from {} with {} recipient(s)",
            from,
            envelope.len()
        );

        let message = MimeMessage {
            from,
            to: self.to.clone(),
            cc: self.cc.clone(),
            bcc: self.bcc.clone(),
            reply_to: self.reply_to.clone(),
            envelope,
            headers: self.headers.clone(),
            subject: self.subject.clone(),
            content: self.content.clone(),
            content_type: self.content_type.clone(),
            charset: self.charset.clone(),
            sent_date,
            session,
        };

        Ok(self.mime_message.get_or_insert(message))
    }
}

#[cfg(test)]
mod test {
    use error::{MailBuildError, SessionError};
    use session;
    use session::Session;

    use super::MailDraft;

    #[test]
    fn set_from_overwrites() {
        let mut draft = MailDraft::new();
        assert_ok!(draft.set_from("first@example.com"));
        assert_ok!(draft.set_from("second@example.com"));

        assert_eq!(
            "second@example.com",
            draft.from().unwrap().email().to_string()
        );
    }

    #[test]
    fn host_name_prefers_explicit_value() {
        let mut draft = MailDraft::new();
        draft.set_host_name("explicit.example.com");
        draft.set_mail_session(
            Session::default().with_property(session::MAIL_HOST, "session.example.com"),
        );

        assert_eq!(Some("explicit.example.com"), draft.host_name());
    }

    #[test]
    fn host_name_falls_back_to_session_property() {
        let mut draft = MailDraft::new();
        draft.set_mail_session(
            Session::default().with_property(session::MAIL_HOST, "smtp.test.com"),
        );

        assert_eq!(Some("smtp.test.com"), draft.host_name());
    }

    #[test]
    fn host_name_is_absent_without_host_and_session() {
        let draft = MailDraft::new();
        assert_eq!(None, draft.host_name());
    }

    #[test]
    fn host_name_is_absent_if_session_lacks_the_property() {
        let mut draft = MailDraft::new();
        draft.set_mail_session(Session::default());
        assert_eq!(None, draft.host_name());
    }

    #[test]
    fn mail_session_creates_and_caches_a_default_session() {
        let mut draft = MailDraft::new();
        draft.set_host_name("localhost");
        draft.set_smtp_port(1234);

        {
            let session = assert_ok!(draft.mail_session());
            assert_eq!(Some("localhost"), session.property(session::MAIL_HOST));
            assert_eq!(Some("1234"), session.property(session::MAIL_SMTP_PORT));
            assert_eq!(
                Some("60000"),
                session.property(session::MAIL_SMTP_CONNECTION_TIMEOUT)
            );
        }

        // a later host name change does not recreate the cached session
        draft.set_host_name("elsewhere.example.com");
        let session = assert_ok!(draft.mail_session());
        assert_eq!(Some("localhost"), session.property(session::MAIL_HOST));
    }

    #[test]
    fn mail_session_without_host_name_fails() {
        let mut draft = MailDraft::new();
        let err = assert_err!(draft.mail_session().map(|s| s.clone()));
        assert_eq!(SessionError::MissingHostName, err);
    }

    #[test]
    fn failed_build_leaves_the_draft_usable() {
        let mut draft = MailDraft::new();
        draft.set_host_name("localhost");
        assert_ok!(draft.set_from("a@example.com"));

        assert_eq!(
            MailBuildError::NoRecipients,
            assert_err!(draft.build_mime_message().map(|_| ()))
        );
        assert!(draft.mime_message().is_none());

        // fix the state and build again
        assert_ok!(draft.add_to("b@example.com"));
        assert_ok!(draft.build_mime_message());
        assert!(draft.mime_message().is_some());
    }
}
