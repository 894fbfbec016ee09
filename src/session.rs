//! The mail session a message is bound to.
//!
//! A session is a plain property bag describing the smtp transport
//! (host, port, timeouts). Composition only reads/stores it, actually
//! opening a connection is the job of a sender crate.

use std::collections::HashMap;
use std::time::Duration;

/// property holding the transport protocol, always `"smtp"` here
pub const MAIL_TRANSPORT_PROTOCOL: &str = "mail.transport.protocol";
/// property holding the mail server host
pub const MAIL_HOST: &str = "mail.host";
/// property holding the smtp server host
pub const MAIL_SMTP_HOST: &str = "mail.smtp.host";
/// property holding the smtp server port
pub const MAIL_SMTP_PORT: &str = "mail.smtp.port";
/// property holding the socket connection timeout in milliseconds
pub const MAIL_SMTP_CONNECTION_TIMEOUT: &str = "mail.smtp.connectiontimeout";
/// property holding the socket i/o timeout in milliseconds
pub const MAIL_SMTP_TIMEOUT: &str = "mail.smtp.timeout";

/// A mail session, i.e. an immutable bag of transport properties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    properties: HashMap<String, String>,
}

impl Session {
    /// create a session from an arbitrary set of properties
    pub fn from_properties(properties: HashMap<String, String>) -> Self {
        Session { properties }
    }

    /// create a session bound to the given smtp host/port
    ///
    /// This is the session a `MailDraft` creates on demand if none
    /// was attached explicitly.
    pub fn for_transport(
        host: &str,
        port: u16,
        connection_timeout: Duration,
        timeout: Duration,
    ) -> Self {
        let mut properties = HashMap::new();
        properties.insert(MAIL_TRANSPORT_PROTOCOL.to_owned(), "smtp".to_owned());
        properties.insert(MAIL_HOST.to_owned(), host.to_owned());
        properties.insert(MAIL_SMTP_HOST.to_owned(), host.to_owned());
        properties.insert(MAIL_SMTP_PORT.to_owned(), port.to_string());
        properties.insert(
            MAIL_SMTP_CONNECTION_TIMEOUT.to_owned(),
            connection_timeout.as_millis().to_string(),
        );
        properties.insert(MAIL_SMTP_TIMEOUT.to_owned(), timeout.as_millis().to_string());
        Session { properties }
    }

    /// convenience for building a session property by property
    pub fn with_property<N, V>(mut self, name: N, value: V) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// look up a property, absent properties are `None`, never an error
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(|value| &**value)
    }
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use super::*;

    #[test]
    fn transport_session_properties() {
        let session = Session::for_transport(
            "smtp.test.com",
            1234,
            Duration::from_millis(60_000),
            Duration::from_millis(60_000),
        );

        assert_eq!(Some("smtp"), session.property(MAIL_TRANSPORT_PROTOCOL));
        assert_eq!(Some("smtp.test.com"), session.property(MAIL_HOST));
        assert_eq!(Some("smtp.test.com"), session.property(MAIL_SMTP_HOST));
        assert_eq!(Some("1234"), session.property(MAIL_SMTP_PORT));
        assert_eq!(Some("60000"), session.property(MAIL_SMTP_CONNECTION_TIMEOUT));
        assert_eq!(Some("60000"), session.property(MAIL_SMTP_TIMEOUT));
    }

    #[test]
    fn absent_property_is_none() {
        let session = Session::default();
        assert_eq!(None, session.property(MAIL_HOST));
    }

    #[test]
    fn with_property_overwrites() {
        let session = Session::default()
            .with_property(MAIL_HOST, "a.example.com")
            .with_property(MAIL_HOST, "b.example.com");
        assert_eq!(Some("b.example.com"), session.property(MAIL_HOST));
    }
}
