//! The components of a mail which appear in header fields.
//!
//! E.g. `Email` is the address part of a `Mailbox` which in turn
//! appears in `From`, `To`, `Cc`, `Bcc` and `Reply-To` fields.

mod date_time;
mod email;
mod mailbox;
mod mailbox_list;
mod phrase;

pub use self::date_time::DateTime;
pub use self::email::{Domain, Email, LocalPart};
pub use self::mailbox::Mailbox;
pub use self::mailbox_list::{MailboxList, OptMailboxList};
pub use self::phrase::Phrase;
