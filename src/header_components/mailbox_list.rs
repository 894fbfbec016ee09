use std::iter::IntoIterator;
use std::slice;

use vec1::{Size0Error, Vec1};

use super::Mailbox;

/// A possibly empty list of mailboxes.
///
/// Insertion order is kept and no deduplication is done, a mailbox
/// which is added twice appears twice.
#[derive(Debug, Default, Hash, Eq, PartialEq, Clone)]
pub struct OptMailboxList(pub Vec<Mailbox>);

/// A list of mailboxes guaranteed to contain at last one mailbox.
#[derive(Debug, Hash, Eq, PartialEq, Clone)]
pub struct MailboxList(pub Vec1<Mailbox>);

impl OptMailboxList {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn push(&mut self, mailbox: Mailbox) {
        self.0.push(mailbox)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Mailbox] {
        &self.0
    }

    pub fn iter(&self) -> slice::Iter<Mailbox> {
        self.0.iter()
    }
}

impl MailboxList {
    pub fn from_single(mailbox: Mailbox) -> Self {
        MailboxList(Vec1::new(mailbox))
    }

    /// converts a `Vec` of mailboxes into a `MailboxList`, failing on an empty vec
    pub fn try_from_vec(vec: Vec<Mailbox>) -> Result<Self, Size0Error> {
        Vec1::try_from_vec(vec).map(MailboxList)
    }

    pub fn first(&self) -> &Mailbox {
        self.0.first()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[Mailbox] {
        self.0.as_slice()
    }

    pub fn iter(&self) -> slice::Iter<Mailbox> {
        self.0.as_slice().iter()
    }
}

impl IntoIterator for MailboxList {
    type Item = <Vec1<Mailbox> as IntoIterator>::Item;
    type IntoIter = <Vec1<Mailbox> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl IntoIterator for OptMailboxList {
    type Item = <Vec<Mailbox> as IntoIterator>::Item;
    type IntoIter = <Vec<Mailbox> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
