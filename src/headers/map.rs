use std::fmt::{self, Debug};
use std::slice;

use error::HeaderInsertionError;

use super::HeaderName;

/// A collection of user supplied header fields in insertion order.
///
/// Keys are unique and case-sensitive. Inserting a name which is
/// already present replaces the value but keeps the position of the
/// first insertion.
///
/// The per-mail header count is small, so the map is backed by a
/// plain vec and lookups are linear.
#[derive(Clone, Default)]
pub struct HeaderMap {
    fields: Vec<(HeaderName, String)>,
}

impl HeaderMap {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// insert a header field, replacing the value of an already present name
    ///
    /// Fails with `HeaderInsertionError::EmptyValue` if the value is
    /// empty. (An empty or invalid _name_ can not reach this point as
    /// `HeaderName::new` already rejects it.)
    pub fn insert<V>(&mut self, name: HeaderName, value: V) -> Result<(), HeaderInsertionError>
    where
        V: Into<String>,
    {
        let value = value.into();
        if value.is_empty() {
            return Err(HeaderInsertionError::EmptyValue {
                name: name.as_str().to_owned(),
            });
        }

        if let Some(field) = self.fields.iter_mut().find(|field| field.0 == name) {
            field.1 = value;
            return Ok(());
        }
        self.fields.push((name, value));
        Ok(())
    }

    /// look up the value for a name, case-sensitive
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.0 == name)
            .map(|field| &*field.1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// remove the field with the given name
    ///
    /// Returns true if a field was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.fields.len();
        self.fields.retain(|field| field.0 != name);
        before != self.fields.len()
    }

    /// iterate over all (name, value) pairs in insertion order
    pub fn iter(&self) -> slice::Iter<(HeaderName, String)> {
        self.fields.iter()
    }
}

impl Debug for HeaderMap {
    fn fmt(&self, fter: &mut fmt::Formatter) -> fmt::Result {
        write!(fter, "HeaderMap {{ ")?;
        for &(ref name, ref value) in self.iter() {
            write!(fter, "{}: {:?},", name.as_str(), value)?;
        }
        write!(fter, " }}")
    }
}

#[cfg(test)]
mod test {
    use error::HeaderInsertionError;
    use headers::HeaderName;

    use super::HeaderMap;

    fn name(name: &str) -> HeaderName {
        HeaderName::new(name).unwrap()
    }

    #[test]
    fn insert_and_get() {
        let mut map = HeaderMap::new();
        assert_ok!(map.insert(name("X-Test-Header"), "HeaderValue"));

        assert_eq!(1, map.len());
        assert_eq!(Some("HeaderValue"), map.get("X-Test-Header"));
        assert_eq!(None, map.get("X-Other"));
    }

    #[test]
    fn reinsert_replaces_value_keeps_position() {
        let mut map = HeaderMap::new();
        assert_ok!(map.insert(name("X-A"), "1"));
        assert_ok!(map.insert(name("X-B"), "2"));
        assert_ok!(map.insert(name("X-A"), "3"));

        assert_eq!(2, map.len());
        assert_eq!(Some("3"), map.get("X-A"));
        let order = map
            .iter()
            .map(|field| field.0.as_str())
            .collect::<Vec<_>>();
        assert_eq!(vec!["X-A", "X-B"], order);
    }

    #[test]
    fn empty_value_is_rejected() {
        let mut map = HeaderMap::new();
        let err = assert_err!(map.insert(name("To"), ""));
        assert_eq!(
            HeaderInsertionError::EmptyValue {
                name: "To".to_owned()
            },
            err
        );
        assert!(map.is_empty());
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let mut map = HeaderMap::new();
        assert_ok!(map.insert(name("X-Id"), "abc"));
        assert!(map.contains("X-Id"));
        assert!(!map.contains("X-ID"));
    }

    #[test]
    fn remove_removes_the_field() {
        let mut map = HeaderMap::new();
        assert_ok!(map.insert(name("X-A"), "1"));
        assert!(map.remove("X-A"));
        assert!(!map.remove("X-A"));
        assert!(map.is_empty());
    }
}
