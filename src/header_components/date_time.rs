use chrono;

/// A DateTime component wrapping `chrono::DateTime<chrono::Utc>`
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub struct DateTime(chrono::DateTime<chrono::Utc>);

impl DateTime {
    /// create a new DateTime of the current time
    pub fn now() -> DateTime {
        DateTime(chrono::Utc::now())
    }

    /// create a new DateTime from a `chrono::DateTime<TimeZone>` for any `TimeZone`
    pub fn new<TZ: chrono::TimeZone>(date_time: chrono::DateTime<TZ>) -> DateTime {
        DateTime(date_time.with_timezone(&chrono::Utc))
    }

    /// the date-time in the format used in a `Date` header field
    pub fn to_rfc2822_string(&self) -> String {
        self.0.to_rfc2822()
    }
}

impl<TZ> From<chrono::DateTime<TZ>> for DateTime
where
    TZ: chrono::TimeZone,
{
    fn from(val: chrono::DateTime<TZ>) -> Self {
        Self::new(val)
    }
}

impl Into<chrono::DateTime<chrono::Utc>> for DateTime {
    fn into(self) -> chrono::DateTime<chrono::Utc> {
        self.0
    }
}

deref0! {-mut DateTime => chrono::DateTime<chrono::Utc> }

#[cfg(test)]
mod test {
    use chrono::TimeZone;

    use super::DateTime;

    #[test]
    fn rfc2822_format() {
        let fixed = ::chrono::Utc.with_ymd_and_hms(2013, 8, 6, 4, 11, 45).unwrap();
        let date_time = DateTime::new(fixed);
        let formatted = date_time.to_rfc2822_string();
        assert!(formatted.starts_with("Tue,"), "got: {}", formatted);
        assert!(formatted.ends_with("Aug 2013 04:11:45 +0000"), "got: {}", formatted);
    }

    #[test]
    fn converts_time_zones_to_utc() {
        let offset = ::chrono::FixedOffset::east_opt(3 * 3600).unwrap();
        let local = offset.with_ymd_and_hms(2013, 8, 6, 7, 11, 45).unwrap();
        assert_eq!(
            DateTime::new(local),
            DateTime::new(::chrono::Utc.with_ymd_and_hms(2013, 8, 6, 4, 11, 45).unwrap())
        );
    }
}
