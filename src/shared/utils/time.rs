//! Localized relative timestamps and date buckets for the chat list

use chrono::{DateTime, Datelike, Duration, Utc};

use crate::i18n::{t, t_args, Locale};

/// Date groups of the chat list, newest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DateBucket {
    Today,
    Yesterday,
    LastWeek,
    Older,
}

impl DateBucket {
    pub fn label_key(&self) -> &'static str {
        match self {
            DateBucket::Today => "chat.groups.today",
            DateBucket::Yesterday => "chat.groups.yesterday",
            DateBucket::LastWeek => "chat.groups.last_week",
            DateBucket::Older => "chat.groups.older",
        }
    }
}

pub fn date_bucket(timestamp: &DateTime<Utc>, now: &DateTime<Utc>) -> DateBucket {
    let date = timestamp.date_naive();
    let today = now.date_naive();

    if date >= today {
        DateBucket::Today
    } else if date == today - Duration::days(1) {
        DateBucket::Yesterday
    } else if date > today - Duration::days(7) {
        DateBucket::LastWeek
    } else {
        DateBucket::Older
    }
}

/// Short relative time ("5 min", "3 h", "yesterday", "12 Mar")
pub fn format_relative_time(timestamp: &DateTime<Utc>, now: &DateTime<Utc>, locale: Locale) -> String {
    let diff = *now - *timestamp;

    if diff.num_minutes() < 1 {
        t(locale, "time.just_now")
    } else if diff.num_minutes() < 60 {
        t_args(locale, "time.minutes", &[("n", &diff.num_minutes().to_string())])
    } else if diff.num_hours() < 24 && timestamp.date_naive() == now.date_naive() {
        t_args(locale, "time.hours", &[("n", &diff.num_hours().to_string())])
    } else if date_bucket(timestamp, now) == DateBucket::Yesterday {
        t(locale, "time.yesterday")
    } else {
        let month = t(locale, &format!("time.months.{}", timestamp.month0()));
        format!("{} {}", timestamp.day(), month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 12, 15, 0, 0).unwrap()
    }

    #[test]
    fn test_date_bucket() {
        let now = now();
        assert_eq!(date_bucket(&(now - Duration::hours(2)), &now), DateBucket::Today);
        assert_eq!(date_bucket(&(now - Duration::hours(20)), &now), DateBucket::Yesterday);
        assert_eq!(date_bucket(&(now - Duration::days(3)), &now), DateBucket::LastWeek);
        assert_eq!(date_bucket(&(now - Duration::days(7)), &now), DateBucket::Older);
        assert_eq!(date_bucket(&(now + Duration::minutes(5)), &now), DateBucket::Today);
    }

    #[test]
    fn test_format_relative_time() {
        let now = now();
        assert_eq!(format_relative_time(&now, &now, Locale::En), "just now");
        assert_eq!(format_relative_time(&(now - Duration::minutes(5)), &now, Locale::En), "5 min");
        assert_eq!(format_relative_time(&(now - Duration::hours(3)), &now, Locale::En), "3 h");
        assert_eq!(format_relative_time(&(now - Duration::hours(20)), &now, Locale::En), "yesterday");
        assert_eq!(format_relative_time(&(now - Duration::days(10)), &now, Locale::En), "2 Mar");
        assert_eq!(format_relative_time(&(now - Duration::days(10)), &now, Locale::Fr), "2 mars");
    }
}
