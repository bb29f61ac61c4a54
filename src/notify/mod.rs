//! Once-per-day digest of birthdays happening today or tomorrow.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::derive::DerivedBirthday;
use crate::errors::Result;
use crate::i18n::{self, Locale, Text};
use crate::roster::DATE_FORMAT;
use crate::storage::{KeyValueStore, LAST_NOTIFIED_KEY};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
    /// Not asked yet; treated like a denial.
    Default,
}

/// Delivery channel for notifications.
pub trait Notifier {
    fn permission(&self) -> Permission;
    fn deliver(&self, notification: &Notification) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyOutcome {
    PermissionMissing,
    AlreadyNotified,
    NothingDue,
    Sent(Notification),
}

/// Builds the digest for records due today and tomorrow, if any.
pub fn digest(records: &[DerivedBirthday], locale: Locale) -> Option<Notification> {
    let names_due = |days: u32| {
        records
            .iter()
            .filter(|record| record.days_until == days)
            .map(|record| record.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };
    let today = names_due(0);
    let tomorrow = names_due(1);

    match (today.is_empty(), tomorrow.is_empty()) {
        (true, true) => None,
        (false, true) => Some(Notification {
            title: i18n::text(locale, Text::NotifyTodayTitle).to_string(),
            body: i18n::format(locale, Text::NotifyTodayBody, &[("names", &today)]),
        }),
        (true, false) => Some(Notification {
            title: i18n::text(locale, Text::NotifyUpcomingTitle).to_string(),
            body: i18n::format(locale, Text::NotifyUpcomingBody, &[("names", &tomorrow)]),
        }),
        (false, false) => {
            let mut body = i18n::format(locale, Text::NotifyTodayBody, &[("names", &today)]);
            body.push_str(&i18n::format(locale, Text::NotifyBothBody, &[("names", &tomorrow)]));
            Some(Notification {
                title: i18n::text(locale, Text::NotifyTodayTitle).to_string(),
                body,
            })
        }
    }
}

pub struct NotificationService {
    persistence: Arc<dyn KeyValueStore>,
    locale: Locale,
}

impl NotificationService {
    pub fn new(persistence: Arc<dyn KeyValueStore>, locale: Locale) -> Self {
        Self {
            persistence,
            locale,
        }
    }

    /// Delivers today's digest unless permission is missing or it already went out today.
    ///
    /// The day is only recorded once a notification was actually delivered.
    pub fn check_and_notify(
        &self,
        records: &[DerivedBirthday],
        today: NaiveDate,
        notifier: &dyn Notifier,
    ) -> Result<NotifyOutcome> {
        if notifier.permission() != Permission::Granted {
            tracing::debug!("notification permission not granted");
            return Ok(NotifyOutcome::PermissionMissing);
        }

        let today_key = today.format(DATE_FORMAT).to_string();
        if self.persistence.get(LAST_NOTIFIED_KEY)?.as_deref() == Some(today_key.as_str()) {
            return Ok(NotifyOutcome::AlreadyNotified);
        }

        let Some(notification) = digest(records, self.locale) else {
            return Ok(NotifyOutcome::NothingDue);
        };
        notifier.deliver(&notification)?;
        self.persistence.set(LAST_NOTIFIED_KEY, &today_key)?;
        tracing::info!(title = %notification.title, "birthday notification delivered");
        Ok(NotifyOutcome::Sent(notification))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derive::build;
    use crate::roster::{Category, RawBirthRecord};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn records(today: NaiveDate) -> Vec<DerivedBirthday> {
        build(
            &[
                RawBirthRecord::new("Ada", day(1990, 3, 1), Category::Female),
                RawBirthRecord::new("Bob", day(1985, 3, 2), Category::Male),
                RawBirthRecord::new("Cy", day(1985, 3, 2), Category::Male),
                RawBirthRecord::new("Dee", day(1985, 9, 2), Category::Female),
            ],
            today,
        )
        .unwrap()
    }

    #[test]
    fn combined_digest_lists_today_then_tomorrow() {
        let digest = digest(&records(day(2024, 3, 1)), Locale::En).unwrap();
        assert_eq!(digest.title, "🎂 Birthday today!");
        assert_eq!(digest.body, "Today: Ada | Tomorrow: Bob, Cy");
    }

    #[test]
    fn tomorrow_only_digest() {
        let digest = digest(&records(day(2024, 2, 29)), Locale::Fr).unwrap();
        assert_eq!(digest.title, "🎈 Anniversaire demain");
        assert_eq!(digest.body, "Demain : Ada");
    }

    #[test]
    fn nothing_due_yields_none() {
        assert!(digest(&records(day(2024, 6, 1)), Locale::En).is_none());
    }
}
