mod common;

use std::cell::RefCell;

use birthday_core::{
    derive,
    errors::{BirthdayError, Result},
    i18n::Locale,
    notify::{Notification, NotificationService, Notifier, NotifyOutcome, Permission},
    storage::{KeyValueStore, LAST_NOTIFIED_KEY},
};
use common::{day, sample_roster, setup_test_env};

struct RecordingNotifier {
    permission: Permission,
    fail: bool,
    sent: RefCell<Vec<Notification>>,
}

impl RecordingNotifier {
    fn granted() -> Self {
        Self {
            permission: Permission::Granted,
            fail: false,
            sent: RefCell::new(Vec::new()),
        }
    }
}

impl Notifier for RecordingNotifier {
    fn permission(&self) -> Permission {
        self.permission
    }

    fn deliver(&self, notification: &Notification) -> Result<()> {
        if self.fail {
            return Err(BirthdayError::InvalidInput("delivery refused".into()));
        }
        self.sent.borrow_mut().push(notification.clone());
        Ok(())
    }
}

#[test]
fn digest_goes_out_once_per_day() {
    let (persistence, _, _) = setup_test_env();
    let today = day(2024, 3, 1);
    let records = derive::build(&sample_roster(), today).unwrap();
    let service = NotificationService::new(persistence.clone(), Locale::En);
    let notifier = RecordingNotifier::granted();

    let first = service.check_and_notify(&records, today, &notifier).unwrap();
    let NotifyOutcome::Sent(notification) = first else {
        panic!("expected a notification, got {first:?}");
    };
    assert_eq!(notification.body, "Tomorrow: Cy");
    assert_eq!(
        persistence.get(LAST_NOTIFIED_KEY).unwrap().as_deref(),
        Some("2024-03-01")
    );

    let second = service.check_and_notify(&records, today, &notifier).unwrap();
    assert_eq!(second, NotifyOutcome::AlreadyNotified);
    assert_eq!(notifier.sent.borrow().len(), 1);
}

#[test]
fn missing_permission_sends_nothing() {
    let (persistence, _, _) = setup_test_env();
    let today = day(2024, 3, 1);
    let records = derive::build(&sample_roster(), today).unwrap();
    let service = NotificationService::new(persistence.clone(), Locale::En);
    for permission in [Permission::Denied, Permission::Default] {
        let notifier = RecordingNotifier {
            permission,
            ..RecordingNotifier::granted()
        };
        let outcome = service.check_and_notify(&records, today, &notifier).unwrap();
        assert_eq!(outcome, NotifyOutcome::PermissionMissing);
        assert!(notifier.sent.borrow().is_empty());
    }
    assert_eq!(persistence.get(LAST_NOTIFIED_KEY).unwrap(), None);
}

#[test]
fn failed_delivery_is_retried_later_the_same_day() {
    let (persistence, _, _) = setup_test_env();
    let today = day(2024, 3, 2);
    let records = derive::build(&sample_roster(), today).unwrap();
    let service = NotificationService::new(persistence.clone(), Locale::Fr);

    let broken = RecordingNotifier {
        fail: true,
        ..RecordingNotifier::granted()
    };
    assert!(service.check_and_notify(&records, today, &broken).is_err());
    assert_eq!(persistence.get(LAST_NOTIFIED_KEY).unwrap(), None);

    let working = RecordingNotifier::granted();
    let outcome = service.check_and_notify(&records, today, &working).unwrap();
    assert_eq!(
        outcome,
        NotifyOutcome::Sent(Notification {
            title: "🎂 Anniversaire aujourd'hui !".into(),
            body: "Aujourd'hui : Cy".into(),
        })
    );
}

#[test]
fn quiet_days_do_not_mark_the_day() {
    let (persistence, _, _) = setup_test_env();
    let today = day(2024, 5, 1);
    let records = derive::build(&sample_roster(), today).unwrap();
    let service = NotificationService::new(persistence.clone(), Locale::En);
    let outcome = service
        .check_and_notify(&records, today, &RecordingNotifier::granted())
        .unwrap();
    assert_eq!(outcome, NotifyOutcome::NothingDue);
    assert_eq!(persistence.get(LAST_NOTIFIED_KEY).unwrap(), None);
}
