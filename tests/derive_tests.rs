mod common;

use birthday_core::{
    astro::{ChineseZodiac, Element, ZodiacSign},
    derive::{self, calendar, MilestoneStatus, WeddingMaterial},
    roster::{builtin_roster, Category, RawBirthRecord},
    time::FixedClock,
};
use common::{day, sample_roster};

#[test]
fn builtin_roster_derives_for_every_entry() {
    let roster = builtin_roster();
    assert_eq!(roster.len(), 33);
    let records = derive::build(&roster, day(2024, 3, 1)).unwrap();
    assert_eq!(records.len(), roster.len());
    for record in &records {
        assert!(record.days_until <= 366, "{}", record.name);
        assert!(record.next_occurrence >= day(2024, 3, 1));
        assert!((0.0..=100.0).contains(&record.progress_percent));
        assert_eq!(record.zodiac.element(), record.element);
    }
}

#[test]
fn clock_and_date_builds_agree() {
    let today = day(2024, 3, 1);
    let by_date = derive::build(&sample_roster(), today).unwrap();
    let by_clock = derive::build_with_clock(&sample_roster(), &FixedClock::on(today)).unwrap();
    assert_eq!(by_date, by_clock);
}

#[test]
fn leap_day_birthdays_fall_back_in_common_years() {
    let birth = day(2000, 2, 29);
    assert_eq!(calendar::next_occurrence(birth, day(2023, 2, 1)), day(2023, 2, 28));
    assert_eq!(calendar::next_occurrence(birth, day(2024, 2, 1)), day(2024, 2, 29));
    assert_eq!(calendar::days_until(birth, day(2023, 2, 28)), 0);
}

#[test]
fn birthday_today_keeps_the_current_age() {
    let records = derive::build(
        &[RawBirthRecord::new("Cy", day(2006, 3, 2), Category::Male)],
        day(2024, 3, 2),
    )
    .unwrap();
    let cy = &records[0];
    assert!(cy.is_today());
    assert_eq!(cy.age, 18);
    assert_eq!(cy.upcoming_age, 18);
    assert_eq!(cy.progress_percent, 100.0);
    let milestone = cy.milestone.unwrap();
    assert_eq!(milestone.threshold, 18);
    assert_eq!(milestone.status, MilestoneStatus::Upcoming);
}

#[test]
fn anniversaries_carry_their_material() {
    let records = derive::build(
        &[RawBirthRecord::new("Dee & Eli", day(1999, 3, 20), Category::Anniversary)],
        day(2024, 3, 1),
    )
    .unwrap();
    let milestone = records[0].milestone.unwrap();
    assert_eq!(milestone.threshold, 25);
    assert_eq!(milestone.status, MilestoneStatus::Upcoming);
    assert_eq!(milestone.material, Some(WeddingMaterial::Silver));
}

#[test]
fn astro_labels_follow_the_birth_date() {
    let records = derive::build(&sample_roster(), day(2024, 3, 1)).unwrap();
    let bob = records.iter().find(|r| r.name == "Bob").unwrap();
    assert_eq!(bob.zodiac, ZodiacSign::Leo);
    assert_eq!(bob.element, Element::Fire);
    assert_eq!(bob.chinese_zodiac, ChineseZodiac::Ox);
}

#[test]
fn empty_names_are_rejected_with_their_index() {
    let mut roster = sample_roster();
    roster.push(RawBirthRecord::new("  ", day(2001, 1, 1), Category::Male));
    let err = derive::build(&roster, day(2024, 3, 1)).unwrap_err();
    assert!(err.to_string().contains("#4"), "{err}");
}
