use chrono::{DateTime, Datelike, Days, NaiveDate, Utc};

use crate::errors::{BirthdayError, Result};
use crate::roster::{Category, RawBirthRecord};

const CRLF: &str = "\r\n";
const MAX_LINE_OCTETS: usize = 75;
const PRODID: &str = "-//birthday-core//Birthday Tracker//EN";
const CALENDAR_NAME: &str = "Birthdays";
const UID_DOMAIN: &str = "birthday-core";
const DATE_VALUE_FORMAT: &str = "%Y%m%d";
const STAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// One VEVENT read back from calendar text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IcsEvent {
    pub uid: String,
    pub summary: String,
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
    pub rrule: Option<String>,
    pub categories: Vec<String>,
}

pub fn event_summary(record: &RawBirthRecord) -> String {
    match record.category {
        Category::Anniversary => format!("{} Wedding Anniversary", record.name),
        Category::Male | Category::Female => format!("{}'s Birthday", record.name),
    }
}

/// `Ada_Lovelace_19900312@birthday-core`: whitespace runs become underscores.
pub fn event_uid(record: &RawBirthRecord) -> String {
    let name = record.name.split_whitespace().collect::<Vec<_>>().join("_");
    format!(
        "{}_{}@{}",
        name,
        record.date.format(DATE_VALUE_FORMAT),
        UID_DOMAIN
    )
}

fn event_category(category: Category) -> &'static str {
    match category {
        Category::Anniversary => "Anniversaries",
        Category::Male | Category::Female => "Birthdays",
    }
}

/// Feb 29 recurs on the last day of February so common years keep the event.
fn yearly_rule(date: NaiveDate) -> &'static str {
    if date.month() == 2 && date.day() == 29 {
        "FREQ=YEARLY;BYMONTH=2;BYMONTHDAY=-1"
    } else {
        "FREQ=YEARLY"
    }
}

/// Renders a yearly all-day VEVENT per record inside one VCALENDAR.
pub fn to_ics(records: &[RawBirthRecord], dtstamp: DateTime<Utc>) -> String {
    let stamp = dtstamp.format(STAMP_FORMAT).to_string();
    let mut lines = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{PRODID}"),
        format!("X-WR-CALNAME:{CALENDAR_NAME}"),
        "METHOD:PUBLISH".to_string(),
    ];

    for record in records {
        let end = record
            .date
            .checked_add_days(Days::new(1))
            .unwrap_or(record.date);
        lines.extend([
            "BEGIN:VEVENT".to_string(),
            format!("UID:{}", escape_text(&event_uid(record))),
            format!("DTSTAMP:{stamp}"),
            format!("DTSTART;VALUE=DATE:{}", record.date.format(DATE_VALUE_FORMAT)),
            format!("DTEND;VALUE=DATE:{}", end.format(DATE_VALUE_FORMAT)),
            format!("RRULE:{}", yearly_rule(record.date)),
            format!("SUMMARY:{}", escape_text(&event_summary(record))),
            "TRANSP:TRANSPARENT".to_string(),
            "X-MICROSOFT-CDO-BUSYSTATUS:FREE".to_string(),
            "STATUS:CONFIRMED".to_string(),
            "CLASS:PUBLIC".to_string(),
            format!("CATEGORIES:{}", event_category(record.category)),
            "END:VEVENT".to_string(),
        ]);
    }
    lines.push("END:VCALENDAR".to_string());

    let mut out = String::new();
    for line in &lines {
        out.push_str(&fold_line(line));
        out.push_str(CRLF);
    }
    tracing::debug!(events = records.len(), bytes = out.len(), "calendar exported");
    out
}

/// Escapes TEXT values: backslash, semicolon, comma and newlines.
pub fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            other => out.push(other),
        }
    }
    out
}

pub fn unescape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') | Some('N') => out.push('\n'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

/// Splits a content line into 75-octet physical lines without breaking UTF-8 sequences.
pub fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return line.to_string();
    }
    let mut out = String::with_capacity(line.len() + line.len() / MAX_LINE_OCTETS * 3);
    let mut budget = MAX_LINE_OCTETS;
    let mut used = 0;
    for ch in line.chars() {
        let width = ch.len_utf8();
        if used + width > budget {
            out.push_str(CRLF);
            out.push(' ');
            // The leading space counts toward the next line.
            budget = MAX_LINE_OCTETS - 1;
            used = 0;
        }
        out.push(ch);
        used += width;
    }
    out
}

fn unfold(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    for raw in text.split('\n') {
        let raw = raw.strip_suffix('\r').unwrap_or(raw);
        if let Some(rest) = raw.strip_prefix([' ', '\t']) {
            if let Some(last) = lines.last_mut() {
                last.push_str(rest);
                continue;
            }
        }
        if !raw.is_empty() {
            lines.push(raw.to_string());
        }
    }
    lines
}

fn parse_date(value: &str, line: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_VALUE_FORMAT)
        .map_err(|err| BirthdayError::InvalidInput(format!("bad date in `{line}`: {err}")))
}

/// Reads the VEVENTs of a calendar produced by [`to_ics`] (or a compatible one).
pub fn parse_ics(text: &str) -> Result<Vec<IcsEvent>> {
    let mut events = Vec::new();
    let mut current: Option<PartialEvent> = None;

    for line in unfold(text) {
        let (head, value) = line
            .split_once(':')
            .ok_or_else(|| BirthdayError::InvalidInput(format!("missing `:` in `{line}`")))?;
        let name = head.split(';').next().unwrap_or(head).to_ascii_uppercase();

        match (name.as_str(), current.as_mut()) {
            ("BEGIN", None) if value.eq_ignore_ascii_case("VEVENT") => {
                current = Some(PartialEvent::default());
            }
            ("BEGIN", Some(_)) if value.eq_ignore_ascii_case("VEVENT") => {
                return Err(BirthdayError::InvalidInput("nested VEVENT".into()));
            }
            ("END", Some(_)) if value.eq_ignore_ascii_case("VEVENT") => {
                if let Some(partial) = current.take() {
                    events.push(partial.finish()?);
                }
            }
            ("UID", Some(event)) => event.uid = Some(unescape_text(value)),
            ("SUMMARY", Some(event)) => event.summary = Some(unescape_text(value)),
            ("DTSTART", Some(event)) => event.start = Some(parse_date(value, &line)?),
            ("DTEND", Some(event)) => event.end = Some(parse_date(value, &line)?),
            ("RRULE", Some(event)) => event.rrule = Some(value.to_string()),
            ("CATEGORIES", Some(event)) => event.categories.extend(
                split_list(value)
                    .into_iter()
                    .filter(|item| !item.is_empty()),
            ),
            _ => {}
        }
    }

    if current.is_some() {
        return Err(BirthdayError::InvalidInput("unterminated VEVENT".into()));
    }
    Ok(events)
}

/// Splits on unescaped commas, unescaping each item.
fn split_list(value: &str) -> Vec<String> {
    let mut items = Vec::new();
    let mut item = String::new();
    let mut escaped = false;
    for ch in value.chars() {
        match (escaped, ch) {
            (true, _) => {
                item.push('\\');
                item.push(ch);
                escaped = false;
            }
            (false, '\\') => escaped = true,
            (false, ',') => items.push(unescape_text(&std::mem::take(&mut item))),
            (false, _) => item.push(ch),
        }
    }
    items.push(unescape_text(&item));
    items
}

#[derive(Default)]
struct PartialEvent {
    uid: Option<String>,
    summary: Option<String>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    rrule: Option<String>,
    categories: Vec<String>,
}

impl PartialEvent {
    fn finish(self) -> Result<IcsEvent> {
        let missing = |field: &str| BirthdayError::InvalidInput(format!("VEVENT without {field}"));
        Ok(IcsEvent {
            uid: self.uid.ok_or_else(|| missing("UID"))?,
            summary: self.summary.unwrap_or_default(),
            start: self.start.ok_or_else(|| missing("DTSTART"))?,
            end: self.end,
            rrule: self.rrule,
            categories: self.categories,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn stamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap()
    }

    fn record(name: &str, y: i32, m: u32, d: u32, category: Category) -> RawBirthRecord {
        RawBirthRecord::new(name, NaiveDate::from_ymd_opt(y, m, d).unwrap(), category)
    }

    #[test]
    fn emits_crlf_calendar_with_event_fields() {
        let ics = to_ics(&[record("Ada Lovelace", 1990, 3, 12, Category::Female)], stamp());
        assert!(ics.starts_with("BEGIN:VCALENDAR\r\nVERSION:2.0\r\n"));
        assert!(ics.ends_with("END:VCALENDAR\r\n"));
        assert!(ics.contains("UID:Ada_Lovelace_19900312@birthday-core\r\n"));
        assert!(ics.contains("DTSTAMP:20240301T083000Z\r\n"));
        assert!(ics.contains("DTSTART;VALUE=DATE:19900312\r\n"));
        assert!(ics.contains("DTEND;VALUE=DATE:19900313\r\n"));
        assert!(ics.contains("SUMMARY:Ada Lovelace's Birthday\r\n"));
        assert!(!ics.replace("\r\n", "").contains('\n'));
    }

    #[test]
    fn anniversary_summary_and_escaping() {
        let couple = record("Brigitte, Julien; & co", 2016, 2, 19, Category::Anniversary);
        let ics = to_ics(&[couple], stamp());
        assert!(ics.contains("SUMMARY:Brigitte\\, Julien\\; & co Wedding Anniversary\r\n"));
        assert!(ics.contains("CATEGORIES:Anniversaries\r\n"));
    }

    #[test]
    fn long_lines_fold_at_75_octets() {
        let name = "Émilie ".repeat(20);
        let ics = to_ics(&[record(name.trim(), 2000, 1, 1, Category::Female)], stamp());
        for line in ics.split("\r\n") {
            assert!(line.len() <= MAX_LINE_OCTETS, "line too long: {line}");
        }
        let events = parse_ics(&ics).unwrap();
        assert_eq!(events[0].summary, format!("{}'s Birthday", name.trim()));
    }

    #[test]
    fn parses_back_what_it_writes() {
        let records = vec![
            record("Ada", 1990, 3, 12, Category::Female),
            record("Leap Day", 2000, 2, 29, Category::Male),
        ];
        let events = parse_ics(&to_ics(&records, stamp())).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].uid, "Leap_Day_20000229@birthday-core");
        assert_eq!(events[1].start, NaiveDate::from_ymd_opt(2000, 2, 29).unwrap());
        assert_eq!(events[1].end, NaiveDate::from_ymd_opt(2000, 3, 1));
        assert_eq!(events[0].rrule.as_deref(), Some("FREQ=YEARLY"));
        assert_eq!(
            events[1].rrule.as_deref(),
            Some("FREQ=YEARLY;BYMONTH=2;BYMONTHDAY=-1")
        );
        assert_eq!(events[0].categories, vec!["Birthdays".to_string()]);
    }

    #[test]
    fn rejects_unterminated_event() {
        let err = parse_ics("BEGIN:VCALENDAR\r\nBEGIN:VEVENT\r\nUID:x\r\n").unwrap_err();
        assert!(matches!(err, BirthdayError::InvalidInput(_)));
    }
}
