//! Text renderings of records, details and statistics.

use chrono::{Datelike, NaiveDate};

use crate::derive::DerivedBirthday;
use crate::i18n::{self, Locale, Text};
use crate::stats::{self, Bucket};

use super::output::{self, accent, current_preferences};
use super::table::{Table, TableColumn};

const BAR_WIDTH: usize = 24;

/// `12 March 1990` in the locale's month names.
pub fn long_date(locale: Locale, date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.day(),
        i18n::month_name(locale, date.month()),
        date.year()
    )
}

fn milestone_cell(locale: Locale, record: &DerivedBirthday) -> String {
    record
        .milestone
        .as_ref()
        .map(|milestone| i18n::milestone_label(locale, milestone))
        .unwrap_or_default()
}

pub fn records_table<'a>(
    locale: Locale,
    records: impl IntoIterator<Item = &'a DerivedBirthday>,
) -> Table {
    let t = |key| i18n::text(locale, key);
    let mut table = Table::new(vec![
        TableColumn::left(""),
        TableColumn::left(t(Text::ColumnName)).max_width(28),
        TableColumn::left(t(Text::ColumnDate)),
        TableColumn::right(t(Text::ColumnAge)),
        TableColumn::left(t(Text::ColumnCountdown)),
        TableColumn::left(t(Text::ColumnSign)),
        TableColumn::left(t(Text::ColumnStone)),
        TableColumn::left(t(Text::ColumnMilestone)).max_width(36),
    ]);
    for record in records {
        table.push_row(vec![
            record.category.emoji().to_string(),
            record.name.clone(),
            long_date(locale, record.date),
            record.age.to_string(),
            i18n::countdown_label(locale, record.days_until),
            format!("{} {}", record.zodiac.symbol(), t(Text::Sign(record.zodiac))),
            t(Text::Stone(record.birthstone)).to_string(),
            milestone_cell(locale, record),
        ]);
    }
    table
}

pub fn print_records<'a>(
    locale: Locale,
    records: impl IntoIterator<Item = &'a DerivedBirthday>,
) {
    let table = records_table(locale, records);
    if table.rows.is_empty() {
        output::info(i18n::text(locale, Text::NoResults));
        return;
    }
    output::info(table.render());
}

fn fact(label: &str, value: impl std::fmt::Display) {
    output::info(format!("  {:<18} {}", label, value));
}

pub fn print_details(locale: Locale, record: &DerivedBirthday) {
    let t = |key| i18n::text(locale, key);
    output::section(format!("{} {}", record.category.emoji(), accent(&record.name)));

    fact("Born", long_date(locale, record.date));
    fact("Category", t(Text::Category(record.category)));
    fact(
        "Age",
        format!("{} (turning {} on {})", record.age, record.upcoming_age, long_date(locale, record.next_occurrence)),
    );
    fact(
        "Next",
        format!(
            "{} · {:.0}% of the year elapsed",
            i18n::countdown_label(locale, record.days_until),
            record.progress_percent
        ),
    );
    if let Some(milestone) = &record.milestone {
        fact("Milestone", i18n::milestone_label(locale, milestone));
    }

    output::section("Astrology");
    fact(
        "Sign",
        format!("{} {}", record.zodiac.symbol(), t(Text::Sign(record.zodiac))),
    );
    fact("Element", t(Text::Element(record.element)));
    fact(
        "Birthstone",
        format!("{} {}", record.birthstone.emoji(), t(Text::Stone(record.birthstone))),
    );
    fact("Chinese zodiac", t(Text::Chinese(record.chinese_zodiac)));
    fact(
        "Moon at birth",
        format!(
            "{} {}",
            record.facts.birth_moon.emoji(),
            t(Text::Moon(record.facts.birth_moon))
        ),
    );

    output::section("Profile");
    fact("Generation", t(Text::Generation(record.generation)));
    fact("Season", t(Text::Season(record.season)));
    fact("Decade", &record.decade);
    fact("Age group", t(Text::AgeGroup(record.age_group)));

    let facts = &record.facts;
    output::section("Life in numbers");
    fact("Days", facts.age_in_days);
    fact("Weeks", facts.age_in_weeks);
    fact("Months", facts.age_in_months);
    fact("Heartbeats", facts.heartbeats);
    fact("Breaths", facts.breaths);
    fact("Km around the sun", facts.distance_km);
    for planet_age in &facts.planet_ages {
        fact(
            &format!("{} {}", planet_age.planet.emoji(), t(Text::Planet(planet_age.planet))),
            format!("{:.1}", planet_age.years),
        );
    }
    fact(
        "Life path",
        format!(
            "{} ({}) {}",
            facts.life_path.number(),
            t(Text::LifePath(facts.life_path)),
            i18n::life_path_meaning(locale, facts.life_path)
        ),
    );
    fact("Half birthday", long_date(locale, facts.half_birthday));
    fact("Next on a", facts.next_weekday);
    fact(
        "Biorhythm",
        format!(
            "physical {:+.0}% · emotional {:+.0}% · intellectual {:+.0}%",
            facts.biorhythm.physical, facts.biorhythm.emotional, facts.biorhythm.intellectual
        ),
    );
    fact("Insight", i18n::insight(locale, facts.daily_insight));
}

/// Horizontal bar proportional to `count / max`.
pub fn bar(count: usize, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let cells = (count * BAR_WIDTH).div_ceil(max);
    let ch = if current_preferences().plain_mode { "#" } else { "█" };
    ch.repeat(cells)
}

fn print_buckets<K>(title: &str, buckets: &[Bucket<K>], label: impl Fn(&K) -> String) {
    output::section(title);
    let max = buckets.iter().map(Bucket::count).max().unwrap_or(0);
    for bucket in buckets.iter().filter(|bucket| bucket.count() > 0) {
        output::info(format!(
            "  {:<16} {:>3} {}",
            label(&bucket.key),
            bucket.count(),
            bar(bucket.count(), max)
        ));
    }
}

pub fn print_overview(locale: Locale, records: &[DerivedBirthday]) {
    let t = |key| i18n::text(locale, key);
    output::section(format!("{} ({})", t(Text::AppTitle), records.len()));
    if let Some(next) = stats::next_celebration(records) {
        output::info(format!(
            "  Next celebration: {} {}",
            accent(&next.name),
            i18n::countdown_label(locale, next.days_until)
        ));
    }
    if let Some(roster) = stats::roster_records(records) {
        output::info(format!("  Elder: {}", roster.elder));
        output::info(format!("  Rookie: {}", roster.rookie));
        output::info(format!(
            "  Socialite: {} ({} perfect matches)",
            roster.socialite.name, roster.socialite.perfect_matches
        ));
        for (first, second) in &roster.twins {
            output::info(format!("  Zodiac twins: {first} & {second}"));
        }
    }

    print_buckets("Categories", &stats::by_category(records), |c| {
        t(Text::Category(*c)).to_string()
    });
    print_buckets("Age groups", &stats::by_age_group(records), |g| {
        t(Text::AgeGroup(*g)).to_string()
    });
    print_buckets("Generations", &stats::by_generation(records), |g| {
        t(Text::Generation(*g)).to_string()
    });
    print_buckets("Seasons", &stats::by_season(records), |s| {
        t(Text::Season(*s)).to_string()
    });
    print_buckets("Zodiac", &stats::by_zodiac(records), |z| {
        format!("{} {}", z.symbol(), t(Text::Sign(*z)))
    });
    print_buckets("Elements", &stats::by_element(records), |e| {
        t(Text::Element(*e)).to_string()
    });
    print_buckets("Months", &stats::by_month(records), |m| {
        i18n::month_name(locale, *m).to_string()
    });
    print_buckets("Decades", &stats::by_decade(records), Clone::clone);
}

pub fn print_ages(records: &[DerivedBirthday]) {
    print_buckets("Ages", &stats::age_histogram(records), u32::to_string);
}

pub fn print_heatmap(locale: Locale, records: &[DerivedBirthday]) {
    output::section("Birth heatmap");
    let grid = stats::birth_heatmap(records);
    let header: String = (1..=31).map(|day| format!("{}", day % 10)).collect();
    output::info(format!("  {:<10} {}", "", header));
    for (month0, days) in grid.iter().enumerate() {
        let row: String = days
            .iter()
            .map(|count| match count {
                0 => '·',
                1..=9 => char::from_digit(*count as u32, 10).unwrap_or('+'),
                _ => '+',
            })
            .collect();
        let name = i18n::month_name(locale, month0 as u32 + 1);
        output::info(format!("  {:<10} {}", name, row));
    }
}

pub fn print_pyramid(records: &[DerivedBirthday]) {
    output::section("Age pyramid (♂ | ♀)");
    let rows = stats::age_pyramid(records);
    let max = rows
        .iter()
        .map(|row| row.male.len().max(row.female.len()))
        .max()
        .unwrap_or(0);
    for row in rows.iter().rev() {
        output::info(format!(
            "  {:>width$} {:^7} {}",
            bar(row.male.len(), max),
            row.group,
            bar(row.female.len(), max),
            width = BAR_WIDTH
        ));
    }
}

pub fn print_compatibility(records: &[DerivedBirthday]) {
    output::section("Compatibility");
    let matrix = stats::compatibility_matrix(records);
    let mut columns = vec![TableColumn::left("").max_width(12)];
    columns.extend(
        matrix
            .names
            .iter()
            .map(|name| TableColumn::right(initials(name))),
    );
    let mut table = Table::new(columns);
    for (name, scores) in matrix.names.iter().zip(&matrix.scores) {
        let mut row = vec![name.clone()];
        row.extend(scores.iter().map(u8::to_string));
        table.push_row(row);
    }
    output::info(table.render());
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derive::build;
    use crate::roster::{Category, RawBirthRecord};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn long_date_uses_localized_months() {
        assert_eq!(long_date(Locale::En, day(1990, 3, 12)), "12 March 1990");
        assert_eq!(long_date(Locale::Fr, day(1990, 3, 12)), "12 mars 1990");
    }

    #[test]
    fn table_has_a_row_per_record() {
        let records = build(
            &[
                RawBirthRecord::new("Ada", day(1990, 3, 12), Category::Female),
                RawBirthRecord::new("Bob", day(1985, 7, 30), Category::Male),
            ],
            day(2024, 3, 1),
        )
        .unwrap();
        let table = records_table(Locale::En, &records);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0][1], "Ada");
        assert_eq!(table.rows[0][4], "in 11 days");
        assert!(table.render().contains("Pisces"));
    }

    #[test]
    fn bars_scale_to_the_maximum() {
        assert_eq!(bar(0, 0), "");
        assert_eq!(bar(4, 4).chars().count(), BAR_WIDTH);
        assert_eq!(bar(1, 4).chars().count(), BAR_WIDTH / 4);
    }

    #[test]
    fn initials_take_first_letters() {
        assert_eq!(initials("Ada Lovelace"), "AL");
    }
}
