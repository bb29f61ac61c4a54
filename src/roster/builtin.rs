use chrono::NaiveDate;

use super::{Category, RawBirthRecord};

const ROSTER: &[(&str, i32, u32, u32, Category)] = &[
    ("Ariimoana", 2013, 7, 11, Category::Male),
    ("Brigitte", 1982, 3, 12, Category::Female),
    ("Cécile", 1977, 10, 5, Category::Female),
    ("Charles", 1992, 8, 13, Category::Male),
    ("Christian", 1951, 5, 8, Category::Male),
    ("Christian", 1975, 10, 23, Category::Male),
    ("Christopher", 1982, 2, 12, Category::Male),
    ("Dorothée", 1951, 3, 9, Category::Female),
    ("Edouard", 2014, 5, 16, Category::Male),
    ("Elena", 2016, 7, 30, Category::Female),
    ("Georges", 2017, 4, 3, Category::Male),
    ("Julien", 1970, 11, 27, Category::Male),
    ("Justin", 2007, 6, 18, Category::Male),
    ("Lucia", 2014, 12, 17, Category::Female),
    ("Marie", 1945, 9, 1, Category::Female),
    ("Martin", 1973, 1, 4, Category::Male),
    ("Maximin", 1978, 10, 4, Category::Male),
    ("Moanaragi", 2018, 4, 11, Category::Female),
    ("Nadia", 1979, 2, 5, Category::Female),
    ("Nicolas", 2019, 1, 30, Category::Male),
    ("Ravahere", 1982, 6, 8, Category::Female),
    ("Sandra", 1977, 4, 13, Category::Female),
    ("Simon", 2005, 3, 24, Category::Male),
    ("Sophie", 1997, 10, 11, Category::Female),
    ("Vadim", 2014, 4, 15, Category::Male),
    ("Vaimoana", 2005, 4, 13, Category::Female),
    ("Victor", 2008, 7, 21, Category::Male),
    ("Brigitte & Julien", 2016, 2, 19, Category::Anniversary),
    ("Cécile & Christian", 2005, 2, 26, Category::Anniversary),
    ("Dorothée & Christian", 1977, 3, 25, Category::Anniversary),
    ("Nadia & Christopher", 2010, 9, 4, Category::Anniversary),
    ("Ravahere & Martin", 2005, 3, 26, Category::Anniversary),
    ("Sandra & Maximin", 2014, 10, 3, Category::Anniversary),
];

/// The roster shipped with the crate, used when no roster file is configured.
pub fn builtin_roster() -> Vec<RawBirthRecord> {
    ROSTER
        .iter()
        .filter_map(|(name, year, month, day, category)| {
            NaiveDate::from_ymd_opt(*year, *month, *day)
                .map(|date| RawBirthRecord::new(*name, date, *category))
        })
        .collect()
}
