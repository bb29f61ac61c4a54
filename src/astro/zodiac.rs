use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Astrological element; only the compatibility scorer consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub const ALL: [Element; 4] = [Element::Fire, Element::Earth, Element::Air, Element::Water];

    pub fn key(self) -> &'static str {
        match self {
            Element::Fire => "fire",
            Element::Earth => "earth",
            Element::Air => "air",
            Element::Water => "water",
        }
    }

    /// Elements sharing the 100-point complementary pairing, itself included.
    pub fn affinities(self) -> [Element; 2] {
        match self {
            Element::Fire | Element::Air => [Element::Fire, Element::Air],
            Element::Earth | Element::Water => [Element::Earth, Element::Water],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// Start points encoded as `month * 100 + day`, scanned from the end of the year.
const SIGN_STARTS: [(u32, ZodiacSign); 13] = [
    (1222, ZodiacSign::Capricorn),
    (1122, ZodiacSign::Sagittarius),
    (1023, ZodiacSign::Scorpio),
    (923, ZodiacSign::Libra),
    (823, ZodiacSign::Virgo),
    (723, ZodiacSign::Leo),
    (622, ZodiacSign::Cancer),
    (521, ZodiacSign::Gemini),
    (420, ZodiacSign::Taurus),
    (321, ZodiacSign::Aries),
    (219, ZodiacSign::Pisces),
    (120, ZodiacSign::Aquarius),
    (101, ZodiacSign::Capricorn),
];

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "aries",
            ZodiacSign::Taurus => "taurus",
            ZodiacSign::Gemini => "gemini",
            ZodiacSign::Cancer => "cancer",
            ZodiacSign::Leo => "leo",
            ZodiacSign::Virgo => "virgo",
            ZodiacSign::Libra => "libra",
            ZodiacSign::Scorpio => "scorpio",
            ZodiacSign::Sagittarius => "sagittarius",
            ZodiacSign::Capricorn => "capricorn",
            ZodiacSign::Aquarius => "aquarius",
            ZodiacSign::Pisces => "pisces",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "♈",
            ZodiacSign::Taurus => "♉",
            ZodiacSign::Gemini => "♊",
            ZodiacSign::Cancer => "♋",
            ZodiacSign::Leo => "♌",
            ZodiacSign::Virgo => "♍",
            ZodiacSign::Libra => "♎",
            ZodiacSign::Scorpio => "♏",
            ZodiacSign::Sagittarius => "♐",
            ZodiacSign::Capricorn => "♑",
            ZodiacSign::Aquarius => "♒",
            ZodiacSign::Pisces => "♓",
        }
    }

    pub fn element(self) -> Element {
        match self {
            ZodiacSign::Aries | ZodiacSign::Leo | ZodiacSign::Sagittarius => Element::Fire,
            ZodiacSign::Taurus | ZodiacSign::Virgo | ZodiacSign::Capricorn => Element::Earth,
            ZodiacSign::Gemini | ZodiacSign::Libra | ZodiacSign::Aquarius => Element::Air,
            ZodiacSign::Cancer | ZodiacSign::Scorpio | ZodiacSign::Pisces => Element::Water,
        }
    }
}

/// Western zodiac sign for the day and month of `date`.
pub fn zodiac_sign(date: NaiveDate) -> ZodiacSign {
    let point = date.month() * 100 + date.day();
    SIGN_STARTS
        .iter()
        .find(|(start, _)| *start <= point)
        .map(|(_, sign)| *sign)
        // Every point is >= 101, so the table always matches.
        .unwrap_or(ZodiacSign::Capricorn)
}

/// Birthstone of a month. Months with several traditional stones use the first one listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Birthstone {
    Garnet,
    Amethyst,
    Aquamarine,
    Diamond,
    Emerald,
    Alexandrite,
    Ruby,
    Peridot,
    Sapphire,
    Opal,
    Citrine,
    Tanzanite,
}

const STONES_BY_MONTH: [Birthstone; 12] = [
    Birthstone::Garnet,
    Birthstone::Amethyst,
    Birthstone::Aquamarine,
    Birthstone::Diamond,
    Birthstone::Emerald,
    Birthstone::Alexandrite,
    Birthstone::Ruby,
    Birthstone::Peridot,
    Birthstone::Sapphire,
    Birthstone::Opal,
    Birthstone::Citrine,
    Birthstone::Tanzanite,
];

impl Birthstone {
    pub fn key(self) -> &'static str {
        match self {
            Birthstone::Garnet => "garnet",
            Birthstone::Amethyst => "amethyst",
            Birthstone::Aquamarine => "aquamarine",
            Birthstone::Diamond => "diamond",
            Birthstone::Emerald => "emerald",
            Birthstone::Alexandrite => "alexandrite",
            Birthstone::Ruby => "ruby",
            Birthstone::Peridot => "peridot",
            Birthstone::Sapphire => "sapphire",
            Birthstone::Opal => "opal",
            Birthstone::Citrine => "citrine",
            Birthstone::Tanzanite => "tanzanite",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Birthstone::Garnet | Birthstone::Ruby => "🔴",
            Birthstone::Amethyst | Birthstone::Alexandrite => "🟣",
            Birthstone::Aquamarine | Birthstone::Sapphire | Birthstone::Tanzanite => "🔵",
            Birthstone::Diamond => "💎",
            Birthstone::Emerald | Birthstone::Peridot => "🟢",
            Birthstone::Opal => "⚪",
            Birthstone::Citrine => "🟡",
        }
    }
}

pub fn birthstone(date: NaiveDate) -> Birthstone {
    STONES_BY_MONTH[date.month0() as usize]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChineseZodiac {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

impl ChineseZodiac {
    pub const ALL: [ChineseZodiac; 12] = [
        ChineseZodiac::Rat,
        ChineseZodiac::Ox,
        ChineseZodiac::Tiger,
        ChineseZodiac::Rabbit,
        ChineseZodiac::Dragon,
        ChineseZodiac::Snake,
        ChineseZodiac::Horse,
        ChineseZodiac::Goat,
        ChineseZodiac::Monkey,
        ChineseZodiac::Rooster,
        ChineseZodiac::Dog,
        ChineseZodiac::Pig,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ChineseZodiac::Rat => "rat",
            ChineseZodiac::Ox => "ox",
            ChineseZodiac::Tiger => "tiger",
            ChineseZodiac::Rabbit => "rabbit",
            ChineseZodiac::Dragon => "dragon",
            ChineseZodiac::Snake => "snake",
            ChineseZodiac::Horse => "horse",
            ChineseZodiac::Goat => "goat",
            ChineseZodiac::Monkey => "monkey",
            ChineseZodiac::Rooster => "rooster",
            ChineseZodiac::Dog => "dog",
            ChineseZodiac::Pig => "pig",
        }
    }
}

/// Animal of the Gregorian `year`; the lunar new year boundary is ignored.
pub fn chinese_zodiac(year: i32) -> ChineseZodiac {
    ChineseZodiac::ALL[(year - 4).rem_euclid(12) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn capricorn_wraps_the_year_boundary() {
        assert_eq!(zodiac_sign(date(2023, 12, 22)), ZodiacSign::Capricorn);
        assert_eq!(zodiac_sign(date(2023, 12, 31)), ZodiacSign::Capricorn);
        assert_eq!(zodiac_sign(date(2024, 1, 1)), ZodiacSign::Capricorn);
        assert_eq!(zodiac_sign(date(2024, 1, 19)), ZodiacSign::Capricorn);
        assert_eq!(zodiac_sign(date(2024, 1, 20)), ZodiacSign::Aquarius);
        assert_eq!(zodiac_sign(date(2023, 12, 21)), ZodiacSign::Sagittarius);
    }

    #[test]
    fn boundaries_match_reference_table() {
        let cases = [
            ((2, 18), ZodiacSign::Aquarius),
            ((2, 19), ZodiacSign::Pisces),
            ((3, 20), ZodiacSign::Pisces),
            ((3, 21), ZodiacSign::Aries),
            ((4, 20), ZodiacSign::Taurus),
            ((5, 21), ZodiacSign::Gemini),
            ((6, 22), ZodiacSign::Cancer),
            ((7, 23), ZodiacSign::Leo),
            ((8, 23), ZodiacSign::Virgo),
            ((9, 23), ZodiacSign::Libra),
            ((10, 23), ZodiacSign::Scorpio),
            ((11, 22), ZodiacSign::Sagittarius),
        ];
        for ((m, d), expected) in cases {
            assert_eq!(zodiac_sign(date(2024, m, d)), expected, "{m}-{d}");
        }
    }

    #[test]
    fn every_day_of_a_leap_year_maps_to_one_of_twelve_signs_contiguously() {
        let mut day = date(2024, 1, 1);
        let mut transitions = 0;
        let mut previous = zodiac_sign(day);
        let mut seen = std::collections::HashSet::new();
        while day.year() == 2024 {
            let sign = zodiac_sign(day);
            seen.insert(sign);
            if sign != previous {
                transitions += 1;
                previous = sign;
            }
            day += Duration::days(1);
        }
        assert_eq!(seen.len(), 12);
        // Twelve changes: eleven inside the year plus capricorn resuming in December.
        assert_eq!(transitions, 12);
    }

    #[test]
    fn elements_cover_three_signs_each() {
        for element in Element::ALL {
            let count = ZodiacSign::ALL
                .iter()
                .filter(|sign| sign.element() == element)
                .count();
            assert_eq!(count, 3);
        }
    }

    #[test]
    fn birthstone_follows_birth_month() {
        assert_eq!(birthstone(date(1990, 3, 12)), Birthstone::Aquamarine);
        assert_eq!(birthstone(date(1990, 6, 1)), Birthstone::Alexandrite);
        assert_eq!(birthstone(date(1990, 12, 31)), Birthstone::Tanzanite);
    }

    #[test]
    fn chinese_zodiac_cycles_every_twelve_years() {
        assert_eq!(chinese_zodiac(2020), ChineseZodiac::Rat);
        assert_eq!(chinese_zodiac(2024), ChineseZodiac::Dragon);
        assert_eq!(chinese_zodiac(1990), ChineseZodiac::Horse);
        assert_eq!(chinese_zodiac(1), ChineseZodiac::Rooster);
    }
}
