use chrono::Month;

use super::Text;
use crate::astro::{Birthstone, ChineseZodiac, Element, MoonPhase, ZodiacSign};
use crate::derive::facts::INSIGHT_COUNT;
use crate::derive::{AgeGroup, Generation, LifePath, Planet, Season, WeddingMaterial};
use crate::roster::Category;

pub(super) const INSIGHTS: [&str; INSIGHT_COUNT] = [
    "A small kindness today will come back twice.",
    "Someone is thinking about you right now.",
    "Good news travels by the shortest road.",
    "Today favors long conversations.",
    "An old friend is worth a message.",
    "Patience turns into luck this afternoon.",
    "Try the dish you never order.",
    "A walk outside will settle a question.",
    "Your laugh is contagious today.",
    "Finish one thing before starting two.",
    "The stars suggest cake. Always cake.",
    "A forgotten idea deserves a second look.",
    "Say yes to the unexpected invitation.",
    "Quiet evenings recharge bright mornings.",
    "Another year wiser, and it shows.",
];

pub(super) fn life_path_meaning(path: LifePath) -> &'static str {
    match path {
        LifePath::One => "The leader: independent and pioneering.",
        LifePath::Two => "The peacemaker: diplomatic and gentle.",
        LifePath::Three => "The communicator: creative and expressive.",
        LifePath::Four => "The builder: practical and steady.",
        LifePath::Five => "The adventurer: curious and free.",
        LifePath::Six => "The nurturer: caring and responsible.",
        LifePath::Seven => "The seeker: thoughtful and intuitive.",
        LifePath::Eight => "The achiever: ambitious and capable.",
        LifePath::Nine => "The humanitarian: generous and wise.",
        LifePath::Eleven => "Master number 11: the visionary.",
        LifePath::TwentyTwo => "Master number 22: the master builder.",
        LifePath::ThirtyThree => "Master number 33: the master teacher.",
    }
}

pub(super) fn text(key: Text) -> &'static str {
    match key {
        Text::Sign(sign) => match sign {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        },
        Text::Element(element) => match element {
            Element::Fire => "Fire",
            Element::Earth => "Earth",
            Element::Air => "Air",
            Element::Water => "Water",
        },
        Text::Stone(stone) => match stone {
            Birthstone::Garnet => "Garnet",
            Birthstone::Amethyst => "Amethyst",
            Birthstone::Aquamarine => "Aquamarine",
            Birthstone::Diamond => "Diamond",
            Birthstone::Emerald => "Emerald",
            Birthstone::Alexandrite => "Alexandrite",
            Birthstone::Ruby => "Ruby",
            Birthstone::Peridot => "Peridot",
            Birthstone::Sapphire => "Sapphire",
            Birthstone::Opal => "Opal",
            Birthstone::Citrine => "Citrine",
            Birthstone::Tanzanite => "Tanzanite",
        },
        Text::Chinese(animal) => match animal {
            ChineseZodiac::Rat => "Rat",
            ChineseZodiac::Ox => "Ox",
            ChineseZodiac::Tiger => "Tiger",
            ChineseZodiac::Rabbit => "Rabbit",
            ChineseZodiac::Dragon => "Dragon",
            ChineseZodiac::Snake => "Snake",
            ChineseZodiac::Horse => "Horse",
            ChineseZodiac::Goat => "Goat",
            ChineseZodiac::Monkey => "Monkey",
            ChineseZodiac::Rooster => "Rooster",
            ChineseZodiac::Dog => "Dog",
            ChineseZodiac::Pig => "Pig",
        },
        Text::Moon(phase) => match phase {
            MoonPhase::New => "New moon",
            MoonPhase::WaxingCrescent => "Waxing crescent",
            MoonPhase::FirstQuarter => "First quarter",
            MoonPhase::WaxingGibbous => "Waxing gibbous",
            MoonPhase::Full => "Full moon",
            MoonPhase::WaningGibbous => "Waning gibbous",
            MoonPhase::LastQuarter => "Last quarter",
            MoonPhase::WaningCrescent => "Waning crescent",
        },
        Text::Generation(generation) => match generation {
            Generation::Greatest => "Greatest Generation",
            Generation::Silent => "Silent Generation",
            Generation::Boomers => "Baby Boomers",
            Generation::GenX => "Generation X",
            Generation::Millennials => "Millennials",
            Generation::GenZ => "Generation Z",
            Generation::GenAlpha => "Generation Alpha",
        },
        Text::Season(season) => match season {
            Season::Winter => "Winter",
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
        },
        Text::AgeGroup(group) => match group {
            AgeGroup::Baby => "Baby",
            AgeGroup::Child => "Child",
            AgeGroup::Teen => "Teen",
            AgeGroup::Adult => "Adult",
            AgeGroup::Senior => "Senior",
        },
        Text::Month(month) => match month {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        },
        Text::Category(category) => match category {
            Category::Male => "Boy",
            Category::Female => "Girl",
            Category::Anniversary => "Wedding",
        },
        Text::Wedding(material) => match material {
            WeddingMaterial::Paper => "paper",
            WeddingMaterial::Wood => "wood",
            WeddingMaterial::Tin => "tin",
            WeddingMaterial::Crystal => "crystal",
            WeddingMaterial::China => "china",
            WeddingMaterial::Silver => "silver",
            WeddingMaterial::Pearl => "pearl",
            WeddingMaterial::Ruby => "ruby",
            WeddingMaterial::Gold => "gold",
            WeddingMaterial::Diamond => "diamond",
        },
        Text::LifePath(path) => match path {
            LifePath::Eleven | LifePath::TwentyTwo | LifePath::ThirtyThree => "Master number",
            _ => "Life path",
        },
        Text::Planet(planet) => match planet {
            Planet::Mercury => "Mercury",
            Planet::Venus => "Venus",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturn",
        },
        Text::AppTitle => "Birthdays",
        Text::Today => "today",
        Text::Tomorrow => "tomorrow",
        Text::InDays => "in {days} days",
        Text::NoResults => "No birthdays match the current filters.",
        Text::ColumnName => "Name",
        Text::ColumnDate => "Date",
        Text::ColumnAge => "Age",
        Text::ColumnCountdown => "Next",
        Text::ColumnSign => "Sign",
        Text::ColumnStone => "Stone",
        Text::ColumnMilestone => "Milestone",
        Text::MilestoneTurning => "Turning {n}!",
        Text::MilestoneTurned => "Just turned {n}",
        Text::MilestoneAnniversaryUpcoming => "{n} years ({material}) coming up",
        Text::MilestoneAnniversaryReached => "{n} years ({material}) celebrated",
        Text::NotifyTodayTitle => "🎂 Birthday today!",
        Text::NotifyTodayBody => "Today: {names}",
        Text::NotifyUpcomingTitle => "🎈 Birthday tomorrow",
        Text::NotifyUpcomingBody => "Tomorrow: {names}",
        Text::NotifyBothBody => " | Tomorrow: {names}",
        Text::NoEvents => "No historical events available.",
        Text::NoWeather => "Weather unavailable.",
    }
}
