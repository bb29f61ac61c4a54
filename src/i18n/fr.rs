use chrono::Month;

use super::Text;
use crate::astro::{Birthstone, ChineseZodiac, Element, MoonPhase, ZodiacSign};
use crate::derive::facts::INSIGHT_COUNT;
use crate::derive::{AgeGroup, Generation, LifePath, Planet, Season, WeddingMaterial};
use crate::roster::Category;

pub(super) const INSIGHTS: [&str; INSIGHT_COUNT] = [
    "Une petite gentillesse aujourd'hui vous reviendra au double.",
    "Quelqu'un pense à vous en ce moment.",
    "Les bonnes nouvelles prennent le chemin le plus court.",
    "La journée se prête aux longues conversations.",
    "Un vieil ami mérite un message.",
    "La patience se changera en chance cet après-midi.",
    "Goûtez le plat que vous ne commandez jamais.",
    "Une promenade tranchera une question.",
    "Votre rire est contagieux aujourd'hui.",
    "Terminez une chose avant d'en commencer deux.",
    "Les astres conseillent du gâteau. Toujours du gâteau.",
    "Une idée oubliée mérite un second regard.",
    "Acceptez l'invitation inattendue.",
    "Les soirées calmes préparent les matins lumineux.",
    "Une année de plus, une sagesse de plus.",
];

pub(super) fn life_path_meaning(path: LifePath) -> &'static str {
    match path {
        LifePath::One => "Le meneur : indépendant et pionnier.",
        LifePath::Two => "Le médiateur : diplomate et doux.",
        LifePath::Three => "Le communicant : créatif et expressif.",
        LifePath::Four => "Le bâtisseur : pratique et constant.",
        LifePath::Five => "L'aventurier : curieux et libre.",
        LifePath::Six => "Le protecteur : attentionné et responsable.",
        LifePath::Seven => "Le chercheur : réfléchi et intuitif.",
        LifePath::Eight => "Le bâtisseur d'empire : ambitieux et capable.",
        LifePath::Nine => "L'humaniste : généreux et sage.",
        LifePath::Eleven => "Nombre maître 11 : le visionnaire.",
        LifePath::TwentyTwo => "Nombre maître 22 : le grand bâtisseur.",
        LifePath::ThirtyThree => "Nombre maître 33 : le grand enseignant.",
    }
}

pub(super) fn text(key: Text) -> &'static str {
    match key {
        Text::Sign(sign) => match sign {
            ZodiacSign::Aries => "Bélier",
            ZodiacSign::Taurus => "Taureau",
            ZodiacSign::Gemini => "Gémeaux",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Lion",
            ZodiacSign::Virgo => "Vierge",
            ZodiacSign::Libra => "Balance",
            ZodiacSign::Scorpio => "Scorpion",
            ZodiacSign::Sagittarius => "Sagittaire",
            ZodiacSign::Capricorn => "Capricorne",
            ZodiacSign::Aquarius => "Verseau",
            ZodiacSign::Pisces => "Poissons",
        },
        Text::Element(element) => match element {
            Element::Fire => "Feu",
            Element::Earth => "Terre",
            Element::Air => "Air",
            Element::Water => "Eau",
        },
        Text::Stone(stone) => match stone {
            Birthstone::Garnet => "Grenat",
            Birthstone::Amethyst => "Améthyste",
            Birthstone::Aquamarine => "Aigue-marine",
            Birthstone::Diamond => "Diamant",
            Birthstone::Emerald => "Émeraude",
            Birthstone::Alexandrite => "Alexandrite",
            Birthstone::Ruby => "Rubis",
            Birthstone::Peridot => "Péridot",
            Birthstone::Sapphire => "Saphir",
            Birthstone::Opal => "Opale",
            Birthstone::Citrine => "Citrine",
            Birthstone::Tanzanite => "Tanzanite",
        },
        Text::Chinese(animal) => match animal {
            ChineseZodiac::Rat => "Rat",
            ChineseZodiac::Ox => "Buffle",
            ChineseZodiac::Tiger => "Tigre",
            ChineseZodiac::Rabbit => "Lapin",
            ChineseZodiac::Dragon => "Dragon",
            ChineseZodiac::Snake => "Serpent",
            ChineseZodiac::Horse => "Cheval",
            ChineseZodiac::Goat => "Chèvre",
            ChineseZodiac::Monkey => "Singe",
            ChineseZodiac::Rooster => "Coq",
            ChineseZodiac::Dog => "Chien",
            ChineseZodiac::Pig => "Cochon",
        },
        Text::Moon(phase) => match phase {
            MoonPhase::New => "Nouvelle lune",
            MoonPhase::WaxingCrescent => "Premier croissant",
            MoonPhase::FirstQuarter => "Premier quartier",
            MoonPhase::WaxingGibbous => "Gibbeuse croissante",
            MoonPhase::Full => "Pleine lune",
            MoonPhase::WaningGibbous => "Gibbeuse décroissante",
            MoonPhase::LastQuarter => "Dernier quartier",
            MoonPhase::WaningCrescent => "Dernier croissant",
        },
        Text::Generation(generation) => match generation {
            Generation::Greatest => "Grande génération",
            Generation::Silent => "Génération silencieuse",
            Generation::Boomers => "Baby-boomers",
            Generation::GenX => "Génération X",
            Generation::Millennials => "Milléniaux",
            Generation::GenZ => "Génération Z",
            Generation::GenAlpha => "Génération Alpha",
        },
        Text::Season(season) => match season {
            Season::Winter => "Hiver",
            Season::Spring => "Printemps",
            Season::Summer => "Été",
            Season::Autumn => "Automne",
        },
        Text::AgeGroup(group) => match group {
            AgeGroup::Baby => "Bébé",
            AgeGroup::Child => "Enfant",
            AgeGroup::Teen => "Ado",
            AgeGroup::Adult => "Adulte",
            AgeGroup::Senior => "Senior",
        },
        Text::Month(month) => match month {
            Month::January => "janvier",
            Month::February => "février",
            Month::March => "mars",
            Month::April => "avril",
            Month::May => "mai",
            Month::June => "juin",
            Month::July => "juillet",
            Month::August => "août",
            Month::September => "septembre",
            Month::October => "octobre",
            Month::November => "novembre",
            Month::December => "décembre",
        },
        Text::Category(category) => match category {
            Category::Male => "Garçon",
            Category::Female => "Fille",
            Category::Anniversary => "Mariage",
        },
        // Carries the elided preposition so templates read "Noces {material}".
        Text::Wedding(material) => match material {
            WeddingMaterial::Paper => "de papier",
            WeddingMaterial::Wood => "de bois",
            WeddingMaterial::Tin => "d'étain",
            WeddingMaterial::Crystal => "de cristal",
            WeddingMaterial::China => "de porcelaine",
            WeddingMaterial::Silver => "d'argent",
            WeddingMaterial::Pearl => "de perle",
            WeddingMaterial::Ruby => "de rubis",
            WeddingMaterial::Gold => "d'or",
            WeddingMaterial::Diamond => "de diamant",
        },
        Text::LifePath(path) => match path {
            LifePath::Eleven | LifePath::TwentyTwo | LifePath::ThirtyThree => "Nombre maître",
            _ => "Chemin de vie",
        },
        Text::Planet(planet) => match planet {
            Planet::Mercury => "Mercure",
            Planet::Venus => "Vénus",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturne",
        },
        Text::AppTitle => "Anniversaires",
        Text::Today => "aujourd'hui",
        Text::Tomorrow => "demain",
        Text::InDays => "dans {days} jours",
        Text::NoResults => "Aucun anniversaire ne correspond aux filtres.",
        Text::ColumnName => "Nom",
        Text::ColumnDate => "Date",
        Text::ColumnAge => "Âge",
        Text::ColumnCountdown => "Prochain",
        Text::ColumnSign => "Signe",
        Text::ColumnStone => "Pierre",
        Text::ColumnMilestone => "Étape",
        Text::MilestoneTurning => "Bientôt {n} ans !",
        Text::MilestoneTurned => "Vient d'avoir {n} ans",
        Text::MilestoneAnniversaryUpcoming => "Noces {material} ({n} ans) à venir",
        Text::MilestoneAnniversaryReached => "Noces {material} ({n} ans) fêtées",
        Text::NotifyTodayTitle => "🎂 Anniversaire aujourd'hui !",
        Text::NotifyTodayBody => "Aujourd'hui : {names}",
        Text::NotifyUpcomingTitle => "🎈 Anniversaire demain",
        Text::NotifyUpcomingBody => "Demain : {names}",
        Text::NotifyBothBody => " | Demain : {names}",
        Text::NoEvents => "Aucun événement historique disponible.",
        Text::NoWeather => "Météo indisponible.",
    }
}
