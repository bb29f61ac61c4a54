//! Pure lookups over calendar dates: moon phase, Western and Chinese zodiac,
//! birthstones, and element-based compatibility.

pub mod compatibility;
pub mod moon;
pub mod zodiac;

pub use compatibility::compatibility;
pub use moon::{moon_phase, MoonPhase};
pub use zodiac::{birthstone, chinese_zodiac, zodiac_sign, Birthstone, ChineseZodiac, Element, ZodiacSign};
