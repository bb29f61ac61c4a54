use super::zodiac::Element;

pub const SAME_PERSON_SCORE: u8 = 100;
pub const SAME_ELEMENT_SCORE: u8 = 80;
pub const COMPLEMENTARY_SCORE: u8 = 100;
pub const NEUTRAL_SCORE: u8 = 50;
pub const CHALLENGING_SCORE: u8 = 40;

/// Anything that can be scored for astrological compatibility.
pub trait Astrological {
    fn name(&self) -> &str;
    fn element(&self) -> Element;
}

/// Scores the match between two entries on a 0..=100 scale.
///
/// Rules apply in order: same name, same element, complementary pair
/// (fire/air, earth/water), neutral pair (fire/earth, air/water), anything else.
pub fn compatibility<A, B>(a: &A, b: &B) -> u8
where
    A: Astrological + ?Sized,
    B: Astrological + ?Sized,
{
    if a.name() == b.name() {
        return SAME_PERSON_SCORE;
    }
    element_score(a.element(), b.element())
}

/// Score for two distinct entries with the given elements. Symmetric.
pub fn element_score(a: Element, b: Element) -> u8 {
    use Element::*;

    if a == b {
        return SAME_ELEMENT_SCORE;
    }
    match (a, b) {
        (Fire, Air) | (Air, Fire) | (Earth, Water) | (Water, Earth) => COMPLEMENTARY_SCORE,
        (Fire, Earth) | (Earth, Fire) | (Air, Water) | (Water, Air) => NEUTRAL_SCORE,
        _ => CHALLENGING_SCORE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Entry(&'static str, Element);

    impl Astrological for Entry {
        fn name(&self) -> &str {
            self.0
        }

        fn element(&self) -> Element {
            self.1
        }
    }

    #[test]
    fn identical_entry_scores_full() {
        let a = Entry("Ada", Element::Water);
        assert_eq!(compatibility(&a, &a), 100);
    }

    #[test]
    fn pairing_rules() {
        let fire = Entry("A", Element::Fire);
        let air = Entry("B", Element::Air);
        let earth = Entry("C", Element::Earth);
        let water = Entry("D", Element::Water);
        let fire_two = Entry("E", Element::Fire);

        assert_eq!(compatibility(&fire, &fire_two), 80);
        assert_eq!(compatibility(&fire, &air), 100);
        assert_eq!(compatibility(&earth, &water), 100);
        assert_eq!(compatibility(&fire, &earth), 50);
        assert_eq!(compatibility(&air, &water), 50);
        assert_eq!(compatibility(&fire, &water), 40);
        assert_eq!(compatibility(&air, &earth), 40);
    }

    #[test]
    fn symmetric_for_distinct_names() {
        for a in Element::ALL {
            for b in Element::ALL {
                assert_eq!(element_score(a, b), element_score(b, a));
                let left = Entry("left", a);
                let right = Entry("right", b);
                assert_eq!(compatibility(&left, &right), compatibility(&right, &left));
            }
        }
    }
}
