use serde::{Deserialize, Serialize};

use crate::i18n::{self, Locale};
use crate::roster::Category;

/// Birthday ages worth a special label.
pub const PEOPLE_MILESTONES: [u32; 20] = [
    1, 5, 10, 13, 15, 16, 18, 21, 25, 30, 40, 50, 60, 70, 75, 80, 85, 90, 95, 100,
];

/// Wedding anniversaries and their traditional gift material.
pub const ANNIVERSARY_MILESTONES: [(u32, WeddingMaterial); 10] = [
    (1, WeddingMaterial::Paper),
    (5, WeddingMaterial::Wood),
    (10, WeddingMaterial::Tin),
    (15, WeddingMaterial::Crystal),
    (20, WeddingMaterial::China),
    (25, WeddingMaterial::Silver),
    (30, WeddingMaterial::Pearl),
    (40, WeddingMaterial::Ruby),
    (50, WeddingMaterial::Gold),
    (60, WeddingMaterial::Diamond),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeddingMaterial {
    Paper,
    Wood,
    Tin,
    Crystal,
    China,
    Silver,
    Pearl,
    Ruby,
    Gold,
    Diamond,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MilestoneStatus {
    /// The threshold is the age reached at the next occurrence (or today).
    Upcoming,
    /// The threshold was reached at the last occurrence.
    Reached,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub threshold: u32,
    pub status: MilestoneStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<WeddingMaterial>,
}

impl Milestone {
    pub fn label(&self, locale: Locale) -> String {
        i18n::milestone_label(locale, self)
    }
}

fn threshold_for(category: Category, years: u32) -> Option<(u32, Option<WeddingMaterial>)> {
    if category.is_person() {
        PEOPLE_MILESTONES.contains(&years).then_some((years, None))
    } else {
        ANNIVERSARY_MILESTONES
            .iter()
            .find(|(threshold, _)| *threshold == years)
            .map(|(threshold, material)| (*threshold, Some(*material)))
    }
}

/// Checks the upcoming age first, then the current one.
pub fn detect(category: Category, age: u32, upcoming_age: u32) -> Option<Milestone> {
    if let Some((threshold, material)) = threshold_for(category, upcoming_age) {
        return Some(Milestone {
            threshold,
            status: MilestoneStatus::Upcoming,
            material,
        });
    }
    threshold_for(category, age).map(|(threshold, material)| Milestone {
        threshold,
        status: MilestoneStatus::Reached,
        material,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eighteen_year_old_has_milestone() {
        let milestone = detect(Category::Female, 18, 19).expect("milestone");
        assert_eq!(milestone.threshold, 18);
        assert_eq!(milestone.status, MilestoneStatus::Reached);
    }

    #[test]
    fn nineteen_year_old_has_none() {
        assert_eq!(detect(Category::Male, 19, 20), None);
    }

    #[test]
    fn upcoming_wins_over_reached() {
        let milestone = detect(Category::Male, 15, 16).expect("milestone");
        assert_eq!(milestone.threshold, 16);
        assert_eq!(milestone.status, MilestoneStatus::Upcoming);
    }

    #[test]
    fn anniversary_carries_material() {
        let milestone = detect(Category::Anniversary, 24, 25).expect("milestone");
        assert_eq!(milestone.material, Some(WeddingMaterial::Silver));
        assert_eq!(detect(Category::Anniversary, 12, 13), None);
        // 13 is a people-only threshold.
        assert_eq!(detect(Category::Anniversary, 13, 13), None);
    }
}
