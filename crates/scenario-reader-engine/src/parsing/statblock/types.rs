use serde::Serialize;

use super::markers;

/// A labelled value. Values stay strings so ranges and dice keep their notation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

impl Stat {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Whether this derived stat is hit points rather than movement.
    pub fn is_hit_points(&self) -> bool {
        self.label.contains(markers::HIT_POINTS)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Weapon {
    pub name: String,
    /// Remaining tokens of the weapon line, single-space separated.
    pub stats: String,
}

/// Structured view of one stat block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatBlock {
    /// First non-empty line; empty for a blank record.
    pub title: String,
    /// Creature or other-worldly entity rather than an ordinary subject.
    pub is_mythos: bool,
    pub core_stats: Vec<Stat>,
    /// Hit points and movement.
    pub derived_stats: Vec<Stat>,
    pub damage_bonus: Option<String>,
    pub weapons: Vec<Weapon>,
    /// Flat skill tokens, e.g. `侦查50%`, in record order with duplicates kept.
    pub skills: Vec<String>,
    pub armor: Option<String>,
    pub sanity_loss: Option<String>,
    /// `＊`-bulleted lines, bullet retained.
    pub special_abilities: Vec<String>,
    pub general_notes: Vec<String>,
}

impl StatBlock {
    /// True when nothing beyond the title was recognized.
    pub fn is_sparse(&self) -> bool {
        self.core_stats.is_empty()
            && self.derived_stats.is_empty()
            && self.damage_bonus.is_none()
            && self.weapons.is_empty()
            && self.skills.is_empty()
            && self.armor.is_none()
            && self.sanity_loss.is_none()
            && self.special_abilities.is_empty()
            && self.general_notes.is_empty()
    }
}
