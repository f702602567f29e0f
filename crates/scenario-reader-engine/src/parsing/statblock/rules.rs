/// A field extracted from stat block lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    CoreStats,
    DerivedStats,
    DamageBonus,
    Weapon,
    Skill,
    Armor,
    SanityLoss,
    SpecialAbility,
}

/// How many matching lines a rule extracts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// Only the first matching line.
    First,
    /// Every matching line, in record order.
    Every,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub kind: RuleKind,
    pub cardinality: Cardinality,
}

impl Rule {
    const fn first(kind: RuleKind) -> Self {
        Self {
            kind,
            cardinality: Cardinality::First,
        }
    }

    const fn every(kind: RuleKind) -> Self {
        Self {
            kind,
            cardinality: Cardinality::Every,
        }
    }
}

/// Extraction rules. Rules are independent: every rule whose predicate
/// matches a line gets to extract from it, and a line matched by any rule
/// is never a general note.
pub const RULES: [Rule; 8] = [
    Rule::first(RuleKind::CoreStats),
    Rule::first(RuleKind::DerivedStats),
    Rule::first(RuleKind::DamageBonus),
    Rule::every(RuleKind::Weapon),
    Rule::every(RuleKind::Skill),
    Rule::first(RuleKind::Armor),
    Rule::first(RuleKind::SanityLoss),
    Rule::every(RuleKind::SpecialAbility),
];
