//! # Attribute Allowlist
//!
//! The primary character attributes of the game system, kept as data so the
//! highlighter and the stat block parser can be extended with house-rule
//! attributes (e.g. `LUCK`) without touching either algorithm.

/// A primary attribute: its Latin abbreviation and its CJK name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub abbrev: String,
    /// CJK name as printed in translated scenarios. Empty for extra attributes.
    pub name: String,
}

/// The eight standard attributes, in the order character sheets list them.
pub const STANDARD: [(&str, &str); 8] = [
    ("STR", "力量"),
    ("CON", "体质"),
    ("SIZ", "体型"),
    ("INT", "智力"),
    ("POW", "意志"),
    ("DEX", "敏捷"),
    ("APP", "外貌"),
    ("EDU", "教育"),
];

/// Ordered, de-duplicated attribute allowlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeSet {
    attributes: Vec<Attribute>,
}

impl AttributeSet {
    /// The eight standard attributes.
    pub fn standard() -> Self {
        Self {
            attributes: STANDARD
                .iter()
                .map(|(abbrev, name)| Attribute {
                    abbrev: (*abbrev).to_string(),
                    name: (*name).to_string(),
                })
                .collect(),
        }
    }

    /// Appends extra abbreviations, uppercased to match stat block lines.
    /// Blank entries and case-insensitive duplicates are skipped.
    #[must_use]
    pub fn with_extra<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for abbrev in extra {
            let abbrev = abbrev.as_ref().trim();
            if abbrev.is_empty() || self.contains(abbrev) {
                continue;
            }
            self.attributes.push(Attribute {
                abbrev: abbrev.to_uppercase(),
                name: String::new(),
            });
        }
        self
    }

    pub fn contains(&self, abbrev: &str) -> bool {
        self.attributes
            .iter()
            .any(|a| a.abbrev.eq_ignore_ascii_case(abbrev))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.iter()
    }

    pub fn abbreviations(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(|a| a.abbrev.as_str())
    }

    /// Abbreviations followed by the non-empty CJK names.
    pub fn vocabulary(&self) -> impl Iterator<Item = &str> {
        self.abbreviations().chain(
            self.attributes
                .iter()
                .map(|a| a.name.as_str())
                .filter(|n| !n.is_empty()),
        )
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Regex alternation of the given terms, escaped. Used by both the
    /// highlighter and the stat block parser.
    pub(crate) fn alternation<'a>(terms: impl Iterator<Item = &'a str>) -> String {
        terms.map(regex::escape).collect::<Vec<_>>().join("|")
    }
}

impl Default for AttributeSet {
    fn default() -> Self {
        Self::standard()
    }
}
