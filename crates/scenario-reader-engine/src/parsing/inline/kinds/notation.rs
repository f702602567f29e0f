use crate::parsing::attributes::AttributeSet;

/// Game-rule notation that is emphasized inline.
///
/// Patterns are listed in precedence order and matched case-insensitively.
pub struct Notation;

impl Notation {
    /// Sanity check, `SAN值` or `SAN 值`.
    pub const SANITY: &'static str = r"SAN\s*值";
    /// Success/failure loss range, `1D4/1D8` or `0/1D3`.
    pub const DICE_RANGE: &'static str = r"[0-9D]+/[0-9D]+";
    pub const SINGLE_DIE: &'static str = r"1D[0-9]+";
    pub const IDEA: &'static str = "IDEA";
    pub const PERCENTILE: &'static str = "D100";
    /// Magic point roll, `MP1D6`.
    pub const MAGIC_POINTS: &'static str = r"MP[0-9]+D[0-9]+";

    pub const FIXED: [&'static str; 6] = [
        Self::SANITY,
        Self::DICE_RANGE,
        Self::SINGLE_DIE,
        Self::IDEA,
        Self::PERCENTILE,
        Self::MAGIC_POINTS,
    ];

    /// Attribute roll such as `POW50`; `None` for an empty allowlist.
    pub fn attribute_pattern(attributes: &AttributeSet) -> Option<String> {
        if attributes.is_empty() {
            return None;
        }
        let alt = AttributeSet::alternation(attributes.abbreviations());
        Some(format!("(?:{alt})[0-9]+"))
    }

    /// The full notation alternation, fixed patterns first.
    pub fn pattern(attributes: &AttributeSet) -> String {
        Self::FIXED
            .iter()
            .map(|p| (*p).to_string())
            .chain(Self::attribute_pattern(attributes))
            .collect::<Vec<_>>()
            .join("|")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_pattern_lists_allowlist() {
        let set = AttributeSet::standard().with_extra(["LUCK"]);
        let pat = Notation::attribute_pattern(&set).unwrap();
        assert!(pat.starts_with("(?:STR|CON|"));
        assert!(pat.ends_with("|LUCK)[0-9]+"));
    }

    #[test]
    fn fixed_patterns_precede_attributes() {
        let pat = Notation::pattern(&AttributeSet::standard());
        assert!(pat.starts_with(Notation::SANITY));
        assert!(pat.ends_with(")[0-9]+"));
    }
}
