use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::{attributes::AttributeSet, error::PatternError};

use super::{
    markers,
    rules::{Cardinality, RULES, RuleKind},
    types::{Stat, StatBlock, Weapon},
};

/// Compiled stat block parser.
#[derive(Debug, Clone)]
pub struct StatBlockParser {
    core_line: Regex,
    core_pair: Regex,
    derived_line: Regex,
    derived_pair: Regex,
    damage_bonus: Regex,
    sanity_loss: Regex,
    mythos: Regex,
}

fn compile(what: &'static str, pattern: &str) -> Result<Regex, PatternError> {
    Regex::new(pattern).map_err(|source| PatternError::Compile { what, source })
}

impl StatBlockParser {
    /// Builds a parser whose core attribute line is recognized by any
    /// abbreviation or CJK name in `attributes`.
    pub fn new(attributes: &AttributeSet) -> Result<Self, PatternError> {
        let vocabulary = AttributeSet::alternation(attributes.vocabulary());
        // An empty alternation would match every line.
        let core_pattern: &str = if vocabulary.is_empty() {
            "[^\\s\\S]"
        } else {
            &vocabulary
        };
        let parser = Self {
            core_line: compile("core attribute line", core_pattern)?,
            core_pair: compile("core attribute pair", markers::CORE_PAIR)?,
            derived_line: compile(
                "derived attribute line",
                &format!("{}|{}", markers::HIT_POINTS, markers::MOVEMENT),
            )?,
            derived_pair: compile("derived attribute pair", markers::DERIVED_PAIR)?,
            damage_bonus: compile("damage bonus", markers::DAMAGE_BONUS)?,
            sanity_loss: compile("sanity loss", markers::SANITY_LOSS)?,
            mythos: compile("mythos vocabulary", markers::MYTHOS)?,
        };
        log::debug!(
            "compiled stat block parser for {} attributes",
            attributes.len()
        );
        Ok(parser)
    }

    /// Parses one record. Never fails; unrecognized input leaves fields empty.
    pub fn parse(&self, blob: &str) -> StatBlock {
        let lines: Vec<&str> = blob
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();

        let mut block = StatBlock {
            title: lines.first().map(|l| l.to_string()).unwrap_or_default(),
            is_mythos: lines.iter().any(|l| self.mythos.is_match(l)),
            ..StatBlock::default()
        };

        // The title names the record; only the body lines carry fields.
        let mut fired = [false; RULES.len()];
        for line in lines.iter().skip(1) {
            let mut claimed = false;
            for (i, rule) in RULES.iter().enumerate() {
                if !self.matches(rule.kind, line) {
                    continue;
                }
                claimed = true;
                if rule.cardinality == Cardinality::First && fired[i] {
                    continue;
                }
                fired[i] = true;
                self.extract(rule.kind, line, &mut block);
            }

            if !claimed && line.chars().count() > markers::MIN_NOTE_CHARS {
                block.general_notes.push(line.to_string());
            }
        }

        if block.is_sparse() {
            log::trace!("stat block {:?} has no recognized fields", block.title);
        }
        block
    }

    /// Predicate half of a rule.
    pub fn matches(&self, kind: RuleKind, line: &str) -> bool {
        match kind {
            RuleKind::CoreStats => self.core_line.is_match(line),
            RuleKind::DerivedStats => self.derived_line.is_match(line),
            RuleKind::DamageBonus => self.damage_bonus.is_match(line),
            RuleKind::Weapon => line.starts_with(markers::WEAPON),
            RuleKind::Skill => line.starts_with(markers::SKILL),
            RuleKind::Armor => line.starts_with(markers::ARMOR),
            RuleKind::SanityLoss => self.sanity_loss.is_match(line),
            RuleKind::SpecialAbility => line.starts_with(markers::SPECIAL_ABILITY),
        }
    }

    /// Extractor half of a rule. Only called on lines the predicate matched.
    fn extract(&self, kind: RuleKind, line: &str, block: &mut StatBlock) {
        match kind {
            RuleKind::CoreStats => block.core_stats.extend(pairs(&self.core_pair, line)),
            RuleKind::DerivedStats => block.derived_stats.extend(pairs(&self.derived_pair, line)),
            RuleKind::DamageBonus => {
                let value = self.damage_bonus.replacen(line, 1, "");
                let value = value.trim();
                if !value.is_empty() {
                    block.damage_bonus = Some(value.to_string());
                }
            }
            RuleKind::Weapon => {
                let rest = line.strip_prefix(markers::WEAPON).unwrap_or(line);
                let mut parts = rest.split_whitespace();
                let name = parts.next().unwrap_or_default().to_string();
                let stats = parts.collect::<Vec<_>>().join(" ");
                block.weapons.push(Weapon { name, stats });
            }
            RuleKind::Skill => {
                let rest = line.replace(markers::SKILL, " ");
                block
                    .skills
                    .extend(rest.split_whitespace().map(str::to_string));
            }
            RuleKind::Armor => {
                let rest = line.strip_prefix(markers::ARMOR).unwrap_or(line);
                block.armor = Some(rest.trim().to_string());
            }
            RuleKind::SanityLoss => {
                if let Some(m) = self.sanity_loss.find_iter(line).last() {
                    block.sanity_loss = Some(line[m.end()..].trim().to_string());
                }
            }
            RuleKind::SpecialAbility => block.special_abilities.push(line.to_string()),
        }
    }
}

impl Default for StatBlockParser {
    fn default() -> Self {
        Self::new(&AttributeSet::standard()).expect("standard stat block patterns compile")
    }
}

fn pairs<'a>(re: &'a Regex, line: &'a str) -> impl Iterator<Item = Stat> + 'a {
    re.captures_iter(line)
        .map(|caps| Stat::new(&caps[1], &caps[2]))
}

/// Parses a stat block with the standard attribute allowlist.
pub fn parse_stat_block(blob: &str) -> StatBlock {
    static DEFAULT: OnceLock<StatBlockParser> = OnceLock::new();
    DEFAULT.get_or_init(StatBlockParser::default).parse(blob)
}
