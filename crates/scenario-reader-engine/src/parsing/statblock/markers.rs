//! Line markers and vocabulary recognized in stat blocks.

/// Prefix of a weapon line: `武器：拳头 1D3`.
pub const WEAPON: &str = "武器：";
/// Prefix of a skill line: `技能：侦查50% 聆听40%`.
pub const SKILL: &str = "技能：";
/// Prefix of an armor line: `装甲：无`.
pub const ARMOR: &str = "装甲：";
/// Bullet opening a special ability line.
pub const SPECIAL_ABILITY: char = '＊';

/// Sanity loss marker; the loss notation follows it.
pub const SANITY_LOSS: &str = r"SAN\s*值丧失：";
/// Case-insensitive damage bonus marker.
pub const DAMAGE_BONUS: &str = r"(?i)db";

pub const HIT_POINTS: &str = "耐久";
pub const MOVEMENT: &str = "移动";

/// Vocabulary marking a record as a mythos entity: armor, sanity loss,
/// spells, the formless spawn, and monsters in general.
pub const MYTHOS: &str = r"装甲|SAN\s*值丧失|咒文|无形之子|怪物";

/// Lines of this many characters or fewer never become general notes.
pub const MIN_NOTE_CHARS: usize = 5;

/// `<label><digits>` pairs on the core attribute line.
pub const CORE_PAIR: &str = r"([A-Z\x{4e00}-\x{9fa5}]+)\s*([0-9]+)";
/// `<non-digit run><digits>` pairs on the derived attribute line.
pub const DERIVED_PAIR: &str = r"([^0-9\s]+)\s*([0-9]+)";
