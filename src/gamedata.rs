//! Static game reference data: speeds, game types, map names and races.

use crate::error::RepInfoError;
use crate::replay::Race;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameSpeed {
    pub slug: &'static str,
    /// Real-time length of one logic frame at this speed.
    pub ms_per_frame: u64,
}

/// Indexed by the replay's speed byte.
pub const GAME_SPEEDS: [GameSpeed; 7] = [
    GameSpeed { slug: "slowest", ms_per_frame: 167 },
    GameSpeed { slug: "slower", ms_per_frame: 111 },
    GameSpeed { slug: "slow", ms_per_frame: 83 },
    GameSpeed { slug: "normal", ms_per_frame: 67 },
    GameSpeed { slug: "fast", ms_per_frame: 56 },
    GameSpeed { slug: "faster", ms_per_frame: 48 },
    GameSpeed { slug: "fastest", ms_per_frame: 42 },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameType {
    pub id: u8,
    pub slug: &'static str,
    pub name: &'static str,
}

pub const GAME_TYPES: [GameType; 14] = [
    GameType { id: 2, slug: "melee", name: "Melee" },
    GameType { id: 3, slug: "ffa", name: "Free For All" },
    GameType { id: 4, slug: "1on1", name: "One on One" },
    GameType { id: 5, slug: "ctf", name: "Capture The Flag" },
    GameType { id: 6, slug: "greed", name: "Greed" },
    GameType { id: 7, slug: "slaughter", name: "Slaughter" },
    GameType { id: 8, slug: "suddendeath", name: "Sudden Death" },
    GameType { id: 9, slug: "ladder", name: "Ladder" },
    GameType { id: 10, slug: "ums", name: "Use Map Settings" },
    GameType { id: 11, slug: "teammelee", name: "Team Melee" },
    GameType { id: 12, slug: "teamffa", name: "Team Free For All" },
    GameType { id: 13, slug: "teamctf", name: "Team Capture The Flag" },
    GameType { id: 15, slug: "tvb", name: "Top vs Bottom" },
    GameType { id: 16, slug: "ironmanladder", name: "Iron Man Ladder" },
];

/// Looks up a game speed by the replay's speed index.
///
/// # Errors
///
/// Returns [`RepInfoError::UnknownGameSpeed`] for indices past `fastest`.
pub fn game_speed(index: u8) -> Result<GameSpeed, RepInfoError> {
    GAME_SPEEDS
        .get(usize::from(index))
        .copied()
        .ok_or(RepInfoError::UnknownGameSpeed(index))
}

/// Looks up a game type by the replay's type id.
///
/// # Errors
///
/// Returns [`RepInfoError::UnknownGameType`] for ids with no definition.
pub fn game_type(id: u8) -> Result<GameType, RepInfoError> {
    GAME_TYPES
        .iter()
        .find(|t| t.id == id)
        .copied()
        .ok_or(RepInfoError::UnknownGameType(id))
}

#[must_use]
pub fn game_type_by_slug(slug: &str) -> Option<GameType> {
    GAME_TYPES.iter().find(|t| t.slug == slug).copied()
}

#[must_use]
pub fn frames_to_ms(frames: u64, speed: GameSpeed) -> u64 {
    frames.saturating_mul(speed.ms_per_frame)
}

// =============================================================================
// MAP NAMES
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapName {
    /// Clean name without a trailing version, e.g. `Fighting Spirit`.
    pub plain_name: String,
    /// Clean name as stored in the map, e.g. `Fighting Spirit 1.3`.
    pub clean_name_versioned: String,
}

/// Strips in-game color codes and whitespace noise from a raw map name.
#[must_use]
pub fn parse_map_name(raw: &str) -> MapName {
    let clean_name_versioned = raw
        .chars()
        .filter(|c| !c.is_control() || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    let plain_name = match clean_name_versioned.rsplit_once(' ') {
        Some((head, tail)) if is_version_token(tail) => head.trim_end().to_owned(),
        _ => clean_name_versioned.clone(),
    };

    MapName {
        plain_name,
        clean_name_versioned,
    }
}

/// Matches `1.2`, `v2`, `V1.0`, `(2.1)`, `[1.3]` and `2.0b`.
fn is_version_token(token: &str) -> bool {
    let token = token
        .trim_start_matches(['(', '['])
        .trim_end_matches([')', ']']);
    let token = token.strip_prefix(['v', 'V']).unwrap_or(token);
    let token = token.strip_suffix(|c: char| c.is_ascii_lowercase()).unwrap_or(token);

    !token.is_empty()
        && token.starts_with(|c: char| c.is_ascii_digit())
        && token.chars().all(|c| c.is_ascii_digit() || c == '.')
        && (token.contains('.') || token.len() <= 2)
}

// =============================================================================
// RACES
// =============================================================================

/// Sort key for 1v1 matchup strings (`TvP`, `TvZ`, `PvZ`).
#[must_use]
pub fn race_order(race: Race) -> u8 {
    match race {
        Race::Terran => 0,
        Race::Protoss => 1,
        Race::Zerg => 2,
        Race::Unknown => 3,
    }
}

#[must_use]
pub fn race_emoji(race: Race) -> &'static str {
    match race {
        Race::Terran => ":terran:",
        Race::Protoss => ":protoss:",
        Race::Zerg => ":zerg:",
        Race::Unknown => ":question:",
    }
}

#[cfg(test)]
#[path = "gamedata_test.rs"]
mod tests;
