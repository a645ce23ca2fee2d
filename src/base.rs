//! Base info: the decoded replay normalized into named, display-neutral fields.
//!
//! Everything here is a direct lookup or unit conversion of the raw data.
//! The rich view in [`crate::rich`] is derived from this, not from the replay.

use serde::Serialize;
use time::OffsetDateTime;

use crate::error::RepInfoError;
use crate::format::format_game_duration;
use crate::gamedata::{frames_to_ms, game_speed, game_type, parse_map_name};
use crate::replay::{ChatMessage, Player, ReplayData};

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseInfo {
    pub game: BaseGameInfo,
    /// Players ordered by ascending id.
    pub players: Vec<Player>,
    pub host: String,
    pub messages: Vec<ChatMessage>,
    pub map: BaseMapInfo,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseGameInfo {
    pub title: String,
    pub speed: &'static str,
    #[serde(rename = "type")]
    pub game_type: &'static str,
    #[serde(with = "time::serde::rfc3339")]
    pub start_time: OffsetDateTime,
    pub duration_ms: u64,
    pub duration: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseMapInfo {
    pub name: String,
    pub original_name: String,
    pub width: u16,
    pub height: u16,
}

/// Builds the base info for a decoded replay.
///
/// # Errors
///
/// Returns [`RepInfoError::UnknownGameSpeed`] or
/// [`RepInfoError::UnknownGameType`] when the header carries ids outside the
/// known tables.
pub fn generate_base_info(replay: &ReplayData) -> Result<BaseInfo, RepInfoError> {
    let info = &replay.game_info;
    let speed = game_speed(info.speed)?;
    let kind = game_type(info.game_type)?;
    let map_name = parse_map_name(&info.map);
    let duration_ms = frames_to_ms(info.frames, speed);

    let mut players = replay.players.clone();
    players.sort_by_key(|p| p.id);

    Ok(BaseInfo {
        game: BaseGameInfo {
            title: info.title.clone(),
            speed: speed.slug,
            game_type: kind.slug,
            start_time: info.start_time,
            duration_ms,
            duration: format_game_duration(duration_ms),
        },
        players,
        host: info.host.clone(),
        messages: replay.messages.clone(),
        map: BaseMapInfo {
            name: map_name.plain_name,
            original_name: map_name.clean_name_versioned,
            width: info.map_width,
            height: info.map_height,
        },
    })
}

#[cfg(test)]
#[path = "base_test.rs"]
mod tests;
