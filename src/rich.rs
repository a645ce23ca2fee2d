//! Rich info: display strings ready to drop into a Discord embed.

use serde::Serialize;

use crate::base::BaseInfo;
use crate::format::{
    TimestampStyle, format_date_clock_emoji, format_dynamic_timestamp, format_filesize,
};
use crate::gamedata::{game_type_by_slug, race_emoji, race_order};
use crate::options::RepOptions;
use crate::replay::Player;

/// Long game type names and their embed abbreviations.
const TYPE_ABBREVIATIONS: [(&str, &str); 4] = [
    ("Top vs Bottom", "TvB"),
    ("Free For All", "FFA"),
    ("Capture The Flag", "CTF"),
    ("Use Map Settings", "UMS"),
];

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RichInfo {
    pub title: String,
    pub game: RichGameInfo,
    pub players: RichPlayers,
    pub time: RichTimeInfo,
    pub map: RichMapInfo,
    /// Present only when the size of the replay file is known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<FileInfo>,
    /// Rendered chat block.
    pub messages: String,
    pub meta: RichMeta,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RichGameInfo {
    #[serde(rename = "type")]
    pub game_type: String,
    pub matchup: String,
    pub title: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RichPlayers {
    pub amount: usize,
    pub races: String,
    pub list: Vec<RichPlayer>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RichPlayer {
    pub name: String,
    pub apm: Option<u32>,
    pub eapm: Option<u32>,
    pub race: &'static str,
    pub is_cpu: bool,
    pub name_formatted: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RichTimeInfo {
    pub start_time: String,
    pub start_time_rel: String,
    pub start_time_emoji: String,
    pub duration: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RichMapInfo {
    pub name: String,
    pub original_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FileInfo {
    pub bytes: u64,
    pub size: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RichMeta {
    pub is_1v1: bool,
}

/// Builds the rich view from base info.
#[must_use]
pub fn generate_rich_info(base: &BaseInfo, file_size: Option<u64>, options: &RepOptions) -> RichInfo {
    let start = base.game.start_time;
    let messages = options
        .chat_renderer()
        .render(&base.messages, &base.players);

    RichInfo {
        title: game_title(base),
        game: RichGameInfo {
            game_type: game_type_string(base.game.game_type),
            matchup: game_matchup(&base.players),
            title: base.game.title.clone(),
        },
        players: RichPlayers {
            amount: base.players.len(),
            races: base.players.iter().map(|p| race_emoji(p.race)).collect(),
            list: base.players.iter().map(rich_player).collect(),
        },
        time: RichTimeInfo {
            start_time: format_dynamic_timestamp(start, TimestampStyle::Full),
            start_time_rel: format_dynamic_timestamp(start, TimestampStyle::Relative),
            start_time_emoji: format_date_clock_emoji(start),
            duration: base.game.duration.clone(),
        },
        map: RichMapInfo {
            name: base.map.name.clone(),
            original_name: base.map.original_name.clone(),
        },
        file: file_size.map(|bytes| FileInfo {
            bytes,
            size: format_filesize(bytes),
        }),
        messages,
        meta: RichMeta {
            is_1v1: base.players.len() == 2,
        },
    }
}

/// Short display name of a game type, e.g. `TvB` for Top vs Bottom.
#[must_use]
pub fn game_type_string(slug: &str) -> String {
    let Some(kind) = game_type_by_slug(slug) else {
        return slug.to_owned();
    };
    TYPE_ABBREVIATIONS
        .iter()
        .fold(kind.name.to_owned(), |name, (long, short)| name.replace(long, short))
}

/// Race initials joined by `v`. Two-player matchups are put in canonical
/// race order so `ZvT` and `TvZ` read the same.
#[must_use]
pub fn game_matchup(players: &[Player]) -> String {
    let mut races = players.iter().map(|p| p.race).collect::<Vec<_>>();
    if races.len() == 2 {
        races.sort_by_key(|r| race_order(*r));
    }
    races
        .iter()
        .map(|r| r.letter().to_string())
        .collect::<Vec<_>>()
        .join("v")
}

/// Race emoji and name, with APM and a CPU marker when given.
#[must_use]
pub fn player_name(player: &Player, apm: Option<u32>, is_cpu: bool) -> String {
    let mut out = format!("{} {}", race_emoji(player.race), player.name);
    if let Some(apm) = apm.filter(|a| *a > 0) {
        out.push_str(&format!(" ({apm} apm)"));
    }
    if is_cpu {
        out.push_str(" (CPU)");
    }
    out
}

fn game_title(base: &BaseInfo) -> String {
    let map = &base.map.name;
    if let [first, second] = base.players.as_slice() {
        return format!(
            "{} {} v. {} @ {map}",
            game_matchup(&base.players),
            player_name(first, None, false),
            player_name(second, None, false)
        );
    }

    format!(
        "{} player {} hosted by {} @ {map}",
        base.players.len(),
        game_type_string(base.game.game_type),
        base.host
    )
}

fn rich_player(player: &Player) -> RichPlayer {
    let is_cpu = player.is_cpu();
    RichPlayer {
        name: player.name.clone(),
        apm: player.apm,
        eapm: player.eapm,
        race: player.race.as_str(),
        is_cpu,
        name_formatted: player_name(player, player.apm, is_cpu),
    }
}

#[cfg(test)]
#[path = "rich_test.rs"]
mod tests;
