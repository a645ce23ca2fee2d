//! Decoded replay model as handed over by the external replay decoder.
//!
//! Nothing here touches the binary replay format; these structs mirror the
//! decoder's JSON output (camelCase keys) so a dump can be deserialized
//! directly and fed into [`crate::generate_rep_info`].

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Player id the decoder assigns to computer-controlled slots.
pub const CPU_PLAYER_ID: u32 = 255;

/// Everything the pipeline consumes from one decoded replay.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayData {
    pub game_info: GameInfo,
    pub players: Vec<Player>,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

/// Header fields of the replay.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameInfo {
    /// Lobby title as typed by the host.
    pub title: String,
    /// Numeric game type id, see [`crate::gamedata::game_type`].
    #[serde(rename = "type")]
    pub game_type: u8,
    /// Raw map name, possibly containing in-game color control characters.
    pub map: String,
    /// Game length in logic frames.
    pub frames: u64,
    /// Game speed index, see [`crate::gamedata::game_speed`].
    pub speed: u8,
    #[serde(with = "time::serde::rfc3339")]
    pub start_time: OffsetDateTime,
    pub map_width: u16,
    pub map_height: u16,
    pub host: String,
}

/// One participant of the recorded game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Slot id, unique within one replay.
    pub id: u32,
    pub name: String,
    pub race: Race,
    pub color: PlayerColor,
    #[serde(default)]
    pub apm: Option<u32>,
    #[serde(default)]
    pub eapm: Option<u32>,
}

impl Player {
    #[must_use]
    pub fn is_cpu(&self) -> bool {
        self.id == CPU_PLAYER_ID
    }
}

/// The in-game color a player picked, named in the game's own palette.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerColor {
    pub name: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Race {
    Terran,
    Protoss,
    Zerg,
    Unknown,
}

impl Race {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Terran => "terran",
            Self::Protoss => "protoss",
            Self::Zerg => "zerg",
            Self::Unknown => "unknown",
        }
    }

    /// Upper-case initial used in matchup strings (`TvZ`).
    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Self::Terran => 'T',
            Self::Protoss => 'P',
            Self::Zerg => 'Z',
            Self::Unknown => 'U',
        }
    }
}

impl From<String> for Race {
    fn from(value: String) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "terran" => Self::Terran,
            "protoss" => Self::Protoss,
            "zerg" => Self::Zerg,
            _ => Self::Unknown,
        }
    }
}

/// A single line of in-game chat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// `None` for messages the game itself emitted.
    #[serde(default)]
    pub sender: Option<ChatSender>,
    /// Milliseconds since game start.
    pub time_ms: u64,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSender {
    pub id: u32,
    pub name: String,
}

#[cfg(test)]
#[path = "replay_test.rs"]
mod tests;
