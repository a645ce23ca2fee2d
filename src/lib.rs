//! Replay info for chat embeds.
//!
//! Takes the output of an external replay decoder and derives two views of
//! it: [`BaseInfo`], the raw data normalized into named fields, and
//! [`RichInfo`], display strings (title, matchup, player list, timestamps,
//! colorized chat log) meant to be posted to a Discord embed as is.

pub mod base;
pub mod chat;
pub mod error;
pub mod format;
pub mod gamedata;
pub mod options;
pub mod palette;
pub mod replay;
pub mod rich;

use std::path::Path;

use serde::Serialize;

pub use base::{BaseInfo, generate_base_info};
pub use chat::{ChatEntry, ChatRenderer, ChatStyle, ColorAssignment, assign_colors, render, truncate};
pub use error::RepInfoError;
pub use options::{RepOptions, UserOptions, resolve_options};
pub use palette::ColorName;
pub use replay::{ChatMessage, ChatSender, GameInfo, Player, PlayerColor, Race, ReplayData};
pub use rich::{RichInfo, generate_rich_info};

/// Rich info with the base info it was derived from.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepInfo {
    #[serde(flatten)]
    pub rich: RichInfo,
    pub base_info: BaseInfo,
}

/// Derives replay info from decoded replay data.
///
/// `file_size` is the size of the original replay file in bytes, when known.
///
/// # Errors
///
/// Returns [`RepInfoError::UnknownGameSpeed`] or
/// [`RepInfoError::UnknownGameType`] for header ids outside the known tables.
pub fn generate_rep_info(
    replay: &ReplayData,
    file_size: Option<u64>,
    options: &RepOptions,
) -> Result<RepInfo, RepInfoError> {
    tracing::debug!(
        players = replay.players.len(),
        messages = replay.messages.len(),
        "generating replay info"
    );

    let base_info = generate_base_info(replay)?;
    let rich = generate_rich_info(&base_info, file_size, options);
    Ok(RepInfo { rich, base_info })
}

/// Derives replay info from a JSON dump of decoded replay data.
///
/// # Errors
///
/// Returns [`RepInfoError::Json`] when the bytes are not a valid dump, and
/// the errors of [`generate_rep_info`] otherwise.
pub fn rep_info_from_json(
    bytes: &[u8],
    file_size: Option<u64>,
    options: &RepOptions,
) -> Result<RepInfo, RepInfoError> {
    let replay = serde_json::from_slice::<ReplayData>(bytes)?;
    generate_rep_info(&replay, file_size, options)
}

/// Reads a JSON dump from disk and derives replay info from it.
///
/// # Errors
///
/// Returns [`RepInfoError::Io`] when the file cannot be read, and the errors
/// of [`rep_info_from_json`] otherwise.
pub fn file_rep_info(
    path: &Path,
    file_size: Option<u64>,
    options: &RepOptions,
) -> Result<RepInfo, RepInfoError> {
    let bytes = std::fs::read(path).map_err(|source| RepInfoError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    rep_info_from_json(&bytes, file_size, options)
}

#[cfg(test)]
#[path = "fixtures_test.rs"]
mod fixtures;

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
