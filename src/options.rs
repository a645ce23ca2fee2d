//! Option resolution: defaults, user overlays and environment variables.

use std::env::VarError;
use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::chat::{ChatRenderer, ChatStyle};
use crate::error::RepInfoError;

pub const DEFAULT_USE_SPOILER_MESSAGES: bool = true;
/// Five messages on each side of the omission notice.
pub const DEFAULT_MAX_CHAT_LINES: NonZeroUsize = NonZeroUsize::MIN.saturating_add(4);

pub const ENV_USE_SPOILERS: &str = "REPINFO_USE_SPOILERS";
pub const ENV_MAX_CHAT_LINES: &str = "REPINFO_MAX_CHAT_LINES";
pub const ENV_CHAT_STYLE: &str = "REPINFO_CHAT_STYLE";

/// Fully resolved options controlling the rich view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RepOptions {
    /// Hide the chat log behind a spoiler.
    pub use_spoiler_messages: bool,
    /// Messages kept on each side before the middle of the log is omitted.
    pub max_chat_lines: NonZeroUsize,
    pub chat_style: ChatStyle,
}

impl Default for RepOptions {
    fn default() -> Self {
        Self {
            use_spoiler_messages: DEFAULT_USE_SPOILER_MESSAGES,
            max_chat_lines: DEFAULT_MAX_CHAT_LINES,
            chat_style: ChatStyle::default(),
        }
    }
}

impl RepOptions {
    /// Build options from environment variables, falling back to defaults.
    ///
    /// Optional:
    /// - `REPINFO_USE_SPOILERS`: `true`/`false` (also `1`/`0`, `yes`/`no`)
    /// - `REPINFO_MAX_CHAT_LINES`: positive integer, default 5
    /// - `REPINFO_CHAT_STYLE`: `ansi` (default) or `plain`
    ///
    /// # Errors
    ///
    /// Returns [`RepInfoError::InvalidConfiguration`] when a variable is set
    /// to a value that does not parse or is out of range.
    pub fn from_env() -> Result<Self, RepInfoError> {
        resolve_options(&UserOptions::from_env()?)
    }

    #[must_use]
    pub fn chat_renderer(&self) -> ChatRenderer {
        ChatRenderer::new(self.max_chat_lines)
            .with_spoiler(self.use_spoiler_messages)
            .with_style(self.chat_style)
    }
}

/// Caller-supplied overrides; unset fields keep their defaults.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserOptions {
    pub use_spoiler_messages: Option<bool>,
    /// Signed so that zero and negative values reach validation.
    pub max_chat_lines: Option<i64>,
    pub chat_style: Option<ChatStyle>,
}

impl UserOptions {
    /// Reads overrides from the `REPINFO_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`RepInfoError::InvalidConfiguration`] for unparseable values.
    pub fn from_env() -> Result<Self, RepInfoError> {
        let use_spoiler_messages = env_var(ENV_USE_SPOILERS)?
            .map(|raw| parse_bool(ENV_USE_SPOILERS, &raw))
            .transpose()?;
        let max_chat_lines = env_var(ENV_MAX_CHAT_LINES)?
            .map(|raw| {
                raw.trim().parse::<i64>().map_err(|_| {
                    RepInfoError::InvalidConfiguration(format!(
                        "{ENV_MAX_CHAT_LINES} must be an integer, got '{raw}'"
                    ))
                })
            })
            .transpose()?;
        let chat_style = env_var(ENV_CHAT_STYLE)?
            .map(|raw| parse_chat_style(&raw))
            .transpose()?;

        Ok(Self {
            use_spoiler_messages,
            max_chat_lines,
            chat_style,
        })
    }

    /// Layers `over` on top of `self`; fields set in `over` win.
    #[must_use]
    pub fn merge(self, over: Self) -> Self {
        Self {
            use_spoiler_messages: over.use_spoiler_messages.or(self.use_spoiler_messages),
            max_chat_lines: over.max_chat_lines.or(self.max_chat_lines),
            chat_style: over.chat_style.or(self.chat_style),
        }
    }
}

/// Merges user overrides over the defaults and validates the result.
///
/// # Errors
///
/// Returns [`RepInfoError::InvalidConfiguration`] when `max_chat_lines` is
/// zero or negative.
pub fn resolve_options(user: &UserOptions) -> Result<RepOptions, RepInfoError> {
    let defaults = RepOptions::default();

    let max_chat_lines = match user.max_chat_lines {
        None => defaults.max_chat_lines,
        Some(raw) => usize::try_from(raw)
            .map_or(None, NonZeroUsize::new)
            .ok_or_else(|| {
                RepInfoError::InvalidConfiguration(format!(
                    "maxChatLines must be a positive integer, got {raw}"
                ))
            })?,
    };

    Ok(RepOptions {
        use_spoiler_messages: user
            .use_spoiler_messages
            .unwrap_or(defaults.use_spoiler_messages),
        max_chat_lines,
        chat_style: user.chat_style.unwrap_or(defaults.chat_style),
    })
}

fn env_var(key: &str) -> Result<Option<String>, RepInfoError> {
    match std::env::var(key) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(RepInfoError::InvalidConfiguration(format!(
            "{key} is not valid unicode"
        ))),
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, RepInfoError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(RepInfoError::InvalidConfiguration(format!(
            "{key} must be a boolean, got '{other}'"
        ))),
    }
}

fn parse_chat_style(raw: &str) -> Result<ChatStyle, RepInfoError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "ansi" => Ok(ChatStyle::Ansi),
        "plain" => Ok(ChatStyle::Plain),
        other => Err(RepInfoError::InvalidConfiguration(format!(
            "unsupported {ENV_CHAT_STYLE} '{other}' (expected 'ansi' or 'plain')"
        ))),
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod tests;
