//! Chat log rendering for replay embeds.
//!
//! Messages are drawn as a fenced code block. In [`ChatStyle::Ansi`] each
//! sender's name is colored with a palette entry chosen to match their
//! in-game color where possible, so a red player reads red in the embed.
//! Long logs keep only the head and the tail with a notice in between.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};
use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::format::{format_message_time, wrap_code_block, wrap_spoiler};
use crate::palette::{ColorName, FALLBACK_COLOR, FILL_ORDER, NOTICE_COLOR, colorize};
use crate::replay::{ChatMessage, Player};

/// Code block language tag that makes Discord honor ANSI escapes.
const ANSI_BLOCK_LANG: &str = "ansi";

/// Name shown for messages the game emitted itself.
const SYSTEM_SENDER: &str = "System";

// =============================================================================
// COLOR ASSIGNMENT
// =============================================================================

/// Player id to palette color, computed fresh for each render.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorAssignment {
    by_player: BTreeMap<u32, ColorName>,
}

impl ColorAssignment {
    #[must_use]
    pub fn get(&self, player_id: u32) -> Option<ColorName> {
        self.by_player.get(&player_id).copied()
    }

    /// Color for a message sender; unassigned and system senders get
    /// [`FALLBACK_COLOR`].
    #[must_use]
    pub fn color_for(&self, sender_id: Option<u32>) -> ColorName {
        sender_id
            .and_then(|id| self.get(id))
            .unwrap_or(FALLBACK_COLOR)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_player.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_player.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, ColorName)> + '_ {
        self.by_player.iter().map(|(id, color)| (*id, *color))
    }
}

/// Assigns each player a palette color.
///
/// Players whose in-game color has a palette equivalent claim it first, in
/// input order; when two players share a preference the earlier one wins.
/// Everyone left over then takes the next unclaimed entry of [`FILL_ORDER`].
/// Once all eight are claimed the remaining players share [`FALLBACK_COLOR`].
#[must_use]
pub fn assign_colors(players: &[Player]) -> ColorAssignment {
    let mut by_player = BTreeMap::<u32, ColorName>::new();
    let mut claimed = BTreeSet::<ColorName>::new();

    for player in players {
        if by_player.contains_key(&player.id) {
            continue;
        }
        let Some(preferred) = ColorName::from_name(&player.color.name) else {
            continue;
        };
        if claimed.insert(preferred) {
            by_player.insert(player.id, preferred);
        }
    }

    for player in players {
        if by_player.contains_key(&player.id) {
            continue;
        }
        let color = if let Some(free) = FILL_ORDER.into_iter().find(|c| !claimed.contains(c)) {
            claimed.insert(free);
            free
        } else {
            tracing::debug!(player_id = player.id, "palette exhausted; using fallback color");
            FALLBACK_COLOR
        };
        by_player.insert(player.id, color);
    }

    ColorAssignment { by_player }
}

// =============================================================================
// TRUNCATION
// =============================================================================

/// One visible row of a truncated chat log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatEntry<'a, T = ChatMessage> {
    Message(&'a T),
    /// Stands in for this many elided messages; always at least one.
    Omitted(usize),
}

/// Keeps the first and last `keep_each_side` items, replacing the middle
/// with a single [`ChatEntry::Omitted`]. Logs of at most twice that length
/// come back whole.
#[must_use]
pub fn truncate<T>(items: &[T], keep_each_side: NonZeroUsize) -> Vec<ChatEntry<'_, T>> {
    let keep = keep_each_side.get();
    if items.len() <= keep.saturating_mul(2) {
        return items.iter().map(ChatEntry::Message).collect();
    }

    let omitted = items.len() - keep * 2;
    tracing::debug!(total = items.len(), omitted, "truncating chat log");

    let mut out = Vec::with_capacity(keep * 2 + 1);
    out.extend(items[..keep].iter().map(ChatEntry::Message));
    out.push(ChatEntry::Omitted(omitted));
    out.extend(items[items.len() - keep..].iter().map(ChatEntry::Message));
    out
}

/// Text of the notice line replacing `count` messages.
#[must_use]
pub fn omission_notice(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("({count} message{plural} omitted)")
}

// =============================================================================
// RENDERING
// =============================================================================

/// How chat lines are styled inside the code block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatStyle {
    /// ANSI color escapes inside an `ansi` tagged block.
    #[default]
    Ansi,
    /// No escapes, for surfaces without inline color.
    Plain,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChatRenderer {
    pub keep_each_side: NonZeroUsize,
    pub wrap_in_spoiler: bool,
    pub style: ChatStyle,
}

impl ChatRenderer {
    #[must_use]
    pub fn new(keep_each_side: NonZeroUsize) -> Self {
        Self {
            keep_each_side,
            wrap_in_spoiler: true,
            style: ChatStyle::Ansi,
        }
    }

    #[must_use]
    pub fn with_spoiler(mut self, wrap_in_spoiler: bool) -> Self {
        self.wrap_in_spoiler = wrap_in_spoiler;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ChatStyle) -> Self {
        self.style = style;
        self
    }

    /// Renders the chat log as a ready-to-post markup block.
    #[must_use]
    pub fn render(&self, messages: &[ChatMessage], players: &[Player]) -> String {
        let body = self.render_lines(messages, players).join("\n");
        let lang = match self.style {
            ChatStyle::Ansi => ANSI_BLOCK_LANG,
            ChatStyle::Plain => "",
        };
        let block = wrap_code_block(&body, lang);

        // Chat can give away the result, so it is hidden by default.
        if self.wrap_in_spoiler {
            wrap_spoiler(&block)
        } else {
            block
        }
    }

    /// Renders the visible lines without any block markup.
    #[must_use]
    pub fn render_lines(&self, messages: &[ChatMessage], players: &[Player]) -> Vec<String> {
        if messages.is_empty() {
            return Vec::new();
        }

        let colors = assign_colors(players);
        let names = players
            .iter()
            .rev()
            .map(|p| (p.id, p.name.as_str()))
            .collect::<BTreeMap<_, _>>();

        truncate(messages, self.keep_each_side)
            .into_iter()
            .map(|entry| match entry {
                ChatEntry::Omitted(count) => self.paint(&omission_notice(count), NOTICE_COLOR),
                ChatEntry::Message(message) => self.render_message(message, &colors, &names),
            })
            .collect()
    }

    fn render_message(
        &self,
        message: &ChatMessage,
        colors: &ColorAssignment,
        names: &BTreeMap<u32, &str>,
    ) -> String {
        let sender_id = message.sender.as_ref().map(|s| s.id);
        let name = sender_name(message, names);
        let stamp = format!("[{}]", format_message_time(message.time_ms));
        let label = format!("{}:", sanitize(&name));

        format!(
            "{} {} {}",
            self.paint(&stamp, NOTICE_COLOR),
            self.paint(&label, colors.color_for(sender_id)),
            sanitize(&message.message)
        )
    }

    fn paint(&self, s: &str, color: ColorName) -> String {
        match self.style {
            ChatStyle::Ansi => colorize(s, color),
            ChatStyle::Plain => s.to_owned(),
        }
    }
}

/// Renders `messages` with the default style.
#[must_use]
pub fn render(
    messages: &[ChatMessage],
    players: &[Player],
    wrap_in_spoiler: bool,
    keep_each_side: NonZeroUsize,
) -> String {
    ChatRenderer::new(keep_each_side)
        .with_spoiler(wrap_in_spoiler)
        .render(messages, players)
}

fn sender_name<'a>(message: &'a ChatMessage, names: &BTreeMap<u32, &'a str>) -> Cow<'a, str> {
    let Some(sender) = &message.sender else {
        return Cow::Borrowed(SYSTEM_SENDER);
    };
    if let Some(&name) = names.get(&sender.id) {
        return Cow::Borrowed(name);
    }

    tracing::warn!(sender_id = sender.id, "chat message from unknown sender");
    if sender.name.trim().is_empty() {
        Cow::Owned(format!("Player {}", sender.id))
    } else {
        Cow::Borrowed(&sender.name)
    }
}

/// Strips control characters (in-game color codes, stray escapes) and breaks
/// up code fences so user text cannot end the block early.
fn sanitize(s: &str) -> String {
    let cleaned = s
        .chars()
        .filter_map(|c| match c {
            '\n' | '\r' | '\t' => Some(' '),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect::<String>();
    cleaned.replace("```", "`\u{200b}`\u{200b}`")
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
