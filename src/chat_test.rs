use std::collections::BTreeSet;
use std::num::NonZeroUsize;

use super::*;
use crate::replay::{ChatSender, PlayerColor, Race};

fn player(id: u32, name: &str, color: &str) -> Player {
    Player {
        id,
        name: name.to_owned(),
        race: Race::Terran,
        color: PlayerColor { name: color.to_owned() },
        apm: None,
        eapm: None,
    }
}

fn msg(sender: Option<(u32, &str)>, time_ms: u64, text: &str) -> ChatMessage {
    ChatMessage {
        sender: sender.map(|(id, name)| ChatSender { id, name: name.to_owned() }),
        time_ms,
        message: text.to_owned(),
    }
}

fn numbered(count: usize) -> Vec<ChatMessage> {
    (0..count)
        .map(|i| msg(Some((0, "Alice")), i as u64 * 1000, &format!("m{i}")))
        .collect()
}

fn keep(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

// =============================================================================
// COLOR ASSIGNMENT
// =============================================================================

#[test]
fn assignment_is_deterministic() {
    let players = vec![
        player(3, "c", "Teal"),
        player(1, "a", "Red"),
        player(2, "b", "Orange"),
        player(0, "d", "Blue"),
    ];
    assert_eq!(assign_colors(&players), assign_colors(&players));
}

#[test]
fn preferred_colors_are_claimed_before_fill() {
    let players = vec![player(0, "a", "Teal"), player(1, "b", "Red"), player(2, "c", "Blue")];
    let colors = assign_colors(&players);

    assert_eq!(colors.get(1), Some(ColorName::Red));
    assert_eq!(colors.get(2), Some(ColorName::Blue));
    // Red is already taken by the second player, so fill starts at Green.
    assert_eq!(colors.get(0), Some(ColorName::Green));
}

#[test]
fn shared_preference_goes_to_first_player() {
    let players = vec![player(5, "a", "Red"), player(2, "b", "Red")];
    let colors = assign_colors(&players);

    assert_eq!(colors.get(5), Some(ColorName::Red));
    assert_eq!(colors.get(2), Some(ColorName::Green));
}

#[test]
fn preferred_color_match_ignores_case() {
    let colors = assign_colors(&[player(0, "a", "blue")]);
    assert_eq!(colors.get(0), Some(ColorName::Blue));
}

#[test]
fn fill_skips_gray_until_last() {
    let players = (0..7).map(|i| player(i, "p", "Orange")).collect::<Vec<_>>();
    let colors = assign_colors(&players);
    assert!(colors.iter().all(|(_, c)| c != ColorName::Gray));

    let players = (0..8).map(|i| player(i, "p", "Orange")).collect::<Vec<_>>();
    let colors = assign_colors(&players);
    assert_eq!(colors.get(7), Some(ColorName::Gray));
}

#[test]
fn colors_are_unique_up_to_palette_size() {
    for count in 1..=8 {
        let players = (0..count).map(|i| player(i, "p", "Orange")).collect::<Vec<_>>();
        let colors = assign_colors(&players);
        let distinct = colors.iter().map(|(_, c)| c).collect::<BTreeSet<_>>();
        assert_eq!(distinct.len(), count as usize);
    }
}

#[test]
fn overflow_players_share_fallback() {
    let players = (0..11).map(|i| player(i, "p", "Teal")).collect::<Vec<_>>();
    let colors = assign_colors(&players);

    let first_eight = (0..8)
        .filter_map(|id| colors.get(id))
        .collect::<BTreeSet<_>>();
    assert_eq!(first_eight.len(), 8);
    for id in 8..11 {
        assert_eq!(colors.get(id), Some(FALLBACK_COLOR));
    }
}

#[test]
fn unassigned_sender_uses_fallback() {
    let colors = assign_colors(&[player(0, "a", "Red")]);
    assert_eq!(colors.color_for(Some(0)), ColorName::Red);
    assert_eq!(colors.color_for(Some(42)), FALLBACK_COLOR);
    assert_eq!(colors.color_for(None), FALLBACK_COLOR);
}

#[test]
fn no_players_no_assignment() {
    assert!(assign_colors(&[]).is_empty());
}

// =============================================================================
// TRUNCATION
// =============================================================================

#[test]
fn truncate_keeps_log_at_boundary() {
    let messages = numbered(10);
    let out = truncate(&messages, keep(5));
    assert_eq!(out.len(), 10);
    assert!(out.iter().all(|e| matches!(e, ChatEntry::Message(_))));
}

#[test]
fn truncate_one_past_boundary() {
    let messages = numbered(11);
    let out = truncate(&messages, keep(5));
    assert_eq!(out.len(), 11);
    assert_eq!(out[5], ChatEntry::Omitted(1));
}

#[test]
fn truncate_counts_omitted_and_keeps_order() {
    let items = (0..23).collect::<Vec<u32>>();
    let out = truncate(&items, keep(4));
    assert_eq!(out.len(), 9);
    assert_eq!(out[4], ChatEntry::Omitted(15));

    let kept = out
        .iter()
        .filter_map(|e| match e {
            ChatEntry::Message(v) => Some(**v),
            ChatEntry::Omitted(_) => None,
        })
        .collect::<Vec<_>>();
    assert_eq!(kept, vec![0, 1, 2, 3, 19, 20, 21, 22]);
}

#[test]
fn truncate_empty_log() {
    let items: Vec<u32> = Vec::new();
    assert!(truncate(&items, keep(5)).is_empty());
}

#[test]
fn omission_notice_pluralizes() {
    assert_eq!(omission_notice(1), "(1 message omitted)");
    assert_eq!(omission_notice(2), "(2 messages omitted)");
    assert_eq!(omission_notice(15), "(15 messages omitted)");
}

// =============================================================================
// RENDERING
// =============================================================================

#[test]
fn plain_render_layout() {
    let players = vec![player(0, "Alice", "Red"), player(1, "Bob", "Blue")];
    let messages = vec![
        msg(Some((0, "Alice")), 1_000, "a"),
        msg(Some((1, "Bob")), 2_000, "b"),
        msg(Some((1, "Bob")), 3_723_000, "c"),
    ];

    let out = ChatRenderer::new(keep(1))
        .with_spoiler(false)
        .with_style(ChatStyle::Plain)
        .render(&messages, &players);
    assert_eq!(
        out,
        "```\n[00:01] Alice: a\n(1 message omitted)\n[1:02:03] Bob: c\n```"
    );
}

#[test]
fn ansi_render_colors_names_and_stamps() {
    let players = vec![player(0, "Alice", "Red")];
    let messages = vec![msg(Some((0, "Alice")), 1_000, "hello")];

    let out = render(&messages, &players, false, keep(5));
    let expected_line = format!(
        "{} {} hello",
        colorize("[00:01]", ColorName::Gray),
        colorize("Alice:", ColorName::Red)
    );
    assert_eq!(out, format!("```ansi\n{expected_line}\n```"));
}

#[test]
fn ansi_notice_is_gray() {
    let lines = ChatRenderer::new(keep(1)).render_lines(&numbered(3), &[player(0, "Alice", "Red")]);
    assert_eq!(lines[1], colorize("(1 message omitted)", ColorName::Gray));
}

#[test]
fn unknown_and_system_senders_render_with_fallback() {
    let players = vec![player(0, "Alice", "Red")];
    let messages = vec![
        msg(Some((9, "Ghost")), 0, "boo"),
        msg(Some((7, "")), 0, "anon"),
        msg(None, 0, "game paused"),
    ];

    let lines = ChatRenderer::new(keep(5)).render_lines(&messages, &players);
    assert!(lines[0].contains(&colorize("Ghost:", FALLBACK_COLOR)));
    assert!(lines[1].contains(&colorize("Player 7:", FALLBACK_COLOR)));
    assert!(lines[2].contains(&colorize("System:", FALLBACK_COLOR)));
}

#[test]
fn participant_name_wins_over_message_name() {
    let players = vec![player(0, "Alice", "Red")];
    let messages = vec![msg(Some((0, "alice_old")), 0, "hi")];

    let lines = ChatRenderer::new(keep(5))
        .with_style(ChatStyle::Plain)
        .render_lines(&messages, &players);
    assert_eq!(lines, vec!["[00:00] Alice: hi".to_owned()]);
}

#[test]
fn spoiler_toggle_only_adds_wrapper() {
    let players = vec![player(0, "Alice", "Red"), player(1, "Bob", "Teal")];
    let messages = numbered(14);

    let hidden = render(&messages, &players, true, keep(5));
    let shown = render(&messages, &players, false, keep(5));
    assert_eq!(hidden, format!("||{shown}||"));
}

#[test]
fn empty_log_renders_empty_block() {
    assert_eq!(render(&[], &[], false, keep(5)), "```ansi\n\n```");
    assert_eq!(render(&[], &[], true, keep(5)), "||```ansi\n\n```||");
}

#[test]
fn message_text_cannot_escape_block() {
    let messages = vec![msg(None, 0, "a```b\u{1b}[31m\nc")];
    let lines = ChatRenderer::new(keep(5))
        .with_style(ChatStyle::Plain)
        .render_lines(&messages, &[]);

    assert_eq!(lines.len(), 1);
    assert!(!lines[0].contains("```"));
    assert!(!lines[0].contains('\u{1b}'));
    assert!(lines[0].ends_with("b[31m c"));
}
