//! String formatting helpers for durations, timestamps, sizes and markup.

use time::OffsetDateTime;

const SIZE_UNITS: [&str; 7] = ["B", "kB", "MB", "GB", "TB", "PB", "EB"];

/// Display style of a Discord dynamic timestamp.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimestampStyle {
    /// Long date with day of week and short time.
    Full,
    /// Relative to now ("3 hours ago").
    Relative,
}

impl TimestampStyle {
    fn code(self) -> char {
        match self {
            Self::Full => 'F',
            Self::Relative => 'R',
        }
    }
}

/// Formats the elapsed time of a chat message: `mm:ss`, or `h:mm:ss` from
/// the first hour on. Sub-second remainders are truncated.
#[must_use]
pub fn format_message_time(time_ms: u64) -> String {
    let (hours, minutes, seconds) = split_ms(time_ms);
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes:02}:{seconds:02}")
    }
}

/// Formats a game length without a leading zero on the first field.
#[must_use]
pub fn format_game_duration(duration_ms: u64) -> String {
    let (hours, minutes, seconds) = split_ms(duration_ms);
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

fn split_ms(ms: u64) -> (u64, u64, u64) {
    let total_secs = ms / 1000;
    (total_secs / 3600, (total_secs / 60) % 60, total_secs % 60)
}

#[must_use]
pub fn format_dynamic_timestamp(date: OffsetDateTime, style: TimestampStyle) -> String {
    format!("<t:{}:{}>", date.unix_timestamp(), style.code())
}

/// Returns the clock face shortcode closest to the given time of day,
/// rounded to the nearest half hour (`:clock7:`, `:clock730:`).
#[must_use]
pub fn format_date_clock_emoji(date: OffsetDateTime) -> String {
    let mut hour = date.hour() % 12;
    let minute = date.minute();
    let half = (15..45).contains(&minute);
    if minute >= 45 {
        hour = (hour + 1) % 12;
    }
    let face = if hour == 0 { 12 } else { hour };
    if half {
        format!(":clock{face}30:")
    } else {
        format!(":clock{face}:")
    }
}

/// Formats a byte count with SI units and three significant digits
/// (`512 B`, `1.34 kB`, `12.5 MB`).
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_filesize(bytes: u64) -> String {
    if bytes < 1000 {
        return format!("{bytes} B");
    }

    let mut value = bytes as f64;
    let mut unit = 0usize;
    while value >= 1000.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1000.0;
        unit += 1;
    }

    format!("{} {}", three_significant_digits(value), SIZE_UNITS[unit])
}

fn three_significant_digits(value: f64) -> String {
    let decimals: usize = if value >= 100.0 {
        0
    } else if value >= 10.0 {
        1
    } else {
        2
    };
    let formatted = format!("{value:.decimals$}");
    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_owned()
    } else {
        formatted
    }
}

/// Hides a string behind a reveal-on-click spoiler.
#[must_use]
pub fn wrap_spoiler(s: &str) -> String {
    format!("||{s}||")
}

/// Wraps a string in a fenced code block, optionally tagged with a language.
#[must_use]
pub fn wrap_code_block(s: &str, lang: &str) -> String {
    format!("```{lang}\n{s}\n```")
}

#[cfg(test)]
#[path = "format_test.rs"]
mod tests;
