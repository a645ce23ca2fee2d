use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use repinfo::{ChatStyle, RepInfoError, UserOptions, file_rep_info, resolve_options};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    RepInfo(#[from] RepInfoError),
    #[error("failed to read replay file {path}: {source}")]
    ReplayFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Prints embed-ready info for a decoded replay dump.
///
/// Option defaults come from `REPINFO_USE_SPOILERS`, `REPINFO_MAX_CHAT_LINES`
/// and `REPINFO_CHAT_STYLE`; flags override them.
#[derive(Parser, Debug)]
#[command(name = "repinfo", about = "Replay info and chat log renderer for chat embeds")]
struct Cli {
    /// JSON dump produced by the replay decoder.
    dump: PathBuf,

    /// Original replay file, used only to report its size.
    #[arg(long)]
    replay: Option<PathBuf>,

    /// Chat messages kept on each side of the omission notice.
    #[arg(long, allow_negative_numbers = true)]
    max_chat_lines: Option<i64>,

    /// Show the chat log without a spoiler wrapper.
    #[arg(long)]
    no_spoilers: bool,

    /// Render chat without ANSI colors.
    #[arg(long)]
    plain: bool,

    /// Print only the rendered chat block instead of the full JSON.
    #[arg(long)]
    chat_only: bool,
}

impl Cli {
    fn user_options(&self) -> UserOptions {
        UserOptions {
            use_spoiler_messages: self.no_spoilers.then_some(false),
            max_chat_lines: self.max_chat_lines,
            chat_style: self.plain.then_some(ChatStyle::Plain),
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    match run(&Cli::parse()) {
        Ok(out) => {
            println!("{out}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "repinfo failed");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, CliError> {
    let options = resolve_options(&UserOptions::from_env()?.merge(cli.user_options()))?;
    let file_size = cli.replay.as_deref().map(replay_size).transpose()?;

    let info = file_rep_info(&cli.dump, file_size, &options)?;
    tracing::info!(title = %info.rich.title, "replay info generated");

    if cli.chat_only {
        return Ok(info.rich.messages);
    }
    Ok(serde_json::to_string_pretty(&info)?)
}

fn replay_size(path: &Path) -> Result<u64, CliError> {
    std::fs::metadata(path)
        .map(|meta| meta.len())
        .map_err(|source| CliError::ReplayFile {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
