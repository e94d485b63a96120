//! Terminal rendering for chat lines and the typing indicator

use chrono::{DateTime, Local};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use parley_shared::ChatSettings;
use std::io::{self, IsTerminal};
use std::time::Duration;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Whether stdout should get ANSI colors
pub fn use_colors() -> bool {
    io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}

/// `HH:MM` clock time shown next to messages
pub fn clock(at: DateTime<Local>) -> String {
    at.format("%H:%M").to_string()
}

/// Header line printed above a bot reply
pub fn reply_header(settings: &ChatSettings, at: DateTime<Local>, colors: bool) -> String {
    let stamp = settings.show_timestamps.then(|| clock(at));
    match (colors, stamp) {
        (true, Some(stamp)) => format!(
            "{} {}",
            format!("{}:", settings.bot_name).bright_magenta().bold(),
            stamp.dimmed()
        ),
        (true, None) => format!("{}", format!("{}:", settings.bot_name).bright_magenta().bold()),
        (false, Some(stamp)) => format!("{}: {}", settings.bot_name, stamp),
        (false, None) => format!("{}:", settings.bot_name),
    }
}

/// Prompt shown before reading a user line
pub fn prompt(colors: bool) -> String {
    if colors {
        format!("{} ", "you:".bright_cyan().bold())
    } else {
        "you: ".to_string()
    }
}

/// Spinner shown while the reply delay runs
pub fn typing_spinner(settings: &ChatSettings, colors: bool) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    let template = if colors {
        "{spinner:.magenta} {msg}"
    } else {
        "{spinner} {msg}"
    };
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(SPINNER_FRAMES)
            .template(template)
            .unwrap(),
    );
    spinner.set_message(format!("{} is typing...", settings.bot_name));
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap()
    }

    #[test]
    fn test_clock_is_zero_padded() {
        assert_eq!(clock(at()), "14:05");
    }

    #[test]
    fn test_plain_header() {
        let mut settings = ChatSettings::default();
        assert_eq!(reply_header(&settings, at(), false), "AI Assistant: 14:05");

        settings.show_timestamps = false;
        settings.bot_name = "Bob".to_string();
        assert_eq!(reply_header(&settings, at(), false), "Bob:");
    }

    #[test]
    fn test_colored_header_keeps_name() {
        let settings = ChatSettings::default();
        let header = reply_header(&settings, at(), true);
        assert!(header.contains("AI Assistant:"));
        assert!(header.contains("14:05"));
        assert!(header.contains('\u{1b}'));
    }
}
