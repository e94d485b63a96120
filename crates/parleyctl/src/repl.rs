//! REPL - interactive chat loop
//!
//! Reads one message per line, waits out the configured reply delay (with
//! an optional typing indicator) and prints the pipeline's reply.

use crate::display;
use anyhow::{Context, Result};
use chrono::Local;
use parley_shared::{ChatSettings, ResponsePipeline};
use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

const HELP_TEXT: &str =
    "Commands:\n  /help      show this list\n  /history   show the turn count\n  /quit      leave the chat (also /exit)";

/// Presentation knobs for one session
#[derive(Debug, Clone)]
pub struct ReplOptions {
    pub settings: ChatSettings,
    pub delay: Duration,
    pub typing_indicator: bool,
    pub colors: bool,
}

impl ReplOptions {
    pub fn from_settings(settings: &ChatSettings) -> Self {
        let colors = display::use_colors();
        Self {
            settings: settings.clone(),
            delay: settings.response_speed.delay(),
            typing_indicator: settings.show_typing_indicator && colors,
            colors,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Quit,
    History,
    Help,
    Message,
    Empty,
}

fn parse_command(line: &str) -> Command {
    match line.trim() {
        "" => Command::Empty,
        "/quit" | "/exit" => Command::Quit,
        "/history" => Command::History,
        "/help" => Command::Help,
        _ => Command::Message,
    }
}

/// Run until `/quit` or end of input. Returns the number of replies given.
pub async fn run<R, W>(
    pipeline: &mut ResponsePipeline,
    options: &ReplOptions,
    input: R,
    out: &mut W,
) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    let mut replies = 0;

    writeln!(
        out,
        "Chatting with {}. Type /help for commands.",
        options.settings.bot_name
    )?;

    loop {
        write!(out, "{}", display::prompt(options.colors))?;
        out.flush()?;

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            break;
        };

        match parse_command(&line) {
            Command::Empty => continue,
            Command::Quit => break,
            Command::Help => writeln!(out, "{}", HELP_TEXT)?,
            Command::History => writeln!(
                out,
                "{} turns in this conversation",
                pipeline.context().len()
            )?,
            Command::Message => {
                let reply = reply_with_delay(pipeline, options, line.trim()).await;
                writeln!(
                    out,
                    "{}",
                    display::reply_header(&options.settings, Local::now(), options.colors)
                )?;
                writeln!(out, "{}\n", reply)?;
                replies += 1;
            }
        }
    }

    debug!(replies, "chat session ended");
    Ok(replies)
}

async fn reply_with_delay(
    pipeline: &mut ResponsePipeline,
    options: &ReplOptions,
    line: &str,
) -> String {
    let spinner = options
        .typing_indicator
        .then(|| display::typing_spinner(&options.settings, options.colors));

    if !options.delay.is_zero() {
        tokio::time::sleep(options.delay).await;
    }
    let reply = pipeline.generate_response(line).await;

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    reply
}
