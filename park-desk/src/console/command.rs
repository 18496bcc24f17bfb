//! Slash command parsing
//!
//! One input line becomes one [`ConsoleCommand`]. Arguments are split on
//! whitespace; free-text arguments (search, subject, message) take the rest
//! of the line.

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{ReportCategory, RevenuePeriod};

use crate::core::{DeskCommand, Tab};
use crate::dashboard::ChartKind;
use crate::utils::time::{now_minute, parse_date_bound};
use crate::views::StatusFilter;

/// Command table shown by `/help`: (usage, description)
pub const COMMANDS: &[(&str, &str)] = &[
    ("/help", "Show this help"),
    ("/show", "Show the active tab"),
    ("/tab <dashboard|allotment|payments|report>", "Switch tab"),
    ("/search [text]", "Search slots or payments (empty clears)"),
    ("/status <All|Paid|Unpaid|Pending>", "Filter payments by status"),
    ("/from [YYYY-MM-DD]", "Payments from date (empty clears)"),
    ("/to [YYYY-MM-DD]", "Payments up to date (empty clears)"),
    ("/next", "Next payments page"),
    ("/prev", "Previous payments page"),
    ("/click <slot>", "Open the prompt for a slot"),
    ("/confirm", "Apply the prompt's action"),
    ("/cancel", "Close the prompt"),
    ("/assign <slot> <plate>", "Park a vehicle now"),
    ("/free <slot>", "Release a slot"),
    ("/chart <week|month> <bar|area>", "Switch a revenue chart"),
    ("/subject <text>", "Report subject"),
    ("/category <name>", "Report category"),
    ("/message <text>", "Report message"),
    ("/attach <name> <bytes>", "Attach a file to the report"),
    ("/detach", "Remove the report attachment"),
    ("/submit", "Send the report"),
    ("/reset", "Start a new report"),
    ("/dump", "Print all slots as JSON"),
    ("/quit", "Exit"),
];

/// Parsed console input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Help,
    Show,
    Dump,
    Quit,
    Desk(DeskCommand),
}

/// Parse one line, stamping `/assign` with the current local time
///
/// Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> AppResult<Option<ConsoleCommand>> {
    parse_command_with_clock(line, now_minute)
}

pub fn parse_command_with_clock(
    line: &str,
    now: impl Fn() -> String,
) -> AppResult<Option<ConsoleCommand>> {
    let line = line.trim();
    let Some(name) = line.split_whitespace().next() else {
        return Ok(None);
    };
    let rest = line[name.len()..].trim();
    let parts: Vec<&str> = rest.split_whitespace().collect();

    let desk = |cmd: DeskCommand| -> AppResult<Option<ConsoleCommand>> {
        Ok(Some(ConsoleCommand::Desk(cmd)))
    };

    match name {
        "/help" => Ok(Some(ConsoleCommand::Help)),
        "/show" => Ok(Some(ConsoleCommand::Show)),
        "/dump" => Ok(Some(ConsoleCommand::Dump)),
        "/quit" | "/exit" => Ok(Some(ConsoleCommand::Quit)),
        "/tab" => {
            let tab = rest
                .parse::<Tab>()
                .map_err(|e| AppError::invalid_request(e).with_detail("usage", usage("/tab")))?;
            desk(DeskCommand::SwitchTab(tab))
        }
        "/search" => desk(DeskCommand::Search(rest.to_string())),
        "/status" => {
            let status = rest.parse::<StatusFilter>().map_err(|e| {
                AppError::with_message(ErrorCode::InvalidPaymentStatus, e)
                    .with_detail("usage", usage("/status"))
            })?;
            desk(DeskCommand::SetStatus(status))
        }
        "/from" => desk(DeskCommand::SetFrom(parse_date_bound(Some(rest))?)),
        "/to" => desk(DeskCommand::SetTo(parse_date_bound(Some(rest))?)),
        "/next" => desk(DeskCommand::NextPage),
        "/prev" => desk(DeskCommand::PrevPage),
        "/click" => {
            let [slot] = expect_args::<1>(name, &parts)?;
            desk(DeskCommand::Click(slot.to_uppercase()))
        }
        "/confirm" => desk(DeskCommand::Confirm),
        "/cancel" => desk(DeskCommand::Cancel),
        "/assign" => {
            let [slot, plate] = expect_args::<2>(name, &parts)?;
            desk(DeskCommand::Assign {
                slot: slot.to_uppercase(),
                plate: plate.to_string(),
                entry: now(),
            })
        }
        "/free" => {
            let [slot] = expect_args::<1>(name, &parts)?;
            desk(DeskCommand::Free(slot.to_uppercase()))
        }
        "/chart" => {
            let [period, kind] = expect_args::<2>(name, &parts)?;
            let period = match period.to_lowercase().as_str() {
                "week" => RevenuePeriod::Week,
                "month" => RevenuePeriod::Month,
                other => {
                    return Err(AppError::invalid_request(format!("unknown chart: {}", other))
                        .with_detail("usage", usage(name)));
                }
            };
            let kind = kind
                .parse::<ChartKind>()
                .map_err(|e| AppError::invalid_request(e).with_detail("usage", usage(name)))?;
            desk(DeskCommand::SetChart { period, kind })
        }
        "/subject" => desk(DeskCommand::SetSubject(rest.to_string())),
        "/category" => {
            let category = rest.parse::<ReportCategory>().map_err(|e| {
                AppError::with_message(ErrorCode::InvalidReportCategory, e)
                    .with_detail("usage", usage(name))
            })?;
            desk(DeskCommand::SetCategory(category))
        }
        "/message" => desk(DeskCommand::SetMessage(rest.to_string())),
        "/attach" => {
            let [file, size] = expect_args::<2>(name, &parts)?;
            let size_bytes = size.parse::<u64>().map_err(|_| {
                AppError::with_message(ErrorCode::InvalidFormat, format!("invalid size: {}", size))
                    .with_detail("usage", usage(name))
            })?;
            desk(DeskCommand::Attach {
                name: file.to_string(),
                size_bytes,
            })
        }
        "/detach" => desk(DeskCommand::Detach),
        "/submit" => desk(DeskCommand::Submit),
        "/reset" => desk(DeskCommand::ResetReport),
        other => Err(
            AppError::invalid_request(format!("Unknown command: {} (try /help)", other))
                .with_detail("command", other),
        ),
    }
}

fn usage(name: &str) -> &'static str {
    COMMANDS
        .iter()
        .find(|(u, _)| u.split_whitespace().next() == Some(name))
        .map(|(u, _)| *u)
        .unwrap_or("/help")
}

/// Exactly `N` whitespace-separated arguments
fn expect_args<'a, const N: usize>(name: &str, parts: &[&'a str]) -> AppResult<[&'a str; N]> {
    <[&str; N]>::try_from(parts).map_err(|_| {
        AppError::with_message(
            ErrorCode::InvalidRequest,
            format!("Usage: {}", usage(name)),
        )
        .with_detail("usage", usage(name))
    })
}
