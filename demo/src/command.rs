use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use datepicker_core::normalizer::parse_day;

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NextMonth,
    PrevMonth,
    NextYear,
    PrevYear,
    FirstMonth,
    LastMonth,
    Today,
    GoTo(NaiveDate),
    Select(NaiveDate),
    Reset,
    /// Click on the date field (toggles the panel on the next tick)
    Toggle,
    /// Click somewhere outside the panel
    Outside,
    Show,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self> {
        let mut parts = line.split_whitespace();
        let Some(verb) = parts.next() else {
            bail!("Empty command");
        };
        let argument = parts.next();

        let command = match verb {
            "next" | "n" => Command::NextMonth,
            "prev" | "p" => Command::PrevMonth,
            "next-year" => Command::NextYear,
            "prev-year" => Command::PrevYear,
            "first" => Command::FirstMonth,
            "last" => Command::LastMonth,
            "today" => Command::Today,
            "goto" => Command::GoTo(date_argument(verb, argument)?),
            "select" | "s" => Command::Select(date_argument(verb, argument)?),
            "reset" => Command::Reset,
            "toggle" | "open" => Command::Toggle,
            "outside" => Command::Outside,
            "show" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            other => bail!("Unknown command: {}", other),
        };
        Ok(command)
    }
}

fn date_argument(verb: &str, argument: Option<&str>) -> Result<NaiveDate> {
    let raw = argument.with_context(|| format!("'{}' needs a date (YYYY-MM-DD)", verb))?;
    parse_day(raw).with_context(|| format!("'{}' needs a date (YYYY-MM-DD)", verb))
}

pub const HELP: &str = "\
commands:
  next | prev            move one month
  next-year | prev-year  move one year
  first | last           jump to January / December
  today | goto DATE      jump to today / DATE
  select DATE            toggle selection of DATE (YYYY-MM-DD)
  reset                  clear the selection
  toggle | outside       click the field / click outside the panel
  show | help | quit";
