use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use datepicker_core::normalizer::parse_day;
use datepicker_core::{config, DatePicker, DatePickerConfig, FixedClock, PanelCoordinator};
use log::{error, info};

mod command;
mod render;

use command::{Command, HELP};

/// Terminal host for the date picker: renders the grid and reads commands from stdin
#[derive(Debug, Parser)]
#[command(name = "datepicker-demo", version, about, long_about = None)]
struct Args {
    /// YAML picker config (label, align, multiple, show_reset)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Pin "today" to this date (YYYY-MM-DD) instead of the current UTC day
    #[arg(short, long, value_parser = parse_day)]
    today: Option<NaiveDate>,
}

fn main() -> Result<()> {
    env_logger::init();
    info!("Starting date picker demo");

    let args = Args::parse();
    let picker_config = match &args.config {
        Some(path) => config::load(path).with_context(|| format!("Failed to load config {:?}", path))?,
        None => DatePickerConfig::default(),
    };

    // the coordinator is host state shared by every picker on the "page"
    let coordinator = PanelCoordinator::new();
    let mut picker = match args.today {
        Some(today) => DatePicker::with_clock(picker_config, coordinator.clone(), FixedClock(today)),
        None => DatePicker::new(picker_config, coordinator.clone()),
    };
    picker.subscribe(|event| match &event.selected {
        Some(day) => println!("→ selected {}", day.date),
        None => println!("→ selection cleared"),
    });

    println!("{}", render::render(&picker));
    println!("type 'help' for commands");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                error!("{:#}", e);
                println!("{:#}", e);
                continue;
            }
        };

        match command {
            Command::NextMonth => { picker.next_month(); }
            Command::PrevMonth => { picker.prev_month(); }
            Command::NextYear => { picker.next_year(); }
            Command::PrevYear => { picker.prev_year(); }
            Command::FirstMonth => { picker.first_month(); }
            Command::LastMonth => { picker.last_month(); }
            Command::Today => { picker.go_to_today(); }
            Command::GoTo(date) => { picker.go_to(date); }
            Command::Select(date) => {
                if picker.select_date(date).is_none() {
                    println!("multiple selection is not supported yet");
                }
            }
            Command::Reset => { picker.reset_date(); }
            Command::Toggle => picker.toggle_calendar(),
            Command::Outside => { picker.close_on_outside_interaction(); }
            Command::Show => {}
            Command::Help => {
                println!("{}", HELP);
                continue;
            }
            Command::Quit => break,
        }

        // end of this interaction's tick
        coordinator.drain_deferred();
        println!("{}", render::render(&picker));
        stdout.flush().context("Failed to flush stdout")?;
    }

    info!("Date picker demo finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["datepicker-demo"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.today.is_none());
    }

    #[test]
    fn test_args_config_and_today() {
        let args = Args::try_parse_from([
            "datepicker-demo",
            "--config",
            "picker.yaml",
            "--today",
            "2021-03-15",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("picker.yaml")));
        assert_eq!(args.today, NaiveDate::from_ymd_opt(2021, 3, 15));
    }

    #[test]
    fn test_args_reject_bad_input() {
        assert!(Args::try_parse_from(["datepicker-demo", "--today", "tomorrow"]).is_err());
        assert!(Args::try_parse_from(["datepicker-demo", "--verbose"]).is_err());
    }
}
