//! Plain-text rendering of the picker.
//!
//! Cell markers: `[dd]` selected, `<dd>` today, `(dd)` outside the anchor
//! month, ` dd ` otherwise.

use chrono::Datelike;
use datepicker_core::DatePicker;
use shared::CalendarDay;

pub fn render_day(day: &CalendarDay) -> String {
    let number = day.date.day();
    if day.is_selected {
        format!("[{:>2}]", number)
    } else if day.is_today {
        format!("<{:>2}>", number)
    } else if !day.in_anchor_month {
        format!("({:>2})", number)
    } else {
        format!(" {:>2} ", number)
    }
}

/// The closed field: label plus current value
pub fn render_field(picker: &DatePicker) -> String {
    let value = picker.form_value().unwrap_or_else(|| "----------".to_string());
    let arrow = if picker.is_open() { "▴" } else { "▾" };
    format!("{}: {} {}", picker.label(), value, arrow)
}

/// The open panel: header, weekday names and the 6x7 grid
pub fn render_panel(picker: &DatePicker) -> String {
    let mut lines = Vec::new();
    lines.push(format!("‹‹ ‹  {:^18}  › ››", picker.month_label()));
    lines.push(
        picker
            .day_names()
            .iter()
            .map(|name| format!("  {} ", name))
            .collect::<String>(),
    );
    for week in picker.weeks().weeks.iter() {
        lines.push(week.iter().map(render_day).collect::<String>());
    }
    if picker.show_reset() {
        lines.push("[reset]".to_string());
    }
    lines.join("\n")
}

pub fn render(picker: &DatePicker) -> String {
    if picker.is_open() {
        format!("{}\n{}", render_field(picker), render_panel(picker))
    } else {
        render_field(picker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use datepicker_core::{DatePickerConfig, FixedClock, PanelCoordinator};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_render_day_markers() {
        let mut day = CalendarDay {
            date: ymd(2021, 3, 9),
            is_today: false,
            is_selected: false,
            in_anchor_month: true,
        };
        assert_eq!(render_day(&day), "  9 ");
        day.in_anchor_month = false;
        assert_eq!(render_day(&day), "( 9)");
        day.is_today = true;
        assert_eq!(render_day(&day), "< 9>");
        day.is_selected = true;
        assert_eq!(render_day(&day), "[ 9]");
    }

    #[test]
    fn test_render_closed_and_open() {
        let coordinator = PanelCoordinator::new();
        let mut picker = DatePicker::with_clock(
            DatePickerConfig::default(),
            coordinator.clone(),
            FixedClock(ymd(2021, 3, 15)),
        );
        picker.select_date(ymd(2021, 3, 9));
        assert_eq!(render(&picker), "Select a date: 2021-03-09 ▾");

        picker.toggle_calendar();
        coordinator.drain_deferred();
        let text = render(&picker);
        let lines: Vec<_> = text.lines().collect();
        // field, header, day names, 6 weeks, reset
        assert_eq!(lines.len(), 10);
        assert!(lines[1].contains("March 2021"));
        assert!(lines[3].starts_with("  1 "));
        assert!(lines[4].contains("[ 9]"));
        assert!(lines[5].contains("<15>"));
        assert_eq!(lines[9], "[reset]");
    }
}
