use std::time::{Duration, Instant};

use chrono::{Datelike, NaiveDate};

use crate::display;
use crate::prompt;

pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

#[derive(Debug, Clone, Copy)]
pub struct RoundOutcome {
    pub success: bool,
    pub elapsed: Duration,
}

pub fn weekday_name(date: NaiveDate) -> &'static str {
    WEEKDAY_NAMES[date.weekday().num_days_from_sunday() as usize]
}

/// Plays a single round. Returns `None` when the user cancels the
/// prompt; nothing is printed or recorded for the round in that case.
pub fn run_round(date: NaiveDate) -> Option<RoundOutcome> {
    let correct = weekday_name(date);

    display::show_date(date);

    let start = Instant::now();
    let choice = prompt::select("What day of the week is this?", &WEEKDAY_NAMES)?;
    let elapsed = start.elapsed();

    let success = WEEKDAY_NAMES[choice] == correct;
    display::show_round_result(success, correct, elapsed);

    Some(RoundOutcome { success, elapsed })
}
