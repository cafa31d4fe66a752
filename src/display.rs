use std::time::Duration;

use chrono::NaiveDate;
use console::{style, Term};

use crate::difficulty::Difficulty;
use crate::session::SessionStats;

pub fn clear_screen() {
    let _ = Term::stdout().clear_screen();
}

pub fn welcome() {
    println!("{}", style("Welcome to the Weekday Guessing Game!").bold());
}

pub fn chosen_difficulty(difficulty: Difficulty) {
    println!();
    println!(
        "{}",
        style(format!(
            "--- Chosen difficulty: {} ---",
            difficulty.display_name()
        ))
        .bold()
    );
}

pub fn show_date(date: NaiveDate) {
    println!();
    println!("The date is: {}", style(date.format("%Y-%m-%d")).cyan());
}

pub fn show_round_result(success: bool, correct: &str, elapsed: Duration) {
    println!();
    println!("{}", style("--- Result ---").bold());
    if success {
        println!(
            "{}",
            style(format!("Correct! It was indeed a {}.", correct)).green()
        );
    } else {
        println!(
            "{}",
            style(format!(
                "Sorry, that's not right. The correct day was {}.",
                correct
            ))
            .red()
        );
    }
    println!("You took {:.2} seconds to answer.", elapsed.as_secs_f64());
}

pub fn summary(difficulty: Difficulty, stats: &SessionStats) {
    println!();
    println!("{}", style("--- Game Over: Final Stats ---").bold());
    println!("Difficulty played: {}", difficulty.display_name());
    println!(
        "Total rounds played: {}",
        style(stats.total_rounds).cyan()
    );
    println!(
        "Correct guesses: {} ({:.1}%)",
        style(stats.correct).green(),
        stats.success_rate
    );
    println!(
        "Average time to answer: {}",
        style(format!("{:.2} seconds", stats.avg_time)).yellow()
    );
    println!();
    println!("Thanks for playing!");
}

pub fn no_games() {
    println!();
    println!("No games were played. See you next time!");
}
