use crate::difficulty::Difficulty;
use crate::display;
use crate::prompt;
use crate::round::{self, RoundOutcome};
use crate::sampler;

#[derive(Debug, PartialEq)]
pub struct SessionStats {
    pub total_rounds: usize,
    pub correct: usize,
    pub success_rate: f64,
    pub avg_time: f64,
}

impl SessionStats {
    /// `None` when no rounds were completed.
    pub fn from_results(results: &[RoundOutcome]) -> Option<SessionStats> {
        if results.is_empty() {
            return None;
        }

        let total_rounds = results.len();
        let correct = results.iter().filter(|r| r.success).count();
        let total_time: f64 = results.iter().map(|r| r.elapsed.as_secs_f64()).sum();

        Some(SessionStats {
            total_rounds,
            correct,
            success_rate: correct as f64 / total_rounds as f64 * 100.0,
            avg_time: total_time / total_rounds as f64,
        })
    }
}

pub fn play() {
    display::welcome();

    let labels: Vec<&str> = Difficulty::ALL.iter().map(|d| d.display_name()).collect();
    let difficulty = match prompt::select("Choose a difficulty level:", &labels) {
        Some(index) => Difficulty::ALL[index],
        None => {
            display::no_games();
            return;
        }
    };

    display::clear_screen();
    display::chosen_difficulty(difficulty);

    let mut rng = rand::thread_rng();
    let mut results: Vec<RoundOutcome> = Vec::new();

    loop {
        let date = sampler::sample_date(difficulty, &mut rng);

        let outcome = match round::run_round(date) {
            Some(o) => o,
            None => break,
        };
        results.push(outcome);

        // Cancelling the confirm counts as "no"; rounds already played
        // still make it into the summary.
        let play_again = prompt::confirm("Play another round?", true);
        display::clear_screen();
        if play_again != Some(true) {
            break;
        }
    }

    match SessionStats::from_results(&results) {
        Some(stats) => display::summary(difficulty, &stats),
        None => display::no_games(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn outcome(success: bool, secs: f64) -> RoundOutcome {
        RoundOutcome {
            success,
            elapsed: Duration::from_secs_f64(secs),
        }
    }

    #[test]
    fn test_stats_over_mixed_results() {
        let results = [outcome(true, 2.0), outcome(false, 4.0), outcome(true, 3.0)];
        let stats = SessionStats::from_results(&results).unwrap();

        assert_eq!(stats.total_rounds, 3);
        assert_eq!(stats.correct, 2);
        assert!((stats.success_rate - 66.7).abs() < 0.05);
        assert!((stats.avg_time - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_stats_count_failed_rounds_in_average() {
        let results = [outcome(false, 1.0), outcome(true, 5.0)];
        let stats = SessionStats::from_results(&results).unwrap();

        assert_eq!(stats.correct, 1);
        assert!((stats.success_rate - 50.0).abs() < 1e-9);
        assert!((stats.avg_time - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_stats_empty_results() {
        assert!(SessionStats::from_results(&[]).is_none());
    }

    #[test]
    fn test_stats_all_correct() {
        let results = [outcome(true, 2.0)];
        let stats = SessionStats::from_results(&results).unwrap();

        assert_eq!(stats.total_rounds, 1);
        assert!((stats.success_rate - 100.0).abs() < 1e-9);
    }
}
