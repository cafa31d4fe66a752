use chrono::NaiveDate;
use rand::Rng;

use crate::difficulty::Difficulty;
use crate::doomsday;

// Years of the form century + multiple-of-12 (plus a small offset) keep
// the year's anchor weekday close to the century's reference, which is
// what makes the lower tiers workable in your head.
const YEAR_BASES: [i32; 9] = [0, 12, 24, 36, 48, 60, 72, 84, 96];

const MAX_ANCHOR_OFFSET: u32 = 6;

pub fn sample_date(difficulty: Difficulty, rng: &mut impl Rng) -> NaiveDate {
    if difficulty == Difficulty::SuperHard {
        return sample_uniform(rng);
    }

    let year = sample_year(difficulty.year_range(), rng);

    match difficulty {
        Difficulty::Easy => sample_near_anchor(year, rng),
        _ => sample_day_of_year(year, rng),
    }
}

// Fully uniform over the whole supported range.
fn sample_uniform(rng: &mut impl Rng) -> NaiveDate {
    let start = NaiveDate::from_ymd_opt(1500, 1, 1).expect("valid date");
    let end = NaiveDate::from_ymd_opt(2500, 12, 31).expect("valid date");
    let total_days = end.signed_duration_since(start).num_days();

    start + chrono::Duration::days(rng.gen_range(0..total_days))
}

fn sample_year((lo, hi): (i32, i32), rng: &mut impl Rng) -> i32 {
    let centuries = (hi + 1 - lo + 99) / 100;
    let century = lo + 100 * rng.gen_range(0..centuries);
    let base = YEAR_BASES[rng.gen_range(0..YEAR_BASES.len())];
    let offset = rng.gen_range(0..=3);

    (century + base + offset).clamp(lo, hi)
}

// Day lands within a week after the month's anchor day. Candidates past
// the end of the month (Feb 30 and the like) redraw only the offset.
fn sample_near_anchor(year: i32, rng: &mut impl Rng) -> NaiveDate {
    let anchors = doomsday::anchor_days(year);
    let month: u32 = rng.gen_range(1..=12);

    loop {
        let day = anchors[(month - 1) as usize] + rng.gen_range(0..=MAX_ANCHOR_OFFSET);
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            return date;
        }
    }
}

// Ordinal 366 misses in a common year; redraw until one lands.
fn sample_day_of_year(year: i32, rng: &mut impl Rng) -> NaiveDate {
    loop {
        let ordinal: u32 = rng.gen_range(1..=366);
        if let Some(date) = NaiveDate::from_yo_opt(year, ordinal) {
            return date;
        }
    }
}
