//! Date-seeded daily selection.
//!
//! The digest highlights a different subset of articles each UTC calendar
//! day. The seed is the date written as the integer `YYYYMMDD`, so every
//! reader sees the same selection on the same day, and the same input list
//! always shuffles the same way.
//!
//! The shuffle runs over whatever list it is given. Filtering the list first
//! (for a topic page) changes its length and order, and therefore the
//! selection.

use crate::prng::Mulberry32;
use chrono::{Datelike, NaiveDate, Utc};

/// Seed for a calendar date: `year * 10000 + month * 100 + day`.
///
/// ```
/// use chrono::NaiveDate;
/// use daily_digest::sampler::date_seed;
///
/// let d = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
/// assert_eq!(date_seed(d), 20240615);
/// ```
pub fn date_seed(date: NaiveDate) -> u32 {
    // Years before 0 are not meaningful for a news feed; wrap like the
    // 32-bit arithmetic everywhere else.
    (date.year() as u32)
        .wrapping_mul(10_000)
        .wrapping_add(date.month() * 100)
        .wrapping_add(date.day())
}

/// Today's calendar date in UTC.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Fisher–Yates shuffle driven by a fresh mulberry32 generator.
///
/// Walks `i` from `len - 1` down to `1`, swapping `items[i]` with
/// `items[floor(r * (i + 1))]`.
pub fn shuffle_seeded<T>(items: &mut [T], seed: u32) {
    let mut rng = Mulberry32::new(seed);
    for i in (1..items.len()).rev() {
        let j = rng.next_index(i + 1);
        items.swap(i, j);
    }
}

/// Pick `count` items for `date`.
///
/// Returns a prefix of the seeded permutation of `items`. A `count` larger
/// than the list is clamped to the list length.
pub fn select_daily_on<T: Clone>(items: &[T], count: usize, date: NaiveDate) -> Vec<T> {
    let take = clamp_count(count, items.len());
    let seed = date_seed(date);
    log::debug!(
        "daily selection: seed={} pool={} take={}",
        seed,
        items.len(),
        take
    );

    let mut buffer = items.to_vec();
    shuffle_seeded(&mut buffer, seed);
    buffer.truncate(take);
    buffer
}

/// Pick `count` items for the current UTC day.
pub fn select_daily<T: Clone>(items: &[T], count: usize) -> Vec<T> {
    select_daily_on(items, count, today_utc())
}

fn clamp_count(count: usize, len: usize) -> usize {
    if count > len {
        log::debug!("requested {} daily items, only {} available", count, len);
    }
    count.min(len)
}
