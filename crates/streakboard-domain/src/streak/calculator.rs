use chrono::NaiveDate;

/// Length of the current run of consecutive activity days.
///
/// `dates` must be distinct and sorted most-recent-first (see
/// [`ActivityDates`](super::ActivityDates) for a normalising wrapper);
/// `today` is the civil date in the reference timezone.
///
/// The run must reach `today` or yesterday to count at all. From there the
/// walk goes backwards one civil day at a time and stops at the first gap;
/// anything older than the gap is ignored.
pub fn compute_streak(dates: &[NaiveDate], today: NaiveDate) -> u32 {
    let Some(&most_recent) = dates.first() else {
        return 0;
    };

    let is_anchored = most_recent == today || today.pred_opt() == Some(most_recent);
    if !is_anchored {
        return 0;
    }

    let mut streak = 1u32;
    let mut anchor = most_recent;

    for &date in &dates[1..] {
        match anchor.pred_opt() {
            Some(expected) if date == expected => {
                streak += 1;
                anchor = date;
            }
            _ => break,
        }
    }

    streak
}
