use chrono::{DateTime, Utc};
use std::fmt;

/// Remaining time until a deadline, truncated to the largest whole unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineLabel {
    Overdue,
    Minutes(i64),
    Hours(i64),
    Days(i64),
}

impl DeadlineLabel {
    pub fn is_overdue(self) -> bool {
        self == DeadlineLabel::Overdue
    }
}

impl fmt::Display for DeadlineLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeadlineLabel::Overdue => write!(f, "OVERDUE"),
            DeadlineLabel::Minutes(m) => write!(f, "{m}m"),
            DeadlineLabel::Hours(h) => write!(f, "{h}h"),
            DeadlineLabel::Days(d) => write!(f, "{d}d"),
        }
    }
}

pub fn deadline_label(deadline: DateTime<Utc>, now: DateTime<Utc>) -> DeadlineLabel {
    let remaining = deadline - now;
    if remaining < chrono::Duration::zero() {
        return DeadlineLabel::Overdue;
    }
    // Non-negative from here, so truncation is a floor.
    let hours = remaining.num_hours();
    if hours < 1 {
        DeadlineLabel::Minutes(remaining.num_minutes())
    } else if hours < 24 {
        DeadlineLabel::Hours(hours)
    } else {
        DeadlineLabel::Days(hours / 24)
    }
}
