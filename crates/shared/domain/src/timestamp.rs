//! Timestamp helpers.

use chrono::{DateTime, Duration, Utc};

/// Return a timestamp strictly later than `previous`, normally the current time.
pub fn advance(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + Duration::nanoseconds(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_is_strictly_monotonic() {
        let future = Utc::now() + Duration::hours(1);
        assert!(advance(future) > future);

        let past = Utc::now() - Duration::hours(1);
        assert!(advance(past) > past);
    }
}
