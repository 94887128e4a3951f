use crate::tracker::should_reset_daily_count;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// In-memory watering state. Starts empty on every launch; the daily count
/// belongs to the current local calendar day only.
#[derive(Debug, Clone, Default)]
pub struct WateringState {
    pub last_watered: Option<DateTime<Local>>,
    pub daily_count: u64,
}

impl WateringState {
    /// Registers a completed watering at `now`: drops a stale count from a
    /// previous day, then counts this watering and remembers the instant.
    pub fn record_watering(&mut self, now: DateTime<Local>) {
        self.refresh(now);
        self.daily_count = self.daily_count.saturating_add(1);
        self.last_watered = Some(now);
    }

    /// Resets the daily count to zero the first time a new calendar day is
    /// observed. Safe to call on every read.
    pub fn refresh(&mut self, now: DateTime<Local>) {
        if let Some(last) = self.last_watered {
            if should_reset_daily_count(last, now) {
                self.daily_count = 0;
            }
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct WaterRequest {
    pub duration: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct WaterResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub is_watering: bool,
    pub last_watered: Option<String>,
    pub last_watered_relative: Option<String>,
    pub daily_count: u64,
    pub mock_mode: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn noon(day: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 1, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn watering_increments_count_and_sets_instant() {
        let mut state = WateringState::default();
        let now = noon(5);

        state.record_watering(now);
        assert_eq!(state.daily_count, 1);
        assert_eq!(state.last_watered, Some(now));

        state.record_watering(now + Duration::minutes(10));
        assert_eq!(state.daily_count, 2);
    }

    #[test]
    fn refresh_resets_count_on_new_day() {
        let mut state = WateringState::default();
        state.record_watering(noon(5));
        state.record_watering(noon(5) + Duration::hours(1));
        assert_eq!(state.daily_count, 2);

        state.refresh(noon(6));
        assert_eq!(state.daily_count, 0);
        assert!(state.last_watered.is_some());
    }

    #[test]
    fn refresh_keeps_count_within_same_day() {
        let mut state = WateringState::default();
        state.record_watering(noon(5));

        state.refresh(noon(5) + Duration::hours(8));
        assert_eq!(state.daily_count, 1);
    }

    #[test]
    fn first_watering_of_a_new_day_counts_from_one() {
        let mut state = WateringState::default();
        state.record_watering(noon(5));
        state.record_watering(noon(5) + Duration::hours(2));

        state.record_watering(noon(6));
        assert_eq!(state.daily_count, 1);
    }
}
