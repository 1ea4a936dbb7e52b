//! Meeting calendar and the dramatic-arc difficulty curve.
//!
//! The difficulty curve keys every stochastic process off the meeting
//! number in three phases: an orientation phase (meetings 1-2), a
//! complications phase (3-5), and a pressure-cooker phase (6-8). Later
//! phases roll more shocks, add more noise, and weaken mean reversion.

use crate::types::Meeting;
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct MeetingDate {
    pub meeting: Meeting,
    ymd: (i32, u32, u32),
    pub display: &'static str,
}

impl MeetingDate {
    pub fn date(&self) -> NaiveDate {
        let (y, m, d) = self.ymd;
        NaiveDate::from_ymd_opt(y, m, d).expect("calendar table holds valid dates")
    }
}

/// 2026 policy meeting calendar. Meeting numbers are 1-based.
pub const MEETING_SCHEDULE: [MeetingDate; 8] = [
    MeetingDate { meeting: 1, ymd: (2026, 3, 18), display: "March 17-18, 2026" },
    MeetingDate { meeting: 2, ymd: (2026, 5, 6), display: "May 5-6, 2026" },
    MeetingDate { meeting: 3, ymd: (2026, 6, 17), display: "June 16-17, 2026" },
    MeetingDate { meeting: 4, ymd: (2026, 7, 29), display: "July 28-29, 2026" },
    MeetingDate { meeting: 5, ymd: (2026, 9, 16), display: "September 15-16, 2026" },
    MeetingDate { meeting: 6, ymd: (2026, 11, 4), display: "November 3-4, 2026" },
    MeetingDate { meeting: 7, ymd: (2026, 12, 16), display: "December 15-16, 2026" },
    MeetingDate { meeting: 8, ymd: (2027, 1, 27), display: "January 26-27, 2027" },
];

/// Date of the meeting immediately before the game starts.
pub fn pre_game_meeting_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 29).expect("valid date")
}

/// Look up the schedule entry for a meeting, saturating at the last one.
pub fn schedule_entry(meeting: Meeting) -> &'static MeetingDate {
    let idx = (meeting.max(1) as usize - 1).min(MEETING_SCHEDULE.len() - 1);
    &MEETING_SCHEDULE[idx]
}

/// Stochastic-process multipliers for one meeting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyProfile {
    pub shock_prob_multiplier: f64,
    pub noise_amplitude: f64,
    pub mean_reversion_strength: f64,
    pub inflation_stickiness: f64,
}

impl DifficultyProfile {
    /// Difficulty scaling by meeting phase.
    pub fn for_meeting(meeting: Meeting) -> Self {
        if meeting <= 2 {
            // Orientation phase: relative calm.
            Self {
                shock_prob_multiplier: 0.5,
                noise_amplitude: 0.7,
                mean_reversion_strength: 1.3,
                inflation_stickiness: 0.8,
            }
        } else if meeting <= 5 {
            // Complications build: tension sharpens.
            let progress = (meeting as f64 - 2.0) / 3.0; // 0.33 -> 1.0
            Self {
                shock_prob_multiplier: 1.0 + progress * 0.5,
                noise_amplitude: 1.0 + progress * 0.2,
                mean_reversion_strength: 1.0 - progress * 0.3,
                inflation_stickiness: 1.0 + progress * 0.3,
            }
        } else {
            // Pressure cooker: consequences materialize.
            let progress = (meeting as f64 - 5.0) / 3.0;
            Self {
                shock_prob_multiplier: 1.5 + progress * 0.5,
                noise_amplitude: 1.2 + progress * 0.3,
                mean_reversion_strength: 0.7 - progress * 0.3,
                inflation_stickiness: 1.3 + progress * 0.2,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_is_strictly_ordered() {
        for pair in MEETING_SCHEDULE.windows(2) {
            assert!(pair[0].date() < pair[1].date());
            assert_eq!(pair[0].meeting + 1, pair[1].meeting);
        }
    }

    #[test]
    fn schedule_entry_saturates_past_the_end() {
        assert_eq!(schedule_entry(1).meeting, 1);
        assert_eq!(schedule_entry(8).meeting, 8);
        assert_eq!(schedule_entry(12).meeting, 8);
    }

    #[test]
    fn difficulty_escalates_across_phases() {
        let calm = DifficultyProfile::for_meeting(1);
        let mid = DifficultyProfile::for_meeting(5);
        let late = DifficultyProfile::for_meeting(8);
        assert!(calm.shock_prob_multiplier < mid.shock_prob_multiplier);
        assert!(mid.shock_prob_multiplier < late.shock_prob_multiplier);
        assert!(calm.mean_reversion_strength > late.mean_reversion_strength);
    }
}
