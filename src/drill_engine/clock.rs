//! Clock reading: random analogue times and how to say them.

use std::f64::consts::PI;
use std::fmt;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::drill_engine::error::{DrillError, Result};

/// Hours on a 12-hour dial, 0 standing for twelve.
pub const HOURS_ON_DIAL: u8 = 12;
pub const MINUTES_PER_HOUR: u8 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClockTime {
    hours: u8,
    minutes: u8,
}

impl ClockTime {
    /// Hours in `0..12`, minutes in `0..60`.
    pub fn new(hours: u8, minutes: u8) -> Result<Self> {
        if hours >= HOURS_ON_DIAL || minutes >= MINUTES_PER_HOUR {
            return Err(DrillError::ClockTimeOutOfRange { hours, minutes });
        }
        Ok(ClockTime { hours, minutes })
    }

    pub fn hours(self) -> u8 {
        self.hours
    }

    pub fn minutes(self) -> u8 {
        self.minutes
    }

    /// Hour and minute hand angles in radians, clockwise from twelve.
    /// The hour hand creeps forward with the minutes.
    pub fn hand_angles(self) -> (f64, f64) {
        let h = f64::from(self.hours);
        let m = f64::from(self.minutes);
        let hour = h * PI / 6.0 + m * PI / (6.0 * 60.0);
        let minute = m * PI / 30.0;
        (hour, minute)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hours, self.minutes)
    }
}

/// Uniform time on the dial.
pub fn random_time<R: Rng>(rng: &mut R) -> ClockTime {
    ClockTime {
        hours: rng.gen_range(0..HOURS_ON_DIAL),
        minutes: rng.gen_range(0..MINUTES_PER_HOUR),
    }
}

/// Random time from `rng_seed`, or from entropy when `None`.
pub fn random_time_seeded(rng_seed: Option<u64>) -> ClockTime {
    let mut rng: StdRng = match rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };
    random_time(&mut rng)
}

/// e.g. `"The time is 3 15"`, or `"The time is 7 o'clock"` on the hour.
pub fn time_text(time: ClockTime) -> String {
    if time.minutes == 0 {
        format!("The time is {} o'clock", time.hours)
    } else {
        format!("The time is {} {}", time.hours, time.minutes)
    }
}
