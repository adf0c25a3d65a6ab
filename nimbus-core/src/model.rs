use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::icon::Icon;

/// One observation of current conditions, as delivered by the forecast
/// endpoint. Constructed only by a fully successful parse; there is no
/// partial value, and replacing it is the only mutation the app performs.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentWeather {
    /// Condition code reported upstream, e.g. "rain" or "clear-day".
    pub icon_code: String,
    /// Observation instant, epoch seconds.
    pub observed_at: i64,
    pub temperature_f: f64,
    /// Relative humidity as a fraction in 0.0..=1.0.
    pub humidity: f64,
    /// Precipitation probability as a fraction in 0.0..=1.0.
    pub precip_probability: f64,
    pub summary: String,
    /// IANA timezone name of the observed location, e.g. "America/New_York".
    pub timezone: String,
}

impl CurrentWeather {
    /// Temperature rounded to the nearest whole degree for display.
    pub fn rounded_temperature(&self) -> i32 {
        self.temperature_f.round() as i32
    }

    /// Precipitation probability as a whole percentage (0.42 -> 42).
    pub fn precip_chance_pct(&self) -> u8 {
        (self.precip_probability * 100.0).round() as u8
    }

    /// Observation time formatted as `h:mm a` (e.g. "2:05 PM") in the
    /// location's own timezone. An unrecognized timezone name falls back
    /// to UTC rather than failing, matching the upstream payload's
    /// leniency about zone identifiers.
    pub fn formatted_time(&self) -> String {
        let tz: Tz = self.timezone.parse().unwrap_or(Tz::UTC);
        let when =
            DateTime::from_timestamp(self.observed_at, 0).unwrap_or(DateTime::<Utc>::UNIX_EPOCH);

        when.with_timezone(&tz).format("%-I:%M %p").to_string()
    }

    /// Display icon for the reported condition code.
    pub fn icon(&self) -> Icon {
        Icon::from_code(&self.icon_code)
    }
}
