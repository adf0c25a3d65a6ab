use log::warn;

/// Display icon for a weather condition, one variant per condition code
/// the forecast endpoint emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    ClearDay,
    ClearNight,
    Rain,
    Snow,
    Sleet,
    Wind,
    Fog,
    Cloudy,
    PartlyCloudyDay,
    PartlyCloudyNight,
}

impl Icon {
    /// Map a condition code string onto an icon. Codes outside the known
    /// set resolve to the clear-day icon; the fallback is logged as a
    /// warning, never surfaced as an error.
    pub fn from_code(code: &str) -> Self {
        match code {
            "clear-day" => Icon::ClearDay,
            "clear-night" => Icon::ClearNight,
            "rain" => Icon::Rain,
            "snow" => Icon::Snow,
            "sleet" => Icon::Sleet,
            "wind" => Icon::Wind,
            "fog" => Icon::Fog,
            "cloudy" => Icon::Cloudy,
            "partly-cloudy-day" => Icon::PartlyCloudyDay,
            "partly-cloudy-night" => Icon::PartlyCloudyNight,
            other => {
                warn!("unknown condition code '{other}', falling back to clear-day icon");
                Icon::ClearDay
            }
        }
    }

    /// Identifier of the image asset that renders this icon.
    pub fn asset_name(&self) -> &'static str {
        match self {
            Icon::ClearDay => "clear_day",
            Icon::ClearNight => "clear_night",
            Icon::Rain => "rain",
            Icon::Snow => "snow",
            Icon::Sleet => "sleet",
            Icon::Wind => "wind",
            Icon::Fog => "fog",
            Icon::Cloudy => "cloudy",
            Icon::PartlyCloudyDay => "partly_cloudy",
            Icon::PartlyCloudyNight => "cloudy_night",
        }
    }

    pub const fn all() -> &'static [Icon] {
        &[
            Icon::ClearDay,
            Icon::ClearNight,
            Icon::Rain,
            Icon::Snow,
            Icon::Sleet,
            Icon::Wind,
            Icon::Fog,
            Icon::Cloudy,
            Icon::PartlyCloudyDay,
            Icon::PartlyCloudyNight,
        ]
    }
}
