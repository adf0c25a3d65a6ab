use inquire::Confirm;
use nimbus_core::{CurrentWeather, Icon, Screen};

/// Terminal rendition of the single screen. The busy indicator becomes
/// a status line and the failure dialog a blocking acknowledgment
/// prompt; the icon asset maps to a glyph.
#[derive(Debug, Default)]
pub struct TerminalScreen;

impl Screen for TerminalScreen {
    fn set_busy(&mut self, busy: bool) {
        if busy {
            println!("Fetching current conditions...");
        }
    }

    fn render(&mut self, weather: &CurrentWeather) {
        println!();
        println!(
            "  {}  At {} it will be",
            glyph(weather.icon()),
            weather.formatted_time()
        );
        println!();
        println!("      {}\u{b0}", weather.rounded_temperature());
        println!();
        println!("  Humidity      {}", weather.humidity);
        println!("  Rain/Snow?    {}%", weather.precip_chance_pct());
        println!();
        println!("  {}", weather.summary);
        println!();
    }

    fn notify_offline(&mut self) {
        // transient notice, no acknowledgment required
        eprintln!("Network is unavailable!");
    }

    fn alert_failure(&mut self) {
        let acknowledged = Confirm::new("Oops! There was an error getting the forecast.")
            .with_help_message("press enter to dismiss")
            .with_default(true)
            .prompt();

        if acknowledged.is_err() {
            // not an interactive terminal; the prompt line already printed
            eprintln!("There was an error getting the forecast.");
        }
    }
}

/// The manual refresh affordance, shown only between fetches.
pub fn wants_refresh() -> bool {
    Confirm::new("Refresh the forecast?")
        .with_default(true)
        .prompt()
        .unwrap_or(false)
}

fn glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::ClearDay => "\u{2600}",
        Icon::ClearNight => "\u{1f319}",
        Icon::Rain => "\u{1f327}",
        Icon::Snow => "\u{2744}",
        Icon::Sleet => "\u{1f328}",
        Icon::Wind => "\u{1f32c}",
        Icon::Fog => "\u{1f32b}",
        Icon::Cloudy => "\u{2601}",
        Icon::PartlyCloudyDay => "\u{26c5}",
        Icon::PartlyCloudyNight => "\u{1f325}",
    }
}
