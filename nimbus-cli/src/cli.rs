use clap::Parser;
use log::debug;
use nimbus_core::screen::{ScreenController, ScreenState};
use nimbus_core::source::HostProbe;
use nimbus_core::source::darksky::{DarkSkyClient, FORECAST_HOST};

use crate::view::{self, TerminalScreen};

// The screen shows one fixed location; endpoint, key, and coordinates
// are constants rather than configuration.
const API_KEY: &str = "9c52394bd4e31a8f4a0ab86c07b22a57";
const LATITUDE: f64 = 26.370;
const LONGITUDE: f64 = -80.102;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "nimbus", version, about = "Current conditions for one spot, in your terminal")]
pub struct Cli {
    /// Fetch and render once, skipping the interactive refresh prompt.
    #[arg(long)]
    pub once: bool,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        debug!("showing conditions for {LATITUDE},{LONGITUDE}");

        let mut controller = ScreenController::new(
            Box::new(DarkSkyClient::new(API_KEY.to_string())),
            Box::new(HostProbe::new(FORECAST_HOST)),
            TerminalScreen::default(),
            LATITUDE,
            LONGITUDE,
        );

        loop {
            controller.refresh().await;

            // the alert blocks inside refresh(); acknowledged by now
            if controller.state() == ScreenState::ErrorShown {
                controller.dismiss_error();
            }

            if self.once || !view::wants_refresh() {
                break;
            }
        }

        Ok(())
    }
}
