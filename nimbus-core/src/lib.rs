//! Core library for the `nimbus` current-conditions client.
//!
//! This crate defines:
//! - The current-weather domain model and its display formatting
//! - Condition-code to display-asset mapping
//! - Abstraction over the forecast source (HTTP fetch, reachability probe)
//! - Payload parsing
//! - The screen controller state machine
//!
//! It is used by `nimbus-cli`, but can also be reused by other binaries or services.

pub mod icon;
pub mod model;
pub mod parse;
pub mod screen;
pub mod source;

pub use icon::Icon;
pub use model::CurrentWeather;
pub use parse::{ParseError, parse_current};
pub use screen::{Screen, ScreenController, ScreenState};
pub use source::{FetchError, ForecastSource, HostProbe, Reachability};
