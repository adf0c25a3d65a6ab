use log::{debug, warn};

use crate::model::CurrentWeather;
use crate::parse::parse_current;
use crate::source::{ForecastSource, Reachability};

/// Side-effect surface the controller drives. The binary implements it
/// against the terminal; controller tests implement it with a recorder.
pub trait Screen {
    /// Busy indicator on means the refresh affordance is hidden, and
    /// vice versa.
    fn set_busy(&mut self, busy: bool);

    /// Show every field of a freshly parsed observation.
    fn render(&mut self, weather: &CurrentWeather);

    /// Transient "network unavailable" notice; dismisses on its own.
    fn notify_offline(&mut self);

    /// Modal failure alert; stays up until the user acknowledges it.
    fn alert_failure(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    Idle,
    Loading,
    Displaying,
    ErrorShown,
}

/// Orchestrates reachability check -> fetch -> parse -> render and owns
/// the screen state plus the single current-weather reference.
///
/// The model survives a failed refresh: whatever was rendered last stays
/// on screen underneath the failure alert.
pub struct ScreenController<S: Screen> {
    source: Box<dyn ForecastSource>,
    reachability: Box<dyn Reachability>,
    screen: S,
    latitude: f64,
    longitude: f64,
    state: ScreenState,
    current: Option<CurrentWeather>,
}

impl<S: Screen> ScreenController<S> {
    pub fn new(
        source: Box<dyn ForecastSource>,
        reachability: Box<dyn Reachability>,
        screen: S,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            source,
            reachability,
            screen,
            latitude,
            longitude,
            state: ScreenState::Idle,
            current: None,
        }
    }

    pub fn state(&self) -> ScreenState {
        self.state
    }

    /// The observation currently on screen, if any refresh has succeeded.
    pub fn weather(&self) -> Option<&CurrentWeather> {
        self.current.as_ref()
    }

    /// Drive one refresh to completion: the initial load and the manual
    /// refresh action both come through here.
    ///
    /// Taking `&mut self` rules out overlapping fetches: a second refresh
    /// cannot start until this one has settled and rendered. Rendering
    /// happens on the calling task after the await; the screen is only
    /// ever touched by the task that owns this controller.
    pub async fn refresh(&mut self) {
        if !self.reachability.is_online().await {
            debug!("network unreachable, skipping forecast request");
            self.screen.notify_offline();
            return;
        }

        self.state = ScreenState::Loading;
        self.screen.set_busy(true);

        let outcome = self.fetch_and_parse().await;
        self.screen.set_busy(false);

        match outcome {
            Ok(weather) => {
                self.screen.render(&weather);
                self.current = Some(weather);
                self.state = ScreenState::Displaying;
            }
            Err(err) => {
                warn!("forecast refresh failed: {err:#}");
                self.state = ScreenState::ErrorShown;
                self.screen.alert_failure();
            }
        }
    }

    async fn fetch_and_parse(&self) -> anyhow::Result<CurrentWeather> {
        let body = self
            .source
            .fetch_current(self.latitude, self.longitude)
            .await?;
        debug!("forecast payload: {body}");

        let weather = parse_current(&body)?;
        debug!(
            "parsed observation: {} at {}",
            weather.icon_code,
            weather.formatted_time()
        );

        Ok(weather)
    }

    /// Acknowledge the failure alert. The screen falls back to whatever
    /// it showed before the failed refresh.
    pub fn dismiss_error(&mut self) {
        if self.state == ScreenState::ErrorShown {
            self.state = if self.current.is_some() {
                ScreenState::Displaying
            } else {
                ScreenState::Idle
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::Icon;
    use crate::source::FetchError;
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    const SAMPLE: &str = r#"{
        "timezone": "America/New_York",
        "currently": {
            "icon": "partly-cloudy-day",
            "time": 1528826700,
            "temperature": 72.6,
            "humidity": 0.62,
            "precipProbability": 0.42,
            "summary": "Partly cloudy throughout the day."
        }
    }"#;

    /// Source that replays a scripted sequence of responses and counts
    /// how often it was asked.
    #[derive(Debug, Clone, Default)]
    struct ScriptedSource {
        responses: Arc<Mutex<Vec<Result<String, FetchError>>>>,
        calls: Arc<AtomicUsize>,
    }

    impl ScriptedSource {
        fn push(&self, response: Result<String, FetchError>) {
            self.responses.lock().unwrap().push(response);
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ForecastSource for ScriptedSource {
        async fn fetch_current(&self, _lat: f64, _lon: f64) -> Result<String, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut responses = self.responses.lock().unwrap();
            assert!(!responses.is_empty(), "scripted source ran out of responses");
            responses.remove(0)
        }
    }

    #[derive(Debug)]
    struct FixedReachability(bool);

    #[async_trait]
    impl Reachability for FixedReachability {
        async fn is_online(&self) -> bool {
            self.0
        }
    }

    #[derive(Debug, Clone, Default)]
    struct RecordingScreen {
        events: Arc<Mutex<Vec<&'static str>>>,
        rendered: Arc<Mutex<Vec<CurrentWeather>>>,
    }

    impl RecordingScreen {
        fn events(&self) -> Vec<&'static str> {
            self.events.lock().unwrap().clone()
        }

        fn last_rendered(&self) -> Option<CurrentWeather> {
            self.rendered.lock().unwrap().last().cloned()
        }
    }

    impl Screen for RecordingScreen {
        fn set_busy(&mut self, busy: bool) {
            self.events
                .lock()
                .unwrap()
                .push(if busy { "busy on" } else { "busy off" });
        }

        fn render(&mut self, weather: &CurrentWeather) {
            self.events.lock().unwrap().push("render");
            self.rendered.lock().unwrap().push(weather.clone());
        }

        fn notify_offline(&mut self) {
            self.events.lock().unwrap().push("offline notice");
        }

        fn alert_failure(&mut self) {
            self.events.lock().unwrap().push("failure alert");
        }
    }

    fn controller(
        online: bool,
    ) -> (ScreenController<RecordingScreen>, ScriptedSource, RecordingScreen) {
        let source = ScriptedSource::default();
        let screen = RecordingScreen::default();
        let controller = ScreenController::new(
            Box::new(source.clone()),
            Box::new(FixedReachability(online)),
            screen.clone(),
            26.37,
            -80.102,
        );
        (controller, source, screen)
    }

    fn status_failure() -> FetchError {
        FetchError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body_excerpt: "upstream down".to_string(),
        }
    }

    #[tokio::test]
    async fn offline_skips_the_source_entirely() {
        let (mut controller, source, screen) = controller(false);

        controller.refresh().await;

        assert_eq!(source.calls(), 0);
        assert_eq!(controller.state(), ScreenState::Idle);
        assert!(controller.weather().is_none());
        // only the transient notice, never the busy indicator
        assert_eq!(screen.events(), vec!["offline notice"]);
    }

    #[tokio::test]
    async fn successful_refresh_renders_and_displays() {
        let (mut controller, source, screen) = controller(true);
        source.push(Ok(SAMPLE.to_string()));

        controller.refresh().await;

        assert_eq!(controller.state(), ScreenState::Displaying);
        assert_eq!(screen.events(), vec!["busy on", "busy off", "render"]);

        let rendered = screen.last_rendered().expect("a model must be rendered");
        assert_eq!(rendered.rounded_temperature(), 73);
        assert_eq!(rendered.precip_chance_pct(), 42);
        assert_eq!(rendered.formatted_time(), "2:05 PM");
        assert_eq!(rendered.humidity, 0.62);
        assert_eq!(rendered.icon(), Icon::PartlyCloudyDay);
        assert_eq!(rendered.icon().asset_name(), "partly_cloudy");
    }

    #[tokio::test]
    async fn fetch_failure_alerts_and_leaves_nothing_displayed() {
        let (mut controller, source, screen) = controller(true);
        source.push(Err(status_failure()));

        controller.refresh().await;

        assert_eq!(controller.state(), ScreenState::ErrorShown);
        assert!(controller.weather().is_none());
        assert_eq!(screen.events(), vec!["busy on", "busy off", "failure alert"]);

        controller.dismiss_error();
        assert_eq!(controller.state(), ScreenState::Idle);
    }

    #[tokio::test]
    async fn malformed_payload_takes_the_same_failure_path() {
        let (mut controller, source, screen) = controller(true);
        source.push(Ok(r#"{"timezone": "America/New_York"}"#.to_string()));

        controller.refresh().await;

        assert_eq!(controller.state(), ScreenState::ErrorShown);
        assert!(controller.weather().is_none());
        assert_eq!(screen.events(), vec!["busy on", "busy off", "failure alert"]);
    }

    #[tokio::test]
    async fn failed_refresh_keeps_the_previous_observation() {
        let (mut controller, source, screen) = controller(true);
        source.push(Ok(SAMPLE.to_string()));
        source.push(Err(status_failure()));

        controller.refresh().await;
        assert_eq!(controller.state(), ScreenState::Displaying);

        controller.refresh().await;

        assert_eq!(source.calls(), 2);
        assert_eq!(controller.state(), ScreenState::ErrorShown);

        // previous render still underneath the alert
        let retained = controller.weather().expect("previous model is retained");
        assert_eq!(retained.rounded_temperature(), 73);
        assert_eq!(retained.summary, "Partly cloudy throughout the day.");

        assert_eq!(
            screen.events(),
            vec![
                "busy on",
                "busy off",
                "render",
                "busy on",
                "busy off",
                "failure alert"
            ]
        );

        controller.dismiss_error();
        assert_eq!(controller.state(), ScreenState::Displaying);
    }

    #[tokio::test]
    async fn dismiss_is_a_no_op_outside_error_state() {
        let (mut controller, _source, _screen) = controller(true);

        controller.dismiss_error();
        assert_eq!(controller.state(), ScreenState::Idle);
    }
}
