//! Permission-gated, single-fix location weather flow.
//!
//! [`LocationProvider`] sits between the OS location facility and the
//! weather client. It consumes authorization and fix events fed in by the
//! host, and per explicit [`LocationProvider::request_location`] call acts
//! on at most the first fix that arrives. This is not live tracking:
//! listening stops as soon as one fix has been used.

use tracing::{debug, warn};

use crate::{
    client::WeatherApi,
    error::{LocationError, WeatherError},
    model::WeatherSnapshot,
    units::Units,
};

/// Authorization outcome as reported by the OS location service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Authorization {
    NotDetermined,
    Authorized,
    Denied,
    Restricted,
}

/// Where the permission state machine currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PermissionState {
    #[default]
    NotDetermined,
    Authorized,
    DeniedOrRestricted,
}

/// The OS location facility, injected so tests can script it. The provider
/// only ever asks for foreground authorization and best-accuracy fixes.
pub trait LocationService {
    fn request_authorization(&mut self);
    fn start_updates(&mut self);
    fn stop_updates(&mut self);
}

/// The two things the owner of the UI can be told. Exactly one of these
/// fires per `request_location` call that reaches a fix or an error.
pub trait WeatherObserver {
    fn weather_updated(&self, snapshot: WeatherSnapshot);
    fn failed(&self, error: WeatherError);
}

/// Location-driven weather fetching with single-fix semantics.
pub struct LocationProvider<S, A, O> {
    service: S,
    client: A,
    observer: O,
    permission: PermissionState,
    awaiting_fix: bool,
}

impl<S, A, O> LocationProvider<S, A, O>
where
    S: LocationService,
    A: WeatherApi,
    O: WeatherObserver,
{
    pub fn new(service: S, client: A, observer: O) -> Self {
        Self {
            service,
            client,
            observer,
            permission: PermissionState::default(),
            awaiting_fix: false,
        }
    }

    pub fn permission(&self) -> PermissionState {
        self.permission
    }

    /// Ask for one weather snapshot at the device's position.
    ///
    /// Prompts for permission if it has never been decided, arms the
    /// single-fix latch, and starts listening for fixes. Calling this again
    /// before a fix arrives re-arms the latch; requests do not stack.
    pub fn request_location(&mut self) {
        if self.permission == PermissionState::NotDetermined {
            self.service.request_authorization();
        }
        self.awaiting_fix = true;
        self.service.start_updates();
    }

    /// Feed an authorization change from the OS.
    ///
    /// Denial reports exactly one failure and disarms the latch so no fetch
    /// can happen. A grant on its own triggers nothing; fetching waits for a
    /// fix event.
    pub fn authorization_changed(&mut self, authorization: Authorization) {
        match authorization {
            Authorization::Denied | Authorization::Restricted => {
                self.permission = PermissionState::DeniedOrRestricted;
                self.awaiting_fix = false;
                self.service.stop_updates();
                warn!("location permission denied or restricted");
                self.observer.failed(LocationError::PermissionDenied.into());
            }
            Authorization::NotDetermined => {
                self.permission = PermissionState::NotDetermined;
                self.service.request_authorization();
            }
            Authorization::Authorized => {
                self.permission = PermissionState::Authorized;
            }
        }
    }

    /// Feed a location fix from the OS.
    ///
    /// Only the first fix after `request_location` is acted on; further
    /// fixes are dropped while the latch is disarmed. The fetch always runs
    /// in metric units; display conversion is the presentation layer's job.
    pub async fn location_updated(&mut self, lat: f64, lon: f64) {
        if !self.awaiting_fix {
            return;
        }
        self.awaiting_fix = false;
        self.service.stop_updates();

        let lat = format!("{lat:.6}");
        let lon = format!("{lon:.6}");
        debug!(%lat, %lon, "first fix received, fetching weather");

        match self
            .client
            .fetch_coordinate_weather(&lat, &lon, Units::Metric)
            .await
        {
            Ok(snapshot) => self.observer.weather_updated(snapshot),
            Err(err) => self.observer.failed(err.into()),
        }
    }

    /// Feed an error from the location source. Forwarded to the observer
    /// as-is; the latch keeps whatever state it had.
    pub fn location_error(&self, message: impl Into<String>) {
        self.observer
            .failed(LocationError::Source(message.into()).into());
    }
}
