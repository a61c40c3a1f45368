use thiserror::Error;

/// Failures a [`crate::WeatherApiClient`] fetch can report.
///
/// Detection order on a completed request is: transport failure, non-2xx
/// status, empty body, decode failure. Each fetch reports exactly one of
/// these through its `Result`; nothing is retried inside the crate.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request URL could not be built. Indicates a misconfigured base
    /// endpoint, so it should surface during startup validation rather than
    /// on a live user request.
    #[error("could not build a valid weather request URL")]
    InvalidUrl,

    /// The provider answered outside the 2xx range: unknown city, rate
    /// limit, bad credential. The user may retry or correct their input.
    #[error("weather request failed with HTTP status {0}")]
    InvalidStatusCode(u16),

    /// A 2xx answer with no body. Transient; safe to retry.
    #[error("weather provider returned an empty response body")]
    EmptyData,

    /// The HTTP stack itself failed (DNS, TLS, unreachable network, its own
    /// timeout). Surfaced verbatim.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The body was present but did not match the expected payload shape.
    /// Usually means the provider contract changed.
    #[error("could not decode weather payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Failures originating in the location subsystem.
#[derive(Debug, Error)]
pub enum LocationError {
    /// Location access is denied or restricted at the OS level. Terminal for
    /// the session until the user changes their settings.
    #[error("location access is denied or restricted")]
    PermissionDenied,

    /// The location source reported an error of its own.
    #[error("location source error: {0}")]
    Source(String),
}

/// Everything a [`crate::WeatherObserver`] can be handed on failure.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Location(#[from] LocationError),
}

/// Failures a [`crate::HistoryStore`] commit can report.
///
/// The in-memory collection is rolled back before this is returned, so a
/// failed commit never leaves store and disk disagreeing.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to commit history changes to disk: {0}")]
    WriteFailed(#[from] std::io::Error),
}
