//! Converts weather-crate failures into the application error hierarchy.
//!
//! `AppError` lives in core and `WeatherError` in the weather crate, so the
//! conversion is an extension trait here rather than a `From` impl.

use skyglass_core::error::ReqwestErrorExt;
use skyglass_core::{AppError, NetworkError, WeatherServiceError};
use skyglass_weather::{LocationError, WeatherError};

pub trait IntoAppError {
    fn into_app_error(self) -> AppError;
}

impl IntoAppError for WeatherError {
    fn into_app_error(self) -> AppError {
        match self {
            WeatherError::Network(e) => AppError::Network(e.into_network_error()),
            WeatherError::Location(e) => e.into_app_error(),
            WeatherError::NotFound(m) => {
                AppError::Weather(WeatherServiceError::LocationNotFound(m))
            }
            WeatherError::Unauthorized(_) => AppError::Weather(WeatherServiceError::InvalidApiKey),
            WeatherError::Api { status, .. } if status >= 500 || status == 429 => {
                AppError::Weather(WeatherServiceError::ServiceUnavailable)
            }
            WeatherError::Api { status, message } => AppError::Weather(
                WeatherServiceError::ApiError(format!("{}: {}", status, message)),
            ),
            WeatherError::Parse(m) => AppError::Network(NetworkError::InvalidResponse(m)),
            WeatherError::EmptyQuery => AppError::Weather(WeatherServiceError::EmptyQuery),
        }
    }
}

impl IntoAppError for LocationError {
    fn into_app_error(self) -> AppError {
        AppError::Weather(WeatherServiceError::Geolocation(self.to_string()))
    }
}

/// Status-line message for a failed lookup.
///
/// Geolocation failures keep their own wording; everything else goes through
/// `AppError::user_message`.
pub fn user_message(error: WeatherError) -> &'static str {
    match error {
        WeatherError::Location(e) => e.user_message(),
        other => other.into_app_error().user_message(),
    }
}
