//! Centralized error types for Skyglass.
//!
//! This module provides a typed error hierarchy that:
//! - Keeps network, weather and preference-storage failures apart
//! - Provides short messages suitable for the dashboard's status line
//! - Preserves full error context for logging

use thiserror::Error;

/// Top-level application error type.
///
/// Use `user_message()` to get a message fit for the dashboard.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Weather service error: {0}")]
    Weather(#[from] WeatherServiceError),
}

impl AppError {
    /// Returns a user-friendly message suitable for display.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Network(e) => e.user_message(),
            AppError::Weather(e) => e.user_message(),
        }
    }
}

/// Network-related errors (HTTP, connectivity).
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl NetworkError {
    pub fn user_message(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed(_) => {
                "Unable to connect. Check your internet connection."
            }
            NetworkError::Timeout => "The request timed out. Please try again.",
            NetworkError::ServerError { status, .. } if *status >= 500 => {
                "The server is experiencing issues. Please try again later."
            }
            NetworkError::ServerError { .. } => "The request failed. Please try again.",
            NetworkError::InvalidResponse(_) => {
                "Received an unexpected response. Please try again."
            }
        }
    }
}

/// Weather lookup errors, as seen by the dashboard.
#[derive(Debug, Error)]
pub enum WeatherServiceError {
    #[error("Location not found: {0}")]
    LocationNotFound(String),

    #[error("Weather API error: {0}")]
    ApiError(String),

    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Service unavailable")]
    ServiceUnavailable,

    #[error("Geolocation failed: {0}")]
    Geolocation(String),

    #[error("Empty search")]
    EmptyQuery,
}

impl WeatherServiceError {
    pub fn user_message(&self) -> &'static str {
        match self {
            WeatherServiceError::LocationNotFound(_) => "City not found. Check and try again.",
            WeatherServiceError::ApiError(_) => "Weather service error. Please try again.",
            WeatherServiceError::InvalidApiKey => "Weather API key is invalid. Check settings.",
            WeatherServiceError::ServiceUnavailable => {
                "Weather service unavailable. Please try again later."
            }
            WeatherServiceError::Geolocation(_) => {
                "Could not determine your location. Search by city instead."
            }
            WeatherServiceError::EmptyQuery => "Please enter a city name.",
        }
    }
}

/// Local preference storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read preferences: {0}")]
    Read(String),

    #[error("Failed to write preferences: {0}")]
    Write(String),

    #[error("Preferences are corrupted: {0}")]
    Corrupted(String),
}

impl StorageError {
    pub fn user_message(&self) -> &'static str {
        match self {
            StorageError::Read(_) => "Saved preferences could not be read. Using defaults.",
            StorageError::Write(_) => "Preferences could not be saved.",
            StorageError::Corrupted(_) => "Saved preferences were reset.",
        }
    }
}

/// Extension trait for converting reqwest errors to our error types.
pub trait ReqwestErrorExt {
    fn into_network_error(self) -> NetworkError;
}

impl ReqwestErrorExt for reqwest::Error {
    fn into_network_error(self) -> NetworkError {
        if self.is_timeout() {
            NetworkError::Timeout
        } else if self.is_connect() {
            NetworkError::ConnectionFailed(self.to_string())
        } else if let Some(status) = self.status() {
            NetworkError::ServerError {
                status: status.as_u16(),
                message: self.to_string(),
            }
        } else if self.is_decode() {
            NetworkError::InvalidResponse(self.to_string())
        } else {
            NetworkError::ConnectionFailed(self.to_string())
        }
    }
}
