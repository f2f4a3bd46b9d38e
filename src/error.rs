//! Error types and handling for the outfit advisor

use axum::http::StatusCode;
use thiserror::Error;

/// Message returned when the weather description is missing
pub const MSG_WEATHER_REQUIRED: &str = "请输入天气描述";
/// Message returned when a numeric field cannot be parsed
pub const MSG_INVALID_NUMBER: &str = "请输入有效的数字";
/// Message returned when a coordinate is missing
pub const MSG_LOCATION_MISSING: &str = "未能获取定位信息";
/// Message returned when a coordinate cannot be parsed
pub const MSG_LOCATION_MALFORMED: &str = "定位数据格式有误";
/// Message returned when the forecast provider cannot be reached
pub const MSG_PROVIDER_UNAVAILABLE: &str = "天气服务暂时不可用，请稍后再试。";
/// Message returned when the forecast provider answers with something other than JSON
pub const MSG_PROVIDER_INVALID_BODY: &str = "天气服务返回了无效的数据。";
/// Message returned when the provider payload has no daily series
pub const MSG_PROVIDER_NO_DAILY: &str = "天气服务暂未提供未来七天天气数据。";
/// Message returned when the provider payload yields no days
pub const MSG_PROVIDER_EMPTY: &str = "暂未获取到天气数据，请稍后重试。";
/// Message returned when the request body exceeds the size limit
pub const MSG_PAYLOAD_TOO_LARGE: &str = "请求内容过大";

const MSG_WEATHER_EMPTY: &str = "天气描述不能为空";

/// Main error type for the outfit advisor
#[derive(Error, Debug)]
pub enum AdvisorError {
    /// The weather description was empty or whitespace only
    #[error("Invalid weather: {message}")]
    InvalidWeather { message: String },

    /// A numeric input could not be parsed
    #[error("Invalid number: {message}")]
    InvalidNumber { message: String },

    /// A coordinate was missing or malformed
    #[error("Invalid coordinate: {message}")]
    InvalidCoordinate { message: String },

    /// Network failure, timeout, non-success status or unparseable body
    #[error("Forecast provider unavailable: {message}")]
    ProviderUnavailable { message: String },

    /// The provider payload lacks the daily series container
    #[error("Forecast provider data invalid: {message}")]
    ProviderDataInvalid { message: String },

    /// The provider payload is valid but contains no usable days
    #[error("Forecast provider data empty: {message}")]
    ProviderDataEmpty { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl AdvisorError {
    /// Empty weather description
    #[must_use]
    pub fn invalid_weather() -> Self {
        Self::InvalidWeather {
            message: MSG_WEATHER_EMPTY.to_string(),
        }
    }

    /// Unparseable number
    #[must_use]
    pub fn invalid_number() -> Self {
        Self::InvalidNumber {
            message: MSG_INVALID_NUMBER.to_string(),
        }
    }

    /// Create a new coordinate error
    pub fn invalid_coordinate<S: Into<String>>(message: S) -> Self {
        Self::InvalidCoordinate {
            message: message.into(),
        }
    }

    /// Create a new provider-unavailable error
    pub fn provider_unavailable<S: Into<String>>(message: S) -> Self {
        Self::ProviderUnavailable {
            message: message.into(),
        }
    }

    /// Payload without a daily series
    #[must_use]
    pub fn provider_data_invalid() -> Self {
        Self::ProviderDataInvalid {
            message: MSG_PROVIDER_NO_DAILY.to_string(),
        }
    }

    /// Payload without usable days
    #[must_use]
    pub fn provider_data_empty() -> Self {
        Self::ProviderDataEmpty {
            message: MSG_PROVIDER_EMPTY.to_string(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// HTTP status the API layer answers with for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidWeather { .. }
            | Self::InvalidNumber { .. }
            | Self::InvalidCoordinate { .. } => StatusCode::BAD_REQUEST,
            Self::ProviderUnavailable { .. }
            | Self::ProviderDataInvalid { .. }
            | Self::ProviderDataEmpty { .. } => StatusCode::BAD_GATEWAY,
            Self::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidWeather { message }
            | Self::InvalidNumber { message }
            | Self::InvalidCoordinate { message }
            | Self::ProviderUnavailable { message }
            | Self::ProviderDataInvalid { message }
            | Self::ProviderDataEmpty { message } => message.clone(),
            Self::Config { .. } => "服务配置有误，请联系管理员。".to_string(),
        }
    }
}
