//! Error categorization.
//!
//! Maps `reqwest::Error` values onto the `ErrorType` buckets used in the
//! end-of-run statistics.

use super::stats::ProcessingStats;
use super::types::ErrorType;

/// Categorizes a `reqwest::Error` into an `ErrorType`.
///
/// HTTP status codes are checked first (errors produced by
/// `Response::error_for_status`), then the transport-level error kind.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    if let Some(status) = error.status() {
        match status.as_u16() {
            // Client errors (4xx)
            400 => return ErrorType::HttpRequestBadRequest,
            401 => return ErrorType::HttpRequestUnauthorized,
            403 => return ErrorType::HttpRequestForbidden,
            404 => return ErrorType::HttpRequestNotFound,
            410 => return ErrorType::HttpRequestGone,
            429 => return ErrorType::HttpRequestTooManyRequests,
            // Server errors (5xx)
            500 => return ErrorType::HttpRequestInternalServerError,
            502 => return ErrorType::HttpRequestBadGateway,
            503 => return ErrorType::HttpRequestServiceUnavailable,
            504 => return ErrorType::HttpRequestGatewayTimeout,
            _ if status.is_client_error() || status.is_server_error() => {
                return ErrorType::HttpRequestOtherError;
            }
            _ => {}
        }
    }

    if error.is_builder() {
        ErrorType::HttpRequestBuilderError
    } else if error.is_redirect() {
        ErrorType::HttpRequestRedirectError
    } else if error.is_status() {
        ErrorType::HttpRequestStatusError
    } else if error.is_timeout() {
        ErrorType::HttpRequestTimeoutError
    } else if error.is_connect() {
        ErrorType::HttpRequestConnectError
    } else if error.is_request() {
        ErrorType::HttpRequestRequestError
    } else if error.is_body() {
        ErrorType::HttpRequestBodyError
    } else if error.is_decode() {
        ErrorType::HttpRequestDecodeError
    } else {
        ErrorType::HttpRequestOtherError
    }
}

/// Records a `reqwest::Error` in the processing statistics and returns its category.
pub fn update_error_stats(stats: &ProcessingStats, error: &reqwest::Error) -> ErrorType {
    let error_type = categorize_reqwest_error(error);
    stats.increment_error(error_type);
    error_type
}
