//! Destination URL validation.
//!
//! Destinations are stored and redirected to byte-for-byte, so validation
//! never rewrites the input. It only decides whether the input is usable.

use url::Url;

/// Upper bound on stored destination length.
pub const MAX_DESTINATION_LENGTH: usize = 2048;

/// Errors that can occur during destination validation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DestinationError {
    #[error("destination is empty")]
    Empty,

    #[error("destination exceeds {} characters", MAX_DESTINATION_LENGTH)]
    TooLong,

    #[error("destination must contain only visible ASCII characters")]
    InvalidCharacters,

    #[error("invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("only HTTP and HTTPS destinations are allowed")]
    UnsupportedProtocol,

    #[error("destination must include a host")]
    MissingHost,
}

/// Checks that `input` is an absolute http(s) URL with a host.
///
/// The input must already be in wire form: visible ASCII only, so it can be
/// placed in a `Location` header unchanged. Internationalized hosts and paths
/// have to be punycoded and percent-encoded by the caller.
///
/// # Errors
///
/// Returns the first [`DestinationError`] that applies.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_destination("https://example.com/a?b=c").is_ok());
/// assert!(validate_destination("not-a-url").is_err());
/// assert!(validate_destination("javascript:alert(1)").is_err());
/// ```
pub fn validate_destination(input: &str) -> Result<(), DestinationError> {
    if input.is_empty() {
        return Err(DestinationError::Empty);
    }

    if input.len() > MAX_DESTINATION_LENGTH {
        return Err(DestinationError::TooLong);
    }

    if !input.bytes().all(|b| b.is_ascii_graphic()) {
        return Err(DestinationError::InvalidCharacters);
    }

    let url = Url::parse(input).map_err(|e| DestinationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(DestinationError::UnsupportedProtocol),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(DestinationError::MissingHost),
    }
}
