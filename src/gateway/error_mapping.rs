//! Maps `reqwest` failures onto [`WayfarerError`].

use reqwest::Response;

use crate::error::WayfarerError;

const MAX_ERROR_BODY_CHARS: usize = 160;

pub(super) fn map_transport_error(error: &reqwest::Error) -> WayfarerError {
    if error.is_decode() {
        WayfarerError::Decode {
            message: error.to_string(),
        }
    } else {
        WayfarerError::Network {
            message: error.to_string(),
        }
    }
}

/// Passes successful responses through and converts the rest into
/// [`WayfarerError::Api`].
pub(super) async fn ensure_success(response: Response) -> Result<Response, WayfarerError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.map_or_else(
        |_| "(failed to read error response body)".to_owned(),
        |content| truncate_for_message(content.trim(), MAX_ERROR_BODY_CHARS),
    );
    Err(WayfarerError::Api {
        status: status.as_u16(),
        message: body,
    })
}

fn truncate_for_message(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let truncated: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{truncated}...")
    } else {
        truncated
    }
}
