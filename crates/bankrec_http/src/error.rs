//! Store error to HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bankrec_core::StoreError;
use log::debug;

/// Transport wrapper that turns a `StoreError` into a response.
///
/// `NotFound` maps to 404 and `AlreadyExists` to 400; the body is the
/// plain-text error message.
#[derive(Debug)]
pub struct ApiError(pub StoreError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            StoreError::NotFound(_) => StatusCode::NOT_FOUND,
            StoreError::AlreadyExists(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(value: StoreError) -> Self {
        Self(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        debug!("event=request_rejected module=http status={}", status.as_u16());
        (status, self.0.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::ApiError;
    use axum::http::StatusCode;
    use bankrec_core::StoreError;

    #[test]
    fn store_errors_map_to_client_statuses() {
        let not_found = ApiError::from(StoreError::NotFound("1".to_string()));
        let exists = ApiError::from(StoreError::AlreadyExists("1".to_string()));

        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);
        assert_eq!(exists.status(), StatusCode::BAD_REQUEST);
    }
}
