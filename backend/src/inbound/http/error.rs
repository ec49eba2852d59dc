//! HTTP adapter mapping for domain errors.
//!
//! Every failure is rendered as the [`ApiResponse`] envelope. Only a payload
//! that could not be decoded gets 400; validation, conflict, and
//! infrastructure failures all surface as 409 and differ by message alone.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::{error, info};

use super::envelope::ApiResponse;
use crate::domain::{Error, ErrorCode};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::MalformedRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Validation | ErrorCode::Conflict | ErrorCode::Infrastructure => {
            StatusCode::CONFLICT
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if matches!(self.code(), ErrorCode::Infrastructure) {
            error!(code = ?self.code(), trace_id = ?self.trace_id(), message = self.message(), "request failed");
        } else {
            info!(code = ?self.code(), trace_id = ?self.trace_id(), message = self.message(), "request rejected");
        }

        HttpResponse::build(status).json(ApiResponse::failure(self.message()))
    }
}
