use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, error};
use derive_more::derive::{Display, Error};
use serde::Serialize;

use crate::domain::payment_gateway::GatewayError;

#[derive(Serialize)]
struct ErrorResponse {
	#[serde(rename = "statusCode")]
	status_code: u16,
	error:       String,
	message:     String,
}

#[derive(Debug, Display, Error)]
pub enum ApiError {
	#[display("Request is not authorized.")]
	Forbidden,
	#[display("Payment provider could not complete the operation.")]
	UpstreamError,
}

impl ApiError {
	pub fn name(&self) -> String {
		match self {
			ApiError::Forbidden => "Forbidden".to_string(),
			ApiError::UpstreamError => "Bad Gateway".to_string(),
		}
	}
}

impl error::ResponseError for ApiError {
	fn error_response(&self) -> HttpResponse {
		match self {
			// Rejected callers learn nothing beyond the status code.
			ApiError::Forbidden => HttpResponse::build(self.status_code()).finish(),
			_ => HttpResponse::build(self.status_code())
				.content_type(ContentType::json())
				.json(ErrorResponse {
					status_code: self.status_code().as_u16(),
					error:       self.to_string(),
					message:     self.name(),
				}),
		}
	}

	fn status_code(&self) -> StatusCode {
		match self {
			ApiError::Forbidden => StatusCode::FORBIDDEN,
			ApiError::UpstreamError => StatusCode::BAD_GATEWAY,
		}
	}
}

impl From<GatewayError> for ApiError {
	fn from(_: GatewayError) -> Self {
		ApiError::UpstreamError
	}
}

#[cfg(test)]
mod tests {
	use actix_web::body::MessageBody;
	use actix_web::error::ResponseError;

	use super::*;

	#[test]
	fn test_forbidden_error_has_empty_body() {
		let error = ApiError::Forbidden;
		assert_eq!(error.name(), "Forbidden");
		assert_eq!(error.status_code(), StatusCode::FORBIDDEN);

		let resp = error.error_response();
		assert_eq!(resp.status(), StatusCode::FORBIDDEN);
		let body = resp.into_body().try_into_bytes().unwrap();
		assert!(body.is_empty());
	}

	#[test]
	fn test_upstream_error() {
		let error = ApiError::UpstreamError;
		assert_eq!(error.name(), "Bad Gateway");
		assert_eq!(error.status_code(), StatusCode::BAD_GATEWAY);

		let resp = error.error_response();
		assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
	}

	#[test]
	fn test_gateway_errors_map_to_bad_gateway() {
		let error: ApiError = GatewayError::transport("connection refused").into();
		assert_eq!(error.status_code(), StatusCode::BAD_GATEWAY);
	}
}
