use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::error;
use thiserror::Error;

use crate::views;

/// Everything a storage call can fail with. Validation failures are not in
/// here: they are plain values the handlers feed back into the form.
#[derive(Debug, Error)]
pub enum Error {
	#[error("no such book")]
	NotFound,
	#[error("a book with this title already exists")]
	Conflict,
	#[error("database error: {0}")]
	Db(#[from] sqlx::Error),
}

impl IntoResponse for Error {
	fn into_response(self) -> Response {
		match self {
			Error::NotFound => {
				(StatusCode::NOT_FOUND, views::not_found_page()).into_response()
			}
			// handlers turn Conflict into an inline form error before it
			// can get here
			Error::Conflict => {
				(StatusCode::CONFLICT, views::server_error_page()).into_response()
			}
			Error::Db(err) => {
				error!("storage failure: {err}");
				(StatusCode::INTERNAL_SERVER_ERROR, views::server_error_page())
					.into_response()
			}
		}
	}
}
