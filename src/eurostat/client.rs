//! Single-shot requests against the Eurostat dissemination API.

use log::{info, warn};
use reqwest::{Client, StatusCode};
use thiserror::Error;

use super::dataset::RawDataset;
use super::query::QueryConfig;

const DEFAULT_ENDPOINT: &str =
	"https://ec.europa.eu/eurostat/api/dissemination/statistics/1.0/data/nrg_bal_c";

/// Dataset endpoint; `EUROSTAT_URL` at build time overrides the default.
pub fn endpoint() -> &'static str {
	option_env!("EUROSTAT_URL").unwrap_or(DEFAULT_ENDPOINT)
}

#[derive(Debug, Error)]
pub enum FetchError {
	#[error("{}", status_message(.status))]
	Status { status: StatusCode },
	#[error("Eurostat request failed")]
	Transport(#[source] reqwest::Error),
	#[error("Eurostat response could not be read: {0}")]
	Body(#[source] reqwest::Error),
}

impl FetchError {
	pub fn status(&self) -> Option<StatusCode> {
		match self {
			FetchError::Status { status } => Some(*status),
			FetchError::Transport(err) | FetchError::Body(err) => err.status(),
		}
	}
}

fn status_message(status: &StatusCode) -> String {
	match status.canonical_reason() {
		Some(reason) => format!("Eurostat request failed ({} {reason})", status.as_u16()),
		None => format!("Eurostat request failed ({})", status.as_u16()),
	}
}

/// Fetches the dataset for `query`. No retries, no caching.
pub async fn fetch_dataset(client: &Client, query: &QueryConfig) -> Result<RawDataset, FetchError> {
	info!("fetching {} for {}", endpoint(), query.subtitle());

	let response = client
		.get(endpoint())
		.query(&query.request_params())
		.send()
		.await
		.map_err(FetchError::Transport)?;

	let status = response.status();
	if !status.is_success() {
		warn!("Eurostat answered {status}");
		return Err(FetchError::Status { status });
	}

	let json: serde_json::Value = response.json().await.map_err(FetchError::Body)?;
	Ok(RawDataset::from_json(json))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn status_messages() {
		let err = FetchError::Status {
			status: StatusCode::NOT_FOUND,
		};
		assert_eq!(err.to_string(), "Eurostat request failed (404 Not Found)");
		assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));

		let unknown = StatusCode::from_u16(599).unwrap();
		assert_eq!(status_message(&unknown), "Eurostat request failed (599)");
	}

	#[test]
	fn endpoint_points_at_the_balance_dataset() {
		assert!(endpoint().ends_with("nrg_bal_c") || option_env!("EUROSTAT_URL").is_some());
	}
}
