//! Reactive glue: one fetch per query change, stale answers dropped.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{debug, error};
use reqwest::Client;

use super::client::{FetchError, fetch_dataset};
use super::dataset::RawDataset;
use super::query::QueryConfig;
use super::tracker::{RequestToken, RequestTracker};
use crate::energy::{EnergyGraph, graph_from_dataset};

#[derive(Clone, Debug, PartialEq)]
pub enum LoadState {
	Loading,
	Failed(String),
	/// The request succeeded but there is nothing to draw.
	Empty,
	Ready(EnergyGraph),
}

impl LoadState {
	pub fn from_outcome(query: &QueryConfig, outcome: Result<RawDataset, FetchError>) -> Self {
		match outcome {
			Ok(dataset) => {
				let graph = graph_from_dataset(&dataset, query);
				if graph.is_empty() {
					LoadState::Empty
				} else {
					LoadState::Ready(graph)
				}
			}
			Err(err) => {
				error!("{err}");
				LoadState::Failed(err.to_string())
			}
		}
	}
}

/// State to apply for a finished request, `None` if it was superseded.
pub fn settle(
	tracker: &RequestTracker,
	token: RequestToken,
	query: &QueryConfig,
	outcome: Result<RawDataset, FetchError>,
) -> Option<LoadState> {
	if !tracker.is_current(token) {
		debug!("dropping stale response for {}", query.subtitle());
		return None;
	}
	Some(LoadState::from_outcome(query, outcome))
}

/// Fetches and builds the energy graph whenever `query` changes.
pub fn use_energy_graph(query: Signal<QueryConfig>) -> ReadSignal<LoadState> {
	let (state, set_state) = signal(LoadState::Loading);
	let tracker = RequestTracker::default();
	let client = Client::new();

	Effect::new(move |_| {
		let query = query.get();
		let token = tracker.issue();
		set_state.set(LoadState::Loading);

		let (tracker, client) = (tracker.clone(), client.clone());
		spawn_local(async move {
			let outcome = fetch_dataset(&client, &query).await;
			if let Some(next) = settle(&tracker, token, &query, outcome) {
				set_state.set(next);
			}
		});
	});

	state
}
