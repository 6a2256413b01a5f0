//! Turns a Eurostat energy balance into a weighted product network.
//!
//! The pipeline is: observations by SIEC code → [`resolve`] over the static
//! [`taxonomy`] → [`build`] into nodes and edges with visual encoding.

pub mod build;
pub mod encode;
pub mod resolve;
pub mod taxonomy;

use log::info;
use serde::Serialize;

pub use build::{DEFAULT_ROOT_LABEL, Graph, GraphEdge, GraphNode, build};
pub use resolve::{ResolvedValues, ValueBySiec, resolve};
pub use taxonomy::{FUEL_FAMILIES, TOTAL_ID, TaxonomyNode};

use crate::eurostat::{QueryConfig, RawDataset};

/// Graph for one query, ready for rendering.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct EnergyGraph {
	pub nodes: Vec<GraphNode>,
	pub edges: Vec<GraphEdge>,
	pub meta: QueryConfig,
}

impl EnergyGraph {
	/// An empty graph means "no data" and must not be rendered.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty() || self.edges.is_empty()
	}

	pub fn node(&self, id: &str) -> Option<&GraphNode> {
		self.nodes.iter().find(|n| n.id == id)
	}

	/// Main categories with a positive value, in taxonomy order.
	pub fn main_categories(&self) -> impl Iterator<Item = &GraphNode> {
		self.nodes
			.iter()
			.filter(|n| n.is_main_category && n.has_value())
	}
}

/// Runs the whole pipeline on a fetched dataset.
pub fn graph_from_dataset(dataset: &RawDataset, query: &QueryConfig) -> EnergyGraph {
	let observations = dataset.value_by_siec();
	if observations.is_empty() {
		info!("no observations for {}", query.subtitle());
		return EnergyGraph {
			meta: query.clone(),
			..EnergyGraph::default()
		};
	}

	let values = resolve(FUEL_FAMILIES, &observations);
	let Graph { nodes, edges } = build(FUEL_FAMILIES, &values, query.root_label());
	EnergyGraph {
		nodes,
		edges,
		meta: query.clone(),
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	fn dataset(json: serde_json::Value) -> RawDataset {
		RawDataset::from_json(json)
	}

	#[test]
	fn dataset_to_graph() {
		let query = QueryConfig::default();
		let graph = graph_from_dataset(
			&dataset(json!({
				"value": { "0": 900.0, "1": 300.0, "2": 120.0, "3": 5.0 },
				"dimension": { "siec": { "category": { "index": {
					"TOTAL": 0, "G3000": 1, "RA300": 2, "UNKNOWN": 3
				} } } }
			})),
			&query,
		);

		assert!(!graph.is_empty());
		assert_eq!(graph.meta, query);
		let root = graph.node(TOTAL_ID).unwrap();
		assert_eq!(root.name, "Total energy supply");
		assert_eq!(root.value, 900.0);
		assert_eq!(graph.node("FE").unwrap().value, 300.0);
		assert!(graph.node("UNKNOWN").is_none());

		let mains: Vec<_> = graph.main_categories().map(|n| n.id).collect();
		assert_eq!(mains, ["FE", "RA000"]);
	}

	#[test]
	fn empty_or_malformed_datasets_give_no_graph() {
		let query = QueryConfig::default();
		for raw in [
			json!({}),
			json!({ "value": {}, "dimension": { "siec": { "category": { "index": {} } } } }),
			json!({ "value": { "0": 1.0 }, "dimension": {} }),
			json!([1, 2, 3]),
		] {
			let graph = graph_from_dataset(&dataset(raw), &query);
			assert!(graph.nodes.is_empty());
			assert!(graph.edges.is_empty());
		}
	}

	#[test]
	fn unknown_codes_only_still_draw_the_taxonomy() {
		let graph = graph_from_dataset(
			&dataset(json!({
				"value": { "0": 7.0 },
				"dimension": { "siec": { "category": { "index": { "NOT_SIEC": 0 } } } }
			})),
			&QueryConfig::default(),
		);
		assert!(!graph.is_empty());
		assert_eq!(graph.nodes.len(), taxonomy::node_count(FUEL_FAMILIES) + 1);
		assert!(graph.nodes.iter().all(|n| n.value == 0.0));
		assert!(graph.node("NOT_SIEC").is_none());
		assert_eq!(graph.main_categories().count(), 0);
	}

	#[test]
	fn serializes_for_the_renderer() {
		let query = QueryConfig::default();
		let graph = graph_from_dataset(
			&dataset(json!({
				"value": [4.0],
				"dimension": { "siec": { "category": { "index": ["E7000"] } } }
			})),
			&query,
		);
		let json = serde_json::to_value(&graph).unwrap();
		assert_eq!(json["nodes"][0]["id"], "TOTAL");
		assert_eq!(json["nodes"][0]["markerRadius"], 40.0);
		assert_eq!(json["nodes"][0]["tier"], "root");
		assert_eq!(json["meta"]["nrg_bal"], "NRGSUP");
		assert!(json["edges"][0]["weight"].as_f64().unwrap() >= 1.0);
	}
}
