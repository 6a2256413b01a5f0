//! Flattens the taxonomy into the node and edge lists fed to the layout.

use log::{debug, warn};
use serde::Serialize;

use super::encode::{DepthTier, ValueRange, marker_radius};
use super::resolve::ResolvedValues;
use super::taxonomy::{TOTAL_ID, TaxonomyNode, is_main_category};

/// Root label used when the balance code has no known name.
pub const DEFAULT_ROOT_LABEL: &str = "Total Energy";

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
	pub id: &'static str,
	pub name: String,
	pub depth: usize,
	pub is_main_category: bool,
	pub tier: DepthTier,
	pub value: f64,
	pub marker_radius: f64,
}

impl GraphNode {
	pub fn is_root(&self) -> bool {
		self.depth == 0
	}

	pub fn has_value(&self) -> bool {
		self.value > 0.0
	}
}

/// Directed parent → child link, weighted by the child's value.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GraphEdge {
	pub from: &'static str,
	pub to: &'static str,
	pub weight: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Graph {
	pub nodes: Vec<GraphNode>,
	pub edges: Vec<GraphEdge>,
}

impl Graph {
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty() || self.edges.is_empty()
	}
}

/// Builds the graph for `forest` below a synthetic root named `root_label`.
///
/// Returns an empty graph when there is nothing to show: an empty forest or
/// no resolved values.
pub fn build(forest: &[TaxonomyNode], values: &ResolvedValues, root_label: &str) -> Graph {
	if forest.is_empty() || values.is_empty() {
		return Graph::default();
	}

	let mut graph = Graph::default();
	graph.nodes.push(GraphNode {
		id: TOTAL_ID,
		name: root_label.to_string(),
		depth: 0,
		is_main_category: false,
		tier: DepthTier::Root,
		value: values.value_of(TOTAL_ID),
		marker_radius: 0.0,
	});
	for node in forest {
		walk(node, TOTAL_ID, 1, values, &mut graph);
	}

	for edge in &mut graph.edges {
		edge.weight = edge_weight(values.value_of(edge.to));
	}

	let range = ValueRange::of_positive(graph.nodes.iter().map(|n| n.value));
	for node in &mut graph.nodes {
		node.marker_radius = marker_radius(node.tier, node.value, range);
	}

	debug!(
		"built graph with {} nodes and {} edges (range {:?})",
		graph.nodes.len(),
		graph.edges.len(),
		range
	);
	graph
}

/// Edge weight for a target value; at least 1 so empty branches stay linked.
pub fn edge_weight(value: f64) -> f64 {
	if value >= 1.0 { value } else { 1.0 }
}

fn walk(
	node: &TaxonomyNode,
	parent: &'static str,
	depth: usize,
	values: &ResolvedValues,
	graph: &mut Graph,
) {
	let is_main = is_main_category(node.id);
	if is_main && depth != 1 {
		warn!("main category {} found at depth {}", node.id, depth);
	}

	graph.nodes.push(GraphNode {
		id: node.id,
		name: node.name.to_string(),
		depth,
		is_main_category: is_main,
		tier: DepthTier::classify(depth, is_main),
		value: values.value_of(node.id),
		marker_radius: 0.0,
	});
	graph.edges.push(GraphEdge {
		from: parent,
		to: node.id,
		weight: 1.0,
	});

	for child in node.children {
		walk(child, node.id, depth + 1, values, graph);
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;
	use crate::energy::resolve::{ValueBySiec, resolve};
	use crate::energy::taxonomy::{FUEL_FAMILIES, MAIN_CATEGORIES, node_count};

	fn observations(pairs: &[(&str, f64)]) -> ValueBySiec {
		pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
	}

	fn full_graph(pairs: &[(&str, f64)]) -> Graph {
		let values = resolve(FUEL_FAMILIES, &observations(pairs));
		build(FUEL_FAMILIES, &values, "Total energy supply")
	}

	#[test]
	fn counts_match_the_taxonomy() {
		let graph = full_graph(&[("G3000", 100.0)]);
		let forest = node_count(FUEL_FAMILIES);
		assert_eq!(graph.nodes.len(), forest + 1);
		assert_eq!(graph.edges.len(), forest);
		let root_edges = graph.edges.iter().filter(|e| e.from == TOTAL_ID).count();
		assert_eq!(root_edges, FUEL_FAMILIES.len());
	}

	#[test]
	fn root_comes_first_with_the_label() {
		let graph = full_graph(&[("G3000", 100.0)]);
		let root = &graph.nodes[0];
		assert_eq!(root.id, TOTAL_ID);
		assert_eq!(root.name, "Total energy supply");
		assert!(root.is_root());
		assert_eq!(root.value, 100.0);
		assert_eq!(root.marker_radius, 40.0);
	}

	#[test]
	fn depth_and_main_flag() {
		let graph = full_graph(&[]);
		let by_id = |id: &str| graph.nodes.iter().find(|n| n.id == id).unwrap();
		assert_eq!(by_id("FE").depth, 1);
		assert_eq!(by_id("C0000X0350-0370").depth, 2);
		assert_eq!(by_id("C0350-0370").depth, 3);
		assert_eq!(by_id("C0371").depth, 4);
		let mains: HashSet<&str> = graph
			.nodes
			.iter()
			.filter(|n| n.is_main_category)
			.map(|n| n.id)
			.collect();
		let expected: HashSet<&str> = MAIN_CATEGORIES.iter().copied().collect();
		assert_eq!(mains, expected);
	}

	#[test]
	fn edge_weights_follow_target_values_with_a_floor() {
		let graph = full_graph(&[("G3000", 250.0), ("E7000", -30.0), ("H8000", 0.4)]);
		let weight = |to: &str| graph.edges.iter().find(|e| e.to == to).unwrap().weight;
		assert_eq!(weight("G3000"), 250.0);
		assert_eq!(weight("FE"), 250.0);
		assert_eq!(weight("E7000"), 1.0);
		assert_eq!(weight("H8000"), 1.0);
		assert_eq!(weight("C0110"), 1.0);
		assert!(graph.edges.iter().all(|e| e.weight >= 1.0));
	}

	#[test]
	fn equal_values_still_give_finite_sizes() {
		let graph = full_graph(&[(TOTAL_ID, 5.0), ("G3000", 5.0), ("RA300", 5.0)]);
		assert!(graph.nodes.iter().all(|n| n.marker_radius.is_finite()));
		let gas = graph.nodes.iter().find(|n| n.id == "G3000").unwrap();
		assert_eq!(gas.marker_radius, 6.0);
	}

	#[test]
	fn unknown_codes_never_surface() {
		let graph = full_graph(&[("NOT_A_CODE", 10.0), ("G3000", 1.0)]);
		assert!(graph.nodes.iter().all(|n| n.id != "NOT_A_CODE"));
		assert!(
			graph
				.edges
				.iter()
				.all(|e| e.from != "NOT_A_CODE" && e.to != "NOT_A_CODE")
		);
	}

	#[test]
	fn nothing_to_build_gives_an_empty_graph() {
		let empty = ResolvedValues::default();
		assert!(build(FUEL_FAMILIES, &empty, DEFAULT_ROOT_LABEL).is_empty());
		let values = resolve(FUEL_FAMILIES, &observations(&[("G3000", 1.0)]));
		let graph = build(&[], &values, DEFAULT_ROOT_LABEL);
		assert_eq!(graph, Graph::default());
	}
}
