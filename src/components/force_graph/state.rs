use std::collections::{HashMap, HashSet};

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use super::layout::Placement;
use super::scale::LinearScale;
use crate::energy::encode::node_style;
use crate::energy::{EnergyGraph, GraphNode};

pub const HIT_RADIUS: f64 = 12.0;
const EDGE_WIDTH: (f64, f64) = (1.0, 4.0);
const MIN_ZOOM: f64 = 0.1;
const MAX_ZOOM: f64 = 10.0;

#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub id: &'static str,
	pub label: String,
	/// Formatted value, only for nodes with data.
	pub detail: Option<String>,
	pub radius: f64,
	pub fill: &'static str,
	pub stroke: &'static str,
	pub stroke_width: f64,
}

impl NodeInfo {
	fn from_graph_node(node: &GraphNode, graph: &EnergyGraph) -> Self {
		let style = node_style(node.tier, node.value);
		Self {
			id: node.id,
			label: node.name.clone(),
			detail: node
				.has_value()
				.then(|| graph.meta.format_value(node.value)),
			radius: node.marker_radius,
			fill: style.fill,
			stroke: style.stroke,
			stroke_width: style.stroke_width as f64,
		}
	}
}

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<DefaultNodeIdx>,
	pub neighbors: HashSet<DefaultNodeIdx>,
	pub highlight_t: f64,
	pub prev_node: Option<DefaultNodeIdx>,
	pub prev_neighbors: HashSet<DefaultNodeIdx>,
	delay_t: f64,
}

pub struct ForceGraphState {
	/// Edge payload is the edge weight.
	pub graph: ForceGraph<NodeInfo, f64>,
	pub edge_scale: LinearScale,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub hover: HoverState,
	pub width: f64,
	pub height: f64,
	pub animation_running: bool,
	pub flow_time: f64,
	edges: Vec<(DefaultNodeIdx, DefaultNodeIdx)>,
}

impl ForceGraphState {
	/// Loads `data` into the simulation, asking `seed` for initial positions.
	pub fn new(
		data: &EnergyGraph,
		width: f64,
		height: f64,
		seed: impl FnOnce(&[GraphNode], f64, f64) -> Vec<Placement>,
	) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		let mut id_to_idx = HashMap::new();
		let mut edges = Vec::new();

		let placements = seed(&data.nodes, width, height);
		for (i, node) in data.nodes.iter().enumerate() {
			let placement = placements.get(i).copied().unwrap_or(Placement {
				x: 0.0,
				y: 0.0,
				anchored: false,
			});
			let idx = graph.add_node(NodeData {
				x: placement.x,
				y: placement.y,
				mass: 10.0,
				is_anchor: placement.anchored,
				user_data: NodeInfo::from_graph_node(node, data),
			});
			id_to_idx.insert(node.id, idx);
		}

		for edge in &data.edges {
			if let (Some(&src), Some(&tgt)) = (id_to_idx.get(edge.from), id_to_idx.get(edge.to)) {
				graph.add_edge(
					src,
					tgt,
					EdgeData {
						user_data: edge.weight,
					},
				);
				edges.push((src, tgt));
			}
		}

		Self {
			graph,
			edges,
			edge_scale: LinearScale::fit(data.edges.iter().map(|e| e.weight.ln()), EDGE_WIDTH),
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			hover: HoverState::default(),
			width,
			height,
			animation_running: true,
			flow_time: 0.0,
		}
	}

	/// Stroke width for an edge of the given weight, before zoom.
	pub fn edge_width(&self, weight: f64) -> f64 {
		self.edge_scale.apply(weight.max(1.0).ln())
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found: Option<(DefaultNodeIdx, f64)> = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			let dist = (dx * dx + dy * dy).sqrt();
			// hit area is in world space and never smaller than HIT_RADIUS
			let reach = node.data.user_data.radius.max(HIT_RADIUS);
			if dist < reach && found.is_none_or(|(_, best)| dist < best) {
				found = Some((node.index(), dist));
			}
		});
		found.map(|(idx, _)| idx)
	}

	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		if self.hover.node == node {
			return;
		}
		let was_hovering = self.hover.node.is_some();

		// keep the previous highlight around while it fades out
		if was_hovering && node.is_none() {
			self.hover.prev_node = self.hover.node.take();
			self.hover.prev_neighbors = std::mem::take(&mut self.hover.neighbors);
		} else {
			self.hover.prev_node = None;
			self.hover.prev_neighbors.clear();
		}

		self.hover.node = node;
		self.hover.neighbors.clear();

		if let Some(idx) = node {
			if !was_hovering {
				self.hover.delay_t = 0.0;
			}
			for &(src, tgt) in &self.edges {
				if src == idx {
					self.hover.neighbors.insert(tgt);
				} else if tgt == idx {
					self.hover.neighbors.insert(src);
				}
			}
		}
	}

	pub fn is_highlighted(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx)
			|| self.hover.neighbors.contains(&idx)
			|| self.hover.prev_node == Some(idx)
			|| self.hover.prev_neighbors.contains(&idx)
	}

	pub fn is_hovered(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx) || self.hover.prev_node == Some(idx)
	}

	pub fn has_active_highlight(&self) -> bool {
		self.hover.node.is_some() || self.hover.prev_node.is_some()
	}

	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
		self.flow_time += dt as f64;

		let (target, delay, speed) = if self.hover.node.is_some() {
			(1.0, 0.08, 1.8)
		} else {
			(0.0, 0.0, 1.26)
		};

		if self.hover.node.is_some() {
			self.hover.delay_t = (self.hover.delay_t + dt as f64).min(delay);
			if self.hover.delay_t >= delay {
				self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt as f64;
			}
		} else {
			self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt as f64;
			if self.hover.highlight_t < 0.01 {
				self.hover.highlight_t = 0.0;
				self.hover.prev_node = None;
				self.hover.prev_neighbors.clear();
			}
		}
	}

	/// Pointer pressed: grab the node under it, or start panning.
	pub fn press(&mut self, x: f64, y: f64) {
		let Some(idx) = self.node_at_position(x, y) else {
			self.pan = PanState {
				active: true,
				start_x: x,
				start_y: y,
				transform_start_x: self.transform.x,
				transform_start_y: self.transform.y,
			};
			return;
		};
		let mut origin = (0.0, 0.0);
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				origin = (node.x(), node.y());
			}
		});
		self.drag = DragState {
			active: true,
			node_idx: Some(idx),
			start_x: x,
			start_y: y,
			node_start_x: origin.0,
			node_start_y: origin.1,
		};
	}

	/// Pointer moved. A dragged node is pinned where it is dropped.
	pub fn pointer_move(&mut self, x: f64, y: f64) {
		if !self.drag.active {
			let hovered = self.node_at_position(x, y);
			self.set_hover(hovered);
			if self.pan.active {
				self.transform.x = self.pan.transform_start_x + (x - self.pan.start_x);
				self.transform.y = self.pan.transform_start_y + (y - self.pan.start_y);
			}
			return;
		}
		let Some(idx) = self.drag.node_idx else {
			return;
		};
		let k = self.transform.k;
		let nx = self.drag.node_start_x + ((x - self.drag.start_x) / k) as f32;
		let ny = self.drag.node_start_y + ((y - self.drag.start_y) / k) as f32;
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				node.data.x = nx;
				node.data.y = ny;
				node.data.is_anchor = true;
			}
		});
	}

	pub fn release(&mut self) {
		self.drag = DragState::default();
		self.pan.active = false;
	}

	/// Zooms one wheel step around the screen point `(x, y)`.
	pub fn zoom_at(&mut self, x: f64, y: f64, zoom_in: bool) {
		let factor = if zoom_in { 1.1 } else { 0.9 };
		let k = (self.transform.k * factor).clamp(MIN_ZOOM, MAX_ZOOM);
		let ratio = k / self.transform.k;
		self.transform.x = x - (x - self.transform.x) * ratio;
		self.transform.y = y - (y - self.transform.y) * ratio;
		self.transform.k = k;
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}
