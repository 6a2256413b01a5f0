use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::donut::{DonutChart, main_category_shares};
use crate::components::force_graph::ForceGraphCanvas;
use crate::energy::EnergyGraph;
use crate::eurostat::{LoadState, QueryConfig, use_energy_graph};

#[component]
fn EnergyView(graph: EnergyGraph) -> impl IntoView {
	let subtitle = graph.meta.subtitle();
	let shares = main_category_shares(&graph);
	let (root_label, decimals) = (graph.meta.root_label(), graph.meta.decimals);

	view! {
		<ForceGraphCanvas graph=Signal::stored(graph) fullscreen=true />
		<div class="graph-overlay">
			<h1>"Eurostat Energy Supply Network"</h1>
			<p class="subtitle">{subtitle}</p>
			<p class="hint">"Drag nodes to reposition. Scroll to zoom. Drag background to pan."</p>
		</div>
		<div class="donut-panel">
			<DonutChart
				items=shares
				title="Main categories"
				subtitle=root_label
				decimals=decimals
			/>
		</div>
	}
}

/// Energy network for the filters in the query string.
#[component]
pub fn Home() -> impl IntoView {
	let params = use_query_map();
	let query = Memo::new(move |_| {
		let params = params.get();
		QueryConfig::from_params(|key| params.get(key))
	});
	let state = use_energy_graph(query.into());

	view! {
		<div class="fullscreen-graph">
			{move || match state.get() {
				LoadState::Loading => {
					view! { <div class="status">"Loading Eurostat data..."</div> }.into_any()
				}
				LoadState::Failed(message) => {
					view! {
						<div class="status error">
							<h2>"Error loading data"</h2>
							<p>{message}</p>
						</div>
					}
						.into_any()
				}
				LoadState::Empty => view! { <div class="status">"No data available"</div> }.into_any(),
				LoadState::Ready(graph) => view! { <EnergyView graph=graph /> }.into_any(),
			}}
		</div>
	}
}
