use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::prelude::*;

use crate::components::force_graph::{ForceGraphCanvas, OrdinalScale};
use crate::graph::GraphStore;

/// Heading of the side panel listing one group.
fn group_label(group: u32) -> String {
	match group {
		1 => "Tables".into(),
		2 => "Services".into(),
		3 => "Web".into(),
		4 => "Batch".into(),
		n => format!("Group {n}"),
	}
}

/// Loads the bundled graph and shows the explorer, or the load error.
#[component]
pub fn Home() -> impl IntoView {
	let store = GraphStore::load();

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"The graph could not be loaded"</h1>

				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			{store.map(|store| view! { <Explorer store=store /> })}
		</ErrorBoundary>
	}
}

/// Search box, per-group node lists and the graph canvas.
#[component]
fn Explorer(store: GraphStore) -> impl IntoView {
	let palette = OrdinalScale::from_snapshot(&store.snapshot());
	let (query, set_query) = signal(String::new());
	let graph = Signal::derive(move || store.neighborhood(&query.get()));
	let input_ref = NodeRef::<leptos::html::Input>::new();
	let panel_palette = palette.clone();

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		if let Some(input) = input_ref.get() {
			set_query.set(input.value().trim().to_owned());
		}
	};
	let on_reset = move |_: MouseEvent| {
		if let Some(input) = input_ref.get() {
			input.set_value("");
		}
		set_query.set(String::new());
	};

	let panels = move || {
		let snapshot = graph.get();
		snapshot
			.groups()
			.into_iter()
			.map(|(group, ids)| {
				let ids: Vec<String> = ids.into_iter().map(str::to_owned).collect();
				(group, ids)
			})
			.collect::<Vec<_>>()
	};

	let summary = move || {
		let snapshot = graph.get();
		let q = query.get();
		if !q.is_empty() && snapshot.is_empty() {
			format!("no node named \"{q}\"")
		} else {
			format!("{} nodes, {} links", snapshot.len(), snapshot.edge_count())
		}
	};

	view! {
		<div class="fullscreen-graph">
			<ForceGraphCanvas data=graph palette=palette fullscreen=true />
			<div class="graph-overlay">
				<h1>"Dependency Graph"</h1>
				<form class="graph-search" on:submit=on_submit>
					<input type="text" node_ref=input_ref placeholder="node id, e.g. svc2" />
					<button type="submit">"Focus"</button>
					<button type="button" on:click=on_reset>"Show all"</button>
				</form>
				<p class="subtitle">{summary}</p>
			</div>
			<aside class="graph-panels">
				{move || {
					panels()
						.into_iter()
						.map(|(group, ids)| {
							let color = panel_palette.color(group);
							view! {
								<section>
									<h2 style=format!("color: {color}")>{group_label(group)}</h2>
									<ul>
										{ids
											.into_iter()
											.map(|id| {
												let label = id.clone();
												view! {
													<li>
														<button on:click=move |_: MouseEvent| set_query.set(id.clone())>
															{label}
														</button>
													</li>
												}
											})
											.collect_view()}
									</ul>
								</section>
							}
						})
						.collect_view()
				}}
			</aside>
		</div>
	}
}
