use leptos::prelude::*;

use super::model::EdgeField;
use super::store::{EditorAction, GraphState};
use super::viz::{self, RenderGraph};
use crate::components::force_canvas::ForceCanvas;

/// Parse a `<select>` value into an endpoint; the empty placeholder
/// option maps back to unassigned.
fn endpoint_from_value(value: &str) -> Option<usize> {
	value.parse::<usize>().ok().and_then(|v| v.checked_sub(1))
}

/// The graph-definition editor: node controls, edge table, text pane
/// and an on-demand rendered view of the current valid edges.
///
/// The text pane is editable; typed text stays inert until "Parse"
/// replaces the edge collection wholesale. Every structured edit
/// overwrites the pane with the regenerated encoding.
#[component]
pub fn GraphEditor() -> impl IntoView {
	let state = RwSignal::new(GraphState::new());
	let rendered: RwSignal<Option<RenderGraph>> = RwSignal::new(None);
	// A derived view of the latest render action keeps a single canvas
	// alive across repeated renders; only the description changes.
	let description = Signal::derive(move || rendered.get().unwrap_or_default());
	// Pane draft; shadows state.text until parsed or overwritten.
	let draft = RwSignal::new(String::new());

	let dispatch = move |action: EditorAction| {
		state.update(|s| s.apply(action));
		draft.set(state.with(|s| s.text.clone()));
	};

	let on_render = move |_| {
		let description = state.with(|s| viz::to_render_graph(s.node_count, &s.edges));
		rendered.set(Some(description));
	};

	view! {
		<div class="graph-editor">
			<h1>"Algorithms"</h1>
			<div class="editor-controls">
				<p class="node-count">"Nodes: " {move || state.with(|s| s.node_count)}</p>
				<button on:click=move |_| dispatch(EditorAction::IncrementNodes)>"+"</button>
				<button on:click=move |_| dispatch(EditorAction::DecrementNodes)>"-"</button>
				<button on:click=move |_| dispatch(EditorAction::AddEdge)>"Add Edge"</button>
				<button on:click=move |_| {
					dispatch(EditorAction::Reset);
					rendered.set(None);
				}>"Reset"</button>
				<button on:click=on_render>"Render"</button>
			</div>

			<div class="editor-panes">
				<EdgeTable state dispatch />
				<div class="text-pane">
					<textarea
						prop:value=move || draft.get()
						on:input=move |ev| draft.set(event_target_value(&ev))
						placeholder="Edge definitions: (src, dst, weight)"
					></textarea>
					<button on:click=move |_| {
						dispatch(EditorAction::ParseText(draft.get()));
					}>"Parse"</button>
				</div>
			</div>

			<Show when=move || rendered.with(|r| r.is_some())>
				<div class="editor-canvas">
					<ForceCanvas graph=description width=Some(800.0) height=Some(500.0) />
				</div>
			</Show>
		</div>
	}
}

#[component]
fn EdgeTable(
	state: RwSignal<GraphState>,
	dispatch: impl Fn(EditorAction) + Copy + Send + Sync + 'static,
) -> impl IntoView {
	view! {
		<Show when=move || state.with(|s| !s.edges.is_empty())>
			<table class="edge-table">
				<tr>
					<th>"Edge"</th>
					<th>"Source"</th>
					<th>"Destination"</th>
					<th>"Weight"</th>
					<th>"Directed"</th>
					<th></th>
				</tr>
				{move || {
					let node_count = state.with(|s| s.node_count);
					state.with(|s| s.edges.clone())
						.into_iter()
						.enumerate()
						.map(|(index, edge)| {
							view! {
								<tr class:edge-invalid={!edge.valid}>
									<td>"#" {index + 1}</td>
									<td>
										<select
											prop:value=endpoint_value(edge.source)
											on:change=move |ev| dispatch(EditorAction::UpdateField {
												index,
												field: EdgeField::Source(endpoint_from_value(
													&event_target_value(&ev),
												)),
											})
										>
											{endpoint_options(node_count)}
										</select>
									</td>
									<td>
										<select
											prop:value=endpoint_value(edge.destination)
											on:change=move |ev| dispatch(EditorAction::UpdateField {
												index,
												field: EdgeField::Destination(endpoint_from_value(
													&event_target_value(&ev),
												)),
											})
										>
											{endpoint_options(node_count)}
										</select>
									</td>
									<td>
										<input
											type="number"
											prop:value=edge.weight
											on:change=move |ev| {
												let weight = event_target_value(&ev)
													.parse()
													.unwrap_or(0.0);
												dispatch(EditorAction::UpdateField {
													index,
													field: EdgeField::Weight(weight),
												})
											}
										/>
									</td>
									<td>
										<input
											type="checkbox"
											prop:checked=edge.directed
											on:change=move |ev| dispatch(EditorAction::UpdateField {
												index,
												field: EdgeField::Directed(event_target_checked(&ev)),
											})
										/>
									</td>
									<td>
										<button on:click=move |_| {
											dispatch(EditorAction::DeleteEdge(index))
										}>"x"</button>
									</td>
								</tr>
							}
						})
						.collect_view()
				}}
			</table>
		</Show>
	}
}

fn endpoint_value(endpoint: Option<usize>) -> String {
	endpoint.map(|i| (i + 1).to_string()).unwrap_or_default()
}

fn endpoint_options(node_count: usize) -> impl IntoView {
	(0..=node_count)
		.map(|i| {
			if i == 0 {
				view! { <option value="">"-"</option> }.into_any()
			} else {
				view! { <option value=i.to_string()>{i}</option> }.into_any()
			}
		})
		.collect_view()
}
