use leptos::prelude::*;

use crate::components::graph_editor::GraphEditor;

/// Graph-definition editor page.
#[component]
pub fn Algorithms() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
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
			<div class="page-algorithms">
				<GraphEditor />
			</div>
		</ErrorBoundary>
	}
}
