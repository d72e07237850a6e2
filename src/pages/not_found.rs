use leptos::prelude::*;

/// 404 fallback page.
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="page-not-found">
			<h1>"Not Found"</h1>
			<p>
				<a href="/">"Back to the monitor"</a>
			</p>
		</div>
	}
}
