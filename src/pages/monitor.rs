use leptos::prelude::*;

use crate::components::telemetry::TelemetryView;

/// Live system monitor page.
#[component]
pub fn Monitor() -> impl IntoView {
	view! {
		<div class="page-monitor">
			<TelemetryView />
		</div>
	}
}
