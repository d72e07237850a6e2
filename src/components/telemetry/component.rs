use leptos::prelude::*;
use log::{info, warn};
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{CloseEvent, MessageEvent, WebSocket};

use super::snapshot::{SystemSnapshot, cpu_label, cpu_rows, ram_summary};

/// Pixel width of one CPU bar cell.
const CPU_BAR_WIDTH: f64 = 300.0;

/// Live CPU/RAM monitor fed by snapshot frames pushed over a WebSocket.
///
/// The channel is strictly one-way; frames that fail to decode are
/// logged and dropped, and a disconnect simply freezes the last grid.
/// The socket is closed when the view unmounts.
#[component]
pub fn TelemetryView(
	#[prop(default = "ws://127.0.0.1:7032/api/cpus/ws")] url: &'static str,
) -> impl IntoView {
	let snapshot: RwSignal<Option<SystemSnapshot>> = RwSignal::new(None);

	match WebSocket::new(url) {
		Ok(socket) => {
			info!("[HTOP] connecting websocket to {url}");
			let on_message = Closure::<dyn FnMut(MessageEvent)>::new(move |ev: MessageEvent| {
				let Some(text) = ev.data().as_string() else {
					return;
				};
				match serde_json::from_str::<SystemSnapshot>(&text) {
					Ok(frame) => snapshot.set(Some(frame)),
					Err(err) => warn!("[HTOP] dropping malformed snapshot: {err}"),
				}
			});
			let on_close = Closure::<dyn FnMut(CloseEvent)>::new(move |ev: CloseEvent| {
				info!("[HTOP] websocket closed (code {})", ev.code());
			});
			socket.set_onmessage(Some(on_message.as_ref().unchecked_ref()));
			socket.set_onclose(Some(on_close.as_ref().unchecked_ref()));

			let socket = SendWrapper::new(socket);
			let on_message = SendWrapper::new(on_message);
			let on_close = SendWrapper::new(on_close);
			on_cleanup(move || {
				info!("[HTOP] closing websocket");
				socket.set_onmessage(None);
				socket.set_onclose(None);
				let _ = socket.close();
				drop(on_message);
				drop(on_close);
			});
		}
		Err(err) => {
			warn!("[HTOP] websocket connection failed: {err:?}");
		}
	}

	view! {
		<div class="htop">
			{move || {
				snapshot.get().map(|snap| {
					view! {
						<h1 id="systemname">"System name: " {snap.system_name.clone()}</h1>
						<h2 id="hostname">"Hostname: " {snap.host_name.clone()}</h2>
						<p id="ramusage">{ram_summary(snap.used_memory, snap.total_memory)}</p>
						<CpuGrid usage=snap.cpu_usage />
					}
				})
			}}
		</div>
	}
}

#[component]
fn CpuGrid(usage: Vec<f32>) -> impl IntoView {
	view! {
		<table id="cpu-table">
			{cpu_rows(&usage)
				.into_iter()
				.enumerate()
				.map(|(row, cells)| {
					view! {
						<tr id=format!("cpu-row-{row}")>
							{cells
								.into_iter()
								.map(|(i, cpu)| view! { <CpuCell index=i usage=cpu /> })
								.collect_view()}
						</tr>
					}
				})
				.collect_view()}
		</table>
	}
}

#[component]
fn CpuCell(index: usize, usage: f32) -> impl IntoView {
	let full = format!("width: {CPU_BAR_WIDTH}px");
	let filled = format!("width: {}px", usage as f64 / 100.0 * CPU_BAR_WIDTH);
	view! {
		<td class="cpu" id=format!("cpu-{index}") style=full.clone()>
			<div class="cpu-border inner" style=full.clone()>
				<p class="cpu-text inner">{cpu_label(index, usage)}</p>
			</div>
			<div class="cpu-fullbar inner" style=full.clone() />
			<div class="cpu-percentage inner" style=filled />
		</td>
	}
}
