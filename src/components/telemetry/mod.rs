//! Peripheral system-telemetry view: snapshot decoding and the CPU grid.

mod component;
mod snapshot;

pub use component::TelemetryView;
pub use snapshot::{SystemSnapshot, cpu_label, cpu_rows, ram_summary};
