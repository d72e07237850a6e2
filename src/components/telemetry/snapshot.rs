//! Telemetry snapshot shape and the pure formatting helpers behind the
//! monitor view.

use serde::Deserialize;

/// One pushed telemetry frame from the local API.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SystemSnapshot {
	/// OS name of the monitored machine.
	pub system_name: String,
	/// Hostname of the monitored machine.
	pub host_name: String,
	/// Used RAM in bytes.
	pub used_memory: u64,
	/// Total RAM in bytes.
	pub total_memory: u64,
	/// Per-core usage percentages, 0.0 to 100.0.
	pub cpu_usage: Vec<f32>,
}

/// CPUs stacked per column in the grid, matching the htop-style layout.
pub const CPUS_PER_COLUMN: usize = 4;

const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Human RAM line, e.g. `RAM Usage: 12.3GB (40% of 31GB)`.
pub fn ram_summary(used: u64, total: u64) -> String {
	let percent = if total == 0 {
		0
	} else {
		(100 * used / total) as u32
	};
	format!(
		"RAM Usage: {:.1}GB ({}% of {:.0}GB)",
		used as f64 / GIB,
		percent,
		total as f64 / GIB,
	)
}

/// Fixed-height label for one core, e.g. `CPU 1:   42.5`.
pub fn cpu_label(index: usize, usage: f32) -> String {
	format!("CPU{:2}: {:6.1}", index + 1, usage)
}

/// Arrange cores into [`CPUS_PER_COLUMN`] rows, column-major so the grid
/// fills downward first. Each cell carries the core index and its usage.
pub fn cpu_rows(cpu_usage: &[f32]) -> Vec<Vec<(usize, f32)>> {
	let columns = cpu_usage.len().div_ceil(CPUS_PER_COLUMN);
	(0..CPUS_PER_COLUMN.min(cpu_usage.len()))
		.map(|row| {
			(0..columns)
				.filter_map(|col| {
					let i = col * CPUS_PER_COLUMN + row;
					cpu_usage.get(i).map(|&usage| (i, usage))
				})
				.collect()
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn snapshot_decodes_api_frame() {
		let frame = r#"{
			"system_name": "Linux",
			"host_name": "devbox",
			"used_memory": 4294967296,
			"total_memory": 17179869184,
			"cpus": 8,
			"cpu_usage": [10.0, 20.0],
			"was_updated": true
		}"#;
		let snap: SystemSnapshot = serde_json::from_str(frame).unwrap();
		assert_eq!(snap.system_name, "Linux");
		assert_eq!(snap.host_name, "devbox");
		assert_eq!(snap.cpu_usage, vec![10.0, 20.0]);
	}

	#[test]
	fn ram_summary_formats_gigabytes_and_percent() {
		let gib = 1024 * 1024 * 1024_u64;
		assert_eq!(
			ram_summary(4 * gib + gib / 2, 16 * gib),
			"RAM Usage: 4.5GB (28% of 16GB)"
		);
	}

	#[test]
	fn ram_summary_handles_zero_total() {
		assert_eq!(ram_summary(0, 0), "RAM Usage: 0.0GB (0% of 0GB)");
	}

	#[test]
	fn cpu_rows_are_column_major() {
		let usage: Vec<f32> = (0..8).map(|i| i as f32).collect();
		let rows = cpu_rows(&usage);
		assert_eq!(rows.len(), 4);
		// row 0 holds core 0 of each column
		assert_eq!(rows[0], vec![(0, 0.0), (4, 4.0)]);
		assert_eq!(rows[3], vec![(3, 3.0), (7, 7.0)]);
	}

	#[test]
	fn cpu_rows_tolerate_partial_columns() {
		let usage: Vec<f32> = (0..6).map(|i| i as f32).collect();
		let rows = cpu_rows(&usage);
		assert_eq!(rows[0].len(), 2);
		assert_eq!(rows[2].len(), 1);
		let total: usize = rows.iter().map(|r| r.len()).sum();
		assert_eq!(total, 6);
	}

	#[test]
	fn cpu_rows_of_empty_usage_is_empty() {
		assert!(cpu_rows(&[]).is_empty());
	}

	#[test]
	fn cpu_label_is_fixed_width() {
		assert_eq!(cpu_label(0, 3.25), "CPU 1:    3.2");
		assert_eq!(cpu_label(11, 100.0), "CPU12:  100.0");
	}
}
