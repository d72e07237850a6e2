use std::collections::HashMap;
use std::f64::consts::PI;

use force_graph::DefaultNodeIdx;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::{CanvasState, NODE_RADIUS};

pub fn render(state: &CanvasState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str("#1a1a2e");
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
}

fn node_positions(state: &CanvasState) -> HashMap<DefaultNodeIdx, (f64, f64)> {
	let mut positions = HashMap::new();
	state.graph.visit_nodes(|node| {
		positions.insert(node.index(), (node.x() as f64, node.y() as f64));
	});
	positions
}

fn draw_edges(state: &CanvasState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let (line_width, arrow_size) = (1.5 / k, 8.0 / k);
	let positions = node_positions(state);

	ctx.set_stroke_style_str("rgba(100, 180, 255, 0.7)");
	ctx.set_line_width(line_width);

	for edge in &state.edges {
		let (Some(&(x1, y1)), Some(&(x2, y2))) =
			(positions.get(&edge.tail), positions.get(&edge.head))
		else {
			continue;
		};

		if edge.is_loop {
			draw_loop(ctx, x1, y1, &edge.label, k);
			continue;
		}

		let (dx, dy) = (x2 - x1, y2 - y1);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			continue;
		}
		let (ux, uy) = (dx / dist, dy / dist);

		let head_gap = if edge.directed {
			NODE_RADIUS + arrow_size
		} else {
			NODE_RADIUS
		};
		ctx.begin_path();
		ctx.move_to(x1 + ux * NODE_RADIUS, y1 + uy * NODE_RADIUS);
		ctx.line_to(x2 - ux * head_gap, y2 - uy * head_gap);
		ctx.stroke();

		if edge.directed {
			let (tip_x, tip_y) = (x2 - ux * NODE_RADIUS, y2 - uy * NODE_RADIUS);
			let (back_x, back_y) = (tip_x - ux * arrow_size, tip_y - uy * arrow_size);
			let (px, py) = (-uy * arrow_size * 0.5, ux * arrow_size * 0.5);
			ctx.set_fill_style_str("rgba(100, 180, 255, 0.9)");
			ctx.begin_path();
			ctx.move_to(tip_x, tip_y);
			ctx.line_to(back_x + px, back_y + py);
			ctx.line_to(back_x - px, back_y - py);
			ctx.close_path();
			ctx.fill();
		}

		// weight label, offset off the edge midpoint
		let (mx, my) = ((x1 + x2) / 2.0, (y1 + y2) / 2.0);
		ctx.set_fill_style_str("rgba(255, 255, 255, 0.85)");
		ctx.set_font(&format!("{}px sans-serif", 11.0 / k.max(0.5)));
		let _ = ctx.fill_text(&edge.label, mx - uy * 8.0 / k, my + ux * 8.0 / k);
	}
}

fn draw_loop(ctx: &CanvasRenderingContext2d, x: f64, y: f64, label: &str, k: f64) {
	let r = NODE_RADIUS * 0.9;
	let (cx, cy) = (x + NODE_RADIUS, y - NODE_RADIUS);
	let _ = ctx.set_line_dash(&js_sys::Array::of2(
		&JsValue::from_f64(4.0 / k),
		&JsValue::from_f64(3.0 / k),
	));
	ctx.begin_path();
	let _ = ctx.arc(cx, cy, r, 0.0, 2.0 * PI);
	ctx.stroke();
	let _ = ctx.set_line_dash(&js_sys::Array::new());
	ctx.set_fill_style_str("rgba(255, 255, 255, 0.85)");
	ctx.set_font(&format!("{}px sans-serif", 11.0 / k.max(0.5)));
	let _ = ctx.fill_text(label, cx + r + 2.0 / k, cy);
}

fn draw_nodes(state: &CanvasState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;

	state.graph.visit_nodes(|node| {
		let (x, y) = (node.x() as f64, node.y() as f64);

		ctx.begin_path();
		let _ = ctx.arc(x, y, NODE_RADIUS, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&node.data.user_data.color);
		ctx.fill();
		ctx.set_stroke_style_str("rgba(255, 255, 255, 0.6)");
		ctx.set_line_width(1.0 / k);
		ctx.stroke();

		ctx.set_fill_style_str("white");
		ctx.set_font(&format!("{}px sans-serif", 11.0 / k.max(0.5)));
		ctx.set_text_align("center");
		ctx.set_text_baseline("middle");
		let _ = ctx.fill_text(&node.data.user_data.label, x, y);
		ctx.set_text_align("start");
		ctx.set_text_baseline("alphabetic");
	});
}
