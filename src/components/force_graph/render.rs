use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::{ForceGraphState, NODE_RADIUS};

pub fn render(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str("#1a1a2e");
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	draw_title(state, ctx);
	ctx.restore();
}

fn draw_edges(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let held = state.drag.as_ref().map(|d| d.node.as_str());
	let dashed = js_sys::Array::of2(&JsValue::from_f64(4.0 / k), &JsValue::from_f64(3.0 / k));
	let solid = js_sys::Array::new();

	ctx.set_line_cap("round");
	for seg in state.engine.edge_segments() {
		let hovering = state.is_hovering();
		let lit = hovering && state.is_highlighted(seg.source) && state.is_highlighted(seg.target);
		let alpha = match (hovering, lit) {
			(false, _) => 0.6,
			(true, true) => 0.9,
			(true, false) => 0.15,
		};
		ctx.set_stroke_style_str(&format!("rgba(153, 153, 153, {alpha})"));
		ctx.set_line_width(seg.stroke_width * 1.5 / k);

		let touches_held = held.is_some_and(|id| id == seg.source || id == seg.target);
		let _ = ctx.set_line_dash(if touches_held { &dashed } else { &solid });

		ctx.begin_path();
		ctx.move_to(seg.x1, seg.y1);
		ctx.line_to(seg.x2, seg.y2);
		ctx.stroke();
	}
	let _ = ctx.set_line_dash(&solid);
}

fn draw_nodes(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let Some(snapshot) = state.engine.snapshot() else {
		return;
	};
	let k = state.transform.k;
	let dimmed = state.is_hovering();

	ctx.set_stroke_style_str("#fff");
	ctx.set_line_width(1.5 / k);
	for (node, pos) in snapshot.nodes().iter().zip(state.engine.positions()) {
		let lit = state.is_highlighted(&node.id);
		ctx.set_global_alpha(if dimmed && !lit { 0.3 } else { 1.0 });
		let radius = if state.hover.node.as_deref() == Some(node.id.as_str()) {
			NODE_RADIUS * 1.4
		} else {
			NODE_RADIUS
		};

		ctx.begin_path();
		let _ = ctx.arc(pos.x, pos.y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(state.palette.color(node.group));
		ctx.fill();
		ctx.stroke();
	}
	ctx.set_global_alpha(1.0);
}

/// Tooltip for the hovered node: id, then group.
fn draw_title(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let Some(id) = state.hover.node.as_deref() else {
		return;
	};
	let (Some(node), Some((x, y))) = (
		state.engine.snapshot().and_then(|s| s.node(id)),
		state.engine.position(id),
	) else {
		return;
	};

	let size = 11.0 / state.transform.k.max(0.5);
	ctx.set_fill_style_str("white");
	ctx.set_font(&format!("{size}px sans-serif"));
	for (i, line) in node.title().lines().enumerate() {
		let _ = ctx.fill_text(line, x + NODE_RADIUS + 4.0, y + (i as f64) * size * 1.2);
	}
}
