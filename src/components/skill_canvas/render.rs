use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::skill_tree::{SkillCategory, SkillNode, check_unlock};

use super::color::node_color;
use super::layout::{HandleKind, center, half_extent, handle_anchors};
use super::state::SkillCanvasState;

const BACKGROUND: &str = "#141826";
const HANDLE_RADIUS: f64 = 3.0;
const DIAMOND_SIZE: f64 = 4.0;
const DIAMOND_GAP: f64 = 11.0;

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

pub fn render(state: &SkillCanvasState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(state, ctx);
	for node in state.store.nodes() {
		draw_node(state, ctx, node);
	}
	ctx.restore();
	draw_title(state, ctx);
}

fn set_dash(ctx: &CanvasRenderingContext2d, dash: Option<(f64, f64)>) {
	let pattern = match dash {
		Some((on, off)) => js_sys::Array::of2(&JsValue::from_f64(on), &JsValue::from_f64(off)),
		None => js_sys::Array::new(),
	};
	let _ = ctx.set_line_dash(&pattern);
}

fn draw_edges(state: &SkillCanvasState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let (dash, gap) = (8.0 / k, 4.0 / k);
	let dash_offset = -(state.flow_time * 30.0) % (dash + gap);
	let t = ease_out_cubic(state.hover.highlight_t);
	let hovered = state.hover.node.as_deref();

	for route in &state.routes {
		let live = state
			.store
			.node(&route.source)
			.is_some_and(|n| n.data.unlocked);
		let touches_hover =
			hovered == Some(route.source.as_str()) || hovered == Some(route.target.as_str());

		let alpha = match (live, touches_hover) {
			(_, true) => 0.7 + 0.3 * t,
			(true, false) => 0.7,
			(false, false) => 0.35,
		};
		ctx.set_stroke_style_str(&format!("rgba(160, 180, 230, {})", alpha));
		ctx.set_line_width(if touches_hover { 2.5 / k.max(0.5) } else { 1.5 / k.max(0.5) });
		if live {
			set_dash(ctx, None);
		} else {
			set_dash(ctx, Some((dash, gap)));
			ctx.set_line_dash_offset(dash_offset);
		}

		let ((c1x, c1y), (c2x, c2y)) = (route.from.control(), route.to.control());
		ctx.begin_path();
		ctx.move_to(route.from.x, route.from.y);
		ctx.bezier_curve_to(c1x, c1y, c2x, c2y, route.to.x, route.to.y);
		ctx.stroke();
	}
	set_dash(ctx, None);
}

fn trace_shape(ctx: &CanvasRenderingContext2d, category: SkillCategory, x: f64, y: f64, half: f64) {
	ctx.begin_path();
	match category {
		SkillCategory::Main => ctx.rect(x - half, y - half, half * 2.0, half * 2.0),
		SkillCategory::Root | SkillCategory::Sub => {
			let _ = ctx.arc(x, y, half, 0.0, 2.0 * PI);
		}
	}
}

fn draw_node(state: &SkillCanvasState, ctx: &CanvasRenderingContext2d, node: &SkillNode) {
	let k = state.transform.k;
	let (x, y) = center(node);
	let half = half_extent(node.category);
	let data = &node.data;

	let hovered = state.hover.node.as_deref() == Some(node.id.as_str());
	if hovered && state.hover.highlight_t > 0.01 {
		let glow = ease_out_cubic(state.hover.highlight_t);
		trace_shape(ctx, node.category, x, y, half + 6.0 * glow);
		ctx.set_fill_style_str(&format!("rgba(200, 220, 255, {})", 0.15 * glow));
		ctx.fill();
	}

	trace_shape(ctx, node.category, x, y, half);
	ctx.set_fill_style_str(&node_color(data.level, data.max_level, data.selected));
	ctx.fill();

	let affordable = check_unlock(&node.id, state.store.nodes(), state.store.points()).is_ok();
	let (ring, width) = if data.selected {
		("rgba(255, 255, 255, 0.9)", 2.5)
	} else if affordable {
		("rgba(120, 200, 255, 0.7)", 1.5)
	} else {
		("rgba(90, 100, 130, 0.6)", 1.0)
	};
	ctx.set_stroke_style_str(ring);
	ctx.set_line_width(width / k.max(0.5));
	ctx.stroke();

	for (anchor, kind) in handle_anchors(node) {
		ctx.begin_path();
		let _ = ctx.arc(anchor.x, anchor.y, HANDLE_RADIUS, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(match kind {
			HandleKind::Inbound => "#5b6a9a",
			HandleKind::Outbound => "#9fb3e8",
		});
		ctx.fill();
	}

	ctx.set_fill_style_str(if data.level * 2 > data.max_level { "#1a1a2e" } else { "#e8ecf5" });
	ctx.set_font("11px sans-serif");
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	let _ = ctx.fill_text(&node.id, x, y);

	draw_diamonds(ctx, node, x, y + half + DIAMOND_GAP);
}

/// One pip per level, filled once that level is reached. Single-level skills get none.
fn draw_diamonds(ctx: &CanvasRenderingContext2d, node: &SkillNode, x: f64, y: f64) {
	let data = &node.data;
	if data.max_level <= 1 {
		return;
	}
	let spacing = DIAMOND_SIZE * 2.5;
	let start = x - spacing * (data.max_level - 1) as f64 / 2.0;
	for i in 0..data.max_level {
		let dx = start + spacing * i as f64;
		ctx.begin_path();
		ctx.move_to(dx, y - DIAMOND_SIZE);
		ctx.line_to(dx + DIAMOND_SIZE, y);
		ctx.line_to(dx, y + DIAMOND_SIZE);
		ctx.line_to(dx - DIAMOND_SIZE, y);
		ctx.close_path();
		if data.level > i {
			ctx.set_fill_style_str("#c9ced1");
			ctx.fill();
		}
		ctx.set_stroke_style_str("#6d7aa6");
		ctx.set_line_width(1.0);
		ctx.stroke();
	}
}

/// Drawn in screen space so the tooltip stays legible at any zoom.
fn draw_title(state: &SkillCanvasState, ctx: &CanvasRenderingContext2d) {
	if !state.hover.show_title {
		return;
	}
	let Some(node) = state.hover.node.as_deref().and_then(|id| state.store.node(id)) else {
		return;
	};
	let (x, y) = center(node);
	let half = half_extent(node.category);
	let (sx, sy) = state.graph_to_screen(x, y - half);

	let title = &node.data.title;
	let width = 14.0 + 7.0 * title.chars().count() as f64;
	let (bx, by) = (sx - width / 2.0, sy - 34.0);

	ctx.set_fill_style_str("rgba(20, 24, 38, 0.92)");
	ctx.fill_rect(bx, by, width, 24.0);
	ctx.set_stroke_style_str("rgba(160, 180, 230, 0.8)");
	ctx.set_line_width(1.0);
	ctx.stroke_rect(bx, by, width, 24.0);

	ctx.set_fill_style_str("#e8ecf5");
	ctx.set_font("13px sans-serif");
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	let _ = ctx.fill_text(title, sx, by + 12.0);
}
