use crate::skill_tree::{ClickOutcome, SkillCategory, SkillId, SkillTreeStore};

use super::layout::{EdgeRoute, center, connector_routes, half_extent};

/// Seconds a pointer must rest on a node before its title shows.
pub const TITLE_DELAY: f64 = 1.0;
/// Screen pixels the pointer may travel before a background press becomes a pan.
pub const CLICK_SLOP: f64 = 4.0;
pub const FIT_PADDING: f64 = 80.0;
pub const MIN_ZOOM: f64 = 0.1;
pub const MAX_ZOOM: f64 = 10.0;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub moved: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// Hovered node plus the title timer. Moving to another node or leaving
/// restarts the timer.
#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<SkillId>,
	pub highlight_t: f64,
	pub show_title: bool,
	elapsed: f64,
}

pub struct SkillCanvasState {
	pub store: SkillTreeStore,
	pub routes: Vec<EdgeRoute>,
	pub transform: ViewTransform,
	pub pan: PanState,
	pub hover: HoverState,
	pub pressed: Option<SkillId>,
	pub width: f64,
	pub height: f64,
	pub flow_time: f64,
}

impl SkillCanvasState {
	pub fn new(store: SkillTreeStore, width: f64, height: f64) -> Self {
		let routes = connector_routes(store.nodes(), store.edges());
		let mut state = Self {
			store,
			routes,
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			pan: PanState::default(),
			hover: HoverState::default(),
			pressed: None,
			width,
			height,
			flow_time: 0.0,
		};
		state.fit_view();
		state
	}

	/// Centers the tree and zooms so every node fits inside the padded viewport.
	pub fn fit_view(&mut self) {
		let mut bounds: Option<(f64, f64, f64, f64)> = None;
		for node in self.store.nodes() {
			let (cx, cy) = center(node);
			let half = half_extent(node.category);
			let (x0, y0, x1, y1) = bounds.unwrap_or((f64::MAX, f64::MAX, f64::MIN, f64::MIN));
			bounds = Some((
				x0.min(cx - half),
				y0.min(cy - half),
				x1.max(cx + half),
				y1.max(cy + half),
			));
		}
		let Some((x0, y0, x1, y1)) = bounds else {
			return;
		};

		let avail_w = (self.width - 2.0 * FIT_PADDING).max(1.0);
		let avail_h = (self.height - 2.0 * FIT_PADDING).max(1.0);
		let k = (avail_w / (x1 - x0))
			.min(avail_h / (y1 - y0))
			.clamp(MIN_ZOOM, 2.0);
		let (mid_x, mid_y) = ((x0 + x1) / 2.0, (y0 + y1) / 2.0);

		self.transform = ViewTransform {
			x: self.width / 2.0 - mid_x * k,
			y: self.height / 2.0 - mid_y * k,
			k,
		};
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn graph_to_screen(&self, gx: f64, gy: f64) -> (f64, f64) {
		(
			gx * self.transform.k + self.transform.x,
			gy * self.transform.k + self.transform.y,
		)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<SkillId> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		for node in self.store.nodes() {
			let (cx, cy) = center(node);
			let (dx, dy) = (gx - cx, gy - cy);
			let half = half_extent(node.category);
			let hit = match node.category {
				SkillCategory::Main => dx.abs() <= half && dy.abs() <= half,
				SkillCategory::Root | SkillCategory::Sub => (dx * dx + dy * dy).sqrt() <= half,
			};
			// later nodes draw on top
			if hit {
				found = Some(node.id.clone());
			}
		}
		found
	}

	pub fn set_hover(&mut self, node: Option<SkillId>) {
		if self.hover.node == node {
			return;
		}
		self.hover.node = node;
		self.hover.elapsed = 0.0;
		self.hover.show_title = false;
	}

	pub fn press(&mut self, sx: f64, sy: f64) {
		self.pressed = self.node_at_position(sx, sy);
		if self.pressed.is_none() {
			self.pan = PanState {
				active: true,
				moved: false,
				start_x: sx,
				start_y: sy,
				transform_start_x: self.transform.x,
				transform_start_y: self.transform.y,
			};
		}
	}

	pub fn drag(&mut self, sx: f64, sy: f64) {
		if !self.pan.active {
			let hovered = self.node_at_position(sx, sy);
			self.set_hover(hovered);
			return;
		}
		let (dx, dy) = (sx - self.pan.start_x, sy - self.pan.start_y);
		if (dx * dx + dy * dy).sqrt() > CLICK_SLOP {
			self.pan.moved = true;
		}
		if self.pan.moved {
			self.transform.x = self.pan.transform_start_x + dx;
			self.transform.y = self.pan.transform_start_y + dy;
		}
	}

	/// Ends a press. Returns the click it amounted to, if any.
	pub fn release(&mut self, sx: f64, sy: f64) -> Option<ClickOutcome> {
		let pressed = self.pressed.take();
		let pan = std::mem::take(&mut self.pan);

		if let Some(id) = pressed {
			return (self.node_at_position(sx, sy).as_deref() == Some(id.as_str()))
				.then(|| self.store.click_node(&id));
		}
		(pan.active && !pan.moved).then(|| self.store.click_background())
	}

	pub fn leave(&mut self) {
		self.pressed = None;
		self.pan = PanState::default();
		self.set_hover(None);
	}

	pub fn zoom(&mut self, sx: f64, sy: f64, delta_y: f64) {
		let factor = if delta_y > 0.0 { 0.9 } else { 1.1 };
		let new_k = (self.transform.k * factor).clamp(MIN_ZOOM, MAX_ZOOM);
		let ratio = new_k / self.transform.k;
		self.transform.x = sx - (sx - self.transform.x) * ratio;
		self.transform.y = sy - (sy - self.transform.y) * ratio;
		self.transform.k = new_k;
	}

	pub fn tick(&mut self, dt: f64) {
		self.flow_time += dt;

		if self.hover.node.is_some() {
			self.hover.elapsed += dt;
			if self.hover.elapsed >= TITLE_DELAY {
				self.hover.show_title = true;
			}
			self.hover.highlight_t += (1.0 - self.hover.highlight_t) * (1.8 * dt).min(1.0);
		} else {
			self.hover.highlight_t += (0.0 - self.hover.highlight_t) * (1.26 * dt).min(1.0);
			if self.hover.highlight_t < 0.01 {
				self.hover.highlight_t = 0.0;
			}
		}
	}

	/// New canvas size. Pan and zoom stay where the user left them.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::skill_tree::SkillTreeSeed;

	fn state() -> SkillCanvasState {
		let store = SkillTreeStore::from_seed(&SkillTreeSeed::load_default().unwrap());
		SkillCanvasState::new(store, 800.0, 600.0)
	}

	fn screen_of(state: &SkillCanvasState, id: &str) -> (f64, f64) {
		let node = state.store.node(id).unwrap();
		state.graph_to_screen(node.position.x as f64, node.position.y as f64)
	}

	#[test]
	fn fit_view_keeps_every_node_on_screen() {
		let state = state();
		for node in state.store.nodes() {
			let (sx, sy) = screen_of(&state, &node.id);
			assert!(sx > 0.0 && sx < 800.0, "{} x={sx}", node.id);
			assert!(sy > 0.0 && sy < 600.0, "{} y={sy}", node.id);
		}
	}

	#[test]
	fn hit_test_finds_nodes_and_misses_background() {
		let state = state();
		let (sx, sy) = screen_of(&state, "n3");
		assert_eq!(state.node_at_position(sx, sy).as_deref(), Some("n3"));
		assert_eq!(state.node_at_position(1.0, 1.0), None);
	}

	#[test]
	fn press_release_on_a_node_clicks_it() {
		let mut state = state();
		let (sx, sy) = screen_of(&state, "n5");

		state.press(sx, sy);
		assert_eq!(state.release(sx, sy), Some(ClickOutcome::Selected("n5".into())));
		state.press(sx, sy);
		assert!(matches!(state.release(sx, sy), Some(ClickOutcome::Unlocked(..))));
		assert_eq!(state.store.points(), 9);
	}

	#[test]
	fn releasing_off_the_pressed_node_does_nothing() {
		let mut state = state();
		let (sx, sy) = screen_of(&state, "n5");
		state.press(sx, sy);
		assert_eq!(state.release(1.0, 1.0), None);
		assert_eq!(state.store.selected_id(), None);
	}

	#[test]
	fn background_tap_clears_but_pan_does_not() {
		let mut state = state();
		let (sx, sy) = screen_of(&state, "n5");
		state.press(sx, sy);
		state.release(sx, sy);

		state.press(1.0, 1.0);
		state.drag(60.0, 40.0);
		assert_eq!(state.release(60.0, 40.0), None);
		assert_eq!(state.store.selected_id(), Some("n5"));

		state.press(1.0, 1.0);
		state.drag(2.0, 2.0);
		assert_eq!(state.release(2.0, 2.0), Some(ClickOutcome::Cleared));
		assert_eq!(state.store.selected_id(), None);
	}

	#[test]
	fn title_shows_after_the_delay() {
		let mut state = state();
		state.set_hover(Some("n1".into()));
		state.tick(0.5);
		assert!(!state.hover.show_title);
		state.tick(0.6);
		assert!(state.hover.show_title);
	}

	#[test]
	fn leaving_cancels_the_title_timer() {
		let mut state = state();
		state.set_hover(Some("n1".into()));
		state.tick(0.9);
		state.set_hover(Some("n2".into()));
		state.tick(0.5);
		assert!(!state.hover.show_title);

		state.leave();
		state.tick(2.0);
		assert!(!state.hover.show_title);
		assert_eq!(state.hover.node, None);
	}

	#[test]
	fn resize_keeps_pan_and_zoom() {
		let mut state = state();
		state.zoom(400.0, 300.0, -1.0);
		state.press(1.0, 1.0);
		state.drag(80.0, 50.0);
		state.release(80.0, 50.0);
		let before = state.transform.clone();

		state.resize(1024.0, 768.0);
		assert_eq!(state.transform, before);
		assert_eq!((state.width, state.height), (1024.0, 768.0));
	}

	#[test]
	fn touch_tap_with_jitter_still_selects() {
		let mut state = state();
		let (sx, sy) = screen_of(&state, "n4");

		state.press(sx, sy);
		state.drag(sx + 1.5, sy - 1.0);
		assert_eq!(
			state.release(sx + 1.5, sy - 1.0),
			Some(ClickOutcome::Selected("n4".into()))
		);
	}

	#[test]
	fn zoom_is_clamped() {
		let mut state = state();
		for _ in 0..200 {
			state.zoom(400.0, 300.0, -1.0);
		}
		assert_eq!(state.transform.k, MAX_ZOOM);
		for _ in 0..200 {
			state.zoom(400.0, 300.0, 1.0);
		}
		assert_eq!(state.transform.k, MIN_ZOOM);
	}
}
