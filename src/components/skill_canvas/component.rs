use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::error;
use wasm_bindgen::prelude::*;
use web_sys::{
	CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, TouchEvent, WheelEvent, Window,
};

use super::render;
use super::state::SkillCanvasState;
use crate::skill_tree::{SkillTreeSeed, SkillTreeStore};

fn window_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

type SharedState = Rc<RefCell<Option<SkillCanvasState>>>;

fn client_to_canvas(
	canvas_ref: NodeRef<leptos::html::Canvas>,
	client_x: i32,
	client_y: i32,
) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((client_x as f64 - rect.left(), client_y as f64 - rect.top()))
}

fn canvas_point(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<(f64, f64)> {
	client_to_canvas(canvas_ref, ev.client_x(), ev.client_y())
}

/// First finger of a touch event. A lifted finger is only listed in
/// `changedTouches`.
fn touch_point(
	canvas_ref: NodeRef<leptos::html::Canvas>,
	ev: &TouchEvent,
	lifted: bool,
) -> Option<(f64, f64)> {
	let list = if lifted { ev.changed_touches() } else { ev.touches() };
	let touch = list.get(0)?;
	client_to_canvas(canvas_ref, touch.client_x(), touch.client_y())
}

/// Ends a press and pushes the resulting selection and point pool out to the
/// signals.
fn release_and_publish(
	state: &SharedState,
	x: f64,
	y: f64,
	selected: RwSignal<Option<String>>,
	points: RwSignal<u32>,
) {
	let published = state.borrow_mut().as_mut().and_then(|s| {
		s.release(x, y)
			.map(|_| (s.store.selected_id().map(str::to_string), s.store.points()))
	});
	// signals are written after the borrow ends so effects can read the state
	if let Some((id, left)) = published {
		if selected.get_untracked() != id {
			selected.set(id);
		}
		if points.get_untracked() != left {
			points.set(left);
		}
	}
}

/// Interactive skill tree. Publishes the selected skill id and the point pool
/// after every click.
#[component]
pub fn SkillTreeCanvas(
	seed: SkillTreeSeed,
	selected: RwSignal<Option<String>>,
	points: RwSignal<u32>,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: SharedState = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (state_init, animate_init, resize_cb_init) =
		(state.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if state_init.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			error!("skill tree canvas needs a browser window");
			return;
		};

		let (w, h) = if fullscreen {
			window_size(&window).unwrap_or((800.0, 600.0))
		} else {
			(
				width.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_width() as f64)
						.unwrap_or(800.0)
				}),
				height.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_height() as f64)
						.unwrap_or(600.0)
				}),
			)
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(ctx) = context_2d(&canvas) else {
			error!("2d canvas context unavailable");
			return;
		};
		let store = SkillTreeStore::from_seed(&seed);
		points.set(store.points());
		*state_init.borrow_mut() = Some(SkillCanvasState::new(store, w, h));

		if fullscreen {
			let (state_resize, canvas_resize) = (state_init.clone(), canvas.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let Some((nw, nh)) = web_sys::window().as_ref().and_then(window_size) else {
					return;
				};
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				if let Some(ref mut s) = *state_resize.borrow_mut() {
					s.resize(nw, nh);
				}
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick(0.016);
				render::render(s, &ctx);
			}
			if let (Some(cb), Some(win)) = (&*animate_inner.borrow(), web_sys::window()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = canvas_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_md.borrow_mut() {
			s.press(x, y);
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = canvas_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			s.drag(x, y);
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |ev: MouseEvent| {
		let Some((x, y)) = canvas_point(canvas_ref, &ev) else {
			return;
		};
		release_and_publish(&state_mu, x, y, selected, points);
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.leave();
		}
	};

	// touches map onto the same press/drag/release cycle; preventing the
	// default stops the browser from scrolling and emulating mouse events
	let state_ts = state.clone();
	let on_touchstart = move |ev: TouchEvent| {
		ev.prevent_default();
		let Some((x, y)) = touch_point(canvas_ref, &ev, false) else {
			return;
		};
		if let Some(ref mut s) = *state_ts.borrow_mut() {
			s.press(x, y);
		}
	};

	let state_tm = state.clone();
	let on_touchmove = move |ev: TouchEvent| {
		ev.prevent_default();
		let Some((x, y)) = touch_point(canvas_ref, &ev, false) else {
			return;
		};
		if let Some(ref mut s) = *state_tm.borrow_mut() {
			s.drag(x, y);
		}
	};

	let state_te = state.clone();
	let on_touchend = move |ev: TouchEvent| {
		ev.prevent_default();
		let Some((x, y)) = touch_point(canvas_ref, &ev, true) else {
			return;
		};
		release_and_publish(&state_te, x, y, selected, points);
	};

	let state_tc = state.clone();
	let on_touchcancel = move |_: TouchEvent| {
		if let Some(ref mut s) = *state_tc.borrow_mut() {
			s.leave();
		}
	};

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some((x, y)) = canvas_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_wh.borrow_mut() {
			s.zoom(x, y, ev.delta_y());
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="skill-tree-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			on:touchstart=on_touchstart
			on:touchmove=on_touchmove
			on:touchend=on_touchend
			on:touchcancel=on_touchcancel
			style="display: block; cursor: pointer; touch-action: none;"
		/>
	}
}
