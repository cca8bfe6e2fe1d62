use leptos::prelude::*;

use crate::components::skill_canvas::SkillTreeCanvas;
use crate::components::skill_panel::SkillInfoPanel;
use crate::skill_tree::SkillTreeSeed;

/// Skill tree page: canvas, point counter and description panel.
#[component]
pub fn Home() -> impl IntoView {
	let seed = SkillTreeSeed::load_default();

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			{seed.map(|seed| view! { <SkillTreeView seed=seed /> })}
		</ErrorBoundary>
	}
}

#[component]
fn SkillTreeView(seed: SkillTreeSeed) -> impl IntoView {
	let selected = RwSignal::new(None::<String>);
	let points = RwSignal::new(seed.initial_points);

	view! {
		<div class="fullscreen-graph">
			<SkillTreeCanvas seed=seed selected=selected points=points fullscreen=true />
			<h1 class="points-total">{move || points.get()}</h1>
			<div class="graph-overlay">
				<p class="subtitle">"Click a skill to select it, click it again to spend a point."</p>
			</div>
			<SkillInfoPanel selected=selected />
		</div>
	}
}
