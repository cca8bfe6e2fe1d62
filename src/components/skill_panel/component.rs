use leptos::prelude::*;
use leptos::task::spawn_local;

use super::content::{fetch_markdown, settle_response};

/// Side panel with the selected skill's markdown page. Hidden when nothing is selected.
#[component]
pub fn SkillInfoPanel(#[prop(into)] selected: Signal<Option<String>>) -> impl IntoView {
	let (html, set_html) = signal(String::new());

	Effect::new(move |_| {
		let Some(id) = selected.get() else {
			return;
		};
		spawn_local(async move {
			let response = fetch_markdown(&id).await;
			// the panel may have unmounted while the request was in flight
			let current = selected.try_get_untracked().flatten();
			if let Some(rendered) = settle_response(&id, response, current.as_deref()) {
				let _ = set_html.try_set(rendered);
			}
		});
	});

	move || {
		selected.get().map(|_| {
			view! {
				<div
					class="skill-panel open theme-dark markdown-preview-view"
					inner_html=move || html.get()
				/>
			}
		})
	}
}
