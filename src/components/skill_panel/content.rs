use log::debug;
use pulldown_cmark::{Options, Parser, html};
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

#[derive(Debug, Error)]
pub enum ContentError {
	#[error("no browser window")]
	NoWindow,
	#[error("request failed: {0}")]
	Request(String),
	#[error("server answered HTTP {0}")]
	Status(u16),
	#[error("response body is not text")]
	NotText,
}

impl From<JsValue> for ContentError {
	fn from(value: JsValue) -> Self {
		Self::Request(value.as_string().unwrap_or_else(|| format!("{value:?}")))
	}
}

pub fn markdown_url(id: &str) -> String {
	format!("/markdown/{id}.md")
}

/// A response is only shown if its skill is still the selected one.
pub fn is_current(requested: &str, selected: Option<&str>) -> bool {
	selected == Some(requested)
}

/// Decides what a finished request for `requested` puts in the panel.
///
/// Returns the HTML to show, or `None` when the selection has moved on and
/// the response must be dropped. A failed request shows an empty panel.
pub fn settle_response(
	requested: &str,
	response: Result<String, ContentError>,
	selected: Option<&str>,
) -> Option<String> {
	if !is_current(requested, selected) {
		debug!("dropping stale description for {requested}");
		return None;
	}
	match response {
		Ok(source) => Some(render_markdown(&source)),
		Err(err) => {
			debug!("no description for {requested}: {err}");
			Some(String::new())
		}
	}
}

/// GitHub-flavoured markdown → HTML.
pub fn render_markdown(source: &str) -> String {
	let options = Options::ENABLE_TABLES
		| Options::ENABLE_STRIKETHROUGH
		| Options::ENABLE_TASKLISTS
		| Options::ENABLE_FOOTNOTES;
	let mut out = String::with_capacity(source.len() * 3 / 2);
	html::push_html(&mut out, Parser::new_ext(source, options));
	out
}

pub async fn fetch_markdown(id: &str) -> Result<String, ContentError> {
	let window = web_sys::window().ok_or(ContentError::NoWindow)?;
	let response: Response = JsFuture::from(window.fetch_with_str(&markdown_url(id)))
		.await?
		.dyn_into()?;
	if !response.ok() {
		return Err(ContentError::Status(response.status()));
	}
	JsFuture::from(response.text()?)
		.await?
		.as_string()
		.ok_or(ContentError::NotText)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn url_is_keyed_by_id() {
		assert_eq!(markdown_url("n3"), "/markdown/n3.md");
	}

	#[test]
	fn stale_responses_are_rejected() {
		assert!(is_current("n1", Some("n1")));
		assert!(!is_current("n1", Some("n2")));
		assert!(!is_current("n1", None));
	}

	#[test]
	fn late_response_for_a_previous_selection_is_dropped() {
		let mut panel = String::new();
		let mut selected = Some("n1");
		assert!(is_current("n1", selected));

		// the user moves on to n2 before the n1 request answers
		selected = Some("n2");
		if let Some(html) = settle_response("n2", Ok("# test2".into()), selected) {
			panel = html;
		}
		assert_eq!(panel, "<h1>test2</h1>\n");

		let late = settle_response("n1", Ok("# test1".into()), selected);
		assert_eq!(late, None);
		assert_eq!(panel, "<h1>test2</h1>\n");
	}

	#[test]
	fn failed_request_for_the_current_skill_empties_the_panel() {
		assert_eq!(
			settle_response("n1", Err(ContentError::Status(404)), Some("n1")),
			Some(String::new())
		);
		assert_eq!(settle_response("n1", Err(ContentError::NotText), None), None);
	}

	#[test]
	fn markdown_renders_headings_and_tables() {
		let html = render_markdown("# test1\n\n| a | b |\n| - | - |\n| 1 | 2 |\n\n~~old~~");
		assert!(html.contains("<h1>test1</h1>"));
		assert!(html.contains("<table>"));
		assert!(html.contains("<del>old</del>"));
	}

	#[test]
	fn empty_source_renders_nothing() {
		assert_eq!(render_markdown(""), "");
	}
}
