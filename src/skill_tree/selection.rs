//! Single-node selection; a second click on the selected node levels it up.

use log::{debug, info};

use super::progression::{UnlockRejection, Unlocked, attempt_unlock};
use super::types::{SkillId, SkillNode};

/// What a click ended up doing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
	/// The clicked node became the active one.
	Selected(SkillId),
	/// The active node was clicked again and leveled up.
	Unlocked(SkillId, Unlocked),
	/// The active node was clicked again but could not be leveled.
	UnlockRejected(SkillId, UnlockRejection),
	/// A background click dropped the selection.
	Cleared,
	/// Nothing changed.
	Ignored,
}

/// Tracks the one active node and keeps every node's `selected` flag in step with it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionController {
	active: Option<SkillId>,
}

fn set_selected(nodes: &mut [SkillNode], id: &str, selected: bool) {
	if let Some(node) = nodes.iter_mut().find(|n| n.id == id) {
		node.data.selected = selected;
	}
}

impl SelectionController {
	/// Starts with nothing selected.
	pub fn new() -> Self {
		Self::default()
	}

	/// Id of the active node.
	pub fn active(&self) -> Option<&str> {
		self.active.as_deref()
	}

	/// Handles a click on node `id`. Ids that are not in `nodes` are ignored.
	pub fn click_node(
		&mut self,
		id: &str,
		nodes: &mut [SkillNode],
		points: &mut u32,
	) -> ClickOutcome {
		if !nodes.iter().any(|n| n.id == id) {
			return ClickOutcome::Ignored;
		}

		if self.active.as_deref() == Some(id) {
			return match attempt_unlock(id, nodes, points) {
				Ok(unlocked) => {
					info!(
						"unlocked {id} to level {} ({} points left)",
						unlocked.level, unlocked.points_left
					);
					ClickOutcome::Unlocked(id.to_string(), unlocked)
				}
				Err(reason) => {
					debug!("cannot unlock {id}: {reason}");
					ClickOutcome::UnlockRejected(id.to_string(), reason)
				}
			};
		}

		if let Some(previous) = self.active.take() {
			set_selected(nodes, &previous, false);
		}
		set_selected(nodes, id, true);
		self.active = Some(id.to_string());
		ClickOutcome::Selected(id.to_string())
	}

	/// Handles a click on empty canvas.
	pub fn click_background(&mut self, nodes: &mut [SkillNode]) -> ClickOutcome {
		match self.active.take() {
			Some(previous) => {
				set_selected(nodes, &previous, false);
				ClickOutcome::Cleared
			}
			None => ClickOutcome::Ignored,
		}
	}
}
