//! The session-owned store behind the canvas.

use log::info;

use super::import::import_skill_tree;
use super::seed::SkillTreeSeed;
use super::selection::{ClickOutcome, SelectionController};
use super::types::{SkillEdge, SkillNode};

/// Owns the session's nodes, edges, point pool and selection.
///
/// Clicks are the only way to mutate it.
#[derive(Clone, Debug)]
pub struct SkillTreeStore {
	nodes: Vec<SkillNode>,
	edges: Vec<SkillEdge>,
	points: u32,
	selection: SelectionController,
}

impl SkillTreeStore {
	/// Imports the seed's skills and fills the point pool.
	pub fn from_seed(seed: &SkillTreeSeed) -> Self {
		let (nodes, edges) = import_skill_tree(&seed.skills);
		info!(
			"skill tree ready: {} skills, {} links, {} points",
			nodes.len(),
			edges.len(),
			seed.initial_points
		);
		Self {
			nodes,
			edges,
			points: seed.initial_points,
			selection: SelectionController::new(),
		}
	}

	/// All nodes in authoring order.
	pub fn nodes(&self) -> &[SkillNode] {
		&self.nodes
	}

	/// All resolvable prerequisite edges.
	pub fn edges(&self) -> &[SkillEdge] {
		&self.edges
	}

	/// Looks a node up by id.
	pub fn node(&self, id: &str) -> Option<&SkillNode> {
		self.nodes.iter().find(|n| n.id == id)
	}

	/// Points left in the pool.
	pub fn points(&self) -> u32 {
		self.points
	}

	/// Id of the selected node.
	pub fn selected_id(&self) -> Option<&str> {
		self.selection.active()
	}

	/// A click on a node.
	pub fn click_node(&mut self, id: &str) -> ClickOutcome {
		self.selection.click_node(id, &mut self.nodes, &mut self.points)
	}

	/// A click on empty canvas.
	pub fn click_background(&mut self) -> ClickOutcome {
		self.selection.click_background(&mut self.nodes)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_seed_builds_a_store() {
		let store = SkillTreeStore::from_seed(&SkillTreeSeed::load_default().unwrap());
		assert_eq!(store.nodes().len(), 6);
		assert_eq!(store.edges().len(), 5);
		assert_eq!(store.points(), 10);
		assert_eq!(store.selected_id(), None);
		assert_eq!(store.node("n3").unwrap().data.title, "test3");
	}

	#[test]
	fn clicks_route_through_selection_and_progression() {
		let mut store = SkillTreeStore::from_seed(&SkillTreeSeed::load_default().unwrap());

		assert_eq!(store.click_node("n5"), ClickOutcome::Selected("n5".into()));
		assert!(matches!(store.click_node("n5"), ClickOutcome::Unlocked(..)));
		assert_eq!(store.points(), 9);
		assert_eq!(store.node("n5").unwrap().data.level, 1);

		assert_eq!(store.click_background(), ClickOutcome::Cleared);
		assert_eq!(store.selected_id(), None);
		assert!(!store.node("n5").unwrap().data.selected);
	}
}
