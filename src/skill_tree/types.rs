//! Runtime node, edge and connector types.

use serde::Deserialize;

/// Identifier shared by skill definitions, nodes and edge endpoints.
pub type SkillId = String;

/// Presentation category of a skill. The importer and progression engine
/// never branch on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
	/// Entry point of a branch.
	Root,
	/// Major skill.
	Main,
	/// Minor skill hanging off a main skill.
	Sub,
}

/// One of the four sides of a node's bounding box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
	/// Upper edge.
	Top,
	/// Right edge.
	Right,
	/// Lower edge.
	Bottom,
	/// Left edge.
	Left,
}

impl Side {
	/// All sides in clockwise order starting at the top.
	pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];
}

/// Number of connectors attached to each side of a node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConnectorCounts {
	/// Connectors on the top side.
	pub top: u32,
	/// Connectors on the right side.
	pub right: u32,
	/// Connectors on the bottom side.
	pub bottom: u32,
	/// Connectors on the left side.
	pub left: u32,
}

impl ConnectorCounts {
	/// Count on a single side.
	pub fn get(&self, side: Side) -> u32 {
		match side {
			Side::Top => self.top,
			Side::Right => self.right,
			Side::Bottom => self.bottom,
			Side::Left => self.left,
		}
	}

	/// Adds one connector to `side`.
	pub fn bump(&mut self, side: Side) {
		match side {
			Side::Top => self.top += 1,
			Side::Right => self.right += 1,
			Side::Bottom => self.bottom += 1,
			Side::Left => self.left += 1,
		}
	}

	/// Sum over all four sides.
	pub fn total(&self) -> u32 {
		self.top + self.right + self.bottom + self.left
	}
}

/// Grid-derived world position of a node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
	/// Horizontal coordinate, grows to the right.
	pub x: i32,
	/// Vertical coordinate, grows downward; higher ranks sit at smaller y.
	pub y: i32,
}

/// Mutable per-node record exposed to the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeData {
	/// Outbound connectors per side.
	pub connectors_out: ConnectorCounts,
	/// Inbound connectors per side.
	pub connectors_in: ConnectorCounts,
	/// Set on the first successful unlock and never cleared.
	pub unlocked: bool,
	/// Mirrors the selection controller's active node.
	pub selected: bool,
	/// Display name.
	pub title: String,
	/// Skills that must be unlocked before this one can be leveled.
	pub prerequisites: Vec<SkillId>,
	/// Current level, always within `0..=max_level`.
	pub level: u32,
	/// Level cap.
	pub max_level: u32,
}

/// A skill as it lives on the canvas for the rest of the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillNode {
	/// Copied from the definition.
	pub id: SkillId,
	/// Derived from grid column and rank.
	pub position: Position,
	/// Copied from the definition.
	pub category: SkillCategory,
	/// Mutable state.
	pub data: NodeData,
}

/// Line style hint for the renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EdgeStyle {
	/// Smooth curve.
	#[default]
	Default,
	/// Orthogonal steps.
	Step,
}

/// A prerequisite link `source -> target`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillEdge {
	/// `"{source}-{target}"`.
	pub id: String,
	/// The prerequisite.
	pub source: SkillId,
	/// The skill that requires it.
	pub target: SkillId,
	/// Rendering style.
	pub style: EdgeStyle,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn connector_counts_stack_per_side() {
		let mut counts = ConnectorCounts::default();
		counts.bump(Side::Bottom);
		counts.bump(Side::Bottom);
		counts.bump(Side::Left);

		assert_eq!(counts.get(Side::Bottom), 2);
		assert_eq!(counts.get(Side::Left), 1);
		assert_eq!(counts.get(Side::Top), 0);
		assert_eq!(counts.total(), 3);
	}

	#[test]
	fn category_uses_lowercase_names() {
		let category: SkillCategory = serde_json::from_str("\"sub\"").unwrap();
		assert_eq!(category, SkillCategory::Sub);
	}
}
