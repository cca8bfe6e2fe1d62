//! Skill definitions → positioned nodes, prerequisite edges and per-side connector counts.

use std::collections::HashMap;

use log::debug;

use super::seed::SkillDef;
use super::types::{ConnectorCounts, EdgeStyle, NodeData, Position, Side, SkillEdge, SkillNode};

/// World units between grid columns and between ranks.
pub const GRID_SPACING: i32 = 100;

/// Largest column or rank magnitude whose world coordinate fits in an `i32`.
pub const MAX_GRID_INDEX: i32 = i32::MAX / GRID_SPACING;

/// Which side an edge leaves its source from and enters its target on.
///
/// Vertical separation wins over horizontal; on an exact tie the edge leaves
/// to the left.
pub fn classify_edge(source: Position, target: Position) -> (Side, Side) {
	if source.y > target.y {
		(Side::Top, Side::Bottom)
	} else if source.y < target.y {
		(Side::Bottom, Side::Top)
	} else if source.x < target.x {
		(Side::Right, Side::Left)
	} else {
		(Side::Left, Side::Right)
	}
}

/// World position of a skill from its grid column and rank.
///
/// Coordinates saturate past [`MAX_GRID_INDEX`]; validated seeds never get
/// that far.
pub fn grid_position(skill: &SkillDef) -> Position {
	let rank = i32::try_from(skill.level).unwrap_or(i32::MAX);
	Position {
		x: skill.x_pos.saturating_mul(GRID_SPACING),
		y: rank.saturating_mul(GRID_SPACING).saturating_neg(),
	}
}

fn node_from_def(skill: &SkillDef) -> SkillNode {
	SkillNode {
		id: skill.id.clone(),
		position: grid_position(skill),
		category: skill.category,
		data: NodeData {
			connectors_out: ConnectorCounts::default(),
			connectors_in: ConnectorCounts::default(),
			unlocked: false,
			selected: false,
			title: skill.name.clone(),
			prerequisites: skill.prerequisites.clone(),
			level: 0,
			max_level: skill.max_level,
		},
	}
}

/// Builds the session's node and edge sets.
///
/// Edges whose source or target is not a known skill are dropped and add no
/// connectors.
pub fn import_skill_tree(skills: &[SkillDef]) -> (Vec<SkillNode>, Vec<SkillEdge>) {
	let mut nodes: Vec<SkillNode> = skills.iter().map(node_from_def).collect();

	let mut index: HashMap<&str, usize> = HashMap::with_capacity(skills.len());
	for (i, skill) in skills.iter().enumerate() {
		index.entry(skill.id.as_str()).or_insert(i);
	}

	let mut edges = Vec::new();
	for skill in skills {
		for prereq in &skill.prerequisites {
			let source = index.get(prereq.as_str());
			let target = index.get(skill.id.as_str());
			let (Some(&src), Some(&tgt)) = (source, target) else {
				continue;
			};

			let (out_side, in_side) = classify_edge(nodes[src].position, nodes[tgt].position);
			nodes[src].data.connectors_out.bump(out_side);
			nodes[tgt].data.connectors_in.bump(in_side);

			edges.push(SkillEdge {
				id: format!("{}-{}", prereq, skill.id),
				source: prereq.clone(),
				target: skill.id.clone(),
				style: EdgeStyle::Default,
			});
		}
	}

	debug!(
		"imported {} skills into {} nodes and {} edges",
		skills.len(),
		nodes.len(),
		edges.len()
	);
	(nodes, edges)
}
