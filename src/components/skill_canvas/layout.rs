use std::collections::HashMap;

use crate::skill_tree::{Side, SkillCategory, SkillEdge, SkillId, SkillNode, classify_edge};

/// Curve control distance along a side's normal.
pub const CURVE_PULL: f64 = 40.0;

/// Half the width (and height) of a node's box in world units.
pub fn half_extent(category: SkillCategory) -> f64 {
	match category {
		SkillCategory::Root => 28.0,
		SkillCategory::Main => 22.0,
		SkillCategory::Sub => 16.0,
	}
}

pub fn center(node: &SkillNode) -> (f64, f64) {
	(node.position.x as f64, node.position.y as f64)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandleKind {
	Inbound,
	Outbound,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
	pub x: f64,
	pub y: f64,
	pub side: Side,
}

impl Anchor {
	/// Unit vector pointing out of the node.
	pub fn normal(&self) -> (f64, f64) {
		match self.side {
			Side::Top => (0.0, -1.0),
			Side::Right => (1.0, 0.0),
			Side::Bottom => (0.0, 1.0),
			Side::Left => (-1.0, 0.0),
		}
	}

	/// Point `CURVE_PULL` away from the node, used as a bezier control point.
	pub fn control(&self) -> (f64, f64) {
		let (nx, ny) = self.normal();
		(self.x + nx * CURVE_PULL, self.y + ny * CURVE_PULL)
	}
}

/// Slot `slot` of `slots` spread evenly along one side of the node box.
pub fn anchor_on_side(node: &SkillNode, side: Side, slot: u32, slots: u32) -> Anchor {
	let (cx, cy) = center(node);
	let half = half_extent(node.category);
	let slots = slots.max(slot + 1);
	let offset = -half + 2.0 * half * (slot as f64 + 1.0) / (slots as f64 + 1.0);
	let (x, y) = match side {
		Side::Top => (cx + offset, cy - half),
		Side::Bottom => (cx + offset, cy + half),
		Side::Left => (cx - half, cy + offset),
		Side::Right => (cx + half, cy + offset),
	};
	Anchor { x, y, side }
}

fn side_slots(node: &SkillNode, side: Side) -> u32 {
	node.data.connectors_in.get(side) + node.data.connectors_out.get(side)
}

/// Every connector handle on a node. Inbound handles take the first slots on
/// a side, outbound handles follow.
pub fn handle_anchors(node: &SkillNode) -> Vec<(Anchor, HandleKind)> {
	let mut handles = Vec::new();
	for side in Side::ALL {
		let inbound = node.data.connectors_in.get(side);
		let slots = side_slots(node, side);
		for slot in 0..slots {
			let kind = if slot < inbound {
				HandleKind::Inbound
			} else {
				HandleKind::Outbound
			};
			handles.push((anchor_on_side(node, side, slot, slots), kind));
		}
	}
	handles
}

/// Where one edge leaves its source and enters its target.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeRoute {
	pub source: SkillId,
	pub target: SkillId,
	pub from: Anchor,
	pub to: Anchor,
}

/// Assigns every edge its own handle on each endpoint, in edge order.
pub fn connector_routes(nodes: &[SkillNode], edges: &[SkillEdge]) -> Vec<EdgeRoute> {
	let mut by_id: HashMap<&str, &SkillNode> = HashMap::with_capacity(nodes.len());
	for node in nodes {
		by_id.entry(node.id.as_str()).or_insert(node);
	}

	let mut taken_out: HashMap<(&str, Side), u32> = HashMap::new();
	let mut taken_in: HashMap<(&str, Side), u32> = HashMap::new();
	let mut routes = Vec::with_capacity(edges.len());

	for edge in edges {
		let source = by_id.get(edge.source.as_str());
		let target = by_id.get(edge.target.as_str());
		let (Some(&src), Some(&tgt)) = (source, target) else {
			continue;
		};
		let (out_side, in_side) = classify_edge(src.position, tgt.position);

		let out_next = taken_out.entry((src.id.as_str(), out_side)).or_insert(0);
		let out_slot = src.data.connectors_in.get(out_side) + *out_next;
		*out_next += 1;

		let in_next = taken_in.entry((tgt.id.as_str(), in_side)).or_insert(0);
		let in_slot = *in_next;
		*in_next += 1;

		routes.push(EdgeRoute {
			source: src.id.clone(),
			target: tgt.id.clone(),
			from: anchor_on_side(src, out_side, out_slot, side_slots(src, out_side)),
			to: anchor_on_side(tgt, in_side, in_slot, side_slots(tgt, in_side)),
		});
	}
	routes
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::skill_tree::{SkillDef, import_skill_tree};

	fn two_parents() -> (Vec<SkillNode>, Vec<SkillEdge>) {
		import_skill_tree(&[
			SkillDef::new("left", "L", SkillCategory::Main, 0, 0, 1),
			SkillDef::new("right", "R", SkillCategory::Main, 0, 1, 1),
			SkillDef::new("child", "C", SkillCategory::Sub, 1, 1, 1).requires(["left", "right"]),
		])
	}

	#[test]
	fn shared_side_gets_distinct_anchors() {
		let (nodes, edges) = two_parents();
		let routes = connector_routes(&nodes, &edges);
		assert_eq!(routes.len(), 2);

		let (a, b) = (routes[0].to, routes[1].to);
		assert_eq!(a.side, Side::Bottom);
		assert_eq!(b.side, Side::Bottom);
		assert_ne!(a.x, b.x);
		assert_eq!(a.y, b.y);

		// child sits at (100, -100) with a half extent of 16
		assert_eq!(a.y, -100.0 + 16.0);
		assert!(a.x > 100.0 - 16.0 && a.x < 100.0 + 16.0);
		assert!(b.x > 100.0 - 16.0 && b.x < 100.0 + 16.0);
	}

	#[test]
	fn routes_leave_from_the_classified_side() {
		let (nodes, edges) = two_parents();
		let routes = connector_routes(&nodes, &edges);
		for route in &routes {
			assert_eq!(route.from.side, Side::Top);
			assert_eq!(route.from.y, -22.0);
		}
	}

	#[test]
	fn handles_match_connector_counts() {
		let (nodes, _) = two_parents();
		let child = nodes.iter().find(|n| n.id == "child").unwrap();
		let handles = handle_anchors(child);
		assert_eq!(handles.len(), 2);
		assert!(
			handles
				.iter()
				.all(|(a, kind)| a.side == Side::Bottom && *kind == HandleKind::Inbound)
		);
	}

	#[test]
	fn single_slot_sits_mid_side() {
		let (nodes, _) = two_parents();
		let anchor = anchor_on_side(&nodes[0], Side::Right, 0, 1);
		assert_eq!(anchor.x, 22.0);
		assert_eq!(anchor.y, 0.0);
		assert_eq!(anchor.control(), (22.0 + CURVE_PULL, 0.0));
	}
}
