//! Point-gated leveling.

use std::fmt;

use super::types::SkillNode;

/// Why an unlock attempt did nothing. Never shown to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnlockRejection {
	/// At least one prerequisite is missing or still locked.
	PrerequisitesLocked,
	/// No node has the requested id.
	UnknownSkill,
	/// The skill is already at its level cap.
	AtMaxLevel,
	/// The point pool is empty.
	NoPoints,
}

impl fmt::Display for UnlockRejection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let reason = match self {
			Self::PrerequisitesLocked => "prerequisites are locked",
			Self::UnknownSkill => "unknown skill",
			Self::AtMaxLevel => "already at max level",
			Self::NoPoints => "no points left",
		};
		f.write_str(reason)
	}
}

/// Result of a successful unlock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Unlocked {
	/// Level the skill reached.
	pub level: u32,
	/// Points remaining in the pool.
	pub points_left: u32,
}

/// Prerequisites count as met when no listed id names a node that is still
/// locked. Ids without a node are skipped and the prerequisite's level is
/// not consulted.
fn prerequisites_met(target: &SkillNode, nodes: &[SkillNode]) -> bool {
	target
		.data
		.prerequisites
		.iter()
		.all(|prereq| nodes.iter().all(|n| n.id != *prereq || n.data.unlocked))
}

/// Runs every unlock precondition without mutating anything and returns the
/// target's index on success.
pub fn check_unlock(
	target_id: &str,
	nodes: &[SkillNode],
	points: u32,
) -> Result<usize, UnlockRejection> {
	let idx = nodes
		.iter()
		.position(|n| n.id == target_id)
		.ok_or(UnlockRejection::UnknownSkill)?;
	let target = &nodes[idx];

	if !prerequisites_met(target, nodes) {
		return Err(UnlockRejection::PrerequisitesLocked);
	}
	if target.data.level >= target.data.max_level {
		return Err(UnlockRejection::AtMaxLevel);
	}
	if points < 1 {
		return Err(UnlockRejection::NoPoints);
	}
	Ok(idx)
}

/// Spends one point to raise `target_id` by one level and mark it unlocked.
///
/// On rejection nothing is touched.
pub fn attempt_unlock(
	target_id: &str,
	nodes: &mut [SkillNode],
	points: &mut u32,
) -> Result<Unlocked, UnlockRejection> {
	let idx = check_unlock(target_id, nodes, *points)?;

	let data = &mut nodes[idx].data;
	data.unlocked = true;
	data.level += 1;
	*points -= 1;

	Ok(Unlocked {
		level: data.level,
		points_left: *points,
	})
}
