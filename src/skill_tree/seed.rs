//! Static skill definitions and the starting point total.

use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use super::import::MAX_GRID_INDEX;
use super::types::{SkillCategory, SkillId};

/// The tree shipped with the app.
pub const DEFAULT_SEED: &str = include_str!("../../assets/skill_tree.json");

/// Designer-authored skill record. Read-only for the whole session.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillDef {
	/// Unique id, also used to address the skill's markdown page.
	pub id: SkillId,
	/// Display name.
	pub name: String,
	/// Presentation category.
	#[serde(rename = "type")]
	pub category: SkillCategory,
	/// Free-form labels, not interpreted.
	#[serde(default)]
	pub tags: Vec<String>,
	/// Layout rank. Row 0 is the bottom of the tree.
	pub level: u32,
	/// Prerequisite skill ids.
	#[serde(rename = "preq", default)]
	pub prerequisites: Vec<SkillId>,
	/// Grid column.
	pub x_pos: i32,
	/// Level cap, at least 1.
	pub max_level: u32,
}

impl SkillDef {
	/// A skill without prerequisites or tags.
	pub fn new(
		id: impl Into<SkillId>,
		name: impl Into<String>,
		category: SkillCategory,
		level: u32,
		x_pos: i32,
		max_level: u32,
	) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			category,
			tags: Vec::new(),
			level,
			prerequisites: Vec::new(),
			x_pos,
			max_level,
		}
	}

	/// Replaces the prerequisite list.
	pub fn requires<I, S>(mut self, prerequisites: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<SkillId>,
	{
		self.prerequisites = prerequisites.into_iter().map(Into::into).collect();
		self
	}
}

/// Everything needed to start a session.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillTreeSeed {
	/// Skill definitions in authoring order.
	pub skills: Vec<SkillDef>,
	/// Size of the shared point pool at startup.
	pub initial_points: u32,
}

/// Reasons a seed document is rejected.
#[derive(Debug, Error)]
pub enum SeedError {
	/// The document is not valid seed JSON.
	#[error("failed to parse skill tree seed: {0}")]
	Parse(#[from] serde_json::Error),
	/// Two skills share an id.
	#[error("duplicate skill id `{0}`")]
	DuplicateId(SkillId),
	/// A skill can never be leveled.
	#[error("skill `{0}` has a max level of 0")]
	ZeroMaxLevel(SkillId),
	/// A rank or column lies too far out to place on the canvas.
	#[error("skill `{0}` is placed outside the grid (limit {MAX_GRID_INDEX})")]
	OffGrid(SkillId),
}

impl SkillTreeSeed {
	/// Parses and validates a seed document. Prerequisite cycles are not checked.
	pub fn from_json(json: &str) -> Result<Self, SeedError> {
		let seed: SkillTreeSeed = serde_json::from_str(json)?;
		seed.validate()?;
		Ok(seed)
	}

	/// The embedded default tree.
	pub fn load_default() -> Result<Self, SeedError> {
		Self::from_json(DEFAULT_SEED)
	}

	fn validate(&self) -> Result<(), SeedError> {
		let mut seen = HashSet::new();
		for skill in &self.skills {
			if !seen.insert(skill.id.as_str()) {
				return Err(SeedError::DuplicateId(skill.id.clone()));
			}
			if skill.max_level == 0 {
				return Err(SeedError::ZeroMaxLevel(skill.id.clone()));
			}
			let limit = MAX_GRID_INDEX.unsigned_abs();
			if skill.level > limit || skill.x_pos.unsigned_abs() > limit {
				return Err(SeedError::OffGrid(skill.id.clone()));
			}
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_seed_loads() {
		let seed = SkillTreeSeed::load_default().unwrap();
		assert_eq!(seed.initial_points, 10);
		assert_eq!(seed.skills.len(), 6);

		let n3 = seed.skills.iter().find(|s| s.id == "n3").unwrap();
		assert_eq!(n3.category, SkillCategory::Sub);
		assert_eq!(n3.prerequisites, vec!["n1".to_string(), "n4".to_string()]);
		assert_eq!(n3.level, 2);
		assert_eq!(n3.x_pos, 1);
	}

	#[test]
	fn tags_and_prerequisites_default_to_empty() {
		let seed = SkillTreeSeed::from_json(
			r#"{"skills":[{"id":"a","name":"A","type":"root","level":0,"xPos":0,"maxLevel":2}],"initialPoints":3}"#,
		)
		.unwrap();
		assert!(seed.skills[0].tags.is_empty());
		assert!(seed.skills[0].prerequisites.is_empty());
	}

	#[test]
	fn duplicate_ids_are_rejected() {
		let err = SkillTreeSeed::from_json(
			r#"{"skills":[
				{"id":"a","name":"A","type":"root","level":0,"xPos":0,"maxLevel":1},
				{"id":"a","name":"B","type":"main","level":1,"xPos":0,"maxLevel":1}
			],"initialPoints":1}"#,
		)
		.unwrap_err();
		assert!(matches!(err, SeedError::DuplicateId(id) if id == "a"));
	}

	#[test]
	fn zero_max_level_is_rejected() {
		let err = SkillTreeSeed::from_json(
			r#"{"skills":[{"id":"a","name":"A","type":"root","level":0,"xPos":0,"maxLevel":0}],"initialPoints":1}"#,
		)
		.unwrap_err();
		assert!(matches!(err, SeedError::ZeroMaxLevel(id) if id == "a"));
	}

	#[test]
	fn ranks_and_columns_must_fit_the_grid() {
		let seed = |level: u64, x_pos: i64| {
			SkillTreeSeed::from_json(&format!(
				r#"{{"skills":[{{"id":"a","name":"A","type":"sub","level":{level},"xPos":{x_pos},"maxLevel":1}}],"initialPoints":1}}"#
			))
		};

		assert!(seed(21_474_836, -21_474_836).is_ok());
		assert!(matches!(seed(21_474_837, 0), Err(SeedError::OffGrid(id)) if id == "a"));
		assert!(matches!(seed(30_000_000, 0), Err(SeedError::OffGrid(_))));
		assert!(matches!(seed(0, 21_474_837), Err(SeedError::OffGrid(_))));
		assert!(matches!(seed(0, -21_474_837), Err(SeedError::OffGrid(_))));
	}

	#[test]
	fn malformed_json_is_a_parse_error() {
		let err = SkillTreeSeed::from_json("{\"skills\": 3}").unwrap_err();
		assert!(matches!(err, SeedError::Parse(_)));
	}
}
