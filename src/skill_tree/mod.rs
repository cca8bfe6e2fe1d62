//! Skill graph import, point-gated progression and click selection.
//!
//! Nothing in here touches the DOM; the canvas component drives a
//! [`SkillTreeStore`] and redraws from it.

pub mod import;
pub mod progression;
pub mod seed;
pub mod selection;
pub mod store;
pub mod types;

pub use import::{classify_edge, import_skill_tree};
pub use progression::{UnlockRejection, Unlocked, attempt_unlock, check_unlock};
pub use seed::{SeedError, SkillDef, SkillTreeSeed};
pub use selection::{ClickOutcome, SelectionController};
pub use store::SkillTreeStore;
pub use types::{
	ConnectorCounts, EdgeStyle, NodeData, Position, Side, SkillCategory, SkillEdge, SkillId,
	SkillNode,
};
