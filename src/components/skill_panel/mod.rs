mod component;
mod content;

pub use component::SkillInfoPanel;
