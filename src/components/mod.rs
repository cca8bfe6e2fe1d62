pub mod skill_canvas;
pub mod skill_panel;
