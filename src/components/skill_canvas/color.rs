pub const LOCKED_COLOR: u32 = 0x232a42;
pub const BASE_COLOR: u32 = 0x38446e;
pub const MAXED_COLOR: u32 = 0xc9ced1;

pub fn hex(rgb: u32) -> String {
	format!("#{:06x}", rgb & 0xff_ffff)
}

/// Per-channel `a * amount + b * (1 - amount)`, truncated.
pub fn mix_colors(a: u32, b: u32, amount: f64) -> u32 {
	let channel = |shift: u32| {
		let (ca, cb) = (((a >> shift) & 0xff) as f64, ((b >> shift) & 0xff) as f64);
		((ca * amount + cb * (1.0 - amount)) as u32 & 0xff) << shift
	};
	channel(16) | channel(8) | channel(0)
}

/// Fill colour for a node: dark while untouched, then brightening with level.
pub fn node_color(level: u32, max_level: u32, selected: bool) -> String {
	if !selected && level == 0 {
		return hex(LOCKED_COLOR);
	}
	let amount = if max_level == 0 {
		1.0
	} else {
		level as f64 / max_level as f64
	};
	hex(mix_colors(MAXED_COLOR, BASE_COLOR, amount))
}
