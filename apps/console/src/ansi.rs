// Escape sequences for the prompt and reply colors. 38;5;N picks from
// the 256-color palette.
pub const RESET: &str = "\x1b[0m";
pub const FAINT: &str = "\x1b[2m";
pub const GREEN: &str = "\x1b[38;5;46m";
pub const BLUE: &str = "\x1b[38;5;12m";
