//! Application-level configuration constants.

// Simulation
pub const TOTAL_ITEMS: u64 = 5_000_000_000;
pub const ITEMS_PER_CYCLE: u32 = 3;
pub const TICK_INTERVAL_MS: u32 = 200;
pub const MAX_LOG_LINES: usize = 100;

// Window
pub const WINDOW_TITLE: &str = "Processing Billions of Data";
pub const WINDOW_WIDTH_PX: u32 = 600;
pub const WINDOW_HEIGHT_PX: u32 = 500;
pub const PROGRESS_BAR_WIDTH_PX: u32 = 500;

// Text
pub const HEADER_TEXT: &str = "Simulating Big Data Processing...";
pub const COMPLETION_NOTICE: &str = "✅ Processing complete!";

// Terminal look
pub const TERMINAL_BACKGROUND: &str = "black";
pub const TERMINAL_FOREGROUND: &str = "lime";
pub const TERMINAL_ROWS: u32 = 20;
pub const TERMINAL_COLUMNS: u32 = 70;
