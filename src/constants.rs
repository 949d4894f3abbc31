// DOM hooks and page timings used by the browser glue.
// Scene tuning lives in `core::constants`; this file only names the parts
// of the host page the crate reaches into.

// Canvas the WebGPU surface is created on
pub const CANVAS_ID: &str = "three-canvas";

// Theme toggles (desktop nav and mobile menu)
pub const THEME_TOGGLE_IDS: [&str; 2] = ["themeToggle", "mobileThemeToggle"];
pub const THEME_ICON_SELECTOR: &str = ".theme-icon";
pub const LIGHT_MODE_CLASS: &str = "light-mode";

// Terminal widget
pub const TERMINAL_ID: &str = "terminal";
pub const TERMINAL_INPUT_ID: &str = "terminalInput";
pub const TERMINAL_OUTPUT_ID: &str = "terminalOutput";
pub const TERMINAL_MINIMIZE_ID: &str = "terminalMinimize";
pub const TERMINAL_PROMPT: &str = "$";
pub const TERMINAL_GLYPH_OPEN: &str = "−";
pub const TERMINAL_GLYPH_MINIMIZED: &str = ">_";
pub const TYPE_INTERVAL_MS: i32 = 10;

// Loading screen
pub const LOADING_SCREEN_ID: &str = "loadingScreen";
pub const LOADING_PROGRESS_ID: &str = "loadingProgress";
pub const LOADING_TICK_MS: i32 = 100;
pub const LOADING_HIDE_DELAY_MS: i32 = 300;

// Page chrome
pub const NAV_SELECTOR: &str = ".nav";
pub const NAV_HIDDEN_CLASS: &str = "nav-hidden";
pub const BACK_TO_TOP_ID: &str = "backToTop";
pub const VISIBLE_CLASS: &str = "visible";
pub const ANCHOR_LINK_SELECTOR: &str = "a[href^=\"#\"]";
pub const REVEAL_SECTION_SELECTOR: &str = "section:not(.hero)";
pub const PROJECT_DETAILS_CLASS: &str = "project-details";
pub const WORK_ITEM_SELECTOR: &str = ".work-item";
pub const SECTION_REVEAL_THRESHOLD: f64 = 0.1;
pub const WORK_ITEM_THRESHOLD: f64 = 0.2;
pub const WORK_ITEM_ROOT_MARGIN: &str = "0px 0px -50px 0px";

// Mobile menu
pub const MOBILE_MENU_SELECTOR: &str = ".mobile-menu";
pub const MOBILE_MENU_BUTTON_SELECTOR: &str = ".mobile-menu-btn";
pub const MOBILE_MENU_CLOSE_SELECTOR: &str = ".mobile-menu-close";
pub const MOBILE_NAV_LINK_SELECTOR: &str = ".mobile-nav-link";
pub const ACTIVE_CLASS: &str = "active";

// Canvas backing store never exceeds this device pixel ratio
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;

// Interval between FPS summaries in the debug log
pub const FPS_LOG_INTERVAL_SECS: f32 = 5.0;
