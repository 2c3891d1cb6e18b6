pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");

/// Environment variable naming a JSON file of panel option overrides.
pub const CONFIG_ENV: &str = "OFFCANVAS_CONFIG";

pub const CONTAINER_ID: &str = "page";
pub const MENU_TOGGLE_ID: &str = "menu-toggle";
pub const LOG_CAPACITY: usize = 8;
