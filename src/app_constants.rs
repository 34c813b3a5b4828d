pub(crate) const MAIN_WINDOW_LABEL: &str = "main";
pub(crate) const MAIN_WINDOW_TITLE: &str = "Vue3 Desktop App";
pub(crate) const MAIN_WINDOW_WIDTH: f64 = 1200.0;
pub(crate) const MAIN_WINDOW_HEIGHT: f64 = 800.0;
pub(crate) const MAIN_WINDOW_MIN_WIDTH: f64 = 800.0;
pub(crate) const MAIN_WINDOW_MIN_HEIGHT: f64 = 600.0;
pub(crate) const MAIN_WINDOW_BACKGROUND_RGB: (u8, u8, u8) = (0x66, 0x7e, 0xea);

pub(crate) const DEV_SERVER_URL: &str = "http://localhost:5173";
pub(crate) const BUNDLED_ENTRY_PATH: &str = "index.html";

pub(crate) const PRIMARY_ICON_PATH: &str = "icons/icon.png";
pub(crate) const FALLBACK_ICON_PATH: &str = "icons/128x128.png";

pub(crate) const DEVELOPMENT_ENV: &str = "NODE_ENV";
pub(crate) const LOG_DIR_ENV: &str = "DESKTOP_SHELL_LOG_DIR";
pub(crate) const LOG_DIR_NAME: &str = "Vue3-Desktop-App";
pub(crate) const LOG_FILE_PREFIX: &str = "app-";

pub(crate) const DEFAULT_SHELL_LOCALE: &str = "zh-CN";

pub(crate) const MENU_NEW_EVENT: &str = "menu:new";
pub(crate) const MENU_OPEN_EVENT: &str = "menu:open";
pub(crate) const MENU_ABOUT_EVENT: &str = "menu:about";

pub(crate) const DEBUG_PORT: u16 = 9229;
pub(crate) const REMOTE_DEBUG_PORT: u16 = 9222;
