#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app_constants;
mod app_menu;
mod app_runtime;
mod app_types;
mod context_menu;
mod desktop_bridge;
mod desktop_bridge_commands;
mod environment;
mod logging;
mod main_window;
mod menu_actions;
mod menu_handler;
mod shell_locale;
mod system_open;
mod ui_events;
mod window_actions;
mod window_controller;
mod window_host;

use std::{
    path::PathBuf,
    sync::{Mutex, OnceLock},
};

pub(crate) use app_constants::*;
pub(crate) use app_types::{
    AppLogInfo, BridgeSuccess, DebugInfo, DebugLogResult, DevToolsToggleResult, MessageBoxKind,
    MessageBoxOptions, MessageBoxResult, ProcessClock, ProcessMemoryUsage,
};
pub(crate) use environment::{DesktopEnvironment, ShellSettings};

pub(crate) type MainWindowController = window_controller::WindowController<tauri::WebviewWindow>;

static LOG_WRITE_LOCK: Mutex<()> = Mutex::new(());
static LOG_DIR: OnceLock<PathBuf> = OnceLock::new();

fn main() {
    let settings = ShellSettings::detect();
    let _ = LOG_DIR.set(settings.log_dir.clone());
    app_runtime::run(DesktopEnvironment::detect(), settings);
}

pub(crate) fn append_desktop_log(message: &str) {
    append_desktop_log_with_level(logging::LogLevel::Info, message);
}

pub(crate) fn append_startup_log(message: &str) {
    append_desktop_log(&format!("[startup] {message}"));
}

pub(crate) fn append_shutdown_log(message: &str) {
    append_desktop_log(&format!("[shutdown] {message}"));
}

pub(crate) fn append_desktop_error_log(message: &str) {
    append_desktop_log_with_level(logging::LogLevel::Error, message);
}

fn append_desktop_log_with_level(level: logging::LogLevel, message: &str) {
    logging::append_desktop_log(
        level,
        message,
        LOG_DIR.get_or_init(|| ShellSettings::detect().log_dir),
        logging::current_log_date(),
        &LOG_WRITE_LOCK,
    );
}
