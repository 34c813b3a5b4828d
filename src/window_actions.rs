use tauri::{AppHandle, Manager};

use crate::{
    app_menu, desktop_bridge, environment::ShellSettings, main_window,
    main_window::MainWindowConfig, MainWindowController,
};

/// Builds the main window and hands it to the controller. Any failure here
/// is fatal to startup.
pub fn create_main_window<F>(app_handle: &AppHandle, log: F) -> Result<(), String>
where
    F: Fn(&str),
{
    let controller = app_handle
        .try_state::<MainWindowController>()
        .ok_or_else(|| "Main window controller is not initialized.".to_string())?;
    if controller.has_window() {
        log("create_main_window skipped: main window already exists");
        return Ok(());
    }

    let environment = controller.environment();
    let config = MainWindowConfig::for_environment(environment)?;
    let bridge_script = desktop_bridge::desktop_bridge_script(environment);
    let window = main_window::build_main_window(app_handle, &config, &bridge_script)?;
    controller.attach(window)?;

    log(&format!(
        "main window created: {}x{}, title bar {:?}, content {:?}",
        config.width, config.height, config.title_bar_style, config.content
    ));
    Ok(())
}

/// First window creation: the window, then the application menu.
pub fn create_main_window_and_menu<F>(app_handle: &AppHandle, log: F) -> Result<(), String>
where
    F: Fn(&str) + Copy,
{
    create_main_window(app_handle, log)?;

    let environment = app_handle.state::<MainWindowController>().environment();
    let locale = app_handle.state::<ShellSettings>().locale;
    if let Err(error) = app_menu::setup_application_menu(app_handle, environment, locale) {
        log(&format!("failed to install application menu: {error}"));
    }
    Ok(())
}

/// Reveals the window once the page finished loading, and opens dev tools
/// on the first load in development.
pub fn reveal_main_window_when_ready<F>(app_handle: &AppHandle, log: F) -> Result<(), String>
where
    F: Fn(&str),
{
    let Some(controller) = app_handle.try_state::<MainWindowController>() else {
        return Ok(());
    };
    if controller.reveal_once()? {
        log("main window shown");
    }
    if controller.auto_open_devtools_once() {
        log("page ready, dev tools opened");
    }
    Ok(())
}

/// Activation with no window left recreates it. Under the close-terminates
/// policy the process is gone before this can trigger.
#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
pub fn recreate_main_window_if_missing<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    let Some(controller) = app_handle.try_state::<MainWindowController>() else {
        return;
    };
    if controller.has_window() {
        return;
    }
    log("activate received with no main window, recreating");
    if let Err(error) = create_main_window(app_handle, &log) {
        log(&format!("failed to recreate main window: {error}"));
    }
}

pub fn focus_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    let Some(controller) = app_handle.try_state::<MainWindowController>() else {
        return;
    };
    if let Err(error) = controller.focus() {
        log(&format!("failed to focus main window: {error}"));
    }
}
