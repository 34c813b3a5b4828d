use tauri::{AppHandle, Manager};

use crate::{
    append_desktop_log,
    menu_actions::{self, MenuAction},
    ui_events::{UiEvent, UiEventSink},
    window_controller::{EditCommand, WindowController, ZoomChange},
    window_host::{ExitHook, WindowHost},
    MainWindowController,
};

fn ui_event_for_action(action: MenuAction) -> Option<UiEvent> {
    match action {
        MenuAction::New => Some(UiEvent::MenuNew),
        MenuAction::Open => Some(UiEvent::MenuOpen),
        MenuAction::About => Some(UiEvent::MenuAbout),
        _ => None,
    }
}

/// Runs one menu selection. Failures are logged and dropped; menu input
/// never takes the process down except through the quit/close paths.
pub(crate) fn dispatch_menu_action<W, S, E, F>(
    action: MenuAction,
    controller: &WindowController<W>,
    sink: &S,
    exit: &E,
    log: F,
) where
    W: WindowHost,
    S: UiEventSink,
    E: ExitHook,
    F: Fn(&str) + Copy,
{
    if let Some(event) = ui_event_for_action(action) {
        if !controller.has_window() {
            log(&format!(
                "menu event {} dropped: main window not available",
                event.channel()
            ));
            return;
        }
        if let Err(error) = sink.emit_ui_event(event) {
            log(&error);
        }
        return;
    }

    if action.is_development_only() && !controller.environment().is_development {
        log(&format!("menu action {action:?} ignored outside development mode"));
        return;
    }

    let result = match action {
        MenuAction::Quit => {
            log("quit requested from menu, exiting process");
            if controller.has_window() {
                controller.close(exit, log);
            } else {
                exit.exit(0);
            }
            Ok(())
        }
        MenuAction::CloseWindow => {
            controller.close(exit, log);
            Ok(())
        }
        MenuAction::Undo => controller.edit(EditCommand::Undo),
        MenuAction::Redo => controller.edit(EditCommand::Redo),
        MenuAction::ToggleFullscreen => controller.toggle_fullscreen(),
        MenuAction::Minimize => controller.minimize(),
        MenuAction::Reload => controller.reload(false),
        MenuAction::ForceReload => controller.reload(true),
        MenuAction::ToggleDevTools => {
            controller.toggle_devtools();
            Ok(())
        }
        MenuAction::ActualSize => controller.zoom(ZoomChange::Reset).map(|_| ()),
        MenuAction::ZoomIn => controller.zoom(ZoomChange::In).map(|_| ()),
        MenuAction::ZoomOut => controller.zoom(ZoomChange::Out).map(|_| ()),
        MenuAction::New | MenuAction::Open | MenuAction::About => Ok(()),
    };

    if let Err(error) = result {
        log(&format!("menu action {action:?} failed: {error}"));
    }
}

pub fn handle_menu_event(app_handle: &AppHandle, menu_id: &str) {
    let Some(action) = menu_actions::action_from_menu_id(menu_id) else {
        return;
    };
    let Some(controller) = app_handle.try_state::<MainWindowController>() else {
        append_desktop_log("menu event ignored: window controller not initialized");
        return;
    };
    dispatch_menu_action(
        action,
        controller.inner(),
        app_handle,
        app_handle,
        append_desktop_log,
    );
}
