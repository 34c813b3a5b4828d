use tauri::{webview::PageLoadEvent, AppHandle, Manager, RunEvent, WindowEvent};

use crate::{
    append_desktop_error_log, append_desktop_log, append_shutdown_log, append_startup_log,
    environment::ShellSettings, logging, menu_handler, window_actions,
    window_controller::MainWindowEvent, DesktopEnvironment, MainWindowController, ProcessClock,
    DEBUG_PORT, MAIN_WINDOW_LABEL, REMOTE_DEBUG_PORT,
};

pub(crate) fn environment_report_lines(environment: DesktopEnvironment) -> Vec<String> {
    let mut lines = vec![
        "environment diagnostics:".to_string(),
        format!("  - mode: {}", environment.mode_label()),
        format!("  - platform: {}", environment.platform.as_str()),
        format!("  - debug: {}", environment.is_debug),
        format!("  - remote debug: {}", environment.is_remote_debug),
    ];

    if environment.is_development {
        lines.push("development mode enabled".to_string());
        if environment.is_debug {
            lines.push(format!("host debugging requested (port {DEBUG_PORT})"));
        }
        if environment.is_remote_debug {
            lines.push(format!(
                "remote debugging requested, DevTools at http://localhost:{REMOTE_DEBUG_PORT}"
            ));
        }
    } else {
        lines.push("production mode enabled, debug features disabled".to_string());
    }
    lines
}

fn main_window_event(event: &WindowEvent) -> Option<MainWindowEvent> {
    match event {
        WindowEvent::CloseRequested { .. } => Some(MainWindowEvent::CloseRequested),
        WindowEvent::Destroyed => Some(MainWindowEvent::Destroyed),
        _ => None,
    }
}

fn fail_startup(app_handle: &AppHandle, message: &str) {
    eprintln!("startup failed: {message}");
    append_desktop_error_log(&format!("startup failed: {message}"));
    app_handle.exit(1);
}

pub(crate) fn run(environment: DesktopEnvironment, settings: ShellSettings) {
    for line in environment_report_lines(environment) {
        println!("{line}");
    }
    append_startup_log(&format!(
        "application starting - mode: {}, platform: {}",
        environment.mode_label(),
        environment.platform.as_str()
    ));
    append_startup_log(&format!(
        "log file: {}",
        logging::resolve_log_file_path(&settings.log_dir, logging::current_log_date()).display()
    ));

    tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
            window_actions::focus_main_window(app, append_desktop_log);
        }))
        .plugin(tauri_plugin_dialog::init())
        .manage(MainWindowController::new(environment))
        .manage(settings)
        .manage(ProcessClock::start())
        .invoke_handler(tauri::generate_handler![
            crate::desktop_bridge_commands::desktop_bridge_is_desktop_runtime,
            crate::desktop_bridge_commands::desktop_bridge_get_app_version,
            crate::desktop_bridge_commands::desktop_bridge_get_platform,
            crate::desktop_bridge_commands::desktop_bridge_show_message_box,
            crate::desktop_bridge_commands::desktop_bridge_window_minimize,
            crate::desktop_bridge_commands::desktop_bridge_window_maximize,
            crate::desktop_bridge_commands::desktop_bridge_window_close,
            crate::desktop_bridge_commands::desktop_bridge_window_is_maximized,
            crate::desktop_bridge_commands::desktop_bridge_get_log_info,
            crate::desktop_bridge_commands::desktop_bridge_open_log_folder,
            crate::desktop_bridge_commands::desktop_bridge_debug_info,
            crate::desktop_bridge_commands::desktop_bridge_debug_log,
            crate::desktop_bridge_commands::desktop_bridge_toggle_devtools,
            crate::desktop_bridge_commands::desktop_bridge_open_devtools,
            crate::desktop_bridge_commands::desktop_bridge_close_devtools,
            crate::desktop_bridge_commands::desktop_bridge_show_dev_context_menu,
        ])
        .on_menu_event(|app_handle, event| {
            menu_handler::handle_menu_event(app_handle, event.id().as_ref());
        })
        .on_window_event(|window, event| {
            if window.label() != MAIN_WINDOW_LABEL {
                return;
            }

            if let Some(event) = main_window_event(event) {
                let app_handle = window.app_handle();
                let controller = app_handle.state::<MainWindowController>();
                controller.handle_window_event(event, app_handle, append_desktop_log);
            }
        })
        .on_page_load(|webview, payload| {
            if webview.label() != MAIN_WINDOW_LABEL {
                return;
            }

            if let PageLoadEvent::Finished = payload.event() {
                let app_handle = webview.app_handle();
                if let Err(error) =
                    window_actions::reveal_main_window_when_ready(app_handle, append_desktop_log)
                {
                    fail_startup(app_handle, &error);
                }
            }
        })
        .setup(|app| {
            let app_handle = app.handle().clone();
            if let Err(error) =
                window_actions::create_main_window_and_menu(&app_handle, append_desktop_log)
            {
                fail_startup(&app_handle, &error);
            }
            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|app_handle, event| match event {
            RunEvent::ExitRequested { code: None, .. } => {
                append_shutdown_log("all windows closed, exiting");
            }
            RunEvent::Exit => append_shutdown_log("process exiting"),
            #[cfg(target_os = "macos")]
            RunEvent::Reopen { .. } => {
                window_actions::recreate_main_window_if_missing(app_handle, append_desktop_log);
            }
            _ => {}
        });
}
