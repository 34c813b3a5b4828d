use serde_json::Value;
use sysinfo::{ProcessesToUpdate, System};
use tauri::{AppHandle, State};
use tauri_plugin_dialog::{DialogExt, MessageDialogButtons, MessageDialogKind, MessageDialogResult};

use crate::{
    append_desktop_log, context_menu, environment::ShellSettings, logging, system_open,
    AppLogInfo, BridgeSuccess, DebugInfo, DebugLogResult, DevToolsToggleResult,
    MainWindowController, MessageBoxKind, MessageBoxOptions, MessageBoxResult, ProcessClock,
    ProcessMemoryUsage,
};

const DEVELOPMENT_ONLY_REASON: &str =
    "This bridge operation is only available in development mode.";

fn dialog_kind(kind: MessageBoxKind) -> MessageDialogKind {
    match kind {
        MessageBoxKind::Warning => MessageDialogKind::Warning,
        MessageBoxKind::Error => MessageDialogKind::Error,
        MessageBoxKind::None | MessageBoxKind::Info | MessageBoxKind::Question => {
            MessageDialogKind::Info
        }
    }
}

const MAX_MESSAGE_BOX_BUTTONS: usize = 3;

/// Native dialogs offer up to three buttons. More labels are rejected rather
/// than silently dropped.
fn dialog_buttons(buttons: &[String]) -> Result<MessageDialogButtons, String> {
    match buttons {
        [] => Ok(MessageDialogButtons::Ok),
        [only] => Ok(MessageDialogButtons::OkCustom(only.clone())),
        [first, second] => Ok(MessageDialogButtons::OkCancelCustom(
            first.clone(),
            second.clone(),
        )),
        [first, second, third] => Ok(MessageDialogButtons::YesNoCancelCustom(
            first.clone(),
            second.clone(),
            third.clone(),
        )),
        _ => Err(format!(
            "Message box supports at most {MAX_MESSAGE_BOX_BUTTONS} buttons, got {}.",
            buttons.len()
        )),
    }
}

/// Maps the dialog outcome back to the index of the chosen label. Dismissing
/// the dialog picks the last button, which is the cancel slot.
fn message_box_response(buttons: &[String], result: &MessageDialogResult) -> MessageBoxResult {
    let last = buttons.len().saturating_sub(1);
    let response = match result {
        MessageDialogResult::Custom(label) => buttons
            .iter()
            .position(|button| button == label)
            .unwrap_or(last),
        MessageDialogResult::Ok | MessageDialogResult::Yes => 0,
        MessageDialogResult::No => last.min(1),
        MessageDialogResult::Cancel => last,
        #[allow(unreachable_patterns)]
        _ => last,
    };
    MessageBoxResult { response }
}

fn process_memory_usage() -> Option<ProcessMemoryUsage> {
    let pid = sysinfo::get_current_pid().ok()?;
    let mut system = System::new();
    system.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);
    let process = system.process(pid)?;
    Some(ProcessMemoryUsage {
        rss: process.memory(),
        virtual_memory: process.virtual_memory(),
    })
}

/// Console echo of a page log call. The level is printed as the page sent it.
fn format_debug_log_message(timestamp: &str, level: &str, message: &str) -> String {
    format!("[{timestamp}] [{}] {message}", level.trim())
}

#[tauri::command]
pub(crate) fn desktop_bridge_is_desktop_runtime() -> bool {
    true
}

#[tauri::command]
pub(crate) fn desktop_bridge_get_app_version(app_handle: AppHandle) -> String {
    app_handle.package_info().version.to_string()
}

#[tauri::command]
pub(crate) fn desktop_bridge_get_platform(
    controller: State<'_, MainWindowController>,
) -> String {
    controller.environment().platform.as_str().to_string()
}

#[tauri::command]
pub(crate) async fn desktop_bridge_show_message_box(
    app_handle: AppHandle,
    controller: State<'_, MainWindowController>,
    options: MessageBoxOptions,
) -> Result<MessageBoxResult, String> {
    let buttons = dialog_buttons(&options.buttons)?;
    let mut dialog = app_handle
        .dialog()
        .message(options.message.clone())
        .kind(dialog_kind(options.kind))
        .buttons(buttons);
    if let Some(title) = options.title.as_deref() {
        dialog = dialog.title(title);
    }
    if let Some(window) = controller.window() {
        dialog = dialog.parent(&window);
    }

    let result = tauri::async_runtime::spawn_blocking(move || dialog.blocking_show_with_result())
        .await
        .map_err(|error| format!("Message box failed: {error}"))?;
    Ok(message_box_response(&options.buttons, &result))
}

#[tauri::command]
pub(crate) fn desktop_bridge_window_minimize(
    controller: State<'_, MainWindowController>,
) -> Result<(), String> {
    controller.minimize()
}

#[tauri::command]
pub(crate) fn desktop_bridge_window_maximize(
    controller: State<'_, MainWindowController>,
) -> Result<(), String> {
    controller.toggle_maximize()
}

#[tauri::command]
pub(crate) fn desktop_bridge_window_close(
    app_handle: AppHandle,
    controller: State<'_, MainWindowController>,
) {
    controller.close(&app_handle, append_desktop_log);
}

#[tauri::command]
pub(crate) fn desktop_bridge_window_is_maximized(
    controller: State<'_, MainWindowController>,
) -> Result<bool, String> {
    controller.is_maximized()
}

#[tauri::command]
pub(crate) fn desktop_bridge_get_log_info(settings: State<'_, ShellSettings>) -> AppLogInfo {
    logging::log_info(&settings.log_dir, logging::current_log_date())
}

#[tauri::command]
pub(crate) fn desktop_bridge_open_log_folder(settings: State<'_, ShellSettings>) -> BridgeSuccess {
    match system_open::open_folder(&settings.log_dir) {
        Ok(()) => BridgeSuccess::from_flag(true),
        Err(error) => {
            append_desktop_log(&format!("failed to open log folder: {error}"));
            BridgeSuccess::from_flag(false)
        }
    }
}

#[tauri::command]
pub(crate) fn desktop_bridge_debug_info(
    controller: State<'_, MainWindowController>,
    clock: State<'_, ProcessClock>,
) -> Result<DebugInfo, String> {
    let environment = controller.environment();
    if !environment.is_development {
        return Err(DEVELOPMENT_ONLY_REASON.to_string());
    }

    Ok(DebugInfo {
        platform: environment.platform.as_str(),
        version: tauri::VERSION.to_string(),
        is_dev: environment.is_development,
        is_debug: environment.is_debug,
        is_remote_debug: environment.is_remote_debug,
        memory_usage: process_memory_usage(),
        uptime: clock.uptime_secs(),
    })
}

#[tauri::command]
pub(crate) fn desktop_bridge_debug_log(
    controller: State<'_, MainWindowController>,
    level: String,
    message: String,
    data: Option<Value>,
) -> Result<DebugLogResult, String> {
    if !controller.environment().is_development {
        return Err(DEVELOPMENT_ONLY_REASON.to_string());
    }

    let timestamp = logging::current_timestamp();
    let line = format_debug_log_message(&timestamp, &level, &message);
    match data.filter(|value| !value.is_null()) {
        Some(value) => println!("{line} {value}"),
        None => println!("{line}"),
    }

    Ok(DebugLogResult {
        success: true,
        timestamp,
    })
}

#[tauri::command]
pub(crate) fn desktop_bridge_toggle_devtools(
    controller: State<'_, MainWindowController>,
) -> DevToolsToggleResult {
    controller.toggle_devtools()
}

#[tauri::command]
pub(crate) fn desktop_bridge_open_devtools(
    controller: State<'_, MainWindowController>,
) -> BridgeSuccess {
    controller.open_devtools()
}

#[tauri::command]
pub(crate) fn desktop_bridge_close_devtools(
    controller: State<'_, MainWindowController>,
) -> BridgeSuccess {
    controller.close_devtools()
}

#[tauri::command]
pub(crate) fn desktop_bridge_show_dev_context_menu(
    app_handle: AppHandle,
    controller: State<'_, MainWindowController>,
    settings: State<'_, ShellSettings>,
) -> BridgeSuccess {
    if !controller.environment().is_development {
        return BridgeSuccess::from_flag(false);
    }
    let Some(window) = controller.window() else {
        return BridgeSuccess::from_flag(false);
    };

    let result = context_menu::build_dev_context_menu(&app_handle, settings.locale)
        .and_then(|menu| {
            window
                .popup_menu(&menu)
                .map_err(|error| format!("Failed to show context menu: {error}"))
        });
    match result {
        Ok(()) => BridgeSuccess::from_flag(true),
        Err(error) => {
            append_desktop_log(&error);
            BridgeSuccess::from_flag(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn dialog_buttons_cover_up_to_three_labels() {
        assert!(matches!(dialog_buttons(&[]), Ok(MessageDialogButtons::Ok)));
        assert!(matches!(
            dialog_buttons(&labels(&["Got it"])),
            Ok(MessageDialogButtons::OkCustom(label)) if label == "Got it"
        ));
        assert!(matches!(
            dialog_buttons(&labels(&["Yes", "No"])),
            Ok(MessageDialogButtons::OkCancelCustom(ok, cancel)) if ok == "Yes" && cancel == "No"
        ));
        assert!(matches!(
            dialog_buttons(&labels(&["Save", "Discard", "Cancel"])),
            Ok(MessageDialogButtons::YesNoCancelCustom(yes, no, cancel))
                if yes == "Save" && no == "Discard" && cancel == "Cancel"
        ));
    }

    #[test]
    fn dialog_buttons_reject_more_than_three_labels() {
        let error = dialog_buttons(&labels(&["A", "B", "C", "D"])).err();
        assert_eq!(
            error.as_deref(),
            Some("Message box supports at most 3 buttons, got 4.")
        );
    }

    #[test]
    fn three_button_response_maps_back_to_label_index() {
        let three = labels(&["Save", "Discard", "Cancel"]);
        let custom = |label: &str| MessageDialogResult::Custom(label.to_string());

        assert_eq!(message_box_response(&three, &custom("Save")).response, 0);
        assert_eq!(message_box_response(&three, &custom("Discard")).response, 1);
        assert_eq!(message_box_response(&three, &custom("Cancel")).response, 2);
        assert_eq!(message_box_response(&three, &MessageDialogResult::Yes).response, 0);
        assert_eq!(message_box_response(&three, &MessageDialogResult::No).response, 1);
        assert_eq!(message_box_response(&three, &MessageDialogResult::Cancel).response, 2);
    }

    #[test]
    fn two_and_one_button_responses_index_the_chosen_button() {
        let two = labels(&["Yes", "No"]);
        assert_eq!(message_box_response(&two, &MessageDialogResult::Ok).response, 0);
        assert_eq!(message_box_response(&two, &MessageDialogResult::Cancel).response, 1);
        let custom_no = MessageDialogResult::Custom("No".to_string());
        assert_eq!(message_box_response(&two, &custom_no).response, 1);
        assert_eq!(
            message_box_response(&labels(&["OK"]), &MessageDialogResult::Cancel).response,
            0
        );
        assert_eq!(message_box_response(&[], &MessageDialogResult::Ok).response, 0);
    }

    #[test]
    fn dialog_kind_maps_question_and_none_to_info() {
        assert!(matches!(
            dialog_kind(MessageBoxKind::Question),
            MessageDialogKind::Info
        ));
        assert!(matches!(
            dialog_kind(MessageBoxKind::Error),
            MessageDialogKind::Error
        ));
    }

    #[test]
    fn debug_log_message_echoes_the_level_verbatim() {
        assert_eq!(
            format_debug_log_message("2024-03-09T10:00:00.000Z", " warn ", "hi"),
            "[2024-03-09T10:00:00.000Z] [warn] hi"
        );
        assert_eq!(
            format_debug_log_message("2024-03-09T10:00:00.000Z", "success", "saved"),
            "[2024-03-09T10:00:00.000Z] [success] saved"
        );
    }

    #[test]
    fn process_memory_usage_reports_current_process() {
        let usage = process_memory_usage().expect("memory usage for current process");
        assert!(usage.rss > 0);
    }
}
