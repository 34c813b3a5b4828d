use tauri::{
    menu::{Menu, MenuItem, PredefinedMenuItem},
    AppHandle, Wry,
};

use crate::{
    menu_actions::{MENU_VIEW_FORCE_RELOAD, MENU_VIEW_RELOAD, MENU_VIEW_TOGGLE_DEVTOOLS},
    shell_locale::{self, ShellTexts},
};

/// Entries of the development right-click menu, in display order. `None`
/// marks a separator.
pub(crate) fn dev_context_menu_entries(
    texts: &ShellTexts,
) -> Vec<Option<(&'static str, &'static str)>> {
    vec![
        Some((MENU_VIEW_TOGGLE_DEVTOOLS, texts.menu_devtools)),
        None,
        Some((MENU_VIEW_RELOAD, texts.menu_reload)),
        Some((MENU_VIEW_FORCE_RELOAD, texts.menu_force_reload)),
    ]
}

/// Selections land in the application menu handler, since they reuse the
/// View menu ids.
pub(crate) fn build_dev_context_menu(
    app_handle: &AppHandle,
    locale: &str,
) -> Result<Menu<Wry>, String> {
    let texts = shell_locale::shell_texts_for_locale(locale);

    let menu =
        Menu::new(app_handle).map_err(|error| format!("Failed to create context menu: {error}"))?;
    for entry in dev_context_menu_entries(&texts) {
        match entry {
            Some((id, label)) => {
                let item = MenuItem::with_id(app_handle, id, label, true, None::<&str>)
                    .map_err(|error| format!("Failed to create context menu item {id}: {error}"))?;
                menu.append(&item)
                    .map_err(|error| format!("Failed to append context menu item {id}: {error}"))?;
            }
            None => {
                let separator = PredefinedMenuItem::separator(app_handle)
                    .map_err(|error| format!("Failed to create context menu separator: {error}"))?;
                menu.append(&separator)
                    .map_err(|error| format!("Failed to append context menu separator: {error}"))?;
            }
        }
    }
    Ok(menu)
}
