use tauri::{
    menu::{IsMenuItem, Menu, MenuItem, PredefinedMenuItem, Submenu},
    AppHandle, Wry,
};

use crate::{
    environment::DesktopEnvironment,
    menu_actions,
    shell_locale::{self, ShellTexts},
    MAIN_WINDOW_TITLE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NativeRole {
    Undo,
    Redo,
    Cut,
    Copy,
    Paste,
    Minimize,
    Fullscreen,
    Hide,
    HideOthers,
    ShowAll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuEntry {
    Action {
        id: &'static str,
        label: &'static str,
        accelerator: Option<&'static str>,
    },
    Native {
        role: NativeRole,
        label: &'static str,
    },
    Separator,
}

impl MenuEntry {
    fn action(id: &'static str, label: &'static str, accelerator: Option<&'static str>) -> Self {
        Self::Action {
            id,
            label,
            accelerator,
        }
    }

    fn native(role: NativeRole, label: &'static str) -> Self {
        Self::Native { role, label }
    }

    /// Native roles only work everywhere on macOS; other platforms get a
    /// routed action that the menu handler performs itself.
    fn native_on_apple(
        apple: bool,
        role: NativeRole,
        id: &'static str,
        label: &'static str,
        accelerator: Option<&'static str>,
    ) -> Self {
        if apple {
            Self::native(role, label)
        } else {
            Self::action(id, label, accelerator)
        }
    }

    #[cfg(test)]
    pub(crate) fn menu_action(&self) -> Option<menu_actions::MenuAction> {
        match self {
            Self::Action { id, .. } => menu_actions::action_from_menu_id(id),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MenuGroup {
    pub(crate) label: &'static str,
    pub(crate) entries: Vec<MenuEntry>,
}

/// Describes the application menu for the given environment. The native
/// menu is built from this once, after the main window exists.
pub(crate) fn application_menu_template(
    environment: DesktopEnvironment,
    texts: &ShellTexts,
) -> Vec<MenuGroup> {
    let apple = environment.platform.is_apple();
    let mut groups = Vec::new();

    // macOS always treats the first submenu as the application menu.
    if apple {
        groups.push(MenuGroup {
            label: MAIN_WINDOW_TITLE,
            entries: vec![
                MenuEntry::native(NativeRole::Hide, texts.menu_hide),
                MenuEntry::native(NativeRole::HideOthers, texts.menu_hide_others),
                MenuEntry::native(NativeRole::ShowAll, texts.menu_show_all),
            ],
        });
    }

    groups.push(MenuGroup {
        label: texts.menu_file,
        entries: vec![
            MenuEntry::action(
                menu_actions::MENU_FILE_NEW,
                texts.menu_new,
                Some("CmdOrCtrl+N"),
            ),
            MenuEntry::action(
                menu_actions::MENU_FILE_OPEN,
                texts.menu_open,
                Some("CmdOrCtrl+O"),
            ),
            MenuEntry::Separator,
            MenuEntry::action(
                menu_actions::MENU_FILE_QUIT,
                texts.menu_quit,
                Some(if apple {
                    "Cmd+Q"
                } else {
                    "Ctrl+Q"
                }),
            ),
        ],
    });

    groups.push(MenuGroup {
        label: texts.menu_edit,
        entries: vec![
            // The page keeps its own undo/redo key bindings.
            MenuEntry::native_on_apple(
                apple,
                NativeRole::Undo,
                menu_actions::MENU_EDIT_UNDO,
                texts.menu_undo,
                None,
            ),
            MenuEntry::native_on_apple(
                apple,
                NativeRole::Redo,
                menu_actions::MENU_EDIT_REDO,
                texts.menu_redo,
                None,
            ),
            MenuEntry::Separator,
            MenuEntry::native(NativeRole::Cut, texts.menu_cut),
            MenuEntry::native(NativeRole::Copy, texts.menu_copy),
            MenuEntry::native(NativeRole::Paste, texts.menu_paste),
        ],
    });

    let mut view_entries = Vec::new();
    if environment.is_development {
        // Keyboard shortcuts for these live in the injected bridge script.
        view_entries.extend([
            MenuEntry::action(menu_actions::MENU_VIEW_RELOAD, texts.menu_reload, None),
            MenuEntry::action(
                menu_actions::MENU_VIEW_FORCE_RELOAD,
                texts.menu_force_reload,
                None,
            ),
            MenuEntry::action(
                menu_actions::MENU_VIEW_TOGGLE_DEVTOOLS,
                texts.menu_devtools,
                None,
            ),
            MenuEntry::Separator,
        ]);
    }
    view_entries.extend([
        MenuEntry::action(
            menu_actions::MENU_VIEW_ACTUAL_SIZE,
            texts.menu_actual_size,
            Some("CmdOrCtrl+0"),
        ),
        MenuEntry::action(
            menu_actions::MENU_VIEW_ZOOM_IN,
            texts.menu_zoom_in,
            Some("CmdOrCtrl+="),
        ),
        MenuEntry::action(
            menu_actions::MENU_VIEW_ZOOM_OUT,
            texts.menu_zoom_out,
            Some("CmdOrCtrl+-"),
        ),
        MenuEntry::Separator,
        MenuEntry::native_on_apple(
            apple,
            NativeRole::Fullscreen,
            menu_actions::MENU_VIEW_TOGGLE_FULLSCREEN,
            texts.menu_fullscreen,
            Some("F11"),
        ),
    ]);
    groups.push(MenuGroup {
        label: texts.menu_view,
        entries: view_entries,
    });

    groups.push(MenuGroup {
        label: texts.menu_window,
        entries: vec![
            MenuEntry::native_on_apple(
                apple,
                NativeRole::Minimize,
                menu_actions::MENU_WINDOW_MINIMIZE,
                texts.menu_minimize,
                Some("CmdOrCtrl+M"),
            ),
            MenuEntry::action(
                menu_actions::MENU_WINDOW_CLOSE,
                texts.menu_close,
                Some("CmdOrCtrl+W"),
            ),
        ],
    });

    groups.push(MenuGroup {
        label: texts.menu_help,
        entries: vec![MenuEntry::action(
            menu_actions::MENU_HELP_ABOUT,
            texts.menu_about,
            None,
        )],
    });

    groups
}

fn build_native_item(
    app_handle: &AppHandle,
    role: NativeRole,
    label: &str,
) -> tauri::Result<PredefinedMenuItem<Wry>> {
    let text = Some(label);
    match role {
        NativeRole::Undo => PredefinedMenuItem::undo(app_handle, text),
        NativeRole::Redo => PredefinedMenuItem::redo(app_handle, text),
        NativeRole::Cut => PredefinedMenuItem::cut(app_handle, text),
        NativeRole::Copy => PredefinedMenuItem::copy(app_handle, text),
        NativeRole::Paste => PredefinedMenuItem::paste(app_handle, text),
        NativeRole::Minimize => PredefinedMenuItem::minimize(app_handle, text),
        NativeRole::Fullscreen => PredefinedMenuItem::fullscreen(app_handle, text),
        NativeRole::Hide => PredefinedMenuItem::hide(app_handle, text),
        NativeRole::HideOthers => PredefinedMenuItem::hide_others(app_handle, text),
        NativeRole::ShowAll => PredefinedMenuItem::show_all(app_handle, text),
    }
}

fn build_entry(
    app_handle: &AppHandle,
    entry: &MenuEntry,
) -> Result<Box<dyn IsMenuItem<Wry>>, String> {
    let item: Box<dyn IsMenuItem<Wry>> = match *entry {
        MenuEntry::Action {
            id,
            label,
            accelerator,
        } => Box::new(
            MenuItem::with_id(app_handle, id, label, true, accelerator)
                .map_err(|error| format!("Failed to create menu item {id}: {error}"))?,
        ),
        MenuEntry::Native { role, label } => Box::new(
            build_native_item(app_handle, role, label)
                .map_err(|error| format!("Failed to create {role:?} menu item: {error}"))?,
        ),
        MenuEntry::Separator => Box::new(
            PredefinedMenuItem::separator(app_handle)
                .map_err(|error| format!("Failed to create menu separator: {error}"))?,
        ),
    };
    Ok(item)
}

pub(crate) fn build_menu_from_template(
    app_handle: &AppHandle,
    groups: &[MenuGroup],
) -> Result<Menu<Wry>, String> {
    let menu = Menu::new(app_handle).map_err(|error| format!("Failed to create menu: {error}"))?;
    for group in groups {
        let items = group
            .entries
            .iter()
            .map(|entry| build_entry(app_handle, entry))
            .collect::<Result<Vec<_>, _>>()?;
        let item_refs: Vec<&dyn IsMenuItem<Wry>> = items.iter().map(|item| item.as_ref()).collect();
        let submenu = Submenu::with_items(app_handle, group.label, true, &item_refs)
            .map_err(|error| format!("Failed to build {} menu: {}", group.label, error))?;
        menu.append(&submenu)
            .map_err(|error| format!("Failed to append {} menu: {}", group.label, error))?;
    }
    Ok(menu)
}

pub fn setup_application_menu(
    app_handle: &AppHandle,
    environment: DesktopEnvironment,
    locale: &str,
) -> Result<(), String> {
    let texts = shell_locale::shell_texts_for_locale(locale);
    let template = application_menu_template(environment, &texts);
    let menu = build_menu_from_template(app_handle, &template)?;
    app_handle
        .set_menu(menu)
        .map_err(|error| format!("Failed to install application menu: {error}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{environment::Platform, menu_actions::MenuAction};

    fn environment(is_development: bool, platform: Platform) -> DesktopEnvironment {
        DesktopEnvironment {
            is_development,
            is_debug: false,
            is_remote_debug: false,
            platform,
        }
    }

    fn view_actions(groups: &[MenuGroup], texts: &ShellTexts) -> Vec<MenuAction> {
        groups
            .iter()
            .find(|group| group.label == texts.menu_view)
            .expect("view menu")
            .entries
            .iter()
            .filter_map(MenuEntry::menu_action)
            .collect()
    }

    #[test]
    fn production_view_menu_has_no_reload_or_devtools() {
        let texts = shell_locale::shell_texts_for_locale("en-US");
        let groups = application_menu_template(environment(false, Platform::Windows), &texts);
        let actions = view_actions(&groups, &texts);

        assert!(actions.iter().all(|action| !action.is_development_only()));
        assert_eq!(
            actions,
            vec![
                MenuAction::ActualSize,
                MenuAction::ZoomIn,
                MenuAction::ZoomOut,
                MenuAction::ToggleFullscreen
            ]
        );
    }

    #[test]
    fn development_view_menu_starts_with_reload_and_devtools() {
        let texts = shell_locale::shell_texts_for_locale("en-US");
        let groups = application_menu_template(environment(true, Platform::Linux), &texts);
        let actions = view_actions(&groups, &texts);

        assert_eq!(
            &actions[..3],
            &[
                MenuAction::Reload,
                MenuAction::ForceReload,
                MenuAction::ToggleDevTools
            ]
        );
    }

    #[test]
    fn non_apple_template_has_file_edit_view_window_help() {
        let texts = shell_locale::shell_texts_for_locale("en-US");
        let groups = application_menu_template(environment(false, Platform::Linux), &texts);
        let labels: Vec<&str> = groups.iter().map(|group| group.label).collect();
        assert_eq!(labels, vec!["File", "Edit", "View", "Window", "Help"]);
    }

    #[test]
    fn apple_template_prepends_application_menu() {
        let texts = shell_locale::shell_texts_for_locale("zh-CN");
        let groups = application_menu_template(environment(false, Platform::MacOs), &texts);
        assert_eq!(groups[0].label, MAIN_WINDOW_TITLE);
        assert_eq!(groups[1].label, "文件");
        assert_eq!(groups.len(), 6);
    }

    #[test]
    fn non_apple_templates_route_fullscreen_minimize_and_history() {
        let texts = shell_locale::shell_texts_for_locale("en-US");
        for platform in [Platform::Linux, Platform::Windows] {
            let groups = application_menu_template(environment(false, platform), &texts);
            let actions: Vec<MenuAction> = groups
                .iter()
                .flat_map(|group| group.entries.iter())
                .filter_map(MenuEntry::menu_action)
                .collect();

            for expected in [
                MenuAction::ToggleFullscreen,
                MenuAction::Minimize,
                MenuAction::Undo,
                MenuAction::Redo,
            ] {
                assert!(actions.contains(&expected), "{platform:?} lacks {expected:?}");
            }
            assert!(!groups.iter().flat_map(|group| group.entries.iter()).any(|entry| {
                matches!(
                    entry,
                    MenuEntry::Native {
                        role: NativeRole::Fullscreen
                            | NativeRole::Minimize
                            | NativeRole::Undo
                            | NativeRole::Redo,
                        ..
                    }
                )
            }));
        }
    }

    #[test]
    fn apple_template_keeps_native_fullscreen_and_minimize() {
        let texts = shell_locale::shell_texts_for_locale("en-US");
        let groups = application_menu_template(environment(false, Platform::MacOs), &texts);
        let roles: Vec<NativeRole> = groups
            .iter()
            .flat_map(|group| group.entries.iter())
            .filter_map(|entry| match entry {
                MenuEntry::Native { role, .. } => Some(*role),
                _ => None,
            })
            .collect();

        assert!(roles.contains(&NativeRole::Fullscreen));
        assert!(roles.contains(&NativeRole::Minimize));
        assert!(roles.contains(&NativeRole::Undo));
    }

    #[test]
    fn quit_and_close_are_routed_actions() {
        let texts = shell_locale::shell_texts_for_locale("en-US");
        let groups = application_menu_template(environment(false, Platform::Linux), &texts);
        let actions: Vec<MenuAction> = groups
            .iter()
            .flat_map(|group| group.entries.iter())
            .filter_map(MenuEntry::menu_action)
            .collect();

        assert!(actions.contains(&MenuAction::Quit));
        assert!(actions.contains(&MenuAction::CloseWindow));
        assert!(actions.contains(&MenuAction::New));
        assert!(actions.contains(&MenuAction::Open));
        assert!(actions.contains(&MenuAction::About));
    }
}
