pub const MENU_FILE_NEW: &str = "menu_file_new";
pub const MENU_FILE_OPEN: &str = "menu_file_open";
pub const MENU_FILE_QUIT: &str = "menu_file_quit";
pub const MENU_EDIT_UNDO: &str = "menu_edit_undo";
pub const MENU_EDIT_REDO: &str = "menu_edit_redo";
pub const MENU_VIEW_RELOAD: &str = "menu_view_reload";
pub const MENU_VIEW_FORCE_RELOAD: &str = "menu_view_force_reload";
pub const MENU_VIEW_TOGGLE_DEVTOOLS: &str = "menu_view_toggle_devtools";
pub const MENU_VIEW_ACTUAL_SIZE: &str = "menu_view_actual_size";
pub const MENU_VIEW_ZOOM_IN: &str = "menu_view_zoom_in";
pub const MENU_VIEW_ZOOM_OUT: &str = "menu_view_zoom_out";
pub const MENU_VIEW_TOGGLE_FULLSCREEN: &str = "menu_view_toggle_fullscreen";
pub const MENU_WINDOW_MINIMIZE: &str = "menu_window_minimize";
pub const MENU_WINDOW_CLOSE: &str = "menu_window_close";
pub const MENU_HELP_ABOUT: &str = "menu_help_about";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    New,
    Open,
    Quit,
    Undo,
    Redo,
    Reload,
    ForceReload,
    ToggleDevTools,
    ActualSize,
    ZoomIn,
    ZoomOut,
    ToggleFullscreen,
    Minimize,
    CloseWindow,
    About,
}

impl MenuAction {
    /// Actions that only exist while running in development mode.
    pub fn is_development_only(&self) -> bool {
        matches!(self, Self::Reload | Self::ForceReload | Self::ToggleDevTools)
    }
}

pub fn action_from_menu_id(menu_id: &str) -> Option<MenuAction> {
    match menu_id {
        MENU_FILE_NEW => Some(MenuAction::New),
        MENU_FILE_OPEN => Some(MenuAction::Open),
        MENU_FILE_QUIT => Some(MenuAction::Quit),
        MENU_EDIT_UNDO => Some(MenuAction::Undo),
        MENU_EDIT_REDO => Some(MenuAction::Redo),
        MENU_VIEW_RELOAD => Some(MenuAction::Reload),
        MENU_VIEW_FORCE_RELOAD => Some(MenuAction::ForceReload),
        MENU_VIEW_TOGGLE_DEVTOOLS => Some(MenuAction::ToggleDevTools),
        MENU_VIEW_ACTUAL_SIZE => Some(MenuAction::ActualSize),
        MENU_VIEW_ZOOM_IN => Some(MenuAction::ZoomIn),
        MENU_VIEW_ZOOM_OUT => Some(MenuAction::ZoomOut),
        MENU_VIEW_TOGGLE_FULLSCREEN => Some(MenuAction::ToggleFullscreen),
        MENU_WINDOW_MINIMIZE => Some(MenuAction::Minimize),
        MENU_WINDOW_CLOSE => Some(MenuAction::CloseWindow),
        MENU_HELP_ABOUT => Some(MenuAction::About),
        _ => None,
    }
}
