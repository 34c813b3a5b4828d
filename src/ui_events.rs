use tauri::{AppHandle, Emitter};

use crate::{MAIN_WINDOW_LABEL, MENU_ABOUT_EVENT, MENU_NEW_EVENT, MENU_OPEN_EVENT};

/// Host-to-UI notifications. The UI subscribes through the injected bridge,
/// which hands back an unsubscribe handle per listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UiEvent {
    MenuNew,
    MenuOpen,
    MenuAbout,
}

impl UiEvent {
    #[cfg(test)]
    pub(crate) const ALL: [UiEvent; 3] = [Self::MenuNew, Self::MenuOpen, Self::MenuAbout];

    pub(crate) fn channel(&self) -> &'static str {
        match self {
            Self::MenuNew => MENU_NEW_EVENT,
            Self::MenuOpen => MENU_OPEN_EVENT,
            Self::MenuAbout => MENU_ABOUT_EVENT,
        }
    }
}

pub(crate) trait UiEventSink {
    fn emit_ui_event(&self, event: UiEvent) -> Result<(), String>;
}

impl UiEventSink for AppHandle {
    fn emit_ui_event(&self, event: UiEvent) -> Result<(), String> {
        self.emit_to(MAIN_WINDOW_LABEL, event.channel(), ())
            .map_err(|error| format!("Failed to emit {}: {}", event.channel(), error))
    }
}
