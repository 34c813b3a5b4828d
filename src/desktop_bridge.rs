use serde::Serialize;

use crate::{environment::DesktopEnvironment, ui_events::UiEvent};

const DESKTOP_BRIDGE_SCRIPT_TEMPLATE: &str = include_str!("desktop_bridge.js");
const DESKTOP_BRIDGE_CONFIG_PLACEHOLDER: &str = "__DESKTOP_BRIDGE_CONFIG__";

#[derive(Debug, Serialize)]
struct MenuChannels {
    new: &'static str,
    open: &'static str,
    about: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DesktopBridgeConfig {
    is_development: bool,
    platform: &'static str,
    menu_channels: MenuChannels,
}

/// Builds the initialization script that exposes `window.desktopAPI` to the
/// page. Dev-tools calls resolve to their unavailable defaults in the page
/// itself when the environment is not development.
pub(crate) fn desktop_bridge_script(environment: DesktopEnvironment) -> String {
    let config = DesktopBridgeConfig {
        is_development: environment.is_development,
        platform: environment.platform.as_str(),
        menu_channels: MenuChannels {
            new: UiEvent::MenuNew.channel(),
            open: UiEvent::MenuOpen.channel(),
            about: UiEvent::MenuAbout.channel(),
        },
    };
    let serialized = serde_json::to_string(&config).unwrap_or_else(|_| {
        r#"{"isDevelopment":false,"platform":"unknown","menuChannels":{"new":"menu:new","open":"menu:open","about":"menu:about"}}"#
            .to_string()
    });
    DESKTOP_BRIDGE_SCRIPT_TEMPLATE.replace(DESKTOP_BRIDGE_CONFIG_PLACEHOLDER, &serialized)
}
