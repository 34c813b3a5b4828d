use std::path::{Path, PathBuf};

use tauri::{
    image::Image,
    window::{Color, Effect, EffectsBuilder},
    AppHandle, Manager, WebviewUrl, WebviewWindow, WebviewWindowBuilder,
};
use url::Url;

use crate::{
    DesktopEnvironment, BUNDLED_ENTRY_PATH, DEV_SERVER_URL, FALLBACK_ICON_PATH,
    MAIN_WINDOW_BACKGROUND_RGB, MAIN_WINDOW_HEIGHT, MAIN_WINDOW_LABEL, MAIN_WINDOW_MIN_HEIGHT,
    MAIN_WINDOW_MIN_WIDTH, MAIN_WINDOW_TITLE, MAIN_WINDOW_WIDTH, PRIMARY_ICON_PATH,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TitleBarStyle {
    /// Native traffic lights inset over the content, no title text.
    HiddenInset,
    /// No native title bar at all.
    Hidden,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum WindowContent {
    DevServer(Url),
    Bundled(PathBuf),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MainWindowConfig {
    pub(crate) width: f64,
    pub(crate) height: f64,
    pub(crate) min_width: f64,
    pub(crate) min_height: f64,
    pub(crate) decorations: bool,
    pub(crate) resizable: bool,
    pub(crate) minimizable: bool,
    pub(crate) maximizable: bool,
    pub(crate) closable: bool,
    pub(crate) shadow: bool,
    pub(crate) background_rgb: (u8, u8, u8),
    pub(crate) title_bar_style: TitleBarStyle,
    pub(crate) vibrancy: bool,
    pub(crate) content: WindowContent,
}

impl MainWindowConfig {
    pub(crate) fn for_environment(environment: DesktopEnvironment) -> Result<Self, String> {
        let hidden_inset = environment.platform.is_apple();
        let content = if environment.is_development {
            let url = Url::parse(DEV_SERVER_URL)
                .map_err(|error| format!("Invalid dev server URL {DEV_SERVER_URL}: {error}"))?;
            WindowContent::DevServer(url)
        } else {
            WindowContent::Bundled(PathBuf::from(BUNDLED_ENTRY_PATH))
        };

        Ok(Self {
            width: MAIN_WINDOW_WIDTH,
            height: MAIN_WINDOW_HEIGHT,
            min_width: MAIN_WINDOW_MIN_WIDTH,
            min_height: MAIN_WINDOW_MIN_HEIGHT,
            // The inset style keeps native window controls drawn over the page.
            decorations: hidden_inset,
            resizable: true,
            minimizable: true,
            maximizable: true,
            closable: true,
            shadow: true,
            background_rgb: MAIN_WINDOW_BACKGROUND_RGB,
            title_bar_style: if hidden_inset {
                TitleBarStyle::HiddenInset
            } else {
                TitleBarStyle::Hidden
            },
            vibrancy: hidden_inset,
            content,
        })
    }
}

fn icon_search_roots(resource_dir: Option<PathBuf>) -> Vec<PathBuf> {
    let mut roots = Vec::new();
    if let Some(resource_dir) = resource_dir {
        roots.push(resource_dir);
    }
    roots.push(PathBuf::from(env!("CARGO_MANIFEST_DIR")));
    roots
}

/// Looks for the primary icon in every root before trying the fallback.
pub(crate) fn resolve_window_icon_path(roots: &[PathBuf]) -> Option<PathBuf> {
    [PRIMARY_ICON_PATH, FALLBACK_ICON_PATH]
        .iter()
        .flat_map(|relative| roots.iter().map(move |root| root.join(relative)))
        .find(|candidate| candidate.is_file())
}

fn load_window_icon(icon_path: &Path) -> Option<Image<'static>> {
    Image::from_path(icon_path).ok()
}

pub(crate) fn build_main_window(
    app_handle: &AppHandle,
    config: &MainWindowConfig,
    bridge_script: &str,
) -> Result<WebviewWindow, String> {
    let url = match &config.content {
        WindowContent::DevServer(url) => WebviewUrl::External(url.clone()),
        WindowContent::Bundled(path) => WebviewUrl::App(path.clone()),
    };
    let (red, green, blue) = config.background_rgb;

    let builder = WebviewWindowBuilder::new(app_handle, MAIN_WINDOW_LABEL, url)
        .title(MAIN_WINDOW_TITLE)
        .inner_size(config.width, config.height)
        .min_inner_size(config.min_width, config.min_height)
        .decorations(config.decorations)
        .resizable(config.resizable)
        .minimizable(config.minimizable)
        .maximizable(config.maximizable)
        .closable(config.closable)
        .shadow(config.shadow)
        .background_color(Color(red, green, blue, 255))
        .initialization_script(bridge_script)
        .visible(false);

    #[cfg(target_os = "macos")]
    let builder = if config.title_bar_style == TitleBarStyle::HiddenInset {
        builder
            .title_bar_style(tauri::TitleBarStyle::Overlay)
            .hidden_title(true)
    } else {
        builder
    };

    let builder = if config.vibrancy {
        builder.effects(
            EffectsBuilder::new()
                .effect(Effect::UnderWindowBackground)
                .build(),
        )
    } else {
        builder
    };

    let window = builder
        .build()
        .map_err(|error| format!("Failed to create main window: {error}"))?;

    let roots = icon_search_roots(app_handle.path().resource_dir().ok());
    if let Some(icon) = resolve_window_icon_path(&roots).and_then(|path| load_window_icon(&path)) {
        let _ = window.set_icon(icon);
    }

    Ok(window)
}
