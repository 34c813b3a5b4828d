use tauri::{AppHandle, Runtime, WebviewWindow};

/// Toolkit operations the window controller needs from the native window.
pub(crate) trait WindowHost: Clone {
    fn minimize(&self) -> Result<(), String>;
    fn maximize(&self) -> Result<(), String>;
    fn unmaximize(&self) -> Result<(), String>;
    fn is_maximized(&self) -> Result<bool, String>;
    fn is_fullscreen(&self) -> Result<bool, String>;
    fn set_fullscreen(&self, fullscreen: bool) -> Result<(), String>;
    fn show(&self) -> Result<(), String>;
    fn focus(&self) -> Result<(), String>;
    fn close(&self) -> Result<(), String>;
    fn reload(&self, ignore_cache: bool) -> Result<(), String>;
    fn set_zoom(&self, factor: f64) -> Result<(), String>;
    /// Runs a `document.execCommand` editing command in the page.
    fn exec_edit_command(&self, command: &str) -> Result<(), String>;
    fn open_devtools(&self);
    fn close_devtools(&self);
    fn is_devtools_open(&self) -> bool;
}

/// Terminates the process.
pub(crate) trait ExitHook {
    fn exit(&self, code: i32);
}

impl<R: Runtime> ExitHook for AppHandle<R> {
    fn exit(&self, code: i32) {
        AppHandle::exit(self, code);
    }
}

impl<R: Runtime> WindowHost for WebviewWindow<R> {
    fn minimize(&self) -> Result<(), String> {
        WebviewWindow::minimize(self).map_err(|error| format!("Failed to minimize window: {error}"))
    }

    fn maximize(&self) -> Result<(), String> {
        WebviewWindow::maximize(self).map_err(|error| format!("Failed to maximize window: {error}"))
    }

    fn unmaximize(&self) -> Result<(), String> {
        WebviewWindow::unmaximize(self)
            .map_err(|error| format!("Failed to restore window: {error}"))
    }

    fn is_maximized(&self) -> Result<bool, String> {
        WebviewWindow::is_maximized(self)
            .map_err(|error| format!("Failed to read window maximized state: {error}"))
    }

    fn is_fullscreen(&self) -> Result<bool, String> {
        WebviewWindow::is_fullscreen(self)
            .map_err(|error| format!("Failed to read window fullscreen state: {error}"))
    }

    fn set_fullscreen(&self, fullscreen: bool) -> Result<(), String> {
        WebviewWindow::set_fullscreen(self, fullscreen)
            .map_err(|error| format!("Failed to set window fullscreen: {error}"))
    }

    fn show(&self) -> Result<(), String> {
        WebviewWindow::show(self).map_err(|error| format!("Failed to show window: {error}"))
    }

    fn focus(&self) -> Result<(), String> {
        WebviewWindow::set_focus(self).map_err(|error| format!("Failed to focus window: {error}"))
    }

    fn close(&self) -> Result<(), String> {
        WebviewWindow::close(self).map_err(|error| format!("Failed to close window: {error}"))
    }

    fn reload(&self, ignore_cache: bool) -> Result<(), String> {
        // wry exposes no cache bypass; a hard reload re-navigates to the current URL.
        let script = if ignore_cache {
            "window.location.replace(window.location.href);"
        } else {
            "window.location.reload();"
        };
        self.eval(script)
            .map_err(|error| format!("Failed to reload window: {error}"))
    }

    fn set_zoom(&self, factor: f64) -> Result<(), String> {
        WebviewWindow::set_zoom(self, factor)
            .map_err(|error| format!("Failed to set window zoom: {error}"))
    }

    fn exec_edit_command(&self, command: &str) -> Result<(), String> {
        let command = serde_json::to_string(command)
            .map_err(|error| format!("Invalid edit command {command}: {error}"))?;
        self.eval(&format!("document.execCommand({command});"))
            .map_err(|error| format!("Failed to run edit command {command}: {error}"))
    }

    fn open_devtools(&self) {
        WebviewWindow::open_devtools(self);
    }

    fn close_devtools(&self) {
        WebviewWindow::close_devtools(self);
    }

    fn is_devtools_open(&self) -> bool {
        WebviewWindow::is_devtools_open(self)
    }
}
