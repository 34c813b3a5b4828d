use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex,
};

use crate::{
    window_host::{ExitHook, WindowHost},
    BridgeSuccess, DesktopEnvironment, DevToolsToggleResult,
};

const ZOOM_STEP: f64 = 0.1;
const ZOOM_MIN: f64 = 0.3;
const ZOOM_MAX: f64 = 3.0;
const ZOOM_DEFAULT: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ZoomChange {
    Reset,
    In,
    Out,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EditCommand {
    Undo,
    Redo,
}

impl EditCommand {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Undo => "undo",
            Self::Redo => "redo",
        }
    }
}

/// Toolkit window events the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MainWindowEvent {
    CloseRequested,
    Destroyed,
}

pub(crate) fn next_zoom_factor(current: f64, change: ZoomChange) -> f64 {
    let next = match change {
        ZoomChange::Reset => return ZOOM_DEFAULT,
        ZoomChange::In => current + ZOOM_STEP,
        ZoomChange::Out => current - ZOOM_STEP,
    };
    // Snap to one decimal so repeated steps do not drift.
    ((next * 10.0).round() / 10.0).clamp(ZOOM_MIN, ZOOM_MAX)
}

/// Owns the single main window handle.
///
/// Every bridge command and menu action goes through this type. Operations
/// on an absent window fall back to their no-op default. The handle is
/// cloned out of the lock before any toolkit call so window events raised
/// during the call can re-enter the controller.
pub(crate) struct WindowController<W> {
    window: Mutex<Option<W>>,
    environment: DesktopEnvironment,
    revealed: AtomicBool,
    devtools_auto_opened: AtomicBool,
    zoom_factor: Mutex<f64>,
}

impl<W: WindowHost> WindowController<W> {
    pub(crate) fn new(environment: DesktopEnvironment) -> Self {
        Self {
            window: Mutex::new(None),
            environment,
            revealed: AtomicBool::new(false),
            devtools_auto_opened: AtomicBool::new(false),
            zoom_factor: Mutex::new(ZOOM_DEFAULT),
        }
    }

    pub(crate) fn environment(&self) -> DesktopEnvironment {
        self.environment
    }

    fn current(&self) -> Option<W> {
        match self.window.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub(crate) fn has_window(&self) -> bool {
        self.current().is_some()
    }

    pub(crate) fn attach(&self, window: W) -> Result<(), String> {
        let mut guard = self
            .window
            .lock()
            .map_err(|_| "Main window lock poisoned.".to_string())?;
        if guard.is_some() {
            return Err("Main window already exists.".to_string());
        }
        *guard = Some(window);
        self.revealed.store(false, Ordering::Release);
        self.devtools_auto_opened.store(false, Ordering::Release);
        Ok(())
    }

    /// Clears the handle and returns it. Later calls return `None`.
    pub(crate) fn detach(&self) -> Option<W> {
        match self.window.lock() {
            Ok(mut guard) => guard.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        }
    }

    pub(crate) fn reveal_once(&self) -> Result<bool, String> {
        let Some(window) = self.current() else {
            return Ok(false);
        };
        if self
            .revealed
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Ok(false);
        }
        window.show()?;
        Ok(true)
    }

    pub(crate) fn focus(&self) -> Result<(), String> {
        match self.current() {
            Some(window) => {
                window.show()?;
                window.focus()
            }
            None => Ok(()),
        }
    }

    /// Opens dev tools the first time the page reports ready in development.
    pub(crate) fn auto_open_devtools_once(&self) -> bool {
        if !self.environment.is_development {
            return false;
        }
        let Some(window) = self.current() else {
            return false;
        };
        if self
            .devtools_auto_opened
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return false;
        }
        window.open_devtools();
        true
    }

    pub(crate) fn minimize(&self) -> Result<(), String> {
        match self.current() {
            Some(window) => window.minimize(),
            None => Ok(()),
        }
    }

    pub(crate) fn toggle_maximize(&self) -> Result<(), String> {
        let Some(window) = self.current() else {
            return Ok(());
        };
        if window.is_maximized()? {
            window.unmaximize()
        } else {
            window.maximize()
        }
    }

    pub(crate) fn is_maximized(&self) -> Result<bool, String> {
        match self.current() {
            Some(window) => window.is_maximized(),
            None => Ok(false),
        }
    }

    pub(crate) fn toggle_fullscreen(&self) -> Result<(), String> {
        let Some(window) = self.current() else {
            return Ok(());
        };
        let fullscreen = window.is_fullscreen()?;
        window.set_fullscreen(!fullscreen)
    }

    pub(crate) fn edit(&self, command: EditCommand) -> Result<(), String> {
        match self.current() {
            Some(window) => window.exec_edit_command(command.as_str()),
            None => Ok(()),
        }
    }

    /// Closes the window and terminates the process with code 0. The handle
    /// is cleared before the toolkit close so destroy handlers see no window.
    pub(crate) fn close<E, F>(&self, exit: &E, log: F)
    where
        E: ExitHook,
        F: Fn(&str),
    {
        let Some(window) = self.detach() else {
            return;
        };
        log("main window closed");
        if let Err(error) = window.close() {
            log(&error);
        }
        exit.exit(0);
    }

    /// Handles the toolkit reporting the window gone, however it was closed.
    pub(crate) fn handle_destroyed<E, F>(&self, exit: &E, log: F)
    where
        E: ExitHook,
        F: Fn(&str),
    {
        if self.detach().is_some() {
            log("main window closed");
        }
        exit.exit(0);
    }

    /// An OS close goes through the same path as the bridge close, so the
    /// handle is gone before the toolkit starts tearing the window down.
    pub(crate) fn handle_window_event<E, F>(&self, event: MainWindowEvent, exit: &E, log: F)
    where
        E: ExitHook,
        F: Fn(&str),
    {
        match event {
            MainWindowEvent::CloseRequested => self.close(exit, log),
            MainWindowEvent::Destroyed => self.handle_destroyed(exit, log),
        }
    }

    pub(crate) fn reload(&self, ignore_cache: bool) -> Result<(), String> {
        match self.current() {
            Some(window) => window.reload(ignore_cache),
            None => Ok(()),
        }
    }

    pub(crate) fn zoom(&self, change: ZoomChange) -> Result<f64, String> {
        let Some(window) = self.current() else {
            return Ok(self.zoom_factor());
        };
        let next = next_zoom_factor(self.zoom_factor(), change);
        window.set_zoom(next)?;
        if let Ok(mut guard) = self.zoom_factor.lock() {
            *guard = next;
        }
        Ok(next)
    }

    pub(crate) fn zoom_factor(&self) -> f64 {
        self.zoom_factor
            .lock()
            .map(|guard| *guard)
            .unwrap_or(ZOOM_DEFAULT)
    }

    pub(crate) fn toggle_devtools(&self) -> DevToolsToggleResult {
        if !self.environment.is_development {
            return DevToolsToggleResult { opened: false };
        }
        let Some(window) = self.current() else {
            return DevToolsToggleResult { opened: false };
        };
        if window.is_devtools_open() {
            window.close_devtools();
            DevToolsToggleResult { opened: false }
        } else {
            window.open_devtools();
            DevToolsToggleResult { opened: true }
        }
    }

    pub(crate) fn open_devtools(&self) -> BridgeSuccess {
        if !self.environment.is_development {
            return BridgeSuccess::from_flag(false);
        }
        match self.current() {
            Some(window) => {
                window.open_devtools();
                BridgeSuccess::from_flag(true)
            }
            None => BridgeSuccess::from_flag(false),
        }
    }

    pub(crate) fn close_devtools(&self) -> BridgeSuccess {
        if !self.environment.is_development {
            return BridgeSuccess::from_flag(false);
        }
        match self.current() {
            Some(window) => {
                window.close_devtools();
                BridgeSuccess::from_flag(true)
            }
            None => BridgeSuccess::from_flag(false),
        }
    }

    /// Returns the window for callers that need the concrete toolkit type,
    /// such as dialog parenting or popup menus.
    pub(crate) fn window(&self) -> Option<W> {
        self.current()
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{FakeWindow, RecordingExit};
    use super::*;
    use crate::environment::Platform;

    fn environment(is_development: bool) -> DesktopEnvironment {
        DesktopEnvironment {
            is_development,
            is_debug: false,
            is_remote_debug: false,
            platform: Platform::Linux,
        }
    }

    fn controller_with_window(is_development: bool) -> (WindowController<FakeWindow>, FakeWindow) {
        let controller = WindowController::new(environment(is_development));
        let window = FakeWindow::default();
        controller.attach(window.clone()).expect("attach window");
        (controller, window)
    }

    #[test]
    fn is_maximized_tracks_last_toggle_regardless_of_minimizes() {
        let (controller, _window) = controller_with_window(false);
        let steps = [
            ("max", true),
            ("min", true),
            ("min", true),
            ("max", false),
            ("min", false),
            ("max", true),
            ("max", false),
            ("min", false),
            ("max", true),
            ("min", true),
        ];

        for (step, expected) in steps {
            match step {
                "max" => controller.toggle_maximize().expect("toggle maximize"),
                _ => controller.minimize().expect("minimize"),
            }
            assert_eq!(controller.is_maximized(), Ok(expected), "after {step}");
        }
    }

    #[test]
    fn is_maximized_reads_live_state_changed_outside_the_bridge() {
        let (controller, window) = controller_with_window(false);
        window.state.lock().expect("state").maximized = true;
        assert_eq!(controller.is_maximized(), Ok(true));

        controller.toggle_maximize().expect("toggle");
        assert!(!window.snapshot(|state| state.maximized));
    }

    #[test]
    fn close_clears_handle_and_exits_with_zero() {
        let (controller, window) = controller_with_window(false);
        let exit = RecordingExit::default();

        controller.close(&exit, |_| {});

        assert!(!controller.has_window());
        assert!(window.snapshot(|state| state.closed));
        assert_eq!(exit.codes(), vec![0]);
    }

    #[test]
    fn operations_after_close_return_defaults() {
        let (controller, window) = controller_with_window(true);
        let exit = RecordingExit::default();
        controller.close(&exit, |_| {});

        assert_eq!(controller.minimize(), Ok(()));
        assert_eq!(controller.toggle_maximize(), Ok(()));
        assert_eq!(controller.is_maximized(), Ok(false));
        assert_eq!(controller.reload(true), Ok(()));
        assert_eq!(controller.reveal_once(), Ok(false));
        assert_eq!(controller.focus(), Ok(()));
        assert_eq!(controller.zoom(ZoomChange::In), Ok(1.0));
        assert_eq!(
            controller.toggle_devtools(),
            DevToolsToggleResult { opened: false }
        );
        assert_eq!(controller.open_devtools(), BridgeSuccess::from_flag(false));
        assert_eq!(controller.close_devtools(), BridgeSuccess::from_flag(false));
        assert!(!controller.auto_open_devtools_once());

        controller.close(&exit, |_| {});
        assert_eq!(exit.codes(), vec![0]);
        assert_eq!(window.snapshot(|state| state.devtools_open_calls), 0);
    }

    #[test]
    fn handle_destroyed_always_exits_and_logs_once() {
        let (controller, _window) = controller_with_window(false);
        let exit = RecordingExit::default();
        let logged = Mutex::new(Vec::new());
        let log = |message: &str| logged.lock().expect("log").push(message.to_string());

        controller.handle_destroyed(&exit, log);
        controller.handle_destroyed(&exit, log);

        assert_eq!(exit.codes(), vec![0, 0]);
        assert_eq!(logged.lock().expect("log").len(), 1);
    }

    #[test]
    fn os_close_request_clears_handle_before_destroy() {
        let (controller, window) = controller_with_window(false);
        let exit = RecordingExit::default();
        let logged = Mutex::new(Vec::new());
        let log = |message: &str| logged.lock().expect("log").push(message.to_string());

        controller.handle_window_event(MainWindowEvent::CloseRequested, &exit, log);

        assert!(!controller.has_window());
        assert_eq!(exit.codes(), vec![0]);
        window.state.lock().expect("state").maximized = true;
        assert_eq!(controller.is_maximized(), Ok(false));
        assert_eq!(controller.minimize(), Ok(()));
        assert!(!window.snapshot(|state| state.minimized));

        controller.handle_window_event(MainWindowEvent::Destroyed, &exit, log);
        assert_eq!(exit.codes(), vec![0, 0]);
        assert_eq!(
            logged.lock().expect("log").clone(),
            vec!["main window closed".to_string()]
        );
    }

    #[test]
    fn attach_rejects_a_second_window() {
        let (controller, _window) = controller_with_window(false);
        assert!(controller.attach(FakeWindow::default()).is_err());

        controller.detach();
        assert!(controller.attach(FakeWindow::default()).is_ok());
    }

    #[test]
    fn reveal_once_shows_window_a_single_time() {
        let (controller, window) = controller_with_window(false);
        assert_eq!(controller.reveal_once(), Ok(true));
        assert_eq!(controller.reveal_once(), Ok(false));
        assert_eq!(window.snapshot(|state| state.show_calls), 1);
        assert!(window.snapshot(|state| state.visible));
    }

    #[test]
    fn devtools_are_unavailable_in_production() {
        let (controller, window) = controller_with_window(false);

        assert_eq!(
            controller.toggle_devtools(),
            DevToolsToggleResult { opened: false }
        );
        assert_eq!(controller.open_devtools(), BridgeSuccess::from_flag(false));
        assert_eq!(controller.close_devtools(), BridgeSuccess::from_flag(false));
        assert!(!controller.auto_open_devtools_once());
        assert_eq!(window.snapshot(|state| state.devtools_open_calls), 0);
    }

    #[test]
    fn devtools_toggle_in_development() {
        let (controller, window) = controller_with_window(true);

        assert_eq!(
            controller.toggle_devtools(),
            DevToolsToggleResult { opened: true }
        );
        assert!(window.is_devtools_open());
        assert_eq!(
            controller.toggle_devtools(),
            DevToolsToggleResult { opened: false }
        );
        assert_eq!(controller.open_devtools(), BridgeSuccess::from_flag(true));
        assert_eq!(controller.close_devtools(), BridgeSuccess::from_flag(true));
        assert!(!window.is_devtools_open());
    }

    #[test]
    fn auto_open_devtools_happens_once_in_development() {
        let (controller, window) = controller_with_window(true);
        assert!(controller.auto_open_devtools_once());
        assert!(!controller.auto_open_devtools_once());
        assert_eq!(window.snapshot(|state| state.devtools_open_calls), 1);
    }

    #[test]
    fn zoom_steps_are_clamped_and_reset() {
        let (controller, window) = controller_with_window(false);
        assert_eq!(controller.zoom(ZoomChange::In), Ok(1.1));
        assert_eq!(controller.zoom(ZoomChange::Reset), Ok(1.0));
        for _ in 0..20 {
            controller.zoom(ZoomChange::Out).expect("zoom out");
        }
        assert_eq!(controller.zoom_factor(), 0.3);
        assert_eq!(window.snapshot(|state| state.zoom), Some(0.3));
    }

    #[test]
    fn fullscreen_toggles_from_live_state() {
        let (controller, window) = controller_with_window(false);
        controller.toggle_fullscreen().expect("enter fullscreen");
        assert!(window.snapshot(|state| state.fullscreen));

        window.state.lock().expect("state").fullscreen = false;
        controller.toggle_fullscreen().expect("enter fullscreen again");
        assert!(window.snapshot(|state| state.fullscreen));
        controller.toggle_fullscreen().expect("leave fullscreen");
        assert!(!window.snapshot(|state| state.fullscreen));
    }

    #[test]
    fn edit_commands_run_in_the_page() {
        let (controller, window) = controller_with_window(false);
        controller.edit(EditCommand::Undo).expect("undo");
        controller.edit(EditCommand::Redo).expect("redo");
        assert_eq!(
            window.snapshot(|state| state.edit_commands.clone()),
            vec!["undo".to_string(), "redo".to_string()]
        );
    }

    #[test]
    fn next_zoom_factor_caps_at_maximum() {
        assert_eq!(next_zoom_factor(2.95, ZoomChange::In), 3.0);
        assert_eq!(next_zoom_factor(0.7, ZoomChange::Out), 0.6);
    }
}
