use std::{env, path::PathBuf};

use crate::{logging, shell_locale, DEFAULT_SHELL_LOCALE, DEVELOPMENT_ENV, LOG_DIR_ENV};

const DEBUG_FLAGS: [&str; 2] = ["--inspect", "--inspect-brk"];
const REMOTE_DEBUG_FLAG: &str = "--remote-debugging-port";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Platform {
    MacOs,
    Windows,
    Linux,
    Other(&'static str),
}

impl Platform {
    pub(crate) fn current() -> Self {
        Self::from_os(env::consts::OS)
    }

    pub(crate) fn from_os(os: &'static str) -> Self {
        match os {
            "macos" => Self::MacOs,
            "windows" => Self::Windows,
            "linux" => Self::Linux,
            other => Self::Other(other),
        }
    }

    /// Identifier reported to the page, in the `darwin`/`win32`/`linux`
    /// vocabulary web front ends already compare against.
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::MacOs => "darwin",
            Self::Windows => "win32",
            Self::Linux => "linux",
            Self::Other(os) => *os,
        }
    }

    pub(crate) fn is_apple(&self) -> bool {
        matches!(self, Self::MacOs)
    }
}

/// Startup facts about the running process. Computed once in `main` and
/// handed by value to the window controller and the menu builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DesktopEnvironment {
    pub(crate) is_development: bool,
    pub(crate) is_debug: bool,
    pub(crate) is_remote_debug: bool,
    pub(crate) platform: Platform,
}

impl DesktopEnvironment {
    pub(crate) fn detect() -> Self {
        let args: Vec<String> = env::args().collect();
        let node_env = env::var(DEVELOPMENT_ENV).ok();
        Self::from_parts(
            node_env.as_deref(),
            cfg!(feature = "custom-protocol"),
            &args,
            Platform::current(),
        )
    }

    pub(crate) fn from_parts(
        node_env: Option<&str>,
        packaged: bool,
        args: &[String],
        platform: Platform,
    ) -> Self {
        let is_development = node_env.map(str::trim) == Some("development") || !packaged;
        let is_debug = args.iter().any(|arg| DEBUG_FLAGS.contains(&arg.as_str()));
        let is_remote_debug = args.iter().any(|arg| {
            arg == REMOTE_DEBUG_FLAG
                || arg
                    .strip_prefix(REMOTE_DEBUG_FLAG)
                    .is_some_and(|rest| rest.starts_with('='))
        });

        Self {
            is_development,
            is_debug,
            is_remote_debug,
            platform,
        }
    }

    pub(crate) fn mode_label(&self) -> &'static str {
        if self.is_development {
            "development"
        } else {
            "production"
        }
    }
}

/// User configuration read from the environment once at startup and kept
/// in managed state next to the window controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ShellSettings {
    pub(crate) log_dir: PathBuf,
    pub(crate) locale: &'static str,
}

impl ShellSettings {
    pub(crate) fn detect() -> Self {
        Self::from_lookup(|key| env::var(key).ok(), home::home_dir())
    }

    pub(crate) fn from_lookup<F>(lookup: F, home_dir: Option<PathBuf>) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            log_dir: logging::resolve_log_dir_from(
                lookup(LOG_DIR_ENV).as_deref(),
                home_dir.as_deref(),
            ),
            locale: shell_locale::resolve_shell_locale_from(DEFAULT_SHELL_LOCALE, &lookup),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn from_parts_marks_development_from_node_env() {
        let environment =
            DesktopEnvironment::from_parts(Some("development"), true, &[], Platform::Linux);
        assert!(environment.is_development);
        assert_eq!(environment.mode_label(), "development");
    }

    #[test]
    fn from_parts_treats_unpackaged_build_as_development() {
        let environment = DesktopEnvironment::from_parts(None, false, &[], Platform::Windows);
        assert!(environment.is_development);
    }

    #[test]
    fn from_parts_is_production_when_packaged_without_override() {
        let environment =
            DesktopEnvironment::from_parts(Some("production"), true, &[], Platform::Linux);
        assert!(!environment.is_development);
        assert_eq!(environment.mode_label(), "production");
    }

    #[test]
    fn from_parts_detects_debug_flags() {
        let environment = DesktopEnvironment::from_parts(
            None,
            true,
            &args(&["app", "--inspect-brk", "--remote-debugging-port=9222"]),
            Platform::MacOs,
        );
        assert!(environment.is_debug);
        assert!(environment.is_remote_debug);
    }

    #[test]
    fn from_parts_ignores_lookalike_flags() {
        let environment = DesktopEnvironment::from_parts(
            None,
            true,
            &args(&["app", "--inspector", "--remote-debugging-portal"]),
            Platform::MacOs,
        );
        assert!(!environment.is_debug);
        assert!(!environment.is_remote_debug);
    }

    #[test]
    fn platform_from_os_maps_known_targets() {
        assert_eq!(Platform::from_os("macos"), Platform::MacOs);
        assert!(Platform::from_os("macos").is_apple());
        assert_eq!(Platform::from_os("macos").as_str(), "darwin");
        assert_eq!(Platform::from_os("windows").as_str(), "win32");
        assert_eq!(Platform::from_os("linux").as_str(), "linux");
        assert_eq!(Platform::from_os("freebsd").as_str(), "freebsd");
        assert!(!Platform::from_os("linux").is_apple());
    }

    #[test]
    fn shell_settings_read_log_dir_and_locale_from_lookup() {
        let settings = ShellSettings::from_lookup(
            |key| match key {
                "DESKTOP_SHELL_LOG_DIR" => Some("/tmp/shell-logs".to_string()),
                "LANG" => Some("en_GB.UTF-8".to_string()),
                _ => None,
            },
            Some(PathBuf::from("/home/someone")),
        );
        assert_eq!(settings.log_dir, PathBuf::from("/tmp/shell-logs"));
        assert_eq!(settings.locale, "en-US");
    }

    #[test]
    fn shell_settings_default_to_home_log_dir_and_chinese_labels() {
        let settings = ShellSettings::from_lookup(|_| None, Some(PathBuf::from("/home/someone")));
        assert!(settings.log_dir.starts_with("/home/someone"));
        assert_eq!(settings.locale, "zh-CN");
    }
}
