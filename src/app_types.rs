use serde::{Deserialize, Serialize};
use std::time::Instant;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AppLogInfo {
    pub(crate) log_dir: String,
    pub(crate) log_file: String,
    pub(crate) log_exists: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) struct BridgeSuccess {
    pub(crate) success: bool,
}

impl BridgeSuccess {
    pub(crate) fn from_flag(success: bool) -> Self {
        Self { success }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) struct DevToolsToggleResult {
    pub(crate) opened: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum MessageBoxKind {
    #[default]
    None,
    Info,
    Question,
    Warning,
    Error,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct MessageBoxOptions {
    pub(crate) title: Option<String>,
    pub(crate) message: String,
    pub(crate) buttons: Vec<String>,
    #[serde(rename = "type")]
    pub(crate) kind: MessageBoxKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) struct MessageBoxResult {
    /// Index of the chosen button in `MessageBoxOptions::buttons`.
    pub(crate) response: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProcessMemoryUsage {
    pub(crate) rss: u64,
    pub(crate) virtual_memory: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DebugInfo {
    pub(crate) platform: &'static str,
    pub(crate) version: String,
    pub(crate) is_dev: bool,
    pub(crate) is_debug: bool,
    pub(crate) is_remote_debug: bool,
    pub(crate) memory_usage: Option<ProcessMemoryUsage>,
    pub(crate) uptime: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct DebugLogResult {
    pub(crate) success: bool,
    pub(crate) timestamp: String,
}

#[derive(Debug)]
pub(crate) struct ProcessClock {
    started_at: Instant,
}

impl ProcessClock {
    pub(crate) fn start() -> Self {
        Self {
            started_at: Instant::now(),
        }
    }

    pub(crate) fn uptime_secs(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}
