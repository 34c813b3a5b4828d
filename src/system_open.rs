use std::{
    path::Path,
    process::{Command, Stdio},
};

#[cfg(target_os = "macos")]
const FILE_MANAGER_COMMAND: &str = "open";

#[cfg(target_os = "windows")]
const FILE_MANAGER_COMMAND: &str = "explorer";

#[cfg(all(unix, not(target_os = "macos")))]
const FILE_MANAGER_COMMAND: &str = "xdg-open";

#[cfg(any(target_os = "macos", target_os = "windows", unix))]
pub(crate) fn open_path_with_file_manager(path: &Path) -> Result<(), String> {
    Command::new(FILE_MANAGER_COMMAND)
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|error| format!("Failed to run '{FILE_MANAGER_COMMAND}': {error}"))
}

#[cfg(not(any(target_os = "macos", target_os = "windows", unix)))]
pub(crate) fn open_path_with_file_manager(_path: &Path) -> Result<(), String> {
    Err("Opening folders is not supported on this platform.".to_string())
}

/// Ensures the folder exists, then hands it to the platform file manager.
pub(crate) fn open_folder(path: &Path) -> Result<(), String> {
    std::fs::create_dir_all(path)
        .map_err(|error| format!("Failed to create folder {}: {}", path.display(), error))?;
    open_path_with_file_manager(path)
}
