const LOCALE_ENV_KEYS: [&str; 3] = ["DESKTOP_SHELL_LOCALE", "LC_ALL", "LANG"];

#[derive(Debug, Clone, Copy)]
pub struct ShellTexts {
    pub menu_file: &'static str,
    pub menu_new: &'static str,
    pub menu_open: &'static str,
    pub menu_quit: &'static str,
    pub menu_edit: &'static str,
    pub menu_undo: &'static str,
    pub menu_redo: &'static str,
    pub menu_cut: &'static str,
    pub menu_copy: &'static str,
    pub menu_paste: &'static str,
    pub menu_view: &'static str,
    pub menu_reload: &'static str,
    pub menu_force_reload: &'static str,
    pub menu_devtools: &'static str,
    pub menu_actual_size: &'static str,
    pub menu_zoom_in: &'static str,
    pub menu_zoom_out: &'static str,
    pub menu_fullscreen: &'static str,
    pub menu_window: &'static str,
    pub menu_minimize: &'static str,
    pub menu_close: &'static str,
    pub menu_help: &'static str,
    pub menu_about: &'static str,
    pub menu_hide: &'static str,
    pub menu_hide_others: &'static str,
    pub menu_show_all: &'static str,
}

pub fn shell_texts_for_locale(locale: &str) -> ShellTexts {
    if locale == "en-US" {
        return ShellTexts {
            menu_file: "File",
            menu_new: "New",
            menu_open: "Open",
            menu_quit: "Quit",
            menu_edit: "Edit",
            menu_undo: "Undo",
            menu_redo: "Redo",
            menu_cut: "Cut",
            menu_copy: "Copy",
            menu_paste: "Paste",
            menu_view: "View",
            menu_reload: "Reload",
            menu_force_reload: "Force Reload",
            menu_devtools: "Developer Tools",
            menu_actual_size: "Actual Size",
            menu_zoom_in: "Zoom In",
            menu_zoom_out: "Zoom Out",
            menu_fullscreen: "Toggle Full Screen",
            menu_window: "Window",
            menu_minimize: "Minimize",
            menu_close: "Close",
            menu_help: "Help",
            menu_about: "About",
            menu_hide: "Hide",
            menu_hide_others: "Hide Others",
            menu_show_all: "Show All",
        };
    }

    ShellTexts {
        menu_file: "文件",
        menu_new: "新建",
        menu_open: "打开",
        menu_quit: "退出",
        menu_edit: "编辑",
        menu_undo: "撤销",
        menu_redo: "重做",
        menu_cut: "剪切",
        menu_copy: "复制",
        menu_paste: "粘贴",
        menu_view: "视图",
        menu_reload: "重新加载",
        menu_force_reload: "强制重新加载",
        menu_devtools: "开发者工具",
        menu_actual_size: "实际大小",
        menu_zoom_in: "放大",
        menu_zoom_out: "缩小",
        menu_fullscreen: "全屏",
        menu_window: "窗口",
        menu_minimize: "最小化",
        menu_close: "关闭",
        menu_help: "帮助",
        menu_about: "关于",
        menu_hide: "隐藏",
        menu_hide_others: "隐藏其他",
        menu_show_all: "全部显示",
    }
}

pub(crate) fn resolve_shell_locale_from<F>(
    default_shell_locale: &'static str,
    lookup: F,
) -> &'static str
where
    F: Fn(&str) -> Option<String>,
{
    for env_key in LOCALE_ENV_KEYS {
        if let Some(value) = lookup(env_key) {
            if let Some(locale) = normalize_shell_locale(&value) {
                return locale;
            }
        }
    }

    default_shell_locale
}

/// Maps a BCP 47 tag or a POSIX locale such as `en_US.UTF-8` onto one of the
/// shipped label sets, keyed by language subtag.
pub(crate) fn normalize_shell_locale(raw: &str) -> Option<&'static str> {
    let language = raw
        .trim()
        .split(['.', '@'])
        .next()?
        .split(['-', '_'])
        .next()?
        .to_ascii_lowercase();

    match language.as_str() {
        "zh" => Some("zh-CN"),
        "en" => Some("en-US"),
        _ => None,
    }
}
