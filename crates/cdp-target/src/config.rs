use std::env;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use vizdriver_sequencer::ActionKind;
use which::which;

/// Configuration for launching or attaching to Chromium.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CdpConfig {
    pub executable: Option<PathBuf>,
    pub headless: bool,
    pub user_data_dir: Option<PathBuf>,
    /// Attach to an already running browser instead of launching one.
    pub websocket_url: Option<String>,
    pub launch_timeout_ms: u64,
}

impl CdpConfig {
    pub fn launch_timeout(&self) -> Duration {
        Duration::from_millis(self.launch_timeout_ms)
    }

    /// Configured executable, then `VIZDRIVER_CHROME`, then a `PATH` lookup.
    pub fn resolve_executable(&self) -> Option<PathBuf> {
        self.executable.clone().or_else(detect_chrome_executable)
    }
}

impl Default for CdpConfig {
    fn default() -> Self {
        Self {
            executable: None,
            headless: resolve_headless_default(),
            user_data_dir: None,
            websocket_url: None,
            launch_timeout_ms: 20_000,
        }
    }
}

/// Where the sequencer's fields and controls live on the page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetLayout {
    /// Position among the page's `input` elements.
    pub insert_field_index: usize,
    pub delete_field_index: usize,
    /// Value of the control's `name` attribute.
    pub insert_control: String,
    pub delete_control: String,
}

impl TargetLayout {
    pub fn field_index(&self, kind: ActionKind) -> usize {
        match kind {
            ActionKind::Insert => self.insert_field_index,
            ActionKind::Delete => self.delete_field_index,
        }
    }

    pub fn control_name(&self, kind: ActionKind) -> &str {
        match kind {
            ActionKind::Insert => &self.insert_control,
            ActionKind::Delete => &self.delete_control,
        }
    }
}

impl Default for TargetLayout {
    fn default() -> Self {
        Self {
            insert_field_index: 0,
            delete_field_index: 2,
            insert_control: "Insert".into(),
            delete_control: "Delete".into(),
        }
    }
}

fn resolve_headless_default() -> bool {
    match env::var("VIZDRIVER_HEADLESS") {
        Ok(value) => {
            let lower = value.to_ascii_lowercase();
            !matches!(lower.as_str(), "0" | "false" | "no" | "off")
        }
        Err(_) => true,
    }
}

fn detect_chrome_executable() -> Option<PathBuf> {
    if let Ok(raw) = env::var("VIZDRIVER_CHROME") {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            let candidate = PathBuf::from(trimmed);
            if candidate.exists() {
                return Some(candidate);
            }
        }
    }

    chrome_executable_names()
        .iter()
        .find_map(|name| which(name).ok())
}

fn chrome_executable_names() -> &'static [&'static str] {
    #[cfg(target_os = "windows")]
    {
        &["chrome.exe", "chromium.exe", "msedge.exe"]
    }

    #[cfg(not(target_os = "windows"))]
    {
        &[
            "google-chrome-stable",
            "google-chrome",
            "chromium",
            "chromium-browser",
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_matches_visualization_page() {
        let layout = TargetLayout::default();
        assert_eq!(layout.field_index(ActionKind::Insert), 0);
        assert_eq!(layout.field_index(ActionKind::Delete), 2);
        assert_eq!(layout.control_name(ActionKind::Insert), "Insert");
        assert_eq!(layout.control_name(ActionKind::Delete), "Delete");
    }

    #[test]
    fn explicit_executable_wins() {
        let config = CdpConfig {
            executable: Some(PathBuf::from("/opt/chrome/chrome")),
            ..CdpConfig::default()
        };
        assert_eq!(
            config.resolve_executable(),
            Some(PathBuf::from("/opt/chrome/chrome"))
        );
    }

    #[test]
    fn partial_layout_fills_defaults() {
        let layout: TargetLayout =
            serde_json::from_str(r#"{ "delete_field_index": 5 }"#).unwrap();
        assert_eq!(layout.delete_field_index, 5);
        assert_eq!(layout.insert_field_index, 0);
        assert_eq!(layout.insert_control, "Insert");
    }
}
