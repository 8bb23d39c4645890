//! Application configuration loaded from YAML.

use cdp_target::{CdpConfig, TargetLayout};
use serde::{Deserialize, Serialize};
use vizdriver_sequencer::SequencerPolicy;

pub const DEFAULT_TARGET_URL: &str =
    "https://www.cs.csubak.edu/~msarr/visualizations/BPlusTree.html";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub target: TargetConfig,
    pub browser: CdpConfig,
    pub sequencer: SequencerPolicy,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    pub url: String,
    pub layout: TargetLayout,
    /// JavaScript expression that is truthy once the page finished processing
    /// an activation. Without it, steps are paced by the fixed settle delay.
    pub settle_expression: Option<String>,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_TARGET_URL.to_string(),
            layout: TargetLayout::default(),
            settle_expression: None,
        }
    }
}
