//! Config schema and deserialization

use serde::Deserialize;

/// Root config structure for .docker-bench-html.json
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Report title shown in the page head and header
    #[serde(default)]
    pub title: Option<String>,

    /// Render the "how to open this file" footer. Default: true
    #[serde(default = "default_true")]
    pub show_hint: bool,

    /// Remove ANSI color codes from input lines before parsing. Default: false
    #[serde(default)]
    pub strip_ansi: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: None,
            show_hint: true,
            strip_ansi: false,
        }
    }
}

impl Config {
    /// Merge CLI overrides into config. CLI values take precedence.
    pub fn merge_with_cli(
        mut self,
        title: Option<String>,
        no_hint: bool,
        strip_ansi: bool,
    ) -> Self {
        if title.is_some() {
            self.title = title;
        }
        if no_hint {
            self.show_hint = false;
        }
        if strip_ansi {
            self.strip_ansi = true;
        }
        self
    }

    /// Title to render, falling back to the default
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(crate::DEFAULT_TITLE)
    }
}
