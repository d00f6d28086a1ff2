use serde::Deserialize;

use crate::error::ConfigError;
use crate::tool::ToolConfig;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_WIDTH: u32 = 1920;
pub const DEFAULT_HEIGHT: u32 = 1080;
pub const DEFAULT_BACKGROUND: &str = "white";

/// Element ids the widget binds to. Only the two canvases are required.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ControlIds {
    pub draw_canvas: String,
    pub display_canvas: String,
    pub line_width: String,
    pub color: String,
    pub pen: String,
    pub eraser: String,
    pub rectangle: String,
    pub ellipse: String,
    pub triangle: String,
    pub undo: String,
    pub redo: String,
    pub reset: String,
    pub fill: String,
}

impl Default for ControlIds {
    fn default() -> Self {
        Self {
            draw_canvas: "canvas".to_string(),
            display_canvas: "display-canvas".to_string(),
            line_width: "lineWidth".to_string(),
            color: "color-picker".to_string(),
            pen: "pen".to_string(),
            eraser: "eraser".to_string(),
            rectangle: "square".to_string(),
            ellipse: "ellipse".to_string(),
            triangle: "triangle".to_string(),
            undo: "undo".to_string(),
            redo: "redo".to_string(),
            reset: "reset".to_string(),
            fill: "fill".to_string(),
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct WidgetConfig {
    /// Intrinsic bitmap size of both canvases.
    pub width: u32,
    pub height: u32,
    /// Canvas background; the eraser paints with it.
    pub background: String,
    /// Tool state before the toolbar reports anything.
    pub tools: ToolConfig,
    pub ids: ControlIds,
    /// Bind Ctrl/Cmd+Z and Ctrl/Cmd+Y on the window.
    pub shortcuts: bool,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            background: DEFAULT_BACKGROUND.to_string(),
            tools: ToolConfig::default(),
            ids: ControlIds::default(),
            shortcuts: true,
        }
    }
}

impl WidgetConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let text = text.trim();
        let config = if text.is_empty() {
            Self::default()
        } else {
            serde_json::from_str::<Self>(text)?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyCanvas {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Whether a page query string (`?a=b&debug=1`) asks for debug logging.
pub fn debug_requested(query: &str) -> bool {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .any(|(key, value)| key == "debug" && matches!(value, "1" | "true"))
}
