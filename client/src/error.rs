use thiserror::Error;
use wasm_bindgen::JsValue;

use sketchpad_shared::ConfigError;

#[derive(Debug, Error)]
pub enum SketchError {
    #[error("Missing window")]
    MissingWindow,
    #[error("Missing document")]
    MissingDocument,
    #[error("Missing element: {0}")]
    MissingElement(String),
    #[error("Invalid element type: {0}")]
    InvalidElement(String),
    #[error("Missing 2d context on canvas {0}")]
    MissingContext(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Js(String),
}

impl From<JsValue> for SketchError {
    fn from(value: JsValue) -> Self {
        SketchError::Js(
            value
                .as_string()
                .unwrap_or_else(|| format!("{value:?}")),
        )
    }
}

impl From<SketchError> for JsValue {
    fn from(error: SketchError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}
