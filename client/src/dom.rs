use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlButtonElement, HtmlCanvasElement, MouseEvent, TouchEvent, Window};

use sketchpad_shared::{debug_requested, map_client_point, CanvasRect, Point, WidgetConfig};

use crate::error::SketchError;

pub const CONFIG_ELEMENT_ID: &str = "sketchpad-config";

pub fn get_element<T: JsCast>(document: &Document, id: &str) -> Result<T, SketchError> {
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| SketchError::MissingElement(id.to_string()))?;
    element
        .dyn_into::<T>()
        .map_err(|_| SketchError::InvalidElement(id.to_string()))
}

/// Like [`get_element`] for controls the widget can live without.
pub fn find_element<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    match get_element(document, id) {
        Ok(element) => Some(element),
        Err(SketchError::MissingElement(_)) => {
            log::debug!("control #{id} not present");
            None
        }
        Err(error) => {
            log::warn!("{error}");
            None
        }
    }
}

pub fn debug_enabled(window: &Window) -> bool {
    let search = window.location().search().ok().unwrap_or_default();
    debug_requested(&search)
}

/// Reads the optional JSON config block; no block means defaults.
pub fn read_config(document: &Document) -> Result<WidgetConfig, SketchError> {
    let text = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
        .unwrap_or_default();
    Ok(WidgetConfig::from_json(&text)?)
}

pub fn set_button_enabled(button: &HtmlButtonElement, enabled: bool) {
    button.set_disabled(!enabled);
}

fn canvas_rect(canvas: &HtmlCanvasElement) -> CanvasRect {
    let rect = canvas.get_bounding_client_rect();
    CanvasRect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}

fn client_to_canvas(canvas: &HtmlCanvasElement, client_x: f64, client_y: f64) -> Option<Point> {
    map_client_point(
        client_x,
        client_y,
        canvas_rect(canvas),
        f64::from(canvas.width()),
        f64::from(canvas.height()),
    )
}

pub fn mouse_point(canvas: &HtmlCanvasElement, event: &MouseEvent) -> Option<Point> {
    client_to_canvas(
        canvas,
        f64::from(event.client_x()),
        f64::from(event.client_y()),
    )
}

/// Position of the first active touch; `None` once every finger has lifted.
pub fn touch_point(canvas: &HtmlCanvasElement, event: &TouchEvent) -> Option<Point> {
    let touch = event.touches().item(0)?;
    client_to_canvas(
        canvas,
        f64::from(touch.client_x()),
        f64::from(touch.client_y()),
    )
}
