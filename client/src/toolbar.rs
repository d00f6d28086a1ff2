use web_sys::{Document, HtmlButtonElement, HtmlInputElement};

use sketchpad_shared::tool::parse_line_width;
use sketchpad_shared::{ControlIds, History, PenMode, ShapeMode, ToolConfig};

use crate::dom::{find_element, set_button_enabled};

/// The toolbar controls the page provides. Every control is optional; a
/// missing one leaves its part of the tool state untouched.
pub struct Toolbar {
    pub line_width: Option<HtmlInputElement>,
    pub color: Option<HtmlInputElement>,
    pub pen: Option<HtmlInputElement>,
    pub eraser: Option<HtmlInputElement>,
    pub rectangle: Option<HtmlInputElement>,
    pub ellipse: Option<HtmlInputElement>,
    pub triangle: Option<HtmlInputElement>,
    pub undo: Option<HtmlButtonElement>,
    pub redo: Option<HtmlButtonElement>,
    pub reset: Option<HtmlButtonElement>,
    pub fill: Option<HtmlButtonElement>,
}

fn is_checked(input: &Option<HtmlInputElement>) -> bool {
    input.as_ref().is_some_and(HtmlInputElement::checked)
}

impl Toolbar {
    pub fn find(document: &Document, ids: &ControlIds) -> Self {
        Self {
            line_width: find_element(document, &ids.line_width),
            color: find_element(document, &ids.color),
            pen: find_element(document, &ids.pen),
            eraser: find_element(document, &ids.eraser),
            rectangle: find_element(document, &ids.rectangle),
            ellipse: find_element(document, &ids.ellipse),
            triangle: find_element(document, &ids.triangle),
            undo: find_element(document, &ids.undo),
            redo: find_element(document, &ids.redo),
            reset: find_element(document, &ids.reset),
            fill: find_element(document, &ids.fill),
        }
    }

    /// Inputs whose `input`/`change` events should refresh the tool state.
    pub fn inputs(&self) -> impl Iterator<Item = &HtmlInputElement> {
        [
            &self.line_width,
            &self.color,
            &self.pen,
            &self.eraser,
            &self.rectangle,
            &self.ellipse,
            &self.triangle,
        ]
        .into_iter()
        .flatten()
    }

    /// Current tool state as shown by the controls, starting from `current`
    /// for anything the page does not expose.
    pub fn read_tool_config(&self, current: &ToolConfig) -> ToolConfig {
        let mut tools = current.clone();

        if let Some(input) = &self.color {
            let color = input.value();
            if !color.is_empty() {
                tools.color = color;
            }
        }
        if let Some(width) = self
            .line_width
            .as_ref()
            .and_then(|input| parse_line_width(&input.value()))
        {
            tools.line_width = width;
        }
        if is_checked(&self.eraser) {
            tools.pen = PenMode::Eraser;
        } else if is_checked(&self.pen) || self.eraser.is_some() {
            tools.pen = PenMode::Pen;
        }
        if self.rectangle.is_some() || self.ellipse.is_some() || self.triangle.is_some() {
            tools.shape = ShapeMode::from_flags(
                is_checked(&self.rectangle),
                is_checked(&self.ellipse),
                is_checked(&self.triangle),
            );
        }
        tools
    }

    pub fn sync_history<S: Clone>(&self, history: &History<S>) {
        if let Some(button) = &self.undo {
            set_button_enabled(button, history.can_undo());
        }
        if let Some(button) = &self.redo {
            set_button_enabled(button, history.can_redo());
        }
    }
}
