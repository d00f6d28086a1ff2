use sketchpad_shared::Sketch;

use crate::render::CanvasBoard;
use crate::toolbar::Toolbar;

pub struct State {
    pub sketch: Sketch<CanvasBoard>,
    pub toolbar: Toolbar,
}

impl State {
    /// Pulls the toolbar's current values into the controller.
    pub fn refresh_tools(&mut self) {
        let tools = self.toolbar.read_tool_config(self.sketch.tools());
        self.sketch.set_tools(tools);
    }

    pub fn sync_history(&self) {
        self.toolbar.sync_history(self.sketch.history());
    }
}
