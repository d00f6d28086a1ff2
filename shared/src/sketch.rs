//! The drawing controller: stroke state machine, tool state and history,
//! driven by input events and rendered through a [`Board`].

use crate::geometry::Shape;
use crate::history::{History, Restore};
use crate::keys::Shortcut;
use crate::restore::{RestoreGate, RestoreTicket};
use crate::tool::{PenMode, ShapeMode, ToolConfig};
use crate::Point;

#[cfg(test)]
#[path = "sketch_test.rs"]
mod sketch_test;

/// The pair of surfaces a [`Sketch`] paints on.
///
/// The drawing surface holds the stroke or shape in progress; the display
/// surface holds committed content. Snapshots always capture the display
/// surface.
pub trait Board {
    type Snapshot: Clone;

    /// Stroke and fill style for subsequent drawing-surface operations.
    fn set_style(&mut self, color: &str, line_width: f64);
    fn begin_path(&mut self, at: Point);
    /// Extends the current path to `point` and strokes it.
    fn line_to(&mut self, point: Point);
    /// Clears the drawing surface and strokes `shape` on it.
    fn preview_shape(&mut self, shape: &Shape);
    /// Floods the whole drawing surface with `color`.
    fn fill(&mut self, color: &str);
    /// Draws the drawing surface over the display surface.
    fn composite(&mut self);
    /// Clears both surfaces.
    fn clear(&mut self);
    fn snapshot(&self) -> Option<Self::Snapshot>;
    /// Clears both surfaces, then repaints them from `target`. The repaint
    /// may finish later; the board must skip it if `ticket` is no longer
    /// current by then.
    fn restore(&mut self, target: Restore<Self::Snapshot>, ticket: RestoreTicket);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StrokeState {
    Idle,
    Drawing { anchor: Point },
}

pub struct Sketch<B: Board> {
    board: B,
    history: History<B::Snapshot>,
    stroke: StrokeState,
    tools: ToolConfig,
    background: String,
    gate: RestoreGate,
}

impl<B: Board> Sketch<B> {
    pub fn new(board: B, tools: ToolConfig, background: impl Into<String>) -> Self {
        let mut sketch = Self {
            board,
            history: History::new(),
            stroke: StrokeState::Idle,
            tools,
            background: background.into(),
            gate: RestoreGate::new(),
        };
        sketch.apply_style();
        sketch
    }

    pub fn board(&self) -> &B {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut B {
        &mut self.board
    }

    pub fn history(&self) -> &History<B::Snapshot> {
        &self.history
    }

    pub fn tools(&self) -> &ToolConfig {
        &self.tools
    }

    pub fn background(&self) -> &str {
        &self.background
    }

    pub fn stroke_state(&self) -> StrokeState {
        self.stroke
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.stroke, StrokeState::Drawing { .. })
    }

    // --- Tool state ---

    pub fn set_tools(&mut self, tools: ToolConfig) {
        if self.tools != tools {
            log::debug!("tools {:?}", tools);
        }
        self.tools = tools;
        self.apply_style();
    }

    pub fn set_line_width(&mut self, line_width: f64) {
        self.tools.line_width = line_width;
        self.apply_style();
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.tools.color = color.into();
        self.apply_style();
    }

    pub fn set_shape(&mut self, shape: ShapeMode) {
        self.tools.shape = shape;
    }

    pub fn use_eraser(&mut self) {
        self.tools.pen = PenMode::Eraser;
        self.apply_style();
    }

    pub fn use_pen(&mut self) {
        self.tools.pen = PenMode::Pen;
        self.apply_style();
    }

    fn apply_style(&mut self) {
        let color = self.tools.effective_color(&self.background);
        self.board.set_style(color, self.tools.line_width);
    }

    // --- Strokes ---

    pub fn begin_stroke(&mut self, point: Point) {
        self.apply_style();
        self.board.begin_path(point);
        self.stroke = StrokeState::Drawing { anchor: point };
        self.history.mark_action();
    }

    pub fn extend_stroke(&mut self, point: Point) {
        let StrokeState::Drawing { anchor } = self.stroke else {
            return;
        };
        match self.tools.shape.shape(anchor, point) {
            Some(shape) => self.board.preview_shape(&shape),
            None => self.board.line_to(point),
        }
    }

    /// Commits the stroke in progress. Returns `false` when idle.
    pub fn end_stroke(&mut self) -> bool {
        if !self.is_drawing() {
            return false;
        }
        self.stroke = StrokeState::Idle;
        self.board.composite();
        self.commit();
        true
    }

    // --- One-shot canvas operations ---

    pub fn fill(&mut self) {
        let color = self.tools.color.clone();
        self.board.fill(&color);
        self.board.composite();
        self.commit();
        self.apply_style();
    }

    pub fn reset(&mut self) {
        self.stroke = StrokeState::Idle;
        self.board.clear();
        self.commit();
        self.apply_style();
    }

    /// Pushes the display onto history. A restore still decoding would
    /// paint over what was just committed, so it is dropped.
    fn commit(&mut self) {
        self.gate.supersede();
        match self.board.snapshot() {
            Some(snapshot) => self.history.commit(snapshot),
            None => {
                log::warn!("display snapshot unavailable, history entry skipped");
                self.history.mark_action();
            }
        }
    }

    // --- History ---

    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(target) => {
                self.restore(target);
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(target) => {
                self.restore(target);
                true
            }
            None => false,
        }
    }

    pub fn apply_shortcut(&mut self, shortcut: Shortcut) -> bool {
        match shortcut {
            Shortcut::Undo => self.undo(),
            Shortcut::Redo => self.redo(),
        }
    }

    fn restore(&mut self, target: Restore<B::Snapshot>) {
        let ticket = self.gate.issue();
        log::debug!(
            "restore #{} {}",
            ticket.token(),
            match target {
                Restore::Blank => "blank",
                Restore::Snapshot(_) => "snapshot",
            }
        );
        self.board.restore(target, ticket);
        self.apply_style();
    }
}
