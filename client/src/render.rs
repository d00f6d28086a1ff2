use std::f64::consts::PI;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Event, HtmlCanvasElement, HtmlImageElement};

use sketchpad_shared::{Board, Point, Restore, RestoreTicket, Shape};

use crate::error::SketchError;

/// Two stacked canvases of the same bitmap size. The drawing canvas sits on
/// top and shows the stroke in progress; the display canvas accumulates
/// committed content. Snapshots are PNG data URLs of the display canvas.
pub struct CanvasBoard {
    draw_canvas: HtmlCanvasElement,
    draw_ctx: CanvasRenderingContext2d,
    display_canvas: HtmlCanvasElement,
    display_ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, SketchError> {
    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| SketchError::MissingContext(canvas.id()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| SketchError::MissingContext(canvas.id()))?;
    ctx.set_line_cap("round");
    ctx.set_line_join("round");
    Ok(ctx)
}

fn clear_surface(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.clear_rect(0.0, 0.0, width, height);
}

impl CanvasBoard {
    pub fn new(
        draw_canvas: HtmlCanvasElement,
        display_canvas: HtmlCanvasElement,
        width: u32,
        height: u32,
    ) -> Result<Self, SketchError> {
        // Resizing a canvas resets its context, so size first.
        for canvas in [&draw_canvas, &display_canvas] {
            canvas.set_width(width);
            canvas.set_height(height);
        }
        let draw_ctx = context_2d(&draw_canvas)?;
        let display_ctx = context_2d(&display_canvas)?;
        Ok(Self {
            draw_canvas,
            draw_ctx,
            display_canvas,
            display_ctx,
            width: f64::from(width),
            height: f64::from(height),
        })
    }

    fn stroke_shape(&self, shape: &Shape) {
        let ctx = &self.draw_ctx;
        match *shape {
            Shape::Rectangle {
                origin,
                width,
                height,
            } => {
                ctx.begin_path();
                ctx.stroke_rect(origin.x, origin.y, width, height);
            }
            Shape::Ellipse {
                center,
                radius_x,
                radius_y,
            } => {
                ctx.begin_path();
                if let Err(error) =
                    ctx.ellipse(center.x, center.y, radius_x, radius_y, 0.0, 0.0, 2.0 * PI)
                {
                    log::warn!("ellipse rejected: {error:?}");
                    return;
                }
                ctx.stroke();
            }
            Shape::Triangle {
                apex,
                first,
                second,
            } => {
                ctx.begin_path();
                ctx.move_to(apex.x, apex.y);
                ctx.line_to(first.x, first.y);
                ctx.line_to(second.x, second.y);
                ctx.close_path();
                ctx.stroke();
            }
        }
    }
}

impl Board for CanvasBoard {
    type Snapshot = String;

    fn set_style(&mut self, color: &str, line_width: f64) {
        self.draw_ctx.set_stroke_style_str(color);
        self.draw_ctx.set_fill_style_str(color);
        self.draw_ctx.set_line_width(line_width);
    }

    fn begin_path(&mut self, at: Point) {
        self.draw_ctx.begin_path();
        self.draw_ctx.move_to(at.x, at.y);
    }

    fn line_to(&mut self, point: Point) {
        self.draw_ctx.line_to(point.x, point.y);
        self.draw_ctx.stroke();
    }

    fn preview_shape(&mut self, shape: &Shape) {
        clear_surface(&self.draw_ctx, self.width, self.height);
        self.stroke_shape(shape);
    }

    fn fill(&mut self, color: &str) {
        self.draw_ctx.set_fill_style_str(color);
        self.draw_ctx.fill_rect(0.0, 0.0, self.width, self.height);
    }

    fn composite(&mut self) {
        if let Err(error) = self
            .display_ctx
            .draw_image_with_html_canvas_element(&self.draw_canvas, 0.0, 0.0)
        {
            log::warn!("composite failed: {error:?}");
        }
    }

    fn clear(&mut self) {
        self.draw_ctx.begin_path();
        clear_surface(&self.draw_ctx, self.width, self.height);
        clear_surface(&self.display_ctx, self.width, self.height);
    }

    fn snapshot(&self) -> Option<String> {
        match self.display_canvas.to_data_url() {
            Ok(url) => Some(url),
            Err(error) => {
                log::warn!("snapshot failed: {error:?}");
                None
            }
        }
    }

    fn restore(&mut self, target: Restore<String>, ticket: RestoreTicket) {
        self.clear();
        let Restore::Snapshot(url) = target else {
            return;
        };
        let image = match HtmlImageElement::new() {
            Ok(image) => image,
            Err(error) => {
                log::warn!("restore #{} could not create image: {error:?}", ticket.token());
                return;
            }
        };

        // Exactly one of `load`/`error` fires, so a single one-shot handler
        // serves both and is freed after it runs.
        let started = js_sys::Date::now();
        let settle = {
            let image = image.clone();
            let draw_ctx = self.draw_ctx.clone();
            let display_ctx = self.display_ctx.clone();
            let (width, height) = (self.width, self.height);
            Closure::once_into_js(move |event: Event| {
                if event.type_() == "error" {
                    log::warn!("restore #{} snapshot failed to decode", ticket.token());
                    return;
                }
                if !ticket.is_current() {
                    log::debug!("restore #{} superseded, dropped", ticket.token());
                    return;
                }
                for ctx in [&display_ctx, &draw_ctx] {
                    clear_surface(ctx, width, height);
                    if let Err(error) = ctx.draw_image_with_html_image_element(&image, 0.0, 0.0) {
                        log::warn!("restore #{} paint failed: {error:?}", ticket.token());
                    }
                }
                draw_ctx.begin_path();
                log::debug!(
                    "restore #{} painted after {:.1}ms",
                    ticket.token(),
                    js_sys::Date::now() - started
                );
            })
        };
        image.set_onload(Some(settle.unchecked_ref()));
        image.set_onerror(Some(settle.unchecked_ref()));
        image.set_src(&url);
    }
}
