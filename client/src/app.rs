use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

use sketchpad_shared::{Shortcut, Sketch};

use crate::dom::{debug_enabled, get_element, mouse_point, read_config, touch_point};
use crate::error::SketchError;
use crate::render::CanvasBoard;
use crate::state::State;
use crate::toolbar::Toolbar;

fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), SketchError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn init_logging(window: &web_sys::Window) {
    let level = if debug_enabled(window) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if console_log::init_with_level(level).is_err() {
        web_sys::console::warn_1(&"Logger already installed".into());
    }
}

#[wasm_bindgen(start)]
pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or(SketchError::MissingWindow)?;
    let document = window.document().ok_or(SketchError::MissingDocument)?;
    init_logging(&window);

    if document.ready_state() == "complete" {
        return start_app().map_err(JsValue::from);
    }

    let started = Rc::new(Cell::new(false));
    listen(&window, "load", move |_| {
        if started.replace(true) {
            return;
        }
        if let Err(error) = start_app() {
            log::error!("{error}");
        }
    })?;

    Ok(())
}

fn start_app() -> Result<(), SketchError> {
    let window = web_sys::window().ok_or(SketchError::MissingWindow)?;
    let document = window.document().ok_or(SketchError::MissingDocument)?;

    let config = read_config(&document)?;
    let draw_canvas: HtmlCanvasElement = get_element(&document, &config.ids.draw_canvas)?;
    let display_canvas: HtmlCanvasElement = get_element(&document, &config.ids.display_canvas)?;
    let board = CanvasBoard::new(
        draw_canvas.clone(),
        display_canvas,
        config.width,
        config.height,
    )?;

    let toolbar = Toolbar::find(&document, &config.ids);
    let tools = toolbar.read_tool_config(&config.tools);
    let state = Rc::new(RefCell::new(State {
        sketch: Sketch::new(board, tools, config.background.clone()),
        toolbar,
    }));
    state.borrow().sync_history();

    log::info!(
        "Sketchpad ready {}x{} canvas=#{} display=#{}",
        config.width,
        config.height,
        config.ids.draw_canvas,
        config.ids.display_canvas
    );
    log::debug!("initial tools {:?}", state.borrow().sketch.tools());

    // Stroke start and motion are canvas-scoped.
    {
        let down_state = state.clone();
        let canvas = draw_canvas.clone();
        listen(&draw_canvas, "mousedown", move |event: Event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            if event.buttons() != 1 {
                return;
            }
            let Some(point) = mouse_point(&canvas, event) else {
                return;
            };
            let mut state = down_state.borrow_mut();
            state.sketch.begin_stroke(point);
            state.sync_history();
        })?;
    }

    {
        let move_state = state.clone();
        let canvas = draw_canvas.clone();
        listen(&draw_canvas, "mousemove", move |event: Event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let mut state = move_state.borrow_mut();
            if !state.sketch.is_drawing() {
                return;
            }
            if let Some(point) = mouse_point(&canvas, event) {
                state.sketch.extend_stroke(point);
            }
        })?;
    }

    {
        let down_state = state.clone();
        let canvas = draw_canvas.clone();
        listen(&draw_canvas, "touchstart", move |event: Event| {
            let Some(event) = event.dyn_ref::<TouchEvent>() else {
                return;
            };
            let Some(point) = touch_point(&canvas, event) else {
                return;
            };
            let mut state = down_state.borrow_mut();
            state.sketch.begin_stroke(point);
            state.sync_history();
        })?;
    }

    {
        let move_state = state.clone();
        let canvas = draw_canvas.clone();
        listen(&draw_canvas, "touchmove", move |event: Event| {
            let Some(event) = event.dyn_ref::<TouchEvent>() else {
                return;
            };
            let mut state = move_state.borrow_mut();
            if !state.sketch.is_drawing() {
                return;
            }
            if let Some(point) = touch_point(&canvas, event) {
                state.sketch.extend_stroke(point);
            }
        })?;
    }

    // Releases are also heard on the window so a stroke dragged off the
    // canvas still ends.
    let canvas_target: &EventTarget = &draw_canvas;
    let window_target: &EventTarget = &window;
    let end_targets = [
        (canvas_target, "touchcancel"),
        (window_target, "mouseup"),
        (window_target, "touchend"),
    ];
    for (target, name) in end_targets {
        let end_state = state.clone();
        listen(target, name, move |_| {
            let mut state = end_state.borrow_mut();
            if state.sketch.end_stroke() {
                state.sync_history();
            }
        })?;
    }

    if config.shortcuts {
        let key_state = state.clone();
        listen(&window, "keydown", move |event: Event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let Some(shortcut) =
                Shortcut::from_key(&event.key(), event.ctrl_key(), event.meta_key())
            else {
                return;
            };
            event.prevent_default();
            let mut state = key_state.borrow_mut();
            state.sketch.apply_shortcut(shortcut);
            state.sync_history();
        })?;
    }

    let inputs: Vec<_> = state.borrow().toolbar.inputs().cloned().collect();
    for input in inputs {
        for name in ["input", "change"] {
            let tool_state = state.clone();
            listen(&input, name, move |_| {
                tool_state.borrow_mut().refresh_tools();
            })?;
        }
    }

    let buttons = {
        let state = state.borrow();
        let toolbar = &state.toolbar;
        [
            (toolbar.undo.clone(), Action::Undo),
            (toolbar.redo.clone(), Action::Redo),
            (toolbar.reset.clone(), Action::Reset),
            (toolbar.fill.clone(), Action::Fill),
        ]
    };
    for (button, action) in buttons {
        let Some(button) = button else {
            continue;
        };
        let click_state = state.clone();
        listen(&button, "click", move |_| {
            let mut state = click_state.borrow_mut();
            match action {
                Action::Undo => {
                    state.sketch.undo();
                }
                Action::Redo => {
                    state.sketch.redo();
                }
                Action::Reset => state.sketch.reset(),
                Action::Fill => state.sketch.fill(),
            }
            state.sync_history();
        })?;
    }

    Ok(())
}

#[derive(Clone, Copy)]
enum Action {
    Undo,
    Redo,
    Reset,
    Fill,
}
