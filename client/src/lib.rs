mod app;
mod dom;
mod error;
mod render;
mod state;
mod toolbar;

pub use app::run;
pub use error::SketchError;
