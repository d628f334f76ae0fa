pub mod engine;
pub mod render_service;

pub use engine::{EngineHandle, HandEngine, Renderer};
pub use render_service::RenderService;
