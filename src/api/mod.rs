pub mod generate;
pub mod health;
pub mod index;

pub use generate::{handle_generate, GenerateRequest, __path_handle_generate};
pub use health::{handle_health, HealthResponse, __path_handle_health};
pub use index::handle_index;
