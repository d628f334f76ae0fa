pub mod render_spec;

pub use render_spec::RenderSpec;
