mod component;
mod layout;
mod render;
pub mod scale;
mod state;

pub use component::ForceGraphCanvas;
