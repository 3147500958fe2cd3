pub mod angle;
pub mod camera;
pub mod config;
pub mod projector;
pub mod scene;
pub mod trail;
pub mod zoom;

pub use scene::{Mode, PointerKind, RenderOutput, Scene};
