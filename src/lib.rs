pub mod anim;
pub mod cli;
pub mod config;
pub mod frame;
pub mod models;
pub mod pdb;
pub mod render;
pub mod scene;
pub mod scenes;
pub mod sdl;
pub mod traits;
pub mod types;

// Re-export the pieces scene scripts touch on every frame
pub use frame::{FrameInfo, FrameRange};
pub use scene::Scene;
pub use traits::SceneProvider;
