mod scene;

pub use scene::SceneProvider;
