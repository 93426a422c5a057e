use crate::frame::FrameInfo;
use crate::scene::Scene;

/// Scene construction abstraction
///
/// A provider is handed each frame in order by the render pipeline and
/// returns the complete scene description for that frame. Static scenes
/// return the same description regardless of the frame.
pub trait SceneProvider {
    /// Build the scene for this frame
    fn frame(&mut self, frame: FrameInfo) -> Scene;

    /// Get scene name for output files and logging
    fn name(&self) -> &str {
        "scene"
    }
}
