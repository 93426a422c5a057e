mod axes;
mod bounce;
mod common;
mod composed;
mod molecule;
mod orbit;
mod slide;
mod split;
mod waveform;

pub use axes::AxesScene;
pub use bounce::BounceScene;
pub use common::legend;
pub use composed::ComposedScene;
pub use molecule::MoleculeScene;
pub use orbit::OrbitScene;
pub use slide::SlideScene;
pub use split::SplitScene;
pub use waveform::WaveformScene;

use anyhow::bail;

use crate::config::Settings;
use crate::traits::SceneProvider;

/// Names accepted by `create_scene`, in catalog order
pub const SCENE_NAMES: &[&str] = &[
    "axes",
    "composed",
    "bounce",
    "waveform",
    "slide",
    "orbit",
    "molecule",
    "split",
];

/// Look up a scene provider by name
pub fn create_scene(name: &str, settings: &Settings) -> anyhow::Result<Box<dyn SceneProvider>> {
    Ok(match name {
        "axes" => Box::new(AxesScene::new()),
        "composed" => Box::new(ComposedScene::new()),
        "bounce" => Box::new(BounceScene::new()),
        "waveform" => Box::new(WaveformScene::new()),
        "slide" => Box::new(SlideScene::new()),
        "orbit" => Box::new(OrbitScene::new()),
        "molecule" => Box::new(MoleculeScene::new(settings)?),
        "split" => Box::new(SplitScene::new(settings)?),
        other => bail!(
            "unknown scene '{}', available: {}",
            other,
            SCENE_NAMES.join(", ")
        ),
    })
}
