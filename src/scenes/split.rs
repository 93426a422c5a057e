use glam::Vec3;

use crate::config::Settings;
use crate::frame::FrameInfo;
use crate::models::default_light;
use crate::pdb::Molecule;
use crate::scene::Scene;
use crate::traits::SceneProvider;
use crate::types::Camera;

/// Zero-based indices of the hydroxyl group in the bundled ethanol file
const HYDROXYL: [usize; 2] = [7, 8];
/// Final separation between the fragments, in Angstroms
const SPLIT_DISTANCE: f32 = 1.0;

/// Ethanol splitting into an ethyl and a hydroxyl fragment.
///
/// First half of the animation the hydroxyl group drifts up until the
/// fragments are fully separated; second half both fragments spin half a
/// turn around the X axis. A pristine copy is cloned every frame so each
/// frame is a pure function of its index.
pub struct SplitScene {
    pristine: Molecule,
}

impl SplitScene {
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        let mut molecule = Molecule::from_pdb(&settings.pdb_path("ethanol.pdb"))?;
        molecule.center();
        Ok(Self { pristine: molecule })
    }

    pub fn with_molecule(mut molecule: Molecule) -> Self {
        molecule.center();
        Self { pristine: molecule }
    }

    /// Upward offset of the split fragment; ramps linearly over the first
    /// half, then holds
    pub fn split_offset(step: u32, total: u32) -> f32 {
        let half = total as f32 / 2.0;
        SPLIT_DISTANCE * (step as f32 / half).min(1.0)
    }

    /// Rotation angle around X; zero through the first half, then a steady
    /// half turn across the second
    pub fn spin_angle(step: u32, total: u32) -> f32 {
        let half = total / 2;
        if step <= half {
            0.0
        } else {
            std::f32::consts::PI * (step - half) as f32 / (total - half) as f32
        }
    }
}

impl SceneProvider for SplitScene {
    fn frame(&mut self, frame: FrameInfo) -> Scene {
        let mut remainder = self.pristine.clone();
        let mut fragment = remainder.split(&HYDROXYL, "hydroxyl");
        fragment.translate(Vec3::Y * Self::split_offset(frame.number, frame.total));

        let angle = Self::spin_angle(frame.number, frame.total);
        if angle != 0.0 {
            remainder.rotate(Vec3::X, angle);
            fragment.rotate(Vec3::X, angle);
        }

        let camera = Camera::new(Vec3::new(10.0, 0.0, 0.0), Vec3::ZERO);
        let mut objects = vec![default_light().into()];
        objects.extend(remainder.to_objects());
        objects.extend(fragment.to_objects());

        Scene::with_includes(camera, objects, &["colors.inc"])
    }

    fn name(&self) -> &str {
        "split"
    }
}
