use glam::Vec3;

use crate::config::Settings;
use crate::frame::FrameInfo;
use crate::models::default_light;
use crate::pdb::Molecule;
use crate::scene::Scene;
use crate::traits::SceneProvider;
use crate::types::Camera;

/// A molecule loaded from a PDB file, centered in the scene and viewed from
/// the +X axis. Static; mainly used for single-frame renders.
pub struct MoleculeScene {
    molecule: Molecule,
}

impl MoleculeScene {
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        let mut molecule = Molecule::from_pdb(&settings.pdb_path("ethanol.pdb"))?;
        molecule.center();
        Ok(Self { molecule })
    }

    pub fn with_molecule(mut molecule: Molecule) -> Self {
        molecule.center();
        Self { molecule }
    }
}

impl SceneProvider for MoleculeScene {
    fn frame(&mut self, _frame: FrameInfo) -> Scene {
        let camera = Camera::new(Vec3::new(10.0, 0.0, 0.0), Vec3::ZERO);

        let mut objects = vec![default_light().into()];
        objects.extend(self.molecule.to_objects());

        Scene::with_includes(camera, objects, &["colors.inc"])
    }

    fn name(&self) -> &str {
        "molecule"
    }
}
