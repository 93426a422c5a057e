use std::path::Path;

use glam::Vec3;
use pdbtbx::Element;
use povanim::config::Settings;
use povanim::frame::FrameRange;
use povanim::pdb::Molecule;
use povanim::scenes::{MoleculeScene, SplitScene};
use povanim::traits::SceneProvider;
use povanim::types::SceneObject;

#[cfg(test)]
mod molecule_tests {
    use super::*;

    const ETHANOL: &str = "assets/pdb/ethanol.pdb";

    #[test]
    fn test_load_bundled_ethanol() {
        let mol = Molecule::from_pdb(Path::new(ETHANOL)).unwrap();
        assert_eq!(mol.len(), 9);
        assert_eq!(mol.name, "ethanol");
        // hydroxyl group sits at the end of the file
        assert_eq!(mol.atoms[7].element, Element::O);
        assert_eq!(mol.atoms[8].element, Element::H);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = Molecule::from_pdb(Path::new("assets/pdb/missing.pdb")).unwrap_err();
        assert!(format!("{:#}", err).contains("missing.pdb"));
    }

    #[test]
    fn test_split_scene_separates_hydroxyl() {
        let settings = Settings::default();
        let mut scene = SplitScene::new(&settings).unwrap();
        let range = FrameRange::new(settings.n_frames(), settings.frame_rate);

        let before = scene.frame(range.frame(0));
        let after = scene.frame(range.frame(settings.n_frames() / 2));
        // same atom count either way: one light plus nine spheres
        assert_eq!(before.object_count(), 10);
        assert_eq!(after.object_count(), 10);

        // the hydroxyl spheres moved up by the full split distance
        let top = |scene: &povanim::Scene| {
            scene
                .objects
                .iter()
                .filter_map(|o| match o {
                    SceneObject::Sphere(s) => Some(s.center.y),
                    _ => None,
                })
                .fold(f32::MIN, f32::max)
        };
        assert!(top(&after) > top(&before) + 0.1);
    }

    #[test]
    fn test_molecule_scene_centers_the_molecule() {
        let settings = Settings::default();
        let mut scene = MoleculeScene::new(&settings).unwrap();
        let built = scene.frame(FrameRange::new(1, 20.0).frame(0));

        let centers: Vec<Vec3> = built
            .objects
            .iter()
            .filter_map(|o| match o {
                SceneObject::Sphere(s) => Some(s.center),
                _ => None,
            })
            .collect();
        assert_eq!(centers.len(), 9);
        let centroid = centers.iter().sum::<Vec3>() / centers.len() as f32;
        assert!(centroid.length() < 1e-4, "centroid off origin: {}", centroid);
    }
}
