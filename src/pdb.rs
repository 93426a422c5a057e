//! Molecule loading and per-frame manipulation.
//!
//! Parsing is delegated to `pdbtbx`; this module only keeps the ordered atom
//! list and the handful of geometric operations the molecule scenes need
//! (centering, translation, rotation about the centroid, splitting off a
//! fragment) plus the conversion to renderable spheres.

use std::path::Path;

use anyhow::{anyhow, Context};
use glam::{Quat, Vec3};
use pdbtbx::{Element, Format, ReadOptions, StrictnessLevel};

use crate::types::{Finish, Pigment, SceneObject, Sphere, Texture};

/// One atom: element for styling, position in Angstroms
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Atom {
    pub element: Element,
    pub position: Vec3,
}

/// An ordered group of atoms loaded from a PDB file.
///
/// Molecule scenes mutate this in place across frames (or clone a pristine
/// copy per frame when they need positions to stay a pure function of the
/// frame index).
#[derive(Debug, Clone, PartialEq)]
pub struct Molecule {
    pub name: String,
    pub atoms: Vec<Atom>,
}

impl Molecule {
    /// Load all atoms from a PDB file, in file order
    pub fn from_pdb(path: &Path) -> anyhow::Result<Self> {
        let path_str = path.to_string_lossy();
        let (pdb, _errors) = ReadOptions::default()
            .set_format(Format::Pdb)
            .set_level(StrictnessLevel::Loose)
            .read(&*path_str)
            .map_err(|e| anyhow!("failed to parse PDB: {:?}", e))
            .with_context(|| format!("loading molecule from {}", path.display()))?;

        let atoms: Vec<Atom> = pdb
            .atoms()
            .map(|atom| Atom {
                element: atom.element().copied().unwrap_or(Element::C),
                position: Vec3::new(atom.x() as f32, atom.y() as f32, atom.z() as f32),
            })
            .collect();

        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "molecule".to_string());

        Ok(Self { name, atoms })
    }

    pub fn from_atoms(name: &str, atoms: Vec<Atom>) -> Self {
        Self {
            name: name.to_string(),
            atoms,
        }
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Geometric center; the origin for an empty molecule
    pub fn centroid(&self) -> Vec3 {
        if self.atoms.is_empty() {
            return Vec3::ZERO;
        }
        self.atoms.iter().map(|a| a.position).sum::<Vec3>() / self.atoms.len() as f32
    }

    /// Translate so the centroid lands on the origin
    pub fn center(&mut self) {
        let offset = -self.centroid();
        self.translate(offset);
    }

    pub fn translate(&mut self, offset: Vec3) {
        for atom in &mut self.atoms {
            atom.position += offset;
        }
    }

    /// Translate so the centroid lands on `target`
    pub fn move_to(&mut self, target: Vec3) {
        let offset = target - self.centroid();
        self.translate(offset);
    }

    /// Rotate all atoms by `angle` radians around `axis` through the
    /// centroid. A zero axis leaves the molecule unchanged.
    pub fn rotate(&mut self, axis: Vec3, angle: f32) {
        let axis = axis.normalize_or_zero();
        if axis == Vec3::ZERO {
            return;
        }
        let pivot = self.centroid();
        let rotation = Quat::from_axis_angle(axis, angle);
        for atom in &mut self.atoms {
            atom.position = pivot + rotation * (atom.position - pivot);
        }
    }

    /// Remove the indexed atoms into a new molecule named `name`.
    ///
    /// Indices refer to the current atom order; out-of-range indices are
    /// ignored. The remaining atoms keep their relative order.
    pub fn split(&mut self, indices: &[usize], name: &str) -> Molecule {
        let mut picked: Vec<usize> = indices
            .iter()
            .copied()
            .filter(|&i| i < self.atoms.len())
            .collect();
        picked.sort_unstable();
        picked.dedup();

        let mut fragment = Vec::with_capacity(picked.len());
        for &index in picked.iter().rev() {
            fragment.push(self.atoms.remove(index));
        }
        fragment.reverse();

        Molecule::from_atoms(name, fragment)
    }

    /// One styled sphere per atom, CPK colors and radii
    pub fn to_objects(&self) -> Vec<SceneObject> {
        self.atoms
            .iter()
            .map(|atom| {
                let (radius, color) = element_style(atom.element);
                Sphere::new(
                    atom.position,
                    radius,
                    Texture::with_finish(
                        Pigment::solid(color),
                        Finish::phong(0.3).with_ambient(0.2).with_diffuse(0.8),
                    ),
                )
                .into()
            })
            .collect()
    }
}

/// Display radius (Angstroms) and CPK color per element
pub fn element_style(element: Element) -> (f32, [f32; 3]) {
    match element {
        Element::H => (0.6, [1.0, 1.0, 1.0]),
        Element::C => (0.85, [0.3, 0.3, 0.3]),
        Element::N => (0.8, [0.1, 0.1, 0.9]),
        Element::O => (0.75, [0.9, 0.1, 0.1]),
        Element::P => (1.15, [1.0, 0.5, 0.0]),
        Element::S => (1.1, [0.9, 0.9, 0.1]),
        _ => (0.9, [0.9, 0.4, 0.7]),
    }
}
