//! Ball-and-stick rendering of molecule sources.

use std::rc::Rc;

use super::{bind_checked, Module, ModuleBinding, ModuleIcon};
use crate::config::MoleculeConfig;
use crate::error::ModuleResult;
use crate::kind::ModuleKind;
use crate::source::{ModuleInput, MoleculeSource, View};

#[derive(Debug)]
pub struct MoleculeModule {
    binding: ModuleBinding,
    ball_radius: f64,
    bond_radius: f64,
}

impl MoleculeModule {
    pub fn new(config: &MoleculeConfig) -> Self {
        Self {
            binding: ModuleBinding::new(),
            ball_radius: config.ball_radius,
            bond_radius: config.bond_radius,
        }
    }

    pub fn ball_radius(&self) -> f64 {
        self.ball_radius
    }

    pub fn bond_radius(&self) -> f64 {
        self.bond_radius
    }

    /// Non-positive radii are ignored
    pub fn set_radii(&mut self, ball_radius: f64, bond_radius: f64) {
        if ball_radius > 0.0 {
            self.ball_radius = ball_radius;
        }
        if bond_radius > 0.0 {
            self.bond_radius = bond_radius;
        }
    }

    /// The bound molecule source, if bound directly to one that is still alive
    pub fn molecule_source(&self) -> Option<Rc<dyn MoleculeSource>> {
        self.binding.input()?.molecule_source()
    }
}

impl Default for MoleculeModule {
    fn default() -> Self {
        Self::new(&MoleculeConfig::default())
    }
}

impl Module for MoleculeModule {
    fn kind(&self) -> ModuleKind {
        ModuleKind::Molecule
    }

    fn icon(&self) -> ModuleIcon {
        ModuleIcon::new("atom")
    }

    fn initialize(
        &mut self,
        input: Option<ModuleInput<'_>>,
        view: Option<&Rc<dyn View>>,
    ) -> ModuleResult<()> {
        let kind = self.kind();
        bind_checked(&mut self.binding, kind, input, view)
    }

    module_accessors!();
}
