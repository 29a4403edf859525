//! Module kinds and the applicability rules between kinds and inputs.

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::source::{ModuleInput, ResultPayload, SourceKind, View};

/// Identifier of a visualization module variant.
///
/// Variants are declared in identifier order so the derived `Ord` matches the
/// lexicographic order of [`ModuleKind::as_str`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum ModuleKind {
    Contour,
    Molecule,
    #[serde(rename = "Orthogonal Slice")]
    OrthogonalSlice,
    Outline,
    Ruler,
    #[serde(rename = "Scale Cube")]
    ScaleCube,
    Slice,
    Threshold,
    Volume,
}

impl ModuleKind {
    /// Every module kind, sorted by identifier.
    pub const ALL: [ModuleKind; 9] = [
        ModuleKind::Contour,
        ModuleKind::Molecule,
        ModuleKind::OrthogonalSlice,
        ModuleKind::Outline,
        ModuleKind::Ruler,
        ModuleKind::ScaleCube,
        ModuleKind::Slice,
        ModuleKind::Threshold,
        ModuleKind::Volume,
    ];

    /// The stable identifier string (e.g. "Scale Cube").
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleKind::Contour => "Contour",
            ModuleKind::Molecule => "Molecule",
            ModuleKind::OrthogonalSlice => "Orthogonal Slice",
            ModuleKind::Outline => "Outline",
            ModuleKind::Ruler => "Ruler",
            ModuleKind::ScaleCube => "Scale Cube",
            ModuleKind::Slice => "Slice",
            ModuleKind::Threshold => "Threshold",
            ModuleKind::Volume => "Volume",
        }
    }

    /// Kind of source this module is rendered from.
    pub fn source_kind(&self) -> SourceKind {
        match self {
            ModuleKind::Molecule => SourceKind::Molecule,
            _ => SourceKind::Data,
        }
    }

    /// Whether this module only handles single-component scalar fields.
    pub fn requires_scalar_field(&self) -> bool {
        matches!(
            self,
            ModuleKind::Contour | ModuleKind::Volume | ModuleKind::Threshold
        )
    }

    /// Whether this module may be attached to `input` and shown in `view`.
    ///
    /// Absence of either endpoint is never applicable. Data modules reject
    /// molecule inputs and vice versa; scalar-only modules reject
    /// multi-component data.
    pub fn is_applicable(
        &self,
        input: Option<ModuleInput<'_>>,
        view: Option<&Rc<dyn View>>,
    ) -> bool {
        let (Some(input), Some(_)) = (input, view) else {
            return false;
        };

        match input {
            ModuleInput::Data(source) => self.accepts_data(source.number_of_components()),
            ModuleInput::Molecule(_) => self.accepts_molecule(),
            ModuleInput::Result(result) => match result.payload() {
                ResultPayload::Image { components } => self.accepts_data(components),
                ResultPayload::Molecule => self.accepts_molecule(),
                ResultPayload::Empty => false,
            },
        }
    }

    /// Applicability to image data with `components` values per voxel,
    /// given that a view is present.
    pub fn accepts_data(&self, components: usize) -> bool {
        if self.source_kind() != SourceKind::Data {
            return false;
        }
        !(components > 1 && self.requires_scalar_field())
    }

    /// Applicability to a molecule, given that a view is present.
    pub fn accepts_molecule(&self) -> bool {
        self.source_kind() == SourceKind::Molecule
    }
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown module identifier
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown module type: {0}")]
pub struct ParseModuleKindError(pub String);

impl FromStr for ModuleKind {
    type Err = ParseModuleKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModuleKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseModuleKindError(s.to_string()))
    }
}
