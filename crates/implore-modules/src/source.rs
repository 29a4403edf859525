//! Collaborator interfaces: data sources, molecule sources, operator
//! results, and views.
//!
//! The registry only consults a data source's component count and an
//! operator result's payload kind. Everything else about these objects
//! belongs to the host.

use std::fmt;
use std::rc::{Rc, Weak};

use serde::{Deserialize, Serialize};

/// A volumetric (image) data source
pub trait DataSource {
    /// Number of components per voxel (1 for scalar fields)
    fn number_of_components(&self) -> usize;

    /// Human-readable label
    fn label(&self) -> &str {
        "Data Source"
    }
}

/// A structural (atoms and bonds) data source
pub trait MoleculeSource {
    fn atom_count(&self) -> usize;

    fn label(&self) -> &str {
        "Molecule"
    }
}

/// What an operator result currently holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultPayload {
    /// Image data with the given component count
    Image { components: usize },
    /// Molecule data
    Molecule,
    /// The operator has not produced output yet
    Empty,
}

/// Output of a data operator, usable as an alternate module input
pub trait OperatorResult {
    fn name(&self) -> &str;

    fn payload(&self) -> ResultPayload;
}

/// A rendering surface
pub trait View {
    /// Request a redraw
    fn render(&self);
}

/// Broad class of input a module is rendered from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum SourceKind {
    Data,
    Molecule,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Data => f.write_str("data"),
            SourceKind::Molecule => f.write_str("molecule"),
        }
    }
}

/// Borrowed input presented to the factory.
///
/// Modules keep only weak references to the underlying source; the host
/// retains ownership.
#[derive(Clone, Copy)]
pub enum ModuleInput<'a> {
    Data(&'a Rc<dyn DataSource>),
    Molecule(&'a Rc<dyn MoleculeSource>),
    Result(&'a Rc<dyn OperatorResult>),
}

impl<'a> ModuleInput<'a> {
    /// Source kind presented by this input, or `None` for an empty result
    pub fn source_kind(&self) -> Option<SourceKind> {
        match self {
            ModuleInput::Data(_) => Some(SourceKind::Data),
            ModuleInput::Molecule(_) => Some(SourceKind::Molecule),
            ModuleInput::Result(result) => match result.payload() {
                ResultPayload::Image { .. } => Some(SourceKind::Data),
                ResultPayload::Molecule => Some(SourceKind::Molecule),
                ResultPayload::Empty => None,
            },
        }
    }

    /// Component count for image inputs
    pub fn number_of_components(&self) -> Option<usize> {
        match self {
            ModuleInput::Data(source) => Some(source.number_of_components()),
            ModuleInput::Molecule(_) => None,
            ModuleInput::Result(result) => match result.payload() {
                ResultPayload::Image { components } => Some(components),
                _ => None,
            },
        }
    }

    pub(crate) fn downgrade(&self) -> BoundInput {
        match self {
            ModuleInput::Data(source) => BoundInput::Data(Rc::downgrade(*source)),
            ModuleInput::Molecule(source) => BoundInput::Molecule(Rc::downgrade(*source)),
            ModuleInput::Result(result) => BoundInput::Result(Rc::downgrade(*result)),
        }
    }
}

impl fmt::Debug for ModuleInput<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModuleInput::Data(source) => f
                .debug_struct("Data")
                .field("label", &source.label())
                .field("components", &source.number_of_components())
                .finish(),
            ModuleInput::Molecule(source) => f
                .debug_struct("Molecule")
                .field("label", &source.label())
                .field("atoms", &source.atom_count())
                .finish(),
            ModuleInput::Result(result) => f
                .debug_struct("Result")
                .field("name", &result.name())
                .field("payload", &result.payload())
                .finish(),
        }
    }
}

/// Non-owning reference to the input a module was initialized with
#[derive(Clone)]
pub enum BoundInput {
    Data(Weak<dyn DataSource>),
    Molecule(Weak<dyn MoleculeSource>),
    Result(Weak<dyn OperatorResult>),
}

impl BoundInput {
    /// Whether the host has dropped the underlying source
    pub fn is_dangling(&self) -> bool {
        match self {
            BoundInput::Data(weak) => weak.strong_count() == 0,
            BoundInput::Molecule(weak) => weak.strong_count() == 0,
            BoundInput::Result(weak) => weak.strong_count() == 0,
        }
    }

    pub fn data_source(&self) -> Option<Rc<dyn DataSource>> {
        match self {
            BoundInput::Data(weak) => weak.upgrade(),
            _ => None,
        }
    }

    pub fn molecule_source(&self) -> Option<Rc<dyn MoleculeSource>> {
        match self {
            BoundInput::Molecule(weak) => weak.upgrade(),
            _ => None,
        }
    }

    pub fn operator_result(&self) -> Option<Rc<dyn OperatorResult>> {
        match self {
            BoundInput::Result(weak) => weak.upgrade(),
            _ => None,
        }
    }
}

impl fmt::Debug for BoundInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (variant, dangling) = match self {
            BoundInput::Data(_) => ("Data", self.is_dangling()),
            BoundInput::Molecule(_) => ("Molecule", self.is_dangling()),
            BoundInput::Result(_) => ("Result", self.is_dangling()),
        };
        f.debug_struct(variant).field("dangling", &dangling).finish()
    }
}
