//! implore-modules - Visualization module registry for implore
//!
//! A visualization module (outline, slice, contour, volume, ...) renders one
//! input source into one view. This crate knows which module kinds exist,
//! which of them may be attached to a given input, and how to build one.
//!
//! # Key Components
//!
//! - **ModuleKind**: The closed set of module identifiers ("Outline", "Scale Cube", ...)
//! - **ModuleFactory**: Catalog, applicability checks, and two-phase construction
//! - **Module**: The trait every module kind implements
//! - **ModuleInput**: Data source, molecule source, or operator result
//! - **ModuleConfig**: Default settings for newly created modules
//! - **ModuleFactoryHandle**: Thread-safe catalog and applicability queries for Swift
//!
//! # Example
//!
//! ```ignore
//! let factory = ModuleFactory::new();
//! let input = ModuleInput::Data(&source);
//!
//! for kind in factory.applicable_modules(Some(input), Some(&view)) {
//!     println!("{} ({})", kind, factory.module_icon(kind).unwrap());
//! }
//!
//! let module = factory.create(ModuleKind::Outline, Some(input), Some(&view));
//! ```

pub mod config;
pub mod error;
pub mod factory;
pub mod ffi;
pub mod kind;
pub mod modules;
pub mod source;
pub mod types;

pub use config::ModuleConfig;
pub use error::{
    ConfigError, ConfigResult, FactoryError, FactoryResult, ModuleError, ModuleResult,
};
pub use factory::ModuleFactory;
pub use ffi::{ModuleFactoryErrorFfi, ModuleFactoryHandle, ModuleTypeInfo};
pub use kind::{ModuleKind, ParseModuleKindError};
pub use modules::{
    ContourModule, Module, ModuleBinding, ModuleIcon, MoleculeModule, OrthogonalSliceModule,
    OutlineModule, RulerModule, ScaleCubeModule, SliceModule, ThresholdModule, VolumeModule,
};
pub use source::{
    BoundInput, DataSource, ModuleInput, MoleculeSource, OperatorResult, ResultPayload,
    SourceKind, View,
};
pub use types::{ColorRgb, SliceAxis};

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
