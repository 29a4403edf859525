//! Error types for implore-modules
//!
//! Registry operations that callers use directly stay value-based
//! (`Option`/`bool`). These types describe *why* something was rejected and
//! surface through [`ModuleFactory::try_create`](crate::ModuleFactory::try_create),
//! module initialization, and configuration loading.

use thiserror::Error;

use crate::kind::ModuleKind;
use crate::source::SourceKind;

/// Reasons a module refuses to bind to an input and view
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModuleError {
    /// No view was supplied
    #[error("{module} requires a view")]
    MissingView { module: ModuleKind },

    /// No input source was supplied
    #[error("{module} requires an input source")]
    MissingInput { module: ModuleKind },

    /// The input is of a kind this module cannot display
    #[error("{module} cannot be attached to a {found} source (expected {expected})")]
    WrongSourceKind {
        module: ModuleKind,
        expected: SourceKind,
        found: SourceKind,
    },

    /// Operator result has not produced any data yet
    #[error("{module} cannot be attached to empty operator result '{result}'")]
    EmptyResult { module: ModuleKind, result: String },

    /// Module only handles single-component scalar fields
    #[error("{module} requires single-component data, source has {components} components")]
    UnsupportedComponents { module: ModuleKind, components: usize },

    /// `initialize` was called on a module that is already bound
    #[error("{module} is already initialized")]
    AlreadyInitialized { module: ModuleKind },
}

/// Errors from the module factory
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FactoryError {
    /// Identifier is not registered
    #[error("Unknown module type: {0}")]
    UnknownModule(String),

    /// The module was allocated but failed to initialize
    #[error("Failed to initialize {kind}: {source}")]
    Initialization {
        kind: ModuleKind,
        #[source]
        source: ModuleError,
    },
}

/// Configuration validation error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A fraction lies outside [0, 1]
    #[error("Value out of range: {field} = {value} (expected 0.0..=1.0)")]
    OutOfRange { field: &'static str, value: f64 },

    /// A length or radius that must be strictly positive
    #[error("Value must be positive: {field} = {value}")]
    NotPositive { field: &'static str, value: f64 },

    /// Lower/upper pair in the wrong order
    #[error("Invalid range for {field}: lower {lower} must be below upper {upper}")]
    InvalidRange {
        field: &'static str,
        lower: f64,
        upper: f64,
    },

    /// Slice plane normal that is zero-length or not finite
    #[error("Slice normal must be finite and non-zero: {normal:?}")]
    DegenerateNormal { normal: [f64; 3] },

    #[error("JSON error: {0}")]
    Json(String),

    #[error("TOML error: {0}")]
    Toml(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Json(err.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::Toml(err.to_string())
    }
}

/// Result type alias for module initialization
pub type ModuleResult<T> = Result<T, ModuleError>;

/// Result type alias for factory operations
pub type FactoryResult<T> = Result<T, FactoryError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_error_display() {
        let err = ModuleError::UnsupportedComponents {
            module: ModuleKind::Volume,
            components: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("Volume"));
        assert!(msg.contains("3 components"));
    }

    #[test]
    fn test_wrong_source_display() {
        let err = ModuleError::WrongSourceKind {
            module: ModuleKind::Molecule,
            expected: SourceKind::Molecule,
            found: SourceKind::Data,
        };
        assert_eq!(
            err.to_string(),
            "Molecule cannot be attached to a data source (expected molecule)"
        );
    }

    #[test]
    fn test_factory_error_source() {
        use std::error::Error as _;

        let err = FactoryError::Initialization {
            kind: ModuleKind::Outline,
            source: ModuleError::MissingView {
                module: ModuleKind::Outline,
            },
        };
        assert!(err.to_string().contains("Outline"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidRange {
            field: "threshold",
            lower: 0.8,
            upper: 0.2,
        };
        assert!(err.to_string().contains("0.8"));
    }
}
