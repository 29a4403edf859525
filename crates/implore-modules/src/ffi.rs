//! FFI bindings for the module registry.
//!
//! Modules are bound to `Rc` handles and stay on the Rust side. This handle
//! gives Swift the catalog, icons, and the applicability rules keyed by
//! plain values (component count, molecule or not) so it can build menus.

use crate::config::ModuleConfig;
use crate::error::ConfigError;
use crate::factory::ModuleFactory;
use crate::kind::ModuleKind;

/// A registered module kind with its icon.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct ModuleTypeInfo {
    pub kind: ModuleKind,

    /// Stable identifier, e.g. "Scale Cube"
    pub name: String,

    /// SF Symbol name
    pub icon: String,
}

/// FFI-safe error type for registry construction.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum ModuleFactoryErrorFfi {
    /// The configuration could not be parsed or failed validation
    #[error("Invalid module configuration: {message}")]
    InvalidConfig { message: String },
}

impl From<ConfigError> for ModuleFactoryErrorFfi {
    fn from(err: ConfigError) -> Self {
        ModuleFactoryErrorFfi::InvalidConfig {
            message: err.to_string(),
        }
    }
}

/// Thread-safe, read-only view of a module registry.
///
/// The catalog is captured when the handle is built; the registry itself is
/// not shared across threads.
#[cfg_attr(feature = "uniffi", derive(uniffi::Object))]
pub struct ModuleFactoryHandle {
    catalog: Vec<ModuleTypeInfo>,
}

#[cfg_attr(feature = "uniffi", uniffi::export)]
impl ModuleFactoryHandle {
    /// Create a handle for all built-in modules with default settings.
    #[cfg_attr(feature = "uniffi", uniffi::constructor)]
    pub fn new() -> Self {
        Self::from_factory(&ModuleFactory::new())
    }

    /// Create a handle from a JSON `ModuleConfig`.
    #[cfg_attr(feature = "uniffi", uniffi::constructor)]
    pub fn from_config_json(json: String) -> Result<Self, ModuleFactoryErrorFfi> {
        let config = ModuleConfig::from_json(&json)?;
        Ok(Self::from_factory(&ModuleFactory::with_config(config)?))
    }

    /// Create a handle from a TOML `ModuleConfig`.
    #[cfg_attr(feature = "uniffi", uniffi::constructor)]
    pub fn from_config_toml(toml: String) -> Result<Self, ModuleFactoryErrorFfi> {
        let config = ModuleConfig::from_toml(&toml)?;
        Ok(Self::from_factory(&ModuleFactory::with_config(config)?))
    }

    /// All registered module kinds, sorted by identifier.
    pub fn module_types(&self) -> Vec<ModuleTypeInfo> {
        self.catalog.clone()
    }

    pub fn module_type_names(&self) -> Vec<String> {
        self.catalog.iter().map(|info| info.name.clone()).collect()
    }

    /// Icon of the module with identifier `name`.
    pub fn module_icon(&self, name: String) -> Option<String> {
        self.find(&name).map(|info| info.icon.clone())
    }

    /// Whether module `name` may show image data with `components` values
    /// per voxel. A view is assumed to be present.
    pub fn module_applicable_to_data(&self, name: String, components: u32) -> bool {
        self.find(&name)
            .is_some_and(|info| info.kind.accepts_data(components as usize))
    }

    /// Whether module `name` may show a molecule. A view is assumed to be
    /// present.
    pub fn module_applicable_to_molecule(&self, name: String) -> bool {
        self.find(&name)
            .is_some_and(|info| info.kind.accepts_molecule())
    }

    /// Identifiers of modules applicable to image data, in catalog order.
    pub fn applicable_to_data(&self, components: u32) -> Vec<String> {
        self.names_where(|kind| kind.accepts_data(components as usize))
    }

    /// Identifiers of modules applicable to a molecule, in catalog order.
    pub fn applicable_to_molecule(&self) -> Vec<String> {
        self.names_where(ModuleKind::accepts_molecule)
    }

    /// Get the total number of registered module kinds.
    pub fn count(&self) -> u32 {
        self.catalog.len() as u32
    }
}

impl ModuleFactoryHandle {
    /// Capture the catalog of `factory`.
    pub fn from_factory(factory: &ModuleFactory) -> Self {
        let catalog = factory
            .module_types()
            .into_iter()
            .filter_map(|kind| {
                let icon = factory.module_icon(kind)?;
                Some(ModuleTypeInfo {
                    kind,
                    name: kind.as_str().to_string(),
                    icon: icon.symbol().to_string(),
                })
            })
            .collect();
        Self { catalog }
    }

    fn find(&self, name: &str) -> Option<&ModuleTypeInfo> {
        self.catalog.iter().find(|info| info.name == name)
    }

    fn names_where(&self, predicate: impl Fn(&ModuleKind) -> bool) -> Vec<String> {
        self.catalog
            .iter()
            .filter(|info| predicate(&info.kind))
            .map(|info| info.name.clone())
            .collect()
    }
}

impl Default for ModuleFactoryHandle {
    fn default() -> Self {
        Self::new()
    }
}
