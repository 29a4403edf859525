//! Registry of visualization module kinds.
//!
//! The factory maps each [`ModuleKind`] to a constructor, answers which
//! kinds may be attached to a given input, and runs the two-phase
//! construction protocol: allocate, then initialize against an input and a
//! view. A module that fails to initialize is dropped before `create`
//! returns; a module that succeeds triggers exactly one render of its view.

use std::any::TypeId;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::config::ModuleConfig;
use crate::error::{ConfigResult, FactoryError, FactoryResult};
use crate::kind::ModuleKind;
use crate::modules::{
    ContourModule, Module, ModuleIcon, MoleculeModule, OrthogonalSliceModule, OutlineModule,
    RulerModule, ScaleCubeModule, SliceModule, ThresholdModule, VolumeModule,
};
use crate::source::{ModuleInput, View};

type Constructor = Box<dyn Fn() -> Box<dyn Module>>;

struct Registration {
    /// Concrete type produced by `constructor`
    type_id: TypeId,
    constructor: Constructor,
}

/// Registry of all available module kinds.
///
/// Built-in modules are registered at construction. The registry holds no
/// reference to any module it hands out.
pub struct ModuleFactory {
    entries: BTreeMap<ModuleKind, Registration>,
}

impl ModuleFactory {
    /// Create a factory with every built-in module using default settings.
    pub fn new() -> Self {
        Self::builtin(&ModuleConfig::default())
    }

    /// Create a factory whose modules start from `config`.
    pub fn with_config(config: ModuleConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self::builtin(&config))
    }

    /// Create an empty factory (for testing)
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    fn builtin(config: &ModuleConfig) -> Self {
        let mut factory = Self::empty();
        factory.register_builtins(config);
        factory
    }

    fn register_builtins(&mut self, config: &ModuleConfig) {
        // Annotations
        let outline = config.outline.clone();
        self.register(move || Box::new(OutlineModule::new(&outline)));
        let ruler = config.ruler.clone();
        self.register(move || Box::new(RulerModule::new(&ruler)));
        let scale_cube = config.scale_cube.clone();
        self.register(move || Box::new(ScaleCubeModule::new(&scale_cube)));

        // Slices
        let slice = config.slice.clone();
        self.register(move || Box::new(SliceModule::new(&slice)));
        let orthogonal_slice = config.orthogonal_slice.clone();
        self.register(move || Box::new(OrthogonalSliceModule::new(&orthogonal_slice)));

        // Scalar fields
        let contour = config.contour.clone();
        self.register(move || Box::new(ContourModule::new(&contour)));
        let volume = config.volume.clone();
        self.register(move || Box::new(VolumeModule::new(&volume)));
        let threshold = config.threshold.clone();
        self.register(move || Box::new(ThresholdModule::new(&threshold)));

        // Molecules
        let molecule = config.molecule.clone();
        self.register(move || Box::new(MoleculeModule::new(&molecule)));
    }

    /// Register a module constructor.
    ///
    /// The constructor is called once here to learn the kind and concrete
    /// type it produces. A later registration for the same kind replaces the
    /// earlier one.
    pub fn register<F>(&mut self, constructor: F)
    where
        F: Fn() -> Box<dyn Module> + 'static,
    {
        let probe = constructor();
        let kind = probe.kind();
        let type_id = concrete_type_id(probe.as_ref());
        drop(probe);

        let registration = Registration {
            type_id,
            constructor: Box::new(constructor),
        };
        if self.entries.insert(kind, registration).is_some() {
            tracing::debug!("Replaced module type {}", kind);
        } else {
            tracing::debug!("Registered module type {}", kind);
        }
    }

    /// All registered module kinds, sorted by identifier.
    pub fn module_types(&self) -> Vec<ModuleKind> {
        // BTreeMap order is identifier order (see `ModuleKind`)
        self.entries.keys().copied().collect()
    }

    /// Identifier strings of all registered module kinds, sorted.
    pub fn module_type_names(&self) -> Vec<&'static str> {
        self.entries.keys().map(|kind| kind.as_str()).collect()
    }

    pub fn contains(&self, kind: ModuleKind) -> bool {
        self.entries.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a module of `kind` may be attached to `input` in `view`.
    ///
    /// See [`ModuleKind::is_applicable`] for the rules. Kinds that are not
    /// registered here are never applicable, so a `true` answer means
    /// [`ModuleFactory::allocate`] can build the module.
    pub fn module_applicable(
        &self,
        kind: ModuleKind,
        input: Option<ModuleInput<'_>>,
        view: Option<&Rc<dyn View>>,
    ) -> bool {
        self.contains(kind) && kind.is_applicable(input, view)
    }

    /// String-keyed variant of [`ModuleFactory::module_applicable`]; unknown
    /// identifiers are never applicable.
    pub fn module_applicable_by_name(
        &self,
        name: &str,
        input: Option<ModuleInput<'_>>,
        view: Option<&Rc<dyn View>>,
    ) -> bool {
        name.parse::<ModuleKind>()
            .map(|kind| self.module_applicable(kind, input, view))
            .unwrap_or(false)
    }

    /// Registered kinds applicable to `input` in `view`, in catalog order.
    pub fn applicable_modules(
        &self,
        input: Option<ModuleInput<'_>>,
        view: Option<&Rc<dyn View>>,
    ) -> Vec<ModuleKind> {
        self.entries
            .keys()
            .copied()
            .filter(|kind| kind.is_applicable(input, view))
            .collect()
    }

    /// Allocate an uninitialized module, or `None` if `kind` is not
    /// registered.
    pub fn allocate(&self, kind: ModuleKind) -> Option<Box<dyn Module>> {
        let registration = self.entries.get(&kind)?;
        Some((registration.constructor)())
    }

    /// Create a module and bind it to `input` and `view`.
    ///
    /// With neither input nor view the module is returned uninitialized, for
    /// reading static properties such as the icon. Otherwise the module is
    /// initialized; on failure it is dropped and `None` is returned, on
    /// success the view is rendered once.
    pub fn create(
        &self,
        kind: ModuleKind,
        input: Option<ModuleInput<'_>>,
        view: Option<&Rc<dyn View>>,
    ) -> Option<Box<dyn Module>> {
        match self.try_create(kind, input, view) {
            Ok(module) => Some(module),
            Err(FactoryError::UnknownModule(name)) => {
                tracing::debug!("Cannot create unregistered module type {}", name);
                None
            }
            Err(err) => {
                tracing::warn!("Module creation failed: {}", err);
                None
            }
        }
    }

    /// String-keyed variant of [`ModuleFactory::create`].
    pub fn create_by_name(
        &self,
        name: &str,
        input: Option<ModuleInput<'_>>,
        view: Option<&Rc<dyn View>>,
    ) -> Option<Box<dyn Module>> {
        match name.parse::<ModuleKind>() {
            Ok(kind) => self.create(kind, input, view),
            Err(err) => {
                tracing::debug!("{}", err);
                None
            }
        }
    }

    /// Like [`ModuleFactory::create`], but reports why creation failed.
    pub fn try_create(
        &self,
        kind: ModuleKind,
        input: Option<ModuleInput<'_>>,
        view: Option<&Rc<dyn View>>,
    ) -> FactoryResult<Box<dyn Module>> {
        let mut module = self
            .allocate(kind)
            .ok_or_else(|| FactoryError::UnknownModule(kind.to_string()))?;

        debug_assert_eq!(
            self.module_type(module.as_ref()),
            Some(kind),
            "constructor registered for {} produced a different module type",
            kind
        );

        if input.is_none() && view.is_none() {
            tracing::debug!("Allocated uninitialized {} module", kind);
            return Ok(module);
        }

        module
            .initialize(input, view)
            .map_err(|source| FactoryError::Initialization { kind, source })?;

        if let Some(view) = view {
            view.render();
        }
        tracing::debug!("Created {} module", kind);
        Ok(module)
    }

    /// Icon of a module kind, read from a throwaway uninitialized instance.
    pub fn module_icon(&self, kind: ModuleKind) -> Option<ModuleIcon> {
        self.create(kind, None, None).map(|module| module.icon())
    }

    /// The registered kind of `module`.
    ///
    /// Returns `None` when the module's concrete type is not the one
    /// registered for the kind it reports.
    pub fn module_type(&self, module: &dyn Module) -> Option<ModuleKind> {
        let kind = module.kind();
        let registration = self.entries.get(&kind)?;
        (registration.type_id == concrete_type_id(module)).then_some(kind)
    }

    /// Identifier string of `module`'s registered kind.
    pub fn module_type_name(&self, module: &dyn Module) -> Option<&'static str> {
        self.module_type(module).map(|kind| kind.as_str())
    }
}

impl Default for ModuleFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ModuleFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleFactory")
            .field("module_types", &self.module_type_names())
            .finish()
    }
}

fn concrete_type_id(module: &dyn Module) -> TypeId {
    module.as_any().type_id()
}
