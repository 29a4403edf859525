//! Visualization modules.
//!
//! A module renders one input source into one view. Modules are built in two
//! phases: a cheap, infallible allocation from configuration, followed by
//! [`Module::initialize`], which binds the input and view or reports why it
//! cannot.
//!
//! # Key Components
//!
//! - [`Module`]: The trait every module kind implements
//! - [`ModuleBinding`]: Input/view state shared by all module kinds
//! - [`ModuleIcon`]: Static icon of a module kind

/// Implements the boilerplate accessors of [`Module`] for a struct with a
/// `binding: ModuleBinding` field.
macro_rules! module_accessors {
    () => {
        fn binding(&self) -> &$crate::modules::ModuleBinding {
            &self.binding
        }

        fn binding_mut(&mut self) -> &mut $crate::modules::ModuleBinding {
            &mut self.binding
        }

        fn as_any(&self) -> &dyn ::std::any::Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
            self
        }
    };
}

mod annotation;
mod molecule;
mod scalar;
mod slice;

pub use annotation::{OutlineModule, RulerModule, ScaleCubeModule};
pub use molecule::MoleculeModule;
pub use scalar::{ContourModule, ThresholdModule, VolumeModule};
pub use slice::{OrthogonalSliceModule, SliceModule};

use std::any::Any;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::error::{ModuleError, ModuleResult};
use crate::kind::ModuleKind;
use crate::source::{BoundInput, ModuleInput, View};

/// Icon of a module kind, as an SF Symbol name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModuleIcon(&'static str);

impl ModuleIcon {
    pub const fn new(symbol: &'static str) -> Self {
        Self(symbol)
    }

    pub fn symbol(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ModuleIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// The core trait all visualization modules implement.
pub trait Module: fmt::Debug {
    /// The kind this module was registered as
    fn kind(&self) -> ModuleKind;

    /// Static icon; valid on uninitialized modules
    fn icon(&self) -> ModuleIcon;

    /// Bind the module to `input` and `view`.
    ///
    /// Called at most once per instance. On failure the module is left
    /// unbound and should be dropped.
    fn initialize(
        &mut self,
        input: Option<ModuleInput<'_>>,
        view: Option<&Rc<dyn View>>,
    ) -> ModuleResult<()>;

    fn binding(&self) -> &ModuleBinding;

    fn binding_mut(&mut self) -> &mut ModuleBinding;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Display label (the module identifier)
    fn label(&self) -> &'static str {
        self.kind().as_str()
    }

    fn is_initialized(&self) -> bool {
        self.binding().is_bound()
    }

    fn visible(&self) -> bool {
        self.binding().visible()
    }

    fn set_visible(&mut self, visible: bool) {
        self.binding_mut().set_visible(visible);
    }

    /// The view this module renders into, if it is still alive
    fn view(&self) -> Option<Rc<dyn View>> {
        self.binding().view()
    }
}

impl dyn Module {
    pub fn downcast_ref<T: Module + 'static>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    pub fn downcast_mut<T: Module + 'static>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }

    pub fn is<T: Module + 'static>(&self) -> bool {
        self.as_any().is::<T>()
    }
}

/// Input and view a module is bound to.
///
/// Both references are weak: the host owns sources and views.
pub struct ModuleBinding {
    input: Option<BoundInput>,
    view: Option<Weak<dyn View>>,
    visible: bool,
}

impl ModuleBinding {
    pub fn new() -> Self {
        Self {
            input: None,
            view: None,
            visible: true,
        }
    }

    /// Check the preconditions shared by every module kind and return the
    /// present input and view.
    ///
    /// Nothing is recorded; call [`ModuleBinding::bind`] once the module's
    /// own checks have passed.
    pub fn check<'a, 'v>(
        &self,
        module: ModuleKind,
        input: Option<ModuleInput<'a>>,
        view: Option<&'v Rc<dyn View>>,
    ) -> ModuleResult<(ModuleInput<'a>, &'v Rc<dyn View>)> {
        if self.is_bound() {
            return Err(ModuleError::AlreadyInitialized { module });
        }
        let view = view.ok_or(ModuleError::MissingView { module })?;
        let input = input.ok_or(ModuleError::MissingInput { module })?;

        let expected = module.source_kind();
        match input.source_kind() {
            Some(found) if found == expected => Ok((input, view)),
            Some(found) => Err(ModuleError::WrongSourceKind {
                module,
                expected,
                found,
            }),
            None => {
                let result = match input {
                    ModuleInput::Result(result) => result.name().to_string(),
                    _ => String::new(),
                };
                Err(ModuleError::EmptyResult { module, result })
            }
        }
    }

    /// Record the (already checked) input and view.
    pub fn bind(&mut self, input: ModuleInput<'_>, view: &Rc<dyn View>) {
        self.input = Some(input.downgrade());
        self.view = Some(Rc::downgrade(view));
    }

    pub fn is_bound(&self) -> bool {
        self.input.is_some() && self.view.is_some()
    }

    pub fn input(&self) -> Option<&BoundInput> {
        self.input.as_ref()
    }

    pub fn view(&self) -> Option<Rc<dyn View>> {
        self.view.as_ref().and_then(Weak::upgrade)
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

impl Default for ModuleBinding {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ModuleBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleBinding")
            .field("input", &self.input)
            .field("view", &self.view.as_ref().map(|v| v.strong_count() > 0))
            .field("visible", &self.visible)
            .finish()
    }
}

/// Shared `initialize` for modules whose only requirement is the common one.
fn bind_checked(
    binding: &mut ModuleBinding,
    module: ModuleKind,
    input: Option<ModuleInput<'_>>,
    view: Option<&Rc<dyn View>>,
) -> ModuleResult<()> {
    let (input, view) = binding.check(module, input, view)?;
    binding.bind(input, view);
    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::cell::Cell;
    use std::rc::Rc;

    use crate::source::{DataSource, MoleculeSource, OperatorResult, ResultPayload, View};

    pub struct Image(pub usize);

    impl DataSource for Image {
        fn number_of_components(&self) -> usize {
            self.0
        }
    }

    pub struct Atoms;

    impl MoleculeSource for Atoms {
        fn atom_count(&self) -> usize {
            12
        }
    }

    pub struct Output(pub ResultPayload);

    impl OperatorResult for Output {
        fn name(&self) -> &str {
            "output"
        }

        fn payload(&self) -> ResultPayload {
            self.0
        }
    }

    #[derive(Default)]
    pub struct CountingView {
        pub renders: Cell<usize>,
    }

    impl View for CountingView {
        fn render(&self) {
            self.renders.set(self.renders.get() + 1);
        }
    }

    pub fn image(components: usize) -> Rc<dyn DataSource> {
        Rc::new(Image(components))
    }

    pub fn atoms() -> Rc<dyn MoleculeSource> {
        Rc::new(Atoms)
    }

    pub fn output(payload: ResultPayload) -> Rc<dyn OperatorResult> {
        Rc::new(Output(payload))
    }

    pub fn view() -> Rc<dyn View> {
        Rc::new(CountingView::default())
    }
}
