//! Mock sources, views, and modules for factory tests

#![allow(dead_code)]

use std::any::Any;
use std::cell::Cell;
use std::rc::Rc;

use implore_modules::{
    DataSource, Module, ModuleBinding, ModuleError, ModuleIcon, ModuleInput, ModuleKind,
    ModuleResult, MoleculeSource, OperatorResult, OutlineModule, ResultPayload, View,
};

/// Image data with a fixed component count
pub struct MockImage {
    pub components: usize,
}

impl DataSource for MockImage {
    fn number_of_components(&self) -> usize {
        self.components
    }

    fn label(&self) -> &str {
        "tilt_series.emd"
    }
}

pub struct MockMolecule;

impl MoleculeSource for MockMolecule {
    fn atom_count(&self) -> usize {
        64
    }
}

pub struct MockResult(pub ResultPayload);

impl OperatorResult for MockResult {
    fn name(&self) -> &str {
        "reconstruction"
    }

    fn payload(&self) -> ResultPayload {
        self.0
    }
}

/// View that counts render requests
#[derive(Default)]
pub struct CountingView {
    renders: Cell<usize>,
}

impl CountingView {
    pub fn renders(&self) -> usize {
        self.renders.get()
    }
}

impl View for CountingView {
    fn render(&self) {
        self.renders.set(self.renders.get() + 1);
    }
}

pub fn image(components: usize) -> Rc<dyn DataSource> {
    Rc::new(MockImage { components })
}

pub fn molecule() -> Rc<dyn MoleculeSource> {
    Rc::new(MockMolecule)
}

pub fn result(payload: ResultPayload) -> Rc<dyn OperatorResult> {
    Rc::new(MockResult(payload))
}

/// A counting view, plus the same view as a handle the factory accepts
pub fn counting_view() -> (Rc<CountingView>, Rc<dyn View>) {
    let view = Rc::new(CountingView::default());
    let handle: Rc<dyn View> = view.clone();
    (view, handle)
}

thread_local! {
    static LIVE_MODULES: Cell<usize> = Cell::new(0);
    static INITIALIZE_CALLS: Cell<usize> = Cell::new(0);
}

/// Instances of [`InstrumentedOutline`] currently alive on this thread
pub fn live_modules() -> usize {
    LIVE_MODULES.with(Cell::get)
}

/// Calls to [`InstrumentedOutline::initialize`] on this thread
pub fn initialize_calls() -> usize {
    INITIALIZE_CALLS.with(Cell::get)
}

/// Outline that tracks its own lifetime and can be forced to fail
#[derive(Debug)]
pub struct InstrumentedOutline {
    inner: OutlineModule,
    fail: bool,
}

impl InstrumentedOutline {
    pub fn new(fail: bool) -> Self {
        LIVE_MODULES.with(|live| live.set(live.get() + 1));
        Self {
            inner: OutlineModule::default(),
            fail,
        }
    }
}

impl Drop for InstrumentedOutline {
    fn drop(&mut self) {
        LIVE_MODULES.with(|live| live.set(live.get() - 1));
    }
}

impl Module for InstrumentedOutline {
    fn kind(&self) -> ModuleKind {
        ModuleKind::Outline
    }

    fn icon(&self) -> ModuleIcon {
        self.inner.icon()
    }

    fn initialize(
        &mut self,
        input: Option<ModuleInput<'_>>,
        view: Option<&Rc<dyn View>>,
    ) -> ModuleResult<()> {
        INITIALIZE_CALLS.with(|calls| calls.set(calls.get() + 1));
        if self.fail {
            return Err(ModuleError::MissingInput {
                module: ModuleKind::Outline,
            });
        }
        self.inner.initialize(input, view)
    }

    fn binding(&self) -> &ModuleBinding {
        self.inner.binding()
    }

    fn binding_mut(&mut self) -> &mut ModuleBinding {
        self.inner.binding_mut()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
