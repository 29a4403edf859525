//! Slice modules: arbitrary-plane and axis-aligned slices.

use std::rc::Rc;

use super::{bind_checked, Module, ModuleBinding, ModuleIcon};
use crate::config::{OrthogonalSliceConfig, SliceConfig};
use crate::error::ModuleResult;
use crate::kind::ModuleKind;
use crate::source::{ModuleInput, View};
use crate::types::{normalize, SliceAxis};

/// Slice through the volume along an arbitrary plane
#[derive(Debug)]
pub struct SliceModule {
    binding: ModuleBinding,
    normal: [f64; 3],
    position: f64,
}

impl SliceModule {
    pub fn new(config: &SliceConfig) -> Self {
        Self {
            binding: ModuleBinding::new(),
            normal: normalize(config.normal).unwrap_or([0.0, 0.0, 1.0]),
            position: config.position,
        }
    }

    /// Unit normal of the slice plane
    pub fn normal(&self) -> [f64; 3] {
        self.normal
    }

    /// Zero-length normals are ignored
    pub fn set_normal(&mut self, normal: [f64; 3]) {
        if let Some(unit) = normalize(normal) {
            self.normal = unit;
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn set_position(&mut self, position: f64) {
        self.position = position.clamp(0.0, 1.0);
    }
}

impl Default for SliceModule {
    fn default() -> Self {
        Self::new(&SliceConfig::default())
    }
}

impl Module for SliceModule {
    fn kind(&self) -> ModuleKind {
        ModuleKind::Slice
    }

    fn icon(&self) -> ModuleIcon {
        ModuleIcon::new("square.split.diagonal")
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

/// Slice perpendicular to one of the data axes
#[derive(Debug)]
pub struct OrthogonalSliceModule {
    binding: ModuleBinding,
    axis: SliceAxis,
    position: f64,
}

impl OrthogonalSliceModule {
    pub fn new(config: &OrthogonalSliceConfig) -> Self {
        Self {
            binding: ModuleBinding::new(),
            axis: config.axis,
            position: config.position,
        }
    }

    pub fn axis(&self) -> SliceAxis {
        self.axis
    }

    pub fn set_axis(&mut self, axis: SliceAxis) {
        self.axis = axis;
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn set_position(&mut self, position: f64) {
        self.position = position.clamp(0.0, 1.0);
    }

    /// Slice index for an axis with `extent` samples
    pub fn slice_index(&self, extent: usize) -> usize {
        if extent == 0 {
            return 0;
        }
        let last = (extent - 1) as f64;
        (self.position * last).round() as usize
    }
}

impl Default for OrthogonalSliceModule {
    fn default() -> Self {
        Self::new(&OrthogonalSliceConfig::default())
    }
}

impl Module for OrthogonalSliceModule {
    fn kind(&self) -> ModuleKind {
        ModuleKind::OrthogonalSlice
    }

    fn icon(&self) -> ModuleIcon {
        ModuleIcon::new("square.grid.3x3")
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
