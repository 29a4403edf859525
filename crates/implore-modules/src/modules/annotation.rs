//! Annotation modules: bounding-box outline, ruler, and scale cube.
//!
//! These draw reference geometry around a volume and work with data of any
//! component count.

use std::rc::Rc;

use super::{bind_checked, Module, ModuleBinding, ModuleIcon};
use crate::config::{OutlineConfig, RulerConfig, ScaleCubeConfig};
use crate::error::ModuleResult;
use crate::kind::ModuleKind;
use crate::source::{ModuleInput, View};
use crate::types::ColorRgb;

/// Wireframe bounding box of the data
#[derive(Debug)]
pub struct OutlineModule {
    binding: ModuleBinding,
    color: ColorRgb,
}

impl OutlineModule {
    pub fn new(config: &OutlineConfig) -> Self {
        Self {
            binding: ModuleBinding::new(),
            color: config.color,
        }
    }

    pub fn color(&self) -> ColorRgb {
        self.color
    }

    pub fn set_color(&mut self, color: ColorRgb) {
        self.color = color;
    }
}

impl Default for OutlineModule {
    fn default() -> Self {
        Self::new(&OutlineConfig::default())
    }
}

impl Module for OutlineModule {
    fn kind(&self) -> ModuleKind {
        ModuleKind::Outline
    }

    fn icon(&self) -> ModuleIcon {
        ModuleIcon::new("cube")
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

/// Distance measurement between two points
#[derive(Debug)]
pub struct RulerModule {
    binding: ModuleBinding,
    unit: String,
    endpoints: Option<([f64; 3], [f64; 3])>,
}

impl RulerModule {
    pub fn new(config: &RulerConfig) -> Self {
        Self {
            binding: ModuleBinding::new(),
            unit: config.unit.clone(),
            endpoints: None,
        }
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn set_endpoints(&mut self, start: [f64; 3], end: [f64; 3]) {
        self.endpoints = Some((start, end));
    }

    pub fn endpoints(&self) -> Option<([f64; 3], [f64; 3])> {
        self.endpoints
    }

    /// Measured length, once both endpoints are placed
    pub fn length(&self) -> Option<f64> {
        let (start, end) = self.endpoints?;
        let squared: f64 = start
            .iter()
            .zip(end.iter())
            .map(|(a, b)| (b - a) * (b - a))
            .sum();
        Some(squared.sqrt())
    }
}

impl Default for RulerModule {
    fn default() -> Self {
        Self::new(&RulerConfig::default())
    }
}

impl Module for RulerModule {
    fn kind(&self) -> ModuleKind {
        ModuleKind::Ruler
    }

    fn icon(&self) -> ModuleIcon {
        ModuleIcon::new("ruler")
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

/// Cube of known side length for visual scale
#[derive(Debug)]
pub struct ScaleCubeModule {
    binding: ModuleBinding,
    side_length: f64,
    unit: String,
}

impl ScaleCubeModule {
    pub fn new(config: &ScaleCubeConfig) -> Self {
        Self {
            binding: ModuleBinding::new(),
            side_length: config.side_length,
            unit: config.unit.clone(),
        }
    }

    pub fn side_length(&self) -> f64 {
        self.side_length
    }

    /// Non-positive lengths are ignored
    pub fn set_side_length(&mut self, side_length: f64) {
        if side_length > 0.0 {
            self.side_length = side_length;
        }
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Annotation text, e.g. "10 nm"
    pub fn annotation(&self) -> String {
        format!("{} {}", self.side_length, self.unit)
    }
}

impl Default for ScaleCubeModule {
    fn default() -> Self {
        Self::new(&ScaleCubeConfig::default())
    }
}

impl Module for ScaleCubeModule {
    fn kind(&self) -> ModuleKind {
        ModuleKind::ScaleCube
    }

    fn icon(&self) -> ModuleIcon {
        ModuleIcon::new("cube.transparent")
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
