//! Scalar-field modules: contour, volume, and threshold.
//!
//! All three map a single scalar per voxel onto geometry or opacity, so they
//! refuse multi-component data at initialization.

use std::rc::Rc;

use super::{Module, ModuleBinding, ModuleIcon};
use crate::config::{ContourConfig, ThresholdConfig, VolumeConfig};
use crate::error::{ModuleError, ModuleResult};
use crate::kind::ModuleKind;
use crate::source::{ModuleInput, View};

/// Shared `initialize` for scalar-only modules.
fn bind_scalar(
    binding: &mut ModuleBinding,
    module: ModuleKind,
    input: Option<ModuleInput<'_>>,
    view: Option<&Rc<dyn View>>,
) -> ModuleResult<()> {
    let (input, view) = binding.check(module, input, view)?;
    if let Some(components) = input.number_of_components() {
        if components > 1 {
            return Err(ModuleError::UnsupportedComponents { module, components });
        }
    }
    binding.bind(input, view);
    Ok(())
}

/// Iso-surface at a fraction of the scalar range
#[derive(Debug)]
pub struct ContourModule {
    binding: ModuleBinding,
    iso_value: f64,
}

impl ContourModule {
    pub fn new(config: &ContourConfig) -> Self {
        Self {
            binding: ModuleBinding::new(),
            iso_value: config.iso_value,
        }
    }

    pub fn iso_value(&self) -> f64 {
        self.iso_value
    }

    pub fn set_iso_value(&mut self, iso_value: f64) {
        self.iso_value = iso_value.clamp(0.0, 1.0);
    }

    /// Iso value mapped onto a concrete scalar range
    pub fn iso_value_in(&self, min: f64, max: f64) -> f64 {
        min + (max - min) * self.iso_value
    }
}

impl Default for ContourModule {
    fn default() -> Self {
        Self::new(&ContourConfig::default())
    }
}

impl Module for ContourModule {
    fn kind(&self) -> ModuleKind {
        ModuleKind::Contour
    }

    fn icon(&self) -> ModuleIcon {
        ModuleIcon::new("circle.dashed")
    }

    fn initialize(
        &mut self,
        input: Option<ModuleInput<'_>>,
        view: Option<&Rc<dyn View>>,
    ) -> ModuleResult<()> {
        let kind = self.kind();
        bind_scalar(&mut self.binding, kind, input, view)
    }

    module_accessors!();
}

/// Direct volume rendering
#[derive(Debug)]
pub struct VolumeModule {
    binding: ModuleBinding,
    opacity: f64,
}

impl VolumeModule {
    pub fn new(config: &VolumeConfig) -> Self {
        Self {
            binding: ModuleBinding::new(),
            opacity: config.opacity,
        }
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn set_opacity(&mut self, opacity: f64) {
        self.opacity = opacity.clamp(0.0, 1.0);
    }
}

impl Default for VolumeModule {
    fn default() -> Self {
        Self::new(&VolumeConfig::default())
    }
}

impl Module for VolumeModule {
    fn kind(&self) -> ModuleKind {
        ModuleKind::Volume
    }

    fn icon(&self) -> ModuleIcon {
        ModuleIcon::new("cloud.fill")
    }

    fn initialize(
        &mut self,
        input: Option<ModuleInput<'_>>,
        view: Option<&Rc<dyn View>>,
    ) -> ModuleResult<()> {
        let kind = self.kind();
        bind_scalar(&mut self.binding, kind, input, view)
    }

    module_accessors!();
}

/// Voxels whose scalar lies within a band of the range
#[derive(Debug)]
pub struct ThresholdModule {
    binding: ModuleBinding,
    lower: f64,
    upper: f64,
}

impl ThresholdModule {
    pub fn new(config: &ThresholdConfig) -> Self {
        Self {
            binding: ModuleBinding::new(),
            lower: config.lower,
            upper: config.upper,
        }
    }

    pub fn range(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }

    /// Set the band; the bounds are clamped to [0, 1] and swapped if reversed
    pub fn set_range(&mut self, lower: f64, upper: f64) {
        let (lower, upper) = (lower.clamp(0.0, 1.0), upper.clamp(0.0, 1.0));
        if lower <= upper {
            self.lower = lower;
            self.upper = upper;
        } else {
            self.lower = upper;
            self.upper = lower;
        }
    }

    /// Whether a normalized scalar passes the threshold
    pub fn contains(&self, value: f64) -> bool {
        (self.lower..=self.upper).contains(&value)
    }
}

impl Default for ThresholdModule {
    fn default() -> Self {
        Self::new(&ThresholdConfig::default())
    }
}

impl Module for ThresholdModule {
    fn kind(&self) -> ModuleKind {
        ModuleKind::Threshold
    }

    fn icon(&self) -> ModuleIcon {
        ModuleIcon::new("slider.horizontal.below.rectangle")
    }

    fn initialize(
        &mut self,
        input: Option<ModuleInput<'_>>,
        view: Option<&Rc<dyn View>>,
    ) -> ModuleResult<()> {
        let kind = self.kind();
        bind_scalar(&mut self.binding, kind, input, view)
    }

    module_accessors!();
}
