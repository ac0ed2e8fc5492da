//! # Transverse Section
//!
//! The full hull cross-section: every stiffened panel at one frame.
//!
//! Section properties are taken over all plate and stiffener rectangles at
//! once. The hull-girder section moduli use the vertical extremes of those
//! rectangles as the deck and keel fibres.
//!
//! ## Example
//!
//! ```rust
//! use nalgebra::Vector2;
//! use section_core::assembly::{StiffenedPanel, TransverseSection};
//! use section_core::materials::Material;
//! use section_core::plating::FlatPlate;
//!
//! let steel = Material::steel_a131();
//! let mut section = TransverseSection::new().with_name("midship");
//! for (start, end) in [([0.0, 0.0], [5000.0, 0.0]), ([5000.0, 0.0], [5000.0, 3000.0])] {
//!     let mut panel = StiffenedPanel::new();
//!     panel.set_plating(FlatPlate::from_endpoints(start.into(), end.into(), 10.0, steel.clone()).unwrap());
//!     section.add_panel(panel, None).unwrap();
//! }
//!
//! let moduli = section.section_moduli().unwrap();
//! assert!(moduli.z_bottom > moduli.z_top);
//! ```

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, instrument};

use super::{allocate_id, PanelId, StiffenedPanel};
use crate::errors::{SectionError, SectionResult};
use crate::geometry::{
    BoundingBox, GeometryGroup, OrientedRectangle, RigidTransform, SectionModuli, SectionProperties, Vec2,
};
use crate::settings::GeometrySettings;
use crate::units::Degrees;

/// Stiffened panels keyed by id, plus the group geometry built from them.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TransverseSection {
    name: Option<String>,
    settings: GeometrySettings,
    panels: BTreeMap<PanelId, StiffenedPanel>,
    #[serde(skip)]
    next_id: u32,
    #[serde(skip)]
    group: GeometryGroup,
}

impl TransverseSection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// # Errors
    /// `Configuration` if the settings fail validation.
    pub fn with_settings(mut self, settings: GeometrySettings) -> SectionResult<Self> {
        settings.validate()?;
        self.settings = settings;
        Ok(self)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn settings(&self) -> &GeometrySettings {
        &self.settings
    }

    /// Panels in id order
    pub fn panels(&self) -> impl Iterator<Item = (PanelId, &StiffenedPanel)> {
        self.panels.iter().map(|(id, p)| (*id, p))
    }

    pub fn num_panels(&self) -> usize {
        self.panels.len()
    }

    /// Total number of stiffeners across all panels
    pub fn num_stiffeners(&self) -> usize {
        self.panels.values().map(StiffenedPanel::num_stiffeners).sum()
    }

    pub fn group(&self) -> &GeometryGroup {
        &self.group
    }

    // ========================================================================
    // Panels
    // ========================================================================

    /// Add a panel and return its id.
    ///
    /// # Errors
    /// `Configuration` if `id` is already taken.
    #[instrument(skip(self, panel), fields(section = ?self.name, panel = ?panel.name()))]
    pub fn add_panel(&mut self, panel: StiffenedPanel, id: Option<PanelId>) -> SectionResult<PanelId> {
        let id = match id {
            Some(id) if self.panels.contains_key(&id) => {
                return Err(SectionError::configuration(format!("panel id {id} is already taken")));
            }
            Some(id) => id,
            None => allocate_id(&mut self.next_id, &self.panels)?,
        };
        self.panels.insert(id, panel);
        self.rebuild();
        Ok(id)
    }

    /// # Errors
    /// `NotFound` if no panel has this id.
    #[instrument(skip(self), fields(section = ?self.name))]
    pub fn remove_panel(&mut self, id: PanelId) -> SectionResult<StiffenedPanel> {
        let removed = self
            .panels
            .remove(&id)
            .ok_or_else(|| SectionError::not_found(PanelId::ENTITY, id))?;
        self.rebuild();
        Ok(removed)
    }

    pub fn get_panel(&self, id: PanelId) -> SectionResult<&StiffenedPanel> {
        self.panels.get(&id).ok_or_else(|| SectionError::not_found(PanelId::ENTITY, id))
    }

    /// Mutable access. Call [`update`](Self::update) afterwards so the
    /// section geometry reflects the change.
    pub fn get_panel_mut(&mut self, id: PanelId) -> SectionResult<&mut StiffenedPanel> {
        self.panels
            .get_mut(&id)
            .ok_or_else(|| SectionError::not_found(PanelId::ENTITY, id))
    }

    /// Run `edit` on one panel, then update that panel and the section.
    pub fn edit_panel<R>(
        &mut self,
        id: PanelId,
        edit: impl FnOnce(&mut StiffenedPanel) -> SectionResult<R>,
    ) -> SectionResult<R> {
        let panel = self.get_panel_mut(id)?;
        let result = edit(&mut *panel);
        panel.update();
        self.rebuild();
        result
    }

    /// Update every panel, then rebuild the section geometry.
    pub fn update(&mut self) {
        self.panels.values_mut().for_each(StiffenedPanel::update);
        self.rebuild();
    }

    fn rebuild(&mut self) {
        self.group = GeometryGroup::new(self.panels.values().map(|p| p.geometry().clone()).collect());
        debug!(
            section = ?self.name,
            panels = self.panels.len(),
            primitives = self.group.primitives().len(),
            "section geometry rebuilt"
        );
    }

    // ========================================================================
    // Properties
    // ========================================================================

    pub fn primitives(&self) -> Vec<&OrientedRectangle> {
        self.group.primitives()
    }

    pub fn area(&self) -> f64 {
        self.group.area()
    }

    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.group.bounding_box()
    }

    /// # Errors
    /// `DegenerateGeometry` if the section has no area.
    pub fn section_properties(&self) -> SectionResult<SectionProperties> {
        self.group.section_properties_with(&self.settings)
    }

    /// Neutral axis and deck/keel section moduli for vertical bending.
    ///
    /// # Errors
    /// `DegenerateGeometry` if the section has no area or the neutral axis
    /// coincides with an extreme fibre.
    pub fn section_moduli(&self) -> SectionResult<SectionModuli> {
        let properties = self.section_properties()?;
        let bounds = self
            .bounding_box()
            .ok_or_else(|| SectionError::degenerate("section_moduli", "section has no primitives"))?;
        SectionModuli::compute(&properties, &bounds)
    }
}

impl RigidTransform for TransverseSection {
    fn translate(&mut self, displacement: Vec2) {
        self.panels.values_mut().for_each(|p| p.translate(displacement));
        self.rebuild();
    }

    fn rotate(&mut self, pivot: Vec2, delta: Degrees) {
        self.panels.values_mut().for_each(|p| p.rotate(pivot, delta));
        self.rebuild();
    }
}

impl fmt::Display for TransverseSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Transverse section \"{}\":", self.name.as_deref().unwrap_or("unnamed"))?;
        for (id, panel) in &self.panels {
            write!(f, "[{id}] {panel}")?;
        }
        Ok(())
    }
}
