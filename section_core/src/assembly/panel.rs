//! # Stiffened Panel
//!
//! One plate strake with any number of stiffeners welded to one face.
//!
//! Stiffeners are placed by their distance along the plate and their angle
//! relative to it. The weld toe lands on the plate's stiffened face:
//!
//! ```text
//!   position = plate.position + distance·plate.direction + ½·plate.thickness·plate.normal
//!   angle    = plate.angle + relative_angle
//! ```
//!
//! ## Example
//!
//! ```rust
//! use nalgebra::Vector2;
//! use section_core::assembly::StiffenedPanel;
//! use section_core::materials::Material;
//! use section_core::plating::FlatPlate;
//! use section_core::profiles::Stiffener;
//! use section_core::units::Degrees;
//!
//! let steel = Material::steel_a131();
//! let plate = FlatPlate::from_endpoints(Vector2::new(0.0, 0.0), Vector2::new(2000.0, 0.0), 10.0, steel.clone()).unwrap();
//!
//! let mut panel = StiffenedPanel::new().with_name("bottom");
//! panel.set_plating(plate);
//! let hp = Stiffener::bulb(100.0, 6.35, steel).unwrap();
//! let ids = panel.add_stiffeners_group(150.0, Degrees(90.0), 300.0, &hp, 5).unwrap();
//!
//! assert_eq!(ids.len(), 5);
//! assert_eq!(panel.num_stiffeners(), 5);
//! let props = panel.section_properties().unwrap();
//! assert!(props.centroid[1] > 0.0);
//! ```

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, instrument};

use super::{allocate_id, PanelKind, StiffenerId};
use crate::errors::{SectionError, SectionResult};
use crate::geometry::{BoundingBox, CompositeGeometry, OrientedRectangle, RigidTransform, SectionProperties, Shape, Vec2};
use crate::plating::FlatPlate;
use crate::profiles::Stiffener;
use crate::settings::GeometrySettings;
use crate::units::Degrees;

/// A plate with its stiffeners, keyed by id.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct StiffenedPanel {
    name: Option<String>,
    kind: Option<PanelKind>,
    settings: GeometrySettings,
    plating: Option<FlatPlate>,
    stiffeners: BTreeMap<StiffenerId, Stiffener>,
    #[serde(skip)]
    next_id: u32,
    #[serde(skip)]
    geometry: CompositeGeometry,
}

impl StiffenedPanel {
    /// An empty panel; set the plating before adding stiffeners.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_kind(mut self, kind: PanelKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// # Errors
    /// `Configuration` if the settings fail validation.
    pub fn with_settings(mut self, settings: GeometrySettings) -> SectionResult<Self> {
        settings.validate()?;
        self.settings = settings;
        Ok(self)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn kind(&self) -> Option<PanelKind> {
        self.kind
    }

    pub fn set_kind(&mut self, kind: PanelKind) {
        self.kind = Some(kind);
    }

    pub fn settings(&self) -> &GeometrySettings {
        &self.settings
    }

    pub fn plating(&self) -> Option<&FlatPlate> {
        self.plating.as_ref()
    }

    /// Stiffeners in id order
    pub fn stiffeners(&self) -> impl Iterator<Item = (StiffenerId, &Stiffener)> {
        self.stiffeners.iter().map(|(id, s)| (*id, s))
    }

    pub fn num_stiffeners(&self) -> usize {
        self.stiffeners.len()
    }

    /// Plate rectangle followed by each stiffener's composite, as of the
    /// last rebuild
    pub fn geometry(&self) -> &CompositeGeometry {
        &self.geometry
    }

    pub fn primitives(&self) -> Vec<&OrientedRectangle> {
        self.geometry.primitives()
    }

    pub fn area(&self) -> f64 {
        self.geometry.area()
    }

    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.geometry.bounding_box()
    }

    /// # Errors
    /// `DegenerateGeometry` for a panel with no plate and no stiffeners.
    pub fn section_properties(&self) -> SectionResult<SectionProperties> {
        self.geometry.section_properties_with(&self.settings)
    }

    // ========================================================================
    // Plating
    // ========================================================================

    /// Install (or replace) the plate. Stiffeners already placed keep their
    /// absolute pose.
    pub fn set_plating(&mut self, plate: FlatPlate) {
        self.plating = Some(plate);
        self.rebuild();
    }

    fn require_plating(&self) -> SectionResult<&FlatPlate> {
        self.plating
            .as_ref()
            .ok_or_else(|| SectionError::configuration("panel has no plating; call set_plating first"))
    }

    // ========================================================================
    // Stiffeners
    // ========================================================================

    /// Place `stiffener` on the plate and return its id.
    ///
    /// # Errors
    /// - `Configuration` if no plating is set or `id` is already taken
    /// - `Validation` if `relative_position` is not finite
    #[instrument(skip(self, stiffener), fields(panel = ?self.name, profile = %stiffener.designation()))]
    pub fn add_stiffener(
        &mut self,
        relative_position: f64,
        relative_angle: Degrees,
        stiffener: Stiffener,
        id: Option<StiffenerId>,
    ) -> SectionResult<StiffenerId> {
        let id = self.insert_stiffener(relative_position, relative_angle, stiffener, id)?;
        self.rebuild();
        Ok(id)
    }

    /// Place `count` copies of `stiffener` at `relative_position`,
    /// `relative_position + spacing`, and so on.
    ///
    /// Nothing is inserted unless the whole group fits on the plate.
    ///
    /// # Errors
    /// - `Validation` if `count` is zero or `spacing` is negative
    /// - `Configuration` if the group starts before the plate or runs past
    ///   its end, or there is no plating
    #[instrument(skip(self, stiffener), fields(panel = ?self.name, profile = %stiffener.designation()))]
    pub fn add_stiffeners_group(
        &mut self,
        relative_position: f64,
        relative_angle: Degrees,
        spacing: f64,
        stiffener: &Stiffener,
        count: usize,
    ) -> SectionResult<Vec<StiffenerId>> {
        if count == 0 {
            return Err(SectionError::validation("count", "0", "A stiffener group needs at least one stiffener"));
        }
        if !spacing.is_finite() || spacing < 0.0 {
            return Err(SectionError::validation(
                "spacing",
                spacing.to_string(),
                "Spacing must be a non-negative number",
            ));
        }
        let plate_length = self.require_plating()?.length();
        let last = relative_position + spacing * (count - 1) as f64;
        if relative_position < 0.0 || last > plate_length + self.settings.fit_tolerance {
            return Err(SectionError::configuration(format!(
                "stiffener group does not fit: positions {relative_position} to {last} on a plate of length {plate_length}"
            )));
        }

        let mut ids = Vec::with_capacity(count);
        for i in 0..count {
            let position = relative_position + spacing * i as f64;
            ids.push(self.insert_stiffener(position, relative_angle, stiffener.clone(), None)?);
        }
        self.rebuild();
        Ok(ids)
    }

    fn insert_stiffener(
        &mut self,
        relative_position: f64,
        relative_angle: Degrees,
        stiffener: Stiffener,
        id: Option<StiffenerId>,
    ) -> SectionResult<StiffenerId> {
        if !relative_position.is_finite() {
            return Err(SectionError::validation(
                "relative_position",
                relative_position.to_string(),
                "Position along the plate must be finite",
            ));
        }
        let plate = self.require_plating()?;
        let position = plate.point_on_face(relative_position);
        let angle = plate.angle() + relative_angle;

        let id = match id {
            Some(id) if self.stiffeners.contains_key(&id) => {
                return Err(SectionError::configuration(format!("stiffener id {id} is already taken")));
            }
            Some(id) => id,
            None => allocate_id(&mut self.next_id, &self.stiffeners)?,
        };
        self.stiffeners.insert(id, stiffener.placed(position, angle));
        Ok(id)
    }

    /// # Errors
    /// `NotFound` if no stiffener has this id.
    #[instrument(skip(self), fields(panel = ?self.name))]
    pub fn remove_stiffener(&mut self, id: StiffenerId) -> SectionResult<Stiffener> {
        let removed = self
            .stiffeners
            .remove(&id)
            .ok_or_else(|| SectionError::not_found(StiffenerId::ENTITY, id))?;
        self.rebuild();
        Ok(removed)
    }

    pub fn get_stiffener(&self, id: StiffenerId) -> SectionResult<&Stiffener> {
        self.stiffeners
            .get(&id)
            .ok_or_else(|| SectionError::not_found(StiffenerId::ENTITY, id))
    }

    /// Mutable access. Call [`update`](Self::update) afterwards so the
    /// panel geometry reflects the change.
    pub fn get_stiffener_mut(&mut self, id: StiffenerId) -> SectionResult<&mut Stiffener> {
        self.stiffeners
            .get_mut(&id)
            .ok_or_else(|| SectionError::not_found(StiffenerId::ENTITY, id))
    }

    /// Run `edit` on one stiffener, then rebuild.
    ///
    /// ```rust
    /// # use nalgebra::Vector2;
    /// # use section_core::assembly::StiffenedPanel;
    /// # use section_core::materials::Material;
    /// # use section_core::plating::FlatPlate;
    /// # use section_core::profiles::Stiffener;
    /// # use section_core::units::Degrees;
    /// # let steel = Material::steel_a131();
    /// # let mut panel = StiffenedPanel::new();
    /// # panel.set_plating(FlatPlate::new(1000.0, 10.0, Vector2::zeros(), Degrees(0.0), steel.clone()).unwrap());
    /// let id = panel.add_stiffener(500.0, Degrees(90.0), Stiffener::flat_bar(100.0, 10.0, steel).unwrap(), None).unwrap();
    /// panel.edit_stiffener(id, |s| s.set_web_length(900.0)).unwrap();
    /// assert_eq!(panel.get_stiffener(id).unwrap().web().width(), 900.0);
    /// ```
    pub fn edit_stiffener<R>(
        &mut self,
        id: StiffenerId,
        edit: impl FnOnce(&mut Stiffener) -> SectionResult<R>,
    ) -> SectionResult<R> {
        let result = edit(self.get_stiffener_mut(id)?);
        self.rebuild();
        result
    }

    /// Turn every stiffener to the other face of the plate: each is shifted
    /// back through the plate thickness along its web and turned by 180°.
    #[instrument(skip(self), fields(panel = ?self.name))]
    pub fn reverse_stiffeners_orientation(&mut self) {
        let Some(thickness) = self.plating.as_ref().map(FlatPlate::thickness) else {
            return;
        };
        for stiffener in self.stiffeners.values_mut() {
            stiffener.translate(-stiffener.web_direction() * thickness);
            stiffener.set_angle(stiffener.angle() + Degrees(180.0));
        }
        self.rebuild();
    }

    /// Give every stiffener the same absolute angle, keeping positions.
    pub fn set_stiffeners_angle(&mut self, angle: Degrees) {
        for stiffener in self.stiffeners.values_mut() {
            stiffener.set_angle(angle);
        }
        self.rebuild();
    }

    /// Rebuild the panel geometry after edits made through
    /// [`get_stiffener_mut`](Self::get_stiffener_mut).
    pub fn update(&mut self) {
        self.rebuild();
    }

    fn rebuild(&mut self) {
        let mut geometry = CompositeGeometry::default();
        if let Some(plate) = &self.plating {
            geometry.push(plate.rectangle().clone());
        }
        for stiffener in self.stiffeners.values() {
            geometry.push(Shape::Composite(stiffener.geometry().clone()));
        }
        debug!(
            panel = ?self.name,
            stiffeners = self.stiffeners.len(),
            primitives = geometry.primitives().len(),
            "panel geometry rebuilt"
        );
        self.geometry = geometry;
    }
}

impl RigidTransform for StiffenedPanel {
    fn translate(&mut self, displacement: Vec2) {
        if let Some(plate) = &mut self.plating {
            plate.translate(displacement);
        }
        self.stiffeners.values_mut().for_each(|s| s.translate(displacement));
        self.rebuild();
    }

    fn rotate(&mut self, pivot: Vec2, delta: Degrees) {
        if let Some(plate) = &mut self.plating {
            plate.rotate(pivot, delta);
        }
        self.stiffeners.values_mut().for_each(|s| s.rotate(pivot, delta));
        self.rebuild();
    }
}

impl fmt::Display for StiffenedPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Stiffened panel \"{}\":", self.name.as_deref().unwrap_or("unnamed"))?;
        match &self.plating {
            Some(plate) => writeln!(f, " Plate: {plate}")?,
            None => writeln!(f, " Plate: none")?,
        }
        for (id, stiffener) in &self.stiffeners {
            writeln!(f, " Stiffener {id}: {stiffener}")?;
        }
        Ok(())
    }
}
