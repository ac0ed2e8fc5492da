//! # Profile Derivation
//!
//! Pure functions from stiffener parameters to rectangles. A stiffener
//! never edits its rectangles in place; it derives them again after every
//! parameter change. [`derive_primitives`] is the checked entry point for
//! callers holding a bare [`ProfileShape`].
//!
//! The web always starts at the stiffener's `position` (the weld toe on the
//! plate) and runs along the stiffener's `angle`. Flanges are placed at the
//! far end of the web:
//!
//! ```text
//!   Angle (side = +1)          Tee
//!
//!   ┌──────┐                 ┌───────────┐
//!   └───┐  │ flange          └───┐   ┌───┘ flange
//!       │  │                     │   │
//!       │  │ web                 │   │ web
//!       │  │                     │   │
//!   ────●──────── plate      ────●──────── plate
//! ```

use super::{equivalent_angle, FlangeSide, FlangedDimensions, ProfileShape};
use crate::errors::SectionResult;
use crate::geometry::{OrientedRectangle, Vec2};
use crate::units::Radians;

const QUARTER_TURN: f64 = std::f64::consts::FRAC_PI_2;

/// Rectangles for `shape` placed at `position` with absolute orientation
/// `angle`. `side` only affects angles and bulbs.
///
/// # Errors
/// `Validation` if `shape` fails [`ProfileShape::validate`].
pub fn derive_primitives(
    shape: &ProfileShape,
    position: Vec2,
    angle: Radians,
    side: FlangeSide,
) -> SectionResult<Vec<OrientedRectangle>> {
    shape.validate()?;
    Ok(derive_unchecked(shape, position, angle, side))
}

/// [`derive_primitives`] for a shape that has already been validated.
pub(crate) fn derive_unchecked(shape: &ProfileShape, position: Vec2, angle: Radians, side: FlangeSide) -> Vec<OrientedRectangle> {
    match shape {
        ProfileShape::FlatBar { web_length, thickness } => {
            vec![OrientedRectangle::from_validated(*web_length, *thickness, position, angle)]
        }
        ProfileShape::Angle(dims) => angle_primitives(dims, position, angle, side),
        ProfileShape::Tee(dims) => tee_primitives(dims, position, angle),
        ProfileShape::Bulb { length, thickness } => {
            angle_primitives(&equivalent_angle(*length, *thickness), position, angle, side)
        }
    }
}

/// Web plus a flange flush with the web face selected by `side`.
fn angle_primitives(dims: &FlangedDimensions, position: Vec2, angle: Radians, side: FlangeSide) -> Vec<OrientedRectangle> {
    let web = OrientedRectangle::from_validated(dims.web_length, dims.web_thickness, position, angle);
    let s = side.sign();
    let flange_position = position
        + web.unit_normal() * (s * 0.5 * dims.web_thickness)
        + web.unit_direction() * (dims.web_length + 0.5 * dims.flange_thickness);
    let flange_angle = angle - Radians(s * QUARTER_TURN);
    let flange = OrientedRectangle::from_validated(dims.flange_length, dims.flange_thickness, flange_position, flange_angle);
    vec![web, flange]
}

/// Web plus a flange centred on the web centreline.
fn tee_primitives(dims: &FlangedDimensions, position: Vec2, angle: Radians) -> Vec<OrientedRectangle> {
    let web = OrientedRectangle::from_validated(dims.web_length, dims.web_thickness, position, angle);
    let flange_position = position
        + web.unit_normal() * (0.5 * dims.flange_length)
        + web.unit_direction() * (dims.web_length + 0.5 * dims.flange_thickness);
    let flange_angle = angle - Radians(QUARTER_TURN);
    let flange = OrientedRectangle::from_validated(dims.flange_length, dims.flange_thickness, flange_position, flange_angle);
    vec![web, flange]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Degrees;
    use approx::assert_relative_eq;

    fn dims() -> FlangedDimensions {
        FlangedDimensions {
            web_length: 100.0,
            web_thickness: 6.0,
            flange_length: 50.0,
            flange_thickness: 8.0,
        }
    }

    fn upright() -> Radians {
        Degrees(90.0).into()
    }

    #[test]
    fn test_flat_bar_is_single_web() {
        let rects = derive_primitives(
            &ProfileShape::FlatBar { web_length: 100.0, thickness: 10.0 },
            Vec2::new(5.0, 0.0),
            upright(),
            FlangeSide::Positive,
        )
        .unwrap();
        assert_eq!(rects.len(), 1);
        assert_eq!(rects[0].width(), 100.0);
        assert_eq!(rects[0].height(), 10.0);
        assert_relative_eq!(rects[0].centroid(), Vec2::new(5.0, 50.0), epsilon = 1e-9);
    }

    #[test]
    fn test_angle_flange_placement() {
        // upright web: direction (0, 1), normal (-1, 0)
        let rects = derive_primitives(&ProfileShape::Angle(dims()), Vec2::zeros(), upright(), FlangeSide::Positive).unwrap();
        let flange = &rects[1];
        assert_relative_eq!(flange.position(), Vec2::new(-3.0, 104.0), epsilon = 1e-9);
        assert_relative_eq!(flange.angle().0, 0.0, epsilon = 1e-9);
        // flange runs from the web's left face out to the right
        let bb = flange.bounding_box();
        assert_relative_eq!(bb.min, Vec2::new(-3.0, 100.0), epsilon = 1e-9);
        assert_relative_eq!(bb.max, Vec2::new(47.0, 108.0), epsilon = 1e-9);
    }

    #[test]
    fn test_angle_negative_side_mirrors_flange() {
        let pos = derive_primitives(&ProfileShape::Angle(dims()), Vec2::zeros(), upright(), FlangeSide::Positive).unwrap();
        let neg = derive_primitives(&ProfileShape::Angle(dims()), Vec2::zeros(), upright(), FlangeSide::Negative).unwrap();
        let (p, n) = (pos[1].bounding_box(), neg[1].bounding_box());
        // mirror image about the web centreline x = 0
        assert_relative_eq!(n.min.x, -p.max.x, epsilon = 1e-9);
        assert_relative_eq!(n.max.x, -p.min.x, epsilon = 1e-9);
        assert_relative_eq!(n.min.y, p.min.y, epsilon = 1e-9);
        assert_relative_eq!(neg[1].angle().0, 180.0, epsilon = 1e-9);
    }

    #[test]
    fn test_tee_flange_is_centred() {
        let rects = derive_primitives(&ProfileShape::Tee(dims()), Vec2::zeros(), upright(), FlangeSide::Positive).unwrap();
        let flange = &rects[1];
        assert_relative_eq!(flange.centroid().x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(flange.centroid().y, 104.0, epsilon = 1e-9);
        let bb = flange.bounding_box();
        assert_relative_eq!(bb.min.x, -25.0, epsilon = 1e-9);
        assert_relative_eq!(bb.max.x, 25.0, epsilon = 1e-9);
    }

    #[test]
    fn test_tee_ignores_flange_side() {
        let a = derive_primitives(&ProfileShape::Tee(dims()), Vec2::zeros(), upright(), FlangeSide::Positive).unwrap();
        let b = derive_primitives(&ProfileShape::Tee(dims()), Vec2::zeros(), upright(), FlangeSide::Negative).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        let err = derive_primitives(
            &ProfileShape::FlatBar { web_length: -100.0, thickness: 10.0 },
            Vec2::zeros(),
            Radians(0.0),
            FlangeSide::Positive,
        )
        .unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION");

        let thin = FlangedDimensions { flange_thickness: 0.0, ..dims() };
        assert!(derive_primitives(&ProfileShape::Angle(thin), Vec2::zeros(), upright(), FlangeSide::Positive).is_err());
        assert!(derive_primitives(&ProfileShape::Bulb { length: 10.0, thickness: 6.0 }, Vec2::zeros(), upright(), FlangeSide::Positive).is_err());
    }

    #[test]
    fn test_bulb_feeds_angle_rule() {
        let bulb = derive_primitives(
            &ProfileShape::Bulb { length: 100.0, thickness: 8.0 },
            Vec2::zeros(),
            upright(),
            FlangeSide::Positive,
        )
        .unwrap();
        let angle = derive_primitives(
            &ProfileShape::Angle(equivalent_angle(100.0, 8.0)),
            Vec2::zeros(),
            upright(),
            FlangeSide::Positive,
        )
        .unwrap();
        assert_eq!(bulb, angle);
    }
}
