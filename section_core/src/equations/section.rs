//! # Second Moment of Area Formulas
//!
//! Pure functions on [`Inertia`] records. Everything the geometry layer
//! knows about inertia goes through these four functions.
//!
//! ## Notation
//!
//! - `A` = area
//! - `Iy`, `Iz` = second moments about the horizontal / vertical axes
//! - `Ix` = polar moment (`Iy + Iz`)
//! - `Iyz` = product of inertia
//! - `θ` = orientation of the shape's long axis from the horizontal

use crate::geometry::{Inertia, Vec2};
use crate::units::Radians;

// =============================================================================
// RECTANGLE
// =============================================================================

/// Inertia of a rectangle about its own centroidal axes.
///
/// `width` runs along the rectangle's long (local `y`) axis, `height` across
/// it.
///
/// ```text
///     ┌───────────────┐
///   h │       ●       │   ● centroid
///     └───────────────┘
///             w
/// ```
///
/// # Formula
/// - Iy = w·h³/12
/// - Iz = h·w³/12
/// - Ix = Iy + Iz
/// - Iyz = 0 (symmetric about both local axes)
///
/// # Example
/// ```rust
/// use section_core::equations::section::rectangle_local_inertia;
///
/// let i = rectangle_local_inertia(40.0, 10.0);
/// assert!((i.iy - 3333.333).abs() < 0.001);
/// assert!((i.iz - 53333.333).abs() < 0.001);
/// assert_eq!(i.iyz, 0.0);
/// ```
#[inline]
pub fn rectangle_local_inertia(width: f64, height: f64) -> Inertia {
    let iy = width * height.powi(3) / 12.0;
    let iz = height * width.powi(3) / 12.0;
    Inertia {
        iy,
        iz,
        ix: iy + iz,
        iyz: 0.0,
    }
}

// =============================================================================
// AXIS ROTATION
// =============================================================================

/// Re-express centroidal inertia about axes parallel to the global frame,
/// for a shape whose local axes are rotated by `angle`.
///
/// # Formula (Mohr's circle)
/// - Iy' = ½(Iy+Iz) + ½(Iy−Iz)·cos(−2θ)
/// - Iz' = ½(Iy+Iz) − ½(Iy−Iz)·cos(−2θ)
/// - Iyz' = ½(Iy−Iz)·sin(−2θ)
/// - Ix' = Ix
///
/// The polar moment is rotation invariant, so `Iy' + Iz' == Ix` for every
/// angle. The local product of inertia is taken as zero, which holds for
/// every rectangle.
///
/// # Example
/// ```rust
/// use section_core::equations::section::{rectangle_local_inertia, rotate_inertia};
/// use section_core::units::{Degrees, Radians};
///
/// let local = rectangle_local_inertia(40.0, 10.0);
/// let turned = rotate_inertia(local, Radians::from(Degrees(90.0)));
/// // a quarter turn swaps the two axes
/// assert!((turned.iy - local.iz).abs() < 1e-9);
/// assert!((turned.iz - local.iy).abs() < 1e-9);
/// ```
#[inline]
pub fn rotate_inertia(local: Inertia, angle: Radians) -> Inertia {
    let mean = 0.5 * (local.iy + local.iz);
    let half_diff = 0.5 * (local.iy - local.iz);
    let two_theta = -2.0 * angle.0;
    Inertia {
        iy: mean + half_diff * two_theta.cos(),
        iz: mean - half_diff * two_theta.cos(),
        ix: local.ix,
        iyz: half_diff * two_theta.sin(),
    }
}

// =============================================================================
// PARALLEL AXIS THEOREM
// =============================================================================

/// Transport centroidal inertia to parallel axes through another point.
///
/// `offset` is `P − centroid`, with components `(dy, dz)`.
///
/// # Formula
/// - Iy_P = Iy + dz²·A
/// - Iz_P = Iz + dy²·A
/// - Ix_P = Iy_P + Iz_P
/// - Iyz_P = Iyz + dy·dz·A
///
/// # Example
/// ```rust
/// use nalgebra::Vector2;
/// use section_core::equations::section::{rectangle_local_inertia, transport_inertia};
///
/// let local = rectangle_local_inertia(40.0, 10.0);
/// let at_base = transport_inertia(local, 400.0, Vector2::new(0.0, -5.0));
/// // I about the base of a b×h rectangle is b·h³/3
/// assert!((at_base.iy - 40.0 * 1000.0 / 3.0).abs() < 1e-9);
/// ```
#[inline]
pub fn transport_inertia(centroidal: Inertia, area: f64, offset: Vec2) -> Inertia {
    let (dy, dz) = (offset.x, offset.y);
    let iy = centroidal.iy + dz * dz * area;
    let iz = centroidal.iz + dy * dy * area;
    Inertia {
        iy,
        iz,
        ix: iy + iz,
        iyz: centroidal.iyz + dy * dz * area,
    }
}

// =============================================================================
// SECTION MODULUS
// =============================================================================

/// Elastic section modulus `S = I / c` for an extreme fibre at distance `c`
/// from the neutral axis.
///
/// Returns `None` when `c` is zero, where the modulus is undefined.
///
/// ```rust
/// use section_core::equations::section::section_modulus;
///
/// assert_eq!(section_modulus(1000.0, 10.0), Some(100.0));
/// assert_eq!(section_modulus(1000.0, 0.0), None);
/// ```
#[inline]
pub fn section_modulus(inertia: f64, fibre_distance: f64) -> Option<f64> {
    let c = fibre_distance.abs();
    if c == 0.0 {
        None
    } else {
        Some(inertia / c)
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Degrees;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON || (a - b).abs() / b.abs().max(1.0) < 1e-12
    }

    #[test]
    fn test_local_inertia_square_is_isotropic() {
        let i = rectangle_local_inertia(10.0, 10.0);
        assert!(approx_eq(i.iy, i.iz));
        assert!(approx_eq(i.ix, 2.0 * i.iy));
    }

    #[test]
    fn test_rotation_zero_is_identity() {
        let local = rectangle_local_inertia(100.0, 8.0);
        let same = rotate_inertia(local, Radians(0.0));
        assert!(approx_eq(same.iy, local.iy));
        assert!(approx_eq(same.iz, local.iz));
        assert!(approx_eq(same.iyz, 0.0));
    }

    #[test]
    fn test_rotation_preserves_polar_moment() {
        let local = rectangle_local_inertia(100.0, 8.0);
        for deg in [0.0, 15.0, 30.0, 45.0, 90.0, 135.0, 200.0, 333.0] {
            let r = rotate_inertia(local, Degrees(deg).into());
            assert!(
                approx_eq(r.iy + r.iz, local.ix),
                "θ = {}: Iy'+Iz' = {} vs Ix = {}",
                deg,
                r.iy + r.iz,
                local.ix
            );
        }
    }

    #[test]
    fn test_rotation_45_product_of_inertia() {
        // at 45° the product term peaks at -(Iy - Iz)/2
        let local = rectangle_local_inertia(40.0, 10.0);
        let r = rotate_inertia(local, Degrees(45.0).into());
        assert!(approx_eq(r.iyz, -0.5 * (local.iy - local.iz)));
        assert!(approx_eq(r.iy, r.iz));
    }

    #[test]
    fn test_transport_zero_offset() {
        let local = rectangle_local_inertia(40.0, 10.0);
        let t = transport_inertia(local, 400.0, Vec2::zeros());
        assert_eq!(t, local);
    }

    #[test]
    fn test_transport_product_sign() {
        let local = rectangle_local_inertia(40.0, 10.0);
        let t = transport_inertia(local, 400.0, Vec2::new(-7.5, 12.5));
        assert!(approx_eq(t.iyz, -37500.0));
        assert!(approx_eq(t.iy, 3333.333333333333 + 62500.0));
        assert!(approx_eq(t.iz, 53333.333333333336 + 22500.0));
    }

    #[test]
    fn test_section_modulus_uses_magnitude() {
        assert_eq!(section_modulus(500.0, -5.0), Some(100.0));
    }
}
