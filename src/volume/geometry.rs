//! Pure geometric edits. Every function returns unregistered volumes and
//! leaves its input untouched.

use super::error::EditError;
use super::face::{Axis, Face};
use super::volume::Volume;

/// Halve `volume` along `axis`. The halves sit a quarter of the original
/// extent either side of the original centre, positive half first.
pub fn slice(volume: &Volume, axis: Axis) -> Result<[Volume; 2], EditError> {
    let i = axis.index();
    let mut extent = volume.extent();
    extent[i] /= 2.0;
    let offset = volume.extent()[i] / 4.0;

    let mut upper = volume.center();
    upper[i] += offset;
    let mut lower = volume.center();
    lower[i] -= offset;

    Ok([
        volume.reshaped(upper, extent)?,
        volume.reshaped(lower, extent)?,
    ])
}

/// Split into eight octants: slice along width, then each half along
/// height, then each quarter along depth.
pub fn subdivide(volume: &Volume) -> Result<[Volume; 8], EditError> {
    let mut parts = vec![volume.clone()];
    for axis in Axis::ALL {
        parts = parts
            .iter()
            .map(|part| slice(part, axis))
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .flatten()
            .collect();
    }
    parts
        .try_into()
        .map_err(|_: Vec<Volume>| EditError::DegenerateGeometry { extent: volume.extent() })
}

/// Push `face` outward by `increment`, keeping the opposite face in place.
pub fn stretch(volume: &Volume, face: Face, increment: f32) -> Result<Volume, EditError> {
    let params = face.params();
    let i = params.axis.index();

    let mut extent = volume.extent();
    extent[i] += increment;
    let center = volume.center() + params.normal() * (increment / 2.0);

    volume.reshaped(center, extent)
}

/// Same-size copy placed against `face`, touching it. Only persisted colours
/// are copied, so a hover tint on the source never leaks into the copy.
/// The copy is always editable.
pub fn duplicate(volume: &Volume, face: Face) -> Result<Volume, EditError> {
    let params = face.params();
    let center = volume.center() + params.normal() * volume.extent_along(params.axis);
    Volume::new(center, volume.extent(), volume.colors.persisted())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use crate::volume::color::{FaceColors, Rgb};

    const EPS: f32 = 1e-5;

    fn palette() -> FaceColors {
        FaceColors::new([
            Rgb::PLUM,
            Rgb::PALE_VIOLET_RED,
            Rgb::PAPAYA_WHIP,
            Rgb::LIGHT_GREEN,
            Rgb::LIGHT_BLUE,
            Rgb::SLATE_BLUE,
        ])
    }

    fn unit() -> Volume {
        Volume::cube(Vec3::ZERO, palette())
    }

    #[test]
    fn test_slice_unit_cube_along_x() {
        let [a, b] = slice(&unit(), Axis::X).unwrap();
        assert_eq!(a.extent(), Vec3::new(0.5, 1.0, 1.0));
        assert_eq!(b.extent(), Vec3::new(0.5, 1.0, 1.0));
        assert_eq!(a.center(), Vec3::new(0.25, 0.0, 0.0));
        assert_eq!(b.center(), Vec3::new(-0.25, 0.0, 0.0));
        assert_eq!(a.colors, palette());
    }

    #[test]
    fn test_slice_conserves_extent_on_every_axis() {
        let v = Volume::new(Vec3::new(1.0, -2.0, 3.0), Vec3::new(2.0, 3.0, 5.0), palette()).unwrap();
        for axis in Axis::ALL {
            let [a, b] = slice(&v, axis).unwrap();
            let total = a.extent_along(axis) + b.extent_along(axis);
            assert!((total - v.extent_along(axis)).abs() < EPS);
            let mid = (a.center() + b.center()) * 0.5;
            assert!((mid - v.center()).length() < EPS);
            for other in Axis::ALL.into_iter().filter(|o| *o != axis) {
                assert_eq!(a.extent_along(other), v.extent_along(other));
                assert_eq!(a.center()[other.index()], v.center()[other.index()]);
            }
        }
    }

    #[test]
    fn test_slice_keeps_fixed_flag() {
        let ground = unit().with_fixed(true);
        let halves = slice(&ground, Axis::Y).unwrap();
        assert!(halves.iter().all(|h| h.fixed));
    }

    #[test]
    fn test_subdivide_octants() {
        let v = Volume::new(Vec3::new(2.0, 0.0, 0.0), Vec3::new(2.0, 2.0, 2.0), palette()).unwrap();
        let parts = subdivide(&v).unwrap();
        assert_eq!(parts.len(), 8);

        let total: f32 = parts.iter().map(Volume::measure).sum();
        assert!((total - v.measure()).abs() < EPS);

        for sx in [-0.5, 0.5] {
            for sy in [-0.5, 0.5] {
                for sz in [-0.5, 0.5] {
                    let expected = v.center() + Vec3::new(sx, sy, sz);
                    assert!(
                        parts.iter().any(|p| (p.center() - expected).length() < EPS),
                        "missing octant at {expected:?}"
                    );
                }
            }
        }
        assert!(parts.iter().all(|p| p.extent() == Vec3::ONE));
    }

    #[test]
    fn test_stretch_moves_only_target_face() {
        for face in Face::all() {
            let v = unit();
            let s = stretch(&v, face, 1.0).unwrap();
            let axis = face.params().axis;
            assert_eq!(s.extent_along(axis), 2.0);

            let opposite = face.opposite().params();
            let n = opposite.normal();
            // The opposite face plane does not move
            let before = v.center().dot(n) + v.extent_along(axis) / 2.0;
            let after = s.center().dot(n) + s.extent_along(axis) / 2.0;
            assert!((before - after).abs() < EPS, "face {face:?}");
        }
    }

    #[test]
    fn test_stretch_up() {
        let s = stretch(&unit(), Face::new(2).unwrap(), 1.0).unwrap();
        assert_eq!(s.center(), Vec3::new(0.0, 0.5, 0.0));
        assert_eq!(s.extent(), Vec3::new(1.0, 2.0, 1.0));
    }

    #[test]
    fn test_stretch_refuses_collapse() {
        let err = stretch(&unit(), Face::new(0).unwrap(), -1.0).unwrap_err();
        assert!(matches!(err, EditError::DegenerateGeometry { .. }));
    }

    #[test]
    fn test_duplicate_on_top() {
        let mut v = unit();
        v.colors.set_overlay(2, Rgb::FOREST_GREEN);
        let d = duplicate(&v, Face::new(2).unwrap()).unwrap();
        assert_eq!(d.center(), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(d.extent(), Vec3::ONE);
        assert_eq!(d.colors.effective(2), Rgb::PAPAYA_WHIP);
        assert!(v.colors.has_overlay());
    }

    #[test]
    fn test_duplicate_touches_source() {
        let v = Volume::new(Vec3::ZERO, Vec3::new(2.0, 1.0, 3.0), palette()).unwrap();
        for face in Face::all() {
            let d = duplicate(&v, face).unwrap();
            let gap = (d.center() - v.center()).length();
            assert!((gap - v.extent_along(face.params().axis)).abs() < EPS);
            assert!(d.aabb().intersects(&v.aabb()));
        }
    }

    #[test]
    fn test_duplicate_of_fixed_is_editable() {
        let ground = unit().with_fixed(true);
        let d = duplicate(&ground, Face::new(2).unwrap()).unwrap();
        assert!(!d.fixed);
    }
}
