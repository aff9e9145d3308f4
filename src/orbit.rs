use bevy::math::Vec2;
use itertools::Itertools;
use thiserror::Error;

pub const DEFAULT_STEP_DEGREES: f32 = 22.5;
/// Smallest step accepted by [`Orbit::generate`], keeping a ring under 3600 points.
pub const MIN_STEP_DEGREES: f32 = 0.1;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrbitError {
    #[error("orbit has no points")]
    EmptyOrbit,

    #[error("index {index} is out of range for an orbit of {len} points")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Camera anchor points on a circle around a subject, in rotational order.
///
/// Points live in the horizontal plane: `x` is world X, `y` is world Z.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Orbit {
    points: Vec<Vec2>,
}

impl Orbit {
    /// Builds the ring of points around `center`, starting at the angle of
    /// `forward_reference` and stepping by `step_degrees`.
    ///
    /// One step short of a full revolution is produced, so the last point
    /// never lands back on the first.
    pub fn generate(center: Vec2, forward_reference: Vec2, step_degrees: f32) -> Self {
        if !(step_degrees.is_finite() && step_degrees >= MIN_STEP_DEGREES) {
            return Self::default();
        }

        let radius = center.distance(forward_reference);
        let start = starting_angle(center, forward_reference);
        let count = ((360.0 / step_degrees).floor() as usize).saturating_sub(1);

        let points = (0..count)
            .map(|i| {
                let angle = f32::rem_euclid(start + i as f32 * step_degrees, 360.0);
                point_on_circle(center, radius, angle)
            })
            .collect();

        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn describe(&self) -> String {
        self.points
            .iter()
            .map(|point| format!("({:.3}, {:.3})", point.x, point.y))
            .join(", ")
    }

    fn check(&self, index: usize) -> Result<(), OrbitError> {
        if self.points.is_empty() {
            return Err(OrbitError::EmptyOrbit);
        }
        if index >= self.points.len() {
            return Err(OrbitError::IndexOutOfRange {
                index,
                len: self.points.len(),
            });
        }
        Ok(())
    }
}

/// Angle in degrees from `center` to `target`, in `[0, 360)`.
///
/// Zero points along +y and angles grow towards +x, matching the
/// sine-for-x convention of [`point_on_circle`].
pub fn starting_angle(center: Vec2, target: Vec2) -> f32 {
    let offset = target - center;
    let degrees = f32::atan2(offset.x, offset.y).to_degrees();
    f32::rem_euclid(degrees, 360.0) % 360.0
}

/// Point at `angle_degrees` on the circle of `radius` around `center`.
pub fn point_on_circle(center: Vec2, radius: f32, angle_degrees: f32) -> Vec2 {
    let angle = angle_degrees.to_radians();
    Vec2::new(
        center.x + radius * angle.sin(),
        center.y + radius * angle.cos(),
    )
}

pub fn advance(orbit: &Orbit, index: usize) -> Result<usize, OrbitError> {
    orbit.check(index)?;
    if index == orbit.len() - 1 {
        Ok(0)
    } else {
        Ok(index + 1)
    }
}

pub fn retreat(orbit: &Orbit, index: usize) -> Result<usize, OrbitError> {
    orbit.check(index)?;
    if index == 0 {
        Ok(orbit.len() - 1)
    } else {
        Ok(index - 1)
    }
}

pub fn current_point(orbit: &Orbit, index: usize) -> Result<Vec2, OrbitError> {
    orbit.check(index)?;
    Ok(orbit.points[index])
}

/// Wrap-around position in an [`Orbit`].
///
/// The index only moves when the underlying operation succeeds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrbitCursor {
    index: usize,
}

impl OrbitCursor {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn advance(&mut self, orbit: &Orbit) -> Result<Vec2, OrbitError> {
        self.index = advance(orbit, self.index)?;
        current_point(orbit, self.index)
    }

    pub fn retreat(&mut self, orbit: &Orbit) -> Result<Vec2, OrbitError> {
        self.index = retreat(orbit, self.index)?;
        current_point(orbit, self.index)
    }

    pub fn current_point(&self, orbit: &Orbit) -> Result<Vec2, OrbitError> {
        current_point(orbit, self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn assert_close(actual: Vec2, expected: Vec2) {
        assert!(
            actual.distance(expected) < EPSILON,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn default_step_produces_fifteen_points() {
        let orbit = Orbit::generate(Vec2::ZERO, Vec2::new(0.0, 2.0), DEFAULT_STEP_DEGREES);
        assert_eq!(orbit.len(), 15);
    }

    #[test]
    fn point_count_is_one_short_of_a_full_ring() {
        for step in [1.0, 10.0, 30.0, 45.0, 90.0, 120.0, 180.0] {
            let orbit = Orbit::generate(Vec2::ZERO, Vec2::X, step);
            assert_eq!(orbit.len(), (360.0 / step) as usize - 1, "step {step}");
        }
    }

    #[test]
    fn first_points_follow_forward_reference() {
        let orbit = Orbit::generate(Vec2::ZERO, Vec2::new(0.0, 2.0), 22.5);
        assert_close(orbit.points()[0], Vec2::new(0.0, 2.0));
        assert_close(orbit.points()[1], Vec2::new(0.765_367, 1.847_759));
    }

    #[test]
    fn starting_angle_is_normalized() {
        assert!(starting_angle(Vec2::ZERO, Vec2::new(0.0, 1.0)).abs() < EPSILON);
        assert!((starting_angle(Vec2::ZERO, Vec2::new(1.0, 0.0)) - 90.0).abs() < EPSILON);
        assert!((starting_angle(Vec2::ZERO, Vec2::new(0.0, -1.0)) - 180.0).abs() < EPSILON);
        assert!((starting_angle(Vec2::ZERO, Vec2::new(-1.0, 0.0)) - 270.0).abs() < EPSILON);
    }

    #[test]
    fn points_share_the_radius() {
        let center = Vec2::new(12.5, -4.0);
        let reference = Vec2::new(10.0, -2.5);
        let radius = center.distance(reference);
        let orbit = Orbit::generate(center, reference, 22.5);

        for point in orbit.points() {
            assert!((point.distance(center) - radius).abs() < EPSILON);
        }
        assert_close(orbit.points()[0], reference);
    }

    #[test]
    fn points_are_evenly_spaced() {
        let orbit = Orbit::generate(Vec2::new(3.0, 1.0), Vec2::new(5.0, 1.0), 22.5);
        let chord = 2.0 * 2.0 * (22.5f32 / 2.0).to_radians().sin();

        for (a, b) in orbit.points().iter().tuple_windows() {
            assert!((a.distance(*b) - chord).abs() < EPSILON);
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let center = Vec2::new(-402.1, 118.7);
        let reference = Vec2::new(-401.0, 120.4);
        assert_eq!(
            Orbit::generate(center, reference, 22.5),
            Orbit::generate(center, reference, 22.5)
        );
    }

    #[test]
    fn coincident_points_collapse_to_center() {
        let center = Vec2::new(1.0, 1.0);
        let orbit = Orbit::generate(center, center, 22.5);
        assert_eq!(orbit.len(), 15);
        assert!(orbit.points().iter().all(|point| *point == center));
    }

    #[test]
    fn invalid_step_produces_empty_orbit() {
        for step in [
            0.0,
            -22.5,
            f32::NAN,
            f32::INFINITY,
            400.0,
            f32::MIN_POSITIVE,
            1e-30,
            1e-6,
            0.05,
        ] {
            assert!(Orbit::generate(Vec2::ZERO, Vec2::Y, step).is_empty(), "step {step}");
        }
    }

    #[test]
    fn smallest_step_is_bounded() {
        let orbit = Orbit::generate(Vec2::ZERO, Vec2::Y, MIN_STEP_DEGREES);
        assert_eq!(orbit.len(), (360.0 / MIN_STEP_DEGREES).floor() as usize - 1);
        assert!(orbit.len() < 3600);
    }

    #[test]
    fn advance_and_retreat_wrap() {
        let orbit = Orbit::generate(Vec2::ZERO, Vec2::Y, 22.5);
        assert_eq!(retreat(&orbit, 0), Ok(14));
        assert_eq!(advance(&orbit, 14), Ok(0));
        assert_eq!(advance(&orbit, 3), Ok(4));
        assert_eq!(retreat(&orbit, 3), Ok(2));
    }

    #[test]
    fn advance_then_retreat_is_identity() {
        for step in [22.5, 120.0, 180.0] {
            let orbit = Orbit::generate(Vec2::ZERO, Vec2::Y, step);
            for index in 0..orbit.len() {
                assert_eq!(retreat(&orbit, advance(&orbit, index).unwrap()), Ok(index));
                assert_eq!(advance(&orbit, retreat(&orbit, index).unwrap()), Ok(index));
            }
        }
    }

    #[test]
    fn full_lap_returns_to_start() {
        let orbit = Orbit::generate(Vec2::ZERO, Vec2::Y, 22.5);
        let mut cursor = OrbitCursor::default();
        for _ in 0..3 {
            cursor.advance(&orbit).unwrap();
        }
        let start = cursor.index();
        for _ in 0..orbit.len() {
            cursor.advance(&orbit).unwrap();
        }
        assert_eq!(cursor.index(), start);
    }

    #[test]
    fn single_point_orbit_stays_put() {
        let orbit = Orbit::generate(Vec2::ZERO, Vec2::Y, 180.0);
        assert_eq!(orbit.len(), 1);
        assert_eq!(advance(&orbit, 0), Ok(0));
        assert_eq!(retreat(&orbit, 0), Ok(0));
    }

    #[test]
    fn empty_orbit_is_an_error() {
        let orbit = Orbit::default();
        let mut cursor = OrbitCursor::default();
        assert_eq!(advance(&orbit, 0), Err(OrbitError::EmptyOrbit));
        assert_eq!(retreat(&orbit, 0), Err(OrbitError::EmptyOrbit));
        assert_eq!(cursor.advance(&orbit), Err(OrbitError::EmptyOrbit));
        assert_eq!(cursor.current_point(&orbit), Err(OrbitError::EmptyOrbit));
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn out_of_range_index_is_an_error() {
        let orbit = Orbit::generate(Vec2::ZERO, Vec2::Y, 22.5);
        assert_eq!(
            advance(&orbit, 15),
            Err(OrbitError::IndexOutOfRange { index: 15, len: 15 })
        );
    }

    #[test]
    fn cursor_returns_the_new_point() {
        let orbit = Orbit::generate(Vec2::ZERO, Vec2::new(0.0, 2.0), 22.5);
        let mut cursor = OrbitCursor::default();
        let point = cursor.retreat(&orbit).unwrap();
        assert_eq!(cursor.index(), 14);
        assert_close(point, orbit.points()[14]);
        cursor.advance(&orbit).unwrap();
        assert_close(cursor.current_point(&orbit).unwrap(), Vec2::new(0.0, 2.0));
    }
}
