// pathtrack_sim/src/scenarios.rs

//! Built-in waypoint tables. Every call returns a fresh vector.

use pathtrack_core::types::Waypoint;

/// The fixed point appended by competition item 4.
pub const ITEM_FOUR_POINT: (f64, f64) = (-1.891, -51.341);

/// The waypoints every standard run has to pass through.
pub fn standard_course() -> Vec<Waypoint> {
    let ax = [0.0, 6.0, 12.5, 10.0, 17.5, 20.0, 25.0, 35.0];
    let ay = [0.0, -3.0, -5.0, 6.5, 3.0, 0.0, 0.0, -1.0];
    ax.iter()
        .zip(ay.iter())
        .map(|(&x, &y)| Waypoint::new(x, y))
        .collect()
}

/// Waypoints for a numbered competition item.
///
/// Item 4 extends `extra` with [`ITEM_FOUR_POINT`]; any other item is the
/// standard course and ignores `extra`.
pub fn competition_item(item: u32, extra: &[Waypoint]) -> Vec<Waypoint> {
    if item == 4 {
        let mut points = extra.to_vec();
        points.push(Waypoint::new(ITEM_FOUR_POINT.0, ITEM_FOUR_POINT.1));
        points
    } else {
        standard_course()
    }
}

/// The goal is always the final waypoint.
pub fn goal_of(waypoints: &[Waypoint]) -> Option<Waypoint> {
    waypoints.last().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_item_ignores_extra_points() {
        let extra = [Waypoint::new(100.0, 100.0)];
        let points = competition_item(1, &extra);
        assert_eq!(points, standard_course());
        assert_eq!(goal_of(&points), Some(Waypoint::new(35.0, -1.0)));
    }

    #[test]
    fn test_item_four_appends_the_fixed_point() {
        let extra = [Waypoint::new(0.0, 0.0), Waypoint::new(-1.0, -20.0)];
        let points = competition_item(4, &extra);
        assert_eq!(points.len(), 3);
        assert_eq!(points[..2], extra[..]);
        assert_eq!(goal_of(&points), Some(Waypoint::new(-1.891, -51.341)));
    }

    #[test]
    fn test_repeated_calls_do_not_accumulate() {
        let extra = [Waypoint::new(0.0, 0.0)];
        let first = competition_item(4, &extra);
        let second = competition_item(4, &extra);
        assert_eq!(first, second);
        assert_eq!(second.len(), 2);
    }
}
