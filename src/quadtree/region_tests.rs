use crate::bodies::PointMass;
use crate::quadtree::{Region, NE, NW, SE, SW};

#[test]
fn test_region_contains_half_open() {
    let region = Region::new(-1.0, -1.0, 1.0, 1.0);
    assert!(region.contains(0.0, 0.0));
    assert!(region.contains(-1.0, -1.0)); // lower bounds inclusive
    assert!(region.contains(0.99, 0.99));
    assert!(!region.contains(1.0, 0.0));
    assert!(!region.contains(0.0, 1.0));
    assert!(!region.contains(-1.1, 0.0));
    assert!(!region.contains(f64::NAN, 0.0));
}

#[test]
fn test_quadrants_layout() {
    let region = Region::new(0.0, 0.0, 2.0, 2.0);
    let quadrants = region.quadrants();
    assert_eq!(quadrants[NW], Region::new(0.0, 1.0, 1.0, 2.0));
    assert_eq!(quadrants[NE], Region::new(1.0, 1.0, 2.0, 2.0));
    assert_eq!(quadrants[SW], Region::new(0.0, 0.0, 1.0, 1.0));
    assert_eq!(quadrants[SE], Region::new(1.0, 0.0, 2.0, 1.0));
    for q in &quadrants {
        assert_eq!(q.width(), 1.0);
        assert_eq!(q.height(), 1.0);
    }
}

#[test]
fn test_quadrants_partition_region() {
    let region = Region::new(0.1, 0.3, 0.9, 1.1);
    let quadrants = region.quadrants();
    let steps = 40;
    for i in 0..steps {
        for j in 0..steps {
            let x = region.start_x + region.width() * i as f64 / steps as f64;
            let y = region.start_y + region.height() * j as f64 / steps as f64;
            let holders: Vec<usize> = (0..4).filter(|&q| quadrants[q].contains(x, y)).collect();
            assert_eq!(holders.len(), 1, "({}, {}) held by {:?}", x, y, holders);
            assert_eq!(holders[0], region.quadrant_index(x, y));
        }
    }
}

#[test]
fn test_midpoint_belongs_to_north_east() {
    let region = Region::new(0.0, 0.0, 1.0, 1.0);
    let (mx, my) = region.midpoint();
    assert_eq!(region.quadrant_index(mx, my), NE);
    assert_eq!(region.quadrant_index(mx - 1e-9, my), NW);
    assert_eq!(region.quadrant_index(mx, my - 1e-9), SE);
}

#[test]
fn test_bounding_contains_all_points() {
    let points = [
        PointMass { x: -3.0, y: 2.0, mass: 1.0 },
        PointMass { x: 5.0, y: 2.5, mass: 1.0 },
        PointMass { x: 0.0, y: -1.0, mass: 1.0 },
    ];
    let region = Region::bounding(points);
    assert!(points.iter().all(|p| region.contains(p.x, p.y)));
    assert_eq!(region.width(), region.height());
    assert!(region.width() >= 8.0 && region.width() < 8.0 * 1.001);
}

#[test]
fn test_bounding_single_point_is_not_empty() {
    let p = PointMass { x: 0.5, y: 0.5, mass: 1.0 };
    let region = Region::bounding([p]);
    assert!(region.width() > 0.0);
    assert!(region.contains(p.x, p.y));
}

#[test]
fn test_bounding_ignores_non_finite_and_falls_back() {
    let points = [
        PointMass { x: f64::NAN, y: 0.0, mass: 1.0 },
        PointMass { x: 0.2, y: f64::INFINITY, mass: 1.0 },
    ];
    assert_eq!(Region::bounding(points), Region::new(0.0, 0.0, 1.0, 1.0));
    assert_eq!(Region::bounding(Vec::new()), Region::new(0.0, 0.0, 1.0, 1.0));
}

#[test]
fn test_is_divisible() {
    assert!(Region::new(0.0, 0.0, 1.0, 1.0).is_divisible());
    let tiny = Region::new(0.5, 0.5, 0.5 + f64::EPSILON / 2.0, 0.5 + f64::EPSILON / 2.0);
    assert!(!tiny.is_divisible());
}
