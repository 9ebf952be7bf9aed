use crate::bodies::Body;
use crate::errors::SimulationError;
use crate::simulation::{partition_ranges, WorkerPool};

#[test]
fn test_partition_ranges_cover_everything_once() {
    for n in [0, 1, 2, 7, 8, 9, 100, 1001] {
        for workers in 1..=12 {
            let ranges = partition_ranges(n, workers);
            assert_eq!(ranges.len(), workers);
            let mut next = 0;
            for range in &ranges {
                assert_eq!(range.start, next, "gap or overlap for n={} workers={}", n, workers);
                next = range.end;
            }
            assert_eq!(next, n);

            let stride = n / workers;
            for range in &ranges[..workers - 1] {
                assert_eq!(range.len(), stride);
            }
            assert_eq!(ranges[workers - 1].len(), stride + n % workers);
        }
    }
}

#[test]
fn test_partition_ranges_example() {
    assert_eq!(partition_ranges(10, 4), vec![0..2, 2..4, 4..6, 6..10]);
    assert_eq!(partition_ranges(5, 1), vec![0..5]);
}

#[test]
fn test_zero_workers_rejected() {
    assert!(matches!(WorkerPool::new(0), Err(SimulationError::InvalidWorkerCount)));
}

#[test]
fn test_for_each_block_visits_every_body_once() {
    for workers in [1, 2, 3, 8] {
        let pool = WorkerPool::new(workers).unwrap();
        assert_eq!(pool.workers(), workers);
        let mut bodies: Vec<Body> = (0..103)
            .map(|i| Body::new(i as f64, 0.0, 0.0, 0.0, 1.0).unwrap())
            .collect();
        pool.for_each_block(&mut bodies, |block| {
            for body in block.iter_mut() {
                body.velocity_x += 1.0;
            }
        });
        assert!(bodies.iter().all(|b| b.velocity_x == 1.0));
        assert!(bodies.iter().enumerate().all(|(i, b)| b.x == i as f64));
    }
}

#[test]
fn test_for_each_block_handles_fewer_bodies_than_workers() {
    let pool = WorkerPool::new(4).unwrap();
    let mut bodies = vec![Body::new(0.0, 0.0, 0.0, 0.0, 1.0).unwrap(); 2];
    pool.for_each_block(&mut bodies, |block| {
        for body in block.iter_mut() {
            body.mass *= 2.0;
        }
    });
    assert!(bodies.iter().all(|b| b.mass == 2.0));

    let mut empty: Vec<Body> = Vec::new();
    pool.for_each_block(&mut empty, |_| panic!("No block expected for zero bodies"));
}
