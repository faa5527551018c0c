use log::info;
use matroid_intersection::intersection::intersect;
use matroid_intersection::matroid::{Matroid, PartitionMatroid, UniformMatroid};
use matroid_intersection::set::{Element, ElementType, Set};
use simple_logger::SimpleLogger;

/// Intersects a partition matroid (standing in for a transversal matroid's
/// "one job per worker" blocks) against a uniform matroid capping the total
/// crew size, and reports the resulting common independent set.
fn main() {
    SimpleLogger::new().init().unwrap();
    info!("starting transversal_vs_uniform");

    let worker = ElementType::new("WORKER");

    let ground_set = Set::new(
        worker.clone(),
        ["alice", "bob", "carol", "dave", "erin"]
            .iter()
            .map(|name| Element::tagged(worker.clone(), *name)),
    )
    .unwrap();

    let morning_shift = Set::new(
        worker.clone(),
        ["alice", "bob"].iter().map(|name| Element::tagged(worker.clone(), *name)),
    )
    .unwrap();
    let evening_shift = Set::new(
        worker.clone(),
        ["carol", "dave", "erin"]
            .iter()
            .map(|name| Element::tagged(worker.clone(), *name)),
    )
    .unwrap();

    // at most one worker may be assigned per shift...
    let shifts = PartitionMatroid::with_unit_capacity(ground_set.clone(), vec![morning_shift, evening_shift])
        .expect("shifts partition the ground set");

    // ...and at most two workers total may be on duty.
    let crew_cap = UniformMatroid::new(ground_set, 2);

    println!("rank of the shift partition: {}", shifts.rank(shifts.ground_set()));
    println!("rank of the crew cap: {}", crew_cap.rank(crew_cap.ground_set()));

    let schedule = intersect(&shifts, &crew_cap).expect("both matroids share a ground set");

    println!("maximum schedule ({} workers):", schedule.cardinality());
    for worker in schedule.iter() {
        println!("  {}", worker.key());
    }
}
