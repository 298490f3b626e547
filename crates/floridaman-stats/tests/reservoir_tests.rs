use rand::rngs::StdRng;
use rand::SeedableRng;

use floridaman_stats::Reservoir;

const STREAM: usize = 60;
const SLOTS: usize = 6;
const RUNS: u64 = 4000;

fn fill(seed: u64) -> Reservoir<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut reservoir = Reservoir::new(SLOTS);
    for item in 0..STREAM {
        reservoir.offer(item, &mut rng);
    }
    reservoir
}

#[test]
fn full_reservoir_keeps_replacing() {
    let mut kept = [0u32; STREAM];
    let mut changed = false;
    for seed in 0..RUNS {
        let reservoir = fill(seed);
        assert_eq!(reservoir.len(), SLOTS);
        assert_eq!(reservoir.seen(), STREAM as u64);
        changed |= reservoir.items().iter().any(|&i| i >= SLOTS);
        for &item in reservoir.items() {
            kept[item] += 1;
        }
    }
    assert!(changed, "no item past the first {SLOTS} was ever retained");

    // Each item survives with probability 6/60, so about 400 times in 4000 runs.
    let expected = RUNS as f64 * SLOTS as f64 / STREAM as f64;
    eprintln!("retention: first={} last={} expected={expected}", kept[0], kept[STREAM - 1]);
    for (item, count) in kept.iter().enumerate() {
        let ratio = f64::from(*count) / expected;
        assert!((0.75..=1.25).contains(&ratio), "item {item} kept {count} times");
    }
}

#[test]
fn items_are_distinct_stream_elements() {
    for seed in 0..50 {
        let mut items = fill(seed).items().to_vec();
        items.sort_unstable();
        items.dedup();
        assert_eq!(items.len(), SLOTS);
    }
}

#[test]
fn skipped_elements_count_but_never_land() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut reservoir = Reservoir::new(2);
    reservoir.skip();
    reservoir.offer("a", &mut rng);
    reservoir.skip();
    assert_eq!(reservoir.items(), &["a"]);
    assert_eq!(reservoir.seen(), 3);
}
