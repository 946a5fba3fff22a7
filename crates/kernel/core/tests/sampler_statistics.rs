use std::sync::Arc;
use std::thread;

use kernel_core::{RandomOracle, RandomSampler};

const SAMPLES: usize = 20_000;

#[test]
fn uniform_covers_every_face_of_a_die() {
    let sampler = RandomSampler::seeded(1);
    let mut counts = [0usize; 6];
    for _ in 0..SAMPLES {
        let roll = sampler.uniform(1, 6);
        assert!((1..=6).contains(&roll));
        counts[(roll - 1) as usize] += 1;
    }

    let expected = SAMPLES / 6;
    for count in counts {
        assert!(count.abs_diff(expected) < expected / 10, "{counts:?}");
    }
}

#[test]
fn weighted_concentrates_around_midpoint() {
    let sampler = RandomSampler::seeded(2);
    let mut central_weighted = 0usize;
    let mut central_uniform = 0usize;
    let mut total = 0i64;

    for _ in 0..SAMPLES {
        let w = sampler.weighted(0, 100);
        assert!((0..=100).contains(&w));
        total += i64::from(w);
        if (25..=75).contains(&w) {
            central_weighted += 1;
        }
        if (25..=75).contains(&sampler.uniform(0, 100)) {
            central_uniform += 1;
        }
    }

    // One standard deviation either side holds about 68% of a normal draw;
    // a uniform draw puts about 50% there.
    assert!(central_weighted > SAMPLES * 62 / 100, "{central_weighted}");
    assert!(central_weighted > central_uniform + SAMPLES / 10);

    let mean = total as f64 / SAMPLES as f64;
    assert!((mean - 49.5).abs() < 1.5, "mean {mean}");
}

#[test]
fn weighted_still_reaches_both_ends() {
    let sampler = RandomSampler::seeded(3);
    let draws: Vec<i32> = (0..SAMPLES).map(|_| sampler.weighted(0, 10)).collect();
    assert!(draws.contains(&0));
    assert!(draws.contains(&10));
}

#[test]
fn bernoulli_extremes_are_certain() {
    let sampler = RandomSampler::seeded(4);
    for _ in 0..SAMPLES {
        assert!(!sampler.bernoulli(0.0));
        assert!(sampler.bernoulli(1.0));
    }
}

#[test]
fn bernoulli_tracks_probability() {
    let sampler = RandomSampler::seeded(5);
    let hits = (0..SAMPLES).filter(|_| sampler.bernoulli(0.3)).count();
    let rate = hits as f64 / SAMPLES as f64;
    assert!((rate - 0.3).abs() < 0.02, "rate {rate}");

    let heads = (0..SAMPLES).filter(|_| sampler.bernoulli_even()).count();
    let rate = heads as f64 / SAMPLES as f64;
    assert!((rate - 0.5).abs() < 0.02, "rate {rate}");
}

#[test]
fn oracle_helpers_roll_percentages() {
    let oracle: &dyn RandomOracle = &RandomSampler::seeded(6);
    for _ in 0..1_000 {
        assert!((1..=100).contains(&oracle.roll_d100()));
        assert!(oracle.chance(100));
        assert!(!oracle.chance(0));
    }
}

#[test]
fn shared_sampler_serves_many_threads() {
    let sampler = Arc::new(RandomSampler::from_entropy());

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let sampler = Arc::clone(&sampler);
            thread::spawn(move || {
                for _ in 0..1_000 {
                    let v = sampler.uniform(-worker, worker * 10);
                    assert!((-worker..=worker * 10).contains(&v));
                    let w = sampler.weighted(worker, -worker);
                    assert!((-worker..=worker).contains(&w));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("sampler worker panicked");
    }
}
