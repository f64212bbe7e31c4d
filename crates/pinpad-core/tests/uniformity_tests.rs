//! Statistical checks on layout generation
//!
//! A keypad layout must not leak positional bias: for every screen position,
//! each digit should land there with probability 1/10. These tests sample
//! many layouts and run a chi-square goodness-of-fit test per position.

use pinpad_core::{Digit, LayoutGenerator, DIGIT_COUNT};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SAMPLES: usize = 100_000;

/// Chi-square critical value for 9 degrees of freedom at p ≈ 1e-5.
/// A fair shuffle stays far below this; a biased one blows past it.
const CHI_SQUARE_LIMIT: f64 = 40.0;

type PositionCounts = [[u64; DIGIT_COUNT]; DIGIT_COUNT];

fn chi_square(observed: &[u64; DIGIT_COUNT], total: usize) -> f64 {
    let expected = total as f64 / DIGIT_COUNT as f64;
    observed
        .iter()
        .map(|&o| {
            let diff = o as f64 - expected;
            diff * diff / expected
        })
        .sum()
}

fn sample_counts(mut next_layout: impl FnMut() -> [u8; DIGIT_COUNT]) -> PositionCounts {
    let mut counts = [[0u64; DIGIT_COUNT]; DIGIT_COUNT];
    for _ in 0..SAMPLES {
        let layout = next_layout();
        for (position, &value) in layout.iter().enumerate() {
            counts[position][usize::from(value)] += 1;
        }
    }
    counts
}

fn worst_position_statistic(counts: &PositionCounts) -> f64 {
    counts
        .iter()
        .map(|row| chi_square(row, SAMPLES))
        .fold(0.0, f64::max)
}

/// Textbook mistake: swapping with any index instead of the unvisited tail.
fn naive_shuffle(rng: &mut StdRng) -> [u8; DIGIT_COUNT] {
    let mut keys: [u8; DIGIT_COUNT] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
    for i in 0..DIGIT_COUNT {
        let j = rng.gen_range(0..DIGIT_COUNT);
        keys.swap(i, j);
    }
    keys
}

#[test]
fn test_every_position_is_uniform() {
    let mut generator = LayoutGenerator::seeded(0x5eed_cafe);
    let counts = sample_counts(|| {
        let layout = generator.generate();
        let mut values = [0u8; DIGIT_COUNT];
        for (slot, digit) in values.iter_mut().zip(layout.iter()) {
            *slot = digit.value();
        }
        values
    });

    for (position, row) in counts.iter().enumerate() {
        assert_eq!(row.iter().sum::<u64>(), SAMPLES as u64);
        let stat = chi_square(row, SAMPLES);
        assert!(
            stat < CHI_SQUARE_LIMIT,
            "position {} chi-square {:.2} exceeds {}",
            position,
            stat,
            CHI_SQUARE_LIMIT
        );
    }
}

#[test]
fn test_every_digit_spreads_uniformly_over_positions() {
    let mut generator = LayoutGenerator::seeded(0xd1_5e7);
    let counts = sample_counts(|| {
        let layout = generator.generate();
        let mut values = [0u8; DIGIT_COUNT];
        for (slot, digit) in values.iter_mut().zip(layout.iter()) {
            *slot = digit.value();
        }
        values
    });

    for digit in 0..DIGIT_COUNT {
        let mut column = [0u64; DIGIT_COUNT];
        for (position, row) in counts.iter().enumerate() {
            column[position] = row[digit];
        }
        assert_eq!(column.iter().sum::<u64>(), SAMPLES as u64);
        let stat = chi_square(&column, SAMPLES);
        assert!(
            stat < CHI_SQUARE_LIMIT,
            "digit {} chi-square {:.2} exceeds {}",
            digit,
            stat,
            CHI_SQUARE_LIMIT
        );
    }
}

#[test]
fn test_every_digit_visits_every_position() {
    let mut generator = LayoutGenerator::seeded(17);
    let mut seen = [[false; DIGIT_COUNT]; DIGIT_COUNT];
    for _ in 0..10_000 {
        let layout = generator.generate();
        for digit in Digit::ALL {
            seen[usize::from(digit.value())][layout.position_of(digit)] = true;
        }
    }
    assert!(seen.iter().flatten().all(|s| *s));
}

#[test]
fn test_detects_biased_shuffle() {
    let mut rng = StdRng::seed_from_u64(0x5eed_cafe);
    let counts = sample_counts(|| naive_shuffle(&mut rng));
    let worst = worst_position_statistic(&counts);
    assert!(
        worst > CHI_SQUARE_LIMIT,
        "naive shuffle should fail the uniformity check, worst statistic {:.2}",
        worst
    );
}
