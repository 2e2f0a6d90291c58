//! A loaded six-sided die: configured vs empirical frequencies.
//!
//! Draws 100k times from a biased pmf and prints how closely the observed
//! frequencies track the configured ones.

use omikuji::WeightedSampler;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let faces = vec![1u8, 2, 3, 4, 5, 6];
    let probs = [0.05, 0.05, 0.1, 0.1, 0.2, 0.5];
    let die = WeightedSampler::new(faces, &probs)?;

    let trials = 100_000usize;
    let mut counts = [0usize; 6];

    let mut rng = ChaCha8Rng::seed_from_u64(6);
    for _ in 0..trials {
        let face = *die.next_with_rng(&mut rng);
        counts[face as usize - 1] += 1;
    }

    println!("face  configured  observed");
    for (i, (&count, &p)) in counts.iter().zip(die.probabilities()).enumerate() {
        let freq = count as f64 / trials as f64;
        println!("  {}      {:.4}    {:.4}", i + 1, p, freq);
    }

    Ok(())
}
