use std::io::BufRead;

use anyhow::Result;
use itertools::Itertools;
use rand::{SeedableRng, rngs::StdRng};

use combinadic::reservoir;

/// Sample `size` lines of `input`, formatted for printing.
pub(crate) fn run_sample(
    input: impl BufRead,
    size: usize,
    seed: Option<u64>,
    json: bool,
) -> Result<String> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let lines = input
        .lines()
        .map(|line| line.map(|l| l.trim().to_string()));
    let sample = itertools::process_results(lines, |lines| {
        reservoir::sample(lines, size, &mut rng)
    })?;
    tracing::debug!(size, kept = sample.len(), "sampled input");

    if json {
        Ok(serde_json::to_string(&sample)?)
    } else {
        Ok(std::iter::once("Sample:")
            .chain(sample.iter().map(String::as_str))
            .join("\n"))
    }
}
