use anyhow::{Result, anyhow};
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use rayon::prelude::*;

use combinadic::{CodecError, Rank, Ranking};

/// Decode every rank of `codec`, encode the result again and compare.
///
/// Returns the number of ranks checked.
pub(crate) fn run_verify(codec: &(dyn Ranking + Sync)) -> Result<usize> {
    let count = usize::try_from(codec.count()).map_err(|_| CodecError::Precision {
        what: "number of objects",
    })?;
    tracing::info!(count, "verifying round trips");

    let progress = ProgressBar::new(count as u64);
    progress.set_style(ProgressStyle::with_template(
        "{bar:40.cyan/blue} {pos}/{len} ({eta})",
    )?);

    let failure = (0..count)
        .into_par_iter()
        .progress_with(progress.clone())
        .find_map_any(|r| check_rank(codec, Rank::from(r)).err());
    progress.finish_and_clear();

    match failure {
        Some(err) => Err(err),
        None => Ok(count),
    }
}

fn check_rank(codec: &(dyn Ranking + Sync), rank: Rank) -> Result<()> {
    let object = codec.decode(&rank)?;
    let reencoded = codec.encode(&object)?;
    if reencoded != rank {
        return Err(anyhow!(
            "rank {rank} decodes to {object:?}, which encodes to {reencoded}"
        ));
    }
    Ok(())
}
