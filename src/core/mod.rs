pub mod classify;
pub mod feedback;
pub mod render;
pub mod view;

use crate::config::Config;
use crate::source::RecordSource;
use anyhow::{Context, Result};
use view::ViewModel;

/// Fetch the current record, validate it, and resolve every display value.
/// Nothing is rendered until the whole pipeline has succeeded.
pub fn build_report(source: &dyn RecordSource, cfg: &Config) -> Result<ViewModel> {
    let record = source
        .fetch()
        .with_context(|| format!("could not load assessment record from {}", source.describe()))?;

    if cfg.general.validate_scores {
        record
            .validate()
            .context("assessment record failed validation")?;
    }

    Ok(ViewModel::build(&record))
}
