use cov_config::CovConfig;
use cov_core::entities::Event;
use cov_grounding::GroundingValidator;
use serde::Serialize;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::ValidateArgs;
use crate::dataset::PortfolioDataset;
use crate::output::output;

/// Grounding outcome for one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub event_id: String,
    pub headline: String,
    /// Result of the full memo check, computed fresh.
    pub valid: bool,
    /// What the display gate decides, cached verdict included.
    pub display: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Handle `cov validate`.
pub fn handle(args: &ValidateArgs, config: &CovConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let dataset = PortfolioDataset::load(&args.data)?;
    let validator = bootstrap::validator(config);
    tracing::debug!(
        markers = validator.rules().markers().len(),
        max_chars = validator.rules().max_disclosure_chars(),
        "grounding rules loaded"
    );
    let reports = reports(&dataset, &validator, args.event.as_deref())?;
    output(&reports, flags.format)
}

pub fn reports(
    dataset: &PortfolioDataset,
    validator: &GroundingValidator,
    event_id: Option<&str>,
) -> anyhow::Result<Vec<ValidationReport>> {
    match event_id {
        Some(id) => Ok(vec![report(dataset.event(id)?, validator)]),
        None => Ok(dataset
            .events
            .iter()
            .map(|event| report(event, validator))
            .collect()),
    }
}

fn report(event: &Event, validator: &GroundingValidator) -> ValidationReport {
    let memo = validator.validate_memo(event);
    ValidationReport {
        event_id: event.id.clone(),
        headline: event.headline.clone(),
        valid: memo.valid,
        display: validator.is_valid_for_display(event),
        errors: memo.errors,
        warnings: memo.warnings,
    }
}
