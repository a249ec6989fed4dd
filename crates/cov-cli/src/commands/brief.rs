use chrono::Days;
use cov_brief::view::BriefView;
use cov_brief::{BriefAggregator, BriefInputs};
use cov_config::CovConfig;
use cov_core::viewer::Viewer;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::BriefArgs;
use crate::dataset::PortfolioDataset;
use crate::output::output;

/// Handle `cov brief`.
pub fn handle(args: &BriefArgs, config: &CovConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let dataset = PortfolioDataset::load(&args.data)?;
    let viewer = bootstrap::viewer(args.role, &config.access);
    let view = build(&dataset, config, args.as_of, &viewer)?;
    output(&view, flags.format)
}

/// Assemble the brief for `as_of` (or the latest stored brief).
pub fn build(
    dataset: &PortfolioDataset,
    config: &CovConfig,
    as_of: Option<chrono::NaiveDate>,
    viewer: &Viewer,
) -> anyhow::Result<BriefView> {
    let snapshot = dataset.brief(as_of)?;
    let as_of = snapshot.as_of_date;
    let previous_date = as_of
        .checked_sub_days(Days::new(u64::from(config.brief.previous_period_days)))
        .ok_or_else(|| anyhow::anyhow!("previous period before {as_of} is out of range"))?;

    let current = dataset.snapshots_on(as_of);
    let previous = dataset.snapshots_on(previous_date);
    let leases = dataset.lease_index();

    tracing::debug!(
        %as_of,
        %previous_date,
        current = current.len(),
        previous = previous.len(),
        "building brief"
    );

    let inputs = BriefInputs {
        snapshot,
        current: &current,
        previous: &previous,
        tenants: &dataset.tenants,
        events: &dataset.events,
        properties: &dataset.properties,
        leases: &leases,
    };
    let aggregator = BriefAggregator::new(
        bootstrap::validator(config),
        bootstrap::brief_settings(&config.brief),
    );
    Ok(aggregator.build(&inputs, viewer))
}
