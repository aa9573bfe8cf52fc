use std::io::Write;

use crate::{DemoConfig, Scenario, Summary, SummaryFormat};

/// Build the sample scenario and write the demo output to `out`: two
/// authorization banners, the summary, then `Done!`.
pub fn run(config: &DemoConfig, out: &mut impl Write) -> anyhow::Result<()> {
    let scenario = Scenario::build()?;
    tracing::info!(orders = scenario.registry.all_orders().len(), "scenario built");

    writeln!(out, "{}", scenario.alice.authorize("ecilA").banner())?;
    writeln!(out, "{}", scenario.alice.authorize("Alice").banner())?;

    let summary = Summary::of(&scenario)?;
    match config.summary {
        SummaryFormat::Text => write!(out, "{summary}")?,
        SummaryFormat::Json => writeln!(out, "{}", summary.to_json()?)?,
    }

    writeln!(out, "Done!")?;
    Ok(())
}
