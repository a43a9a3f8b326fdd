mod chart;
mod color;
mod config;
mod data;

use anyhow::Result;
use log::{info, warn};

use chart::plot::ChartStyle;
use config::ChartConfig;
use data::loader;

fn main() -> Result<()> {
    env_logger::init();

    run(&ChartConfig::default())
}

/// Load the timing file and write the comparison chart.
///
/// Loading completes before the output is touched, so a bad input leaves
/// any previous chart in place.
fn run(config: &ChartConfig) -> Result<()> {
    info!("reading timings from {}", config.input.display());
    let dataset = loader::load_file(&config.input)?;
    info!(
        "series lengths: scalar={} unrolled={} avx2={}",
        dataset.scalar.len(),
        dataset.unrolled.len(),
        dataset.avx2.len()
    );
    if dataset.is_empty() {
        warn!("no timings to plot");
    }

    chart::save_image(&dataset, &config.output, config.size, &ChartStyle::default())
}
