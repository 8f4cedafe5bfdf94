// lib.rs

pub mod axes;
pub mod axes_util;
pub mod crosshair;
pub mod error;
pub mod fetch;
pub mod interaction;
pub mod moving_average;
pub mod quote;
pub mod renderer;
pub mod scale;
pub mod settings;
pub mod surface;

use crate::error::Result;
use crate::fetch::DataSource;
use crate::moving_average::MovingAverage;
use crate::quote::QuoteSeries;

/// Loads, parses and derives everything the chart needs before any drawing happens.
pub fn load_chart(source: &DataSource, period: usize) -> Result<(QuoteSeries, MovingAverage)> {
    let text = fetch::load_source(source)?;
    let series = QuoteSeries::parse(&text)?;
    let average = moving_average::simple_moving_average(&series, period);
    tracing::info!(
        "loaded {} quotes, {} average points (period {})",
        series.len(),
        average.len(),
        period
    );
    Ok((series, average))
}
