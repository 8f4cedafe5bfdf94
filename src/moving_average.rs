// moving_average.rs
use crate::quote::QuoteSeries;

#[derive(Debug, Clone, PartialEq)]
pub struct MovingAveragePoint {
    pub date: String,
    pub value: f64,
}

/// Simple moving average over closing prices.
///
/// Point `j` belongs to source index `j + period - 1`; the two sequences are not aligned 1:1.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovingAverage {
    period: usize,
    points: Vec<MovingAveragePoint>,
}

impl MovingAverage {
    pub fn period(&self) -> usize {
        self.period
    }

    pub fn points(&self) -> &[MovingAveragePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, j: usize) -> Option<&MovingAveragePoint> {
        self.points.get(j)
    }

    /// Index into the source series for derived point `j`.
    pub fn source_index(&self, j: usize) -> usize {
        j + self.period.saturating_sub(1)
    }
}

/// Running-sum SMA, O(N). Empty when the series is shorter than `period` or `period` is 0.
pub fn simple_moving_average(series: &QuoteSeries, period: usize) -> MovingAverage {
    let records = series.records();
    if period == 0 || records.len() < period {
        return MovingAverage { period, points: Vec::new() };
    }

    let mut points = Vec::with_capacity(records.len() - period + 1);
    let mut sum: f64 = records[..period - 1].iter().map(|r| r.close).sum();
    for i in (period - 1)..records.len() {
        sum += records[i].close;
        points.push(MovingAveragePoint {
            date: records[i].date.clone(),
            value: sum / period as f64,
        });
        sum -= records[i + 1 - period].close;
    }

    MovingAverage { period, points }
}
