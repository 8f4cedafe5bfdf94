//axes_util.rs
use crate::settings;

// Порог, ниже которого дробная часть цены не показывается
const PRICE_FRACTION_THRESHOLD: f64 = 0.01;

pub fn format_price(price: f64) -> String {
    let abs_price = price.abs();
    let (value, suffix, decimals): (f64, &str, usize) = if abs_price >= 1_000_000.0 {
        (price / 1_000_000.0, "m", 1)
    } else if abs_price >= 1_000.0 {
        (price / 1_000.0, "k", 1)
    } else {
        (price, "", 2)
    };

    let tolerance = if suffix.is_empty() { 1e-9 } else { 10f64.powi(-(decimals as i32 + 1)) };
    let is_round = value.fract().abs() < tolerance;

    if is_round {
        format!("{:.0}{}", value, suffix)
    } else if suffix.is_empty() && abs_price > 1.0 && value.fract().abs() < PRICE_FRACTION_THRESHOLD {
        format!("{:.0}", value)
    } else {
        format!("{:.prec$}{}", value, suffix, prec = decimals)
    }
}

/// Prices for `count` evenly spaced grid lines, top (max) to bottom (min).
pub fn grid_prices(min: f64, max: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![max],
        _ => {
            let step = (max - min) / (count - 1) as f64;
            (0..count).map(|i| max - i as f64 * step).collect()
        }
    }
}

pub fn date_label_step(len: usize) -> Option<usize> {
    match len / settings::DATE_LABEL_TARGET {
        0 => None,
        step => Some(step),
    }
}
