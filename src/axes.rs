// axes.rs
use crate::axes_util;
use crate::quote::QuoteSeries;
use crate::scale::ScaleMapper;
use crate::settings;
use crate::surface::Surface;
use egui::{pos2, Align2};

const LABEL_GAP: f32 = 5.0;

/// Horizontal grid lines with the interpolated price at each one.
pub fn draw_price_grid(surface: &mut impl Surface, scale: &ScaleMapper, lines: usize) {
    let (min_price, max_price) = scale.price_range();
    let left = scale.content_left() as f32;
    let right = scale.content_right() as f32;
    let top = scale.content_top();
    let height = scale.content_height();

    let prices = axes_util::grid_prices(min_price, max_price, lines);
    let gaps = prices.len().saturating_sub(1).max(1) as f64;
    for (i, price) in prices.iter().enumerate() {
        let y = (top + height * i as f64 / gaps) as f32;
        surface.line(pos2(left, y), pos2(right, y), settings::GRID_COLOR);
        surface.text(
            pos2(left - LABEL_GAP, y),
            Align2::RIGHT_CENTER,
            axes_util::format_price(*price),
            settings::LABEL_COLOR,
        );
    }
}

pub fn draw_date_labels(surface: &mut impl Surface, series: &QuoteSeries, scale: &ScaleMapper) {
    let Some(step) = axes_util::date_label_step(series.len()) else {
        return;
    };
    let y = scale.content_bottom() as f32 + LABEL_GAP;
    for (i, record) in series.iter().enumerate().step_by(step) {
        surface.text(
            pos2(scale.index_to_x(i) as f32, y),
            Align2::CENTER_TOP,
            record.date.clone(),
            settings::LABEL_COLOR,
        );
    }
}
