// renderer.rs
use crate::axes;
use crate::moving_average::MovingAverage;
use crate::quote::QuoteSeries;
use crate::scale::ScaleMapper;
use crate::settings;
use crate::surface::Surface;
use egui::{pos2, Pos2};

const MARKER_HALF_WIDTH: f32 = 3.0;

/// Where moving-average point `j` is plotted on the x axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaAlignment {
    /// At its source bar, `j + period - 1`.
    SourceIndex,
    /// At `j` itself: the average ends `period - 1` bars short of the price line.
    DerivedIndex,
}

#[derive(Debug, Clone, Copy)]
pub struct ChartRenderer {
    pub grid_lines: usize,
    pub ma_alignment: MaAlignment,
}

impl Default for ChartRenderer {
    fn default() -> Self {
        Self {
            grid_lines: settings::GRID_LINES,
            ma_alignment: settings::MA_ALIGNMENT,
        }
    }
}

impl ChartRenderer {
    pub fn new(ma_alignment: MaAlignment) -> Self {
        Self { ma_alignment, ..Self::default() }
    }

    pub fn draw(
        &self,
        surface: &mut impl Surface,
        series: &QuoteSeries,
        average: &MovingAverage,
        scale: &ScaleMapper,
    ) {
        surface.clear();
        axes::draw_price_grid(surface, scale, self.grid_lines);
        axes::draw_date_labels(surface, series, scale);
        self.draw_price_area(surface, series, scale);
        self.draw_average(surface, average, scale);
    }

    fn draw_price_area(&self, surface: &mut impl Surface, series: &QuoteSeries, scale: &ScaleMapper) {
        if series.is_empty() {
            return;
        }
        let outline: Vec<Pos2> = series
            .closes()
            .enumerate()
            .map(|(i, close)| pos2(scale.index_to_x(i) as f32, scale.price_to_y(close) as f32))
            .collect();

        let baseline = scale.content_bottom() as f32;
        if let [point] = outline[..] {
            // одна котировка: площади нет, рисуем столбик до базовой линии
            surface.line(pos2(point.x, baseline), point, settings::AREA_STROKE_COLOR);
            point_marker(surface, point, settings::AREA_STROKE_COLOR);
            return;
        }
        surface.fill_area(&outline, baseline, settings::AREA_FILL_COLOR);
        surface.polyline(&outline, settings::AREA_STROKE_COLOR);
    }

    fn draw_average(&self, surface: &mut impl Surface, average: &MovingAverage, scale: &ScaleMapper) {
        if average.is_empty() {
            return;
        }
        let points: Vec<Pos2> = average
            .points()
            .iter()
            .enumerate()
            .map(|(j, point)| {
                let index = match self.ma_alignment {
                    MaAlignment::SourceIndex => average.source_index(j),
                    MaAlignment::DerivedIndex => j,
                };
                pos2(scale.index_to_x(index) as f32, scale.price_to_y(point.value) as f32)
            })
            .collect();

        match points[..] {
            [point] => point_marker(surface, point, settings::MA_COLOR),
            _ => surface.polyline(&points, settings::MA_COLOR),
        }
    }
}

fn point_marker(surface: &mut impl Surface, point: Pos2, color: egui::Color32) {
    surface.line(
        pos2(point.x - MARKER_HALF_WIDTH, point.y),
        pos2(point.x + MARKER_HALF_WIDTH, point.y),
        color,
    );
}
