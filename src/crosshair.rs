// crosshair.rs
use crate::axes_util;
use crate::quote::{QuoteRecord, QuoteSeries};
use crate::scale::ScaleMapper;
use crate::settings;
use crate::surface::Surface;
use egui::{pos2, Align2};

const PRICE_TAG_GAP: f32 = 4.0;

#[derive(Default)]
pub struct Crosshair {
    cached_index: Option<usize>,
    cached_readout: Option<String>,
}

impl Crosshair {
    /// Guide lines through the pointer, the price at the pointer's height, and the OHLC
    /// readout of the record under it. Returns the record index, if any.
    pub fn draw(
        &mut self,
        surface: &mut impl Surface,
        series: &QuoteSeries,
        scale: &ScaleMapper,
        x: f32,
        y: f32,
    ) -> Option<usize> {
        surface.clear();

        let left = scale.content_left() as f32;
        let right = scale.content_right() as f32;
        let top = scale.content_top() as f32;
        let bottom = scale.content_bottom() as f32;
        surface.line(pos2(x, top), pos2(x, bottom), settings::CROSSHAIR_COLOR);
        surface.line(pos2(left, y), pos2(right, y), settings::CROSSHAIR_COLOR);
        if (top..=bottom).contains(&y) {
            surface.text(
                pos2(right + PRICE_TAG_GAP, y),
                Align2::LEFT_CENTER,
                axes_util::format_price(scale.price_at_y(y as f64)),
                settings::READOUT_COLOR,
            );
        }

        let index = scale.x_to_index(x as f64)?;
        let record = series.get(index)?;
        let readout = self.readout(index, record);
        surface.text(
            pos2(x + settings::READOUT_OFFSET, y - settings::READOUT_OFFSET),
            Align2::LEFT_BOTTOM,
            readout,
            settings::READOUT_COLOR,
        );
        Some(index)
    }

    pub fn clear(&mut self, surface: &mut impl Surface) {
        surface.clear();
    }

    pub fn reset(&mut self) {
        self.cached_index = None;
        self.cached_readout = None;
    }

    fn readout(&mut self, index: usize, record: &QuoteRecord) -> String {
        if self.cached_index == Some(index) {
            if let Some(text) = &self.cached_readout {
                return text.clone();
            }
        }
        let text = format_readout(record);
        self.cached_index = Some(index);
        self.cached_readout = Some(text.clone());
        text
    }
}

pub fn format_readout(record: &QuoteRecord) -> String {
    format!(
        "{} | o {:.2} h {:.2} l {:.2} c {:.2}",
        record.date, record.open, record.high, record.low, record.close
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::{ViewportState, ZoomState};
    use crate::surface::{DisplayList, DrawCommand};

    fn fixture() -> (QuoteSeries, ScaleMapper) {
        let series = QuoteSeries::from_records(vec![
            QuoteRecord { date: "2024-01-02".into(), open: 10.0, high: 11.0, low: 9.5, close: 10.5 },
            QuoteRecord { date: "2024-01-03".into(), open: 10.5, high: 12.25, low: 10.0, close: 12.0 },
        ]);
        let viewport = ViewportState { width: 440.0, height: 300.0, padding: 20.0 };
        let scale = ScaleMapper::new(&series, &viewport, &ZoomState::default());
        (series, scale)
    }

    #[test]
    fn draws_lines_and_readout() {
        let (series, scale) = fixture();
        let mut overlay = DisplayList::default();
        let mut crosshair = Crosshair::default();

        let hit = crosshair.draw(&mut overlay, &series, &scale, 300.0, 100.0);
        assert_eq!(hit, Some(1));
        // price range 10.5..12.0 over 260px: y=100 is 180px above the bottom
        assert_eq!(
            overlay.texts().collect::<Vec<_>>(),
            vec!["11.54", "2024-01-03 | o 10.50 h 12.25 l 10.00 c 12.00"]
        );
        assert_eq!(
            overlay.commands()[0],
            DrawCommand::Line {
                from: pos2(300.0, 20.0),
                to: pos2(300.0, 280.0),
                color: settings::CROSSHAIR_COLOR
            }
        );
    }

    #[test]
    fn outside_content_has_lines_but_no_readout() {
        let (series, scale) = fixture();
        let mut overlay = DisplayList::default();
        let mut crosshair = Crosshair::default();

        assert_eq!(crosshair.draw(&mut overlay, &series, &scale, 10.0, 5.0), None);
        assert_eq!(overlay.commands().len(), 2);
        assert_eq!(crosshair.draw(&mut overlay, &series, &scale, 425.0, 50.0), None);
        assert!(!overlay.texts().any(|t| t.contains(" | o ")));
    }

    #[test]
    fn redraw_replaces_previous_overlay() {
        let (series, scale) = fixture();
        let mut overlay = DisplayList::default();
        let mut crosshair = Crosshair::default();

        crosshair.draw(&mut overlay, &series, &scale, 30.0, 50.0);
        crosshair.draw(&mut overlay, &series, &scale, 300.0, 60.0);
        assert_eq!(overlay.commands().len(), 4);
        assert!(overlay.texts().last().unwrap().starts_with("2024-01-03"));
    }
}
