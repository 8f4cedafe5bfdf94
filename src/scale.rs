// scale.rs
use crate::quote::QuoteSeries;
use crate::settings;

// x_to_index(index_to_x(i)) must give back i despite float error
const INDEX_EPSILON: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl ViewportState {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, padding: settings::CHART_PADDING }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomState {
    factor: f64,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self { factor: 1.0 }
    }
}

impl ZoomState {
    pub fn factor(&self) -> f64 {
        self.factor
    }

    pub fn zoom_in(&mut self) {
        self.set(self.factor * settings::ZOOM_FACTOR);
    }

    pub fn zoom_out(&mut self) {
        self.set(self.factor / settings::ZOOM_FACTOR);
    }

    fn set(&mut self, factor: f64) {
        self.factor = factor.clamp(settings::ZOOM_MIN, settings::ZOOM_MAX);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleMapper {
    len: usize,
    min_price: f64,
    max_price: f64,
    padding: f64,
    surface_width: f64,
    content_width: f64,
    content_height: f64,
    x_scale: f64,
    y_scale: f64,
}

impl ScaleMapper {
    pub fn new(series: &QuoteSeries, viewport: &ViewportState, zoom: &ZoomState) -> Self {
        let len = series.len();
        let (min_price, max_price) = series.close_range().unwrap_or((0.0, 1.0));
        let padding = viewport.padding;
        let surface_width = viewport.width * zoom.factor();
        let content_width = (surface_width - 2.0 * padding).max(0.0);
        let content_height = (viewport.height - 2.0 * padding).max(0.0);

        // degenerate denominators fall back to 1
        let x_den = if len == 0 { 1.0 } else { len as f64 };
        let range = max_price - min_price;
        let y_den = if range > 0.0 { range } else { 1.0 };

        Self {
            len,
            min_price,
            max_price,
            padding,
            surface_width,
            content_width,
            content_height,
            x_scale: content_width / x_den,
            y_scale: content_height / y_den,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn price_range(&self) -> (f64, f64) {
        (self.min_price, self.max_price)
    }

    pub fn padding(&self) -> f64 {
        self.padding
    }

    // шире вьюпорта при зуме
    pub fn surface_width(&self) -> f64 {
        self.surface_width
    }

    pub fn content_width(&self) -> f64 {
        self.content_width
    }

    pub fn content_height(&self) -> f64 {
        self.content_height
    }

    pub fn content_left(&self) -> f64 {
        self.padding
    }

    pub fn content_right(&self) -> f64 {
        self.padding + self.content_width
    }

    pub fn content_top(&self) -> f64 {
        self.padding
    }

    pub fn content_bottom(&self) -> f64 {
        self.padding + self.content_height
    }

    pub fn x_scale(&self) -> f64 {
        self.x_scale
    }

    pub fn index_to_x(&self, index: usize) -> f64 {
        self.padding + index as f64 * self.x_scale
    }

    pub fn price_to_y(&self, price: f64) -> f64 {
        self.content_bottom() - (price - self.min_price) * self.y_scale
    }

    pub fn price_at_y(&self, y: f64) -> f64 {
        if self.y_scale > 0.0 {
            self.min_price + (self.content_bottom() - y) / self.y_scale
        } else {
            self.min_price
        }
    }

    /// Series index under pixel `x`, or `None` when nothing is plotted there.
    pub fn x_to_index(&self, x: f64) -> Option<usize> {
        if self.len == 0 || self.x_scale <= 0.0 || !x.is_finite() {
            return None;
        }
        if x < self.content_left() || x >= self.content_right() {
            return None;
        }
        let position = ((x - self.padding) / self.x_scale + INDEX_EPSILON).floor();
        Some((position as usize).min(self.len - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::QuoteRecord;

    fn series(closes: &[f64]) -> QuoteSeries {
        QuoteSeries::from_records(
            closes
                .iter()
                .map(|&close| QuoteRecord {
                    date: "d".into(),
                    open: close,
                    high: close,
                    low: close,
                    close,
                })
                .collect(),
        )
    }

    fn viewport() -> ViewportState {
        ViewportState { width: 840.0, height: 480.0, padding: 40.0 }
    }

    #[test]
    fn computes_content_and_scales() {
        let scale = ScaleMapper::new(&series(&[10.0, 20.0, 15.0, 12.0]), &viewport(), &ZoomState::default());
        assert_eq!(scale.content_width(), 760.0);
        assert_eq!(scale.content_height(), 400.0);
        assert_eq!(scale.x_scale(), 190.0);
        assert_eq!(scale.index_to_x(0), 40.0);
        assert_eq!(scale.index_to_x(2), 420.0);
        assert_eq!(scale.price_to_y(20.0), 40.0);
        assert_eq!(scale.price_to_y(10.0), 440.0);
        assert_eq!(scale.price_to_y(15.0), 240.0);
        assert_eq!(scale.price_at_y(240.0), 15.0);
    }

    #[test]
    fn zoom_widens_content() {
        let mut zoom = ZoomState::default();
        zoom.zoom_in();
        let scale = ScaleMapper::new(&series(&[1.0, 2.0]), &viewport(), &zoom);
        assert!((scale.surface_width() - 924.0).abs() < 1e-9);
        assert!((scale.content_width() - 844.0).abs() < 1e-9);
    }

    #[test]
    fn x_to_index_bounds() {
        let scale = ScaleMapper::new(&series(&[10.0, 20.0, 15.0, 12.0]), &viewport(), &ZoomState::default());
        assert_eq!(scale.x_to_index(39.9), None);
        assert_eq!(scale.x_to_index(40.0), Some(0));
        assert_eq!(scale.x_to_index(229.0), Some(0));
        assert_eq!(scale.x_to_index(230.0), Some(1));
        assert_eq!(scale.x_to_index(799.0), Some(3));
        assert_eq!(scale.x_to_index(800.0), None);
        assert_eq!(scale.x_to_index(-5.0), None);
        assert_eq!(scale.x_to_index(f64::NAN), None);
    }

    #[test]
    fn x_to_index_edges_at_max_zoom() {
        let mut zoom = ZoomState::default();
        for _ in 0..100 {
            zoom.zoom_in();
        }
        let wide = ViewportState { width: 1200.0, height: 740.0, padding: 40.0 };
        let scale = ScaleMapper::new(&series(&[10.0]), &wide, &zoom);
        assert_eq!(scale.content_right(), 59960.0);

        assert_eq!(scale.x_to_index(39.95), None);
        assert_eq!(scale.x_to_index(40.0), Some(0));
        assert_eq!(scale.x_to_index(59959.95), Some(0));
        assert_eq!(scale.x_to_index(59960.0), None);
    }

    #[test]
    fn flat_series_uses_fallback_scale() {
        let scale = ScaleMapper::new(&series(&[5.0]), &viewport(), &ZoomState::default());
        assert_eq!(scale.price_range(), (5.0, 5.0));
        assert!(scale.price_to_y(5.0).is_finite());
        assert_eq!(scale.price_to_y(5.0), scale.content_bottom());
        assert_eq!(scale.x_to_index(40.0), Some(0));
    }

    #[test]
    fn empty_series_is_finite_and_has_no_points() {
        let scale = ScaleMapper::new(&series(&[]), &viewport(), &ZoomState::default());
        assert!(scale.is_empty());
        assert_eq!(scale.price_range(), (0.0, 1.0));
        assert!(scale.price_to_y(0.5).is_finite());
        assert_eq!(scale.x_to_index(100.0), None);
    }

    #[test]
    fn tiny_viewport_collapses_content() {
        let tiny = ViewportState { width: 50.0, height: 50.0, padding: 40.0 };
        let scale = ScaleMapper::new(&series(&[1.0, 2.0]), &tiny, &ZoomState::default());
        assert_eq!(scale.content_width(), 0.0);
        assert_eq!(scale.content_height(), 0.0);
        assert_eq!(scale.x_to_index(40.0), None);
        assert_eq!(scale.price_at_y(40.0), 1.0);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut zoom = ZoomState::default();
        for _ in 0..200 {
            zoom.zoom_in();
        }
        assert_eq!(zoom.factor(), settings::ZOOM_MAX);
        for _ in 0..400 {
            zoom.zoom_out();
        }
        assert_eq!(zoom.factor(), settings::ZOOM_MIN);
    }
}
