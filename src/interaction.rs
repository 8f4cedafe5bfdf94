// interaction.rs
use crate::crosshair::Crosshair;
use crate::moving_average::MovingAverage;
use crate::quote::QuoteSeries;
use crate::renderer::ChartRenderer;
use crate::scale::{ScaleMapper, ViewportState, ZoomState};
use crate::surface::DisplayList;

/// Input in surface pixel coordinates, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChartEvent {
    PointerMove { x: f32, y: f32 },
    PointerLeave,
    Wheel { delta_y: f32 },
    Resize { width: f32, height: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redraw {
    None,
    Overlay,
    Full,
}

pub struct InteractionController {
    series: QuoteSeries,
    average: MovingAverage,
    viewport: ViewportState,
    zoom: ZoomState,
    scale: ScaleMapper,
    renderer: ChartRenderer,
    crosshair: Crosshair,
    base: DisplayList,
    overlay: DisplayList,
    hovered: Option<usize>,
}

impl InteractionController {
    pub fn new(series: QuoteSeries, average: MovingAverage, viewport: ViewportState) -> Self {
        Self::with_renderer(series, average, viewport, ChartRenderer::default())
    }

    pub fn with_renderer(
        series: QuoteSeries,
        average: MovingAverage,
        viewport: ViewportState,
        renderer: ChartRenderer,
    ) -> Self {
        let zoom = ZoomState::default();
        let scale = ScaleMapper::new(&series, &viewport, &zoom);
        let mut controller = Self {
            series,
            average,
            viewport,
            zoom,
            scale,
            renderer,
            crosshair: Crosshair::default(),
            base: DisplayList::default(),
            overlay: DisplayList::default(),
            hovered: None,
        };
        controller.redraw();
        controller
    }

    pub fn handle(&mut self, event: ChartEvent) -> Redraw {
        match event {
            ChartEvent::PointerMove { x, y } => {
                self.hovered = self.crosshair.draw(&mut self.overlay, &self.series, &self.scale, x, y);
                Redraw::Overlay
            }
            ChartEvent::PointerLeave => {
                self.clear_overlay();
                Redraw::Overlay
            }
            ChartEvent::Wheel { delta_y } => self.wheel(delta_y),
            ChartEvent::Resize { width, height } => self.resize(width, height),
        }
    }

    // zoom is kept
    pub fn reload(&mut self, series: QuoteSeries, average: MovingAverage) {
        self.series = series;
        self.average = average;
        self.crosshair.reset();
        self.redraw();
    }

    pub fn series(&self) -> &QuoteSeries {
        &self.series
    }

    pub fn average(&self) -> &MovingAverage {
        &self.average
    }

    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    pub fn zoom(&self) -> f64 {
        self.zoom.factor()
    }

    pub fn scale(&self) -> &ScaleMapper {
        &self.scale
    }

    pub fn base(&self) -> &DisplayList {
        &self.base
    }

    pub fn overlay(&self) -> &DisplayList {
        &self.overlay
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    fn wheel(&mut self, delta_y: f32) -> Redraw {
        let before = self.zoom.factor();
        if delta_y < 0.0 {
            self.zoom.zoom_in();
        } else if delta_y > 0.0 {
            self.zoom.zoom_out();
        }
        if self.zoom.factor() == before {
            return Redraw::None;
        }
        tracing::debug!("zoom {:.3} -> {:.3}", before, self.zoom.factor());
        self.redraw();
        Redraw::Full
    }

    fn resize(&mut self, width: f32, height: f32) -> Redraw {
        if !(width > 0.0 && height > 0.0) {
            return Redraw::None;
        }
        let (width, height) = (width as f64, height as f64);
        if self.viewport.width == width && self.viewport.height == height {
            return Redraw::None;
        }
        tracing::debug!("resize {}x{}", width, height);
        self.viewport.width = width;
        self.viewport.height = height;
        self.redraw();
        Redraw::Full
    }

    fn redraw(&mut self) {
        self.scale = ScaleMapper::new(&self.series, &self.viewport, &self.zoom);
        self.renderer.draw(&mut self.base, &self.series, &self.average, &self.scale);
        // overlay geometry belongs to the old scale
        self.clear_overlay();
    }

    fn clear_overlay(&mut self) {
        self.crosshair.clear(&mut self.overlay);
        self.hovered = None;
    }
}
