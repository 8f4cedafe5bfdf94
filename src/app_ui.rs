// app_ui.rs
use crate::ChartApp;
use eframe::{egui, Frame};
use mountain_chart::crosshair;
use mountain_chart::interaction::{ChartEvent, Redraw};
use mountain_chart::settings;

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("{} | MA{}", self.source, self.controller.average().period()));
                ui.label(format!("zoom {:.2}x", self.controller.zoom()));
                ui.add_space(15.0);
                // bar info
                if let Some(record) = self.controller.hovered().and_then(|i| self.controller.series().get(i)) {
                    ui.label(crosshair::format_readout(record));
                }
            });

            let available = ui.available_size();
            let mut redraw = self.controller.handle(ChartEvent::Resize {
                width: available.x,
                height: available.y - settings::CHART_BOTTOM_MARGIN,
            });

            // колесо идёт в зум, а не в прокрутку
            if ui.rect_contains_pointer(ui.available_rect_before_wrap()) {
                let scroll_delta = ctx.input_mut(|i| {
                    let delta = i.raw_scroll_delta.y;
                    i.raw_scroll_delta = egui::Vec2::ZERO;
                    i.smooth_scroll_delta = egui::Vec2::ZERO;
                    delta
                });
                if scroll_delta != 0.0 {
                    // egui reports scroll-up as positive, the controller expects it negative
                    if self.controller.handle(ChartEvent::Wheel { delta_y: -scroll_delta }) == Redraw::Full {
                        redraw = Redraw::Full;
                    }
                }
            }
            if redraw == Redraw::Full {
                // overlay was cleared with the base; rebuild it for the current pointer
                self.last_pointer = None;
            }

            egui::ScrollArea::horizontal().show(ui, |ui| {
                let size = egui::vec2(
                    self.controller.scale().surface_width() as f32,
                    self.controller.viewport().height as f32,
                );
                let (rect, response) = ui.allocate_exact_size(size, egui::Sense::hover());
                let painter = ui.painter_at(rect);
                self.controller.base().paint(&painter, rect.min);

                match response.hover_pos() {
                    Some(pos) => {
                        let local = pos - rect.min;
                        if self.last_pointer != Some(local) {
                            self.last_pointer = Some(local);
                            self.controller.handle(ChartEvent::PointerMove { x: local.x, y: local.y });
                        }
                    }
                    None => {
                        if self.last_pointer.take().is_some() {
                            self.controller.handle(ChartEvent::PointerLeave);
                        }
                    }
                }
                self.controller.overlay().paint(&painter, rect.min);
            });
        });
    }
}
