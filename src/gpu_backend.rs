// src/gpu_backend.rs
use eframe::egui;

pub fn native_options() -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(egui::vec2(1200.0, 800.0))
            .with_min_inner_size(egui::vec2(300.0, 200.0)),
        multisampling: 4,
        depth_buffer: 0,
        stencil_buffer: 0,
        renderer: eframe::Renderer::Wgpu,
        ..Default::default()
    }
}
