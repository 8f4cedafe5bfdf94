use mountain_chart::fetch::DataSource;
use mountain_chart::interaction::InteractionController;
use mountain_chart::scale::ViewportState;
use mountain_chart::settings;
use std::process::ExitCode;

mod app_ui;
mod gpu_backend;

struct ChartApp {
    source: String,
    controller: InteractionController,
    last_pointer: Option<eframe::egui::Vec2>,
}

impl ChartApp {
    fn new(cc: &eframe::CreationContext<'_>, source: String, controller: InteractionController) -> Self {
        tracing::info!("Creating ChartApp");
        // dark theme
        cc.egui_ctx.set_visuals(eframe::egui::Visuals::dark());
        Self {
            source,
            controller,
            last_pointer: None,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let source = DataSource::from_env();
    // no window until the data is fully loaded
    let (series, average) = match mountain_chart::load_chart(&source, settings::MA_PERIOD) {
        Ok(data) => data,
        Err(e) => {
            tracing::error!("Unable to build chart: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let controller = InteractionController::new(series, average, ViewportState::new(1200.0, 740.0));
    let title = source.location().to_string();
    tracing::info!("Running eframe::run_native");
    let result = eframe::run_native(
        "mountain-chart",
        gpu_backend::native_options(),
        Box::new(move |cc| Ok(Box::new(ChartApp::new(cc, title, controller)))),
    );
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("eframe error: {}", e);
            ExitCode::FAILURE
        }
    }
}
