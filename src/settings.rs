// settings.rs
use crate::renderer::MaAlignment;
use egui::Color32;

pub const MA_PERIOD: usize = 20;
pub const MA_ALIGNMENT: MaAlignment = MaAlignment::SourceIndex;
pub const ZOOM_FACTOR: f64 = 1.1; // множитель на один шаг колеса
pub const ZOOM_MIN: f64 = 0.1;
pub const ZOOM_MAX: f64 = 50.0;
pub const CHART_PADDING: f64 = 40.0;
pub const CHART_BOTTOM_MARGIN: f32 = 16.0; // место под горизонтальную прокрутку
pub const GRID_LINES: usize = 5;
pub const DATE_LABEL_TARGET: usize = 10; // примерно столько подписей дат по оси X
pub const READOUT_OFFSET: f32 = 12.0; // смещение текста OHLC от курсора
pub const FIELD_DELIMITER: u8 = b',';

pub const DATA_SOURCE_ENV: &str = "MOUNTAIN_CHART_SOURCE";
pub const DEFAULT_DATA_SOURCE: &str = "data/quotes.csv";
pub const LOAD_TIMEOUT_SECS: u64 = 10;
pub const LOAD_RETRIES: u32 = 2;
pub const LOAD_RETRY_PAUSE_MS: u64 = 500;

pub const GRID_COLOR: Color32 = Color32::from_rgb(60, 60, 60);
pub const LABEL_COLOR: Color32 = Color32::from_rgb(170, 170, 170);
pub const AREA_STROKE_COLOR: Color32 = Color32::from_rgb(70, 130, 180);
pub const AREA_FILL_COLOR: Color32 = Color32::from_rgba_premultiplied(17, 32, 45, 64);
pub const MA_COLOR: Color32 = Color32::from_rgb(230, 160, 40);
pub const CROSSHAIR_COLOR: Color32 = Color32::from_rgba_premultiplied(100, 100, 100, 100);
pub const READOUT_COLOR: Color32 = Color32::from_rgb(230, 230, 230);
pub const LINE_WIDTH: f32 = 1.0;
pub const LABEL_FONT_SIZE: f32 = 11.0;
