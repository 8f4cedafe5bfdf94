use mountain_chart::error::ChartError;
use mountain_chart::fetch::DataSource;
use mountain_chart::interaction::InteractionController;
use mountain_chart::scale::ViewportState;
use mountain_chart::surface::DrawCommand;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_source(body: &str) -> (NamedTempFile, DataSource) {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(body.as_bytes()).unwrap();
    file.flush().unwrap();
    let source = DataSource::File(file.path().display().to_string());
    (file, source)
}

#[test]
fn loads_series_and_average_from_file() {
    let mut body = String::from("date,open,high,low,close\n");
    for i in 0..25 {
        body.push_str(&format!("2024-02-{:02},{},{},{},{}\n", i + 1, 100 + i, 101 + i, 99 + i, 100 + i));
    }
    let (_file, source) = write_source(&body);

    let (series, average) = mountain_chart::load_chart(&source, 20).unwrap();
    assert_eq!(series.len(), 25);
    assert_eq!(average.len(), 6);
    assert_eq!(average.source_index(0), 19);
    assert_eq!(average.get(0).unwrap().date, "2024-02-20");
    assert!((average.get(0).unwrap().value - 109.5).abs() < 1e-9);
}

#[test]
fn header_only_source_draws_bare_grid() {
    let (_file, source) = write_source("date,open,high,low,close\n");
    let (series, average) = mountain_chart::load_chart(&source, 20).unwrap();
    assert!(series.is_empty());
    assert!(average.is_empty());

    let controller = InteractionController::new(series, average, ViewportState::new(800.0, 600.0));
    let base = controller.base();
    let lines = base.commands().iter().filter(|c| matches!(c, DrawCommand::Line { .. })).count();
    assert_eq!(lines, 5);
    assert!(!base
        .commands()
        .iter()
        .any(|c| matches!(c, DrawCommand::Area { .. } | DrawCommand::Polyline { .. })));
}

#[test]
fn malformed_row_rejects_load() {
    let (_file, source) = write_source("date,open,high,low,close\nd1,1,2,0.5,1\nd2,1,2,oops,1\n");
    match mountain_chart::load_chart(&source, 20) {
        Err(ChartError::Parse { line, reason }) => {
            assert_eq!(line, 3);
            assert!(reason.contains("low"), "{}", reason);
        }
        other => panic!("unexpected: {:?}", other),
    }
}

#[test]
fn missing_source_is_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let source = DataSource::File(dir.path().join("absent.csv").display().to_string());
    assert!(matches!(
        mountain_chart::load_chart(&source, 20),
        Err(ChartError::Load { .. })
    ));
}
