// surface.rs
use egui::{Align2, Color32, Pos2};

pub trait Surface {
    fn clear(&mut self);
    fn line(&mut self, from: Pos2, to: Pos2, color: Color32);
    fn polyline(&mut self, points: &[Pos2], color: Color32);
    /// Filled polygon made by closing `outline` straight down to `baseline` at both ends.
    fn fill_area(&mut self, outline: &[Pos2], baseline: f32, fill: Color32);
    fn text(&mut self, pos: Pos2, anchor: Align2, text: String, color: Color32);
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line { from: Pos2, to: Pos2, color: Color32 },
    Polyline { points: Vec<Pos2>, color: Color32 },
    Area { outline: Vec<Pos2>, baseline: f32, fill: Color32 },
    Text { pos: Pos2, anchor: Align2, text: String, color: Color32 },
}

impl DrawCommand {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            DrawCommand::Text { text, .. } => Some(text),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(DrawCommand::as_text)
    }

    pub fn paint(&self, painter: &egui::Painter, origin: Pos2) {
        let offset = origin.to_vec2();
        let stroke = |color: Color32| egui::Stroke::new(crate::settings::LINE_WIDTH, color);
        for command in &self.commands {
            match command {
                DrawCommand::Line { from, to, color } => {
                    painter.line_segment([*from + offset, *to + offset], stroke(*color));
                }
                DrawCommand::Polyline { points, color } => {
                    let points = points.iter().map(|p| *p + offset).collect();
                    painter.add(egui::Shape::line(points, stroke(*color)));
                }
                DrawCommand::Area { outline, baseline, fill } => {
                    painter.add(area_mesh(outline, *baseline, *fill, offset));
                }
                DrawCommand::Text { pos, anchor, text, color } => {
                    painter.text(
                        *pos + offset,
                        *anchor,
                        text,
                        egui::FontId::proportional(crate::settings::LABEL_FONT_SIZE),
                        *color,
                    );
                }
            }
        }
    }
}

impl Surface for DisplayList {
    fn clear(&mut self) {
        self.commands.clear();
    }

    fn line(&mut self, from: Pos2, to: Pos2, color: Color32) {
        self.commands.push(DrawCommand::Line { from, to, color });
    }

    fn polyline(&mut self, points: &[Pos2], color: Color32) {
        if points.len() < 2 {
            return;
        }
        self.commands.push(DrawCommand::Polyline { points: points.to_vec(), color });
    }

    fn fill_area(&mut self, outline: &[Pos2], baseline: f32, fill: Color32) {
        if outline.is_empty() {
            return;
        }
        self.commands.push(DrawCommand::Area { outline: outline.to_vec(), baseline, fill });
    }

    fn text(&mut self, pos: Pos2, anchor: Align2, text: String, color: Color32) {
        self.commands.push(DrawCommand::Text { pos, anchor, text, color });
    }
}

// egui only fills convex paths, so the area goes out as one trapezoid per segment.
fn area_mesh(outline: &[Pos2], baseline: f32, fill: Color32, offset: egui::Vec2) -> egui::Mesh {
    let mut mesh = egui::Mesh::default();
    for pair in outline.windows(2) {
        let (a, b) = (pair[0] + offset, pair[1] + offset);
        let base = mesh.vertices.len() as u32;
        mesh.colored_vertex(a, fill);
        mesh.colored_vertex(b, fill);
        mesh.colored_vertex(egui::pos2(b.x, baseline + offset.y), fill);
        mesh.colored_vertex(egui::pos2(a.x, baseline + offset.y), fill);
        mesh.add_triangle(base, base + 1, base + 2);
        mesh.add_triangle(base, base + 2, base + 3);
    }
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_and_clears() {
        let mut list = DisplayList::default();
        list.line(Pos2::ZERO, egui::pos2(1.0, 1.0), Color32::WHITE);
        list.text(Pos2::ZERO, Align2::LEFT_TOP, "x".into(), Color32::WHITE);
        assert_eq!(list.commands().len(), 2);
        assert_eq!(list.texts().collect::<Vec<_>>(), vec!["x"]);

        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn skips_degenerate_shapes() {
        let mut list = DisplayList::default();
        list.polyline(&[Pos2::ZERO], Color32::WHITE);
        list.fill_area(&[], 10.0, Color32::WHITE);
        assert!(list.is_empty());
    }

    #[test]
    fn area_mesh_has_two_triangles_per_segment() {
        let outline = [egui::pos2(0.0, 5.0), egui::pos2(10.0, 2.0), egui::pos2(20.0, 7.0)];
        let mesh = area_mesh(&outline, 10.0, Color32::WHITE, egui::Vec2::ZERO);
        assert_eq!(mesh.vertices.len(), 8);
        assert_eq!(mesh.indices.len(), 12);
        assert_eq!(mesh.vertices[2].pos, egui::pos2(10.0, 10.0));
    }
}
