// src/renderer.rs
use eframe::egui::{self, Color32, Pos2, Rect, Shape, Vec2};

use crate::model::DrawingModel;
use crate::stroke::Stroke;

#[derive(Debug, Clone)]
pub struct Renderer {
    background: Color32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            background: Color32::from_gray(16),
        }
    }
}

impl Renderer {
    /// Paints the canvas background and every visible stroke
    ///
    /// Args:
    ///     painter (egui::Painter): The painter to draw with
    ///     rect (egui::Rect): The canvas rectangle; stroke points are relative to its corner
    ///     model (DrawingModel): The strokes to paint
    pub fn render(&self, painter: &egui::Painter, rect: Rect, model: &DrawingModel) {
        painter.extend(self.shapes(rect, model));
    }

    /// Everything [`Renderer::render`] paints, bottom to top
    pub fn shapes(&self, rect: Rect, model: &DrawingModel) -> Vec<Shape> {
        let offset = rect.min.to_vec2();
        let mut shapes = vec![Shape::rect_filled(rect, 0.0, self.background)];
        for stroke in model.visible_strokes() {
            shapes.extend(stroke_shapes(stroke, offset));
        }
        shapes
    }
}

/// Shapes for one stroke: a polyline plus a disc at every vertex, which
/// gives round caps and joins. A single point becomes a dot.
///
/// Discs would double the alpha where they overlap the line, so translucent
/// strokes get the bare polyline.
pub fn stroke_shapes(stroke: &Stroke, offset: Vec2) -> Vec<Shape> {
    let style = stroke.style();
    let color = style.color();
    let radius = style.width() / 2.0;
    let points: Vec<Pos2> = stroke.points().iter().map(|p| *p + offset).collect();

    match points.len() {
        0 => Vec::new(),
        1 => vec![Shape::circle_filled(points[0], radius, color)],
        _ if !color.is_opaque() => {
            vec![Shape::line(points, egui::Stroke::new(style.width(), color))]
        }
        _ => {
            let mut shapes = Vec::with_capacity(points.len() + 1);
            shapes.push(Shape::line(
                points.clone(),
                egui::Stroke::new(style.width(), color),
            ));
            shapes.extend(
                points
                    .into_iter()
                    .map(|p| Shape::circle_filled(p, radius, color)),
            );
            shapes
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StrokeStyle;

    fn style(width: f32) -> StrokeStyle {
        StrokeStyle::new(Color32::RED, width).unwrap()
    }

    #[test]
    fn test_empty_stroke_renders_nothing() {
        let stroke = Stroke::new(style(4.0), Vec::new());
        assert!(stroke_shapes(&stroke, Vec2::ZERO).is_empty());
    }

    #[test]
    fn test_single_point_is_a_dot() {
        let stroke = Stroke::new(style(6.0), vec![egui::pos2(5.0, 5.0)]);
        let shapes = stroke_shapes(&stroke, egui::vec2(100.0, 50.0));

        assert_eq!(shapes.len(), 1);
        match &shapes[0] {
            Shape::Circle(circle) => {
                assert_eq!(circle.center, egui::pos2(105.0, 55.0));
                assert_eq!(circle.radius, 3.0);
                assert_eq!(circle.fill, Color32::RED);
            }
            other => panic!("expected a circle, got {other:?}"),
        }
    }

    #[test]
    fn test_polyline_has_round_joins() {
        let points = vec![egui::pos2(0.0, 0.0), egui::pos2(10.0, 0.0), egui::pos2(10.0, 10.0)];
        let stroke = Stroke::new(style(2.0), points);
        let shapes = stroke_shapes(&stroke, Vec2::ZERO);

        // One line plus one disc per vertex
        assert_eq!(shapes.len(), 4);
        assert!(matches!(shapes[0], Shape::Path(_)));
        assert!(shapes[1..].iter().all(|s| matches!(s, Shape::Circle(_))));
    }

    #[test]
    fn test_translucent_stroke_has_no_discs() {
        let color = Color32::from_rgba_unmultiplied(255, 0, 0, 128);
        let translucent = StrokeStyle::new(color, 4.0).unwrap();
        let points = vec![egui::pos2(0.0, 0.0), egui::pos2(10.0, 0.0), egui::pos2(10.0, 10.0)];
        let stroke = Stroke::new(translucent, points);
        let shapes = stroke_shapes(&stroke, Vec2::ZERO);

        assert_eq!(shapes.len(), 1);
        assert!(matches!(shapes[0], Shape::Path(_)));

        // A translucent dot is still a single disc
        let dot = Stroke::new(translucent, vec![egui::pos2(1.0, 1.0)]);
        assert_eq!(stroke_shapes(&dot, Vec2::ZERO).len(), 1);
    }

    #[test]
    fn test_render_basics() {
        let mut model = DrawingModel::new();
        model.begin_stroke(style(3.0)).unwrap();
        model.append_point(egui::pos2(1.0, 1.0)).unwrap();
        model.end_stroke();
        model.begin_stroke(StrokeStyle::new(Color32::BLUE, 2.0).unwrap()).unwrap();
        model.append_point(egui::pos2(2.0, 2.0)).unwrap();

        let renderer = Renderer::default();
        let rect = egui::Rect::from_min_size(egui::pos2(20.0, 10.0), egui::vec2(100.0, 100.0));
        let shapes = renderer.shapes(rect, &model);

        // Background, then the committed dot, then the active dot on top
        assert_eq!(shapes.len(), 3);
        assert!(matches!(shapes[0], Shape::Rect(_)));
        match (&shapes[1], &shapes[2]) {
            (Shape::Circle(first), Shape::Circle(second)) => {
                assert_eq!(first.center, egui::pos2(21.0, 11.0));
                assert_eq!(first.fill, Color32::RED);
                assert_eq!(second.center, egui::pos2(22.0, 12.0));
                assert_eq!(second.fill, Color32::BLUE);
            }
            other => panic!("expected two circles, got {other:?}"),
        }

        let ctx = egui::Context::default();
        let painter = egui::Painter::new(ctx, egui::LayerId::background(), rect);
        renderer.render(&painter, rect, &model);
    }
}
