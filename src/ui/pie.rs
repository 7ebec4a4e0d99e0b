use std::f64::consts::TAU;

use eframe::egui::{Color32, RichText, Stroke, Ui};
use egui_plot::{Legend, Plot, PlotPoint, Polygon, Text};

use crate::chart::ProportionChart;
use crate::color::ColorMap;

/// Arc resolution for a full turn.
const ARC_STEPS: f64 = 180.0;

/// Where slice annotations sit, as a fraction of the radius.
const LABEL_RADIUS: f64 = 0.65;

// ---------------------------------------------------------------------------
// Pie chart rendered on an egui_plot canvas
// ---------------------------------------------------------------------------

/// Render `chart` as a pie, clockwise from 12 o'clock. Hovering a slice
/// shows its label and value.
pub fn pie_chart(ui: &mut Ui, id: &str, chart: &ProportionChart, colors: &ColorMap, height: f32) {
    match &chart.title {
        Some(title) => ui.heading(title),
        None => ui.heading(""),
    };

    let wedges = chart.wedges();

    let response = Plot::new(id)
        .height(height)
        .data_aspect(1.0)
        .legend(Legend::default())
        .show_axes([false, false])
        .show_grid([false, false])
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false)
        .include_x(-1.1)
        .include_x(1.1)
        .include_y(-1.1)
        .include_y(1.1)
        .show(ui, |plot_ui| {
            for (slice, &(start, end)) in chart.slices.iter().zip(&wedges) {
                if end <= start {
                    continue;
                }
                let polygon = Polygon::new(wedge_points(start, end))
                    .name(&slice.label)
                    .fill_color(colors.color_for(&slice.label))
                    .stroke(Stroke::new(1.0, Color32::WHITE));
                plot_ui.polygon(polygon);

                if slice.annotated {
                    let [x, y] = on_circle((start + end) / 2.0, LABEL_RADIUS);
                    let text = format!("{}\n{}", slice.label, slice.value_text());
                    plot_ui.text(Text::new(
                        PlotPoint::new(x, y),
                        RichText::new(text).color(Color32::BLACK).strong(),
                    ));
                }
            }

            plot_ui.pointer_coordinate().and_then(|p| {
                if p.x.hypot(p.y) > 1.0 {
                    return None;
                }
                chart.slice_at_angle(p.x.atan2(p.y))
            })
        });

    if let Some(slice) = response.inner.and_then(|i| chart.slices.get(i)) {
        response
            .response
            .on_hover_text(format!("{}: {}", slice.label, slice.value_text()));
    }
}

/// Point at angle `theta` measured clockwise from 12 o'clock.
fn on_circle(theta: f64, radius: f64) -> [f64; 2] {
    [radius * theta.sin(), radius * theta.cos()]
}

/// Centre followed by the arc from `start` to `end`. egui fills polygons as
/// a fan from the first vertex, so wedges wider than half a turn still fill
/// correctly.
fn wedge_points(start: f64, end: f64) -> Vec<[f64; 2]> {
    let steps = ((end - start) / TAU * ARC_STEPS).ceil().max(1.0) as usize;
    std::iter::once([0.0, 0.0])
        .chain((0..=steps).map(|k| {
            let theta = start + (end - start) * k as f64 / steps as f64;
            on_circle(theta, 1.0)
        }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_o_clock_is_angle_zero() {
        let [x, y] = on_circle(0.0, 1.0);
        assert!(x.abs() < 1e-12 && (y - 1.0).abs() < 1e-12);
        // A quarter turn clockwise lands on 3 o'clock.
        let [x, y] = on_circle(TAU / 4.0, 1.0);
        assert!((x - 1.0).abs() < 1e-12 && y.abs() < 1e-12);
        // Hover inverts the mapping.
        let theta: f64 = 1.234;
        let [x, y] = on_circle(theta, 0.5);
        assert!((x.atan2(y) - theta).abs() < 1e-12);
    }

    #[test]
    fn wedge_starts_at_centre_and_spans_its_arc() {
        let points = wedge_points(0.0, TAU / 2.0);
        assert_eq!(points[0], [0.0, 0.0]);
        let first = points[1];
        let last = points[points.len() - 1];
        assert!(first[0].abs() < 1e-12 && (first[1] - 1.0).abs() < 1e-12);
        assert!(last[0].abs() < 1e-9 && (last[1] + 1.0).abs() < 1e-12);
        assert!(points.len() > 60);
    }
}
