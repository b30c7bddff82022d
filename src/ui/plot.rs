use std::collections::BTreeMap;

use eframe::egui::{Stroke, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints, Points, Polygon};

use games_dash::state::AppState;

use super::panels::to_color32;
use super::stack::stack_bands;

// ---------------------------------------------------------------------------
// Stacked-area chart: releases per year per platform
// ---------------------------------------------------------------------------

/// Render the per-platform release counts as stacked areas.
pub fn area_chart(ui: &mut Ui, state: &AppState) {
    ui.strong("Games released per year, stacked by platform");

    let bands = stack_bands(&state.output.area);

    Plot::new("area_chart")
        .legend(Legend::default())
        .x_axis_label("Year of release")
        .y_axis_label("Games")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for band in &bands {
                let color = to_color32(state.platform_colors.color_for(&band.platform));

                for quad in band.segments() {
                    let polygon = Polygon::new(PlotPoints::from(quad))
                        .name(&band.platform)
                        .fill_color(color.gamma_multiply(0.6))
                        .stroke(Stroke::new(0.0, color));
                    plot_ui.polygon(polygon);
                }

                let line = Line::new(PlotPoints::from(band.top_line()))
                    .name(&band.platform)
                    .color(color)
                    .width(0.5);
                plot_ui.line(line);
            }
        });
}

// ---------------------------------------------------------------------------
// Scatter chart: critic score vs user score by genre
// ---------------------------------------------------------------------------

/// Render one point per filtered record, one legend entry per genre.
pub fn scatter_chart(ui: &mut Ui, state: &AppState) {
    ui.strong("Critic score vs user score, one colour per genre");

    let mut by_genre: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
    for p in &state.output.scatter {
        by_genre
            .entry(p.genre.as_str())
            .or_default()
            .push([p.user_score, p.critic_score]);
    }

    Plot::new("scatter_chart")
        .legend(Legend::default())
        .x_axis_label("User score")
        .y_axis_label("Critic score")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (genre, points) in by_genre {
                let color = to_color32(state.genre_colors.color_for(genre));
                let points = Points::new(PlotPoints::from(points))
                    .name(genre)
                    .color(color)
                    .radius(2.5);
                plot_ui.points(points);
            }
        });
}
