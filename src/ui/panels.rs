use std::collections::BTreeSet;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use games_dash::color::{ColorMap, Rgb8};
use games_dash::data::model::{MIN_RELEASE_YEAR, YearRange};
use games_dash::state::{AppState, FilterColumn, FilterEvent};

pub fn to_color32(c: Rgb8) -> Color32 {
    Color32::from_rgb(c.red, c.green, c.blue)
}

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel. Changes are pushed to `events`.
pub fn side_panel(ui: &mut Ui, state: &AppState, events: &mut Vec<FilterEvent>) {
    ui.heading("Filters");
    ui.separator();

    let domains = &state.dataset.domains;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            multi_select(
                ui,
                "Genre",
                FilterColumn::Genre,
                &domains.genres,
                &state.selection.genres,
                Some(&state.genre_colors),
                events,
            );
            multi_select(
                ui,
                "Rating",
                FilterColumn::Rating,
                &domains.ratings,
                &state.selection.ratings,
                None,
                events,
            );
            ui.separator();
            year_range(ui, state, events);
        });
}

/// Collapsible checklist with All / None buttons.
fn multi_select(
    ui: &mut Ui,
    label: &str,
    column: FilterColumn,
    all_values: &BTreeSet<String>,
    selected: &BTreeSet<String>,
    colors: Option<&ColorMap>,
    events: &mut Vec<FilterEvent>,
) {
    // Show count of selected / total in the header
    let header_text = format!("{label}  ({}/{})", selected.len(), all_values.len());

    egui::CollapsingHeader::new(RichText::new(header_text).strong())
        .id_salt(label)
        .default_open(true)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    events.push(FilterEvent::SelectAll(column));
                }
                if ui.small_button("None").clicked() {
                    events.push(FilterEvent::SelectNone(column));
                }
            });

            for val in all_values {
                let mut text = RichText::new(val);
                if let Some(cm) = colors {
                    text = text.color(to_color32(cm.color_for(val)));
                }

                let mut checked = selected.contains(val);
                if ui.checkbox(&mut checked, text).changed() {
                    events.push(FilterEvent::Toggle(column, val.clone()));
                }
            }
        });
}

/// Two sliders bounded by the year domain. `from > to` is allowed and shows nothing.
fn year_range(ui: &mut Ui, state: &AppState, events: &mut Vec<FilterEvent>) {
    let bounds = state.dataset.domains.year_range;
    let current = state.selection.years;
    let (mut low, mut high) = (current.low, current.high);

    ui.strong(format!("Release years  ({current})"));

    let from = ui.add(
        egui::Slider::new(&mut low, bounds.low..=bounds.high)
            .text("from")
            .step_by(1.0),
    );
    let to = ui.add(
        egui::Slider::new(&mut high, bounds.low..=bounds.high)
            .text("to")
            .step_by(1.0),
    );
    if from.changed() || to.changed() {
        events.push(FilterEvent::SetYears(YearRange::new(low, high)));
    }

    ui.horizontal_wrapped(|ui: &mut Ui| {
        for year in &state.dataset.domains.years {
            ui.weak(year.to_string());
        }
    });

    if ui.small_button("Reset years").clicked() {
        events.push(FilterEvent::SetYears(bounds));
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title, usage note and the summary label.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading("Interactive dashboard: video game statistics");
        ui.separator();
        ui.label(RichText::new(state.summary_text()).strong().size(18.0));
    });
    ui.label(format!(
        "Games released from {MIN_RELEASE_YEAR} onward. Genre and rating filters accept \
         several values; the release year filter is a range."
    ));
}
