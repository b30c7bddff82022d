use std::collections::BTreeSet;
use std::sync::Arc;

use crate::color::ColorMap;
use crate::data::filter::FilterSelection;
use crate::data::model::{GameDataset, YearRange};
use crate::data::query::{QueryOutput, query};

// ---------------------------------------------------------------------------
// Filter events
// ---------------------------------------------------------------------------

/// The two multi-select filter columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterColumn {
    Genre,
    Rating,
}

/// A single widget change, as delivered by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEvent {
    /// Flip one value in a multi-select.
    Toggle(FilterColumn, String),
    SelectAll(FilterColumn),
    SelectNone(FilterColumn),
    SetYears(YearRange),
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// One viewer's dashboard state, independent of rendering.
///
/// The dataset is shared read-only; the selection and outputs belong to this
/// viewer alone.
pub struct AppState {
    pub dataset: Arc<GameDataset>,

    /// Current widget values.
    pub selection: FilterSelection,

    /// Outputs of the last query over `selection`.
    pub output: QueryOutput,

    /// Scatter colours, one per genre in the load-time domain.
    pub genre_colors: ColorMap,

    /// Area colours, one per platform in the load-time domain.
    pub platform_colors: ColorMap,
}

impl AppState {
    /// Initialise with every filter value selected.
    pub fn new(dataset: Arc<GameDataset>) -> Self {
        let selection = FilterSelection::all(&dataset.domains);
        let output = query(&dataset, &selection);
        let genre_colors = ColorMap::new(&dataset.domains.genres);
        let platform_colors = ColorMap::new(&dataset.domains.platforms);

        Self {
            dataset,
            selection,
            output,
            genre_colors,
            platform_colors,
        }
    }

    /// Apply one widget change and recompute the outputs.
    pub fn apply(&mut self, event: FilterEvent) {
        self.update_selection(event);
        self.refresh();
    }

    /// Apply a frame's worth of events, querying once at the end.
    pub fn apply_all(&mut self, events: impl IntoIterator<Item = FilterEvent>) {
        let mut changed = false;
        for event in events {
            self.update_selection(event);
            changed = true;
        }
        if changed {
            self.refresh();
        }
    }

    /// Text of the summary label.
    pub fn summary_text(&self) -> String {
        self.output.summary_text()
    }

    fn selected_mut(&mut self, column: FilterColumn) -> &mut BTreeSet<String> {
        match column {
            FilterColumn::Genre => &mut self.selection.genres,
            FilterColumn::Rating => &mut self.selection.ratings,
        }
    }

    fn update_selection(&mut self, event: FilterEvent) {
        log::debug!("Filter event: {event:?}");
        match event {
            FilterEvent::Toggle(column, value) => {
                let selected = self.selected_mut(column);
                if !selected.remove(&value) {
                    selected.insert(value);
                }
            }
            FilterEvent::SelectAll(column) => {
                let all = match column {
                    FilterColumn::Genre => self.dataset.domains.genres.clone(),
                    FilterColumn::Rating => self.dataset.domains.ratings.clone(),
                };
                *self.selected_mut(column) = all;
            }
            FilterEvent::SelectNone(column) => self.selected_mut(column).clear(),
            FilterEvent::SetYears(range) => self.selection.years = range,
        }
    }

    fn refresh(&mut self) {
        self.output = query(&self.dataset, &self.selection);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::fallback_color;
    use crate::data::model::GameRecord;

    fn rec(title: &str, platform: &str, year: i32, genre: &str, rating: &str) -> GameRecord {
        GameRecord {
            title: title.into(),
            platform: platform.into(),
            year,
            genre: genre.into(),
            publisher: "Acme".into(),
            critic_score: 75.0,
            user_score: 7.5,
            rating: rating.into(),
        }
    }

    fn state() -> AppState {
        let ds = GameDataset::from_records(vec![
            rec("Tetris", "GB", 2001, "Puzzle", "E"),
            rec("Doom 3", "PC", 2004, "Shooter", "M"),
            rec("Doom 3", "XB", 2005, "Shooter", "M"),
        ])
        .unwrap();
        AppState::new(Arc::new(ds))
    }

    #[test]
    fn starts_with_everything_selected() {
        let st = state();
        assert_eq!(st.selection.years, YearRange::new(2001, 2005));
        assert_eq!(st.output.row_count(), 3);
        assert_eq!(st.summary_text(), "total games: 2");
    }

    #[test]
    fn toggle_removes_then_restores() {
        let mut st = state();
        st.apply(FilterEvent::Toggle(FilterColumn::Genre, "Shooter".into()));
        assert_eq!(st.summary_text(), "total games: 1");

        st.apply(FilterEvent::Toggle(FilterColumn::Genre, "Shooter".into()));
        assert_eq!(st.summary_text(), "total games: 2");
    }

    #[test]
    fn select_none_then_all() {
        let mut st = state();
        st.apply(FilterEvent::SelectNone(FilterColumn::Rating));
        assert!(st.output.area.is_empty());
        assert!(st.output.scatter.is_empty());
        assert_eq!(st.summary_text(), "total games: 0");

        st.apply(FilterEvent::SelectAll(FilterColumn::Rating));
        assert_eq!(st.output.row_count(), 3);
    }

    #[test]
    fn year_events_narrow_and_invert() {
        let mut st = state();
        st.apply_all([FilterEvent::SetYears(YearRange::new(2004, 2004))]);
        assert_eq!(st.output.area.len(), 1);
        assert_eq!(st.output.area[0].platform, "PC");

        st.apply(FilterEvent::SetYears(YearRange::new(2005, 2001)));
        assert_eq!(st.summary_text(), "total games: 0");
    }

    #[test]
    fn viewers_do_not_share_selections() {
        let ds = Arc::clone(&state().dataset);
        let mut first = AppState::new(Arc::clone(&ds));
        let second = AppState::new(ds);

        first.apply(FilterEvent::SelectNone(FilterColumn::Genre));
        assert_eq!(first.output.row_count(), 0);
        assert_eq!(second.output.row_count(), 3);
    }

    #[test]
    fn colours_cover_the_whole_domain() {
        let mut st = state();
        let before = st.genre_colors.color_for("Puzzle");
        st.apply(FilterEvent::Toggle(FilterColumn::Genre, "Shooter".into()));
        assert_eq!(st.genre_colors.color_for("Puzzle"), before);
        for platform in ["GB", "PC", "XB"] {
            assert_ne!(st.platform_colors.color_for(platform), fallback_color());
        }
    }
}
