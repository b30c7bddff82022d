use std::collections::{BTreeMap, BTreeSet};

use super::filter::{FilterSelection, filtered_indices};
use super::model::GameDataset;

// ---------------------------------------------------------------------------
// Query outputs
// ---------------------------------------------------------------------------

/// Release counts for one platform, ascending by year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformSeries {
    pub platform: String,
    /// `(year, number of records)`; only years with at least one record.
    pub points: Vec<(i32, usize)>,
}

/// Input of the stacked-area chart, ordered by platform name.
pub type AreaSeries = Vec<PlatformSeries>;

/// One point of the score scatter chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub user_score: f64,
    pub critic_score: f64,
    /// Colour key.
    pub genre: String,
}

/// Everything the dashboard redraws after a filter change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryOutput {
    pub area: AreaSeries,
    pub scatter: Vec<ScatterPoint>,
    /// Distinct titles, not rows: a game on three platforms counts once.
    pub total_titles: usize,
}

impl QueryOutput {
    /// Text of the summary label.
    pub fn summary_text(&self) -> String {
        format!("total games: {}", self.total_titles)
    }

    /// Number of filtered rows behind the charts.
    pub fn row_count(&self) -> usize {
        self.scatter.len()
    }
}

// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

/// Filter the dataset and derive both chart inputs and the title count.
///
/// Pure: the same dataset and selection always give the same output.
pub fn query(dataset: &GameDataset, selection: &FilterSelection) -> QueryOutput {
    let indices = filtered_indices(dataset, selection);
    let rows = indices.iter().map(|&i| &dataset.records[i]);

    let mut groups: BTreeMap<&str, BTreeMap<i32, usize>> = BTreeMap::new();
    let mut titles: BTreeSet<&str> = BTreeSet::new();
    let mut scatter = Vec::with_capacity(indices.len());

    for rec in rows {
        *groups
            .entry(rec.platform.as_str())
            .or_default()
            .entry(rec.year)
            .or_default() += 1;
        titles.insert(rec.title.as_str());
        scatter.push(ScatterPoint {
            user_score: rec.user_score,
            critic_score: rec.critic_score,
            genre: rec.genre.clone(),
        });
    }

    let area: AreaSeries = groups
        .into_iter()
        .map(|(platform, by_year)| PlatformSeries {
            platform: platform.to_string(),
            points: by_year.into_iter().collect(),
        })
        .collect();

    log::debug!(
        "Query (genres: {}, ratings: {}, years: {}) matched {} rows, {} titles, {} platforms",
        selection.genres.len(),
        selection.ratings.len(),
        selection.years,
        scatter.len(),
        titles.len(),
        area.len(),
    );

    QueryOutput {
        area,
        scatter,
        total_titles: titles.len(),
    }
}
