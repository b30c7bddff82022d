use std::collections::BTreeSet;

use games_dash::data::filter::{FilterSelection, filtered_indices};
use games_dash::data::loader::clean;
use games_dash::data::model::{GameDataset, MIN_RELEASE_YEAR, RawRecord, YearRange};
use games_dash::data::query::query;
use proptest::prelude::*;

const PLATFORMS: [&str; 4] = ["PS2", "X360", "Wii", "PC"];
const GENRES: [&str; 4] = ["Action", "Sports", "Puzzle", "Racing"];
const RATINGS: [&str; 3] = ["E", "T", "M"];
const TITLES: [&str; 6] = ["Alpha", "Bravo", "Charlie", "Delta", "Echo", "Foxtrot"];

fn raw_record() -> impl Strategy<Value = RawRecord> {
    (
        0..TITLES.len(),
        0..PLATFORMS.len(),
        1996i32..2012,
        0..GENRES.len(),
        0..RATINGS.len(),
        prop::option::weighted(0.9, 0.0f64..100.0),
        prop::option::weighted(0.9, 0.0f64..10.0),
        prop::bool::weighted(0.1),
    )
        .prop_map(|(t, p, year, g, r, critic, user, blank)| RawRecord {
            name: Some(TITLES[t].to_string()),
            platform: Some(PLATFORMS[p].to_string()),
            year: Some(year as f64),
            genre: Some(GENRES[g].to_string()),
            publisher: Some("Acme".to_string()),
            critic_score: critic,
            user_score: user,
            rating: Some(RATINGS[r].to_string()),
            has_blank_cell: blank,
        })
}

fn subset(domain: &'static [&'static str]) -> impl Strategy<Value = BTreeSet<String>> {
    prop::sample::subsequence(domain.to_vec(), 0..=domain.len())
        .prop_map(|vals| vals.into_iter().map(String::from).collect())
}

fn selection() -> impl Strategy<Value = FilterSelection> {
    (subset(&GENRES), subset(&RATINGS), 1998i32..2014, 1998i32..2014).prop_map(
        |(genres, ratings, low, high)| FilterSelection {
            genres,
            ratings,
            years: YearRange::new(low, high),
        },
    )
}

fn dataset(raw: Vec<RawRecord>) -> Option<GameDataset> {
    clean(raw).ok()
}

proptest! {
    #[test]
    fn query_is_deterministic(raw in prop::collection::vec(raw_record(), 1..60), sel in selection()) {
        if let Some(ds) = dataset(raw) {
            prop_assert_eq!(query(&ds, &sel), query(&ds, &sel));
        }
    }

    #[test]
    fn area_counts_sum_to_filtered_rows(raw in prop::collection::vec(raw_record(), 1..60), sel in selection()) {
        if let Some(ds) = dataset(raw) {
            let out = query(&ds, &sel);
            let rows = filtered_indices(&ds, &sel).len();

            let total: usize = out.area.iter().flat_map(|s| &s.points).map(|&(_, n)| n).sum();
            prop_assert_eq!(total, rows);
            prop_assert_eq!(out.scatter.len(), rows);
            for series in &out.area {
                prop_assert!(!series.points.is_empty());
                prop_assert!(series.points.iter().all(|&(_, n)| n > 0));
                prop_assert!(series.points.windows(2).all(|w| w[0].0 < w[1].0));
            }
        }
    }

    #[test]
    fn distinct_titles_bounded_by_rows(raw in prop::collection::vec(raw_record(), 1..60), sel in selection()) {
        if let Some(ds) = dataset(raw) {
            let out = query(&ds, &sel);
            let indices = filtered_indices(&ds, &sel);
            prop_assert!(out.total_titles <= indices.len());

            let titles: BTreeSet<&str> = indices.iter().map(|&i| ds.records[i].title.as_str()).collect();
            let repeats = titles.len() < indices.len();
            prop_assert_eq!(out.total_titles == indices.len(), !repeats);
        }
    }

    #[test]
    fn vacuous_selection_is_empty(raw in prop::collection::vec(raw_record(), 1..60), sel in selection(), which in 0..3usize) {
        if let Some(ds) = dataset(raw) {
            let mut sel = sel;
            match which {
                0 => sel.genres.clear(),
                1 => sel.ratings.clear(),
                _ => {
                    let top = sel.years.low.max(sel.years.high);
                    let bottom = sel.years.low.min(sel.years.high);
                    sel.years = YearRange::new(top + 1, bottom);
                }
            }
            prop_assert!(sel.is_vacuous());

            let out = query(&ds, &sel);
            prop_assert!(filtered_indices(&ds, &sel).is_empty());
            prop_assert!(out.area.is_empty() && out.scatter.is_empty());
            prop_assert_eq!(out.total_titles, 0);
            prop_assert_eq!(out.summary_text(), "total games: 0");
        }
    }

    #[test]
    fn loader_never_keeps_old_or_incomplete_rows(raw in prop::collection::vec(raw_record(), 1..60)) {
        let expected = raw
            .iter()
            .filter(|r| r.critic_score.is_some() && r.user_score.is_some() && !r.has_blank_cell)
            .filter(|r| r.year.is_some_and(|y| y >= MIN_RELEASE_YEAR as f64))
            .count();

        match dataset(raw) {
            Some(ds) => {
                prop_assert_eq!(ds.len(), expected);
                prop_assert!(ds.domains.year_range.low >= MIN_RELEASE_YEAR);
                prop_assert!(ds.records.iter().all(|r| r.year >= MIN_RELEASE_YEAR));
            }
            None => {
                prop_assert_eq!(expected, 0);
            }
        }
    }
}
