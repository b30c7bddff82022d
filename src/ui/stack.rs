use std::collections::{BTreeMap, BTreeSet};

use games_dash::data::query::PlatformSeries;

/// Half the width, in years, of the bar drawn for a one-year band.
const SINGLE_YEAR_HALF_WIDTH: f64 = 0.4;

/// One platform's layer of the stacked-area chart.
///
/// All bands share the same x positions: the union of years over every
/// platform, a year without releases contributing zero height.
#[derive(Debug, Clone, PartialEq)]
pub struct StackedBand {
    pub platform: String,
    pub years: Vec<i32>,
    pub lower: Vec<f64>,
    pub upper: Vec<f64>,
}

impl StackedBand {
    /// Trapezoids between consecutive years, skipping zero-height ones.
    ///
    /// Each is convex, so egui can fill it directly. A band spanning a single
    /// year has no neighbour to join, so it becomes a narrow bar at that year.
    pub fn segments(&self) -> Vec<Vec<[f64; 2]>> {
        if let ([year], [lower], [upper]) = (&self.years[..], &self.lower[..], &self.upper[..]) {
            if upper <= lower {
                return Vec::new();
            }
            let x = *year as f64;
            return vec![vec![
                [x - SINGLE_YEAR_HALF_WIDTH, *lower],
                [x + SINGLE_YEAR_HALF_WIDTH, *lower],
                [x + SINGLE_YEAR_HALF_WIDTH, *upper],
                [x - SINGLE_YEAR_HALF_WIDTH, *upper],
            ]];
        }

        (1..self.years.len())
            .filter(|&i| self.upper[i - 1] > self.lower[i - 1] || self.upper[i] > self.lower[i])
            .map(|i| {
                let (x0, x1) = (self.years[i - 1] as f64, self.years[i] as f64);
                vec![
                    [x0, self.lower[i - 1]],
                    [x1, self.lower[i]],
                    [x1, self.upper[i]],
                    [x0, self.upper[i - 1]],
                ]
            })
            .collect()
    }

    /// Upper edge of the band.
    pub fn top_line(&self) -> Vec<[f64; 2]> {
        self.years
            .iter()
            .zip(&self.upper)
            .map(|(&year, &y)| [year as f64, y])
            .collect()
    }
}

/// Stack the platform series in the given order, first platform at the bottom.
pub fn stack_bands(series: &[PlatformSeries]) -> Vec<StackedBand> {
    let years: Vec<i32> = series
        .iter()
        .flat_map(|s| s.points.iter().map(|&(year, _)| year))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let mut baseline = vec![0.0; years.len()];

    series
        .iter()
        .map(|s| {
            let counts: BTreeMap<i32, usize> = s.points.iter().copied().collect();
            let lower = baseline.clone();
            for (height, year) in baseline.iter_mut().zip(&years) {
                *height += counts.get(year).copied().unwrap_or(0) as f64;
            }
            StackedBand {
                platform: s.platform.clone(),
                years: years.clone(),
                lower,
                upper: baseline.clone(),
            }
        })
        .collect()
}
