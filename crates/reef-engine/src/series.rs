//! Population time series.

use indexmap::IndexMap;
use reef_core::{Species, TickId};
use serde::Serialize;

/// Live counts of every species after one tick.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PopulationSample {
    /// Tick the counts were taken after.
    pub tick: TickId,
    /// Counts indexed by [`Species::index`].
    pub counts: [usize; Species::COUNT],
}

impl PopulationSample {
    /// Count for one species.
    pub fn count(&self, species: Species) -> usize {
        self.counts[species.index()]
    }

    /// Count across all species.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// One [`PopulationSample`] per completed tick, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PopulationSeries {
    samples: Vec<PopulationSample>,
}

impl PopulationSeries {
    /// An empty series.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sample.
    pub fn record(&mut self, tick: TickId, counts: [usize; Species::COUNT]) {
        self.samples.push(PopulationSample { tick, counts });
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether no tick has been recorded.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// All samples, oldest first.
    pub fn samples(&self) -> &[PopulationSample] {
        &self.samples
    }

    /// The newest sample.
    pub fn latest(&self) -> Option<&PopulationSample> {
        self.samples.last()
    }

    /// One species' counts over time.
    pub fn series(&self, species: Species) -> Vec<usize> {
        self.samples.iter().map(|s| s.count(species)).collect()
    }

    /// Per-species columns keyed by report label, in activation order.
    pub fn by_label(&self) -> IndexMap<&'static str, Vec<usize>> {
        Species::ACTIVATION_ORDER
            .iter()
            .map(|&s| (s.label(), self.series(s)))
            .collect()
    }

    /// The columns of [`by_label`](Self::by_label) as a JSON object.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.by_label())
    }
}
