use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::normalize::{ValueRange, normalize, value_range};
use crate::core::{DataPoint, NormalizedPoint};
use crate::error::{ChartError, ChartResult};

/// Ordered line-series data with its derived value range.
///
/// Every mutation bumps `version` and recomputes the range from scratch, so
/// consumers can memoize derived geometry against the version number.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "SeriesData")]
pub struct ChartSeries {
    points: Vec<DataPoint>,
    range: Option<ValueRange>,
    version: u64,
    /// `IndexMap` keeps insertion order so snapshots stay stable.
    metadata: IndexMap<String, String>,
}

impl ChartSeries {
    pub fn new(points: Vec<DataPoint>) -> ChartResult<Self> {
        let mut series = Self::default();
        series.set_points(points)?;
        Ok(series)
    }

    /// Builds a series from bare values, labelling each point with its value.
    pub fn from_values(values: &[f64]) -> ChartResult<Self> {
        Self::new(values.iter().copied().map(DataPoint::from_value).collect())
    }

    pub fn set_points(&mut self, points: Vec<DataPoint>) -> ChartResult<()> {
        validate_points(&points)?;
        self.points = points;
        self.recompute();
        Ok(())
    }

    pub fn push(&mut self, point: DataPoint) -> ChartResult<()> {
        validate_points(std::slice::from_ref(&point))?;
        self.points.push(point);
        self.recompute();
        Ok(())
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.recompute();
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&DataPoint> {
        self.points.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|point| point.value).collect()
    }

    #[must_use]
    pub fn range(&self) -> Option<ValueRange> {
        self.range
    }

    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    #[must_use]
    pub fn normalized_points(&self) -> Vec<NormalizedPoint> {
        normalize(&self.values())
    }

    #[must_use]
    pub fn metadata(&self) -> &IndexMap<String, String> {
        &self.metadata
    }

    pub fn set_metadata(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.metadata.insert(key.into(), value.into());
    }

    pub fn remove_metadata(&mut self, key: &str) -> Option<String> {
        self.metadata.shift_remove(key)
    }

    fn recompute(&mut self) {
        self.range = value_range(&self.values());
        self.version = self.version.wrapping_add(1);
    }
}

/// Serialized form accepted on input. The range and version are always
/// recomputed from the points.
#[derive(Deserialize)]
struct SeriesData {
    points: Vec<DataPoint>,
    #[serde(default)]
    metadata: IndexMap<String, String>,
}

impl TryFrom<SeriesData> for ChartSeries {
    type Error = ChartError;

    fn try_from(data: SeriesData) -> ChartResult<Self> {
        let mut series = Self::new(data.points)?;
        series.metadata = data.metadata;
        Ok(series)
    }
}

fn validate_points(points: &[DataPoint]) -> ChartResult<()> {
    if let Some(position) = points.iter().position(|point| !point.value.is_finite()) {
        return Err(ChartError::InvalidData(format!(
            "point value at index {position} must be finite"
        )));
    }
    Ok(())
}
