// File: crates/slate-core/src/dataset.rs
// Summary: Dataset model (ordered label/value pairs) and the validated dataset collection used by layout.

use crate::error::{ConfigError, Result};

/// One labelled value.
#[derive(Clone, Debug, PartialEq)]
pub struct Datum {
    pub label: String,
    pub value: f64,
}

impl Datum {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self { label: label.into(), value }
    }
}

/// Ordered sequence of (label, value) pairs.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    name: String,
    data: Vec<Datum>,
}

impl Dataset {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), data: Vec::new() }
    }

    pub fn with_data<L: Into<String>>(
        name: impl Into<String>,
        data: impl IntoIterator<Item = (L, f64)>,
    ) -> Self {
        let data = data.into_iter().map(|(label, value)| Datum::new(label, value)).collect();
        Self { name: name.into(), data }
    }

    /// Build a dataset whose labels are the 1-based point positions.
    pub fn from_values(name: impl Into<String>, values: &[f64]) -> Self {
        Self::with_data(name, values.iter().enumerate().map(|(i, &v)| ((i + 1).to_string(), v)))
    }

    pub fn push(&mut self, label: impl Into<String>, value: f64) {
        self.data.push(Datum::new(label, value));
    }

    pub fn name(&self) -> &str { &self.name }

    pub fn data(&self) -> &[Datum] { &self.data }

    pub fn count(&self) -> usize { self.data.len() }

    pub fn is_empty(&self) -> bool { self.data.is_empty() }

    /// Largest value in the dataset, or 0.0 when it is empty.
    pub fn max_value(&self) -> f64 {
        self.data.iter().map(|d| d.value).fold(f64::NEG_INFINITY, f64::max).max(0.0)
    }

    /// Reject empty datasets and non-finite values.
    pub fn validate(&self) -> Result<()> {
        if self.data.is_empty() {
            return Err(ConfigError::EmptyDataset { name: self.name.clone() });
        }
        if let Some(index) = self.data.iter().position(|d| !d.value.is_finite()) {
            return Err(ConfigError::NonFiniteValue { name: self.name.clone(), index });
        }
        Ok(())
    }
}

/// A non-empty, ordered collection of datasets that all have the same point count.
/// Declaration order is preserved: it is the stacking order (bottom to top) and
/// the grouping order (left to right).
#[derive(Clone, Copy, Debug)]
pub struct Datasets<'a> {
    sets: &'a [Dataset],
}

impl<'a> Datasets<'a> {
    pub fn new(sets: &'a [Dataset]) -> Result<Self> {
        let first = sets.first().ok_or(ConfigError::NoDatasets)?;
        for set in sets {
            set.validate()?;
            if set.count() != first.count() {
                return Err(ConfigError::MismatchedLengths {
                    name: set.name.clone(),
                    found: set.count(),
                    first: first.name.clone(),
                    expected: first.count(),
                });
            }
        }
        Ok(Self { sets })
    }

    /// Number of datasets.
    pub fn len(&self) -> usize { self.sets.len() }

    pub fn is_empty(&self) -> bool { false }

    /// Number of points in every dataset.
    pub fn point_count(&self) -> usize { self.sets[0].count() }

    pub fn first(&self) -> &'a Dataset { &self.sets[0] }

    pub fn iter(&self) -> std::slice::Iter<'a, Dataset> { self.sets.iter() }

    pub fn as_slice(&self) -> &'a [Dataset] { self.sets }

    /// Sum of dataset maxima (worst-case stacked height).
    pub fn sum_of_maxima(&self) -> f64 {
        self.sets.iter().map(Dataset::max_value).sum()
    }

    /// Largest single dataset maximum.
    pub fn max_of_maxima(&self) -> f64 {
        self.sets.iter().map(Dataset::max_value).fold(0.0, f64::max)
    }
}

impl<'a> IntoIterator for Datasets<'a> {
    type Item = &'a Dataset;
    type IntoIter = std::slice::Iter<'a, Dataset>;

    fn into_iter(self) -> Self::IntoIter { self.sets.iter() }
}
