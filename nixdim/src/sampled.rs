use ndarray::Array1;
use num_traits::cast;
use tracing::debug;

use crate::{
    attrs,
    dimension::{self, text_attribute, DimensionBase, DimensionType},
    errors::{Error, Result},
    store::{Store, Value},
};

const SAMPLING_INTERVAL: &str = "sampling_interval";
const OFFSET: &str = "offset";

/// A dimension with uniformly spaced samples.
///
/// The position of the sample at `index` is `index * sampling_interval + offset`, where a missing
/// offset counts as 0. The dimension has no upper bound.
///
pub struct SampledDimension<S: Store> {
    store: S,
}

impl<S: Store> SampledDimension<S> {
    /// Create a new sampled dimension under `parent`.
    ///
    /// # Arguments
    ///
    /// * `parent` - Store node of the owning data array. The dimension is attached to the child
    ///   named after `index`.
    /// * `index` - 1-based position of the dimension in the data array.
    /// * `sampling_interval` - Distance between two adjacent samples. Zero and negative intervals
    ///   are accepted.
    ///
    pub fn create(parent: &S, index: usize, sampling_interval: f64) -> Result<Self> {
        let dimension: Self =
            dimension::create_new(parent, index, DimensionType::Sample, Self::new)?;
        dimension.set_sampling_interval(sampling_interval)?;

        Ok(dimension)
    }

    pub(crate) fn new(store: S) -> Self {
        Self { store }
    }

    pub fn sampling_interval(&self) -> Result<f64> {
        attrs::get_required(&self.store, SAMPLING_INTERVAL, attrs::expect_number)
    }

    pub fn set_sampling_interval(&self, sampling_interval: f64) -> Result<()> {
        debug!(sampling_interval, "set sampling interval");
        self.store
            .set_attr(SAMPLING_INTERVAL, Value::Float(sampling_interval))
    }

    pub fn offset(&self) -> Result<Option<f64>> {
        attrs::get_optional(&self.store, OFFSET, attrs::expect_number)
    }

    pub fn set_offset(&self, offset: f64) -> Result<()> {
        debug!(offset, "set offset");
        self.store.set_attr(OFFSET, Value::Float(offset))
    }

    text_attribute!(label);
    text_attribute!(unit);

    /// Position of the sample at `index`.
    ///
    pub fn position_at(&self, index: usize) -> Result<f64> {
        let (sampling_interval, offset) = self.transform()?;

        Ok(sample_position(index, sampling_interval, offset))
    }

    /// Index of the sample nearest to `position`.
    ///
    /// The fractional index is rounded half to even, so a position exactly between two samples
    /// resolves to the even index. Positions that would land below index 0 are out of bounds, as
    /// are positions that don't resolve to a finite index (eg with a zero sampling interval).
    ///
    pub fn index_of(&self, position: f64) -> Result<usize> {
        let (sampling_interval, offset) = self.transform()?;
        let index = ((position - offset) / sampling_interval).round_ties_even();

        // -0.0 casts to 0, anything below is rejected
        cast(index).ok_or_else(|| {
            Error::OutOfBounds(format!(
                "position {position} is out of bounds of this dimension"
            ))
        })
    }

    /// Positions of `count` consecutive samples, starting with the sample at `start`.
    ///
    pub fn axis(&self, count: usize, start: usize) -> Result<Array1<f64>> {
        let (sampling_interval, offset) = self.transform()?;
        let stop = start.checked_add(count).ok_or_else(|| {
            Error::OutOfBounds(format!("axis of {count} samples from {start} overflows"))
        })?;

        Ok(Array1::from_iter(
            (start..stop).map(|index| sample_position(index, sampling_interval, offset)),
        ))
    }

    fn transform(&self) -> Result<(f64, f64)> {
        let sampling_interval = self.sampling_interval()?;
        let offset = self.offset()?.unwrap_or(0.0);

        Ok((sampling_interval, offset))
    }
}

fn sample_position(index: usize, sampling_interval: f64, offset: f64) -> f64 {
    index as f64 * sampling_interval + offset
}

impl<S: Store> DimensionBase for SampledDimension<S> {
    type Store = S;

    fn store(&self) -> &S {
        &self.store
    }
}
