use ndarray::{s, Array1, ArrayView1};
use tracing::{debug, warn};

use crate::{
    dimension::{self, text_attribute, DimensionBase, DimensionType},
    errors::{Error, Result},
    store::{Data, ElementType, Store},
};

const TICKS: &str = "ticks";

/// A dimension with explicitly given, ascending positions ("ticks").
///
pub struct RangeDimension<S: Store> {
    store: S,
}

impl<S: Store> RangeDimension<S> {
    /// Create a new range dimension under `parent`.
    ///
    /// `ticks` are checked before anything is written, so a rejected set of ticks leaves no
    /// dimension behind.
    ///
    pub fn create(parent: &S, index: usize, ticks: ArrayView1<f64>) -> Result<Self> {
        check_ascending(ticks)?;
        let dimension: Self =
            dimension::create_new(parent, index, DimensionType::Range, Self::new)?;
        dimension.set_ticks(ticks)?;

        Ok(dimension)
    }

    pub(crate) fn new(store: S) -> Self {
        Self { store }
    }

    /// The stored ticks, or `None` if ticks were never written.
    ///
    pub fn ticks(&self) -> Result<Option<Array1<f64>>> {
        if !self.store.contains(TICKS) {
            return Ok(None);
        }

        match self.store.read_dataset(TICKS)? {
            Data::Float(ticks) => Ok(Some(ticks)),
            Data::Text(_) => Err(Error::TypeMismatch {
                name: TICKS.to_string(),
                expected: "an array of real numbers",
            }),
        }
    }

    /// Replace the stored ticks.
    ///
    /// Ticks must not decrease. Equal adjacent ticks are allowed. On failure the previously
    /// stored ticks are left as they were.
    ///
    pub fn set_ticks(&self, ticks: ArrayView1<f64>) -> Result<()> {
        check_ascending(ticks)?;

        if self.store.contains(TICKS) {
            self.store.delete_dataset(TICKS)?;
        }
        self.store
            .create_dataset(TICKS, ticks.len(), ElementType::Double, true)?;
        self.store
            .write_dataset(TICKS, Data::Float(ticks.to_owned()))?;
        debug!(count = ticks.len(), "set ticks");

        Ok(())
    }

    /// Number of stored ticks, or `None` if ticks were never written.
    pub fn tick_count(&self) -> Result<Option<usize>> {
        Ok(self.ticks()?.map(|ticks| ticks.len()))
    }

    text_attribute!(label);
    text_attribute!(unit);

    pub fn tick_at(&self, index: usize) -> Result<f64> {
        let ticks = self.require_ticks()?;

        ticks.get(index).copied().ok_or_else(|| {
            Error::OutOfBounds(format!(
                "index {index} is out of bounds for ticks with length {}",
                ticks.len()
            ))
        })
    }

    /// Index of the first tick at or above `position`.
    ///
    /// Positions below the first tick map to index 0 and positions above the last tick map to
    /// the last index.
    ///
    pub fn index_of(&self, position: f64) -> Result<usize> {
        let ticks = self.require_ticks()?;

        ceiling(ticks.view(), position)
    }

    /// `count` consecutive ticks, starting with the tick at `start`.
    ///
    pub fn axis(&self, count: usize, start: usize) -> Result<Array1<f64>> {
        let ticks = self.require_ticks()?;
        let stop = start.checked_add(count).filter(|stop| *stop <= ticks.len());

        match stop {
            Some(stop) => Ok(ticks.slice(s![start..stop]).to_owned()),
            None => Err(Error::OutOfBounds(format!(
                "axis of {count} ticks from {start} reaches beyond the {} ticks stored",
                ticks.len()
            ))),
        }
    }

    fn require_ticks(&self) -> Result<Array1<f64>> {
        self.ticks()?
            .ok_or_else(|| Error::MissingAttribute(TICKS.to_string()))
    }
}

impl<S: Store> DimensionBase for RangeDimension<S> {
    type Store = S;

    fn store(&self) -> &S {
        &self.store
    }
}

/// Reject ticks where any tick is smaller than the one before it.
///
fn check_ascending(ticks: ArrayView1<f64>) -> Result<()> {
    let descending = ticks
        .iter()
        .zip(ticks.iter().skip(1))
        .position(|(prev, next)| next - prev < 0.0);

    match descending {
        Some(pair) => {
            let index = pair + 1;
            warn!(index, "rejected ticks not in ascending order");
            Err(Error::InvalidOrder { index })
        }
        None => Ok(()),
    }
}

/// Binary search for the smallest index whose tick is at or above `position`, clamped to the
/// valid indices.
///
fn ceiling(ticks: ArrayView1<f64>, position: f64) -> Result<usize> {
    let len = ticks.len();
    if len == 0 || position.is_nan() {
        return Err(Error::OutOfBounds(format!(
            "position {position} can't be found in {len} ticks"
        )));
    }

    if position < ticks[0] {
        return Ok(0);
    } else if position > ticks[len - 1] {
        return Ok(len - 1);
    }

    // ticks[high] >= position holds throughout
    let (mut low, mut high) = (0, len - 1);
    while low < high {
        let mid = low + (high - low) / 2;
        if ticks[mid] < position {
            low = mid + 1;
        } else {
            high = mid;
        }
    }

    Ok(low)
}
