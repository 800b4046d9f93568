use ndarray::Array1;

use crate::{
    errors::Result, memory::MemoryStore, range::RangeDimension, sampled::SampledDimension,
    set::SetDimension,
};

/// A sampled dimension at index 1 of a fresh in-memory parent
pub(crate) fn sampled(
    sampling_interval: f64,
    offset: Option<f64>,
) -> Result<SampledDimension<MemoryStore>> {
    let dimension = SampledDimension::create(&MemoryStore::new(), 1, sampling_interval)?;
    if let Some(offset) = offset {
        dimension.set_offset(offset)?;
    }

    Ok(dimension)
}

/// A range dimension at index 1 of a fresh in-memory parent
pub(crate) fn ranged(ticks: Array1<f64>) -> Result<RangeDimension<MemoryStore>> {
    RangeDimension::create(&MemoryStore::new(), 1, ticks.view())
}

/// A set dimension at index 1 of a fresh in-memory parent
pub(crate) fn set(labels: &[&str]) -> Result<SetDimension<MemoryStore>> {
    let dimension = SetDimension::create(&MemoryStore::new(), 1)?;
    dimension.set_labels(labels)?;

    Ok(dimension)
}
