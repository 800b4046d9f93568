use ndarray::Array1;
use tracing::debug;

use crate::{
    dimension::{self, DimensionBase, DimensionType},
    errors::{Error, Result},
    store::{Data, ElementType, Store},
};

const LABELS: &str = "labels";

/// A categorical dimension, identified by an ordered list of labels.
///
pub struct SetDimension<S: Store> {
    store: S,
}

impl<S: Store> SetDimension<S> {
    pub fn create(parent: &S, index: usize) -> Result<Self> {
        dimension::create_new(parent, index, DimensionType::Set, Self::new)
    }

    pub(crate) fn new(store: S) -> Self {
        Self { store }
    }

    /// The stored labels. Empty if labels were never written.
    ///
    pub fn labels(&self) -> Result<Vec<String>> {
        if !self.store.contains(LABELS) {
            return Ok(vec![]);
        }

        match self.store.read_dataset(LABELS)? {
            Data::Text(labels) => Ok(labels.to_vec()),
            Data::Float(_) => Err(Error::TypeMismatch {
                name: LABELS.to_string(),
                expected: "an array of text",
            }),
        }
    }

    /// Replace the stored labels. Labels may repeat and need not be ordered.
    ///
    pub fn set_labels<T: AsRef<str>>(&self, labels: &[T]) -> Result<()> {
        let labels = Array1::from_iter(labels.iter().map(|label| label.as_ref().to_string()));

        if self.store.contains(LABELS) {
            self.store.delete_dataset(LABELS)?;
        }
        self.store
            .create_dataset(LABELS, labels.len(), ElementType::Text, true)?;
        debug!(count = labels.len(), "set labels");
        self.store.write_dataset(LABELS, Data::Text(labels))
    }
}

impl<S: Store> DimensionBase for SetDimension<S> {
    type Store = S;

    fn store(&self) -> &S {
        &self.store
    }
}
