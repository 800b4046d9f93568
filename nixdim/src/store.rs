use ndarray::Array1;

use crate::errors::Result;

/// A scalar attribute value as persisted by a `Store`.
///
/// The store performs no coercion between kinds. Callers check the kind of a value on the way
/// in and on the way out (see `attrs`).
///
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

/// Element type of an array valued dataset
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementType {
    Double,
    Text,
}

/// Contents of an array valued dataset, always transferred as a whole.
///
#[derive(Clone, Debug, PartialEq)]
pub enum Data {
    Float(Array1<f64>),
    Text(Array1<String>),
}

impl Data {
    /// An array of `len` default values of the given element type
    pub fn zeros(element_type: ElementType, len: usize) -> Self {
        match element_type {
            ElementType::Double => Data::Float(Array1::zeros(len)),
            ElementType::Text => Data::Text(Array1::from_elem(len, String::new())),
        }
    }

    pub fn element_type(&self) -> ElementType {
        match self {
            Data::Float(_) => ElementType::Double,
            Data::Text(_) => ElementType::Text,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Data::Float(data) => data.len(),
            Data::Text(data) => data.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A trait for a node of a hierarchical attribute and dataset container.
///
/// Dimensions own no data themselves. Every piece of state round trips through the `Store`
/// node a dimension is attached to. Implementations are handles: cloning a handle or opening the
/// same child twice must address the same underlying node.
///
/// Any synchronization of access to the same node is the responsibility of the implementation.
///
pub trait Store: Clone {
    /// Get the value of the attribute `name`.
    ///
    /// Should return `Option::None` if the attribute has never been written.
    ///
    fn get_attr(&self, name: &str) -> Result<Option<Value>>;

    /// Set the attribute `name`, replacing any previous value.
    ///
    fn set_attr(&self, name: &str, value: Value) -> Result<()>;

    /// Whether a dataset called `name` exists on this node.
    ///
    fn contains(&self, name: &str) -> bool;

    /// Allocate a new array valued dataset, filled with default values.
    ///
    /// # Arguments
    ///
    /// * `name` - Name of the dataset. Must not already exist; overwriting requires calling
    ///   `delete_dataset` first.
    /// * `shape` - Initial number of elements.
    /// * `element_type` - Type of the elements.
    /// * `resizable` - Whether later writes may change the number of elements.
    ///
    fn create_dataset(
        &self,
        name: &str,
        shape: usize,
        element_type: ElementType,
        resizable: bool,
    ) -> Result<()>;

    /// Remove the dataset `name`.
    ///
    fn delete_dataset(&self, name: &str) -> Result<()>;

    /// Read the whole dataset `name`.
    ///
    fn read_dataset(&self, name: &str) -> Result<Data>;

    /// Replace the contents of dataset `name` with `data`.
    ///
    fn write_dataset(&self, name: &str, data: Data) -> Result<()>;

    /// Open the child node `name`, creating it if it doesn't exist yet.
    ///
    fn open_child(&self, name: &str) -> Result<Self>;
}
