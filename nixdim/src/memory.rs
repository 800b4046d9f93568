use std::{collections::HashMap, sync::Arc};

use parking_lot::Mutex;

use crate::{
    errors::{Error, Result},
    store::{Data, ElementType, Store, Value},
};

/// An implementation of `Store` that keeps everything in RAM
///
/// Handles are cheap to clone and all clones address the same node. Each node is guarded by its
/// own lock, so handles may be shared between threads, but no coordination beyond a single call
/// is provided.
///
#[derive(Clone, Default)]
pub struct MemoryStore {
    node: Arc<Mutex<Node>>,
}

#[derive(Default)]
struct Node {
    attrs: HashMap<String, Value>,
    datasets: HashMap<String, Dataset>,
    children: HashMap<String, Arc<Mutex<Node>>>,
}

struct Dataset {
    data: Data,
    resizable: bool,
}

impl MemoryStore {
    /// Create a new, empty root node
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of the child nodes opened so far, in no particular order
    pub fn children(&self) -> Vec<String> {
        self.node.lock().children.keys().cloned().collect()
    }

    /// Whether this handle and `other` address the same node
    pub fn same_node(&self, other: &MemoryStore) -> bool {
        Arc::ptr_eq(&self.node, &other.node)
    }
}

impl Store for MemoryStore {
    fn get_attr(&self, name: &str) -> Result<Option<Value>> {
        Ok(self.node.lock().attrs.get(name).cloned())
    }

    fn set_attr(&self, name: &str, value: Value) -> Result<()> {
        self.node.lock().attrs.insert(name.to_string(), value);

        Ok(())
    }

    fn contains(&self, name: &str) -> bool {
        self.node.lock().datasets.contains_key(name)
    }

    fn create_dataset(
        &self,
        name: &str,
        shape: usize,
        element_type: ElementType,
        resizable: bool,
    ) -> Result<()> {
        let mut node = self.node.lock();
        if node.datasets.contains_key(name) {
            return Err(Error::DatasetExists(name.to_string()));
        }

        let data = Data::zeros(element_type, shape);
        node.datasets.insert(name.to_string(), Dataset { data, resizable });

        Ok(())
    }

    fn delete_dataset(&self, name: &str) -> Result<()> {
        match self.node.lock().datasets.remove(name) {
            Some(_) => Ok(()),
            None => Err(Error::NoSuchDataset(name.to_string())),
        }
    }

    fn read_dataset(&self, name: &str) -> Result<Data> {
        match self.node.lock().datasets.get(name) {
            Some(dataset) => Ok(dataset.data.clone()),
            None => Err(Error::NoSuchDataset(name.to_string())),
        }
    }

    fn write_dataset(&self, name: &str, data: Data) -> Result<()> {
        let mut node = self.node.lock();
        let dataset = node
            .datasets
            .get_mut(name)
            .ok_or_else(|| Error::NoSuchDataset(name.to_string()))?;

        if dataset.data.element_type() != data.element_type() {
            return Err(Error::TypeMismatch {
                name: name.to_string(),
                expected: match dataset.data.element_type() {
                    ElementType::Double => "an array of real numbers",
                    ElementType::Text => "an array of text",
                },
            });
        }

        if !dataset.resizable && dataset.data.len() != data.len() {
            return Err(Error::ShapeMismatch {
                name: name.to_string(),
                expected: dataset.data.len(),
                actual: data.len(),
            });
        }

        dataset.data = data;

        Ok(())
    }

    fn open_child(&self, name: &str) -> Result<Self> {
        let mut node = self.node.lock();
        let child = node
            .children
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(Node::default())));

        Ok(Self {
            node: Arc::clone(child),
        })
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn test_attrs() -> Result<()> {
        let store = MemoryStore::new();
        assert_eq!(store.get_attr("label")?, None);

        store.set_attr("label", Value::from("time"))?;
        assert_eq!(store.get_attr("label")?, Some(Value::Text("time".to_string())));

        store.set_attr("label", Value::Int(3))?;
        assert_eq!(store.get_attr("label")?, Some(Value::Int(3)));

        Ok(())
    }

    #[test]
    fn test_create_dataset() -> Result<()> {
        let store = MemoryStore::new();
        assert!(!store.contains("ticks"));

        store.create_dataset("ticks", 3, ElementType::Double, false)?;
        assert!(store.contains("ticks"));
        assert_eq!(store.read_dataset("ticks")?, Data::Float(array![0.0, 0.0, 0.0]));

        Ok(())
    }

    #[test]
    fn test_create_dataset_twice() -> Result<()> {
        let store = MemoryStore::new();
        store.create_dataset("ticks", 3, ElementType::Double, true)?;
        assert!(matches!(
            store.create_dataset("ticks", 3, ElementType::Double, true),
            Err(Error::DatasetExists(_))
        ));

        store.delete_dataset("ticks")?;
        store.create_dataset("ticks", 5, ElementType::Double, true)?;
        assert_eq!(store.read_dataset("ticks")?.len(), 5);

        Ok(())
    }

    #[test]
    fn test_write_dataset() -> Result<()> {
        let store = MemoryStore::new();
        store.create_dataset("labels", 2, ElementType::Text, false)?;

        let labels = Data::Text(array!["a".to_string(), "b".to_string()]);
        store.write_dataset("labels", labels.clone())?;
        assert_eq!(store.read_dataset("labels")?, labels);

        Ok(())
    }

    #[test]
    fn test_write_dataset_wrong_shape() -> Result<()> {
        let store = MemoryStore::new();
        store.create_dataset("ticks", 2, ElementType::Double, false)?;
        assert!(matches!(
            store.write_dataset("ticks", Data::Float(array![1.0, 2.0, 3.0])),
            Err(Error::ShapeMismatch {
                expected: 2,
                actual: 3,
                ..
            })
        ));

        store.delete_dataset("ticks")?;
        store.create_dataset("ticks", 2, ElementType::Double, true)?;
        store.write_dataset("ticks", Data::Float(array![1.0, 2.0, 3.0]))?;
        assert_eq!(store.read_dataset("ticks")?.len(), 3);

        Ok(())
    }

    #[test]
    fn test_write_dataset_wrong_type() -> Result<()> {
        let store = MemoryStore::new();
        store.create_dataset("ticks", 1, ElementType::Double, true)?;
        assert!(matches!(
            store.write_dataset("ticks", Data::Text(array!["a".to_string()])),
            Err(Error::TypeMismatch { .. })
        ));

        Ok(())
    }

    #[test]
    fn test_missing_dataset() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.read_dataset("ticks"),
            Err(Error::NoSuchDataset(_))
        ));
        assert!(matches!(
            store.write_dataset("ticks", Data::Float(array![1.0])),
            Err(Error::NoSuchDataset(_))
        ));
        assert!(matches!(
            store.delete_dataset("ticks"),
            Err(Error::NoSuchDataset(_))
        ));
    }

    #[test]
    fn test_open_child() -> Result<()> {
        let store = MemoryStore::new();
        let child = store.open_child("1")?;
        child.set_attr("index", Value::Int(1))?;

        let again = store.open_child("1")?;
        assert!(child.same_node(&again));
        assert_eq!(again.get_attr("index")?, Some(Value::Int(1)));
        assert_eq!(store.get_attr("index")?, None);
        assert_eq!(store.children(), vec!["1".to_string()]);

        Ok(())
    }
}
