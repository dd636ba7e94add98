//! Collections and the store snapshot.
//!
//! A store maps collection keys to collections. Every node above the
//! scalars is reference counted: cloning a store is O(1), and a store
//! derived from another shares every collection and record it did not
//! rewrite.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::{Id, Record};

/// The two shapes a collection can take. Fixed for the lifetime of a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Ordered sequence of records (list-valued key).
    Sequence,
    /// Single record (object-valued key).
    Singleton,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Sequence => write!(f, "sequence"),
            Shape::Singleton => write!(f, "singleton"),
        }
    }
}

/// The value addressed by a top-level key.
#[derive(Debug, Clone, PartialEq)]
pub enum Collection {
    Sequence(Arc<Vec<Arc<Record>>>),
    Singleton(Arc<Record>),
}

impl Collection {
    /// Build a sequence collection.
    pub fn sequence(records: impl IntoIterator<Item = Record>) -> Self {
        Collection::Sequence(Arc::new(records.into_iter().map(Arc::new).collect()))
    }

    /// Build an empty sequence collection.
    pub fn empty_sequence() -> Self {
        Collection::Sequence(Arc::new(Vec::new()))
    }

    /// Build a singleton collection.
    pub fn singleton(record: Record) -> Self {
        Collection::Singleton(Arc::new(record))
    }

    /// The shape of this collection.
    pub fn shape(&self) -> Shape {
        match self {
            Collection::Sequence(_) => Shape::Sequence,
            Collection::Singleton(_) => Shape::Singleton,
        }
    }

    /// Records of a sequence collection.
    pub fn as_sequence(&self) -> Option<&[Arc<Record>]> {
        match self {
            Collection::Sequence(records) => Some(records),
            Collection::Singleton(_) => None,
        }
    }

    /// Record of a singleton collection.
    pub fn as_singleton(&self) -> Option<&Record> {
        match self {
            Collection::Singleton(record) => Some(record),
            Collection::Sequence(_) => None,
        }
    }

    /// Mutable records of a sequence, detached from other holders.
    pub fn sequence_mut(&mut self) -> Option<&mut Vec<Arc<Record>>> {
        match self {
            Collection::Sequence(records) => Some(Arc::make_mut(records)),
            Collection::Singleton(_) => None,
        }
    }

    /// Mutable singleton record, detached from other holders.
    pub fn singleton_mut(&mut self) -> Option<&mut Record> {
        match self {
            Collection::Singleton(record) => Some(Arc::make_mut(record)),
            Collection::Sequence(_) => None,
        }
    }

    /// Index of the first record with the given id. Insertion order decides
    /// which record is first when ids repeat.
    pub fn position(&self, id: &Id) -> Option<usize> {
        self.as_sequence()?.iter().position(|record| record.has_id(id))
    }

    /// The first record with the given id.
    pub fn find(&self, id: &Id) -> Option<&Record> {
        let records = self.as_sequence()?;
        self.position(id).map(|index| records[index].as_ref())
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        match self {
            Collection::Sequence(records) => records.len(),
            Collection::Singleton(_) => 1,
        }
    }

    /// Returns true for an empty sequence.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Immutable snapshot of all managed collections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Store {
    collections: Arc<IndexMap<String, Collection>>,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a collection while building an initial store.
    pub fn with(mut self, key: impl Into<String>, collection: Collection) -> Self {
        self.collections_mut().insert(key.into(), collection);
        self
    }

    /// Get a collection by key.
    pub fn get(&self, key: &str) -> Option<&Collection> {
        self.collections.get(key)
    }

    /// Returns true if the key has a collection.
    pub fn contains_key(&self, key: &str) -> bool {
        self.collections.contains_key(key)
    }

    /// Number of collections.
    pub fn len(&self) -> usize {
        self.collections.len()
    }

    /// Returns true if the store has no collections.
    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }

    /// Collection keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.collections.keys().map(String::as_str)
    }

    /// Iterate over collections in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Collection)> {
        self.collections.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// A new store with `key` replaced (or added) and everything else shared.
    pub fn with_collection(&self, key: &str, collection: Collection) -> Store {
        let mut collections = IndexMap::clone(&self.collections);
        collections.insert(key.to_string(), collection);
        Store {
            collections: Arc::new(collections),
        }
    }

    /// Mutable access to the collection map, detached from other holders of
    /// this store. Other clones never observe the changes.
    pub fn collections_mut(&mut self) -> &mut IndexMap<String, Collection> {
        Arc::make_mut(&mut self.collections)
    }

    /// Returns true if both stores are the same snapshot (same root node).
    pub fn ptr_eq(a: &Store, b: &Store) -> bool {
        Arc::ptr_eq(&a.collections, &b.collections)
    }

    /// Returns true if both stores hold the very same collection node at
    /// `key`, i.e. the collection was shared rather than rebuilt.
    pub fn shares_collection(a: &Store, b: &Store, key: &str) -> bool {
        match (a.get(key), b.get(key)) {
            (Some(Collection::Sequence(x)), Some(Collection::Sequence(y))) => Arc::ptr_eq(x, y),
            (Some(Collection::Singleton(x)), Some(Collection::Singleton(y))) => Arc::ptr_eq(x, y),
            _ => false,
        }
    }
}

impl fmt::Display for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, collection) in self.iter() {
            match collection {
                Collection::Sequence(records) => {
                    write!(f, "{}: [", key)?;
                    for (i, record) in records.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{}", record)?;
                    }
                    writeln!(f, "]")?;
                }
                Collection::Singleton(record) => writeln!(f, "{}: {}", key, record)?,
            }
        }
        Ok(())
    }
}
