//! Counted Object Heap
//!
//! A small reference-counted object runtime in the shape of an embedding
//! interpreter: strings, numbers, mappings, tuples and a `None` singleton.
//! Every allocation and release is recorded in a ledger, and allocations
//! can be made to fail on demand, so ownership mistakes across the boundary
//! show up as non-zero live counts.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::{Host, HostError};

/// Allocation ledger snapshot
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HeapStats {
    pub allocations: usize,
    pub releases: usize,
}

impl HeapStats {
    /// Objects allocated and not yet released
    pub fn live(&self) -> usize {
        self.allocations - self.releases
    }
}

#[derive(Debug, Default)]
struct Ledger {
    allocations: Cell<usize>,
    releases: Cell<usize>,
    /// Successful allocations left before the next one fails
    fail_after: Cell<Option<usize>>,
}

impl Ledger {
    fn allocate(&self) -> Result<(), HostError> {
        match self.fail_after.get() {
            Some(0) => {
                self.fail_after.set(None);
                return Err(HostError::Allocation);
            }
            Some(remaining) => self.fail_after.set(Some(remaining - 1)),
            None => {}
        }
        self.allocations.set(self.allocations.get() + 1);
        Ok(())
    }

    fn release(&self) {
        self.releases.set(self.releases.get() + 1);
    }
}

/// Payload of a heap object
#[derive(Debug)]
pub enum HeapValue {
    None,
    Str(String),
    Float(f64),
    Unsigned(u64),
    /// Key/value pairs in insertion order; keys are string objects
    Mapping(RefCell<Vec<(HeapRef, HeapRef)>>),
    Tuple(Vec<HeapRef>),
}

#[derive(Debug)]
struct Object {
    value: HeapValue,
    // None for the immortal singleton
    ledger: Option<Rc<Ledger>>,
}

impl Drop for Object {
    fn drop(&mut self) {
        if let Some(ledger) = &self.ledger {
            ledger.release();
        }
    }
}

/// An owned reference to a heap object; cloning adds a reference
#[derive(Debug, Clone)]
pub struct HeapRef(Rc<Object>);

impl HeapRef {
    pub fn value(&self) -> &HeapValue {
        &self.0.value
    }

    pub fn is_none(&self) -> bool {
        matches!(self.value(), HeapValue::None)
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self.value(), HeapValue::Mapping(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self.value() {
            HeapValue::Str(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self.value() {
            HeapValue::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_unsigned(&self) -> Option<u64> {
        match self.value() {
            HeapValue::Unsigned(value) => Some(*value),
            _ => None,
        }
    }

    /// Mapping lookup
    pub fn get(&self, key: &str) -> Option<HeapRef> {
        match self.value() {
            HeapValue::Mapping(entries) => entries
                .borrow()
                .iter()
                .find(|entry| entry.0.as_str() == Some(key))
                .map(|entry| entry.1.clone()),
            _ => None,
        }
    }

    /// Mapping keys in insertion order
    pub fn keys(&self) -> Vec<String> {
        match self.value() {
            HeapValue::Mapping(entries) => entries
                .borrow()
                .iter()
                .filter_map(|entry| entry.0.as_str().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Tuple element
    pub fn item(&self, index: usize) -> Option<HeapRef> {
        match self.value() {
            HeapValue::Tuple(items) => items.get(index).cloned(),
            _ => None,
        }
    }

    /// Entry count of a mapping or tuple, zero for scalars
    pub fn len(&self) -> usize {
        match self.value() {
            HeapValue::Mapping(entries) => entries.borrow().len(),
            HeapValue::Tuple(items) => items.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of live references to this object
    pub fn ref_count(&self) -> usize {
        Rc::strong_count(&self.0)
    }

    /// Identity comparison
    pub fn ptr_eq(&self, other: &HeapRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Handle to a counted heap; clones share the same ledger
#[derive(Debug, Clone)]
pub struct Heap {
    ledger: Rc<Ledger>,
    none: HeapRef,
}

impl Default for Heap {
    fn default() -> Self {
        Self::new()
    }
}

impl Heap {
    pub fn new() -> Self {
        let none = HeapRef(Rc::new(Object {
            value: HeapValue::None,
            ledger: None,
        }));
        Self {
            ledger: Rc::new(Ledger::default()),
            none,
        }
    }

    pub fn stats(&self) -> HeapStats {
        HeapStats {
            allocations: self.ledger.allocations.get(),
            releases: self.ledger.releases.get(),
        }
    }

    pub fn live_objects(&self) -> usize {
        self.stats().live()
    }

    /// Let `successful` more allocations through, then fail the next one.
    ///
    /// The fault fires once; later allocations succeed again.
    pub fn fail_allocation_after(&self, successful: usize) {
        self.ledger.fail_after.set(Some(successful));
    }

    fn alloc(&self, value: HeapValue) -> Result<HeapRef, HostError> {
        self.ledger.allocate()?;
        Ok(HeapRef(Rc::new(Object {
            value,
            ledger: Some(self.ledger.clone()),
        })))
    }
}

impl Host for Heap {
    type Object = HeapRef;

    fn string(&self, text: &str) -> Result<HeapRef, HostError> {
        // Strings are stored NUL-terminated
        if text.contains('\0') {
            return Err(HostError::Encoding(format!(
                "interior NUL in {:?}",
                text
            )));
        }
        self.alloc(HeapValue::Str(text.to_string()))
    }

    fn none(&self) -> HeapRef {
        self.none.clone()
    }

    fn float(&self, value: f64) -> Result<HeapRef, HostError> {
        self.alloc(HeapValue::Float(value))
    }

    fn unsigned(&self, value: u64) -> Result<HeapRef, HostError> {
        self.alloc(HeapValue::Unsigned(value))
    }

    fn mapping(&self) -> Result<HeapRef, HostError> {
        self.alloc(HeapValue::Mapping(RefCell::new(Vec::new())))
    }

    fn insert(&self, mapping: &mut HeapRef, key: &str, value: HeapRef) -> Result<(), HostError> {
        let HeapValue::Mapping(entries) = mapping.value() else {
            return Err(HostError::NotAMapping);
        };
        let key = self.string(key)?;

        let mut entries = entries.borrow_mut();
        match entries
            .iter_mut()
            .find(|entry| entry.0.as_str() == key.as_str())
        {
            Some(entry) => entry.1 = value,
            None => entries.push((key, value)),
        }
        Ok(())
    }

    fn triple(&self, first: HeapRef, second: HeapRef, third: HeapRef) -> Result<HeapRef, HostError> {
        self.alloc(HeapValue::Tuple(vec![first, second, third]))
    }
}
