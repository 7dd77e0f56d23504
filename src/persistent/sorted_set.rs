//! Persistent sorted set with a caller-chosen ordering.
//!
//! [`PersistentSortedSet`] keeps its elements in a sorted, reference-counted
//! slice. Lookups are binary searches; updates copy the slice once and share
//! the comparator. Elements the comparator considers equal are stored once,
//! so ordering people by name makes the name the identity.
//!
//! # Examples
//!
//! ```rust
//! use functour::persistent::PersistentSortedSet;
//!
//! #[derive(Clone, Debug)]
//! struct Person { name: String }
//!
//! let people = PersistentSortedSet::with_comparator(|a: &Person, b: &Person| a.name.cmp(&b.name))
//!     .insert(Person { name: "name2".into() })
//!     .insert(Person { name: "name1".into() });
//!
//! let names: Vec<&str> = people.iter().map(|p| p.name.as_str()).collect();
//! assert_eq!(names, ["name1", "name2"]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

type Comparator<T> = Rc<dyn Fn(&T, &T) -> Ordering>;

/// A persistent set ordered by a comparator.
pub struct PersistentSortedSet<T> {
    elements: Rc<[T]>,
    comparator: Comparator<T>,
}

impl<T> Clone for PersistentSortedSet<T> {
    fn clone(&self) -> Self {
        Self {
            elements: Rc::clone(&self.elements),
            comparator: Rc::clone(&self.comparator),
        }
    }
}

impl<T: Ord + 'static> PersistentSortedSet<T> {
    /// Creates an empty set ordered by `Ord`.
    pub fn new() -> Self {
        Self::with_comparator(T::cmp)
    }
}

impl<T: Ord + Clone + 'static> PersistentSortedSet<T> {
    /// Builds a set ordered by `Ord` from `elements`.
    pub fn of<I: IntoIterator<Item = T>>(elements: I) -> Self {
        elements
            .into_iter()
            .fold(Self::new(), |set, element| set.insert(element))
    }
}

impl<T> PersistentSortedSet<T> {
    /// Creates an empty set ordered by `comparator`.
    pub fn with_comparator<C>(comparator: C) -> Self
    where
        C: Fn(&T, &T) -> Ordering + 'static,
    {
        Self {
            elements: Rc::from(Vec::new()),
            comparator: Rc::new(comparator),
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` when the set holds nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns `true` if an element comparing equal to `element` is present.
    pub fn contains(&self, element: &T) -> bool {
        self.search(element).is_ok()
    }

    /// Smallest element.
    pub fn first(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Largest element.
    pub fn last(&self) -> Option<&T> {
        self.elements.last()
    }

    /// Iterates in ascending order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    fn search(&self, element: &T) -> Result<usize, usize> {
        self.elements
            .binary_search_by(|probe| (self.comparator)(probe, element))
    }

    fn rebuilt(&self, elements: Vec<T>) -> Self {
        Self {
            elements: Rc::from(elements),
            comparator: Rc::clone(&self.comparator),
        }
    }
}

impl<T: Clone> PersistentSortedSet<T> {
    /// Returns a set that also holds `element`; a set already holding an
    /// equal element is returned as is.
    #[must_use]
    pub fn insert(&self, element: T) -> Self {
        match self.search(&element) {
            Ok(_) => self.clone(),
            Err(position) => {
                let mut elements = self.elements.to_vec();
                elements.insert(position, element);
                self.rebuilt(elements)
            }
        }
    }

    /// Returns a set without the element comparing equal to `element`.
    #[must_use]
    pub fn remove(&self, element: &T) -> Self {
        match self.search(element) {
            Ok(position) => {
                let mut elements = self.elements.to_vec();
                elements.remove(position);
                self.rebuilt(elements)
            }
            Err(_) => self.clone(),
        }
    }
}

impl<T: Ord + 'static> Default for PersistentSortedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a PersistentSortedSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for PersistentSortedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: fmt::Debug> fmt::Debug for PersistentSortedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for PersistentSortedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::write_sequence(formatter, "SortedSet", self.iter())
    }
}
