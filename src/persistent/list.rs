//! Persistent (immutable) singly-linked list.
//!
//! [`PersistentList`] is a cons list with structural sharing. Every operation
//! returns a new list and leaves the receiver untouched, so `append` on a
//! list yields a second list while the first keeps its elements and hash.
//!
//! | Operation  | Complexity |
//! |------------|------------|
//! | `prepend`  | O(1)       |
//! | `head`     | O(1)       |
//! | `tail`     | O(1)       |
//! | `len`      | O(1)       |
//! | `append`   | O(n)       |
//! | `reverse`  | O(n)       |
//!
//! # Examples
//!
//! ```rust
//! use functour::persistent::PersistentList;
//!
//! let list = PersistentList::of([1, 2, 3]);
//! let appended = list.append(0);
//!
//! assert_eq!(list.to_string(), "List(1, 2, 3)");
//! assert_eq!(appended.to_string(), "List(1, 2, 3, 0)");
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::typeclass::{Functor, TypeConstructor};

struct Node<T> {
    element: T,
    next: Option<Rc<Self>>,
}

/// A persistent (immutable) singly-linked list.
#[derive(Clone)]
pub struct PersistentList<T> {
    head: Option<Rc<Node<T>>>,
    length: usize,
}

impl<T> PersistentList<T> {
    /// Creates an empty list.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            head: None,
            length: 0,
        }
    }

    /// Returns a new list with `element` in front, sharing this list as tail.
    #[inline]
    #[must_use]
    pub fn prepend(&self, element: T) -> Self {
        Self {
            head: Some(Rc::new(Node {
                element,
                next: self.head.clone(),
            })),
            length: self.length + 1,
        }
    }

    /// Returns the first element.
    #[inline]
    pub fn head(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.element)
    }

    /// Returns the list without its first element; empty stays empty.
    #[inline]
    #[must_use]
    pub fn tail(&self) -> Self {
        self.head.as_ref().map_or_else(Self::new, |node| Self {
            head: node.next.clone(),
            length: self.length - 1,
        })
    }

    /// Number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` for the empty list.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Iterates from head to last element.
    pub fn iter(&self) -> PersistentListIterator<'_, T> {
        PersistentListIterator {
            current: self.head.as_deref(),
            remaining: self.length,
        }
    }

    /// Folds from the head towards the end.
    pub fn fold_left<B, F>(&self, initial: B, function: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        self.iter().fold(initial, function)
    }
}

impl<T: Clone> PersistentList<T> {
    /// Builds a list holding the elements in iteration order.
    pub fn of<I: IntoIterator<Item = T>>(elements: I) -> Self {
        let buffer: Vec<T> = elements.into_iter().collect();
        buffer
            .into_iter()
            .rev()
            .fold(Self::new(), |list, element| list.prepend(element))
    }

    /// Returns a new list with `element` added at the end.
    #[must_use]
    pub fn append(&self, element: T) -> Self {
        Self::of(self.iter().cloned().chain(std::iter::once(element)))
    }

    /// Returns the elements in reverse order.
    #[must_use]
    pub fn reverse(&self) -> Self {
        self.fold_left(Self::new(), |list, element| list.prepend(element.clone()))
    }

    /// Returns a new list with `separator` between each pair of elements.
    #[must_use]
    pub fn intersperse(&self, separator: T) -> Self {
        let mut buffer = Vec::with_capacity(self.length.saturating_mul(2));
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                buffer.push(separator.clone());
            }
            buffer.push(element.clone());
        }
        Self::of(buffer)
    }

    /// Transforms every element.
    pub fn map<B: Clone, F>(&self, function: F) -> PersistentList<B>
    where
        F: FnMut(&T) -> B,
    {
        PersistentList::of(self.iter().map(function))
    }
}

impl<T> Drop for PersistentList<T> {
    fn drop(&mut self) {
        // Unlink uniquely owned nodes one by one so long lists do not
        // recurse through nested `Rc` drops.
        let mut current = self.head.take();
        while let Some(node) = current {
            match Rc::try_unwrap(node) {
                Ok(mut node) => current = node.next.take(),
                Err(_) => break,
            }
        }
    }
}

/// Borrowing iterator over a [`PersistentList`].
pub struct PersistentListIterator<'a, T> {
    current: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for PersistentListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next.as_deref();
            self.remaining -= 1;
            &node.element
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for PersistentListIterator<'_, T> {}

impl<'a, T> IntoIterator for &'a PersistentList<T> {
    type Item = &'a T;
    type IntoIter = PersistentListIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Default for PersistentList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> FromIterator<T> for PersistentList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::of(iter)
    }
}

impl<T: PartialEq> PartialEq for PersistentList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for PersistentList<T> {}

impl<T: Hash> Hash for PersistentList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for PersistentList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for PersistentList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::write_sequence(formatter, "List", self.iter())
    }
}

impl<T> TypeConstructor for PersistentList<T> {
    type Inner = T;
    type WithType<B> = PersistentList<B>;
}

impl<T: Clone> Functor for PersistentList<T> {
    fn fmap<B, F>(self, mut function: F) -> PersistentList<B>
    where
        F: FnMut(T) -> B,
    {
        let buffer: Vec<B> = self.iter().cloned().map(&mut function).collect();
        buffer
            .into_iter()
            .rev()
            .fold(PersistentList::new(), |list, element| list.prepend(element))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[rstest]
    fn append_leaves_the_original_untouched() {
        let list = PersistentList::of([1, 2, 3]);
        let hash_before = hash_of(&list);

        let appended = list.append(0);

        assert_eq!(list.to_string(), "List(1, 2, 3)");
        assert_eq!(appended.to_string(), "List(1, 2, 3, 0)");
        assert_eq!(hash_of(&list), hash_before);
        assert_ne!(hash_of(&appended), hash_before);
    }

    #[rstest]
    fn prepend_shares_the_tail() {
        let list = PersistentList::of(["b", "c"]);
        let extended = list.prepend("a");
        assert_eq!(extended.tail(), list);
        assert_eq!(extended.len(), 3);
    }

    #[rstest]
    fn intersperse_and_fold_build_a_sentence() {
        let words = PersistentList::of(["one", "two", "three"]);
        let sentence = words
            .intersperse(", ")
            .fold_left(String::new(), |mut buffer, word| {
                buffer.push_str(word);
                buffer
            });
        assert_eq!(sentence, "one, two, three");
    }

    #[rstest]
    fn reverse_and_map() {
        let list = PersistentList::of(1..=3);
        assert_eq!(list.reverse(), PersistentList::of([3, 2, 1]));
        assert_eq!(list.map(|x| x * 10), PersistentList::of([10, 20, 30]));
    }

    #[rstest]
    fn fmap_consumes_the_list() {
        let list = PersistentList::of(["a", "bb"]);
        assert_eq!(list.fmap(str::len), PersistentList::of([1, 2]));
    }

    #[rstest]
    fn dropping_a_long_list_does_not_overflow() {
        let list: PersistentList<u32> = (0..200_000).collect();
        assert_eq!(list.len(), 200_000);
        drop(list);
    }
}
