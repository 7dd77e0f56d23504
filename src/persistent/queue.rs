//! Persistent FIFO queue.
//!
//! [`PersistentQueue`] is a banker's queue: a front list holding the next
//! elements to leave and a rear list holding recent arrivals in reverse.
//! When the front runs empty the rear is reversed into it, which keeps
//! `enqueue` O(1) and `dequeue` amortised O(1).
//!
//! # Examples
//!
//! ```rust
//! use functour::persistent::PersistentQueue;
//!
//! let queue = PersistentQueue::of([1, 2, 3]);
//! match queue.dequeue() {
//!     Some((element, remaining)) => {
//!         assert_eq!(element, 1);
//!         assert_eq!(remaining.to_string(), "Queue(2, 3)");
//!     }
//!     None => unreachable!(),
//! }
//! ```

use std::fmt;

use super::list::PersistentList;

/// A persistent first-in first-out queue.
#[derive(Clone)]
pub struct PersistentQueue<T> {
    front: PersistentList<T>,
    rear: PersistentList<T>,
}

impl<T> PersistentQueue<T> {
    /// Creates an empty queue.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            front: PersistentList::new(),
            rear: PersistentList::new(),
        }
    }

    /// Number of queued elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.front.len() + self.rear.len()
    }

    /// Returns `true` when nothing is queued.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element that [`PersistentQueue::dequeue`] would remove.
    pub fn peek(&self) -> Option<&T> {
        // The front is only empty when the whole queue is.
        self.front.head()
    }
}

impl<T: Clone> PersistentQueue<T> {
    /// Builds a queue whose first element is the first yielded.
    pub fn of<I: IntoIterator<Item = T>>(elements: I) -> Self {
        Self {
            front: PersistentList::of(elements),
            rear: PersistentList::new(),
        }
    }

    /// Returns a new queue with `element` at the back.
    #[must_use]
    pub fn enqueue(&self, element: T) -> Self {
        Self::balanced(self.front.clone(), self.rear.prepend(element))
    }

    /// Removes the front element, returning it with the remaining queue.
    pub fn dequeue(&self) -> Option<(T, Self)> {
        let head = self.front.head()?.clone();
        Some((head, Self::balanced(self.front.tail(), self.rear.clone())))
    }

    /// Iterates from front to back.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        let rear: Vec<&T> = self.rear.iter().collect();
        self.front.iter().chain(rear.into_iter().rev())
    }

    fn balanced(front: PersistentList<T>, rear: PersistentList<T>) -> Self {
        if front.is_empty() {
            Self {
                front: rear.reverse(),
                rear: PersistentList::new(),
            }
        } else {
            Self { front, rear }
        }
    }
}

impl<T> Default for PersistentQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + PartialEq> PartialEq for PersistentQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for PersistentQueue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone + fmt::Display> fmt::Display for PersistentQueue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::write_sequence(formatter, "Queue", self.iter())
    }
}
