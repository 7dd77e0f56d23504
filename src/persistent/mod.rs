//! Persistent (immutable) collections.
//!
//! Every collection here returns a new version on update and leaves the
//! receiver untouched, sharing structure with it where it can:
//!
//! - [`PersistentList`]: singly-linked cons list
//! - [`PersistentQueue`]: FIFO queue built from two lists
//! - [`PersistentSortedSet`]: set ordered by `Ord` or a custom comparator
//! - [`Stream`]: lazily evaluated, memoized sequence
//!
//! All of them render as `Name(a, b, c)` through [`std::fmt::Display`].
//!
//! # Examples
//!
//! ```rust
//! use functour::persistent::{PersistentList, PersistentQueue};
//!
//! let list = PersistentList::of([1, 2, 3]);
//! let extended = list.prepend(0);
//! assert_eq!(list.len(), 3);
//! assert_eq!(extended.len(), 4);
//!
//! let queue = PersistentQueue::of([1, 2, 3]).enqueue(4);
//! assert_eq!(queue.peek(), Some(&1));
//! ```

use std::fmt;

mod list;
mod queue;
mod sorted_set;
mod stream;

pub use list::{PersistentList, PersistentListIterator};
pub use queue::PersistentQueue;
pub use sorted_set::PersistentSortedSet;
pub use stream::{Stream, StreamIterator};

/// Writes `name(a, b, c)`.
pub(crate) fn write_sequence<'a, T, I>(
    formatter: &mut fmt::Formatter<'_>,
    name: &str,
    elements: I,
) -> fmt::Result
where
    T: fmt::Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    write!(formatter, "{name}(")?;
    for (index, element) in elements.into_iter().enumerate() {
        if index > 0 {
            formatter.write_str(", ")?;
        }
        write!(formatter, "{element}")?;
    }
    formatter.write_str(")")
}
