//! Lazy, memoized stream.
//!
//! A [`Stream`] is a linked list whose head is evaluated and whose tail is a
//! [`Lazy`] that produces the rest on demand. Once a tail has been computed it
//! is cached, so walking a stream twice evaluates each cell once. Streams can
//! be infinite as long as only a finite prefix is consumed.
//!
//! # Examples
//!
//! ```rust
//! use functour::persistent::Stream;
//!
//! let numbers = Stream::of(vec![1, 2, 3]).map(|n| n.to_string());
//! assert_eq!(numbers.to_string(), "Stream(1, ?)");
//!
//! let sentence = Stream::of(vec!["one", "two", "three"])
//!     .intersperse(", ")
//!     .fold_left(String::new(), |buffer, word| buffer + word);
//! assert_eq!(sentence, "one, two, three");
//!
//! let powers: Vec<u64> = Stream::iterate(1_u64, |n| n * 2).take(5).iter().collect();
//! assert_eq!(powers, vec![1, 2, 4, 8, 16]);
//! ```

use std::fmt;
use std::rc::Rc;

use super::list::PersistentList;
use crate::control::Lazy;

type Tail<T> = Lazy<Stream<T>, Box<dyn FnOnce() -> Stream<T>>>;

struct Cons<T> {
    head: T,
    tail: Tail<T>,
}

/// A lazily evaluated persistent sequence.
pub struct Stream<T> {
    cell: Option<Rc<Cons<T>>>,
}

impl<T> Clone for Stream<T> {
    fn clone(&self) -> Self {
        Self {
            cell: self.cell.clone(),
        }
    }
}

impl<T> Stream<T> {
    /// The empty stream.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self { cell: None }
    }

    /// Returns `true` for the empty stream.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.cell.is_none()
    }

    /// The first element.
    pub fn head(&self) -> Option<&T> {
        self.cell.as_ref().map(|cons| &cons.head)
    }

    /// The rest of the stream, evaluating it if needed.
    #[must_use]
    pub fn tail(&self) -> Self {
        self.cell
            .as_ref()
            .map_or_else(Self::empty, |cons| cons.tail.force().clone())
    }
}

impl<T: 'static> Stream<T> {
    /// Builds a stream from a head and a deferred tail.
    pub fn cons<F>(head: T, tail: F) -> Self
    where
        F: FnOnce() -> Self + 'static,
    {
        Self {
            cell: Some(Rc::new(Cons {
                head,
                tail: Lazy::new(Box::new(tail)),
            })),
        }
    }

    /// Builds a stream that pulls from `elements` one cell at a time.
    pub fn of<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        Self::pull(elements.into_iter())
    }

    fn pull<I>(mut iterator: I) -> Self
    where
        I: Iterator<Item = T> + 'static,
    {
        match iterator.next() {
            Some(head) => Self::cons(head, move || Self::pull(iterator)),
            None => Self::empty(),
        }
    }

    /// The infinite stream `seed, f(seed), f(f(seed)), ...`.
    pub fn iterate<F>(seed: T, function: F) -> Self
    where
        T: Clone,
        F: Fn(&T) -> T + 'static,
    {
        Self::iterate_shared(seed, Rc::new(function))
    }

    fn iterate_shared(seed: T, function: Rc<dyn Fn(&T) -> T>) -> Self
    where
        T: Clone,
    {
        let next = seed.clone();
        Self::cons(seed, move || {
            let successor = function(&next);
            Self::iterate_shared(successor, function)
        })
    }

    /// Lazily transforms every element. Only the head is mapped now.
    pub fn map<U: 'static, F>(&self, function: F) -> Stream<U>
    where
        F: Fn(&T) -> U + 'static,
    {
        self.map_shared(Rc::new(function))
    }

    fn map_shared<U: 'static>(&self, function: Rc<dyn Fn(&T) -> U>) -> Stream<U> {
        match &self.cell {
            None => Stream::empty(),
            Some(cons) => {
                let head = function(&cons.head);
                let cons = Rc::clone(cons);
                Stream::cons(head, move || cons.tail.force().map_shared(function))
            }
        }
    }

    /// Lazily keeps at most `count` elements.
    #[must_use]
    pub fn take(&self, count: usize) -> Self
    where
        T: Clone,
    {
        match &self.cell {
            Some(cons) if count > 0 => {
                let cons = Rc::clone(cons);
                Self::cons(cons.head.clone(), move || {
                    if count > 1 {
                        cons.tail.force().take(count - 1)
                    } else {
                        Self::empty()
                    }
                })
            }
            _ => Self::empty(),
        }
    }

    /// Lazily inserts `separator` between neighbouring elements.
    #[must_use]
    pub fn intersperse(&self, separator: T) -> Self
    where
        T: Clone,
    {
        match &self.cell {
            None => Self::empty(),
            Some(cons) => {
                let cons = Rc::clone(cons);
                Self::cons(cons.head.clone(), move || {
                    Self::separated(cons.tail.force().clone(), separator)
                })
            }
        }
    }

    fn separated(rest: Self, separator: T) -> Self
    where
        T: Clone,
    {
        match rest.cell.clone() {
            None => Self::empty(),
            Some(cons) => Self::cons(separator.clone(), move || {
                let next = Rc::clone(&cons);
                Self::cons(cons.head.clone(), move || {
                    Self::separated(next.tail.force().clone(), separator)
                })
            }),
        }
    }
}

impl<T: Clone> Stream<T> {
    /// Folds every element from the front. Never returns on an infinite
    /// stream.
    pub fn fold_left<B, F>(&self, initial: B, mut function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        let mut accumulated = initial;
        for element in self.iter() {
            accumulated = function(accumulated, element);
        }
        accumulated
    }

    /// Iterates over clones of the elements, forcing tails as it goes.
    pub fn iter(&self) -> StreamIterator<T> {
        StreamIterator {
            current: self.clone(),
        }
    }

    /// Forces the whole stream into a [`PersistentList`].
    pub fn to_list(&self) -> PersistentList<T> {
        PersistentList::of(self.iter())
    }
}

impl<T> Drop for Stream<T> {
    fn drop(&mut self) {
        // Walk evaluated cells iteratively; unevaluated tails are dropped
        // without running their producers.
        let mut current = self.cell.take();
        while let Some(cell) = current {
            match Rc::try_unwrap(cell) {
                Ok(cons) => {
                    current = cons
                        .tail
                        .into_evaluated()
                        .and_then(|mut rest| rest.cell.take());
                }
                Err(_) => break,
            }
        }
    }
}

/// Iterator over a [`Stream`], yielding cloned elements.
pub struct StreamIterator<T> {
    current: Stream<T>,
}

impl<T: Clone> Iterator for StreamIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let head = self.current.head()?.clone();
        self.current = self.current.tail();
        Some(head)
    }
}

impl<T> Default for Stream<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: fmt::Display> fmt::Display for Stream<T> {
    /// Shows the evaluated prefix followed by `?` for an unevaluated tail.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Stream(")?;
        let mut cell = self.cell.as_ref();
        let mut first = true;
        while let Some(cons) = cell {
            if !first {
                formatter.write_str(", ")?;
            }
            first = false;
            write!(formatter, "{}", cons.head)?;
            match cons.tail.peek() {
                Some(rest) => cell = rest.cell.as_ref(),
                None => {
                    formatter.write_str(", ?")?;
                    break;
                }
            }
        }
        formatter.write_str(")")
    }
}

impl<T: fmt::Debug> fmt::Debug for Stream<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = formatter.debug_list();
        let mut cell = self.cell.as_ref();
        while let Some(cons) = cell {
            list.entry(&cons.head);
            cell = cons.tail.peek().and_then(|rest| rest.cell.as_ref());
        }
        list.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn display_reveals_only_evaluated_cells() {
        let stream = Stream::of(vec![1, 2, 3]);
        assert_eq!(stream.to_string(), "Stream(1, ?)");

        let _ = stream.to_list();
        assert_eq!(stream.to_string(), "Stream(1, 2, 3)");
    }

    #[rstest]
    fn tails_are_evaluated_once() {
        let evaluations = Rc::new(Cell::new(0));
        let counter = Rc::clone(&evaluations);
        let stream = Stream::cons(1, move || {
            counter.set(counter.get() + 1);
            Stream::cons(2, Stream::empty)
        });

        let _ = stream.tail();
        let _ = stream.tail();

        assert_eq!(evaluations.get(), 1);
    }

    #[rstest]
    fn map_is_lazy() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let mapped = Stream::iterate(0, |n| n + 1).map(move |n| {
            counter.set(counter.get() + 1);
            n * 10
        });

        assert_eq!(calls.get(), 1);
        assert_eq!(mapped.take(3).iter().collect::<Vec<_>>(), vec![0, 10, 20]);
        assert_eq!(calls.get(), 3);
    }

    #[rstest]
    fn intersperse_on_single_element_adds_nothing() {
        let stream = Stream::of(vec!["only"]).intersperse(", ");
        assert_eq!(stream.iter().collect::<Vec<_>>(), vec!["only"]);
    }

    #[rstest]
    fn empty_stream_folds_to_initial() {
        let stream: Stream<i32> = Stream::empty();
        assert_eq!(stream.fold_left(7, |acc, n| acc + n), 7);
        assert_eq!(stream.to_string(), "Stream()");
    }
}
