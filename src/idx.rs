use std::{fmt, marker::PhantomData, ops};

/// A position in a `Vec<T>` arena. Only indexes vectors of `T`.
pub(crate) struct Idx<T>(usize, PhantomData<T>);

impl<T> Idx<T> {
    pub fn new(index: usize) -> Self {
        Self(index, PhantomData)
    }
}

// Derives would demand the same traits of T
impl<T> Clone for Idx<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Idx<T> { }

impl<T> PartialEq for Idx<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for Idx<T> { }

impl<T> fmt::Debug for Idx<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl<T> fmt::Display for Idx<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl<T> ops::Index<Idx<T>> for Vec<T> {
    type Output = T;

    fn index(&self, index: Idx<T>) -> &T {
        &self[index.0]
    }
}

impl<T> ops::IndexMut<Idx<T>> for Vec<T> {
    fn index_mut(&mut self, index: Idx<T>) -> &mut T {
        &mut self[index.0]
    }
}

impl<T> ops::Index<Idx<T>> for [T] {
    type Output = T;

    fn index(&self, index: Idx<T>) -> &T {
        &self[index.0]
    }
}

impl<T> ops::IndexMut<Idx<T>> for [T] {
    fn index_mut(&mut self, index: Idx<T>) -> &mut T {
        &mut self[index.0]
    }
}

/// Every index of `arena` in ascending order. Does not borrow the arena.
pub(crate) fn indices<T>(arena: &[T]) -> impl Iterator<Item=Idx<T>> {
    (0..arena.len()).map(Idx::new)
}

pub(crate) fn push<T>(arena: &mut Vec<T>, value: T) -> Idx<T> {
    arena.push(value);
    Idx::new(arena.len() - 1)
}
