//! Iterators over the zero-or-one values of an `Opt<T>`.

use super::Opt;

/// Iterator over a reference to the contained value.
///
/// Created by [`Opt::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    item: Opt<&'a T>,
}

impl<'a, T> Iter<'a, T> {
    pub(super) const fn new(item: Opt<&'a T>) -> Self {
        Self { item }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.item.take().into_std()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.item.is_some());
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Iterator over a mutable reference to the contained value.
///
/// Created by [`Opt::iter_mut`].
#[derive(Debug)]
pub struct IterMut<'a, T> {
    item: Opt<&'a mut T>,
}

impl<'a, T> IterMut<'a, T> {
    pub(super) const fn new(item: Opt<&'a mut T>) -> Self {
        Self { item }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.item.take().into_std()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.item.is_some());
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

/// Owning iterator over the contained value.
///
/// Created by the [`IntoIterator`] implementation of [`Opt`].
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    item: Opt<T>,
}

impl<T> IntoIter<T> {
    pub(super) const fn new(item: Opt<T>) -> Self {
        Self { item }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.item.take().into_std()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.item.is_some());
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.item.take().into_std()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
