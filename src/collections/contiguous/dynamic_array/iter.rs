use std::iter::FusedIterator;
use std::mem;
use std::ptr;

use super::DynamicArray;
use crate::collections::contiguous::buffer::Buffer;

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let end = self.len;
        // Take ownership of the elements, leaving self empty so that its drop is a no-op.
        self.len = 0;

        IntoIter {
            buf: mem::replace(&mut self.buf, Buffer::new()),
            start: 0,
            end,
        }
    }
}

/// An owned iterator over the elements of a [`DynamicArray`]. See [`DynamicArray::into_iter`].
///
/// Borrowed iteration uses [`Iter`](std::slice::Iter) and [`IterMut`](std::slice::IterMut) from
/// [`std::slice`], through [`Deref`](std::ops::Deref).
pub struct IntoIter<T> {
    // Slots in start..end are initialized and not yet yielded.
    pub(crate) buf: Buffer<T>,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }

        // SAFETY: start < end, so the slot is initialized and hasn't been yielded. Incrementing
        // start marks it as moved out.
        let value = unsafe { self.buf.read(self.start) };
        self.start += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }

        self.end -= 1;
        // SAFETY: The slot at the decremented end is initialized and hasn't been yielded.
        Some(unsafe { self.buf.read(self.end) })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.end - self.start
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let remaining = ptr::slice_from_raw_parts_mut(
            // SAFETY: start <= end <= cap, so the offset is within the allocation.
            unsafe { self.buf.as_mut_ptr().add(self.start) },
            self.end - self.start,
        );
        self.start = self.end;
        // SAFETY: remaining covers exactly the elements which were never yielded.
        unsafe { ptr::drop_in_place(remaining) }
    }
}
