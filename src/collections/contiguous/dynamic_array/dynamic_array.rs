use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use crate::collections::contiguous::buffer::Buffer;
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, CollectionError, IndexOutOfBounds, InvalidCapacity};
use crate::util::fmt::write_bracketed;
use crate::util::result::ResultExtension;

/// The capacity of a DynamicArray created with [`DynamicArray::new`].
pub const DEFAULT_CAP: usize = 16;

/// The factor by which the capacity is multiplied when a DynamicArray grows.
pub const GROWTH_FACTOR: usize = 2;

/// A contiguous, indexable collection that grows as elements are pushed onto it.
///
/// The capacity doubles (or becomes 1, if it was 0) whenever a push would bring the length up to
/// the capacity, so pushing is amortized `O(1)`. Removing elements never shrinks the capacity,
/// use [`shrink_to_fit`](DynamicArray::shrink_to_fit) to release the slack explicitly.
///
/// Borrowed iteration and slice methods are available through [`Deref<Target = [T]>`](Deref).
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DynamicArray.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `get` / `set` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `remove_at` | `O(n-i)` |
/// | `remove` | `O(n)` |
/// | `index_of` / `contains` | `O(n)` |
/// | `clear` | `O(n)` |
/// | `reserve` / `shrink_to_fit` | `O(n)` |
///
/// \* If pushing would fill the DynamicArray, `push` reallocates first and takes `O(n)`.
pub struct DynamicArray<T> {
    pub(crate) buf: Buffer<T>,
    pub(crate) len: usize,
}

impl<T> DynamicArray<T> {
    /// Creates an empty DynamicArray with a capacity of [`DEFAULT_CAP`].
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::{DynamicArray, DEFAULT_CAP};
    /// let arr: DynamicArray<u8> = DynamicArray::new();
    /// assert_eq!(arr.len(), 0);
    /// assert_eq!(arr.cap(), DEFAULT_CAP);
    /// ```
    pub fn new() -> DynamicArray<T> {
        Self::with_cap(DEFAULT_CAP)
    }

    /// Creates an empty DynamicArray with capacity exactly equal to `cap`. A capacity of zero
    /// doesn't allocate; the first push grows it to 1.
    ///
    /// # Panics
    /// Panics if the memory layout for `cap` elements would exceed [`isize::MAX`] bytes.
    pub fn with_cap(cap: usize) -> DynamicArray<T> {
        Self::try_with_cap(cap).throw()
    }

    /// Creates an empty DynamicArray with capacity exactly equal to `cap`, returning an [`Err`]
    /// rather than panicking if that capacity can't be represented.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::{DynamicArray, InvalidCapacity};
    /// assert_eq!(DynamicArray::<u8>::try_with_cap(5).map(|a| a.cap()), Ok(5));
    /// assert_eq!(
    ///     DynamicArray::<u64>::try_with_cap(usize::MAX).err(),
    ///     Some(InvalidCapacity { cap: usize::MAX })
    /// );
    /// ```
    pub fn try_with_cap(cap: usize) -> Result<DynamicArray<T>, InvalidCapacity> {
        Ok(DynamicArray {
            buf: Buffer::try_with_cap(cap)?,
            len: 0,
        })
    }

    /// Returns the number of elements in the DynamicArray.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the DynamicArray contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots currently allocated.
    pub const fn cap(&self) -> usize {
        self.buf.cap()
    }

    /// Returns the live elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: The first len slots are initialized, the pointer is non-null and aligned, and
        // len * size_of::<T>() <= isize::MAX because the buffer was allocated with a valid layout.
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    /// Returns the live elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: As with as_slice, and the &mut self receiver guarantees exclusive access.
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr(), self.len) }
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        let len = self.len;
        self.as_slice().get(index).ok_or(IndexOutOfBounds { index, len })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        let len = self.len;
        self.as_mut_slice().get_mut(index).ok_or(IndexOutOfBounds { index, len })
    }

    /// Replaces the element at `index` with `value`, returning the previous element.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::DynamicArray;
    /// let mut arr: DynamicArray<_> = ['a', 'b', 'c'].into_iter().collect();
    /// assert_eq!(arr.set(1, 'z'), 'b');
    /// assert_eq!(arr.as_slice(), &['a', 'z', 'c']);
    /// ```
    pub fn set(&mut self, index: usize, value: T) -> T {
        self.try_set(index, value).throw()
    }

    pub fn try_set(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds> {
        Ok(mem::replace(self.try_get_mut(index)?, value))
    }

    /// Pushes `value` onto the end of the DynamicArray, growing it first if the push would bring
    /// the length up to the capacity.
    ///
    /// # Panics
    /// Panics if the grown capacity can't be represented.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::with_cap(0);
    /// arr.push(1);
    /// assert_eq!(arr.cap(), 1);
    /// arr.push(2);
    /// arr.push(3);
    /// assert_eq!(arr.cap(), 4);
    /// assert_eq!(arr.as_slice(), &[1, 2, 3]);
    /// ```
    pub fn push(&mut self, value: T) {
        let new_len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        if new_len >= self.cap() {
            self.grow();
        }

        // SAFETY: The DynamicArray has just been grown if required, so len < cap.
        unsafe { self.buf.write(self.len, value) }
        self.len = new_len;
    }

    /// Removes the last element and returns it, or [`None`] if the DynamicArray is empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        // SAFETY: The slot at the old last index is initialized and, with len decremented, is no
        // longer considered live.
        Some(unsafe { self.buf.read(self.len) })
    }

    /// Removes the element at `index`, shifting every following element one place to the left.
    /// The capacity is left unchanged.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::DynamicArray;
    /// let mut arr: DynamicArray<_> = "Hello world!".chars().collect();
    /// assert_eq!(arr.remove_at(1), 'e');
    /// assert_eq!(arr.remove_at(4), ' ');
    /// assert_eq!(arr, "Hlloworld!".chars().collect());
    /// ```
    pub fn remove_at(&mut self, index: usize) -> T {
        self.try_remove_at(index).throw()
    }

    pub fn try_remove_at(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;

        let base = self.buf.as_mut_ptr();
        // SAFETY: index < len, so the slot is initialized. The following len - index - 1 slots
        // are initialized too, and are moved down over the slot that was just read out. ptr::copy
        // allows the ranges to overlap.
        let value = unsafe {
            let value = base.add(index).read();
            ptr::copy(base.add(index + 1), base.add(index), self.len - index - 1);
            value
        };
        self.len -= 1;

        Ok(value)
    }

    /// Drops every element, leaving the DynamicArray empty with its capacity intact.
    pub fn clear(&mut self) {
        let live = ptr::slice_from_raw_parts_mut(self.buf.as_mut_ptr(), self.len);
        // Set len first, so that a panicking destructor can't lead to a double drop.
        self.len = 0;
        // SAFETY: live covers exactly the initialized elements, which are no longer reachable.
        unsafe { ptr::drop_in_place(live) }
    }

    /// Ensures that the DynamicArray can hold `extra` more elements without reallocating.
    ///
    /// # Panics
    /// Panics if the required capacity overflows or can't be represented.
    pub fn reserve(&mut self, extra: usize) {
        self.try_reserve(extra).throw()
    }

    pub fn try_reserve(&mut self, extra: usize) -> Result<(), CollectionError> {
        let required = self.len.checked_add(extra).ok_or(CapacityOverflow)?;

        if required > self.cap() {
            self.buf.try_realloc(required)?;
        }
        Ok(())
    }

    /// Shrinks the capacity to the current length.
    pub fn shrink_to_fit(&mut self) {
        // Shrinking always yields a valid layout.
        self.buf.try_realloc(self.len).throw()
    }

    /// Doubles the capacity, or sets it to 1 if it is 0.
    ///
    /// # Panics
    /// Panics if the new capacity overflows or can't be represented.
    pub(crate) fn grow(&mut self) {
        let new_cap = match self.cap() {
            0 => 1,
            cap => cap.checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow).throw(),
        };

        self.buf.try_realloc(new_cap).throw();
    }

    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index < self.len {
            Ok(())
        } else {
            Err(IndexOutOfBounds { index, len: self.len })
        }
    }
}

impl<T: PartialEq> DynamicArray<T> {
    /// Returns the index of the first element equal to `item`.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::DynamicArray;
    /// let arr: DynamicArray<_> = [4, 8, 4].into_iter().collect();
    /// assert_eq!(arr.index_of(&4), Some(0));
    /// assert_eq!(arr.index_of(&5), None);
    /// ```
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|element| element == item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }

    /// Removes the first element equal to `item`, returning whether one was found.
    pub fn remove(&mut self, item: &T) -> bool {
        match self.index_of(item) {
            Some(index) => {
                self.remove_at(index);
                true
            },
            None => false,
        }
    }
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        self.clear();
        // The buffer is freed when self.buf is dropped.
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);

        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut arr = DynamicArray::with_cap(iter.size_hint().0);

        for item in iter {
            arr.push(item);
        }

        arr
    }
}

impl<T> Deref for DynamicArray<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for DynamicArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for DynamicArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for DynamicArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Borrow<[T]> for DynamicArray<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> BorrowMut<[T]> for DynamicArray<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        let mut arr = Self::with_cap(self.cap());

        for value in self.iter() {
            arr.push(value.clone());
        }

        arr
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: Hash> Hash for DynamicArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: Debug> Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("contents", &self.as_slice())
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Display> Display for DynamicArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_bracketed(f, self.iter())
    }
}
