use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem::MaybeUninit;
use std::ptr::NonNull;

use crate::util::error::InvalidCapacity;

/// An owned allocation of `cap` slots for values of type `T`, none of which are assumed to be
/// initialized. The owner is responsible for tracking which slots hold values and dropping them;
/// a Buffer only ever frees its memory.
pub(crate) struct Buffer<T> {
    ptr: NonNull<MaybeUninit<T>>,
    cap: usize,
    _phantom: PhantomData<T>,
}

impl<T> Buffer<T> {
    /// Creates a Buffer with no slots, without allocating.
    pub const fn new() -> Buffer<T> {
        Buffer {
            ptr: NonNull::dangling(),
            cap: 0,
            _phantom: PhantomData,
        }
    }

    /// Allocates a Buffer with exactly `cap` slots.
    pub fn try_with_cap(cap: usize) -> Result<Buffer<T>, InvalidCapacity> {
        let layout = Self::layout_for(cap)?;

        Ok(Buffer {
            ptr: Self::alloc(layout),
            cap,
            _phantom: PhantomData,
        })
    }

    pub const fn cap(&self) -> usize {
        self.cap
    }

    pub const fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr().cast_const().cast()
    }

    pub const fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr().cast()
    }

    /// Writes `value` into the slot at `index` without reading or dropping the previous contents.
    ///
    /// # Safety
    /// `index` must be less than the capacity of the Buffer.
    pub unsafe fn write(&mut self, index: usize, value: T) {
        // SAFETY: The caller guarantees that index is in bounds of the allocation.
        unsafe { self.as_mut_ptr().add(index).write(value) }
    }

    /// Moves the value out of the slot at `index`, leaving it logically uninitialized.
    ///
    /// # Safety
    /// `index` must be less than the capacity of the Buffer and the slot must be initialized. The
    /// caller must treat the slot as uninitialized afterwards.
    pub unsafe fn read(&self, index: usize) -> T {
        // SAFETY: The caller guarantees that index is in bounds and initialized.
        unsafe { self.as_ptr().add(index).read() }
    }

    /// Changes the number of slots to `new_cap`, keeping the contents of every slot below
    /// `min(cap, new_cap)`. Slots above `new_cap` are discarded without being dropped.
    pub fn try_realloc(&mut self, new_cap: usize) -> Result<(), InvalidCapacity> {
        let new_layout = Self::layout_for(new_cap)?;
        let old_layout = self.current_layout();

        self.ptr = match (old_layout.size(), new_layout.size()) {
            // Zero-sized types and empty Buffers on both sides never need an allocation.
            (0, 0) => self.ptr,
            (old, new) if old == new => self.ptr,
            (0, _) => Self::alloc(new_layout),
            (_, 0) => {
                // SAFETY: ptr was allocated by the global allocator with old_layout, which has a
                // non-zero size.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), old_layout) }
                NonNull::dangling()
            },
            (_, new) => {
                // SAFETY: ptr was allocated with old_layout by the global allocator, new is
                // non-zero and was validated by Layout::array to be <= isize::MAX.
                let raw = unsafe { alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new) };
                NonNull::new(raw.cast()).unwrap_or_else(|| alloc::handle_alloc_error(new_layout))
            },
        };
        self.cap = new_cap;

        Ok(())
    }

    fn layout_for(cap: usize) -> Result<Layout, InvalidCapacity> {
        Layout::array::<T>(cap).map_err(|_| InvalidCapacity { cap })
    }

    fn current_layout(&self) -> Layout {
        // SAFETY: The same size and alignment were accepted by Layout::array when the current
        // capacity was set, so they are valid for a Layout.
        unsafe {
            Layout::from_size_align_unchecked(size_of::<T>() * self.cap, align_of::<T>())
        }
    }

    fn alloc(layout: Layout) -> NonNull<MaybeUninit<T>> {
        if layout.size() == 0 {
            NonNull::dangling()
        } else {
            // SAFETY: Zero-sized layouts have been guarded against.
            let raw = unsafe { alloc::alloc(layout) };
            NonNull::new(raw.cast()).unwrap_or_else(|| alloc::handle_alloc_error(layout))
        }
    }
}

impl<T> Drop for Buffer<T> {
    fn drop(&mut self) {
        let layout = self.current_layout();

        if layout.size() != 0 {
            // SAFETY: ptr is always allocated by the global allocator with the current layout
            // when that layout is non-zero.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
        }
    }
}

// SAFETY: A Buffer uniquely owns its allocation, so it can be sent whenever T can.
unsafe impl<T: Send> Send for Buffer<T> {}
// SAFETY: A Buffer exposes no interior mutability through shared references.
unsafe impl<T: Sync> Sync for Buffer<T> {}
