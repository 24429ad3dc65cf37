//! Fixed-length backing storage.

use crate::engine::error::EngineError;
use std::ops::{Deref, DerefMut};

/// A slice the engine either allocated once or borrowed from its caller.
///
/// Its length never changes after construction.
pub(crate) enum Buffer<'b, T> {
    Owned(Vec<T>),
    Borrowed(&'b mut [T]),
}

impl<'b, T: Clone> Buffer<'b, T> {
    /// Allocate `len` slots filled with `fill`, reporting allocator failure.
    pub(crate) fn allocate(what: &'static str, len: usize, fill: T) -> Result<Self, EngineError> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(len)
            .map_err(|_| EngineError::Allocation {
                what,
                requested: len,
            })?;
        slots.resize(len, fill);
        Ok(Buffer::Owned(slots))
    }

    /// Overwrite every slot with `fill`.
    pub(crate) fn clear(&mut self, fill: T) {
        self.fill(fill);
    }
}

impl<'b, T> Buffer<'b, T> {
    pub(crate) fn is_owned(&self) -> bool {
        matches!(self, Buffer::Owned(_))
    }
}

impl<'b, T> Deref for Buffer<'b, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        match self {
            Buffer::Owned(slots) => slots,
            Buffer::Borrowed(slots) => slots,
        }
    }
}

impl<'b, T> DerefMut for Buffer<'b, T> {
    fn deref_mut(&mut self) -> &mut [T] {
        match self {
            Buffer::Owned(slots) => slots,
            Buffer::Borrowed(slots) => slots,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocated_buffer_has_requested_length() {
        let buffer = Buffer::allocate("test", 5, 0u8).unwrap();
        assert_eq!(buffer.len(), 5);
        assert!(buffer.is_owned());
        assert!(buffer.iter().all(|&slot| slot == 0));
    }

    #[test]
    fn borrowed_buffer_writes_through() {
        let mut backing = [0u8; 3];
        {
            let mut buffer = Buffer::Borrowed(&mut backing[..]);
            assert!(!buffer.is_owned());
            buffer[1] = 7;
        }
        assert_eq!(backing, [0, 7, 0]);
    }

    #[test]
    fn clear_resets_every_slot() {
        let mut buffer = Buffer::allocate("test", 3, 1u8).unwrap();
        buffer[0] = 9;
        buffer.clear(2);
        assert_eq!(&*buffer, &[2, 2, 2]);
    }
}
