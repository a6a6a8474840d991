//! Fixed-capacity ring buffer backing the tokenizer's lookahead window.
//!
//! The backing array is sized for `N` slots when the buffer is created and is
//! never reallocated. A slot is filled when an item is pushed and emptied when
//! it is popped, so only live items are ever cloned or dropped.

use crate::error::BufferError;

/// Bounded FIFO holding at most `N` items.
#[derive(Debug, Clone)]
pub struct LookaheadBuffer<T, const N: usize> {
	slots: [Option<T>; N],
	/// Slot index of the logical front
	front: usize,
	/// Number of live items
	len:   usize,
}

impl<T, const N: usize> LookaheadBuffer<T, N> {
	pub fn new() -> Self { Self { slots: std::array::from_fn(|_| None), front: 0, len: 0 } }

	pub fn len(&self) -> usize { self.len }

	pub fn is_empty(&self) -> bool { self.len == 0 }

	pub fn is_full(&self) -> bool { self.len == N }

	/// Append `item` at the logical back.
	pub fn push(&mut self, item: T) -> Result<(), BufferError> {
		if self.is_full() {
			return Err(BufferError::Overflow { capacity: N });
		}
		let back = (self.front + self.len) % N;
		self.slots[back] = Some(item);
		self.len += 1;
		Ok(())
	}

	/// Remove the logical front item and hand it back.
	pub fn pop(&mut self) -> Result<T, BufferError> {
		if self.is_empty() {
			return Err(BufferError::Underflow);
		}
		let item = self.slots[self.front].take().ok_or(BufferError::Underflow)?;
		self.front = (self.front + 1) % N;
		self.len -= 1;
		Ok(item)
	}

	pub fn front(&self) -> Result<&T, BufferError> { self.get(0).ok_or(BufferError::Underflow) }

	pub fn back(&self) -> Result<&T, BufferError> {
		self.len.checked_sub(1).and_then(|last| self.get(last)).ok_or(BufferError::Underflow)
	}

	/// The `index`-th item counting from the front.
	pub fn item(&self, index: usize) -> Result<&T, BufferError> {
		self.get(index).ok_or(BufferError::OutOfRange { index, size: self.len })
	}

	pub fn iter(&self) -> impl Iterator<Item = &T> + '_ { (0..self.len).filter_map(|i| self.get(i)) }

	fn get(&self, index: usize) -> Option<&T> {
		if index >= self.len {
			return None;
		}
		self.slots[(self.front + index) % N].as_ref()
	}
}

impl<T, const N: usize> Default for LookaheadBuffer<T, N> {
	fn default() -> Self { Self::new() }
}
