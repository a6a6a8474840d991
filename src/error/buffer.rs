/// Lookahead buffer misuse.
///
/// A correctly driven tokenizer never produces these; seeing one means an
/// internal invariant was broken.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
	/// Push into a buffer already holding `capacity` items.
	#[error("Lookahead buffer overflow: capacity {capacity} exceeded")]
	Overflow { capacity: usize },
	/// Pop or peek on an empty buffer.
	#[error("Lookahead buffer underflow: the buffer is empty")]
	Underflow,
	/// Indexed access past the live items.
	#[error("Lookahead index {index} out of range for {size} buffered items")]
	OutOfRange { index: usize, size: usize },
}
