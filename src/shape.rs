//! Bit-encoded shape of a Leonardo heap.

/// Orders of the Leonardo trees currently forming the heap.
///
/// Bit `i` of `trees` is set iff a tree of order `smallest + i` is present. The bit vector is kept
/// shifted down such that bit 0 marks the rightmost tree whose order is `smallest`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeapShape {
	trees: u128,
	smallest: usize,
}

impl HeapShape {
	/// Whether there is no tree at all.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.trees == 0
	}
	/// Order of the rightmost tree.
	#[inline]
	pub fn smallest(&self) -> usize {
		self.smallest
	}
	/// Whether a tree of order `smallest + i` is present.
	#[inline]
	pub fn has_tree(&self, i: usize) -> bool {
		self.trees >> i & 1 != 0
	}

	/// Accounts for one more element at the end of the heap.
	pub fn grow(&mut self) {
		if !self.has_tree(0) {
			// Start with a tree of order 1.
			self.trees = 1;
			self.smallest = 1;
		} else if self.has_tree(1) {
			// Merge trees of orders `s` and `s + 1` into one of order `s + 2`.
			self.trees >>= 2;
			self.trees |= 1;
			self.smallest += 2;
		} else if self.smallest == 1 {
			// Append a tree of order 0.
			self.trees <<= 1;
			self.trees |= 1;
			self.smallest = 0;
		} else {
			// Append a tree of order 1, i.e., `(W, n)` becomes `(W0..01, 1)`.
			self.trees <<= self.smallest - 1;
			self.trees |= 1;
			self.smallest = 1;
		}
	}

	/// Drops the rightmost tree, or when used while walking leftward, skips to the next tree.
	pub fn advance(&mut self) {
		loop {
			self.trees >>= 1;
			self.smallest += 1;
			if self.is_empty() || self.has_tree(0) {
				break;
			}
		}
	}

	/// Replaces the rightmost tree of order `k >= 2` with its children of orders `k - 1` and
	/// `k - 2`, i.e., `(W1, k)` becomes `(W011, k - 2)`.
	pub fn split(&mut self) {
		debug_assert!(self.smallest >= 2);
		self.trees &= !1;
		self.trees <<= 2;
		self.trees |= 0b11;
		self.smallest -= 2;
	}

	/// Copy of this shape pretending the rightmost tree is absent.
	#[inline]
	#[must_use]
	pub fn without_smallest(self) -> Self {
		Self {
			trees: self.trees >> 1,
			smallest: self.smallest + 1,
		}
	}
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::HeapShape;
	use crate::leonardo::leonardo;

	fn orders(shape: &HeapShape) -> Vec<usize> {
		(0..128 - shape.smallest())
			.filter(|&i| shape.has_tree(i))
			.map(|i| shape.smallest() + i)
			.rev()
			.collect()
	}

	#[test]
	fn grows_like_leonardo_decomposition() {
		let mut shape = HeapShape::default();
		assert!(shape.is_empty());
		let mut expected = [
			vec![1],
			vec![1, 0],
			vec![2],
			vec![2, 1],
			vec![3],
			vec![3, 1],
			vec![3, 1, 0],
			vec![3, 2],
			vec![4],
			vec![4, 1],
		]
		.into_iter();
		for len in 1..=10 {
			shape.grow();
			let orders = orders(&shape);
			assert_eq!(Some(orders.clone()), expected.next());
			assert_eq!(orders.iter().map(|&k| leonardo(k)).sum::<usize>(), len);
			assert!(shape.has_tree(0));
		}
	}

	#[test]
	fn covers_every_length() {
		let mut shape = HeapShape::default();
		for len in 1..=100_000 {
			shape.grow();
			let orders = orders(&shape);
			assert_eq!(orders.iter().map(|&k| leonardo(k)).sum::<usize>(), len);
			for pair in orders.windows(2) {
				// Only the two rightmost trees may have adjacent orders.
				assert!(pair[0] - pair[1] >= 2 || pair[1] == shape.smallest());
			}
		}
	}

	#[test]
	fn split_and_advance() {
		let mut shape = HeapShape::default();
		for _ in 0..9 {
			shape.grow();
		}
		assert_eq!(orders(&shape), [4]);
		shape.split();
		assert_eq!(orders(&shape), [3, 2]);
		assert_eq!(orders(&shape.without_smallest()), [3]);
		shape.split();
		assert_eq!(orders(&shape), [3, 1, 0]);
		shape.advance();
		assert_eq!(orders(&shape), [3, 1]);
		shape.advance();
		assert_eq!(orders(&shape), [3]);
		shape.advance();
		assert!(shape.is_empty());
	}
}
