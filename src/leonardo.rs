//! Leonardo numbers sizing the trees of a Leonardo heap.

use thiserror::Error;

/// Count of Leonardo numbers representable in `usize`.
pub const LEONARDO_LEN: usize = leonardo_len();

/// Leonardo numbers `L(0) = L(1) = 1` and `L(k) = L(k - 1) + L(k - 2) + 1` up to `usize::MAX`.
pub const LEONARDO: [usize; LEONARDO_LEN] = leonardo_table();

/// Largest supported length, the largest tabulated Leonardo number.
pub const CAPACITY: usize = LEONARDO[LEONARDO_LEN - 1];

const fn leonardo_len() -> usize {
	let (mut prev, mut next) = (1usize, 1usize);
	let mut len = 2;
	loop {
		match next.checked_add(prev) {
			Some(sum) => match sum.checked_add(1) {
				Some(sum) => {
					prev = next;
					next = sum;
					len += 1;
				}
				None => return len,
			},
			None => return len,
		}
	}
}

const fn leonardo_table() -> [usize; LEONARDO_LEN] {
	let mut table = [1; LEONARDO_LEN];
	let mut k = 2;
	while k < LEONARDO_LEN {
		table[k] = table[k - 1] + table[k - 2] + 1;
		k += 1;
	}
	table
}

/// Returns the size of a Leonardo tree of `order`.
#[inline]
pub fn leonardo(order: usize) -> usize {
	LEONARDO[order]
}

/// Length of an array or (sub)view exceeding the largest tabulated Leonardo number.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("length {len} exceeds Leonardo heap capacity {capacity}")]
pub struct CapacityExceeded {
	/// Length of the rejected array or (sub)view.
	pub len: usize,
	/// Largest supported length.
	pub capacity: usize,
}

/// Checks whether a Leonardo heap can span `len` elements.
#[inline]
pub fn check_capacity(len: usize) -> Result<(), CapacityExceeded> {
	if len > CAPACITY {
		return Err(CapacityExceeded {
			len,
			capacity: CAPACITY,
		});
	}
	Ok(())
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::{CAPACITY, CapacityExceeded, LEONARDO, LEONARDO_LEN, check_capacity, leonardo};

	#[test]
	fn leading_numbers() {
		assert_eq!(
			LEONARDO[..16],
			[
				1, 1, 3, 5, 9, 15, 25, 41, 67, 109, 177, 287, 465, 753, 1219, 1973
			]
		);
		assert_eq!(leonardo(45), 3672623805);
	}

	#[test]
	fn covers_usize() {
		#[cfg(target_pointer_width = "64")]
		assert_eq!(LEONARDO_LEN, 92);
		#[cfg(target_pointer_width = "32")]
		assert_eq!(LEONARDO_LEN, 46);
		let (prev, last) = (LEONARDO[LEONARDO_LEN - 2], LEONARDO[LEONARDO_LEN - 1]);
		assert!(last.checked_add(prev).and_then(|sum| sum.checked_add(1)).is_none());
		assert!(CAPACITY > isize::MAX as usize);
	}

	#[test]
	fn capacity() {
		assert_eq!(check_capacity(0), Ok(()));
		assert_eq!(check_capacity(CAPACITY), Ok(()));
		assert_eq!(
			check_capacity(usize::MAX),
			Err(CapacityExceeded {
				len: usize::MAX,
				capacity: CAPACITY,
			})
		);
		assert_eq!(
			check_capacity(usize::MAX).unwrap_err().to_string(),
			format!("length {} exceeds Leonardo heap capacity {CAPACITY}", usize::MAX)
		);
	}
}
