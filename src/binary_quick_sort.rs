//! Binary quicksort, an in-place most significant bit first radix sort.

use core::mem;
use ndarray::{ArrayViewMut1, Axis};

/// Integer key partitionable bit by bit.
///
/// Bits are those of an order-preserving unsigned image of the key, i.e., signed keys have their
/// sign bit flipped so negative keys precede non-negative ones.
pub trait RadixKey: Copy {
	/// Number of bits.
	const BITS: u32;

	/// Whether `bit` of the unsigned image is set, counting from the least significant bit.
	fn bit(self, bit: u32) -> bool;
}

macro_rules! impl_unsigned {
	($($t:ty),*) => {$(
		impl RadixKey for $t {
			const BITS: u32 = <$t>::BITS;

			#[inline]
			fn bit(self, bit: u32) -> bool {
				self >> bit & 1 != 0
			}
		}
	)*};
}

macro_rules! impl_signed {
	($($t:ty => $u:ty),*) => {$(
		impl RadixKey for $t {
			const BITS: u32 = <$t>::BITS;

			#[inline]
			fn bit(self, bit: u32) -> bool {
				((self as $u) ^ (1 << (<$t>::BITS - 1))) >> bit & 1 != 0
			}
		}
	)*};
}

impl_unsigned!(u8, u16, u32, u64, u128, usize);
impl_signed!(i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128, isize => usize);

/// Moves keys with `bit` unset before keys with `bit` set and returns the index of the first key
/// with `bit` set.
pub fn partition_at_bit<T, K, F>(mut v: ArrayViewMut1<'_, T>, key: &mut F, bit: u32) -> usize
where
	K: RadixKey,
	F: FnMut(&T) -> K,
{
	let mut l = 0;
	let mut r = v.len();

	loop {
		// Find the first set bit from the left.
		while l < r && !key(&v[l]).bit(bit) {
			l += 1;
		}
		if l == r {
			return l;
		}

		// Find the last unset bit from the right.
		loop {
			r -= 1;
			if l == r || !key(&v[r]).bit(bit) {
				break;
			}
		}
		if l == r {
			return l;
		}

		v.swap(l, r);
	}
}

/// Sorts `v` by `key` using binary quicksort, which is *O*(*n* \* *w*) worst-case for keys of
/// *w* bits.
pub fn binary_quick_sort<T, K, F>(v: ArrayViewMut1<'_, T>, mut key: F)
where
	K: RadixKey,
	F: FnMut(&T) -> K,
{
	// Sorting has no meaningful behavior on zero-sized types.
	if mem::size_of::<T>() == 0 {
		return;
	}

	crate::trace!(len = v.len(), bits = K::BITS, "binary quicksort");
	recurse(v, &mut key, K::BITS);
}

/// Sorts `v` recursively by the `bits` least significant bits of `key`.
fn recurse<T, K, F>(mut v: ArrayViewMut1<'_, T>, key: &mut F, mut bits: u32)
where
	K: RadixKey,
	F: FnMut(&T) -> K,
{
	while bits > 0 && v.len() > 1 {
		bits -= 1;
		let mid = partition_at_bit(v.view_mut(), key, bits);
		let (zeros, ones) = v.split_at(Axis(0), mid);

		// Recurse into the shorter side only and continue with the longer side.
		if zeros.len() < ones.len() {
			recurse(zeros, key, bits);
			v = ones;
		} else {
			recurse(ones, key, bits);
			v = zeros;
		}
	}
}
