//! Parallel binary quicksort.

use crate::binary_quick_sort::{RadixKey, partition_at_bit};
use core::{cmp, mem};
use ndarray::{ArrayViewMut1, Axis};

/// Sorts `v` by `key` in parallel using binary quicksort, which is *O*(*n* \* *w*) worst-case
/// for keys of *w* bits.
pub fn par_binary_quick_sort<T, K, F>(v: ArrayViewMut1<'_, T>, key: F)
where
	T: Send,
	K: RadixKey,
	F: Fn(&T) -> K + Sync,
{
	// Sorting has no meaningful behavior on zero-sized types.
	if mem::size_of::<T>() == 0 {
		return;
	}

	crate::trace!(len = v.len(), bits = K::BITS, "parallel binary quicksort");
	recurse(v, &key, K::BITS);
}

// Partitions up to this length are sorted sequentially. Their remaining bit passes are linear
// scans without comparator calls, so below this a Rayon task costs more than it saves.
const MAX_SEQUENTIAL: usize = 2000;

/// Sorts `v` recursively by the `bits` least significant bits of `key`.
fn recurse<T, K, F>(mut v: ArrayViewMut1<'_, T>, key: &F, mut bits: u32)
where
	T: Send,
	K: RadixKey,
	F: Fn(&T) -> K + Sync,
{
	while bits > 0 && v.len() > 1 {
		bits -= 1;
		let mid = partition_at_bit(v.view_mut(), &mut |x: &T| key(x), bits);
		let (zeros, ones) = v.split_at(Axis(0), mid);

		if cmp::max(zeros.len(), ones.len()) <= MAX_SEQUENTIAL {
			// Recurse into the shorter side only and continue with the longer side.
			if zeros.len() < ones.len() {
				recurse(zeros, key, bits);
				v = ones;
			} else {
				recurse(ones, key, bits);
				v = zeros;
			}
		} else {
			// Sort both partitions in parallel.
			rayon::join(
				|| recurse(zeros, key, bits),
				|| recurse(ones, key, bits),
			);
			break;
		}
	}
}
