//! Sortedness checks over (sub)views.

use core::cmp::Ordering::{self, Greater};
use ndarray::ArrayView1;

/// Checks whether `v` is sorted according to `compare`, treating incomparable neighbors as
/// unsorted.
pub fn is_sorted<T, F>(v: ArrayView1<'_, T>, mut compare: F) -> bool
where
	F: FnMut(&T, &T) -> Option<Ordering>,
{
	v.windows(2)
		.into_iter()
		.all(|w| matches!(compare(&w[0], &w[1]), Some(ordering) if ordering != Greater))
}
