//! In-place [smoothsort] and sibling sorts for non-contiguous (sub)views into *n*-dimensional
//! arrays of [`ndarray`].
//!
//! # Example
//!
//! ```
//! use ndarray_smoothsort::{ndarray::arr2, Sort1Ext};
//!
//! // 2-dimensional array of 4 rows and 5 columns.
//! let mut v = arr2(&[[-5, 4, 1, -3,  2],   // row 0, axis 0
//!                    [ 8, 3, 2,  4,  8],   // row 1, axis 0
//!                    [38, 9, 3,  0,  3],   // row 2, axis 0
//!                    [ 4, 9, 0,  8, -1]]); // row 3, axis 0
//! //                    \     \       \
//! //                  column 0 \    column 4         axis 1
//! //                         column 2                axis 1
//!
//! // Mutable subview into the last column.
//! let mut column = v.column_mut(4);
//!
//! // Due to row-major memory layout, columns are non-contiguous
//! // and hence cannot be sorted by viewing them as mutable slices.
//! assert_eq!(column.as_slice_mut(), None);
//!
//! // Instead, sorting is specifically implemented for non-contiguous
//! // mutable (sub)views.
//! column.smooth_sort();
//!
//! assert!(v == arr2(&[[-5, 4, 1, -3, -1],
//!                     [ 8, 3, 2,  4,  2],
//!                     [38, 9, 3,  0,  3],
//!                     [ 4, 9, 0,  8,  8]]));
//! //                                   \
//! //                                 column 4 sorted, others untouched
//! ```
//!
//! # Current Implementation
//!
//! Complexities where *n* is the length of the (sub)view and *w* the bit width of integer keys.
//!
//! | Resource | Complexity | Smoothsort       | Binary quicksort | Cartesian tree sort |
//! |----------|------------|------------------|------------------|---------------------|
//! | Time     | Best       | *O*(*n*)         | *O*(*n*)         | *O*(*n*)            |
//! | Time     | Average    | *O*(*n* log *n*) | *O*(*n* *w*)     | *O*(*n* log *n*)    |
//! | Time     | Worst      | *O*(*n* log *n*) | *O*(*n* *w*)     | *O*(*n* log *n*)    |
//! | Space    | Worst      | *O*(1)           | *O*(*w*)         | *O*(*n*)            |
//!
//! None of the sorts is stable.
//!
//! [smoothsort]: https://en.wikipedia.org/wiki/Smoothsort
//!
//! # Features
//!
//!   * `alloc` for `cartesian_tree_sort`/`cartesian_tree_sort_by`/`cartesian_tree_sort_by_key`.
//!     Enabled by `std`.
//!   * `std` for `ndarray/std` and `thiserror/std`. Enabled by `default` or `rayon`.
//!   * `rayon` for parallel `par_binary_quick_sort*`.
//!   * `tracing` for trace events of every sort.

#![deny(
	missing_docs,
	rustdoc::broken_intra_doc_links,
	rustdoc::missing_crate_level_docs
)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod binary_quick_sort;
mod cartesian_tree_sort;
mod is_sorted;
mod leonardo;
mod shape;
mod smooth_sort;

#[cfg(feature = "rayon")]
mod par;
#[cfg(feature = "rayon")]
use par::binary_quick_sort::par_binary_quick_sort;

#[cfg(feature = "alloc")]
use crate::cartesian_tree_sort::cartesian_tree_sort;

use crate::{
	binary_quick_sort::binary_quick_sort, is_sorted::is_sorted, leonardo::check_capacity,
	smooth_sort::smooth_sort,
};
use core::cmp::Ordering::{self, Less};
use ndarray::{ArrayBase, Data, DataMut, Ix1};

pub use crate::{
	binary_quick_sort::RadixKey,
	leonardo::{CAPACITY, CapacityExceeded},
};
pub use ndarray;

#[cfg(feature = "tracing")]
macro_rules! trace {
	($($arg:tt)*) => {
		tracing::trace!($($arg)*)
	};
}
#[cfg(not(feature = "tracing"))]
macro_rules! trace {
	($($arg:tt)*) => {};
}
pub(crate) use trace;

/// Extension trait for 1-dimensional [`ArrayBase<S, Ix1>`](`ArrayBase`) array or (sub)view with
/// arbitrary memory layout (e.g., non-contiguous) providing in-place sorting methods.
pub trait Sort1Ext<A, S>
where
	S: Data<Elem = A>,
{
	/// Sorts the array in place without allocating.
	///
	/// This sort is unstable (i.e., may reorder equal elements), *O*(*n* log *n*) worst-case, and
	/// *O*(*n*) if the array is already sorted, degrading gracefully in between.
	///
	/// # Current Implementation
	///
	/// The current algorithm is Dijkstra's [smoothsort], a heapsort variant building a forest of
	/// Leonardo trees on top of the array itself. Elements are only ever swapped and no auxiliary
	/// memory is used.
	///
	/// # Panics
	///
	/// Panics if the length exceeds [`CAPACITY`], which cannot happen for arrays whose length
	/// fits into `isize`. See [`try_smooth_sort_by`](Sort1Ext::try_smooth_sort_by).
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_smoothsort::{ndarray::arr1, Sort1Ext};
	///
	/// let mut v = arr1(&[-5, 4, 1, -3, 2]);
	///
	/// v.smooth_sort();
	/// assert!(v == arr1(&[-5, -3, 1, 2, 4]));
	/// ```
	///
	/// [smoothsort]: https://en.wikipedia.org/wiki/Smoothsort
	fn smooth_sort(&mut self)
	where
		A: Ord,
		S: DataMut;
	/// Sorts the array in place with a comparator function without allocating.
	///
	/// This sort is unstable (i.e., may reorder equal elements), *O*(*n* log *n*) worst-case, and
	/// *O*(*n*) if the array is already sorted, degrading gracefully in between.
	///
	/// The comparator function must define a total ordering for the elements in the array. If
	/// the ordering is not total, the order of the elements is unspecified. An order is a
	/// total order if it is (for all `a`, `b` and `c`):
	///
	/// * total and antisymmetric: exactly one of `a < b`, `a == b` or `a > b` is true, and
	/// * transitive, `a < b` and `b < c` implies `a < c`. The same must hold for both `==` and `>`.
	///
	/// For example, while [`f64`] doesn't implement [`Ord`] because `NaN != NaN`, we can use
	/// `partial_cmp` as our sort function when we know the array doesn't contain a `NaN`.
	///
	/// ```
	/// use ndarray_smoothsort::{ndarray::arr1, Sort1Ext};
	///
	/// let mut floats = arr1(&[5f64, 4.0, 1.0, 3.0, 2.0]);
	/// floats.smooth_sort_by(|a, b| a.partial_cmp(b).unwrap());
	/// assert_eq!(floats, arr1(&[1.0, 2.0, 3.0, 4.0, 5.0]));
	/// ```
	///
	/// # Panics
	///
	/// Panics if the length exceeds [`CAPACITY`]. May panic if `compare` panics, leaving the
	/// array in an unspecified permutation of its elements.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_smoothsort::{ndarray::arr1, Sort1Ext};
	///
	/// let mut v = arr1(&[5, 4, 1, 3, 2]);
	/// v.smooth_sort_by(|a, b| a.cmp(b));
	/// assert!(v == arr1(&[1, 2, 3, 4, 5]));
	///
	/// // reverse sorting
	/// v.smooth_sort_by(|a, b| b.cmp(a));
	/// assert!(v == arr1(&[5, 4, 3, 2, 1]));
	/// ```
	fn smooth_sort_by<F>(&mut self, compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut;
	/// Sorts the array in place with a key extraction function without allocating.
	///
	/// This sort is unstable (i.e., may reorder equal elements) and *O*(*m* \* *n* \* log(*n*))
	/// worst-case, where the key function is *O*(*m*).
	///
	/// # Panics
	///
	/// Panics if the length exceeds [`CAPACITY`].
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_smoothsort::{ndarray::arr1, Sort1Ext};
	///
	/// let mut v = arr1(&[-5i32, 4, 1, -3, 2]);
	///
	/// v.smooth_sort_by_key(|k| k.abs());
	/// assert!(v == arr1(&[1, 2, -3, 4, -5]));
	/// ```
	fn smooth_sort_by_key<K, F>(&mut self, f: F)
	where
		K: Ord,
		F: FnMut(&A) -> K,
		S: DataMut;
	/// Sorts the array in place with a comparator function, failing fast if its length exceeds
	/// [`CAPACITY`].
	///
	/// Equivalent to [`smooth_sort_by`](Sort1Ext::smooth_sort_by) otherwise. The array is left
	/// untouched on error.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_smoothsort::{ndarray::arr1, Sort1Ext};
	///
	/// let mut v = arr1(&[5, 4, 1, 3, 2]);
	/// assert_eq!(v.try_smooth_sort_by(|a, b| a.cmp(b)), Ok(()));
	/// assert!(v == arr1(&[1, 2, 3, 4, 5]));
	/// ```
	fn try_smooth_sort_by<F>(&mut self, compare: F) -> Result<(), CapacityExceeded>
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut;

	/// Sorts the array of integers in place.
	///
	/// This sort is unstable (i.e., may reorder equal elements) and *O*(*n* \* *w*) worst-case,
	/// where *w* is the bit width of the integer type.
	///
	/// # Current Implementation
	///
	/// The current algorithm is binary quicksort, a most significant bit first radix sort
	/// partitioning the array by one bit at a time like quicksort partitions by a pivot. It only
	/// recurses into the shorter partition, bounding the stack depth by *w*.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_smoothsort::{ndarray::arr1, Sort1Ext};
	///
	/// let mut v = arr1(&[-5, 4, 1, -3, 2]);
	///
	/// v.binary_quick_sort();
	/// assert!(v == arr1(&[-5, -3, 1, 2, 4]));
	/// ```
	fn binary_quick_sort(&mut self)
	where
		A: RadixKey,
		S: DataMut;
	/// Sorts the array in place with an integer key extraction function.
	///
	/// This sort is unstable (i.e., may reorder equal elements) and *O*(*m* \* *n* \* *w*)
	/// worst-case, where the key function is *O*(*m*) and *w* is the bit width of the key.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_smoothsort::{ndarray::arr1, Sort1Ext};
	///
	/// let mut v = arr1(&["ccc", "a", "bb"]);
	///
	/// v.binary_quick_sort_by_key(|s| s.len());
	/// assert!(v == arr1(&["a", "bb", "ccc"]));
	/// ```
	fn binary_quick_sort_by_key<K, F>(&mut self, f: F)
	where
		K: RadixKey,
		F: FnMut(&A) -> K,
		S: DataMut;
	/// Sorts the array of integers in parallel.
	///
	/// This sort is unstable (i.e., may reorder equal elements) and *O*(*n* \* *w*) worst-case,
	/// where *w* is the bit width of the integer type.
	///
	/// # Current Implementation
	///
	/// The current algorithm is binary quicksort. Once a partition exceeds a minimum length, both
	/// partitions are sorted in parallel.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_smoothsort::{ndarray::arr1, Sort1Ext};
	///
	/// let mut v = arr1(&[-5, 4, 1, -3, 2]);
	///
	/// v.par_binary_quick_sort();
	/// assert!(v == arr1(&[-5, -3, 1, 2, 4]));
	/// ```
	#[cfg(feature = "rayon")]
	fn par_binary_quick_sort(&mut self)
	where
		A: RadixKey + Send,
		S: DataMut;
	/// Sorts the array in parallel with an integer key extraction function.
	///
	/// This sort is unstable (i.e., may reorder equal elements) and *O*(*m* \* *n* \* *w*)
	/// worst-case, where the key function is *O*(*m*) and *w* is the bit width of the key.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_smoothsort::{ndarray::arr1, Sort1Ext};
	///
	/// let mut v = arr1(&[-5i32, 4, 1, -3, 2]);
	///
	/// v.par_binary_quick_sort_by_key(|k| k.unsigned_abs());
	/// assert!(v == arr1(&[1, 2, -3, 4, -5]));
	/// ```
	#[cfg(feature = "rayon")]
	fn par_binary_quick_sort_by_key<K, F>(&mut self, f: F)
	where
		A: Send,
		K: RadixKey,
		F: Fn(&A) -> K + Sync,
		S: DataMut;

	/// Sorts the array in place by draining its Cartesian tree.
	///
	/// This sort is unstable (i.e., may reorder equal elements), *O*(*n* log *n*) worst-case, and
	/// *O*(*n*) if the array is already sorted.
	///
	/// # Current Implementation
	///
	/// The current algorithm builds the min-heap-ordered [Cartesian tree] of the array and
	/// repeatedly takes the smallest root of a priority queue of subtrees. It allocates *O*(*n*)
	/// indices but moves elements by swapping only.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_smoothsort::{ndarray::arr1, Sort1Ext};
	///
	/// let mut v = arr1(&[-5, 4, 1, -3, 2]);
	///
	/// v.cartesian_tree_sort();
	/// assert!(v == arr1(&[-5, -3, 1, 2, 4]));
	/// ```
	///
	/// [Cartesian tree]: https://en.wikipedia.org/wiki/Cartesian_tree
	#[cfg(feature = "alloc")]
	fn cartesian_tree_sort(&mut self)
	where
		A: Ord,
		S: DataMut;
	/// Sorts the array in place with a comparator function by draining its Cartesian tree.
	///
	/// See [`cartesian_tree_sort`](Sort1Ext::cartesian_tree_sort) and the requirements on
	/// `compare` of [`smooth_sort_by`](Sort1Ext::smooth_sort_by).
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_smoothsort::{ndarray::arr1, Sort1Ext};
	///
	/// let mut v = arr1(&[1, 2, 3]);
	/// v.cartesian_tree_sort_by(|a, b| b.cmp(a));
	/// assert!(v == arr1(&[3, 2, 1]));
	/// ```
	#[cfg(feature = "alloc")]
	fn cartesian_tree_sort_by<F>(&mut self, compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut;
	/// Sorts the array in place with a key extraction function by draining its Cartesian tree.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_smoothsort::{ndarray::arr1, Sort1Ext};
	///
	/// let mut v = arr1(&[-5i32, 4, 1, -3, 2]);
	///
	/// v.cartesian_tree_sort_by_key(|k| k.abs());
	/// assert!(v == arr1(&[1, 2, -3, 4, -5]));
	/// ```
	#[cfg(feature = "alloc")]
	fn cartesian_tree_sort_by_key<K, F>(&mut self, f: F)
	where
		K: Ord,
		F: FnMut(&A) -> K,
		S: DataMut;

	/// Checks if the elements of this array are sorted.
	///
	/// That is, for each element `a` and its following element `b`, `a <= b` must hold. If the
	/// array yields exactly zero or one element, `true` is returned.
	///
	/// Note that if `Self::Item` is only `PartialOrd`, but not `Ord`, the above definition
	/// implies that this function returns `false` if any two consecutive items are not
	/// comparable.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_smoothsort::{ndarray::arr1, Sort1Ext};
	///
	/// let empty: [i32; 0] = [];
	///
	/// assert!(arr1(&[1, 2, 2, 9]).is_sorted());
	/// assert!(!arr1(&[1, 3, 2, 4]).is_sorted());
	/// assert!(arr1(&[0]).is_sorted());
	/// assert!(arr1(&empty).is_sorted());
	/// assert!(!arr1(&[0.0, 1.0, f32::NAN]).is_sorted());
	/// ```
	#[must_use]
	fn is_sorted(&self) -> bool
	where
		A: PartialOrd;
	/// Checks if the elements of this array are sorted using the given comparator function.
	///
	/// Instead of using `PartialOrd::partial_cmp`, this function uses the given `compare`
	/// function to determine the ordering of two elements. Apart from that, it's equivalent to
	/// [`is_sorted`]; see its documentation for more information.
	///
	/// [`is_sorted`]: Sort1Ext::is_sorted
	#[must_use]
	fn is_sorted_by<F>(&self, compare: F) -> bool
	where
		F: FnMut(&A, &A) -> Option<Ordering>;
	/// Checks if the elements of this array are sorted using the given key extraction function.
	///
	/// Instead of comparing the array's elements directly, this function compares the keys of the
	/// elements, as determined by `f`. Apart from that, it's equivalent to [`is_sorted`]; see its
	/// documentation for more information.
	///
	/// [`is_sorted`]: Sort1Ext::is_sorted
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_smoothsort::{ndarray::arr1, Sort1Ext};
	///
	/// assert!(arr1(&["c", "bb", "aaa"]).is_sorted_by_key(|s| s.len()));
	/// assert!(!arr1(&[-2i32, -1, 0, 3]).is_sorted_by_key(|n| n.abs()));
	/// ```
	#[must_use]
	fn is_sorted_by_key<F, K>(&self, f: F) -> bool
	where
		F: FnMut(&A) -> K,
		K: PartialOrd;
}

impl<A, S> Sort1Ext<A, S> for ArrayBase<S, Ix1>
where
	S: Data<Elem = A>,
{
	#[inline]
	fn smooth_sort(&mut self)
	where
		A: Ord,
		S: DataMut,
	{
		self.smooth_sort_by(A::cmp);
	}
	#[inline]
	fn smooth_sort_by<F>(&mut self, compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut,
	{
		if let Err(error) = self.try_smooth_sort_by(compare) {
			panic!("{error}");
		}
	}
	#[inline]
	fn smooth_sort_by_key<K, F>(&mut self, mut f: F)
	where
		K: Ord,
		F: FnMut(&A) -> K,
		S: DataMut,
	{
		self.smooth_sort_by(|a, b| f(a).cmp(&f(b)));
	}
	#[inline]
	fn try_smooth_sort_by<F>(&mut self, mut compare: F) -> Result<(), CapacityExceeded>
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut,
	{
		check_capacity(self.len())?;
		smooth_sort(self.view_mut(), |a: &A, b: &A| compare(a, b) == Less);
		Ok(())
	}

	#[inline]
	fn binary_quick_sort(&mut self)
	where
		A: RadixKey,
		S: DataMut,
	{
		binary_quick_sort(self.view_mut(), |&a: &A| a);
	}
	#[inline]
	fn binary_quick_sort_by_key<K, F>(&mut self, f: F)
	where
		K: RadixKey,
		F: FnMut(&A) -> K,
		S: DataMut,
	{
		binary_quick_sort(self.view_mut(), f);
	}
	#[cfg(feature = "rayon")]
	#[inline]
	fn par_binary_quick_sort(&mut self)
	where
		A: RadixKey + Send,
		S: DataMut,
	{
		par_binary_quick_sort(self.view_mut(), |&a: &A| a);
	}
	#[cfg(feature = "rayon")]
	#[inline]
	fn par_binary_quick_sort_by_key<K, F>(&mut self, f: F)
	where
		A: Send,
		K: RadixKey,
		F: Fn(&A) -> K + Sync,
		S: DataMut,
	{
		par_binary_quick_sort(self.view_mut(), f);
	}

	#[cfg(feature = "alloc")]
	#[inline]
	fn cartesian_tree_sort(&mut self)
	where
		A: Ord,
		S: DataMut,
	{
		cartesian_tree_sort(self.view_mut(), A::lt);
	}
	#[cfg(feature = "alloc")]
	#[inline]
	fn cartesian_tree_sort_by<F>(&mut self, mut compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut,
	{
		cartesian_tree_sort(self.view_mut(), |a: &A, b: &A| compare(a, b) == Less);
	}
	#[cfg(feature = "alloc")]
	#[inline]
	fn cartesian_tree_sort_by_key<K, F>(&mut self, mut f: F)
	where
		K: Ord,
		F: FnMut(&A) -> K,
		S: DataMut,
	{
		cartesian_tree_sort(self.view_mut(), |a: &A, b: &A| f(a).lt(&f(b)));
	}

	#[inline]
	fn is_sorted(&self) -> bool
	where
		A: PartialOrd,
	{
		is_sorted(self.view(), |a, b| a.partial_cmp(b))
	}
	#[inline]
	fn is_sorted_by<F>(&self, compare: F) -> bool
	where
		F: FnMut(&A, &A) -> Option<Ordering>,
	{
		is_sorted(self.view(), compare)
	}
	#[inline]
	fn is_sorted_by_key<F, K>(&self, mut f: F) -> bool
	where
		F: FnMut(&A) -> K,
		K: PartialOrd,
	{
		is_sorted(self.view(), |a, b| f(a).partial_cmp(&f(b)))
	}
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::Sort1Ext;
	use core::cmp::Ordering;
	use ndarray::{Array1, arr1, arr2, s};
	use quickcheck_macros::quickcheck;
	use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

	#[derive(Debug, Clone, Copy)]
	struct Item {
		index: usize,
		value: u32,
	}

	impl Eq for Item {}

	impl PartialEq for Item {
		fn eq(&self, other: &Self) -> bool {
			self.value == other.value
		}
	}

	impl Ord for Item {
		fn cmp(&self, other: &Self) -> Ordering {
			self.value.cmp(&other.value)
		}
	}

	impl PartialOrd for Item {
		fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
			Some(self.cmp(other))
		}
	}

	impl From<(usize, u32)> for Item {
		fn from((index, value): (usize, u32)) -> Self {
			Self { index, value }
		}
	}

	#[quickcheck]
	fn sorted_permutation(xs: Vec<u32>) {
		let xs = xs
			.into_iter()
			.enumerate()
			.map(Item::from)
			.collect::<Vec<Item>>();
		let mut array = Array1::from_vec(xs.clone());
		array.smooth_sort();
		assert!(array.is_sorted());
		let mut indices = array.iter().map(|item| item.index).collect::<Vec<usize>>();
		indices.sort_unstable();
		assert!(indices.into_iter().eq(0..xs.len()));
	}

	#[quickcheck]
	fn sorts_agree(xs: Vec<i16>) {
		let mut smooth = Array1::from_vec(xs.clone());
		let mut binary = smooth.clone();
		let mut cartesian = smooth.clone();
		smooth.smooth_sort();
		binary.binary_quick_sort();
		cartesian.cartesian_tree_sort();
		assert_eq!(smooth, binary);
		assert_eq!(smooth, cartesian);
		assert!(smooth.is_sorted());
	}

	#[test]
	fn descending() {
		let mut v = arr1(&[1, 2, 3]);
		v.smooth_sort_by(|a, b| b.cmp(a));
		assert_eq!(v, arr1(&[3, 2, 1]));
		assert!(v.is_sorted_by(|a, b| Some(b.cmp(a))));
	}

	#[test]
	fn duplicates() {
		let mut v = arr1(&[2, 2, 1, 2]);
		v.smooth_sort();
		assert_eq!(v, arr1(&[1, 2, 2, 2]));
	}

	#[test]
	fn shuffled_columns() {
		let mut rng = StdRng::seed_from_u64(1);
		let mut xs = (0..999).collect::<Vec<i64>>();
		xs.shuffle(&mut rng);
		let mut v = Array1::from_vec(xs).into_shape_with_order((333, 3)).unwrap();
		for mut column in v.columns_mut() {
			column.smooth_sort();
			assert!(column.is_sorted());
		}
		v.column_mut(0).smooth_sort_by_key(|&x| -x);
		assert!(v.column(0).is_sorted_by_key(|&x| -x));
		v.slice_mut(s![..;2, 1]).try_smooth_sort_by(|a, b| b.cmp(a)).unwrap();
		assert!(v.slice(s![..;2, 1]).is_sorted_by(|a, b| Some(b.cmp(a))));
	}

	#[test]
	fn in_rows_of_matrix() {
		let mut v = arr2(&[[3u8, 1, 2], [9, 8, 7]]);
		v.row_mut(1).binary_quick_sort();
		v.row_mut(0).cartesian_tree_sort_by(|a, b| b.cmp(a));
		assert_eq!(v, arr2(&[[3, 2, 1], [7, 8, 9]]));
	}

	#[test]
	#[should_panic(expected = "boom")]
	fn propagates_comparator_panic() {
		let mut v = arr1(&[3, 1, 2]);
		v.smooth_sort_by(|_, _| panic!("boom"));
	}
}
