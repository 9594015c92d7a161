//! Smoothsort over an implicit Leonardo heap.
//!
//! The heap is a forest of max-heap-ordered Leonardo trees laid out left to right in the array
//! being sorted. A tree of order `k` spans `L(k)` consecutive elements with its root at the
//! rightmost one, its second child's root right before it, and its first child's root `L(k - 2)`
//! elements before that. Trees are never materialized, positions are derived from the shape.

use crate::{leonardo::leonardo, shape::HeapShape};
use core::mem;
use ndarray::ArrayViewMut1;

/// Root of the second child of a tree of order `>= 2` rooted at `root`.
#[inline]
fn second_child(root: usize) -> usize {
	root - 1
}

/// Root of the first child of a tree of `order >= 2` rooted at `root`.
#[inline]
fn first_child(root: usize, order: usize) -> usize {
	second_child(root) - leonardo(order - 2)
}

/// Root and order of the greater child of a tree of `order >= 2` rooted at `root`.
///
/// Prefers the second child if both are equal.
#[inline]
fn larger_child<T, F>(
	v: &ArrayViewMut1<'_, T>,
	root: usize,
	order: usize,
	is_less: &mut F,
) -> (usize, usize)
where
	F: FnMut(&T, &T) -> bool,
{
	let first = first_child(root, order);
	let second = second_child(root);
	if is_less(&v[second], &v[first]) {
		(first, order - 1)
	} else {
		(second, order - 2)
	}
}

/// Restores the heap property of the tree of `order` rooted at `root` whose root may be too small.
fn sift_down<T, F>(mut v: ArrayViewMut1<'_, T>, mut root: usize, mut order: usize, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	// Trees of order 0 and 1 are leaves.
	while order > 1 {
		let (child, child_order) = larger_child(&v, root, order, is_less);

		// Stop if the invariant holds at `root`.
		if !is_less(&v[root], &v[child]) {
			break;
		}

		// Swap `root` with the greater child, move one step down, and continue sifting.
		v.swap(root, child);
		root = child;
		order = child_order;
	}
}

/// Moves the root at `end - 1` leftward across the tree roots of `shape` until the roots are in
/// ascending order, then restores the heap property of the tree it settled on.
///
/// The rightmost tree of `shape` must end at `end` and the leftmost one must start at 0.
fn rectify<T, F>(mut v: ArrayViewMut1<'_, T>, end: usize, mut shape: HeapShape, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	let mut root = end - 1;

	let order = loop {
		let order = shape.smallest();

		// The leftmost tree has no predecessor.
		if root + 1 == leonardo(order) {
			break order;
		}

		// The predecessor must exceed the root and both its children to be swapped in.
		let mut greatest = root;
		if order > 1 {
			let (child, _) = larger_child(&v, root, order, is_less);
			if is_less(&v[greatest], &v[child]) {
				greatest = child;
			}
		}

		let prior = root - leonardo(order);
		if !is_less(&v[greatest], &v[prior]) {
			break order;
		}

		v.swap(root, prior);
		root = prior;
		shape.advance();
	};

	sift_down(v, root, order, is_less);
}

/// Adds the element at `end` to the heap spanning `..end`.
///
/// The new tree is only rectified across the whole heap once no later element can merge it into
/// a greater tree, otherwise only its own heap property is restored. Returns whether it has been
/// rectified.
fn push<T, F>(v: ArrayViewMut1<'_, T>, end: usize, shape: &mut HeapShape, is_less: &mut F) -> bool
where
	F: FnMut(&T, &T) -> bool,
{
	shape.grow();

	let len = v.len();
	let is_final = match shape.smallest() {
		0 => end + 1 == len,
		// Unless followed by a tree of order 2 to merge with next.
		1 => end + 1 == len || (end + 2 == len && !shape.has_tree(1)),
		// Unless there is room for a tree of the preceding order and one more element.
		order => len - (end + 1) < leonardo(order - 1) + 1,
	};

	if is_final {
		rectify(v, end + 1, *shape, is_less);
	} else {
		sift_down(v, end, shape.smallest(), is_less);
	}
	is_final
}

/// Removes the greatest element at `end - 1` from the heap spanning `..end`, leaving it in place.
fn pop<T, F>(mut v: ArrayViewMut1<'_, T>, end: usize, shape: &mut HeapShape, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	let order = shape.smallest();

	// Leaves expose no children.
	if order <= 1 {
		shape.advance();
		return;
	}

	let root = end - 1;
	let first = first_child(root, order);
	let second = second_child(root);
	shape.split();

	// Settle the first child as if the second one were not there yet, then the second child.
	rectify(v.view_mut(), first + 1, shape.without_smallest(), is_less);
	rectify(v, second + 1, *shape, is_less);
}

/// Sorts `v` using smoothsort, which is *O*(*n* \* log(*n*)) worst-case and *O*(*n*) on already
/// sorted input.
///
/// Returns how often a tree has been rectified while building the heap, which is
/// *O*(log(*n*)).
pub fn smooth_sort<T, F>(mut v: ArrayViewMut1<'_, T>, mut is_less: F) -> usize
where
	F: FnMut(&T, &T) -> bool,
{
	// Sorting has no meaningful behavior on zero-sized types.
	if mem::size_of::<T>() == 0 {
		return 0;
	}

	let len = v.len();
	if len < 2 {
		return 0;
	}

	let mut shape = HeapShape::default();

	// Build the heap left to right.
	let mut rectified = 0;
	for end in 0..len {
		if push(v.view_mut(), end, &mut shape, &mut is_less) {
			rectified += 1;
		}
	}

	// Pop maximal elements from the heap right to left.
	for end in (1..=len).rev() {
		pop(v.view_mut(), end, &mut shape, &mut is_less);
	}
	debug_assert!(shape.is_empty());

	crate::trace!(len, rectified, "smooth sorted");
	rectified
}
