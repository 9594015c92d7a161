//! Cartesian tree sort, draining a min-heap-ordered Cartesian tree with a priority queue.

#![cfg(feature = "alloc")]

use core::mem;
use ndarray::{ArrayView1, ArrayViewMut1};

#[cfg(not(feature = "std"))]
extern crate alloc as no_std_alloc;
#[cfg(not(feature = "std"))]
use no_std_alloc::{vec, vec::Vec};

/// Node of a Cartesian tree over indices, its own index being implied by its position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Node {
	left: Option<usize>,
	right: Option<usize>,
}

/// Builds the min-heap-ordered Cartesian tree of `v` whose in-order walk is `0..v.len()`.
///
/// Returns the nodes indexed like `v` and the root, if any.
fn cartesian_tree<T, F>(v: ArrayView1<'_, T>, is_less: &mut F) -> (Vec<Node>, Option<usize>)
where
	F: FnMut(&T, &T) -> bool,
{
	let mut nodes = vec![Node::default(); v.len()];
	let mut root = None;
	// Nodes on the right spine from the root down to the rightmost node.
	let mut spine: Vec<usize> = Vec::with_capacity(v.len());

	for node in 0..v.len() {
		// Walk up the right spine until finding a strictly smaller parent.
		let mut parent = None;
		while let Some(&top) = spine.last() {
			if is_less(&v[top], &v[node]) {
				parent = Some(top);
				break;
			}
			spine.pop();
		}

		match parent {
			// New minimum adopting the whole tree as its left subtree.
			None => {
				nodes[node].left = root;
				root = Some(node);
			}
			// Adopt the right subtree of `parent` as left subtree and become its right child.
			Some(parent) => {
				nodes[node].left = nodes[parent].right;
				nodes[parent].right = Some(node);
			}
		}
		spine.push(node);
	}

	(nodes, root)
}

/// Binary min-heap of indices into `v`.
struct IndexQueue {
	heap: Vec<usize>,
}

impl IndexQueue {
	fn with_capacity(capacity: usize) -> Self {
		Self {
			heap: Vec::with_capacity(capacity),
		}
	}

	fn push<T, F>(&mut self, v: &ArrayView1<'_, T>, index: usize, is_less: &mut F)
	where
		F: FnMut(&T, &T) -> bool,
	{
		self.heap.push(index);
		let mut node = self.heap.len() - 1;
		while node > 0 {
			let parent = (node - 1) / 2;
			if !is_less(&v[self.heap[node]], &v[self.heap[parent]]) {
				break;
			}
			self.heap.swap(node, parent);
			node = parent;
		}
	}

	fn pop<T, F>(&mut self, v: &ArrayView1<'_, T>, is_less: &mut F) -> Option<usize>
	where
		F: FnMut(&T, &T) -> bool,
	{
		if self.heap.is_empty() {
			return None;
		}
		let min = self.heap.swap_remove(0);
		let len = self.heap.len();
		let mut node = 0;
		loop {
			// Children of `node`.
			let mut child = 2 * node + 1;
			if child >= len {
				break;
			}

			// Choose the smaller child.
			if child + 1 < len && is_less(&v[self.heap[child + 1]], &v[self.heap[child]]) {
				child += 1;
			}

			// Stop if the invariant holds at `node`.
			if !is_less(&v[self.heap[child]], &v[self.heap[node]]) {
				break;
			}

			self.heap.swap(node, child);
			node = child;
		}
		Some(min)
	}
}

/// Sorts `v` using Cartesian tree sort, which is *O*(*n* \* log(*n*)) worst-case and *O*(*n*) on
/// already sorted input.
///
/// Allocates a tree and a queue of *O*(*n*) indices but moves elements by swapping only.
pub fn cartesian_tree_sort<T, F>(mut v: ArrayViewMut1<'_, T>, mut is_less: F)
where
	F: FnMut(&T, &T) -> bool,
{
	// Sorting has no meaningful behavior on zero-sized types.
	if mem::size_of::<T>() == 0 {
		return;
	}

	let len = v.len();
	if len < 2 {
		return;
	}

	// Sorted order of indices into the yet unmodified `v`.
	let mut indices = {
		let w = v.view();
		let (nodes, root) = cartesian_tree(w.view(), &mut is_less);
		let mut queue = IndexQueue::with_capacity(len);
		let mut indices = Vec::with_capacity(len);
		if let Some(root) = root {
			queue.push(&w, root, &mut is_less);
		}
		while let Some(min) = queue.pop(&w, &mut is_less) {
			indices.push(min);
			let Node { left, right } = nodes[min];
			for child in [left, right].into_iter().flatten() {
				queue.push(&w, child, &mut is_less);
			}
		}
		indices
	};
	debug_assert_eq!(indices.len(), len);

	// Apply the permutation by swapping, following already moved elements to their new place.
	for i in 0..len {
		let mut index = indices[i];
		while index < i {
			index = indices[index];
		}
		indices[i] = index;
		v.swap(i, index);
	}
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::{cartesian_tree, cartesian_tree_sort};
	use ndarray::{Array1, arr1};
	use quickcheck_macros::quickcheck;
	use rand::{Rng, SeedableRng, rngs::StdRng};

	#[quickcheck]
	fn sorted(xs: Vec<u32>) {
		let mut sorted = xs.clone();
		sorted.sort_unstable();
		let sorted = Array1::from_vec(sorted);
		let mut array = Array1::from_vec(xs);
		cartesian_tree_sort(array.view_mut(), u32::lt);
		assert_eq!(array, sorted);
	}

	#[quickcheck]
	fn sorted_by_reverse(xs: Vec<u8>) {
		let mut sorted = xs.clone();
		sorted.sort_unstable_by(|a, b| b.cmp(a));
		let sorted = Array1::from_vec(sorted);
		let mut array = Array1::from_vec(xs);
		cartesian_tree_sort(array.view_mut(), |a: &u8, b: &u8| b < a);
		assert_eq!(array, sorted);
	}

	#[quickcheck]
	fn permuted(xs: Vec<(u8, u16)>) {
		let mut array = Array1::from_vec(xs.clone());
		cartesian_tree_sort(array.view_mut(), |a: &(u8, u16), b: &(u8, u16)| a.0 < b.0);
		for i in 1..array.len() {
			assert!(array[i - 1].0 <= array[i].0);
		}
		let mut xs = xs;
		let mut ys = array.to_vec();
		xs.sort_unstable();
		ys.sort_unstable();
		assert_eq!(xs, ys);
	}

	#[test]
	fn tree() {
		let v = arr1(&[9, 3, 7, 1, 8, 12, 10, 20, 15, 18, 5]);
		let (nodes, root) = cartesian_tree(v.view(), &mut i32::lt);
		assert_eq!(root, Some(3));
		assert_eq!((nodes[3].left, nodes[3].right), (Some(1), Some(10)));
		assert_eq!((nodes[1].left, nodes[1].right), (Some(0), Some(2)));
		assert_eq!((nodes[10].left, nodes[10].right), (Some(4), None));
		assert_eq!((nodes[4].left, nodes[4].right), (None, Some(6)));
		assert_eq!((nodes[6].left, nodes[6].right), (Some(5), Some(8)));
		assert_eq!((nodes[8].left, nodes[8].right), (Some(7), Some(9)));
	}

	#[test]
	fn scenarios() {
		let sort = |xs: &[i32]| {
			let mut array = Array1::from_vec(xs.to_vec());
			cartesian_tree_sort(array.view_mut(), i32::lt);
			array.to_vec()
		};
		assert_eq!(sort(&[5, 3, 8, 1, 9, 2]), [1, 2, 3, 5, 8, 9]);
		assert!(sort(&[]).is_empty());
		assert_eq!(sort(&[7]), [7]);
		assert_eq!(sort(&[1, 2, 3, 4]), [1, 2, 3, 4]);
		assert_eq!(sort(&[4, 3, 2, 1]), [1, 2, 3, 4]);
		assert_eq!(sort(&[2, 2, 1, 2]), [1, 2, 2, 2]);
	}

	#[test]
	fn deep_tree() {
		let len = 1_000_000;
		let mut array = Array1::from_iter((0..len).rev());
		cartesian_tree_sort(array.view_mut(), u32::lt);
		assert!(array.iter().copied().eq(0..len));
	}

	#[test]
	fn spine() {
		// Descending then ascending, so the right spine first collapses and then grows.
		let v = arr1(&[5, 4, 3, 0, 1, 2, 6]);
		let (nodes, root) = cartesian_tree(v.view(), &mut i32::lt);
		assert_eq!(root, Some(3));
		assert_eq!((nodes[3].left, nodes[3].right), (Some(2), Some(4)));
		assert_eq!((nodes[2].left, nodes[1].left), (Some(1), Some(0)));
		assert_eq!((nodes[4].right, nodes[5].right, nodes[6].right), (Some(5), Some(6), None));
	}

	#[test]
	fn sorted_small_key_ranges() {
		let mut rng = StdRng::seed_from_u64(0x5eed);
		for range in [1, 2, 3, 16] {
			for len in [0, 1, 2, 17, 600] {
				let xs = (0..len)
					.map(|_| rng.random_range(0..range))
					.collect::<Vec<u8>>();
				let mut sorted = xs.clone();
				sorted.sort_unstable();
				let mut array = Array1::from_vec(xs);
				cartesian_tree_sort(array.view_mut(), u8::lt);
				assert_eq!(array.to_vec(), sorted, "range {range}, length {len}");
			}
		}
	}
}
