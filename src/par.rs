//! Parallel counterparts built on [`rayon`].
//!
//! [`rayon`]: https://docs.rs/rayon

pub mod binary_quick_sort;
