//! Special functions needed by the inverse transforms.
//!
//! - [`special`]: inverse error function and standard normal quantile

pub mod special;

pub use special::{erf_inv, norm_quantile};
