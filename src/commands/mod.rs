//! Operations run by the binaries.

pub mod image;

pub use image::{optimize_cleanup, optimize_images, resize_all};
pub use crate::processing::purge_originals;
