mod batch;
mod purge;
mod resizer;

pub use batch::BatchProcessor;
pub use purge::purge_originals;
pub use resizer::{CommandResizer, Resizer};
