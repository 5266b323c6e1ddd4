pub mod blocklist;
pub mod entry;

pub use blocklist::{BlockList, BlockRule};
pub use entry::Entry;
