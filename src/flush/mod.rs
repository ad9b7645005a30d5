pub mod snapshot;

pub use snapshot::{read_snapshot, write_snapshot};
