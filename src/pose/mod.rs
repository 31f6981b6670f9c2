pub mod id;
pub mod snapshot;
pub mod state;

pub use id::*;
pub use snapshot::*;
pub use state::*;
