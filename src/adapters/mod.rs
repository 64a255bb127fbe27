// Adapters layer: concrete implementations of the domain ports (clock, storage, accounts).

pub mod clock;
pub mod memory;
pub mod storage;

pub use clock::{FixedClock, SystemClock};
pub use memory::InMemoryProfileRepository;
pub use storage::LocalStorage;
