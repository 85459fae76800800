mod memory;
mod sqlite;
mod traits;

pub use memory::InMemoryContactRepository;
pub use sqlite::SqliteContactRepository;
pub use traits::ContactRepository;
