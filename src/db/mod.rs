pub mod memory;
pub mod pool;
pub mod postgres;
pub mod record;
pub mod store;

pub use memory::MemoryMoodStore;
pub use pool::create_pool;
pub use postgres::PgMoodStore;
pub use store::MoodStore;
