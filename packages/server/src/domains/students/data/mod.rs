pub mod store;

pub use store::{PgStudentStore, StudentStore};
