pub mod data;
pub mod models;

pub use data::{PgStudentStore, StudentStore};
pub use models::Student;
