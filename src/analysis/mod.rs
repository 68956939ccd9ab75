pub mod summary;
pub mod trending;
pub mod weekly;
