//! Store adapters — the boundary between domain operations and the MongoDB
//! collections that back them.

pub mod blog;
pub mod resume;
