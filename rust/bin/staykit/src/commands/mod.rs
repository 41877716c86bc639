pub mod context;
pub mod field;
pub mod resource;
