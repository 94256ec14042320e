pub mod links;
pub mod schema;
