pub mod advertisement;
pub mod schema;
