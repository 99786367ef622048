pub mod registry;
pub mod resolver;
pub mod translate;
pub mod types;
