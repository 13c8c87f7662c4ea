pub mod error;
pub mod guidance;
pub mod parser;
pub mod sections;
pub mod summary;
pub mod types;
