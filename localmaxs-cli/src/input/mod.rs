//! Input handling module

pub mod glob_resolver;
pub mod handle_reader;

pub use glob_resolver::resolve_patterns;
pub use handle_reader::HandleReader;
