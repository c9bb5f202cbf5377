pub mod coordinate_parser;
pub mod distance;
pub mod file_input;
pub mod types;
