pub mod file_writer;
pub mod fmt;
pub mod position;
