pub mod console;
pub mod json_file;
