pub mod csv_file;
pub mod json_file;
