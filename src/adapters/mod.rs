pub mod api;
pub mod seed_file;
