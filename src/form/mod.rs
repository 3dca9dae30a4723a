pub mod component;
pub mod controller;
pub mod csv_file;
pub mod field_state;
pub mod snapshot;
pub mod view;
