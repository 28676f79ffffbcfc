pub mod capability;
pub mod file_ops;
pub mod manifest;
