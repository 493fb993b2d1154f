//! Input validation helpers.

pub mod paths;

pub use paths::{
    is_valid_path_name, is_valid_virtual_path_name, IllegalCharProvider, IllegalChars, PathRules,
    PathValidator, VIRTUAL_PATH_PREFIX,
};
