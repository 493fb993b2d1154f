//! String helpers for the image pipeline
//!
//! Content fingerprints of text, positive integer extraction, and path name
//! validation. Every operation is a pure function of its input.

pub mod cli;
pub mod config;
pub mod crypto;
pub mod errors;
pub mod text;
pub mod types;
pub mod validation;

pub use crypto::fingerprint::{
    fingerprint, md5_fingerprint, sha1_fingerprint, sha256_fingerprint, sha512_fingerprint,
    EncodingPolicy, Fingerprinter, HashAlgorithm, TextEncoding,
};
pub use errors::{AppError, AppResult, HelperError, HelperResult};
pub use text::{extract_positive_integers, require_text};
pub use validation::paths::{
    is_valid_path_name, is_valid_virtual_path_name, IllegalCharProvider, IllegalChars, PathRules,
    PathValidator, VIRTUAL_PATH_PREFIX,
};
