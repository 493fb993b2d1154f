//! Serialisable results of the helper operations, as printed by the CLI

use serde::{Deserialize, Serialize};

use crate::crypto::fingerprint::{HashAlgorithm, TextEncoding};

/// One fingerprint of one input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FingerprintReport {
    pub algorithm: HashAlgorithm,
    pub bits: usize,
    /// Byte encoding applied to the input before hashing
    pub encoding: TextEncoding,
    pub digest: String,
}

/// Integers found in an input, in order of appearance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegerExtraction {
    pub input: String,
    pub values: Vec<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathKind {
    /// Plain file or path name
    Name,
    /// `~/`-prefixed application-relative path
    Virtual,
}

/// Outcome of validating a path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathCheck {
    pub input: String,
    pub kind: PathKind,
    pub valid: bool,
}
