/// Cryptographic fingerprint helpers
///
/// This module provides the text fingerprints used as cache keys and content
/// identifiers by the image pipeline.
pub mod fingerprint;

pub use fingerprint::{
    md5_fingerprint, sha1_fingerprint, sha256_fingerprint, sha512_fingerprint, EncodingPolicy,
    Fingerprinter, HashAlgorithm, TextEncoding,
};
