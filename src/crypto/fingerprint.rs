//! Content fingerprints of text
//!
//! Each fingerprint is the lowercase hex digest of the input text after it has
//! been transcoded to bytes. The legacy encodings are kept so that fingerprints
//! match the values already stored by existing caches:
//!
//! | Algorithm | Bits | Legacy input bytes        |
//! |-----------|------|---------------------------|
//! | MD5       | 128  | UTF-16LE code units       |
//! | SHA-1     | 160  | ASCII, `?` for non-ASCII  |
//! | SHA-256   | 256  | ASCII, `?` for non-ASCII  |
//! | SHA-512   | 512  | ASCII, `?` for non-ASCII  |
//!
//! [`EncodingPolicy::Utf8`] drops the per-algorithm quirks and hashes UTF-8
//! bytes for every algorithm.

use std::fmt;
use std::str::FromStr;

use md5::Md5;
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};
use tracing::trace;

use crate::errors::HelperError;

/// Replacement byte for characters outside 7-bit ASCII
const ASCII_REPLACEMENT: u8 = b'?';

/// Digest algorithms available for fingerprinting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// 128-bit MD5
    Md5,
    /// 160-bit SHA-1
    Sha1,
    /// 256-bit SHA-256
    Sha256,
    /// 512-bit SHA-512
    Sha512,
}

impl HashAlgorithm {
    /// All algorithms, narrowest digest first
    pub const ALL: [HashAlgorithm; 4] = [
        HashAlgorithm::Md5,
        HashAlgorithm::Sha1,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha512,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "md5",
            HashAlgorithm::Sha1 => "sha1",
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha512 => "sha512",
        }
    }

    /// Digest width in bits
    pub fn bits(&self) -> usize {
        match self {
            HashAlgorithm::Md5 => 128,
            HashAlgorithm::Sha1 => 160,
            HashAlgorithm::Sha256 => 256,
            HashAlgorithm::Sha512 => 512,
        }
    }

    /// Length of the rendered hex fingerprint (two characters per byte)
    pub fn hex_len(&self) -> usize {
        self.bits() / 4
    }

    /// Byte encoding historically applied before hashing with this algorithm
    pub fn legacy_encoding(&self) -> TextEncoding {
        match self {
            HashAlgorithm::Md5 => TextEncoding::Utf16Le,
            HashAlgorithm::Sha1 | HashAlgorithm::Sha256 | HashAlgorithm::Sha512 => {
                TextEncoding::Ascii
            }
        }
    }

    /// Encoding used for this algorithm under the given policy
    pub fn encoding_for(&self, policy: EncodingPolicy) -> TextEncoding {
        match policy {
            EncodingPolicy::Legacy => self.legacy_encoding(),
            EncodingPolicy::Utf8 => TextEncoding::Utf8,
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = HelperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "md5" | "128" => Ok(HashAlgorithm::Md5),
            "sha1" | "sha-1" | "160" => Ok(HashAlgorithm::Sha1),
            "sha256" | "sha-256" | "256" => Ok(HashAlgorithm::Sha256),
            "sha512" | "sha-512" | "512" => Ok(HashAlgorithm::Sha512),
            other => Err(HelperError::InvalidArgument(format!(
                "unknown hash algorithm '{}' (expected md5, sha1, sha256 or sha512)",
                other
            ))),
        }
    }
}

/// How text is turned into bytes before hashing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextEncoding {
    /// UTF-16 little-endian code units
    Utf16Le,
    /// 7-bit ASCII; every code unit above 127 becomes `?`
    Ascii,
    /// Plain UTF-8
    Utf8,
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TextEncoding::Utf16Le => "utf-16le",
            TextEncoding::Ascii => "ascii",
            TextEncoding::Utf8 => "utf-8",
        };
        f.write_str(name)
    }
}

/// Which encoding rule applies across algorithms
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncodingPolicy {
    /// Per-algorithm encodings, byte-compatible with existing fingerprints
    #[default]
    Legacy,
    /// UTF-8 for every algorithm
    #[serde(alias = "utf-8")]
    Utf8,
}

impl fmt::Display for EncodingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodingPolicy::Legacy => f.write_str("legacy"),
            EncodingPolicy::Utf8 => f.write_str("utf8"),
        }
    }
}

impl FromStr for EncodingPolicy {
    type Err = HelperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(EncodingPolicy::Legacy),
            "utf8" | "utf-8" => Ok(EncodingPolicy::Utf8),
            other => Err(HelperError::InvalidArgument(format!(
                "unknown encoding policy '{}' (expected legacy or utf8)",
                other
            ))),
        }
    }
}

/// Transcode text into the bytes that get hashed
///
/// ASCII works per UTF-16 code unit, so a character outside the Basic
/// Multilingual Plane yields two `?` bytes.
///
/// # Examples
/// ```
/// use image_helpers::crypto::fingerprint::{encode_text, TextEncoding};
///
/// assert_eq!(encode_text("ab", TextEncoding::Utf16Le), vec![b'a', 0, b'b', 0]);
/// assert_eq!(encode_text("café", TextEncoding::Ascii), b"caf?".to_vec());
/// assert_eq!(encode_text("é", TextEncoding::Utf8), vec![0xC3, 0xA9]);
/// ```
pub fn encode_text(expression: &str, encoding: TextEncoding) -> Vec<u8> {
    match encoding {
        TextEncoding::Utf16Le => expression
            .encode_utf16()
            .flat_map(|unit| unit.to_le_bytes())
            .collect(),
        TextEncoding::Ascii => expression
            .encode_utf16()
            .map(|unit| {
                if unit < 0x80 {
                    unit as u8
                } else {
                    ASCII_REPLACEMENT
                }
            })
            .collect(),
        TextEncoding::Utf8 => expression.as_bytes().to_vec(),
    }
}

fn digest_hex<D: Digest>(bytes: &[u8]) -> String {
    hex::encode(D::digest(bytes))
}

/// Hash raw bytes with the given algorithm and render lowercase hex
pub fn digest_bytes(algorithm: HashAlgorithm, bytes: &[u8]) -> String {
    match algorithm {
        HashAlgorithm::Md5 => digest_hex::<Md5>(bytes),
        HashAlgorithm::Sha1 => digest_hex::<Sha1>(bytes),
        HashAlgorithm::Sha256 => digest_hex::<Sha256>(bytes),
        HashAlgorithm::Sha512 => digest_hex::<Sha512>(bytes),
    }
}

/// Fingerprint text with any algorithm under the given encoding policy
///
/// # Examples
/// ```
/// use image_helpers::crypto::fingerprint::{fingerprint, EncodingPolicy, HashAlgorithm};
///
/// let digest = fingerprint(HashAlgorithm::Sha256, "", EncodingPolicy::Legacy);
/// assert_eq!(
///     digest,
///     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
/// );
/// ```
pub fn fingerprint(algorithm: HashAlgorithm, expression: &str, policy: EncodingPolicy) -> String {
    let encoding = algorithm.encoding_for(policy);
    trace!(%algorithm, %encoding, bytes = expression.len(), "Computing fingerprint");
    digest_bytes(algorithm, &encode_text(expression, encoding))
}

/// 128-bit fingerprint: MD5 over the UTF-16LE code units of `expression`
pub fn md5_fingerprint(expression: &str) -> String {
    fingerprint(HashAlgorithm::Md5, expression, EncodingPolicy::Legacy)
}

/// 160-bit fingerprint: SHA-1 over the ASCII transcoding of `expression`
pub fn sha1_fingerprint(expression: &str) -> String {
    fingerprint(HashAlgorithm::Sha1, expression, EncodingPolicy::Legacy)
}

/// 256-bit fingerprint: SHA-256 over the ASCII transcoding of `expression`
pub fn sha256_fingerprint(expression: &str) -> String {
    fingerprint(HashAlgorithm::Sha256, expression, EncodingPolicy::Legacy)
}

/// 512-bit fingerprint: SHA-512 over the ASCII transcoding of `expression`
pub fn sha512_fingerprint(expression: &str) -> String {
    fingerprint(HashAlgorithm::Sha512, expression, EncodingPolicy::Legacy)
}

/// Fingerprint calculator bound to one encoding policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fingerprinter {
    policy: EncodingPolicy,
}

impl Fingerprinter {
    pub fn new(policy: EncodingPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> EncodingPolicy {
        self.policy
    }

    pub fn fingerprint(&self, algorithm: HashAlgorithm, expression: &str) -> String {
        fingerprint(algorithm, expression, self.policy)
    }

    /// Fingerprints for every algorithm, in [`HashAlgorithm::ALL`] order
    pub fn fingerprint_all(&self, expression: &str) -> Vec<(HashAlgorithm, String)> {
        HashAlgorithm::ALL
            .iter()
            .map(|&algorithm| (algorithm, self.fingerprint(algorithm, expression)))
            .collect()
    }
}
