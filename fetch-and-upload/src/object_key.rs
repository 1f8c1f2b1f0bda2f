//! Object key derivation for uploaded images

use base64::{engine::general_purpose::STANDARD, Engine as _};
use sha2::{Digest, Sha256};
use strum::{Display, EnumString};
use uuid::Uuid;

/// How the object key of an uploaded image is chosen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum KeyStrategy {
    /// The source URL, verbatim
    SourceUrl,
    /// A fresh UUID v4 per upload
    #[default]
    Uuid,
    /// `images/ab/cd/<sha256>` of the image contents
    ContentDigest,
}

impl KeyStrategy {
    /// Derives the object key for an image fetched from `source_url`
    #[must_use]
    pub fn object_key(self, source_url: &str, digest: &ContentDigest) -> String {
        match self {
            Self::SourceUrl => source_url.to_string(),
            Self::Uuid => Uuid::new_v4().to_string(),
            Self::ContentDigest => map_sha256_to_key(&digest.to_hex()),
        }
    }
}

/// SHA-256 digest of an image body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentDigest([u8; 32]);

impl ContentDigest {
    /// Hashes `body`
    #[must_use]
    pub fn of(body: &[u8]) -> Self {
        Self(Sha256::digest(body).into())
    }

    /// Lowercase hex form, used in content-addressed keys
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Base64 form, as expected by the `x-amz-checksum-sha256` header
    #[must_use]
    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.0)
    }
}

/// Maps a hex SHA-256 digest to a sharded object key
#[must_use]
pub fn map_sha256_to_key(sha256: &str) -> String {
    let ab = &sha256[0..2];
    let cd = &sha256[2..4];
    format!("images/{ab}/{cd}/{sha256}")
}
