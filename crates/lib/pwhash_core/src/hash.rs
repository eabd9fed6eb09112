//! Encoded bcrypt hash tokens.
//!
//! A token looks like `$2b$10$N9qo8uLOickgx2ZMRZoMyeIjZAgcfl7p92ldGxad68LJZdL17lhWy`:
//! variant, two-digit cost, then 22 characters of salt followed by 31
//! characters of digest in bcrypt's base64 alphabet.

use std::fmt;
use std::str::FromStr;

use crate::cost::Cost;
use crate::hasher::HashError;

/// Total length of an encoded token.
const TOKEN_LEN: usize = 60;

/// Salt and digest, base64-encoded.
const PAYLOAD_LEN: usize = 53;

/// Characters of salt; the last one only carries 2 of its 6 bits.
const SALT_LEN: usize = 22;

const VARIANTS: [&str; 4] = ["2a", "2b", "2x", "2y"];

/// bcrypt's base64 alphabet, in value order.
const ALPHABET: &[u8; 64] = b"./ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// A parsed, structurally valid bcrypt hash.
///
/// Holds the original token untouched; the cost is read out at parse time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordHash {
    token: String,
    cost: Cost,
}

impl PasswordHash {
    /// Cost factor embedded in the token.
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Algorithm variant tag, e.g. `"2b"`.
    pub fn variant(&self) -> &str {
        &self.token[1..3]
    }

    pub fn as_str(&self) -> &str {
        &self.token
    }

    pub fn into_string(self) -> String {
        self.token
    }
}

impl FromStr for PasswordHash {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(malformed("empty hash"));
        }
        if s.len() != TOKEN_LEN {
            return Err(malformed(format!(
                "expected {TOKEN_LEN} characters, got {}",
                s.len()
            )));
        }

        let mut fields = s.splitn(4, '$');
        let (Some(""), Some(variant), Some(cost), Some(payload)) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(malformed("expected '$<variant>$<cost>$<salt+digest>'"));
        };

        if !VARIANTS.contains(&variant) {
            return Err(malformed(format!("unsupported algorithm '{variant}'")));
        }

        if cost.len() != 2 || !cost.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed(format!("cost field '{cost}' is not two digits")));
        }
        let cost = cost
            .parse::<u32>()
            .ok()
            .and_then(|c| Cost::new(c).ok())
            .ok_or_else(|| malformed(format!("cost {cost} is out of range")))?;

        if payload.len() != PAYLOAD_LEN || !payload.bytes().all(is_bcrypt_base64) {
            return Err(malformed("salt and digest are not bcrypt base64"));
        }

        // Unused trailing bits must be zero: 4 in the salt, 2 in the digest.
        let payload = payload.as_bytes();
        if !has_clear_low_bits(payload[SALT_LEN - 1], 4) {
            return Err(malformed("salt has non-zero trailing bits"));
        }
        if !has_clear_low_bits(payload[PAYLOAD_LEN - 1], 2) {
            return Err(malformed("digest has non-zero trailing bits"));
        }

        Ok(Self {
            token: s.to_string(),
            cost,
        })
    }
}

impl fmt::Display for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token)
    }
}

impl AsRef<str> for PasswordHash {
    fn as_ref(&self) -> &str {
        &self.token
    }
}

fn is_bcrypt_base64(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'.' || b == b'/'
}

fn has_clear_low_bits(symbol: u8, bits: u32) -> bool {
    ALPHABET
        .iter()
        .position(|&c| c == symbol)
        .is_some_and(|value| value % (1 << bits) == 0)
}

fn malformed(reason: impl Into<String>) -> HashError {
    HashError::MalformedHash(reason.into())
}
