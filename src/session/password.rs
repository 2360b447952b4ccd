use rand::Rng;
use sha2::{Digest, Sha256};

const PREFIX: &str = "sha256:";
const SALT_LEN: usize = 16;

/// Digest a password with a fresh random salt, stored as
/// `sha256:<salt hex>:<digest hex>` where the digest covers salt then password.
pub fn hash_password(password: &str) -> String {
    let mut salt = [0u8; SALT_LEN];
    rand::rng().fill(&mut salt);
    hash_password_with_salt(password, &salt)
}

pub fn hash_password_with_salt(password: &str, salt: &[u8]) -> String {
    format!("{}{}:{}", PREFIX, hex::encode(salt), digest_hex(salt, password))
}

fn digest_hex(salt: &[u8], password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Check `password` against a stored value. Anything that is not
/// `sha256:<salt>:<digest>` never verifies, plaintext included.
pub fn verify_password(stored: &str, password: &str) -> bool {
    let Some((salt_hex, digest)) = stored
        .strip_prefix(PREFIX)
        .and_then(|rest| rest.split_once(':'))
    else {
        return false;
    };
    let Ok(salt) = hex::decode(salt_hex) else {
        return false;
    };

    let expected = digest_hex(&salt, password);
    // compare without early exit
    expected.len() == digest.len()
        && expected
            .bytes()
            .zip(digest.bytes())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
}
