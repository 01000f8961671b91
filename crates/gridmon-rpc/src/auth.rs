use md5::{Digest, Md5};

/// Authentication digest for the control-channel login handshake.
///
/// Computes the lowercase hex MD5 of `nonce ++ secret`, plain concatenation
/// with no separator. The controller issues the nonce in its auth challenge
/// and verifies the digest server side.
///
/// MD5 here is wire compatibility with the existing controller protocol,
/// not a security endorsement. Do not reuse the scheme for new protocols.
///
/// # Examples
/// ```rust
/// use gridmon_rpc::auth::auth_digest;
///
/// let digest = auth_digest("1234567890", "secret");
/// assert_eq!(digest, "e9b7ae6c91f6694cfc36d893733b1f7c");
/// ```
pub fn auth_digest(nonce: &str, secret: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(nonce.as_bytes());
    hasher.update(secret.as_bytes());
    hex::encode(hasher.finalize())
}

/// Lowercase hex MD5 of a single preimage string.
pub fn digest_hex(preimage: &str) -> String {
    hex::encode(Md5::digest(preimage.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::{auth_digest, digest_hex};

    #[test]
    fn digest_matches_known_vectors() {
        assert_eq!(digest_hex(""), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(digest_hex("abc"), "900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn auth_digest_concatenates_nonce_and_secret() {
        assert_eq!(
            auth_digest("1234567890", "secret"),
            "e9b7ae6c91f6694cfc36d893733b1f7c"
        );
        assert_eq!(
            auth_digest("nonce123", "hunter2"),
            "313276c173e73e483f7e2bf2364fbdef"
        );
    }

    #[test]
    fn two_argument_form_equals_digest_of_concatenation() {
        let joined = format!("{}{}", "1662092529", "hunter2");
        assert_eq!(auth_digest("1662092529", "hunter2"), digest_hex(&joined));
    }

    #[test]
    fn output_is_lowercase_hex() {
        let digest = auth_digest("", "");
        assert_eq!(digest.len(), 32);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(digest, digest.to_lowercase());
    }
}
