use base64ct::{Base64UrlUnpadded, Encoding};
use rand::{rngs::OsRng, RngCore};

/// How many random bytes go into a verification token.
const TOKEN_BYTES: usize = 32;

/// Generate a URL-safe verification token from the operating system's CSPRNG.
pub fn generate() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);

    Base64UrlUnpadded::encode_string(&bytes)
}
