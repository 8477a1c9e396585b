//! The common interface shared by text ciphers.

/// A reversible text cipher.
///
/// Implementations are expected to be total: every input string maps to an
/// output string, and `decrypt(encrypt(s))` recovers `s` up to whatever
/// padding or normalization the cipher documents.
pub trait Cipher {
    /// A short name used for debugging and logging.
    const NAME: &'static str;

    fn encrypt(&self, plaintext: &str) -> String;

    fn decrypt(&self, ciphertext: &str) -> String;
}
