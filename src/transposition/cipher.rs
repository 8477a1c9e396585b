//! Public encrypt/decrypt entry points and the [`Transposition`] cipher.

use log::debug;

use super::columnar::{core_decrypt, core_decrypt_irregular, core_encrypt, core_encrypt_irregular};
use super::letters::transform_letters_only;
use super::normalize::normalize_az;
use super::types::cipher::Cipher;
use super::types::models::{CoreOptions, TranspositionOptions};

/// Encrypts `plain_text` according to `options`.
///
/// # Pipeline
/// 1. `normalize`: reduce the text to `A`-`Z`
/// 2. Transpose with `key1`, then (when `double`) again with the secondary key
/// 3. `letters_only` (without `normalize`): only letters are permuted and
///    non-letters stay where they were
///
/// Without `letters_only` the full padded output is returned. In letters-only
/// mode the grid is left irregular instead of padded, so the letter count is
/// preserved and decryption restores the input exactly.
///
/// ```
/// use transposition_cipher::{transpose_decrypt, transpose_encrypt, TranspositionOptions};
///
/// let opts = TranspositionOptions::new("klíč").normalize(true);
/// let cipher = transpose_encrypt("Tajný útok", &opts);
/// assert_eq!(cipher, "NOXJTXTYKAUX");
/// assert_eq!(transpose_decrypt(&cipher, &opts), "TAJNYUTOKXXX");
/// ```
pub fn transpose_encrypt(plain_text: &str, options: &TranspositionOptions) -> String {
    let first = options.core_options(&options.key1);
    let second = options.core_options(options.secondary_key());
    debug!(
        "Encrypting {} chars (double={}, normalize={}, letters_only={})",
        plain_text.chars().count(),
        options.double,
        options.normalize,
        options.letters_only
    );

    let stage: fn(&str, &CoreOptions<'_>) -> String = if options.uses_letters_only() {
        core_encrypt_irregular
    } else {
        core_encrypt
    };
    let encrypt = |input: &str| -> String {
        let once = stage(input, &first);
        if options.double {
            stage(&once, &second)
        } else {
            once
        }
    };

    if options.normalize {
        encrypt(&normalize_az(plain_text))
    } else if options.letters_only {
        transform_letters_only(plain_text, encrypt)
    } else {
        encrypt(plain_text)
    }
}

/// Decrypts `cipher_text` produced by [`transpose_encrypt`] with the same options.
///
/// A double transposition is undone in reverse: first the secondary key,
/// then `key1`.
///
/// The `normalize` option is not applied to the ciphertext and nothing it
/// removed is restored: the caller gets the padded, normalized plaintext.
/// Outside letters-only mode any padding added during encryption is kept.
///
/// ```
/// use transposition_cipher::{transpose_decrypt, transpose_encrypt, TranspositionOptions};
///
/// let opts = TranspositionOptions::new("ABC").with_key2("KEY").double(true).letters_only(true);
/// let cipher = transpose_encrypt("Meet me at 9pm!", &opts);
/// assert_eq!(transpose_decrypt(&cipher, &opts), "Meet me at 9pm!");
/// ```
pub fn transpose_decrypt(cipher_text: &str, options: &TranspositionOptions) -> String {
    let first = options.core_options(&options.key1);
    let second = options.core_options(options.secondary_key());
    debug!(
        "Decrypting {} chars (double={}, normalize={}, letters_only={})",
        cipher_text.chars().count(),
        options.double,
        options.normalize,
        options.letters_only
    );

    let stage: fn(&str, &CoreOptions<'_>) -> String = if options.uses_letters_only() {
        core_decrypt_irregular
    } else {
        core_decrypt
    };
    let decrypt = |input: &str| -> String {
        if options.double {
            stage(&stage(input, &second), &first)
        } else {
            stage(input, &first)
        }
    };

    if options.uses_letters_only() {
        transform_letters_only(cipher_text, decrypt)
    } else {
        decrypt(cipher_text)
    }
}

/// A configured transposition cipher.
///
/// ```
/// use transposition_cipher::{Cipher, Transposition, TranspositionOptions};
///
/// let cipher = Transposition::new(TranspositionOptions::new("KEY").letters_only(true));
/// let secret = cipher.encrypt("Attack at dawn! 123");
/// assert_eq!(cipher.decrypt(&secret), "Attack at dawn! 123");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transposition {
    options: TranspositionOptions,
}

impl Transposition {
    pub fn new(options: TranspositionOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &TranspositionOptions {
        &self.options
    }
}

impl From<TranspositionOptions> for Transposition {
    fn from(options: TranspositionOptions) -> Self {
        Self::new(options)
    }
}

impl Cipher for Transposition {
    const NAME: &'static str = "transposition";

    fn encrypt(&self, plaintext: &str) -> String {
        transpose_encrypt(plaintext, &self.options)
    }

    fn decrypt(&self, ciphertext: &str) -> String {
        transpose_decrypt(ciphertext, &self.options)
    }
}
