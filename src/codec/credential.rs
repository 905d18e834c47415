use crate::errors::RenderError;
use core::fmt::{
    Display,
    Formatter,
    Result as FmtResult,
};
use serde::{
    Deserialize,
    Serialize,
};

/// The credential encodings ios understands when a password or secret is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum EncryptionType {
    /// Type 0, the credential is stored and displayed as is.
    #[default]
    Plaintext,
    /// Type 5, salted md5 crypt.
    Md5,
    /// Type 7, the reversible vigenere style "encryption".
    Vigenere,
}

impl EncryptionType {
    /// Returns the numeric type as ios displays it.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Plaintext => 0,
            Self::Md5 => 5,
            Self::Vigenere => 7,
        }
    }
}

impl TryFrom<u8> for EncryptionType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Plaintext),
            5 => Ok(Self::Md5),
            7 => Ok(Self::Vigenere),
            _ => Err(format!(
                "unknown encryption type {value}, expected one of 0, 5 or 7"
            )),
        }
    }
}

impl From<EncryptionType> for u8 {
    fn from(value: EncryptionType) -> Self {
        value.as_u8()
    }
}

impl Display for EncryptionType {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> FmtResult {
        write!(f, "{}", self.as_u8())
    }
}

/// Precomputed type 5 and type 7 encodings, keyed by plaintext. This is a closed table, not a
/// cipher: only the two canonical lab credentials can be encoded.
const ENCODED_CREDENTIALS: [(&str, &str, &str); 2] = [
    ("cisco", "$1$mERr$hx5rVt7rPNoS4wqbXKX7m0", "0822455D0A16"),
    ("class", "$1$mERr$9cTjUIEqNGurQiFU.ZeCil", "0822404F1A0A"),
];

/// Returns the text ios displays for `plaintext` stored with `encryption_type`. Plaintext (type 0)
/// credentials are returned unchanged, type 5 and 7 credentials are looked up in a fixed table
/// covering only "cisco" and "class".
///
/// # Errors
///
/// Returns `RenderError::UnsupportedCredential` when a type 5 or 7 encoding is requested for a
/// credential outside of the table.
pub fn encode(
    plaintext: &str,
    encryption_type: EncryptionType,
) -> Result<String, RenderError> {
    if encryption_type == EncryptionType::Plaintext {
        return Ok(plaintext.to_owned());
    }

    let Some((_, md5, vigenere)) = ENCODED_CREDENTIALS
        .iter()
        .find(|(known, _, _)| *known == plaintext)
    else {
        return Err(RenderError::UnsupportedCredential {
            plaintext: plaintext.to_owned(),
            encryption_type: encryption_type.as_u8(),
        });
    };

    match encryption_type {
        EncryptionType::Md5 => Ok((*md5).to_owned()),
        EncryptionType::Vigenere => Ok((*vigenere).to_owned()),
        EncryptionType::Plaintext => Ok(plaintext.to_owned()),
    }
}
