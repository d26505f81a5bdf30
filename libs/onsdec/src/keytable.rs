use std::path::Path;

use crate::error::DecoderError;
use crate::{KEY_TABLE_SIZE, SCRIPT_XOR_KEY};

/// External substitution table of the "nscript.___" format.
///
/// The raw table maps each plaintext byte value (the index) to its
/// ciphertext byte value; decoding only needs the derived inverse
/// lookup, so that is all that is kept.
#[derive(Clone, Debug)]
pub struct KeyTable {
    inverse: [u8; KEY_TABLE_SIZE],
}

impl KeyTable {
    /// Build the inverse lookup from a raw 256-byte table.
    ///
    /// The table is expected to be a permutation of 0..=255, but the
    /// engine never validated that. Duplicate values are accepted and
    /// the last index holding a value wins.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecoderError> {
        if bytes.len() != KEY_TABLE_SIZE {
            return Err(DecoderError::IncorrectSizeTable {
                expected: KEY_TABLE_SIZE,
                received: bytes.len(),
            });
        }

        let mut inverse = [0u8; KEY_TABLE_SIZE];
        for (index, &value) in bytes.iter().enumerate() {
            inverse[usize::from(value)] = index as u8;
        }

        Ok(Self { inverse })
    }

    /// Read a key table from a file
    pub fn from_file(path: &Path) -> Result<Self, DecoderError> {
        let bytes = std::fs::read(path).map_err(|error| {
            if error.kind() == std::io::ErrorKind::NotFound {
                DecoderError::KeyTableNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                DecoderError::ReadFile(error)
            }
        })?;

        Self::from_bytes(&bytes)
    }

    /// Recover a plaintext byte from its substituted form
    pub fn decode_byte(&self, encrypted: u8) -> u8 {
        self.inverse[usize::from(encrypted ^ SCRIPT_XOR_KEY)]
    }
}
