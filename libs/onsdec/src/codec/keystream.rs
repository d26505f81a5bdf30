use crate::KEYSTREAM_MAGIC;

/// Keystream state for the "onscript.nt3" stream cipher.
///
/// The key is a signed 32-bit value seeded from the file header. It
/// evolves once per byte from the previous key, the current ciphertext
/// byte and a countdown of the bytes still to decode, so decoding is
/// strictly sequential.
pub struct KeyStream {
    key: i32,
    countdown: u64,
}

impl KeyStream {
    /// Create a keystream from the header seed and the ciphertext length
    pub fn new(seed: i32, data_size: u64) -> Self {
        Self {
            key: seed,
            countdown: data_size,
        }
    }

    /// Decrypt a single byte and evolve the key.
    ///
    /// The update runs in 32-bit wraparound arithmetic and the result
    /// is reinterpreted as signed before seeding the next byte; the
    /// plaintext byte comes from the low 8 bits of the updated key.
    pub fn decrypt_byte(&mut self, encrypted: u8) -> u8 {
        let byte = u32::from(encrypted);
        let mixed = (self.key as u32) ^ byte;
        let term = byte
            .wrapping_mul(self.countdown as u32)
            .wrapping_add(KEYSTREAM_MAGIC);

        self.key = mixed.wrapping_add(term) as i32;
        self.countdown = self.countdown.wrapping_sub(1);

        encrypted ^ (self.key & 0xFF) as u8
    }
}

/// Decrypt an entire ciphertext region with the rolling keystream
pub fn rolling_stream(data: &[u8], seed: i32) -> Vec<u8> {
    let mut state = KeyStream::new(seed, data.len() as u64);
    data.iter().map(|&byte| state.decrypt_byte(byte)).collect()
}
