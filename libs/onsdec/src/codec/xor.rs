use crate::{CYCLIC_XOR_KEY, INCREMENT_XOR_KEY, SCRIPT_XOR_KEY};

/// Decrypt a "nscript.dat" buffer (single-byte XOR)
pub fn fixed_xor(data: &[u8]) -> Vec<u8> {
    data.iter().map(|&byte| byte ^ SCRIPT_XOR_KEY).collect()
}

/// Decrypt a "nscr_sec.dat" buffer (five-byte cyclic XOR)
pub fn cyclic_xor(data: &[u8]) -> Vec<u8> {
    data.iter()
        .enumerate()
        .map(|(index, &byte)| byte ^ CYCLIC_XOR_KEY[index % CYCLIC_XOR_KEY.len()])
        .collect()
}

/// Decrypt an "onscript.nt2" buffer (increment, then XOR)
pub fn increment_xor(data: &[u8]) -> Vec<u8> {
    data.iter()
        .map(|&byte| byte.wrapping_add(1) ^ INCREMENT_XOR_KEY)
        .collect()
}
