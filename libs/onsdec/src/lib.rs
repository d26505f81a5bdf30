/// XOR constant shared by the "nscript.dat" and "nscript.___" formats
pub const SCRIPT_XOR_KEY: u8 = 0x84;
/// Repeating five-byte XOR key of the "nscr_sec.dat" format
pub const CYCLIC_XOR_KEY: [u8; 5] = [0x79, 0x57, 0x0D, 0x80, 0x04];
/// XOR constant of the "onscript.nt2" format (0x85 AND 0x97)
pub const INCREMENT_XOR_KEY: u8 = 0x81;
/// Required size of an external key table (in bytes)
pub const KEY_TABLE_SIZE: usize = 256;
/// Size of the "onscript.nt3" file header (in bytes)
pub const NT3_HEADER_SIZE: u64 = 0x920;
/// Offset of the keystream seed inside the "onscript.nt3" header
pub const NT3_KEY_OFFSET: u64 = 0x91C;
/// Constant mixed into the "onscript.nt3" keystream on every byte
pub const KEYSTREAM_MAGIC: u32 = 0x5D58_8B65;

pub mod codec;
mod converter;
pub mod decoder;
pub mod error;
pub mod keytable;

/// Obfuscation scheme of one script resource file
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Format {
    /// "0.txt" / "00.txt": stored as plain text
    Plain,
    /// "nscript.dat": single-byte XOR
    FixedXor,
    /// "nscr_sec.dat": five-byte cyclic XOR
    CyclicXor,
    /// "nscript.___": byte substitution through an external key table
    TableSubstitution,
    /// "onscript.nt2": increment, then XOR
    IncrementXor,
    /// "onscript.nt3": stateful rolling keystream seeded from the header
    RollingKeyStream,
}

impl Format {
    /// Identify the codec from a resource file name.
    ///
    /// Matching is exact after ASCII lowercasing; the engine only ever
    /// produces the six names below.
    pub fn detect(file_name: &str) -> Option<Format> {
        match file_name.to_ascii_lowercase().as_str() {
            "0.txt" | "00.txt" => Some(Format::Plain),
            "nscript.dat" => Some(Format::FixedXor),
            "nscr_sec.dat" => Some(Format::CyclicXor),
            "nscript.___" => Some(Format::TableSubstitution),
            "onscript.nt2" => Some(Format::IncrementXor),
            "onscript.nt3" => Some(Format::RollingKeyStream),
            _ => None,
        }
    }
}
