pub mod keystream;
pub mod xor;
