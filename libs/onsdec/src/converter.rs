use crate::error::ConverterError;

/// Method for converting u64 to usize.
pub fn u64_to_usize(value: u64) -> Result<usize, ConverterError> {
    match usize::try_from(value) {
        Err(error) => Err(ConverterError::TryFromIntError(error)),
        Ok(result) => Ok(result),
    }
}

/// Method for converting usize to u64.
pub fn usize_to_u64(value: usize) -> Result<u64, ConverterError> {
    match u64::try_from(value) {
        Err(error) => Err(ConverterError::TryFromIntError(error)),
        Ok(result) => Ok(result),
    }
}
