use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Seek, SeekFrom, Write};
use std::path::Path;

use byteorder::{ByteOrder, ReadBytesExt};
use log::debug;

use crate::codec::keystream::{self, KeyStream};
use crate::codec::xor;
use crate::error::DecoderError;
use crate::keytable::KeyTable;
use crate::{converter, Format, NT3_HEADER_SIZE, NT3_KEY_OFFSET};

/// Decode one script resource file, writing the plaintext to `output`.
///
/// The codec is selected from the input file name; `key_table` is only
/// consulted for the "nscript.___" format. Every format except
/// "onscript.nt3" is decoded fully in memory, so the output file is
/// only created once decoding has succeeded.
pub fn decode_file(
    input: &Path,
    output: &Path,
    key_table: Option<&KeyTable>,
) -> Result<(), DecoderError> {
    let name = file_name(input);
    let format = Format::detect(&name).ok_or(DecoderError::UnknownFormat { name })?;

    debug!("detected format {:?} for '{}'", format, input.display());

    if format == Format::RollingKeyStream {
        return decode_nt3_file(input, output);
    }

    let data = read_input(input)?;
    let decoded = decode_buffer(format, &data, key_table)?;

    if let Err(error) = write_output(output, &decoded) {
        let _ = std::fs::remove_file(output);
        return Err(error);
    }

    Ok(())
}

fn write_output(path: &Path, data: &[u8]) -> Result<(), DecoderError> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(data)?;
    writer.flush()?;
    Ok(())
}

/// Decode an in-memory ciphertext with the selected codec.
///
/// For `RollingKeyStream` the buffer must be the whole file, header
/// included; for every other format it is the raw script bytes.
pub fn decode_buffer(
    format: Format,
    data: &[u8],
    key_table: Option<&KeyTable>,
) -> Result<Vec<u8>, DecoderError> {
    match format {
        Format::Plain => Ok(data.to_vec()),
        Format::FixedXor => Ok(xor::fixed_xor(data)),
        Format::CyclicXor => Ok(xor::cyclic_xor(data)),
        Format::IncrementXor => Ok(xor::increment_xor(data)),
        Format::TableSubstitution => {
            let table = key_table.ok_or(DecoderError::MissingKeyTable)?;
            Ok(data.iter().map(|&byte| table.decode_byte(byte)).collect())
        }
        Format::RollingKeyStream => {
            check_nt3_size(converter::usize_to_u64(data.len())?)?;

            let key_offset = converter::u64_to_usize(NT3_KEY_OFFSET)?;
            let header_size = converter::u64_to_usize(NT3_HEADER_SIZE)?;
            let seed = byteorder::LittleEndian::read_i32(&data[key_offset..key_offset + 4]);

            Ok(keystream::rolling_stream(&data[header_size..], seed))
        }
    }
}

fn check_nt3_size(size: u64) -> Result<(), DecoderError> {
    if size <= NT3_HEADER_SIZE {
        return Err(DecoderError::SmallFile {
            expected: NT3_HEADER_SIZE,
            received: size,
        });
    }

    Ok(())
}

/// Decode an "onscript.nt3" file, streaming ciphertext to plaintext.
///
/// The output file is created only after the header has been validated
/// and the seed read; if anything fails mid-stream the partial output
/// is removed before the error is returned.
fn decode_nt3_file(input: &Path, output: &Path) -> Result<(), DecoderError> {
    let file = open_input(input)?;
    let size = file.metadata()?.len();
    check_nt3_size(size)?;

    let mut reader = BufReader::new(file);
    reader.seek(SeekFrom::Start(NT3_KEY_OFFSET))?;
    let seed = reader.read_i32::<byteorder::LittleEndian>()?;
    reader.seek(SeekFrom::Start(NT3_HEADER_SIZE))?;

    let mut state = KeyStream::new(seed, size - NT3_HEADER_SIZE);
    let mut writer = BufWriter::new(File::create(output)?);

    if let Err(error) = stream_nt3(&mut reader, &mut writer, &mut state) {
        drop(writer);
        let _ = std::fs::remove_file(output);
        return Err(error);
    }

    Ok(())
}

fn stream_nt3(
    reader: &mut BufReader<File>,
    writer: &mut BufWriter<File>,
    state: &mut KeyStream,
) -> Result<(), DecoderError> {
    let mut buffer = [0u8; 8192];

    loop {
        let count = reader.read(&mut buffer)?;
        if count == 0 {
            break;
        }

        for byte in &mut buffer[..count] {
            *byte = state.decrypt_byte(*byte);
        }

        writer.write_all(&buffer[..count])?;
    }

    writer.flush()?;
    Ok(())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn open_input(path: &Path) -> Result<File, DecoderError> {
    File::open(path).map_err(|error| {
        if error.kind() == std::io::ErrorKind::NotFound {
            DecoderError::InputNotFound {
                path: path.to_path_buf(),
            }
        } else {
            DecoderError::ReadFile(error)
        }
    })
}

fn read_input(path: &Path) -> Result<Vec<u8>, DecoderError> {
    std::fs::read(path).map_err(|error| {
        if error.kind() == std::io::ErrorKind::NotFound {
            DecoderError::InputNotFound {
                path: path.to_path_buf(),
            }
        } else {
            DecoderError::ReadFile(error)
        }
    })
}
