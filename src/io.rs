//! Streams and files. Only built with the `std` feature.

use crate::format::{self, FormatError};
use crate::image::DrawImage;

use std::fmt;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use std::vec::Vec;

#[derive(Debug)]
pub enum Error {
    Format(FormatError),
    Io(std::io::Error),
}

pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Format(e) => write!(f, "malformed image: {}", e),
            Error::Io(e) => write!(f, "i/o failure: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Format(e) => Some(e),
            Error::Io(e) => Some(e),
        }
    }
}

impl From<FormatError> for Error {
    fn from(e: FormatError) -> Self {
        Error::Format(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

/// The image is encoded in memory first, so a content error leaves `dst`
/// untouched.
pub fn dump<W: Write>(image: &DrawImage, dst: &mut W) -> Result<usize> {
    let bytes = format::serialize(image)?;
    dst.write_all(&bytes)?;
    dst.flush()?;
    Ok(bytes.len())
}

/// Reads `src` to the end, then decodes.
pub fn load<R: Read>(src: &mut R) -> Result<DrawImage> {
    let mut bytes = Vec::new();
    src.read_to_end(&mut bytes)?;
    Ok(format::parse(&bytes)?)
}

pub fn write_file<P: AsRef<Path>>(image: &DrawImage, path: P) -> Result<usize> {
    let bytes = format::serialize(image)?;
    let path = path.as_ref();
    let mut file = File::create(path)?;
    file.write_all(&bytes)?;
    file.sync_all()?;
    log::debug!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(bytes.len())
}

pub fn read_file<P: AsRef<Path>>(path: P) -> Result<DrawImage> {
    let path = path.as_ref();
    let mut file = File::open(path)?;
    let image = load(&mut file)?;
    log::debug!("read {} commands from {}", image.command_list().len(), path.display());
    Ok(image)
}
