//! Byte layout of an image file.
//!
//! All 16-bit fields are little-endian. There is no magic number and no
//! version field; the header is followed directly by the commands.
//!
//! ```text
//! width: u16, height: u16, command_count: u16
//! per command:
//!     kind: u8, hidden: u8, stroke_width: u8,
//!     stroke_color: u8, fill_color: u8,
//!     radius_or_closure: i16, point_count: u16,
//!     point_count * (x: i16, y: i16)
//! ```

use crate::color::PackedColor;
use crate::command::{DrawCommand, Geometry, Kind, Point};
use crate::image::DrawImage;

use core::fmt;
use alloc::vec::Vec;

use FormatError::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FormatError {
    TooShort,
    ExcessBytes,
    InvalidKind(u8),
    InvalidHidden(u8),
    InvalidColor(u8),
    TooManyCommands(usize),
    TooManyPoints(usize),
}

pub type FormatResult<T> = Result<T, FormatError>;

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TooShort => write!(f, "unexpected end of image data"),
            ExcessBytes => write!(f, "trailing bytes after the last command"),
            InvalidKind(tag) => write!(f, "unknown command kind: {}", tag),
            InvalidHidden(flag) => write!(f, "invalid hidden flag: {}", flag),
            InvalidColor(bits) => write!(f, "packed color without opacity marker: 0x{:02X}", bits),
            TooManyCommands(n) => write!(f, "{} commands do not fit a 16-bit count", n),
            TooManyPoints(n) => write!(f, "{} points do not fit a 16-bit count", n),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FormatError {}

pub const HEADER_SIZE: usize = 6;
/// Fixed part of a command record, before its points.
pub const COMMAND_SIZE: usize = 9;
pub const POINT_SIZE: usize = 4;

pub fn file_size(image: &DrawImage) -> usize {
    image
        .command_list()
        .iter()
        .fold(HEADER_SIZE, |sz, c| sz + COMMAND_SIZE + c.point_count() * POINT_SIZE)
}

fn count(n: usize, overflow: fn(usize) -> FormatError) -> FormatResult<u16> {
    u16::try_from(n).map_err(|_| overflow(n))
}

/// Checks every count before any byte is produced.
fn check_counts(image: &DrawImage) -> FormatResult<()> {
    count(image.command_list().len(), TooManyCommands)?;
    for command in image.command_list() {
        count(command.point_count(), TooManyPoints)?;
    }
    Ok(())
}

/// Encodes `image`. Only counts that overflow 16 bits can fail.
pub fn serialize(image: &DrawImage) -> FormatResult<Vec<u8>> {
    check_counts(image)?;

    let mut output = Vec::with_capacity(file_size(image));
    let commands = image.command_list();

    output.extend_from_slice(&image.width().to_le_bytes());
    output.extend_from_slice(&image.height().to_le_bytes());
    output.extend_from_slice(&count(commands.len(), TooManyCommands)?.to_le_bytes());

    for command in commands {
        output.push(command.kind().tag());
        output.push(command.hidden as u8);
        output.push(command.stroke_width);
        output.push(command.stroke_color.bits());
        output.push(command.fill_color.bits());
        output.extend_from_slice(&command.geometry.radius_or_closure().to_le_bytes());
        output.extend_from_slice(&count(command.point_count(), TooManyPoints)?.to_le_bytes());
        for point in command.points() {
            output.extend_from_slice(&point.x.to_le_bytes());
            output.extend_from_slice(&point.y.to_le_bytes());
        }
    }

    log::trace!("encoded {} commands into {} bytes", commands.len(), output.len());
    Ok(output)
}

fn slice<'a>(bytes: &'a [u8], i: &mut usize, len: usize) -> FormatResult<&'a [u8]> {
    let pos = *i;
    let end = pos.checked_add(len).ok_or(TooShort)?;
    let slice = bytes.get(pos..end).ok_or(TooShort)?;
    *i = end;
    Ok(slice)
}

fn read_u8(bytes: &[u8], i: &mut usize) -> FormatResult<u8> {
    Ok(slice(bytes, i, 1)?[0])
}

fn read_u16(bytes: &[u8], i: &mut usize) -> FormatResult<u16> {
    let u8x2 = slice(bytes, i, 2)?;
    Ok(u16::from_le_bytes([u8x2[0], u8x2[1]]))
}

fn read_i16(bytes: &[u8], i: &mut usize) -> FormatResult<i16> {
    let u8x2 = slice(bytes, i, 2)?;
    Ok(i16::from_le_bytes([u8x2[0], u8x2[1]]))
}

fn read_color(bytes: &[u8], i: &mut usize) -> FormatResult<PackedColor> {
    let bits = read_u8(bytes, i)?;
    PackedColor::from_bits(bits).ok_or(InvalidColor(bits))
}

/// Fails unless `items` records of `item_size` bytes fit in what is left.
fn reserve(bytes: &[u8], i: usize, items: usize, item_size: usize) -> FormatResult<()> {
    match items * item_size <= bytes.len() - i {
        true => Ok(()),
        false => Err(TooShort),
    }
}

fn parse_command(bytes: &[u8], i: &mut usize) -> FormatResult<DrawCommand> {
    let tag = read_u8(bytes, i)?;
    let kind = Kind::from_tag(tag).ok_or(InvalidKind(tag))?;
    let hidden = match read_u8(bytes, i)? {
        0 => false,
        1 => true,
        flag => return Err(InvalidHidden(flag)),
    };
    let stroke_width = read_u8(bytes, i)?;
    let stroke_color = read_color(bytes, i)?;
    let fill_color = read_color(bytes, i)?;
    let geometry = Geometry::from_raw(kind, read_i16(bytes, i)?);

    let point_count = read_u16(bytes, i)? as usize;
    reserve(bytes, *i, point_count, POINT_SIZE)?;

    let mut points = Vec::with_capacity(point_count);
    for _ in 0..point_count {
        let x = read_i16(bytes, i)?;
        let y = read_i16(bytes, i)?;
        points.push(Point::new(x, y));
    }

    Ok(DrawCommand::from_packed(geometry, hidden, stroke_color, stroke_width, fill_color).with_points(points))
}

fn parse_image(bytes: &[u8]) -> FormatResult<DrawImage> {
    let mut i = 0;
    let i = &mut i;

    let width = read_u16(bytes, i)?;
    let height = read_u16(bytes, i)?;
    let command_count = read_u16(bytes, i)? as usize;
    reserve(bytes, *i, command_count, COMMAND_SIZE)?;

    let mut commands = Vec::with_capacity(command_count);
    for _ in 0..command_count {
        commands.push(parse_command(bytes, i)?);
    }

    match *i == bytes.len() {
        true => Ok(DrawImage::from_commands(width, height, commands)),
        false => Err(ExcessBytes),
    }
}

/// Decodes a whole image; nothing is returned unless every byte is valid.
pub fn parse(bytes: &[u8]) -> FormatResult<DrawImage> {
    let result = parse_image(bytes);
    match &result {
        Ok(image) => log::trace!("decoded {} commands from {} bytes", image.command_list().len(), bytes.len()),
        Err(e) => log::warn!("rejected {} bytes of image data: {}", bytes.len(), e),
    }
    result
}
