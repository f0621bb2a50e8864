#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

pub mod color;
pub mod command;
pub mod editing;
pub mod format;
pub mod image;
#[cfg(feature = "std")]
pub mod io;
pub mod rendering;


#[doc(inline)]
pub use {
    color::Color,
    color::PackedColor,
    color::ColorDecoding,
    command::DrawCommand,
    command::Geometry,
    command::Kind,
    command::Point,
    editing::Brush,
    editing::EditSession,
    format::FormatError,
    format::parse,
    format::serialize,
    image::DrawImage,
    image::CANVAS_SIZE,
    rendering::NaiveRenderer,
    rendering::RenderOptions,
};
