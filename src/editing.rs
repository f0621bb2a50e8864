//! Building an image one click at a time.

use crate::color::Color;
use crate::command::{DrawCommand, Geometry, Point};
use crate::image::DrawImage;

/// Tool settings applied to the next command.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Brush {
    pub geometry: Geometry,
    pub stroke_color: Color,
    pub stroke_width: u8,
    pub fill_color: Color,
}

impl Brush {
    pub fn begin(&self) -> DrawCommand {
        DrawCommand::new(self.geometry, false, self.stroke_color, self.stroke_width, self.fill_color)
    }
}

/// An image plus the command being drawn, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    image: DrawImage,
    current: Option<DrawCommand>,
}

impl EditSession {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            image: DrawImage::new(width, height),
            current: None,
        }
    }

    pub fn image(&self) -> &DrawImage {
        &self.image
    }

    pub fn current(&self) -> Option<&DrawCommand> {
        self.current.as_ref()
    }

    /// Adds `point` to the command in progress, starting one from `brush`
    /// if needed. A circle only takes its center: later clicks return false.
    pub fn click(&mut self, brush: &Brush, point: Point) -> bool {
        let command = self.current.get_or_insert_with(|| {
            log::debug!("began new {:?} command", brush.geometry.kind());
            brush.begin()
        });

        let geometry = command.geometry;
        match geometry {
            Geometry::Circle { .. } if command.point_count() > 0 => {
                log::debug!("circle already has a center, ignoring {:?}", point);
                false
            }
            _ => {
                command.add_point(point);
                log::debug!("added point {:?}", point);
                true
            }
        }
    }

    /// Moves the command in progress into the image.
    pub fn finish(&mut self) -> bool {
        match self.current.take() {
            Some(command) => {
                log::debug!("finalizing current command");
                self.image.add_command(command);
                true
            }
            None => false,
        }
    }

    pub fn discard(&mut self) -> Option<DrawCommand> {
        self.current.take()
    }

    pub fn undo(&mut self) -> Option<DrawCommand> {
        self.image.remove_last_command()
    }

    pub fn reset(&mut self) {
        self.image = DrawImage::new(self.image.width(), self.image.height());
        self.current = None;
        log::debug!("canvas reset");
    }

    #[cfg(feature = "std")]
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> crate::io::Result<usize> {
        self.image.write_to_file(path)
    }
}
