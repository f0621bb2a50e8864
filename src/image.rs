use crate::command::DrawCommand;
use crate::format::{self, FormatResult};

use alloc::vec::Vec;

/// Canvas size used by the editor.
pub const CANVAS_SIZE: (u16, u16) = (180, 180);

/// Ordered list of commands; later commands paint over earlier ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawImage {
    width: u16,
    height: u16,
    commands: Vec<DrawCommand>,
}

impl DrawImage {
    pub fn new(width: u16, height: u16) -> Self {
        Self::from_commands(width, height, Vec::new())
    }

    pub fn from_commands(width: u16, height: u16, commands: Vec<DrawCommand>) -> Self {
        Self {
            width,
            height,
            commands,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Appends `command` on top of the others. Geometry is not checked
    /// against the canvas size.
    pub fn add_command(&mut self, command: DrawCommand) {
        log::debug!(
            "adding {:?} command with {} points at index {}",
            command.kind(),
            command.point_count(),
            self.commands.len(),
        );
        self.commands.push(command);
    }

    /// Pops the most recent command. Does nothing on an empty image.
    pub fn remove_last_command(&mut self) -> Option<DrawCommand> {
        let removed = self.commands.pop();
        match &removed {
            Some(_) => log::debug!("removed command {}", self.commands.len()),
            None => log::debug!("no command to remove"),
        }
        removed
    }

    pub fn command_list(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn visible_commands(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|c| !c.hidden)
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn file_size(&self) -> usize {
        format::file_size(self)
    }

    pub fn serialize(&self) -> FormatResult<Vec<u8>> {
        format::serialize(self)
    }

    pub fn parse(bytes: &[u8]) -> FormatResult<Self> {
        format::parse(bytes)
    }
}

#[cfg(feature = "std")]
impl DrawImage {
    /// Writes the encoded image to `dst` and returns the byte count.
    pub fn write_to<W: std::io::Write>(&self, dst: &mut W) -> crate::io::Result<usize> {
        crate::io::dump(self, dst)
    }

    pub fn write_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> crate::io::Result<usize> {
        crate::io::write_file(self, path)
    }

    pub fn read_from<R: std::io::Read>(src: &mut R) -> crate::io::Result<Self> {
        crate::io::load(src)
    }

    pub fn read_from_file<P: AsRef<std::path::Path>>(path: P) -> crate::io::Result<Self> {
        crate::io::read_file(path)
    }
}
