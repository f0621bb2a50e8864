use crate::color::{ColorDecoding, PackedColor};
use crate::command::{DrawCommand, Geometry, Point};
use crate::image::DrawImage;

use wizdraw::push_cubic_bezier_segments;
use wizdraw::stroke;
use wizdraw::fill;

use vek::bezier::CubicBezier2;
use vek::vec::Vec2;

use rgb::RGBA8;

use alloc::vec::Vec;

pub type Float = f32;
pub type Couple = vek::vec::repr_c::vec2::Vec2<Float>;

// distance of the control points of a quarter circle, relative to its radius
const KAPPA: Float = 0.552_284_75;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderOptions {
    pub background: RGBA8,
    pub color_decoding: ColorDecoding,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            background: RGBA8::new(255, 255, 255, 255),
            color_decoding: ColorDecoding::Rescaled,
        }
    }
}

fn couple(point: Point) -> Couple {
    Couple::new(point.x as Float, point.y as Float)
}

fn flatten_path(points: &[Point], closed: bool) -> Vec<Couple> {
    let mut flat: Vec<Couple> = points.iter().copied().map(couple).collect();
    if closed && flat.len() > 2 {
        flat.push(flat[0]);
    }
    flat
}

fn flatten_circle(center: Point, radius: u16) -> Vec<Couple> {
    let mut flat: Vec<Couple> = Vec::new();
    if radius == 0 {
        return flat;
    }

    let c = couple(center);
    let r = radius as Float;
    let k = KAPPA * r;
    let quarters = [
        (Couple::new(r, 0.0), Couple::new(r, k), Couple::new(k, r), Couple::new(0.0, r)),
        (Couple::new(0.0, r), Couple::new(-k, r), Couple::new(-r, k), Couple::new(-r, 0.0)),
        (Couple::new(-r, 0.0), Couple::new(-r, -k), Couple::new(-k, -r), Couple::new(0.0, -r)),
        (Couple::new(0.0, -r), Couple::new(k, -r), Couple::new(r, -k), Couple::new(r, 0.0)),
    ];

    for (start, ctrl0, ctrl1, end) in quarters {
        let curve = CubicBezier2 {
            start: c + start,
            ctrl0: c + ctrl0,
            ctrl1: c + ctrl1,
            end: c + end,
        };
        push_cubic_bezier_segments::<8>(&curve, 0.4, &mut flat);
    }

    if let Some(first) = flat.first().copied() {
        flat.push(first);
    }
    flat
}

/// Outline of a command in canvas space.
pub fn flatten(command: &DrawCommand) -> Vec<Couple> {
    match command.geometry {
        Geometry::Path { closed } => flatten_path(command.points(), closed),
        Geometry::Circle { radius } => match command.center() {
            Some(center) => flatten_circle(center, radius),
            None => Vec::new(),
        },
    }
}

/// Rasterizes the visible commands of an image, in order.
pub struct NaiveRenderer<'a> {
    options: RenderOptions,
    outlines: Vec<(&'a DrawCommand, Vec<Couple>)>,
}

impl<'a> NaiveRenderer<'a> {
    pub fn new(image: &'a DrawImage, options: RenderOptions) -> Self {
        let outlines = image
            .visible_commands()
            .map(|command| (command, flatten(command)))
            .collect::<Vec<_>>();

        log::debug!(
            "prepared {} of {} commands for rendering",
            outlines.len(),
            image.command_list().len(),
        );

        Self { options, outlines }
    }

    fn pixel(&self, color: PackedColor) -> RGBA8 {
        let c = self.options.color_decoding.decode(color);
        RGBA8::new(c.r, c.g, c.b, 255)
    }

    /// `dst` holds `h` lines of `stride` pixels; `mask` holds `w * h` bytes.
    ///
    /// # Panics
    ///
    /// If either buffer is smaller than that.
    pub fn render<const SSAA: usize, const SSAA_SQ: usize>(
        &self,
        dst: &mut [RGBA8],
        mask: &mut [u8],
        w: usize,
        h: usize,
        stride: usize,
        alpha_blend: bool,
    ) {
        if w == 0 || h == 0 {
            return;
        }

        let mask_size = Vec2::new(w, h);

        let mut i = 0;
        for _ in 0..h {
            dst[i..][..w].fill(self.options.background);
            i += stride;
        }

        for (command, outline) in &self.outlines {
            // open paths are never filled, even with 3 points or more
            if command.geometry.is_filled() && outline.len() > 2 {
                mask.fill(0);
                fill::<SSAA, SSAA_SQ>(&outline, mask, mask_size);
                paint(dst, mask, self.pixel(command.fill_color), w, h, stride, alpha_blend);
            }

            if command.is_stroked() && outline.len() > 1 {
                mask.fill(0);
                stroke::<SSAA>(&outline, mask, mask_size, command.stroke_width as Float);
                paint(dst, mask, self.pixel(command.stroke_color), w, h, stride, alpha_blend);
            }
        }
    }
}

fn paint(dst: &mut [RGBA8], mask: &[u8], color: RGBA8, w: usize, h: usize, stride: usize, alpha_blend: bool) {
    let mut line = 0;
    for row in mask[..w * h].chunks(w) {
        for (x, q) in row.iter().enumerate() {
            if *q != 0 {
                blend_pixel(&mut dst[line + x], color, *q, alpha_blend);
            }
        }
        line += stride;
    }
}

/// Mixes `src` into `dst`, scaled by the mask coverage.
#[inline(always)]
pub fn blend_pixel(dst: &mut RGBA8, src: RGBA8, coverage: u8, alpha_blend: bool) {
    let alpha = (src.a as u32 * coverage as u32) / 255;
    if alpha == 255 {
        *dst = src;
        return;
    }

    let mix = |s: u8, d: u8| -> u8 {
        let s = s as u32 * alpha;
        match alpha_blend {
            true => ((s + d as u32 * (255 - alpha)) / 255) as u8,
            false => (s / 255) as u8,
        }
    };

    *dst = RGBA8::new(mix(src.r, dst.r), mix(src.g, dst.g), mix(src.b, dst.b), mix(src.a, dst.a));
}
