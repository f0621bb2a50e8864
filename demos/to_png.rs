use std::env::args;
use std::fs::write;
use png::Encoder;
use png::ColorType::Rgba;
use png::BitDepth::Eight;
use pdc::*;
use std::time::Instant;
use rgb::{ComponentBytes, RGBA8};

fn main() {
	let prefix = args().last().unwrap();
	let pdc_name = format!("{}.pdc", &prefix);
	let png_name = format!("{}.png", &prefix);

	let image = DrawImage::read_from_file(&pdc_name).unwrap();
	let (w, h) = (image.width() as usize, image.height() as usize);
	let renderer = NaiveRenderer::new(&image, RenderOptions::default());
	let length = w * h;
	let mut canvas = vec![RGBA8::new(0, 0, 0, 0); length];
	let mut mask = vec![0u8; length];

	let runs = 10;
	let now = Instant::now();
	for _ in 0..runs {
		renderer.render::<6, 36>(&mut canvas, &mut mask, w, h, w, true);
	}
	println!("rendered {} times in {}ms.", runs, now.elapsed().as_millis());

	let mut png_buf = Vec::new();
	{
		let mut encoder = Encoder::new(&mut png_buf, w as u32, h as u32);
		encoder.set_color(Rgba);
		encoder.set_depth(Eight);
		let mut writer = encoder.write_header().unwrap();
		writer.write_image_data(canvas.as_bytes()).unwrap();
	}
	write(&png_name, &png_buf).unwrap();
}
