use pdc::*;
use std::env::args;

fn pt(x: i16, y: i16) -> Point {
	Point::new(x, y)
}

fn main() {
	let (w, h) = CANVAS_SIZE;
	let mut session = EditSession::new(w, h);

	let roof = Brush {
		geometry: Geometry::Path { closed: true },
		stroke_color: Color::new(0, 0, 0),
		stroke_width: 2,
		fill_color: Color::new(200, 60, 20),
	};
	for p in [pt(30, 90), pt(90, 30), pt(150, 90)] {
		session.click(&roof, p);
	}
	session.finish();

	let walls = Brush {
		fill_color: Color::new(240, 230, 140),
		..roof
	};
	for p in [pt(45, 90), pt(135, 90), pt(135, 160), pt(45, 160)] {
		session.click(&walls, p);
	}
	session.finish();

	let sun = Brush {
		geometry: Geometry::Circle { radius: 16 },
		stroke_color: Color::new(255, 128, 0),
		stroke_width: 1,
		fill_color: Color::new(255, 255, 0),
	};
	session.click(&sun, pt(150, 28));
	session.finish();

	let smoke = Brush {
		geometry: Geometry::Path { closed: false },
		stroke_color: Color::new(128, 128, 128),
		stroke_width: 3,
		fill_color: Color::new(255, 255, 255),
	};
	for p in [pt(60, 60), pt(55, 40), pt(65, 25), pt(58, 10)] {
		session.click(&smoke, p);
	}
	session.finish();

	let file_name = args().last().unwrap();
	let written = session.save(&file_name).unwrap();
	println!("wrote {} commands ({} bytes) to {}", session.image().command_list().len(), written, file_name);
}
