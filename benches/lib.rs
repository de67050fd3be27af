/*!
# Benchmark: `htmlprops`
*/

use criterion::{
	Criterion,
	criterion_group,
	criterion_main,
};
use htmlprops::{
	Attr,
	RenderMode,
	Tag,
	TagBuilder,
	testing::render_to_string,
};
use std::hint::black_box;



fn from_name(c: &mut Criterion) {
	let mut group = c.benchmark_group("htmlprops::from_name");

	for name in ["a", "WBR", "textarea"] {
		group.bench_function(format!("Tag::from_name({name:?})"), move |b| {
			b.iter(|| Tag::from_name(black_box(name)))
		});
	}

	for name in ["accept", "onvolumechange", "nope"] {
		group.bench_function(format!("Attr::from_name({name:?})"), move |b| {
			b.iter(|| Attr::from_name(black_box(name)))
		});
	}

	group.finish();
}

fn render(c: &mut Criterion) {
	let mut group = c.benchmark_group("htmlprops::render");

	let mut img = TagBuilder::new(Tag::Img)
		.with_render_mode(RenderMode::SelfClosing);
	img.merge_attribute(Attr::Src, "https://test.com/test.jpg");
	img.merge_attribute(Attr::Alt, "test image \"quoted\" & <escaped>");

	group.bench_function("to_string", |b| {
		b.iter(|| black_box(&img).to_string())
	});

	group.bench_function("render_to_string", |b| {
		b.iter(|| render_to_string(black_box(&img), None))
	});

	group.finish();
}



criterion_group!(
	benches,
	from_name,
	render,
);
criterion_main!(benches);
