/*!
# HTMLProps: Test Rendering.

Helpers for turning rendered markup into something a test can compare against
a literal string.
*/

use crate::{
	Encoder,
	MARKER_CLOSE,
	MARKER_OPEN,
	Render,
	TestEncoder,
};
use std::{
	borrow::Cow,
	fmt,
};



/// # Render To String.
///
/// Write `content` into a buffer using `encoder` (or [`TestEncoder`] if
/// `None`), then strip out any test markers.
///
/// ## Examples
///
/// ```
/// use htmlprops::{
///     Attr,
///     RenderMode,
///     Tag,
///     TagBuilder,
///     testing::render_to_string,
/// };
///
/// let mut img = TagBuilder::new(Tag::Img)
///     .with_render_mode(RenderMode::SelfClosing);
/// img.merge_attribute(Attr::Src, "https://test.com/test.jpg");
/// img.merge_attribute(Attr::Alt, "test image");
///
/// assert_eq!(
///     render_to_string(&img, None).unwrap(),
///     r#"<img alt="test image" src="https://test.com/test.jpg" />"#,
/// );
/// ```
///
/// ## Errors
///
/// Errors raised while writing are returned as-are.
pub fn render_to_string<R>(content: &R, encoder: Option<&dyn Encoder>)
-> Result<String, fmt::Error>
where R: Render + ?Sized {
	let mut buf = String::new();
	content.write_to(&mut buf, encoder.unwrap_or(&TestEncoder))?;

	match strip_markers(&buf) {
		Cow::Borrowed(_) => Ok(buf),
		Cow::Owned(s) => Ok(s),
	}
}

#[must_use]
/// # Strip Markers.
///
/// Remove every [`MARKER_OPEN`] and then every [`MARKER_CLOSE`] from the
/// source. Text with neither is returned as-is.
pub fn strip_markers(src: &str) -> Cow<'_, str> {
	let open = src.contains(MARKER_OPEN);
	let close = src.contains(MARKER_CLOSE);

	match (open, close) {
		(false, false) => Cow::Borrowed(src),
		(true, false) => Cow::Owned(src.replace(MARKER_OPEN, "")),
		(false, true) => Cow::Owned(src.replace(MARKER_CLOSE, "")),
		(true, true) => Cow::Owned(src.replace(MARKER_OPEN, "").replace(MARKER_CLOSE, "")),
	}
}



#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		Attr,
		HtmlEncoder,
		RenderMode,
		Tag,
		TagBuilder,
	};

	#[test]
	fn t_tag_and_attributes() {
		const EXPECTED: &str = r#"<img alt="test image" src="https://test.com/test.jpg" />"#;

		let mut builder = TagBuilder::new(Tag::Img)
			.with_render_mode(RenderMode::SelfClosing);
		builder.merge_attribute(Attr::Src, "https://test.com/test.jpg");
		builder.merge_attribute(Attr::Alt, "test image");

		assert_eq!(render_to_string(&builder, None), Ok(EXPECTED.to_owned()));

		// The real encoder has nothing to escape here.
		assert_eq!(
			render_to_string(&builder, Some(&HtmlEncoder)),
			Ok(EXPECTED.to_owned()),
		);
	}

	#[test]
	fn t_encoders_differ() {
		let mut p = TagBuilder::new(Tag::P);
		p.merge_attribute(Attr::Title, "a & b");
		p.append_text("1 < 2");

		assert_eq!(
			render_to_string(&p, None).as_deref(),
			Ok(r#"<p title="a & b">1 < 2</p>"#),
		);
		assert_eq!(
			render_to_string(&p, Some(&HtmlEncoder)).as_deref(),
			Ok(r#"<p title="a &amp; b">1 &lt; 2</p>"#),
		);
	}

	#[test]
	fn t_strip_markers() {
		for (raw, expected) in [
			("", ""),
			("HtmlEncode[[x]]", "x"),
			("a]]b", "ab"),
			("HtmlEncode[[HtmlEncode[[", ""),
			("<b>HtmlEncode[[bold]]</b>", "<b>bold</b>"),
		] {
			assert_eq!(strip_markers(raw), expected);
		}
	}

	#[test]
	fn t_idempotent() {
		for raw in [
			"",
			"plain",
			r#"<img alt="test image" src="https://test.com/test.jpg" />"#,
			"HtmlEncode[ [not quite] ]",
		] {
			let once = strip_markers(raw);
			assert!(matches!(once, Cow::Borrowed(_)));
			assert_eq!(once, raw);
			assert_eq!(strip_markers(&once), raw);
		}
	}

	#[test]
	fn t_sink_error() {
		/// # Always Fails.
		struct Broken;
		impl Render for Broken {
			fn write_to(&self, _out: &mut dyn fmt::Write, _enc: &dyn Encoder)
			-> fmt::Result { Err(fmt::Error) }
		}

		assert_eq!(render_to_string(&Broken, None), Err(fmt::Error));
	}
}
