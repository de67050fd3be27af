/*!
# HTMLProps: Encoders.

Attribute values and text content pass through an [`Encoder`] on their way
out. [`HtmlEncoder`] does real escaping; [`TestEncoder`] just wraps things in
markers so tests can see what would have been encoded.
*/

use std::fmt;



/// # Test Marker: Open.
pub const MARKER_OPEN: &str = "HtmlEncode[[";

/// # Test Marker: Close.
pub const MARKER_CLOSE: &str = "]]";



/// # Text Encoder.
///
/// Write `src` to `out` in whatever form is safe for the markup context.
pub trait Encoder {
	/// # Encode.
	///
	/// ## Errors
	///
	/// Errors from the underlying writer are passed through.
	fn encode(&self, out: &mut dyn fmt::Write, src: &str) -> fmt::Result;
}



#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
/// # HTML Encoder.
///
/// Escape `&`, `<`, `>`, both quote styles, and non-breaking spaces. Quotes
/// are written as numeric references so the result is safe inside either
/// kind of attribute wrapper.
///
/// ## Examples
///
/// ```
/// use htmlprops::{Encoder, HtmlEncoder};
///
/// let mut out = String::new();
/// HtmlEncoder.encode(&mut out, "Tom & \"Jerry\"").unwrap();
/// assert_eq!(out, "Tom &amp; &#34;Jerry&#34;");
/// ```
pub struct HtmlEncoder;

impl Encoder for HtmlEncoder {
	fn encode(&self, out: &mut dyn fmt::Write, src: &str) -> fmt::Result {
		let mut last = 0;
		for (idx, c) in src.char_indices() {
			let esc = match c {
				'&' => "&amp;",
				'<' => "&lt;",
				'>' => "&gt;",
				'"' => "&#34;",
				'\'' => "&#39;",
				'\u{a0}' => "&nbsp;",
				_ => continue,
			};

			// Flush the clean run, then the replacement.
			out.write_str(&src[last..idx])?;
			out.write_str(esc)?;
			last = idx + c.len_utf8();
		}

		out.write_str(&src[last..])
	}
}



#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
/// # Test Encoder.
///
/// This writes the source verbatim between [`MARKER_OPEN`] and
/// [`MARKER_CLOSE`]. Empty strings are written as nothing at all.
pub struct TestEncoder;

impl Encoder for TestEncoder {
	fn encode(&self, out: &mut dyn fmt::Write, src: &str) -> fmt::Result {
		if src.is_empty() { return Ok(()); }
		out.write_str(MARKER_OPEN)?;
		out.write_str(src)?;
		out.write_str(MARKER_CLOSE)
	}
}



#[cfg(test)]
mod tests {
	use super::*;

	fn encode<E: Encoder>(enc: &E, src: &str) -> String {
		let mut out = String::new();
		enc.encode(&mut out, src).expect("Encoding failed.");
		out
	}

	#[test]
	fn t_html() {
		for (raw, expected) in [
			("", ""),
			("plain text", "plain text"),
			("a < b > c", "a &lt; b &gt; c"),
			("R&D", "R&amp;D"),
			("\"quoted\"", "&#34;quoted&#34;"),
			("it's", "it&#39;s"),
			("no\u{a0}break", "no&nbsp;break"),
			("ünïcödé & more", "ünïcödé &amp; more"),
			("<<>>", "&lt;&lt;&gt;&gt;"),
		] {
			assert_eq!(encode(&HtmlEncoder, raw), expected);
		}
	}

	#[test]
	fn t_test() {
		assert_eq!(encode(&TestEncoder, ""), "");
		assert_eq!(encode(&TestEncoder, "a < b"), "HtmlEncode[[a < b]]");
	}

	#[test]
	fn t_sink_error() {
		/// # Broken Writer.
		struct Broken;
		impl fmt::Write for Broken {
			fn write_str(&mut self, _s: &str) -> fmt::Result { Err(fmt::Error) }
		}

		assert_eq!(HtmlEncoder.encode(&mut Broken, "x"), Err(fmt::Error));
		assert_eq!(TestEncoder.encode(&mut Broken, "x"), Err(fmt::Error));

		// Nothing gets written for empty test values, so nothing can fail.
		assert_eq!(TestEncoder.encode(&mut Broken, ""), Ok(()));
	}
}
