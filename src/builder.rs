/*!
# HTMLProps: Tag Builder.

A small, single-element markup builder. It holds a tag name, a set of
attributes, and (optionally) some inner content, and can write the whole lot
out through an [`Encoder`].
*/

use crate::{
	Encoder,
	HtmlEncoder,
};
use html5ever::{
	LocalName,
	tendril::StrTendril,
};
use indexmap::IndexMap;
use std::{
	cmp::Ordering,
	fmt,
};



/// # Class Attribute.
const CLASS: &str = "class";



/// # Renderable Content.
///
/// Anything that can write itself as markup.
pub trait Render {
	/// # Write To.
	///
	/// Serialize into `out`, running text and attribute values through
	/// `encoder`.
	///
	/// ## Errors
	///
	/// Errors from the underlying writer are passed through.
	fn write_to(&self, out: &mut dyn fmt::Write, encoder: &dyn Encoder) -> fmt::Result;
}



#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
/// # Render Mode.
pub enum RenderMode {
	#[default]
	/// # Start Tag, Content, End Tag.
	Normal,

	/// # Start Tag Only.
	StartTag,

	/// # End Tag Only.
	EndTag,

	/// # Self-Closing Tag.
	///
	/// Written as `<tag />`.
	SelfClosing,
}



#[derive(Debug, Clone)]
/// # Inner Content.
pub enum Content {
	/// # Text (Encoded On Write).
	Text(StrTendril),

	/// # Raw Markup.
	Html(StrTendril),

	/// # Child Element.
	Element(TagBuilder),
}

impl Render for Content {
	fn write_to(&self, out: &mut dyn fmt::Write, encoder: &dyn Encoder) -> fmt::Result {
		match self {
			Self::Text(v) => encoder.encode(out, v),
			Self::Html(v) => out.write_str(v),
			Self::Element(v) => v.write_to(out, encoder),
		}
	}
}



#[derive(Debug, Clone)]
/// # Tag Builder.
///
/// Attributes are kept in (ASCII case-insensitive) alphabetical order, so the
/// output is the same no matter what order they were merged in.
///
/// ## Examples
///
/// ```
/// use htmlprops::{Attr, RenderMode, Tag, TagBuilder};
///
/// let mut img = TagBuilder::new(Tag::Img)
///     .with_render_mode(RenderMode::SelfClosing);
/// img.merge_attribute(Attr::Src, "/logo.png");
/// img.merge_attribute(Attr::Alt, "Logo");
///
/// assert_eq!(img.to_string(), r#"<img alt="Logo" src="/logo.png" />"#);
/// ```
pub struct TagBuilder {
	/// # Tag Name.
	name: LocalName,

	/// # Attributes.
	attrs: IndexMap<LocalName, StrTendril>,

	/// # Render Mode.
	mode: RenderMode,

	/// # Inner Content.
	inner: Vec<Content>,
}

impl fmt::Display for TagBuilder {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.write_to(f, &HtmlEncoder)
	}
}

impl Render for TagBuilder {
	fn write_to(&self, out: &mut dyn fmt::Write, encoder: &dyn Encoder) -> fmt::Result {
		match self.mode {
			RenderMode::Normal => {
				self.write_start(out, encoder, false)?;
				for child in &self.inner { child.write_to(out, encoder)?; }
				self.write_end(out)
			},
			RenderMode::StartTag => self.write_start(out, encoder, false),
			RenderMode::EndTag => self.write_end(out),
			RenderMode::SelfClosing => self.write_start(out, encoder, true),
		}
	}
}

impl TagBuilder {
	#[must_use]
	/// # New.
	///
	/// The name can be a [`Tag`](crate::Tag), a string, or a `LocalName`.
	/// It is written exactly as given.
	pub fn new<N>(name: N) -> Self
	where N: Into<LocalName> {
		Self {
			name: name.into(),
			attrs: IndexMap::new(),
			mode: RenderMode::Normal,
			inner: Vec::new(),
		}
	}

	#[must_use]
	/// # With Render Mode.
	pub fn with_render_mode(mut self, mode: RenderMode) -> Self {
		self.mode = mode;
		self
	}

	/// # Set Render Mode.
	pub const fn set_render_mode(&mut self, mode: RenderMode) { self.mode = mode; }
}

impl TagBuilder {
	#[must_use]
	/// # Tag Name.
	pub fn name(&self) -> &str { &self.name }

	#[must_use]
	/// # Render Mode.
	pub const fn render_mode(&self) -> RenderMode { self.mode }

	#[must_use]
	/// # Attribute Value.
	///
	/// Return the value of the attribute named `key` (ASCII
	/// case-insensitive), if any.
	pub fn attribute(&self, key: &str) -> Option<&str> {
		self.find(key).map(|idx| &*self.attrs[idx])
	}

	/// # Attributes.
	///
	/// Iterate over the attribute name/value pairs in output order.
	pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
		self.attrs.iter().map(|(k, v)| (&**k, &**v))
	}

	#[must_use]
	/// # Inner Content.
	pub fn inner(&self) -> &[Content] { &self.inner }
}

impl TagBuilder {
	/// # Merge Attribute.
	///
	/// Add the attribute unless one with the same name is already set, in
	/// which case the existing value wins.
	///
	/// Empty keys are ignored.
	pub fn merge_attribute<K, V>(&mut self, key: K, value: V)
	where K: Into<LocalName>, V: Into<StrTendril> {
		let key = key.into();
		if ! key.is_empty() && self.find(&key).is_none() {
			self.insert(key, value.into());
		}
	}

	/// # Merge Attribute (Replace).
	///
	/// Add the attribute, overwriting the value of any existing attribute of
	/// the same name.
	///
	/// Empty keys are ignored.
	pub fn merge_attribute_replace<K, V>(&mut self, key: K, value: V)
	where K: Into<LocalName>, V: Into<StrTendril> {
		let key = key.into();
		if key.is_empty() { return; }
		match self.find(&key) {
			Some(idx) => { self.attrs[idx] = value.into(); },
			None => { self.insert(key, value.into()); },
		}
	}

	/// # Add CSS Class.
	///
	/// Prepend `value` to the existing `class` attribute, or set it if there
	/// isn't one yet.
	pub fn add_css_class(&mut self, value: &str) {
		let value = value.trim();
		if value.is_empty() { return; }

		if let Some(idx) = self.find(CLASS) {
			let old = &mut self.attrs[idx];
			let mut new = StrTendril::from(value);
			if ! old.is_empty() {
				new.push_char(' ');
				new.push_tendril(old);
			}
			*old = new;
		}
		else { self.insert(LocalName::from(CLASS), StrTendril::from(value)); }
	}

	/// # Remove Attribute.
	///
	/// Remove and return the value of the attribute named `key`, if any.
	pub fn remove_attribute(&mut self, key: &str) -> Option<StrTendril> {
		let idx = self.find(key)?;
		self.attrs.shift_remove_index(idx).map(|(_, v)| v)
	}
}

impl TagBuilder {
	/// # Append Text.
	///
	/// Text is encoded when written.
	pub fn append_text<S>(&mut self, text: S) -> &mut Self
	where S: Into<StrTendril> {
		self.inner.push(Content::Text(text.into()));
		self
	}

	/// # Append HTML.
	///
	/// Markup is written as-is.
	pub fn append_html<S>(&mut self, html: S) -> &mut Self
	where S: Into<StrTendril> {
		self.inner.push(Content::Html(html.into()));
		self
	}

	/// # Append Child Element.
	pub fn append_child(&mut self, child: Self) -> &mut Self {
		self.inner.push(Content::Element(child));
		self
	}
}

impl TagBuilder {
	/// # Find Attribute Index.
	fn find(&self, key: &str) -> Option<usize> {
		self.attrs.keys().position(|k| (**k).eq_ignore_ascii_case(key))
	}

	/// # Insert (Sorted).
	fn insert(&mut self, key: LocalName, value: StrTendril) {
		self.attrs.insert(key, value);
		self.attrs.sort_by(|k1, _, k2, _| cmp_names(k1, k2));
	}

	/// # Write Opening Tag.
	fn write_start(&self, out: &mut dyn fmt::Write, encoder: &dyn Encoder, close: bool)
	-> fmt::Result {
		out.write_char('<')?;
		out.write_str(&self.name)?;

		for (key, value) in &self.attrs {
			out.write_char(' ')?;
			out.write_str(key)?;
			out.write_str("=\"")?;
			encoder.encode(out, value)?;
			out.write_char('"')?;
		}

		if close { out.write_str(" />") }
		else { out.write_char('>') }
	}

	/// # Write Closing Tag.
	fn write_end(&self, out: &mut dyn fmt::Write) -> fmt::Result {
		out.write_str("</")?;
		out.write_str(&self.name)?;
		out.write_char('>')
	}
}



/// # Compare Names.
///
/// ASCII case-insensitive ordering, falling back to a byte comparison so
/// names differing only by case still sort deterministically.
fn cmp_names(a: &str, b: &str) -> Ordering {
	let lhs = a.bytes().map(|x| x.to_ascii_lowercase());
	let rhs = b.bytes().map(|x| x.to_ascii_lowercase());
	lhs.cmp(rhs).then_with(|| a.cmp(b))
}



#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		Attr,
		Tag,
		TestEncoder,
	};

	#[test]
	fn t_modes() {
		let mut div = TagBuilder::new(Tag::Div);
		div.merge_attribute(Attr::Id, "main");
		div.append_text("Hi & bye");

		assert_eq!(div.render_mode(), RenderMode::Normal);
		assert_eq!(div.to_string(), r#"<div id="main">Hi &amp; bye</div>"#);

		div.set_render_mode(RenderMode::StartTag);
		assert_eq!(div.to_string(), r#"<div id="main">"#);

		div.set_render_mode(RenderMode::EndTag);
		assert_eq!(div.to_string(), "</div>");

		div.set_render_mode(RenderMode::SelfClosing);
		assert_eq!(div.to_string(), r#"<div id="main" />"#);
	}

	#[test]
	fn t_empty() {
		assert_eq!(TagBuilder::new(Tag::P).to_string(), "<p></p>");
		assert_eq!(
			TagBuilder::new(Tag::Br).with_render_mode(RenderMode::SelfClosing).to_string(),
			"<br />",
		);

		// Names are written as declared.
		assert_eq!(TagBuilder::new(Tag::H1).to_string(), "<H1></H1>");
		assert_eq!(TagBuilder::new("my-widget").name(), "my-widget");
	}

	#[test]
	fn t_merge() {
		let mut el = TagBuilder::new(Tag::Input);
		el.merge_attribute(Attr::Value, "one");
		el.merge_attribute(Attr::Value, "two");
		el.merge_attribute("VALUE", "three");
		assert_eq!(el.attribute("value"), Some("one"));
		assert_eq!(el.attribute("Value"), Some("one"));

		el.merge_attribute_replace(Attr::Value, "four");
		assert_eq!(el.attribute("value"), Some("four"));
		assert_eq!(el.attributes().count(), 1);

		// Empty keys are ignored.
		el.merge_attribute("", "nope");
		el.merge_attribute_replace("", "nope");
		assert_eq!(el.attributes().count(), 1);

		assert_eq!(el.remove_attribute("value").as_deref(), Some("four"));
		assert_eq!(el.remove_attribute("value"), None);
		assert_eq!(el.attributes().count(), 0);
	}

	#[test]
	fn t_order() {
		let mut el = TagBuilder::new(Tag::A);
		el.merge_attribute(Attr::Title, "t");
		el.merge_attribute(Attr::Href, "/");
		el.merge_attribute("Data-X", "x");
		el.merge_attribute(Attr::AriaLabel, "l");

		let keys: Vec<&str> = el.attributes().map(|(k, _)| k).collect();
		assert_eq!(keys, ["aria-label", "Data-X", "href", "title"]);
	}

	#[test]
	fn t_css_class() {
		let mut el = TagBuilder::new(Tag::Span);
		el.add_css_class("a");
		assert_eq!(el.attribute("class"), Some("a"));

		el.add_css_class(" b ");
		assert_eq!(el.attribute("class"), Some("b a"));

		el.add_css_class("");
		assert_eq!(el.attribute("class"), Some("b a"));

		let mut el = TagBuilder::new(Tag::Span);
		el.merge_attribute(Attr::Class, "");
		el.add_css_class("c");
		assert_eq!(el.attribute("class"), Some("c"));
	}

	#[test]
	fn t_nested() {
		let mut li = TagBuilder::new(Tag::Li);
		li.append_text("<one>");

		let mut ul = TagBuilder::new(Tag::Ul);
		ul.merge_attribute(Attr::Class, "list");
		ul.append_child(li).append_html("<li>two</li>");

		assert_eq!(
			ul.to_string(),
			r#"<ul class="list"><li>&lt;one&gt;</li><li>two</li></ul>"#,
		);

		let mut out = String::new();
		ul.write_to(&mut out, &TestEncoder).expect("Write failed.");
		assert_eq!(
			out,
			r#"<ul class="HtmlEncode[[list]]"><li>HtmlEncode[[<one>]]</li><li>two</li></ul>"#,
		);
	}

	#[test]
	fn t_cmp_names() {
		assert_eq!(cmp_names("alt", "src"), Ordering::Less);
		assert_eq!(cmp_names("SRC", "alt"), Ordering::Greater);
		assert_eq!(cmp_names("id", "id"), Ordering::Equal);
		assert_ne!(cmp_names("ID", "id"), Ordering::Equal);
	}
}
