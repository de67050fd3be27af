/*!
# `HTMLProps`

`HTMLProps` is a typo-proof table of HTML tag and attribute names.

Instead of sprinkling `"img"` or `"aria-label"` string literals throughout
your code, reference them symbolically, either as enums ([`Tag`], [`Attr`]) or
as plain `&str` constants ([`t`], [`a`]):

```
use htmlprops::{a, t, Attr, Tag};

assert_eq!(Tag::Img.as_str(), t::IMG);
assert_eq!(Attr::AriaLabel.as_str(), a::ARIA_LABEL);
```

Each entry also carries a short description, and obsolete entries are marked
`#[deprecated]` (and report a note via `deprecation()`). Attributes know which
tags they are documented for, but that is advisory only; nothing is enforced.



## Building Markup

A minimal [`TagBuilder`] is included for putting the names to work. Attribute
values and text are passed through an [`Encoder`] on output; [`HtmlEncoder`]
escapes, while [`TestEncoder`] wraps values in markers that
[`testing::render_to_string`] strips back out again.

```
use htmlprops::{Attr, RenderMode, Tag, TagBuilder};

let mut link = TagBuilder::new(Tag::A);
link.merge_attribute(Attr::Href, "/?a=1&b=2");
link.append_text("Next »");

assert_eq!(link.to_string(), r#"<a href="/?a=1&amp;b=2">Next »</a>"#);
```



## html5ever

Names convert into `html5ever` [`LocalName`](html5ever::LocalName)s, and
[`Tag::qual_name`]/[`Attr::qual_name`] return fully-qualified names suitable for
comparison against parsed trees.
*/

#![forbid(unsafe_code)]

#![deny(
	clippy::allow_attributes_without_reason,
	clippy::correctness,
)]

#![warn(
	clippy::complexity,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::style,

	clippy::allow_attributes,
	clippy::clone_on_ref_ptr,
	clippy::create_dir,
	clippy::filetype_is_file,
	clippy::format_push_string,
	clippy::get_unwrap,
	clippy::impl_trait_in_params,
	clippy::lossy_float_literal,
	clippy::missing_docs_in_private_items,
	clippy::needless_raw_strings,
	clippy::panic_in_result_fn,
	clippy::pub_without_shorthand,
	clippy::rest_pat_in_fully_bound_structs,
	clippy::semicolon_inside_block,
	clippy::str_to_string,
	clippy::string_to_string,
	clippy::todo,
	clippy::undocumented_unsafe_blocks,
	clippy::unneeded_field_pattern,
	clippy::unseparated_literal_suffix,
	clippy::unwrap_in_result,

	macro_use_extern_crate,
	missing_copy_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unreachable_pub,
	unused_import_braces,
)]



mod attr;
mod builder;
mod encode;
mod error;
mod tag;
pub mod testing;

pub use attr::{
	a,
	Attr,
};
pub use builder::{
	Content,
	Render,
	RenderMode,
	TagBuilder,
};
pub use encode::{
	Encoder,
	HtmlEncoder,
	MARKER_CLOSE,
	MARKER_OPEN,
	TestEncoder,
};
pub use error::NameError;
pub use tag::{
	t,
	Tag,
};
