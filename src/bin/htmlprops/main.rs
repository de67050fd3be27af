/*!
# HTMLProps

Look up HTML tag and attribute names from the command line.
*/

#![forbid(unsafe_code)]

#![warn(
	clippy::nursery,
	clippy::pedantic,
	clippy::missing_docs_in_private_items,

	macro_use_extern_crate,
	missing_copy_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unused_import_braces,
)]



mod error;

use argyle::Argument;
use error::HtmlPropsError;
use fyi_msg::Msg;
use htmlprops::{
	Attr,
	NameError,
	Tag,
};
use std::io::Write;



/// # Main.
fn main() {
	match _main() {
		Ok(()) => {},
		Err(e @ (HtmlPropsError::PrintHelp | HtmlPropsError::PrintVersion)) => {
			println!("{e}");
		},
		Err(e) => {
			Msg::error(e.as_str()).with_newline(true).eprint();
			std::process::exit(1);
		},
	}
}

#[inline]
/// # Actual Main.
fn _main() -> Result<(), HtmlPropsError> {
	let args = argyle::args()
		.with_keywords(include!(concat!(env!("OUT_DIR"), "/argyle.rs")));

	let mut list_tags = false;
	let mut list_attrs = false;
	let mut deprecated = false;
	let mut names: Vec<String> = Vec::new();
	for arg in args {
		match arg {
			Argument::Key("-a" | "--attributes") => { list_attrs = true; },
			Argument::Key("-d" | "--deprecated") => { deprecated = true; },
			Argument::Key("-h" | "--help") => return Err(HtmlPropsError::PrintHelp),
			Argument::Key("-t" | "--tags") => { list_tags = true; },
			Argument::Key("-V" | "--version") => return Err(HtmlPropsError::PrintVersion),

			Argument::Other(s) => { names.push(s); },
			Argument::InvalidUtf8(s) => { names.push(s.to_string_lossy().into_owned()); },

			// Nothing else is relevant.
			_ => {},
		}
	}

	// Nothing to do?
	if ! list_tags && ! list_attrs && names.is_empty() {
		return Err(HtmlPropsError::PrintHelp);
	}

	// Listings first.
	if list_tags || list_attrs {
		let mut out = std::io::stdout().lock();
		if list_tags { write_tags(&mut out, deprecated); }
		if list_attrs { write_attrs(&mut out, deprecated); }
		let _res = out.flush();
	}

	// Then lookups.
	let mut missing = false;
	for name in names {
		if ! lookup(&name) { missing = true; }
	}

	if missing { Err(HtmlPropsError::NoMatch) }
	else { Ok(()) }
}

/// # Lookup.
///
/// Print whatever we know about `name` as a tag and/or attribute, returning
/// `false` if it is neither.
fn lookup(name: &str) -> bool {
	let tag = name.parse::<Tag>();
	let attr = name.parse::<Attr>();

	// Empty is a different kind of wrong.
	if matches!(tag, Err(NameError::Empty)) {
		Msg::warning(NameError::Empty.as_str()).with_newline(true).eprint();
		return false;
	}

	if let Ok(tag) = tag {
		tag_msg(tag).print();

		if let Some(note) = tag.deprecation() {
			Msg::warning(format!("<{tag}> is deprecated: {note}"))
				.with_newline(true)
				.print();
		}
	}

	if let Ok(attr) = attr {
		attr_msg(attr).print();

		let applies = attr.applies_to();
		if ! applies.is_empty() {
			let list = applies.iter()
				.map(|t| format!("<{t}>"))
				.collect::<Vec<_>>()
				.join(", ");
			Msg::info(format!("{attr} applies to {list}."))
				.with_newline(true)
				.print();
		}

		if let Some(note) = attr.deprecation() {
			Msg::warning(format!("{attr} is deprecated: {note}"))
				.with_newline(true)
				.print();
		}
	}

	if tag.is_err() && attr.is_err() {
		Msg::error(format!("{name} is not a known tag or attribute."))
			.with_newline(true)
			.eprint();
		false
	}
	else { true }
}

/// # Tag Summary.
fn tag_msg(tag: Tag) -> Msg {
	let void = if tag.is_void() { " (void)" } else { "" };
	Msg::new(("Tag", 199), format!("<{tag}>{void} {}", tag.description()))
		.with_newline(true)
}

/// # Attribute Summary.
fn attr_msg(attr: Attr) -> Msg {
	Msg::new(("Attribute", 69), format!("{attr} {}", attr.description()))
		.with_newline(true)
}

/// # Write Tag Listing.
///
/// One tag per line, padded so the descriptions line up.
fn write_tags<W: Write>(out: &mut W, deprecated: bool) {
	for tag in Tag::ALL.iter().filter(|t| ! deprecated || t.is_deprecated()) {
		let _res = writeln!(out, "{:<12}{}", tag.as_str(), tag.description());
	}
}

/// # Write Attribute Listing.
fn write_attrs<W: Write>(out: &mut W, deprecated: bool) {
	for attr in Attr::ALL.iter().filter(|a| ! deprecated || a.is_deprecated()) {
		let _res = writeln!(out, "{:<21}{}", attr.as_str(), attr.description());
	}
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_summaries() {
		let msg = tag_msg(Tag::Img).without_ansi();
		assert_eq!(msg.as_str(), "Tag: <img> (void) Defines an image.\n");

		let msg = attr_msg(Attr::Alt).without_ansi();
		assert!(msg.as_str().starts_with("Attribute: alt "));
		assert!(msg.as_str().ends_with('\n'));
	}

	#[test]
	fn t_listings() {
		let mut out = Vec::new();
		write_tags(&mut out, true);
		let out = String::from_utf8(out).expect("Listing is UTF-8.");
		assert_eq!(out.lines().count(), 11);
		assert!(out.lines().any(|l| l.starts_with("font ")));

		let mut out = Vec::new();
		write_attrs(&mut out, true);
		let out = String::from_utf8(out).expect("Listing is UTF-8.");
		assert_eq!(out.lines().count(), 4);
		assert!(out.lines().any(|l| l.starts_with("bgcolor ")));
	}
}
