/*!
# HTMLProps: Tags.

Every HTML element name we know about, as a `Tag` enum and as plain string
constants under `t`.
*/

#![expect(deprecated, reason = "The table references its own deprecated entries.")]

use crate::{
	Attr,
	NameError,
};
use html5ever::{
	namespace_url,
	ns,
	LocalName,
	QualName,
};
use std::{
	fmt,
	str::FromStr,
};



/// # Helper: Tag Table.
///
/// Each row is `Variant CONST "value" "description"`, optionally followed by
/// `! "note"` for deprecated entries.
macro_rules! tags {
	( $( $var:ident $k:ident $v:literal $desc:literal $(! $note:literal)?, )+ ) => (
		#[derive(Debug, Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
		/// # HTML Tag.
		///
		/// The string value of each variant is available via [`Tag::as_str`],
		/// or directly as a constant in the [`t`] module.
		///
		/// Obsolete elements are marked `#[deprecated]`. They still work; the
		/// warning is informational.
		pub enum Tag {
			$(
				#[doc = concat!("# `<", $v, ">`\n\n", $desc)]
				$( #[deprecated(note = $note)] )?
				$var,
			)+
		}

		impl Tag {
			/// # All Tags.
			///
			/// Every tag, in declaration (alphabetical-ish) order.
			pub const ALL: &'static [Self] = &[ $( Self::$var ),+ ];

			#[must_use]
			/// # As Str.
			///
			/// Return the tag name exactly as declared.
			///
			/// ## Examples
			///
			/// ```
			/// use htmlprops::Tag;
			///
			/// assert_eq!(Tag::Img.as_str(), "img");
			/// assert_eq!(Tag::H1.as_str(), "H1");
			/// ```
			pub const fn as_str(self) -> &'static str {
				match self { $( Self::$var => $v ),+ }
			}

			#[must_use]
			/// # Description.
			pub const fn description(self) -> &'static str {
				match self { $( Self::$var => $desc ),+ }
			}

			#[must_use]
			/// # Deprecation Note.
			///
			/// Returns the reason an obsolete element shouldn't be used, or
			/// `None` if it is current.
			pub const fn deprecation(self) -> Option<&'static str> {
				match self { $( Self::$var => tags!(@note $($note)?) ),+ }
			}
		}

		/// # Tag Name Constants.
		///
		/// The same values as [`Tag::as_str`], for code that just wants a
		/// `&str`.
		pub mod t {
			$(
				#[doc = concat!("`<", $v, ">`")]
				$( #[deprecated(note = $note)] )?
				pub const $k: &str = $v;
			)+
		}
	);

	(@note) => ( None );
	(@note $note:literal) => ( Some($note) );
}

tags! {
	A           A          "a"          "Defines a hyperlink.",
	Abbr        ABBR       "abbr"       "Defines an abbreviation or an acronym.",
	Acronym     ACRONYM    "acronym"    "Defines an acronym." ! "Not supported in HTML5. Use <abbr> instead.",
	Address     ADDRESS    "address"    "Defines contact information for the author/owner of a document.",
	Area        AREA       "area"       "Defines an area inside an image map.",
	Article     ARTICLE    "article"    "Defines an article.",
	Aside       ASIDE      "aside"      "Defines content aside from the page content.",
	Audio       AUDIO      "audio"      "Defines embedded sound content.",
	B           B          "b"          "Defines bold text.",
	Base        BASE       "base"       "Specifies the base URL/target for all relative URLs in a document.",
	BaseFont    BASEFONT   "basefont"   "Specifies a default color, size, and font for all text in a document." ! "Not supported in HTML5. Use CSS instead.",
	Bdi         BDI        "bdi"        "Isolates a part of text that might be formatted in a different direction from other text outside it.",
	Bdo         BDO        "bdo"        "Overrides the current text direction.",
	Big         BIG        "big"        "Defines big text." ! "Not supported in HTML5. Use CSS instead.",
	Blockquote  BLOCKQUOTE "blockquote" "Defines a section that is quoted from another source.",
	Body        BODY       "body"       "Defines the document's body.",
	Br          BR         "br"         "Defines a single line break.",
	Button      BUTTON     "button"     "Defines a clickable button.",
	Canvas      CANVAS     "canvas"     "Used to draw graphics, on the fly, via scripting (usually JavaScript).",
	Caption     CAPTION    "caption"    "Defines a table caption.",
	Center      CENTER     "center"     "Defines centered text." ! "Not supported in HTML5. Use CSS instead.",
	Cite        CITE       "cite"       "Defines the title of a work.",
	Code        CODE       "code"       "Defines a piece of computer code.",
	Col         COL        "col"        "Specifies column properties for each column within a <colgroup> element.",
	ColGroup    COLGROUP   "colgroup"   "Specifies a group of one or more columns in a table for formatting.",
	Data        DATA       "data"       "Adds a machine-readable translation of a given content.",
	DataList    DATALIST   "datalist"   "Specifies a list of pre-defined options for input controls.",
	Dd          DD         "dd"         "Defines a description/value of a term in a description list.",
	Del         DEL        "del"        "Defines text that has been deleted from a document.",
	Details     DETAILS    "details"    "Defines additional details that the user can view or hide.",
	Dfn         DFN        "dfn"        "Specifies a term that is going to be defined within the content.",
	Dialog      DIALOG     "dialog"     "Defines a dialog box or window.",
	Dir         DIR        "dir"        "Defines a directory list." ! "Not supported in HTML5. Use <ul> instead.",
	Div         DIV        "div"        "Defines a section in a document.",
	Dl          DL         "dl"         "Defines a description list.",
	Dt          DT         "dt"         "Defines a term/name in a description list.",
	Em          EM         "em"         "Defines emphasized text.",
	Embed       EMBED      "embed"      "Defines a container for an external application.",
	Fieldset    FIELDSET   "fieldset"   "Groups related elements in a form.",
	Figcaption  FIGCAPTION "figcaption" "Defines a caption for a <figure> element.",
	Figure      FIGURE     "figure"     "Specifies self-contained content.",
	Font        FONT       "font"       "Defines font, color, and size for text." ! "Not supported in HTML5. Use CSS instead.",
	Footer      FOOTER     "footer"     "Defines a footer for a document or section.",
	Form        FORM       "form"       "Defines an HTML form for user input.",
	Frame       FRAME      "frame"      "Defines a window (a frame) in a frameset." ! "Not supported in HTML5.",
	Frameset    FRAMESET   "frameset"   "Defines a set of frames." ! "Not supported in HTML5.",
	H1          H1         "H1"         "Defines HTML headings.",
	H2          H2         "H2"         "Defines HTML headings.",
	H3          H3         "H3"         "Defines HTML headings.",
	H4          H4         "H4"         "Defines HTML headings.",
	H5          H5         "H5"         "Defines HTML headings.",
	H6          H6         "H6"         "Defines HTML headings.",
	Head        HEAD       "head"       "Contains metadata/information for the document.",
	Header      HEADER     "header"     "Defines a header for a document or section.",
	HGroup      HGROUP     "hgroup"     "Defines a header and related content.",
	Hr          HR         "hr"         "Defines a thematic change in the content.",
	Html        HTML       "html"       "Defines the root of an HTML document.",
	I           I          "i"          "Defines a part of text in an alternate voice or mood.",
	Iframe      IFRAME     "iframe"     "Defines an inline frame.",
	Img         IMG        "img"        "Defines an image.",
	Input       INPUT      "input"      "Defines an input control.",
	Ins         INS        "ins"        "Defines a text that has been inserted into a document.",
	Kbd         KBD        "kbd"        "Defines keyboard input.",
	Label       LABEL      "label"      "Defines a label for an <input> element.",
	Legend      LEGEND     "legend"     "Defines a caption for a <fieldset> element.",
	Li          LI         "li"         "Defines a list item.",
	Link        LINK       "link"       "Defines the relationship between a document and an external resource (most used to link to style sheets).",
	Main        MAIN       "main"       "Specifies the main content of a document.",
	Map         MAP        "map"        "Defines an image map.",
	Mark        MARK       "mark"       "Defines marked/highlighted text.",
	Menu        MENU       "menu"       "Defines an unordered list.",
	Meta        META       "meta"       "Defines metadata about an HTML document.",
	Meter       METER      "meter"      "Defines a scalar measurement within a known range (a gauge).",
	Nav         NAV        "nav"        "Defines navigation links.",
	NoFrames    NOFRAMES   "noframes"   "Defines an alternate content for users that do not support frames." ! "Not supported in HTML5.",
	NoScript    NOSCRIPT   "noscript"   "Defines an alternate content for users that do not support client-side scripts.",
	Object      OBJECT     "object"     "Defines a container for an external application.",
	Ol          OL         "ol"         "Defines an ordered list.",
	OptionGroup OPTGROUP   "optgroup"   "Defines a group of related options in a drop-down list.",
	Option      OPTION     "option"     "Defines an option in a drop-down list.",
	Output      OUTPUT     "output"     "Defines the result of a calculation.",
	P           P          "p"          "Defines a paragraph.",
	Param       PARAM      "param"      "Defines a parameter for an object.",
	Picture     PICTURE    "picture"    "Defines a container for multiple image resources.",
	Pre         PRE        "pre"        "Defines preformatted text.",
	Progress    PROGRESS   "progress"   "Represents the progress of a task.",
	Q           Q          "q"          "Defines a short quotation.",
	Rb          RB         "rb"         "Defines what to show in browsers that do not support ruby annotations.",
	Rt          RT         "rt"         "Defines an explanation/pronunciation of characters (for East Asian typography).",
	Ruby        RUBY       "ruby"       "Defines a ruby annotation (for East Asian typography).",
	S           S          "s"          "Defines text that is no longer correct.",
	Samp        SAMP       "samp"       "Defines sample output from a computer program.",
	Script      SCRIPT     "script"     "Defines a client-side script.",
	Search      SEARCH     "search"     "Defines a search section.",
	Section     SECTION    "section"    "Defines a section in a document.",
	Select      SELECT     "select"     "Defines a drop-down list.",
	Small       SMALL      "small"      "Defines smaller text.",
	Source      SOURCE     "source"     "Defines multiple media resources for media elements (<video> and <audio>).",
	Span        SPAN       "span"       "Defines a section in a document.",
	Strike      STRIKE     "strike"     "Defines strikethrough text." ! "Not supported in HTML5. Use <del> or <s> instead.",
	Strong      STRONG     "strong"     "Defines important text.",
	Style       STYLE      "style"      "Defines style information for a document.",
	Sub         SUB        "sub"        "Defines subscripted text.",
	Summary     SUMMARY    "summary"    "Defines a visible heading for a <details> element.",
	Sup         SUP        "sup"        "Defines superscripted text.",
	Svg         SVG        "svg"        "Defines a container for SVG graphics.",
	Table       TABLE      "table"      "Defines a table.",
	Tbody       TBODY      "tbody"      "Groups the body content in a table.",
	Td          TD         "td"         "Defines a cell in a table.",
	Template    TEMPLATE   "template"   "Defines a container for content that should be hidden when the page loads.",
	Textarea    TEXTAREA   "textarea"   "Defines a multiline input control (text area).",
	Tfoot       TFOOT      "tfoot"      "Groups the footer content in a table.",
	Th          TH         "th"         "Defines a header cell in a table.",
	Thead       THEAD      "thead"      "Groups the header content in a table.",
	Time        TIME       "time"       "Defines a specific time (or datetime).",
	Title       TITLE      "title"      "Defines a title for the document.",
	Tr          TR         "tr"         "Defines a row in a table.",
	Track       TRACK      "track"      "Defines text tracks for media elements (<video> and <audio>).",
	Tt          TT         "tt"         "Defines teletype text." ! "Not supported in HTML5. Use CSS instead.",
	U           U          "u"          "Defines some text that is unarticulated and styled differently from normal text.",
	Ul          UL         "ul"         "Defines an unordered list.",
	Var         VAR        "var"        "Defines a variable.",
	Video       VIDEO      "video"      "Defines embedded video content.",
	Wbr         WBR        "wbr"        "Defines a possible line-break.",}

impl AsRef<str> for Tag {
	#[inline]
	fn as_ref(&self) -> &str { self.as_str() }
}

impl fmt::Display for Tag {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl From<Tag> for LocalName {
	#[inline]
	/// # Into Local Name.
	///
	/// This keeps the declared case; see [`Tag::qual_name`] for the
	/// parser-normalized version.
	fn from(src: Tag) -> Self { Self::from(src.as_str()) }
}

impl FromStr for Tag {
	type Err = NameError;

	fn from_str(src: &str) -> Result<Self, Self::Err> {
		let src = src.trim();
		if src.is_empty() { Err(NameError::Empty) }
		else { Self::from_name(src).ok_or(NameError::UnknownTag) }
	}
}

impl Tag {
	#[must_use]
	/// # From Name.
	///
	/// Find the tag matching `name`, ignoring (ASCII) case.
	///
	/// ## Examples
	///
	/// ```
	/// use htmlprops::Tag;
	///
	/// assert_eq!(Tag::from_name("IMG"), Some(Tag::Img));
	/// assert_eq!(Tag::from_name("h1"), Some(Tag::H1));
	/// assert_eq!(Tag::from_name("blink"), None);
	/// ```
	pub fn from_name(name: &str) -> Option<Self> {
		Self::ALL.iter().copied().find(|t| t.as_str().eq_ignore_ascii_case(name))
	}

	#[must_use]
	/// # From Qualified Name.
	///
	/// Same as [`Tag::from_name`], but only matches names in the HTML
	/// namespace.
	pub fn from_qual_name(name: &QualName) -> Option<Self> {
		if name.ns == ns!(html) { Self::from_name(&name.local) }
		else { None }
	}

	#[must_use]
	/// # Qualified Name.
	///
	/// Return the tag as an `html5ever` qualified name in the HTML namespace.
	/// The local part is lowercased to match what the parser would produce.
	pub fn qual_name(self) -> QualName {
		let raw = self.as_str();
		let local =
			if raw.bytes().any(|b| b.is_ascii_uppercase()) {
				LocalName::from(raw.to_ascii_lowercase())
			}
			else { LocalName::from(raw) };

		QualName::new(None, ns!(html), local)
	}

	#[must_use]
	/// # Is Deprecated?
	pub const fn is_deprecated(self) -> bool { self.deprecation().is_some() }

	#[must_use]
	/// # Is Void?
	///
	/// Void elements never have children, so never get closing tags.
	pub const fn is_void(self) -> bool {
		matches!(
			self,
			Self::Area |
			Self::Base |
			Self::BaseFont |
			Self::Br |
			Self::Col |
			Self::Embed |
			Self::Frame |
			Self::Hr |
			Self::Img |
			Self::Input |
			Self::Link |
			Self::Meta |
			Self::Param |
			Self::Source |
			Self::Track |
			Self::Wbr
		)
	}

	/// # Tag-Specific Attributes.
	///
	/// Return the attributes documented as applying to this tag in particular.
	/// Global attributes like `class` or `id` are not included.
	///
	/// This is advisory; nothing stops any attribute from being set on any
	/// tag.
	pub fn attributes(self) -> impl Iterator<Item = Attr> {
		Attr::ALL.iter().copied().filter(move |a| a.applies_to().contains(&self))
	}
}



#[cfg(test)]
mod tests {
	use super::*;
	use html5ever::local_name;
	use std::collections::BTreeSet;

	#[test]
	fn t_values() {
		for tag in Tag::ALL.iter().copied() {
			let v = tag.as_str();
			assert!(! v.is_empty(), "Empty tag: {tag:?}");
			assert!(
				v.bytes().all(|b| b.is_ascii_alphanumeric()),
				"Invalid tag token: {v:?}",
			);
			assert!(! tag.description().is_empty());
		}

		assert_eq!(Tag::ALL.len(), 124);
		assert_eq!(Tag::A.as_str(), "a");
		assert_eq!(Tag::Img.as_str(), "img");
		assert_eq!(Tag::OptionGroup.as_str(), "optgroup");
		assert_eq!(Tag::NoScript.as_str(), "noscript");
		assert_eq!(Tag::Search.as_str(), "search");
		assert_eq!(Tag::Wbr.as_str(), "wbr");

		// Headings are declared upper-case.
		for (tag, v) in [
			(Tag::H1, "H1"),
			(Tag::H2, "H2"),
			(Tag::H3, "H3"),
			(Tag::H4, "H4"),
			(Tag::H5, "H5"),
			(Tag::H6, "H6"),
		] {
			assert_eq!(tag.as_str(), v);
		}
	}

	#[test]
	fn t_constants() {
		assert_eq!(t::IMG, Tag::Img.as_str());
		assert_eq!(t::OPTGROUP, Tag::OptionGroup.as_str());
		assert_eq!(t::H1, "H1");
		assert_eq!(t::FONT, Tag::Font.as_str());
	}

	#[test]
	fn t_unique() {
		let set: BTreeSet<&str> = Tag::ALL.iter().map(|t| t.as_str()).collect();
		assert_eq!(set.len(), Tag::ALL.len());

		// The enum should be unique too, obviously.
		let set: BTreeSet<Tag> = Tag::ALL.iter().copied().collect();
		assert_eq!(set.len(), Tag::ALL.len());
	}

	#[test]
	fn t_deprecated() {
		let found: Vec<Tag> = Tag::ALL.iter()
			.copied()
			.filter(|t| t.is_deprecated())
			.collect();

		assert_eq!(
			found,
			[
				Tag::Acronym, Tag::BaseFont, Tag::Big, Tag::Center, Tag::Dir,
				Tag::Font, Tag::Frame, Tag::Frameset, Tag::NoFrames, Tag::Strike,
				Tag::Tt,
			],
		);

		assert_eq!(
			Tag::Strike.deprecation(),
			Some("Not supported in HTML5. Use <del> or <s> instead."),
		);
		assert_eq!(Tag::Div.deprecation(), None);
	}

	#[test]
	fn t_from_name() {
		for tag in Tag::ALL.iter().copied() {
			assert_eq!(Tag::from_name(tag.as_str()), Some(tag));
			assert_eq!(Tag::from_name(&tag.as_str().to_ascii_uppercase()), Some(tag));
			assert_eq!(tag.as_str().parse::<Tag>(), Ok(tag));
		}

		assert_eq!(" h2 ".parse::<Tag>(), Ok(Tag::H2));
		assert_eq!("".parse::<Tag>(), Err(NameError::Empty));
		assert_eq!("  ".parse::<Tag>(), Err(NameError::Empty));
		assert_eq!("marquee".parse::<Tag>(), Err(NameError::UnknownTag));
	}

	#[test]
	fn t_qual_name() {
		assert_eq!(
			Tag::Img.qual_name(),
			QualName::new(None, ns!(html), local_name!("img")),
		);
		assert_eq!(Tag::H1.qual_name().local, local_name!("h1"));

		for tag in Tag::ALL.iter().copied() {
			assert_eq!(Tag::from_qual_name(&tag.qual_name()), Some(tag));
		}

		// Wrong namespace.
		let svg = QualName::new(None, ns!(svg), local_name!("title"));
		assert_eq!(Tag::from_qual_name(&svg), None);

		// Plain local names keep their case.
		assert_eq!(LocalName::from(Tag::H3), LocalName::from("H3"));
	}

	#[test]
	fn t_void() {
		for tag in [Tag::Br, Tag::Img, Tag::Input, Tag::Meta, Tag::Wbr] {
			assert!(tag.is_void(), "Expected void: {tag}");
		}
		for tag in [Tag::Div, Tag::Iframe, Tag::Script, Tag::Textarea] {
			assert!(! tag.is_void(), "Expected non-void: {tag}");
		}
	}

	#[test]
	fn t_attributes() {
		let found: Vec<Attr> = Tag::Ol.attributes().collect();
		assert_eq!(found, [Attr::Reversed, Attr::Start]);

		// Globals aren't listed.
		assert!(! Tag::Div.attributes().any(|a| a == Attr::Class));
		assert_eq!(Tag::Div.attributes().count(), 0);
	}
}
