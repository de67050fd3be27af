/*!
# HTMLProps: Attributes.

Every HTML attribute name we know about, as an `Attr` enum and as plain string
constants under `a`.

Many attributes only make sense on particular elements. That relationship is
recorded here as [`Attr::applies_to`], but it is purely informational. Nothing
in this crate refuses to write an attribute to the "wrong" tag.
*/

#![expect(deprecated, reason = "The table references its own deprecated entries.")]

use crate::{
	NameError,
	Tag,
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



/// # Helper: Attribute Table.
///
/// Each row is `Variant CONST "value" "description"`, optionally followed by
/// a `[Tag, …]` list of the elements it applies to (none means global), and
/// `! "note"` for deprecated entries.
macro_rules! attrs {
	(
		$(
			$var:ident $k:ident $v:literal $desc:literal
			$( [ $($tag:ident),+ ] )?
			$(! $note:literal)?,
		)+
	) => (
		#[derive(Debug, Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
		/// # HTML Attribute.
		///
		/// The string value of each variant is available via [`Attr::as_str`],
		/// or directly as a constant in the [`a`] module.
		pub enum Attr {
			$(
				#[doc = concat!("# `", $v, "`\n\n", $desc)]
				$( #[deprecated(note = $note)] )?
				$var,
			)+
		}

		impl Attr {
			/// # All Attributes.
			pub const ALL: &'static [Self] = &[ $( Self::$var ),+ ];

			#[must_use]
			/// # As Str.
			///
			/// ## Examples
			///
			/// ```
			/// use htmlprops::Attr;
			///
			/// assert_eq!(Attr::Src.as_str(), "src");
			/// assert_eq!(Attr::AriaLabel.as_str(), "aria-label");
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
			pub const fn deprecation(self) -> Option<&'static str> {
				match self { $( Self::$var => attrs!(@note $($note)?) ),+ }
			}

			#[must_use]
			/// # Applicable Tags.
			///
			/// Return the tags this attribute is documented as being valid
			/// for. An empty slice means it is a global attribute.
			pub const fn applies_to(self) -> &'static [Tag] {
				match self { $( Self::$var => &[ $($( Tag::$tag ),+)? ] ),+ }
			}
		}

		/// # Attribute Name Constants.
		pub mod a {
			$(
				#[doc = concat!("`", $v, "`")]
				$( #[deprecated(note = $note)] )?
				pub const $k: &str = $v;
			)+
		}
	);

	(@note) => ( None );
	(@note $note:literal) => ( Some($note) );
}

attrs! {
	Accept              ACCEPT              "accept"              "Specifies the types of files that the server accepts (only for type=\"file\")." [Input],
	AcceptCharset       ACCEPT_CHARSET      "accept-charset"      "Specifies the character encodings that are to be used for the form submission." [Form],
	AccessKey           ACCESSKEY           "accesskey"           "Specifies a shortcut key to activate/focus an element.",
	Action              ACTION              "action"              "Specifies where to send the form-data when a form is submitted." [Form],
	Align               ALIGN               "align"               "Specifies the alignment according to surrounding elements. Use CSS instead." ! "Not supported in HTML 5.",
	Alt                 ALT                 "alt"                 "Specifies an alternate text when the original element fails to display." [Area, Img, Input],
	Async               ASYNC               "async"               "Specifies that the script is executed asynchronously (only for external scripts)." [Script],
	Autocomplete        AUTOCOMPLETE        "autocomplete"        "Specifies whether the <form> or the <input> element should have autocomplete enabled." [Form, Input],
	Autofocus           AUTOFOCUS           "autofocus"           "Specifies that the element should automatically get focus when the page loads." [Button, Input, Select, Textarea],
	Autoplay            AUTOPLAY            "autoplay"            "Specifies that the audio/video will start playing as soon as it is ready." [Audio, Video],
	AriaLabel           ARIA_LABEL          "aria-label"          "Specifies that the HTML <aria-label> attribute be written to the tag.",
	AriaExpanded        ARIA_EXPANDED       "aria-expanded"       "Specifies that the HTML <aria-expanded> attribute be written to the tag.",
	Bgcolor             BGCOLOR             "bgcolor"             "Specifies the background color of an element. Use CSS instead." ! "Not supported in HTML 5.",
	Border              BORDER              "border"              "Specifies the width of the border of an element. Use CSS instead." ! "Not supported in HTML 5.",
	Charset             CHARSET             "charset"             "Specifies the character encoding." [Meta, Script],
	Checked             CHECKED             "checked"             "Specifies that an <input> element should be pre-selected when the page loads (for type=\"checkbox\" or type=\"radio\")." [Input],
	Cite                CITE                "cite"                "Specifies a URL which explains the quote/deleted/inserted text." [Blockquote, Del, Ins, Q],
	Class               CLASS               "class"               "Specifies one or more class names for an element (refers to a class in a style sheet).",
	Color               COLOR               "color"               "Specifies the text color of an element. Use CSS instead." ! "Not supported in HTML 5.",
	Cols                COLS                "cols"                "Specifies the visible width of a text area." [Textarea],
	Colspan             COLSPAN             "colspan"             "Specifies the number of columns a table cell should span." [Td, Th],
	Content             CONTENT             "content"             "Gives the value associated with the http-equiv or name attribute." [Meta],
	Contenteditable     CONTENTEDITABLE     "contenteditable"     "Specifies whether the content of an element is editable or not.",
	Controls            CONTROLS            "controls"            "Specifies that audio/video controls should be displayed (such as a play/pause button etc.)." [Audio, Video],
	Coords              COORDS              "coords"              "Specifies the coordinates of the area." [Area],
	Data                DATA                "data"                "Specifies the URL of the resource to be used by the object." [Object],
	Datetime            DATETIME            "datetime"            "Specifies the date and time." [Del, Ins, Time],
	Default             DEFAULT             "default"             "Specifies that the track is to be enabled if the user's preferences do not indicate that another track would be more appropriate." [Track],
	Defer               DEFER               "defer"               "Specifies that the script is executed when the page has finished parsing (only for external scripts)." [Script],
	Dir                 DIR                 "dir"                 "Specifies the text direction for the content in an element.",
	Dirname             DIRNAME             "dirname"             "Specifies that the text direction will be submitted." [Input, Textarea],
	Disabled            DISABLED            "disabled"            "Specifies that the specified element/group of elements should be disabled." [Button, Input, OptionGroup, Option, Select],
	Download            DOWNLOAD            "download"            "Specifies that the target will be downloaded when a user clicks on the hyperlink." [A, Area],
	Draggable           DRAGGABLE           "draggable"           "Specifies whether an element is draggable or not.",
	Enctype             ENCTYPE             "enctype"             "Specifies how the form-data should be encoded when submitting it to the server (only for method=\"post\")." [Form],
	Enterkeyhint        ENTERKEYHINT        "enterkeyhint"        "Specifies the text of the enter-key on a virtual keyboard.",
	For                 FOR                 "for"                 "Specifies which form element(s) a label/calculation is bound to." [Label, Output],
	Form                FORM                "form"                "Specifies the name of the form the element belongs to." [Button, Fieldset, Input, Label, Meter, Object, Output, Select, Textarea],
	Formaction          FORMACTION          "formaction"          "Specifies where to send the form-data when a form is submitted. Only for type=\"submit\"." [Button, Input],
	Headers             HEADERS             "headers"             "Specifies one or more headers cells a cell is related to." [Td, Th],
	Height              HEIGHT              "height"              "Specifies the height of the element." [Canvas, Embed, Iframe, Img, Input, Object, Video],
	Hidden              HIDDEN              "hidden"              "Specifies that an element is not yet, or is no longer, relevant.",
	High                HIGH                "high"                "Specifies the range that is considered to be a high value." [Meter],
	Href                HREF                "href"                "Specifies the URL of the page the link goes to." [A, Area, Base, Link],
	Hreflang            HREFLANG            "hreflang"            "Specifies the language of the linked document." [A, Area, Link],
	HttpEquiv           HTTP_EQUIV          "http-equiv"          "Provides an HTTP header for the information/value of the content attribute." [Meta],
	Id                  ID                  "id"                  "Specifies a unique id for an element.",
	Inert               INERT               "inert"               "Specifies that the browser should ignore this section.",
	InputMode           INPUTMODE           "inputmode"           "Specifies the mode of a virtual keyboard.",
	Ismap               ISMAP               "ismap"               "Specifies an image as a server-side image map." [Img],
	Kind                KIND                "kind"                "Specifies the kind of text track." [Track],
	Label               LABEL               "label"               "Specifies the title of the text track." [Track, Option, OptionGroup],
	Lang                LANG                "lang"                "Specifies the language of the element's content.",
	List                LIST                "list"                "Refers to a <datalist> element that contains pre-defined options for an <input> element." [Input],
	Loop                LOOP                "loop"                "Specifies that the audio/video will start over again, every time it is finished." [Audio, Video],
	Low                 LOW                 "low"                 "Specifies the range that is considered to be a low value." [Meter],
	Max                 MAX                 "max"                 "Specifies the maximum value." [Input, Meter, Progress],
	Maxlength           MAXLENGTH           "maxlength"           "Specifies the maximum number of characters allowed in an element." [Input, Textarea],
	Media               MEDIA               "media"               "Specifies what media/device the linked document is optimized for." [A, Area, Link, Source, Style],
	Method              METHOD              "method"              "Specifies the HTTP method to use when sending form-data." [Form],
	Min                 MIN                 "min"                 "Specifies a minimum value." [Input, Meter],
	Multiple            MULTIPLE            "multiple"            "Specifies that a user can enter more than one value." [Input, Select],
	Muted               MUTED               "muted"               "Specifies that the audio output of the video should be muted." [Video, Audio],
	Name                NAME                "name"                "Specifies the name of the element." [Button, Fieldset, Form, Iframe, Input, Map, Meta, Object, Output, Param, Select, Textarea],
	Novalidate          NOVALIDATE          "novalidate"          "Specifies that the form should not be validated when submitted." [Form],
	Onabort             ONABORT             "onabort"             "Script to be run on abort." [Audio, Embed, Img, Object, Video],
	Onafterprint        ONAFTERPRINT        "onafterprint"        "Script to be run after the document is printed." [Body],
	Onbeforeprint       ONBEFOREPRINT       "onbeforeprint"       "Script to be run before the document is printed." [Body],
	Onbeforeunload      ONBEFOREUNLOAD      "onbeforeunload"      "Script to be run when the document is about to be unloaded." [Body],
	Onblur              ONBLUR              "onblur"              "Script to be run when the element loses focus.",
	Oncanplay           ONCANPLAY           "oncanplay"           "Script to be run when a file is ready to start playing (when it has buffered enough to begin)." [Audio, Embed, Object, Video],
	Oncanplaythrough    ONCANPLAYTHROUGH    "oncanplaythrough"    "Script to be run when a file can be played all the way to the end without pausing for buffering." [Audio, Video],
	Onchange            ONCHANGE            "onchange"            "Script to be run when the value of the element is changed.",
	Onclick             ONCLICK             "onclick"             "Script to be run when the element is being clicked.",
	Oncontextmenu       ONCONTEXTMENU       "oncontextmenu"       "Script to be run when a context menu is triggered.",
	Oncopy              ONCOPY              "oncopy"              "Script to be run when the content of the element is being copied.",
	Oncuechange         ONCUECHANGE         "oncuechange"         "Script to be run when the cue changes in a <track> element." [Track],
	Oncut               ONCUT               "oncut"               "Script to be run when the content of the element is being cut.",
	Ondblclick          ONDBLCLICK          "ondblclick"          "Script to be run when the element is being double-clicked.",
	Ondrag              ONDRAG              "ondrag"              "Script to be run when the element is being dragged.",
	Ondragend           ONDRAGEND           "ondragend"           "Script to be run at the end of a drag operation.",
	Ondragenter         ONDRAGENTER         "ondragenter"         "Script to be run when an element has been dragged to a valid drop target.",
	Ondragleave         ONDRAGLEAVE         "ondragleave"         "Script to be run when an element leaves a valid drop target.",
	Ondragover          ONDRAGOVER          "ondragover"          "Script to be run when an element is being dragged over a valid drop target.",
	Ondragstart         ONDRAGSTART         "ondragstart"         "Script to be run at the start of a drag operation.",
	Ondrop              ONDROP              "ondrop"              "Script to be run when dragged element is being dropped.",
	Ondurationchange    ONDURATIONCHANGE    "ondurationchange"    "Script to be run when the length of the media changes." [Audio, Video],
	Onemptied           ONEMPTIED           "onemptied"           "Script to be run when something bad happens and the file is suddenly unavailable(like unexpectedly disconnects)." [Audio, Video],
	Onended             ONENDED             "onended"             "Script to be run when the media has reach the end (a useful event for messages like \"thanks for listening\")." [Audio, Video],
	Onerror             ONERROR             "onerror"             "Script to be run when an error occurs." [Audio, Body, Embed, Img, Object, Script, Style, Video],
	Onfocus             ONFOCUS             "onfocus"             "Script to be run when the element gets focus.",
	Onhashchange        ONHASHCHANGE        "onhashchange"        "Script to be run when there has been changes to the anchor part of the URL." [Body],
	Oninput             ONINPUT             "oninput"             "Script to be run when the element gets user input.",
	Oninvalid           ONINVALID           "oninvalid"           "Script to be run when the element is invalid.",
	Onkeydown           ONKEYDOWN           "onkeydown"           "Script to be run when a user is pressing a key.",
	Onkeypress          ONKEYPRESS          "onkeypress"          "Script to be run when a user presses a key.",
	Onkeyup             ONKEYUP             "onkeyup"             "Script to be run when a user releases a key.",
	Onload              ONLOAD              "onload"              "Script to be run when the element is finished loading." [Body, Iframe, Img, Input, Link, Script, Style],
	Onloadeddata        ONLOADEDDATA        "onloadeddata"        "Script to be run when media data is loaded." [Audio, Video],
	Onloadedmetadata    ONLOADEDMETADATA    "onloadedmetadata"    "Script to be run when meta data (like dimensions and duration) are loaded." [Audio, Video],
	Onloadstart         ONLOADSTART         "onloadstart"         "Script to be run just as the file begins to load before anything is actually loaded." [Audio, Video],
	Onmousedown         ONMOUSEDOWN         "onmousedown"         "Script to be run when a mouse button is pressed down on an element.",
	Onmousemove         ONMOUSEMOVE         "onmousemove"         "Script to be run as long as the mouse pointer is moving over an element.",
	Onmouseout          ONMOUSEOUT          "onmouseout"          "Script to be run when a mouse pointer moves out of an element.",
	Onmouseover         ONMOUSEOVER         "onmouseover"         "Script to be run when a mouse pointer moves over an element.",
	Onmouseup           ONMOUSEUP           "onmouseup"           "Script to be run when a mouse button is released over an element.",
	Onmousewheel        ONMOUSEWHEEL        "onmousewheel"        "Script to be run when a mouse wheel is being scrolled over an element.",
	Onoffline           ONOFFLINE           "onoffline"           "Script to be run when the browser starts to work offline." [Body],
	Ononline            ONONLINE            "ononline"            "Script to be run when the browser starts to work online." [Body],
	Onpagehide          ONPAGEHIDE          "onpagehide"          "Script to be run when a user navigates away from a page." [Body],
	Onpageshow          ONPAGESHOW          "onpageshow"          "Script to be run when a user navigates to a page." [Body],
	Onpaste             ONPASTE             "onpaste"             "Script to be run when the user pastes some content in an element.",
	Onpause             ONPAUSE             "onpause"             "Script to be run when the media is paused either by the user or programmatically." [Audio, Video],
	Onplay              ONPLAY              "onplay"              "Script to be run when the media has started playing." [Audio, Video],
	Onplaying           ONPLAYING           "onplaying"           "Script to be run when the media has started playing." [Audio, Video],
	Onpopstate          ONPOPSTATE          "onpopstate"          "Script to be run when the window's history changes." [Body],
	Onprogress          ONPROGRESS          "onprogress"          "Script to be run when the browser is in the process of getting the media data." [Audio, Video],
	Onratechange        ONRATECHANGE        "onratechange"        "Script to be run each time the playback rate changes (like when a user switches to a slow motion or fast forward mode)." [Audio, Video],
	Onreset             ONRESET             "onreset"             "Script to be run when a reset button in a form is clicked." [Form],
	Onresize            ONRESIZE            "onresize"            "Script to be run when the browser window is being resized." [Body],
	Onscroll            ONSCROLL            "onscroll"            "Script to be run when an element's scrollbar is being scrolled.",
	Onsearch            ONSEARCH            "onsearch"            "Script to be run when the user writes something in a search field (for <input type=\"search\">)." [Input],
	Onseeked            ONSEEKED            "onseeked"            "Script to be run when the seeking attribute is set to false indicating that seeking has ended." [Audio, Video],
	Onseeking           ONSEEKING           "onseeking"           "Script to be run when the seeking attribute is set to true indicating that seeking is active." [Audio, Video],
	Onselect            ONSELECT            "onselect"            "Script to be run when the element gets selected.",
	Onstalled           ONSTALLED           "onstalled"           "Script to be run when the browser is unable to fetch the media data for whatever reason." [Audio, Video],
	Onstorage           ONSTORAGE           "onstorage"           "Script to be run when a Web Storage area is updated." [Body],
	Onsubmit            ONSUBMIT            "onsubmit"            "Script to be run when a form is submitted." [Form],
	Onsuspend           ONSUSPEND           "onsuspend"           "Script to be run when fetching the media data is stopped before it is completely loaded for whatever reason." [Audio, Video],
	Ontimeupdate        ONTIMEUPDATE        "ontimeupdate"        "Script to be run when the playing position has changed (like when the user fast forwards to a different point in the media)." [Audio, Video],
	Ontoggle            ONTOGGLE            "ontoggle"            "Script to be run when the user opens or closes the <details> element." [Details],
	Onunload            ONUNLOAD            "onunload"            "Script to be run when a page has unloaded (or the browser window has been closed)." [Body],
	Onvolumechange      ONVOLUMECHANGE      "onvolumechange"      "Script to be run each time the volume of a video/audio has been changed." [Audio, Video],
	Onwaiting           ONWAITING           "onwaiting"           "Script to be run when the media has paused but is expected to resume (like when the media pauses to buffer more data)." [Audio, Video],
	Onwheel             ONWHEEL             "onwheel"             "Script to be run when the mouse wheel rolls up or down over an element.",
	Open                OPEN                "open"                "Specifies that the details should be visible (open) to the user." [Details],
	Optimum             OPTIMUM             "optimum"             "Specifies what value is the optimal value for the gauge." [Meter],
	Pattern             PATTERN             "pattern"             "Specifies a regular expression that an <input> element's value is checked against." [Input],
	Placeholder         PLACEHOLDER         "placeholder"         "Specifies a short hint that describes the expected value of the element." [Input, Textarea],
	Popover             POPOVER             "popover"             "Specifies a popover element.",
	Popovertarget       POPOVERTARGET       "popovertarget"       "Specifies which popover element to invoke." [Button, Input],
	Popovertargetaction POPOVERTARGETACTION "popovertargetaction" "Specifies what happens to the popover element when the button is clicked." [Button, Input],
	Poster              POSTER              "poster"              "Specifies an image to be shown while the video is downloading, or until the user hits the play button." [Video],
	Preload             PRELOAD             "preload"             "Specifies if and how the author thinks the audio/video should be loaded when the page loads." [Audio, Video],
	Readonly            READONLY            "readonly"            "Specifies that the element is read-only." [Input, Textarea],
	Rel                 REL                 "rel"                 "Specifies the relationship between the current document and the linked document." [A, Area],
	Required            REQUIRED            "required"            "Specifies that the element must be filled out before submitting the form." [Input, Select, Textarea],
	Reversed            REVERSED            "reversed"            "Specifies that the list order should be descending (9,8,7...)." [Ol],
	Role                ROLE                "role"                "Specifies that the HTML <role> attribute be written to the tag.",
	Rows                ROWS                "rows"                "Specifies the visible number of lines in a text area." [Textarea],
	Rowspan             ROWSPAN             "rowspan"             "Specifies the number of rows a table cell should span." [Td, Th],
	Sandbox             SANDBOX             "sandbox"             "Enables an extra set of restrictions for the content in an <iframe>." [Iframe],
	Scope               SCOPE               "scope"               "Specifies whether a header cell is a header for a column, row, or group of columns or rows." [Th],
	Selected            SELECTED            "selected"            "Specifies that an option should be pre-selected when the page loads." [Option],
	Shape               SHAPE               "shape"               "Specifies the shape of the area." [Area],
	Size                SIZE                "size"                "Specifies the width, in characters (for <input>) or specifies the number of visible options(for < select>)." [Input, Select],
	Sizes               SIZES               "sizes"               "Specifies the size of the linked resource." [Img, Link],
	Span                SPAN                "span"                "Specifies the number of columns to span." [Col, ColGroup],
	Spellcheck          SPELLCHECK          "spellcheck"          "Specifies whether the element is to have its spelling and grammar checked or not.",
	Src                 SRC                 "src"                 "Specifies the URL of the media file." [Audio, Embed, Iframe, Img, Input, Script, Source, Track],
	Srcdoc              SRCDOC              "srcdoc"              "Specifies the HTML content of the page to show in the <iframe>." [Iframe],
	Srclang             SRCLANG             "srclang"             "Specifies the language of the track text data (required if kind=\"subtitles\")." [Track],
	Srcset              SRCSET              "srcset"              "Specifies the URL of the image to use in different situations." [Img, Source],
	Start               START               "start"               "Specifies the start value of an ordered list." [Ol],
	Step                STEP                "step"                "Specifies the legal number intervals for an input field." [Input],
	Style               STYLE               "style"               "Specifies an inline CSS style for an element.",
	Tabindex            TABINDEX            "tabindex"            "Specifies the tabbing order of an element.",
	Target              TARGET              "target"              "Specifies the target for where to open the linked document or where to submit the form." [A, Area, Base, Form],
	Title               TITLE               "title"               "Specifies extra information about an element.",
	Translate           TRANSLATE           "translate"           "Specifies whether the content of an element should be translated or not.",
	Type                TYPE                "type"                "Specifies the type of element." [A, Button, Embed, Input, Link, Menu, Object, Script, Source, Style],
	UseMap              USEMAP              "usemap"              "Specifies an image as a client-side image map." [Img, Object],
	Value               VALUE               "value"               "Specifies the value of the element." [Button, Input, Li, Option],
	Width               WIDTH               "width"               "Specifies the width of the element." [Canvas, Embed, Iframe, Img, Input, Object, Video],
	Wrap                WRAP                "wrap"                "Specifies how the text in a text area is to be wrapped when submitted in a form." [Textarea],}

impl AsRef<str> for Attr {
	#[inline]
	fn as_ref(&self) -> &str { self.as_str() }
}

impl fmt::Display for Attr {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl From<Attr> for LocalName {
	#[inline]
	fn from(src: Attr) -> Self { Self::from(src.as_str()) }
}

impl FromStr for Attr {
	type Err = NameError;

	fn from_str(src: &str) -> Result<Self, Self::Err> {
		let src = src.trim();
		if src.is_empty() { Err(NameError::Empty) }
		else { Self::from_name(src).ok_or(NameError::UnknownAttr) }
	}
}

impl Attr {
	#[must_use]
	/// # From Name.
	///
	/// Find the attribute matching `name`, ignoring (ASCII) case.
	pub fn from_name(name: &str) -> Option<Self> {
		Self::ALL.iter().copied().find(|a| a.as_str().eq_ignore_ascii_case(name))
	}

	#[must_use]
	/// # Qualified Name.
	///
	/// HTML attributes live in the null namespace.
	pub fn qual_name(self) -> QualName {
		QualName::new(None, ns!(), LocalName::from(self))
	}

	#[must_use]
	/// # Is Deprecated?
	pub const fn is_deprecated(self) -> bool { self.deprecation().is_some() }

	#[must_use]
	/// # Is Global?
	///
	/// Returns `true` if the attribute isn't tied to any particular tag.
	pub const fn is_global(self) -> bool { self.applies_to().is_empty() }

	#[must_use]
	/// # Is Valid For Tag?
	///
	/// Returns `true` if the attribute is global or documented for `tag`.
	///
	/// ## Examples
	///
	/// ```
	/// use htmlprops::{Attr, Tag};
	///
	/// assert!(Attr::Alt.is_valid_for(Tag::Img));
	/// assert!(! Attr::Alt.is_valid_for(Tag::Div));
	/// assert!(Attr::Class.is_valid_for(Tag::Div));
	/// ```
	pub fn is_valid_for(self, tag: Tag) -> bool {
		let list = self.applies_to();
		list.is_empty() || list.contains(&tag)
	}
}



#[cfg(test)]
mod tests {
	use super::*;
	use html5ever::local_name;
	use std::collections::BTreeSet;

	#[test]
	fn t_values() {
		for attr in Attr::ALL.iter().copied() {
			let v = attr.as_str();
			assert!(! v.is_empty(), "Empty attribute: {attr:?}");
			assert!(
				v.bytes().all(|b| b.is_ascii_lowercase() || b == b'-'),
				"Invalid attribute token: {v:?}",
			);
			assert!(! v.starts_with('-') && ! v.ends_with('-'));
			assert!(! attr.description().is_empty());
		}

		assert_eq!(Attr::ALL.len(), 175);
		assert_eq!(Attr::AcceptCharset.as_str(), "accept-charset");
		assert_eq!(Attr::AriaExpanded.as_str(), "aria-expanded");
		assert_eq!(Attr::HttpEquiv.as_str(), "http-equiv");
		assert_eq!(Attr::UseMap.as_str(), "usemap");
		assert_eq!(Attr::Type.as_str(), "type");
	}

	#[test]
	fn t_constants() {
		assert_eq!(a::SRC, Attr::Src.as_str());
		assert_eq!(a::ARIA_LABEL, "aria-label");
		assert_eq!(a::HTTP_EQUIV, "http-equiv");
		assert_eq!(a::BGCOLOR, Attr::Bgcolor.as_str());
	}

	#[test]
	fn t_unique() {
		let set: BTreeSet<&str> = Attr::ALL.iter().map(|a| a.as_str()).collect();
		assert_eq!(set.len(), Attr::ALL.len());
	}

	#[test]
	fn t_deprecated() {
		let found: Vec<Attr> = Attr::ALL.iter()
			.copied()
			.filter(|a| a.is_deprecated())
			.collect();
		assert_eq!(found, [Attr::Align, Attr::Bgcolor, Attr::Border, Attr::Color]);

		for attr in found {
			assert_eq!(attr.deprecation(), Some("Not supported in HTML 5."));
		}
	}

	#[test]
	fn t_applies_to() {
		assert_eq!(Attr::Alt.applies_to(), [Tag::Area, Tag::Img, Tag::Input]);
		assert_eq!(Attr::Reversed.applies_to(), [Tag::Ol]);
		assert!(Attr::Class.is_global());
		assert!(Attr::Id.is_global());
		assert!(! Attr::Src.is_global());

		// Malformed references are left out rather than guessed at.
		assert_eq!(Attr::Rel.applies_to(), [Tag::A, Tag::Area]);
		assert!(! Attr::Src.is_valid_for(Tag::Video));

		// Multi-line lists.
		assert_eq!(
			Attr::Type.applies_to(),
			[
				Tag::A, Tag::Button, Tag::Embed, Tag::Input, Tag::Link,
				Tag::Menu, Tag::Object, Tag::Script, Tag::Source, Tag::Style,
			],
		);
		assert!(Attr::Type.is_valid_for(Tag::Script));
		assert!(Tag::Input.attributes().any(|a| a == Attr::Type));
		assert_eq!(
			Attr::Name.applies_to(),
			[
				Tag::Button, Tag::Fieldset, Tag::Form, Tag::Iframe, Tag::Input,
				Tag::Map, Tag::Meta, Tag::Object, Tag::Output, Tag::Param,
				Tag::Select, Tag::Textarea,
			],
		);

		for attr in Attr::ALL.iter().copied() {
			let list = attr.applies_to();
			let set: BTreeSet<Tag> = list.iter().copied().collect();
			assert_eq!(set.len(), list.len(), "Duplicate tags for {attr}.");
			assert!(
				list.iter().all(|t| ! t.is_deprecated()),
				"Deprecated tag referenced by {attr}.",
			);
			for tag in list { assert!(attr.is_valid_for(*tag)); }
		}
	}

	#[test]
	fn t_from_name() {
		for attr in Attr::ALL.iter().copied() {
			assert_eq!(Attr::from_name(attr.as_str()), Some(attr));
			assert_eq!(attr.as_str().to_ascii_uppercase().parse::<Attr>(), Ok(attr));
		}

		assert_eq!("".parse::<Attr>(), Err(NameError::Empty));
		assert_eq!("data-foo".parse::<Attr>(), Err(NameError::UnknownAttr));
	}

	#[test]
	fn t_qual_name() {
		assert_eq!(
			Attr::Src.qual_name(),
			QualName::new(None, ns!(), local_name!("src")),
		);
		assert_eq!(Attr::HttpEquiv.qual_name().local, LocalName::from("http-equiv"));
	}
}
