/*!
# HTMLProps: Errors
*/

use htmlprops::NameError;
use std::{
	error::Error,
	fmt,
};



/// # Help Text.
const HELP: &str = concat!(r"
   <\/>
  <\  />    ", "\x1b[38;5;199mHTMLProps\x1b[0;38;5;69m v", env!("CARGO_PKG_VERSION"), "\x1b[0m", r#"
   <\/>     Look up HTML tag and attribute names.

USAGE:
    htmlprops [FLAGS] <NAME(S)>...

FLAGS:
    -a, --attributes  List all known attributes.
    -d, --deprecated  Only list deprecated entries.
    -h, --help        Print help information and exit.
    -t, --tags        List all known tags.
    -V, --version     Print program version and exit.

ARGS:
    <NAME(S)>...      One or more tag and/or attribute names to look up.
"#);



#[expect(clippy::missing_docs_in_private_items, reason = "Self-explanatory.")]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
/// # Generic Error.
pub(super) enum HtmlPropsError {
	Name(NameError),
	NoMatch,
	PrintHelp,    // Not an error.
	PrintVersion, // Not an error.
}

impl AsRef<str> for HtmlPropsError {
	#[inline]
	fn as_ref(&self) -> &str { self.as_str() }
}

impl fmt::Display for HtmlPropsError {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl Error for HtmlPropsError {}

impl From<NameError> for HtmlPropsError {
	#[inline]
	fn from(src: NameError) -> Self { Self::Name(src) }
}

impl HtmlPropsError {
	/// # As Str.
	pub(super) const fn as_str(self) -> &'static str {
		match self {
			Self::Name(e) => e.as_str(),
			Self::NoMatch => "One or more names could not be found.",
			Self::PrintHelp => HELP,
			Self::PrintVersion => concat!("HTMLProps v", env!("CARGO_PKG_VERSION")),
		}
	}
}
