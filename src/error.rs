/*!
# HTMLProps: Errors
*/

use std::{
	error::Error,
	fmt,
};



#[derive(Debug, Copy, Clone, Eq, PartialEq)]
/// # Name Error.
///
/// This is returned when parsing a string into a [`Tag`](crate::Tag) or
/// [`Attr`](crate::Attr) fails.
pub enum NameError {
	/// # Empty Name.
	Empty,

	/// # Unknown Tag.
	UnknownTag,

	/// # Unknown Attribute.
	UnknownAttr,
}

impl AsRef<str> for NameError {
	#[inline]
	fn as_ref(&self) -> &str { self.as_str() }
}

impl fmt::Display for NameError {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl Error for NameError {}

impl NameError {
	#[must_use]
	/// # As Str.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Empty => "The name is empty.",
			Self::UnknownTag => "Unknown HTML tag.",
			Self::UnknownAttr => "Unknown HTML attribute.",
		}
	}
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_display() {
		for e in [NameError::Empty, NameError::UnknownTag, NameError::UnknownAttr] {
			assert_eq!(e.to_string(), e.as_str());
			assert_eq!(e.as_ref(), e.as_str());
		}
	}
}
