use std::{borrow::Cow, str::Utf8Error};

use percent_encoding::percent_decode_str;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum DecodingError {
	#[error("escape at byte {offset} ends before its two hex digits")]
	TruncatedEscape { offset: usize },
	#[error("escape at byte {offset} isn't followed by two hex digits")]
	InvalidHexDigit { offset: usize },
	#[error("decoded name isn't valid utf-8: {0}")]
	InvalidUtf8(#[from] Utf8Error),
}

/// Decodes a single path segment the way a browser's `decodeURIComponent` would: every `%` has
/// to start a full `%XX` escape, the decoded bytes have to be utf-8, and `+` stays a `+`.
pub fn decode_attendee_name(raw: &str) -> Result<String, DecodingError> {
	let bytes = raw.as_bytes();

	// percent_decode_str just passes malformed escapes through as-is, so we have to catch them
	// before handing it the string
	for (offset, _) in raw.match_indices('%') {
		match bytes.get(offset + 1..offset + 3) {
			None => return Err(DecodingError::TruncatedEscape { offset }),
			Some(hex) if !hex.iter().all(u8::is_ascii_hexdigit) =>
				return Err(DecodingError::InvalidHexDigit { offset }),
			Some(_) => ()
		}
	}

	percent_decode_str(raw)
		.decode_utf8()
		.map(Cow::into_owned)
		.map_err(DecodingError::from)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn plain_names_pass_through() {
		assert_eq!(decode_attendee_name("John").as_deref(), Ok("John"));
		assert_eq!(decode_attendee_name("Anne-Marie").as_deref(), Ok("Anne-Marie"));
	}

	#[test]
	fn escapes_decode() {
		assert_eq!(decode_attendee_name("John%20Doe").as_deref(), Ok("John Doe"));
		assert_eq!(decode_attendee_name("100%25").as_deref(), Ok("100%"));
		assert_eq!(decode_attendee_name("Th%C3%A1i").as_deref(), Ok("Thái"));
		// lowercase hex is fine too
		assert_eq!(decode_attendee_name("%e2%9c%a8").as_deref(), Ok("✨"));
	}

	#[test]
	fn plus_is_not_a_space() {
		assert_eq!(decode_attendee_name("Jane+Doe").as_deref(), Ok("Jane+Doe"));
	}

	#[test]
	fn malformed_escapes_are_rejected() {
		assert_eq!(decode_attendee_name("%"), Err(DecodingError::TruncatedEscape { offset: 0 }));
		assert_eq!(decode_attendee_name("ab%4"), Err(DecodingError::TruncatedEscape { offset: 2 }));
		assert_eq!(decode_attendee_name("%zz"), Err(DecodingError::InvalidHexDigit { offset: 0 }));
		assert_eq!(decode_attendee_name("%%41"), Err(DecodingError::InvalidHexDigit { offset: 0 }));
	}

	#[test]
	fn bad_utf8_is_rejected() {
		assert!(matches!(decode_attendee_name("%C3"), Err(DecodingError::InvalidUtf8(_))));
		assert!(matches!(decode_attendee_name("%FF%FE"), Err(DecodingError::InvalidUtf8(_))));
	}
}
