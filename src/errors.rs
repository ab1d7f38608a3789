use failure::Fail;

#[derive(Debug, Clone, PartialEq, Eq, Fail)]
/// An error encountered when decoding fails.
///
/// Encoding into an in-memory buffer cannot fail, so this is the only error type the
/// codec produces.
pub enum DecodingError {
    /// A read, slice, or numeric conversion left its valid range.
    ///
    /// `value` is the offending index or magnitude and `target` names what it was
    /// checked against (a type name, a view size, or a variant count).
    #[fail(display = "value {} out of bounds for {}", value, target)]
    OutOfBounds {
        /// The offending value or index.
        value: i128,
        /// Description of the range that was exceeded.
        target: String,
    },
    /// The input ran out before a value was complete.
    #[fail(
        display = "unexpected end of input: needed {} bytes, {} remaining",
        needed, remaining
    )]
    UnexpectedEndOfInput {
        /// Bytes required by the read that failed.
        needed: usize,
        /// Bytes that were left in the input.
        remaining: usize,
    },
    /// A marker byte was not one of the markers valid for the expected kind.
    #[fail(display = "expected {}, got {:#04x}", expected, actual)]
    UnexpectedValue {
        /// The set of markers that would have been accepted.
        expected: &'static str,
        /// The byte that was found.
        actual: u8,
    },
    /// Bytes that should have been UTF-8 text were not.
    #[fail(display = "invalid utf-8 after {} valid bytes", valid_up_to)]
    InvalidEncoding {
        /// Length of the longest valid prefix.
        valid_up_to: usize,
    },
    /// The operation is not expressible in this format.
    #[fail(display = "unsupported operation: {}", _0)]
    UnsupportedOperation(&'static str),
}

impl DecodingError {
    /// Creates a [`DecodingError::OutOfBounds`].
    ///
    /// # Arguments
    ///
    /// * `value` - The offending value or index.
    /// * `target` - What the value was checked against.
    pub fn out_of_bounds<V: Into<i128>, S: Into<String>>(value: V, target: S) -> Self {
        DecodingError::OutOfBounds {
            value: value.into(),
            target: target.into(),
        }
    }

    /// Creates a [`DecodingError::UnexpectedEndOfInput`].
    pub fn end_of_input(needed: usize, remaining: usize) -> Self {
        DecodingError::UnexpectedEndOfInput { needed, remaining }
    }

    /// Creates a [`DecodingError::UnexpectedValue`].
    pub fn unexpected(expected: &'static str, actual: u8) -> Self {
        DecodingError::UnexpectedValue { expected, actual }
    }
}

impl From<std::str::Utf8Error> for DecodingError {
    fn from(e: std::str::Utf8Error) -> Self {
        DecodingError::InvalidEncoding {
            valid_up_to: e.valid_up_to(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let e = DecodingError::out_of_bounds(70_000u32, "u16");
        assert_eq!(e.to_string(), "value 70000 out of bounds for u16");

        let e = DecodingError::unexpected("0x00 or 0x01", 0x02);
        assert_eq!(e.to_string(), "expected 0x00 or 0x01, got 0x02");

        let e = DecodingError::end_of_input(4, 1);
        assert_eq!(
            e.to_string(),
            "unexpected end of input: needed 4 bytes, 1 remaining"
        );
    }

    #[test]
    fn utf8_conversion() {
        let bad = [b'o', b'k', 0xff];
        let e: DecodingError = std::str::from_utf8(&bad).unwrap_err().into();
        assert_eq!(e, DecodingError::InvalidEncoding { valid_up_to: 2 });
    }

    #[test]
    fn into_failure_error() {
        fn fails() -> Result<(), failure::Error> {
            Err(DecodingError::UnsupportedOperation("self-describing decode"))?;
            Ok(())
        }
        let e = fails().unwrap_err();
        assert!(e.downcast_ref::<DecodingError>().is_some());
    }
}
