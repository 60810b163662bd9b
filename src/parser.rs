/// Parses a whitespace-separated list of signed decimal integers.
///
/// Lines starting with `#` are comments and are skipped. Empty input parses
/// to an empty list.
pub fn parse_int_list(data: &[u8]) -> Result<Vec<i64>, String> {
    let mut cursor = ByteCursor::new(data);
    let mut values = Vec::new();

    loop {
        cursor.skip_whitespace_and_comments();
        if cursor.is_at_end() {
            break;
        }

        // Negative values start with '-' (e.g. -3)
        let is_negative = cursor.advance_if(b'-');

        let value = cursor
            .parse_i64(is_negative)
            .ok_or_else(|| format!("Expected integer at byte {}", cursor.offset()))?;

        // A number must end at whitespace or the end of the input
        match cursor.peek() {
            None => {}
            Some(byte) if byte.is_ascii_whitespace() => {}
            Some(byte) => {
                return Err(format!(
                    "Unexpected byte '{}' at byte {}",
                    byte.escape_ascii(),
                    cursor.offset()
                ));
            }
        }

        values.push(value);
    }

    Ok(values)
}

/// A cursor over a byte array with utility methods for parsing.
/// All accesses are bounds-checked; the input is arbitrary user data.
struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        ByteCursor { data, pos: 0 }
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Current position in the input, for error messages.
    #[inline]
    fn offset(&self) -> usize {
        self.pos
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    /// Advances the cursor if the current byte matches the specified byte.
    fn advance_if(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Skips whitespace and `#` comment lines until the next token.
    fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.peek() {
                Some(byte) if byte.is_ascii_whitespace() => self.pos += 1,
                Some(b'#') => self.skip_line(),
                _ => return,
            }
        }
    }

    /// Skips bytes up to and including the next newline.
    fn skip_line(&mut self) {
        while let Some(byte) = self.peek() {
            self.pos += 1;
            if byte == b'\n' {
                return;
            }
        }
    }

    /// Parses a run of decimal digits from the current position as an `i64`
    /// with the given sign. Returns None if there is no digit, or if the
    /// value does not fit.
    fn parse_i64(&mut self, is_negative: bool) -> Option<i64> {
        let mut found = false;
        let mut num: i64 = 0;

        while let Some(byte) = self.peek() {
            if !byte.is_ascii_digit() {
                break;
            }
            let digit = (byte - b'0') as i64;

            // Accumulate negated, since i64::MIN has no positive counterpart
            num = num.checked_mul(10)?.checked_sub(digit)?;
            self.pos += 1;
            found = true;
        }

        if !found {
            return None;
        }

        if is_negative { Some(num) } else { num.checked_neg() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_valid_lists() {
        let cases: Vec<(&str, Vec<i64>)> = vec![
            ("", vec![]),
            ("   \n\t ", vec![]),
            ("42", vec![42]),
            ("1 2 3", vec![1, 2, 3]),
            ("5\n3\n8\n1\n9\n2\n", vec![5, 3, 8, 1, 9, 2]),
            ("-7 0 -0 13", vec![-7, 0, 0, 13]),
            ("# header\n1 2\n# trailing\n3", vec![1, 2, 3]),
            ("9223372036854775807", vec![i64::MAX]),
            ("-9223372036854775808", vec![i64::MIN]),
        ];

        for (input, expected) in cases {
            assert_eq!(
                parse_int_list(input.as_bytes()),
                Ok(expected),
                "Parsing {:?}",
                input
            );
        }
    }

    #[test]
    fn test_rejects_malformed_input() {
        let cases: Vec<&str> = vec![
            "abc",
            "1 2 x 3",
            "12a",
            "--5",
            "- 5",
            "9223372036854775808",  // i64::MAX + 1
            "-9223372036854775809", // i64::MIN - 1
        ];

        for input in cases {
            assert!(
                parse_int_list(input.as_bytes()).is_err(),
                "Expected error for {:?}",
                input
            );
        }
    }
}
