use crate::error::BmcError;

/// Width of one packed color record in bytes. The console stores one byte per
/// RGBA channel; keep this a named constant rather than scattering 4s around.
pub const RECORD_WIDTH: usize = 4;

/// Length of the hex form of one record, no prefix.
pub const HEX_DIGITS: usize = RECORD_WIDTH * 2;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    /// Decodes one record from the start of `bytes` (RGBA channel order).
    pub fn decode(bytes: &[u8]) -> Result<Self, BmcError> {
        if bytes.len() < RECORD_WIDTH {
            return Err(BmcError::MalformedRecord {
                got: bytes.len(),
                expected: RECORD_WIDTH,
            });
        }
        Ok(Color {
            red: bytes[0],
            green: bytes[1],
            blue: bytes[2],
            alpha: bytes[3],
        })
    }

    pub fn encode(&self) -> [u8; RECORD_WIDTH] {
        [self.red, self.green, self.blue, self.alpha]
    }

    /// Canonical hex form: uppercase, exactly `HEX_DIGITS` digits.
    pub fn to_hex(&self) -> String {
        format!(
            "{:02X}{:02X}{:02X}{:02X}",
            self.red, self.green, self.blue, self.alpha
        )
    }

    /// Accepts either case; rejects anything that is not exactly
    /// `HEX_DIGITS` hex digits.
    pub fn from_hex(s: &str) -> Result<Self, BmcError> {
        if s.len() != HEX_DIGITS || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(BmcError::InvalidHexString {
                value: s.to_string(),
                expected: HEX_DIGITS,
            });
        }
        // All-ASCII is guaranteed above, so slicing at even offsets is safe.
        let channel = |i: usize| u8::from_str_radix(&s[i * 2..i * 2 + 2], 16).unwrap();
        Ok(Color {
            red: channel(0),
            green: channel(1),
            blue: channel(2),
            alpha: channel(3),
        })
    }
}
