//! Parsing of free-text account messages posted in a guild's roles channel.
//!
//! Members announce their account with a two line message:
//!
//! ```text
//! ID: 1234567890123456
//! IGN: Ash
//! ```
//!
//! The lines may appear in either order and the prefixes are case-insensitive.

const ID_PREFIX: &str = "ID";
const IGN_PREFIX: &str = "IGN";

/// Number of digits in a friend code.
pub const FRIENDCODE_LENGTH: usize = 16;

/// Friend code and in-game name extracted from a roles channel message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEntry {
    pub friendcode: String,
    pub ign: String,
}

/// Returns `true` when `value` is exactly 16 ASCII digits.
pub fn is_valid_friendcode(value: &str) -> bool {
    value.len() == FRIENDCODE_LENGTH && value.bytes().all(|b| b.is_ascii_digit())
}

/// Parses a roles channel message into a friend code and in-game name.
///
/// The message must have exactly two lines. If the first line starts with
/// `IGN` and the second with `ID`, they are swapped. The message is rejected
/// when neither the first line starts with `ID` nor the second with `IGN`, or
/// when the value of either line is empty. A value is the text between the
/// first and second colon, trimmed.
///
/// The friend code is not checked for format here; scanned codes are stored
/// as posted.
///
/// # Returns
/// - `Some(ParsedEntry)` - Message matched the expected shape
/// - `None` - Message is malformed and should be skipped
pub fn parse_roles_message(content: &str) -> Option<ParsedEntry> {
    let lines: Vec<&str> = content.trim().split('\n').map(str::trim).collect();
    let &[first, second] = lines.as_slice() else {
        return None;
    };

    let (id_line, ign_line) =
        if starts_with_ignore_case(first, IGN_PREFIX) && starts_with_ignore_case(second, ID_PREFIX) {
            (second, first)
        } else {
            (first, second)
        };

    if !starts_with_ignore_case(id_line, ID_PREFIX) && !starts_with_ignore_case(ign_line, IGN_PREFIX) {
        return None;
    }

    let friendcode = value_after_colon(id_line)?;
    let ign = value_after_colon(ign_line)?;

    Some(ParsedEntry {
        friendcode: friendcode.to_string(),
        ign: ign.to_string(),
    })
}

fn starts_with_ignore_case(line: &str, prefix: &str) -> bool {
    line.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

fn value_after_colon(line: &str) -> Option<&str> {
    let value = line.split(':').nth(1)?.trim();

    (!value.is_empty()).then_some(value)
}
