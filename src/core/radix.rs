use crate::core::constants::{AXIS_DIGITS, CODE_DIGITS, MAX_SCALED, SEPARATOR, SHORT_CODE_DIGITS};
use crate::core::tables::CodecTables;
use crate::util::error::TripcodeError;

/// Writes a scaled `(lat, lng)` pair as interleaved base-28 digits.
///
/// Digits are emitted most significant first, latitude before longitude, and
/// `digits` limits how many are written (10 for a full code, 8 for a short one).
/// A separator follows every digit count listed in `groups`.
pub(crate) fn format_scaled(
    tables: &CodecTables,
    (mut lat, mut lng): (u64, u64),
    digits: usize,
    groups: &[usize],
) -> Result<String, TripcodeError> {
    for value in [lat, lng] {
        if value > MAX_SCALED {
            return Err(TripcodeError::OffsetOverflow(value as i64));
        }
    }

    let mut code = String::with_capacity(digits + groups.len());
    let mut written = 0;

    for i in (0..AXIS_DIGITS).rev() {
        let place = tables.place[i];
        for value in [&mut lat, &mut lng] {
            if written == digits {
                return Ok(code);
            }
            code.push(tables.symbol((*value / place) as u8));
            *value %= place;
            written += 1;
            if groups.contains(&written) && written < digits {
                code.push(SEPARATOR);
            }
        }
    }

    Ok(code)
}

/// Reads a tripcode back into its scaled `(lat, lng)` pair.
///
/// Separators are skipped wherever they appear. Short codes are accepted by
/// padding the digit stream with zero digits up to the full length.
pub(crate) fn parse_scaled(tables: &CodecTables, code: &str) -> Result<(u64, u64), TripcodeError> {
    let mut digits = [0u8; CODE_DIGITS];
    let mut count = 0;

    for symbol in code.chars().filter(|&c| c != SEPARATOR) {
        let value = tables
            .digit_value(symbol)
            .ok_or(TripcodeError::InvalidCodeCharacter(symbol))?;
        if count < CODE_DIGITS {
            digits[count] = value;
        }
        count += 1;
    }

    if count > CODE_DIGITS {
        return Err(TripcodeError::CodeTooLong(count));
    }
    if count < SHORT_CODE_DIGITS {
        return Err(TripcodeError::TruncatedCode(count));
    }

    let mut lat = 0u64;
    let mut lng = 0u64;
    for (pair, i) in digits.chunks_exact(2).zip((0..AXIS_DIGITS).rev()) {
        lat += pair[0] as u64 * tables.place[i];
        lng += pair[1] as u64 * tables.place[i];
    }

    Ok((lat, lng))
}
