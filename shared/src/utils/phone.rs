//! Phone number utilities

/// Number of trailing characters left visible by [`mask_phone_number`]
const VISIBLE_DIGITS: usize = 4;

/// Mask a phone number for logging, keeping only the last 4 characters
///
/// A leading `+` is preserved. Inputs of 4 characters or fewer are fully masked.
///
/// ```
/// use ot_shared::utils::phone::mask_phone_number;
///
/// assert_eq!(mask_phone_number("21999999999"), "*******9999");
/// assert_eq!(mask_phone_number("+5521999999999"), "+*********9999");
/// ```
pub fn mask_phone_number(phone: &str) -> String {
    let chars: Vec<char> = phone.chars().collect();
    if chars.len() <= VISIBLE_DIGITS {
        return "*".repeat(chars.len());
    }

    let masked_count = chars.len() - VISIBLE_DIGITS;
    let last_digits: String = chars[masked_count..].iter().collect();

    if phone.starts_with('+') {
        format!("+{}{}", "*".repeat(masked_count - 1), last_digits)
    } else {
        format!("{}{}", "*".repeat(masked_count), last_digits)
    }
}
