use validator::ValidationError;

/// Content validation for posts: every scalar value must belong to an emoji
/// sequence. Joiners, variation selectors, skin-tone modifiers and regional
/// indicators are accepted so composed emoji (families, flags, toned hands)
/// pass as a whole.
pub fn emoji_only(content: &str) -> Result<(), ValidationError> {
    if content.chars().all(is_emoji_scalar) {
        Ok(())
    } else {
        let mut error = ValidationError::new("emoji_only");
        error.message = Some("Only emojis are allowed.".into());
        Err(error)
    }
}

fn is_emoji_scalar(c: char) -> bool {
    matches!(
        u32::from(c),
        0x1F000..=0x1FAFF   // pictographs, transport, flags, modifiers, supplemental
        | 0x2600..=0x27BF   // miscellaneous symbols and dingbats
        | 0x2300..=0x23FF   // miscellaneous technical (watches, hourglasses)
        | 0x2B00..=0x2BFF   // stars and geometric shapes
        | 0x200D            // zero-width joiner
        | 0xFE0E..=0xFE0F   // variation selectors
        | 0x20E3            // combining keycap
    )
}
