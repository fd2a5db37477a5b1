use crate::stats::frequency::FrequencyTable;
use crate::stats::request::StatsRequest;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Single code points with emoji semantics. Multi-code-point sequences
/// (flags, ZWJ families) are counted per component.
static EMOJI: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\p{Extended_Pictographic}\p{Emoji_Modifier}]").expect("emoji pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmojiCount {
    pub emoji: String,
    pub count: u64,
}

pub fn is_emoji(c: char) -> bool {
    let mut buf = [0u8; 4];
    EMOJI.is_match(c.encode_utf8(&mut buf))
}

/// Every emoji used by the selected messages, most frequent first.
pub fn emoji_frequency(req: &StatsRequest<'_>) -> Vec<EmojiCount> {
    req.messages()
        .flat_map(|m| EMOJI.find_iter(&m.body))
        .map(|m| m.as_str())
        .collect::<FrequencyTable<_>>()
        .into_ranked()
        .into_iter()
        .map(|(emoji, count)| EmojiCount {
            emoji: emoji.to_string(),
            count,
        })
        .collect()
}
