mod summary_tests;

use crate::parse::{MessageTable, parse_export};
use crate::stats::{Analyzer, StopWords, TextRules};

/// Seven messages over three days; one group event, one media placeholder,
/// one link and a few emoji.
pub(super) const SAMPLE_CHAT: &str = "\
[01/01/23, 10:05:00 AM] Alice: Hello world 😀
[01/01/23, 10:06:00 AM] Bob: Hi Alice 😀😂
[01/01/23, 11:59:00 PM] Bob added Carol
[02/01/23, 9:15:00 AM] Carol: check https://www.example.com please
[02/01/23, 9:16:00 AM] Alice: image omitted
[15/02/23, 8:00:00 PM] Alice: hello again world
[15/02/23, 8:01:00 PM] Carol: hello
";

pub(super) fn sample_table() -> MessageTable {
    parse_export(SAMPLE_CHAT)
}

pub(super) fn sample_stop_words() -> StopWords {
    StopWords::parse("hi\nPlease\n\n")
}

pub(super) fn sample_analyzer() -> Analyzer {
    Analyzer::new(TextRules::default(), sample_stop_words())
}
