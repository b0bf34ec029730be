//! General wellness advice shown by `pregtrack tips`.

use textwrap::Options;

pub const TIPS: [(&str, &str); 6] = [
    (
        "🥤 Stay hydrated",
        "drink regularly, about 1.5 to 2 litres of water a day.",
    ),
    ("💤 Rest", "whenever you can, especially at the end of the day."),
    (
        "🚶 Walk",
        "a little every day to help your circulation.",
    ),
    (
        "🧘 Avoid stress",
        "breathing exercises, soft music, reading…",
    ),
    (
        "🍎 Balanced diet",
        "fruit, vegetables and lean proteins.",
    ),
    (
        "☎️ Call your midwife",
        "in case of pain, bleeding or regular contractions.",
    ),
];

pub const DISCLAIMER: &str =
    "These tips are general and do not replace medical advice.";

/// Render the tips as a bulleted list wrapped to `width` columns.
pub fn render(width: usize) -> String {
    let mut out = String::new();

    for (title, text) in TIPS {
        let opts = Options::new(width.max(20))
            .initial_indent("- ")
            .subsequent_indent("  ");
        let line = format!("{}: {}", title, text);
        out.push_str(&textwrap::fill(&line, opts));
        out.push('\n');
    }

    out.push('\n');
    out.push_str(&textwrap::fill(DISCLAIMER, width.max(20)));
    out.push('\n');
    out
}
