use crate::stats::WordCloud;

/// Cycled by rank.
const PALETTE: &[&str] = &[
    "#440154", "#3b528b", "#21918c", "#5ec962", "#31688e", "#35b779", "#443983", "#90d743",
];

/// Ascent of the estimated glyph box, relative to its height.
const BASELINE: f64 = 0.8;

/// Renders a laid-out word cloud as a standalone SVG document.
pub fn render_svg(cloud: &WordCloud) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
        w = cloud.width,
        h = cloud.height
    ));
    out.push_str(&format!(
        "  <rect width=\"100%\" height=\"100%\" fill=\"{}\"/>\n",
        escape(&cloud.background)
    ));

    for (i, word) in cloud.words.iter().enumerate() {
        out.push_str(&format!(
            "  <text x=\"{:.0}\" y=\"{:.0}\" font-family=\"monospace\" font-size=\"{}\" fill=\"{}\">{}</text>\n",
            word.x,
            word.y + word.height * BASELINE,
            word.font_size,
            PALETTE[i % PALETTE.len()],
            escape(&word.text)
        ));
    }

    out.push_str("</svg>\n");
    out
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}
