use crate::report::AnalysisReport;
use crate::stats::Heatmap;
use owo_colors::OwoColorize;

const BAR_WIDTH: f64 = 20.0;

pub fn render_json(report: &AnalysisReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

pub fn render_pretty(report: &AnalysisReport) -> String {
    render_text(report, true)
}

pub fn render_plain(report: &AnalysisReport) -> String {
    render_text(report, false)
}

fn render_text(report: &AnalysisReport, color: bool) -> String {
    let mut out = String::new();

    let scope = match &report.participant {
        Some(p) => format!("participant: {p}"),
        None => "overall".to_string(),
    };
    let title = format!("Chat Analysis ({scope})");
    push_title(&mut out, &title, color);

    let s = &report.summary;
    out.push_str(&format!(
        "Messages: {} | Words: {} | Media: {} | Links: {}\n",
        s.messages, s.words, s.media, s.links
    ));
    if report.dropped_lines > 0 {
        out.push_str(&format!(
            "Skipped {} line(s) outside the export format\n",
            report.dropped_lines
        ));
    }
    out.push('\n');

    if let Some(top) = &report.top_senders {
        push_heading(&mut out, "Most busy users", color);
        push_bars(
            &mut out,
            top.top.iter().map(|c| (c.sender.clone(), c.messages)),
            color,
        );
        out.push('\n');
        for share in &top.shares {
            out.push_str(&format!("  {:<24} {:>6.2}%\n", share.sender, share.percent));
        }
        out.push('\n');
    }

    push_heading(&mut out, "Monthly timeline", color);
    push_bars(
        &mut out,
        report
            .monthly_timeline
            .iter()
            .map(|m| (m.label.clone(), m.messages)),
        color,
    );
    out.push('\n');

    push_heading(&mut out, "Daily timeline", color);
    push_bars(
        &mut out,
        report
            .daily_timeline
            .iter()
            .map(|d| (d.date.to_string(), d.messages)),
        color,
    );
    out.push('\n');

    push_heading(&mut out, "Most busy day", color);
    push_bars(
        &mut out,
        report
            .week_activity
            .iter()
            .map(|a| (a.name.to_string(), a.messages)),
        color,
    );
    out.push('\n');

    push_heading(&mut out, "Most busy month", color);
    push_bars(
        &mut out,
        report
            .month_activity
            .iter()
            .map(|a| (a.name.to_string(), a.messages)),
        color,
    );
    out.push('\n');

    push_heading(&mut out, "Weekly activity heatmap", color);
    push_heatmap(&mut out, &report.heatmap);
    out.push('\n');

    push_heading(&mut out, "Most common words", color);
    push_bars(
        &mut out,
        report.common_words.iter().map(|w| (w.word.clone(), w.count)),
        color,
    );
    out.push('\n');

    push_heading(&mut out, "Emoji", color);
    if report.emoji.is_empty() {
        out.push_str("  <none>\n");
    } else {
        let line = report
            .emoji
            .iter()
            .map(|e| format!("{}={}", e.emoji, e.count))
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&format!("  {line}\n"));
    }

    out
}

fn push_title(out: &mut String, title: &str, color: bool) {
    let underline = "=".repeat(title.chars().count());
    if color {
        out.push_str(&format!("{}\n{}\n", title.bold(), underline.dimmed()));
    } else {
        out.push_str(&format!("{title}\n{underline}\n"));
    }
}

fn push_heading(out: &mut String, heading: &str, color: bool) {
    if color {
        out.push_str(&format!("{}:\n", heading.bold().cyan()));
    } else {
        out.push_str(&format!("{heading}:\n"));
    }
}

fn push_bars(out: &mut String, rows: impl Iterator<Item = (String, u64)>, color: bool) {
    let rows: Vec<_> = rows.collect();
    let Some(max) = rows.iter().map(|(_, c)| *c).max() else {
        out.push_str("  <no data>\n");
        return;
    };

    for (label, count) in rows {
        let bars = ((count as f64 / max as f64) * BAR_WIDTH).round().max(1.0) as usize;
        let bar = "█".repeat(bars);
        if color {
            out.push_str(&format!("  {:<24} {:<20} {:>6}\n", label, bar.green(), count));
        } else {
            out.push_str(&format!("  {:<24} {:<20} {:>6}\n", label, bar, count));
        }
    }
}

fn push_heatmap(out: &mut String, heatmap: &Heatmap) {
    if heatmap.is_empty() {
        out.push_str("  <no data>\n");
        return;
    }

    // Columns are headed by the bucket's start, e.g. "10AM".
    let headers: Vec<String> = heatmap
        .buckets
        .iter()
        .map(|b| b.split(" - ").next().unwrap_or(b).replace(' ', ""))
        .collect();

    out.push_str(&format!("  {:<10}", ""));
    for h in &headers {
        out.push_str(&format!(" {h:>5}"));
    }
    out.push('\n');

    for (day, row) in heatmap.days.iter().zip(&heatmap.cells) {
        out.push_str(&format!("  {day:<10}"));
        for cell in row {
            out.push_str(&format!(" {cell:>5}"));
        }
        out.push('\n');
    }
}
