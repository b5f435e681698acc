// SPDX-License-Identifier: AGPL-3.0-only
// Turns the report render tree into a self-contained HTML page. Charts are
// inline SVG or styled rows; no client-side scripting beyond the timed
// reload baked into the page header.
use askama_escape::{escape, Html};
use std::f64::consts::{FRAC_PI_2, PI, TAU};
use tirith::charts::{CategoryBar, Chart, PieSlice, RadarAxis, WordWeight};
use tirith::report::{FilterControl, Report, Section, DASHBOARD_TITLE};

const PALETTE: [&str; 5] = ["#FFD700", "#001F3F", "#302D7B", "#FF5733", "#AAAAAA"];
const BAR_COLOUR: &str = "#001F3F";
const RADAR_STROKE: &str = "#001F3F";
const RADAR_FILL: &str = "rgba(0,31,63,0.2)";
const GRID_COLOUR: &str = "#ddd";

pub fn render_page(report: &Report, refresh_secs: u64) -> String {
    let mut body = String::new();
    body.push_str(&render_heading(report));
    body.push_str(&render_filters(&report.filters));
    for section in &report.sections {
        body.push_str(&render_section(section));
    }
    page_shell(&report.title, refresh_secs, &body)
}

pub fn render_error_page(message: &str, refresh_secs: u64) -> String {
    let body = format!(
        r#"<section class="section error"><h2>Data unavailable</h2><p>{}</p></section>"#,
        esc(message)
    );
    page_shell(DASHBOARD_TITLE, refresh_secs, &body)
}

fn page_shell(title: &str, refresh_secs: u64, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<meta http-equiv="refresh" content="{refresh_secs}">
<title>{title}</title>
<style>{css}</style>
</head>
<body>
<div class="container">
{body}
</div>
</body>
</html>"#,
        refresh_secs = refresh_secs,
        title = esc(title),
        css = inline_css(),
        body = body,
    )
}

fn render_heading(report: &Report) -> String {
    format!(
        r#"<header><h1>{title}</h1><p class="caption">{caption}</p><p class="freshness">{matching} of {total} responses shown &middot; fetched {fetched}</p></header>"#,
        title = esc(&report.title),
        caption = esc(&report.caption),
        matching = report.matching_rows,
        total = report.snapshot.row_count,
        fetched = report.snapshot.fetched_at.format("%Y-%m-%d %H:%M:%S UTC"),
    )
}

fn render_filters(filters: &[FilterControl]) -> String {
    if filters.is_empty() {
        return String::new();
    }
    let mut controls = String::new();
    for control in filters {
        let mut options = String::new();
        for option in &control.options {
            let selected = if control.selected.contains(option) {
                " selected"
            } else {
                ""
            };
            options.push_str(&format!(
                r#"<option value="{value}"{selected}>{value}</option>"#,
                value = esc(option),
                selected = selected,
            ));
        }
        controls.push_str(&format!(
            r#"<label>{prompt}<select name="{name}" multiple size="4">{options}</select></label>"#,
            prompt = esc(&control.prompt),
            name = control.question.key(),
            options = options,
        ));
    }
    format!(
        r#"<form method="get" class="filters">{controls}<span class="filter-actions"><button type="submit">Apply</button> <a href="/">Clear</a></span></form>"#,
        controls = controls,
    )
}

fn render_section(section: &Section) -> String {
    format!(
        r#"<section class="section"><h2>{title}</h2>{chart}</section>"#,
        title = esc(&section.title),
        chart = render_chart(&section.chart),
    )
}

fn render_chart(chart: &Chart) -> String {
    match chart {
        Chart::Pie { slices } => render_pie(slices),
        Chart::Bar { bars } => render_bars(bars, None),
        Chart::Histogram { bins } => render_bars(bins, Some(&PALETTE)),
        Chart::Radar { axes, scale_max } => render_radar(axes, *scale_max),
        Chart::WordCloud { words, .. } => render_word_cloud(words),
        Chart::List { values } => render_list(values),
        Chart::Table { columns, rows } => render_table(columns, rows),
        Chart::Empty { message } => format!(r#"<p class="empty">{}</p>"#, esc(message)),
    }
}

fn render_pie(slices: &[PieSlice]) -> String {
    let (cx, cy, r) = (90.0, 90.0, 80.0_f64);
    let total: usize = slices.iter().map(|slice| slice.count).sum();
    let mut paths = String::new();
    if slices.len() == 1 {
        // a single slice is the full disc; an arc from a point to itself
        // would collapse
        paths.push_str(&format!(
            r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="{fill}"/>"#,
            fill = PALETTE[0],
        ));
    } else {
        let mut angle = -FRAC_PI_2;
        for (i, slice) in slices.iter().enumerate() {
            let sweep = slice.count as f64 / total as f64 * TAU;
            let end = angle + sweep;
            let (x1, y1) = (cx + r * angle.cos(), cy + r * angle.sin());
            let (x2, y2) = (cx + r * end.cos(), cy + r * end.sin());
            let large_arc = i32::from(sweep > PI);
            paths.push_str(&format!(
                r#"<path d="M{cx:.1} {cy:.1} L{x1:.1} {y1:.1} A{r:.1} {r:.1} 0 {large_arc} 1 {x2:.1} {y2:.1} Z" fill="{fill}"/>"#,
                fill = PALETTE[i % PALETTE.len()],
            ));
            angle = end;
        }
    }
    let mut legend = String::new();
    for (i, slice) in slices.iter().enumerate() {
        legend.push_str(&format!(
            r#"<li><span class="swatch" style="background:{colour}"></span>{label} &mdash; {count} ({percent:.1}%)</li>"#,
            colour = PALETTE[i % PALETTE.len()],
            label = esc(&slice.label),
            count = slice.count,
            percent = slice.percent,
        ));
    }
    format!(
        r#"<div class="pie"><svg viewBox="0 0 180 180" width="180" height="180" role="img">{paths}</svg><ul class="legend">{legend}</ul></div>"#,
    )
}

fn render_bars(bars: &[CategoryBar], palette: Option<&[&str]>) -> String {
    let max = bars.iter().map(|bar| bar.count).max().unwrap_or(1).max(1);
    let mut rows = String::new();
    for (i, bar) in bars.iter().enumerate() {
        let width = 100.0 * bar.count as f64 / max as f64;
        let colour = palette.map_or(BAR_COLOUR, |palette| palette[i % palette.len()]);
        rows.push_str(&format!(
            r#"<div class="bar-row"><span class="bar-label">{label}</span><span class="bar-track"><span class="bar-fill" style="width:{width:.1}%;background:{colour}"></span></span><span class="bar-count">{count}</span></div>"#,
            label = esc(&bar.label),
            count = bar.count,
        ));
    }
    format!(r#"<div class="bars">{rows}</div>"#)
}

fn render_radar(axes: &[RadarAxis], scale_max: f64) -> String {
    let (cx, cy, r) = (140.0, 140.0, 100.0_f64);
    let n = axes.len();
    let angle_of = |i: usize| -FRAC_PI_2 + i as f64 * TAU / n as f64;
    let mut grid = String::new();
    let rings = scale_max.round() as usize;
    for level in 1..=rings.max(1) {
        let ring_r = r * level as f64 / rings.max(1) as f64;
        let points: Vec<String> = (0..n)
            .map(|i| {
                let a = angle_of(i);
                format!("{:.1},{:.1}", cx + ring_r * a.cos(), cy + ring_r * a.sin())
            })
            .collect();
        grid.push_str(&format!(
            r#"<polygon points="{points}" fill="none" stroke="{GRID_COLOUR}"/>"#,
            points = points.join(" ")
        ));
    }
    let mut spokes = String::new();
    for (i, axis) in axes.iter().enumerate() {
        let a = angle_of(i);
        let (x, y) = (cx + r * a.cos(), cy + r * a.sin());
        spokes.push_str(&format!(
            r#"<line x1="{cx:.1}" y1="{cy:.1}" x2="{x:.1}" y2="{y:.1}" stroke="{GRID_COLOUR}"/>"#,
        ));
        let (lx, ly) = (cx + (r + 18.0) * a.cos(), cy + (r + 18.0) * a.sin());
        spokes.push_str(&format!(
            r#"<text x="{lx:.1}" y="{ly:.1}" text-anchor="middle" class="radar-label">{label}</text>"#,
            label = esc(&axis.label),
        ));
    }
    let value_points: Vec<String> = axes
        .iter()
        .enumerate()
        .map(|(i, axis)| {
            let a = angle_of(i);
            let vr = r * (axis.mean / scale_max).clamp(0.0, 1.0);
            format!("{:.1},{:.1}", cx + vr * a.cos(), cy + vr * a.sin())
        })
        .collect();
    let mut dots = String::new();
    for point in &value_points {
        let (x, y) = point.split_once(',').unwrap_or(("0", "0"));
        dots.push_str(&format!(
            r#"<circle cx="{x}" cy="{y}" r="3" fill="{stroke}"/>"#,
            stroke = RADAR_STROKE,
        ));
    }
    format!(
        r#"<svg viewBox="0 0 280 280" width="280" height="280" role="img" class="radar">{grid}{spokes}<polygon points="{points}" fill="{fill}" stroke="{stroke}" stroke-width="2"/>{dots}</svg>"#,
        points = value_points.join(" "),
        fill = RADAR_FILL,
        stroke = RADAR_STROKE,
    )
}

fn render_word_cloud(words: &[WordWeight]) -> String {
    let max = words.iter().map(|word| word.weight).max().unwrap_or(1).max(1);
    let mut spans = String::new();
    for (i, word) in words.iter().enumerate() {
        let size = 12.0 + 28.0 * word.weight as f64 / max as f64;
        spans.push_str(&format!(
            r#"<span style="font-size:{size:.0}px;color:{colour}">{word}</span> "#,
            colour = PALETTE[i % PALETTE.len()],
            word = esc(&word.word),
        ));
    }
    format!(r#"<p class="cloud">{spans}</p>"#)
}

fn render_list(values: &[String]) -> String {
    let items: String = values
        .iter()
        .map(|value| format!("<li>{}</li>", esc(value)))
        .collect();
    format!(r#"<ol class="value-list">{items}</ol>"#)
}

fn render_table(columns: &[String], rows: &[Vec<Option<String>>]) -> String {
    let header: String = columns
        .iter()
        .map(|column| format!("<th>{}</th>", esc(column)))
        .collect();
    let mut body = String::new();
    for row in rows {
        let cells: String = row
            .iter()
            .map(|cell| format!("<td>{}</td>", esc(cell.as_deref().unwrap_or(""))))
            .collect();
        body.push_str(&format!("<tr>{cells}</tr>"));
    }
    format!(
        r#"<div class="table-wrap"><table><thead><tr>{header}</tr></thead><tbody>{body}</tbody></table></div>"#,
    )
}

fn esc(value: &str) -> String {
    escape(value, Html).to_string()
}

fn inline_css() -> &'static str {
    r#"body{font-family:system-ui,sans-serif;margin:0;background:#fafafa;color:#222}
.container{max-width:960px;margin:0 auto;padding:24px}
header h1{margin:0 0 4px}
.caption{color:#555;margin:0 0 2px}
.freshness{color:#888;font-size:13px;margin:0 0 16px}
.filters{display:flex;gap:16px;align-items:flex-end;flex-wrap:wrap;background:#fff;border:1px solid #e2e2e2;border-radius:8px;padding:12px 16px;margin-bottom:20px}
.filters label{display:flex;flex-direction:column;font-size:13px;gap:4px}
.filters select{min-width:200px}
.section{background:#fff;border:1px solid #e2e2e2;border-radius:8px;padding:16px 20px;margin-bottom:20px}
.section h2{margin:0 0 12px;font-size:18px}
.pie{display:flex;gap:24px;align-items:center;flex-wrap:wrap}
.legend{list-style:none;margin:0;padding:0;font-size:14px}
.legend li{margin-bottom:4px}
.swatch{display:inline-block;width:12px;height:12px;border-radius:2px;margin-right:8px}
.bar-row{display:flex;align-items:center;gap:8px;margin-bottom:6px;font-size:14px}
.bar-label{flex:0 0 220px;text-align:right;overflow:hidden;text-overflow:ellipsis;white-space:nowrap}
.bar-track{flex:1;background:#eee;border-radius:3px;height:16px;display:inline-block}
.bar-fill{display:block;height:16px;border-radius:3px}
.bar-count{flex:0 0 32px}
.radar-label{font-size:11px;fill:#444}
.cloud span{display:inline-block;margin:2px 6px;line-height:1.1}
.value-list{margin:0;padding-left:24px}
.table-wrap{overflow-x:auto}
table{border-collapse:collapse;font-size:13px}
th,td{border:1px solid #e2e2e2;padding:4px 8px;text-align:left}
th{background:#f4f4f4}
.empty{color:#888;font-style:italic}
.error{border-color:#e0b4b4}
.error p{color:#9f3a38}"#
}
