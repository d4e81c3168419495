use super::app::App;
use ratatui::{
    prelude::*,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Bordered frame with the title and match count
pub fn draw_frame(f: &mut Frame, area: Rect, source: &str, count_info: &str) {
    let title = Line::from(vec![
        Span::styled(" sift", Style::default().fg(Color::Cyan).bold()),
        Span::raw(" - "),
        Span::styled(source.to_string(), Style::default().bold()),
        Span::raw(" ("),
        Span::styled(count_info.to_string(), Style::default().fg(Color::Gray)),
        Span::raw(") "),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Rgb(60, 60, 80)))
        .title(title);
    f.render_widget(block, area);
}

/// Ranked list, one `[score] candidate` row per hit
pub fn draw_hit_list(f: &mut Frame, area: Rect, app: &App) {
    let hits = app.get_visible_hits();

    if hits.is_empty() {
        let message = if app.candidates.is_empty() {
            "No candidates."
        } else {
            "No matches."
        };
        let paragraph = Paragraph::new(message).style(Style::default().fg(Color::Gray));
        f.render_widget(paragraph, area);
        return;
    }

    let width = (area.width as usize).min(app.get_row_width());
    let score_width = hits
        .iter()
        .map(|h| h.total.to_string().len())
        .max()
        .unwrap_or(1);

    let lines: Vec<Line> = hits
        .iter()
        .enumerate()
        .map(|(idx, hit)| {
            let is_selected = (app.scroll_offset + idx) == app.selected_index;
            let selector = if is_selected { ">" } else { " " };
            let score = format!("[{:>score_width$}] ", hit.total);
            // selector + space + score
            let content_width = width.saturating_sub(2 + score.width());
            let content = truncate_to_width(app.candidate(hit), content_width);

            let style = if is_selected {
                Style::default().fg(Color::Cyan).bold()
            } else {
                Style::default()
            };

            Line::from(vec![
                Span::styled(format!("{} ", selector), style),
                Span::styled(score, Style::default().fg(Color::Gray)),
                Span::styled(content, style),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines), area);
}

/// Query prompt with a cursor
pub fn draw_query_bar(f: &mut Frame, area: Rect, query: &str, matched: usize) {
    let content = Line::from(vec![
        Span::styled("> ", Style::default().fg(Color::Yellow).bold()),
        Span::raw(query.to_string()),
        Span::styled("_", Style::default().fg(Color::Gray)),
        Span::styled(format!("  {} matched", matched), Style::default().fg(Color::Gray)),
    ]);
    f.render_widget(Paragraph::new(content), area);
}

pub fn draw_status_bar(f: &mut Frame, area: Rect, message: Option<&str>) {
    let content = match message {
        Some(msg) => Line::from(Span::styled(msg.to_string(), Style::default().fg(Color::Yellow))),
        None => Line::from(vec![
            Span::styled("[Enter]", Style::default().bold()),
            Span::raw(" select "),
            Span::styled("[↑/↓]", Style::default().bold()),
            Span::raw(" move "),
            Span::styled("[Ctrl-U]", Style::default().bold()),
            Span::raw(" clear "),
            Span::styled("[Esc]", Style::default().bold()),
            Span::raw(" quit"),
        ]),
    };
    f.render_widget(Paragraph::new(content), area);
}

/// Cut `text` to at most `max_width` columns, marking the cut with `…`
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
