use super::app::App;
use super::components::{draw_frame, draw_hit_list, draw_query_bar, draw_status_bar};
use ratatui::prelude::*;

pub fn draw(f: &mut Frame, app: &App) {
    let size = f.size();

    if size.height < 5 {
        let paragraph = ratatui::widgets::Paragraph::new("Terminal too small");
        f.render_widget(paragraph, size);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(size);

    let body_area = chunks[0];
    draw_frame(f, body_area, &app.source_name, &app.get_match_count_info());

    // Inner area inside the border
    let inner = body_area.inner(&Margin {
        vertical: 1,
        horizontal: 1,
    });
    draw_hit_list(f, inner, app);

    draw_query_bar(f, chunks[1], &app.query, app.matched);
    draw_status_bar(f, chunks[2], app.message.as_deref());
}
