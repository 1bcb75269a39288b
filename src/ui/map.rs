use crate::model::{BoothPosition, FLOOR_HEIGHT, FLOOR_WIDTH};
use crate::ui::app::App;
use crate::ui::dashboard::{
    draw_footer, draw_header, BRAND_DARK, BRAND_GREEN, BRAND_MUTED, BRAND_ORANGE, HEADER_STYLE,
};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Rectangle},
        Block, Borders, Paragraph,
    },
    Frame,
};

const SELECTED_COLOR: Color = BRAND_DARK;

/// Canvas y grows upward; floor-plan y grows downward.
fn canvas_rect(booth: &BoothPosition, color: Color) -> Rectangle {
    Rectangle {
        x: booth.x,
        y: FLOOR_HEIGHT - booth.y - booth.height,
        width: booth.width,
        height: booth.height,
        color,
    }
}

fn booth_color(app: &App, booth: &BoothPosition) -> Color {
    if app.is_selected(booth) {
        SELECTED_COLOR
    } else if app.is_in_selected_rally(booth) {
        BRAND_ORANGE
    } else if app.plan.booth_map.contains_key(&booth.code) {
        BRAND_GREEN
    } else {
        BRAND_MUTED
    }
}

pub fn draw_map(frame: &mut Frame, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Min(10),   // Floor plan
        Constraint::Length(3), // Hover line
        Constraint::Length(3), // Footer
    ])
    .split(frame.area());

    draw_header(frame, chunks[0], app);
    draw_floor(frame, chunks[1], app);
    draw_hover(frame, chunks[2], app);
    draw_footer(
        frame,
        chunks[3],
        " ←→ Booth | ↑↓ Section | Enter Details | r Rally | Esc Back | q Quit ",
    );
}

fn draw_floor(frame: &mut Frame, area: Rect, app: &App) {
    let canvas = Canvas::default()
        .block(
            Block::default()
                .title(format!(" Floor plan | Section {} ", app.selected_section_name()))
                .borders(Borders::ALL),
        )
        .marker(Marker::Braille)
        .x_bounds([0.0, FLOOR_WIDTH])
        .y_bounds([0.0, FLOOR_HEIGHT])
        .paint(|ctx| {
            for booth in &app.plan.booths {
                ctx.draw(&canvas_rect(booth, booth_color(app, booth)));
            }
            ctx.layer();
            for section in app.sections() {
                if let Some(first) = app.plan.booths_in_section(section).first() {
                    let (x, y) = first.center();
                    ctx.print(
                        x,
                        FLOOR_HEIGHT - y,
                        Span::styled(section.clone(), HEADER_STYLE),
                    );
                }
            }
            if let Some(selected) = app.selected_booth_position() {
                let (x, y) = selected.center();
                ctx.print(
                    x,
                    FLOOR_HEIGHT - y,
                    Span::styled(selected.code.to_string(), Style::default().fg(BRAND_ORANGE)),
                );
            }
        });

    frame.render_widget(canvas, area);
}

fn draw_hover(frame: &mut Frame, area: Rect, app: &App) {
    let line = match (app.selected_booth_position(), app.selected_entry()) {
        (Some(booth), Some(entry)) => {
            let more = if entry.total_events > 1 {
                format!(" (+{} more)", entry.total_events - 1)
            } else {
                String::new()
            };
            Line::from(vec![
                Span::styled(format!("{} ", booth.code), HEADER_STYLE),
                Span::raw(entry.title.clone()),
                Span::styled(more, Style::default().fg(BRAND_MUTED)),
            ])
        }
        (Some(booth), None) => {
            let name = app
                .plan
                .booth_names
                .lookup(&booth.code)
                .unwrap_or("(empty)");
            Line::from(vec![
                Span::styled(format!("{} ", booth.code), HEADER_STYLE),
                Span::styled(name.to_string(), Style::default().fg(BRAND_MUTED)),
            ])
        }
        (None, _) => Line::from(""),
    };

    let hover = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(hover, area);
}
