use crate::model::BoothInfo;
use crate::ui::app::{App, FocusPanel};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, List, ListItem, Paragraph, Row, Scrollbar, ScrollbarOrientation,
        ScrollbarState, Table, Wrap,
    },
    Frame,
};

// Palette
pub(super) const BRAND_DARK: Color = Color::Rgb(0x1F, 0x2F, 0x3C);
pub(super) const BRAND_SELECT_BG: Color = Color::Rgb(0xC3, 0xD3, 0xE0);
pub(super) const BRAND_GREEN: Color = Color::Rgb(0x82, 0x9A, 0x68); // occupied
pub(super) const BRAND_ORANGE: Color = Color::Rgb(0x9E, 0x68, 0x3C); // focus, rally
pub(super) const BRAND_MUTED: Color = Color::Rgb(0x71, 0x65, 0x65); // empty, footer

// Styles
pub(super) const HEADER_STYLE: Style = Style::new().fg(BRAND_DARK).add_modifier(Modifier::BOLD);
const SELECTED_STYLE: Style = Style::new()
    .bg(BRAND_SELECT_BG)
    .fg(BRAND_DARK)
    .add_modifier(Modifier::BOLD);
const COUNT_COLOR: Color = BRAND_GREEN;
const RALLY_COLOR: Color = BRAND_ORANGE;

pub fn draw_dashboard(frame: &mut Frame, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Min(10),   // Main content
        Constraint::Length(3), // Footer
    ])
    .split(frame.area());

    draw_header(frame, chunks[0], app);
    draw_main_content(frame, chunks[1], app);
    draw_footer(
        frame,
        chunks[2],
        " ←→ Panel | ↑↓ Select | Enter Details | m Map | r Rally | q Quit ",
    );
}

pub(super) fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let stats = app.plan.stats();
    let mut title = format!(
        " Booth Map | {} booths | {} occupied | {} listings placed | {} title codes ",
        stats.total_booths, stats.occupied_booths, stats.placed_listings, app.title_code_count
    );
    if let Some(rally) = app.selected_rally() {
        title.push_str(&format!("| Rally: {} ", rally.name));
    }

    let header = Paragraph::new(title)
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

fn draw_main_content(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::horizontal([
        Constraint::Percentage(20), // Sections
        Constraint::Percentage(80), // Booths
    ])
    .split(area);

    draw_sections(frame, chunks[0], app);
    draw_booths(frame, chunks[1], app);
}

fn focus_border(is_focused: bool) -> Style {
    if is_focused {
        Style::default().fg(BRAND_ORANGE)
    } else {
        Style::default()
    }
}

fn draw_sections(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus_panel == FocusPanel::Sections;

    let items: Vec<ListItem> = app
        .sections()
        .iter()
        .enumerate()
        .map(|(i, section)| {
            let is_selected = i == app.selected_section;
            let style = if is_selected && is_focused {
                SELECTED_STYLE
            } else if is_selected {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let marker = if is_selected && is_focused {
                " ◄"
            } else {
                ""
            };

            let (occupied, total) = app.section_occupancy(section);

            ListItem::new(Line::from(vec![
                Span::styled(format!("Section {section}"), style),
                Span::raw(" "),
                Span::styled(
                    format!("({occupied}/{total})"),
                    Style::default().fg(COUNT_COLOR),
                ),
                Span::styled(marker, Style::default().fg(BRAND_ORANGE)),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(format!(" Sections ({}) ", app.sections().len()))
            .borders(Borders::ALL)
            .border_style(focus_border(is_focused)),
    );

    frame.render_widget(list, area);
}

fn draw_booths(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus_panel == FocusPanel::Booths;
    let booths = app.section_booths();

    // Borders and header row
    let visible_rows = (area.height as usize).saturating_sub(3);

    let scroll_offset = if app.selected_booth >= visible_rows {
        app.selected_booth - visible_rows + 1
    } else {
        0
    };

    let header = Row::new(vec!["Booth", "Label", "Name", "Events", "Preorder"])
        .style(HEADER_STYLE)
        .height(1);

    let rows: Vec<Row> = booths
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(visible_rows)
        .map(|(i, booth)| {
            let is_selected = i == app.selected_booth;
            let base = match app.plan.describe(&booth.code) {
                Some(BoothInfo::Occupied(_)) => Style::default(),
                _ => Style::default().fg(BRAND_MUTED),
            };
            let style = if is_selected && is_focused {
                SELECTED_STYLE
            } else if is_selected {
                base.add_modifier(Modifier::BOLD)
            } else if app.is_in_selected_rally(booth) {
                Style::default().fg(RALLY_COLOR)
            } else {
                base
            };

            let cells = match app.plan.describe(&booth.code) {
                Some(BoothInfo::Occupied(entry)) => vec![
                    booth.code.to_string(),
                    entry.booth_label.clone(),
                    entry.booth_name.clone(),
                    entry.total_events.to_string(),
                    if entry.has_preorder { "yes" } else { "-" }.to_string(),
                ],
                Some(BoothInfo::Named(name)) => vec![
                    booth.code.to_string(),
                    "-".to_string(),
                    name.to_string(),
                    "0".to_string(),
                    "-".to_string(),
                ],
                None => vec![
                    booth.code.to_string(),
                    "-".to_string(),
                    "(empty)".to_string(),
                    "0".to_string(),
                    "-".to_string(),
                ],
            };

            Row::new(cells).style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(6),
        Constraint::Length(10),
        Constraint::Percentage(60),
        Constraint::Length(7),
        Constraint::Length(9),
    ];

    let title = format!(
        " Section {} ({} booths) ",
        app.selected_section_name(),
        booths.len()
    );
    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(focus_border(is_focused)),
    );

    frame.render_widget(table, area);

    if booths.len() > visible_rows {
        draw_scrollbar(frame, area, booths.len(), app.selected_booth);
    }
}

fn draw_scrollbar(frame: &mut Frame, area: Rect, len: usize, position: usize) {
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(Some("↑"))
        .end_symbol(Some("↓"));
    let mut scrollbar_state = ScrollbarState::new(len).position(position);

    let scrollbar_area = Rect {
        x: area.x + area.width - 1,
        y: area.y + 2,
        width: 1,
        height: area.height.saturating_sub(3),
    };
    frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
}

pub(super) fn draw_footer(frame: &mut Frame, area: Rect, help: &str) {
    let footer = Paragraph::new(help)
        .style(Style::default().fg(BRAND_MUTED))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(footer, area);
}

pub fn draw_booth_detail(frame: &mut Frame, app: &App) {
    let Some(booth) = app.selected_booth_position() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(3), // Header: booth code
        Constraint::Length(3), // Info line
        Constraint::Min(6),    // Events
        Constraint::Length(6), // Selected event
        Constraint::Length(3), // Footer
    ])
    .split(frame.area());

    let header = Paragraph::new(format!(" Booth: {} ", booth.code))
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, chunks[0]);

    let events = app.selected_events();
    let name = match app.selected_info() {
        Some(BoothInfo::Occupied(entry)) => entry.booth_name.clone(),
        Some(BoothInfo::Named(name)) => name.to_string(),
        None => "(empty)".to_string(),
    };
    let rallies = app.rally_names_for_selected();
    let rallies = if rallies.is_empty() {
        "-".to_string()
    } else {
        rallies.join(", ")
    };
    let event_info = if events.is_empty() {
        "Events: 0".to_string()
    } else {
        format!("Event: {}/{}", app.selected_event + 1, events.len())
    };

    let info_text = format!(
        "{name}  |  Section {} #{}  |  {event_info}  |  Rallies: {rallies}",
        booth.section, booth.number
    );
    let info_widget = Paragraph::new(info_text).block(Block::default().borders(Borders::ALL));
    frame.render_widget(info_widget, chunks[1]);

    let visible_events = (chunks[2].height as usize).saturating_sub(3);
    let rows: Vec<Row> = events
        .iter()
        .enumerate()
        .skip(app.events_scroll_offset)
        .take(visible_events)
        .map(|(i, event)| {
            let style = if i == app.selected_event {
                SELECTED_STYLE
            } else {
                Style::default()
            };
            Row::new(vec![
                event.title.clone(),
                event.booth_label.clone(),
                if event.has_preorder { "yes" } else { "-" }.to_string(),
                event.images.len().to_string(),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Percentage(60),
        Constraint::Percentage(15),
        Constraint::Percentage(12),
        Constraint::Percentage(13),
    ];
    let event_header = Row::new(vec!["Title", "Label", "Preorder", "Images"]).style(HEADER_STYLE);
    let event_table = Table::new(rows, widths).header(event_header).block(
        Block::default()
            .title(format!(" Events ({}) ", events.len()))
            .borders(Borders::ALL),
    );
    frame.render_widget(event_table, chunks[2]);

    if events.len() > visible_events {
        draw_scrollbar(frame, chunks[2], events.len(), app.events_scroll_offset);
    }

    let detail = events.get(app.selected_event).map_or_else(
        || vec![Line::from(Span::styled(
            "No listings at this booth",
            Style::default().fg(BRAND_MUTED),
        ))],
        |event| {
            let when = match (&event.start_date_time, &event.end_date_time) {
                (Some(start), Some(end)) => format!("{start} → {end}"),
                (Some(start), None) => start.clone(),
                _ => "-".to_string(),
            };
            vec![
                Line::from(vec![
                    Span::styled("Id: ", HEADER_STYLE),
                    Span::raw(event.event_id.clone()),
                ]),
                Line::from(vec![Span::styled("When: ", HEADER_STYLE), Span::raw(when)]),
                Line::from(vec![
                    Span::styled("Thumb: ", HEADER_STYLE),
                    Span::raw(event.images.first().cloned().unwrap_or_else(|| "-".to_string())),
                ]),
            ]
        },
    );
    let detail_widget = Paragraph::new(detail)
        .wrap(Wrap { trim: true })
        .block(Block::default().title(" Listing ").borders(Borders::ALL));
    frame.render_widget(detail_widget, chunks[3]);

    draw_footer(
        frame,
        chunks[4],
        " Esc Back | ↑↓ Scroll | ←→ Listing | q Quit ",
    );
}
