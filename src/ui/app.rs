use crate::model::{BoothEntry, BoothEvent, BoothInfo, BoothPosition, FloorPlan, StampRally};
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{DefaultTerminal, Frame};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View {
    Dashboard,
    BoothDetail,
    Map,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusPanel {
    Sections,
    Booths,
}

pub struct App {
    pub plan: FloorPlan,
    pub view: View,
    pub focus_panel: FocusPanel,
    pub selected_section: usize,
    pub selected_booth: usize,
    pub selected_event: usize,
    /// `None` shows no rally highlight.
    pub selected_rally: Option<usize>,
    pub events_scroll_offset: usize,
    pub title_code_count: usize,
    pub should_quit: bool,
    sections: Vec<String>,
    rally_codes: HashSet<String>,
}

impl App {
    #[must_use]
    pub fn new(plan: FloorPlan) -> Self {
        let sections: Vec<String> = plan.sections().into_iter().map(str::to_string).collect();
        Self {
            plan,
            view: View::Dashboard,
            focus_panel: FocusPanel::Booths,
            selected_section: 0,
            selected_booth: 0,
            selected_event: 0,
            selected_rally: None,
            events_scroll_offset: 0,
            title_code_count: 0,
            should_quit: false,
            sections,
            rally_codes: HashSet::new(),
        }
    }

    #[must_use]
    pub fn with_title_code_count(mut self, count: usize) -> Self {
        self.title_code_count = count;
        self
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        match self.view {
            View::Dashboard => super::dashboard::draw_dashboard(frame, self),
            View::BoothDetail => super::dashboard::draw_booth_detail(frame, self),
            View::Map => super::map::draw_map(frame, self),
        }
    }

    fn handle_events(&mut self) -> Result<()> {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                self.handle_key(key.code);
            }
        }
        Ok(())
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        match self.view {
            View::Dashboard => self.handle_dashboard_keys(code),
            View::BoothDetail => self.handle_detail_keys(code),
            View::Map => self.handle_map_keys(code),
        }
    }

    fn handle_dashboard_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.navigate_up(),
            KeyCode::Down | KeyCode::Char('j') => self.navigate_down(),
            KeyCode::Left | KeyCode::Char('h') => self.focus_panel = FocusPanel::Sections,
            KeyCode::Right | KeyCode::Char('l') => self.focus_panel = FocusPanel::Booths,
            KeyCode::Enter => {
                if self.focus_panel == FocusPanel::Booths {
                    self.enter_booth_detail();
                }
            }
            KeyCode::Char('m') => self.view = View::Map,
            KeyCode::Char('r') => self.cycle_rally(),
            _ => {}
        }
    }

    fn handle_detail_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Backspace => {
                self.view = View::Dashboard;
                self.events_scroll_offset = 0;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.events_scroll_offset = self.events_scroll_offset.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let max = self.selected_events().len().saturating_sub(1);
                if self.events_scroll_offset < max {
                    self.events_scroll_offset += 1;
                }
            }
            KeyCode::Left | KeyCode::Char('h') => self.previous_event(),
            KeyCode::Right | KeyCode::Char('l') => self.next_event(),
            _ => {}
        }
    }

    fn handle_map_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('m') => self.view = View::Dashboard,
            KeyCode::Left | KeyCode::Char('h') => self.previous_booth(),
            KeyCode::Right | KeyCode::Char('l') => self.next_booth(),
            KeyCode::Up | KeyCode::Char('k') => self.previous_section(),
            KeyCode::Down | KeyCode::Char('j') => self.next_section(),
            KeyCode::Enter => self.enter_booth_detail(),
            KeyCode::Char('r') => self.cycle_rally(),
            _ => {}
        }
    }

    fn navigate_up(&mut self) {
        match self.focus_panel {
            FocusPanel::Sections => self.previous_section(),
            FocusPanel::Booths => self.previous_booth(),
        }
    }

    fn navigate_down(&mut self) {
        match self.focus_panel {
            FocusPanel::Sections => self.next_section(),
            FocusPanel::Booths => self.next_booth(),
        }
    }

    fn previous_section(&mut self) {
        if self.selected_section > 0 {
            self.selected_section -= 1;
            self.reset_booth_selection();
        }
    }

    fn next_section(&mut self) {
        if self.selected_section < self.sections.len().saturating_sub(1) {
            self.selected_section += 1;
            self.reset_booth_selection();
        }
    }

    fn reset_booth_selection(&mut self) {
        self.selected_booth = 0;
    }

    fn previous_booth(&mut self) {
        if self.selected_booth > 0 {
            self.selected_booth -= 1;
        }
    }

    fn next_booth(&mut self) {
        if self.selected_booth < self.section_booths().len().saturating_sub(1) {
            self.selected_booth += 1;
        }
    }

    fn enter_booth_detail(&mut self) {
        if self.selected_booth_position().is_some() {
            self.view = View::BoothDetail;
            self.selected_event = 0;
            self.events_scroll_offset = 0;
        }
    }

    fn previous_event(&mut self) {
        let count = self.selected_events().len();
        if count == 0 {
            return;
        }
        self.selected_event = if self.selected_event > 0 {
            self.selected_event - 1
        } else {
            count - 1
        };
    }

    fn next_event(&mut self) {
        let count = self.selected_events().len();
        if count == 0 {
            return;
        }
        self.selected_event = (self.selected_event + 1) % count;
    }

    /// Steps through rallies, then back to no highlight.
    pub fn cycle_rally(&mut self) {
        let count = self.plan.stamp_rallies.len();
        self.selected_rally = match self.selected_rally {
            None if count > 0 => Some(0),
            Some(i) if i + 1 < count => Some(i + 1),
            _ => None,
        };
        self.rally_codes = self
            .selected_rally()
            .map(|rally| rally.expanded_booths().into_iter().collect())
            .unwrap_or_default();
    }

    #[must_use]
    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    #[must_use]
    pub fn selected_section_name(&self) -> &str {
        self.sections
            .get(self.selected_section)
            .map_or("", String::as_str)
    }

    #[must_use]
    pub fn section_booths(&self) -> Vec<&BoothPosition> {
        self.plan.booths_in_section(self.selected_section_name())
    }

    /// Occupied booths over total booths in a section.
    #[must_use]
    pub fn section_occupancy(&self, section: &str) -> (usize, usize) {
        let booths = self.plan.booths_in_section(section);
        let occupied = booths
            .iter()
            .filter(|b| self.plan.booth_map.contains_key(&b.code))
            .count();
        (occupied, booths.len())
    }

    #[must_use]
    pub fn selected_booth_position(&self) -> Option<&BoothPosition> {
        self.section_booths().get(self.selected_booth).copied()
    }

    #[must_use]
    pub fn selected_info(&self) -> Option<BoothInfo<'_>> {
        self.selected_booth_position()
            .and_then(|booth| self.plan.describe(&booth.code))
    }

    #[must_use]
    pub fn selected_entry(&self) -> Option<&BoothEntry> {
        self.selected_booth_position()
            .and_then(|booth| self.plan.entry(&booth.code))
    }

    #[must_use]
    pub fn selected_events(&self) -> &[BoothEvent] {
        self.selected_entry()
            .map(|entry| entry.all_events.as_slice())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn selected_rally(&self) -> Option<&StampRally> {
        self.selected_rally
            .and_then(|i| self.plan.stamp_rallies.get(i))
    }

    #[must_use]
    pub fn is_in_selected_rally(&self, booth: &BoothPosition) -> bool {
        self.rally_codes.contains(&booth.code.to_string())
    }

    #[must_use]
    pub fn is_selected(&self, booth: &BoothPosition) -> bool {
        self.selected_booth_position()
            .is_some_and(|selected| selected.code == booth.code)
    }

    #[must_use]
    pub fn rally_names_for_selected(&self) -> Vec<&str> {
        self.selected_booth_position()
            .map(|booth| {
                self.plan
                    .rallies_for_booth(&booth.code)
                    .into_iter()
                    .map(|rally| rally.name.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::correlate::build_floor_plan;
    use crate::layout::LayoutSource;
    use crate::model::{BoothNames, Listing};
    use pretty_assertions::assert_eq;

    fn listing(id: &str, title: &str) -> Listing {
        Listing {
            id: id.to_string(),
            title: title.to_string(),
            images: Vec::new(),
            has_preorder: false,
            start_date_time: None,
            end_date_time: None,
        }
    }

    fn rally(name: &str, booths: &[&str]) -> StampRally {
        StampRally {
            name: name.to_string(),
            rules: String::new(),
            booths: booths.iter().map(|b| (*b).to_string()).collect(),
            artists: None,
            link: None,
        }
    }

    fn app() -> App {
        let listings = vec![
            listing("1", "A1 - Coffee"),
            listing("2", "A1 Tea"),
            listing("3", "B2 - Books"),
        ];
        let plan = build_floor_plan(
            &listings,
            &LayoutSource::Generated,
            BoothNames::default(),
            vec![rally("Spring", &["A1-2"]), rally("Night", &["B2"])],
        );
        App::new(plan)
    }

    #[test]
    fn starts_on_first_booth_of_first_section() {
        let app = app();
        assert_eq!(app.sections().len(), 10);
        assert_eq!(app.selected_section_name(), "A");
        assert_eq!(
            app.selected_booth_position().map(|b| b.code.to_string()),
            Some("A1".to_string())
        );
        assert_eq!(app.selected_events().len(), 2);
        assert_eq!(app.section_occupancy("A"), (1, 30));
    }

    #[test]
    fn section_change_resets_booth() {
        let mut app = app();
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Down);
        assert_eq!(app.selected_booth, 2);

        app.handle_key(KeyCode::Left);
        app.handle_key(KeyCode::Down);
        assert_eq!(app.selected_section_name(), "B");
        assert_eq!(app.selected_booth, 0);

        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Up);
        assert_eq!(app.selected_section, 0);
    }

    #[test]
    fn booth_selection_stops_at_section_end() {
        let mut app = app();
        for _ in 0..40 {
            app.handle_key(KeyCode::Char('j'));
        }
        assert_eq!(app.selected_booth, 29);
    }

    #[test]
    fn detail_cycles_events_with_wraparound() {
        let mut app = app();
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.view, View::BoothDetail);

        app.handle_key(KeyCode::Right);
        assert_eq!(app.selected_event, 1);
        app.handle_key(KeyCode::Right);
        assert_eq!(app.selected_event, 0);
        app.handle_key(KeyCode::Left);
        assert_eq!(app.selected_event, 1);

        app.handle_key(KeyCode::Esc);
        assert_eq!(app.view, View::Dashboard);
        assert!(!app.should_quit);
    }

    #[test]
    fn enter_on_sections_panel_stays_on_dashboard() {
        let mut app = app();
        app.handle_key(KeyCode::Char('h'));
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.view, View::Dashboard);
    }

    #[test]
    fn rally_cycle_highlights_expanded_booths() {
        let mut app = app();
        let a2 = app.plan.booths[1].clone();
        let b2 = app.plan.booths_in_section("B")[1].clone();

        app.handle_key(KeyCode::Char('r'));
        assert_eq!(app.selected_rally().map(|r| r.name.as_str()), Some("Spring"));
        assert!(app.is_in_selected_rally(&a2));
        assert!(!app.is_in_selected_rally(&b2));

        app.handle_key(KeyCode::Char('r'));
        assert!(app.is_in_selected_rally(&b2));

        app.handle_key(KeyCode::Char('r'));
        assert_eq!(app.selected_rally, None);
        assert!(!app.is_in_selected_rally(&b2));
    }

    #[test]
    fn map_view_navigation() {
        let mut app = app();
        app.handle_key(KeyCode::Char('m'));
        assert_eq!(app.view, View::Map);

        app.handle_key(KeyCode::Right);
        app.handle_key(KeyCode::Down);
        assert_eq!(app.selected_section_name(), "B");
        app.handle_key(KeyCode::Right);
        assert_eq!(app.rally_names_for_selected(), vec!["Night"]);

        app.handle_key(KeyCode::Enter);
        assert_eq!(app.view, View::BoothDetail);
        assert_eq!(app.selected_entry().map(|e| e.title.as_str()), Some("B2 - Books"));

        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
