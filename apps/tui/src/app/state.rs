use crate::app::input::helpers::wrap_index;
use happiness_dashboard::domain::{YEAR_MAX, YEAR_MIN};
use happiness_dashboard::step::{ScrollDirection, LAST_STEP};
use happiness_dashboard::Dashboard;

/// How many suggestions the search popup lists.
pub const SUGGESTION_LIMIT: usize = 6;

/// Panel whose country list receives cursor keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Map,
    Scatter,
}

impl Focus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Map => "Map",
            Self::Scatter => "Scatter",
        }
    }

    pub const fn next(self) -> Self {
        match self {
            Self::Map => Self::Scatter,
            Self::Scatter => Self::Map,
        }
    }
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub dashboard: Dashboard,
    pub focus: Focus,
    pub map_cursor: usize,
    pub scatter_cursor: usize,
    /// Query being typed, `Some` while the search popup is open.
    pub search_input: Option<String>,
    pub suggestion_index: usize,
    pub show_help: bool,
    pub status_message: String,
}

impl App {
    pub fn new(dashboard: Dashboard) -> Self {
        Self {
            running: true,
            dashboard,
            focus: Focus::Map,
            map_cursor: 0,
            scatter_cursor: 0,
            search_input: None,
            suggestion_index: 0,
            show_help: false,
            status_message: String::new(),
        }
    }

    pub fn year(&self) -> i32 {
        self.dashboard.step().year()
    }

    /// Scrolls past the next waypoint.
    pub fn next_step(&mut self) {
        let current = self.dashboard.step().current_step();
        if current < LAST_STEP {
            self.dashboard.scroll(current + 1, ScrollDirection::Down);
        }
        self.status_message = format!("Step: {}", self.dashboard.step().current_metric());
    }

    /// Scrolls back above the current waypoint.
    pub fn previous_step(&mut self) {
        let current = self.dashboard.step().current_step();
        self.dashboard.scroll(current, ScrollDirection::Up);
        self.status_message = format!("Step: {}", self.dashboard.step().current_metric());
    }

    pub fn shift_year(&mut self, delta: i32) {
        let year = (self.year() + delta).clamp(YEAR_MIN, YEAR_MAX);
        if year != self.year() {
            self.dashboard.set_year(year);
            self.clamp_cursors();
            self.status_message = format!("Year: {year}");
        }
    }

    pub fn cycle_focus(&mut self) {
        self.focus = self.focus.next();
    }

    /// Countries in the focused panel, in display order.
    pub fn focused_countries(&self) -> Vec<&str> {
        let views = self.dashboard.views();
        match self.focus {
            Focus::Map => views
                .map
                .regions()
                .iter()
                .map(|region| region.country.as_str())
                .collect(),
            Focus::Scatter => views
                .scatter
                .points()
                .iter()
                .map(|point| point.country.as_str())
                .collect(),
        }
    }

    pub const fn cursor(&self) -> usize {
        match self.focus {
            Focus::Map => self.map_cursor,
            Focus::Scatter => self.scatter_cursor,
        }
    }

    pub fn move_cursor(&mut self, forward: bool) {
        let len = self.focused_countries().len();
        let cursor = wrap_index(self.cursor(), len, forward);
        match self.focus {
            Focus::Map => self.map_cursor = cursor,
            Focus::Scatter => self.scatter_cursor = cursor,
        }
    }

    fn clamp_cursors(&mut self) {
        let views = self.dashboard.views();
        self.map_cursor = self
            .map_cursor
            .min(views.map.regions().len().saturating_sub(1));
        self.scatter_cursor = self
            .scatter_cursor
            .min(views.scatter.points().len().saturating_sub(1));
    }

    /// Clicks the country under the cursor in the focused panel.
    pub fn click_focused(&mut self) {
        let Some(country) = self
            .focused_countries()
            .get(self.cursor())
            .map(|country| (*country).to_string())
        else {
            return;
        };

        match self.focus {
            Focus::Map => {
                if self.dashboard.click_map_country(&country) {
                    self.status_message = format!("Toggled {country}");
                } else {
                    self.status_message = "Map selection is full".to_string();
                }
            }
            Focus::Scatter => {
                self.dashboard.click_scatter_country(&country);
                self.status_message = format!("Scatter: {country}");
            }
        }
    }

    pub fn cycle_scatter_metric(&mut self) {
        let metric = self.dashboard.cycle_scatter_metric();
        self.clamp_cursors();
        self.status_message = format!("Scatter x-axis: {metric}");
    }

    pub fn clear(&mut self) {
        self.dashboard.clear();
        self.status_message = "Cleared. Press u to restore markers".to_string();
    }

    pub fn unclear(&mut self) {
        self.dashboard.unclear();
        self.status_message = "Markers restored".to_string();
    }

    pub fn open_search(&mut self) {
        self.search_input = Some(String::new());
        self.suggestion_index = 0;
    }

    pub fn close_search(&mut self) {
        self.search_input = None;
        self.suggestion_index = 0;
    }

    pub fn suggestions(&self) -> Vec<&str> {
        self.search_input.as_deref().map_or_else(Vec::new, |query| {
            self.dashboard.suggest(query, SUGGESTION_LIMIT)
        })
    }

    /// Searches for the highlighted suggestion, or the raw query when there is none.
    pub fn submit_search(&mut self) {
        let Some(query) = self.search_input.take() else {
            return;
        };
        let target = self
            .dashboard
            .suggest(&query, SUGGESTION_LIMIT)
            .get(self.suggestion_index)
            .map_or_else(|| query.clone(), |name| (*name).to_string());
        self.suggestion_index = 0;

        self.status_message = match self.dashboard.search(&target) {
            Some(country) => format!("Found {country}"),
            None => format!("No country matches \"{query}\""),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use happiness_dashboard::{DataStore, LoadError, Metric, Row};

    fn app() -> Result<App, LoadError> {
        let store = DataStore::load(vec![
            Row::new("Chad", 2013)
                .with_metric(Metric::LifeLadder, 3.2)
                .with_metric(Metric::SocialSupport, 0.6),
            Row::new("Peru", 2013)
                .with_metric(Metric::LifeLadder, 5.8)
                .with_metric(Metric::SocialSupport, 0.8),
            Row::new("Togo", 2013).with_metric(Metric::LifeLadder, 4.1),
            Row::new("Peru", 2014).with_metric(Metric::LifeLadder, 5.9),
        ])?;
        Ok(App::new(Dashboard::new(store, 2013)))
    }

    #[test]
    fn steps_stop_at_both_ends() -> Result<(), LoadError> {
        let mut app = app()?;
        app.previous_step();
        assert_eq!(app.dashboard.step().current_step(), 0);

        for _ in 0..20 {
            app.next_step();
        }
        assert_eq!(app.dashboard.step().current_step(), LAST_STEP);
        app.previous_step();
        assert_eq!(app.dashboard.step().current_step(), LAST_STEP - 1);
        Ok(())
    }

    #[test]
    fn year_stays_on_the_slider() -> Result<(), LoadError> {
        let mut app = app()?;
        app.shift_year(1);
        assert_eq!(app.year(), 2014);
        app.shift_year(100);
        assert_eq!(app.year(), YEAR_MAX);
        Ok(())
    }

    #[test]
    fn cursor_wraps_and_enter_clicks() -> Result<(), LoadError> {
        let mut app = app()?;
        assert_eq!(app.focused_countries(), ["Chad", "Peru", "Togo"]);

        app.move_cursor(false);
        assert_eq!(app.cursor(), 2);
        app.click_focused();
        assert!(app.dashboard.selection().contains("Togo"));

        app.cycle_focus();
        assert_eq!(app.focus, Focus::Scatter);
        assert_eq!(app.focused_countries(), ["Chad", "Peru"]);
        Ok(())
    }

    #[test]
    fn search_takes_the_highlighted_suggestion() -> Result<(), LoadError> {
        let mut app = app()?;
        app.open_search();
        app.search_input = Some("per".to_string());
        app.submit_search();

        assert!(app.search_input.is_none());
        assert_eq!(app.status_message, "Found Peru");
        assert_eq!(app.dashboard.selection().len(), 1);
        Ok(())
    }
}
