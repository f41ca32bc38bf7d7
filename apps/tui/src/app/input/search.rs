use crate::app::input::helpers::wrap_index;
use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_search_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => app.close_search(),
        KeyCode::Enter => app.submit_search(),
        KeyCode::Up => {
            let len = app.suggestions().len();
            app.suggestion_index = wrap_index(app.suggestion_index, len, false);
        }
        KeyCode::Down | KeyCode::Tab => {
            let len = app.suggestions().len();
            app.suggestion_index = wrap_index(app.suggestion_index, len, true);
        }
        KeyCode::Backspace => {
            if let Some(query) = &mut app.search_input {
                query.pop();
            }
            app.suggestion_index = 0;
        }
        KeyCode::Char(ch) => {
            if let Some(query) = &mut app.search_input {
                query.push(ch);
            }
            app.suggestion_index = 0;
        }
        _ => {}
    }
}
