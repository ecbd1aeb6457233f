use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;

pub fn handle_key(app: &mut App, key: KeyEvent, now: Instant) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || matches!(key.code, KeyCode::Char('q')) {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('o') => app.toggle_modal(now),
        KeyCode::Char('v') => app.validate_current(now),
        KeyCode::Enter => app.advance(now),
        KeyCode::Esc => app.dismiss(now),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn make_app() -> App {
        App::new(Config::default(), Instant::now()).unwrap()
    }

    #[test]
    fn q_quits() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('q')), Instant::now());
        assert!(app.should_quit());
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = make_app();
        let key = KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..press(KeyCode::Char('c'))
        };
        handle_key(&mut app, key, Instant::now());
        assert!(app.should_quit());
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = make_app();
        let key = KeyEvent {
            kind: KeyEventKind::Release,
            ..press(KeyCode::Char('o'))
        };
        handle_key(&mut app, key, Instant::now());
        assert!(!app.wizard().is_open());
    }

    #[test]
    fn validate_then_enter_advances() {
        let mut app = make_app();
        let now = Instant::now();
        handle_key(&mut app, press(KeyCode::Char('o')), now);
        handle_key(&mut app, press(KeyCode::Enter), now);
        assert_eq!(app.wizard().current_panel(), &1);

        handle_key(&mut app, press(KeyCode::Char('v')), now);
        handle_key(&mut app, press(KeyCode::Enter), now);
        assert_eq!(app.wizard().current_panel(), &2);
    }

    #[test]
    fn esc_dismisses_and_host_closes() {
        let mut app = make_app();
        let now = Instant::now();
        handle_key(&mut app, press(KeyCode::Char('o')), now);
        handle_key(&mut app, press(KeyCode::Esc), now);
        assert!(!app.wizard().is_open());
    }
}
