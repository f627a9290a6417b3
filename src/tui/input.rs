use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Minutes added or removed per duration key press.
pub const DURATION_STEP: i32 = 1;
/// Volume change per key press.
pub const VOLUME_STEP: f32 = 0.05;

/// What a key press asks the timer screen to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Start,
    Stop,
    Toggle,
    Reset,
    /// Change the session length by this many minutes.
    AdjustDuration(i32),
    AdjustVolume(f32),
    NextSound,
    PrevSound,
    Quit,
}

/// Map a key press to an [`Action`].
pub fn handle_key(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('s') | KeyCode::Enter => Some(Action::Start),
        KeyCode::Char('x') => Some(Action::Stop),
        KeyCode::Char(' ') => Some(Action::Toggle),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => {
            Some(Action::AdjustDuration(DURATION_STEP))
        }
        KeyCode::Left | KeyCode::Char('-') => Some(Action::AdjustDuration(-DURATION_STEP)),
        KeyCode::Up => Some(Action::AdjustVolume(VOLUME_STEP)),
        KeyCode::Down => Some(Action::AdjustVolume(-VOLUME_STEP)),
        KeyCode::Tab => Some(Action::NextSound),
        KeyCode::BackTab => Some(Action::PrevSound),
        _ => None,
    }
}

/// Key hints for the footer; the toggle label follows the timer state.
pub fn key_hints(running: bool) -> Vec<(&'static str, &'static str)> {
    vec![
        ("Space", if running { "Stop" } else { "Start" }),
        ("R", "Reset"),
        ("←/→", "Minutes"),
        ("↑/↓", "Volume"),
        ("Tab", "Sound"),
        ("Q", "Quit"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn transport_keys() {
        assert_eq!(handle_key(key(KeyCode::Char('s'))), Some(Action::Start));
        assert_eq!(handle_key(key(KeyCode::Enter)), Some(Action::Start));
        assert_eq!(handle_key(key(KeyCode::Char('x'))), Some(Action::Stop));
        assert_eq!(handle_key(key(KeyCode::Char(' '))), Some(Action::Toggle));
        assert_eq!(handle_key(key(KeyCode::Char('r'))), Some(Action::Reset));
    }

    #[test]
    fn adjustment_keys() {
        assert_eq!(handle_key(key(KeyCode::Right)), Some(Action::AdjustDuration(1)));
        assert_eq!(handle_key(key(KeyCode::Char('-'))), Some(Action::AdjustDuration(-1)));
        assert_eq!(handle_key(key(KeyCode::Up)), Some(Action::AdjustVolume(0.05)));
        assert_eq!(handle_key(key(KeyCode::Down)), Some(Action::AdjustVolume(-0.05)));
        assert_eq!(handle_key(key(KeyCode::Tab)), Some(Action::NextSound));
        assert_eq!(handle_key(key(KeyCode::BackTab)), Some(Action::PrevSound));
    }

    #[test]
    fn quit_keys() {
        assert_eq!(handle_key(key(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(handle_key(key(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(
            handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
    }

    #[test]
    fn control_chords_do_not_trigger_plain_actions() {
        assert_eq!(
            handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn unmapped_key() {
        assert_eq!(handle_key(key(KeyCode::Char('z'))), None);
    }

    #[test]
    fn hints_follow_state() {
        assert_eq!(key_hints(false)[0], ("Space", "Start"));
        assert_eq!(key_hints(true)[0], ("Space", "Stop"));
    }
}
