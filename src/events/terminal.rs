use crate::pipeline::SortField;
use crate::state::{Mode, RowAction, State};
use anyhow::Result;
use clipboard::{ClipboardContext, ClipboardProvider};
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
/// The polling thread owns the only sender, so `handle_next` fails instead of
/// blocking once that thread has stopped.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            loop {
                match event::poll(tick_rate) {
                    Ok(true) => match event::read() {
                        Ok(CrosstermEvent::Key(key)) => {
                            if tx.send(Event::Input(key)).is_err() {
                                break;
                            }
                        }
                        Ok(_) => (),
                        Err(e) => {
                            error!("Failed to read terminal event: {}", e);
                            break;
                        }
                    },
                    Ok(false) => (),
                    Err(e) => {
                        error!("Failed to poll terminal events: {}", e);
                        break;
                    }
                }
                if tx.send(Event::Tick).is_err() {
                    break;
                }
            }
        });
        Handler { rx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(key) => Ok(handle_key(state, key)),
            Event::Tick => {
                if state.is_loading() {
                    state.advance_spinner_index();
                }
                Ok(true)
            }
        }
    }
}

impl Default for Handler {
    fn default() -> Self {
        Handler::new()
    }
}

/// Apply a key press to the state. Returns false if exit was requested.
///
pub fn handle_key(state: &mut State, key: KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return true;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        debug!("Processing exit terminal event '{:?}'...", key);
        return false;
    }

    // Any key closes an open alert
    if state.get_alert().is_some() {
        state.dismiss_alert();
        return true;
    }

    match state.current_mode() {
        Mode::Search => handle_search_key(state, key),
        Mode::PageSizeMenu => handle_page_size_key(state, key),
        Mode::Normal => return handle_normal_key(state, key),
    }
    true
}

fn handle_search_key(state: &mut State, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            debug!("Processing exit search mode event '{:?}'...", key);
            state.exit_search_mode();
        }
        KeyCode::Backspace => {
            state.backspace_search();
        }
        KeyCode::Char(c)
            if matches!(key.modifiers, KeyModifiers::NONE | KeyModifiers::SHIFT) =>
        {
            state.add_search_char(c);
        }
        _ => (),
    }
}

fn handle_page_size_key(state: &mut State, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            state.close_page_size_menu();
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.next_page_size_option();
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.previous_page_size_option();
        }
        KeyCode::Enter => {
            state.select_page_size_option();
        }
        _ => (),
    }
}

fn handle_normal_key(state: &mut State, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => {
            debug!("Processing exit terminal event '{:?}'...", key);
            return false;
        }
        KeyCode::Char('/') => {
            state.enter_search_mode();
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.next_row();
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.previous_row();
        }
        KeyCode::Left | KeyCode::Char('h') => {
            state.previous_page();
        }
        KeyCode::Right | KeyCode::Char('l') => {
            state.next_page();
        }
        KeyCode::Char('t') => {
            state.sort_by(SortField::Title);
        }
        KeyCode::Char('b') => {
            state.sort_by(SortField::Body);
        }
        KeyCode::Char('p') => {
            state.open_page_size_menu();
        }
        KeyCode::Char('e') => {
            state.act_on_selected(RowAction::Edit);
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            state.act_on_selected(RowAction::Delete);
        }
        KeyCode::Char('v') | KeyCode::Enter => {
            state.act_on_selected(RowAction::View);
        }
        KeyCode::Char('y') => {
            copy_selected_title(state);
        }
        KeyCode::Char('r') => {
            state.start_fetch();
        }
        KeyCode::Char('g') => {
            state.toggle_log();
        }
        KeyCode::Esc if !state.get_list().search_term().is_empty() => {
            state.set_search_term("");
        }
        _ => (),
    }
    true
}

fn copy_selected_title(state: &State) {
    let Some(post) = state.selected_post() else {
        return;
    };
    match ClipboardContext::new().and_then(|mut ctx| ctx.set_contents(post.title.clone())) {
        Ok(()) => info!("Copied title of post {} to clipboard.", post.id),
        Err(e) => warn!("Failed to copy to clipboard: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Post, PostId};
    use crate::pipeline::PageSize;

    fn press(state: &mut State, code: KeyCode) -> bool {
        handle_key(state, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn state_with_posts(count: i64) -> State {
        let mut state = State::default();
        state.set_posts(
            (1..=count)
                .map(|id| Post {
                    id: PostId::Int(id),
                    title: format!("post {}", id),
                    body: format!("body {}", id),
                    user_id: None,
                })
                .collect(),
        );
        state
    }

    #[test]
    fn quit_keys() {
        let mut state = State::default();
        assert!(!press(&mut state, KeyCode::Char('q')));
        assert!(!handle_key(
            &mut state,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
        ));
    }

    #[test]
    fn search_mode_captures_characters() {
        let mut state = state_with_posts(12);
        press(&mut state, KeyCode::Char('/'));
        for c in "post 1q".chars() {
            assert!(press(&mut state, KeyCode::Char(c)));
        }
        assert_eq!(state.get_list().search_term(), "post 1q");
        press(&mut state, KeyCode::Backspace);
        press(&mut state, KeyCode::Backspace);
        assert_eq!(state.get_list().search_term(), "post ");
        press(&mut state, KeyCode::Esc);
        assert!(!state.is_search_mode());

        press(&mut state, KeyCode::Esc);
        assert_eq!(state.get_list().search_term(), "");
    }

    #[test]
    fn search_ignores_modified_characters() {
        let mut state = state_with_posts(3);
        press(&mut state, KeyCode::Char('/'));
        handle_key(
            &mut state,
            KeyEvent::new(KeyCode::Char('P'), KeyModifiers::SHIFT),
        );
        handle_key(
            &mut state,
            KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL),
        );
        handle_key(&mut state, KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT));
        assert_eq!(state.get_list().search_term(), "P");
    }

    #[test]
    fn stopped_input_thread_ends_the_event_loop() {
        let (tx, rx) = mpsc::channel::<Event<KeyEvent>>();
        tx.send(Event::Tick).unwrap();
        drop(tx);
        let handler = Handler { rx };
        let mut state = State::default();
        assert!(handler.handle_next(&mut state).unwrap());
        assert!(handler.handle_next(&mut state).is_err());
    }

    #[test]
    fn paging_keys() {
        let mut state = state_with_posts(25);
        press(&mut state, KeyCode::Char('l'));
        press(&mut state, KeyCode::Right);
        press(&mut state, KeyCode::Right);
        assert_eq!(state.get_list().current_page(), 3);
        press(&mut state, KeyCode::Char('h'));
        assert_eq!(state.get_list().current_page(), 2);
    }

    #[test]
    fn page_size_menu_keys() {
        let mut state = state_with_posts(40);
        press(&mut state, KeyCode::Char('p'));
        press(&mut state, KeyCode::Char('j'));
        press(&mut state, KeyCode::Char('j'));
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.get_list().page_size(), PageSize::TwentyFive);
        assert_eq!(state.current_mode(), Mode::Normal);
    }

    #[test]
    fn alert_is_dismissed_by_next_key() {
        let mut state = state_with_posts(3);
        press(&mut state, KeyCode::Char('e'));
        assert_eq!(state.get_alert(), Some("Edit post with ID: 1"));
        assert!(press(&mut state, KeyCode::Char('q')));
        assert!(state.get_alert().is_none());
    }

    #[test]
    fn delete_key_removes_selected_post() {
        let mut state = state_with_posts(3);
        press(&mut state, KeyCode::Char('j'));
        press(&mut state, KeyCode::Char('d'));
        let ids: Vec<String> = state
            .get_list()
            .items()
            .iter()
            .map(|p| p.id.to_string())
            .collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn sort_keys() {
        let mut state = State::default();
        state.set_posts(vec![
            Post {
                id: PostId::Int(1),
                title: "b".to_string(),
                body: "a".to_string(),
                user_id: None,
            },
            Post {
                id: PostId::Int(2),
                title: "a".to_string(),
                body: "b".to_string(),
                user_id: None,
            },
        ]);
        press(&mut state, KeyCode::Char('t'));
        assert_eq!(state.get_view().page[0].id, PostId::Int(2));
        press(&mut state, KeyCode::Char('b'));
        assert_eq!(state.get_view().page[0].id, PostId::Int(1));
    }
}
