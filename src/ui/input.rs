//! Keyboard handling
//!
//! Maps key presses onto [`AppState`] intents. The returned [`Command`] tells
//! the UI loop what to do next.

use crate::actions::Action;
use crate::forms::ProductField;
use crate::state::AppState;
use crate::view::View;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, PartialEq)]
pub enum Command {
    None,
    Quit,
    Logout,
    Dispatch(Vec<Action>),
}

impl From<Vec<Action>> for Command {
    fn from(actions: Vec<Action>) -> Self {
        if actions.is_empty() {
            Command::None
        } else {
            Command::Dispatch(actions)
        }
    }
}

pub fn handle_key(state: &mut AppState, key: KeyEvent) -> Command {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Command::Quit;
    }

    if state.pending_delete().is_some() {
        return handle_confirm(state, key);
    }

    // Esc closes an open banner before doing anything else.
    if key.code == KeyCode::Esc && state.banner().is_some() {
        state.dismiss_banner();
        return Command::None;
    }

    let view = state.view().clone();
    if view == View::Login {
        handle_login(state, key)
    } else if view.is_form() {
        handle_product_form(state, key)
    } else {
        handle_list(state, key)
    }
}

fn handle_confirm(state: &mut AppState, key: KeyEvent) -> Command {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => state.confirm_delete().into(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            state.cancel_delete();
            Command::None
        }
        _ => Command::None,
    }
}

fn handle_login(state: &mut AppState, key: KeyEvent) -> Command {
    match key.code {
        KeyCode::Esc => Command::Quit,
        KeyCode::Enter => state.submit_auth().into(),
        KeyCode::F(2) => {
            state.auth_form.toggle_mode();
            Command::None
        }
        KeyCode::Tab | KeyCode::Down => {
            state.auth_form.focus_next();
            Command::None
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.auth_form.focus_previous();
            Command::None
        }
        KeyCode::Backspace => {
            state.auth_form.focused_input_mut().backspace();
            Command::None
        }
        KeyCode::Char(c) => {
            state.auth_form.focused_input_mut().push(c);
            Command::None
        }
        _ => Command::None,
    }
}

fn handle_product_form(state: &mut AppState, key: KeyEvent) -> Command {
    match key.code {
        KeyCode::Esc => return state.navigate(View::Products).into(),
        KeyCode::Enter => return state.submit_product().into(),
        _ => {}
    }

    let form = &mut state.product_form;
    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            form.focus_next();
            Command::None
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.focus_previous();
            Command::None
        }
        KeyCode::Left if form.focused() == ProductField::Category => {
            form.previous_category();
            Command::None
        }
        KeyCode::Right if form.focused() == ProductField::Category => {
            form.next_category();
            Command::None
        }
        KeyCode::Backspace => {
            if let Some(input) = form.focused_input_mut() {
                input.backspace();
            }
            Command::None
        }
        KeyCode::Char(c) => {
            if let Some(input) = form.focused_input_mut() {
                input.push(c);
            }
            Command::None
        }
        _ => Command::None,
    }
}

fn handle_list(state: &mut AppState, key: KeyEvent) -> Command {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Command::Quit,
        KeyCode::Char('1') => return state.navigate(View::Dashboard).into(),
        KeyCode::Char('2') => return state.navigate(View::Products).into(),
        KeyCode::Char('3') => return state.navigate(View::Orders).into(),
        KeyCode::Char('a') => return state.navigate(View::AddProduct).into(),
        KeyCode::Char('l') => return Command::Logout,
        KeyCode::Char('r') => return state.refresh().into(),
        _ => {}
    }

    match state.view().clone() {
        View::Products => match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                state.select_next_product();
                Command::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                state.select_previous_product();
                Command::None
            }
            KeyCode::Enter | KeyCode::Char('e') => {
                let edit = state
                    .selected_product()
                    .and_then(|product| View::edit_product(product.id.clone()).ok());
                match edit {
                    Some(view) => state.navigate(view).into(),
                    None => Command::None,
                }
            }
            KeyCode::Char('d') => {
                state.request_delete();
                Command::None
            }
            _ => Command::None,
        },
        View::Orders => match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                state.select_next_order();
                Command::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                state.select_previous_order();
                Command::None
            }
            KeyCode::Char('f') => {
                state.set_order_filter(state.order_filter().next());
                Command::None
            }
            KeyCode::Char('F') => {
                state.set_order_filter(state.order_filter().previous());
                Command::None
            }
            KeyCode::Char('g') => state.generate_sample_orders().into(),
            _ => Command::None,
        },
        _ => Command::None,
    }
}
