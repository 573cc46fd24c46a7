//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::actions::{Action, Outcome};
use crate::consts::cli_consts::ui::{poll_interval, splash_duration};
use crate::runtime::Dispatcher;
use crate::state::AppState;
use crate::ui::components::{banner, confirm, footer, header};
use crate::ui::dashboard::render_dashboard;
use crate::ui::input::{Command, handle_key};
use crate::ui::login::render_login;
use crate::ui::orders::render_orders;
use crate::ui::product_form::render_product_form;
use crate::ui::products::render_products;
use crate::ui::splash::render_splash;
use crate::view::View;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::Instant;
use tokio::sync::mpsc;

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
}

impl UIConfig {
    pub fn new(with_background_color: bool) -> Self {
        Self {
            with_background_color,
        }
    }
}

/// The different screens in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// The routed views: login, dashboard, products, forms and orders.
    Main,
}

pub struct App {
    state: AppState,
    dispatcher: Dispatcher,
    /// Receives finished requests from background tasks.
    outcomes: mpsc::Receiver<Outcome>,
    screen: Screen,
    ui_config: UIConfig,
}

impl App {
    pub fn new(
        state: AppState,
        dispatcher: Dispatcher,
        outcomes: mpsc::Receiver<Outcome>,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            state,
            dispatcher,
            outcomes,
            screen: Screen::Splash,
            ui_config,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    fn dispatch(&mut self, actions: Vec<Action>) {
        for action in actions {
            self.state.begin(&action);
            self.dispatcher.dispatch(action);
        }
    }

    fn drain_outcomes(&mut self) {
        while let Ok(outcome) = self.outcomes.try_recv() {
            let follow_up = self.state.apply(outcome);
            self.dispatch(follow_up);
        }
    }

    fn logout(&mut self) {
        self.dispatcher.api().set_token(None);
        self.state.logout();
    }

    /// Returns false once the user asked to quit.
    fn execute(&mut self, command: Command) -> bool {
        match command {
            Command::None => {}
            Command::Quit => return false,
            Command::Logout => self.logout(),
            Command::Dispatch(actions) => self.dispatch(actions),
        }
        true
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
///
/// Returns the number of requests still in flight when the user quit.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<usize> {
    let splash_start = Instant::now();

    // A saved token is checked while the splash is up
    let restore = app.state.restore();
    app.dispatch(restore);

    loop {
        app.drain_outcomes();
        terminal.draw(|f| render(f, &app))?;

        if app.screen == Screen::Splash && splash_start.elapsed() >= splash_duration() {
            app.screen = Screen::Main;
            continue;
        }

        // Poll for key events
        if event::poll(poll_interval())? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == KeyEventKind::Release {
                    continue;
                }

                if app.screen == Screen::Splash {
                    // Any key press will skip the splash screen
                    app.screen = Screen::Main;
                    continue;
                }

                let command = handle_key(&mut app.state, key);
                if !app.execute(command) {
                    return Ok(app.state.in_flight());
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, app: &App) {
    if app.ui_config.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    if app.screen == Screen::Splash {
        render_splash(f);
        return;
    }

    let state = &app.state;
    let banner_height = if state.banner().is_some() { 3 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(banner_height),
            Constraint::Fill(1),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, chunks[0], state);
    if let Some(message) = state.banner() {
        banner::render_banner(f, chunks[1], message);
    }

    match state.view() {
        View::Login => render_login(f, chunks[2], state),
        View::Dashboard => render_dashboard(f, chunks[2], state),
        View::Products => render_products(f, chunks[2], state),
        View::AddProduct | View::EditProduct { .. } => render_product_form(f, chunks[2], state),
        View::Orders => render_orders(f, chunks[2], state),
    }

    footer::render_footer(f, chunks[3], state);

    if let Some(pending) = state.pending_delete() {
        confirm::render_confirm(f, pending);
    }
}
