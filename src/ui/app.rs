use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use tracing::{debug, info};

use super::animation::DropAnimation;
use super::board_widget::BoardView;
use super::game_view::{self, Screen};
use super::settings_view::SettingsForm;
use crate::config::{AppConfig, UiConfig};
use crate::error::{MoveError, SetupError};
use crate::game::{Engine, GameSettings, GameState};

/// Terminal front end. Owns one engine at a time and replaces it on restart.
pub struct App {
    engine: Engine,
    ui: UiConfig,
    selected_column: usize,
    form: Option<SettingsForm>,
    animation: Option<DropAnimation>,
    last_frame: Instant,
    /// Written by the engine's finish observer.
    finished: Rc<RefCell<Option<GameState>>>,
    banner: Option<String>,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> Result<Self, SetupError> {
        let (engine, finished) = start_engine(config.game)?;
        Ok(App {
            selected_column: config.game.width / 2,
            engine,
            ui: config.ui.clone(),
            form: None,
            animation: None,
            last_frame: Instant::now(),
            finished,
            banner: None,
            message: None,
            should_quit: false,
        })
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn form(&self) -> Option<&SettingsForm> {
        self.form.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Text for the status bar: the last transient message, otherwise the
    /// end-of-game banner.
    pub fn status(&self) -> Option<&str> {
        self.message.as_deref().or(self.banner.as_deref())
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal.draw(|f| self.render(f)).map_err(Into::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;

            let frame_time = Duration::from_millis(self.ui.drop_frame_ms);
            if self.animation.is_some() && self.last_frame.elapsed() >= frame_time {
                self.last_frame = Instant::now();
                self.on_frame();
            }
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(self.ui.poll_interval_ms))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        if self.form.is_some() {
            self.handle_settings_key(key.code);
        } else {
            self.handle_game_key(key.code);
        }
    }

    fn handle_game_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                let last = self.engine.grid().width() - 1;
                self.selected_column = (self.selected_column + 1).min(last);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_token();
            }
            KeyCode::Char('r') => {
                self.restart(self.engine.settings());
            }
            KeyCode::Char('s') => {
                self.form = Some(SettingsForm::new(self.engine.settings()));
            }
            _ => {}
        }
    }

    fn handle_settings_key(&mut self, code: KeyCode) {
        let Some(form) = self.form.as_mut() else {
            return;
        };
        match code {
            KeyCode::Esc => {
                self.form = None;
                self.message = Some("Settings unchanged".to_string());
            }
            KeyCode::Up => form.previous_field(),
            KeyCode::Down | KeyCode::Tab => form.next_field(),
            KeyCode::Left | KeyCode::Char('-') => form.adjust(-1),
            KeyCode::Right | KeyCode::Char('+') => form.adjust(1),
            KeyCode::Enter => {
                let settings = form.draft();
                self.form = None;
                self.restart(settings);
            }
            _ => {}
        }
    }

    /// Replace the engine with a fresh one. The old engine and its finish
    /// observer are dropped here.
    pub fn restart(&mut self, settings: GameSettings) {
        match start_engine(settings.clamped()) {
            Ok((engine, finished)) => {
                self.selected_column = engine.grid().width() / 2;
                self.engine = engine;
                self.finished = finished;
                self.animation = None;
                self.banner = None;
                self.message = Some("New game started!".to_string());
            }
            Err(err) => {
                self.message = Some(err.to_string());
            }
        }
    }

    /// Drop a token in the selected column
    fn drop_token(&mut self) {
        // One token in flight at a time.
        if self.animation.is_some() {
            debug!("drop ignored while a token is falling");
            return;
        }

        if self.engine.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        let color = self.engine.current_color();
        match self.engine.drop_token(self.selected_column) {
            Ok(placement) => {
                self.animation = Some(DropAnimation::new(
                    self.selected_column,
                    placement.row,
                    color,
                    self.engine.grid().height(),
                ));
                self.last_frame = Instant::now();
            }
            Err(MoveError::ColumnFull { .. }) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(err) => {
                self.message = Some(err.to_string());
            }
        }
    }

    /// Advance the falling token by one row. When it lands after the final
    /// move, show the result the finish observer reported.
    pub fn on_frame(&mut self) {
        let landed = match self.animation.as_mut() {
            Some(anim) => anim.step(),
            None => return,
        };
        if !landed {
            return;
        }

        self.animation = None;
        if let Some(state) = *self.finished.borrow() {
            self.banner = state.finish_message();
            if let Some(text) = &self.banner {
                info!("{text}");
            }
        }
    }

    /// Render the UI
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let screen = Screen {
            board: BoardView {
                engine: &self.engine,
                selected_column: self.selected_column,
                animation: self.animation.as_ref(),
            },
            form: self.form.as_ref(),
            status: self.status(),
        };
        game_view::render(frame, &screen);
    }
}

/// Build an engine and hook its finish notification into a shared slot.
fn start_engine(
    settings: GameSettings,
) -> Result<(Engine, Rc<RefCell<Option<GameState>>>), SetupError> {
    let mut engine = Engine::new(settings)?;
    let finished = Rc::new(RefCell::new(None));
    let slot = Rc::clone(&finished);
    engine.subscribe_on_finish(move |state| *slot.borrow_mut() = Some(state));
    Ok((engine, finished))
}
