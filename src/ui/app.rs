use std::io;
use std::sync::mpsc::Receiver;

use crate::game::{Game, GameSnapshot};
use ratatui::{backend::Backend, Terminal};
use tracing::info;

use super::game_view;
use super::input::InputEvent;
use super::mode::PlayMode;

/// Controller for one match. Sole owner of the `Game`; the view only ever
/// sees snapshots.
pub struct App {
    game: Game,
    mode: PlayMode,
    show_legal_moves: bool,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(game: Game, mode: PlayMode, show_legal_moves: bool) -> Self {
        App {
            game,
            mode,
            show_legal_moves,
            should_quit: false,
            message: None,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Set up the first turn. Computer players may already move here.
    pub fn start(&mut self) {
        self.game.advance_turn();
        self.update_status();
    }

    /// Main loop: draw, then block for the next event. Ends on quit or when
    /// the match is over, handing back the final game.
    pub fn run<B: Backend>(
        mut self,
        terminal: &mut Terminal<B>,
        events: &Receiver<InputEvent>,
    ) -> io::Result<Game> {
        self.start();

        loop {
            let snapshot = self.game.snapshot();
            terminal.draw(|f| self.render(f, &snapshot))?;

            if self.should_quit || self.game.is_finished() {
                break;
            }

            match events.recv() {
                Ok(event) => self.handle_event(event),
                // Input thread gone
                Err(_) => break,
            }
        }
        Ok(self.game)
    }

    /// Apply one input event to the match.
    pub fn handle_event(&mut self, event: InputEvent) {
        self.message = None;

        match event {
            InputEvent::Quit => {
                info!("quit requested");
                self.should_quit = true;
            }
            InputEvent::Left => self.game.move_cursor_left(),
            InputEvent::Right => self.game.move_cursor_right(),
            InputEvent::Confirm => self.confirm(),
        }
    }

    fn confirm(&mut self) {
        let color = self.game.active_player().color;
        match self.game.confirm_selection() {
            Some(cell) => {
                info!(color = color.name(), square = %cell.square_name(), "move played");
                self.game.advance_turn();
                self.update_status();
            }
            None => {
                self.message = Some("No move to confirm".to_string());
            }
        }
    }

    fn update_status(&mut self) {
        if self.game.is_finished() {
            self.message = Some(game_view::outcome_line(self.game.outcome()));
        }
    }

    fn render(&self, frame: &mut ratatui::Frame, snapshot: &GameSnapshot) {
        game_view::render(
            frame,
            snapshot,
            &self.message,
            self.mode.label(),
            self.show_legal_moves,
        );
    }
}
