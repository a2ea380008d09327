use tracing::{debug, info, warn};

use super::{Board, Cell, Color, ColorCounts, Player};
use crate::ai::{Agent, FirstLegalAgent};
use crate::error::GameError;

/// Why a match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    BoardFull,
    /// Neither side can move although empty squares remain.
    NoLegalMoves,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// A move was just applied; `advance_turn` sets up the next one.
    TurnPending,
    /// A human player is choosing among `legal_moves`.
    AwaitingSelection,
    Finished(FinishReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Color),
    Draw,
}

/// Read-only view of a match handed to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub board: Board,
    pub highlight: Option<Cell>,
    pub legal_moves: Vec<Cell>,
    pub active_player: Player,
    pub phase: GamePhase,
    pub counts: ColorCounts,
}

/// One Reversi match: the board, both players and the turn state machine.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    board: Board,
    players: [Player; 2],
    active_player_index: usize,
    legal_moves: Vec<Cell>,
    selected_index: usize,
    phase: GamePhase,
}

impl Game {
    /// Start a match on the standard 8x8 board. The first player moves first.
    pub fn new(players: [Player; 2]) -> Result<Self, GameError> {
        let mut board = Board::default();
        board.initialize_starting_position()?;
        Self::from_board(board, players)
    }

    /// Start a match from an arbitrary position.
    pub fn from_board(board: Board, players: [Player; 2]) -> Result<Self, GameError> {
        if players[0].color == players[1].color {
            return Err(GameError::DuplicateColor(players[0].color));
        }
        info!(
            width = board.width(),
            height = board.height(),
            first = players[0].color.name(),
            "match created"
        );
        Ok(Game {
            board,
            players,
            active_player_index: 0,
            legal_moves: Vec::new(),
            selected_index: 0,
            phase: GamePhase::TurnPending,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn active_player_index(&self) -> usize {
        self.active_player_index
    }

    pub fn active_player(&self) -> Player {
        self.players[self.active_player_index]
    }

    pub fn legal_moves(&self) -> &[Cell] {
        &self.legal_moves
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// The highlighted candidate move, if any.
    pub fn selected_move(&self) -> Option<Cell> {
        self.legal_moves.get(self.selected_index).copied()
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    fn switch_player(&mut self) {
        self.active_player_index = 1 - self.active_player_index;
    }

    fn finish(&mut self, reason: FinishReason) {
        self.phase = GamePhase::Finished(reason);
        self.legal_moves.clear();
        self.selected_index = 0;
        let counts = self.board.count_by_color();
        info!(?reason, black = counts.black, white = counts.white, "match finished");
    }

    /// Set up the next turn, using the stand-in CPU for computer players.
    pub fn advance_turn(&mut self) {
        self.advance_turn_with(&mut FirstLegalAgent::new());
    }

    /// Set up the next turn. Players without a legal move forfeit; computer
    /// players move immediately via `agent`. Returns once a human has moves
    /// to choose from or the match is over.
    pub fn advance_turn_with(&mut self, agent: &mut dyn Agent) {
        if let GamePhase::Finished(_) = self.phase {
            return;
        }

        let mut forfeits = 0;
        loop {
            if self.board.is_full() {
                self.finish(FinishReason::BoardFull);
                return;
            }

            let player = self.active_player();
            let moves = self.board.legal_moves_for(player.color);
            if moves.is_empty() {
                forfeits += 1;
                if forfeits == self.players.len() {
                    self.finish(FinishReason::NoLegalMoves);
                    return;
                }
                debug!(color = player.color.name(), "no legal move, turn forfeited");
                self.switch_player();
                continue;
            }

            forfeits = 0;
            self.legal_moves = moves;
            self.selected_index = 0;

            if player.is_human {
                self.phase = GamePhase::AwaitingSelection;
                return;
            }

            let choice = agent
                .select_move(&self.board, &self.legal_moves)
                .filter(|cell| self.legal_moves.contains(cell))
                .unwrap_or_else(|| {
                    warn!(agent = agent.name(), "agent chose no legal move, using first");
                    self.legal_moves[0]
                });
            debug!(
                agent = agent.name(),
                color = player.color.name(),
                x = choice.x,
                y = choice.y,
                "computer move"
            );
            self.apply_move(choice);
        }
    }

    pub fn move_cursor_left(&mut self) {
        let len = self.legal_moves.len();
        if len == 0 {
            return;
        }
        self.selected_index = if self.selected_index == 0 {
            len - 1
        } else {
            self.selected_index - 1
        };
    }

    pub fn move_cursor_right(&mut self) {
        let len = self.legal_moves.len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Play the highlighted move. The caller runs `advance_turn` afterwards.
    pub fn confirm_selection(&mut self) -> Option<Cell> {
        let cell = self.selected_move()?;
        self.apply_move(cell);
        Some(cell)
    }

    /// Place `cell`, flip what it brackets and pass the turn. Returns the
    /// flipped cells; an illegal cell leaves the game untouched.
    pub fn apply_move(&mut self, cell: Cell) -> Vec<Cell> {
        let flips = self.board.compute_flips(&cell);
        if flips.is_empty() {
            warn!(x = cell.x, y = cell.y, "ignoring illegal move");
            return flips;
        }

        self.board.apply_cells(&flips);
        self.board.apply_cells(&[cell]);
        self.legal_moves.clear();
        self.selected_index = 0;
        self.phase = GamePhase::TurnPending;
        self.switch_player();
        flips
    }

    /// Over when the board is full or neither side can move.
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, GamePhase::Finished(_)) || self.board.is_full()
    }

    /// Disc counts in player order: `(first player, second player)`.
    pub fn final_score(&self) -> (usize, usize) {
        let counts = self.board.count_by_color();
        (
            counts.of(self.players[0].color),
            counts.of(self.players[1].color),
        )
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        if !self.is_finished() {
            return None;
        }
        let counts = self.board.count_by_color();
        Some(match counts.black.cmp(&counts.white) {
            std::cmp::Ordering::Greater => GameOutcome::Winner(Color::Black),
            std::cmp::Ordering::Less => GameOutcome::Winner(Color::White),
            std::cmp::Ordering::Equal => GameOutcome::Draw,
        })
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            highlight: self.selected_move(),
            legal_moves: self.legal_moves.clone(),
            active_player: self.active_player(),
            phase: self.phase,
            counts: self.board.count_by_color(),
        }
    }

    /// Text board with the highlighted candidate shown.
    pub fn render(&self) -> String {
        self.board.render(self.selected_move().as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Occupant;

    fn humans() -> [Player; 2] {
        [Player::human(Color::Black), Player::human(Color::White)]
    }

    fn started(players: [Player; 2]) -> Game {
        let mut game = Game::new(players).unwrap();
        game.advance_turn();
        game
    }

    #[test]
    fn test_initial_state() {
        let game = Game::new(humans()).unwrap();
        assert_eq!(game.active_player_index(), 0);
        assert_eq!(game.active_player().color, Color::Black);
        assert!(game.legal_moves().is_empty());
        assert_eq!(game.phase(), GamePhase::TurnPending);
        assert!(!game.is_finished());
        assert_eq!(game.final_score(), (2, 2));
        assert_eq!(game.outcome(), None);
    }

    #[test]
    fn test_duplicate_colors_rejected() {
        let players = [Player::human(Color::White), Player::cpu(Color::White)];
        assert_eq!(
            Game::new(players),
            Err(GameError::DuplicateColor(Color::White))
        );
    }

    #[test]
    fn test_advance_turn_for_human() {
        let game = started(humans());
        assert_eq!(game.phase(), GamePhase::AwaitingSelection);
        assert_eq!(game.legal_moves().len(), 4);
        assert_eq!(game.selected_index(), 0);
        assert_eq!(game.selected_move(), Some(Cell::new(4, 2, Occupant::Black)));
    }

    #[test]
    fn test_cursor_wraps_both_ways() {
        let mut game = started(humans());
        game.move_cursor_left();
        assert_eq!(game.selected_index(), 3);
        game.move_cursor_right();
        assert_eq!(game.selected_index(), 0);
        for _ in 0..4 {
            game.move_cursor_right();
        }
        assert_eq!(game.selected_index(), 0);
    }

    #[test]
    fn test_cursor_left_right_are_inverse() {
        let mut game = started(humans());
        for start in 0..game.legal_moves().len() {
            while game.selected_index() != start {
                game.move_cursor_right();
            }
            game.move_cursor_left();
            game.move_cursor_right();
            assert_eq!(game.selected_index(), start);
            game.move_cursor_right();
            game.move_cursor_left();
            assert_eq!(game.selected_index(), start);
        }
    }

    #[test]
    fn test_cursor_without_moves_is_noop() {
        let mut game = Game::new(humans()).unwrap();
        game.move_cursor_left();
        game.move_cursor_right();
        assert_eq!(game.selected_index(), 0);
        assert_eq!(game.confirm_selection(), None);
        assert_eq!(game.final_score(), (2, 2));
    }

    #[test]
    fn test_confirm_selection_applies_and_switches() {
        let mut game = started(humans());
        game.move_cursor_right();
        let played = game.confirm_selection().unwrap();
        assert_eq!(played, Cell::new(5, 3, Occupant::Black));
        assert_eq!(game.board().get(5, 3), Occupant::Black);
        assert_eq!(game.board().get(4, 3), Occupant::Black);
        assert_eq!(game.active_player().color, Color::White);
        assert_eq!(game.phase(), GamePhase::TurnPending);
        assert!(game.legal_moves().is_empty());
        assert_eq!(game.final_score(), (4, 1));

        game.advance_turn();
        assert_eq!(game.phase(), GamePhase::AwaitingSelection);
        assert!(game
            .legal_moves()
            .iter()
            .all(|c| c.occupant == Occupant::White));
    }

    #[test]
    fn test_cpu_replies_immediately() {
        let mut game = started([Player::human(Color::Black), Player::cpu(Color::White)]);
        game.confirm_selection().unwrap(); // Black plays (4, 2)
        game.advance_turn();

        // White's first legal move in scan order is (3, 2), flipping (3, 3)
        assert_eq!(game.board().get(3, 2), Occupant::White);
        assert_eq!(game.board().get(3, 3), Occupant::White);
        assert_eq!(game.active_player_index(), 0);
        assert_eq!(game.phase(), GamePhase::AwaitingSelection);
        assert_eq!(game.final_score(), (3, 3));
    }

    #[test]
    fn test_cpu_opens_when_moving_first() {
        let game = started([Player::cpu(Color::Black), Player::human(Color::White)]);
        assert_eq!(game.board().get(4, 2), Occupant::Black);
        assert_eq!(game.active_player().color, Color::White);
        assert_eq!(game.phase(), GamePhase::AwaitingSelection);
    }

    #[test]
    fn test_cpu_vs_cpu_runs_to_the_end() {
        let game = started([Player::cpu(Color::Black), Player::cpu(Color::White)]);
        assert!(game.is_finished());
        let (black, white) = game.final_score();
        let empty = game.board().count_by_color().empty;
        assert_eq!(black + white + empty, 64);
        if game.phase() == GamePhase::Finished(FinishReason::BoardFull) {
            assert_eq!(black + white, 64);
        }
    }

    #[test]
    fn test_forfeit_passes_turn() {
        let board: Board = "
            B W . .
            . . . .
        "
        .parse()
        .unwrap();
        let players = [Player::human(Color::White), Player::human(Color::Black)];
        let mut game = Game::from_board(board, players).unwrap();
        game.advance_turn();

        assert_eq!(game.active_player_index(), 1);
        assert_eq!(game.legal_moves(), &[Cell::new(2, 0, Occupant::Black)]);
        assert_eq!(game.phase(), GamePhase::AwaitingSelection);
    }

    #[test]
    fn test_full_board_finishes() {
        let board: Board = "
            B W
            W B
        "
        .parse()
        .unwrap();
        let mut game = Game::from_board(board, humans()).unwrap();
        assert!(game.is_finished());
        game.advance_turn();
        assert_eq!(game.phase(), GamePhase::Finished(FinishReason::BoardFull));
        assert_eq!(game.outcome(), Some(GameOutcome::Draw));
    }

    #[test]
    fn test_stalemate_terminates() {
        let board: Board = "
            B . . .
            . . . .
            . . . .
            . . . B
        "
        .parse()
        .unwrap();
        let mut game = Game::from_board(board, humans()).unwrap();
        assert!(!game.is_finished());
        game.advance_turn();

        assert_eq!(game.phase(), GamePhase::Finished(FinishReason::NoLegalMoves));
        assert!(game.is_finished());
        assert!(game.legal_moves().is_empty());
        assert_eq!(game.outcome(), Some(GameOutcome::Winner(Color::Black)));

        // Further advances stay put
        game.advance_turn();
        assert_eq!(game.phase(), GamePhase::Finished(FinishReason::NoLegalMoves));
    }

    #[test]
    fn test_last_move_fills_board() {
        let board: Board = "B W W .".parse().unwrap();
        let mut game = Game::from_board(board, humans()).unwrap();
        game.advance_turn();
        assert_eq!(game.legal_moves(), &[Cell::new(3, 0, Occupant::Black)]);

        game.confirm_selection().unwrap();
        game.advance_turn();
        assert_eq!(game.phase(), GamePhase::Finished(FinishReason::BoardFull));
        assert_eq!(game.final_score(), (4, 0));
        assert_eq!(game.outcome(), Some(GameOutcome::Winner(Color::Black)));
    }

    #[test]
    fn test_human_match_counts_every_square() {
        let mut game = started(humans());
        let mut turn = 0;
        while !game.is_finished() {
            for _ in 0..(turn % 3) {
                game.move_cursor_right();
            }
            assert!(game.confirm_selection().is_some());
            game.advance_turn();
            turn += 1;
            assert!(turn <= 60, "more moves than empty squares");
        }

        let (black, white) = game.final_score();
        let empty = game.board().count_by_color().empty;
        assert_eq!(black + white + empty, 64);
        if game.phase() == GamePhase::Finished(FinishReason::BoardFull) {
            assert_eq!(black + white, 64);
        }
    }

    #[test]
    fn test_final_score_follows_player_order() {
        let players = [Player::human(Color::White), Player::human(Color::Black)];
        let board: Board = "B B W .".parse().unwrap();
        let game = Game::from_board(board, players).unwrap();
        assert_eq!(game.final_score(), (1, 2));
    }

    #[test]
    fn test_illegal_move_is_ignored() {
        let mut game = started(humans());
        let before = game.clone();
        let flips = game.apply_move(Cell::new(0, 0, Occupant::Black));
        assert!(flips.is_empty());
        assert_eq!(game, before);
    }

    #[test]
    fn test_snapshot_reflects_selection() {
        let mut game = started(humans());
        game.move_cursor_right();
        let snapshot = game.snapshot();
        assert_eq!(snapshot.highlight, Some(Cell::new(5, 3, Occupant::Black)));
        assert_eq!(snapshot.legal_moves.len(), 4);
        assert_eq!(snapshot.active_player, Player::human(Color::Black));
        assert_eq!(snapshot.phase, GamePhase::AwaitingSelection);
        assert_eq!(snapshot.counts.black, 2);
        assert_eq!(&snapshot.board, game.board());

        let text = game.render();
        let row: Vec<&str> = text.lines().nth(3).unwrap().split(' ').collect();
        assert_eq!(row[5], Occupant::Black.symbol().to_string());
    }
}
