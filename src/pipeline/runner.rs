//! Turn-taking match loop

use std::{thread, time::Duration};

use crate::{
    Error, Result,
    ports::{Agent, Observer},
    tictactoe::{Board, GameOutcome, GameRecord, MatchStatus, Move, Player},
};

/// Drives one match between an X agent and an O agent.
///
/// The runner exclusively owns the board. Each [`step`](Self::step) asks the
/// agent whose turn it is for one move, reports it, then checks for a win by
/// the mover and afterwards for a draw. X always moves first. Every move fills
/// a cell, so a match ends after at most nine steps.
pub struct MatchRunner {
    board: Board,
    agent_x: Box<dyn Agent>,
    agent_o: Box<dyn Agent>,
    current: Player,
    status: MatchStatus,
    moves: Vec<Move>,
    move_delay: Duration,
    game_num: usize,
}

impl MatchRunner {
    /// Create a runner with an empty board and X to move.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the agents do not play X and O
    /// respectively.
    pub fn new(agent_x: Box<dyn Agent>, agent_o: Box<dyn Agent>) -> Result<Self> {
        if agent_x.player() != Player::X || agent_o.player() != Player::O {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "expected agents for X and O, got {} and {}",
                    agent_x.player(),
                    agent_o.player()
                ),
            });
        }

        Ok(Self {
            board: Board::new(),
            agent_x,
            agent_o,
            current: Player::X,
            status: MatchStatus::InProgress,
            moves: Vec::with_capacity(9),
            move_delay: Duration::ZERO,
            game_num: 0,
        })
    }

    /// Pause before each move. Zero disables pacing.
    pub fn with_move_delay(mut self, delay: Duration) -> Self {
        self.move_delay = delay;
        self
    }

    /// Index reported to observers when running a series
    pub fn with_game_num(mut self, game_num: usize) -> Self {
        self.game_num = game_num;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> MatchStatus {
        self.status
    }

    /// Player whose turn it is (the last mover once the match is over)
    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Play one move and return the resulting status.
    ///
    /// The board, move list, status and turn are all updated before the
    /// observer hears about the move, so an observer failure never leaves the
    /// runner half way through a turn. Does nothing once the match is over.
    ///
    /// # Errors
    ///
    /// Propagates agent failures (reported to the observer first) and
    /// observer write errors.
    pub fn step(&mut self, observer: &mut dyn Observer) -> Result<MatchStatus> {
        if self.status.is_terminal() {
            return Ok(self.status);
        }

        if !self.move_delay.is_zero() {
            thread::sleep(self.move_delay);
        }

        let mover = self.current;
        observer.on_turn(mover)?;

        let agent = match mover {
            Player::X => &mut self.agent_x,
            Player::O => &mut self.agent_o,
        };

        let position = match agent.choose_move(&mut self.board) {
            Ok(position) => position,
            Err(err) => {
                tracing::error!(game = self.game_num, player = %mover, "match halted: {err}");
                if let Err(report_err) = observer.on_error(&err.to_string()) {
                    tracing::warn!(game = self.game_num, "failed to report error: {report_err}");
                }
                return Err(err);
            }
        };

        tracing::debug!(
            game = self.game_num,
            agent = agent.name(),
            player = %mover,
            %position,
            "move"
        );
        self.moves.push(Move {
            position,
            player: mover,
        });
        self.status = MatchStatus::after_move(&self.board, mover);
        let outcome = self.status.outcome();
        if outcome.is_none() {
            self.current = mover.opponent();
        }

        observer.on_move(mover, position, &self.board)?;
        if let Some(outcome) = outcome {
            tracing::info!(game = self.game_num, moves = self.moves.len(), "{outcome}");
            observer.on_match_end(self.game_num, outcome)?;
        }

        Ok(self.status)
    }

    /// Play the match to completion.
    pub fn run(mut self, observer: &mut dyn Observer) -> Result<GameRecord> {
        tracing::debug!(game = self.game_num, "match started");
        observer.on_match_start(self.game_num, &self.board)?;

        let outcome: GameOutcome = loop {
            if let Some(outcome) = self.step(observer)?.outcome() {
                break outcome;
            }
        };

        Ok(GameRecord {
            moves: self.moves,
            outcome,
            board: self.board,
        })
    }
}
