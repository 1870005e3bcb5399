// This file is part of the chess-games library.
// Copyright (C) 2025 The chess-games developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

//! The registry of games in progress.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use rustc_hash::FxHashMap;
use tracing::{debug, info, trace};

use crate::{
    config::Config,
    errors::GameError,
    game::{Game, GameId, GameState, MoveRequest},
    rules::{self, Targets},
};

/// Concurrent in-memory store of games.
///
/// All operations are synchronous and return owned snapshots, never
/// references into a live game. Moves on the same game are serialized:
/// the revision check, validation and the update happen as one unit, so of
/// several submissions based on the same revision exactly one succeeds and
/// the others see [`GameError::Conflict`].
///
/// # Examples
///
/// ```
/// use chess_games::{GameError, GameStore, MoveRequest, Square};
///
/// let store = GameStore::new();
/// let game = store.create();
///
/// let state = store.apply_move(game.id.as_str(), &MoveRequest::new("e2", "e4", 0))?;
/// assert_eq!(state.revision, 1);
/// assert_eq!(state.last_to, Some(Square::E4));
///
/// // The same request is now stale.
/// let err = store.apply_move(game.id.as_str(), &MoveRequest::new("e2", "e4", 0));
/// assert!(matches!(err, Err(GameError::Conflict { current: 1, .. })));
/// # Ok::<_, GameError>(())
/// ```
#[derive(Debug, Default)]
pub struct GameStore {
    config: Config,
    games: RwLock<FxHashMap<GameId, Arc<Mutex<Game>>>>,
}

fn lock(game: &Mutex<Game>) -> MutexGuard<'_, Game> {
    game.lock().unwrap_or_else(PoisonError::into_inner)
}

impl GameStore {
    /// An empty store with the default [`Config`].
    pub fn new() -> GameStore {
        GameStore::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> GameStore {
        GameStore {
            config,
            games: RwLock::new(FxHashMap::default()),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Starts a new game from the standard position under a fresh id.
    pub fn create(&self) -> GameState {
        let mut games = self.games.write().unwrap_or_else(PoisonError::into_inner);

        let id = loop {
            let id = GameId::random();
            if !games.contains_key(&id) {
                break id;
            }
        };

        let game = Game::new(id.clone());
        let state = game.state();
        games.insert(id, Arc::new(Mutex::new(game)));

        info!(game = %state.id, "created game");
        state
    }

    fn game(&self, id: &str) -> Result<Arc<Mutex<Game>>, GameError> {
        let games = self.games.read().unwrap_or_else(PoisonError::into_inner);
        games.get(id).cloned().ok_or_else(|| {
            trace!(game = id, "unknown game");
            GameError::NotFound { id: id.into() }
        })
    }

    /// Gets a snapshot of the game.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotFound`] for unknown ids.
    pub fn get(&self, id: &str) -> Result<GameState, GameError> {
        let game = self.game(id)?;
        let state = lock(&game).state();
        Ok(state)
    }

    /// Validates and plays a move, returning the updated snapshot.
    ///
    /// See [`Game::play()`] for the checks. A rejected move leaves the game
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotFound`] for unknown ids,
    /// [`GameError::Conflict`] if the request is based on another revision,
    /// and [`GameError::InvalidMove`] if the move is rejected.
    pub fn apply_move(&self, id: &str, request: &MoveRequest) -> Result<GameState, GameError> {
        let game = self.game(id)?;
        let mut game = lock(&game);

        let result = game.play(request, self.config.king_safety);
        match &result {
            Ok(m) => debug!(
                game = id,
                from = %m.from,
                to = %m.to,
                revision = game.revision(),
                "committed move"
            ),
            Err(GameError::Conflict { current, submitted }) => debug!(
                game = id,
                current = *current,
                submitted = ?submitted,
                "stale revision"
            ),
            Err(err) => debug!(game = id, reason = %err, "rejected move"),
        }

        result.map(|_| game.state())
    }

    /// Lists the pseudo-legal targets of the piece on `from`, regardless of
    /// whose turn it is.
    ///
    /// A malformed label or an empty square has no targets.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotFound`] for unknown ids.
    pub fn pseudo_legal_targets(&self, id: &str, from: &str) -> Result<Targets, GameError> {
        let game = self.game(id)?;
        let targets = rules::pseudo_legal_targets_for_label(lock(&game).board(), from);
        Ok(targets)
    }

    pub fn len(&self) -> usize {
        self.games.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, id: &str) -> bool {
        self.games
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(id)
    }

    /// Ids of all games, sorted.
    pub fn ids(&self) -> Vec<GameId> {
        let mut ids: Vec<GameId> = self
            .games
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        ids.sort_unstable();
        ids
    }
}
