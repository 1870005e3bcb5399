//! In-memory chess games with pseudo-legal move generation and optimistic
//! revisions, for use behind a game server.
//!
//! # Examples
//!
//! Create a game and play a move:
//!
//! ```
//! use chess_games::{Color, GameStore, MoveRequest, Square};
//!
//! let store = GameStore::new();
//! let game = store.create();
//! assert_eq!(game.revision, 0);
//! assert_eq!(game.position.len(), 32);
//!
//! // 1. e4
//! let game = store.apply_move(game.id.as_str(), &MoveRequest::new("e2", "e4", 0))?;
//! assert_eq!(game.revision, 1);
//! assert_eq!(game.turn, Color::Black);
//! assert_eq!(game.position.get(Square::E4), Some("wP"));
//! assert_eq!(game.position.get(Square::E2), None);
//! # Ok::<_, chess_games::GameError>(())
//! ```
//!
//! List where a piece may go:
//!
//! ```
//! # use chess_games::GameStore;
//! use chess_games::Square;
//!
//! # let store = GameStore::new();
//! # let game = store.create();
//! let targets = store.pseudo_legal_targets(game.id.as_str(), "b1")?;
//! assert_eq!(targets.as_slice(), &[Square::C3, Square::A3]);
//! # Ok::<_, chess_games::GameError>(())
//! ```
//!
//! Targets are pseudo-legal: by default the rules do not care whether the
//! own king is left in check. See [`KingSafety`] to change that. Castling,
//! en passant and promotion are not supported.
//!
//! # Feature flags
//!
//! * `serde`: Implements [`serde::Serialize`](https://docs.rs/serde/1/serde/trait.Serialize.html)
//!   for snapshots and squares, and
//!   [`serde::Deserialize`](https://docs.rs/serde/1/serde/trait.Deserialize.html)
//!   for move requests, squares and [`Config`].
//! * `nohash-hasher`: Implements
//!   [`nohash_hasher::IsEnabled`](https://docs.rs/nohash-hasher/0.2/nohash_hasher/trait.IsEnabled.html)
//!   for sensible types.
//! * `arbitrary`: Implements
//!   [`arbitrary::Arbitrary`](https://docs.rs/arbitrary/1/arbitrary/trait.Arbitrary.html)
//!   for fuzzing.

#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]
#![cfg_attr(docs_rs, feature(doc_auto_cfg))]

mod color;
mod config;
mod errors;
mod game;
mod m;
mod piece;
mod role;
mod square;
mod store;

pub mod attacks;
pub mod board;
pub mod rules;
pub mod setup;
pub mod view;

pub use board::Board;
pub use color::{Color, ParseColorError};
pub use config::Config;
pub use errors::{GameError, InvalidMove};
pub use game::{Game, GameId, GameState, MoveRequest, Status};
pub use m::{Move, ParseMoveError};
pub use piece::Piece;
pub use role::Role;
pub use rules::KingSafety;
pub use square::{File, Rank, Square, SquareError};
pub use store::GameStore;
pub use view::PositionMap;

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for File {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Rank {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Square {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Role {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Color {}
