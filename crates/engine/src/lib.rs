//! gridfill-engine - placement rules, game state machine and exhaustive search.

pub mod apply;
pub mod config;
pub mod game;
pub mod hand;
pub mod move_list;
pub mod movegen;
pub mod perft;
pub mod scoring;
pub mod tt;

pub use apply::{apply_mask, apply_move};
pub use config::{BoardPreset, ParsePresetError};
pub use game::Game;
pub use hand::{Hand, HAND_SIZE};
pub use move_list::MoveList;
pub use movegen::{count_moves, for_each_placement, generate_moves, has_any_move};
pub use perft::{baseline, divide, perft, perft_parallel, perft_with_memo};
pub use scoring::clear_score;
pub use tt::{MemoTable, MAX_CACHED_DEPTH};
