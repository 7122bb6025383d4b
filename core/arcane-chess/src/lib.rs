//! 8×8 變體西洋棋規則引擎
//!
//! - `logic`：棋盤、走法產生、高亮、吃子管線、能力、回合
//! - `interaction`：點擊狀態機（`Game::on_square_clicked`）
//! - `loader`：佈局載入（TOML / ASCII）

pub mod ability_text;
pub mod alias;
pub mod component;
pub mod constants;
pub mod domain;
pub mod error;
pub mod interaction;
pub mod loader;
pub mod loader_schema;
pub mod logic;

pub use ability_text::ability_text;
pub use component::{Color, Family, Position, Unit, UnitKind};
pub use interaction::{BoardView, Game};
pub use loader_schema::{Layout, StartingLayout};
pub use logic::highlight::{Highlight, HighlightTag};
