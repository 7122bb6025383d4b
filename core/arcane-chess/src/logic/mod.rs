//! 核心規則邏輯（不含點擊狀態）

pub mod abilities;
pub mod board;
pub mod capture;
pub mod highlight;
pub mod id_generator;
pub mod movement;
pub mod turn;
