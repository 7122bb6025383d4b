//! 錯誤處理系統
//!
//! `Error` 保留原始錯誤種類，並依序附加帶呼叫位置的 context。
//! 點擊處理的錯誤不會傳到呼叫端，只在 `Game::on_square_clicked` 記錄。

use crate::alias::{Coord, UnitId};
use thiserror::Error as ThisError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// 頂層錯誤，包含原始錯誤和 context 鏈
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    contexts: Vec<String>,
}

/// 錯誤種類
#[derive(Debug, ThisError)]
pub enum ErrorKind {
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Rule(#[from] RuleError),
}

/// 棋盤錯誤
#[derive(Debug, ThisError)]
pub enum BoardError {
    #[error("位置超出棋盤邊界: ({row}, {col})")]
    OutOfBounds { row: Coord, col: Coord },
    #[error("位置 ({row}, {col}) 已被單位 {occupant} 佔據")]
    SquareOccupied {
        row: Coord,
        col: Coord,
        occupant: UnitId,
    },
    #[error("找不到單位: {id}")]
    UnitNotFound { id: UnitId },
    #[error("單位 ID 重複: {id}")]
    DuplicateUnit { id: UnitId },
}

/// 佈局載入錯誤
#[derive(Debug, ThisError)]
pub enum LoadError {
    #[error("解析失敗: {0}")]
    ParseError(String),
    #[error("無法辨識的格子符號 `{token}`（第 {row} 列）")]
    UnknownToken { token: String, row: Coord },
    #[error("{format} 反序列化失敗: {reason}")]
    DeserializeError { format: String, reason: String },
    #[error("{format} 序列化失敗: {reason}")]
    SerializeError { format: String, reason: String },
}

/// 規則執行中的不一致（正常操作不應出現）
#[derive(Debug, ThisError)]
pub enum RuleError {
    #[error("點擊處理需要已選取的單位")]
    NothingSelected,
    #[error("{kind} 不能執行 {action}")]
    WrongKind { kind: String, action: &'static str },
    #[error("目標格 ({row}, {col}) 沒有單位")]
    MissingTarget { row: Coord, col: Coord },
}

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// 添加錯誤上下文，自動記錄呼叫位置
    #[track_caller]
    pub fn context<C: Into<String>>(mut self, context: C) -> Self {
        let loc = std::panic::Location::caller();
        let msg = format!("{} [{}:{}]", context.into(), loc.file(), loc.line());
        self.contexts.push(msg);
        self
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)?;
        for ctx in &self.contexts {
            write!(f, "\n  {}", ctx)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

impl<E: Into<ErrorKind>> From<E> for Error {
    fn from(error: E) -> Self {
        Self {
            kind: error.into(),
            contexts: Vec::new(),
        }
    }
}

/// Result 擴展 trait，用於添加錯誤上下文
pub trait Context<T> {
    fn context<C: Into<String>>(self, context: C) -> Result<T>;
}

impl<T> Context<T> for Result<T> {
    fn context<C: Into<String>>(self, context: C) -> Result<T> {
        self.map_err(|e| e.context(context))
    }
}
