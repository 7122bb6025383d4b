//! 點擊狀態機
//!
//! `Game` 是唯一持有棋盤、回合與互動狀態的值。每次點擊：
//! 1. 建立 `Click` 上下文
//! 2. 在工作副本上依序比對規則表，第一條符合的規則處理這次點擊
//! 3. 成功才提交副本；規則回報結束回合時由這裡統一交換行動方
//!
//! 處理失敗時記錄警告並保留上一個已提交的狀態。

pub mod click;
pub mod rules;
pub mod state;

use crate::alias::{Coord, UnitId};
use crate::component::{Color, Position, Unit, UnitKind};
use crate::error::{BoardError, Result, RuleError};
use crate::loader_schema::Layout;
use crate::logic::board::Board;
use crate::logic::capture::PendingEffect;
use crate::logic::highlight::{resolve_highlights, zone, Highlight, HighlightTag};
use crate::logic::turn::Turn;
use click::Click;
use serde::Serialize;
use state::{InteractionState, Mode};

/// 交給繪製端的快照
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardView {
    /// 依 (row, col) 排序
    pub units: Vec<Unit>,
    pub highlights: Vec<Highlight>,
    pub selected: Option<Position>,
    pub side_to_move: Color,
    /// 狀態有變化，需要重繪
    pub redraw: bool,
}

/// 規則處理結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub ends_turn: bool,
    pub redraw: bool,
}

impl Outcome {
    /// 狀態改變但回合繼續
    pub const CONTINUE: Outcome = Outcome {
        ends_turn: false,
        redraw: true,
    };
    /// 結束回合
    pub const END_TURN: Outcome = Outcome {
        ends_turn: true,
        redraw: true,
    };
    /// 被拒絕，狀態不變
    pub const REJECTED: Outcome = Outcome {
        ends_turn: false,
        redraw: false,
    };
}

#[derive(Debug, Clone, Default)]
pub struct Game {
    board: Board,
    turn: Turn,
    interaction: InteractionState,
}

impl Game {
    pub fn new(board: Board, first: Color) -> Self {
        Self {
            board,
            turn: Turn::new(first),
            interaction: InteractionState::default(),
        }
    }

    /// 依佈局建立棋盤，檢查邊界與重複佔據
    pub fn from_layout(layout: &Layout) -> Result<Self> {
        let mut board = Board::new();
        for placement in &layout.placements {
            board.spawn(placement.kind, placement.color, placement.pos)?;
        }
        log::info!("載入佈局 `{}`，共 {} 個單位", layout.name, board.len());
        Ok(Self::new(board, layout.first))
    }

    // ------------------------------------------------------------------
    // 查詢
    // ------------------------------------------------------------------

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(feature = "test-helpers")]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    pub fn side_to_move(&self) -> Color {
        self.turn.side_to_move()
    }

    pub fn ply(&self) -> u32 {
        self.turn.ply()
    }

    pub fn mode(&self) -> &Mode {
        &self.interaction.mode
    }

    pub fn view(&self) -> BoardView {
        self.snapshot(false)
    }

    fn snapshot(&self, redraw: bool) -> BoardView {
        BoardView {
            units: self.board.units_sorted(),
            highlights: self.interaction.highlights.clone(),
            selected: self.interaction.selected,
            side_to_move: self.turn.side_to_move(),
            redraw,
        }
    }

    // ------------------------------------------------------------------
    // 點擊入口
    // ------------------------------------------------------------------

    /// 處理一次點擊並回傳新的快照
    pub fn on_square_clicked(&mut self, row: Coord, col: Coord) -> BoardView {
        let pos = Position::new(row, col);
        if !pos.in_bounds() {
            log::warn!("點擊超出棋盤: {pos}");
            return self.snapshot(false);
        }

        let click = Click::new(self, pos);
        let mut working = self.clone();
        let redraw = match rules::dispatch(&mut working, &click) {
            Ok(outcome) => {
                if outcome.ends_turn {
                    working.end_turn();
                }
                *self = working;
                outcome.redraw || outcome.ends_turn
            }
            Err(err) => {
                log::warn!("點擊 {pos} 處理失敗，維持原狀態: {err}");
                false
            }
        };
        self.snapshot(redraw)
    }

    /// 交換行動方，取消所有非放置效果的模式
    fn end_turn(&mut self) {
        self.turn.end(&mut self.board);
        self.interaction.retain_pending();
    }

    // ------------------------------------------------------------------
    // 規則共用的輔助
    // ------------------------------------------------------------------

    pub(crate) fn unit(&self, id: UnitId) -> Result<Unit> {
        self.board
            .get(id)
            .cloned()
            .ok_or_else(|| BoardError::UnitNotFound { id }.into())
    }

    /// 目前選取單位的快照
    pub(crate) fn selected_unit(&self, click: &Click) -> Result<Unit> {
        let id = click.selected.ok_or(RuleError::NothingSelected)?;
        self.unit(id)
    }

    pub(crate) fn selected_kind_is(&self, click: &Click, kinds: &[UnitKind]) -> bool {
        click
            .selected
            .and_then(|id| self.board.get(id))
            .is_some_and(|unit| kinds.contains(&unit.kind))
    }

    /// 行動前的回合檢查
    pub(crate) fn may_act(&self, unit: &Unit) -> bool {
        if self.turn.is_turn_of(unit.color) {
            true
        } else {
            log::warn!("{} {} 不是行動方，忽略操作", unit.color, unit.kind);
            false
        }
    }

    pub(crate) fn clear_interaction(&mut self) {
        self.interaction.clear();
    }

    /// 選取單位並顯示其走法
    pub(crate) fn select(&mut self, id: UnitId) -> Result<()> {
        let unit = self.unit(id)?;
        self.interaction = InteractionState {
            selected: Some(unit.pos()),
            highlights: resolve_highlights(&unit, &self.board, self.turn.side_to_move()),
            mode: Mode::Idle,
        };
        Ok(())
    }

    /// 保留選取，改為顯示能力範圍並進入模式
    pub(crate) fn enter_mode(
        &mut self,
        unit: &Unit,
        positions: Vec<Position>,
        tag: HighlightTag,
        mode: Mode,
    ) {
        let muted = unit.color != self.turn.side_to_move();
        log::debug!("{} 進入 {:?}", unit.kind, mode);
        self.interaction = InteractionState {
            selected: Some(unit.pos()),
            highlights: zone(positions, tag, muted),
            mode,
        };
    }

    /// 切換到強制移動模式：選取被強制的單位並顯示其走法
    pub(crate) fn force_move(&mut self, id: UnitId, mode: Mode) -> Result<()> {
        self.select(id)?;
        self.interaction.mode = mode;
        Ok(())
    }

    pub(crate) fn set_mode(&mut self, mode: Mode) {
        self.interaction.mode = mode;
    }

    pub(crate) fn set_highlights(&mut self, highlights: Vec<Highlight>) {
        self.interaction.highlights = highlights;
    }

    /// 吃子開啟的接續效果
    pub(crate) fn open_pending(&mut self, pending: Option<PendingEffect>) {
        if let Some(effect) = pending {
            log::debug!("開啟接續效果 {:?}", effect);
            self.interaction.open_pending(effect);
        }
    }
}
