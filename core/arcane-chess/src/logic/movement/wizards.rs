//! 巫師陣營

use super::{basic, capturable, self_marker, Emit};
use crate::component::{Position, Unit};
use crate::logic::board::Board;
use crate::logic::highlight::HighlightTag;

/// 兵走法 + 正前方敵人可直接電擊
pub fn young_wiz(unit: &Unit, emit: &mut Emit<'_>, board: &Board) {
    basic::pawn(unit, emit, board);
    if let Some(target) = zap_target(unit, board) {
        emit(target, HighlightTag::Capture);
    }
}

/// 騎士走法 + 自身標記（石化切換）
pub fn familiar(unit: &Unit, emit: &mut Emit<'_>, board: &Board) {
    self_marker(unit, emit);
    basic::knight(unit, emit, board);
}

/// 象的射線，吃子時不移動
pub fn wizard_tower(unit: &Unit, emit: &mut Emit<'_>, board: &Board) {
    basic::bishop(unit, emit, board);
}

/// 車走法 + 自身標記（收納 / 彈出）
pub fn portal(unit: &Unit, emit: &mut Emit<'_>, board: &Board) {
    self_marker(unit, emit);
    basic::rook(unit, emit, board);
}

/// 后走法 + 任何位置的己方兵系單位都可交換
pub fn queen_of_illusions(unit: &Unit, emit: &mut Emit<'_>, board: &Board) {
    basic::queen(unit, emit, board);

    let mut partners: Vec<Position> = board
        .units()
        .filter(|other| {
            other.color == unit.color && other.id != unit.id && other.kind.is_pawn_family()
        })
        .map(|other| other.pos())
        .collect();
    partners.sort();
    for pos in partners {
        emit(pos, HighlightTag::Ability);
    }
}

/// 王走法 + 上下直線射擊
pub fn wizard_king(unit: &Unit, emit: &mut Emit<'_>, board: &Board) {
    basic::king(unit, emit, board);
    for target in line_targets(unit, board) {
        emit(target, HighlightTag::Capture);
    }
}

/// 幼巫正前方可電擊的敵人
pub fn zap_target(unit: &Unit, board: &Board) -> Option<Position> {
    let ahead = unit.pos().offset(unit.color.forward(), 0);
    (ahead.in_bounds() && capturable(unit, board, ahead)).then_some(ahead)
}

/// 巫師王上下兩個方向各自的第一個單位，若為可吃的敵人即為射擊目標
pub fn line_targets(unit: &Unit, board: &Board) -> Vec<Position> {
    let mut targets = Vec::new();
    for d_row in [-1, 1] {
        let mut pos = unit.pos().offset(d_row, 0);
        while pos.in_bounds() {
            if !board.is_empty(pos) {
                if capturable(unit, board, pos) {
                    targets.push(pos);
                }
                break;
            }
            pos = pos.offset(d_row, 0);
        }
    }
    targets
}
