//! 野獸陣營

use super::{basic, capturable, leap, self_marker, slide_quiet, Emit};
use crate::component::Unit;
use crate::constants::{ALL_DIRECTIONS, BEAST_KNIGHT_LEAPS, FROG_HOPS, ORTHOGONAL};
use crate::logic::board::Board;
use crate::logic::highlight::HighlightTag;

/// 兵走法 + 任何列都能直線前進兩格；中間是敵人時為跳吃
pub fn pawn_hopper(unit: &Unit, emit: &mut Emit<'_>, board: &Board) {
    basic::pawn(unit, emit, board);

    let forward = unit.color.forward();
    let middle = unit.pos().offset(forward, 0);
    let landing = unit.pos().offset(2 * forward, 0);
    if !landing.in_bounds() || !board.is_empty(landing) {
        return;
    }
    let tag = if capturable(unit, board, middle) {
        HighlightTag::Capture
    } else {
        HighlightTag::Move
    };
    emit(landing, tag);
}

/// 3-1 長跳
pub fn beast_knight(unit: &Unit, emit: &mut Emit<'_>, board: &Board) {
    leap(unit, emit, board, &BEAST_KNIGHT_LEAPS);
}

/// 象 + 王
pub fn beast_druid(unit: &Unit, emit: &mut Emit<'_>, board: &Board) {
    basic::bishop(unit, emit, board);
    basic::king(unit, emit, board);
}

/// 車的直線移動但不能吃子，再點自身進入投石瞄準
pub fn boulder_thrower(unit: &Unit, emit: &mut Emit<'_>, board: &Board) {
    self_marker(unit, emit);
    slide_quiet(unit, emit, board, &ORTHOGONAL);
}

/// 后走法；儲存槽為空時，相鄰友軍為支配目標
pub fn queen_of_domination(unit: &Unit, emit: &mut Emit<'_>, board: &Board) {
    basic::queen(unit, emit, board);
    if unit.stored_unit.is_some() {
        return;
    }
    for pos in unit.pos().offsets_in_bounds(&ALL_DIRECTIONS) {
        if board.friend_at(pos, unit.color).is_some() {
            emit(pos, HighlightTag::Ability);
        }
    }
}

/// 王 + 直線兩格跳（忽略中間格）
pub fn frog_king(unit: &Unit, emit: &mut Emit<'_>, board: &Board) {
    basic::king(unit, emit, board);
    leap(unit, emit, board, &FROG_HOPS);
}
