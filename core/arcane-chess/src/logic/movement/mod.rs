//! 走法產生
//!
//! 每種棋子一個純函式：`(unit, emit, board)`，只透過 `emit` 回報目標格與分類，
//! 不修改任何狀態。是否輪到該單位不影響產生結果，淡化顏色由呼叫端處理。
//!
//! # 通用規則：
//! - 滑行（車、象、后）遇到第一個有單位的格子即停止
//! - 該格為敵方且未石化時標記為吃子
//! - 跳躍（騎士類）只檢查落點
//! - 固定範圍的遠程能力不受路徑阻擋（由能力模組產生）

pub mod basic;
pub mod beasts;
pub mod demons;
pub mod necro;
pub mod wizards;

use crate::alias::Coord;
use crate::component::{Position, Unit, UnitKind};
use crate::logic::board::Board;
use crate::logic::highlight::HighlightTag;

/// 走法回報
pub type Emit<'a> = dyn FnMut(Position, HighlightTag) + 'a;

/// 單一種類的走法產生器
pub type Generator = fn(&Unit, &mut Emit<'_>, &Board);

/// 種類 → 產生器（窮舉，新增種類時編譯器會要求補上）
pub fn generator_for(kind: UnitKind) -> Generator {
    use UnitKind::*;
    match kind {
        Pawn => basic::pawn,
        Knight => basic::knight,
        Bishop => basic::bishop,
        Rook => basic::rook,
        Queen => basic::queen,
        King => basic::king,

        NecroPawn => necro::necro_pawn,
        GhostKnight => necro::ghost_knight,
        Necromancer => necro::necromancer,
        DeadLauncher => necro::dead_launcher,
        QueenOfBones => necro::queen_of_bones,
        GhoulKing => necro::ghoul_king,

        PawnHopper => beasts::pawn_hopper,
        BeastKnight => beasts::beast_knight,
        BeastDruid => beasts::beast_druid,
        BoulderThrower => beasts::boulder_thrower,
        QueenOfDomination => beasts::queen_of_domination,
        FrogKing => beasts::frog_king,

        YoungWiz => wizards::young_wiz,
        Familiar => wizards::familiar,
        WizardTower => wizards::wizard_tower,
        Portal => wizards::portal,
        QueenOfIllusions => wizards::queen_of_illusions,
        WizardKing => wizards::wizard_king,

        HellPawn => demons::hell_pawn,
        Prowler => demons::prowler,
        Howler => demons::howler,
        Beholder => demons::beholder,
        QueenOfDestruction => demons::queen_of_destruction,
        HellKing => demons::hell_king,
    }
}

/// 收集單位的所有走法（保留產生順序，同一格只保留第一次）
pub fn generate(unit: &Unit, board: &Board) -> Vec<(Position, HighlightTag)> {
    let mut targets: Vec<(Position, HighlightTag)> = Vec::new();
    let mut emit = |pos: Position, tag: HighlightTag| {
        if !targets.iter().any(|(p, _)| *p == pos) {
            targets.push((pos, tag));
        }
    };
    generator_for(unit.kind)(unit, &mut emit, board);
    targets
}

/// 單位是否有任何可走或可吃的目標
pub fn has_destination(unit: &Unit, board: &Board) -> bool {
    generate(unit, board)
        .iter()
        .any(|(_, tag)| matches!(tag, HighlightTag::Move | HighlightTag::Capture))
}

// ============================================================================
// 共用基元
// ============================================================================

/// 可被吃的敵方（未石化）
fn capturable(unit: &Unit, board: &Board, pos: Position) -> bool {
    board
        .enemy_at(pos, unit.color)
        .is_some_and(|enemy| !enemy.is_stone)
}

/// 沿方向滑行，遇到第一個單位即停止
pub fn slide(unit: &Unit, emit: &mut Emit<'_>, board: &Board, directions: &[(Coord, Coord)]) {
    for &(d_row, d_col) in directions {
        let mut pos = unit.pos();
        loop {
            pos = pos.offset(d_row, d_col);
            if !pos.in_bounds() {
                break;
            }
            if board.is_empty(pos) {
                emit(pos, HighlightTag::Move);
                continue;
            }
            if capturable(unit, board, pos) {
                emit(pos, HighlightTag::Capture);
            }
            break;
        }
    }
}

/// 只滑行到空格，不能以移動吃子
pub fn slide_quiet(unit: &Unit, emit: &mut Emit<'_>, board: &Board, directions: &[(Coord, Coord)]) {
    for &(d_row, d_col) in directions {
        let mut pos = unit.pos().offset(d_row, d_col);
        while pos.in_bounds() && board.is_empty(pos) {
            emit(pos, HighlightTag::Move);
            pos = pos.offset(d_row, d_col);
        }
    }
}

/// 固定位移跳躍，只看落點
pub fn leap(unit: &Unit, emit: &mut Emit<'_>, board: &Board, offsets: &[(Coord, Coord)]) {
    for pos in unit.pos().offsets_in_bounds(offsets) {
        if board.is_empty(pos) {
            emit(pos, HighlightTag::Move);
        } else if capturable(unit, board, pos) {
            emit(pos, HighlightTag::Capture);
        }
    }
}

/// 固定位移，只能落在空格
pub fn step_quiet(unit: &Unit, emit: &mut Emit<'_>, board: &Board, offsets: &[(Coord, Coord)]) {
    for pos in unit.pos().offsets_in_bounds(offsets) {
        if board.is_empty(pos) {
            emit(pos, HighlightTag::Move);
        }
    }
}

/// 兵的基本走法：前進一格、起始列前進兩格、斜前方吃子
pub fn pawn_moves(unit: &Unit, emit: &mut Emit<'_>, board: &Board) {
    let forward = unit.color.forward();
    let start = unit.pos();

    let one = start.offset(forward, 0);
    if one.in_bounds() && board.is_empty(one) {
        emit(one, HighlightTag::Move);

        let two = start.offset(2 * forward, 0);
        if start.row == unit.color.pawn_row() && two.in_bounds() && board.is_empty(two) {
            emit(two, HighlightTag::Move);
        }
    }

    for d_col in [-1, 1] {
        let diagonal = start.offset(forward, d_col);
        if diagonal.in_bounds() && capturable(unit, board, diagonal) {
            emit(diagonal, HighlightTag::Capture);
        }
    }
}

/// 標記自身格（可再次點擊啟動能力）
pub fn self_marker(unit: &Unit, emit: &mut Emit<'_>) {
    emit(unit.pos(), HighlightTag::SelfMarker);
}
