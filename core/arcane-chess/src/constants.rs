//! 遊戲常數定義

use crate::alias::{Coord, Rgba};

/// 棋盤邊長（8×8）
pub const BOARD_SIZE: Coord = 8;

/// 白方兵的起始列（黑方為 `BOARD_SIZE - 1 - WHITE_PAWN_ROW`）
pub const WHITE_PAWN_ROW: Coord = 1;

/// 骨后復活點所在的欄（列由顏色決定：白 0、黑 7）
pub const QUEEN_OF_BONES_SPAWN_COL: Coord = 3;

/// 復活骨后需要獻祭的兵系單位數
pub const REVIVAL_SACRIFICES: usize = 2;

/// 食屍鬼王開局的召喚次數
pub const GHOUL_KING_RAISES: u8 = 1;

// ============================================================================
// 高亮顏色
// ============================================================================

/// 可移動（黃）
pub const MOVE_COLOR: Rgba = (255, 255, 0, 150);
/// 可吃子 / 警示範圍（紅）
pub const CAPTURE_COLOR: Rgba = (255, 0, 0, 150);
/// 能力目標與自身標記（青）
pub const ABILITY_COLOR: Rgba = (0, 255, 255, 150);
/// 獻祭選擇（紫）
pub const SACRIFICE_COLOR: Rgba = (136, 0, 136, 150);
/// 非行動方的預覽（灰）
pub const MUTED_COLOR: Rgba = (229, 228, 226, 150);

// ============================================================================
// 位移表 (row, col)
// ============================================================================

/// 上下左右
pub const ORTHOGONAL: [(Coord, Coord); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// 四個斜向
pub const DIAGONAL: [(Coord, Coord); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// 八方向（王步、爆炸範圍）
pub const ALL_DIRECTIONS: [(Coord, Coord); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// 騎士 L 形跳躍
pub const KNIGHT_LEAPS: [(Coord, Coord); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// 野獸騎士的 3-1 跳躍
pub const BEAST_KNIGHT_LEAPS: [(Coord, Coord); 8] = [
    (-3, -1),
    (-3, 1),
    (-1, -3),
    (-1, 3),
    (1, -3),
    (1, 3),
    (3, -1),
    (3, 1),
];

/// 蛙王的直線兩格跳
pub const FROG_HOPS: [(Coord, Coord); 4] = [(-2, 0), (2, 0), (0, -2), (0, 2)];

/// 曼哈頓距離恰為 3 的環（投石者瞄準、亡者投射器發射）
pub const RING_OF_THREE: [(Coord, Coord); 12] = [
    (-3, 0),
    (3, 0),
    (0, -3),
    (0, 3),
    (-2, -1),
    (-2, 1),
    (2, -1),
    (2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
];

/// 眼魔的射擊區：3 環 + 距離 2 的直線 + 四個斜鄰
pub const BEHOLDER_ZONE: [(Coord, Coord); 20] = [
    (-3, 0),
    (3, 0),
    (0, -3),
    (0, 3),
    (-2, -1),
    (-2, 1),
    (2, -1),
    (2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (-2, 0),
    (2, 0),
    (0, -2),
    (0, 2),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];
