//! 型別別名

/// 單位唯一 ID
pub type UnitId = u64;

/// 棋盤座標（允許負數，方便位移計算後再檢查邊界）
pub type Coord = i32;

/// 顏色 (R, G, B, A)
pub type Rgba = (u8, u8, u8, u8);
