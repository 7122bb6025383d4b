//! 棋子與座標的基本資料型別

use crate::alias::{Coord, UnitId};
use crate::constants::{BOARD_SIZE, GHOUL_KING_RAISES, WHITE_PAWN_ROW};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

// ============================================================================
// 座標
// ============================================================================

/// 棋盤位置（row 0 為白方底線）
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Position {
    pub row: Coord,
    pub col: Coord,
}

impl Position {
    pub const fn new(row: Coord, col: Coord) -> Self {
        Self { row, col }
    }

    /// 位移後的位置（不檢查邊界）
    pub fn offset(self, d_row: Coord, d_col: Coord) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    pub fn in_bounds(self) -> bool {
        (0..BOARD_SIZE).contains(&self.row) && (0..BOARD_SIZE).contains(&self.col)
    }

    pub fn manhattan(self, other: Position) -> Coord {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }

    /// 王步距離（八方向相鄰為 1）
    pub fn chebyshev(self, other: Position) -> Coord {
        (self.row - other.row)
            .abs()
            .max((self.col - other.col).abs())
    }

    /// 依位移表產生棋盤內的位置
    pub fn offsets_in_bounds<'a>(
        self,
        offsets: &'a [(Coord, Coord)],
    ) -> impl Iterator<Item = Position> + 'a {
        offsets
            .iter()
            .map(move |&(d_row, d_col)| self.offset(d_row, d_col))
            .filter(|pos| pos.in_bounds())
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// ============================================================================
// 陣營顏色
// ============================================================================

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
pub enum Color {
    #[default]
    White,
    Black,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// 兵前進的列方向
    pub fn forward(self) -> Coord {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// 兵的起始列
    pub fn pawn_row(self) -> Coord {
        match self {
            Color::White => WHITE_PAWN_ROW,
            Color::Black => BOARD_SIZE - 1 - WHITE_PAWN_ROW,
        }
    }

    /// 底線
    pub fn home_row(self) -> Coord {
        match self {
            Color::White => 0,
            Color::Black => BOARD_SIZE - 1,
        }
    }

    /// ASCII 佈局使用的前綴
    pub fn symbol(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

// ============================================================================
// 棋子種類
// ============================================================================

/// 棋子種類（封閉集合，所有行為以 match 窮舉分派）
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
pub enum UnitKind {
    // 基本
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
    // 亡靈
    NecroPawn,
    GhostKnight,
    Necromancer,
    DeadLauncher,
    QueenOfBones,
    GhoulKing,
    // 野獸
    PawnHopper,
    BeastKnight,
    BeastDruid,
    BoulderThrower,
    QueenOfDomination,
    FrogKing,
    // 巫師
    YoungWiz,
    Familiar,
    WizardTower,
    Portal,
    QueenOfIllusions,
    WizardKing,
    // 惡魔
    HellPawn,
    Prowler,
    Howler,
    Beholder,
    QueenOfDestruction,
    HellKing,
}

/// 棋子家族（裝填、復活、吸收、變身都以家族判斷）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Family {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl UnitKind {
    pub fn family(self) -> Family {
        use UnitKind::*;
        match self {
            Pawn | NecroPawn | PawnHopper | YoungWiz | HellPawn => Family::Pawn,
            Knight | GhostKnight | BeastKnight | Familiar | Prowler => Family::Knight,
            Bishop | Necromancer | BeastDruid | WizardTower | Howler => Family::Bishop,
            Rook | DeadLauncher | BoulderThrower | Portal | Beholder => Family::Rook,
            Queen | QueenOfBones | QueenOfDomination | QueenOfIllusions | QueenOfDestruction => {
                Family::Queen
            }
            King | GhoulKing | FrogKing | WizardKing | HellKing => Family::King,
        }
    }

    pub fn is_pawn_family(self) -> bool {
        self.family() == Family::Pawn
    }

    /// 被吃時會引爆周圍八格
    pub fn has_death_blast(self) -> bool {
        self == UnitKind::QueenOfDestruction
    }

    /// 被吃後可由兩個兵系單位獻祭復活
    pub fn is_revival_eligible(self) -> bool {
        self == UnitKind::QueenOfBones
    }

    /// 吃子後可在周圍召喚兵
    pub fn raises_on_capture(self) -> bool {
        self == UnitKind::Necromancer
    }
}

// ============================================================================
// 吸收的移動方式
// ============================================================================

/// 嚎叫者吃子後永久取得的移動方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbsorbedMovement {
    pub knight: bool,
    pub rook: bool,
    pub queen: bool,
    pub pawn: bool,
}

impl AbsorbedMovement {
    /// 依被吃單位的家族打開對應旗標，主教與王家族不提供新移動
    ///
    /// 回傳是否有新取得的移動方式
    pub fn absorb(&mut self, family: Family) -> bool {
        let flag = match family {
            Family::Knight => &mut self.knight,
            Family::Rook => &mut self.rook,
            Family::Queen => &mut self.queen,
            Family::Pawn => &mut self.pawn,
            Family::Bishop | Family::King => return false,
        };
        let gained = !*flag;
        *flag = true;
        gained
    }
}

// ============================================================================
// 單位
// ============================================================================

/// 棋盤上的單位
///
/// 位置只能透過 `Board` 改變，確保佔據索引與單位座標同步。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    pub kind: UnitKind,
    pub color: Color,
    pub(crate) pos: Position,
    /// 亡者投射器已裝填
    pub pawn_loaded: bool,
    /// 被暈眩，下一個己方回合不能選取
    pub stunned: bool,
    /// 剩餘召喚次數
    pub raises_left: u8,
    /// 傳送門的共享儲存槽 / 支配女王記住的原始單位
    pub stored_unit: Option<Box<Unit>>,
    /// 石化，免疫吃子
    pub is_stone: bool,
    pub absorbed: AbsorbedMovement,
}

impl Unit {
    /// 以預設能力狀態建立單位
    pub fn new(id: UnitId, kind: UnitKind, color: Color, pos: Position) -> Self {
        Self {
            id,
            kind,
            color,
            pos,
            pawn_loaded: false,
            stunned: false,
            raises_left: match kind {
                UnitKind::GhoulKing => GHOUL_KING_RAISES,
                _ => 0,
            },
            stored_unit: None,
            is_stone: false,
            absorbed: AbsorbedMovement::default(),
        }
    }

    pub fn pos(&self) -> Position {
        self.pos
    }

    pub fn is_enemy_of(&self, other: &Unit) -> bool {
        self.color != other.color
    }

    /// ASCII 佈局符號，例如 `w:Pawn`
    pub fn token(&self) -> String {
        format!("{}:{}", self.color.symbol(), self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn every_family_has_five_kinds() {
        for family in Family::iter() {
            let count = UnitKind::iter().filter(|k| k.family() == family).count();
            assert_eq!(count, 5, "{family} 家族數量錯誤");
        }
        assert_eq!(UnitKind::iter().count(), 30);
    }

    #[test]
    fn kind_names_round_trip_through_strum() {
        for kind in UnitKind::iter() {
            assert_eq!(UnitKind::from_str(&kind.to_string()).unwrap(), kind);
        }
        assert!(UnitKind::from_str("Dragon").is_err());
    }

    #[test]
    fn absorb_ignores_bishop_and_king() {
        let mut absorbed = AbsorbedMovement::default();
        assert!(!absorbed.absorb(Family::Bishop));
        assert!(!absorbed.absorb(Family::King));
        assert_eq!(absorbed, AbsorbedMovement::default());

        assert!(absorbed.absorb(Family::Rook));
        assert!(!absorbed.absorb(Family::Rook), "重複吸收不算新取得");
        assert!(absorbed.rook);
    }

    #[test]
    fn ghoul_king_starts_with_a_raise() {
        let ghoul = Unit::new(1, UnitKind::GhoulKing, Color::Black, Position::new(7, 4));
        let king = Unit::new(2, UnitKind::King, Color::Black, Position::new(7, 3));
        assert_eq!(ghoul.raises_left, GHOUL_KING_RAISES);
        assert_eq!(king.raises_left, 0);
    }

    #[test]
    fn pawn_rows_mirror() {
        assert_eq!(Color::White.pawn_row(), 1);
        assert_eq!(Color::Black.pawn_row(), 6);
        assert_eq!(Color::White.home_row(), 0);
        assert_eq!(Color::Black.home_row(), 7);
    }
}
