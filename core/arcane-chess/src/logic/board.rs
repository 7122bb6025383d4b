//! 棋盤邏輯
//!
//! `Board` 是單位的唯一存放處；所有位置變動都經過佔據索引，
//! 保證每格至多一個單位、每個 ID 至多出現一次。

use crate::alias::UnitId;
use crate::component::{Color, Position, Unit, UnitKind};
use crate::constants::BOARD_SIZE;
use crate::domain::core_types::OccupancyMap;
use crate::error::{BoardError, Result};
use crate::logic::id_generator::fresh_unit_id;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Default)]
pub struct Board {
    units: HashMap<UnitId, Unit>,
    occupancy: OccupancyMap,
    /// 曾經使用過的 ID，離開棋盤也不回收
    used_ids: HashSet<UnitId>,
}

/// 驗證位置是否在棋盤邊界內
pub fn check_in_bounds(pos: Position) -> Result<()> {
    if pos.in_bounds() {
        Ok(())
    } else {
        Err(BoardError::OutOfBounds {
            row: pos.row,
            col: pos.col,
        }
        .into())
    }
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // 查詢
    // ------------------------------------------------------------------

    pub fn get(&self, id: UnitId) -> Option<&Unit> {
        self.units.get(&id)
    }

    /// 可變存取（位置欄位只能由 `Board` 修改）
    pub fn get_mut(&mut self, id: UnitId) -> Option<&mut Unit> {
        self.units.get_mut(&id)
    }

    pub fn contains(&self, id: UnitId) -> bool {
        self.units.contains_key(&id)
    }

    pub fn unit_at(&self, pos: Position) -> Option<&Unit> {
        self.occupancy
            .unit_at(pos)
            .and_then(|id| self.units.get(&id))
    }

    pub fn id_at(&self, pos: Position) -> Option<UnitId> {
        self.occupancy.unit_at(pos)
    }

    pub fn is_empty(&self, pos: Position) -> bool {
        self.occupancy.unit_at(pos).is_none()
    }

    /// 指定位置上 `color` 的敵方單位
    pub fn enemy_at(&self, pos: Position, color: Color) -> Option<&Unit> {
        self.unit_at(pos).filter(|unit| unit.color != color)
    }

    /// 指定位置上 `color` 的己方單位
    pub fn friend_at(&self, pos: Position, color: Color) -> Option<&Unit> {
        self.unit_at(pos).filter(|unit| unit.color == color)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.units.values()
    }

    /// 依 (row, col) 排序的單位快照
    pub fn units_sorted(&self) -> Vec<Unit> {
        let mut units: Vec<Unit> = self.units.values().cloned().collect();
        units.sort_by_key(|unit| unit.pos);
        units
    }

    /// 指定顏色、指定種類的所有單位 ID
    pub fn ids_of(&self, color: Color, kind: UnitKind) -> Vec<UnitId> {
        self.units
            .values()
            .filter(|unit| unit.color == color && unit.kind == kind)
            .map(|unit| unit.id)
            .collect()
    }

    // ------------------------------------------------------------------
    // 修改
    // ------------------------------------------------------------------

    /// 放入既有單位（例如從傳送門彈出），保留其 ID
    pub fn insert(&mut self, unit: Unit) -> Result<()> {
        check_in_bounds(unit.pos)?;
        self.occupancy.insert(unit.pos, unit.id)?;
        self.used_ids.insert(unit.id);
        self.units.insert(unit.id, unit);
        Ok(())
    }

    /// 以新 ID 產生預設狀態的單位
    pub fn spawn(&mut self, kind: UnitKind, color: Color, pos: Position) -> Result<UnitId> {
        check_in_bounds(pos)?;
        if let Some(occupant) = self.occupancy.unit_at(pos) {
            return Err(BoardError::SquareOccupied {
                row: pos.row,
                col: pos.col,
                occupant,
            }
            .into());
        }
        let id = fresh_unit_id(&mut self.used_ids);
        self.insert(Unit::new(id, kind, color, pos))?;
        Ok(id)
    }

    /// 直接移除單位（不經吃子管線，只給收納、變身等非吃子的離場使用）
    pub fn remove(&mut self, id: UnitId) -> Option<Unit> {
        self.occupancy.remove(id)?;
        self.units.remove(&id)
    }

    /// 將單位移到空格
    pub fn relocate(&mut self, id: UnitId, to: Position) -> Result<()> {
        check_in_bounds(to)?;
        self.occupancy.relocate(id, to)?;
        let unit = self
            .units
            .get_mut(&id)
            .ok_or(BoardError::UnitNotFound { id })?;
        unit.pos = to;
        Ok(())
    }

    /// 交換兩個單位的位置
    pub fn swap(&mut self, a: UnitId, b: UnitId) -> Result<()> {
        self.occupancy.swap(a, b)?;
        let pos_a = self.occupancy.position_of(a).ok_or(BoardError::UnitNotFound { id: a })?;
        let pos_b = self.occupancy.position_of(b).ok_or(BoardError::UnitNotFound { id: b })?;
        if let Some(unit) = self.units.get_mut(&a) {
            unit.pos = pos_a;
        }
        if let Some(unit) = self.units.get_mut(&b) {
            unit.pos = pos_b;
        }
        Ok(())
    }

    /// 清除某一方所有暈眩
    pub fn clear_stuns(&mut self, color: Color) {
        for unit in self.units.values_mut().filter(|u| u.color == color) {
            unit.stunned = false;
        }
    }

    /// 以 ASCII 佈局格式輸出（row 0 在第一行）
    pub fn to_ascii(&self) -> String {
        let mut lines = Vec::with_capacity(BOARD_SIZE as usize);
        for row in 0..BOARD_SIZE {
            let cells: Vec<String> = (0..BOARD_SIZE)
                .map(|col| match self.unit_at(Position::new(row, col)) {
                    Some(unit) => unit.token(),
                    None => ".".to_string(),
                })
                .collect();
            lines.push(cells.join(" "));
        }
        lines.join("\n")
    }
}
