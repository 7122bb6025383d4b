//! 基本資料類型定義

use crate::alias::UnitId;
use crate::component::Position;
use crate::error::{BoardError, Result};
use std::collections::HashMap;

/// 雙向佔據索引
///
/// 同時維護兩個方向的 mapping，確保兩者永遠同步：
/// - `Position → UnitId`：每格至多一個單位
/// - `UnitId → Position`：查詢單位所在位置
#[derive(Debug, Clone, Default)]
pub struct OccupancyMap {
    pos_to_unit: HashMap<Position, UnitId>,
    unit_to_pos: HashMap<UnitId, Position>,
}

impl OccupancyMap {
    /// 查詢指定位置的單位
    pub fn unit_at(&self, pos: Position) -> Option<UnitId> {
        self.pos_to_unit.get(&pos).copied()
    }

    /// 查詢指定單位的位置
    pub fn position_of(&self, id: UnitId) -> Option<Position> {
        self.unit_to_pos.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.unit_to_pos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.unit_to_pos.is_empty()
    }

    /// 插入單位到指定位置
    ///
    /// 位置已被佔據或單位已存在時回傳錯誤。
    pub fn insert(&mut self, pos: Position, id: UnitId) -> Result<()> {
        if self.unit_to_pos.contains_key(&id) {
            return Err(BoardError::DuplicateUnit { id }.into());
        }
        if let Some(occupant) = self.unit_at(pos) {
            return Err(BoardError::SquareOccupied {
                row: pos.row,
                col: pos.col,
                occupant,
            }
            .into());
        }

        self.pos_to_unit.insert(pos, id);
        self.unit_to_pos.insert(id, pos);
        Ok(())
    }

    /// 移除單位，不存在時不做任何事
    pub fn remove(&mut self, id: UnitId) -> Option<Position> {
        let pos = self.unit_to_pos.remove(&id)?;
        self.pos_to_unit.remove(&pos);
        Some(pos)
    }

    /// 將單位移到空格
    pub fn relocate(&mut self, id: UnitId, to: Position) -> Result<()> {
        let from = self
            .position_of(id)
            .ok_or(BoardError::UnitNotFound { id })?;
        if from == to {
            return Ok(());
        }
        if let Some(occupant) = self.unit_at(to) {
            return Err(BoardError::SquareOccupied {
                row: to.row,
                col: to.col,
                occupant,
            }
            .into());
        }

        self.pos_to_unit.remove(&from);
        self.pos_to_unit.insert(to, id);
        self.unit_to_pos.insert(id, to);
        Ok(())
    }

    /// 交換兩個單位的位置
    pub fn swap(&mut self, a: UnitId, b: UnitId) -> Result<()> {
        let pos_a = self
            .position_of(a)
            .ok_or(BoardError::UnitNotFound { id: a })?;
        let pos_b = self
            .position_of(b)
            .ok_or(BoardError::UnitNotFound { id: b })?;

        self.pos_to_unit.insert(pos_a, b);
        self.pos_to_unit.insert(pos_b, a);
        self.unit_to_pos.insert(a, pos_b);
        self.unit_to_pos.insert(b, pos_a);
        Ok(())
    }
}
