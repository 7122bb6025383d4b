//! 單位 ID 產生

use crate::alias::UnitId;
use rand::random;
use std::collections::HashSet;

/// 產生棋盤上從未用過的隨機 ID 並登記
///
/// 收納、裝填等離場的單位保留原 ID，所以已用過的 ID 不回收。
pub fn fresh_unit_id(used_ids: &mut HashSet<UnitId>) -> UnitId {
    let mut id: UnitId = random();
    while !used_ids.insert(id) {
        id = random();
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_never_reused() {
        let mut used = HashSet::new();
        let ids: HashSet<UnitId> = (0..200).map(|_| fresh_unit_id(&mut used)).collect();
        assert_eq!(ids.len(), 200);
        assert_eq!(used.len(), 200);
    }

    #[test]
    fn registered_ids_are_skipped() {
        let mut used = HashSet::new();
        let first = fresh_unit_id(&mut used);
        let second = fresh_unit_id(&mut used);
        assert_ne!(first, second);
        assert!(used.contains(&first) && used.contains(&second));
    }
}
