//! 資訊面板用的靜態說明文字

use crate::component::UnitKind;

/// 操作說明
pub const INSTRUCTION_TEXT: &str = "\
- 點擊棋子選取並顯示可走範圍
- 點擊黃色格移動、紅色格吃子
- 再點一次選取中的棋子可啟動能力（有青色自身標記時）
- 可以選取對手的棋子預覽範圍，灰色代表不是你的回合";

/// 種類 → 能力說明
pub fn ability_text(kind: UnitKind) -> &'static str {
    use UnitKind::*;
    match kind {
        Pawn => "\
- 向前走一格，起始列可走兩格
- 斜前方吃子",
        Knight => "\
- L 形跳躍（2+1），無視路徑上的棋子",
        Bishop => "\
- 斜向滑行任意格，遇到第一個棋子停止",
        Rook => "\
- 直向與橫向滑行任意格，遇到第一個棋子停止",
        Queen => "\
- 八方向滑行任意格",
        King => "\
- 八方向移動一格",

        NecroPawn => "\
- 兵的走法
- 再點自己進入自爆預備，第三次點擊引爆
- 自爆移除自己與周圍八格所有棋子（不分敵我）",
        GhostKnight => "\
- 騎士的走法
- 每次移動後，周圍八格的敵人被暈眩，下個回合不能行動",
        Necromancer => "\
- 象的走法
- 吃子後可在被吃位置上下左右的空格召喚一個兵",
        DeadLauncher => "\
- 車的走法
- 再點自己：未裝填時選擇相鄰的己方兵裝填（結束回合）
- 已裝填時進入發射模式，擊殺距離恰為 3 的敵人（結束回合）",
        QueenOfBones => "\
- 后的走法
- 被吃時若己方還有兩個以上的兵系棋子，可獻祭其中兩個
- 獻祭後若原始出生點是空的，骨后在該處復活",
        GhoulKing => "\
- 王的走法
- 每局一次：再點自己，在相鄰空格召喚亡靈兵
- 召喚不消耗移動",

        PawnHopper => "\
- 兵的走法，任何列都能直線前進兩格
- 前方是敵人且後方是空格時，跳過並吃掉該敵人",
        BeastKnight => "\
- 長 L 形跳躍（3+1），無視路徑上的棋子",
        BeastDruid => "\
- 象的滑行加上王的一步",
        BoulderThrower => "\
- 車的直線移動，但不能以移動吃子
- 再點自己進入投石模式，擊殺距離恰為 3 的敵人，自己不移動",
        QueenOfDomination => "\
- 后的走法
- 支配相鄰的己方棋子，使其暫時以后的方式移動一步
- 移動後恢復原形；沒有合法走法時立即恢復",
        FrogKing => "\
- 王的走法
- 也可以直線跳兩格，無視中間的棋子",

        YoungWiz => "\
- 兵的走法
- 可以電擊正前方的敵人，自己不移動",
        Familiar => "\
- 騎士的走法
- 再點自己切換石化：石化時不會被吃
- 進入石化結束回合，解除石化不結束回合",
        WizardTower => "\
- 象的射線，吃子時不移動",
        Portal => "\
- 車的走法
- 再點自己收納相鄰的己方棋子，所有己方傳送門共用同一個儲存槽
- 儲存中時任一傳送門都能在相鄰空格彈出該棋子（不結束回合）",
        QueenOfIllusions => "\
- 后的走法
- 可以與棋盤上任何己方兵系棋子交換位置（結束回合）",
        WizardKing => "\
- 王的走法
- 上下直線射擊第一個遇到的敵人，自己不移動",

        HellPawn => "\
- 兵的走法
- 吃掉非兵系的敵人時，變成該種類的棋子
- 吃兵則是一般吃子",
        Prowler => "\
- 騎士的走法
- 吃子後必須再走一步（可回到原位）
- 吃掉毀滅女王時回合直接結束",
        Howler => "\
- 象的走法
- 吃子後永久取得被吃棋子家族的移動方式（騎士、車、后、兵），可以累積",
        Beholder => "\
- 上下左右移動一格，只能走到空格
- 再點自己進入射擊模式，擊殺範圍內的敵人，自己不移動",
        QueenOfDestruction => "\
- 后的走法
- 被吃時引爆周圍八格的所有棋子（不分敵我）
- 移入吃掉她的棋子也會被炸毀",
        HellKing => "\
- 王的走法
- 不吃相鄰的敵人，而是把它轉化為己方，雙方都不移動",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_kind_has_text() {
        for kind in UnitKind::iter() {
            assert!(!ability_text(kind).is_empty(), "{kind} 缺少說明");
        }
    }
}
