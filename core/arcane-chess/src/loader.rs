//! 佈局載入器

use crate::alias::Coord;
use crate::component::{Color, Position, UnitKind};
use crate::constants::BOARD_SIZE;
use crate::error::{LoadError, Result};
use crate::loader_schema::{Layout, LayoutFile, Placement};
use std::str::FromStr;

/// 反序列化 TOML 佈局並解析其格子
pub fn parse_layout(content: &str) -> Result<Layout> {
    let file: LayoutFile = toml::from_str(content).map_err(|e| LoadError::DeserializeError {
        format: "layout.toml".to_string(),
        reason: e.to_string(),
    })?;

    let placements = parse_grid(&file.grid)?;
    Ok(Layout {
        name: file.name,
        first: file.first,
        placements,
    })
}

/// 序列化佈局為 TOML
pub fn write_layout(layout: &Layout) -> Result<String> {
    let file = LayoutFile {
        name: layout.name.clone(),
        first: layout.first,
        grid: render_grid(&layout.placements),
    };
    toml::to_string_pretty(&file).map_err(|e| {
        LoadError::SerializeError {
            format: "layout.toml".to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}

/// 從 ASCII 格式載入單位配置
///
/// ASCII 格式：8 行，每行 8 個用空白分隔的符號，第一行為 row 0
/// - `.` = 空格
/// - `w:<Kind>` / `b:<Kind>` = 白方 / 黑方單位
///
/// 例如：
/// ```text
/// w:Rook . . . w:King . . .
/// ```
pub fn parse_grid(ascii: &str) -> Result<Vec<Placement>> {
    let lines: Vec<&str> = ascii
        .lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect();

    if lines.len() != BOARD_SIZE as usize {
        return Err(LoadError::ParseError(format!(
            "棋盤需要 {BOARD_SIZE} 行，實際 {} 行",
            lines.len()
        ))
        .into());
    }

    let mut placements = Vec::new();
    for (row, line) in lines.iter().enumerate() {
        let row = row as Coord;
        let cells: Vec<&str> = line.split_whitespace().collect();
        if cells.len() != BOARD_SIZE as usize {
            return Err(LoadError::ParseError(format!(
                "第 {row} 行需要 {BOARD_SIZE} 格，實際 {} 格",
                cells.len()
            ))
            .into());
        }

        for (col, cell) in cells.into_iter().enumerate() {
            let pos = Position::new(row, col as Coord);
            if let Some((color, kind)) = parse_token(cell, row)? {
                placements.push(Placement { pos, color, kind });
            }
        }
    }
    Ok(placements)
}

/// 解析單一格子符號，空格回傳 `None`
pub fn parse_token(token: &str, row: Coord) -> Result<Option<(Color, UnitKind)>> {
    if token == "." {
        return Ok(None);
    }
    let unknown = || LoadError::UnknownToken {
        token: token.to_string(),
        row,
    };

    let (prefix, kind) = token.split_once(':').ok_or_else(unknown)?;
    let color = match prefix {
        "w" => Color::White,
        "b" => Color::Black,
        _ => return Err(unknown().into()),
    };
    let kind = UnitKind::from_str(kind).map_err(|_| unknown())?;
    Ok(Some((color, kind)))
}

/// 把配置畫回 ASCII 格式
pub fn render_grid(placements: &[Placement]) -> String {
    let mut cells = vec![vec![".".to_string(); BOARD_SIZE as usize]; BOARD_SIZE as usize];
    for placement in placements.iter().filter(|p| p.pos.in_bounds()) {
        cells[placement.pos.row as usize][placement.pos.col as usize] =
            format!("{}:{}", placement.color.symbol(), placement.kind);
    }
    cells
        .into_iter()
        .map(|row| row.join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_parse_color_and_kind() {
        assert_eq!(parse_token(".", 0).unwrap(), None);
        assert_eq!(
            parse_token("b:GhoulKing", 7).unwrap(),
            Some((Color::Black, UnitKind::GhoulKing))
        );
        assert!(parse_token("x:Pawn", 0).is_err());
        assert!(parse_token("w:Dragon", 0).is_err());
        assert!(parse_token("Pawn", 0).is_err());
    }

    #[test]
    fn grid_must_be_eight_by_eight() {
        let short = ". . . . . . . .\n".repeat(7);
        assert!(parse_grid(&short).is_err());

        let narrow = ". . . . . . .\n".repeat(8);
        assert!(parse_grid(&narrow).is_err());

        let empty = ". . . . . . . .\n".repeat(8);
        assert!(parse_grid(&empty).unwrap().is_empty());
    }
}
