//! 點擊腳本重播
//!
//! 載入佈局後依序送出腳本中的點擊，每次點擊後印出棋盤。

use anyhow::{bail, Context, Result};
use arcane_chess::{Game, Layout, StartingLayout};
use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;
use strum::IntoEnumIterator;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 內建佈局名稱或 TOML 佈局檔路徑
    #[arg(short, long, default_value = "WizardsVsNecro")]
    layout: String,

    /// 點擊腳本：每行 `row col`，`#` 之後為註解
    script: PathBuf,

    /// 以 JSON 輸出每次點擊後的快照
    #[arg(long)]
    json: bool,

    /// 顯示除錯紀錄
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .init();

    if let Err(e) = run(&args) {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let layout = load_layout(&args.layout)?;
    let content = std::fs::read_to_string(&args.script)
        .with_context(|| format!("無法讀取腳本 {}", args.script.display()))?;
    let clicks = parse_script(&content)?;

    let mut game = Game::from_layout(&layout).context("佈局無法建立棋盤")?;
    println!("== {}，{} 先手 ==", layout.name, game.side_to_move());
    println!("{}", game.board().to_ascii());

    for (row, col) in clicks {
        let view = game.on_square_clicked(row, col);
        if args.json {
            println!("{}", serde_json::to_string(&view)?);
            continue;
        }

        println!();
        println!(
            "== 點擊 ({row}, {col})，輪到 {}{} ==",
            view.side_to_move,
            if view.redraw { "" } else { "（無變化）" }
        );
        println!("{}", game.board().to_ascii());
        if !view.highlights.is_empty() {
            let marks: Vec<String> = view
                .highlights
                .iter()
                .map(|h| format!("{}:{}", h.pos, h.tag))
                .collect();
            println!("高亮 {}", marks.join(" "));
        }
    }
    Ok(())
}

/// 內建名稱優先，其次當作檔案路徑
fn load_layout(spec: &str) -> Result<Layout> {
    if let Ok(builtin) = StartingLayout::from_str(spec) {
        return Layout::builtin(builtin).with_context(|| format!("內建佈局 {spec} 載入失敗"));
    }

    let content = std::fs::read_to_string(spec).with_context(|| {
        let names: Vec<String> = StartingLayout::iter().map(|l| l.to_string()).collect();
        format!("找不到佈局 {spec}（內建：{}）", names.join(", "))
    })?;
    Layout::from_toml(&content).with_context(|| format!("佈局檔 {spec} 格式錯誤"))
}

fn parse_script(content: &str) -> Result<Vec<(i32, i32)>> {
    let mut clicks = Vec::new();
    for (n, raw) in content.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }
        let coords: Vec<&str> = line.split_whitespace().collect();
        let [row, col] = coords.as_slice() else {
            bail!("第 {} 行需要兩個座標: `{raw}`", n + 1);
        };
        let row = row
            .parse()
            .with_context(|| format!("第 {} 行的列無法解析: `{raw}`", n + 1))?;
        let col = col
            .parse()
            .with_context(|| format!("第 {} 行的欄無法解析: `{raw}`", n + 1))?;
        clicks.push((row, col));
    }
    Ok(clicks)
}
