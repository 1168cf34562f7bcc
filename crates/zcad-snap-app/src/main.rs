//! ZCAD 捕捉工具场景回放
//!
//! 读取场景文件，把命令和点击依次交给捕捉工具，输出相对零点的最终位置。

mod scenario;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use scenario::Scenario;

/// 命令行参数
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// 场景文件（JSON）
    scenario: PathBuf,

    /// 输出调试日志
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = CliArgs::parse();

    // 初始化日志
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    tracing::subscriber::set_global_default(FmtSubscriber::builder().with_max_level(level).finish())?;

    info!("Replaying {}", args.scenario.display());

    let state = Scenario::load(&args.scenario)?.replay();
    let p = state.relative_zero.position();
    println!("relative zero: ({}, {})", p.x, p.y);

    Ok(())
}
