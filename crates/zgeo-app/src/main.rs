//! ZGEO 命令行入口
//!
//! 从文件或标准输入读取一个 JSON 程序，求值后把结果以线格式写到标准输出。

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use zgeo_core::eval::{EvalConfig, Evaluator, DEFAULT_MAX_DEPTH};
use zgeo_file::{load_program, read_program, run, to_json_string, to_json_string_pretty};

#[derive(Parser, Debug)]
#[command(name = "zgeo")]
#[command(about = "Evaluate a geometry program (JSON) and print the resulting shape")]
struct Args {
    /// 程序文件（JSON），缺省时读取标准输入
    input: Option<PathBuf>,

    /// 美化输出
    #[arg(long)]
    pretty: bool,

    /// 最大嵌套深度
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// 输出调试日志
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // 初始化日志（写到 stderr，不污染输出）
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .finish(),
    )?;

    let program = match &args.input {
        Some(path) => load_program(path)
            .with_context(|| format!("Failed to load program from {}", path.display()))?,
        None => {
            info!("Reading program from stdin");
            read_program(std::io::stdin().lock()).context("Failed to read program from stdin")?
        }
    };

    let evaluator = Evaluator::with_config(EvalConfig {
        max_depth: args.max_depth,
    });
    let value = run(&evaluator, &program).await?;

    let output = if args.pretty {
        to_json_string_pretty(&value)?
    } else {
        to_json_string(&value)?
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", output)?;

    Ok(())
}
