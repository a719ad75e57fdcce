use anyhow::{Context, Result};
use clap::{error::ErrorKind, CommandFactory, Parser};
use nonprint_core::scan_and_write;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, error};

/// 命令行入口（基于 clap）
#[derive(Parser, Debug)]
#[command(name = "nonprint", version, about = "Report non-printable characters in a UTF-8 text file")]
struct Cli {
    /// 待扫描的文本文件（允许以 `-` 开头的文件名）
    #[arg(allow_hyphen_values = true)]
    path: PathBuf,
}

/// 退出码：0 成功（无论是否有诊断），1 扫描失败，2 参数错误
const EXIT_USAGE: u8 = 2;

fn main() -> ExitCode {
    // 初始化日志（支持通过 RUST_LOG 控制等级，例如 info、debug）
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            kind => {
                // 参数个数不对：只打印用法，不访问任何文件
                debug!(?kind, "argument parsing failed");
                println!("Usage: {} <path_to_tsv_file>", program_name());
                return ExitCode::from(EXIT_USAGE);
            }
        },
    };

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    // 诊断与错误提示都写到 stdout，缓冲后统一 flush
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let code = match scan_and_write(&cli.path, &mut out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(path = ?cli.path, not_found = e.is_not_found(), "scan failed");
            writeln!(out, "{e}").context("write error message")?;
            ExitCode::FAILURE
        }
    };
    out.flush().context("flush stdout")?;
    Ok(code)
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    // 日志写 stderr，默认 warn，避免污染 stdout 上的诊断输出
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// 用法提示中的程序名：取 argv[0] 的文件名，取不到时退回 clap 中的名称
fn program_name() -> String {
    let argv0 = std::env::args_os().next();
    argv0
        .as_deref()
        .and_then(|s| Path::new(s).file_name())
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| Cli::command().get_name().to_string())
}
