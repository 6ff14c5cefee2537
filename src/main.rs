use anyhow::{Context, Result};
use clap::{arg, Command};
use order_scheduler::{input, logging, plan_orders, SchedulerConfig};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;

fn cli() -> Command {
    Command::new("order-scheduler")
        .about("Finds a low-penalty production sequence and writes the schedule reports")
        .arg_required_else_help(true)
        .arg(arg!(<INPUT> "Order list CSV").value_parser(clap::value_parser!(PathBuf)))
        .arg(
            arg!(<ORDER_SUMMARY> "Output path of the order summary CSV")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            arg!(<WORK_SCHEDULE> "Output path of the per-machine work schedule CSV")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            arg!(--config <PATH> "Optional JSON file overriding the catalog and shift calendar")
                .value_parser(clap::value_parser!(PathBuf)),
        )
}

fn main() -> Result<()> {
    logging::init();

    let matches = cli().get_matches();
    let input_path = matches
        .get_one::<PathBuf>("INPUT")
        .context("缺少輸入檔路徑")?;
    let summary_path = matches
        .get_one::<PathBuf>("ORDER_SUMMARY")
        .context("缺少訂單彙總輸出路徑")?;
    let work_path = matches
        .get_one::<PathBuf>("WORK_SCHEDULE")
        .context("缺少工作表輸出路徑")?;

    let config = match matches.get_one::<PathBuf>("config") {
        Some(path) => SchedulerConfig::from_json_file(path)
            .with_context(|| format!("無法載入配置 {}", path.display()))?,
        None => SchedulerConfig::default(),
    };

    let orders = input::read_orders(input_path, config.deadline_year)
        .with_context(|| format!("無法讀取訂單 {}", input_path.display()))?;

    let plan = plan_orders(&orders, &config).context("排程失敗")?;
    tracing::info!(
        "排程完成: 罰金總額 {}, 模擬 {} 次",
        plan.result.best_penalty,
        plan.result.iterations
    );

    // 兩份報表都寫進暫存檔後才改名為正式檔案
    let (summary, work) = plan.render().context("報表輸出失敗")?;
    let summary_file = stage(summary_path, &summary)?;
    let work_file = stage(work_path, &work)?;

    summary_file
        .persist(summary_path)
        .with_context(|| format!("無法寫入 {}", summary_path.display()))?;
    if let Err(err) = work_file.persist(work_path) {
        let _ = fs::remove_file(summary_path);
        return Err(err).with_context(|| format!("無法寫入 {}", work_path.display()));
    }

    Ok(())
}

/// 在目標檔案所在目錄建立暫存檔並寫入內容
fn stage(path: &Path, content: &[u8]) -> Result<NamedTempFile> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)
        .with_context(|| format!("無法在 {} 建立暫存檔", dir.display()))?;
    file.write_all(content)
        .and_then(|_| file.flush())
        .with_context(|| format!("無法寫入 {}", path.display()))?;

    Ok(file)
}
