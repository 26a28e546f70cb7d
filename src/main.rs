// ==========================================
// 出口报价系统 - 命令行入口
// ==========================================
// 用法:
//   export-quote [REQUEST_FILE] [--config PATH] [--locale zh-CN|en] [--json]
//   export-quote --init-config PATH
//   export-quote --list-containers
//
// 未提供 REQUEST_FILE 时使用内置参考询盘
// 报价单输出到 stdout，日志输出到 stderr
// ==========================================

use anyhow::{bail, Context};
use export_quote::api::{load_request, QuoteApi};
use export_quote::config::{load_config, QuoteConfig};
use export_quote::domain::QuoteRequest;
use export_quote::i18n::{normalize_locale, DEFAULT_LOCALE};
use export_quote::report::format_grouped;
use std::path::PathBuf;
use std::sync::Arc;

const USAGE: &str = "用法: export-quote [REQUEST_FILE] [--config PATH] \
[--locale zh-CN|en] [--json]
      export-quote --init-config PATH
      export-quote --list-containers";

#[derive(Debug, Default)]
struct CliArgs {
    request: Option<PathBuf>,
    config: Option<PathBuf>,
    locale: Option<String>,
    json: bool,
    init_config: Option<PathBuf>,
    list_containers: bool,
    help: bool,
    version: bool,
}

fn parse_args() -> anyhow::Result<CliArgs> {
    let mut cli = CliArgs::default();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().context("--config 需要一个路径参数")?;
                cli.config = Some(PathBuf::from(path));
            }
            "--locale" => {
                cli.locale = Some(args.next().context("--locale 需要一个语言参数")?);
            }
            "--init-config" => {
                let path = args.next().context("--init-config 需要一个路径参数")?;
                cli.init_config = Some(PathBuf::from(path));
            }
            "--json" => cli.json = true,
            "--list-containers" => cli.list_containers = true,
            "-h" | "--help" => cli.help = true,
            "-V" | "--version" => cli.version = true,
            other if other.starts_with('-') => bail!("未知参数: {}\n{}", other, USAGE),
            other => {
                if cli.request.is_some() {
                    bail!("只能指定一个请求文件\n{}", USAGE);
                }
                cli.request = Some(PathBuf::from(other));
            }
        }
    }

    Ok(cli)
}

fn main() -> anyhow::Result<()> {
    export_quote::logging::init();

    let cli = parse_args()?;

    if cli.help {
        println!("{}", USAGE);
        return Ok(());
    }
    if cli.version {
        println!("{} {}", export_quote::APP_NAME, export_quote::VERSION);
        return Ok(());
    }

    if let Some(path) = &cli.init_config {
        QuoteConfig::write_default(path)
            .with_context(|| format!("写入默认配置失败: {}", path.display()))?;
        println!("已写入默认配置: {}", path.display());
        return Ok(());
    }

    let config = load_config(cli.config.as_deref()).context("加载配置失败")?;
    let api = QuoteApi::new(Arc::new(config));

    if cli.list_containers {
        for (container_type, preset) in api.list_container_presets() {
            println!(
                "{}\t{} CBM\t{} kg",
                container_type,
                preset.volume_cbm,
                format_grouped(preset.max_weight_kg, 0)
            );
        }
        return Ok(());
    }

    let request = match &cli.request {
        Some(path) => load_request(path)?,
        None => {
            tracing::info!("未指定请求文件，使用参考询盘");
            QuoteRequest::reference_inquiry()
        }
    };

    let locale = normalize_locale(cli.locale.as_deref().unwrap_or(DEFAULT_LOCALE));
    let response = api.quote(&request, locale)?;

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&response).context("报价结果序列化失败")?
        );
    } else {
        print!("{}", response.sheet.render_text());
    }

    Ok(())
}
