//! 本地诊断工具：用 JSON 夹具构造内存仓储，执行动物查询服务并输出结果。
//!
//! 用法示例：
//! - `cargo run --bin animal_inspect -- available --user u1 --type dog`
//! - `cargo run --bin animal_inspect -- mine --user u1 --fixtures ./resources/animals.json`
//! - `cargo run --bin animal_inspect -- openapi`

use std::fs;
use std::path::PathBuf;

use pet_adoption_backend::features::animal::{
    AnimalsPayload, GetAvailableAnimalsParams, GetUserAnimalsParams, InMemoryAnimalRepository,
};
use pet_adoption_backend::{AnimalServices, AppConfig, AppError, logging, openapi};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse(std::env::args().skip(1).collect());
    let cmd = match args.cmd {
        Some(cmd) if !args.help => cmd,
        _ => {
            print_help();
            return Ok(());
        }
    };

    let config = AppConfig::init_global().map_err(AppError::from)?;
    logging::init_tracing(Some(&config.logging));
    // 订阅器依赖配置中的日志级别，加载阶段的日志在此之后补记
    tracing::info!(
        "配置已加载: {:?} (max_image_bytes = {}, fixtures = {})",
        AppConfig::get_config_path(),
        config.formatter.max_image_bytes,
        config.fixtures.path
    );

    let output = match cmd {
        Command::OpenApi => {
            openapi::openapi_json().map_err(|e| AppError::Internal(e.to_string()))?
        }
        Command::Available | Command::Mine => {
            let fixtures = args
                .fixtures
                .clone()
                .unwrap_or_else(|| config.fixtures_path());
            let repository = InMemoryAnimalRepository::from_json_file(&fixtures).await?;
            tracing::info!("夹具 {:?} 共 {} 条记录", fixtures, repository.len().await);

            let services = AnimalServices::from_config(repository, config);
            let user_id = args.user.clone().unwrap_or_default();
            let result = if cmd == Command::Available {
                services
                    .get_available
                    .execute(GetAvailableAnimalsParams {
                        user_id,
                        gender: args.gender.clone(),
                        kind: args.kind.clone(),
                        name: args.name.clone(),
                    })
                    .await
            } else {
                services
                    .get_user
                    .execute(GetUserAnimalsParams { user_id })
                    .await
            };

            match result {
                Ok(payload) if args.summary => render_summary(&payload),
                Ok(payload) => serde_json::to_string_pretty(&payload)?,
                Err(failure) => {
                    eprintln!("{}", serde_json::to_string_pretty(&failure)?);
                    std::process::exit(2);
                }
            }
        }
    };

    if let Some(out_path) = args.out_path {
        fs::write(&out_path, &output)?;
        println!("已写入: {}", out_path.display());
    } else {
        println!("{output}");
    }

    Ok(())
}

/// 摘要模式：不输出完整 base64，仅输出每张图片的长度，便于人工核对。
fn render_summary(payload: &AnimalsPayload) -> String {
    let mut out = format!("animals: {}\n", payload.animals.len());
    for a in &payload.animals {
        let lens = a
            .images
            .iter()
            .map(|s| s.len().to_string())
            .collect::<Vec<_>>()
            .join(",");
        out.push_str(&format!(
            "- {} name={} type={} gender={} owner={} images=[{}]\n",
            a.animal.id, a.animal.name, a.animal.kind, a.animal.gender, a.animal.user_id, lens
        ));
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Available,
    Mine,
    OpenApi,
}

#[derive(Debug, Clone, Default)]
struct Args {
    help: bool,
    cmd: Option<Command>,
    user: Option<String>,
    gender: Option<String>,
    kind: Option<String>,
    name: Option<String>,
    fixtures: Option<PathBuf>,
    summary: bool,
    out_path: Option<PathBuf>,
}

impl Args {
    fn parse(argv: Vec<String>) -> Self {
        let mut args = Self::default();

        let mut it = argv.into_iter();
        while let Some(a) = it.next() {
            match a.as_str() {
                "-h" | "--help" => args.help = true,
                "available" => args.cmd = Some(Command::Available),
                "mine" => args.cmd = Some(Command::Mine),
                "openapi" => args.cmd = Some(Command::OpenApi),
                "--user" => args.user = it.next(),
                "--gender" => args.gender = it.next(),
                "--type" => args.kind = it.next(),
                "--name" => args.name = it.next(),
                "--fixtures" => args.fixtures = it.next().map(PathBuf::from),
                "--summary" => args.summary = true,
                "--out" => args.out_path = it.next().map(PathBuf::from),
                _ => {}
            }
        }
        args
    }
}

fn print_help() {
    println!(
        r#"animal_inspect（本地诊断工具）

子命令：
  available                     列出可领养动物（排除 --user 本人发布）
  mine                          列出 --user 本人发布的动物
  openapi                       输出对外载荷的 OpenAPI JSON

常用参数：
  --user ID                     请求者用户 ID（available/mine 必填）
  --gender G                    按性别过滤（仅 available）
  --type T                      按物种过滤（仅 available）
  --name N                      按名字子串过滤（仅 available）
  --fixtures PATH               夹具 JSON（默认取 config.toml 的 fixtures.path）
  --summary                     只输出摘要，不输出完整 base64
  --out PATH                    写入到文件（否则 stdout）
"#
    );
}
