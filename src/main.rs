use anyhow::Context;
use clap::Parser;
use skill_match::{cli, config, display, export, input, interactive};
use cli::{Cli, Commands};
use config::Config;
use skill_match_common::ChartSpec;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load().context("設定の読み込みに失敗しました")?;

    match cli.command {
        Commands::Show { roster, json } => {
            let roster = input::build_roster(&roster, config.seed_sample_data);

            if json {
                let spec = ChartSpec::from_roster(&config.title, &roster);
                println!("{}", spec.to_json()?);
            } else {
                println!("{}", display::render_roster(&roster));
                println!("{}", display::render_match_table(&roster.match_table()));
            }
        }

        Commands::Export { roster, format, output, title } => {
            println!("📄 skill-match - エクスポート\n");

            let roster = input::build_roster(&roster, config.seed_sample_data);
            let format = format.unwrap_or(config.default_format);
            let title = title.unwrap_or_else(|| config.title.clone());
            let output = config.resolve_output(output);

            export::export_results(&roster, format, &output, &title)
                .context("エクスポートに失敗しました")?;

            println!("\n✅ エクスポート完了");
        }

        Commands::Interactive { roster } => {
            println!("🧩 skill-match - 対話入力\n");
            let roster = input::build_roster(&roster, config.seed_sample_data);
            interactive::run_interactive(roster, &config)?;
        }

        Commands::Config { show, set_title, set_format, set_sample, set_output_dir } => {
            let mut config = config;
            let changed = set_title.is_some()
                || set_format.is_some()
                || set_sample.is_some()
                || set_output_dir.is_some();

            if let Some(title) = set_title {
                config.title = title;
            }
            if let Some(format) = set_format {
                config.default_format = format;
            }
            if let Some(sample) = set_sample {
                config.seed_sample_data = sample;
            }
            if let Some(dir) = set_output_dir {
                config.output_dir = Some(dir);
            }

            if changed {
                config.save().context("設定の保存に失敗しました")?;
                println!("✔ 設定を保存しました");
            }

            if show || !changed {
                println!("設定:");
                println!("  タイトル: {}", config.title);
                println!("  出力形式: {}", config.default_format);
                println!("  初期データ: {}", if config.seed_sample_data { "読み込む" } else { "読み込まない" });
                match &config.output_dir {
                    Some(dir) => println!("  出力先: {}", dir.display()),
                    None => println!("  出力先: (カレント)"),
                }
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "skill_match=debug" } else { "skill_match=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
