use clap::Parser;
use devportal_widgets::{catalog, cli, config, error, survey};
use devportal_widgets_common::{history_url, parse_query, FilterConfig};
use cli::{Cli, Commands};
use config::Config;
use error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = Config::load()?;

    match cli.command {
        Commands::Parse { query } => {
            let state = parse_query(&query);
            if state.is_empty() {
                println!("フィルタなし");
            }
            for (key, values) in state.iter() {
                println!("  {}: {}", key, values.join(", "));
            }
            println!("URL: {}", history_url(&state));
            if cli.verbose {
                println!("{}", serde_json::to_string_pretty(&state)?);
            }
        }

        Commands::Filter { items, query, pages, filter_config } => {
            println!("🔎 devportal-widgets - フィルタ確認\n");

            let filter = match filter_config {
                Some(path) => FilterConfig::from_file(&path)?,
                None => config.filter.clone(),
            };
            let items = catalog::load_catalog(&items)?;
            println!("✔ {}件のカードを読み込み", items.len());

            let preview = catalog::preview(&items, &query, &filter, pages.max(1));
            if cli.verbose {
                println!("  セレクタ: {}", preview.selector);
            }
            println!("  URL: {}", preview.url);
            println!(
                "  一致: {}件 / 表示: {}件{}",
                preview.matches.len(),
                preview.shown.len(),
                if preview.has_more { "（続きあり）" } else { "" }
            );
            if preview.matches.is_empty() {
                println!("\n該当するカードはありません");
            }
            for index in &preview.shown {
                let item = &items[*index];
                println!("  - {} {}", item.title, item.url);
            }
        }

        Commands::Survey { percentage, cookie, visitors } => {
            let percentage = percentage.unwrap_or(config.survey_percentage);
            let report = survey::simulate(cookie.as_deref(), percentage, visitors);
            println!("アンケート表示:");
            println!("  設定割合: {}%", percentage);
            println!("  表示: {} / {}人 ({:.1}%)", report.shown, report.visitors, report.ratio());
        }

        Commands::Config { and, or, survey_percentage, show } => {
            let changed = and.is_some() || or.is_some() || survey_percentage.is_some();
            if changed {
                config.set_keys(and.as_deref(), or.as_deref())?;
                if let Some(percentage) = survey_percentage {
                    config.survey_percentage = percentage;
                }
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("設定:");
                println!("  AND条件: {}", config.filter.and_keys.join(", "));
                println!("  OR条件: {}", config.filter.or_keys.join(", "));
                println!("  検索キー: {}", config.filter.search_key);
                println!(
                    "  初期表示件数: {} / 追加件数: {}",
                    config.filter.initial_resources, config.filter.resources_per_page
                );
                println!("  アンケート表示割合: {}%", config.survey_percentage);
            }
        }
    }

    Ok(())
}
