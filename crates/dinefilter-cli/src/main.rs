// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod config;

use anyhow::{Context, Result};
use config::Config;
use dinefilter_app::FilterScreen;
use dinefilter_data::DatasetSource;
use std::env;
use std::path::PathBuf;

fn main() {
    if let Err(error) = run() {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = parse_cli_args(env::args().skip(1), Config::default_path()?)?;
    if options.show_help {
        print_help();
        return Ok(());
    }

    if options.print_config_path {
        println!("{}", options.config_path.display());
        return Ok(());
    }

    if options.print_example {
        print!("{}", Config::example_config(&options.config_path));
        return Ok(());
    }

    let config = Config::load(&options.config_path).with_context(|| {
        format!(
            "load config {}; run `dinefilter --print-example-config` to generate a template",
            options.config_path.display()
        )
    })?;

    let configured = options.dataset_path.clone().or_else(|| config.dataset_path());
    let source = DatasetSource::resolve(configured.as_deref());
    if options.print_dataset_path {
        println!("{}", source.describe());
        return Ok(());
    }

    let categories = source
        .load()
        .with_context(|| format!("load dataset from {}", source.describe()))?;
    if options.check_only {
        return Ok(());
    }

    let mut screen = if config.start_expanded() {
        FilterScreen::with_all_expanded(categories.len())
    } else {
        FilterScreen::new(categories.len())
    };
    dinefilter_tui::run_app(&categories, &mut screen)
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    config_path: PathBuf,
    dataset_path: Option<PathBuf>,
    print_config_path: bool,
    print_dataset_path: bool,
    print_example: bool,
    check_only: bool,
    show_help: bool,
}

fn parse_cli_args<I, S>(args: I, default_config_path: PathBuf) -> Result<CliOptions>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = CliOptions {
        config_path: default_config_path,
        dataset_path: None,
        print_config_path: false,
        print_dataset_path: false,
        print_example: false,
        check_only: false,
        show_help: false,
    };

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_ref() {
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--config requires a file path"))?;
                options.config_path = PathBuf::from(value.as_ref());
            }
            "--dataset" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--dataset requires a file path"))?;
                options.dataset_path = Some(PathBuf::from(value.as_ref()));
            }
            "--print-config-path" => {
                options.print_config_path = true;
            }
            "--print-dataset-path" => {
                options.print_dataset_path = true;
            }
            "--print-example-config" => {
                options.print_example = true;
            }
            "--check" => {
                options.check_only = true;
            }
            "--help" | "-h" => {
                options.show_help = true;
            }
            unknown => {
                return Err(anyhow::anyhow!(
                    "unknown argument {unknown:?}; run with --help to see supported options"
                ));
            }
        }
    }

    Ok(options)
}

fn print_help() {
    println!("dinefilter");
    println!("  --config <path>          Use a specific config path");
    println!("  --dataset <path>         Load filters from a specific dataset file");
    println!("  --print-config-path      Print resolved config path");
    println!("  --print-dataset-path     Print resolved dataset source");
    println!("  --print-example-config   Print a config template");
    println!("  --check                  Validate config + dataset without starting the UI");
    println!("  --help                   Show this help");
}
