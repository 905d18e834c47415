extern crate ciscoconfrs;

use ciscoconfrs::device::DeviceConfig;
use ciscoconfrs::export::{
    export_config,
    DEFAULT_OUTPUT_DIR,
};
use ciscoconfrs::templates::template_names;
use clap::Parser;
use env_logger::{
    Builder,
    Target,
};
use log::LevelFilter;
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

const TEMPLATE_PREFIX: &str = "template:";

/// Render a structured cisco ios router config to device ready text.
#[derive(Parser, Debug)]
#[command(name = "ciscoconfrs")]
#[command(version)]
#[command(about, long_about = None)]
struct Cli {
    /// Yaml config file to render, or `template:NAME` for an embedded template
    #[arg(required_unless_present = "list_templates")]
    source: Option<String>,

    /// Output file name, `.txt` is appended
    #[arg(required_unless_present = "list_templates")]
    output_name: Option<String>,

    /// Directory the rendered config is written to
    #[arg(short = 'o', long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Print the embedded template names and exit
    #[arg(long, conflicts_with_all = ["source", "output_name"])]
    list_templates: bool,
}

/// Log at info by default, `RUST_LOG` still wins if it is set.
fn enable_logging() {
    let mut builder = Builder::from_default_env();

    builder.target(Target::Stdout);

    if env::var_os("RUST_LOG").is_none() {
        builder.filter_level(LevelFilter::Info);
    }

    builder.init();
}

fn load_config(source: &str) -> Result<DeviceConfig, String> {
    let loaded = match source.strip_prefix(TEMPLATE_PREFIX) {
        Some(template_name) => DeviceConfig::from_template(template_name),
        None => DeviceConfig::from_yaml_file(source),
    };

    loaded.map_err(|err| format!("failed loading '{source}': {err}"))
}

fn run(cli: Cli) -> Result<(), String> {
    if cli.list_templates {
        for name in template_names() {
            println!("{name}");
        }

        return Ok(());
    }

    let (Some(source), Some(output_name)) = (cli.source, cli.output_name) else {
        return Err("a config source and an output name are required".to_owned());
    };

    let config = load_config(&source)?;

    let rendered = config
        .render()
        .map_err(|err| format!("failed rendering '{source}': {err}"))?;

    export_config(&rendered, &output_name, &cli.output_dir).map_err(|err| err.to_string())?;

    Ok(())
}

/// Load a device config (from a yaml file or an embedded template), render it, and write it out
/// as `<output-dir>/<output-name>.txt`.
fn main() -> ExitCode {
    let cli = Cli::parse();

    enable_logging();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");

            ExitCode::FAILURE
        }
    }
}
