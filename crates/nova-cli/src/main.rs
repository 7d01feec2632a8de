use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use nova_cli::report::{ClassifyReport, InspectReport, UrlsReport};
use nova_cli::workspace::{DirectoryModule, ModuleConfig};
use serde::Serialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "nova", version, about = "Nova CLI (Quarkus project inspection)")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Report Quarkus facts about a module directory
    Inspect(InspectArgs),
    /// Print the application and Dev UI URLs of a module
    Urls(UrlsArgs),
    /// Check whether a file is Quarkus configuration (exit 1 when it is not)
    Classify(ClassifyArgs),
}

#[derive(Args)]
struct ClasspathArgs {
    /// Extra classpath entries as a platform path list; directories are searched for jars
    #[arg(long, value_name = "PATHS")]
    classpath: Option<OsString>,
}

impl ClasspathArgs {
    fn entries(&self) -> Vec<PathBuf> {
        self.classpath
            .as_deref()
            .map(|paths| std::env::split_paths(paths).collect())
            .unwrap_or_default()
    }
}

#[derive(Args)]
struct InspectArgs {
    /// Module root directory
    path: PathBuf,
    #[command(flatten)]
    classpath: ClasspathArgs,
    /// Emit JSON suitable for CI
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct UrlsArgs {
    /// Module root directory
    path: PathBuf,
    /// Emit JSON suitable for CI
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ClassifyArgs {
    /// File to classify
    file: PathBuf,
    /// Module root directory (defaults to the current directory)
    #[arg(long, default_value = ".")]
    module: PathBuf,
    #[command(flatten)]
    classpath: ClasspathArgs,
    /// Emit JSON suitable for CI
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();
    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            2
        }
    };

    std::process::exit(exit_code);
}

fn open(path: &Path, classpath: &[PathBuf]) -> Result<DirectoryModule> {
    // `load_for_workspace` logs before the subscriber is installed.
    let config = ModuleConfig::load(path)?;
    nova_config::init_tracing(&config.config.logging);
    if let Some(config_path) = &config.config_path {
        tracing::debug!(target: "nova.config", path = %config_path.display(), "loaded config");
    }

    let module = DirectoryModule::from_config(config, classpath);
    tracing::debug!(
        target: "nova.cli",
        root = %module.root().display(),
        config = ?module.config_path(),
        "opened module"
    );
    Ok(module)
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Command::Inspect(args) => {
            let module = open(&args.path, &args.classpath.entries())?;
            let report = InspectReport::build(&module);
            print_output(&report, args.json)?;
            Ok(0)
        }
        Command::Urls(args) => {
            let module = open(&args.path, &[])?;
            let report = UrlsReport::build(&module);
            print_output(&report, args.json)?;
            Ok(0)
        }
        Command::Classify(args) => {
            let module = open(&args.module, &args.classpath.entries())?;
            let report = ClassifyReport::build(&module, &args.file);
            let exit = if report.quarkus_properties || report.quarkus_yaml {
                0
            } else {
                1
            };
            print_output(&report, args.json)?;
            Ok(exit)
        }
    }
}

fn print_output<T: Serialize + 'static>(value: &T, json: bool) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(value)?;
        println!("{out}");
        return Ok(());
    }

    let any = value as &dyn std::any::Any;
    if let Some(report) = any.downcast_ref::<InspectReport>() {
        report.print_human();
    } else if let Some(report) = any.downcast_ref::<UrlsReport>() {
        report.print_human();
    } else if let Some(report) = any.downcast_ref::<ClassifyReport>() {
        report.print_human();
    } else {
        let out = serde_json::to_string_pretty(value)?;
        println!("{out}");
    }
    Ok(())
}
