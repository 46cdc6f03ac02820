use clap::Parser;
use eth_method_catalog::catalog::{self, CatalogMatch};
use eth_method_catalog::cli::{Args, Command, PrintArgs};
use eth_method_catalog::config::{self, ReportConfig};
use eth_method_catalog::error::CatalogError;
use eth_method_catalog::report::Report;
use itertools::Itertools;
use std::io::{self, BufWriter};
use std::process::ExitCode;

fn main() -> ExitCode {
    eth_method_catalog::telemetry::init_tracing();
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::from(2)
        }
    }
}

fn run() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    match args.command {
        Some(Command::ListCategories) => list_categories(),
        Some(Command::Explain { method }) => explain_method(&method)?,
        Some(Command::Lookup { selector }) => lookup_selector(&selector)?,
        Some(Command::SharedSelectors) => shared_selectors(),
        Some(Command::Print(print)) => print_command(print)?,
        None => print_command(args.print)?,
    }
    Ok(ExitCode::SUCCESS)
}

fn print_command(args: PrintArgs) -> anyhow::Result<()> {
    let base = match config::load_config(args.config.as_deref())? {
        Some((_path, cfg)) => {
            #[cfg(feature = "telemetry")]
            tracing::debug!(path = %_path.display(), "loaded config");
            cfg.report
        }
        None => ReportConfig::default(),
    };
    let settings = base.with_overrides(&args);

    let categories = catalog::resolve_categories(&settings.categories)?;
    let report = Report::new(categories).with_flow(settings.flow);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    report.write(&mut out, settings.format())?;
    Ok(())
}

fn list_categories() {
    for c in catalog::categories() {
        println!("{}\t{}\t{}", c.key, c.title, c.len());
    }
}

fn explain_method(name: &str) -> anyhow::Result<()> {
    let matches = catalog::find_by_name(name);
    if matches.is_empty() {
        return Err(CatalogError::unknown_method(name).into());
    }
    print_matches(&matches);
    Ok(())
}

fn lookup_selector(selector: &str) -> anyhow::Result<()> {
    let matches = catalog::find_by_signature(selector);
    if matches.is_empty() {
        return Err(CatalogError::unknown_signature(selector).into());
    }
    print_matches(&matches);
    Ok(())
}

fn print_matches(matches: &[CatalogMatch]) {
    for (i, m) in matches.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{} ({})", m.method.name, m.category.title);
        println!("  Signature: {}", m.method.signature_or_na());
        println!("  Description: {}", m.method.description);
        println!("  Flow Type: {}", m.method.flow);
    }
}

fn shared_selectors() {
    for (selector, owners) in catalog::shared_signatures() {
        let owners = owners
            .iter()
            .map(|m| format!("{}/{}", m.category.key, m.method.name))
            .join(", ");
        println!("{selector}\t{owners}");
    }
}
