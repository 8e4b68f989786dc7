use std::process::ExitCode;

use hive_tables::{audit, build_catalog, export, FsSink, GeneratorConfig, GlyphTable};

fn main() -> ExitCode {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set global subscriber");

    let config = GeneratorConfig::default();
    tracing::info!(output_dir = %config.output_dir.display(), "generating tables");

    let catalog = match build_catalog(config) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("Failed to author tables: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match audit(&catalog) {
        Ok(warnings) => {
            for warning in &warnings {
                tracing::warn!(id = %warning.id, "{}", warning);
            }
        }
        Err(e) => {
            tracing::error!("Failed to audit tables: {}", e);
            return ExitCode::FAILURE;
        }
    }

    let report = export(&catalog, &GlyphTable::standard(), &mut FsSink);
    tracing::info!(
        written = report.written.len(),
        failed = report.failed.len(),
        "all tables attempted"
    );

    if report.is_complete() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
