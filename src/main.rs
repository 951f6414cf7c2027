//! CLI entry point for huedial.

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, bail};

use huedial::cli::Cli;
use huedial::config::OutputFormat;
use huedial::dial::{DialSample, sample_at, sweep, validate};
use huedial::logging::init_logging;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    // Logging is opt-in so plain invocations leave no files behind
    let _guard = cli
        .log_file
        .as_deref()
        .map(|path| init_logging(path, &cli.log_level));

    let config = cli
        .effective_config()
        .wrap_err("Failed to load configuration")?;

    if let Some(ref path) = cli.save_config {
        config
            .save(path)
            .wrap_err_with(|| format!("Failed to write config to {}", path.display()))?;
        eprintln!("Wrote configuration to {}", path.display());
    }

    let samples = match cli.hue {
        Some(hue) => vec![sample_at(hue)],
        None => sweep(config.sweep.samples),
    };

    // Surface out-of-gamut boundary colors; they indicate a corner table
    // and transform mismatch
    let warnings = validate(&samples);
    if !warnings.is_empty() {
        if cli.strict {
            eprintln!("Validation failed for the following samples:");
            for warning in &warnings {
                eprintln!("  {warning}");
            }
            bail!("Validation failed");
        }
        for warning in &warnings {
            eprintln!("Warning: {warning}");
        }
    }

    let rendered = render(&samples, config.output.format)?;

    if let Some(ref path) = cli.output {
        std::fs::write(path, &rendered)
            .wrap_err_with(|| format!("Failed to write to {}", path.display()))?;
        eprintln!("Wrote dial table to {}", path.display());
    } else {
        print!("{rendered}");
    }

    Ok(())
}

/// Serialize dial samples in the requested format.
fn render(samples: &[DialSample], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Yaml => {
            serde_yaml::to_string(samples).wrap_err("Failed to serialize dial table to YAML")
        }
        OutputFormat::Json => serde_json::to_string_pretty(samples)
            .map(|mut text| {
                text.push('\n');
                text
            })
            .wrap_err("Failed to serialize dial table to JSON"),
        OutputFormat::Text => Ok(render_text(samples)),
    }
}

/// Fixed-width text table, one dial step per line.
fn render_text(samples: &[DialSample]) -> String {
    let mut out = String::new();
    for sample in samples {
        out.push_str(&format!(
            "{:7.2}  #{}  linear({:.5}, {:.5}, {:.5})\n",
            sample.hue, sample.hex, sample.linear[0], sample.linear[1], sample.linear[2]
        ));
    }
    out
}
