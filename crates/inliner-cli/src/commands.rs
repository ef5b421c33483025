//! Subcommand dispatch
//!
//! Turns parsed arguments into typed requests, runs them, and writes the
//! user-facing status to `out`.

use anyhow::{bail, Context, Result};
use clap::ArgMatches;
use inliner_core::{
    convert_file, embed_file, ConvertReport, ConvertRequest, Destination, EmbedReport,
    EmbedRequest, MissingMarker,
};
use std::io::Write;
use std::path::PathBuf;

/// Run the selected subcommand
///
/// # Errors
/// Propagates failures from the subcommand, with context
pub fn dispatch(matches: &ArgMatches, out: &mut dyn Write) -> Result<()> {
    match matches.subcommand() {
        Some(("embed", args)) => embed(args, out),
        Some(("data-url", args)) => data_url(args, out),
        Some((other, _)) => bail!("unknown subcommand: {other}"),
        None => bail!("no subcommand given"),
    }
}

/// Build an [`EmbedRequest`] from `embed` arguments
///
/// # Errors
/// Returns error if a required argument is missing
pub fn embed_request(args: &ArgMatches) -> Result<EmbedRequest> {
    let artifact = required_path(args, "wasm_file")?;
    let template = required_path(args, "html_file")?;
    let mut request = EmbedRequest::new(artifact, template);
    if let Some(output) = args.get_one::<PathBuf>("output") {
        request = request.with_output(output);
    }
    if let Some(marker) = args.get_one::<String>("marker") {
        request = request.with_marker(marker);
    }
    if args.get_flag("allow-missing-marker") {
        request = request.with_missing_marker(MissingMarker::Allow);
    }
    Ok(request)
}

/// Build a [`ConvertRequest`] from `data-url` arguments
///
/// # Errors
/// Returns error if the image argument is missing
pub fn convert_request(args: &ArgMatches) -> Result<ConvertRequest> {
    let mut request = ConvertRequest::new(required_path(args, "image")?);
    if let Some(output) = args.get_one::<PathBuf>("output") {
        request = request.with_output(output);
    }
    Ok(request)
}

fn embed(args: &ArgMatches, out: &mut dyn Write) -> Result<()> {
    let request = embed_request(args)?;
    tracing::debug!(?request, "embed");
    let report = embed_file(&request).with_context(|| {
        format!(
            "failed to embed {} into {}",
            request.artifact.display(),
            request.template.display()
        )
    })?;
    if args.get_flag("json") {
        write_json(out, &report)
    } else {
        write_embed_status(out, &report)
    }
}

fn data_url(args: &ArgMatches, out: &mut dyn Write) -> Result<()> {
    let request = convert_request(args)?;
    tracing::debug!(?request, "data-url");
    let report = convert_file(&request)
        .with_context(|| format!("failed to convert {}", request.image.display()))?;
    if args.get_flag("json") {
        write_json(out, &report)
    } else {
        write_convert_status(out, &report)
    }
}

fn write_embed_status(out: &mut dyn Write, report: &EmbedReport) -> Result<()> {
    writeln!(out, "Embedded WASM into {}", report.output)?;
    Ok(())
}

fn write_convert_status(out: &mut dyn Write, report: &ConvertReport) -> Result<()> {
    match &report.output {
        Destination::Stdout => {
            writeln!(out, "Image data URL (paste directly into HTML):")?;
            writeln!(out, "{}", report.data_url)?;
        }
        dest => writeln!(out, "Data URL saved to {dest}")?,
    }
    Ok(())
}

fn write_json<T: serde::Serialize>(out: &mut dyn Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("failed to serialize report")?;
    writeln!(out)?;
    Ok(())
}

fn required_path(args: &ArgMatches, name: &str) -> Result<PathBuf> {
    args.get_one::<PathBuf>(name)
        .cloned()
        .with_context(|| format!("missing argument: {name}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli;
    use std::path::Path;

    fn sub(argv: &[&str]) -> ArgMatches {
        let matches = cli::build().try_get_matches_from(argv).unwrap();
        matches.subcommand().unwrap().1.clone()
    }

    #[test]
    fn embed_request_defaults() {
        let request = embed_request(&sub(&["inliner", "embed", "a.wasm", "b.html"])).unwrap();
        assert_eq!(request, EmbedRequest::new("a.wasm", "b.html"));
        assert_eq!(request.destination(), Destination::InPlace(PathBuf::from("b.html")));
    }

    #[test]
    fn embed_request_overrides() {
        let request = embed_request(&sub(&[
            "inliner",
            "embed",
            "a.wasm",
            "b.html",
            "--output",
            "c.html",
            "--marker",
            "@@WASM@@",
            "--allow-missing-marker",
        ]))
        .unwrap();
        assert_eq!(request.output.as_deref(), Some(Path::new("c.html")));
        assert_eq!(request.marker, "@@WASM@@");
        assert_eq!(request.missing_marker, MissingMarker::Allow);
    }

    #[test]
    fn convert_request_output() {
        let request = convert_request(&sub(&["inliner", "data-url", "logo.png", "-o", "logo.txt"])).unwrap();
        assert_eq!(request, ConvertRequest::new("logo.png").with_output("logo.txt"));
    }
}
