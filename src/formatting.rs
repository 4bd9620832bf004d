use std::fmt::Write as FmtWrite;
use std::io::{self, IsTerminal};
use std::process::ExitCode;

use figcomp_lib::{ErrorOutput, FigcompError, FigcompOutput};
use serde::Serialize;

use crate::cli::OutputFormat;

/// Write output in the requested format.
pub fn write_output(
    body: &FigcompOutput,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string(body)?),
        OutputFormat::Pretty => write_pretty(body, |colorize| format_pretty(body, colorize))?,
    };
    Ok(())
}

/// Render an error and return the fatal exit code.
pub fn render_error(err: FigcompError, format: OutputFormat) -> ExitCode {
    let payload = ErrorOutput::new(err.to_payload());

    match format {
        OutputFormat::Json => {
            let content = serde_json::to_string(&payload)
                .unwrap_or_else(|_| "{\"error\":{\"category\":\"unknown\"}}".into());
            println!("{content}");
        }
        OutputFormat::Pretty => {
            if let Err(write_err) = write_pretty(&payload, |colorize| format_error(&payload, colorize))
            {
                eprintln!("Failed to write error output: {}", write_err);
            }
        }
    };

    ExitCode::from(2)
}

/// Human text on a terminal, indented JSON otherwise.
fn write_pretty<T: Serialize>(body: &T, human: impl Fn(bool) -> String) -> io::Result<()> {
    if std::io::stdout().is_terminal() {
        println!("{}", human(true));
        return Ok(());
    }

    let content = serde_json::to_string_pretty(body).map_err(io::Error::other)?;
    println!("{content}");
    Ok(())
}

/// Format output for human consumption in a terminal.
pub fn format_pretty(body: &FigcompOutput, colorize: bool) -> String {
    match body {
        FigcompOutput::Create(out) => {
            let mut buf = String::new();
            let header = if out.dry_run {
                color("[DRY RUN]", "33", colorize)
            } else {
                color("[CREATED]", "32", colorize)
            };
            writeln!(
                buf,
                "{} {} ({}, .{})",
                header, out.component_name, out.framework, out.extension
            )
            .ok();
            writeln!(
                buf,
                "Design: file {} node {}",
                out.input.file_key, out.input.node_id
            )
            .ok();
            if let Some(path) = &out.output_path {
                writeln!(buf, "Path: {}", path.display()).ok();
            }
            if let Some(scaffold) = &out.scaffold {
                writeln!(buf, "Scaffold: {}", scaffold).ok();
            }
            if !out.imports.is_empty() {
                writeln!(buf, "Reused components:").ok();
                for name in &out.imports {
                    writeln!(buf, "- {name}").ok();
                }
            }
            if let Some(code) = &out.code {
                writeln!(buf).ok();
                write!(buf, "{code}").ok();
            }
            buf
        }
        FigcompOutput::Detect(out) => {
            let mut buf = String::new();
            let header = color("[DETECT]", "36", colorize);
            match (&out.framework, &out.extension) {
                (Some(framework), Some(extension)) => {
                    writeln!(buf, "{} {} (.{})", header, framework, extension).ok();
                }
                _ => {
                    writeln!(
                        buf,
                        "{} {}",
                        header,
                        color("no supported framework found", "33", colorize)
                    )
                    .ok();
                }
            }
            writeln!(buf, "Project: {}", out.project_dir.display()).ok();
            writeln!(buf, "TypeScript: {}", out.typescript).ok();
            buf
        }
    }
}

pub fn format_error(out: &ErrorOutput, colorize: bool) -> String {
    let mut buf = String::new();
    let header = color("[ERROR]", "31", colorize);
    writeln!(buf, "{} {}", header, out.error.message).ok();
    if let Some(remediation) = &out.error.remediation {
        writeln!(buf, "Hint: {}", remediation).ok();
    }
    buf
}

/// Apply ANSI color codes when enabled.
fn color(text: &str, code: &str, colorize: bool) -> String {
    if colorize {
        format!("\x1b[{}m{}\x1b[0m", code, text)
    } else {
        text.to_string()
    }
}
