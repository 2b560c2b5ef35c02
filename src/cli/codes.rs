use crate::config::Config;
use crate::core::{is_valid, JoinCodeGenerator};
use anyhow::{Context, Result};
use std::io::Write;

/// Enum for the code commands the binary can run
pub enum CodesCmd {
    Generate { count: usize, length: Option<usize> },
    Check { code: String },
}

/// How a command finished, mapped to the process exit status by `main`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Success,
    InvalidCode,
}

pub fn handle_codes_command<W: Write>(
    cmd: CodesCmd,
    config: &Config,
    out: &mut W,
) -> Result<CommandStatus> {
    match cmd {
        CodesCmd::Generate { count, length } => {
            let length = length.unwrap_or(config.generator.length);
            generate_codes(count, length, out)?;
            Ok(CommandStatus::Success)
        }
        CodesCmd::Check { code } => check_code(&code, out),
    }
}

fn generate_codes<W: Write>(count: usize, length: usize, out: &mut W) -> Result<()> {
    let generator = JoinCodeGenerator::new(length);
    tracing::debug!("Generating {} code(s) of length {}", count, generator.length());

    for _ in 0..count {
        writeln!(out, "{}", generator.generate()).context("Failed to write join code")?;
    }
    out.flush().context("Failed to flush output")?;

    Ok(())
}

fn check_code<W: Write>(code: &str, out: &mut W) -> Result<CommandStatus> {
    let valid = is_valid(code);
    tracing::debug!("Checked code {:?}: valid={}", code, valid);

    if valid {
        writeln!(out, "valid").context("Failed to write result")?;
        Ok(CommandStatus::Success)
    } else {
        writeln!(out, "invalid").context("Failed to write result")?;
        Ok(CommandStatus::InvalidCode)
    }
}
