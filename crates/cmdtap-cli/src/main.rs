//! cmdtap CLI
//!
//! Runs a command with both output streams mirrored live to the terminal
//! (dimmed) while the stderr text is captured, then exits with the child's
//! exit code. Arguments after `--` are passed to the child literally; no
//! shell is involved.

use clap::Parser;
use tracing::{debug, info};

use cmdtap_core::tracing_init::init_tracing;
use cmdtap_core::{LineStyle, run};

#[derive(Parser, Debug)]
#[command(name = "cmdtap")]
#[command(version, about = "Run a command, mirror its output, capture its stderr")]
struct Args {
    /// Disable the dim decoration on mirrored output
    #[arg(long, env = "CMDTAP_NO_COLOR")]
    no_color: bool,

    /// Log level filter (e.g. "info", "debug", "warn")
    #[arg(long, default_value = "warn", env = "CMDTAP_LOG_LEVEL")]
    log_level: String,

    /// Output logs as JSON (for structured log aggregation)
    #[arg(long, env = "CMDTAP_LOG_JSON")]
    log_json: bool,

    /// The program to run, followed by its arguments
    #[arg(
        required = true,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_name = "COMMAND"
    )]
    command: Vec<String>,
}

#[tokio::main]
#[allow(clippy::print_stderr)]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_tracing(&format!("cmdtap={}", args.log_level), args.log_json);

    let Some((program, rest)) = args.command.split_first() else {
        anyhow::bail!("no command given");
    };

    let style = if args.no_color {
        LineStyle::plain()
    } else {
        LineStyle::default()
    };

    info!(program = %program, args = rest.len(), "Running command");

    match run(program, rest, &style).await {
        Ok(execution) => {
            debug!(
                code = execution.status.code().unwrap_or(-1),
                stderr_bytes = execution.stderr.len(),
                "Command finished"
            );
            // Exit-code propagation is this binary's job, not the
            // multiplexer's; -1 stands in for signal-terminated children.
            std::process::exit(execution.status.code().unwrap_or(-1));
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn trailing_command_is_collected_verbatim() {
        let args = Args::try_parse_from(["cmdtap", "--no-color", "--", "ls", "-la"]).unwrap();
        assert!(args.no_color);
        assert_eq!(args.command, vec!["ls", "-la"]);
    }

    #[test]
    fn hyphen_arguments_after_the_program_are_not_flags() {
        let args = Args::try_parse_from(["cmdtap", "grep", "-r", "todo"]).unwrap();
        assert_eq!(args.command, vec!["grep", "-r", "todo"]);
    }

    #[test]
    fn a_command_is_required() {
        assert!(Args::try_parse_from(["cmdtap"]).is_err());
    }
}
