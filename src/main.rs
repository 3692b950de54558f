use slf4rs::cli::{build_cli, parse_options};
use slf4rs::{init_diagnostics, log_debug, log_error, log_info, log_trace};
use slf4rs::{new_logger, null_logger, root_logger, LogLevel};

fn main() -> anyhow::Result<()> {
    let matches = build_cli().get_matches();
    let options = parse_options(&matches);

    // Must precede the first logger so resolver warnings are visible.
    if options.diagnostics {
        init_diagnostics("warn")?;
    }

    log_info!(root_logger(), "Program started - before any logs are available");
    let log = new_logger("example");

    if options.trace {
        log.set_level(LogLevel::Trace);
    }
    if let Some(message) = &options.fatal {
        log.fatal(message);
    }
    log_info!(log, "An INFO message");
    log_debug!(log, "This will NOT be logged, unless --trace is given");

    if !options.trace {
        log.set_level(LogLevel::Debug);
    }
    log_debug!(log, "This WILL be printed out");
    log_info!(log, "The `trace` on exit will only be visible with the --trace option");

    log_error!(null_logger(), "No one will ever see this, like, ever");

    log_trace!(log, "Exiting");
    Ok(())
}
