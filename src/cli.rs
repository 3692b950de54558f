use clap::{Arg, ArgAction, ArgMatches, Command};

/// Options for the demonstration binary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemoOptions {
    pub trace: bool,
    pub diagnostics: bool,
    pub fatal: Option<String>,
}

pub fn build_cli() -> Command {
    // Leak the version string to get a 'static lifetime
    let version: &'static str = Box::leak(
        crate::internal::version::get_version_info().into_boxed_str()
    );

    Command::new("slf4rs")
        .version(version)
        .about("Leveled logging facade demo")
        .arg(
            Arg::new("trace")
                .long("trace")
                .action(ArgAction::SetTrue)
                .help("If set it will emit trace logs")
        )
        .arg(
            Arg::new("diagnostics")
                .long("diagnostics")
                .action(ArgAction::SetTrue)
                .help("Print the facade's own diagnostics (honours RUST_LOG)")
        )
        .arg(
            Arg::new("fatal")
                .long("fatal")
                .value_name("MESSAGE")
                .help("Abort through the example logger's fatal() after startup")
        )
}

pub fn parse_options(matches: &ArgMatches) -> DemoOptions {
    DemoOptions {
        trace: matches.get_flag("trace"),
        diagnostics: matches.get_flag("diagnostics"),
        fatal: matches.get_one::<String>("fatal").cloned(),
    }
}
