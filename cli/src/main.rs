mod commands;
mod terminal;

use std::future::Future;
use std::io;

use commands::{CommandLine, enumerate};
use dome_common::config::Config;
use dome_common::{debug, error};
use terminal::{logging, print};

/// Conventional exit status for a process stopped by SIGINT.
const INTERRUPTED_EXIT_CODE: i32 = 130;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose, commands.quiet);

    let cfg = Config {
        quiet: commands.quiet,
        no_banner: commands.no_banner,
    };
    print::banner(cfg.no_banner, cfg.quiet);

    tokio::select! {
        result = enumerate::enumerate(&commands, &cfg) => result,
        () = interrupted(tokio::signal::ctrl_c()) => {
            mprint!();
            error!("Interrupted by user");
            std::process::exit(INTERRUPTED_EXIT_CODE);
        }
    }
}

/// Completes when an interrupt is delivered. If the handler could not be
/// installed it never completes, so the scan runs to the end.
async fn interrupted(signal: impl Future<Output = io::Result<()>>) {
    if let Err(e) = signal.await {
        debug!("Ctrl-C handler unavailable: {e}");
        std::future::pending::<()>().await;
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
