mod changeset;
mod cli;
mod constants;
mod context;
mod dispatch;
mod error;
mod git;
mod request;
mod ui;

use crate::cli::Cli;
use crate::context::{Mode, SyncContext};
use crate::dispatch::UreqTransport;
use anyhow::Result;

fn main() {
    if let Err(e) = run(Cli::parse_args()) {
        error!("{}", e);
        for cause in e.chain().skip(1) {
            error!("  caused by: {}", cause);
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // the mode is known before any setting is validated
    status!("running in {} mode", Mode::from_event(cli.event_name.as_deref()));
    let ctx = SyncContext::from_cli(cli)?;
    if !ctx.mode.is_live() && ctx.credentials.api_key.is_empty() {
        warning!("no API credentials set, requests are shown without them");
    }

    // validate -> diff -> load -> send, each step aborts the run on failure
    let repo = git::open(&ctx.repo_path)?;
    git::validate_single_commit(&repo, ctx.mode, ctx.commit_range.as_ref())?;
    let changeset = git::get_changes(&repo)?;
    let updates = changeset.load(git::workdir(&repo)?)?;

    let transport = UreqTransport::new();
    dispatch::send_updates(&updates, &ctx, &transport)?;

    Ok(())
}
