use anyhow::Result;
use tokio::io::{self, AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

use crate::controller::{Controller, Outcome};
use crate::helper::ctx;

use super::utils::{build_api, CliSurface};

/// Read user ids from stdin, one per line, re-rendering the page after each.
///
/// The page persists between lines: a failed lookup leaves the previous
/// card in place, as a browser page would.
pub async fn interactive(ctx: impl ctx::Context<'_>) -> Result<()> {
    let controller = Controller::new(build_api(&ctx)?);
    let output_path = ctx.output_path();
    let mut surface = CliSurface::new();
    let mut lines = BufReader::new(io::stdin()).lines();

    info!("reading user ids from stdin, one per line");
    while let Some(line) = lines.next_line().await? {
        surface.page.set_input(line);

        let outcome = controller.on_trigger(&mut surface).await;
        debug!("outcome: {outcome:?}");

        surface.page.write_to(output_path)?;
        match outcome {
            Outcome::Rendered => info!("card written to {}", output_path.display()),
            Outcome::Ignored => {}
            _ => warn!("{}", surface.page.error()),
        }
    }

    info!("stdin closed");
    Ok(())
}
