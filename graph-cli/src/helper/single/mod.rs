use anyhow::Result;
use tracing::{error, info};

use crate::controller::{Controller, Outcome};
use crate::helper::ctx::Context;

use super::utils::{build_api, CliSurface};

/// Render one user's card to the output file.
pub async fn render_one(ctx: impl Context<'_>, user_id: &str) -> Result<Outcome> {
    let controller = Controller::new(build_api(&ctx)?);
    let mut surface = CliSurface::new();
    surface.page.set_input(user_id);

    let outcome = controller.on_trigger(&mut surface).await;

    let output_path = ctx.output_path();
    surface.page.write_to(output_path)?;
    match &outcome {
        Outcome::Rendered => info!("card written to {}", output_path.display()),
        _ => error!("{}", surface.page.error()),
    }
    Ok(outcome)
}
