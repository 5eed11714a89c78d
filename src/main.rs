use anyhow::Context;
use shaderplane::{ViewportApp, ViewportConfig};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app = ViewportApp::new(ViewportConfig::default())
        .context("failed to create the viewport")?;
    app.run().context("viewport stopped with an error")?;
    Ok(())
}
