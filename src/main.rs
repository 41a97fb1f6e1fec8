use std::path::Path;

use antarctic_explorer::{log_info, util, App, DashboardConfig};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let log_path = util::log::init(Path::new("./logs"))?;

    // Bad config exits here, before the terminal is switched over.
    let config = DashboardConfig::load()?;
    log_info!("Logging to {}", log_path.display());

    let app = App::new(config)?;
    let terminal = ratatui::init();
    let result = app.run(terminal).await;
    ratatui::restore();
    result
}
