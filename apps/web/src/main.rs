use folio_logger::{LevelFilter, Logger};
use folio_web::{App, WebApp};

fn main() -> anyhow::Result<()> {
    let level = if cfg!(debug_assertions) { LevelFilter::DEBUG } else { LevelFilter::INFO };
    let _logger = Logger::builder().name(env!("CARGO_PKG_NAME")).level(level).init()?;

    let config = folio::load_config(None)?;
    WebApp::new(config).launch(App);

    Ok(())
}
