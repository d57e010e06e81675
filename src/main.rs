use anyhow::{Context, Result};
use scrollthumb::config::Config;
use scrollthumb::logger::Logger;
use scrollthumb::ui::{self, app::sample_lines, App};

fn main() -> Result<()> {
    let arg = std::env::args().nth(1);

    if arg.as_deref() == Some("--generate-config") {
        let path = Config::get_default_config_path()?;
        return Config::generate_default_config(&path);
    }

    let config = Config::load()?;
    let logger = Logger::from_config(config.logging.enabled)?;
    logger.install(config.logging.level_filter()?)?;

    let lines = match arg {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {path}"))?
            .lines()
            .map(str::to_string)
            .collect(),
        None => sample_lines(),
    };

    // Run the viewer
    let app = App::new(lines, &config, logger.clone())?;
    ui::run_app(app)?;

    logger.flush()
}
