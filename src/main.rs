use clap::Parser;
use tracing::{debug, info, warn};

use wdid::api::HttpApi;
use wdid::app::{App, AppEvent};
use wdid::cli::{self, Cli, Commands};
use wdid::logging;
use wdid::session::SessionStore;
use wdid::share::SystemDesktop;
use wdid::ui::TuiManager;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let log_path = logging::init_logging(cli.log_file.clone())?;
    let config = cli.config();
    let api = HttpApi::new(&config.api)?;
    info!(log = %log_path.display(), api = api.base_url(), "starting wdid");

    match cli.command.as_ref().unwrap_or(&Commands::Tui) {
        Commands::Tui => {
            let session = match SessionStore::default_location() {
                Ok(store) => {
                    debug!(path = %store.path().display(), "admin session file");
                    Some(store)
                }
                Err(err) => {
                    warn!(error = %err, "admin session will not persist");
                    None
                }
            };
            let mut app = App::new(config, Box::new(api), Box::new(SystemDesktop::new()), session);
            let mut tui = TuiManager::new()?;

            // Paint once before the blocking initial fetches
            app.prepare(&AppEvent::LoadDaily);
            tui.render_frame(&app)?;
            app.start();

            tui.run_event_loop(&mut app)?;
        }
        command => {
            let stdout = std::io::stdout();
            cli::run_command(command, &api, &config, &mut stdout.lock())?;
        }
    }

    Ok(())
}
