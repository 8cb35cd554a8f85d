use clap::Parser;
use color_eyre::Result;

use portal_tui::app::{actions, App};
use portal_tui::cli::CliArgs;
use portal_tui::{config, event, terminal};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    let app_config = config::init_app_config();
    let mut app = App::new(&app_config);

    // Without a terminal on stdout there is nothing to draw; print the
    // portal stats instead.
    if args.headless || !is_terminal() {
        return event::run_headless(&app, args.json).await;
    }

    actions::load_initial_data(&mut app);

    let mut terminal = terminal::setup()?;
    let result = event::run(&mut terminal, &mut app).await;
    terminal::cleanup(true, true);

    result
}

fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
