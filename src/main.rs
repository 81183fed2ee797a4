use cold_war_posters::app::{window_icon, PosterViewer, TITLE};
use cold_war_posters::Config;
use iced::{window, Size};

/// Environment variable holding the log filter (e.g. `debug`)
const LOG_ENV: &str = "POSTER_VIEWER_LOG";

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // A second init (e.g. under a test harness) is harmless
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn main() -> iced::Result {
    init_tracing();

    let config = Config::load();
    let window = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        icon: window_icon(&config),
        ..window::Settings::default()
    };

    iced::application(TITLE, PosterViewer::update, PosterViewer::view)
        .subscription(PosterViewer::subscription)
        .theme(PosterViewer::theme)
        .window(window)
        .centered()
        .run_with(move || PosterViewer::new(config))
}
