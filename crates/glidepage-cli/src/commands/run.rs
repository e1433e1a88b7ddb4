use std::io;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::warn;

use glidepage_core::scroll::singleton;
use glidepage_core::{AppConfig, Error};
use glidepage_tui::{handle_key_event, App, AppEvent, EventHandler, Theme};

pub async fn run(mut config: AppConfig) -> Result<()> {
    // Install the process-wide controller. A host without a frame cadence
    // falls back to instant scrolling instead of refusing to start.
    let controller = match singleton::initialize(config.scroll.clone()) {
        Ok(controller) => controller,
        Err(Error::UnsupportedEnvironment(reason)) => {
            warn!("smooth scrolling disabled: {reason}");
            config.scroll.smooth_enabled = false;
            config.scroll.animation_fps = 1;
            singleton::initialize(config.scroll.clone())?
        }
        Err(err) => return Err(err.into()),
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle("Bloodline Vengeance")
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config.clone(), Theme::default(), Some(controller))?;
    let size = terminal.size()?;
    app.resize(size.width, size.height);

    let event_handler =
        EventHandler::with_animation_fps(config.ui.tick_rate_ms, config.scroll.animation_fps);

    let result = event_loop(&mut terminal, &mut app, &event_handler);

    // Unmount the page, then restore the terminal before surfacing any error
    app.teardown();
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    singleton::teardown();

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    while app.running {
        terminal.draw(|frame| app.render(frame))?;

        match events.next()? {
            Some(AppEvent::Key(key)) => {
                let action = handle_key_event(key, app);
                app.handle_action(action);
            }
            Some(AppEvent::Wheel(delta)) => app.handle_wheel(delta),
            Some(AppEvent::Resize(width, height)) => app.resize(width, height),
            Some(AppEvent::Tick) | None => {}
        }

        // Advance the frame even without input: easing keeps moving the
        // offset until the glide converges
        app.tick();
    }
    Ok(())
}
