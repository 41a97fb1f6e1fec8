use crate::config::DashboardConfig;
use crate::event::{AppEvent, Event, EventHandler};
use crate::feed::{ReadingGenerator, Snapshot};
use crate::ui::Dashboard;
use crate::{log_debug, log_error, log_info};
use color_eyre::Result;
use ratatui::{
    DefaultTerminal,
    crossterm::event::{KeyCode, KeyEvent, KeyModifiers},
};

/// Application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    pub config: DashboardConfig,
    /// Sole writer of the history window.
    pub generator: ReadingGenerator,
    /// Window contents as of the last sample; what every card renders from.
    pub snapshot: Snapshot,
    pub samples_taken: u64,
    /// Event handler.
    pub events: EventHandler,
}

impl App {
    /// Constructs a new instance of [`App`]. Must be called inside a tokio runtime.
    pub fn new(config: DashboardConfig) -> Result<Self> {
        let generator = ReadingGenerator::from_config(&config)?;
        let events = EventHandler::new(config.update_interval());
        Ok(Self::with_parts(config, generator, events))
    }

    pub fn with_parts(config: DashboardConfig, generator: ReadingGenerator, events: EventHandler) -> Self {
        Self {
            running: true,
            snapshot: generator.snapshot(),
            config,
            generator,
            samples_taken: 0,
            events,
        }
    }

    /// Run the application's main loop.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        log_info!("Dashboard started, sampling every {}s", self.config.update_interval_secs);
        let mut needs_redraw = true;

        while self.running {
            if needs_redraw {
                terminal.draw(|frame| frame.render_widget(&self, frame.area()))?;
                needs_redraw = false;
            }

            match self.events.next().await {
                Ok(event) => match event {
                    Event::Sample => {
                        self.sample();
                        needs_redraw = true;
                    }
                    Event::Crossterm(event) => match event {
                        crossterm::event::Event::Key(key_event) => {
                            self.handle_key_events(key_event)?;
                        }
                        crossterm::event::Event::Resize(_, _) => needs_redraw = true,
                        _ => {}
                    },
                    Event::App(app_event) => match app_event {
                        AppEvent::Quit => self.quit(),
                    },
                },
                Err(e) => {
                    log_error!("Event error: {}", e);
                    return Err(e);
                }
            }
        }

        log_info!("Dashboard stopped after {} samples", self.samples_taken);
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    pub fn handle_key_events(&mut self, key_event: KeyEvent) -> Result<()> {
        match key_event.code {
            KeyCode::Esc | KeyCode::Char('q') => self.events.send(AppEvent::Quit),
            KeyCode::Char('c' | 'C') if key_event.modifiers == KeyModifiers::CONTROL => {
                self.events.send(AppEvent::Quit)
            }
            _ => {}
        }
        Ok(())
    }

    /// Generate the next reading and refresh the snapshot the cards read.
    pub fn sample(&mut self) {
        let (reading, snapshot) = self.generator.tick();
        self.snapshot = snapshot;
        self.samples_taken += 1;

        log_info!(
            "Reading #{}: {} at {}",
            self.samples_taken,
            reading.value(),
            reading.formatted_timestamp()
        );
        log_debug!(
            "Window: {}",
            serde_json::to_string(&self.snapshot).unwrap_or_default()
        );
    }

    /// Set running to false to quit the application.
    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn dashboard(&self) -> Dashboard<'_> {
        Dashboard::new(&self.config, &self.snapshot)
    }
}
