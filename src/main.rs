//! Terminal front-end: an interactive ratatui view by default, or the plain
//! clear-and-print console loop with `--plain`.

use crossterm::{
    cursor::MoveTo,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use log::LevelFilter;
use rand::{rngs::StdRng, SeedableRng};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use simple_logger::SimpleLogger;
use std::{
    error::Error,
    io::{self, Write},
    process, thread,
    time::{Duration, Instant},
};
use sysinfo::{System, SystemExt};

use conway_life::{
    config::USAGE,
    make_grid,
    ui::{self, Symbols},
    Config, ConfigError, GridError, Life,
};

/// State of the interactive view.
struct App {
    life: Life,
    /// Indicates whether generations advance on their own
    running: bool,
    rng: StdRng,
    /// System information for the memory readout
    sys: System,
    config: Config,
}

impl App {
    fn new(config: Config, life: Life, rng: StdRng) -> App {
        App {
            life,
            running: false,
            rng,
            sys: System::new_all(),
            config,
        }
    }

    fn symbols(&self) -> Symbols {
        Symbols {
            alive: self.config.alive,
            dead: self.config.dead,
        }
    }

    fn finished(&self) -> bool {
        reached_limit(&self.config, &self.life)
    }

    /// Advances one generation unless the configured limit is reached.
    fn advance(&mut self) {
        if self.finished() {
            self.running = false;
            return;
        }
        self.life.step();
        self.sys.refresh_memory();
    }

    fn toggle_running(&mut self) {
        self.running = !self.running && !self.finished();
    }

    /// Replaces the simulation with a fresh random grid at generation zero.
    fn reseed(&mut self) -> Result<(), GridError> {
        let grid = make_grid(self.config.rows, self.config.cols, &mut self.rng)?;
        log::info!("reseeded with population {}", grid.population());
        self.life = Life::new(grid);
        Ok(())
    }
}

fn reached_limit(config: &Config, life: &Life) -> bool {
    config
        .generations
        .is_some_and(|limit| life.stats().generation >= limit)
}

/// Main entry point.
///
/// # Controls
///
/// * Enter: start from the welcome screen, or step one generation while paused
/// * Space: Play/Pause the simulation
/// * r: start over from a new random grid
/// * q / Esc: Quit the application
///
/// # Errors
///
/// Returns an error if terminal manipulation fails.
fn main() -> Result<(), Box<dyn Error>> {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()?;

    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(ConfigError::Help) => {
            println!("{USAGE}");
            return Ok(());
        }
        Err(e) => {
            eprintln!("error: {e}\n\n{USAGE}");
            process::exit(2);
        }
    };
    log::info!("starting with {config:?}");

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let life = Life::new(make_grid(config.rows, config.cols, &mut rng)?);

    if config.plain {
        run_plain(&config, life)
    } else {
        run_interactive(App::new(config, life, rng))
    }
}

/// Clears the console, prints the grid, advances and waits, until the
/// generation limit (if any) is reached.
fn run_plain(config: &Config, mut life: Life) -> Result<(), Box<dyn Error>> {
    let symbols = Symbols {
        alive: config.alive,
        dead: config.dead,
    };

    println!("Welcome to Conway's Game of Life!");
    println!("Press ENTER to start the simulation.");
    io::stdin().read_line(&mut String::new())?;

    let mut stdout = io::stdout();
    loop {
        execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
        write!(stdout, "{}", ui::render_cells(life.grid(), symbols))?;
        stdout.flush()?;

        if reached_limit(config, &life) {
            break;
        }
        life.step();
        thread::sleep(config.delay);
    }

    log::info!("stopped after {} generations", life.stats().generation);
    Ok(())
}

fn run_interactive(app: App) -> Result<(), Box<dyn Error>> {
    // stderr output would draw over the alternate screen
    let log_level = log::max_level();
    log::set_max_level(LevelFilter::Off);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    log::set_max_level(log_level);
    let generation = result?;
    log::info!("quit at generation {generation}");
    Ok(())
}

/// Reads the next key press, ignoring releases and non-key events.
fn next_key(timeout: Duration) -> io::Result<Option<KeyCode>> {
    if event::poll(timeout)? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(Some(key.code));
            }
        }
    }
    Ok(None)
}

/// Runs the welcome screen and the event loop; returns the last generation shown.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<u64, Box<dyn Error>> {
    // Welcome screen.
    loop {
        terminal.draw(|f| ui::draw_welcome(f, app.config.rows, app.config.cols))?;
        match next_key(Duration::from_secs(1))? {
            Some(KeyCode::Enter) => break,
            Some(KeyCode::Char('q') | KeyCode::Esc) => return Ok(0),
            _ => {}
        }
    }
    app.running = true;

    let tick_rate = app.config.delay;
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| {
            let (grid_area, stats_area) = ui::split(f.size());
            ui::draw_grid(f, app.life.grid(), app.symbols(), grid_area);
            ui::draw_stats(f, app.life.stats(), &app.sys, app.running, stats_area);
        })?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        match next_key(timeout)? {
            Some(KeyCode::Char('q') | KeyCode::Esc) => break,
            Some(KeyCode::Char(' ')) => app.toggle_running(),
            Some(KeyCode::Char('r')) => app.reseed()?,
            Some(KeyCode::Enter) if !app.running => app.advance(),
            _ => {}
        }

        if last_tick.elapsed() >= tick_rate {
            if app.running {
                app.advance();
            }
            last_tick = Instant::now();
        }
    }

    Ok(app.life.stats().generation)
}
