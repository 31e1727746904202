use std::io;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use folio::app::Workbench;
use folio::core::event::InputEvent;
use folio::logging;
use folio::tui::TerminalGuard;

fn main() -> io::Result<()> {
    let _logging = logging::init();

    let guard = TerminalGuard::new()?;
    #[cfg(unix)]
    let signal_rx = {
        let (tx, rx) = mpsc::channel();
        folio::tui::terminal_guard::install_termination_signals(guard.restorer(), tx)?;
        rx
    };
    #[cfg(not(unix))]
    let (_signal_tx, signal_rx) = mpsc::channel::<folio::tui::TerminationSignal>();

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut workbench = Workbench::new();
    let tick_rate = Duration::from_millis(workbench.tick_ms());

    let mut dirty = true;
    let mut last_tick = Instant::now();

    loop {
        if let Ok(signal) = signal_rx.try_recv() {
            drop(terminal);
            guard.restorer().restore()?;
            std::process::exit(signal.exit_code());
        }

        if dirty {
            terminal.draw(|frame| workbench.render(frame))?;
            dirty = false;
        }

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            let input: InputEvent = event::read()?.into();
            let result = workbench.handle_input(&input);
            if result.is_quit() {
                break;
            }
            if result.is_consumed() {
                dirty = true;
            }
        }

        if last_tick.elapsed() >= tick_rate {
            dirty |= workbench.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}
