use crate::calc::ViewState;
use crate::data::AppSettings;
use crate::ui::calendar::{App, run_app};
use crate::ui::{restore_terminal, setup_terminal};
use anyhow::Result;

pub fn run() -> Result<()> {
    let settings = AppSettings::load()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::event::DisableMouseCapture
        );
        original_hook(info);
    }));

    let mut terminal = setup_terminal()?;

    // Selection state is transient: every launch starts at the current
    // month with nothing selected, and nothing is written back on exit.
    let mut app = App::new(settings, ViewState::current());
    let result = run_app(&mut terminal, &mut app);

    restore_terminal(&mut terminal)?;
    result
}
