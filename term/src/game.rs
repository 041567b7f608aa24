use minesweep_core as game;
use std::io::{self, Write};
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use web_time::{Duration, Instant};

use crate::input::{self, Command};
use crate::settings::Settings;
use crate::view;

const TICK: Duration = Duration::from_secs(1);

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Control {
    Continue { redraw: bool },
    Quit,
}

/// Owns the session and is the only place that mutates it: commands and clock ticks are handled one at a time.
#[derive(Debug)]
pub(crate) struct GameView<G = game::RandomLayoutGenerator> {
    session: game::Session<G>,
    settings: Settings,
}

impl GameView {
    pub(crate) fn new(settings: Settings) -> anyhow::Result<Self> {
        let seed = settings.seed_or_random();
        log::info!("seed: {}", seed);
        let session = game::Session::with_seed(game::GameConfig::default(), seed)?;
        Ok(Self::with_session(session, settings))
    }
}

impl<G: game::LayoutGenerator> GameView<G> {
    pub(crate) fn with_session(session: game::Session<G>, settings: Settings) -> Self {
        Self { session, settings }
    }

    pub(crate) fn session(&self) -> &game::Session<G> {
        &self.session
    }

    pub(crate) fn handle(&mut self, command: Command) -> Control {
        use Command::*;

        let redraw = match command {
            Reveal(coords) => {
                let outcome = self.session.reveal_cell(coords);
                log::debug!("reveal {:?}: {:?}", coords, outcome);
                outcome.has_update()
            }
            Flag(coords) => {
                let outcome = self.session.toggle_flag(coords);
                log::debug!("flag {:?}: {:?}", coords, outcome);
                outcome.has_update()
            }
            NewGame => {
                self.session.reset();
                true
            }
            Help => false,
            Quit => return Control::Quit,
        };

        Control::Continue { redraw }
    }

    pub(crate) fn tick(&mut self) -> bool {
        self.session.tick()
    }

    pub(crate) fn draw(&self, out: &mut impl Write) -> anyhow::Result<()> {
        let snapshot = self.session.snapshot();
        write!(out, "{}", view::render(&snapshot, self.settings.glyphs))?;
        if self.settings.json {
            writeln!(out, "{}", serde_json::to_string(&snapshot)?)?;
        }
        out.flush()?;
        Ok(())
    }

    /// Processes input lines until `q` or end of input, ticking the clock every second in between.
    ///
    /// The tick schedule restarts whenever the session clock starts, so the first elapsed second is a full one.
    pub(crate) fn run(
        &mut self,
        lines: Receiver<io::Result<String>>,
        out: &mut impl Write,
    ) -> anyhow::Result<()> {
        writeln!(out, "{}", input::HELP)?;
        self.draw(out)?;

        let mut next_tick = Instant::now() + TICK;
        loop {
            let timeout = next_tick.saturating_duration_since(Instant::now());
            let line = match lines.recv_timeout(timeout) {
                Ok(line) => line?,
                Err(RecvTimeoutError::Timeout) => {
                    self.tick();
                    next_tick += TICK;
                    continue;
                }
                Err(RecvTimeoutError::Disconnected) => {
                    log::debug!("input closed");
                    return Ok(());
                }
            };

            let command = match input::parse_command(&line, self.session.size()) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(err) => {
                    writeln!(out, "{}", err)?;
                    continue;
                }
            };

            if command == Command::Help {
                writeln!(out, "{}", input::HELP)?;
            }

            let clock_was_running = self.session.clock().is_running();
            let control = self.handle(command);
            if !clock_was_running && self.session.clock().is_running() {
                next_tick = Instant::now() + TICK;
            }

            match control {
                Control::Quit => return Ok(()),
                Control::Continue { redraw: true } => self.draw(out)?,
                Control::Continue { redraw: false } => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minesweep_core::{FixedLayoutGenerator, GameState, Session};
    use std::sync::mpsc;
    use std::thread;

    fn view() -> GameView<FixedLayoutGenerator> {
        let session =
            Session::initialize(4, 4, 2, FixedLayoutGenerator::new([(0, 3), (3, 3)])).unwrap();
        GameView::with_session(session, Settings::default())
    }

    fn run_lines(view: &mut GameView<FixedLayoutGenerator>, lines: &[&str]) -> String {
        let (tx, rx) = mpsc::channel();
        for line in lines {
            tx.send(Ok(line.to_string())).unwrap();
        }
        drop(tx);

        let mut out = Vec::new();
        view.run(rx, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    /// Feeds each line after its delay, keeping input open in between so the tick loop runs.
    fn run_timed(
        view: &mut GameView<FixedLayoutGenerator>,
        script: Vec<(Duration, &'static str)>,
    ) -> String {
        let (tx, rx) = mpsc::channel();
        let sender = thread::spawn(move || {
            for (delay, line) in script {
                thread::sleep(delay);
                if tx.send(Ok(line.to_string())).is_err() {
                    break;
                }
            }
        });

        let mut out = Vec::new();
        view.run(rx, &mut out).unwrap();
        sender.join().unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn clock_waits_for_first_reveal() {
        let mut view = view();

        run_timed(
            &mut view,
            vec![(Duration::from_millis(1500), "f 2 2"), (Duration::ZERO, "q")],
        );

        assert!(!view.session().clock().is_running());
        assert_eq!(view.session().elapsed_secs(), 0);
    }

    #[test]
    fn first_second_starts_at_first_reveal() {
        let mut view = view();

        run_timed(
            &mut view,
            vec![
                (Duration::from_millis(900), "r 1 1"),
                (Duration::from_millis(200), "q"),
            ],
        );

        assert!(view.session().clock().is_running());
        assert_eq!(view.session().elapsed_secs(), 0);
    }

    #[test]
    fn clock_ticks_once_per_second_of_play() {
        let mut view = view();

        run_timed(
            &mut view,
            vec![
                (Duration::from_millis(100), "r 1 1"),
                (Duration::from_millis(1500), "q"),
            ],
        );

        assert_eq!(view.session().elapsed_secs(), 1);
    }

    #[test]
    fn stale_commands_do_not_redraw() {
        let mut view = view();

        assert_eq!(view.handle(Command::Reveal((0, 0))), Control::Continue { redraw: true });
        assert_eq!(view.handle(Command::Reveal((0, 0))), Control::Continue { redraw: false });
        assert_eq!(view.handle(Command::Flag((0, 0))), Control::Continue { redraw: false });
        assert_eq!(view.handle(Command::Quit), Control::Quit);
    }

    #[test]
    fn plays_a_game_to_the_end() {
        let mut view = view();

        let output = run_lines(&mut view, &["r 1 1", "bogus", "r 2 4", "r 3 4"]);

        assert_eq!(view.session().state(), GameState::Won);
        assert!(output.contains("Unknown command `bogus`"));
        assert!(output.contains("Congratulations! You cleared the board!"));
    }

    #[test]
    fn new_game_resets_after_loss() {
        let mut view = view();

        let output = run_lines(&mut view, &["r 1 1", "r 4 4", "n"]);

        assert!(output.contains("Game over! You hit a mine."));
        assert_eq!(view.session().state(), GameState::Playing);
        assert!(view.session().first_click_pending());
    }

    #[test]
    fn quit_stops_before_remaining_input() {
        let mut view = view();

        run_lines(&mut view, &["q", "r 1 1"]);

        assert!(view.session().first_click_pending());
    }

    #[test]
    fn json_mode_prints_snapshot() {
        let session =
            Session::initialize(4, 4, 2, FixedLayoutGenerator::new([(0, 3), (3, 3)])).unwrap();
        let settings = Settings {
            json: true,
            ..Settings::default()
        };
        let mut view = GameView::with_session(session, settings);

        let output = run_lines(&mut view, &["f 2 2"]);

        assert!(output.contains("\"flag_count\":1"));
    }
}
