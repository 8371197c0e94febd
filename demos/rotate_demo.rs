//! Rotate Demo: a full-screen rotating headline.
//!
//! Keyboard:
//! - Space / →  next phrase
//! - ←          previous phrase
//! - Home       first phrase
//! - a          toggle automatic rotation
//! - s          cycle stagger origin
//! - Esc / q    exit
//!
//! Set `RUST_LOG=debug` to see transitions (logged to stderr).

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::{cursor, execute, terminal};
use rotating_text::{
    OutputBuffer, Rect, Rgb, RotatingText, Rotator, RotatorConfig, StaggerFrom, Widget,
};
use std::io::{self, Write};
use std::time::{Duration, Instant};

const FRAME: Duration = Duration::from_millis(16);

/// Restores the terminal on every exit path.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

fn main() -> io::Result<()> {
    env_logger::init();

    let rotator = Rotator::new(
        RotatorConfig::new(["hi there 👋", "welcome to eclipse 🌘", "stay tuned 🔥"])
            .with_rotation_interval(Duration::from_millis(2000))
            .with_stagger(StaggerFrom::First, 0.03)
            .on_next(|index| log::info!("now showing phrase {index}")),
    )
    .map_err(io::Error::other)?;

    let _guard = TerminalGuard::enter()?;
    let (width, height) = terminal::size()?;

    let mut widget = RotatingText::new(headline_bounds(width, height), rotator);
    widget.mount().map_err(io::Error::other)?;

    let mut stdout = io::stdout();
    let mut out = OutputBuffer::new();
    draw_chrome(&mut out, width, height, &widget);
    out.flush_to(&mut stdout)?;

    loop {
        if event::poll(FRAME)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Esc | KeyCode::Char('q') => break,
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
                    KeyCode::Char('a') => {
                        let auto = !widget.rotator().is_auto();
                        let rotator = widget.rotator_mut();
                        rotator.set_auto(auto).map_err(io::Error::other)?;
                        redraw_chrome(&mut out, &mut stdout, &widget)?;
                    }
                    KeyCode::Char('s') => {
                        let stagger = widget.rotator().stagger();
                        let from = match stagger.from {
                            StaggerFrom::First => StaggerFrom::Center,
                            StaggerFrom::Center => StaggerFrom::Last,
                            _ => StaggerFrom::First,
                        };
                        widget
                            .rotator_mut()
                            .set_stagger(from, stagger.duration)
                            .map_err(io::Error::other)?;
                        widget.next();
                        redraw_chrome(&mut out, &mut stdout, &widget)?;
                    }
                    _ => {
                        widget.handle_key(&key);
                    }
                },
                Event::Resize(w, h) => {
                    widget.set_bounds(headline_bounds(w, h));
                    out.clear();
                    out.reset_attrs();
                    out.clear_screen();
                    draw_chrome(&mut out, w, h, &widget);
                    out.flush_to(&mut stdout)?;
                }
                _ => {}
            }
        }

        widget.tick(Instant::now());
        if widget.needs_redraw() {
            out.clear();
            widget.render(&mut out);
            out.flush_to(&mut stdout)?;
            widget.clear_redraw();
        }
    }

    stdout.flush()
}

fn headline_bounds(width: u16, height: u16) -> Rect {
    Rect::new(4, height / 2, width.saturating_sub(8), 1)
}

fn redraw_chrome(
    out: &mut OutputBuffer,
    stdout: &mut io::Stdout,
    widget: &RotatingText,
) -> io::Result<()> {
    let (width, height) = terminal::size()?;
    out.clear();
    draw_chrome(out, width, height, widget);
    out.flush_to(stdout)
}

fn draw_chrome(out: &mut OutputBuffer, width: u16, height: u16, widget: &RotatingText) {
    let rotator = widget.rotator();
    let status = format!(
        " auto: {}  interval: {:?}  stagger: {} x {:.3}s ",
        if rotator.is_auto() { "on" } else { "off" },
        rotator.rotation_interval(),
        rotator.stagger().from,
        rotator.stagger().duration,
    );

    out.reset_attrs();
    out.set_fg(Rgb::new(150, 150, 150));
    out.cursor_move(0, 0);
    out.write_blank(width);
    out.cursor_move(0, 0);
    out.write_str(&status);

    out.cursor_move(0, height.saturating_sub(1));
    out.write_blank(width);
    out.cursor_move(0, height.saturating_sub(1));
    out.write_str(" space/→ next  ← previous  a auto  s stagger  esc quit");
    out.reset_attrs();
}
