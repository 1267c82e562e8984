//! Text rendering layer for the passion board.
//!
//! # Responsibility
//! - Translate input lines into core intents and draw the projected
//!   view tree after every applied intent.
//! - Stay a dumb terminal: all business rules live in the core.

mod intent;

use intent::{parse_line, Command, ParseError};
use passionboard_core::{
    default_log_level, init_logging, project, BoardService, BoardView, Chevron,
    RandomColorSource, StateStore,
};
use std::io::{self, BufRead, Write};

fn main() {
    // Logging is opt-in: first process argument is an absolute log dir.
    if let Some(log_dir) = std::env::args().nth(1) {
        if let Err(err) = init_logging(default_log_level(), &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let mut store = StateStore::new();
    let mut service = BoardService::new(RandomColorSource::new());

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    render(&mut stdout, &project(store.snapshot()));
    print_help(&mut stdout);

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        match parse_line(&line) {
            Ok(Command::Core(intent)) => {
                log::debug!("event=intent_applied module=cli intent={intent:?}");
                let next = service.apply(store.snapshot(), intent);
                store.commit(next);
                render(&mut stdout, &project(store.snapshot()));
            }
            Ok(Command::Show) => render(&mut stdout, &project(store.snapshot())),
            Ok(Command::Help) => print_help(&mut stdout),
            Ok(Command::Quit) => break,
            Err(ParseError::Empty) => {}
            Err(err) => {
                let _ = writeln!(stdout, "! {err}");
            }
        }
    }
}

/// Draws one view tree as indented text.
fn render(out: &mut impl Write, view: &BoardView) {
    let _ = writeln!(out, "== My Passions ==");
    for card in &view.cards {
        let chevron = match card.chevron {
            Chevron::Down => "v",
            Chevron::Up => "^",
        };
        let _ = writeln!(
            out,
            "[{}] {} ({}) {}",
            card.id,
            card.title,
            card.color.css_class(),
            chevron
        );
        if let Some(body) = &card.body {
            for row in &body.tasks {
                let _ = writeln!(out, "    {}. {} [x]", row.index, row.text);
            }
            let _ = writeln!(out, "    task input: `{}`", body.editor.pending_text);
        }
    }
    if view.create_dialog.open {
        let _ = writeln!(
            out,
            "-- Add New Passion -- title input: `{}`",
            view.create_dialog.pending_title
        );
    }
    let _ = writeln!(out, "(+)");
}

fn print_help(out: &mut impl Write) {
    let _ = writeln!(
        out,
        "commands: open | close | title <text> | task <text> | add <title> |\n\
         add-task <id> <text> | rm <id> <index> | toggle <id> | show | help | quit"
    );
}
