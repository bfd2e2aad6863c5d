//! Line-driven front end over an analyzer [`Session`]

use crate::auth::UserProvider;
use crate::error::Result;
use crate::input::SelectedFile;
use crate::output::formatter::ConsoleFormatter;
use crate::processing::Scorer;
use crate::session::{AnalyzerEvent, Session};
use log::{debug, warn};
use std::io::{BufRead, Write};
use std::path::Path;

const HELP: &str = "\
Commands:
  select <path>   choose a resume file (clears the previous result)
  analyze         score the selected file
  show            redraw the screen
  status          print the session state
  reset           forget the selection
  help            show this help
  quit | exit     leave
";

#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Select(&'a str),
    Analyze,
    Show,
    Status,
    Reset,
    Help,
    Quit,
    Unknown(&'a str),
}

fn parse_command(line: &str) -> Option<Command<'_>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    Some(match verb.to_lowercase().as_str() {
        "select" | "open" => Command::Select(rest),
        "analyze" | "analyse" => Command::Analyze,
        "show" => Command::Show,
        "status" => Command::Status,
        "reset" => Command::Reset,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(verb),
    })
}

/// Drive `session` from `reader` until `quit` or end of input.
///
/// Command failures are reported on `writer` and do not end the loop;
/// only I/O errors on the reader or writer do.
pub fn run<S, R, W>(
    session: &mut Session<S>,
    formatter: &ConsoleFormatter,
    users: &dyn UserProvider,
    accepted_extensions: &[String],
    reader: R,
    mut writer: W,
) -> Result<()>
where
    S: Scorer,
    R: BufRead,
    W: Write,
{
    write!(writer, "{}", formatter.format_state(session.state(), users)?)?;
    writeln!(writer, "Type 'help' for commands.")?;

    for line in reader.lines() {
        let line = line?;
        let Some(command) = parse_command(&line) else {
            continue;
        };
        debug!("Interactive command: {:?}", command);

        match command {
            Command::Select("") => writeln!(writer, "❌ Usage: select <path>")?,
            Command::Select(path) => match SelectedFile::from_path(Path::new(path), accepted_extensions) {
                Ok(file) => {
                    session.apply(AnalyzerEvent::FileChosen(file))?;
                    write!(writer, "{}", formatter.format_state(session.state(), users)?)?;
                }
                Err(e) => {
                    warn!("Selection failed: {}", e);
                    writeln!(writer, "❌ {}", e)?;
                }
            },
            Command::Analyze => match session.apply(AnalyzerEvent::AnalyzeRequested) {
                Ok(state) => write!(writer, "{}", formatter.format_state(state, users)?)?,
                Err(e) => writeln!(writer, "❌ {}", e)?,
            },
            Command::Show => write!(writer, "{}", formatter.format_state(session.state(), users)?)?,
            Command::Status => {
                let state = session.state();
                match state.selected_file() {
                    Some(file) => writeln!(writer, "State: {} ({})", state.name(), file.name)?,
                    None => writeln!(writer, "State: {}", state.name())?,
                }
            }
            Command::Reset => {
                session.reset();
                write!(writer, "{}", formatter.format_state(session.state(), users)?)?;
            }
            Command::Help => write!(writer, "{}", HELP)?,
            Command::Quit => break,
            Command::Unknown(verb) => writeln!(writer, "❌ Unknown command '{}'. Type 'help' for commands.", verb)?,
        }
        writer.flush()?;
    }

    Ok(())
}
