use std::io::{self, BufRead, Write};

use colored::Colorize;

use mh_oracle::{ReadingSession, is_quit};

pub fn run(interpret: bool) -> Result<(), String> {
    let mut session = ReadingSession::new();

    println!("  {} 梅花易數 reading session", "Starting".bold());
    if interpret {
        println!("  Interpretations are requested after each cast.");
    }
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break,
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let before = session.readings().len();
        match session.process(input, super::now()) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
                if interpret && session.readings().len() > before {
                    attach_interpretation(&mut session);
                }
                if is_quit(input) {
                    break;
                }
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }
    }

    Ok(())
}

fn attach_interpretation(session: &mut ReadingSession) {
    let Some(result) = session.last_reading() else {
        return;
    };
    let interpretation = super::interpret_reading(result);
    super::print_interpretation(&interpretation);
    println!();
    if let Err(e) = session.attach_interpretation(&interpretation, super::now()) {
        println!("{}\n", e.to_string().yellow());
    }
}
