use anyhow::Result;
use rustyline::error::ReadlineError;
use std::sync::Arc;

use crate::cli::Cli;
use crate::interactive::is_exit_command;
use crate::request_engine::ExchangeController;

pub async fn run(cli: &Cli, controller: &Arc<ExchangeController>) -> Result<()> {
    let mut editor = rustyline::DefaultEditor::new()?;
    loop {
        match editor.readline("> ") {
            Ok(line) => {
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(input);
                if is_exit_command(input) {
                    println!("Good Bye!");
                    break;
                }
                super::dispatch(input, cli, controller).await;
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("Good Bye!");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}
