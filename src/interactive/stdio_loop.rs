use anyhow::Result;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use crate::cli::Cli;
use crate::interactive::is_exit_command;
use crate::request_engine::ExchangeController;

pub async fn run(cli: &Cli, controller: &Arc<ExchangeController>) -> Result<()> {
    let stdin = io::stdin();
    let mut lock = stdin.lock();
    let mut line = String::new();
    loop {
        line.clear();
        print!("> ");
        io::stdout().flush()?;
        if lock.read_line(&mut line)? == 0 {
            println!("Good Bye!");
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if is_exit_command(input) {
            println!("Good Bye!");
            break;
        }
        super::dispatch(input, cli, controller).await;
    }
    Ok(())
}
