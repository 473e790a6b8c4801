mod stdio_loop;
mod tty_loop;

use anyhow::Result;
use std::future::Future;
use std::io::{self, IsTerminal};
use std::pin::Pin;
use std::sync::Arc;

use crate::app;
use crate::cli::Cli;
use crate::render;
use crate::request_engine::ExchangeController;

trait InteractiveBackend {
    fn run<'a>(
        &'a self,
        cli: &'a Cli,
        controller: &'a Arc<ExchangeController>,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + 'a>>;
}

struct TtyBackend;
struct StdioBackend;

impl InteractiveBackend for TtyBackend {
    fn run<'a>(
        &'a self,
        cli: &'a Cli,
        controller: &'a Arc<ExchangeController>,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + 'a>> {
        Box::pin(tty_loop::run(cli, controller))
    }
}

impl InteractiveBackend for StdioBackend {
    fn run<'a>(
        &'a self,
        cli: &'a Cli,
        controller: &'a Arc<ExchangeController>,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + 'a>> {
        Box::pin(stdio_loop::run(cli, controller))
    }
}

pub async fn run_interactive(cli: &Cli, controller: &Arc<ExchangeController>) -> Result<()> {
    println!("Interactive QKD simulation. Type start to initiate a key exchange, exit to finish.");
    println!("{}", render::render(&controller.state()));

    let backend: &dyn InteractiveBackend =
        if io::stdin().is_terminal() && io::stdout().is_terminal() {
            &TtyBackend
        } else {
            &StdioBackend
        };
    backend.run(cli, controller).await
}

pub fn is_exit_command(input: &str) -> bool {
    matches!(input, "exit" | "quit" | "/exit" | "/quit")
}

async fn dispatch(input: &str, cli: &Cli, controller: &Arc<ExchangeController>) {
    match input {
        "start" | "s" => app::run_exchange(cli, controller).await,
        "status" => println!("{}", render::render(&controller.state())),
        _ => println!("Unknown command '{input}'. Try start, status, or exit."),
    }
}
