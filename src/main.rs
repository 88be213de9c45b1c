#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use connect_four::{
    init_logging, print_board, print_chat, print_game_info, BoardSurface, ChatLog, GameEngine,
    MenuCommand, Side, SURFACE_WIDTH,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use std::io::{self, BufRead, Write};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play a local two-player game in the terminal.
    Play {
        #[arg(
            long,
            default_value_t = SURFACE_WIDTH,
            help = "Board surface width in pixels, used to resolve simulated clicks"
        )]
        surface_width: i32,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { surface_width } => play(surface_width),
    }
}

#[cfg(feature = "std")]
fn print_help() {
    println!("Enter a column (1-7) to drop a piece, or:");
    println!("  @<x>        click the board surface at pixel x");
    println!("  say <text>  send a chat message");
    println!("  chat        show the chat history");
    println!("  menu        list menu commands");
    println!("  quit        leave the game");
}

#[cfg(feature = "std")]
fn play(surface_width: i32) -> anyhow::Result<()> {
    let mut engine = GameEngine::new();
    let surface = BoardSurface::new(surface_width);
    let mut chat = ChatLog::new();
    // sample conversation, one line per side
    chat.append("Hello!", Side::Local);
    chat.append("Hi there!", Side::Remote);

    println!("CONNECT 4\n");
    print_game_info();
    println!();
    print_help();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        println!();
        print_board(&engine.state());
        print!("> ");
        io::stdout().flush()?;
        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("q") {
            break;
        }
        if line.eq_ignore_ascii_case("help") {
            print_help();
            continue;
        }
        if line.eq_ignore_ascii_case("chat") {
            print_chat(&chat);
            continue;
        }
        if let Some(text) = line.strip_prefix("say ") {
            chat.append(text.trim(), Side::Local);
            print_chat(&chat);
            continue;
        }
        if line.eq_ignore_ascii_case("menu") {
            for cmd in MenuCommand::ALL {
                println!("{:<12} ({})", cmd.label(), cmd.menu());
            }
            continue;
        }
        if let Some(cmd) = MenuCommand::from_label(line) {
            if let Err(err) = cmd.invoke() {
                println!("{}", err);
            }
            continue;
        }

        let moved = if let Some(xs) = line.strip_prefix('@') {
            // simulated pointer click at pixel x on the board surface
            match xs.trim().parse::<i32>() {
                Ok(x) => surface.click(x, &mut engine),
                Err(_) => {
                    println!("Invalid input");
                    continue;
                }
            }
        } else {
            match line.parse::<i32>() {
                // columns are 1-based at the prompt
                Ok(n) => engine.attempt_move(n.saturating_sub(1)).ok(),
                Err(_) => {
                    println!("Invalid input");
                    continue;
                }
            }
        };
        if let Some(mv) = moved {
            println!("{} played column {}.", mv.player, mv.column + 1);
        }
        // a rejected move stays a silent no-op, like an ignored click
    }
    Ok(())
}
