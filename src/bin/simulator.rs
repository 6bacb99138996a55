use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    execute,
    style::Stylize,
    terminal::{Clear, ClearType},
};
use morse_core::core::types::Direction;
use morse_core::MorseEngine;
use std::io::{stdin, stdout, Write};
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let engine = MorseEngine::new();

    // One-shot mode: convert the arguments and exit.
    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        return Ok(match engine.convert(&args.join(" ")) {
            Ok(output) => {
                println!("{output}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("{} {}", "error:".red().bold(), e);
                ExitCode::FAILURE
            }
        });
    }

    print_banner()?;
    let mut input = String::new();

    loop {
        print!("{} ", ">".cyan());
        stdout().flush()?;

        input.clear();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }

        match input.trim() {
            "exit" => break,
            "clear" => print_banner()?,
            "" => {}
            line => match engine.convert_detailed(line) {
                Ok(conversion) => {
                    let label = match conversion.direction {
                        Direction::ToMorse => "text -> morse",
                        Direction::ToText => "morse -> text",
                    };
                    println!("{} {}", format!("[{label}]").dark_grey(), conversion.output.green());
                }
                Err(e) => println!("{} {} ({})", "rejected:".red().bold(), e, e.code()),
            },
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn print_banner() -> Result<()> {
    let mut out = stdout();
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    println!("{}", "Morse Converter".bold());
    println!("---------------------------------------------------------------");
    println!("Type text to encode or dots/dashes to decode.");
    println!("Words in Morse are separated by three spaces.");
    println!("'clear' redraws the screen, 'exit' quits.\n");
    Ok(())
}
