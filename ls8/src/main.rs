extern crate clap;

use crossbeam_channel::bounded;
use ctrlc;
use env_logger;
use log::error;

use ls8_core::cpu::{CpuState, Ls8Cpu};
use ls8_core::mem::WallClock;
use ls8_core::periph::Ls8Console;

use std::fs::File;
use std::io::{BufRead, BufReader, Write};

fn fetch_config<'a>() -> clap::ArgMatches<'a> {
    let about = "LS8 is an emulator for the LS-8 8-bit microcomputer, written entirely in Rust";
    let c = clap::App::new("LS-8 Emulator")
        .version("0.1")
        .about(about)
        .subcommand(
            clap::SubCommand::with_name("print8").about("Run the built-in print8 program"),
        )
        .subcommand(clap::SubCommand::with_name("mult").about("Run the built-in mult program"))
        .subcommand(clap::SubCommand::with_name("stack").about("Run the built-in stack program"))
        .subcommand(clap::SubCommand::with_name("call").about("Run the built-in call program"))
        .subcommand(
            clap::SubCommand::with_name("interrupts")
                .about("Run the built-in timer interrupt program"),
        )
        .subcommand(
            clap::SubCommand::with_name("file")
                .about("Run a program from an .ls8 file")
                .arg(
                    clap::Arg::with_name("filename")
                        .index(1)
                        .required(true)
                        .help("Filename of the .ls8 program to load"),
                ),
        );
    let a = c.get_matches();
    a
}

///
/// Parses `.ls8` program text: one base-2 byte literal per line, with `#`
/// starting a comment. Lines that do not parse as binary literals are
/// skipped.
///
fn parse_ls8<R: BufRead>(input: R) -> Vec<u8> {
    let mut program = Vec::new();

    for line in input.lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let code = match line.split('#').next() {
            Some(c) => c.trim(),
            None => continue,
        };
        if code.is_empty() {
            continue;
        }

        if let Ok(byte) = u8::from_str_radix(code, 2) {
            program.push(byte);
        }
    }

    program
}

fn load_ls8_file(filename: &str) -> Option<Vec<u8>> {
    // Check to make sure we are able to open the file. If we are not able
    // to, throw the issue up to the caller to know we failed at opening
    // the file.
    let fp = File::open(filename);
    let f = match fp {
        Ok(f) => f,
        _ => {
            error!("Unable to open file: {:?}", filename);
            return None;
        }
    };

    let program = parse_ls8(BufReader::new(f));
    if program.is_empty() {
        error!("No program in file: {:?}", filename);
        return None;
    }
    Some(program)
}

/// Console wired to the terminal: PRN prints a decimal line, PRA prints a
/// bare character.
struct StdoutConsole;

impl Ls8Console for StdoutConsole {
    fn print_num(&mut self, value: u8) {
        println!("{}", value);
    }

    fn print_char(&mut self, value: u8) {
        print!("{}", value as char);
        let _ = std::io::stdout().flush();
    }
}

fn main() {
    env_logger::init();

    // Register for a ctrlc handler which will push a signal to the
    // application. If the signal is raised again before the first one was
    // consumed, force-close the application.
    let (ctrlc_tx, ctrlc_rx) = bounded(1);
    let res = ctrlc::set_handler(move || {
        if ctrlc_tx.is_full() == true {
            std::process::exit(-1);
        }
        let _res = ctrlc_tx.send(());
    });

    match res {
        Err(x) => {
            error!("Unable to register signal handler. {:?}.", x);
            return;
        }
        _ => {}
    }

    let matches = fetch_config();
    let program: Vec<u8> = match matches.subcommand_name() {
        Some("print8") => ls8_programs::PRINT8.to_vec(),
        Some("mult") => ls8_programs::MULT.to_vec(),
        Some("stack") => ls8_programs::STACK.to_vec(),
        Some("call") => ls8_programs::CALL.to_vec(),
        Some("interrupts") => ls8_programs::INTERRUPTS.to_vec(),
        Some("file") => {
            let sub_matches = matches.subcommand_matches("file").unwrap();
            let filename = sub_matches.value_of("filename").unwrap();
            match load_ls8_file(filename) {
                Some(program) => program,
                None => {
                    error!("no program");
                    return;
                }
            }
        }
        _ => {
            error!("Invalid subcommand. Exiting");
            return;
        }
    };

    let mut console = StdoutConsole;
    let mut clock = WallClock::new();
    let mut cpu = Ls8Cpu::new(&mut console, &mut clock);

    match cpu.load(&program) {
        Err(x) => {
            error!("Unable to load program: {}", x);
            return;
        }
        _ => {}
    }

    loop {
        // Check to see if we received a ctrlc signal. If we have, we need
        // to exit out of the loop and exit the application.
        if ctrlc_rx.len() > 0 {
            break;
        }

        match cpu.step() {
            Ok(CpuState::Halted) => {
                break;
            }
            Ok(_) => {}
            Err(fault) => {
                error!("CPU fault: {}", fault);
                std::process::exit(1);
            }
        }
    }
}
