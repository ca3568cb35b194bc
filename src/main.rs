use std::{
    fs,
    io::{self, BufWriter},
    process,
};

use clap::Parser;
use log::LevelFilter;
use simple_logger::SimpleLogger;
use turtlec::{
    execute_program,
    interpreter::{
        command::TextSink,
        environment::{Environment, UnboundPolicy, Variables},
    },
    parse_program,
};

/// turtlec compiles turtle-graphics programs into device commands, one per
/// line, on standard output.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells turtlec to read the program from a file instead of the argument.
    #[arg(short, long)]
    file: bool,

    /// Binds a variable before the program runs, e.g. `-D size=10`.
    #[arg(short = 'D', long = "define", value_name = "NAME=VALUE", value_parser = parse_binding)]
    defines: Vec<(String, f32)>,

    /// Reads variables that were never assigned as 0 instead of failing.
    #[arg(long)]
    lenient: bool,

    /// Prints the parsed program instead of executing it.
    #[arg(long)]
    ast: bool,

    /// Increases log output on standard error (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    contents: String,
}

fn parse_binding(text: &str) -> Result<(String, f32), String> {
    let (name, value) = text.split_once('=')
                            .ok_or_else(|| format!("expected NAME=VALUE, found '{text}'"))?;
    let value = value.trim()
                     .parse()
                     .map_err(|e| format!("invalid value for '{name}': {e}"))?;
    Ok((name.trim().to_string(), value))
}

const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() {
    let args = Args::parse();

    if let Err(e) = SimpleLogger::new().with_level(level_for(args.verbose)).init() {
        eprintln!("Failed to initialise logging: {e}");
    }

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            process::exit(1);
        })
    } else {
        args.contents
    };

    let program = parse_program(&script).unwrap_or_else(|e| {
        eprintln!("{e}");
        process::exit(1);
    });

    if args.ast {
        print!("{program}");
        return;
    }

    let mut env = Variables::new();
    if args.lenient {
        env.set_policy(UnboundPolicy::Default(0.0));
    }
    for (name, value) in &args.defines {
        log::info!("binding {name} = {value}");
        env.put(name, *value);
    }

    let mut sink = TextSink::new(BufWriter::new(io::stdout().lock()));
    let result = execute_program(&program, &mut env, &mut sink);
    // Commands emitted before a runtime error are still delivered.
    let flushed = sink.flush();

    if let Err(e) = result.and(flushed) {
        eprintln!("{e}");
        process::exit(1);
    }
}
