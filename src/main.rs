use std::{
    env,
    fs::read_to_string,
    io::{self, BufRead, Write},
    process::exit,
};

use inkwell::context::Context;
use inkwell::values::AnyValue;
use kaleidoc::compiler::compiler::{compile_source, Compiler};

fn main() {
    let context = Context::create();
    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => {
            let mut compiler = Compiler::new(&context, "repl");
            repl(&mut compiler);
        }
        2 => {
            let mut compiler = Compiler::new(&context, &args[1]);
            compile_file(&args[1], &mut compiler);
        }
        _ => {
            eprintln!("usage: kaleidoc [file]");
            exit(2);
        }
    }
}

/// Compiles a whole file and prints the resulting module IR to stdout.
fn compile_file(file_path: &str, compiler: &mut Compiler) {
    let source = read_to_string(file_path).expect("Failed to read file!");

    let (_, diagnostics) = compile_source(&source, compiler);

    for error in diagnostics.iter() {
        eprintln!("Error: {}", error);
    }

    print!("{}", compiler.module.print_to_string().to_string());

    if !diagnostics.is_empty() {
        exit(1);
    }
}

/// Line-oriented read-eval loop. Definitions accumulate in the session
/// module, so later lines can call functions from earlier ones.
fn repl(compiler: &mut Compiler) {
    let stdin = io::stdin();

    loop {
        print!("ready> ");
        io::stdout().flush().unwrap();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(error) => {
                eprintln!("Error: {}", error);
                break;
            }
        }

        let (functions, diagnostics) = compile_source(&line, compiler);

        for error in diagnostics.iter() {
            eprintln!("Error: {}", error);
        }

        for function in functions.iter() {
            print!("{}", function.print_to_string().to_string());
        }
    }
}
