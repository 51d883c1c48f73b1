use std::{env, process, rc::Rc, time::Instant};

use prefix_expr::{
    errors::errors::Error,
    format_error,
    lexer::lexer::tokenize,
    parser::parser::{parse_with_options, ParserOptions},
};

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let options = ParserOptions {
        allow_trailing_tokens: args.iter().any(|arg| arg == "--lenient"),
        ..ParserOptions::default()
    };

    let expr = match args.iter().rev().find(|arg| !arg.starts_with("--")) {
        Some(expr) => expr.clone(),
        None => {
            println!("Error: please provide an expression to parse.");
            println!("e.g. prefix-expr '(+ 1 2 3)'");
            process::exit(1);
        }
    };

    println!("{}", expr);

    let start = Instant::now();

    let tokens = match tokenize(expr.clone(), None) {
        Ok(tokens) => tokens,
        Err(error) => display_error(error, &expr),
    };

    println!("Tokenized in {:?}", start.elapsed());
    for token in &tokens {
        println!("{}", token);
    }

    let parse_start = Instant::now();
    let ast = match parse_with_options(tokens, Rc::new(String::from("shell")), options) {
        Ok(ast) => ast,
        Err(error) => display_error(error, &expr),
    };

    println!("Parsed in {:?}", parse_start.elapsed());
    println!("{}", ast);
    println!("{:#?}", ast);
}

fn display_error(error: Error, source: &str) -> ! {
    print!("{}", format_error(&error, source));
    process::exit(1)
}
