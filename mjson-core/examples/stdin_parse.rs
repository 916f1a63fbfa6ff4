//! Example: Parse stdin and print the document, or the error.
//!
//! Run with: echo '{"a":"b"}' | cargo run --example stdin_parse

use std::io::Read;
use std::process::ExitCode;

use mjson_core::Parser;

fn main() -> ExitCode {
    let mut input = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut input) {
        eprintln!("failed to read stdin: {}", e);
        return ExitCode::FAILURE;
    }

    match Parser::new().parse(&input) {
        Ok(doc) => {
            println!("{:#?}", doc);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
