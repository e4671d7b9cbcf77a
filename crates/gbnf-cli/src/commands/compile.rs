use std::fs;
use std::path::{Path, PathBuf};

use gbnf_compiler::ErrorPrinter;

use crate::util::load_grammar;

pub struct CompileArgs {
    pub grammar_path: Option<PathBuf>,
    pub grammar_text: Option<String>,
    pub output: Option<PathBuf>,
    pub color: bool,
}

pub fn run(args: CompileArgs) {
    let (source, path) =
        match load_grammar(args.grammar_path.as_deref(), args.grammar_text.as_deref()) {
            Ok(loaded) => loaded,
            Err(msg) => {
                eprintln!("error: {}", msg);
                std::process::exit(1);
            }
        };

    let grammar = match gbnf_compiler::compile(&source) {
        Ok(grammar) => grammar,
        Err(err) => {
            let mut printer = ErrorPrinter::new(&err, &source).colored(args.color);
            if let Some(path) = path.as_deref() {
                printer = printer.path(path);
            }
            eprint!("{}", printer.render());
            std::process::exit(1);
        }
    };

    let output = match args.output {
        Some(output) => output,
        None => match default_output(args.grammar_path.as_deref()) {
            Some(output) => output,
            None => {
                eprintln!("error: no output path; use -o with inline or stdin grammars");
                std::process::exit(1);
            }
        },
    };

    if let Err(e) = fs::write(&output, grammar.to_bytes()) {
        eprintln!("error: failed to write {}: {}", output.display(), e);
        std::process::exit(1);
    }
}

/// Grammar path with the `.gbc` extension; stdin has no default.
fn default_output(grammar_path: Option<&Path>) -> Option<PathBuf> {
    let path = grammar_path?;
    if path.as_os_str() == "-" {
        return None;
    }
    Some(path.with_extension("gbc"))
}
