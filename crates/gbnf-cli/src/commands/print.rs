use std::path::PathBuf;

use gbnf_compiler::ErrorPrinter;
use gbnf_grammar::dump;

use crate::util::load_grammar;

pub struct PrintArgs {
    pub grammar_path: Option<PathBuf>,
    pub grammar_text: Option<String>,
    pub color: bool,
}

pub fn run(args: PrintArgs) {
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

    print!("{}", dump(&grammar));
}
