use std::path::PathBuf;

use gbnf_compiler::ErrorPrinter;

use crate::util::load_grammar;

pub struct CheckArgs {
    pub grammar_path: Option<PathBuf>,
    pub grammar_text: Option<String>,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let (source, path) =
        match load_grammar(args.grammar_path.as_deref(), args.grammar_text.as_deref()) {
            Ok(loaded) => loaded,
            Err(msg) => {
                eprintln!("error: {}", msg);
                std::process::exit(1);
            }
        };

    if let Err(err) = gbnf_compiler::compile(&source) {
        let mut printer = ErrorPrinter::new(&err, &source).colored(args.color);
        if let Some(path) = path.as_deref() {
            printer = printer.path(path);
        }
        eprint!("{}", printer.render());
        std::process::exit(1);
    }

    // Silent on success (like cargo check).
}
