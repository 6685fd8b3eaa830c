//! Feeds one literal program through the three-stage pipeline and prints
//! everything that comes out the other end. Thin external caller: all the
//! real work happens in the library.

use lss::{analyze, builtins, Parser, Scanner};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let program = "(+ (* 9 (+ 2.56 3)) (- 10 5))\n(append 4 \"as \\n text\")";

    let (tokens, lex_errors) = Scanner::new(program).scan_tokens();
    println!("{} tokens", tokens.len());
    for error in &lex_errors {
        println!("lex error: {}", error);
    }

    let mut parser = Parser::new(tokens);
    let (forest, parse_errors) = parser.parse();
    println!("forest:\n{}", serde_json::to_string_pretty(&forest)?);
    for error in &parse_errors {
        println!("parse error: {}", error);
    }

    let (namespace, semantic_errors) = analyze(&forest, builtins::global_namespace());
    let root = namespace.root();
    println!("scope `{}`:", namespace.scope_name(root));
    for (name, object) in namespace.bindings(root) {
        println!("  {} -> {:?}", name, object);
    }
    for error in &semantic_errors {
        println!("semantic error: {}", error);
    }

    Ok(())
}
