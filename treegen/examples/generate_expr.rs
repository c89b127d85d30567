//! Generates the Lox expression and statement trees from code.
//!
//! ```text
//! cargo run -p treegen --example generate_expr -- target/lox
//! ```

use treegen::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let output_dir = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "target/lox".to_string());
    let config =
        GeneratorConfig::default().with_package(Some("com.craftinginterpreters.lox".into()));

    let expr = GenerationRequest::new(
        "Expr",
        [
            "Assign   : Token name, Expr value",
            "Binary   : Expr left, Token operator, Expr right",
            "Call     : Expr callee, Token paren, List<Expr> arguments",
            "Grouping : Expr expression",
            "Literal  : Object value",
            "Logical  : Expr left, Token operator, Expr right",
            "Unary    : Token operator, Expr right",
            "Variable : Token name",
        ],
        &output_dir,
    );
    let stmt = GenerationRequest::new(
        "Stmt",
        [
            "Block      : List<Stmt> statements",
            "Expression : Expr expression",
            "If         : Expr condition, Stmt thenBranch, Stmt elseBranch",
            "Print      : Expr expression",
            "Var        : Token name, Expr initializer",
            "While      : Expr condition, Stmt body",
        ],
        &output_dir,
    );

    for request in [&expr, &stmt] {
        let path = generate(request, &config)?;
        println!("Generated {}", path.display());
    }

    Ok(())
}
