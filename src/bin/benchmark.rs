use mola::repl::default_environment;
use mola::{eval, print, read};
use std::env;
use std::time::Instant;

// (+ (* 1 2) (* 2 3) ... ) with `width` terms
fn generate(width: usize) -> String {
    let terms: Vec<String> = (1..=width)
        .map(|i| format!("(* {} (- {} 1))", i, i + 1))
        .collect();
    format!("(+ {})", terms.join(" "))
}

fn main() {
    let width = env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(10_000);
    let input = generate(width);
    let env = default_environment();

    let start = Instant::now();
    let ast = read(&input)
        .expect("Parse errors found")
        .expect("No form found");
    let read_time = start.elapsed();

    let start = Instant::now();
    let value = eval(ast, Some(&env)).expect("Eval errors found");
    let eval_time = start.elapsed();

    let result = print(&value).expect("No representation");

    println!(
        "width={}, result={}, read={}, eval={}",
        width,
        result,
        read_time.as_secs_f64(),
        eval_time.as_secs_f64(),
    );
}
