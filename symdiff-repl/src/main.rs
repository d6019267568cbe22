mod error;
mod input;

use error::Error;
use input::{Input, Interactive, Piped};
use std::io::{self, IsTerminal, Write};
use symdiff_compute::{
    numerical::{ctxt::Ctxt, eval::Eval},
    symbolic::{differentiate, simplify},
};
use symdiff_parser::parser::{expr::Expr, parse};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt, EnvFilter};

/// Asks for the value of each variable in the context. Each answer may be any expression without
/// variables, such as `pi / 4`; invalid answers are reported and asked again.
fn query_variables(ctxt: &mut Ctxt, input: &mut dyn Input) -> Result<(), Error> {
    let symbols = ctxt.symbols().collect::<Vec<_>>();
    for symbol in symbols {
        loop {
            let line = input.read_line(&format!("{} = ", symbol))?;
            match parse(&line).and_then(|expr| expr.eval_default()) {
                Ok(value) => {
                    ctxt.set(symbol, value);
                    break;
                },
                Err(err) => err.report_to_stderr("input", &line),
            }
        }
    }
    Ok(())
}

/// Writes `<label> = <expr> = <value>`. If the expression cannot be evaluated, only the expression
/// is written, and the reason is reported to stderr.
fn write_result(out: &mut impl Write, label: &str, expr: &Expr, ctxt: &Ctxt) -> Result<(), Error> {
    let infix = expr.to_string();
    match expr.eval(ctxt) {
        Ok(value) => writeln!(out, "{} = {} = {}", label, infix, value)?,
        Err(err) => {
            writeln!(out, "{} = {}", label, infix)?;
            err.report_to_stderr(label, &infix);
        },
    }
    Ok(())
}

/// Parses and simplifies the expression, asks for the value of each of its variables, then writes
/// the value of the expression and of its partial derivative with respect to each variable.
fn run(source: &str, input: &mut dyn Input, out: &mut impl Write) -> Result<(), Error> {
    let mut expr = parse(source)?;
    simplify(&mut expr);

    let mut ctxt = Ctxt::from_expr(&expr);
    query_variables(&mut ctxt, input)?;
    debug!(variables = ctxt.len(), "queried variable values");

    write_result(out, "F()", &expr, &ctxt)?;
    for symbol in ctxt.symbols() {
        let mut derivative = differentiate(&expr, symbol);
        simplify(&mut derivative);
        write_result(out, &format!("∂F/∂{}", symbol), &derivative, &ctxt)?;
    }

    Ok(())
}

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_env("SYMDIFF_LOG").unwrap_or_else(|_| EnvFilter::new("off")))
        .init();

    let mut input: Box<dyn Input> = if io::stdin().is_terminal() {
        match Interactive::new() {
            Ok(interactive) => Box::new(interactive),
            Err(err) => {
                eprintln!("{}", err);
                std::process::exit(1);
            },
        }
    } else {
        Box::new(Piped::new())
    };

    let source = match std::env::args().nth(1) {
        Some(source) => source,
        None => match input.read_line("Enter an expression: ") {
            Ok(source) => source,
            Err(err) => {
                Error::from(err).report_to_stderr("");
                std::process::exit(1);
            },
        },
    };

    if let Err(err) = run(&source, &mut *input, &mut io::stdout().lock()) {
        err.report_to_stderr(&source);
        std::process::exit(1);
    }
}
