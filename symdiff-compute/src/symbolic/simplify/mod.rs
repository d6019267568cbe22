//! Simplification of expression trees.
//!
//! The simplifier runs a fixed sequence of passes over the tree, one per rule. Each pass visits
//! the tree in post-order, so a node is only inspected after all of its children have been
//! simplified by the same pass, and a node that a rule applies to is replaced with the rule's
//! output. Rounds of passes repeat until a full round rewrites nothing; at that point the tree is
//! at a fixed point and running [`simplify`] again has no effect.
//!
//! Every rule strictly reduces the number of nodes in the tree, so the number of rounds is bounded
//! by the size of the input.

pub mod rules;
pub mod step;

use super::step_collector::StepCollector;
use rules::{add, multiply, Rule};
use std::mem;
use step::Step;
use symdiff_parser::parser::expr::Expr;
use tracing::{debug, trace};

/// The passes run in each round, in order.
const PASSES: [Rule; 3] = [
    multiply::multiply_one,
    multiply::multiply_zero,
    add::add_zero,
];

/// Runs a single pass of the given rule over the tree, in post-order. Returns the number of
/// rewrites made.
fn run_pass(expr: &mut Expr, rule: Rule, step_collector: &mut dyn StepCollector<Step>) -> usize {
    let mut rewrites = 0;
    for child in expr.children_mut() {
        rewrites += run_pass(child, rule, step_collector);
    }

    // the node is moved out for the rule to take apart, leaving a placeholder behind
    let current = mem::replace(expr, Expr::Constant(0.0));
    *expr = match rule(current, step_collector) {
        Ok(rewritten) => {
            rewrites += 1;
            rewritten
        },
        Err(unchanged) => unchanged,
    };

    rewrites
}

/// Simplifies the given expression in place.
pub fn simplify(expr: &mut Expr) {
    simplify_with(expr, &mut ());
}

/// Simplifies the given expression in place, passing every rewrite made to the given step
/// collector.
pub fn simplify_with(expr: &mut Expr, step_collector: &mut dyn StepCollector<Step>) {
    let mut rounds = 0;
    let mut total = 0;

    loop {
        rounds += 1;
        let rewrites = PASSES
            .into_iter()
            .map(|rule| run_pass(expr, rule, step_collector))
            .sum::<usize>();
        trace!(round = rounds, rewrites, "simplification round");

        if rewrites == 0 {
            break;
        }
        total += rewrites;
    }

    debug!(rounds, rewrites = total, "simplification reached a fixed point");
}

/// Simplifies the given expression in place, returning the rewrites that were made, in order.
pub fn simplify_with_steps(expr: &mut Expr) -> Vec<Step> {
    let mut steps = Vec::new();
    simplify_with(expr, &mut steps);
    steps
}
