//! One validator per recognized element, each an `impl BalCompiler` block.

mod condition;
mod managed_host;
mod standard_ba;
mod variable;

pub use condition::condition_expression;
