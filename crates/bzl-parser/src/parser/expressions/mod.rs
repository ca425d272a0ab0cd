//! Expression parsing module
//!
//! Expressions are parsed with Pratt-style binding powers that mirror the
//! BUILD grammar's precedence table, split into small modules: the core loop,
//! operators, literals, containers, comprehensions and the postfix forms.

mod comprehensions;
mod containers;
mod core;
mod literals;
mod operators;
mod special;
