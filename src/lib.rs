//! Calculatrice shunting-yard — bibliothèque (noyau seul)
//!
//! Le binaire `calculatrice` (console + UI eframe) n’utilise que cette API.

pub mod noyau;

pub use noyau::{compute_expression, EvaluationError};
