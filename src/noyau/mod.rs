//! Noyau shunting-yard
//!
//! Organisation interne :
//! - jetons.rs     : tokenisation (scanner manuel) + Op / Func
//! - motif.rs      : tokenisation par motifs (logos), même grammaire
//! - rpn.rs        : shunting-yard -> postfix
//! - evaluateur.rs : machine à pile sur le postfix
//! - eval.rs       : pipeline complet + démarche
//! - format.rs     : affichage des valeurs
//! - erreurs.rs    : LexError / SyntaxError / EvalError / EvaluationError

pub mod erreurs;
pub mod eval;
pub mod evaluateur;
pub mod format;
pub mod jetons;
pub mod motif;
pub mod rpn;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique
pub use erreurs::{EvalError, EvaluationError, LexError, SyntaxError};
pub use eval::{compute_expression, eval_expression, retire_espaces, Demarche, Resultat};
pub use evaluateur::{evaluate, evaluate_textes, evaluate_trace};
pub use format::{format_resultat, DIGITS_MAX};
pub use jetons::{tokenize, Genre, Tok};
pub use motif::tokenize_motif;
pub use rpn::{to_postfix, Atome};
