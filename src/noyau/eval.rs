//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> postfix (shunting-yard) -> machine à pile -> f64
//!
//! Aucun état entre deux appels : chaque appel alloue ses jetons et ses piles.

use tracing::debug;

use super::erreurs::EvaluationError;
use super::evaluateur::{evaluate, evaluate_trace};
use super::jetons::{format_tokens, tokenize};
use super::rpn::{format_postfix, to_postfix};

#[derive(Default, Clone, Debug, PartialEq)]
pub struct Demarche {
    pub jetons: String,
    pub postfix: String,
    /// Une ligne par atome : "atome │ [pile]".
    pub pile: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Resultat {
    pub valeur: f64,
    pub demarche: Demarche,
}

/// API publique : expression SANS espaces -> valeur.
pub fn compute_expression(expression: &str) -> Result<f64, EvaluationError> {
    let jetons = tokenize(expression)?;
    let postfix = to_postfix(&jetons)?;
    debug!(
        jetons = jetons.len(),
        postfix = postfix.len(),
        "expression convertie"
    );
    Ok(evaluate(&postfix)?)
}

/// Même pipeline que `compute_expression`, avec la démarche (jetons, postfix, pile).
pub fn eval_expression(expression: &str) -> Result<Resultat, EvaluationError> {
    // 1) Jetons
    let jetons = tokenize(expression)?;
    debug!(jetons = %format_tokens(&jetons), "étape 1 : jetons");

    // 2) Postfix
    let postfix = to_postfix(&jetons)?;
    debug!(postfix = %format_postfix(&postfix), "étape 2 : postfix");

    // 3) Machine à pile
    let (valeur, pile) = evaluate_trace(&postfix)?;
    debug!(valeur, "étape 3 : valeur");

    Ok(Resultat {
        valeur,
        demarche: Demarche {
            jetons: format_tokens(&jetons),
            postfix: format_postfix(&postfix),
            pile,
        },
    })
}

/// Étape de l’appelant (console / UI) : retire TOUS les blancs avant le noyau.
pub fn retire_espaces(ligne: &str) -> String {
    ligne.chars().filter(|c| !c.is_whitespace()).collect()
}
