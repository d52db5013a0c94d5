//! Noyau — erreurs
//!
//! Une erreur par étage du pipeline, plus l’union renvoyée par le point d’entrée.
//! Toutes sont fatales pour l’appel en cours (pas de résultat partiel, pas de reprise).

use thiserror::Error;

/// Étage 1 : caractère non reconnu pendant le balayage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("caractère inattendu '{caractere}' en position {position}")]
pub struct LexError {
    pub caractere: char,
    /// Indice (en caractères, à partir de 0) dans l’expression reçue.
    pub position: usize,
}

/// Étage 2 : structure invalide détectée pendant la conversion en postfix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("parenthèses déséquilibrées : ')' sans '(' correspondante")]
    ParentheseOrpheline,

    #[error("parenthèses déséquilibrées : '(' jamais fermée")]
    ParentheseNonFermee,
}

/// Étage 3 : violation d’arité ou atome illisible pendant l’évaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("opérande manquante pour '{atome}' ({trouves} sur {attendus})")]
    OperandeManquante {
        atome: String,
        attendus: usize,
        trouves: usize,
    },

    #[error("expression malformée ({restants} valeur(s) sur la pile au lieu d’une)")]
    ExpressionMalformee { restants: usize },

    #[error("nombre invalide : '{0}'")]
    NombreInvalide(String),

    #[error("atome inconnu : '{0}'")]
    AtomeInconnu(String),
}

/// Union des trois étages (retour de `compute_expression`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Syntaxe(#[from] SyntaxError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}
