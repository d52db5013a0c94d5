// src/noyau/rpn.rs
//
// Shunting-yard -> postfix (RPN)
//
// Règles:
// - Nombre : sortie directe
// - Opérateur binaire : dépile tant que le sommet n’est pas '(' et que
//   précédence(sommet) >= précédence(entrant), puis empile.
//   => TOUS les binaires sont associatifs à gauche, '^' compris : 2^3^2 = (2^3)^2.
// - '~' et fonctions : empilés sans condition (liés à l’opérande qui suit,
//   l’arité est vérifiée à l’évaluation, pas ici)
// - ')' sans '(' et '(' jamais fermée : SyntaxError

use std::fmt;
use std::str::FromStr;

use super::erreurs::{EvalError, SyntaxError};
use super::jetons::{Func, Op, Tok, MARQUEUR_NEG};

/// Atome de la suite postfix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Atome {
    Num(String),
    Op(Op),
    Neg,
    Func(Func),
}

impl fmt::Display for Atome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Atome::Num(s) => f.pad(s),
            Atome::Op(op) => f.pad(op.symbole()),
            Atome::Neg => f.pad(MARQUEUR_NEG),
            Atome::Func(func) => f.pad(func.nom()),
        }
    }
}

/// Relecture d’un atome textuel (suite postfix fournie en chaînes).
/// Le nombre n’est pas validé ici : l’évaluateur s’en charge.
impl FromStr for Atome {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == MARQUEUR_NEG {
            return Ok(Atome::Neg);
        }
        if let Some(f) = Func::depuis_nom(s) {
            return Ok(Atome::Func(f));
        }
        let mut it = s.chars();
        if let (Some(c), None) = (it.next(), it.next()) {
            if let Some(op) = Op::depuis_char(c) {
                return Ok(Atome::Op(op));
            }
        }
        if s.starts_with(|c: char| c.is_ascii_digit()) {
            return Ok(Atome::Num(s.to_string()));
        }
        Err(EvalError::AtomeInconnu(s.to_string()))
    }
}

/// Élément de la pile d’opérateurs : jamais un nombre ni une ')'.
#[derive(Clone, Copy, Debug)]
enum Attente {
    LPar,
    Op(Op),
    Neg,
    Func(Func),
}

impl Attente {
    fn precedence(self) -> u8 {
        match self {
            Attente::Op(op) => op.precedence(),
            Attente::Neg => 4,
            Attente::Func(_) => 5,
            Attente::LPar => 0,
        }
    }

    /// `None` pour '(' : elle ne sort jamais dans la suite postfix.
    fn vers_atome(self) -> Option<Atome> {
        match self {
            Attente::Op(op) => Some(Atome::Op(op)),
            Attente::Neg => Some(Atome::Neg),
            Attente::Func(f) => Some(Atome::Func(f)),
            Attente::LPar => None,
        }
    }
}

/// Convertit une suite de jetons en postfix (notation polonaise inversée).
///
/// Exemple:
///   tokens:  3 + 4 * 2
///   postfix: 3 4 2 * +
pub fn to_postfix(tokens: &[Tok]) -> Result<Vec<Atome>, SyntaxError> {
    let mut out: Vec<Atome> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Attente> = Vec::new();

    for tok in tokens {
        match tok {
            Tok::Num(s) => out.push(Atome::Num(s.clone())),

            Tok::Op(op) => {
                while let Some(&top) = ops.last() {
                    let Some(atome) = top.vers_atome() else {
                        break;
                    };
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    ops.pop();
                    out.push(atome);
                }
                ops.push(Attente::Op(*op));
            }

            Tok::LPar => ops.push(Attente::LPar),
            Tok::Neg => ops.push(Attente::Neg),
            Tok::Func(f) => ops.push(Attente::Func(*f)),

            Tok::RPar => loop {
                match ops.pop().map(Attente::vers_atome) {
                    Some(Some(atome)) => out.push(atome),
                    Some(None) => break,
                    None => return Err(SyntaxError::ParentheseOrpheline),
                }
            },
        }
    }

    // vide la pile ops (LIFO) ; une '(' restante n’a jamais été fermée
    while let Some(t) = ops.pop() {
        out.push(t.vers_atome().ok_or(SyntaxError::ParentheseNonFermee)?);
    }

    Ok(out)
}

/// Format utilitaire (démarche) : suite postfix en texte.
pub fn format_postfix(postfix: &[Atome]) -> String {
    postfix
        .iter()
        .map(Atome::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
