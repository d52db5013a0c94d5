// src/noyau/jetons.rs

use super::erreurs::LexError;

/// Opérateurs binaires (résolus une seule fois, au balayage).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Minus,
    Star,
    Slash,
    Percent, // modulo flottant
    Caret,   // ^
}

impl Op {
    pub fn depuis_char(c: char) -> Option<Op> {
        match c {
            '+' => Some(Op::Plus),
            '-' => Some(Op::Minus),
            '*' => Some(Op::Star),
            '/' => Some(Op::Slash),
            '%' => Some(Op::Percent),
            '^' => Some(Op::Caret),
            _ => None,
        }
    }

    pub fn symbole(self) -> &'static str {
        match self {
            Op::Plus => "+",
            Op::Minus => "-",
            Op::Star => "*",
            Op::Slash => "/",
            Op::Percent => "%",
            Op::Caret => "^",
        }
    }

    pub fn precedence(self) -> u8 {
        match self {
            Op::Plus | Op::Minus => 1,
            Op::Star | Op::Slash | Op::Percent => 2,
            Op::Caret => 3,
        }
    }

    /// `a` = opérande gauche, `b` = opérande droite.
    /// Division / modulo par zéro : sémantique IEEE-754 (∞, NaN), pas d’erreur.
    pub fn applique(self, a: f64, b: f64) -> f64 {
        match self {
            Op::Plus => a + b,
            Op::Minus => a - b,
            Op::Star => a * b,
            Op::Slash => a / b,
            Op::Percent => a % b,
            Op::Caret => a.powf(b),
        }
    }
}

/// Fonctions unaires reconnues (argument en radians).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Func {
    Sin,
    Cos,
}

impl Func {
    pub const TOUTES: [Func; 2] = [Func::Sin, Func::Cos];

    pub fn nom(self) -> &'static str {
        match self {
            Func::Sin => "sin",
            Func::Cos => "cos",
        }
    }

    pub fn depuis_nom(nom: &str) -> Option<Func> {
        Func::TOUTES.into_iter().find(|f| f.nom() == nom)
    }

    pub fn applique(self, x: f64) -> f64 {
        match self {
            Func::Sin => x.sin(),
            Func::Cos => x.cos(),
        }
    }
}

/// Marqueur textuel du moins unaire.
pub const MARQUEUR_NEG: &str = "~";

/// Genre d’un jeton (sans sa charge).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Genre {
    Nombre,
    Operateur,
    ParOuvrante,
    ParFermante,
    MoinsUnaire,
    Fonction,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    // littéral tel que lu : \d+\.?\d*
    Num(String),
    Op(Op),
    LPar,
    RPar,
    // moins unaire, noté "~"
    Neg,
    Func(Func),
}

impl Tok {
    pub fn genre(&self) -> Genre {
        match self {
            Tok::Num(_) => Genre::Nombre,
            Tok::Op(_) => Genre::Operateur,
            Tok::LPar => Genre::ParOuvrante,
            Tok::RPar => Genre::ParFermante,
            Tok::Neg => Genre::MoinsUnaire,
            Tok::Func(_) => Genre::Fonction,
        }
    }

    pub fn texte(&self) -> &str {
        match self {
            Tok::Num(s) => s,
            Tok::Op(op) => op.symbole(),
            Tok::LPar => "(",
            Tok::RPar => ")",
            Tok::Neg => MARQUEUR_NEG,
            Tok::Func(f) => f.nom(),
        }
    }
}

/// Désambiguïsation du '-' : unaire en tête, après '(' ou après un opérateur.
/// On regarde le dernier JETON émis, pas le dernier caractère.
pub(super) fn moins_contextuel(dernier: Option<&Tok>) -> Tok {
    match dernier {
        None | Some(Tok::LPar) | Some(Tok::Op(_)) => Tok::Neg,
        Some(_) => Tok::Op(Op::Minus),
    }
}

/// Tokenize une chaîne SANS espaces (l’appelant les a retirés).
/// Supporte:
/// - nombres décimaux \d+\.?\d* (ex: 12, 3.5, 7.)
/// - fonctions sin, cos (mot entier, essayé avant les opérateurs)
/// - opérateurs + - * / % ^ ('-' unaire => "~")
/// - parenthèses ( )
pub fn tokenize(s: &str) -> Result<Vec<Tok>, LexError> {
    let mut out: Vec<Tok> = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        // Nombre : chiffres, puis au plus un '.', puis chiffres
        if c.is_ascii_digit() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            if i < chars.len() && chars[i] == '.' {
                i += 1;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
            }
            out.push(Tok::Num(chars[start..i].iter().collect()));
            continue;
        }

        // Fonctions (mot entier)
        if let Some(f) = fonction_en(&chars, i) {
            out.push(Tok::Func(f));
            i += f.nom().len();
            continue;
        }

        match c {
            '(' => out.push(Tok::LPar),
            ')' => out.push(Tok::RPar),
            '-' => {
                let t = moins_contextuel(out.last());
                out.push(t);
            }
            _ => match Op::depuis_char(c) {
                Some(op) => out.push(Tok::Op(op)),
                None => {
                    return Err(LexError {
                        caractere: c,
                        position: i,
                    })
                }
            },
        }
        i += 1;
    }

    Ok(out)
}

fn fonction_en(chars: &[char], i: usize) -> Option<Func> {
    Func::TOUTES.into_iter().find(|f| {
        let nom = f.nom();
        chars.len() >= i + nom.len() && chars[i..i + nom.len()].iter().copied().eq(nom.chars())
    })
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens.iter().map(Tok::texte).collect::<Vec<_>>().join(" ")
}
