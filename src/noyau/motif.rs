//! Noyau — jetons par motifs (grammaire déclarative)
//!
//! Même grammaire que `jetons::tokenize`, exprimée en motifs `logos`.
//! Les deux balayages doivent produire les mêmes jetons et, en cas d’échec,
//! désigner le même caractère à la même position.

use logos::Logos;

use super::erreurs::LexError;
use super::jetons::{moins_contextuel, Func, Op, Tok};

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
enum Motif {
    #[regex(r"[0-9]+\.?[0-9]*")]
    Nombre,

    #[token("sin")]
    Sin,
    #[token("cos")]
    Cos,

    #[token("+")]
    Plus,
    #[token("-")]
    Moins,
    #[token("*")]
    Fois,
    #[token("/")]
    Divise,
    #[token("%")]
    Modulo,
    #[token("^")]
    Puissance,

    #[token("(")]
    ParG,
    #[token(")")]
    ParD,
}

/// Variante déclarative de `tokenize` (mêmes entrées, mêmes sorties).
pub fn tokenize_motif(s: &str) -> Result<Vec<Tok>, LexError> {
    let mut out: Vec<Tok> = Vec::new();
    let mut lex = Motif::lexer(s);

    while let Some(res) = lex.next() {
        let motif = match res {
            Ok(m) => m,
            Err(()) => {
                let debut = lex.span().start;
                return Err(LexError {
                    caractere: s[debut..].chars().next().unwrap_or_default(),
                    position: s[..debut].chars().count(),
                });
            }
        };

        let tok = match motif {
            Motif::Nombre => Tok::Num(lex.slice().to_string()),
            Motif::Sin => Tok::Func(Func::Sin),
            Motif::Cos => Tok::Func(Func::Cos),
            Motif::Plus => Tok::Op(Op::Plus),
            Motif::Moins => moins_contextuel(out.last()),
            Motif::Fois => Tok::Op(Op::Star),
            Motif::Divise => Tok::Op(Op::Slash),
            Motif::Modulo => Tok::Op(Op::Percent),
            Motif::Puissance => Tok::Op(Op::Caret),
            Motif::ParG => Tok::LPar,
            Motif::ParD => Tok::RPar,
        };
        out.push(tok);
    }

    Ok(out)
}
