// src/noyau/evaluateur.rs
//
// Machine à pile sur la suite postfix.
// - nombre        : empile
// - binaire       : dépile droite PUIS gauche, empile gauche op droite
// - '~' / sin/cos : dépile un, empile le résultat
// - fin           : exactement une valeur sur la pile

use tracing::trace;

use super::erreurs::EvalError;
use super::rpn::Atome;

/// Évalue une suite postfix.
pub fn evaluate(postfix: &[Atome]) -> Result<f64, EvalError> {
    executer(postfix, None)
}

/// Évalue une suite postfix donnée en texte (ex: ["3", "4", "+"]).
pub fn evaluate_textes<S: AsRef<str>>(postfix: &[S]) -> Result<f64, EvalError> {
    let atomes = postfix
        .iter()
        .map(|s| s.as_ref().parse::<Atome>())
        .collect::<Result<Vec<_>, _>>()?;
    evaluate(&atomes)
}

/// Comme `evaluate`, mais note l’état de la pile après chaque atome
/// (une ligne par atome, pour la démarche).
pub fn evaluate_trace(postfix: &[Atome]) -> Result<(f64, Vec<String>), EvalError> {
    let mut trace = Vec::with_capacity(postfix.len());
    let v = executer(postfix, Some(&mut trace))?;
    Ok((v, trace))
}

fn executer(postfix: &[Atome], mut trace: Option<&mut Vec<String>>) -> Result<f64, EvalError> {
    let mut pile: Vec<f64> = Vec::with_capacity(postfix.len());

    for atome in postfix {
        match atome {
            Atome::Num(s) => {
                let x = s
                    .parse::<f64>()
                    .map_err(|_| EvalError::NombreInvalide(s.clone()))?;
                pile.push(x);
            }

            Atome::Op(op) => {
                let (a, b) = match (pile.pop(), pile.pop()) {
                    (Some(b), Some(a)) => (a, b),
                    (droite, _) => {
                        return Err(EvalError::OperandeManquante {
                            atome: atome.to_string(),
                            attendus: 2,
                            trouves: usize::from(droite.is_some()),
                        })
                    }
                };
                pile.push(op.applique(a, b));
            }

            Atome::Neg => {
                let x = pile.pop().ok_or_else(|| manque_unaire(atome))?;
                pile.push(-x);
            }

            Atome::Func(f) => {
                let x = pile.pop().ok_or_else(|| manque_unaire(atome))?;
                pile.push(f.applique(x));
            }
        }

        trace!(%atome, pile = ?pile, "atome évalué");
        if let Some(t) = trace.as_deref_mut() {
            t.push(format!("{atome:>4} │ {}", format_pile(&pile)));
        }
    }

    match pile.as_slice() {
        [v] => Ok(*v),
        _ => Err(EvalError::ExpressionMalformee {
            restants: pile.len(),
        }),
    }
}

fn manque_unaire(atome: &Atome) -> EvalError {
    EvalError::OperandeManquante {
        atome: atome.to_string(),
        attendus: 1,
        trouves: 0,
    }
}

/// Nombre maximal de valeurs (le sommet) montrées par ligne de trace.
const TRACE_SOMMET: usize = 8;

fn format_pile(pile: &[f64]) -> String {
    let debut = pile.len().saturating_sub(TRACE_SOMMET);
    let elems: Vec<String> = pile[debut..].iter().map(|x| x.to_string()).collect();
    if debut > 0 {
        format!("[… {debut} de plus, {}]", elems.join(", "))
    } else {
        format!("[{}]", elems.join(", "))
    }
}
