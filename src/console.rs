// src/console.rs
//
// Appelant console (hors noyau)
// -----------------------------
// - bannière + invite
// - UNE ligne lue sur stdin
// - retrait de tous les blancs, puis noyau
// - résultat sur stdout, erreur sur stderr, code de sortie 0 / 1

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use calculatrice_shunting::noyau::{
    compute_expression, eval_expression, format_resultat, retire_espaces,
};
use calculatrice_shunting::EvaluationError;
use thiserror::Error;
use tracing::{debug, warn};

const VERT: &str = "\u{1b}[32m";
const GRAS: &str = "\u{1b}[1m";
const RAZ: &str = "\u{1b}[0m";

/// Réglages venus de la ligne de commande.
#[derive(Clone, Debug, Default)]
pub struct Reglages {
    /// Décimales affichées (None = forme la plus courte).
    pub chiffres: Option<usize>,
    /// Affiche jetons / postfix / pile avant le résultat.
    pub demarche: bool,
}

#[derive(Debug, Error)]
pub enum Echec {
    #[error("Entrée vide")]
    Vide,

    #[error(transparent)]
    Calcul(#[from] EvaluationError),

    #[error("lecture impossible : {0}")]
    Io(#[from] io::Error),
}

pub fn banniere(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{VERT}{GRAS}")?;
    writeln!(out, "╔═══════════════════════════╗")?;
    writeln!(out, "║ Shunting_Yard_Calculator! ║")?;
    writeln!(out, "╚═══════════════════════════╝")?;
    writeln!(out, "{RAZ}")
}

/// Lignes à imprimer pour une expression (démarche optionnelle + valeur).
pub fn rapport(ligne: &str, reglages: &Reglages) -> Result<Vec<String>, Echec> {
    let expr = retire_espaces(ligne);
    if expr.is_empty() {
        return Err(Echec::Vide);
    }
    debug!(%expr, "expression reçue");

    // la démarche (trace de pile) n’est construite que si on la demande
    if !reglages.demarche {
        let v = compute_expression(&expr)?;
        return Ok(vec![format_resultat(v, reglages.chiffres)]);
    }

    let r = eval_expression(&expr)?;
    let mut lignes = vec![
        format!("Jetons  : {}", r.demarche.jetons),
        format!("Postfix : {}", r.demarche.postfix),
        "Pile    :".to_string(),
    ];
    lignes.extend(r.demarche.pile.iter().map(|l| format!("  {l}")));
    lignes.push(format_resultat(r.valeur, reglages.chiffres));
    Ok(lignes)
}

/// Mode session : bannière, invite, une ligne lue sur `entree`.
pub fn session(
    entree: &mut impl BufRead,
    out: &mut impl Write,
    reglages: &Reglages,
) -> Result<Vec<String>, Echec> {
    banniere(out)?;
    writeln!(out, "Entrez votre expression :")?;
    out.flush()?;

    let mut ligne = String::new();
    entree.read_line(&mut ligne)?;
    rapport(&ligne, reglages)
}

/// Imprime le rapport (ou l’erreur) et traduit en code de sortie.
pub fn terminer(res: Result<Vec<String>, Echec>) -> ExitCode {
    match res {
        Ok(lignes) => {
            for l in lignes {
                println!("{l}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            warn!(erreur = %e, "évaluation refusée");
            eprintln!("Erreur : {e}");
            ExitCode::FAILURE
        }
    }
}
