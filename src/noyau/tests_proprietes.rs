//! Tests de propriétés (campagne) : le contrat observable du pipeline.
//!
//! Notes importantes (choix assumés du noyau) :
//! - '^' est associatif à GAUCHE : 2^3^2 = (2^3)^2 = 64, pas 512.
//!   Contraire à l’usage mathématique courant, mais c’est la règle de dépilement (>=).
//! - '%' est supporté (reste flottant, signe de l’opérande gauche).
//! - '(' jamais fermée : toujours une SyntaxError, jamais ignorée.
//! - Division par zéro : ∞ / NaN (IEEE-754), pas une erreur.

use pretty_assertions::assert_eq;

use super::erreurs::{EvalError, EvaluationError, SyntaxError};
use super::{compute_expression, evaluate_textes, retire_espaces, to_postfix, tokenize};

const TOLERANCE: f64 = 1e-9;

fn ok(expr: &str) -> f64 {
    compute_expression(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_valeur(expr: &str, attendu: f64) {
    let v = ok(expr);
    assert!(
        (v - attendu).abs() < TOLERANCE,
        "expr={expr:?} : {v} au lieu de {attendu}"
    );
}

fn assert_syntaxe(expr: &str) {
    match compute_expression(expr) {
        Err(EvaluationError::Syntaxe(_)) => {}
        autre => panic!("expr={expr:?} : SyntaxError attendue, obtenu {autre:?}"),
    }
}

fn assert_eval(expr: &str) {
    match compute_expression(expr) {
        Err(EvaluationError::Eval(_)) => {}
        autre => panic!("expr={expr:?} : EvalError attendue, obtenu {autre:?}"),
    }
}

/* ------------------------ Arithmétique usuelle ------------------------ */

#[test]
fn prop_arithmetique_usuelle() {
    assert_valeur("1+2", 3.0);
    assert_valeur("2*(3+4)", 14.0);
    assert_valeur("((2))", 2.0);
    assert_valeur("1/3*3", 1.0);
    assert_valeur("100/(2*5)-3", 7.0);
    assert_valeur("0.1+0.2", 0.3);
    assert_valeur("(1+2)*(3+4)/(5-2)", 7.0);
}

/* ------------------------ Associativité ------------------------ */

#[test]
fn prop_soustraction_associative_a_gauche() {
    assert_valeur("8-3-2", 3.0);
    assert_valeur("16/4/2", 2.0);
}

#[test]
fn prop_puissance_associative_a_gauche() {
    assert_valeur("2^3^2", 64.0);
    assert_valeur("2^(3^2)", 512.0);
}

/* ------------------------ Moins unaire ------------------------ */

#[test]
fn prop_moins_unaire() {
    assert_valeur("-3+4", 1.0);
    assert_valeur("4*-3", -12.0);
    assert_valeur("(-3)", -3.0);
    assert_valeur(&retire_espaces("3 - -3"), 6.0);
    assert_valeur("2^-1", 0.5);
}

#[test]
fn prop_double_moins_en_tete_refuse() {
    // "--3" : "~" puis '-' BINAIRE (le dernier jeton n’est ni '(' ni un opérateur)
    assert_eval("--3");
}

/* ------------------------ Fonctions ------------------------ */

#[test]
fn prop_fonctions_operande_immediate() {
    assert_valeur("sin(0)", 0.0);
    assert_valeur("cos(0)", 1.0);
    assert_valeur("sin(0)+cos(0)*2", 2.0);
    assert_valeur("sin0", 0.0);
}

/* ------------------------ Modulo ------------------------ */

#[test]
fn prop_modulo() {
    assert_valeur("7%3", 1.0);
    assert_valeur("-7%3", -1.0);
    assert_valeur("2+9%4", 3.0);
}

/* ------------------------ Cas numériques tolérés ------------------------ */

#[test]
fn prop_division_par_zero_ieee() {
    assert_eq!(ok("1/0"), f64::INFINITY);
    assert_eq!(ok("-1/0"), f64::NEG_INFINITY);
    assert!(ok("0/0").is_nan());
    assert!(ok("1%0").is_nan());
}

/* ------------------------ Malformés ------------------------ */

#[test]
fn prop_parentheses_desequilibrees() {
    assert_syntaxe("(1+2");
    assert_syntaxe("1+2)");
    assert_syntaxe("(");
    assert_syntaxe(")");
    assert_syntaxe("sin(1");
}

#[test]
fn prop_arite() {
    assert_eval("+");
    assert_eval("1+");
    assert_eval("*2");
    assert_eval("sin()");
    assert_eval("2(3)");
    assert_eval("()");
}

#[test]
fn prop_parenthese_non_fermee_jamais_ignoree() {
    assert_eq!(
        compute_expression("((1+2)"),
        Err(EvaluationError::Syntaxe(SyntaxError::ParentheseNonFermee))
    );
}

/* ------------------------ Idempotence + postfix ------------------------ */

#[test]
fn prop_idempotence() {
    for expr in ["3+4*2", "2^3^2", "sin(1)/cos(1)", "1/0", "-7%3"] {
        let a = compute_expression(expr);
        let b = compute_expression(expr);
        assert_eq!(a, b, "expr={expr:?}");
    }
    // les erreurs aussi
    assert_eq!(compute_expression("(1"), compute_expression("(1"));
}

#[test]
fn prop_postfix_exact() {
    let jetons = tokenize("3+4*2").unwrap();
    let postfix: Vec<String> = to_postfix(&jetons)
        .unwrap()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(postfix, ["3", "4", "2", "*", "+"]);

    // la suite textuelle se réévalue telle quelle
    assert_eq!(evaluate_textes(&postfix), Ok(11.0));
}

#[test]
fn prop_postfix_textuel_inconnu() {
    assert_eq!(
        evaluate_textes(&["2", "pi", "*"]),
        Err(EvalError::AtomeInconnu("pi".into()))
    );
}
