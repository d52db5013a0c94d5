//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : la valeur calculée == la valeur de référence construite
//!   en même temps que l’expression (tout est parenthésé, donc aucun choix
//!   d’associativité ne s’en mêle)
//! - les deux balayages (manuel / motifs) s’accordent toujours

use std::time::{Duration, Instant};

use super::erreurs::EvaluationError;
use super::{compute_expression, tokenize, tokenize_motif};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

const NOMBRES: [(&str, f64); 8] = [
    ("0", 0.0),
    ("1", 1.0),
    ("2", 2.0),
    ("3", 3.0),
    ("10", 10.0),
    ("0.5", 0.5),
    ("2.", 2.0),
    ("3.25", 3.25),
];

fn gen_nombre(rng: &mut Rng) -> (String, f64) {
    let (s, v) = NOMBRES[rng.pick(NOMBRES.len() as u32) as usize];
    (s.to_string(), v)
}

/// Expression + valeur de référence.
fn gen_expr(rng: &mut Rng, depth: usize) -> (String, f64) {
    if depth == 0 {
        return gen_nombre(rng);
    }

    let binaire = |rng: &mut Rng, sym: char, f: fn(f64, f64) -> f64| {
        let (a, va) = gen_expr(rng, depth - 1);
        let (b, vb) = gen_expr(rng, depth - 1);
        (format!("({a}{sym}{b})"), f(va, vb))
    };

    match rng.pick(10) {
        0 => gen_nombre(rng),
        1 => binaire(rng, '+', |a, b| a + b),
        2 => binaire(rng, '-', |a, b| a - b),
        3 => binaire(rng, '*', |a, b| a * b),
        4 => binaire(rng, '/', |a, b| a / b),
        5 => binaire(rng, '%', |a, b| a % b),
        6 => {
            // exposant borné (sinon ∞ partout)
            let (a, va) = gen_expr(rng, depth - 1);
            let (b, vb) = gen_nombre(rng);
            (format!("({a}^{b})"), va.powf(vb))
        }
        7 => {
            let (a, va) = gen_expr(rng, depth - 1);
            (format!("(-{a})"), -va)
        }
        8 => {
            let (a, va) = gen_expr(rng, depth - 1);
            (format!("sin({a})"), va.sin())
        }
        _ => {
            let (a, va) = gen_expr(rng, depth - 1);
            (format!("cos({a})"), va.cos())
        }
    }
}

/// Chaîne arbitraire sur un alphabet qui mélange valide et invalide.
fn gen_bruit(rng: &mut Rng, len: usize) -> String {
    const ALPHABET: &[&str] = &[
        "1", "2", ".", "+", "-", "*", "/", "%", "^", "(", ")", "sin", "cos", "s", "x", " ", "é",
    ];
    (0..len)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

fn meme_valeur(v: f64, reference: f64) -> bool {
    (v.is_nan() && reference.is_nan()) || v == reference
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_valeur_de_reference() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let mut rng = Rng::new(0xC0FFEE_u64);

    for _ in 0..300 {
        budget(t0, max);

        let (expr, reference) = gen_expr(&mut rng, 5);
        assert_eq!(tokenize(&expr), tokenize_motif(&expr), "expr={expr:?}");
        let v = compute_expression(&expr)
            .unwrap_or_else(|e| panic!("expr={expr:?} erreur inattendue: {e}"));
        assert!(
            meme_valeur(v, reference),
            "expr={expr:?} : {v} au lieu de {reference}"
        );
    }
}

#[test]
fn fuzz_safe_determinisme() {
    let mut a = Rng::new(0xBADC0DE_u64);
    let mut b = Rng::new(0xBADC0DE_u64);

    for _ in 0..100 {
        let (ea, _) = gen_expr(&mut a, 4);
        let (eb, _) = gen_expr(&mut b, 4);
        assert_eq!(ea, eb);

        let r1 = compute_expression(&ea);
        let r2 = compute_expression(&eb);
        match (r1, r2) {
            (Ok(x), Ok(y)) => assert!(meme_valeur(x, y), "expr={ea:?}"),
            (r1, r2) => assert_eq!(r1, r2, "expr={ea:?}"),
        }
    }
}

#[test]
fn fuzz_safe_bruit_sans_panique_et_balayages_d_accord() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let mut rng = Rng::new(0x5EED_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let len = 1 + rng.pick(12) as usize;
        let expr = gen_bruit(&mut rng, len);

        assert_eq!(tokenize(&expr), tokenize_motif(&expr), "expr={expr:?}");

        match compute_expression(&expr) {
            Ok(_) => seen_ok += 1,
            Err(EvaluationError::Lex(_) | EvaluationError::Syntaxe(_) | EvaluationError::Eval(_)) => {
                seen_err += 1
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 0, "aucun succès: bruit trop “sale”");
    assert!(seen_err > 0, "aucune erreur vue: bruit trop “sage”");
}

#[test]
fn fuzz_safe_longue_somme_sans_recursion() {
    let t0 = Instant::now();
    let max = Duration::from_secs(1);

    // la machine à pile est itérative : une somme longue ne fait pas déborder la pile
    let expr = vec!["0.5"; 20_000].join("+");
    let v = compute_expression(&expr).unwrap_or_else(|e| panic!("err: {e}"));
    budget(t0, max);

    assert_eq!(v, 10_000.0);
}

#[test]
fn fuzz_safe_parentheses_profondes() {
    let profondeur = 5_000;
    let expr = format!("{}1{}", "(".repeat(profondeur), ")".repeat(profondeur));
    assert_eq!(compute_expression(&expr), Ok(1.0));
}
