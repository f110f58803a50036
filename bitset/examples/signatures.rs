//! Signature deduplication example
//!
//! Each candidate predicate is evaluated at a fixed set of sample points and
//! summarised by the bitset of points where it holds. Candidates with an
//! already-seen signature are redundant; coverage is complete once the union
//! of signatures is full.

use bitset::{BitSet, BitSetFactory, Result};
use hashbrown::HashMap;
use std::time::Instant;

fn main() -> Result<()> {
    let points: Vec<i64> = (-500..500).collect();
    let factory = BitSetFactory::new(points.len() as u64);
    println!("Sample points: {}", points.len());

    let start = Instant::now();
    let mut signature_to_candidate: HashMap<BitSet, String> = HashMap::new();
    let mut covered = factory.make()?;

    for modulus in 2..40i64 {
        for residue in 0..modulus {
            let name = format!("x mod {modulus} == {residue}");
            let signature = signature_of(&factory, &points, |x| x.rem_euclid(modulus) == residue)?;

            if signature.is_empty() || signature_to_candidate.contains_key(&signature) {
                continue;
            }
            covered.union_with_in_place(&signature)?;
            signature_to_candidate.insert(signature, name);
        }

        if covered.is_full() {
            println!("All points covered after moduli up to {modulus}");
            break;
        }
    }
    let elapsed = start.elapsed();

    println!(
        "Distinct signatures: {} (computed in {elapsed:?})",
        signature_to_candidate.len()
    );

    // Smallest signature that still contains point 0.
    let origin = points.iter().position(|&x| x == 0).unwrap_or(0) as u64;
    let narrowest = signature_to_candidate
        .iter()
        .filter(|(sig, _)| sig.test_bit(origin).unwrap_or(false))
        .min_by_key(|(sig, _)| sig.length());
    if let Some((sig, name)) = narrowest {
        println!("Narrowest candidate through 0: {name} ({} points)", sig.length());
    }
    Ok(())
}

/// Bitset of the points where `holds` is true
fn signature_of(
    factory: &BitSetFactory,
    points: &[i64],
    holds: impl Fn(i64) -> bool,
) -> Result<BitSet> {
    let mut signature = factory.make()?;
    for (i, &x) in points.iter().enumerate() {
        if holds(x) {
            signature.set_bit(i as u64)?;
        }
    }
    Ok(signature)
}
