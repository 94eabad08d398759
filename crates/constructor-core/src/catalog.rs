//! Hand-authored constructor sets.

use crate::constructor::Constructor;
use crate::error::ConstructorError;

/// `(name, energy, time, effect)` for the smoking scenario.
///
/// The first five push towards smoking, the last five away from it.
const SMOKING: &[(&str, f64, f64, f64)] = &[
    ("Peer Pressure", 2.0, 4.0, -5.0),
    ("Stress", 1.0, 4.0, -4.0),
    ("Addiction", 4.5, 4.0, -3.0),
    ("Advertisements", 4.0, 1.0, -2.0),
    ("Social Acceptance", 5.0, 4.5, -1.0),
    ("Health Awareness", 1.0, 1.0, 5.0),
    ("Support Groups", 2.0, 2.0, 4.0),
    ("Nicotine Patches", 3.0, 3.0, 3.0),
    ("Therapy", 4.0, 4.0, 2.0),
    ("Exercise", 2.0, 3.0, 1.0),
];

/// Behavioural factors around smoking, each acting on a single variable.
///
/// # Errors
///
/// Never fails for the built-in table; the `Result` carries cost
/// validation through.
pub fn smoking_constructors() -> Result<Vec<Constructor>, ConstructorError> {
    SMOKING
        .iter()
        .map(|&(name, energy, time, effect)| Constructor::named(name, energy, time, vec![effect]))
        .collect()
}
