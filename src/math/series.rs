/// Evaluate the polynomial `c[0] + c[1]·x + c[2]·x² + ...` using Horner's scheme.
/// The coefficients are given in order of increasing power.
pub fn horner(arg: f64, coefficients: &[f64]) -> f64 {
    let mut coefficients = coefficients.iter().rev();
    let Some(&first) = coefficients.next() else {
        return 0.;
    };
    let mut value = first;
    for c in coefficients {
        value = value.mul_add(arg, *c);
    }
    value
}

// ----- T E S T S ---------------------------------------------------------------------
