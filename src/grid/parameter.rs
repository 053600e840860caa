/// The `GridParameter` enumeration is used to represent which defining
/// parameters are valid in a grid definition.
///
/// Each entry gives the type of the parameter, and whether it is *required*
/// (in which case the provided default value is set to `None`), or *optional*
/// (in which case, a default value of the proper type is provided). The odd
/// man out here is the `Flag` type: Since a flag is a boolean which is true
/// if present and false if not, it does not make much sense to provide a
/// default in this case.
///
/// Any other parameters given are ignored, but warned about.
///
/// The set of accepted parameters is called the *gamut* of the definition.
#[derive(Debug)]
pub enum GridParameter {
    /// A flag is a boolean that is true if present, false if not
    Flag { key: &'static str },
    /// Reals (𝐑 in math terms)
    Real {
        key: &'static str,
        default: Option<f64>,
    },
    /// Any kind of text
    Text {
        key: &'static str,
        default: Option<&'static str>,
    },
}
