// ----- Built-in ellipsoids ---------------------------------------------------------

/// The built-in ellipsoids: name, semimajor axis, reciprocal flattening, description.
/// By EPSG convention, a zero reciprocal flattening indicates zero flattening.
#[rustfmt::skip]
pub(crate) const ELLIPSOID_LIST: [(&str, f64, f64, &str); 9] = [
    ("GRS80",  6_378_137.0,   298.257_222_101,   "GRS 1980(IUGG, 1980)"),
    ("WGS84",  6_378_137.0,   298.257_223_563,   "WGS 84"),
    ("ANS",    6_378_160.0,   298.25,            "Australian Natl & S. Amer. 1969"),
    ("intl",   6_378_388.0,   297.0,             "International 1924 (Hayford 1909, 1910)"),
    ("bessel", 6_377_397.155, 299.152_812_8,     "Bessel 1841"),
    ("clrk66", 6_378_206.4,   294.978_698_2,     "Clarke 1866"),
    ("clrk80", 6_378_249.145, 293.465,           "Clarke 1880 mod."),
    ("airy",   6_377_563.396, 299.324_964_6,     "Airy 1830"),
    ("krass",  6_378_245.0,   298.3,             "Krassovsky, 1942"),
];
