//! Fixed lookup tables.
//!
//! All tables are `static` and read-only. Values are reproduced exactly;
//! they are domain constants, not derived.

/// A numeric-keyed table with strictly increasing keys.
#[derive(Debug)]
pub struct NumericTable {
    name: &'static str,
    entries: &'static [(f64, f64)],
}

impl NumericTable {
    const fn new(name: &'static str, entries: &'static [(f64, f64)]) -> Self {
        Self { name, entries }
    }

    /// Table name used in diagnostics and logs.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// All `(key, value)` pairs in key order.
    #[inline]
    pub const fn entries(&self) -> &'static [(f64, f64)] {
        self.entries
    }

    /// Keys in increasing order.
    pub fn keys(&self) -> impl Iterator<Item = f64> + 'static {
        self.entries.iter().map(|&(k, _)| k)
    }

    /// Number of entries.
    #[inline]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Smallest key, or `None` for an empty table.
    pub fn min_key(&self) -> Option<f64> {
        self.entries.first().map(|&(k, _)| k)
    }

    /// Largest key, or `None` for an empty table.
    pub fn max_key(&self) -> Option<f64> {
        self.entries.last().map(|&(k, _)| k)
    }

    /// Exact-key lookup. No interpolation.
    pub fn get(&self, key: f64) -> Option<f64> {
        let idx = self.entries.partition_point(|&(k, _)| k < key);
        match self.entries.get(idx) {
            Some(&(k, v)) if k == key => Some(v),
            _ => None,
        }
    }
}

/// A text-keyed table.
#[derive(Debug)]
pub struct TextTable {
    name: &'static str,
    entries: &'static [(&'static str, f64)],
}

impl TextTable {
    const fn new(name: &'static str, entries: &'static [(&'static str, f64)]) -> Self {
        Self { name, entries }
    }

    /// Table name used in diagnostics and logs.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Value stored for `key`, if present.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|&&(k, _)| k == key)
            .map(|&(_, v)| v)
    }

    /// Returns true if `key` is present.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// All keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + 'static {
        self.entries.iter().map(|&(k, _)| k)
    }

    /// Number of entries.
    #[inline]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Table `U`: keys -5.0 ..= 5.0 in steps of 0.5.
pub static U: NumericTable = NumericTable::new(
    "U",
    &[
        (-5.0, 0.2801),
        (-4.5, 0.2093),
        (-4.0, 0.6190),
        (-3.5, 0.8811),
        (-3.0, 1.0422),
        (-2.5, 1.1463),
        (-2.0, 1.2176),
        (-1.5, 1.2560),
        (-1.0, 1.1998),
        (-0.5, 1.1209),
        (0.0, 1.0039),
        (0.5, 0.8196),
        (1.0, 0.5187),
        (1.5, 0.0707),
        (2.0, 0.4054),
        (2.5, 0.7487),
        (3.0, 0.9605),
        (3.5, 1.0962),
        (4.0, 1.1803),
        (4.5, 1.2418),
        (5.0, 1.2338),
    ],
);

/// Table `T`: keys -10.0 ..= 10.0 in steps of 1.0.
///
/// Keys shared with [`U`] carry the same values. The entry at 3.0 is 0.9605,
/// matching `U`; an older copy of this table had 0.9603 there.
pub static T: NumericTable = NumericTable::new(
    "T",
    &[
        (-10.0, 0.7832),
        (-9.0, 1.1063),
        (-8.0, 1.2486),
        (-7.0, 1.1587),
        (-6.0, 0.9105),
        (-5.0, 0.2801),
        (-4.0, 0.6190),
        (-3.0, 1.0422),
        (-2.0, 1.2176),
        (-1.0, 1.1998),
        (0.0, 1.0039),
        (1.0, 0.5187),
        (2.0, 0.4054),
        (3.0, 0.9605),
        (4.0, 1.1803),
        (5.0, 1.2338),
        (6.0, 1.0761),
        (7.0, 0.7068),
        (8.0, 0.1450),
        (9.0, 0.8533),
        (10.0, 1.1347),
    ],
);

/// Text table `Gtext`.
pub static GTEXT: TextTable = TextTable::new(
    "Gtext",
    &[
        ("aet", 1.175),
        ("bet", 1.278),
        ("cet", 1.381),
        ("set", 1.484),
        ("get", 1.587),
        ("ret", 1.690),
        ("het", 1.793),
        ("met", 1.896),
        ("net", 1.999),
        ("qet", 2.102),
        ("tet", 2.205),
        ("wet", 2.308),
        ("yet", 2.411),
        ("oet", 2.617),
        ("pet", 2.720),
        ("det", 2.823),
        ("fet", 2.926),
        ("let", 3.029),
        ("zet", 3.132),
        ("xet", 3.235),
    ],
);
