//! Process-wide unit registry
//!
//! Maps unit tokens (canonical symbols plus spelled-out aliases) to their
//! dimension and scale factor into SI base units. The table is built once on
//! first use behind a `OnceLock` and never mutated afterwards, so concurrent
//! lookups need no locking.
//!
//! Prefixed units (mm, kN, …) are registered explicitly rather than derived by
//! a generic prefix engine; an unknown token is a crisp parse failure instead
//! of an accidental match.

use rustc_hash::FxHashMap;
use std::sync::OnceLock;

use crate::units::dimension::Dimension;

/// A resolved unit token: scale into SI base units plus dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitDef {
    /// Multiplicative factor into the SI base representation.
    pub factor: f64,
    /// Physical dimension of the unit.
    pub dim: Dimension,
}

/// Registry table type.
type Table = FxHashMap<&'static str, UnitDef>;

static REGISTRY: OnceLock<Table> = OnceLock::new();

/// Look up a unit token.
///
/// Matching is exact first (`N`, `Pa`, `kg`), then case-insensitive for the
/// spelled-out aliases (`Newton`, `GRAMS`). Returns `None` for unknown tokens.
pub fn lookup(token: &str) -> Option<UnitDef> {
    let table = REGISTRY.get_or_init(build_table);
    if let Some(def) = table.get(token) {
        return Some(*def);
    }
    // Symbols are case-sensitive (mm vs Mm would differ); long-form aliases
    // are not. Only retry tokens long enough to be words.
    if token.len() > 3 {
        let lowered = token.to_ascii_lowercase();
        return table.get(lowered.as_str()).copied();
    }
    None
}

fn insert(table: &mut Table, names: &[&'static str], factor: f64, dim: Dimension) {
    for name in names {
        table.insert(name, UnitDef { factor, dim });
    }
}

fn build_table() -> Table {
    let mut t = Table::default();

    // Mass (base: kilogram)
    insert(&mut t, &["kg", "kilogram", "kilograms"], 1.0, Dimension::MASS);
    insert(&mut t, &["g", "gram", "grams"], 1e-3, Dimension::MASS);
    insert(&mut t, &["mg", "milligram", "milligrams"], 1e-6, Dimension::MASS);
    insert(&mut t, &["t", "tonne", "tonnes"], 1e3, Dimension::MASS);
    insert(&mut t, &["lb", "lbs", "pound", "pounds"], 0.45359237, Dimension::MASS);
    insert(&mut t, &["oz", "ounce", "ounces"], 0.028349523125, Dimension::MASS);

    // Length (base: meter)
    insert(&mut t, &["m", "meter", "meters", "metre", "metres"], 1.0, Dimension::LENGTH);
    insert(&mut t, &["km", "kilometer", "kilometers"], 1e3, Dimension::LENGTH);
    insert(&mut t, &["cm", "centimeter", "centimeters"], 1e-2, Dimension::LENGTH);
    insert(&mut t, &["mm", "millimeter", "millimeters"], 1e-3, Dimension::LENGTH);
    insert(&mut t, &["um", "micrometer", "micrometers"], 1e-6, Dimension::LENGTH);
    insert(&mut t, &["in", "inch", "inches"], 0.0254, Dimension::LENGTH);
    insert(&mut t, &["ft", "foot", "feet"], 0.3048, Dimension::LENGTH);
    insert(&mut t, &["mi", "mile", "miles"], 1609.344, Dimension::LENGTH);

    // Time (base: second)
    insert(&mut t, &["s", "sec", "second", "seconds"], 1.0, Dimension::TIME);
    insert(&mut t, &["ms", "millisecond", "milliseconds"], 1e-3, Dimension::TIME);
    insert(&mut t, &["min", "minute", "minutes"], 60.0, Dimension::TIME);
    insert(&mut t, &["h", "hr", "hour", "hours"], 3600.0, Dimension::TIME);
    insert(&mut t, &["day", "days"], 86400.0, Dimension::TIME);

    // Current, temperature, amount, luminosity (base units only; affine
    // temperature scales like Celsius are deliberately absent, see DESIGN.md)
    insert(&mut t, &["A", "ampere", "amperes", "amp", "amps"], 1.0, Dimension::CURRENT);
    insert(&mut t, &["K", "kelvin"], 1.0, Dimension::TEMPERATURE);
    insert(&mut t, &["mol", "mole", "moles"], 1.0, Dimension::AMOUNT);
    insert(&mut t, &["cd", "candela", "candelas"], 1.0, Dimension::LUMINOSITY);

    // Force (kg·m/s²)
    insert(&mut t, &["N", "newton", "newtons"], 1.0, Dimension::FORCE);
    insert(&mut t, &["kN", "kilonewton", "kilonewtons"], 1e3, Dimension::FORCE);
    insert(&mut t, &["dyn", "dyne", "dynes"], 1e-5, Dimension::FORCE);
    insert(&mut t, &["lbf"], 4.4482216152605, Dimension::FORCE);

    // Energy (kg·m²/s²)
    insert(&mut t, &["J", "joule", "joules"], 1.0, Dimension::ENERGY);
    insert(&mut t, &["kJ", "kilojoule", "kilojoules"], 1e3, Dimension::ENERGY);
    insert(&mut t, &["cal", "calorie", "calories"], 4.184, Dimension::ENERGY);
    insert(&mut t, &["kcal", "kilocalorie", "kilocalories"], 4184.0, Dimension::ENERGY);

    // Power (kg·m²/s³)
    insert(&mut t, &["W", "watt", "watts"], 1.0, Dimension::POWER);
    insert(&mut t, &["kW", "kilowatt", "kilowatts"], 1e3, Dimension::POWER);

    // Pressure (kg/(m·s²))
    insert(&mut t, &["Pa", "pascal", "pascals"], 1.0, Dimension::PRESSURE);
    insert(&mut t, &["kPa", "kilopascal", "kilopascals"], 1e3, Dimension::PRESSURE);
    insert(&mut t, &["bar"], 1e5, Dimension::PRESSURE);
    insert(&mut t, &["atm", "atmosphere", "atmospheres"], 101325.0, Dimension::PRESSURE);

    // Frequency (1/s)
    insert(&mut t, &["Hz", "hertz"], 1.0, Dimension::FREQUENCY);

    // Volume (m³)
    insert(&mut t, &["L", "l", "liter", "liters", "litre", "litres"], 1e-3, Dimension::VOLUME);
    insert(&mut t, &["mL", "ml", "milliliter", "milliliters"], 1e-6, Dimension::VOLUME);

    t
}
