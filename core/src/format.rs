//! Display helpers shared by the components.

/// Prefix for every element id that belongs to a VM.
pub fn vm_id(vm_name: &str) -> String {
    format!("vm-{}", vm_name)
}

/// Rounds half away from zero to `precision` decimal places.
pub fn to_fixed_precision(value: f64, precision: i32) -> f64 {
    let power = 10f64.powi(precision);
    let result = (value.abs() * power).round() / power;
    if value < 0.0 {
        -result
    } else {
        result
    }
}

/// `value` rounded like [`to_fixed_precision`] and printed with exactly
/// `precision` decimals, e.g. `50.0` or `1.00`.
pub fn to_fixed_string(value: f64, precision: usize) -> String {
    let rounded = to_fixed_precision(value, precision as i32);
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{:.*}", precision, rounded)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    B,
    KiB,
    MiB,
    GiB,
    TiB,
}

impl Unit {
    fn exponent(self) -> i32 {
        match self {
            Unit::B => 0,
            Unit::KiB => 1,
            Unit::MiB => 2,
            Unit::GiB => 3,
            Unit::TiB => 4,
        }
    }
}

/// Converts `amount` of `unit` to gigabytes (1024 based), two decimals.
pub fn to_gigabytes(amount: u64, unit: Unit) -> f64 {
    let shift = Unit::GiB.exponent() - unit.exponent();
    let result = amount as f64 / 1024f64.powi(shift);
    to_fixed_precision(result, 2)
}

/// Number formatting the way a browser prints it: `50`, `12.5`, `-3`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

const BYTE_UNITS: &[&str] = &["B", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB"];

/// Human readable byte count with binary units, e.g. `2 GiB`, `1.5 MiB`.
pub fn format_bytes(bytes: u64) -> String {
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < BYTE_UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    format!("{} {}", significant(size), BYTE_UNITS[unit_index])
}

// Three significant digits, whole numbers stay whole.
fn significant(value: f64) -> String {
    if value.fract() == 0.0 {
        return format!("{:.0}", value);
    }
    let formatted = if value >= 100.0 {
        format!("{:.0}", value)
    } else if value >= 10.0 {
        format!("{:.1}", value)
    } else {
        format!("{:.2}", value)
    };
    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    }
}

/// Vocabulary groups with a display rephrasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiKey {
    Connections,
    Autostart,
    VmStates,
}

/// Maps a raw backend value to its display label, or returns it unchanged.
pub fn rephrase_ui(key: UiKey, original: &str) -> String {
    let label = match (key, original) {
        (UiKey::Connections, "system") => "System",
        (UiKey::Connections, "session") => "Session",
        (UiKey::Autostart, "true") => "enabled",
        (UiKey::Autostart, "false") => "disabled",
        (UiKey::VmStates, "pmsuspended") => "suspended (PM)",
        _ => original,
    };
    label.to_string()
}
