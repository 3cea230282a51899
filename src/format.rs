const SUFFIXES: [&str; 12] = [
    "", "K", "M", "B", "T", "Qa", "Qi", "Sx", "Sp", "Oc", "No", "Dc",
];

/// Short display form of a resource amount.
///
/// Values under one million print with `decimals` fractional digits. Larger values are
/// scaled down by thousands and tagged with a suffix (`1.5M`, `2.0B`), falling back to
/// `e<exponent>` past the end of the suffix table.
pub fn format_number(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value < 1_000_000.0 {
        return format!("{value:.decimals$}");
    }

    let mut tier = (value.abs().log10() / 3.0).floor() as i32;
    // log10 can land a hair under an exact power of ten.
    if value.abs() >= 10f64.powi((tier + 1) * 3) {
        tier += 1;
    }
    let scaled = value / 10f64.powi(tier * 3);
    let suffix = SUFFIXES
        .get(tier as usize)
        .map(|suffix| suffix.to_string())
        .unwrap_or_else(|| format!("e{}", tier * 3));

    format!("{scaled:.decimals$}{suffix}")
}
