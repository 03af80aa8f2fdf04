// ============================================================================
// NRIC - Derivación de fecha de nacimiento
// ============================================================================
// Los seis primeros dígitos del NRIC codifican YYMMDD. El corte de siglo es
// yy >= 25 -> 1900s, si no 2000s.
// ============================================================================

use chrono::NaiveDate;

const CENTURY_CUTOFF: i32 = 25;

/// Deriva la fecha de nacimiento de los seis primeros dígitos del NRIC.
/// Devuelve None con entrada corta, no numérica o fecha inválida
/// (30 de febrero no pasa).
pub fn derive_dob(nric: &str) -> Option<NaiveDate> {
    let yy: i32 = nric.get(0..2)?.parse().ok()?;
    let mm: u32 = nric.get(2..4)?.parse().ok()?;
    let dd: u32 = nric.get(4..6)?.parse().ok()?;

    let year = if yy >= CENTURY_CUTOFF {
        1900 + yy
    } else {
        2000 + yy
    };

    NaiveDate::from_ymd_opt(year, mm, dd)
}

/// Fecha derivada en el formato que espera el input date del formulario.
pub fn derive_dob_string(nric: &str) -> Option<String> {
    derive_dob(nric).map(|date| date.format("%Y-%m-%d").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn century_cutoff() {
        // 99 -> 1999, 24 -> 2024, 25 -> 1925
        assert_eq!(derive_dob_string("991231145678").unwrap(), "1999-12-31");
        assert_eq!(derive_dob_string("240115145678").unwrap(), "2024-01-15");
        assert_eq!(derive_dob_string("250115145678").unwrap(), "1925-01-15");
    }

    #[test]
    fn invalid_month_or_day_is_rejected() {
        assert_eq!(derive_dob("991331145678"), None); // mes 13
        assert_eq!(derive_dob("990200145678"), None); // día 0
        assert_eq!(derive_dob("990230145678"), None); // 30 de febrero
    }

    #[test]
    fn short_or_non_numeric_input() {
        assert_eq!(derive_dob("9912"), None);
        assert_eq!(derive_dob(""), None);
        assert_eq!(derive_dob("ab1231xxxx"), None);
    }

    #[test]
    fn leap_day_only_on_leap_years() {
        // 2004 es bisiesto, 1925 no
        assert!(derive_dob("040229145678").is_some());
        assert!(derive_dob("250229145678").is_none());
    }
}
