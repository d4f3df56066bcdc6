//! Built-in currency table loaded into every registry created with
//! [`CurrencyRegistry::with_builtin`](super::CurrencyRegistry::with_builtin).

use moneta_shared::Currency;

/// Static definition of a built-in currency.
#[derive(Debug, Clone, Copy)]
pub struct CurrencySeed {
    /// Currency code.
    pub code: &'static str,
    /// ISO 4217 numeric code.
    pub numeric_code: &'static str,
    /// Digits after the decimal separator.
    pub fraction: u32,
    /// Display symbol.
    pub grapheme: &'static str,
    /// Display template.
    pub template: &'static str,
    /// Decimal separator.
    pub decimal: &'static str,
    /// Thousand separator.
    pub thousand: &'static str,
}

impl CurrencySeed {
    const fn new(
        code: &'static str,
        numeric_code: &'static str,
        fraction: u32,
        grapheme: &'static str,
        template: &'static str,
        decimal: &'static str,
        thousand: &'static str,
    ) -> Self {
        Self {
            code,
            numeric_code,
            fraction,
            grapheme,
            template,
            decimal,
            thousand,
        }
    }
}

impl From<&CurrencySeed> for Currency {
    fn from(seed: &CurrencySeed) -> Self {
        Self::new(
            seed.code,
            seed.grapheme,
            seed.template,
            seed.decimal,
            seed.thousand,
            seed.fraction,
        )
        .with_numeric_code(seed.numeric_code)
    }
}

/// Well-known currencies, ordered by code.
pub const BUILTIN_CURRENCIES: &[CurrencySeed] = &[
    CurrencySeed::new("AED", "784", 2, "\u{62f}.\u{625}", "1 $", ".", ","),
    CurrencySeed::new("ARS", "032", 2, "$", "$1", ",", "."),
    CurrencySeed::new("AUD", "036", 2, "$", "$1", ".", ","),
    CurrencySeed::new("BHD", "048", 3, "\u{62f}.\u{628}", "1 $", ".", ","),
    CurrencySeed::new("BRL", "986", 2, "R$", "$1", ",", "."),
    CurrencySeed::new("CAD", "124", 2, "$", "$1", ".", ","),
    CurrencySeed::new("CHF", "756", 2, "CHF", "1 $", ".", "'"),
    CurrencySeed::new("CLP", "152", 0, "$", "$1", ",", "."),
    CurrencySeed::new("CNY", "156", 2, "\u{5143}", "1 $", ".", ","),
    CurrencySeed::new("CZK", "203", 2, "K\u{10d}", "1 $", ",", "\u{a0}"),
    CurrencySeed::new("DKK", "208", 2, "kr", "1 $", ",", "."),
    CurrencySeed::new("EGP", "818", 2, "\u{a3}", "$1", ".", ","),
    CurrencySeed::new("EUR", "978", 2, "\u{20ac}", "1 $", ".", ","),
    CurrencySeed::new("GBP", "826", 2, "\u{a3}", "$1", ".", ","),
    CurrencySeed::new("HKD", "344", 2, "$", "$1", ".", ","),
    CurrencySeed::new("HUF", "348", 2, "Ft", "1 $", ",", "."),
    CurrencySeed::new("IDR", "360", 2, "Rp", "$1", ",", "."),
    CurrencySeed::new("ILS", "376", 2, "\u{20aa}", "$1", ".", ","),
    CurrencySeed::new("INR", "356", 2, "\u{20b9}", "$1", ".", ","),
    CurrencySeed::new("ISK", "352", 0, "kr", "1 $", ",", "."),
    CurrencySeed::new("JOD", "400", 3, "\u{62f}.\u{627}", "1 $", ".", ","),
    CurrencySeed::new("JPY", "392", 0, "\u{a5}", "$1", ".", ","),
    CurrencySeed::new("KRW", "410", 0, "\u{20a9}", "$1", ".", ","),
    CurrencySeed::new("KWD", "414", 3, "\u{62f}.\u{643}", "1 $", ".", ","),
    CurrencySeed::new("MXN", "484", 2, "$", "$1", ".", ","),
    CurrencySeed::new("MYR", "458", 2, "RM", "$1", ".", ","),
    CurrencySeed::new("NGN", "566", 2, "\u{20a6}", "$1", ".", ","),
    CurrencySeed::new("NOK", "578", 2, "kr", "1 $", ",", "."),
    CurrencySeed::new("NZD", "554", 2, "$", "$1", ".", ","),
    CurrencySeed::new("OMR", "512", 3, "\u{631}.\u{639}.", "1 $", ".", ","),
    CurrencySeed::new("PHP", "608", 2, "\u{20b1}", "$1", ".", ","),
    CurrencySeed::new("PKR", "586", 2, "\u{20a8}", "$1", ".", ","),
    CurrencySeed::new("PLN", "985", 2, "z\u{142}", "1 $", ",", "."),
    CurrencySeed::new("QAR", "634", 2, "\u{631}.\u{642}", "1 $", ".", ","),
    CurrencySeed::new("RUB", "643", 2, "\u{20bd}", "1 $", ",", "."),
    CurrencySeed::new("SAR", "682", 2, "\u{fdfc}", "1 $", ".", ","),
    CurrencySeed::new("SEK", "752", 2, "kr", "1 $", ",", "."),
    CurrencySeed::new("SGD", "702", 2, "S$", "$1", ".", ","),
    CurrencySeed::new("THB", "764", 2, "\u{e3f}", "$1", ".", ","),
    CurrencySeed::new("TRY", "949", 2, "\u{20ba}", "$1", ",", "."),
    CurrencySeed::new("TWD", "901", 2, "NT$", "$1", ".", ","),
    CurrencySeed::new("UAH", "980", 2, "\u{20b4}", "1 $", ",", "\u{a0}"),
    CurrencySeed::new("USD", "840", 2, "$", "$1", ".", ","),
    CurrencySeed::new("VND", "704", 0, "\u{20ab}", "1 $", ",", "."),
    CurrencySeed::new("ZAR", "710", 2, "R", "$1", ".", ","),
];
