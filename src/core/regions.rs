//! Static ISO 3166 region table with English display names and the ISO 4217
//! currency in circulation for each region.

/// One row of the region table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// ISO 3166-1 alpha-2 code.
    pub code: &'static str,
    /// English display name.
    pub name: &'static str,
    /// ISO 4217 code of the circulating currency, if any.
    pub currency: Option<&'static str>,
}

const fn region(code: &'static str, name: &'static str, currency: &'static str) -> Region {
    Region {
        code,
        name,
        currency: Some(currency),
    }
}

const fn no_currency(code: &'static str, name: &'static str) -> Region {
    Region {
        code,
        name,
        currency: None,
    }
}

pub static REGIONS: &[Region] = &[
    region("AD", "Andorra", "EUR"),
    region("AE", "United Arab Emirates", "AED"),
    region("AF", "Afghanistan", "AFN"),
    region("AG", "Antigua & Barbuda", "XCD"),
    region("AI", "Anguilla", "XCD"),
    region("AL", "Albania", "ALL"),
    region("AM", "Armenia", "AMD"),
    region("AO", "Angola", "AOA"),
    no_currency("AQ", "Antarctica"),
    region("AR", "Argentina", "ARS"),
    region("AS", "American Samoa", "USD"),
    region("AT", "Austria", "EUR"),
    region("AU", "Australia", "AUD"),
    region("AW", "Aruba", "AWG"),
    region("AX", "Åland Islands", "EUR"),
    region("AZ", "Azerbaijan", "AZN"),
    region("BA", "Bosnia & Herzegovina", "BAM"),
    region("BB", "Barbados", "BBD"),
    region("BD", "Bangladesh", "BDT"),
    region("BE", "Belgium", "EUR"),
    region("BF", "Burkina Faso", "XOF"),
    region("BG", "Bulgaria", "BGN"),
    region("BH", "Bahrain", "BHD"),
    region("BI", "Burundi", "BIF"),
    region("BJ", "Benin", "XOF"),
    region("BL", "St. Barthélemy", "EUR"),
    region("BM", "Bermuda", "BMD"),
    region("BN", "Brunei", "BND"),
    region("BO", "Bolivia", "BOB"),
    region("BQ", "Caribbean Netherlands", "USD"),
    region("BR", "Brazil", "BRL"),
    region("BS", "Bahamas", "BSD"),
    region("BT", "Bhutan", "BTN"),
    region("BV", "Bouvet Island", "NOK"),
    region("BW", "Botswana", "BWP"),
    region("BY", "Belarus", "BYN"),
    region("BZ", "Belize", "BZD"),
    region("CA", "Canada", "CAD"),
    region("CC", "Cocos (Keeling) Islands", "AUD"),
    region("CD", "Congo - Kinshasa", "CDF"),
    region("CF", "Central African Republic", "XAF"),
    region("CG", "Congo - Brazzaville", "XAF"),
    region("CH", "Switzerland", "CHF"),
    region("CI", "Côte d’Ivoire", "XOF"),
    region("CK", "Cook Islands", "NZD"),
    region("CL", "Chile", "CLP"),
    region("CM", "Cameroon", "XAF"),
    region("CN", "China", "CNY"),
    region("CO", "Colombia", "COP"),
    region("CR", "Costa Rica", "CRC"),
    region("CU", "Cuba", "CUP"),
    region("CV", "Cape Verde", "CVE"),
    region("CW", "Curaçao", "ANG"),
    region("CX", "Christmas Island", "AUD"),
    region("CY", "Cyprus", "EUR"),
    region("CZ", "Czechia", "CZK"),
    region("DE", "Germany", "EUR"),
    region("DJ", "Djibouti", "DJF"),
    region("DK", "Denmark", "DKK"),
    region("DM", "Dominica", "XCD"),
    region("DO", "Dominican Republic", "DOP"),
    region("DZ", "Algeria", "DZD"),
    region("EC", "Ecuador", "USD"),
    region("EE", "Estonia", "EUR"),
    region("EG", "Egypt", "EGP"),
    region("EH", "Western Sahara", "MAD"),
    region("ER", "Eritrea", "ERN"),
    region("ES", "Spain", "EUR"),
    region("ET", "Ethiopia", "ETB"),
    region("FI", "Finland", "EUR"),
    region("FJ", "Fiji", "FJD"),
    region("FK", "Falkland Islands", "FKP"),
    region("FM", "Micronesia", "USD"),
    region("FO", "Faroe Islands", "DKK"),
    region("FR", "France", "EUR"),
    region("GA", "Gabon", "XAF"),
    region("GB", "United Kingdom", "GBP"),
    region("GD", "Grenada", "XCD"),
    region("GE", "Georgia", "GEL"),
    region("GF", "French Guiana", "EUR"),
    region("GG", "Guernsey", "GBP"),
    region("GH", "Ghana", "GHS"),
    region("GI", "Gibraltar", "GIP"),
    region("GL", "Greenland", "DKK"),
    region("GM", "Gambia", "GMD"),
    region("GN", "Guinea", "GNF"),
    region("GP", "Guadeloupe", "EUR"),
    region("GQ", "Equatorial Guinea", "XAF"),
    region("GR", "Greece", "EUR"),
    region("GS", "South Georgia & South Sandwich Islands", "GBP"),
    region("GT", "Guatemala", "GTQ"),
    region("GU", "Guam", "USD"),
    region("GW", "Guinea-Bissau", "XOF"),
    region("GY", "Guyana", "GYD"),
    region("HK", "Hong Kong SAR China", "HKD"),
    region("HM", "Heard & McDonald Islands", "AUD"),
    region("HN", "Honduras", "HNL"),
    region("HR", "Croatia", "EUR"),
    region("HT", "Haiti", "HTG"),
    region("HU", "Hungary", "HUF"),
    region("ID", "Indonesia", "IDR"),
    region("IE", "Ireland", "EUR"),
    region("IL", "Israel", "ILS"),
    region("IM", "Isle of Man", "GBP"),
    region("IN", "India", "INR"),
    region("IO", "British Indian Ocean Territory", "USD"),
    region("IQ", "Iraq", "IQD"),
    region("IR", "Iran", "IRR"),
    region("IS", "Iceland", "ISK"),
    region("IT", "Italy", "EUR"),
    region("JE", "Jersey", "GBP"),
    region("JM", "Jamaica", "JMD"),
    region("JO", "Jordan", "JOD"),
    region("JP", "Japan", "JPY"),
    region("KE", "Kenya", "KES"),
    region("KG", "Kyrgyzstan", "KGS"),
    region("KH", "Cambodia", "KHR"),
    region("KI", "Kiribati", "AUD"),
    region("KM", "Comoros", "KMF"),
    region("KN", "St. Kitts & Nevis", "XCD"),
    region("KP", "North Korea", "KPW"),
    region("KR", "South Korea", "KRW"),
    region("KW", "Kuwait", "KWD"),
    region("KY", "Cayman Islands", "KYD"),
    region("KZ", "Kazakhstan", "KZT"),
    region("LA", "Laos", "LAK"),
    region("LB", "Lebanon", "LBP"),
    region("LC", "St. Lucia", "XCD"),
    region("LI", "Liechtenstein", "CHF"),
    region("LK", "Sri Lanka", "LKR"),
    region("LR", "Liberia", "LRD"),
    region("LS", "Lesotho", "LSL"),
    region("LT", "Lithuania", "EUR"),
    region("LU", "Luxembourg", "EUR"),
    region("LV", "Latvia", "EUR"),
    region("LY", "Libya", "LYD"),
    region("MA", "Morocco", "MAD"),
    region("MC", "Monaco", "EUR"),
    region("MD", "Moldova", "MDL"),
    region("ME", "Montenegro", "EUR"),
    region("MF", "St. Martin", "EUR"),
    region("MG", "Madagascar", "MGA"),
    region("MH", "Marshall Islands", "USD"),
    region("MK", "North Macedonia", "MKD"),
    region("ML", "Mali", "XOF"),
    region("MM", "Myanmar (Burma)", "MMK"),
    region("MN", "Mongolia", "MNT"),
    region("MO", "Macao SAR China", "MOP"),
    region("MP", "Northern Mariana Islands", "USD"),
    region("MQ", "Martinique", "EUR"),
    region("MR", "Mauritania", "MRU"),
    region("MS", "Montserrat", "XCD"),
    region("MT", "Malta", "EUR"),
    region("MU", "Mauritius", "MUR"),
    region("MV", "Maldives", "MVR"),
    region("MW", "Malawi", "MWK"),
    region("MX", "Mexico", "MXN"),
    region("MY", "Malaysia", "MYR"),
    region("MZ", "Mozambique", "MZN"),
    region("NA", "Namibia", "NAD"),
    region("NC", "New Caledonia", "XPF"),
    region("NE", "Niger", "XOF"),
    region("NF", "Norfolk Island", "AUD"),
    region("NG", "Nigeria", "NGN"),
    region("NI", "Nicaragua", "NIO"),
    region("NL", "Netherlands", "EUR"),
    region("NO", "Norway", "NOK"),
    region("NP", "Nepal", "NPR"),
    region("NR", "Nauru", "AUD"),
    region("NU", "Niue", "NZD"),
    region("NZ", "New Zealand", "NZD"),
    region("OM", "Oman", "OMR"),
    region("PA", "Panama", "PAB"),
    region("PE", "Peru", "PEN"),
    region("PF", "French Polynesia", "XPF"),
    region("PG", "Papua New Guinea", "PGK"),
    region("PH", "Philippines", "PHP"),
    region("PK", "Pakistan", "PKR"),
    region("PL", "Poland", "PLN"),
    region("PM", "St. Pierre & Miquelon", "EUR"),
    region("PN", "Pitcairn Islands", "NZD"),
    region("PR", "Puerto Rico", "USD"),
    region("PS", "Palestinian Territories", "ILS"),
    region("PT", "Portugal", "EUR"),
    region("PW", "Palau", "USD"),
    region("PY", "Paraguay", "PYG"),
    region("QA", "Qatar", "QAR"),
    region("RE", "Réunion", "EUR"),
    region("RO", "Romania", "RON"),
    region("RS", "Serbia", "RSD"),
    region("RU", "Russia", "RUB"),
    region("RW", "Rwanda", "RWF"),
    region("SA", "Saudi Arabia", "SAR"),
    region("SB", "Solomon Islands", "SBD"),
    region("SC", "Seychelles", "SCR"),
    region("SD", "Sudan", "SDG"),
    region("SE", "Sweden", "SEK"),
    region("SG", "Singapore", "SGD"),
    region("SH", "St. Helena", "SHP"),
    region("SI", "Slovenia", "EUR"),
    region("SJ", "Svalbard & Jan Mayen", "NOK"),
    region("SK", "Slovakia", "EUR"),
    region("SL", "Sierra Leone", "SLE"),
    region("SM", "San Marino", "EUR"),
    region("SN", "Senegal", "XOF"),
    region("SO", "Somalia", "SOS"),
    region("SR", "Suriname", "SRD"),
    region("SS", "South Sudan", "SSP"),
    region("ST", "São Tomé & Príncipe", "STN"),
    region("SV", "El Salvador", "USD"),
    region("SX", "Sint Maarten", "ANG"),
    region("SY", "Syria", "SYP"),
    region("SZ", "Eswatini", "SZL"),
    region("TC", "Turks & Caicos Islands", "USD"),
    region("TD", "Chad", "XAF"),
    region("TF", "French Southern Territories", "EUR"),
    region("TG", "Togo", "XOF"),
    region("TH", "Thailand", "THB"),
    region("TJ", "Tajikistan", "TJS"),
    region("TK", "Tokelau", "NZD"),
    region("TL", "Timor-Leste", "USD"),
    region("TM", "Turkmenistan", "TMT"),
    region("TN", "Tunisia", "TND"),
    region("TO", "Tonga", "TOP"),
    region("TR", "Türkiye", "TRY"),
    region("TT", "Trinidad & Tobago", "TTD"),
    region("TV", "Tuvalu", "AUD"),
    region("TW", "Taiwan", "TWD"),
    region("TZ", "Tanzania", "TZS"),
    region("UA", "Ukraine", "UAH"),
    region("UG", "Uganda", "UGX"),
    region("UM", "U.S. Outlying Islands", "USD"),
    region("US", "United States", "USD"),
    region("UY", "Uruguay", "UYU"),
    region("UZ", "Uzbekistan", "UZS"),
    region("VA", "Vatican City", "EUR"),
    region("VC", "St. Vincent & Grenadines", "XCD"),
    region("VE", "Venezuela", "VES"),
    region("VG", "British Virgin Islands", "USD"),
    region("VI", "U.S. Virgin Islands", "USD"),
    region("VN", "Vietnam", "VND"),
    region("VU", "Vanuatu", "VUV"),
    region("WF", "Wallis & Futuna", "XPF"),
    region("WS", "Samoa", "WST"),
    region("YE", "Yemen", "YER"),
    region("YT", "Mayotte", "EUR"),
    region("ZA", "South Africa", "ZAR"),
    region("ZM", "Zambia", "ZMW"),
    region("ZW", "Zimbabwe", "ZWL"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_region_codes_are_unique_and_well_formed() {
        let mut seen = HashSet::new();
        for region in REGIONS {
            assert_eq!(region.code.len(), 2, "bad code {}", region.code);
            assert!(region.code.chars().all(|c| c.is_ascii_uppercase()));
            assert!(seen.insert(region.code), "duplicate code {}", region.code);
        }
    }

    #[test]
    fn test_currency_codes_are_three_uppercase_letters() {
        for currency in REGIONS.iter().filter_map(|r| r.currency) {
            assert_eq!(currency.len(), 3, "bad currency {currency}");
            assert!(currency.chars().all(|c| c.is_ascii_uppercase()));
        }
    }
}
