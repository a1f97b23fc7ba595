//! Application constants for the BIN data builder
//!
//! Header names recognized in the source CSV, the abbreviated attribute
//! codes used in the emitted lookup table, and default paths.

// =============================================================================
// Input Header Names
// =============================================================================

/// Recognized header names in the BIN list CSV (case-sensitive, exact match)
pub mod columns {
    /// Issuer identification number, the lookup key
    pub const BIN: &str = "BIN";

    /// Card scheme, e.g. VISA or MASTERCARD
    pub const BRAND: &str = "Brand";

    /// Funding type, e.g. CREDIT or DEBIT
    pub const TYPE: &str = "Type";

    /// Product category, e.g. CLASSIC or PLATINUM
    pub const CATEGORY: &str = "Category";

    /// Issuing bank name
    pub const ISSUER: &str = "Issuer";

    /// ISO 3166-1 alpha-2 country code
    pub const ISO_CODE_2: &str = "isoCode2";

    /// Full country name (resolved for diagnostics only)
    pub const COUNTRY_NAME: &str = "CountryName";
}

// =============================================================================
// Output Attribute Codes
// =============================================================================

/// Abbreviated attribute keys used in each emitted record
pub mod codes {
    pub const BRAND: &str = "b";
    pub const TYPE: &str = "t";
    pub const CATEGORY: &str = "c";
    pub const ISSUER: &str = "i";
    pub const COUNTRY: &str = "co";
}

// =============================================================================
// Defaults
// =============================================================================

/// Input CSV used when no path is given on the command line
pub const DEFAULT_CSV_PATH: &str = "bin-list-data.csv";

/// Destination of the generated lookup table, relative to the project root
pub const DEFAULT_OUTPUT_PATH: &str = "public/bin-data.json";

/// Keys shorter than this many characters are skipped
pub const MIN_KEY_LENGTH: usize = 4;

/// Field delimiter in the source CSV
pub const DELIMITER: char = ',';

/// Quote character toggling literal-comma mode
pub const QUOTE: char = '"';

/// UTF-8 byte-order mark some spreadsheet exports prepend
pub const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Bytes per mebibyte, for the size summary
pub const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

/// Progress bar template for the row mapping stage
pub const PROGRESS_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} rows ({eta})";

/// Update the progress bar every this many rows
pub const PROGRESS_UPDATE_INTERVAL: u64 = 4096;
