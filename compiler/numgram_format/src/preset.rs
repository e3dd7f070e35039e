//! Named number formats for common languages and data formats.
//!
//! Each entry is a [`NumberFormat`] associated constant plus a [`Preset`]
//! variant for lookup by name. `*_LITERAL` entries describe numbers written
//! in source code; `*_STRING` entries describe what the language's own
//! float parser accepts at runtime.

use std::fmt;
use std::str::FromStr;

use crate::error::UnknownPreset;
use crate::flags::{name_matches, RuleFlags};
use crate::format::NumberFormat;

/// Compile a preset from rule names, with an optional separator.
macro_rules! grammar {
    (sep = $sep:literal; $($flag:ident),+ $(,)?) => {
        NumberFormat::from_parts(RuleFlags::empty()$(.union(RuleFlags::$flag))+, $sep)
    };
    ($($flag:ident),* $(,)?) => {
        NumberFormat::from_parts(RuleFlags::empty()$(.union(RuleFlags::$flag))*, 0)
    };
}

/// Generates the [`Preset`] enum from `Variant = "name" => CONSTANT` rows.
macro_rules! preset_table {
    ($($variant:ident = $name:literal => $constant:ident;)*) => {
        /// A named entry of the preset table.
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
        pub enum Preset {
            $($variant,)*
        }

        impl Preset {
            /// Every preset, in table order.
            pub const ALL: &'static [Preset] = &[$(Preset::$variant,)*];

            /// Kebab-case name, e.g. `"rust-literal"`.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Preset::$variant => $name,)*
                }
            }

            /// The compiled format of this entry.
            pub const fn format(self) -> NumberFormat {
                match self {
                    $(Preset::$variant => NumberFormat::$constant,)*
                }
            }
        }
    };
}

preset_table! {
    RustLiteral = "rust-literal" => RUST_LITERAL;
    RustString = "rust-string" => RUST_STRING;
    RustStringStrict = "rust-string-strict" => RUST_STRING_STRICT;
    Python3Literal = "python3-literal" => PYTHON3_LITERAL;
    Python3String = "python3-string" => PYTHON3_STRING;
    Python2Literal = "python2-literal" => PYTHON2_LITERAL;
    Python2String = "python2-string" => PYTHON2_STRING;
    Cxx17Literal = "cxx17-literal" => CXX17_LITERAL;
    Cxx17String = "cxx17-string" => CXX17_STRING;
    Cxx14Literal = "cxx14-literal" => CXX14_LITERAL;
    Cxx14String = "cxx14-string" => CXX14_STRING;
    Cxx11Literal = "cxx11-literal" => CXX11_LITERAL;
    Cxx11String = "cxx11-string" => CXX11_STRING;
    Cxx03Literal = "cxx03-literal" => CXX03_LITERAL;
    Cxx03String = "cxx03-string" => CXX03_STRING;
    Cxx98Literal = "cxx98-literal" => CXX98_LITERAL;
    Cxx98String = "cxx98-string" => CXX98_STRING;
    C18Literal = "c18-literal" => C18_LITERAL;
    C18String = "c18-string" => C18_STRING;
    C11Literal = "c11-literal" => C11_LITERAL;
    C11String = "c11-string" => C11_STRING;
    C99Literal = "c99-literal" => C99_LITERAL;
    C99String = "c99-string" => C99_STRING;
    C90Literal = "c90-literal" => C90_LITERAL;
    C90String = "c90-string" => C90_STRING;
    C89Literal = "c89-literal" => C89_LITERAL;
    C89String = "c89-string" => C89_STRING;
    RubyLiteral = "ruby-literal" => RUBY_LITERAL;
    RubyString = "ruby-string" => RUBY_STRING;
    SwiftLiteral = "swift-literal" => SWIFT_LITERAL;
    SwiftString = "swift-string" => SWIFT_STRING;
    GoLiteral = "go-literal" => GO_LITERAL;
    GoString = "go-string" => GO_STRING;
    HaskellLiteral = "haskell-literal" => HASKELL_LITERAL;
    HaskellString = "haskell-string" => HASKELL_STRING;
    JavascriptLiteral = "javascript-literal" => JAVASCRIPT_LITERAL;
    JavascriptString = "javascript-string" => JAVASCRIPT_STRING;
    PerlLiteral = "perl-literal" => PERL_LITERAL;
    PerlString = "perl-string" => PERL_STRING;
    PhpLiteral = "php-literal" => PHP_LITERAL;
    PhpString = "php-string" => PHP_STRING;
    JavaLiteral = "java-literal" => JAVA_LITERAL;
    JavaString = "java-string" => JAVA_STRING;
    RLiteral = "r-literal" => R_LITERAL;
    RString = "r-string" => R_STRING;
    KotlinLiteral = "kotlin-literal" => KOTLIN_LITERAL;
    KotlinString = "kotlin-string" => KOTLIN_STRING;
    JuliaLiteral = "julia-literal" => JULIA_LITERAL;
    JuliaString = "julia-string" => JULIA_STRING;
    Csharp7Literal = "csharp7-literal" => CSHARP7_LITERAL;
    Csharp7String = "csharp7-string" => CSHARP7_STRING;
    Csharp6Literal = "csharp6-literal" => CSHARP6_LITERAL;
    Csharp6String = "csharp6-string" => CSHARP6_STRING;
    Csharp5Literal = "csharp5-literal" => CSHARP5_LITERAL;
    Csharp5String = "csharp5-string" => CSHARP5_STRING;
    Csharp4Literal = "csharp4-literal" => CSHARP4_LITERAL;
    Csharp4String = "csharp4-string" => CSHARP4_STRING;
    Csharp3Literal = "csharp3-literal" => CSHARP3_LITERAL;
    Csharp3String = "csharp3-string" => CSHARP3_STRING;
    Csharp2Literal = "csharp2-literal" => CSHARP2_LITERAL;
    Csharp2String = "csharp2-string" => CSHARP2_STRING;
    Csharp1Literal = "csharp1-literal" => CSHARP1_LITERAL;
    Csharp1String = "csharp1-string" => CSHARP1_STRING;
    KawaLiteral = "kawa-literal" => KAWA_LITERAL;
    KawaString = "kawa-string" => KAWA_STRING;
    GambitcLiteral = "gambitc-literal" => GAMBITC_LITERAL;
    GambitcString = "gambitc-string" => GAMBITC_STRING;
    GuileLiteral = "guile-literal" => GUILE_LITERAL;
    GuileString = "guile-string" => GUILE_STRING;
    ClojureLiteral = "clojure-literal" => CLOJURE_LITERAL;
    ClojureString = "clojure-string" => CLOJURE_STRING;
    ErlangLiteral = "erlang-literal" => ERLANG_LITERAL;
    ErlangString = "erlang-string" => ERLANG_STRING;
    ElmLiteral = "elm-literal" => ELM_LITERAL;
    ElmString = "elm-string" => ELM_STRING;
    ScalaLiteral = "scala-literal" => SCALA_LITERAL;
    ScalaString = "scala-string" => SCALA_STRING;
    ElixirLiteral = "elixir-literal" => ELIXIR_LITERAL;
    ElixirString = "elixir-string" => ELIXIR_STRING;
    FortranLiteral = "fortran-literal" => FORTRAN_LITERAL;
    FortranString = "fortran-string" => FORTRAN_STRING;
    DLiteral = "d-literal" => D_LITERAL;
    DString = "d-string" => D_STRING;
    CoffeescriptLiteral = "coffeescript-literal" => COFFEESCRIPT_LITERAL;
    CoffeescriptString = "coffeescript-string" => COFFEESCRIPT_STRING;
    CobolLiteral = "cobol-literal" => COBOL_LITERAL;
    CobolString = "cobol-string" => COBOL_STRING;
    FsharpLiteral = "fsharp-literal" => FSHARP_LITERAL;
    FsharpString = "fsharp-string" => FSHARP_STRING;
    VbLiteral = "vb-literal" => VB_LITERAL;
    VbString = "vb-string" => VB_STRING;
    OcamlLiteral = "ocaml-literal" => OCAML_LITERAL;
    OcamlString = "ocaml-string" => OCAML_STRING;
    ObjectivecLiteral = "objectivec-literal" => OBJECTIVEC_LITERAL;
    ObjectivecString = "objectivec-string" => OBJECTIVEC_STRING;
    ReasonmlLiteral = "reasonml-literal" => REASONML_LITERAL;
    ReasonmlString = "reasonml-string" => REASONML_STRING;
    OctaveLiteral = "octave-literal" => OCTAVE_LITERAL;
    OctaveString = "octave-string" => OCTAVE_STRING;
    MatlabLiteral = "matlab-literal" => MATLAB_LITERAL;
    MatlabString = "matlab-string" => MATLAB_STRING;
    ZigLiteral = "zig-literal" => ZIG_LITERAL;
    ZigString = "zig-string" => ZIG_STRING;
    SageLiteral = "sage-literal" => SAGE_LITERAL;
    SageString = "sage-string" => SAGE_STRING;
    Json = "json" => JSON;
    Toml = "toml" => TOML;
    Xml = "xml" => XML;
    Sqlite = "sqlite" => SQLITE;
    Postgresql = "postgresql" => POSTGRESQL;
    Mysql = "mysql" => MYSQL;
    Mongodb = "mongodb" => MONGODB;
    Permissive = "permissive" => PERMISSIVE;
    Standard = "standard" => STANDARD;
    Ignore = "ignore" => IGNORE;
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unversioned name prefixes and the entry family they resolve to.
const VERSION_ALIASES: [(&str, &str); 4] = [
    ("python-", "python3-"),
    ("cxx-", "cxx17-"),
    ("c-", "c18-"),
    ("csharp-", "csharp7-"),
];

/// Parse a preset name like `"rust-literal"`.
///
/// Case-insensitive; `_` and `-` are interchangeable. Unversioned language
/// names resolve to the newest version (`python-literal` is
/// `python3-literal`), and `yaml` resolves to `json`.
impl FromStr for Preset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(preset) = Self::ALL.iter().find(|p| name_matches(p.as_str(), s)) {
            return Ok(*preset);
        }

        for (alias, target) in VERSION_ALIASES {
            let Some(rest) = strip_name_prefix(s, alias) else {
                continue;
            };
            let found = Self::ALL.iter().find(|p| {
                p.as_str()
                    .strip_prefix(target)
                    .is_some_and(|tail| name_matches(tail, rest))
            });
            if let Some(preset) = found {
                return Ok(*preset);
            }
        }

        if name_matches("yaml", s) {
            return Ok(Preset::Json);
        }
        Err(UnknownPreset)
    }
}

fn strip_name_prefix<'a>(input: &'a str, prefix: &str) -> Option<&'a str> {
    let head = input.get(..prefix.len())?;
    if name_matches(prefix, head) {
        input.get(prefix.len()..)
    } else {
        None
    }
}

// === Formats ===
//
// Presets compile through `from_parts` without validation; the preset tests
// re-validate every entry.

impl NumberFormat {
    // General

    /// No rules at all.
    pub const PERMISSIVE: Self = grammar!();
    /// Exponent digits required, everything else allowed.
    pub const STANDARD: Self = grammar!(REQUIRED_EXPONENT_DIGITS);
    /// `_` accepted as a separator anywhere a separator can appear.
    pub const IGNORE: Self = grammar!(sep = b'_'; DIGIT_SEPARATOR_MASK);

    // Rust

    pub const RUST_LITERAL: Self = grammar!(
        sep = b'_';
        REQUIRED_DIGITS,
        NO_POSITIVE_MANTISSA_SIGN,
        NO_SPECIAL,
        INTERNAL_DIGIT_SEPARATOR,
        TRAILING_DIGIT_SEPARATOR,
        CONSECUTIVE_DIGIT_SEPARATOR,
    );
    pub const RUST_STRING: Self = grammar!(REQUIRED_EXPONENT_DIGITS);
    /// [`RUST_STRING`](Self::RUST_STRING) with case-sensitive special values.
    pub const RUST_STRING_STRICT: Self = grammar!(REQUIRED_EXPONENT_DIGITS, CASE_SENSITIVE_SPECIAL);

    // Python

    pub const PYTHON3_LITERAL: Self =
        grammar!(REQUIRED_EXPONENT_DIGITS, NO_SPECIAL, NO_INTEGER_LEADING_ZEROS);
    pub const PYTHON3_STRING: Self = grammar!(REQUIRED_EXPONENT_DIGITS);
    pub const PYTHON2_LITERAL: Self = grammar!(REQUIRED_EXPONENT_DIGITS, NO_SPECIAL);
    pub const PYTHON2_STRING: Self = grammar!(REQUIRED_EXPONENT_DIGITS);
    pub const PYTHON_LITERAL: Self = Self::PYTHON3_LITERAL;
    pub const PYTHON_STRING: Self = Self::PYTHON3_STRING;

    // C++

    pub const CXX17_LITERAL: Self = grammar!(
        sep = b'\'';
        REQUIRED_EXPONENT_DIGITS,
        CASE_SENSITIVE_SPECIAL,
        INTERNAL_DIGIT_SEPARATOR,
    );
    pub const CXX17_STRING: Self = grammar!(REQUIRED_EXPONENT_DIGITS);
    pub const CXX14_LITERAL: Self = Self::CXX17_LITERAL;
    pub const CXX14_STRING: Self = grammar!(REQUIRED_EXPONENT_DIGITS);
    pub const CXX11_LITERAL: Self = grammar!(REQUIRED_EXPONENT_DIGITS, CASE_SENSITIVE_SPECIAL);
    pub const CXX11_STRING: Self = grammar!(REQUIRED_EXPONENT_DIGITS);
    /// No special values in literals before C++11.
    pub const CXX03_LITERAL: Self = grammar!(REQUIRED_EXPONENT_DIGITS, NO_SPECIAL);
    pub const CXX03_STRING: Self = grammar!(REQUIRED_EXPONENT_DIGITS);
    pub const CXX98_LITERAL: Self = grammar!(REQUIRED_EXPONENT_DIGITS, NO_SPECIAL);
    pub const CXX98_STRING: Self = grammar!(REQUIRED_EXPONENT_DIGITS);
    pub const CXX_LITERAL: Self = Self::CXX17_LITERAL;
    pub const CXX_STRING: Self = Self::CXX17_STRING;

    // C

    pub const C18_LITERAL: Self = grammar!(REQUIRED_EXPONENT_DIGITS, CASE_SENSITIVE_SPECIAL);
    pub const C18_STRING: Self = grammar!(REQUIRED_EXPONENT_DIGITS);
    pub const C11_LITERAL: Self = grammar!(REQUIRED_EXPONENT_DIGITS, CASE_SENSITIVE_SPECIAL);
    pub const C11_STRING: Self = grammar!(REQUIRED_EXPONENT_DIGITS);
    pub const C99_LITERAL: Self = grammar!(REQUIRED_EXPONENT_DIGITS, CASE_SENSITIVE_SPECIAL);
    pub const C99_STRING: Self = grammar!(REQUIRED_EXPONENT_DIGITS);
    pub const C90_LITERAL: Self = grammar!(REQUIRED_EXPONENT_DIGITS, NO_SPECIAL);
    pub const C90_STRING: Self = grammar!(REQUIRED_EXPONENT_DIGITS);
    pub const C89_LITERAL: Self = grammar!(REQUIRED_EXPONENT_DIGITS, NO_SPECIAL);
    pub const C89_STRING: Self = grammar!(REQUIRED_EXPONENT_DIGITS);
    pub const C_LITERAL: Self = Self::C18_LITERAL;
    pub const C_STRING: Self = Self::C18_STRING;

    // Ruby, Swift, Go, Haskell

    pub const RUBY_LITERAL: Self = grammar!(
        sep = b'_';
        REQUIRED_DIGITS,
        NO_SPECIAL,
        NO_FLOAT_LEADING_ZEROS,
        INTERNAL_DIGIT_SEPARATOR,
    );
    /// Ruby's `String#to_f`, which also skips internal underscores.
    pub const RUBY_STRING: Self = grammar!(sep = b'_'; NO_SPECIAL, INTERNAL_DIGIT_SEPARATOR);
    pub const SWIFT_LITERAL: Self = grammar!(
        sep = b'_';
        REQUIRED_DIGITS,
        NO_SPECIAL,
        INTERNAL_DIGIT_SEPARATOR,
        TRAILING_DIGIT_SEPARATOR,
        CONSECUTIVE_DIGIT_SEPARATOR,
    );
    pub const SWIFT_STRING: Self = grammar!(REQUIRED_FRACTION_DIGITS);
    pub const GO_LITERAL: Self = grammar!(REQUIRED_FRACTION_DIGITS, NO_SPECIAL);
    pub const GO_STRING: Self = grammar!(REQUIRED_FRACTION_DIGITS);
    pub const HASKELL_LITERAL: Self =
        grammar!(REQUIRED_DIGITS, NO_POSITIVE_MANTISSA_SIGN, NO_SPECIAL);
    pub const HASKELL_STRING: Self =
        grammar!(REQUIRED_DIGITS, NO_POSITIVE_MANTISSA_SIGN, CASE_SENSITIVE_SPECIAL);

    // JavaScript, Perl, PHP

    pub const JAVASCRIPT_LITERAL: Self =
        grammar!(REQUIRED_EXPONENT_DIGITS, CASE_SENSITIVE_SPECIAL, NO_FLOAT_LEADING_ZEROS);
    pub const JAVASCRIPT_STRING: Self = grammar!(CASE_SENSITIVE_SPECIAL);
    pub const PERL_LITERAL: Self = grammar!(
        sep = b'_';
        REQUIRED_EXPONENT_DIGITS,
        NO_SPECIAL,
        INTERNAL_DIGIT_SEPARATOR,
        FRACTION_LEADING_DIGIT_SEPARATOR,
        EXPONENT_LEADING_DIGIT_SEPARATOR,
        TRAILING_DIGIT_SEPARATOR,
        CONSECUTIVE_DIGIT_SEPARATOR,
    );
    pub const PERL_STRING: Self = grammar!();
    pub const PHP_LITERAL: Self = grammar!(REQUIRED_EXPONENT_DIGITS, CASE_SENSITIVE_SPECIAL);
    pub const PHP_STRING: Self = grammar!(NO_SPECIAL);

    // JVM: Java, Kotlin, Clojure, Scala

    pub const JAVA_LITERAL: Self = grammar!(
        sep = b'_';
        REQUIRED_EXPONENT_DIGITS,
        NO_SPECIAL,
        INTERNAL_DIGIT_SEPARATOR,
        CONSECUTIVE_DIGIT_SEPARATOR,
    );
    pub const JAVA_STRING: Self = grammar!(REQUIRED_EXPONENT_DIGITS, CASE_SENSITIVE_SPECIAL);
    pub const KOTLIN_LITERAL: Self = grammar!(
        sep = b'_';
        REQUIRED_EXPONENT_DIGITS,
        NO_SPECIAL,
        NO_INTEGER_LEADING_ZEROS,
        INTERNAL_DIGIT_SEPARATOR,
        CONSECUTIVE_DIGIT_SEPARATOR,
    );
    pub const KOTLIN_STRING: Self = grammar!(REQUIRED_EXPONENT_DIGITS, CASE_SENSITIVE_SPECIAL);
    pub const CLOJURE_LITERAL: Self =
        grammar!(REQUIRED_INTEGER_DIGITS, REQUIRED_EXPONENT_DIGITS, NO_SPECIAL);
    pub const CLOJURE_STRING: Self = grammar!(REQUIRED_EXPONENT_DIGITS, CASE_SENSITIVE_SPECIAL);
    pub const SCALA_LITERAL: Self = grammar!(
        REQUIRED_DIGITS,
        NO_SPECIAL,
        NO_INTEGER_LEADING_ZEROS,
        NO_FLOAT_LEADING_ZEROS,
    );
    pub const SCALA_STRING: Self = grammar!(REQUIRED_EXPONENT_DIGITS, CASE_SENSITIVE_SPECIAL);

    // R, Julia

    pub const R_LITERAL: Self = grammar!(REQUIRED_EXPONENT_DIGITS, CASE_SENSITIVE_SPECIAL);
    pub const R_STRING: Self = grammar!();
    pub const JULIA_LITERAL: Self = grammar!(
        sep = b'_';
        REQUIRED_EXPONENT_DIGITS,
        CASE_SENSITIVE_SPECIAL,
        INTEGER_INTERNAL_DIGIT_SEPARATOR,
        FRACTION_INTERNAL_DIGIT_SEPARATOR,
    );
    pub const JULIA_STRING: Self = grammar!(REQUIRED_EXPONENT_DIGITS);

    // C#

    pub const CSHARP7_LITERAL: Self = grammar!(
        sep = b'_';
        REQUIRED_FRACTION_DIGITS,
        REQUIRED_EXPONENT_DIGITS,
        NO_SPECIAL,
        INTERNAL_DIGIT_SEPARATOR,
        CONSECUTIVE_DIGIT_SEPARATOR,
    );
    pub const CSHARP7_STRING: Self = grammar!(REQUIRED_EXPONENT_DIGITS, CASE_SENSITIVE_SPECIAL);
    /// Digit separators arrived in C# 7.
    pub const CSHARP6_LITERAL: Self =
        grammar!(REQUIRED_FRACTION_DIGITS, REQUIRED_EXPONENT_DIGITS, NO_SPECIAL);
    pub const CSHARP6_STRING: Self = grammar!(REQUIRED_EXPONENT_DIGITS, CASE_SENSITIVE_SPECIAL);
    pub const CSHARP5_LITERAL: Self =
        grammar!(REQUIRED_FRACTION_DIGITS, REQUIRED_EXPONENT_DIGITS, NO_SPECIAL);
    pub const CSHARP5_STRING: Self = grammar!(REQUIRED_EXPONENT_DIGITS, CASE_SENSITIVE_SPECIAL);
    pub const CSHARP4_LITERAL: Self =
        grammar!(REQUIRED_FRACTION_DIGITS, REQUIRED_EXPONENT_DIGITS, NO_SPECIAL);
    pub const CSHARP4_STRING: Self = grammar!(REQUIRED_EXPONENT_DIGITS, CASE_SENSITIVE_SPECIAL);
    pub const CSHARP3_LITERAL: Self =
        grammar!(REQUIRED_FRACTION_DIGITS, REQUIRED_EXPONENT_DIGITS, NO_SPECIAL);
    pub const CSHARP3_STRING: Self = grammar!(REQUIRED_EXPONENT_DIGITS, CASE_SENSITIVE_SPECIAL);
    pub const CSHARP2_LITERAL: Self =
        grammar!(REQUIRED_FRACTION_DIGITS, REQUIRED_EXPONENT_DIGITS, NO_SPECIAL);
    pub const CSHARP2_STRING: Self = grammar!(REQUIRED_EXPONENT_DIGITS, CASE_SENSITIVE_SPECIAL);
    pub const CSHARP1_LITERAL: Self =
        grammar!(REQUIRED_FRACTION_DIGITS, REQUIRED_EXPONENT_DIGITS, NO_SPECIAL);
    pub const CSHARP1_STRING: Self = grammar!(REQUIRED_EXPONENT_DIGITS, CASE_SENSITIVE_SPECIAL);
    pub const CSHARP_LITERAL: Self = Self::CSHARP7_LITERAL;
    pub const CSHARP_STRING: Self = Self::CSHARP7_STRING;

    // Schemes

    pub const KAWA_LITERAL: Self = grammar!(REQUIRED_EXPONENT_DIGITS, NO_SPECIAL);
    pub const KAWA_STRING: Self = grammar!(REQUIRED_EXPONENT_DIGITS, NO_SPECIAL);
    pub const GAMBITC_LITERAL: Self = grammar!(REQUIRED_EXPONENT_DIGITS, NO_SPECIAL);
    pub const GAMBITC_STRING: Self = grammar!(REQUIRED_EXPONENT_DIGITS, NO_SPECIAL);
    pub const GUILE_LITERAL: Self = grammar!(REQUIRED_EXPONENT_DIGITS, NO_SPECIAL);
    pub const GUILE_STRING: Self = grammar!(REQUIRED_EXPONENT_DIGITS, NO_SPECIAL);

    // BEAM: Erlang, Elixir

    pub const ERLANG_LITERAL: Self =
        grammar!(REQUIRED_DIGITS, NO_EXPONENT_WITHOUT_FRACTION, CASE_SENSITIVE_SPECIAL);
    pub const ERLANG_STRING: Self =
        grammar!(REQUIRED_DIGITS, NO_EXPONENT_WITHOUT_FRACTION, NO_SPECIAL);
    pub const ELIXIR_LITERAL: Self = grammar!(
        sep = b'_';
        REQUIRED_DIGITS,
        NO_EXPONENT_WITHOUT_FRACTION,
        NO_SPECIAL,
        INTERNAL_DIGIT_SEPARATOR,
    );
    pub const ELIXIR_STRING: Self =
        grammar!(REQUIRED_DIGITS, NO_EXPONENT_WITHOUT_FRACTION, NO_SPECIAL);

    // Elm

    pub const ELM_LITERAL: Self = grammar!(
        REQUIRED_DIGITS,
        NO_POSITIVE_MANTISSA_SIGN,
        NO_INTEGER_LEADING_ZEROS,
        NO_FLOAT_LEADING_ZEROS,
    );
    pub const ELM_STRING: Self = grammar!(REQUIRED_EXPONENT_DIGITS, CASE_SENSITIVE_SPECIAL);

    // Fortran, D, CoffeeScript, Cobol

    pub const FORTRAN_LITERAL: Self = grammar!(REQUIRED_EXPONENT_DIGITS, NO_SPECIAL);
    pub const FORTRAN_STRING: Self = grammar!(REQUIRED_EXPONENT_DIGITS);
    pub const D_LITERAL: Self = grammar!(
        sep = b'_';
        REQUIRED_EXPONENT_DIGITS,
        NO_SPECIAL,
        NO_INTEGER_LEADING_ZEROS,
        INTERNAL_DIGIT_SEPARATOR,
        TRAILING_DIGIT_SEPARATOR,
        CONSECUTIVE_DIGIT_SEPARATOR,
    );
    pub const D_STRING: Self = grammar!(
        sep = b'_';
        REQUIRED_EXPONENT_DIGITS,
        INTEGER_INTERNAL_DIGIT_SEPARATOR,
        FRACTION_INTERNAL_DIGIT_SEPARATOR,
        INTEGER_TRAILING_DIGIT_SEPARATOR,
        FRACTION_TRAILING_DIGIT_SEPARATOR,
    );
    pub const COFFEESCRIPT_LITERAL: Self = grammar!(
        REQUIRED_EXPONENT_DIGITS,
        CASE_SENSITIVE_SPECIAL,
        NO_INTEGER_LEADING_ZEROS,
        NO_FLOAT_LEADING_ZEROS,
    );
    pub const COFFEESCRIPT_STRING: Self = grammar!(CASE_SENSITIVE_SPECIAL);
    pub const COBOL_LITERAL: Self = grammar!(
        REQUIRED_FRACTION_DIGITS,
        REQUIRED_EXPONENT_DIGITS,
        NO_EXPONENT_WITHOUT_FRACTION,
        NO_SPECIAL,
    );
    pub const COBOL_STRING: Self = grammar!(REQUIRED_EXPONENT_SIGN, NO_SPECIAL);

    // ML family: F#, OCaml, ReasonML

    pub const FSHARP_LITERAL: Self = grammar!(
        sep = b'_';
        REQUIRED_INTEGER_DIGITS,
        REQUIRED_EXPONENT_DIGITS,
        CASE_SENSITIVE_SPECIAL,
        INTERNAL_DIGIT_SEPARATOR,
        CONSECUTIVE_DIGIT_SEPARATOR,
    );
    pub const FSHARP_STRING: Self = grammar!(
        sep = b'_';
        REQUIRED_EXPONENT_DIGITS,
        CASE_SENSITIVE_SPECIAL,
        INTERNAL_DIGIT_SEPARATOR,
        LEADING_DIGIT_SEPARATOR,
        TRAILING_DIGIT_SEPARATOR,
        CONSECUTIVE_DIGIT_SEPARATOR,
        SPECIAL_DIGIT_SEPARATOR,
    );
    pub const OCAML_LITERAL: Self = grammar!(
        sep = b'_';
        REQUIRED_INTEGER_DIGITS,
        REQUIRED_EXPONENT_DIGITS,
        NO_POSITIVE_MANTISSA_SIGN,
        CASE_SENSITIVE_SPECIAL,
        INTERNAL_DIGIT_SEPARATOR,
        FRACTION_LEADING_DIGIT_SEPARATOR,
        TRAILING_DIGIT_SEPARATOR,
        CONSECUTIVE_DIGIT_SEPARATOR,
    );
    pub const OCAML_STRING: Self = grammar!(
        sep = b'_';
        REQUIRED_EXPONENT_DIGITS,
        INTERNAL_DIGIT_SEPARATOR,
        LEADING_DIGIT_SEPARATOR,
        TRAILING_DIGIT_SEPARATOR,
        CONSECUTIVE_DIGIT_SEPARATOR,
        SPECIAL_DIGIT_SEPARATOR,
    );
    pub const REASONML_LITERAL: Self = grammar!(
        sep = b'_';
        REQUIRED_INTEGER_DIGITS,
        REQUIRED_EXPONENT_DIGITS,
        CASE_SENSITIVE_SPECIAL,
        INTERNAL_DIGIT_SEPARATOR,
        FRACTION_LEADING_DIGIT_SEPARATOR,
        TRAILING_DIGIT_SEPARATOR,
        CONSECUTIVE_DIGIT_SEPARATOR,
    );
    pub const REASONML_STRING: Self = Self::OCAML_STRING;

    // Visual Basic, Objective-C

    pub const VB_LITERAL: Self =
        grammar!(REQUIRED_FRACTION_DIGITS, REQUIRED_EXPONENT_DIGITS, NO_SPECIAL);
    pub const VB_STRING: Self = grammar!(REQUIRED_EXPONENT_DIGITS, CASE_SENSITIVE_SPECIAL);
    pub const OBJECTIVEC_LITERAL: Self = grammar!(REQUIRED_EXPONENT_DIGITS, NO_SPECIAL);
    pub const OBJECTIVEC_STRING: Self = grammar!(REQUIRED_EXPONENT_DIGITS, NO_SPECIAL);

    // Octave, Matlab

    pub const OCTAVE_LITERAL: Self = grammar!(
        sep = b'_';
        REQUIRED_EXPONENT_DIGITS,
        CASE_SENSITIVE_SPECIAL,
        INTERNAL_DIGIT_SEPARATOR,
        FRACTION_LEADING_DIGIT_SEPARATOR,
        TRAILING_DIGIT_SEPARATOR,
        CONSECUTIVE_DIGIT_SEPARATOR,
    );
    /// `str2double` accepts thousands separators.
    pub const OCTAVE_STRING: Self = grammar!(
        sep = b',';
        REQUIRED_EXPONENT_DIGITS,
        INTERNAL_DIGIT_SEPARATOR,
        LEADING_DIGIT_SEPARATOR,
        TRAILING_DIGIT_SEPARATOR,
        CONSECUTIVE_DIGIT_SEPARATOR,
    );
    pub const MATLAB_LITERAL: Self = Self::OCTAVE_LITERAL;
    pub const MATLAB_STRING: Self = Self::OCTAVE_STRING;

    // Zig, Sage

    pub const ZIG_LITERAL: Self =
        grammar!(REQUIRED_INTEGER_DIGITS, NO_POSITIVE_MANTISSA_SIGN, NO_SPECIAL);
    pub const ZIG_STRING: Self = grammar!();
    pub const SAGE_LITERAL: Self = grammar!(REQUIRED_EXPONENT_DIGITS, CASE_SENSITIVE_SPECIAL);
    pub const SAGE_STRING: Self =
        grammar!(sep = b'_'; REQUIRED_EXPONENT_DIGITS, INTERNAL_DIGIT_SEPARATOR);

    // Data formats

    pub const JSON: Self = grammar!(
        REQUIRED_DIGITS,
        NO_POSITIVE_MANTISSA_SIGN,
        NO_SPECIAL,
        NO_INTEGER_LEADING_ZEROS,
        NO_FLOAT_LEADING_ZEROS,
    );
    /// YAML 1.2 defers to JSON for floats.
    pub const YAML: Self = Self::JSON;
    /// `_` between digits, as in `1_000.000_1`.
    pub const TOML: Self = grammar!(
        sep = b'_';
        REQUIRED_DIGITS,
        NO_SPECIAL,
        INTERNAL_DIGIT_SEPARATOR,
        NO_INTEGER_LEADING_ZEROS,
        NO_FLOAT_LEADING_ZEROS,
    );
    pub const XML: Self = grammar!(CASE_SENSITIVE_SPECIAL);
    pub const SQLITE: Self = grammar!(REQUIRED_EXPONENT_DIGITS, NO_SPECIAL);
    pub const POSTGRESQL: Self = grammar!(REQUIRED_EXPONENT_DIGITS, NO_SPECIAL);
    pub const MYSQL: Self = grammar!(REQUIRED_EXPONENT_DIGITS, NO_SPECIAL);
    pub const MONGODB: Self =
        grammar!(REQUIRED_EXPONENT_DIGITS, CASE_SENSITIVE_SPECIAL, NO_FLOAT_LEADING_ZEROS);
}

#[cfg(test)]
mod tests;
