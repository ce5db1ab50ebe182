//! Built-in highlight language table
//!
//! Canonical keys are the identifiers understood by the syntax highlighter.
//! Entries are kept in alphabetical key order; alias resolution walks the
//! table in this order, so the first entry claiming an alias wins.

/// One highlightable language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageEntry {
    /// Canonical highlight key (always lowercase)
    pub key: &'static str,
    /// Human-readable label shown above code blocks
    pub display_name: &'static str,
    /// File extensions (without the leading dot)
    pub extensions: &'static [&'static str],
    /// Alternate tokens that resolve to `key`
    pub aliases: &'static [&'static str],
}

impl LanguageEntry {
    pub fn has_alias(&self, token: &str) -> bool {
        self.aliases.iter().any(|a| *a == token)
    }
}

const fn entry(
    key: &'static str,
    display_name: &'static str,
    extensions: &'static [&'static str],
    aliases: &'static [&'static str],
) -> LanguageEntry {
    LanguageEntry {
        key,
        display_name,
        extensions,
        aliases,
    }
}

/// All built-in languages, in lookup order.
pub static LANGUAGES: &[LanguageEntry] = &[
    entry("actionscript", "ActionScript", &["as"], &["as", "as3"]),
    entry("applescript", "AppleScript", &["applescript", "osascript", "scpt"], &[]),
    entry("bash", "Bash", &["sh"], &["sh"]),
    entry(
        "clojure",
        "Clojure",
        &["clj", "boot", "cl2", "cljc", "cljs", "cljs.hl", "cljscm", "cljx", "hic"],
        &[],
    ),
    entry(
        "coffeescript",
        "CoffeeScript",
        &["coffee", "_coffee", "cake", "cjsx", "cson", "iced"],
        &["coffee", "coffee-script"],
    ),
    entry("cpp", "C/C++", &["cpp", "c", "cc", "h", "c++", "h++", "hpp"], &["c++", "c"]),
    entry("cs", "C#", &["cs", "csharp"], &["c#", "csharp"]),
    entry("css", "CSS", &["css"], &[]),
    entry("d", "D", &["d", "di"], &["dlang"]),
    entry("dart", "Dart", &["dart"], &[]),
    entry(
        "delphi",
        "Delphi",
        &["delphi", "dpr", "dfm", "pas", "pascal", "freepascal", "lazarus", "lpr", "lfm"],
        &[],
    ),
    entry("diff", "Diff", &["diff", "patch"], &["patch", "udiff"]),
    entry("django", "Django", &["django", "jinja"], &[]),
    entry("dockerfile", "Dockerfile", &["dockerfile", "docker"], &["docker"]),
    entry("elixir", "Elixir", &["ex", "exs"], &["ex", "exs"]),
    entry("erlang", "Erlang", &["erl"], &["erl"]),
    entry("fortran", "Fortran", &["f90", "f95"], &[]),
    entry("fsharp", "F#", &["fsharp", "fs"], &[]),
    entry("gcode", "G-Code", &["gcode", "nc"], &[]),
    entry("go", "Go", &["go"], &["golang"]),
    entry("groovy", "Groovy", &["groovy"], &[]),
    entry(
        "handlebars",
        "Handlebars",
        &["handlebars", "hbs", "html.hbs", "html.handlebars"],
        &["hbs", "mustache"],
    ),
    entry("haskell", "Haskell", &["hs"], &["hs"]),
    entry("haxe", "Haxe", &["hx"], &[]),
    entry("java", "Java", &["java", "jsp"], &[]),
    entry("javascript", "JavaScript", &["js", "jsx"], &["js", "jsx"]),
    entry("json", "JSON", &["json"], &[]),
    entry("julia", "Julia", &["jl"], &["jl"]),
    entry("kotlin", "Kotlin", &["kt", "ktm", "kts"], &[]),
    entry("latex", "LaTeX", &["tex"], &["tex"]),
    entry("less", "Less", &["less"], &[]),
    entry("lisp", "Lisp", &["lisp"], &[]),
    entry("lua", "Lua", &["lua"], &[]),
    entry("makefile", "Makefile", &["mk", "mak"], &["make", "mf", "gnumake", "bsdmake"]),
    entry("markdown", "Markdown", &["md", "mkdown", "mkd"], &["md", "mkd"]),
    entry("matlab", "Matlab", &["matlab", "m"], &["m"]),
    entry("objectivec", "Objective C", &["mm", "objc", "obj-c"], &["objective_c", "objc"]),
    entry("ocaml", "OCaml", &["ml"], &[]),
    entry("perl", "Perl", &["perl", "pl"], &["pl"]),
    entry(
        "pgsql",
        "PostgreSQL",
        &["pgsql", "postgres", "postgresql"],
        &["postgres", "postgresql"],
    ),
    entry(
        "php",
        "PHP",
        &["php", "php3", "php4", "php5", "php6"],
        &["php3", "php4", "php5"],
    ),
    entry("powershell", "PowerShell", &["ps", "ps1"], &["posh"]),
    entry("puppet", "Puppet", &["pp"], &["pp"]),
    entry("python", "Python", &["py", "gyp"], &["py"]),
    entry("r", "R", &["r"], &["r", "s"]),
    entry(
        "ruby",
        "Ruby",
        &["ruby", "rb", "gemspec", "podspec", "thor", "irb"],
        &["rb"],
    ),
    entry("rust", "Rust", &["rs"], &["rs"]),
    entry("scala", "Scala", &["scala"], &[]),
    entry("scheme", "Scheme", &["scm", "sld"], &[]),
    entry("scss", "SCSS", &["scss"], &[]),
    entry("smalltalk", "Smalltalk", &["st"], &["st", "squeak"]),
    entry("sql", "SQL", &["sql"], &[]),
    entry("stylus", "Stylus", &["styl"], &["styl"]),
    entry("swift", "Swift", &["swift"], &[]),
    entry("text", "Text", &["txt", "log"], &[]),
    entry("typescript", "TypeScript", &["ts", "tsx"], &["ts", "tsx"]),
    entry("vbnet", "VB.Net", &["vbnet", "vb", "bas"], &["vb", "visualbasic"]),
    entry("vbscript", "VBScript", &["vbs"], &[]),
    entry("verilog", "Verilog", &["v", "veo", "sv", "svh"], &[]),
    entry("vhdl", "VHDL", &["vhd", "vhdl"], &[]),
    entry(
        "xml",
        "HTML, XML",
        &["xml", "html", "xhtml", "rss", "atom", "xsl", "plist"],
        &[],
    ),
    entry("yaml", "YAML", &["yaml"], &["yml"]),
];

/// Look up a table entry by its canonical key (exact, case-sensitive).
pub fn entry_for_key(key: &str) -> Option<&'static LanguageEntry> {
    LANGUAGES.iter().find(|e| e.key == key)
}
