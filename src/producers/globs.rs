//! File globs shared by the built-in producers.

pub const GLOB_SRC_EXT: &str = "?([cm])[jt]s?(x)";
pub const GLOB_SRC: &str = "**/*.?([cm])[jt]s?(x)";

pub const GLOB_JS: &str = "**/*.?([cm])js";
pub const GLOB_JSX: &str = "**/*.?([cm])jsx";
pub const GLOB_TS: &str = "**/*.?([cm])ts";
pub const GLOB_TSX: &str = "**/*.?([cm])tsx";

pub const GLOB_JSON: &str = "**/*.json";
pub const GLOB_JSON5: &str = "**/*.json5";
pub const GLOB_JSONC: &str = "**/*.jsonc";

pub const GLOB_YAML: &str = "**/*.y?(a)ml";
pub const GLOB_TOML: &str = "**/*.toml";
pub const GLOB_MARKDOWN: &str = "**/*.md";

pub const GLOB_CSS: &str = "**/*.css";
pub const GLOB_POSTCSS: &str = "**/*.{p,post}css";
pub const GLOB_LESS: &str = "**/*.less";
pub const GLOB_SCSS: &str = "**/*.scss";
pub const GLOB_HTML: &str = "**/*.htm?(l)";

/// Paths no built-in fragment should ever lint.
pub const GLOB_EXCLUDE: &[&str] = &[
    "**/node_modules",
    "**/dist",
    "**/package-lock.json",
    "**/yarn.lock",
    "**/pnpm-lock.yaml",
    "**/bun.lockb",
    "**/output",
    "**/coverage",
    "**/temp",
    "**/.cache",
    "**/.output",
    "**/.next",
    "**/.nuxt",
    "**/.vercel",
    "**/.changeset",
    "**/.idea",
    "**/CHANGELOG*.md",
    "**/*.min.*",
    "**/LICENSE*",
    "**/__snapshots__",
];

/// Owned copies of `globs`, for fragment builders.
pub fn owned(globs: &[&str]) -> Vec<String> {
    globs.iter().map(|g| g.to_string()).collect()
}
