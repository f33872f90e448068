//! Artifact rendering: custom-property sheet, preview page, theme config.
//!
//! Every artifact is rendered fully in memory and in palette input order;
//! callers decide what to persist.

#[cfg(test)]
#[path = "assemble_test.rs"]
mod assemble_test;

use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::Serialize;

use crate::palette::{Palette, RoleTokens, ThemeTokens};
use crate::ramp::Role;
use crate::tone::Theme;

/// Rendered output artifacts for one invocation.
#[derive(Debug)]
pub struct Artifacts {
    pub css: String,
    pub html: String,
    pub config: String,
}

/// Render every artifact for the batch.
#[must_use]
pub fn assemble(palettes: &[Palette]) -> Artifacts {
    Artifacts {
        css: css(palettes),
        html: html(palettes),
        config: config(palettes),
    }
}

/// Variable family for a role: the bare slug for primary, suffixed for
/// the rest.
fn family(slug: &str, role: Role) -> String {
    match role {
        Role::Primary => slug.to_owned(),
        other => format!("{slug}-{}", other.key()),
    }
}

/// Render the custom-property sheet: light declarations under `@theme`,
/// dark under `.dark`.
#[must_use]
pub fn css(palettes: &[Palette]) -> String {
    let mut out = String::from("@theme {\n");
    for palette in palettes {
        for role in &palette.roles {
            push_role_vars(&mut out, &palette.slug, role.role, &role.light);
        }
    }
    out.push_str("}\n.dark {\n");
    for palette in palettes {
        for role in &palette.roles {
            push_role_vars(&mut out, &palette.slug, role.role, &role.dark);
        }
    }
    out.push_str("}\n");
    out
}

fn push_role_vars(out: &mut String, slug: &str, role: Role, tokens: &ThemeTokens) {
    // Writing to a String is infallible.
    let family = family(slug, role);
    let _ = writeln!(out, "\t--color-{family}:{};", tokens.default_hex);
    for token in &tokens.tokens {
        let _ = writeln!(out, "\t--color-{family}-{}:{};", token.step, token.hex);
    }
}

/// Render the preview page: per palette, a light and a dark block using
/// the same class scheme, so the two are directly comparable.
#[must_use]
pub fn html(palettes: &[Palette]) -> String {
    let mut out = String::from(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"UTF-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\
         <link rel=\"stylesheet\" type=\"text/css\" href=\"palette.css\"></head><body>",
    );
    for palette in palettes {
        push_preview(&mut out, palette, Theme::Light);
        push_preview(&mut out, palette, Theme::Dark);
    }
    out.push_str("\n</body></html>\n");
    out
}

fn push_preview(out: &mut String, palette: &Palette, theme: Theme) {
    let slug = &palette.slug;
    let (class, heading) = match theme {
        Theme::Light => ("light", format!("{slug} {}", palette.name_rgb.to_hex())),
        Theme::Dark => ("dark", format!("dark {slug} {}", palette.name_rgb.invert().to_hex())),
    };
    let _ = writeln!(out, "\n<main class=\"{class}\">");
    let _ = writeln!(
        out,
        "<section><h1 class=\"text-{slug}-600\">{heading}</h1></section>"
    );
    for role in &palette.roles {
        push_role_section(out, slug, role);
    }
    push_semantic_sections(out, slug, theme);
    let _ = writeln!(out, "</main>");
}

/// One role row: the DEFAULT swatch, then tone swatches in descending
/// step order. Classes use the light step labels in both themes; the
/// `.dark` scope swaps the resolved values, not the names.
fn push_role_section(out: &mut String, slug: &str, role: &RoleTokens) {
    let family = family(slug, role.role);
    let _ = writeln!(out, "<section>");
    let _ = writeln!(
        out,
        "<button class=\"bg-{family} text-{slug}-100\" title=\"{}\"></button>",
        role.role.label()
    );
    let _ = writeln!(out, "<button class=\"arrow text-{slug}-0\">⟶</button>");

    for token in role.light.tokens.iter().rev() {
        let text = if token.tone < 60 { "white" } else { "black" };
        let _ = writeln!(
            out,
            "<button class=\"tone text-{text} bg-{family}-{}\">{}</button>",
            token.step, token.step
        );
    }
    let _ = writeln!(out, "</section>");
}

fn push_semantic_sections(out: &mut String, slug: &str, theme: Theme) {
    let c = slug;
    let sections: [Vec<(String, String, &str)>; 2] = match theme {
        Theme::Light => [
            vec![
                (format!("text-{c}-50"), format!("bg-{c}-700"), "Primary"),
                (format!("text-{c}"), format!("bg-{c}-50"), "On Primary"),
                (format!("text-{c}"), format!("bg-{c}-200"), "Primary Container"),
                (format!("text-{c}-200"), format!("bg-{c}-950"), "On Primary Container"),
            ],
            vec![
                (format!("text-{c}-950"), format!("bg-{c}-neutral-50"), "Background"),
                (format!("text-{c}-neutral-50"), format!("bg-{c}-neutral-950"), "On Background"),
                (format!("text-{c}-neutral-950"), format!("bg-{c}-neutral-50"), "Surface"),
                (format!("text-{c}-neutral-200"), format!("bg-{c}-neutral-950"), "On Surface"),
            ],
        ],
        Theme::Dark => [
            vec![
                (format!("text-{c}-50"), format!("bg-{c}-700"), "Primary"),
                (format!("text-{c}-400"), format!("bg-{c}-950"), "On Primary"),
                (format!("text-{c}-950"), format!("bg-{c}-400"), "Primary Container"),
                (format!("text-{c}-300"), format!("bg-{c}-600"), "On Primary Container"),
            ],
            vec![
                (format!("text-{c}-neutral"), format!("bg-{c}-neutral-950"), "Background"),
                (format!("text-{c}-neutral"), format!("bg-{c}-neutral-700"), "On Background"),
                (format!("text-{c}-neutral"), format!("bg-{c}-neutral-900"), "Surface"),
                (format!("text-{c}-neutral"), format!("bg-{c}-neutral-600"), "On Surface"),
            ],
        ],
    };

    for articles in sections {
        let _ = writeln!(out, "<section>");
        for (text, bg, label) in articles {
            let _ = writeln!(out, "<article class=\"{text} {bg}\">{label}</article>");
        }
        let _ = writeln!(out, "</section>");
    }
}

/// One family's entry in the theme config. Values are CSS variable
/// references, never literal colors, so the config stays valid when the
/// sheet is regenerated.
#[derive(Debug, Serialize)]
struct FamilyConfig {
    family: String,
    #[serde(rename = "DEFAULT")]
    default: String,
    steps: BTreeMap<u16, String>,
}

/// Render the design-system color config: a JSON array in input order.
#[must_use]
pub fn config(palettes: &[Palette]) -> String {
    let families: Vec<FamilyConfig> = palettes
        .iter()
        .flat_map(|palette| {
            palette.roles.iter().map(move |role| {
                let family = family(&palette.slug, role.role);
                let steps = role
                    .light
                    .tokens
                    .iter()
                    .map(|t| (t.step, format!("var(--color-{family}-{})", t.step)))
                    .collect();
                FamilyConfig {
                    default: format!("var(--color-{family})"),
                    family,
                    steps,
                }
            })
        })
        .collect();

    // Serializing plain strings and integer keys cannot fail.
    let mut json = serde_json::to_string_pretty(&families).unwrap_or_default();
    json.push('\n');
    json
}
