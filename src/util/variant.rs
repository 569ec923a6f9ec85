//! Size and variant tokens for spinners and buttons.
//!
//! DESIGN
//! ======
//! Props are typed enums so the class mapping is exhaustive. Hosts that
//! pass plain strings (`size="sm"`) go through `From<&str>`, which falls back
//! to the default token and logs a warning instead of failing the render.

use std::str::FromStr;

#[cfg(test)]
#[path = "variant_test.rs"]
mod variant_test;

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VariantError {
    #[error("unknown {kind} token: {value:?}")]
    Unknown { kind: &'static str, value: String },
}

fn parse_token<T: Copy>(kind: &'static str, raw: &str, table: &[(&str, T)]) -> Result<T, VariantError> {
    let needle = raw.trim().to_ascii_lowercase();
    table
        .iter()
        .find(|(token, _)| *token == needle)
        .map(|(_, value)| *value)
        .ok_or_else(|| VariantError::Unknown { kind, value: raw.to_owned() })
}

fn parse_or_default<T: FromStr<Err = VariantError> + Default>(raw: &str) -> T {
    raw.parse().unwrap_or_else(|e: VariantError| {
        leptos::logging::warn!("{e}; using default");
        T::default()
    })
}

// =============================================================================
// SPINNER SIZE
// =============================================================================

/// Spinner icon size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpinnerSize {
    Sm,
    #[default]
    Default,
    Lg,
}

impl SpinnerSize {
    /// Fixed height/width pairing for the spinner icon.
    pub fn class(self) -> &'static str {
        match self {
            Self::Sm => "h-4 w-4",
            Self::Default => "h-6 w-6",
            Self::Lg => "h-8 w-8",
        }
    }
}

impl FromStr for SpinnerSize {
    type Err = VariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_token("spinner size", s, &[("sm", Self::Sm), ("default", Self::Default), ("lg", Self::Lg)])
    }
}

impl From<&str> for SpinnerSize {
    fn from(raw: &str) -> Self {
        parse_or_default(raw)
    }
}

// =============================================================================
// BUTTON VARIANT / SIZE
// =============================================================================

/// Button colour scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Default,
    Destructive,
    Outline,
    Secondary,
    Ghost,
    Link,
}

impl ButtonVariant {
    pub fn class(self) -> &'static str {
        match self {
            Self::Default => "bg-primary text-primary-foreground hover:bg-primary/90",
            Self::Destructive => "bg-destructive text-destructive-foreground hover:bg-destructive/90",
            Self::Outline => "border border-input bg-background hover:bg-accent hover:text-accent-foreground",
            Self::Secondary => "bg-secondary text-secondary-foreground hover:bg-secondary/80",
            Self::Ghost => "hover:bg-accent hover:text-accent-foreground",
            Self::Link => "text-primary underline-offset-4 hover:underline",
        }
    }
}

impl FromStr for ButtonVariant {
    type Err = VariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_token(
            "button variant",
            s,
            &[
                ("default", Self::Default),
                ("destructive", Self::Destructive),
                ("outline", Self::Outline),
                ("secondary", Self::Secondary),
                ("ghost", Self::Ghost),
                ("link", Self::Link),
            ],
        )
    }
}

impl From<&str> for ButtonVariant {
    fn from(raw: &str) -> Self {
        parse_or_default(raw)
    }
}

/// Button height and padding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Default,
    Sm,
    Lg,
    Icon,
}

impl ButtonSize {
    pub fn class(self) -> &'static str {
        match self {
            Self::Default => "h-10 px-4 py-2",
            Self::Sm => "h-9 rounded-md px-3",
            Self::Lg => "h-11 rounded-md px-8",
            Self::Icon => "h-10 w-10",
        }
    }
}

impl FromStr for ButtonSize {
    type Err = VariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_token(
            "button size",
            s,
            &[("default", Self::Default), ("sm", Self::Sm), ("lg", Self::Lg), ("icon", Self::Icon)],
        )
    }
}

impl From<&str> for ButtonSize {
    fn from(raw: &str) -> Self {
        parse_or_default(raw)
    }
}
