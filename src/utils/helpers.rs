//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the crate.

use std::sync::OnceLock;
use chrono::{NaiveDate, Utc};
use regex::Regex;
use uuid::Uuid;

/// Generate a new UUID v4
pub fn generate_uuid() -> String {
    Uuid::new_v4().to_string()
}

/// Today's date in UTC
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Format a date the way the site displays it (dd/mm/yyyy)
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Format an amount with thousands separated by spaces, e.g. `15 000 FCFA`
pub fn format_amount(amount: u64, currency: &str) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    format!("{} {}", grouped, currency)
}

fn whatsapp_regex() -> &'static Regex {
    static WHATSAPP: OnceLock<Regex> = OnceLock::new();
    WHATSAPP.get_or_init(|| {
        Regex::new(r"^\+?[0-9]{8,15}$").expect("whatsapp pattern is valid")
    })
}

/// Strip spaces, dots and dashes from a phone number
pub fn normalize_whatsapp(contact: &str) -> String {
    contact
        .chars()
        .filter(|c| !matches!(c, ' ' | '.' | '-' | '(' | ')'))
        .collect()
}

/// Check a WhatsApp contact (international or local digits)
pub fn is_valid_whatsapp(contact: &str) -> bool {
    whatsapp_regex().is_match(&normalize_whatsapp(contact))
}

/// Build a wa.me link for a contact
pub fn whatsapp_link(contact: &str) -> String {
    let digits = normalize_whatsapp(contact);
    format!("https://wa.me/{}", digits.trim_start_matches('+'))
}

/// Accepts http(s) URLs and embedded `data:image/...` payloads
pub fn is_valid_image_source(source: &str) -> bool {
    if source.starts_with("data:image/") {
        return source.contains(";base64,");
    }
    match url::Url::parse(source) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

/// Case-insensitive substring match used by search boxes
pub fn matches_search(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim();
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}
