//! Plain-text rendering of the current screen.

use std::fmt::Write;

use app_state::catalog::{self, PRICE_UNIT};
use app_state::{AppState, AuthMode, CommunityView, Screen, Tab};
use mkulima_core::{CropResearchResult, Locale, TranscriptEntry};

const METER_WIDTH: usize = 20;

/// Pick the string for the active locale.
fn tr(locale: Locale, sw: &'static str, en: &'static str) -> &'static str {
    match locale {
        Locale::Sw => sw,
        Locale::En => en,
    }
}

fn meter(fraction: f64) -> String {
    let filled = (fraction * METER_WIDTH as f64).round() as usize;
    let filled = filled.min(METER_WIDTH);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(METER_WIDTH - filled))
}

/// Render the whole screen.
pub fn render(app: &AppState) -> String {
    let mut out = String::new();
    let locale = app.locale();
    let _ = writeln!(
        out,
        "\n=== Nasafari Mkulima ===  ({} | {})",
        locale.native_name(),
        app.theme().as_str()
    );

    match app.screen() {
        Screen::Landing => render_landing(&mut out, locale),
        Screen::Auth => render_auth(&mut out, app),
        Screen::App => render_app(&mut out, app),
    }
    out
}

fn render_landing(out: &mut String, locale: Locale) {
    let _ = writeln!(
        out,
        "{}",
        tr(
            locale,
            "Ushauri wa kilimo kwa msaada wa AI, kwa lugha yako.",
            "AI farm advice, in your language."
        )
    );
    let _ = writeln!(out, "{}", tr(locale, "Andika `start` kuanza.", "Type `start` to begin."));
}

fn render_auth(out: &mut String, app: &AppState) {
    let locale = app.locale();
    let heading = match app.auth_mode() {
        AuthMode::Login => tr(locale, "Ingia", "Sign in"),
        AuthMode::Signup => tr(locale, "Jisajili", "Create account"),
    };
    let _ = writeln!(out, "-- {} --", heading);
    let _ = writeln!(out, "login <email>   |   signup   |   back");
}

fn render_app(out: &mut String, app: &AppState) {
    let locale = app.locale();
    let active = app.tab();

    let nav: Vec<String> = app
        .visible_tabs()
        .into_iter()
        .map(|tab| {
            if Some(tab) == active {
                format!("[{}]", tab.label(locale))
            } else {
                tab.label(locale).to_string()
            }
        })
        .collect();
    let _ = writeln!(out, "{}", nav.join(" | "));
    if let Some(profile) = app.profile() {
        let _ = writeln!(out, "{} ({}, {})", profile.name, profile.region, profile.role);
    }
    let _ = writeln!(out);

    match active {
        Some(Tab::Dashboard) | None => render_dashboard(out, app),
        Some(Tab::MyFarm) => render_farm(out, app),
        Some(Tab::Weather) => render_weather(out),
        Some(Tab::Pest) => render_pest(out, app),
        Some(Tab::Market) => render_market(out, locale),
        Some(Tab::Chat) => render_chat(out, app),
        Some(Tab::Community) => render_community(out, app),
        Some(Tab::Admin) => render_admin(out),
        Some(Tab::Settings) => render_settings(out, app),
    }
}

fn render_dashboard(out: &mut String, app: &AppState) {
    let locale = app.locale();
    let name = app.profile().map(|p| p.name.as_str()).unwrap_or_default();
    let _ = writeln!(out, "{}, {}!", tr(locale, "Karibu", "Welcome"), name);
    let weather = catalog::weather();
    let _ = writeln!(out, "{}°C  {}", weather.temperature_c, weather.humidity);
    render_market(out, locale);
}

fn render_farm(out: &mut String, app: &AppState) {
    let locale = app.locale();
    let farm = app.farm();
    let crops: Vec<&str> = catalog::crop_samples().iter().map(|c| c.name).collect();
    let _ = writeln!(out, "{}: {}", tr(locale, "Mazao", "Crops"), crops.join(", "));

    if let Some(selected) = farm.selected() {
        let _ = writeln!(out, "\n>> {}", selected);
    }
    if farm.is_loading() {
        let _ = writeln!(out, "{}", tr(locale, "Inatafiti...", "Researching..."));
    }
    if let Some(error) = farm.error() {
        let _ = writeln!(out, "! {}", error);
    }
    if let Some(research) = farm.research() {
        render_research(out, research, locale);
    }
}

fn render_research(out: &mut String, research: &CropResearchResult, locale: Locale) {
    if research.is_empty() {
        let _ = writeln!(out, "{}", tr(locale, "Hakuna taarifa.", "No information."));
        return;
    }
    let rows = [
        ("Climate Conditions", &research.climate),
        ("Soil Requirements", &research.soil),
        ("Common Pests", &research.pests),
        ("Expected Yield", &research.expected_yield),
    ];
    for (label, value) in rows {
        if let Some(value) = value {
            let _ = writeln!(out, "{}: {}", label, value);
        }
    }
}

fn render_weather(out: &mut String) {
    let weather = catalog::weather();
    let _ = writeln!(out, "{}°C", weather.temperature_c);
    let _ = writeln!(out, "Humidity {}  Wind Speed {}", weather.humidity, weather.wind);
    let days: Vec<String> = weather
        .forecast
        .iter()
        .map(|(day, high)| format!("{} {}°", day, high))
        .collect();
    let _ = writeln!(out, "{}", days.join("  "));
}

fn render_pest(out: &mut String, app: &AppState) {
    let locale = app.locale();
    let pest = app.pest();
    match pest.upload_ref() {
        Some(upload) => {
            let _ = writeln!(out, "{}: {}", tr(locale, "Picha", "Image"), upload.source);
        }
        None => {
            let _ = writeln!(
                out,
                "{}",
                tr(locale, "Pakia picha: scan <path>", "Upload a photo: scan <path>")
            );
        }
    }
    if pest.is_loading() {
        let _ = writeln!(out, "{}", tr(locale, "Inachunguza...", "Analysing..."));
    }
    if let Some(error) = pest.error() {
        let _ = writeln!(out, "! {}", error);
    }
    if let Some(result) = pest.result() {
        let _ = writeln!(out, "{}: {}", tr(locale, "Utambuzi", "Diagnosis"), result.diagnosis);
        let _ = writeln!(out, "{}: {}", tr(locale, "Matibabu", "Treatment"), result.treatment);
        let _ = writeln!(out, "{} {}%", meter(result.meter_fraction()), result.confidence);
    }
}

fn render_market(out: &mut String, locale: Locale) {
    let _ = writeln!(out, "-- {} --", tr(locale, "Bei za Soko", "Market Highlights"));
    for item in catalog::market_prices() {
        let _ = writeln!(
            out,
            "{} {:<10} {:>12}  {}",
            item.trend.arrow(),
            item.commodity,
            item.price,
            item.location
        );
    }
    let _ = writeln!(out, "({})", PRICE_UNIT);
}

fn render_chat(out: &mut String, app: &AppState) {
    let locale = app.locale();
    let chat = app.chat();
    for (index, entry) in chat.transcript().entries().iter().enumerate() {
        match entry {
            TranscriptEntry::User { text } => {
                let _ = writeln!(out, "{:>3}. > {}", index, text);
            }
            TranscriptEntry::Advisor(advice) => {
                let _ = writeln!(out, "{:>3}. {}", index, advice.advice);
                let _ = writeln!(out, "     {} {}%", meter(advice.meter_fraction()), advice.confidence);
                if chat.expanded_reasoning() == Some(index) {
                    let _ = writeln!(out, "     {}: {}", tr(locale, "Sababu", "Reasoning"), advice.reasoning);
                }
            }
        }
    }
    if chat.is_loading() {
        let _ = writeln!(out, "{}", tr(locale, "Mshauri anafikiri...", "The advisor is thinking..."));
    }
    if let Some(error) = chat.error() {
        let _ = writeln!(out, "! {}", error);
    }
    if chat.transcript().is_empty() {
        let _ = writeln!(out, "{}", tr(locale, "Uliza swali: ask <swali>", "Ask a question: ask <question>"));
    }
}

fn render_community(out: &mut String, app: &AppState) {
    let hub = app.community();
    let _ = writeln!(out, "view: articles | forum | chat   (now: {})\n", hub.view());
    match hub.view() {
        CommunityView::Articles => {
            for article in hub.articles() {
                let _ = writeln!(out, "[{}] {}", article.category, article.title);
                let _ = writeln!(out, "    {}", article.excerpt);
                let _ = writeln!(out, "    {} · {}", article.author, article.date);
            }
        }
        CommunityView::Forum => {
            let _ = writeln!(out, "Nasafari Farmer Forum");
            let _ = writeln!(out, "Wasiliana na wakulima wengine kote Tanzania.\n");
            for post in hub.forum_posts() {
                let _ = writeln!(out, "{}: {}", post.author, post.body);
                let _ = writeln!(out, "    Reply ({})", post.replies);
            }
        }
        CommunityView::Chat => {
            let _ = writeln!(out, "Live Peer Chat");
            for message in hub.messages() {
                let _ = writeln!(out, "[{}] {}: {}", message.time, message.user, message.text);
            }
        }
    }
}

fn render_admin(out: &mut String) {
    for (label, value) in catalog::admin_stats() {
        let _ = writeln!(out, "{:<16} {}", label, value);
    }
}

fn render_settings(out: &mut String, app: &AppState) {
    let locale = app.locale();
    let _ = writeln!(out, "{}: {}  (lang)", tr(locale, "Lugha", "Language"), locale.native_name());
    let _ = writeln!(out, "{}: {}  (theme)", tr(locale, "Mandhari", "Theme"), app.theme().as_str());
    if let Some(profile) = app.profile() {
        let _ = writeln!(out, "{}", profile.email);
        let _ = writeln!(out, "{:?} · {:?}", profile.experience, profile.subscription);
    }
}
