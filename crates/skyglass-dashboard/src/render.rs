//! Plain-text dashboard with ANSI styling.

use std::fmt::Write as _;

use crossterm::style::{style, Color, Stylize};
use skyglass_core::ThemePreference;

use crate::dashboard::Dashboard;
use crate::layers::TerminalLayers;
use crate::view::WeatherView;

/// Colours for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub heading: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub error: Color,
    pub backdrop: Color,
}

impl Palette {
    pub fn for_theme(theme: ThemePreference) -> Self {
        match theme {
            ThemePreference::Light => Self {
                heading: Color::DarkBlue,
                text: Color::Black,
                muted: Color::DarkGrey,
                accent: Color::DarkMagenta,
                error: Color::DarkRed,
                backdrop: Color::DarkCyan,
            },
            ThemePreference::Dark => Self {
                heading: Color::Cyan,
                text: Color::White,
                muted: Color::Grey,
                accent: Color::Yellow,
                error: Color::Red,
                backdrop: Color::Blue,
            },
        }
    }
}

/// Full dashboard: backdrop rows, current conditions, details, hourly and
/// daily forecasts, suggestions and the status line.
pub fn render(dashboard: &Dashboard<TerminalLayers>, width: usize) -> String {
    let palette = Palette::for_theme(dashboard.theme());
    let mut out = String::new();

    for row in dashboard.layers().rows(width) {
        let _ = writeln!(out, "{}", style(row).with(palette.backdrop));
    }

    match dashboard.view() {
        Some(view) => render_view(&mut out, &view, &palette),
        None => {
            let _ = writeln!(out, "{}", style("No weather loaded yet.").with(palette.muted));
        }
    }

    if let Some(message) = dashboard.error() {
        let _ = writeln!(out, "{}", style(message).with(palette.error).bold());
    }

    out
}

fn render_view(out: &mut String, view: &WeatherView, palette: &Palette) {
    let _ = writeln!(
        out,
        "{} {}",
        style(&view.city).with(palette.heading).bold(),
        style(&view.country).with(palette.muted)
    );
    let _ = writeln!(out, "{}", style(&view.local_time).with(palette.muted));
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{}  {}  {}",
        view.icon,
        style(&view.temperature).with(palette.accent).bold(),
        style(&view.condition).with(palette.text)
    );
    let _ = writeln!(out, "{}", style(&view.feels_like).with(palette.muted));
    let _ = writeln!(out);

    let details = [
        ("Humidity", &view.humidity),
        ("Wind", &view.wind),
        ("Pressure", &view.pressure),
        ("Visibility", &view.visibility),
        ("UV index", &view.uv_index),
        ("Precipitation", &view.precipitation),
    ];
    for (label, value) in details {
        let _ = writeln!(
            out,
            "  {}{}",
            style(format!("{:<14}", label)).with(palette.muted),
            style(value).with(palette.text)
        );
    }

    if !view.hourly.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", style("Next hours").with(palette.heading));
        let line = view
            .hourly
            .iter()
            .map(|h| format!("{} {} {}", h.time, h.icon, h.temperature))
            .collect::<Vec<_>>()
            .join("  ");
        let _ = writeln!(out, "  {}", style(line).with(palette.text));
    }

    if !view.daily.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", style("Forecast").with(palette.heading));
        for day in &view.daily {
            let _ = writeln!(
                out,
                "  {:<4}{}  {} / {}  {}",
                day.weekday,
                day.icon,
                style(&day.high).with(palette.accent),
                style(&day.low).with(palette.text),
                style(&day.condition).with(palette.muted)
            );
        }
    }

    if !view.recommendations.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", style("Suggestions").with(palette.heading));
        for tip in &view.recommendations {
            let _ = writeln!(out, "  • {}", style(tip).with(palette.text));
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", style(&view.data_source).with(palette.muted).dim());
}

/// Recent searches, newest first
pub fn render_recent(recent: &[String], theme: ThemePreference) -> String {
    let palette = Palette::for_theme(theme);
    if recent.is_empty() {
        return format!("{}\n", style("No recent searches.").with(palette.muted));
    }

    let mut out = format!("{}\n", style("Recent searches").with(palette.heading));
    for (i, city) in recent.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, style(city).with(palette.text));
    }
    out
}
