// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Dialog colours.

use ratatui::style::{Color, Modifier, Style};

const ACCENT: Color = Color::Rgb(0x00, 0x7A, 0xB9);
const SHADOW: Color = Color::Rgb(0x33, 0x33, 0x33);
const FIELD: Color = Color::Rgb(0xE0, 0xE0, 0xE0);

/// Styles shared by every dialog.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Full-screen background behind the dialog.
    pub screen: Style,
    pub frame_label: Style,
    pub body: Style,
    pub shadow: Style,
    pub button: Style,
    pub button_focused: Style,
    /// Text entry field.
    pub field: Style,
    pub hint: Style,
}

impl Default for Theme {
    fn default() -> Self {
        let body = Style::default().bg(Color::White).fg(Color::Black);
        Self {
            screen: Style::default().bg(ACCENT),
            frame_label: body.add_modifier(Modifier::BOLD),
            body,
            shadow: Style::default().bg(SHADOW),
            button: body,
            button_focused: Style::default()
                .bg(ACCENT)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            field: Style::default().bg(FIELD).fg(Color::Black),
            hint: body.fg(Color::DarkGray),
        }
    }
}
