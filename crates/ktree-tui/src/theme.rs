use ktree_config::ThemeConfig;
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    pub accent: Color,
    pub fg: Color,
    pub header: Style,
    pub status_bar: Style,
    pub selection: Style,
    pub selection_unfocused: Style,
    pub border: Style,
    pub border_active: Style,
    pub title: Style,
    pub text: Style,
    pub text_dim: Style,
    pub overlay: Style,
    pub success: Style,
    pub error: Style,
    pub yaml_key: Style,
    pub yaml_string: Style,
    pub yaml_number: Style,
    pub yaml_boolean: Style,
    pub yaml_null: Style,
    pub filter_mode: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

impl Theme {
    pub fn from_config(config: &ThemeConfig) -> Self {
        let accent = parse_color_or_default(&config.accent);
        let bg = parse_color_or_default(&config.bg);
        let fg = parse_color_or_default(&config.fg);
        let header_bg = parse_color_or_default(&config.header_bg);
        let header_fg = parse_color_or_default(&config.header_fg);
        let selection_bg = parse_color_or_default(&config.selection_bg);
        let selection_fg = parse_color_or_default(&config.selection_fg);
        let text_dim = parse_color_or_default(&config.text_dim);

        Self {
            accent,
            fg,
            header: Style::default().fg(header_fg).bg(header_bg),
            status_bar: Style::default().fg(header_fg).bg(header_bg),
            selection: Style::default().fg(selection_fg).bg(selection_bg).add_modifier(Modifier::BOLD),
            selection_unfocused: Style::default().fg(selection_fg).bg(selection_bg),
            border: Style::default().fg(parse_color_or_default(&config.border)),
            border_active: Style::default().fg(parse_color_or_default(&config.border_active)),
            title: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            text: Style::default().fg(fg).bg(bg),
            text_dim: Style::default().fg(text_dim),
            overlay: Style::default().fg(fg).bg(parse_color_or_default(&config.overlay_bg)),
            success: Style::default().fg(parse_color_or_default(&config.success)),
            error: Style::default().fg(parse_color_or_default(&config.error)),
            yaml_key: Style::default().fg(parse_color_or_default(&config.yaml_key)),
            yaml_string: Style::default().fg(parse_color_or_default(&config.yaml_string)),
            yaml_number: Style::default().fg(parse_color_or_default(&config.yaml_number)),
            yaml_boolean: Style::default().fg(parse_color_or_default(&config.yaml_boolean)),
            yaml_null: Style::default().fg(parse_color_or_default(&config.yaml_null)),
            filter_mode: Style::default()
                .fg(parse_color_or_default(&config.filter_mode_fg))
                .bg(parse_color_or_default(&config.filter_mode_bg))
                .add_modifier(Modifier::BOLD),
        }
    }
}

fn parse_color_or_default(s: &str) -> Color {
    parse_color(s).unwrap_or(Color::Reset)
}

/// Parses `"default"`, `"rgb(r,g,b)"`, `"#rrggbb"` or a named color.
pub fn parse_color(s: &str) -> anyhow::Result<Color> {
    let s = s.trim();

    if s.eq_ignore_ascii_case("default") {
        return Ok(Color::Reset);
    }

    if let Some(inner) = s.strip_prefix("rgb(").and_then(|rest| rest.strip_suffix(')')) {
        let channels = inner
            .split(',')
            .map(|part| part.trim().parse::<u8>())
            .collect::<Result<Vec<u8>, _>>()
            .map_err(|_| anyhow::anyhow!("invalid rgb color \"{s}\": channels must be 0-255"))?;
        return match channels.as_slice() {
            [r, g, b] => Ok(Color::Rgb(*r, *g, *b)),
            _ => anyhow::bail!("invalid rgb color \"{s}\": expected rgb(r,g,b)"),
        };
    }

    s.parse::<Color>().map_err(|_| {
        anyhow::anyhow!(
            "unknown color \"{s}\": expected hex (#rrggbb), rgb(r,g,b), a named color (red, blue, ...), or \"default\""
        )
    })
}
