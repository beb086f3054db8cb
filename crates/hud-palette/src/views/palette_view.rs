use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::state::AppState;
use crate::view_models::PaletteViewModel;
use crate::views::layout::PaletteLayout;

const ACCENT: Color = Color::Cyan;
const MUTED: Color = Color::DarkGray;

/// Render the command palette as a centered floating panel
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let vm = PaletteViewModel::from_state(state);
    let layout = PaletteLayout::new(area, &state.config);

    // Dimmed backdrop over the entire screen to create modal effect
    let overlay = Block::default().style(Style::default().add_modifier(Modifier::DIM));
    f.render_widget(overlay, area);
    f.render_widget(Clear, layout.panel);

    let footer_hint = Line::from(vec![
        Span::styled(" Enter", Style::default().fg(ACCENT).bold()),
        Span::styled(" run  ", Style::default().fg(MUTED)),
        Span::styled("↑/↓", Style::default().fg(ACCENT).bold()),
        Span::styled(" navigate  ", Style::default().fg(MUTED)),
        Span::styled("Ctrl+R", Style::default().fg(ACCENT).bold()),
        Span::styled(" reload  ", Style::default().fg(MUTED)),
        Span::styled("Esc", Style::default().fg(ACCENT).bold()),
        Span::styled(" close ", Style::default().fg(MUTED)),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(vm.title.as_str())
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .title_bottom(footer_hint)
        .title_alignment(Alignment::Center)
        .border_style(Style::default().fg(ACCENT));
    f.render_widget(block, layout.panel);

    render_input(&vm, &layout, f);

    let divider = "─".repeat(usize::from(layout.divider.width));
    f.render_widget(
        Paragraph::new(divider).style(Style::default().fg(MUTED)),
        layout.divider,
    );

    render_rows(&vm, &layout, f);

    let status_style = if vm.status_is_error {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(MUTED).italic()
    };
    f.render_widget(
        Paragraph::new(vm.status.as_str()).style(status_style),
        layout.status,
    );
}

fn render_input(vm: &PaletteViewModel, layout: &PaletteLayout, f: &mut Frame) {
    let prompt = Span::styled("> ", Style::default().fg(ACCENT).bold());
    let input = if vm.input_is_empty {
        Line::from(vec![
            prompt,
            Span::styled("Type to search…", Style::default().fg(MUTED).italic()),
        ])
    } else {
        Line::from(vec![prompt, Span::raw(vm.input_text.as_str())])
    };
    f.render_widget(Paragraph::new(input), layout.input);

    // Cursor after the typed text, clamped to the input line
    let typed = u16::try_from(vm.input_text.chars().count()).unwrap_or(u16::MAX);
    let max_x = layout.input.x + layout.input.width.saturating_sub(1);
    let cursor_x = (layout.input.x + 2).saturating_add(typed).min(max_x);
    f.set_cursor_position((cursor_x, layout.input.y));
}

fn render_rows(vm: &PaletteViewModel, layout: &PaletteLayout, f: &mut Frame) {
    let lines: Vec<Line> = vm
        .visible_rows
        .iter()
        .map(|row| {
            let style = if row.is_selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(row.indicator, style),
                Span::styled(row.text.as_str(), style),
            ])
            .style(style)
        })
        .collect();

    f.render_widget(Paragraph::new(lines), layout.list);
}
