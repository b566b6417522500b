use crate::ledger::{BalanceStatus, Friend, Payer};
use crate::ui::app::{App, Focus};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_columns, layout_regions, list_window_start};
use crate::ui::split::{SplitField, SplitFormState};
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, BALANCE_OWED, BALANCE_OWING, BRAND_ORANGE, FOCUS_BORDER, GLOBAL_BORDER,
    HEADER_TEXT, MUTED_TEXT,
};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const LABEL_WIDTH: usize = 18;
/// Each friend takes a name row and a balance row.
const ROWS_PER_FRIEND: u16 = 2;

/// Draws the whole screen. Pure function of `app`.
pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(), header);
    frame.render_widget(Clear, body);

    let add_form_height = if app.add_form().expanded { 5 } else { 3 };
    let (list_area, add_area, split_area) = body_columns(body, add_form_height);
    draw_friend_list(frame, app, list_area);
    draw_add_friend(frame, app, add_area);
    draw_split_form(frame, app, split_area);

    frame.render_widget(Footer::new().widget(footer, app.focus()), footer);
}

fn pane_block(title: String, focused: bool) -> Block<'static> {
    let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    Block::default()
        .title(Span::styled(title, Style::default().fg(BRAND_ORANGE)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

fn balance_style(friend: &Friend) -> Style {
    match friend.status() {
        BalanceStatus::YouOwe(_) => Style::default().fg(BALANCE_OWING),
        BalanceStatus::OwesYou(_) => Style::default().fg(BALANCE_OWED),
        BalanceStatus::Square => Style::default().fg(HEADER_TEXT),
    }
}

fn draw_friend_list(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let focused = app.focus() == Focus::FriendList;
    let mut lines = Vec::new();

    if app.registry().is_empty() {
        lines.push(Line::from(Span::styled(
            "No friends yet.",
            Style::default().fg(MUTED_TEXT),
        )));
    }

    let friends = app.registry().friends();
    let capacity = (area.height.saturating_sub(2) / ROWS_PER_FRIEND) as usize;
    let offset = list_window_start(app.cursor(), friends.len(), capacity);

    for (idx, friend) in friends.iter().enumerate().skip(offset).take(capacity) {
        let selected = app.selection().is_selected(&friend.id);
        let marker = if selected { "● " } else { "  " };

        let mut name_line = Line::from(vec![
            Span::styled(marker, Style::default().fg(BRAND_ORANGE)),
            Span::styled(
                friend.name.clone(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(friend.image.clone(), Style::default().fg(MUTED_TEXT)),
        ]);
        let mut balance_line = Line::from(vec![
            Span::raw("  "),
            Span::styled(friend.balance_message(app.currency()), balance_style(friend)),
        ]);

        if focused && idx == app.cursor() {
            let highlight = Style::default().bg(ACTIVE_HIGHLIGHT);
            name_line = name_line.style(highlight);
            balance_line = balance_line.style(highlight);
        }

        lines.push(name_line);
        lines.push(balance_line);
    }

    let widget = Paragraph::new(lines).block(pane_block("Friends".to_string(), focused));
    frame.render_widget(widget, area);
}

fn draw_add_friend(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let focused = app.focus() == Focus::AddFriend;
    let form = app.add_form();
    let button_style = if focused {
        Style::default().fg(BRAND_ORANGE).bg(ACTIVE_HIGHLIGHT)
    } else {
        Style::default().fg(BRAND_ORANGE)
    };

    let mut lines = Vec::new();
    if form.expanded {
        let caret = if focused { "_" } else { "" };
        lines.push(Line::from(vec![
            Span::styled(format!("{:<8}", "Name"), Style::default().fg(HEADER_TEXT)),
            Span::raw(format!("{}{}", form.name, caret)),
        ]));
        lines.push(Line::from(Span::styled(
            "[ Add ]",
            Style::default().fg(BRAND_ORANGE),
        )));
    }
    lines.push(Line::from(Span::styled(
        format!("[ {} ]", form.toggle_label()),
        button_style,
    )));

    let widget = Paragraph::new(lines).block(pane_block("Add friend".to_string(), focused));
    frame.render_widget(widget, area);
}

fn draw_split_form(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let focused = app.focus() == Focus::SplitBill;
    let selection = app.selection();
    let title = format!("Split the bill with {}", selection.display_name());

    let Some(friend) = selection.current() else {
        let prompt = Paragraph::new(Line::from(Span::styled(
            "Select a friend from the list to split a bill.",
            Style::default().fg(MUTED_TEXT),
        )))
        .wrap(Wrap { trim: true })
        .block(pane_block(title, focused));
        frame.render_widget(prompt, area);
        return;
    };

    let form = app.split_form();
    let friend_label = format!("{} expense", friend.name);
    let mut lines = vec![
        field_line(form, SplitField::Bill, "Bill value", focused),
        field_line(form, SplitField::UserShare, "Your expense", focused),
        field_line(form, SplitField::FriendShare, &friend_label, focused),
        payer_line(form, &friend.name, focused),
        Line::from(""),
        Line::from(Span::styled(
            "[ Split bill ]",
            Style::default().fg(BRAND_ORANGE),
        )),
        Line::from(""),
        Line::from(Span::styled(
            friend.balance_message(app.currency()),
            balance_style(friend),
        )),
    ];
    if form.draft.bill == 0.0 {
        lines.push(Line::from(Span::styled(
            "Enter the bill value to start.",
            Style::default().fg(MUTED_TEXT),
        )));
    }

    let widget = Paragraph::new(lines).block(pane_block(title, focused));
    frame.render_widget(widget, area);
}

fn field_line(form: &SplitFormState, field: SplitField, label: &str, focused: bool) -> Line<'static> {
    let enabled = form.is_enabled(field);
    let active = focused && form.focus == field;
    let value_style = if enabled {
        Style::default().fg(HEADER_TEXT)
    } else {
        Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM)
    };
    let caret = if active { "_" } else { "" };

    let line = Line::from(vec![
        Span::styled(
            format!("{:<width$}", label, width = LABEL_WIDTH),
            Style::default().fg(HEADER_TEXT),
        ),
        Span::styled(format!("{}{}", form.field_text(field), caret), value_style),
    ]);
    if active {
        line.style(Style::default().bg(ACTIVE_HIGHLIGHT))
    } else {
        line
    }
}

fn payer_line(form: &SplitFormState, friend_name: &str, focused: bool) -> Line<'static> {
    let active = focused && form.focus == SplitField::Payer;
    let choice = |label: String, payer: Payer| {
        if form.draft.payer == payer {
            Span::styled(
                format!("[{}]", label),
                Style::default().fg(BRAND_ORANGE).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(format!(" {} ", label), Style::default().fg(MUTED_TEXT))
        }
    };

    let line = Line::from(vec![
        Span::styled(
            format!("{:<width$}", "Who is paying", width = LABEL_WIDTH),
            Style::default().fg(HEADER_TEXT),
        ),
        choice("You".to_string(), Payer::User),
        Span::raw(" "),
        choice(friend_name.to_string(), Payer::Friend),
    ]);
    if active {
        line.style(Style::default().bg(ACTIVE_HIGHLIGHT))
    } else {
        line
    }
}
