use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableBracketedPaste;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Scrollbar;
use ratatui::widgets::ScrollbarOrientation;
use ratatui::widgets::Wrap;
use ratatui::Terminal;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::Loading;
use crate::domain::models::Notice;
use crate::domain::models::RegistrationBlocker;
use crate::domain::models::TextArea;
use crate::domain::services::actions::help_text;
use crate::domain::services::events::EventsService;
use crate::domain::services::AppState;
use crate::domain::services::Sidebar;

const SIDEBAR_WIDTH: u16 = 32;

fn render_notice<B: Backend>(frame: &mut Frame<B>, rect: Rect, notice: &Notice) {
    let mut style = Style::default().fg(Color::DarkGray);
    if notice.is_error() {
        style = style.fg(Color::Red);
    } else if matches!(notice, Notice::Auth(_)) {
        style = style.fg(Color::Yellow);
    }

    frame.render_widget(
        Paragraph::new(notice.text())
            .style(style)
            .wrap(Wrap { trim: true }),
        rect,
    );
}

fn render_help<B: Backend>(frame: &mut Frame<B>, rect: Rect) {
    frame.render_widget(
        Paragraph::new(help_text())
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title("Help")),
        rect,
    );
}

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState<'_>,
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut events = EventsService::new(rx);
    let mut textarea = TextArea::default();
    let loading = Loading::default();
    let blocker = RegistrationBlocker::default();

    loop {
        terminal.draw(|frame| {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(1)])
                .split(frame.size());

            let mut blocker_height = 0;
            if app_state.is_blocked() {
                blocker_height = 5;
            }
            let mut notice_height = 0;
            if app_state.notice.is_some() {
                notice_height = 2;
            }
            let mut loading_height = 0;
            if app_state.is_loading() {
                loading_height = 3;
            }

            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![
                    Constraint::Min(1),
                    Constraint::Length(blocker_height),
                    Constraint::Length(notice_height),
                    Constraint::Length(loading_height),
                    Constraint::Max(4),
                ])
                .split(columns[1]);

            if layout[0].width != app_state.last_known_width
                || layout[0].height != app_state.last_known_height
            {
                app_state.set_rect(layout[0]);
            }

            Sidebar::render(frame, columns[0], &app_state.store, &app_state.search_term);

            if app_state.help_visible {
                render_help(frame, layout[0]);
            } else {
                app_state
                    .bubble_list
                    .render(frame, layout[0], app_state.scroll.position);
                frame.render_stateful_widget(
                    Scrollbar::new(ScrollbarOrientation::VerticalRight),
                    layout[0].inner(&Margin {
                        vertical: 1,
                        horizontal: 0,
                    }),
                    &mut app_state.scroll.scrollbar_state,
                );
            }

            if app_state.is_blocked() {
                blocker.render(frame, layout[1]);
            }

            if let Some(notice) = &app_state.notice {
                render_notice(frame, layout[2], notice);
            }

            if app_state.is_loading() {
                loading.render(frame, layout[3]);
            }
            frame.render_widget(textarea.widget(), layout[4]);
        })?;

        match events.next().await? {
            Event::BackendUnavailable(err) => {
                app_state.handle_backend_unavailable(&err);
            }
            Event::ChatSettled(session_id, res) => {
                app_state.handle_chat_settled(&session_id, res);
            }
            Event::KeyboardCTRLC() => {
                break;
            }
            Event::KeyboardCTRLN() => {
                app_state.new_session();
            }
            Event::KeyboardTab() => {
                app_state.cycle_session(1);
            }
            Event::KeyboardBackTab() => {
                app_state.cycle_session(-1);
            }
            Event::KeyboardEnter() => {
                let input_str = textarea.lines().join("\n");
                let (should_break, handled) = app_state.handle_slash_commands(&input_str).await?;
                if should_break {
                    break;
                }
                if handled {
                    textarea = TextArea::with_text("", app_state.attachment.as_ref());
                    continue;
                }

                if app_state.submit(&input_str, &tx)? {
                    textarea = TextArea::default();
                } else {
                    TextArea::set_title(&mut textarea, app_state.attachment.as_ref());
                }
            }
            Event::KeyboardCharInput(input) => {
                textarea.input(input);
                TextArea::set_title(&mut textarea, app_state.attachment.as_ref());
            }
            Event::KeyboardPaste(text) => {
                for (idx, line) in text.replace('\r', "").split('\n').enumerate() {
                    if idx > 0 {
                        textarea.insert_newline();
                    }
                    textarea.insert_str(line);
                }
                TextArea::set_title(&mut textarea, app_state.attachment.as_ref());
            }
            Event::UIResize() => (),
            Event::UIScrollDown() => {
                app_state.scroll.down();
            }
            Event::UIScrollUp() => {
                app_state.scroll.up();
            }
            Event::UIScrollPageDown() => {
                app_state.scroll.down_page();
            }
            Event::UIScrollPageUp() => {
                app_state.scroll.up_page();
            }
        }
    }

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    );
    let _ = crossterm::execute!(io::stdout(), cursor::Show);
}

pub async fn start(
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut app_state = AppState::from_config()?;
    tx.send(Action::BackendHealthCheck())?;

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    start_loop(&mut terminal, &mut app_state, tx, rx).await?;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    return Ok(());
}
