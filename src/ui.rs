use crate::screen::{Intent, ScreenState};
use crate::task::{next_id, Task};
use chrono::Local;
use crossterm::{
    event::{self, Event, KeyCode},
    terminal::{disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Terminal,
};
use std::io;

pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut state: ScreenState) -> io::Result<()> {
    let mut selected: usize = 0;
    loop {
        let displayed = state.displayed();
        if selected >= displayed.len() {
            selected = displayed.len().saturating_sub(1);
        }

        terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![
                    Constraint::Length(3),
                    Constraint::Min(1),
                    Constraint::Length(1),
                ])
                .split(f.area());

            let settings = Line::from(vec![
                Span::styled(
                    format!("Filter: {}", state.show_done.label()),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw("  "),
                Span::styled(
                    if state.ascending {
                        "Sort: Asc"
                    } else {
                        "Sort: Desc"
                    },
                    Style::default().fg(Color::Yellow),
                ),
            ]);
            let header =
                Paragraph::new(settings).block(Block::default().title("Tasks").borders(Borders::ALL));
            f.render_widget(header, chunks[0]);

            let items: Vec<ListItem> = displayed
                .iter()
                .map(|t| {
                    ListItem::new(Line::from(vec![
                        Span::raw(if t.done { "[x] " } else { "[ ] " }),
                        Span::raw(format!("[#{}] ", t.id)),
                        Span::styled(t.title.clone(), Style::default().fg(Color::White)),
                        Span::raw(format!(" (Due: {}, P{})", t.due_date, t.priority)),
                    ]))
                })
                .collect();

            let list = List::new(items)
                .block(Block::default().borders(Borders::ALL))
                .highlight_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("> ");
            let mut list_state = ListState::default();
            if !displayed.is_empty() {
                list_state.select(Some(selected));
            }
            f.render_stateful_widget(list, chunks[1], &mut list_state);

            let hints = Paragraph::new(
                "a: add  space/enter: toggle  f: filter  s: sort  up/down: select  q: quit",
            )
            .style(Style::default().fg(Color::DarkGray));
            f.render_widget(hints, chunks[2]);
        })?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()), // Quit
                KeyCode::Char(' ') | KeyCode::Enter => {
                    if let Some(task) = displayed.get(selected) {
                        state = state.reduce(Intent::ToggleDone(task.id));
                    }
                }
                KeyCode::Char('f') => {
                    state = state.reduce(Intent::CycleFilter);
                }
                KeyCode::Char('s') => {
                    state = state.reduce(Intent::FlipSort);
                }
                KeyCode::Char('a') => {
                    if let Some(task) = prompt_new_task(&state.tasks) {
                        state = state.reduce(Intent::AddTask(task));
                    }
                }
                KeyCode::Up => {
                    if selected > 0 {
                        selected -= 1;
                    }
                }
                KeyCode::Down => {
                    if selected + 1 < displayed.len() {
                        selected += 1;
                    }
                }
                _ => {}
            }
        }
    }
}

/// Builds the task to add: prompts for title and due date, fills in the
/// defaults for everything else. The id is assigned here, before the
/// intent is dispatched.
fn prompt_new_task(tasks: &[Task]) -> Option<Task> {
    let id = next_id(tasks);
    let title = prompt("Enter task title")?;
    let due_date = prompt("Enter due date (YYYY-MM-DD)")?;

    let title = if title.is_empty() {
        format!("New Task {}", id)
    } else {
        title
    };
    let due_date = if due_date.is_empty() {
        Local::now().format("%Y-%m-%d").to_string()
    } else {
        due_date
    };

    Some(Task {
        id,
        title,
        description: String::new(),
        priority: 1,
        due_date,
        done: false,
    })
}

fn prompt(message: &str) -> Option<String> {
    disable_raw_mode().ok();
    println!("{}", message);
    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_ok() {
        enable_raw_mode().ok();
        Some(input.trim().to_string())
    } else {
        enable_raw_mode().ok();
        None
    }
}
