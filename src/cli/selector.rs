use std::io::{self, IsTerminal, Write};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    style::{Attribute, Print, SetAttribute},
    terminal::{self, ClearType},
    ExecutableCommand, QueueableCommand,
};

use crate::core::catalog::{all_platforms, Platform};
use crate::core::config::AppConfig;
use crate::core::signal::SignalType;

pub struct SelectablePlatform {
    pub id: String,
    pub display_name: String,
    pub signal: SignalType,
    pub hint: String,
    pub checked: bool,
}

/// Restores the terminal on drop, including on panic.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        io::stdout().execute(cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = io::stdout().execute(cursor::Show);
        let _ = terminal::disable_raw_mode();
    }
}

#[derive(Debug, PartialEq)]
enum Action {
    Redraw,
    Confirm,
    Cancel,
}

/// Checklist state with a scrolling viewport of `rows` lines.
struct Picker {
    checked: Vec<bool>,
    signals: Vec<SignalType>,
    cursor: usize,
    offset: usize,
    rows: usize,
}

impl Picker {
    fn new(items: &[SelectablePlatform], rows: usize) -> Self {
        Self {
            checked: items.iter().map(|i| i.checked).collect(),
            signals: items.iter().map(|i| i.signal).collect(),
            cursor: 0,
            offset: 0,
            rows: rows.max(1),
        }
    }

    fn move_to(&mut self, pos: usize) {
        self.cursor = pos.min(self.checked.len().saturating_sub(1));
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + self.rows {
            self.offset = self.cursor + 1 - self.rows;
        }
    }

    fn handle(&mut self, code: KeyCode, modifiers: KeyModifiers) -> Action {
        match (code, modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL)
            | (KeyCode::Esc, _)
            | (KeyCode::Char('q'), KeyModifiers::NONE) => return Action::Cancel,
            (KeyCode::Enter, _) => return Action::Confirm,
            (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => {
                self.move_to(self.cursor.saturating_sub(1))
            }
            (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => {
                self.move_to(self.cursor + 1)
            }
            (KeyCode::PageUp, _) => self.move_to(self.cursor.saturating_sub(self.rows)),
            (KeyCode::PageDown, _) => self.move_to(self.cursor + self.rows),
            (KeyCode::Char(' '), _) => {
                if let Some(c) = self.checked.get_mut(self.cursor) {
                    *c = !*c;
                }
            }
            (KeyCode::Char('a'), KeyModifiers::NONE) => {
                let all_checked = self.checked.iter().all(|&c| c);
                self.checked.iter_mut().for_each(|c| *c = !all_checked);
            }
            // Toggle every platform of the signal under the cursor
            (KeyCode::Char('s'), KeyModifiers::NONE) => {
                if let Some(&signal) = self.signals.get(self.cursor) {
                    let group: Vec<usize> = (0..self.signals.len())
                        .filter(|&i| self.signals[i] == signal)
                        .collect();
                    let all_checked = group.iter().all(|&i| self.checked[i]);
                    for i in group {
                        self.checked[i] = !all_checked;
                    }
                }
            }
            _ => {}
        }
        Action::Redraw
    }

    fn selected(&self, items: &[SelectablePlatform]) -> Vec<String> {
        items
            .iter()
            .zip(&self.checked)
            .filter(|(_, &c)| c)
            .map(|(item, _)| item.id.clone())
            .collect()
    }
}

const HEADER_LINES: usize = 4;
const FOOTER_LINES: usize = 2;

/// Returns `Ok(Some(selected_ids))` on confirm, `Ok(None)` if not a TTY, `Err` on cancel/Ctrl-C.
pub fn interactive_select(items: &[SelectablePlatform]) -> anyhow::Result<Option<Vec<String>>> {
    if !io::stdin().is_terminal() {
        return Ok(None);
    }

    let _guard = RawModeGuard::enable()?;

    let (_, height) = terminal::size()?;
    let rows = (height as usize)
        .saturating_sub(HEADER_LINES + FOOTER_LINES + 1)
        .min(items.len());
    let mut picker = Picker::new(items, rows);

    draw(items, &picker)?;

    loop {
        if let Event::Key(KeyEvent {
            code, modifiers, ..
        }) = event::read()?
        {
            match picker.handle(code, modifiers) {
                Action::Cancel => {
                    clear_ui(picker.rows)?;
                    anyhow::bail!("cancelled");
                }
                Action::Confirm => {
                    clear_ui(picker.rows)?;
                    return Ok(Some(picker.selected(items)));
                }
                Action::Redraw => draw(items, &picker)?,
            }
        }
    }
}

fn draw(items: &[SelectablePlatform], picker: &Picker) -> io::Result<()> {
    let mut stdout = io::stdout();

    stdout
        .queue(cursor::MoveToColumn(0))?
        .queue(terminal::Clear(ClearType::FromCursorDown))?;

    stdout
        .queue(Print("Select platforms to compare\r\n"))?
        .queue(Print("\r\n"))?
        .queue(Print(
            "  arrows/pgup/pgdn: move | space: toggle | s: toggle signal | a: toggle all\r\n",
        ))?
        .queue(Print("\r\n"))?;

    let visible = items
        .iter()
        .enumerate()
        .skip(picker.offset)
        .take(picker.rows);
    for (i, item) in visible {
        let marker = if i == picker.cursor { "> " } else { "  " };
        let check = if picker.checked[i] { "X" } else { " " };

        if i == picker.cursor {
            stdout.queue(SetAttribute(Attribute::Reverse))?;
        }
        stdout.queue(Print(format!(
            "{marker}[{check}] {:<30} {}\r\n",
            item.display_name, item.hint
        )))?;
        if i == picker.cursor {
            stdout.queue(SetAttribute(Attribute::Reset))?;
        }
    }

    let count = picker.checked.iter().filter(|&&c| c).count();
    stdout
        .queue(Print("\r\n"))?
        .queue(Print(format!(
            "  {count}/{} selected ({}-{}) | enter: confirm | q: cancel\r\n",
            items.len(),
            picker.offset + 1,
            (picker.offset + picker.rows).min(items.len())
        )))?;

    let total_lines = picker.rows + HEADER_LINES + FOOTER_LINES;
    stdout.queue(cursor::MoveUp(total_lines as u16))?;

    stdout.flush()?;
    Ok(())
}

fn clear_ui(rows: usize) -> io::Result<()> {
    let mut stdout = io::stdout();
    stdout
        .queue(cursor::MoveToColumn(0))?
        .queue(terminal::Clear(ClearType::FromCursorDown))?;
    stdout.flush()?;
    tracing::debug!(rows, "closed platform picker");
    Ok(())
}

fn hint(platform: &Platform) -> String {
    let kind = if platform.is_self_hosted() {
        "self-hosted"
    } else {
        "usage-based"
    };
    format!("{} / {}", platform.signal.id(), kind)
}

/// Every catalog platform, all checked.
pub fn build_selectable_list() -> Vec<SelectablePlatform> {
    all_platforms()
        .map(|p| SelectablePlatform {
            id: p.id.to_string(),
            display_name: p.name.to_string(),
            signal: p.signal,
            hint: hint(p),
            checked: true,
        })
        .collect()
}

/// Every catalog platform, pre-checked from the existing config.
pub fn build_selectable_list_from_config(config: &AppConfig) -> Vec<SelectablePlatform> {
    all_platforms()
        .map(|p| SelectablePlatform {
            id: p.id.to_string(),
            display_name: p.name.to_string(),
            signal: p.signal,
            hint: hint(p),
            checked: config.is_enabled(p),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selectable_list_covers_catalog() {
        let items = build_selectable_list();
        assert_eq!(items.len(), all_platforms().count());
        assert!(items.iter().all(|i| i.checked));
    }

    #[test]
    fn selectable_list_has_correct_ids() {
        let items = build_selectable_list();
        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert!(ids.contains(&"datadog"));
        assert!(ids.contains(&"tempo-self-hosted"));
        assert!(ids.contains(&"security-onion"));
    }

    #[test]
    fn hint_names_signal_and_kind() {
        let items = build_selectable_list();
        let cortex = items.iter().find(|i| i.id == "cortex").unwrap();
        assert_eq!(cortex.hint, "metrics / self-hosted");
        let honeycomb = items.iter().find(|i| i.id == "honeycomb-tracing").unwrap();
        assert_eq!(honeycomb.hint, "tracing / usage-based");
    }

    #[test]
    fn config_state_is_preselected() {
        let mut config = AppConfig::default();
        config.set_enabled("splunk-logs", false);
        let items = build_selectable_list_from_config(&config);
        let splunk = items.iter().find(|i| i.id == "splunk-logs").unwrap();
        assert!(!splunk.checked);
        let loki = items.iter().find(|i| i.id == "loki-self-hosted").unwrap();
        assert!(loki.checked);
    }

    fn picker_items() -> Vec<SelectablePlatform> {
        build_selectable_list()
    }

    #[test]
    fn picker_scrolls_with_cursor() {
        let items = picker_items();
        let mut picker = Picker::new(&items, 5);
        for _ in 0..7 {
            picker.handle(KeyCode::Down, KeyModifiers::NONE);
        }
        assert_eq!(picker.cursor, 7);
        assert_eq!(picker.offset, 3);
        picker.handle(KeyCode::PageUp, KeyModifiers::NONE);
        assert_eq!(picker.cursor, 2);
        assert_eq!(picker.offset, 2);
    }

    #[test]
    fn picker_stops_at_ends() {
        let items = picker_items();
        let mut picker = Picker::new(&items, 10);
        picker.handle(KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(picker.cursor, 0);
        picker.handle(KeyCode::PageDown, KeyModifiers::NONE);
        picker.handle(KeyCode::PageDown, KeyModifiers::NONE);
        picker.handle(KeyCode::PageDown, KeyModifiers::NONE);
        picker.handle(KeyCode::PageDown, KeyModifiers::NONE);
        picker.handle(KeyCode::PageDown, KeyModifiers::NONE);
        assert_eq!(picker.cursor, items.len() - 1);
        assert_eq!(picker.offset, items.len() - 10);
    }

    #[test]
    fn picker_toggles_signal_group() {
        let items = picker_items();
        let mut picker = Picker::new(&items, 10);
        // Cursor starts on the first metrics platform
        picker.handle(KeyCode::Char('s'), KeyModifiers::NONE);
        let selected = picker.selected(&items);
        assert!(!selected.contains(&"datadog".to_string()));
        assert!(selected.contains(&"datadog-logs".to_string()));
    }

    #[test]
    fn picker_space_and_keys() {
        let items = picker_items();
        let mut picker = Picker::new(&items, 10);
        assert_eq!(picker.handle(KeyCode::Char(' '), KeyModifiers::NONE), Action::Redraw);
        assert_eq!(picker.selected(&items).len(), items.len() - 1);
        picker.handle(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(picker.selected(&items).len(), items.len());
        assert_eq!(picker.handle(KeyCode::Enter, KeyModifiers::NONE), Action::Confirm);
        assert_eq!(picker.handle(KeyCode::Char('q'), KeyModifiers::NONE), Action::Cancel);
        assert_eq!(
            picker.handle(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Action::Cancel
        );
    }
}
