//! Input dispatch.
//!
//! Keyboard and mouse events flow through here. Global chords (quit,
//! nav cursor, direct page jumps) come first; what's left goes to the
//! active page. While the contact form is in editing mode, printable
//! keys feed the focused field and the global chords are suspended
//! except Ctrl+C.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};

use super::types::Page;
use super::App;
use crate::content;
use crate::links;
use crate::state::SubmitOutcome;

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Ctrl+C always quits, even mid-edit.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        if self.page == Page::Contact && self.contact.editing {
            self.handle_form_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.quit(),

            // Nav cursor and activation.
            KeyCode::Tab => {
                self.nav.cycle_next();
                self.mark_dirty();
            }
            KeyCode::BackTab => {
                self.nav.cycle_prev();
                self.mark_dirty();
            }
            KeyCode::Enter => {
                let page = self.nav.cursor_page();
                self.select_destination(page);
            }

            // Direct jumps. The brand mark goes home; the four listed
            // destinations get number keys matching their order.
            KeyCode::Char('h') | KeyCode::Char('0') => self.select_destination(Page::Home),
            KeyCode::Char('1') => self.select_destination(Page::About),
            KeyCode::Char('2') => self.select_destination(Page::Work),
            KeyCode::Char('3') => self.select_destination(Page::Process),
            KeyCode::Char('4') => self.select_destination(Page::Contact),

            KeyCode::Char('m') => self.toggle_menu(),
            KeyCode::Esc => self.close_menu(),

            // Content scrolling.
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll.scroll_by(-1);
                self.mark_dirty();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll.scroll_by(1);
                self.mark_dirty();
            }
            KeyCode::PageUp => {
                self.scroll.scroll_by(-self.page_stride());
                self.mark_dirty();
            }
            KeyCode::PageDown => {
                self.scroll.scroll_by(self.page_stride());
                self.mark_dirty();
            }
            KeyCode::Home => {
                self.scroll.jump_to_top();
                self.mark_dirty();
            }
            KeyCode::End => {
                self.scroll.jump_to_bottom();
                self.mark_dirty();
            }

            _ => self.handle_page_key(key),
        }
    }

    /// Keys with page-specific meaning, after the globals passed.
    fn handle_page_key(&mut self, key: KeyEvent) {
        match (self.page, key.code) {
            (Page::Work, KeyCode::Char('n')) => {
                self.work.next();
                self.mark_dirty();
            }
            (Page::Work, KeyCode::Char('p')) => {
                self.work.prev();
                self.mark_dirty();
            }
            (Page::Work, KeyCode::Char('v')) | (Page::Work, KeyCode::Char(' ')) => {
                self.work.toggle();
                self.mark_dirty();
            }
            (Page::Contact, KeyCode::Char('i')) => {
                self.contact.editing = true;
                self.mark_dirty();
            }
            (Page::Contact, KeyCode::Char('e')) => {
                links::open_external(&content::MAILTO);
            }
            (Page::Contact, KeyCode::Char('l')) => {
                links::open_external(&content::LINKEDIN_URL);
            }
            _ => {}
        }
    }

    /// Contact-form editing mode. Esc leaves the mode, everything else
    /// operates on the focused field.
    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.contact.editing = false;
            }
            KeyCode::Tab | KeyCode::Down => self.contact.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.contact.focus_prev(),
            KeyCode::Enter => {
                if !self.contact.insert_newline() {
                    self.contact.focus_next();
                }
            }
            KeyCode::Backspace => self.contact.backspace(),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                let outcome = self.contact.submit();
                if outcome == SubmitOutcome::Accepted {
                    self.contact.editing = false;
                }
                self.show_toast(outcome.toast_message());
                return;
            }
            KeyCode::Char(c) => self.contact.insert_char(c),
            _ => return,
        }
        self.mark_dirty();
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => {
                self.scroll.scroll_by(-3);
                self.mark_dirty();
            }
            MouseEventKind::ScrollDown => {
                self.scroll.scroll_by(3);
                self.mark_dirty();
            }
            _ => {}
        }
    }

    fn page_stride(&self) -> i32 {
        i32::from(self.terminal_height.saturating_sub(6).max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::state::Field;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn test_app() -> App {
        let mut app = App::new(&Config::default());
        app.terminal_width = 120;
        app.terminal_height = 40;
        app
    }

    #[test]
    fn test_q_quits() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_number_keys_jump_to_pages() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Char('2')));
        assert_eq!(app.page, Page::Work);
        app.handle_key(key(KeyCode::Char('4')));
        assert_eq!(app.page, Page::Contact);
        app.handle_key(key(KeyCode::Char('h')));
        assert_eq!(app.page, Page::Home);
    }

    #[test]
    fn test_unmapped_key_is_absorbed() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Char('z')));
        assert_eq!(app.page, Page::Home);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_tab_then_enter_activates_cursor() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.page, Page::Work);
    }

    #[test]
    fn test_menu_keys() {
        let mut app = test_app();
        app.terminal_width = 60;
        app.handle_key(key(KeyCode::Char('m')));
        assert!(app.nav.menu_open);
        app.handle_key(key(KeyCode::Esc));
        assert!(!app.nav.menu_open);
    }

    #[test]
    fn test_work_keys_only_apply_on_work_page() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Char('v')));
        assert!(app.work.expanded.is_none());
        app.handle_key(key(KeyCode::Char('2')));
        app.handle_key(key(KeyCode::Char('n')));
        app.handle_key(key(KeyCode::Char('v')));
        assert_eq!(app.work.expanded, Some(1));
    }

    #[test]
    fn test_form_editing_captures_q() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Char('4')));
        app.handle_key(key(KeyCode::Char('i')));
        assert!(app.contact.editing);
        app.handle_key(key(KeyCode::Char('q')));
        assert!(!app.should_quit);
        assert_eq!(app.contact.name, "q");
    }

    #[test]
    fn test_ctrl_c_quits_even_while_editing() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Char('4')));
        app.handle_key(key(KeyCode::Char('i')));
        app.handle_key(ctrl('c'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_esc_leaves_editing_mode() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Char('4')));
        app.handle_key(key(KeyCode::Char('i')));
        app.handle_key(key(KeyCode::Esc));
        assert!(!app.contact.editing);
        assert_eq!(app.page, Page::Contact);
    }

    #[test]
    fn test_enter_advances_field_except_message() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Char('4')));
        app.handle_key(key(KeyCode::Char('i')));
        assert_eq!(app.contact.focused, Field::Name);
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.contact.focused, Field::Email);
    }

    #[test]
    fn test_submit_incomplete_form_shows_toast_and_stays_editing() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Char('4')));
        app.handle_key(key(KeyCode::Char('i')));
        app.handle_key(ctrl('s'));
        assert!(app.contact.editing);
        assert!(app.toast.visible());
        assert_eq!(
            app.toast.message(),
            Some(SubmitOutcome::MissingFields.toast_message())
        );
    }

    #[test]
    fn test_submit_complete_form_clears_and_confirms() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Char('4')));
        app.handle_key(key(KeyCode::Char('i')));
        app.contact.name = "Sam".to_string();
        app.contact.email = "sam@example.com".to_string();
        app.contact.message = "Hello".to_string();
        app.handle_key(ctrl('s'));
        assert!(!app.contact.editing);
        assert!(app.contact.name.is_empty());
        assert_eq!(
            app.toast.message(),
            Some(SubmitOutcome::Accepted.toast_message())
        );
    }

    #[test]
    fn test_scroll_keys() {
        let mut app = test_app();
        app.scroll.set_max(100);
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.scroll.line_offset(), 2);
        app.handle_key(key(KeyCode::Up));
        assert_eq!(app.scroll.line_offset(), 1);
        app.handle_key(key(KeyCode::End));
        assert_eq!(app.scroll.line_offset(), 100);
        app.handle_key(key(KeyCode::Home));
        assert_eq!(app.scroll.line_offset(), 0);
    }

    #[test]
    fn test_mouse_wheel_scrolls() {
        let mut app = test_app();
        app.scroll.set_max(100);
        let event = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_mouse(event);
        assert_eq!(app.scroll.line_offset(), 3);
    }
}
