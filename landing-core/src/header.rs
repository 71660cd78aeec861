//! Sticky header reveal and mobile menu state.

use crate::config::HeaderConfig;

/// Display state of the header and its mobile menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderState {
    pub visible: bool,
    pub menu_open: bool,
}

impl HeaderState {
    /// The page finished mounting.
    pub fn on_ready(&mut self) {
        self.visible = true;
    }

    /// Any scroll signal shows the header and closes the menu.
    pub fn on_scroll(&mut self) {
        self.visible = true;
        self.menu_open = false;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn header_class(&self, config: &HeaderConfig) -> String {
        with_modifier("header", self.visible, &config.visible_class)
    }

    pub fn menu_class(&self, config: &HeaderConfig) -> String {
        with_modifier("menu", self.menu_open, &config.open_class)
    }
}

fn with_modifier(base: &str, on: bool, modifier: &str) -> String {
    if on {
        format!("{base} {modifier}")
    } else {
        base.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn starts_hidden_and_closed() {
        let state = HeaderState::default();
        let config = HeaderConfig::default();
        assert_eq!(state.header_class(&config), "header");
        assert_eq!(state.menu_class(&config), "menu");
    }

    #[test]
    fn ready_shows_header_without_touching_menu() {
        let mut state = HeaderState {
            visible: false,
            menu_open: true,
        };
        state.on_ready();
        assert!(state.visible);
        assert!(state.menu_open);
    }

    #[test]
    fn scroll_forces_visible_and_closed_from_any_state() {
        for visible in [false, true] {
            for menu_open in [false, true] {
                let mut state = HeaderState { visible, menu_open };
                state.on_scroll();
                assert_eq!(
                    state,
                    HeaderState {
                        visible: true,
                        menu_open: false
                    }
                );
            }
        }
    }

    #[test]
    fn toggle_flips_menu() {
        let config = HeaderConfig::default();
        let mut state = HeaderState::default();
        state.toggle_menu();
        assert_eq!(state.menu_class(&config), "menu open");
        state.toggle_menu();
        assert_eq!(state.menu_class(&config), "menu");
    }

    #[test]
    fn classes_follow_config() {
        let config = HeaderConfig {
            visible_class: "is-shown".to_string(),
            open_class: "is-open".to_string(),
        };
        let mut state = HeaderState::default();
        state.on_ready();
        state.toggle_menu();
        assert_eq!(state.header_class(&config), "header is-shown");
        assert_eq!(state.menu_class(&config), "menu is-open");
    }
}
