use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_deref::{Deref, DerefMut};
use serde::{de, Deserialize, Deserializer, Serialize};
use strum::Display;

/// User-facing actions that key sequences are bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Action {
    Quit,
    Suspend,
    GoHome,
    GoInventory,
    GoSettings,
    NextPage,
    PrevPage,
    ShowOwned,
    ShowShop,
    ToggleOwnership,
    ShowSkin,
    ShowMotion,
    ToggleCategory,
    SelectNext,
    SelectPrev,
    Activate,
    Back,
}

/// Flat mapping from key sequences to actions
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct KeyBindings(pub HashMap<Vec<KeyEvent>, Action>);

impl KeyBindings {
    /// All key sequences bound to `action`, rendered and sorted
    pub fn keys_for(&self, action: Action) -> Vec<String> {
        let mut keys: Vec<String> = self
            .iter()
            .filter(|(_, bound)| **bound == action)
            .map(|(seq, _)| {
                seq.iter()
                    .map(key_event_to_string)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .collect();
        keys.sort_by_key(|k| (k.len(), k.clone()));
        keys
    }
}

impl<'de> Deserialize<'de> for KeyBindings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, Action>::deserialize(deserializer)?;

        let keybindings = parsed_map
            .into_iter()
            .map(|(key_str, action)| {
                parse_key_sequence(&key_str)
                    .map(|seq| (seq, action))
                    .map_err(de::Error::custom)
            })
            .collect::<Result<_, _>>()?;

        Ok(KeyBindings(keybindings))
    }
}

fn parse_key_event(raw: &str) -> Result<KeyEvent, String> {
    let lower = raw.to_ascii_lowercase();
    let (rest, modifiers) = extract_modifiers(&lower);
    // modifier prefixes are ascii, so offsets line up with the original
    let original = &raw[raw.len() - rest.len()..];
    parse_key_code_with_modifiers(rest, original, modifiers)
}

fn extract_modifiers(raw: &str) -> (&str, KeyModifiers) {
    let mut modifiers = KeyModifiers::empty();
    let mut current = raw;

    loop {
        if let Some(rest) = current.strip_prefix("ctrl-") {
            modifiers.insert(KeyModifiers::CONTROL);
            current = rest;
        } else if let Some(rest) = current.strip_prefix("alt-") {
            modifiers.insert(KeyModifiers::ALT);
            current = rest;
        } else if let Some(rest) = current.strip_prefix("shift-") {
            modifiers.insert(KeyModifiers::SHIFT);
            current = rest;
        } else {
            break;
        }
    }

    (current, modifiers)
}

fn parse_key_code_with_modifiers(
    lower: &str,
    original: &str,
    mut modifiers: KeyModifiers,
) -> Result<KeyEvent, String> {
    let code = match lower {
        "esc" => KeyCode::Esc,
        "enter" => KeyCode::Enter,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        "space" => KeyCode::Char(' '),
        "hyphen" | "minus" => KeyCode::Char('-'),
        "tab" if modifiers.contains(KeyModifiers::SHIFT) => KeyCode::BackTab,
        "tab" => KeyCode::Tab,
        "backtab" => {
            modifiers.insert(KeyModifiers::SHIFT);
            KeyCode::BackTab
        }
        f if f.len() > 1 && f.starts_with('f') => {
            let n = f[1..]
                .parse::<u8>()
                .map_err(|_| format!("Unable to parse `{original}`"))?;
            KeyCode::F(n)
        }
        _ => {
            let mut chars = original.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => {
                    let c = if modifiers.contains(KeyModifiers::SHIFT) {
                        c.to_ascii_uppercase()
                    } else {
                        c
                    };
                    KeyCode::Char(c)
                }
                _ => return Err(format!("Unable to parse `{original}`")),
            }
        }
    };
    Ok(KeyEvent::new(code, modifiers))
}

/// Renders a key event back into the `<ctrl-c>` notation used in config files
pub fn key_event_to_string(key_event: &KeyEvent) -> String {
    let code = match key_event.code {
        KeyCode::Backspace => "backspace".to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Left => "left".to_string(),
        KeyCode::Right => "right".to_string(),
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        KeyCode::Home => "home".to_string(),
        KeyCode::End => "end".to_string(),
        KeyCode::PageUp => "pageup".to_string(),
        KeyCode::PageDown => "pagedown".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::BackTab => "backtab".to_string(),
        KeyCode::Delete => "delete".to_string(),
        KeyCode::Insert => "insert".to_string(),
        KeyCode::F(n) => format!("f{n}"),
        KeyCode::Char(' ') => "space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Esc => "esc".to_string(),
        _ => "?".to_string(),
    };

    let mut modifiers = Vec::with_capacity(3);
    if key_event.modifiers.intersects(KeyModifiers::CONTROL) {
        modifiers.push("ctrl");
    }
    // shift is implied by uppercase chars and backtab
    let implied_shift = matches!(key_event.code, KeyCode::BackTab)
        || matches!(key_event.code, KeyCode::Char(c) if c.is_ascii_uppercase());
    if key_event.modifiers.intersects(KeyModifiers::SHIFT) && !implied_shift {
        modifiers.push("shift");
    }
    if key_event.modifiers.intersects(KeyModifiers::ALT) {
        modifiers.push("alt");
    }

    let mut key = modifiers.join("-");
    if !key.is_empty() {
        key.push('-');
    }
    key.push_str(&code);
    format!("<{key}>")
}

/// Parses `<ctrl-c>`, `<g><g>` or a bare `q` into a key sequence
pub fn parse_key_sequence(raw: &str) -> Result<Vec<KeyEvent>, String> {
    if raw.chars().filter(|c| *c == '>').count() != raw.chars().filter(|c| *c == '<').count() {
        return Err(format!("Unable to parse `{raw}`"));
    }
    let raw = raw.strip_prefix('<').unwrap_or(raw);
    let raw = raw.strip_suffix('>').unwrap_or(raw);
    if raw.is_empty() {
        return Err("Empty key sequence".to_string());
    }

    raw.split("><").map(parse_key_event).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    #[rstest]
    #[case("<q>", KeyEvent::new(KeyCode::Char('q'), KeyModifiers::empty()))]
    #[case("q", KeyEvent::new(KeyCode::Char('q'), KeyModifiers::empty()))]
    #[case("<ctrl-c>", KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))]
    #[case("<Ctrl-z>", KeyEvent::new(KeyCode::Char('z'), KeyModifiers::CONTROL))]
    #[case("<enter>", KeyEvent::new(KeyCode::Enter, KeyModifiers::empty()))]
    #[case("<esc>", KeyEvent::new(KeyCode::Esc, KeyModifiers::empty()))]
    #[case("<tab>", KeyEvent::new(KeyCode::Tab, KeyModifiers::empty()))]
    #[case("<shift-tab>", KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT))]
    #[case("<backtab>", KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT))]
    #[case("<shift-s>", KeyEvent::new(KeyCode::Char('S'), KeyModifiers::SHIFT))]
    #[case("<alt-1>", KeyEvent::new(KeyCode::Char('1'), KeyModifiers::ALT))]
    #[case("<f5>", KeyEvent::new(KeyCode::F(5), KeyModifiers::empty()))]
    #[case("<space>", KeyEvent::new(KeyCode::Char(' '), KeyModifiers::empty()))]
    #[case("<M>", KeyEvent::new(KeyCode::Char('M'), KeyModifiers::empty()))]
    fn test_parse_single_key(#[case] raw: &str, #[case] expected: KeyEvent) {
        assert_eq!(parse_key_sequence(raw), Ok(vec![expected]));
    }

    #[test]
    fn test_parse_multiple_keys() {
        assert_eq!(
            parse_key_sequence("<g><i>"),
            Ok(vec![
                KeyEvent::new(KeyCode::Char('g'), KeyModifiers::empty()),
                KeyEvent::new(KeyCode::Char('i'), KeyModifiers::empty()),
            ])
        );
    }

    #[rstest]
    #[case("<ctrl-c")]
    #[case("<unknown>")]
    #[case("<>")]
    #[case("<fx>")]
    fn test_parse_invalid(#[case] raw: &str) {
        assert!(parse_key_sequence(raw).is_err());
    }

    #[rstest]
    #[case("<q>")]
    #[case("<ctrl-c>")]
    #[case("<backtab>")]
    #[case("<enter>")]
    #[case("<alt-x>")]
    fn test_key_event_to_string_reparses(#[case] raw: &str) -> Result<(), String> {
        let seq = parse_key_sequence(raw)?;
        let rendered = key_event_to_string(&seq[0]);
        assert_eq!(parse_key_sequence(&rendered)?, seq);
        Ok(())
    }

    #[test]
    fn test_deserialize_keybindings() -> Result<(), json5::Error> {
        let kb: KeyBindings = json5::from_str(r#"{ "<q>": "Quit", "<ctrl-z>": "Suspend" }"#)?;
        assert_eq!(
            kb.get(&vec![KeyEvent::new(KeyCode::Char('q'), KeyModifiers::empty())]),
            Some(&Action::Quit)
        );
        assert_eq!(
            kb.get(&vec![KeyEvent::new(
                KeyCode::Char('z'),
                KeyModifiers::CONTROL
            )]),
            Some(&Action::Suspend)
        );
        Ok(())
    }

    #[test]
    fn test_deserialize_keybindings_rejects_bad_key() {
        let kb: Result<KeyBindings, _> = json5::from_str(r#"{ "<nope>": "Quit" }"#);
        assert!(kb.is_err());
    }

    #[test]
    fn test_keys_for() {
        let mut kb = KeyBindings::default();
        kb.insert(vec![KeyEvent::new(KeyCode::Char('q'), KeyModifiers::empty())], Action::Quit);
        kb.insert(
            vec![KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)],
            Action::Quit,
        );
        assert_eq!(kb.keys_for(Action::Quit), vec!["<q>", "<ctrl-c>"]);
        assert!(kb.keys_for(Action::Back).is_empty());
    }
}
